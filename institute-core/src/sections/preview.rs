//! Plain-text section previews

use std::fmt::Write;

use serde_json::Value;

use super::{
    view_or_default, AboutContent, ContactContent, CoursesContent, FaqContent, FooterContent,
    TestimonialsContent, WhyUsContent,
};
use crate::content::Section;

/// Render a section document as plain text
///
/// Fields that do not fit the section's view render from the bundled
/// default document.
pub fn render_preview(section: Section, document: &Value) -> String {
    let default = section.default_document();
    let mut out = String::new();
    // Writing to a String cannot fail
    let _ = match section {
        Section::About => about(&mut out, &view_or_default(document, &default)),
        Section::WhyUs => why_us(&mut out, &view_or_default(document, &default)),
        Section::Faq => faq(&mut out, &view_or_default(document, &default)),
        Section::Footer => footer(&mut out, &view_or_default(document, &default)),
        Section::Contact => contact(&mut out, &view_or_default(document, &default)),
        Section::Courses => courses(&mut out, &view_or_default(document, &default)),
        Section::Testimonials => testimonials(&mut out, &view_or_default(document, &default)),
    };
    out
}

fn heading(out: &mut String, title: &str, subtitle: &str) -> std::fmt::Result {
    writeln!(out, "{}", title)?;
    writeln!(out, "{}", "=".repeat(title.chars().count()))?;
    if !subtitle.is_empty() {
        writeln!(out, "{}", subtitle)?;
    }
    writeln!(out)
}

fn about(out: &mut String, c: &AboutContent) -> std::fmt::Result {
    heading(out, &c.title, &c.subtitle)?;
    for credential in &c.credentials {
        writeln!(out, "  [{}] {}", credential.icon, credential.title)?;
        writeln!(out, "      {}", credential.description)?;
    }
    Ok(())
}

fn why_us(out: &mut String, c: &WhyUsContent) -> std::fmt::Result {
    heading(out, &c.title, &c.subtitle)?;
    for feature in &c.features {
        writeln!(out, "  [{}] {}", feature.icon, feature.title)?;
        writeln!(out, "      {}", feature.description)?;
    }
    if !c.footer_text.is_empty() {
        writeln!(out)?;
        writeln!(out, "{}", c.footer_text)?;
    }
    Ok(())
}

fn faq(out: &mut String, c: &FaqContent) -> std::fmt::Result {
    heading(out, &c.title, &c.subtitle)?;
    for (n, item) in c.faqs.iter().enumerate() {
        writeln!(out, "{}. {}", n + 1, item.question)?;
        writeln!(out, "   {}", item.answer)?;
    }
    Ok(())
}

fn footer(out: &mut String, c: &FooterContent) -> std::fmt::Result {
    heading(out, &c.company_name, &c.tagline)?;
    writeln!(out, "{}", c.address)?;
    writeln!(out, "{} | {}", c.email, c.phone)?;
    for link in &c.quick_links {
        writeln!(out, "  > {} ({})", link.label, link.url)?;
    }
    for link in &c.social_links {
        writeln!(out, "  [{}] {}", link.icon, link.url)?;
    }
    writeln!(out, "{}", c.copyright_text)
}

fn contact(out: &mut String, c: &ContactContent) -> std::fmt::Result {
    heading(out, &c.title, &c.subtitle)?;
    writeln!(out, "{}: {}, {}", c.address.title, c.address.line1, c.address.line2)?;
    writeln!(out, "{}: {}, {}", c.phone.title, c.phone.number1, c.phone.number2)?;
    writeln!(out, "{}: {}, {}", c.email.title, c.email.email1, c.email.email2)?;
    writeln!(out, "{}: {}; {}", c.hours.title, c.hours.line1, c.hours.line2)?;
    writeln!(
        out,
        "[{}] [{}]",
        c.buttons.call_button, c.buttons.directions_button
    )
}

fn courses(out: &mut String, c: &CoursesContent) -> std::fmt::Result {
    heading(out, &c.title, &c.subtitle)?;
    for course in &c.courses {
        writeln!(out, "* {}", course.title)?;
        writeln!(
            out,
            "  {} | {} | {} certification | batch of {}",
            course.duration, course.mode, course.certification, course.batch_size
        )?;
        writeln!(out, "  {}", course.description)?;
        if !course.start_date.is_empty() {
            writeln!(out, "  Starts: {}", course.start_date)?;
        }
    }
    Ok(())
}

fn testimonials(out: &mut String, c: &TestimonialsContent) -> std::fmt::Result {
    heading(out, &c.title, &c.subtitle)?;
    for t in &c.testimonials {
        let filled = usize::from(t.rating.min(5));
        writeln!(out, "{}{}", "★".repeat(filled), "☆".repeat(5 - filled))?;
        writeln!(out, "\"{}\"", t.quote)?;
        writeln!(out, "  - {}, {} ({})", t.name, t.position, t.location)?;
        if !t.course.is_empty() {
            writeln!(out, "    {}", t.course)?;
        }
    }
    Ok(())
}
