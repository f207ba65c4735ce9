//! Tests for section keys, typed views and previews

use institute_core::content::Section;
use institute_core::sections::{
    render_preview, ContactContent, FooterContent, Icon, TestimonialsContent,
};
use serde_json::json;

#[test]
fn test_section_keys() {
    let keys: Vec<&str> = Section::ALL.iter().map(|s| s.key()).collect();
    assert_eq!(
        keys,
        vec!["about", "courses", "whyus", "testimonials", "faq", "contact", "footer"]
    );
    assert_eq!(" FAQ ".parse::<Section>().unwrap(), Section::Faq);
    assert!("hero".parse::<Section>().is_err());
}

#[test]
fn test_list_policies() {
    let credentials = Section::About.item_list("credentials").unwrap();
    assert_eq!(credentials.policy.min_items, 1);
    assert!(!credentials.policy.ordered);

    assert!(Section::Faq.primary_list().unwrap().policy.ordered);
    assert_eq!(Section::Footer.item_lists().len(), 2);
    assert!(Section::Contact.primary_list().is_none());
}

#[test]
fn test_unknown_icons_map_to_placeholder() {
    assert_eq!(Icon::from_name("Medal"), Icon::Medal);
    assert_eq!(Icon::from_name("medal"), Icon::Placeholder);
    assert_eq!(Icon::from_name("Sparkles"), Icon::Placeholder);
    assert!(!Icon::Placeholder.is_known());
}

#[test]
fn test_footer_view_from_default() {
    let footer: FooterContent =
        serde_json::from_value(Section::Footer.default_document()).unwrap();

    assert_eq!(footer.company_name, "Institute of Aesthetic Sciences");
    assert_eq!(footer.social_links[0].icon, Icon::Facebook);
    assert_eq!(footer.quick_links[1].label, "About Us");
}

#[test]
fn test_partial_contact_view() {
    let contact: ContactContent =
        serde_json::from_value(json!({"phone": {"number1": "+91 1"}})).unwrap();

    assert_eq!(contact.phone.number1, "+91 1");
    assert!(contact.phone.title.is_empty());
    assert!(contact.address.line1.is_empty());
}

#[test]
fn test_view_serializes_camel_case() {
    let view: TestimonialsContent =
        serde_json::from_value(Section::Testimonials.default_document()).unwrap();
    let back = serde_json::to_value(&view).unwrap();

    assert_eq!(back, Section::Testimonials.default_document());
}

#[test]
fn test_previews_render_every_default() {
    for section in Section::ALL {
        let text = render_preview(section, &section.default_document());
        assert!(!text.trim().is_empty(), "{} preview", section);
    }
}

#[test]
fn test_contact_preview() {
    let text = render_preview(Section::Contact, &Section::Contact.default_document());
    assert!(text.contains("Office Hours: Mon-Fri: 9:00 AM - 6:00 PM"));
    assert!(text.contains("[Call Now] [Get Directions]"));
}
