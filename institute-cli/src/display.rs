//! Display Helpers
//!
//! Terminal output formatting and styling.

use std::time::Duration;

use chrono::DateTime;
use console::{style, StyledObject};
use indicatif::{ProgressBar, ProgressStyle};
use institute_core::{ContentSource, Enquiry, EnquiryStatus, Identified, SaveOutcome};
use serde_json::Value;
use tabled::settings::Style;
use tabled::{Table, Tabled};

/// Prints a success message.
pub fn success(msg: &str) {
    println!("{} {}", style("✓").green().bold(), msg);
}

/// Prints an error message.
pub fn error(msg: &str) {
    eprintln!("{} {}", style("✗").red().bold(), msg);
}

/// Prints a warning message.
pub fn warning(msg: &str) {
    println!("{} {}", style("⚠").yellow().bold(), msg);
}

/// Prints an info message.
pub fn info(msg: &str) {
    println!("{} {}", style("ℹ").blue().bold(), msg);
}

/// Styled label for where a document came from.
pub fn source_label(source: ContentSource) -> StyledObject<String> {
    let label = format!("[{}]", source);
    match source {
        ContentSource::Remote => style(label).green(),
        ContentSource::Cache => style(label).yellow(),
        ContentSource::Default => style(label).dim(),
    }
}

/// Reports a save outcome; returns false when nothing was persisted.
pub fn save_outcome(outcome: &SaveOutcome) -> bool {
    match outcome {
        SaveOutcome::Saved => success(&outcome.user_message()),
        SaveOutcome::SavedLocallyOnly { reason } => {
            warning(&outcome.user_message());
            info(&format!("Remote store: {}", reason));
        }
        SaveOutcome::Failed { .. } => error(&outcome.user_message()),
    }
    outcome.is_persisted()
}

/// Spinner shown while a section is being fetched.
pub fn spinner(msg: &str) -> ProgressBar {
    let bar = ProgressBar::new_spinner();
    bar.set_style(
        ProgressStyle::with_template("{spinner:.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    bar.set_message(msg.to_string());
    bar.enable_steady_tick(Duration::from_millis(100));
    bar
}

/// One line per list item: position, id and a short label.
pub fn display_items(items: &[Value]) {
    if items.is_empty() {
        println!("  {}", style("(no items)").dim());
        return;
    }

    for (index, item) in items.iter().enumerate() {
        let id = item
            .id()
            .map(|id| id.to_string())
            .unwrap_or_else(|| "?".to_string());
        println!(
            "  {:>3}. {} {}",
            index + 1,
            style(format!("#{}", id)).dim(),
            item_label(item)
        );
    }
}

/// The first text field that names an item.
fn item_label(item: &Value) -> String {
    ["title", "question", "name", "label", "platform"]
        .iter()
        .find_map(|key| item.get(*key).and_then(Value::as_str))
        .map(str::to_string)
        .unwrap_or_else(|| item.to_string())
}

#[derive(Tabled)]
struct EnquiryRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Received")]
    received: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Email")]
    email: String,
    #[tabled(rename = "Phone")]
    phone: String,
    #[tabled(rename = "Course")]
    course: String,
    #[tabled(rename = "Status")]
    status: EnquiryStatus,
}

impl From<&Enquiry> for EnquiryRow {
    fn from(e: &Enquiry) -> Self {
        Self {
            id: e.id,
            received: format_date(e.created_at),
            name: e.name.clone(),
            email: e.email.clone(),
            phone: e.phone.clone(),
            course: e.course.clone(),
            status: e.status,
        }
    }
}

/// Displays enquiries as a table.
pub fn display_enquiries(enquiries: &[Enquiry]) {
    let rows: Vec<EnquiryRow> = enquiries.iter().map(EnquiryRow::from).collect();
    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{}", table);
}

/// Displays a single enquiry with its message.
pub fn display_enquiry(enquiry: &Enquiry) {
    let width = 50;
    println!("{}", "─".repeat(width));
    println!(
        "  {} {}",
        style(&enquiry.name).bold().cyan(),
        style(format!("#{}", enquiry.id)).dim()
    );
    println!("{}", "─".repeat(width));
    println!("  {:8} {}", style("Email").dim(), enquiry.email);
    println!("  {:8} {}", style("Phone").dim(), enquiry.phone);
    if !enquiry.course.is_empty() {
        println!("  {:8} {}", style("Course").dim(), enquiry.course);
    }
    println!("  {:8} {}", style("Status").dim(), enquiry.status);
    if !enquiry.message.is_empty() {
        println!();
        println!("  {}", enquiry.message);
    }
    println!("{}", "─".repeat(width));
}

/// Formats unix seconds as `YYYY-MM-DD` (UTC).
pub fn format_date(secs: u64) -> String {
    i64::try_from(secs)
        .ok()
        .and_then(|secs| DateTime::from_timestamp(secs, 0))
        .map(|date| date.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| "?".to_string())
}
