//! Enquiry Commands
//!
//! Browse, triage and export the enquiries inbox.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use dialoguer::Confirm;
use institute_core::{EnquiryQuery, EnquirySort, EnquiryStatus, NewEnquiry, SortOrder};

use crate::config::CliConfig;
use crate::display;

fn query(status: Option<EnquiryStatus>, search: Option<String>) -> EnquiryQuery {
    let mut query = EnquiryQuery::default();
    if let Some(status) = status {
        query = query.with_status(status);
    }
    if let Some(search) = search {
        query = query.with_search(search);
    }
    query
}

/// List enquiries.
pub fn list(
    config: &CliConfig,
    status: Option<EnquiryStatus>,
    search: Option<String>,
    sort: EnquirySort,
    ascending: bool,
) -> Result<()> {
    let storage = config.open_storage()?;
    let order = if ascending {
        SortOrder::Asc
    } else {
        SortOrder::Desc
    };
    let enquiries = storage.list_enquiries(&query(status, search).sorted_by(sort, order))?;

    if enquiries.is_empty() {
        display::info("No enquiries found.");
        return Ok(());
    }

    display::display_enquiries(&enquiries);
    println!("{} enquiries", enquiries.len());
    Ok(())
}

/// Record an enquiry by hand (phone or walk-in).
pub fn add(config: &CliConfig, enquiry: NewEnquiry) -> Result<()> {
    let storage = config.open_storage()?;
    let stored = storage.submit_enquiry(&enquiry)?;

    display::success(&format!("Recorded enquiry #{}", stored.id));
    display::display_enquiry(&stored);
    Ok(())
}

/// Change an enquiry's status.
pub fn set_status(config: &CliConfig, id: i64, status: EnquiryStatus) -> Result<()> {
    let storage = config.open_storage()?;
    if !storage.update_enquiry_status(id, status)? {
        bail!("Enquiry #{} not found", id);
    }

    display::success(&format!("Enquiry #{} marked {}", id, status));
    Ok(())
}

/// Delete an enquiry, asking first unless `yes` is set.
pub fn delete(config: &CliConfig, id: i64, yes: bool) -> Result<()> {
    let storage = config.open_storage()?;
    let Some(enquiry) = storage.get_enquiry(id)? else {
        bail!("Enquiry #{} not found", id);
    };

    if !yes {
        display::display_enquiry(&enquiry);
        let confirm = Confirm::new()
            .with_prompt("Delete this enquiry?")
            .default(false)
            .interact()?;

        if !confirm {
            display::info("Deletion cancelled.");
            return Ok(());
        }
    }

    storage.delete_enquiry(id)?;
    display::success(&format!("Deleted enquiry #{}", id));
    Ok(())
}

/// Export enquiries as CSV to a file or stdout.
pub fn export(
    config: &CliConfig,
    output: Option<&Path>,
    status: Option<EnquiryStatus>,
    search: Option<String>,
) -> Result<()> {
    let storage = config.open_storage()?;
    let filter = query(status, search);
    let csv = storage.export_enquiries_csv(&filter)?;

    match output {
        Some(path) => {
            fs::write(path, &csv)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            let count = storage.list_enquiries(&filter)?.len();
            display::success(&format!("Exported {} enquiries to {}", count, path.display()));
        }
        None => print!("{}", csv),
    }
    Ok(())
}
