//! Section Content Commands
//!
//! Show, preview and save whole section documents.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use console::style;
use institute_core::{render_preview, ContentManager, EditorSession, Resolved, Section};
use serde_json::Value;

use crate::config::CliConfig;
use crate::display;

/// Resolves a section, with a spinner while the remote store is consulted.
async fn resolve(manager: &ContentManager, section: Section) -> Resolved {
    let spinner = manager
        .has_remote()
        .then(|| display::spinner(&format!("Loading {}...", section.label())));
    let resolved = manager.resolver().resolve_detailed(section, None).await;
    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }
    resolved
}

/// Print one section document.
pub async fn show(config: &CliConfig, section: Section, raw: bool) -> Result<()> {
    let manager = config.content_manager()?;
    let resolved = resolve(&manager, section).await;

    if raw {
        println!("{}", serde_json::to_string(&resolved.document)?);
        return Ok(());
    }

    println!(
        "{} {}",
        style(section.label()).bold().cyan(),
        display::source_label(resolved.source)
    );
    println!("{}", serde_json::to_string_pretty(&resolved.document)?);
    Ok(())
}

/// One line per section with its source and list sizes.
pub async fn summary(config: &CliConfig) -> Result<()> {
    let manager = config.content_manager()?;
    let spinner = manager
        .has_remote()
        .then(|| display::spinner("Loading sections..."));
    let all = manager.resolve_all().await;
    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }

    println!("Sections:");
    println!();
    for resolved in all {
        let lists: Vec<String> = resolved
            .section
            .item_lists()
            .iter()
            .map(|spec| {
                let count = resolved
                    .document
                    .get(spec.field)
                    .and_then(Value::as_array)
                    .map_or(0, Vec::len);
                format!("{} {}", count, spec.field)
            })
            .collect();

        println!(
            "  {:14} {:10} {}",
            resolved.section.key(),
            display::source_label(resolved.source).to_string(),
            style(lists.join(", ")).dim()
        );
    }

    if !manager.has_remote() {
        println!();
        display::info("Remote store disabled; showing cached and bundled content.");
    }
    Ok(())
}

/// Render a section as plain text.
pub async fn preview(config: &CliConfig, section: Section) -> Result<()> {
    let manager = config.content_manager()?;
    let resolved = resolve(&manager, section).await;
    print!("{}", render_preview(section, &resolved.document));
    Ok(())
}

/// Replace a section document with the contents of a JSON file.
pub async fn save(config: &CliConfig, section: Section, file: &Path) -> Result<()> {
    let data =
        fs::read_to_string(file).with_context(|| format!("Failed to read {}", file.display()))?;

    let manager = config.content_manager()?;
    let outcome = manager
        .import(section, &data)
        .await
        .with_context(|| format!("{} was not saved", file.display()))?;
    if !display::save_outcome(&outcome) {
        bail!("{} was not saved", section.label());
    }
    Ok(())
}

/// Set one field and save.
pub async fn set(config: &CliConfig, section: Section, path: &str, value: &str) -> Result<()> {
    // Bare words are taken as strings so `set about title Hello` works
    let value: Value =
        serde_json::from_str(value).unwrap_or_else(|_| Value::String(value.to_string()));

    let manager = config.content_manager()?;
    let mut session = EditorSession::open(&manager, section).await;
    session.set_field(path, value)?;

    let outcome = session.save().await?;
    if !display::save_outcome(&outcome) {
        bail!("{} was not saved", section.label());
    }
    Ok(())
}

/// Drop cached copies so the next read goes remote → default.
pub fn clear_cache(config: &CliConfig, section: Option<Section>) -> Result<()> {
    let manager = config.content_manager()?;
    match section {
        Some(section) => {
            manager.clear_cached(section)?;
            display::success(&format!("Cleared cached {} content", section.label()));
        }
        None => {
            for section in Section::ALL {
                manager.clear_cached(section)?;
            }
            display::success("Cleared all cached content");
        }
    }
    Ok(())
}
