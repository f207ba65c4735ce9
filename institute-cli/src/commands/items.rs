//! Item List Commands
//!
//! Add, update, remove and reorder `id`-keyed items inside a section.
//! Ids are numbers or slugs (`master-program`).
//! Each command opens an editor session, applies one edit and saves.

use anyhow::{anyhow, bail, Context, Result};
use institute_core::{Direction, EditorSession, ItemId, Section};
use serde_json::Value;

use crate::config::CliConfig;
use crate::display;

async fn open(config: &CliConfig, section: Section) -> Result<EditorSession> {
    let manager = config.content_manager()?;
    Ok(EditorSession::open(&manager, section).await)
}

async fn commit(session: &EditorSession) -> Result<()> {
    let outcome = session.save().await?;
    if !display::save_outcome(&outcome) {
        bail!("{} was not saved", session.section().label());
    }
    Ok(())
}

fn parse_item(item: &str) -> Result<Value> {
    serde_json::from_str(item).context("Item must be a JSON object")
}

/// List the items of a section list.
pub async fn list(config: &CliConfig, section: Section, list: Option<&str>) -> Result<()> {
    let session = open(config, section).await?;
    let items = session.items(list)?;

    println!(
        "{} {}",
        section.label(),
        display::source_label(session.source())
    );
    display::display_items(items);
    Ok(())
}

/// Append an item.
pub async fn add(config: &CliConfig, section: Section, list: Option<&str>, item: &str) -> Result<()> {
    let item = parse_item(item)?;
    let mut session = open(config, section).await?;
    let id = session.add_item(list, item)?;

    display::info(&format!("Added item #{}", id));
    commit(&session).await
}

/// Replace an item, keeping its id.
pub async fn update(
    config: &CliConfig,
    section: Section,
    list: Option<&str>,
    id: &ItemId,
    item: &str,
) -> Result<()> {
    let item = parse_item(item)?;
    let mut session = open(config, section).await?;
    session.update_item(list, id, item)?;

    display::info(&format!("Updated item #{}", id));
    commit(&session).await
}

/// Remove an item.
pub async fn remove(
    config: &CliConfig,
    section: Section,
    list: Option<&str>,
    id: &ItemId,
) -> Result<()> {
    let mut session = open(config, section).await?;
    session.remove_item(list, id)?;

    display::info(&format!("Removed item #{}", id));
    commit(&session).await
}

/// Move the item at a 1-based position one step.
pub async fn move_item(
    config: &CliConfig,
    section: Section,
    list: Option<&str>,
    position: usize,
    direction: Direction,
) -> Result<()> {
    let index = position
        .checked_sub(1)
        .ok_or_else(|| anyhow!("Positions start at 1"))?;

    let mut session = open(config, section).await?;
    let target = session.move_item(list, index, direction)?;

    display::info(&format!("Moved item to position {}", target + 1));
    commit(&session).await
}
