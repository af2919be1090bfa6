//! `mementor modify <id> <field:value>`
//!
//! Fields are `priority` (integer) and `message` (everything after the first
//! colon, verbatim).

use anyhow::{Context, Result};
use colored::Colorize;

use crate::commands::common::parse_id;
use crate::fs::StoreFile;
use crate::models::Modification;

/// Apply one field change. Nothing is written if the id or change is invalid.
pub fn modify(store: &StoreFile, raw_id: &str, change: &str) -> Result<u64> {
    let id = parse_id(raw_id)?;
    let modification: Modification = change.parse()?;
    let mut mementos = store.load().context("Failed to load mementos")?;
    mementos.modify(id, &modification)?;
    store
        .persist(&mementos)
        .context("Failed to save mementos")?;
    Ok(id)
}

pub fn execute(store: &StoreFile, raw_id: String, change: String) -> Result<()> {
    let id = modify(store, &raw_id, &change)?;
    println!("{} Updated memento {}", "✓".green(), id.to_string().cyan());
    Ok(())
}
