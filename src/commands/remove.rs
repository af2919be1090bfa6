//! `mementor rm <id>`

use anyhow::{Context, Result};
use colored::Colorize;

use crate::commands::common::parse_id;
use crate::fs::StoreFile;

/// Delete the memento with the given id. A missing id leaves the file untouched.
pub fn remove(store: &StoreFile, raw_id: &str) -> Result<u64> {
    let id = parse_id(raw_id)?;
    let mut mementos = store.load().context("Failed to load mementos")?;
    mementos.remove(id)?;
    store
        .persist(&mementos)
        .context("Failed to save mementos")?;
    Ok(id)
}

pub fn execute(store: &StoreFile, raw_id: String) -> Result<()> {
    let id = remove(store, &raw_id)?;
    println!("{} Removed memento {}", "✓".green(), id.to_string().cyan());
    Ok(())
}
