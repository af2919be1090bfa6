//! `mementor add <message...>`

use anyhow::{Context, Result};
use colored::Colorize;

use crate::commands::common::now_timestamp;
use crate::fs::StoreFile;

/// Append a memento built from `words` joined with spaces. Returns its id.
pub fn add(store: &StoreFile, words: &[String]) -> Result<u64> {
    let message = words.join(" ");
    let mut mementos = store.load().context("Failed to load mementos")?;
    let id = mementos.add(&message, now_timestamp())?.id;
    store
        .persist(&mementos)
        .context("Failed to save mementos")?;
    Ok(id)
}

pub fn execute(store: &StoreFile, words: Vec<String>) -> Result<()> {
    let id = add(store, &words)?;
    println!("{} Added memento {}", "✓".green(), id.to_string().cyan());
    Ok(())
}
