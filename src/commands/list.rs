//! `mementor list` - show every memento with its age and priority.

use anyhow::{Context, Result};

use crate::commands::common::now_timestamp;
use crate::commands::formatters::render_list;
use crate::fs::StoreFile;

pub fn execute(store: &StoreFile) -> Result<()> {
    let mementos = store.load().context("Failed to load mementos")?;
    println!("{}", render_list(&mementos, now_timestamp()));
    Ok(())
}
