use anyhow::{Context, Result};
use clap::CommandFactory;
use colored::Colorize;
use mementor::commands::{add, fetch, list, modify, remove, version};
use mementor::completions::generate_completions;
use mementor::config::Config;
use mementor::fs::StoreFile;
use std::io;
use std::path::PathBuf;

use super::types::{Cli, Commands};

/// Resolve the data file and create it on first use.
fn open_store(file: Option<PathBuf>, debug: bool) -> Result<StoreFile> {
    let config = Config::resolve(file, debug)?;
    let store = StoreFile::new(config.data_file);
    let created = store
        .ensure_exists()
        .with_context(|| format!("Failed to create data file {}", store.path().display()))?;
    if created {
        eprintln!("{} {} was created", "ℹ".blue(), store.path().display());
    }
    Ok(store)
}

pub fn dispatch(cli: Cli) -> Result<()> {
    let Cli {
        file,
        debug,
        command,
    } = cli;

    match command.unwrap_or(Commands::Fetch { weighted: false }) {
        Commands::Fetch { weighted } => fetch::execute(&open_store(file, debug)?, weighted),
        Commands::List => list::execute(&open_store(file, debug)?),
        Commands::Add { message } => add::execute(&open_store(file, debug)?, message),
        Commands::Remove { id } => remove::execute(&open_store(file, debug)?, id),
        Commands::Modify { id, change } => {
            modify::execute(&open_store(file, debug)?, id, change)
        }
        Commands::Version => {
            version::execute();
            Ok(())
        }
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            generate_completions(&mut cmd, shell, &mut io::stdout());
            Ok(())
        }
    }
}
