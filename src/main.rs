mod cli;

use clap::Parser;
use colored::Colorize;
use mementor::logging;

use cli::dispatch::dispatch;
use cli::types::{normalize_args, Cli};

fn main() {
    let cli = Cli::parse_from(normalize_args(std::env::args_os()));
    logging::init(cli.debug);

    if let Err(e) = dispatch(cli) {
        eprintln!("{} {e:#}", "✗".red());
        std::process::exit(1);
    }
}
