use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::ffi::OsString;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "mementor")]
#[command(about = "Keep short reminders and show one at random", long_about = None)]
#[command(version)]
#[command(subcommand_help_heading = "Actions")]
pub struct Cli {
    /// Path to the mementos storage file [default: ~/.mementor/mementos.json]
    #[arg(short = 'f', long = "file", global = true, env = "MEMENTOR_FILE", value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Turn debugging on
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Display a random memento (default)
    Fetch {
        /// Favour mementos with a higher priority
        #[arg(short, long)]
        weighted: bool,
    },

    /// List all mementos
    #[command(visible_alias = "ls")]
    List,

    /// Add a new memento
    Add {
        /// Message text (remaining arguments are joined with spaces)
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        message: Vec<String>,
    },

    /// Remove a memento
    #[command(name = "rm", visible_alias = "del")]
    Remove {
        /// Memento ID
        #[arg(allow_hyphen_values = true)]
        id: String,
    },

    /// Modify an existing memento, e.g. `mementor mod 3 priority:2`
    #[command(visible_alias = "mod")]
    Modify {
        /// Memento ID
        #[arg(allow_hyphen_values = true)]
        id: String,

        /// Change in the form field:value (fields: priority, message)
        change: String,
    },

    /// Display the current version
    Version,

    /// Generate a shell completion script
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Accept the single-dash `-debug` spelling as `--debug`.
///
/// Only options before the action are rewritten, so message words such as
/// `mementor add try -debug` reach the action untouched.
pub fn normalize_args<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    let mut args = args.into_iter();
    let mut normalized: Vec<OsString> = args.next().into_iter().collect();

    while let Some(arg) = args.next() {
        if arg == "-debug" {
            normalized.push(OsString::from("--debug"));
            continue;
        }
        let takes_value = arg == "-f" || arg == "--file";
        let is_option = arg.to_str().is_some_and(|a| a.starts_with('-') && a != "--");
        normalized.push(arg);
        if takes_value {
            normalized.extend(args.next());
        } else if !is_option {
            break;
        }
    }
    normalized.extend(args);
    normalized
}
