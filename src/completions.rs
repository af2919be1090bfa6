//! Shell completion script generation.

use clap::Command;
use clap_complete::{generate, Shell};
use std::io::Write;

/// Write a completion script for `shell` to `out`.
pub fn generate_completions(cmd: &mut Command, shell: Shell, out: &mut dyn Write) {
    let name = cmd.get_name().to_string();
    generate(shell, cmd, name, out);
}
