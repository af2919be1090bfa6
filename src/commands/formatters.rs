//! Output formatting for the list command.

use colored::Colorize;

use crate::models::Memento;
use crate::store::Mementos;

const MINUTE: i64 = 60;
const HOUR: i64 = 60 * MINUTE;
const DAY: i64 = 24 * HOUR;
const MONTH: i64 = 30 * DAY;
const YEAR: i64 = 365 * DAY;

fn plural(n: i64, unit: &str) -> String {
    if n == 1 {
        format!("1 {unit} ago")
    } else {
        format!("{n} {unit}s ago")
    }
}

/// Human-readable age of a timestamp relative to `now`, both in epoch seconds.
pub fn format_age(created_at: i64, now: i64) -> String {
    let elapsed = now - created_at;
    match elapsed {
        e if e <= 0 => "just now".to_string(),
        e if e < MINUTE => plural(e, "second"),
        e if e < HOUR => plural(e / MINUTE, "minute"),
        e if e < DAY => plural(e / HOUR, "hour"),
        e if e < MONTH => plural(e / DAY, "day"),
        e if e < YEAR => plural(e / MONTH, "month"),
        e => plural(e / YEAR, "year"),
    }
}

fn format_row(memento: &Memento, now: i64) -> String {
    let row = format!(
        "{:>3}   {:<16}  {:>3}  {}",
        memento.id,
        format_age(memento.created_at, now),
        memento.priority,
        memento.message
    );
    match memento.priority {
        p if p >= 3 => row.red().to_string(),
        2 => row.yellow().to_string(),
        _ => row,
    }
}

/// Render the full listing table, including the trailing total.
pub fn render_list(mementos: &Mementos, now: i64) -> String {
    let header = format!("{:>3}   {:<16}  {:>3}  {}", "ID", "Age", "Pri", "Description");
    let mut output = format!("{}\n", header.underline().bold());
    for memento in mementos {
        output.push_str(&format_row(memento, now));
        output.push('\n');
    }
    let total = format!("{} mementos total.", mementos.len());
    output.push_str(&format!("\n{}", total.cyan().bold()));
    output
}
