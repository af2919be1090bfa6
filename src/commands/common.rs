//! Helpers shared by the command implementations.

use chrono::Utc;

use crate::error::{StoreError, StoreResult};

/// Parse a memento id given on the command line.
pub fn parse_id(raw: &str) -> StoreResult<u64> {
    raw.trim()
        .parse::<u64>()
        .map_err(|_| StoreError::invalid(format!("Invalid memento id: {raw}")))
}

/// Current time in whole seconds since the Unix epoch.
pub fn now_timestamp() -> i64 {
    Utc::now().timestamp()
}
