use serde::{Deserialize, Serialize};

/// Priority assigned to newly added mementos.
pub const DEFAULT_PRIORITY: i32 = 1;

fn default_priority() -> i32 {
    DEFAULT_PRIORITY
}

/// A single stored reminder.
///
/// The aliases accept files written by the original Go tool, which used
/// `Id`, `Msg`, `Time` and `Priority` as keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Memento {
    #[serde(alias = "Id")]
    pub id: u64,
    #[serde(alias = "Msg")]
    pub message: String,
    /// Seconds since the Unix epoch. Never changed after creation.
    #[serde(rename = "createdAt", alias = "Time")]
    pub created_at: i64,
    #[serde(default = "default_priority", alias = "Priority")]
    pub priority: i32,
}

impl Memento {
    pub fn new(id: u64, message: String, created_at: i64) -> Self {
        Self {
            id,
            message,
            created_at,
            priority: DEFAULT_PRIORITY,
        }
    }
}
