//! Parsing and application of `field:value` modifications.

use std::fmt;
use std::str::FromStr;

use crate::error::StoreError;
use crate::models::memento::Memento;

/// The fields of a memento that `modify` may change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModifyField {
    Priority,
    Message,
}

impl fmt::Display for ModifyField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModifyField::Priority => write!(f, "priority"),
            ModifyField::Message => write!(f, "message"),
        }
    }
}

impl FromStr for ModifyField {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "priority" | "pri" | "p" => Ok(ModifyField::Priority),
            "message" | "msg" | "m" => Ok(ModifyField::Message),
            _ => Err(StoreError::invalid(format!(
                "You are trying to modify an invalid field: {s}. Use: priority, message"
            ))),
        }
    }
}

/// A validated change to a single field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Modification {
    Priority(i32),
    Message(String),
}

impl Modification {
    pub fn field(&self) -> ModifyField {
        match self {
            Modification::Priority(_) => ModifyField::Priority,
            Modification::Message(_) => ModifyField::Message,
        }
    }

    /// Apply this change to `memento`. The id and creation time are untouched.
    pub fn apply(&self, memento: &mut Memento) {
        match self {
            Modification::Priority(priority) => memento.priority = *priority,
            Modification::Message(message) => memento.message = message.clone(),
        }
    }
}

impl FromStr for Modification {
    type Err = StoreError;

    /// Parse `field:value`. Only the first colon separates; the rest of the
    /// argument is the value, so messages may contain colons.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (field, value) = s.split_once(':').ok_or_else(|| {
            StoreError::invalid("Your modification must be in the form of field:value")
        })?;

        match field.parse::<ModifyField>()? {
            ModifyField::Priority => value
                .trim()
                .parse::<i32>()
                .map(Modification::Priority)
                .map_err(|_| StoreError::invalid(format!("Not a number: {value}"))),
            ModifyField::Message => {
                if value.trim().is_empty() {
                    return Err(StoreError::invalid("Message cannot be empty"));
                }
                Ok(Modification::Message(value.to_string()))
            }
        }
    }
}
