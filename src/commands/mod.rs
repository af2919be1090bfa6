//! One module per CLI action.
//!
//! Each action is a single run: at most one load, one mutation and one
//! persist of the data file.

pub mod add;
pub mod common;
pub mod fetch;
pub mod formatters;
pub mod list;
pub mod modify;
pub mod remove;
pub mod version;
