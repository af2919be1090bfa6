pub mod commands;
pub mod completions;
pub mod config;
pub mod error;
pub mod fs;
pub mod logging;
pub mod models;
pub mod store;

pub use error::{StoreError, StoreResult};
pub use fs::StoreFile;
pub use models::{Memento, Modification, ModifyField};
pub use store::Mementos;
