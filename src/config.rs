//! Runtime configuration: where the mementos file lives and how chatty to be.

use std::path::PathBuf;

use crate::error::{StoreError, StoreResult};

/// Directory under the home directory that holds the data file.
pub const DATA_DIR_NAME: &str = ".mementor";

/// Default data file name.
pub const DATA_FILE_NAME: &str = "mementos.json";

/// Environment variable that overrides the data file location.
pub const DATA_FILE_ENV: &str = "MEMENTOR_FILE";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub data_file: PathBuf,
    pub debug: bool,
}

impl Config {
    /// Resolve the configuration from an explicit path (flag or env var,
    /// already merged by the argument parser) falling back to the default
    /// location under the home directory.
    pub fn resolve(data_file: Option<PathBuf>, debug: bool) -> StoreResult<Self> {
        let data_file = match data_file {
            Some(path) => path,
            None => default_data_file()?,
        };
        Ok(Self { data_file, debug })
    }
}

/// `$HOME/.mementor/mementos.json`
pub fn default_data_file() -> StoreResult<PathBuf> {
    dirs::home_dir()
        .map(|home| home.join(DATA_DIR_NAME).join(DATA_FILE_NAME))
        .ok_or(StoreError::HomeDirUnavailable)
}
