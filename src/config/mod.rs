//! Configuration
//!
//! Layered configuration built with the `config` crate. Sources, lowest to
//! highest precedence: built-in defaults, the global XDG config file, an
//! explicit config file, then `FILECRC__*` environment variables.

mod facade;
pub mod merge;
pub mod paths;
pub mod sources;

pub use facade::ConfigLoader;

use crate::file::FileType;
use crate::logging::LoggingConfig;
use serde::{Deserialize, Serialize};

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FileCrcConfig {
    #[serde(default)]
    pub logging: LoggingConfig,

    #[serde(default)]
    pub file: FileDefaults,
}

/// Defaults applied to newly created files.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FileDefaults {
    /// Kind assigned when the caller does not choose one
    #[serde(default)]
    pub kind: Option<FileType>,
}
