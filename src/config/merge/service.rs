//! MergeService: orchestrates sources and deserializes to FileCrcConfig.

use super::builder_with_defaults;
use crate::config::sources::{environment, global_file};
use crate::config::FileCrcConfig;
use config::{ConfigError, File};
use std::path::Path;

/// Merge service for config composition.
pub struct MergeService;

impl MergeService {
    /// Precedence: defaults -> global file -> environment.
    pub fn load() -> Result<FileCrcConfig, ConfigError> {
        let builder = builder_with_defaults()?;
        let builder = global_file::add_to_builder(builder)?;
        let builder = environment::add_to_builder(builder)?;
        builder.build()?.try_deserialize()
    }

    /// Precedence: defaults -> global file -> `path` -> environment.
    pub fn load_from_file(path: &Path) -> Result<FileCrcConfig, ConfigError> {
        let builder = builder_with_defaults()?;
        let builder = global_file::add_to_builder(builder)?;
        let builder = builder.add_source(File::from(path).required(true));
        let builder = environment::add_to_builder(builder)?;
        builder.build()?.try_deserialize()
    }
}
