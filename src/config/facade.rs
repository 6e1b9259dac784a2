//! ConfigLoader facade delegating to the merge service.

use super::merge::service::MergeService;
use super::FileCrcConfig;
use crate::error::ApiError;
use std::path::Path;

/// Configuration loader facade.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from the global file and environment.
    pub fn load() -> Result<FileCrcConfig, ApiError> {
        Ok(MergeService::load()?)
    }

    /// Load configuration with `path` layered over the global file. The file must exist.
    pub fn load_from_file(path: &Path) -> Result<FileCrcConfig, ApiError> {
        if !path.is_file() {
            return Err(ApiError::ConfigError(format!(
                "Config file not found: {}",
                path.display()
            )));
        }
        Ok(MergeService::load_from_file(path)?)
    }
}
