//! Environment variable source: FILECRC prefix with __ separator

use config::builder::DefaultState;
use config::{ConfigBuilder, ConfigError, Environment};

/// Add environment variable overlay to builder.
/// `FILECRC__FILE__KIND=text` sets `file.kind`.
pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    Ok(builder.add_source(
        Environment::with_prefix("FILECRC")
            .separator("__")
            .try_parsing(true),
    ))
}
