//! Configuration file loading for critical-thinker
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. Environment: `CRITICAL_THINKER_<SECTION>__<KEY>`
//! 2. `--config <path>` specified file
//! 3. Project root: `./critical-thinker.toml` or `./.critical-thinker.toml`
//! 4. Global: `<config_dir>/critical-thinker/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    FileApiConfig, FileConfig, FileCredentialConfig, FileDocumentConfig, FileGenerationConfig,
    FileLoggingConfig, FileOutputConfig,
};
pub use loader::ConfigLoader;
