//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};

/// Application directory name under the platform config/data dirs.
pub const APP_DIR: &str = "critical-thinker";

/// Environment variable prefix; nested keys are split on `__`.
pub const ENV_PREFIX: &str = "CRITICAL_THINKER_";

const PROJECT_FILES: [&str; 2] = ["critical-thinker.toml", ".critical-thinker.toml"];

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. `CRITICAL_THINKER_*` environment variables
    /// 2. Explicit config path (if provided)
    /// 3. Project root: `./critical-thinker.toml` or `./.critical-thinker.toml`
    /// 4. Global: `<config_dir>/critical-thinker/config.toml`
    /// 5. Default values
    pub fn load(config_path: Option<&PathBuf>) -> Result<FileConfig, Box<figment::Error>> {
        let global = Self::global_config_path().filter(|p| p.exists());
        let project = Self::project_config_path();
        Self::figment(global.as_deref(), project.as_deref(), config_path.map(|p| p.as_path()))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
            .map_err(Box::new)
    }

    /// Merge defaults and the given files, lowest priority first.
    pub fn figment(global: Option<&Path>, project: Option<&Path>, explicit: Option<&Path>) -> Figment {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        if let Some(path) = global {
            figment = figment.merge(Toml::file(path));
        }
        if let Some(path) = project {
            figment = figment.merge(Toml::file(path));
        }
        // Explicit path is highest priority among files
        if let Some(path) = explicit {
            figment = figment.merge(Toml::file(path));
        }

        figment
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    /// Get the global config file path
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(APP_DIR).join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_FILES
            .into_iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Default location of the credential storage file
    pub fn default_storage_path() -> Option<PathBuf> {
        dirs::data_dir().map(|d| d.join(APP_DIR).join("storage.json"))
    }

    /// Print the config file locations being used (for debugging)
    pub fn print_config_sources(explicit: Option<&PathBuf>) {
        println!("Configuration sources (in priority order):");
        println!("  [ENV  ] {}<SECTION>__<KEY>", ENV_PREFIX);

        if let Some(path) = explicit {
            let mark = if path.exists() { "FOUND" } else { "MISS " };
            println!("  [{}] Explicit: {}", mark, path.display());
        }

        if let Some(path) = Self::project_config_path() {
            println!("  [FOUND] Project: {}", path.display());
        } else {
            println!("  [     ] Project: ./{} or ./{}", PROJECT_FILES[0], PROJECT_FILES[1]);
        }

        if let Some(path) = Self::global_config_path() {
            if path.exists() {
                println!("  [FOUND] Global:  {}", path.display());
            } else {
                println!("  [     ] Global:  {}", path.display());
            }
        }

        println!("  [     ] Default: built-in defaults");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn toml_file(contents: &str) -> NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_defaults() {
        let config = ConfigLoader::load_defaults();
        assert_eq!(config.api.model, "deepseek-chat");
        assert_eq!(config.generation.max_regenerations, 3);
    }

    #[test]
    fn test_global_config_path_returns_some() {
        let path = ConfigLoader::global_config_path().unwrap();
        assert!(path.to_string_lossy().contains(APP_DIR));
        assert!(path.ends_with("config.toml"));
    }

    #[test]
    fn test_files_override_defaults_in_priority_order() {
        let global = toml_file(
            r#"
[api]
model = "global-model"
timeout_seconds = 30

[generation]
max_input_chars = 2000
"#,
        );
        let project = toml_file(
            r#"
[api]
model = "project-model"
"#,
        );
        let explicit = toml_file(
            r#"
[generation]
max_input_chars = 1500
"#,
        );

        let config: FileConfig =
            ConfigLoader::figment(Some(global.path()), Some(project.path()), Some(explicit.path()))
                .extract()
                .unwrap();

        assert_eq!(config.api.model, "project-model");
        assert_eq!(config.api.timeout_seconds, Some(30));
        assert_eq!(config.generation.max_input_chars, 1500);
        // Untouched values keep their defaults
        assert_eq!(config.api.endpoint, "https://api.deepseek.com/v1");
        assert_eq!(config.generation.max_tokens, 1024);
    }

    #[test]
    fn test_missing_file_is_ignored() {
        let config: FileConfig =
            ConfigLoader::figment(None, None, Some(Path::new("/nonexistent/critical.toml")))
                .extract()
                .unwrap();
        assert_eq!(config.api.model, "deepseek-chat");
    }

    #[test]
    fn test_invalid_type_is_an_error() {
        let bad = toml_file("[generation]\nmax_tokens = \"lots\"\n");
        let result: Result<FileConfig, _> =
            ConfigLoader::figment(None, None, Some(bad.path())).extract();
        assert!(result.is_err());
    }
}
