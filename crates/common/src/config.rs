use std::path::Path;

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// File layers relative to the config root; later ones win.
const CONFIG_LAYERS: [&str; 2] = ["config/default", "config/local"];

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub mapping: MappingConfig,
    #[serde(default)]
    pub engine: EngineConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from_path(".")
    }

    /// Reads `config/default` then `config/local` under `root` (either may be
    /// missing, any supported extension), then `SECTION__KEY` env vars.
    pub fn load_from_path<P: AsRef<Path>>(root: P) -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let root = root.as_ref();
        let builder = CONFIG_LAYERS
            .iter()
            .fold(Config::builder(), |builder, layer| {
                let name = root.join(layer);
                builder.add_source(File::with_name(&name.to_string_lossy()).required(false))
            });
        builder
            .add_source(Environment::default().separator("__"))
            .build()?
            .try_deserialize()
    }
}

/// Where the category/rule dataset comes from. The built-in dataset is used
/// when no path is configured.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MappingConfig {
    #[serde(default)]
    pub path: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EngineConfig {
    #[serde(default = "EngineConfig::default_top_n")]
    pub top_n: usize,
    /// Keywords shorter than this never match. 0 keeps every keyword.
    #[serde(default)]
    pub min_keyword_len: usize,
}

impl EngineConfig {
    const fn default_top_n() -> usize {
        5
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            top_n: Self::default_top_n(),
            min_keyword_len: 0,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "LoggingConfig::default_level")]
    pub level: String,
}

impl LoggingConfig {
    fn default_level() -> String {
        "info".to_string()
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: Self::default_level(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_files_fall_back_to_defaults() {
        let config = AppConfig::load_from_path("/nonexistent/adsight").expect("config");
        assert_eq!(config.engine, EngineConfig::default());
        assert_eq!(config.engine.top_n, 5);
        assert_eq!(config.engine.min_keyword_len, 0);
        assert!(config.mapping.path.is_none());
    }

    #[test]
    fn local_layer_overrides_default() {
        let root = std::env::temp_dir().join(format!("adsight-config-{}", std::process::id()));
        let dir = root.join("config");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("default.toml"), "[engine]\ntop_n = 3\nmin_keyword_len = 2\n")
            .unwrap();
        std::fs::write(dir.join("local.toml"), "[engine]\ntop_n = 7\n").unwrap();

        let config = AppConfig::load_from_path(&root).expect("config");
        std::fs::remove_dir_all(&root).ok();

        assert_eq!(config.engine.top_n, 7);
        assert_eq!(config.engine.min_keyword_len, 2);
    }
}
