//! CLI configuration
//!
//! Layered from defaults, an optional TOML file and `OWM_ICONS_*`
//! environment variables (nested keys use `__`, e.g.
//! `OWM_ICONS_FETCHER__TIMEOUT_SECS=10`).

use std::path::{Path, PathBuf};

use integration_weather::IconFetcherConfig;
use serde::{Deserialize, Serialize};

/// Name of the optional config file looked up in the working directory
const DEFAULT_CONFIG_FILE: &str = "owm-icons";

/// Environment variable prefix
const ENV_PREFIX: &str = "OWM_ICONS";

/// Settings for the `owm-icons` binary
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CliConfig {
    /// Directory icons are downloaded into when `--dest` is not given
    #[serde(default = "default_icon_dir")]
    pub icon_dir: PathBuf,

    /// Icon fetcher settings
    #[serde(default)]
    pub fetcher: IconFetcherConfig,
}

fn default_icon_dir() -> PathBuf {
    PathBuf::from("icons")
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            icon_dir: default_icon_dir(),
            fetcher: IconFetcherConfig::default(),
        }
    }
}

impl CliConfig {
    /// Load configuration from an explicit file or `owm-icons.toml`, then the environment
    ///
    /// An explicit path must exist; the default file is optional.
    pub fn load(path: Option<&Path>) -> Result<Self, config::ConfigError> {
        let file = match path {
            Some(path) => config::File::from(path).required(true),
            None => config::File::with_name(DEFAULT_CONFIG_FILE).required(false),
        };

        let builder = config::Config::builder().add_source(file).add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build()?;
        config.try_deserialize()
    }
}
