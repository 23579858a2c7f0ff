//! Icon fetcher configuration

use serde::{Deserialize, Serialize};

/// Configuration for the OpenWeatherMap icon fetcher
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IconFetcherConfig {
    /// Base URL of the icon host (default: <https://openweathermap.org>)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Path below the base URL holding the icons (default: `img/w`)
    #[serde(default = "default_icon_path")]
    pub icon_path: String,

    /// Request timeout in seconds; `None` waits for the transport to finish
    #[serde(default)]
    pub timeout_secs: Option<u64>,

    /// User-Agent header sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Leave truncated files on disk when a download fails
    #[serde(default)]
    pub keep_partial_files: bool,

    /// Maximum parallel downloads during a prefetch
    #[serde(default = "default_max_concurrent_downloads")]
    pub max_concurrent_downloads: usize,
}

fn default_base_url() -> String {
    "https://openweathermap.org".to_string()
}

fn default_icon_path() -> String {
    "img/w".to_string()
}

fn default_user_agent() -> String {
    format!("owm-icons/{}", env!("CARGO_PKG_VERSION"))
}

const fn default_max_concurrent_downloads() -> usize {
    4
}

impl Default for IconFetcherConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            icon_path: default_icon_path(),
            timeout_secs: None,
            user_agent: default_user_agent(),
            keep_partial_files: false,
            max_concurrent_downloads: default_max_concurrent_downloads(),
        }
    }
}

impl IconFetcherConfig {
    /// Create a configuration suitable for testing
    #[must_use]
    pub fn for_testing() -> Self {
        Self {
            timeout_secs: Some(5),
            max_concurrent_downloads: 2,
            ..Default::default()
        }
    }

    /// URL of the given icon file
    #[must_use]
    pub fn icon_url(&self, icon_file: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        let path = self.icon_path.trim_matches('/');
        if path.is_empty() {
            format!("{base}/{icon_file}")
        } else {
            format!("{base}/{path}/{icon_file}")
        }
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.base_url.is_empty() {
            return Err("base_url must not be empty".to_string());
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(format!(
                "base_url must start with http:// or https://, got {}",
                self.base_url
            ));
        }

        if self.timeout_secs == Some(0) {
            return Err("timeout_secs must be greater than 0 when set".to_string());
        }

        if self.max_concurrent_downloads == 0 {
            return Err("max_concurrent_downloads must be greater than 0".to_string());
        }

        if self.max_concurrent_downloads > 32 {
            return Err("max_concurrent_downloads must be 32 or less".to_string());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = IconFetcherConfig::default();
        assert_eq!(config.base_url, "https://openweathermap.org");
        assert_eq!(config.icon_path, "img/w");
        assert_eq!(config.timeout_secs, None);
        assert!(config.user_agent.starts_with("owm-icons/"));
        assert!(!config.keep_partial_files);
        assert_eq!(config.max_concurrent_downloads, 4);
    }

    #[test]
    fn test_testing_config() {
        let config = IconFetcherConfig::for_testing();
        assert_eq!(config.timeout_secs, Some(5));
        assert_eq!(config.max_concurrent_downloads, 2);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_icon_url() {
        let config = IconFetcherConfig::default();
        assert_eq!(
            config.icon_url("01d.png"),
            "https://openweathermap.org/img/w/01d.png"
        );
    }

    #[test]
    fn test_icon_url_normalizes_slashes() {
        let config = IconFetcherConfig {
            base_url: "http://localhost:8080/".to_string(),
            icon_path: "/icons/".to_string(),
            ..Default::default()
        };
        assert_eq!(config.icon_url("10n.png"), "http://localhost:8080/icons/10n.png");
    }

    #[test]
    fn test_icon_url_without_path() {
        let config = IconFetcherConfig {
            base_url: "http://localhost:8080".to_string(),
            icon_path: String::new(),
            ..Default::default()
        };
        assert_eq!(config.icon_url("10n.png"), "http://localhost:8080/10n.png");
    }

    #[test]
    fn test_validation_success() {
        assert!(IconFetcherConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validation_empty_base_url() {
        let config = IconFetcherConfig {
            base_url: String::new(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_base_url_scheme() {
        let config = IconFetcherConfig {
            base_url: "ftp://openweathermap.org".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_zero_timeout() {
        let config = IconFetcherConfig {
            timeout_secs: Some(0),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_concurrency_bounds() {
        let config = IconFetcherConfig {
            max_concurrent_downloads: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = IconFetcherConfig {
            max_concurrent_downloads: 33,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_deserialize_partial_uses_defaults() {
        let config: IconFetcherConfig =
            serde_json::from_str(r#"{"timeout_secs": 15}"#).unwrap();
        assert_eq!(config.timeout_secs, Some(15));
        assert_eq!(config.base_url, "https://openweathermap.org");
        assert_eq!(config.max_concurrent_downloads, 4);
    }
}
