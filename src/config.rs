//! Host configuration loaded from TOML.
//!
//! ```toml
//! [server]
//! host = "127.0.0.1"
//! port = 3000
//!
//! [search]
//! endpoint = "https://www.google.com/search"
//! language = "ja"
//! timeout_seconds = 10
//! max_results = 10
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use serp_extract::{ExtractConfig, SearchConfig};

use crate::error::{HostError, Result};

/// Top-level configuration for the search host.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HostConfig {
    /// Listener settings.
    pub server: ServerConfig,
    /// Upstream provider and extraction settings.
    pub search: SearchSection,
}

/// Listener address.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Interface to bind.
    pub host: String,
    /// TCP port to bind. `0` picks an ephemeral port.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_owned(),
            port: 3000,
        }
    }
}

/// The `[search]` table.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchSection {
    /// Upstream search URL.
    pub endpoint: String,
    /// Interface language sent to the provider.
    pub language: String,
    /// Upstream request timeout in seconds.
    pub timeout_seconds: u64,
    /// Fixed User-Agent. Unset rotates through built-in browser agents.
    pub user_agent: Option<String>,
    /// Hard cap on returned results.
    pub max_results: usize,
    /// Extra hosts to exclude on top of the built-in list.
    pub extra_excluded_domains: Vec<String>,
}

impl Default for SearchSection {
    fn default() -> Self {
        let defaults = SearchConfig::default();
        Self {
            endpoint: defaults.endpoint,
            language: defaults.language,
            timeout_seconds: defaults.timeout_seconds,
            user_agent: defaults.user_agent,
            max_results: defaults.extract.max_results,
            extra_excluded_domains: Vec::new(),
        }
    }
}

impl HostConfig {
    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if the
    /// resulting search settings are invalid.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self =
            toml::from_str(&content).map_err(|e| HostError::Config(e.to_string()))?;
        config.to_search_config()?;
        Ok(config)
    }

    /// Returns the default config file path: `~/.config/serp/config.toml`.
    pub fn default_config_path() -> PathBuf {
        if let Some(config) = std::env::var_os("XDG_CONFIG_HOME") {
            PathBuf::from(config).join("serp").join("config.toml")
        } else if let Some(home) = std::env::var_os("HOME") {
            PathBuf::from(home)
                .join(".config")
                .join("serp")
                .join("config.toml")
        } else {
            PathBuf::from("/tmp/serp-config/config.toml")
        }
    }

    /// `host:port` string for the listener.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Build and validate the library search configuration.
    ///
    /// # Errors
    ///
    /// Returns [`HostError::Config`] if the settings are rejected.
    pub fn to_search_config(&self) -> Result<SearchConfig> {
        let section = &self.search;
        let mut extract = ExtractConfig {
            max_results: section.max_results,
            ..Default::default()
        };
        extract.excluded_domains.extend(
            section
                .extra_excluded_domains
                .iter()
                .map(|d| d.trim().to_ascii_lowercase())
                .filter(|d| !d.is_empty()),
        );

        let config = SearchConfig {
            endpoint: section.endpoint.clone(),
            language: section.language.clone(),
            timeout_seconds: section.timeout_seconds,
            user_agent: section.user_agent.clone(),
            extract,
        };
        config
            .validate()
            .map_err(|e| HostError::Config(e.to_string()))?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]

    use super::*;

    #[test]
    fn defaults_match_library_defaults() {
        let config = HostConfig::default();
        assert_eq!(config.bind_addr(), "127.0.0.1:3000");
        let search = config.to_search_config().expect("defaults are valid");
        assert_eq!(search.endpoint, "https://www.google.com/search");
        assert_eq!(search.language, "ja");
        assert_eq!(search.timeout_seconds, 10);
        assert_eq!(search.extract.max_results, 10);
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let config: HostConfig = toml::from_str(
            r#"
            [server]
            port = 8080

            [search]
            language = "en"
            "#,
        )
        .expect("parse");
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.search.language, "en");
        assert_eq!(config.search.timeout_seconds, 10);
    }

    #[test]
    fn extra_exclusions_are_appended() {
        let mut config = HostConfig::default();
        config.search.extra_excluded_domains = vec![" Pinterest.com ".into(), String::new()];
        let search = config.to_search_config().expect("valid");
        assert!(search.extract.is_excluded_host("www.pinterest.com"));
        assert!(search.extract.is_excluded_host("youtube.com"));
    }

    #[test]
    fn invalid_search_settings_are_config_errors() {
        let mut config = HostConfig::default();
        config.search.timeout_seconds = 0;
        assert!(matches!(
            config.to_search_config(),
            Err(HostError::Config(_))
        ));

        let mut config = HostConfig::default();
        config.search.endpoint = "not a url".into();
        assert!(matches!(
            config.to_search_config(),
            Err(HostError::Config(_))
        ));
    }

    #[test]
    fn from_file_round_trip() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[server]\nhost = \"0.0.0.0\"\nport = 9000\n\n[search]\nmax_results = 5\n",
        )
        .expect("write");

        let config = HostConfig::from_file(&path).expect("load");
        assert_eq!(config.bind_addr(), "0.0.0.0:9000");
        assert_eq!(config.search.max_results, 5);
    }

    #[test]
    fn from_file_nonexistent_returns_error() {
        let result = HostConfig::from_file(Path::new("/nonexistent/path/config.toml"));
        assert!(matches!(result, Err(HostError::Io(_))));
    }

    #[test]
    fn from_file_invalid_toml_returns_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "this is not valid toml {{{").expect("write");
        assert!(matches!(
            HostConfig::from_file(&path),
            Err(HostError::Config(_))
        ));
    }

    #[test]
    fn from_file_rejects_invalid_values() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("zero.toml");
        std::fs::write(&path, "[search]\nmax_results = 0\n").expect("write");
        assert!(matches!(
            HostConfig::from_file(&path),
            Err(HostError::Config(_))
        ));
    }

    #[test]
    fn default_config_path_ends_with_config_toml() {
        let path = HostConfig::default_config_path();
        let path_str = path.to_string_lossy();
        assert!(path_str.ends_with("config.toml"));
        assert!(path_str.contains("serp"));
    }
}
