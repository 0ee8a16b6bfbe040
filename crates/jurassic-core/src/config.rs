//! Site configuration management.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};

/// Environment variable prefix used by [`Config::load_with_env`].
pub const ENV_PREFIX: &str = "JURASSICWORDS";

/// Main configuration structure for Jurassic Words.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Site-wide settings.
    pub site: SiteConfig,

    /// HTTP server settings.
    pub server: ServerConfig,

    /// Static build settings.
    pub build: BuildConfig,

    /// robots.txt settings.
    pub robots: RobotsConfig,
}

/// Site-wide configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Organization and site name used in structured data.
    #[serde(default = "default_site_name")]
    pub name: String,

    /// Base URL for the site (e.g., "https://www.jurassicwords.com").
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Language code for the `<html lang>` attribute and structured data.
    #[serde(default = "default_language")]
    pub language: String,
}

/// HTTP server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Interface to bind.
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Directory of static assets served for unmatched paths (e.g. `og-image.jpg`).
    #[serde(default)]
    pub static_dir: Option<String>,
}

/// Build configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildConfig {
    /// Output directory for generated files.
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
}

/// robots.txt configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RobotsConfig {
    /// Whether robots.txt is generated and served.
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Paths crawlers may visit.
    #[serde(default)]
    pub allow: Vec<String>,

    /// Paths crawlers should skip.
    #[serde(default)]
    pub disallow: Vec<String>,
}

// Default value functions
fn default_site_name() -> String {
    "Jurassic Words".to_string()
}

fn default_base_url() -> String {
    "https://www.jurassicwords.com".to_string()
}

fn default_language() -> String {
    "en".to_string()
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_output_dir() -> String {
    "public".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            name: default_site_name(),
            base_url: default_base_url(),
            language: default_language(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            static_dir: None,
        }
    }
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
        }
    }
}

impl Default for RobotsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            allow: Vec::new(),
            disallow: Vec::new(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CoreError::config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content).map_err(|e| {
            CoreError::config_with_source(
                format!("Failed to parse config file: {}", path.display()),
                e,
            )
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration layered from an optional file and `JURASSICWORDS__*` variables.
    ///
    /// A missing file is not an error; built-in defaults fill every absent key.
    /// List keys such as `robots.disallow` take comma separated values.
    pub fn load_with_env(path: &Path) -> Result<Self> {
        Self::load_layered(path, Self::environment())
    }

    /// Environment source for `JURASSICWORDS__SECTION__KEY` variables.
    fn environment() -> config::Environment {
        config::Environment::with_prefix(ENV_PREFIX)
            .separator("__")
            .try_parsing(true)
            .list_separator(",")
            .with_list_parse_key("robots.allow")
            .with_list_parse_key("robots.disallow")
    }

    fn load_layered(path: &Path, environment: config::Environment) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "config file absent, using defaults");
        }

        let settings = config::Config::builder()
            .add_source(config::File::from(path).required(false))
            .add_source(environment)
            .build()?;

        let config: Config = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.site.name.is_empty() {
            return Err(CoreError::config("site.name cannot be empty"));
        }

        if self.site.base_url.is_empty() {
            return Err(CoreError::config("site.base_url cannot be empty"));
        }

        if !self.site.base_url.starts_with("http://") && !self.site.base_url.starts_with("https://")
        {
            return Err(CoreError::config(format!(
                "site.base_url must be an absolute http(s) URL, got {}",
                self.site.base_url
            )));
        }

        if self.site.base_url.ends_with('/') {
            tracing::warn!("site.base_url should not have a trailing slash");
        }

        Ok(())
    }

    /// Get the full URL for a path.
    ///
    /// The root path keeps its trailing slash, so `url_for("/")` is the canonical home URL.
    pub fn url_for(&self, path: &str) -> String {
        let base = self.site.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{base}/{path}")
    }

    /// Address the HTTP server binds to.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
