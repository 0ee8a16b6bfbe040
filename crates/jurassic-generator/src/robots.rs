//! Robots.txt generation.
//!
//! Generates the robots.txt file for search engine crawlers.

use std::{fmt::Write as _, fs, path::Path};

use jurassic_core::Config;
use thiserror::Error;
use tracing::info;

/// Robots generation errors.
#[derive(Debug, Error)]
pub enum RobotsError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for robots generation.
pub type Result<T> = std::result::Result<T, RobotsError>;

/// Robots.txt generator.
#[derive(Debug)]
pub struct RobotsGenerator {
    config: Config,
}

impl RobotsGenerator {
    /// Create a new robots generator.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Whether robots.txt generation is enabled.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.config.robots.enabled
    }

    /// Render robots.txt, or `None` when disabled.
    #[must_use]
    pub fn render(&self) -> Option<String> {
        if !self.is_enabled() {
            return None;
        }

        let mut out = String::from("User-agent: *\n");

        for path in &self.config.robots.disallow {
            let _ = writeln!(out, "Disallow: {path}");
        }

        for path in &self.config.robots.allow {
            let _ = writeln!(out, "Allow: {path}");
        }

        let _ = writeln!(out, "Sitemap: {}", self.config.url_for("/sitemap.xml"));

        Some(out)
    }

    /// Write robots.txt into the output directory. Returns whether a file was written.
    pub fn generate(&self, output_dir: &Path) -> Result<bool> {
        let Some(body) = self.render() else {
            return Ok(false);
        };

        info!("generating robots.txt");
        fs::write(output_dir.join("robots.txt"), body)?;
        Ok(true)
    }
}
