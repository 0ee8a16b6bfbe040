//! Build orchestration.
//!
//! Renders the landing page once and writes it with its crawl files.

use std::{
    fs,
    path::{Path, PathBuf},
    time::Instant,
};

use jurassic_core::{Config, LoaderResult};
use thiserror::Error;
use tracing::{debug, info};

use crate::{
    html::{HomePageRenderer, HtmlError},
    robots::{RobotsError, RobotsGenerator},
    sitemap::{SitemapError, SitemapGenerator},
};

/// Build errors.
#[derive(Debug, Error)]
pub enum BuildError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// HTML generation error.
    #[error("HTML error: {0}")]
    Html(#[from] HtmlError),

    /// Robots generation error.
    #[error("robots error: {0}")]
    Robots(#[from] RobotsError),

    /// Sitemap generation error.
    #[error("sitemap error: {0}")]
    Sitemap(#[from] SitemapError),
}

/// Result type for build operations.
pub type Result<T> = std::result::Result<T, BuildError>;

/// Files the builder writes. Nothing else in the output directory is touched.
pub const OUTPUT_FILES: [&str; 3] = ["index.html", "robots.txt", "sitemap.xml"];

/// Build statistics.
#[derive(Debug, Clone, Default)]
pub struct BuildStats {
    /// Number of files written.
    pub files: usize,

    /// Total bytes written.
    pub bytes: u64,

    /// Build duration in milliseconds.
    pub duration_ms: u64,
}

/// Static site builder.
#[derive(Debug)]
pub struct Builder {
    config: Config,
    output_dir: PathBuf,
}

impl Builder {
    /// Create a new builder.
    #[must_use]
    pub fn new(config: Config, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            config,
            output_dir: output_dir.into(),
        }
    }

    /// Execute the full build with the current time.
    pub fn build(&self) -> Result<BuildStats> {
        self.build_with(&LoaderResult::load())
    }

    /// Execute the full build from loader data.
    pub fn build_with(&self, loaded: &LoaderResult) -> Result<BuildStats> {
        let start = Instant::now();
        let mut stats = BuildStats::default();

        info!(output = %self.output_dir.display(), "starting build");

        // 1. Remove previous build output
        self.clean_output()?;

        // 2. Landing page
        let renderer = HomePageRenderer::new(self.config.clone());
        let page = renderer.render_with(loaded)?;
        self.write_file("index.html", page.html.as_bytes(), &mut stats)?;

        // 3. robots.txt
        if RobotsGenerator::new(self.config.clone()).generate(&self.output_dir)? {
            self.record("robots.txt", &mut stats)?;
        }

        // 4. sitemap.xml
        SitemapGenerator::new(self.config.clone()).generate(&self.output_dir, loaded.last_updated)?;
        self.record("sitemap.xml", &mut stats)?;

        stats.duration_ms = start.elapsed().as_millis() as u64;

        info!(
            files = stats.files,
            bytes = stats.bytes,
            duration_ms = stats.duration_ms,
            "build complete"
        );

        Ok(stats)
    }

    /// Remove files left by a previous build and make sure the directory exists.
    ///
    /// The output directory may hold unrelated files (even the config file), so
    /// only [`OUTPUT_FILES`] are removed.
    fn clean_output(&self) -> Result<()> {
        fs::create_dir_all(&self.output_dir)?;
        for name in OUTPUT_FILES {
            let path = self.output_dir.join(name);
            if path.is_file() {
                debug!(path = %path.display(), "removing previous output");
                fs::remove_file(&path)?;
            }
        }
        Ok(())
    }

    fn write_file(&self, name: &str, contents: &[u8], stats: &mut BuildStats) -> Result<()> {
        fs::write(self.output_dir.join(name), contents)?;
        self.record(name, stats)
    }

    /// Account for a file already written to the output directory.
    fn record(&self, name: &str, stats: &mut BuildStats) -> Result<()> {
        let path = self.output_dir.join(name);
        let len = fs::metadata(&path)?.len();
        debug!(path = %path.display(), bytes = len, "wrote file");
        stats.files += 1;
        stats.bytes += len;
        Ok(())
    }

    /// Output directory of this builder.
    #[must_use]
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_build_writes_all_files() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("public");

        let stats = Builder::new(Config::default(), &output).build().unwrap();

        assert_eq!(stats.files, 3);
        assert!(stats.bytes > 0);
        assert!(output.join("index.html").exists());
        assert!(output.join("robots.txt").exists());
        assert!(output.join("sitemap.xml").exists());
    }

    #[test]
    fn test_build_keeps_unrelated_files() {
        let dir = TempDir::new().unwrap();
        let output = dir.path();
        fs::write(output.join("jurassicwords.toml"), "[site]\n").unwrap();
        fs::write(output.join("notes.txt"), "keep me").unwrap();
        fs::write(output.join("index.html"), "old").unwrap();

        Builder::new(Config::default(), output).build().unwrap();

        assert_eq!(fs::read_to_string(output.join("jurassicwords.toml")).unwrap(), "[site]\n");
        assert_eq!(fs::read_to_string(output.join("notes.txt")).unwrap(), "keep me");
        let index = fs::read_to_string(output.join("index.html")).unwrap();
        assert!(index.starts_with("<!DOCTYPE html>"));
    }

    #[test]
    fn test_build_removes_stale_robots_when_disabled() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("public");
        fs::create_dir_all(&output).unwrap();
        fs::write(output.join("robots.txt"), "User-agent: *\n").unwrap();

        let mut config = Config::default();
        config.robots.enabled = false;
        Builder::new(config, &output).build().unwrap();

        assert!(!output.join("robots.txt").exists());
        assert!(output.join("sitemap.xml").exists());
    }

    #[test]
    fn test_build_without_robots() {
        let dir = TempDir::new().unwrap();
        let mut config = Config::default();
        config.robots.enabled = false;

        let builder = Builder::new(config, dir.path().join("out"));
        let stats = builder.build().unwrap();

        assert_eq!(stats.files, 2);
        assert!(!builder.output_dir().join("robots.txt").exists());
    }
}
