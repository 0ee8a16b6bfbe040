//! Sitemap generation.
//!
//! Generates the XML sitemap for search engine optimization.

use std::{fs, path::Path};

use chrono::{DateTime, Utc};
use jurassic_core::Config;
use thiserror::Error;
use tracing::debug;

/// Sitemap generation errors.
#[derive(Debug, Error)]
pub enum SitemapError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for sitemap operations.
pub type Result<T> = std::result::Result<T, SitemapError>;

/// Change frequency advertised for the landing page.
pub const HOME_CHANGEFREQ: &str = "weekly";

/// A sitemap URL entry.
#[derive(Debug, Clone)]
pub struct SitemapUrl {
    /// URL location.
    pub loc: String,

    /// Last modification date.
    pub lastmod: DateTime<Utc>,

    /// Change frequency.
    pub changefreq: &'static str,

    /// Priority (0.0 to 1.0).
    pub priority: f32,
}

/// Sitemap generator.
#[derive(Debug)]
pub struct SitemapGenerator {
    config: Config,
}

impl SitemapGenerator {
    /// Create a new sitemap generator.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// URL entries of the site. The landing page is the only indexable page.
    #[must_use]
    pub fn urls(&self, lastmod: DateTime<Utc>) -> Vec<SitemapUrl> {
        vec![SitemapUrl {
            loc: self.config.url_for("/"),
            lastmod,
            changefreq: HOME_CHANGEFREQ,
            priority: 1.0,
        }]
    }

    /// Render sitemap XML.
    #[must_use]
    pub fn render(&self, lastmod: DateTime<Utc>) -> String {
        let urls = self.urls(lastmod);
        debug!(count = urls.len(), "generating sitemap");

        let mut xml = String::from(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
        xml.push('\n');
        xml.push_str(r#"<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">"#);
        xml.push('\n');

        for url in &urls {
            xml.push_str(&url_to_xml(url));
        }

        xml.push_str("</urlset>\n");
        xml
    }

    /// Write sitemap.xml into the output directory.
    pub fn generate(&self, output_dir: &Path, lastmod: DateTime<Utc>) -> Result<()> {
        fs::write(output_dir.join("sitemap.xml"), self.render(lastmod))?;
        Ok(())
    }
}

/// Convert a URL entry to XML.
fn url_to_xml(url: &SitemapUrl) -> String {
    format!(
        "  <url>\n    <loc>{}</loc>\n    <lastmod>{}</lastmod>\n    \
         <changefreq>{}</changefreq>\n    <priority>{:.1}</priority>\n  </url>\n",
        escape_xml(&url.loc),
        url.lastmod.format("%Y-%m-%d"),
        url.changefreq,
        url.priority
    )
}

/// Escape special XML characters.
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
