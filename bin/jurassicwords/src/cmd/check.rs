//! Check command - validate configuration and the rendered page

use std::path::Path;

use color_eyre::eyre::{Result, bail};
use jurassic_core::{Config, SectionId, metadata::TITLE};
use jurassic_generator::HomePageRenderer;

/// Validation result.
#[derive(Debug, Default)]
struct ValidationResult {
    errors: Vec<String>,
    warnings: Vec<String>,
}

impl ValidationResult {
    fn add_error(&mut self, msg: impl Into<String>) {
        self.errors.push(msg.into());
    }

    fn add_warning(&mut self, msg: impl Into<String>) {
        self.warnings.push(msg.into());
    }

    fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

/// Run the check command.
///
/// Validates configuration and renders the page once to verify its markup.
pub fn run(config_path: &Path, strict: bool) -> Result<()> {
    tracing::info!(?config_path, strict, "Checking configuration and page");

    let mut result = ValidationResult::default();

    println!("Checking configuration...");
    let config = match Config::load_with_env(config_path) {
        Ok(c) => {
            println!("  ✓ Configuration valid");
            Some(c)
        }
        Err(e) => {
            result.add_error(format!("Configuration error: {e}"));
            println!("  ✗ Configuration invalid: {e}");
            None
        }
    };

    if let Some(ref cfg) = config {
        if !config_path.exists() {
            result.add_warning(format!(
                "{} not found, built-in defaults were used",
                config_path.display()
            ));
        }

        println!("\nChecking configuration values...");
        check_config_values(cfg, &mut result);

        println!("\nChecking rendered page...");
        check_page(cfg, &mut result);
    }

    // Print summary
    println!();
    println!("Summary:");
    println!("  Errors:   {}", result.errors.len());
    println!("  Warnings: {}", result.warnings.len());

    if result.has_errors() {
        println!();
        println!("Errors:");
        for err in &result.errors {
            println!("  ✗ {err}");
        }
    }

    if result.has_warnings() {
        println!();
        println!("Warnings:");
        for warn in &result.warnings {
            println!("  ⚠ {warn}");
        }
    }

    if result.has_errors() {
        bail!("Validation failed with {} error(s)", result.errors.len());
    }

    if strict && result.has_warnings() {
        bail!(
            "Validation failed with {} warning(s) (strict mode)",
            result.warnings.len()
        );
    }

    println!();
    println!("✓ All checks passed");

    Ok(())
}

/// Check configuration values for common mistakes.
fn check_config_values(config: &Config, result: &mut ValidationResult) {
    if !config.site.base_url.starts_with("https://") {
        result.add_warning(format!(
            "site.base_url should use https: {}",
            config.site.base_url
        ));
    }

    if config.site.base_url.ends_with('/') {
        result.add_warning("site.base_url should not have a trailing slash");
    }

    if let Some(dir) = &config.server.static_dir {
        let dir = Path::new(dir);
        if !dir.is_dir() {
            result.add_warning(format!(
                "server.static_dir does not exist: {}",
                dir.display()
            ));
        } else if !dir.join("og-image.jpg").exists() {
            result.add_warning("og-image.jpg is missing from server.static_dir");
        }
    }

    if !config.robots.enabled {
        result.add_warning("robots.txt is disabled");
    }
}

/// Render the page and verify its structure.
fn check_page(config: &Config, result: &mut ValidationResult) {
    let page = match HomePageRenderer::new(config.clone()).render() {
        Ok(page) => page,
        Err(e) => {
            result.add_error(format!("Render failed: {e}"));
            return;
        }
    };
    let html = &page.html;

    if !html.contains(&format!("<title>{TITLE}</title>")) {
        result.add_error("Page title is missing");
    }

    let canonical = format!(
        r#"<link rel="canonical" href="{}">"#,
        page.metadata.canonical_url
    );
    match html.matches(&canonical).count() {
        1 => println!("  ✓ Canonical link {}", page.metadata.canonical_url),
        n => result.add_error(format!("Expected one canonical link, found {n}")),
    }

    for id in SectionId::ALL {
        if !html.contains(&format!(r#"<section id="{}""#, id.anchor())) {
            result.add_error(format!("Section #{} is missing", id.anchor()));
        }
    }

    let visible = html.matches("<details>").count();
    match structured_faq_count(html) {
        Ok(count) if count == visible => {
            println!("  ✓ {count} FAQ entries match structured data");
        }
        Ok(count) => result.add_error(format!(
            "FAQPage lists {count} questions but the page shows {visible}"
        )),
        Err(e) => result.add_error(format!("JSON-LD is invalid: {e}")),
    }
}

/// Number of questions in the FAQPage block of the page's JSON-LD.
fn structured_faq_count(html: &str) -> Result<usize> {
    let open = r#"<script type="application/ld+json">"#;
    let Some(start) = html.find(open).map(|i| i + open.len()) else {
        bail!("no JSON-LD script");
    };
    let Some(len) = html[start..].find("</script>") else {
        bail!("unterminated JSON-LD script");
    };

    let data: serde_json::Value = serde_json::from_str(&html[start..start + len])?;
    let count = data
        .as_array()
        .into_iter()
        .flatten()
        .find(|block| block["@type"] == "FAQPage")
        .and_then(|block| block["mainEntity"].as_array())
        .map_or(0, Vec::len);

    Ok(count)
}
