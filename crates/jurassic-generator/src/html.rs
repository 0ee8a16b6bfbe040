//! HTML generation for the landing page.
//!
//! Assembles the head tags, the ordered content sections, the footer, and the
//! JSON-LD script, then wraps them in the document shell.

use chrono::Datelike;
use jurassic_core::{
    Config, ContentSection, LoaderResult, MetaTag, PageMetadata, SectionBody, SectionId,
    content::{self, CallToAction, Entry, FaqEntry, HERO, HERO_ANCHOR, Printable, Tip},
};
use thiserror::Error;
use tracing::debug;

use crate::jsonld;

/// HTML generation errors.
#[derive(Debug, Error)]
pub enum HtmlError {
    /// Structured data serialisation error.
    #[error("JSON-LD error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for HTML generation.
pub type Result<T> = std::result::Result<T, HtmlError>;

/// A rendered document together with the metadata it was built from.
#[derive(Debug, Clone)]
pub struct RenderedPage {
    pub metadata: PageMetadata,
    pub html: String,
}

/// Landing page renderer.
#[derive(Debug)]
pub struct HomePageRenderer {
    config: Config,
}

impl HomePageRenderer {
    /// Create a new renderer with the given configuration.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Render the landing page with the current time.
    pub fn render(&self) -> Result<RenderedPage> {
        self.render_with(&LoaderResult::load())
    }

    /// Render the landing page from loader data.
    ///
    /// The footer year is taken from the loader timestamp so both reflect the same instant.
    pub fn render_with(&self, loaded: &LoaderResult) -> Result<RenderedPage> {
        let metadata = PageMetadata::home(&self.config);
        debug!(
            canonical = %metadata.canonical_url,
            at = %loaded.last_updated_iso(),
            "rendering home page"
        );

        let blocks = jsonld::home_blocks(&self.config, content::FAQ);
        let script = jsonld::to_script_json(&blocks)?;

        let mut main =
            String::from(r#"<main class="mx-auto max-w-5xl px-4 py-10 text-green-700">"#);
        main.push('\n');
        main.push_str(&format!(
            r##"<a href="#{HERO_ANCHOR}" class="sr-only focus:not-sr-only">Skip to content</a>"##
        ));
        main.push('\n');
        main.push_str(&nav_html());
        main.push_str(&hero_html(loaded));
        for section in &content::SECTIONS {
            main.push_str(&section_html(section));
        }
        main.push_str(&footer_html(loaded.last_updated.year(), &self.config.site.name));
        main.push_str(&format!(
            "<script type=\"application/ld+json\">{script}</script>\n"
        ));
        main.push_str("</main>");

        let html = self.document(&head_html(&metadata), &main);
        Ok(RenderedPage { metadata, html })
    }

    /// Render the `noindex` 404 page for an unknown path.
    #[must_use]
    pub fn render_not_found(&self, path: &str) -> String {
        let site_name = escape_html(&self.config.site.name);
        let head = format!(
            r#"    <title>Page not found | {site_name}</title>
    <meta name="robots" content="noindex">"#
        );
        let body = format!(
            r#"<main class="mx-auto max-w-5xl px-4 py-10 text-green-700">
  <h1 class="text-3xl font-extrabold tracking-tight text-green-800">This page went extinct</h1>
  <p class="mt-4 text-lg text-slate-700">We could not find {}.</p>
  <p class="mt-6"><a href="/" class="underline">Back to {site_name}</a></p>
</main>"#,
            escape_html(path)
        );

        self.document(&head, &body)
    }

    /// Wrap head lines and body markup in the HTML document shell.
    fn document(&self, head: &str, body: &str) -> String {
        format!(
            r#"<!DOCTYPE html>
<html lang="{}">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
{head}
</head>
<body class="bg-white">
{body}
</body>
</html>
"#,
            escape_html(&self.config.site.language)
        )
    }
}

/// Render head tags, one per line.
fn head_html(metadata: &PageMetadata) -> String {
    metadata
        .tags()
        .iter()
        .map(|tag| {
            let line = match tag {
                MetaTag::Title(title) => format!("<title>{}</title>", escape_html(title)),
                MetaTag::Name { name, content } => format!(
                    r#"<meta name="{name}" content="{}">"#,
                    escape_html(content)
                ),
                MetaTag::Property { property, content } => format!(
                    r#"<meta property="{property}" content="{}">"#,
                    escape_html(content)
                ),
                MetaTag::Link { rel, href } => {
                    format!(r#"<link rel="{rel}" href="{}">"#, escape_html(href))
                }
            };
            format!("    {line}")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn nav_html() -> String {
    let items: String = SectionId::ALL
        .iter()
        .map(|id| {
            format!(
                r##"      <li><a href="#{}" class="hover:underline">{}</a></li>
"##,
                id.anchor(),
                escape_html(id.nav_label())
            )
        })
        .collect();

    format!(
        r#"<header class="mb-10">
  <nav aria-label="Primary">
    <ul class="flex flex-wrap gap-5 text-sm">
{items}    </ul>
  </nav>
</header>
"#
    )
}

fn call_to_action_html(action: &CallToAction) -> String {
    let class = if action.primary {
        "inline-flex items-center rounded-md bg-green-700 px-4 py-2 text-white"
    } else {
        "inline-flex items-center rounded-md border border-slate-300 px-4 py-2"
    };
    format!(
        r##"<a href="#{}" class="{class}">{}</a>"##,
        action.target.anchor(),
        escape_html(action.label)
    )
}

fn hero_html(loaded: &LoaderResult) -> String {
    let actions = HERO
        .actions
        .iter()
        .map(call_to_action_html)
        .collect::<Vec<_>>()
        .join("\n    ");

    format!(
        r#"<section id="{HERO_ANCHOR}" class="mb-12">
  <h1 class="text-3xl sm:text-4xl font-extrabold tracking-tight text-green-800">{}</h1>
  <p class="mt-4 max-w-3xl text-lg text-slate-700">{}</p>
  <div class="mt-6 flex flex-wrap gap-3">
    {actions}
  </div>
  <p class="mt-3 text-sm text-slate-600" aria-live="polite">{} Last updated <time datetime="{}">{}</time>.</p>
</section>
"#,
        escape_html(HERO.heading),
        escape_html(HERO.lead),
        escape_html(&loaded.message),
        loaded.last_updated_iso(),
        loaded.last_updated_display(),
    )
}

fn section_html(section: &ContentSection) -> String {
    let anchor = section.id.anchor();
    let heading_id = section.id.heading_id();
    let margin = if section.id == SectionId::Faq {
        "mb-16"
    } else {
        "mb-12"
    };

    let intro = if section.intro.is_empty() {
        String::new()
    } else {
        format!(
            "  <p class=\"mt-3 text-slate-700\">{}</p>\n",
            escape_html(section.intro)
        )
    };

    format!(
        r#"<section id="{anchor}" aria-labelledby="{heading_id}" class="{margin}">
  <h2 id="{heading_id}" class="text-2xl font-bold">{}</h2>
{intro}{}</section>
"#,
        escape_html(section.heading),
        body_html(&section.body),
    )
}

fn body_html(body: &SectionBody) -> String {
    match body {
        SectionBody::Profiles(entries) => profiles_html(entries),
        SectionBody::Bullets { items, tip } => bullets_html(items, tip.as_ref()),
        SectionBody::Glossary { entries, columns } => glossary_html(entries, *columns),
        SectionBody::Printables(cards) => printables_html(cards),
        SectionBody::Questions(faq) => questions_html(faq),
    }
}

fn profiles_html(entries: &[Entry]) -> String {
    let items: String = entries
        .iter()
        .map(|entry| {
            format!(
                r#"    <li class="rounded-lg border border-slate-200 p-5">
      <h3 class="font-semibold">{}</h3>
      <p class="mt-2 text-slate-700">{}</p>
    </li>
"#,
                escape_html(entry.title),
                escape_html(entry.text)
            )
        })
        .collect();

    format!("  <ul class=\"mt-6 grid gap-6 sm:grid-cols-2\">\n{items}  </ul>\n")
}

fn bullets_html(items: &[&str], tip: Option<&Tip>) -> String {
    let list: String = items
        .iter()
        .map(|item| format!("    <li>{}</li>\n", escape_html(item)))
        .collect();

    let mut html = format!("  <ul class=\"mt-4 list-disc pl-5 text-slate-700\">\n{list}  </ul>\n");
    if let Some(tip) = tip {
        html.push_str(&format!(
            "  <div class=\"mt-4 text-sm text-slate-600\">\n    <p><strong>{}</strong> {}</p>\n  </div>\n",
            escape_html(tip.label),
            escape_html(tip.text)
        ));
    }
    html
}

fn glossary_html(entries: &[Entry], columns: u8) -> String {
    let items: String = entries
        .iter()
        .map(|entry| {
            format!(
                r#"    <li class="rounded border border-slate-200 p-4">
      <strong>{}</strong>
      <p class="text-slate-700 mt-1">{}</p>
    </li>
"#,
                escape_html(entry.title),
                escape_html(entry.text)
            )
        })
        .collect();

    format!("  <ul class=\"mt-4 grid gap-4 sm:grid-cols-{columns}\">\n{items}  </ul>\n")
}

fn printables_html(cards: &[Printable]) -> String {
    let articles: String = cards
        .iter()
        .map(|card| {
            format!(
                r#"    <article class="rounded-lg border border-slate-200 p-5">
      <h3 class="font-semibold">{}</h3>
      <p class="mt-2 text-slate-700">{}</p>
      <a href="{}" class="mt-3 inline-block text-green-700 underline">{}</a>
    </article>
"#,
                escape_html(card.title),
                escape_html(card.summary),
                escape_html(card.href),
                escape_html(card.link_text)
            )
        })
        .collect();

    format!("  <div class=\"mt-6 grid gap-6 sm:grid-cols-2\">\n{articles}  </div>\n")
}

fn questions_html(faq: &[FaqEntry]) -> String {
    let details: String = faq
        .iter()
        .map(|entry| {
            format!(
                r#"    <details>
      <summary class="cursor-pointer font-semibold">{}</summary>
      <p class="mt-2 text-slate-700">{}</p>
    </details>
"#,
                escape_html(entry.question),
                escape_html(entry.answer)
            )
        })
        .collect();

    format!("  <div class=\"mt-6 space-y-5\">\n{details}  </div>\n")
}

fn footer_html(year: i32, site_name: &str) -> String {
    format!(
        r#"<footer class="border-t border-slate-200 pt-6 text-sm text-green-600">
  <p>&copy; {year} {}. All rights reserved.</p>
</footer>
"#,
        escape_html(site_name)
    )
}

/// Escape text for HTML element content and double-quoted attributes.
#[must_use]
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;

    fn fixed_loader() -> LoaderResult {
        LoaderResult::at(Utc.with_ymd_and_hms(2026, 10, 19, 8, 30, 0).unwrap())
    }

    fn render() -> RenderedPage {
        HomePageRenderer::new(Config::default())
            .render_with(&fixed_loader())
            .unwrap()
    }

    #[test]
    fn test_document_shell() {
        let page = render();

        assert!(page.html.starts_with("<!DOCTYPE html>"));
        assert!(page.html.contains(r#"<html lang="en">"#));
        assert!(page.html.contains(
            "<title>Jurassic Words | Dinosaur Facts, Word Games, Printables for Kids</title>"
        ));
        assert!(page.html.contains(r#"<meta property="og:type" content="website">"#));
        assert!(
            page.html
                .contains(r#"<meta name="twitter:card" content="summary_large_image">"#)
        );
    }

    #[test]
    fn test_canonical_link_once() {
        let page = render();
        assert_eq!(page.html.matches(r#"rel="canonical""#).count(), 1);
        assert!(
            page.html
                .contains(r#"<link rel="canonical" href="https://www.jurassicwords.com/">"#)
        );
    }

    #[test]
    fn test_sections_in_order() {
        let page = render();
        let positions: Vec<_> = SectionId::ALL
            .iter()
            .map(|id| {
                page.html
                    .find(&format!(r#"<section id="{}""#, id.anchor()))
                    .unwrap_or_else(|| panic!("missing section {}", id.anchor()))
            })
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));

        let hero = page.html.find(r#"<section id="content""#).unwrap();
        assert!(hero < positions[0]);
    }

    #[test]
    fn test_nav_links_every_section() {
        let page = render();
        for id in SectionId::ALL {
            assert!(page.html.contains(&format!(
                r##"<a href="#{}" class="hover:underline">{}</a>"##,
                id.anchor(),
                id.nav_label()
            )));
        }
        assert!(page.html.contains(
            r##"<a href="#content" class="sr-only focus:not-sr-only">Skip to content</a>"##
        ));
    }

    #[test]
    fn test_hero_status_line() {
        let page = render();
        assert!(page.html.contains(
            r#"New fossils are being prepared in the lab. Last updated <time datetime="2026-10-19T08:30:00.000Z">October 19, 2026</time>."#
        ));
    }

    #[test]
    fn test_footer_year_and_entity() {
        let page = render();
        assert!(page.html.contains("&copy; 2026 Jurassic Words. All rights reserved."));
    }

    #[test]
    fn test_faq_details() {
        let page = render();
        assert_eq!(page.html.matches("<details>").count(), 3);
        assert!(page.html.contains(
            r#"<summary class="cursor-pointer font-semibold">Is this site safe for classrooms</summary>"#
        ));
    }

    #[test]
    fn test_printable_links() {
        let page = render();
        assert!(page.html.contains(r#"href="/printables/word-search-pack""#));
        assert!(page.html.contains(r#"href="/printables/crossword-mini""#));
        assert!(page.html.contains("<strong>Teacher tip:</strong> each game will include"));
    }

    #[test]
    fn test_metadata_returned_with_page() {
        let page = render();
        assert_eq!(page.metadata.canonical_url, "https://www.jurassicwords.com/");
    }

    #[test]
    fn test_not_found_escapes_path() {
        let renderer = HomePageRenderer::new(Config::default());
        let html = renderer.render_not_found("/<raptor>");
        assert!(html.contains("/&lt;raptor&gt;"));
        assert!(html.contains(r#"<meta name="robots" content="noindex">"#));
        assert!(html.contains("<title>Page not found | Jurassic Words</title>"));
        assert!(!html.contains("application/ld+json"));
    }

    #[test]
    fn test_document_language_from_config() {
        let mut config = Config::default();
        config.site.language = "en-GB".to_string();
        let renderer = HomePageRenderer::new(config);

        let page = renderer.render_with(&fixed_loader()).unwrap();
        assert!(page.html.contains(r#"<html lang="en-GB">"#));
        assert!(page.html.trim_end().ends_with("</body>\n</html>"));
        assert!(renderer.render_not_found("/x").contains(r#"<html lang="en-GB">"#));
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("T. rex & friends"), "T. rex &amp; friends");
        assert_eq!(escape_html(r#"<a href="x">"#), "&lt;a href=&quot;x&quot;&gt;");
        assert_eq!(escape_html("it's"), "it&#39;s");
    }
}
