//! schema.org structured data for the landing page.
//!
//! The four blocks are serialised together as one JSON-LD array.

use jurassic_core::{Config, FaqEntry};
use serde::Serialize;

pub const SCHEMA_CONTEXT: &str = "https://schema.org";

pub const WEBSITE_DESCRIPTION: &str =
    "Dinosaur facts, word games, vocabulary, and printable activities for kids and classrooms.";

/// A structured data block with its `@context`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JsonLd {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(flatten)]
    pub block: StructuredDataBlock,
}

/// The schema.org types emitted by the page.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "@type")]
pub enum StructuredDataBlock {
    WebSite(WebSite),
    Organization(Organization),
    BreadcrumbList(BreadcrumbList),
    #[serde(rename = "FAQPage")]
    FaqPage(FaqPage),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WebSite {
    pub name: String,
    pub url: String,
    pub in_language: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Organization {
    pub name: String,
    pub url: String,
    pub same_as: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BreadcrumbList {
    pub item_list_element: Vec<ListItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "@type")]
pub struct ListItem {
    pub position: u32,
    pub name: String,
    pub item: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FaqPage {
    pub main_entity: Vec<Question>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "@type", rename_all = "camelCase")]
pub struct Question {
    pub name: String,
    pub accepted_answer: Answer,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "@type")]
pub struct Answer {
    pub text: String,
}

impl JsonLd {
    fn new(block: StructuredDataBlock) -> Self {
        Self {
            context: SCHEMA_CONTEXT,
            block,
        }
    }
}

impl FaqPage {
    /// One `Question` per FAQ entry, in order.
    #[must_use]
    pub fn from_entries(entries: &[FaqEntry]) -> Self {
        Self {
            main_entity: entries
                .iter()
                .map(|entry| Question {
                    name: entry.question.to_string(),
                    accepted_answer: Answer {
                        text: entry.answer.to_string(),
                    },
                })
                .collect(),
        }
    }
}

/// Structured data for the home page: WebSite, Organization, BreadcrumbList, FAQPage.
#[must_use]
pub fn home_blocks(config: &Config, faq: &[FaqEntry]) -> Vec<JsonLd> {
    let home = config.url_for("/");

    vec![
        JsonLd::new(StructuredDataBlock::WebSite(WebSite {
            name: config.site.name.clone(),
            url: home.clone(),
            in_language: config.site.language.clone(),
            description: WEBSITE_DESCRIPTION.to_string(),
        })),
        JsonLd::new(StructuredDataBlock::Organization(Organization {
            name: config.site.name.clone(),
            url: home.clone(),
            same_as: Vec::new(),
        })),
        JsonLd::new(StructuredDataBlock::BreadcrumbList(BreadcrumbList {
            item_list_element: vec![
                ListItem {
                    position: 1,
                    name: "Home".to_string(),
                    item: home,
                },
                ListItem {
                    position: 2,
                    name: "Printables".to_string(),
                    item: config.url_for("/printables"),
                },
            ],
        })),
        JsonLd::new(StructuredDataBlock::FaqPage(FaqPage::from_entries(faq))),
    ]
}

/// Serialise blocks for embedding in a `<script type="application/ld+json">` element.
///
/// `<`, `>` and `&` only occur inside JSON strings, where their `\u` escapes are
/// equivalent, so the output can never close the script element.
pub fn to_script_json(blocks: &[JsonLd]) -> serde_json::Result<String> {
    let json = serde_json::to_string(blocks)?;
    Ok(json
        .replace('<', "\\u003c")
        .replace('>', "\\u003e")
        .replace('&', "\\u0026"))
}
