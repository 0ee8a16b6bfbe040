//! Page metadata for the `<head>` of the landing page.

use crate::config::Config;

pub const TITLE: &str = "Jurassic Words | Dinosaur Facts, Word Games, Printables for Kids";

pub const DESCRIPTION: &str = "Learn about dinosaurs with kid friendly facts, timelines, and \
                               vocabulary. Play dinosaur word games, try printable activities, \
                               and explore prehistoric science with classrooms and families.";

pub const KEYWORDS: &[&str] = &[
    "dinosaurs for kids",
    "dinosaur facts",
    "dinosaur word games",
    "dinosaur vocabulary",
    "printable dinosaur activities",
    "dinosaur worksheets",
    "prehistoric era timeline",
    "classroom science",
    "paleo facts",
    "word search",
    "crossword",
];

pub const ROBOTS_DIRECTIVES: &[&str] = &[
    "index",
    "follow",
    "max-image-preview:large",
    "max-snippet:-1",
    "max-video-preview:-1",
];

/// Social preview image, relative to the site root.
pub const OG_IMAGE_PATH: &str = "/og-image.jpg";

/// One element of the document head.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MetaTag {
    /// `<title>`
    Title(String),
    /// `<meta name=".." content="..">`
    Name { name: &'static str, content: String },
    /// `<meta property=".." content="..">`
    Property {
        property: &'static str,
        content: String,
    },
    /// `<link rel=".." href="..">`
    Link { rel: &'static str, href: String },
}

/// Metadata record for the landing page. Computed once per request or build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageMetadata {
    pub title: String,
    pub description: String,
    pub canonical_url: String,
    pub keywords: Vec<String>,
    pub og_image: String,
    pub robots_directives: Vec<String>,
}

impl PageMetadata {
    /// Build the home page metadata for the configured site.
    #[must_use]
    pub fn home(config: &Config) -> Self {
        Self {
            title: TITLE.to_string(),
            description: DESCRIPTION.to_string(),
            canonical_url: config.url_for("/"),
            keywords: KEYWORDS.iter().map(ToString::to_string).collect(),
            og_image: config.url_for(OG_IMAGE_PATH),
            robots_directives: ROBOTS_DIRECTIVES.iter().map(ToString::to_string).collect(),
        }
    }

    /// Head tags in document order.
    #[must_use]
    pub fn tags(&self) -> Vec<MetaTag> {
        let name = |name, content: &str| MetaTag::Name {
            name,
            content: content.to_string(),
        };
        let property = |property, content: &str| MetaTag::Property {
            property,
            content: content.to_string(),
        };

        vec![
            MetaTag::Title(self.title.clone()),
            name("description", &self.description),
            name("robots", &self.robots_directives.join(",")),
            name("keywords", &self.keywords.join(", ")),
            // Open Graph
            property("og:title", &self.title),
            property("og:description", &self.description),
            property("og:type", "website"),
            property("og:url", &self.canonical_url),
            property("og:image", &self.og_image),
            // Twitter
            name("twitter:card", "summary_large_image"),
            name("twitter:title", &self.title),
            name("twitter:description", &self.description),
            MetaTag::Link {
                rel: "canonical",
                href: self.canonical_url.clone(),
            },
        ]
    }
}
