//! Jurassic Words Generator Library
//!
//! Rendering engine for the Jurassic Words landing page.
//!
//! # Modules
//!
//! - [`html`] - Landing page HTML generation
//! - [`jsonld`] - schema.org structured data blocks
//! - [`robots`] - robots.txt generation
//! - [`sitemap`] - XML sitemap generation
//! - [`build`] - Static build orchestration

pub mod build;
pub mod html;
pub mod jsonld;
pub mod robots;
pub mod sitemap;

pub use build::{BuildStats, Builder};
pub use html::{HomePageRenderer, RenderedPage};
pub use jsonld::{JsonLd, StructuredDataBlock};
pub use robots::RobotsGenerator;
pub use sitemap::SitemapGenerator;
