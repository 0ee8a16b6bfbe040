//! Jurassic Words Core Library
//!
//! Core types, configuration, and error handling for the Jurassic Words landing page,
//! together with the hand-authored page content it renders.

pub mod config;
pub mod content;
pub mod error;
pub mod loader;
pub mod metadata;

pub use config::Config;
pub use content::{ContentSection, FaqEntry, SectionBody, SectionId};
pub use error::{CoreError, Result};
pub use loader::LoaderResult;
pub use metadata::{MetaTag, PageMetadata};
