//! Jurassic Words CLI Library
//!
//! This library provides the functionality behind the `jurassicwords` binary:
//! serving the landing page over HTTP, building it to static files, and checking
//! the configuration and rendered output.
//!
//! # Modules
//!
//! - [`cmd`] - Command implementations (serve, build, check)
//! - [`server`] - HTTP router and handlers
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//!
//! use jurassicwords::cmd;
//!
//! // Write index.html, robots.txt and sitemap.xml
//! cmd::build::run(Path::new("jurassicwords.toml"), Some(Path::new("public"))).unwrap();
//! ```

pub mod cmd;
pub mod server;

// Re-export core types for convenience
pub use jurassic_core::{Config, LoaderResult, PageMetadata};
pub use jurassic_generator::{BuildStats, Builder, HomePageRenderer};

/// Initialize tracing with the specified verbosity level.
///
/// # Arguments
///
/// * `verbose` - Verbosity level (0 = WARN, 1 = INFO, 2 = DEBUG, 3+ = TRACE)
pub fn init_tracing(verbose: u8) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();
}
