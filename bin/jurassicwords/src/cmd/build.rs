//! Build command - writes the landing page to static files

use std::{path::Path, time::Instant};

use color_eyre::eyre::{Result, WrapErr};
use jurassic_core::Config;
use jurassic_generator::Builder;

/// Run the build command.
///
/// Writes `index.html`, `robots.txt` and `sitemap.xml` to the output directory.
pub fn run(config_path: &Path, output: Option<&Path>) -> Result<()> {
    let start = Instant::now();
    tracing::info!(?config_path, ?output, "Starting build");

    let mut config = Config::load_with_env(config_path).wrap_err("Failed to load configuration")?;

    // Override output directory if specified
    if let Some(out) = output {
        config.build.output_dir = out.to_string_lossy().to_string();
    }

    tracing::debug!(?config, "Loaded configuration");

    let output_dir = config.build.output_dir.clone();
    let stats = Builder::new(config, &output_dir)
        .build()
        .wrap_err("Build failed")?;

    let duration = start.elapsed();

    println!();
    println!("  Build completed successfully!");
    println!();
    println!("  Files:      {}", stats.files);
    println!("  Bytes:      {}", stats.bytes);
    println!();
    println!("  Duration:   {:.2}s", duration.as_secs_f64());
    println!("  Output:     {output_dir}");
    println!();

    tracing::info!(?stats, ?duration, "Build completed successfully");

    Ok(())
}
