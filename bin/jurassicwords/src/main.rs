//! Jurassic Words CLI
//!
//! Serves or builds the Jurassic Words landing page.
//!
//! This is the binary entry point. The library functionality is in `lib.rs`.

use clap::Parser;
use color_eyre::eyre::Result;

/// Command-line interface for Jurassic Words.
#[derive(Parser)]
#[command(
    name = "jurassicwords",
    version,
    about = "Dinosaur facts, word games and printables for kids"
)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "jurassicwords.toml")]
    config: std::path::PathBuf,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

/// Available CLI commands.
#[derive(clap::Subcommand)]
enum Commands {
    /// Serve the landing page over HTTP
    Serve {
        /// Interface to bind (overrides server.host)
        #[arg(long)]
        host: Option<String>,
        /// Port to listen on (overrides server.port)
        #[arg(short, long)]
        port: Option<u16>,
    },
    /// Write the landing page and crawl files to a directory
    Build {
        /// Output directory (overrides build.output_dir)
        #[arg(short, long)]
        output: Option<std::path::PathBuf>,
    },
    /// Validate configuration and the rendered page
    Check {
        /// Treat warnings as errors
        #[arg(long)]
        strict: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    jurassicwords::init_tracing(cli.verbose);

    match cli.command {
        Commands::Serve { host, port } => {
            jurassicwords::cmd::serve::run(&cli.config, host.as_deref(), port).await?;
        }
        Commands::Build { output } => {
            jurassicwords::cmd::build::run(&cli.config, output.as_deref())?;
        }
        Commands::Check { strict } => {
            jurassicwords::cmd::check::run(&cli.config, strict)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[test]
    fn test_cli_serve_command_parsing() {
        let args = ["jurassicwords", "serve", "--host", "0.0.0.0", "--port", "8080"];
        let cli = Cli::parse_from(args);

        assert_eq!(cli.config, std::path::PathBuf::from("jurassicwords.toml"));
        assert_eq!(cli.verbose, 0);

        match cli.command {
            Commands::Serve { host, port } => {
                assert_eq!(host.as_deref(), Some("0.0.0.0"));
                assert_eq!(port, Some(8080));
            }
            _ => panic!("Expected Serve command"),
        }
    }

    #[test]
    fn test_cli_serve_defaults_to_config() {
        let cli = Cli::parse_from(["jurassicwords", "serve"]);

        match cli.command {
            Commands::Serve { host, port } => {
                assert!(host.is_none());
                assert!(port.is_none());
            }
            _ => panic!("Expected Serve command"),
        }
    }

    #[test]
    fn test_cli_build_command_parsing() {
        let cli = Cli::parse_from(["jurassicwords", "build", "--output", "dist"]);

        match cli.command {
            Commands::Build { output } => {
                assert_eq!(output, Some(std::path::PathBuf::from("dist")));
            }
            _ => panic!("Expected Build command"),
        }
    }

    #[test]
    fn test_cli_check_command_parsing() {
        let cli = Cli::parse_from(["jurassicwords", "check", "--strict"]);

        match cli.command {
            Commands::Check { strict } => {
                assert!(strict);
            }
            _ => panic!("Expected Check command"),
        }
    }

    #[test]
    fn test_cli_verbosity_flags() {
        let cli = Cli::parse_from(["jurassicwords", "-vvv", "build"]);
        assert_eq!(cli.verbose, 3);
    }

    #[test]
    fn test_cli_custom_config_path() {
        let cli = Cli::parse_from(["jurassicwords", "--config", "site.toml", "check"]);
        assert_eq!(cli.config, std::path::PathBuf::from("site.toml"));
    }
}
