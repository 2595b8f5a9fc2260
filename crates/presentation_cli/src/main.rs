//! RideVibe CLI
//!
//! Runs the vibe pipeline and catalog lookups against the configured video
//! server without going through the HTTP API.

#![allow(clippy::print_stdout)]

mod output;

use std::{
    path::{Path, PathBuf},
    process::ExitCode,
};

use application::{CatalogService, VibeService};
use clap::{Parser, Subcommand};
use domain::{Query, VideoId, format_timestamp};
use infrastructure::{AppConfig, LoggingConfig, VideoServerAdapters, init_tracing};

/// RideVibe CLI
#[derive(Debug, Parser)]
#[command(name = "ridevibe-cli")]
#[command(author, version, about = "RideVibe trail video search CLI", long_about = None)]
struct Cli {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Configuration file (defaults to ./config.toml when present)
    #[arg(short, long, env = "RIDEVIBE_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Ask for a trail video or riding advice
    Ask {
        /// Free-text query
        query: String,

        /// Print the response as JSON
        #[arg(long)]
        json: bool,
    },

    /// List indexed videos
    Videos,

    /// Show the metadata of one video
    Video {
        /// Video id
        id: String,
    },

    /// Check whether the video server is reachable
    Status,

    /// Format seconds as M:SS
    FormatTime {
        /// Offset in seconds
        #[arg(allow_negative_numbers = true)]
        seconds: f64,
    },
}

/// Determine log filter level from verbosity count
const fn log_filter_from_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Load configuration, start logging and build the video server adapters
fn connect(
    config_path: Option<&Path>,
    verbose: u8,
) -> anyhow::Result<(AppConfig, VideoServerAdapters)> {
    let config = AppConfig::load_from(config_path)?;
    init_tracing(&LoggingConfig {
        filter: log_filter_from_verbosity(verbose).to_string(),
        format: config.logging.format,
    })?;

    let adapters = VideoServerAdapters::from_config(config.backend.clone())
        .map_err(|e| anyhow::anyhow!("Failed to initialize video server client: {e}"))?;
    Ok((config, adapters))
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    let config_path = cli.config.as_deref();

    match cli.command {
        Commands::FormatTime { seconds } => {
            println!("{}", format_timestamp(seconds));
        },

        Commands::Ask { query, json } => {
            let query = Query::new(query)?;
            let (_, adapters) = connect(config_path, cli.verbose)?;
            let vibe = VibeService::new(adapters.classifier, adapters.search, adapters.catalog);
            let response = vibe.respond(&query).await;

            if json {
                println!("{}", serde_json::to_string_pretty(&response)?);
            } else {
                println!("{}", output::render_response(&response));
            }
        },

        Commands::Videos => {
            let (_, adapters) = connect(config_path, cli.verbose)?;
            let catalog = CatalogService::new(adapters.catalog);
            println!("{}", output::render_catalog(&catalog.list_videos().await));
        },

        Commands::Video { id } => {
            let video_id = VideoId::new(id)?;
            let (_, adapters) = connect(config_path, cli.verbose)?;
            let catalog = CatalogService::new(adapters.catalog);
            let Some(metadata) = catalog.video(&video_id).await else {
                anyhow::bail!("Video {video_id} not found");
            };
            println!("{}", serde_json::to_string_pretty(&metadata)?);
        },

        Commands::Status => {
            let (config, adapters) = connect(config_path, cli.verbose)?;
            let catalog = CatalogService::new(adapters.catalog);
            let base_url = &config.backend.base_url;
            if catalog.is_available().await {
                println!("Video server at {base_url} is healthy");
            } else {
                println!("Video server at {base_url} is unreachable");
                return Ok(ExitCode::FAILURE);
            }
        },
    }

    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_filter_levels() {
        assert_eq!(log_filter_from_verbosity(0), "warn");
        assert_eq!(log_filter_from_verbosity(1), "info");
        assert_eq!(log_filter_from_verbosity(2), "debug");
        assert_eq!(log_filter_from_verbosity(9), "trace");
    }

    #[test]
    fn cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_ask_with_json() {
        let cli = Cli::try_parse_from(["ridevibe-cli", "ask", "steep canyon", "--json"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Ask { ref query, json: true } if query == "steep canyon"
        ));
    }

    #[test]
    fn parses_negative_seconds() {
        let cli = Cli::try_parse_from(["ridevibe-cli", "format-time", "-5"]).unwrap();
        assert!(matches!(cli.command, Commands::FormatTime { seconds } if seconds < 0.0));
    }

    #[test]
    fn parses_config_path() {
        let cli =
            Cli::try_parse_from(["ridevibe-cli", "-vv", "--config", "ride.toml", "status"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.config, Some(PathBuf::from("ride.toml")));
    }
}
