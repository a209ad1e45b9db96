//! Command-line interface for MRG.
//!
//! ```text
//! mrg gen <ID_FILE> <TEMPLATE_FILE> <OUTPUT_FILE>   # cover grid into a page template
//! mrg cv <ID_FILE> <OUTPUT_FILE>                    # year-grouped list for a CV page
//! mrg cache status <ID_FILE>                        # what is cached for each id
//! mrg cache clean <ID_FILE>                         # drop cached units for each id
//! ```
//!
//! Global flags are parsed once into a [`CliConfig`], which is passed to the
//! selected command instead of being stashed in the process environment.

mod cache;
pub mod common;
mod cv;
mod generate;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Settings derived from the global flags.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    /// `tracing` filter directive (`RUST_LOG` takes precedence)
    pub log_level: Option<String>,
    /// Suppress progress bars and success messages
    pub quiet: bool,
    /// Suppress progress bars
    pub no_progress: bool,
    /// Ignore cached units and refetch everything
    pub refresh: bool,
    /// Explicit config file
    pub config_path: Option<PathBuf>,
    /// Explicit cache directory
    pub cache_dir: Option<PathBuf>,
}

impl CliConfig {
    /// Whether progress bars may be drawn.
    #[must_use]
    pub fn show_progress(&self) -> bool {
        !self.quiet && !self.no_progress
    }
}

#[derive(Parser)]
#[command(
    name = "mrg",
    about = "Music Release Generator - render MusicBrainz releases into HTML",
    version,
    long_about = "Fetches release metadata and front cover art from MusicBrainz and the \
                  Cover Art Archive, caches them next to your page, and renders them as a \
                  cover grid (gen) or a year-grouped list for a CV (cv).\n\n\
                  The ID file lists one release per line as 'identifier:kind:url', where kind \
                  is 'original' or 'remix' and no field contains a colon:\n\n  \
                  3ba21ea2-3ff4-41b6-991e-6bd4d26ab223:remix:musicbrainz.org/release/3ba21ea2-3ff4-41b6-991e-6bd4d26ab223"
)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable debug output
    #[arg(short, long, global = true, visible_alias = "debug")]
    verbose: bool,

    /// Only print errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    /// Ignore cached data and do a hard refresh from MusicBrainz
    #[arg(long, global = true)]
    refresh: bool,

    /// Disable progress bars
    #[arg(long, global = true)]
    no_progress: bool,

    /// Path to the config file (default: ~/.mrg/config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Directory for cached metadata and cover art [env: MRG_CACHE_DIR]
    #[arg(long, global = true)]
    cache_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a cover grid into a template's [CONTENTS] placeholder
    Gen(generate::GenerateCommand),

    /// Render a year-grouped MUSIC section for a CV page
    Cv(cv::CvCommand),

    /// Inspect or clean cached releases
    Cache(cache::CacheCommand),
}

impl Cli {
    /// Parse-time flags to [`CliConfig`], set up logging, run the command.
    ///
    /// # Errors
    ///
    /// Returns whatever the selected command fails with.
    pub async fn execute(self) -> Result<()> {
        let config = self.build_config();
        common::init_logging(config.log_level.as_deref());
        self.execute_with_config(config).await
    }

    /// Translate global flags into a [`CliConfig`].
    #[must_use]
    pub fn build_config(&self) -> CliConfig {
        let log_level = if self.verbose {
            Some("debug".to_string())
        } else if self.quiet {
            Some("error".to_string())
        } else {
            Some("info".to_string())
        };

        CliConfig {
            log_level,
            quiet: self.quiet,
            no_progress: self.no_progress,
            refresh: self.refresh,
            config_path: self.config.clone(),
            cache_dir: self.cache_dir.clone(),
        }
    }

    /// Run the selected command with an explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns whatever the selected command fails with.
    pub async fn execute_with_config(self, config: CliConfig) -> Result<()> {
        tracing::debug!("{}", crate::constants::APP_NAME);

        match self.command {
            Commands::Gen(cmd) => cmd.execute(&config).await,
            Commands::Cv(cmd) => cmd.execute(&config).await,
            Commands::Cache(cmd) => cmd.execute(&config).await,
        }
    }
}
