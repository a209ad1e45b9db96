//! `mrg cache` subcommands.

use super::CliConfig;
use super::common::CommandContext;
use crate::cache::{CoverArtCache, MetadataCache};
use crate::input::load_release_list;
use anyhow::Result;
use clap::{Args, Subcommand};
use colored::Colorize;
use std::path::PathBuf;

#[derive(Args)]
pub struct CacheCommand {
    #[command(subcommand)]
    command: CacheSubcommand,
}

#[derive(Subcommand)]
enum CacheSubcommand {
    /// Show which ids have cached metadata and cover art
    Status {
        /// ID file listing the releases to check
        id_file: PathBuf,
    },

    /// Delete cached metadata and cover art for every id in the file
    Clean {
        /// ID file listing the releases to remove
        id_file: PathBuf,
    },
}

/// Per-id cache presence.
#[derive(Debug, Clone, PartialEq, Eq)]
struct CacheEntryStatus {
    id: String,
    metadata: bool,
    /// A metadata unit exists but does not decode; the next run refetches it
    incomplete: bool,
    cover: bool,
}

impl CacheCommand {
    pub async fn execute(self, config: &CliConfig) -> Result<()> {
        let ctx = CommandContext::load(config).await?;
        let metadata = MetadataCache::with_dir(ctx.cache_dir.clone());
        let covers = CoverArtCache::with_dir(ctx.cache_dir.clone());

        match self.command {
            CacheSubcommand::Status { id_file } => {
                let requests = load_release_list(&id_file).await?;
                let mut statuses = Vec::with_capacity(requests.len());

                for request in &requests {
                    let decoded = metadata.load(&request.id).await?.is_some();
                    statuses.push(CacheEntryStatus {
                        id: request.id.clone(),
                        metadata: decoded,
                        incomplete: !decoded && metadata.contains(&request.id),
                        cover: covers.contains(&request.id),
                    });
                }

                print_status(&ctx.cache_dir, &statuses);
            }
            CacheSubcommand::Clean { id_file } => {
                let requests = load_release_list(&id_file).await?;
                let mut removed = 0usize;

                for request in &requests {
                    if metadata.remove(&request.id).await? {
                        removed += 1;
                    }
                    if covers.remove(&request.id).await? {
                        removed += 1;
                    }
                }

                tracing::debug!("Removed {removed} cache units from {}", ctx.cache_dir.display());
                if !config.quiet {
                    println!(
                        "{} Removed {} cached files for {} releases",
                        "✓".green(),
                        removed,
                        requests.len()
                    );
                }
            }
        }

        Ok(())
    }
}

fn mark(present: bool) -> colored::ColoredString {
    if present { "✓".green() } else { "✗".red() }
}

fn print_status(cache_dir: &std::path::Path, statuses: &[CacheEntryStatus]) {
    println!("{} {}", "Cache directory:".bold(), cache_dir.display());
    println!();
    println!("  {:<8} {:<6} {}", "metadata".cyan(), "cover".cyan(), "id".cyan());

    for status in statuses {
        let note = if status.incomplete {
            " (incomplete metadata, will be refetched)".yellow().to_string()
        } else {
            String::new()
        };
        println!(
            "  {:<8} {:<6} {}{}",
            mark(status.metadata),
            mark(status.cover),
            status.id,
            note
        );
    }

    let complete = statuses.iter().filter(|s| s.metadata && s.cover).count();
    println!();
    println!("{complete}/{} releases fully cached", statuses.len());
}
