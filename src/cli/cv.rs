use super::CliConfig;
use super::common::CommandContext;
use crate::diagnostics::TracingSink;
use crate::pipeline::Pipeline;
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use std::path::PathBuf;

/// `mrg cv`: year-grouped MUSIC section.
#[derive(Args)]
pub struct CvCommand {
    /// Colon-delimited list of release ids, kinds and urls
    id_file: PathBuf,

    /// Where to write the section
    output_file: PathBuf,
}

impl CvCommand {
    pub async fn execute(self, config: &CliConfig) -> Result<()> {
        let ctx = CommandContext::load(config).await?;
        let client = ctx.catalog_client()?;
        let sink = TracingSink;

        tracing::debug!("Working in CV mode");

        let report = Pipeline::new(ctx.cache_dir.clone(), &client, &sink)
            .force_refresh(config.refresh)
            .show_progress(config.show_progress())
            .generate_cv(&self.id_file, &self.output_file)
            .await?;

        if !config.quiet {
            println!(
                "{} Wrote CV section with {} releases to {}",
                "✓".green(),
                report.releases,
                report.output.display()
            );
        }

        Ok(())
    }
}
