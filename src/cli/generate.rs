use super::CliConfig;
use super::common::CommandContext;
use crate::diagnostics::TracingSink;
use crate::pipeline::Pipeline;
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use std::path::PathBuf;

/// `mrg gen`: cover grid substituted into a page template.
#[derive(Args)]
pub struct GenerateCommand {
    /// Colon-delimited list of release ids, kinds and urls
    id_file: PathBuf,

    /// HTML template containing a [CONTENTS] placeholder
    template_file: PathBuf,

    /// Where to write the page
    output_file: PathBuf,
}

impl GenerateCommand {
    pub async fn execute(self, config: &CliConfig) -> Result<()> {
        let ctx = CommandContext::load(config).await?;
        let client = ctx.catalog_client()?;
        let sink = TracingSink;

        let report = Pipeline::new(ctx.cache_dir.clone(), &client, &sink)
            .force_refresh(config.refresh)
            .show_progress(config.show_progress())
            .cover_prefix(ctx.global.cover_prefix())
            .generate_gallery(&self.id_file, &self.template_file, &self.output_file)
            .await?;

        if !config.quiet {
            println!(
                "{} Wrote {} releases to {}",
                "✓".green(),
                report.releases,
                report.output.display()
            );
        }

        Ok(())
    }
}
