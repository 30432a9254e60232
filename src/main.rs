//! `update-licence-lists` — regenerate the licence identifier lists used to
//! tell free packages from non-free ones.
//!
//! # Flow
//! 1. Parse CLI arguments ([`cli`]) and load config ([`config::load_config`]).
//! 2. For each registry in order (Fedora, SPDX, SUSE), run the [`pipeline`]:
//!    fetch ([`fetch`]), decode ([`decode`]), extract ([`registry`]),
//!    normalize and write ([`list`]).
//! 3. Merge every written list into the combined list ([`list::merge`]).
//! 4. Render the summary ([`report`]).
//! 5. Exit `0`, or `1` on the first failure of any stage.

mod cli;
mod config;
mod decode;
mod error;
mod fetch;
mod list;
mod models;
mod pipeline;
mod registry;
mod report;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use cli::{Cli, ReportFormat};
use config::load_config;
use fetch::Fetcher;
use list::merge::merge_lists;
use models::{ListSummary, SourceKind};
use pipeline::Pipeline;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = run(Cli::parse()).await {
        eprintln!("{} {:#}", "error:".red().bold(), err);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let base_dir = std::env::current_dir().context("cannot determine working directory")?;
    let mut config = load_config(&base_dir, cli.config.as_deref())?;
    if let Some(dir) = cli.output_dir {
        config.output_dir = dir;
    }

    let skipped: Vec<SourceKind> = cli.skip.iter().map(Into::into).collect();
    let show_progress = !cli.quiet && matches!(cli.report, ReportFormat::Terminal);

    let fetcher = Fetcher::new(&config, show_progress).context("failed to build HTTP client")?;
    let pipeline = Pipeline::new(&fetcher, &config.output_dir);

    let mut summaries: Vec<ListSummary> = Vec::new();

    for source in registry::all_sources() {
        let kind = source.kind();
        if skipped.contains(&kind) {
            if !cli.quiet {
                eprintln!("  {} {} skipped", "→".cyan(), kind);
            }
            continue;
        }

        let location = config.sources.location(kind);
        let written = pipeline.run(source.as_ref(), location).await?;

        if !cli.quiet {
            for summary in &written {
                eprintln!(
                    "  {} {} {} identifiers",
                    "→".cyan(),
                    summary.file,
                    summary.entries
                );
            }
        }
        summaries.extend(written);
    }

    if !cli.no_merge {
        let merged = merge_lists(&config.output_dir, &config.combined_file)?;
        summaries.push(ListSummary {
            file: config.combined_file.clone(),
            origin: "merge".to_string(),
            entries: merged.len(),
        });
    }

    match cli.report {
        ReportFormat::Terminal => {
            report::terminal::render(&summaries, &config.output_dir, cli.quiet);
        }
        ReportFormat::Json => report::render_json(&summaries)?,
    }

    Ok(())
}
