use crate::commands::{print_json, Context};
use anyhow::{Context as _, Result};
use clap::Args;
use roster_core::dto::FetchReport;
use roster_fetch::{fetch_to, HttpSource};
use std::path::PathBuf;
use tracing::info;

#[derive(Debug, Args)]
pub struct FetchArgs {
    /// Source URL; defaults to `source_url` from the config
    #[arg(long)]
    pub url: Option<String>,
    /// Destination for the raw payload; defaults to `raw_path` from the config
    #[arg(long)]
    pub out: Option<PathBuf>,
}

pub fn fetch(ctx: &Context<'_>, args: FetchArgs) -> Result<()> {
    let report = fetch_raw(ctx, args.url, args.out)?;
    if ctx.json {
        return print_json(&report);
    }
    print_report(&report);
    Ok(())
}

pub(crate) fn fetch_raw(
    ctx: &Context<'_>,
    url: Option<String>,
    out: Option<PathBuf>,
) -> Result<FetchReport> {
    let url = url.unwrap_or_else(|| ctx.config.source_url.clone());
    let out = out.unwrap_or_else(|| ctx.config.raw_path.clone());
    let source = HttpSource::new(url.clone()).with_user_agent(ctx.config.fetch.user_agent.clone());

    let fetched = fetch_to(&source, &out).with_context(|| format!("fetch {url}"))?;
    info!(
        path = %fetched.path.display(),
        entries = ?fetched.entries,
        size_bytes = fetched.size_bytes,
        "raw users saved"
    );

    Ok(FetchReport {
        source: url,
        output: fetched.path.display().to_string(),
        entries: fetched.entries,
    })
}

pub(crate) fn print_report(report: &FetchReport) {
    match report.entries {
        Some(count) => println!(
            "Fetched {} users from {} to {}",
            count, report.source, report.output
        ),
        None => println!("Fetched {} to {}", report.source, report.output),
    }
}
