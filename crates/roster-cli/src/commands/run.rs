use crate::commands::{fetch, normalize, print_json, Context};
use anyhow::Result;
use clap::Args;
use roster_core::dto::RunReport;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct RunArgs {
    /// Source URL; defaults to `source_url` from the config
    #[arg(long)]
    pub url: Option<String>,
    /// Raw payload file; defaults to `raw_path` from the config
    #[arg(long)]
    pub raw: Option<PathBuf>,
    /// Clean record file; defaults to `clean_path` from the config
    #[arg(long)]
    pub clean: Option<PathBuf>,
    /// Write the records that normalize and report the others instead of failing
    #[arg(long)]
    pub skip_invalid: bool,
}

pub fn run(ctx: &Context<'_>, args: RunArgs) -> Result<()> {
    let raw = args.raw.unwrap_or_else(|| ctx.config.raw_path.clone());
    let fetched = fetch::fetch_raw(ctx, args.url, Some(raw.clone()))?;
    let normalized = normalize::normalize_file(ctx, Some(raw), args.clean, args.skip_invalid)?;
    let report = RunReport {
        fetch: fetched,
        normalize: normalized,
    };

    if ctx.json {
        return print_json(&report);
    }
    fetch::print_report(&report.fetch);
    normalize::print_report(&report.normalize);
    Ok(())
}
