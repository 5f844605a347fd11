use crate::commands::{print_json, Context};
use anyhow::{Context as _, Result};
use clap::Args;
use roster_core::dto::NormalizeReport;
use roster_core::rules::{normalize_each, split_results};
use std::path::PathBuf;
use tracing::{info, warn};

#[derive(Debug, Args)]
pub struct NormalizeArgs {
    /// Raw user file; defaults to `raw_path` from the config
    #[arg(long)]
    pub input: Option<PathBuf>,
    /// Clean record file; defaults to `clean_path` from the config
    #[arg(long)]
    pub out: Option<PathBuf>,
    /// Write the records that normalize and report the others instead of failing
    #[arg(long)]
    pub skip_invalid: bool,
}

pub fn normalize(ctx: &Context<'_>, args: NormalizeArgs) -> Result<()> {
    let report = normalize_file(ctx, args.input, args.out, args.skip_invalid)?;
    if ctx.json {
        return print_json(&report);
    }
    print_report(&report);
    Ok(())
}

pub(crate) fn normalize_file(
    ctx: &Context<'_>,
    input: Option<PathBuf>,
    out: Option<PathBuf>,
    skip_invalid: bool,
) -> Result<NormalizeReport> {
    let input = input.unwrap_or_else(|| ctx.config.raw_path.clone());
    let out = out.unwrap_or_else(|| ctx.config.clean_path.clone());

    let users = roster_store::read_raw_users(&input)
        .with_context(|| format!("read raw users {}", input.display()))?;

    let (records, failures) = if skip_invalid {
        split_results(normalize_each(&users))
    } else {
        let records = roster_core::normalize(&users)
            .with_context(|| format!("normalize users from {}", input.display()))?;
        (records, Vec::new())
    };

    let mut warnings = Vec::with_capacity(failures.len());
    for failure in &failures {
        warn!(index = failure.index, error = %failure.source, "skipping record");
        warnings.push(format!("skipping {failure}"));
    }

    roster_store::write_json(&out, &records)
        .with_context(|| format!("write clean records {}", out.display()))?;
    info!(path = %out.display(), written = records.len(), "clean records saved");

    Ok(NormalizeReport {
        input: input.display().to_string(),
        output: out.display().to_string(),
        read: users.len(),
        written: records.len(),
        skipped: failures.len(),
        warnings,
    })
}

pub(crate) fn print_report(report: &NormalizeReport) {
    println!(
        "Normalized {} of {} users to {}",
        report.written, report.read, report.output
    );
    if !report.warnings.is_empty() {
        println!("Warnings:");
        for warning in &report.warnings {
            println!("- {}", warning);
        }
    }
}
