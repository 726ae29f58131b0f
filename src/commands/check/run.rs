use std::time::Duration;

use anyhow::{Context, Result};
use tracing::info;

use crate::cli::CheckArgs;
use crate::model::{RunMode, RunReport, RunResult};
use crate::pipeline::site::target_numbers;
use crate::pipeline::{Checker, HttpSource};
use crate::util::{now_utc_string, write_json_pretty};

use super::output::{write_json_report, write_text_report};

pub fn run(args: CheckArgs) -> Result<()> {
    let targets = target_numbers(&args.numbers);
    let source = HttpSource::new(Duration::from_secs(args.timeout_secs))?;
    let checker = Checker::new(&source, targets.clone())?;

    let index = checker
        .resolve_index()
        .context("failed to resolve the article index")?;

    let mode = if args.all {
        RunMode::AllDays
    } else {
        RunMode::SingleDay
    };
    info!(
        mode = mode.as_str(),
        articles = index.len(),
        entry = args.entry,
        "starting check"
    );

    let (result, pages_checked) = match mode {
        RunMode::AllDays => (checker.run_all(&index)?, index.len()),
        RunMode::SingleDay => (checker.run_single(&index, args.entry)?, 1),
    };

    let report = build_report(mode, targets.into_iter().collect(), pages_checked, result);
    info!(
        mode = mode.as_str(),
        pages_checked = report.pages_checked,
        wins = report.wins.as_ref().map_or(0, Vec::len),
        failures = report.failures.as_ref().map_or(0, Vec::len),
        "check completed"
    );

    if let Some(path) = &args.report_path {
        write_json_pretty(path, &report)?;
        info!(path = %path.display(), "wrote run report");
    }

    if args.json {
        write_json_report(&report)
    } else {
        write_text_report(&report)
    }
}

pub(super) fn build_report(
    mode: RunMode,
    target_numbers: Vec<i64>,
    pages_checked: usize,
    result: RunResult,
) -> RunReport {
    RunReport {
        mode,
        generated_at: now_utc_string(),
        target_numbers,
        pages_checked,
        wins: result.wins,
        failures: result.failures,
    }
}
