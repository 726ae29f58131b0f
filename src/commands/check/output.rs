use std::io::{self, Write};

use anyhow::{Context, Result};

use crate::model::{FailureRecord, RunMode, RunReport, WinRecord};

const WIN_HEADERS: [&str; 4] = ["Date", "Sponsor", "Prize", "Number"];

pub(super) fn write_json_report(report: &RunReport) -> Result<()> {
    let mut output = io::BufWriter::new(io::stdout().lock());
    serde_json::to_writer_pretty(&mut output, report)
        .context("failed to serialize check json output")?;
    writeln!(output)?;
    output.flush()?;
    Ok(())
}

pub(super) fn write_text_report(report: &RunReport) -> Result<()> {
    let mut output = io::BufWriter::new(io::stdout().lock());
    render_text(report, &mut output)?;
    output.flush()?;
    Ok(())
}

pub(super) fn render_text<W: Write>(report: &RunReport, output: &mut W) -> io::Result<()> {
    let numbers = report
        .target_numbers
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    writeln!(
        output,
        "Checked {} page(s) for numbers {numbers}.",
        report.pages_checked
    )?;

    match &report.wins {
        None => match report.mode {
            RunMode::SingleDay => writeln!(output, "No number won on the checked day.")?,
            RunMode::AllDays => writeln!(output, "No number won on any published day.")?,
        },
        Some(wins) => {
            writeln!(output, "Congratulations! {} prize(s) won:", wins.len())?;
            render_wins(wins, output)?;
        }
    }

    if let Some(failures) = &report.failures {
        writeln!(output)?;
        writeln!(
            output,
            "{} page(s) could not be evaluated, check them by hand:",
            failures.len()
        )?;
        render_failures(failures, output)?;
    }

    Ok(())
}

fn render_wins<W: Write>(wins: &[WinRecord], output: &mut W) -> io::Result<()> {
    let rows = wins
        .iter()
        .map(|win| {
            [
                win.date.clone(),
                win.sponsor.clone(),
                win.prize.clone(),
                win.winning_number.to_string(),
            ]
        })
        .collect::<Vec<_>>();

    let mut widths = WIN_HEADERS.map(|header| header.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    write_row(output, &WIN_HEADERS.map(String::from), &widths)?;
    for row in &rows {
        write_row(output, row, &widths)?;
    }
    Ok(())
}

fn write_row<W: Write>(output: &mut W, cells: &[String; 4], widths: &[usize; 4]) -> io::Result<()> {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| format!("{cell:<width$}"))
        .collect::<Vec<_>>()
        .join("  ");
    writeln!(output, "  {}", line.trim_end())
}

fn render_failures<W: Write>(failures: &[FailureRecord], output: &mut W) -> io::Result<()> {
    for failure in failures {
        writeln!(
            output,
            "  {} {} ({})\n    {}",
            failure.date, failure.title, failure.reason, failure.url
        )?;
    }
    Ok(())
}
