use tracing::debug;

use crate::model::{NormalizedRecord, NormalizedTable, NotNumeric, RawTable};

use super::error::NormalizeError;
use super::site::CANONICAL_HEADER;

// Largest magnitude an f64 still represents as an exact integer.
const MAX_EXACT_FLOAT: f64 = 9_007_199_254_740_992.0;

/// Repairs a raw prize table into `Sponsor | Gewinn | Gewinnzahl` records.
///
/// Some articles repeat the header as their first body row, others start
/// directly with data. A first row equal to the canonical header is dropped;
/// any other first row is kept as data. Tables that are not exactly three
/// columns wide are rejected rather than guessed at.
pub fn normalize(raw: RawTable) -> Result<NormalizedTable, NormalizeError> {
    let columns = raw.column_count();
    if columns != CANONICAL_HEADER.len() {
        return Err(NormalizeError::UnexpectedShape { columns });
    }

    let mut rows = raw.rows.into_iter().peekable();
    if rows.next_if(|first| is_canonical_header(first)).is_some() {
        debug!("dropped header row baked into table body");
    }

    Ok(NormalizedTable {
        records: rows.map(into_record).collect(),
    })
}

fn is_canonical_header(row: &[String]) -> bool {
    row.len() == CANONICAL_HEADER.len()
        && row
            .iter()
            .zip(CANONICAL_HEADER)
            .all(|(cell, expected)| cell.trim() == expected)
}

fn into_record(row: Vec<String>) -> NormalizedRecord {
    let mut cells = row.into_iter();
    let sponsor = cells.next().unwrap_or_default();
    let prize = cells.next().unwrap_or_default();
    let number = cells.next().unwrap_or_default();

    NormalizedRecord {
        sponsor,
        prize,
        winning_number: coerce_number(&number),
    }
}

/// Integer text, or float text without a fractional part (`"692.0"`).
pub fn coerce_number(cell: &str) -> Result<i64, NotNumeric> {
    let trimmed = cell.trim();
    if let Ok(value) = trimmed.parse::<i64>() {
        return Ok(value);
    }

    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() && value.fract() == 0.0 && value.abs() <= MAX_EXACT_FLOAT => {
            Ok(value as i64)
        }
        _ => Err(NotNumeric),
    }
}
