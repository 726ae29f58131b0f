use std::collections::BTreeSet;

use crate::model::{ArticleRef, NormalizedTable, WinRecord};

use super::derive::derive_date;
use super::error::PipelineError;

/// Rows whose number is one of `targets`, in table order. Non-numeric cells
/// never match. The date is only derived when something matched.
pub fn collect_matches(
    reference: &ArticleRef,
    table: &NormalizedTable,
    targets: &BTreeSet<i64>,
) -> Result<Vec<WinRecord>, PipelineError> {
    let hits = table
        .records
        .iter()
        .filter_map(|record| match record.winning_number {
            Ok(number) if targets.contains(&number) => Some((record, number)),
            _ => None,
        })
        .collect::<Vec<_>>();

    if hits.is_empty() {
        return Ok(Vec::new());
    }

    let date = derive_date(reference)?;

    Ok(hits
        .into_iter()
        .map(|(record, number)| WinRecord {
            date: date.clone(),
            sponsor: record.sponsor.clone(),
            prize: record.prize.clone(),
            winning_number: number,
        })
        .collect())
}
