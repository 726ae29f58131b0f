use std::collections::BTreeSet;
use std::error::Error;
use std::iter;

use tracing::{info, warn};

use crate::model::{ArticleRef, FailureRecord, NormalizedTable, RunResult, WinRecord};

use super::derive::{derive_date, derive_title};
use super::error::{PageFailure, PipelineError};
use super::extract::extract_table;
use super::fetch::PageSource;
use super::html::PageParser;
use super::index::resolve_index;
use super::matches::collect_matches;
use super::normalize::normalize;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageOutcome {
    Checked(Vec<WinRecord>),
    Failed(FailureRecord),
}

#[derive(Debug, Default)]
struct RunAccumulator {
    wins: Vec<WinRecord>,
    failures: Vec<FailureRecord>,
}

impl RunAccumulator {
    fn absorb(mut self, outcome: PageOutcome) -> Self {
        match outcome {
            PageOutcome::Checked(wins) => self.wins.extend(wins),
            PageOutcome::Failed(failure) => self.failures.push(failure),
        }
        self
    }

    fn finish(self) -> RunResult {
        RunResult {
            wins: non_empty(self.wins),
            failures: non_empty(self.failures),
        }
    }
}

fn non_empty<T>(items: Vec<T>) -> Option<Vec<T>> {
    if items.is_empty() { None } else { Some(items) }
}

/// Drives index resolution and the per-page pipeline against one page source.
pub struct Checker<'a> {
    source: &'a dyn PageSource,
    parser: PageParser,
    targets: BTreeSet<i64>,
}

impl<'a> Checker<'a> {
    pub fn new(source: &'a dyn PageSource, targets: BTreeSet<i64>) -> Result<Self, PipelineError> {
        Ok(Self {
            source,
            parser: PageParser::new()?,
            targets,
        })
    }

    pub fn resolve_index(&self) -> Result<Vec<ArticleRef>, PipelineError> {
        resolve_index(self.source, &self.parser)
    }

    /// One article at `entry` (0 = newest). Yields at most one failure record.
    pub fn run_single(
        &self,
        index: &[ArticleRef],
        entry: usize,
    ) -> Result<RunResult, PipelineError> {
        let reference = index.get(entry).ok_or(PipelineError::EntryOutOfRange {
            entry,
            len: index.len(),
        })?;

        let outcome = self.process_page(reference)?;
        Ok(RunAccumulator::default().absorb(outcome).finish())
    }

    /// Every article in index order. Page failures are collected; structural
    /// errors stop the run.
    pub fn run_all(&self, index: &[ArticleRef]) -> Result<RunResult, PipelineError> {
        index
            .iter()
            .try_fold(
                RunAccumulator::default(),
                |acc, reference| -> Result<_, PipelineError> {
                    Ok(acc.absorb(self.process_page(reference)?))
                },
            )
            .map(RunAccumulator::finish)
    }

    pub fn process_page(&self, reference: &ArticleRef) -> Result<PageOutcome, PipelineError> {
        match self.load_table(reference) {
            Ok(table) => {
                let wins = collect_matches(reference, &table, &self.targets)?;
                info!(
                    url = %reference,
                    rows = table.records.len(),
                    wins = wins.len(),
                    "checked page"
                );
                Ok(PageOutcome::Checked(wins))
            }
            Err(failure) => {
                let reason = error_chain(&failure);
                warn!(url = %reference, reason = %reason, "page extraction failed");
                Ok(PageOutcome::Failed(failure_record(reference, reason)?))
            }
        }
    }

    fn load_table(&self, reference: &ArticleRef) -> Result<NormalizedTable, PageFailure> {
        let raw = extract_table(self.source, &self.parser, reference)?;
        Ok(normalize(raw)?)
    }
}

fn failure_record(
    reference: &ArticleRef,
    reason: String,
) -> Result<FailureRecord, PipelineError> {
    Ok(FailureRecord {
        date: derive_date(reference)?,
        title: derive_title(reference)?,
        url: reference.clone(),
        reason,
    })
}

/// `outer: cause: root cause`, so transport details survive into the record.
pub fn error_chain(err: &(dyn Error + 'static)) -> String {
    iter::successors(Some(err), |&current| current.source())
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(": ")
}
