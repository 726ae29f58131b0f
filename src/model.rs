use std::fmt;

use serde::Serialize;

/// Link to one daily article, e.g. `https://lionshorbsulz.de/2025/12/01/die-ersten-gewinnzahlen-2025/`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ArticleRef(String);

impl ArticleRef {
    pub fn new(link: impl Into<String>) -> Self {
        Self(link.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ArticleRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Cells of one parsed `<table>`, row-major, no header assumed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawTable {
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    pub fn column_count(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotNumeric;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedRecord {
    pub sponsor: String,
    pub prize: String,
    pub winning_number: Result<i64, NotNumeric>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizedTable {
    pub records: Vec<NormalizedRecord>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WinRecord {
    pub date: String,
    pub sponsor: String,
    pub prize: String,
    pub winning_number: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FailureRecord {
    pub date: String,
    pub title: String,
    pub url: ArticleRef,
    pub reason: String,
}

/// Aggregate of one run. `None` means nothing to report, never an empty list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunResult {
    pub wins: Option<Vec<WinRecord>>,
    pub failures: Option<Vec<FailureRecord>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RunMode {
    SingleDay,
    AllDays,
}

impl RunMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::SingleDay => "single_day",
            Self::AllDays => "all_days",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub mode: RunMode,
    pub generated_at: String,
    pub target_numbers: Vec<i64>,
    pub pages_checked: usize,
    pub wins: Option<Vec<WinRecord>>,
    pub failures: Option<Vec<FailureRecord>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct IndexEntry {
    pub position: usize,
    pub date: String,
    pub title: String,
    pub url: ArticleRef,
}
