use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request to {url} failed")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} answered with HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("failed to read body of {url}")]
    Body {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("page could not be fetched")]
    Fetch(#[from] FetchError),

    #[error("no prize table on page")]
    NoTable,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum NormalizeError {
    #[error("prize table has {columns} columns, expected 3")]
    UnexpectedShape { columns: usize },
}

/// Why a single page produced a failure record instead of matches.
#[derive(Debug, Error)]
pub enum PageFailure {
    #[error(transparent)]
    Extract(#[from] ExtractError),

    #[error(transparent)]
    Normalize(#[from] NormalizeError),
}

/// Failures that invalidate the whole run.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("failed to fetch the article listing")]
    ListingFetch(#[source] FetchError),

    #[error("sentinel link {sentinel} not found among {discovered} listed articles")]
    IndexAnchorMissing { sentinel: String, discovered: usize },

    #[error("article link {reference} does not hold a date and title at the expected offsets")]
    IdentifierFormat { reference: String },

    #[error("article link {reference} carries invalid date {span:?}")]
    DateFormat {
        reference: String,
        span: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("entry {entry} is outside the index of {len} articles")]
    EntryOutOfRange { entry: usize, len: usize },

    #[error("invalid selector {selector:?}: {message}")]
    Selector { selector: String, message: String },

    #[error("invalid pattern")]
    Pattern(#[from] regex::Error),
}
