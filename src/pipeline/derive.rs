use chrono::NaiveDate;

use crate::model::ArticleRef;

use super::error::PipelineError;
use super::site::{DATE_INPUT_FORMAT, DATE_OUTPUT_FORMAT, DATE_SPAN, TITLE_START, TITLE_SUFFIX};

/// `.../2025/12/06/...` -> `06.12.2025`.
pub fn derive_date(reference: &ArticleRef) -> Result<String, PipelineError> {
    let span = reference
        .as_str()
        .get(DATE_SPAN)
        .ok_or_else(|| identifier_format(reference))?;

    let date = NaiveDate::parse_from_str(span, DATE_INPUT_FORMAT).map_err(|source| {
        PipelineError::DateFormat {
            reference: reference.to_string(),
            span: span.to_string(),
            source,
        }
    })?;

    Ok(date.format(DATE_OUTPUT_FORMAT).to_string())
}

pub fn derive_title(reference: &ArticleRef) -> Result<String, PipelineError> {
    let rest = reference
        .as_str()
        .get(TITLE_START..)
        .ok_or_else(|| identifier_format(reference))?;

    Ok(rest.strip_suffix(TITLE_SUFFIX).unwrap_or(rest).to_string())
}

fn identifier_format(reference: &ArticleRef) -> PipelineError {
    PipelineError::IdentifierFormat {
        reference: reference.to_string(),
    }
}
