use tracing::{debug, info};

use crate::model::ArticleRef;

use super::error::PipelineError;
use super::fetch::PageSource;
use super::html::PageParser;
use super::site::{LISTING_URL, SENTINEL_LINK};

pub fn resolve_index(
    source: &dyn PageSource,
    parser: &PageParser,
) -> Result<Vec<ArticleRef>, PipelineError> {
    let html = source
        .fetch(LISTING_URL)
        .map_err(PipelineError::ListingFetch)?;

    let links = parser.article_links(&html);
    debug!(discovered = links.len(), "parsed article listing");

    let index = truncate_at_sentinel(links, SENTINEL_LINK)?;
    info!(
        articles = index.len(),
        newest = %index.first().map(ArticleRef::as_str).unwrap_or_default(),
        "resolved article index"
    );

    Ok(index)
}

/// Newest-first prefix ending with `sentinel` (inclusive).
pub fn truncate_at_sentinel(
    mut links: Vec<ArticleRef>,
    sentinel: &str,
) -> Result<Vec<ArticleRef>, PipelineError> {
    let position = links
        .iter()
        .position(|link| link.as_str() == sentinel)
        .ok_or_else(|| PipelineError::IndexAnchorMissing {
            sentinel: sentinel.to_string(),
            discovered: links.len(),
        })?;

    links.truncate(position + 1);
    Ok(links)
}
