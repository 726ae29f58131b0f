use tracing::debug;

use crate::model::{ArticleRef, RawTable};

use super::error::ExtractError;
use super::fetch::PageSource;
use super::html::PageParser;

/// Pages that publish the numbers as prose have no prize table; that is
/// reported as `NoTable`, not as a transport problem.
pub fn extract_table(
    source: &dyn PageSource,
    parser: &PageParser,
    reference: &ArticleRef,
) -> Result<RawTable, ExtractError> {
    let html = source.fetch(reference.as_str())?;
    let table = parser.prize_table(&html).ok_or(ExtractError::NoTable)?;

    debug!(
        url = %reference,
        rows = table.rows.len(),
        columns = table.column_count(),
        "extracted prize table"
    );

    Ok(table)
}
