use regex::Regex;
use scraper::{ElementRef, Html, Selector};

use crate::model::{ArticleRef, RawTable};

use super::error::PipelineError;
use super::site::{ARTICLE_HEADER_SELECTOR, ARTICLE_LINK_SELECTOR, PRIZE_TABLE_SELECTOR};

const MAX_SPAN: usize = 64;

/// Compiled selectors for the listing page and the daily articles.
pub struct PageParser {
    article_header: Selector,
    article_link: Selector,
    prize_table: Selector,
    row: Selector,
    cell: Selector,
    whitespace: Regex,
}

impl PageParser {
    pub fn new() -> Result<Self, PipelineError> {
        Ok(Self {
            article_header: compile_selector(ARTICLE_HEADER_SELECTOR)?,
            article_link: compile_selector(ARTICLE_LINK_SELECTOR)?,
            prize_table: compile_selector(PRIZE_TABLE_SELECTOR)?,
            row: compile_selector("tr")?,
            cell: compile_selector("th, td")?,
            whitespace: Regex::new(r"\s+")?,
        })
    }

    /// First link of every article header, in page order. Headers whose first
    /// anchor has no `href` are skipped.
    pub fn article_links(&self, html: &str) -> Vec<ArticleRef> {
        let document = Html::parse_document(html);

        document
            .select(&self.article_header)
            .filter_map(|header| header.select(&self.article_link).next())
            .filter_map(|anchor| anchor.value().attr("href"))
            .map(ArticleRef::new)
            .collect()
    }

    /// First prize table on the page, every row kept as data. `colspan`
    /// repeats a cell across columns, `rowspan` carries it into the rows below.
    pub fn prize_table(&self, html: &str) -> Option<RawTable> {
        let document = Html::parse_document(html);
        let table = document.select(&self.prize_table).next()?;

        let mut carried = Vec::<Option<SpanCarry>>::new();
        let mut rows = table
            .select(&self.row)
            .map(|row| self.row_cells(row, &mut carried))
            .filter(|cells| !cells.is_empty())
            .collect::<Vec<_>>();

        let width = rows.iter().map(Vec::len).max().unwrap_or(0);
        for row in &mut rows {
            row.resize(width, String::new());
        }

        Some(RawTable { rows })
    }

    fn row_cells(&self, row: ElementRef<'_>, carried: &mut Vec<Option<SpanCarry>>) -> Vec<String> {
        let mut cells = Vec::new();
        let mut own = row.select(&self.cell);

        loop {
            if let Some(text) = take_carry(carried, cells.len()) {
                cells.push(text);
                continue;
            }

            let Some(cell) = own.next() else {
                break;
            };
            let text = self.cell_text(cell);
            let colspan = span_attr(cell, "colspan");
            let rowspan = span_attr(cell, "rowspan");

            for _ in 0..colspan {
                if rowspan > 1 {
                    let column = cells.len();
                    if carried.len() <= column {
                        carried.resize_with(column + 1, || None);
                    }
                    carried[column] = Some(SpanCarry {
                        text: text.clone(),
                        remaining: rowspan - 1,
                    });
                }
                cells.push(text.clone());
            }
        }

        // Spanned cells to the right of the row's last own cell.
        while carried
            .get(cells.len()..)
            .is_some_and(|rest| rest.iter().any(Option::is_some))
        {
            let text = take_carry(carried, cells.len()).unwrap_or_default();
            cells.push(text);
        }

        cells
    }

    fn cell_text(&self, cell: ElementRef<'_>) -> String {
        let raw = cell.text().collect::<String>();
        self.whitespace.replace_all(&raw, " ").trim().to_string()
    }
}

struct SpanCarry {
    text: String,
    remaining: usize,
}

fn take_carry(carried: &mut [Option<SpanCarry>], column: usize) -> Option<String> {
    let slot = carried.get_mut(column)?;
    let carry = slot.as_mut()?;
    let text = carry.text.clone();
    carry.remaining -= 1;
    if carry.remaining == 0 {
        *slot = None;
    }
    Some(text)
}

fn span_attr(cell: ElementRef<'_>, name: &str) -> usize {
    cell.value()
        .attr(name)
        .and_then(|value| value.trim().parse::<usize>().ok())
        .unwrap_or(1)
        .clamp(1, MAX_SPAN)
}

fn compile_selector(selector: &str) -> Result<Selector, PipelineError> {
    Selector::parse(selector).map_err(|err| PipelineError::Selector {
        selector: selector.to_string(),
        message: err.to_string(),
    })
}
