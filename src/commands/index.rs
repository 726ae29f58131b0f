use std::io::{self, Write};
use std::time::Duration;

use anyhow::{Context, Result};
use tracing::info;

use crate::cli::IndexArgs;
use crate::model::{ArticleRef, IndexEntry};
use crate::pipeline::{
    HttpSource, PageParser, PipelineError, derive_date, derive_title, resolve_index,
};

pub fn run(args: IndexArgs) -> Result<()> {
    let source = HttpSource::new(Duration::from_secs(args.timeout_secs))?;
    let parser = PageParser::new()?;

    let index = resolve_index(&source, &parser).context("failed to resolve the article index")?;
    let entries = describe_index(&index)?;
    info!(articles = entries.len(), "listed article index");

    let mut output = io::BufWriter::new(io::stdout().lock());
    if args.json {
        serde_json::to_writer_pretty(&mut output, &entries)
            .context("failed to serialize index json output")?;
        writeln!(output)?;
    } else {
        for entry in &entries {
            writeln!(
                output,
                "{:>3}  {}  {}\n     {}",
                entry.position, entry.date, entry.title, entry.url
            )?;
        }
    }
    output.flush()?;

    Ok(())
}

fn describe_index(index: &[ArticleRef]) -> Result<Vec<IndexEntry>, PipelineError> {
    index
        .iter()
        .enumerate()
        .map(|(position, reference)| {
            Ok(IndexEntry {
                position,
                date: derive_date(reference)?,
                title: derive_title(reference)?,
                url: reference.clone(),
            })
        })
        .collect()
}
