//! Index resolution, table extraction, normalization and match collection
//! for the daily prize articles.

mod derive;
mod error;
mod extract;
mod fetch;
mod html;
mod index;
mod matches;
mod normalize;
mod run;
pub mod site;

pub use derive::{derive_date, derive_title};
pub use error::PipelineError;
pub use fetch::{HttpSource, PageSource};
pub use html::PageParser;
pub use index::resolve_index;
pub use run::Checker;
