use std::collections::BTreeSet;
use std::ops::Range;

pub const LISTING_URL: &str = "https://lionshorbsulz.de/";

/// Oldest article of the season; the index is cut after it.
pub const SENTINEL_LINK: &str = "https://lionshorbsulz.de/2025/12/01/die-ersten-gewinnzahlen-2025/";

pub const ARTICLE_HEADER_SELECTOR: &str = "header.entry-header";
pub const ARTICLE_LINK_SELECTOR: &str = "a";
pub const PRIZE_TABLE_SELECTOR: &str = "table.has-fixed-layout";

pub const CANONICAL_HEADER: [&str; 3] = ["Sponsor", "Gewinn", "Gewinnzahl"];

/// `YYYY/MM/DD` inside an article link, right after the site root.
pub const DATE_SPAN: Range<usize> = 25..35;
pub const DATE_INPUT_FORMAT: &str = "%Y/%m/%d";
pub const DATE_OUTPUT_FORMAT: &str = "%d.%m.%Y";
pub const TITLE_START: usize = 36;
pub const TITLE_SUFFIX: &str = "/";

/// Ticket numbers held for this season.
pub const TARGET_NUMBERS: [i64; 3] = [692, 795, 799];

pub fn target_numbers(overrides: &[i64]) -> BTreeSet<i64> {
    if overrides.is_empty() {
        TARGET_NUMBERS.into_iter().collect()
    } else {
        overrides.iter().copied().collect()
    }
}
