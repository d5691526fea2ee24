//! Contextual multipliers: page headers, table captions, column headers and
//! row exclusion.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use bigdecimal::BigDecimal;
use regex::Regex;

use crate::context::{context_multiplier, find_context};
use crate::document::{PageContent, Word};
use crate::geometry::BBox;
use crate::lexicon::{entries, identity};
use crate::options::ScanOptions;

/// First-cell keywords marking a row of ratios, percentages or counts.
pub const ROW_EXCLUSION_KEYWORDS: [&str; 6] =
    ["percentage", "percent", "%", "number", "rate", "ratio"];

/// Whole-word matchers for each lexicon entry, in declaration order.
static HEADER_WORDS: LazyLock<Vec<(Regex, &'static BigDecimal)>> = LazyLock::new(|| {
    entries()
        .map(|(word, factor)| {
            let re = Regex::new(&format!(r"(?i)\b{}\b", regex::escape(word)))
                .expect("scale word pattern compiles");
            (re, factor)
        })
        .collect()
});

/// Column index to factor, derived from a table's header row.
pub type ColumnMultipliers = BTreeMap<usize, BigDecimal>;

/// Scale multiplier applying to every cell of a table by default.
#[derive(Debug, Clone, PartialEq)]
pub struct TableScale {
    /// The multiplier.
    pub factor: BigDecimal,
    /// Scale word found near the table; `None` when inherited from the page.
    pub word: Option<String>,
}

/// The multiplier declared in the page header band.
///
/// Words whose top edge lies above `header_band_ratio` of the page height are
/// joined with spaces in provider order and searched for a scale annotation.
pub fn page_scale(page: &PageContent, options: &ScanOptions) -> BigDecimal {
    let limit = page.height * options.header_band_ratio;
    let header = join_words(page.words.iter().filter(|w| w.bbox.top < limit));
    context_multiplier(&header)
}

/// The multiplier declared next to a table, falling back to `page_scale`.
///
/// A word counts as the table's caption when its left edge lies within the
/// table's horizontal extent and its top (or bottom) edge is closer than
/// `table_proximity` to the table's top (or bottom) edge.
pub fn table_scale(
    words: &[Word],
    bbox: &BBox,
    page_scale: &BigDecimal,
    options: &ScanOptions,
) -> TableScale {
    let nearby = join_words(words.iter().filter(|w| {
        let aligned = bbox.x0 <= w.bbox.x0 && w.bbox.x0 <= bbox.x1;
        let close = (w.bbox.top - bbox.top).abs() < options.table_proximity
            || (w.bbox.bottom - bbox.bottom).abs() < options.table_proximity;
        aligned && close
    }));

    match find_context(&nearby) {
        Some(m) => TableScale {
            factor: m.factor,
            word: Some(m.word.to_string()),
        },
        None => TableScale {
            factor: page_scale.clone(),
            word: None,
        },
    }
}

/// Per-column multipliers from a header row.
///
/// Each header cell is tested against the lexicon in declaration order for a
/// whole-word, case-insensitive occurrence; the first hit sets the column.
pub fn column_multipliers(header: &[Option<String>]) -> ColumnMultipliers {
    header
        .iter()
        .enumerate()
        .filter_map(|(col, cell)| {
            let text = cell.as_deref().filter(|t| !t.is_empty())?;
            HEADER_WORDS
                .iter()
                .find(|(re, _)| re.is_match(text))
                .map(|(_, factor)| (col, (*factor).clone()))
        })
        .collect()
}

/// True if a row's first cell marks it as non-monetary.
pub fn is_excluded_row(first_cell: &str) -> bool {
    let lower = first_cell.to_lowercase();
    ROW_EXCLUSION_KEYWORDS.iter().any(|kw| lower.contains(kw))
}

/// Fallback multiplier for the cell in column `col`.
///
/// An explicit column multiplier wins even on an excluded row; exclusion only
/// replaces the table default with one.
pub fn effective_multiplier<'a>(
    col: usize,
    columns: &'a ColumnMultipliers,
    excluded: bool,
    table_scale: &'a BigDecimal,
) -> &'a BigDecimal {
    match columns.get(&col) {
        Some(factor) => factor,
        None if excluded => identity(),
        None => table_scale,
    }
}

fn join_words<'a>(words: impl Iterator<Item = &'a Word>) -> String {
    words.map(|w| w.text.as_str()).collect::<Vec<_>>().join(" ")
}
