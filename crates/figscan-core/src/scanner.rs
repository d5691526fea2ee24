//! Document scanning: the running maximum over every table cell and every
//! stretch of free text in a document.
//!
//! Per page the scanner:
//! 1. resolves the page scale from the header band;
//! 2. for each table with a header row, resolves the table scale and the
//!    column multipliers, then resolves each number in each data cell;
//! 3. resolves each number in the words outside every table box, using only
//!    inline scale words (page and table context never apply to free text).

use bigdecimal::BigDecimal;

use crate::document::{DocumentProvider, PageContent, TableGrid};
use crate::error::ScanError;
use crate::events::{NullObserver, Origin, ScanEvent, ScanObserver};
use crate::geometry::overlaps_any;
use crate::lexicon::identity;
use crate::numbers::number_tokens;
use crate::options::ScanOptions;
use crate::resolve::resolve_value;
use crate::scale::{
    ColumnMultipliers, column_multipliers, effective_multiplier, is_excluded_row, page_scale,
    table_scale,
};

/// The largest value found and the 1-based page it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Maximum {
    pub value: BigDecimal,
    pub page: usize,
}

/// Running maximum that starts empty.
///
/// Only a strictly greater value replaces the current one, so ties keep the
/// first page on which the value appeared.
#[derive(Debug, Clone, Default)]
pub struct RunningMaximum {
    best: Option<Maximum>,
}

impl RunningMaximum {
    pub fn new() -> Self {
        Self::default()
    }

    /// Offer a candidate; returns `true` if it became the new maximum.
    pub fn offer(&mut self, value: &BigDecimal, page: usize) -> bool {
        if self.best.as_ref().is_some_and(|best| *value <= best.value) {
            return false;
        }
        self.best = Some(Maximum {
            value: value.clone(),
            page,
        });
        true
    }

    pub fn current(&self) -> Option<&Maximum> {
        self.best.as_ref()
    }

    pub fn into_inner(self) -> Option<Maximum> {
        self.best
    }
}

/// Scans documents for their largest scaled value.
#[derive(Debug, Clone, Default)]
pub struct Scanner {
    options: ScanOptions,
}

impl Scanner {
    pub fn new(options: ScanOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ScanOptions {
        &self.options
    }

    /// Scan every page of `doc` in order.
    ///
    /// Returns `Ok(None)` when no number was found anywhere.
    ///
    /// # Errors
    ///
    /// Any provider failure or table/box misalignment aborts the scan; no
    /// partial result is returned.
    pub fn scan<D>(
        &self,
        doc: &D,
        observer: &mut dyn ScanObserver,
    ) -> Result<Option<Maximum>, ScanError>
    where
        D: DocumentProvider + ?Sized,
    {
        let pages: Vec<usize> = (0..doc.page_count()).collect();
        self.scan_pages(doc, &pages, observer)
    }

    /// Scan the given 0-based page indices, in the order given.
    ///
    /// # Errors
    ///
    /// See [`Scanner::scan`].
    pub fn scan_pages<D>(
        &self,
        doc: &D,
        pages: &[usize],
        observer: &mut dyn ScanObserver,
    ) -> Result<Option<Maximum>, ScanError>
    where
        D: DocumentProvider + ?Sized,
    {
        let mut max = RunningMaximum::new();
        for &index in pages {
            observer.on_event(&ScanEvent::PageStarted {
                page: index + 1,
                total: pages.len(),
            });
            let content = doc.page(index)?;
            self.scan_page(&content, index + 1, &mut max, observer)?;
        }
        Ok(max.into_inner())
    }

    /// Fold one page into `max`. `page` is the 1-based page number.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError::TableAlignment`] when the page has a different
    /// number of table grids and table boxes.
    pub fn scan_page(
        &self,
        content: &PageContent,
        page: usize,
        max: &mut RunningMaximum,
        observer: &mut dyn ScanObserver,
    ) -> Result<(), ScanError> {
        if content.tables.len() != content.table_bboxes.len() {
            return Err(ScanError::TableAlignment {
                page,
                grids: content.tables.len(),
                boxes: content.table_bboxes.len(),
            });
        }

        let page_factor = page_scale(content, &self.options);
        if page_factor != *identity() {
            tracing::debug!(page, factor = %page_factor, "page scale");
            observer.on_event(&ScanEvent::PageScale {
                page,
                factor: page_factor.clone(),
            });
        }

        for (index, (grid, bbox)) in content.tables.iter().zip(&content.table_bboxes).enumerate() {
            let table = index + 1;
            let Some(header) = grid.first().filter(|row| !row.is_empty()) else {
                tracing::debug!(page, table, "skipping table without header row");
                continue;
            };

            let scale = table_scale(&content.words, bbox, &page_factor, &self.options);
            if let Some(word) = &scale.word {
                tracing::debug!(page, table, word = %word, factor = %scale.factor, "table scale");
                observer.on_event(&ScanEvent::TableScale {
                    page,
                    table,
                    word: word.clone(),
                    factor: scale.factor.clone(),
                });
            }

            let columns = column_multipliers(header);
            scan_rows(grid, &columns, &scale.factor, page, table, max, observer);
        }

        let free_text = content
            .words
            .iter()
            .filter(|w| !overlaps_any(&w.bbox, &content.table_bboxes))
            .map(|w| w.text.as_str())
            .collect::<Vec<_>>()
            .join(" ");
        for token in number_tokens(&free_text) {
            let value = resolve_value(token.literal, token.scale_word, identity());
            tracing::trace!(page, literal = token.matched, value = %value, "free text");
            if max.offer(&value, page) {
                observer.on_event(&ScanEvent::NewMaximum {
                    page,
                    origin: Origin::FreeText,
                    literal: token.matched.trim().to_string(),
                    cell: None,
                    value,
                });
            }
        }

        Ok(())
    }
}

fn scan_rows(
    grid: &TableGrid,
    columns: &ColumnMultipliers,
    table_factor: &BigDecimal,
    page: usize,
    table: usize,
    max: &mut RunningMaximum,
    observer: &mut dyn ScanObserver,
) {
    for row in grid.iter().skip(1) {
        let Some(first) = row.first().and_then(Option::as_deref).filter(|c| !c.is_empty()) else {
            continue;
        };
        let excluded = is_excluded_row(first);

        for (col, cell) in row.iter().enumerate() {
            let Some(cell) = cell.as_deref().filter(|c| !c.is_empty()) else {
                continue;
            };
            let fallback = effective_multiplier(col, columns, excluded, table_factor);

            for token in number_tokens(cell) {
                let value = resolve_value(token.literal, token.scale_word, fallback);
                tracing::trace!(page, table, col, literal = token.matched, value = %value, "cell");
                if max.offer(&value, page) {
                    observer.on_event(&ScanEvent::NewMaximum {
                        page,
                        origin: Origin::Table { table },
                        literal: token.matched.trim().to_string(),
                        cell: Some(cell.trim().to_string()),
                        value,
                    });
                }
            }
        }
    }
}

/// Scan all pages of `doc` with default options and no observer.
///
/// # Errors
///
/// See [`Scanner::scan`].
pub fn find_highest_value<D>(doc: &D) -> Result<Option<Maximum>, ScanError>
where
    D: DocumentProvider + ?Sized,
{
    Scanner::default().scan(doc, &mut NullObserver)
}
