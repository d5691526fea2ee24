//! Error types for document scanning.
//!
//! Literal parse failures never surface here; they resolve to zero inside
//! [`resolve_value`](crate::resolve_value). Everything in [`ScanError`] aborts
//! the scan.

use thiserror::Error;

/// Fatal errors that stop a scan.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScanError {
    /// The document could not be opened or a page could not be read.
    #[error("failed to read document: {0}")]
    DocumentRead(String),

    /// The provider returned a different number of table grids and table boxes.
    #[error("page {page}: {grids} table grid(s) but {boxes} table bounding box(es)")]
    TableAlignment {
        /// 1-based page number.
        page: usize,
        /// Number of table grids on the page.
        grids: usize,
        /// Number of table bounding boxes on the page.
        boxes: usize,
    },

    /// A page index beyond the end of the document was requested.
    #[error("page {page} exceeds document page count ({page_count})")]
    PageOutOfRange {
        /// 1-based page number requested.
        page: usize,
        /// Number of pages in the document.
        page_count: usize,
    },
}
