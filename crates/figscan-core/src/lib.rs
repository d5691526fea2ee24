//! figscan-core: scale-aware search for the largest figure in a document.
//!
//! Financial filings state most amounts relative to an implicit scale:
//! a "(in millions)" page header, a "($ thousands)" caption next to a table,
//! a column titled "Amount (in billions)", or an inline "$5 billion". This
//! crate resolves each numeric literal against those contexts and keeps a
//! running maximum across every page.
//!
//! # Architecture
//!
//! - [`lexicon`], [`context`], [`numbers`], [`geometry`]: leaf building blocks
//! - [`resolve`], [`scale`]: value resolution and contextual multipliers
//! - [`scanner`]: the document-level orchestration
//!
//! Page content comes from a [`DocumentProvider`]; this crate never parses
//! PDF files itself.

pub mod context;
pub mod document;
pub mod error;
pub mod events;
pub mod format;
pub mod geometry;
pub mod lexicon;
pub mod numbers;
pub mod options;
pub mod resolve;
pub mod scale;
pub mod scanner;

pub use bigdecimal::BigDecimal;
pub use context::{ContextMatch, context_multiplier, find_context};
pub use document::{DocumentProvider, InMemoryDocument, PageContent, TableGrid, Word};
pub use error::ScanError;
pub use events::{NullObserver, Origin, ScanEvent, ScanObserver};
pub use format::{format_amount, format_factor, plain_decimal};
pub use geometry::{BBox, overlaps_any};
pub use lexicon::{INLINE_SCALE_WORDS, SCALE_WORDS, identity, scale_factor};
pub use numbers::{NumberToken, NumberTokens, number_tokens};
pub use options::ScanOptions;
pub use resolve::{clean_literal, resolve_value};
pub use scale::{
    ColumnMultipliers, TableScale, column_multipliers, effective_multiplier, is_excluded_row,
    page_scale, table_scale,
};
pub use scanner::{Maximum, RunningMaximum, Scanner, find_highest_value};
