//! Structured progress events emitted while scanning.

use bigdecimal::BigDecimal;

/// Where a value was found on its page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    /// Inside a detected table (1-based table number on the page).
    Table { table: usize },
    /// In page text outside every detected table.
    FreeText,
}

/// A notable step of a scan. Page and table numbers are 1-based.
#[derive(Debug, Clone, PartialEq)]
pub enum ScanEvent {
    /// Scanning of a page begins.
    PageStarted { page: usize, total: usize },
    /// The page header declares a scale other than one.
    PageScale { page: usize, factor: BigDecimal },
    /// Text next to a table declares its scale.
    TableScale {
        page: usize,
        table: usize,
        word: String,
        factor: BigDecimal,
    },
    /// A value exceeded the running maximum.
    NewMaximum {
        page: usize,
        origin: Origin,
        /// The matched number text, trimmed.
        literal: String,
        /// Full text of the table cell holding the literal, trimmed.
        cell: Option<String>,
        value: BigDecimal,
    },
}

/// Receiver of [`ScanEvent`]s.
pub trait ScanObserver {
    fn on_event(&mut self, event: &ScanEvent);
}

/// Observer that ignores every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullObserver;

impl ScanObserver for NullObserver {
    fn on_event(&mut self, _event: &ScanEvent) {}
}

/// Collects events in order.
impl ScanObserver for Vec<ScanEvent> {
    fn on_event(&mut self, event: &ScanEvent) {
        self.push(event.clone());
    }
}
