/// Tunable distances used when looking for scale annotations.
///
/// The defaults match the behavior analysts rely on and should rarely change.
#[derive(Debug, Clone)]
pub struct ScanOptions {
    /// Fraction of the page height, from the top, treated as the page header.
    pub header_band_ratio: f64,
    /// Maximum vertical distance between a word and a table's top or bottom
    /// edge for the word to count as the table's caption.
    pub table_proximity: f64,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            header_band_ratio: 0.15,
            table_proximity: 80.0,
        }
    }
}
