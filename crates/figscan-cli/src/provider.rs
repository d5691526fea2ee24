//! Document providers backing the CLI: PDFs via pdfplumber, and JSON page dumps.

use std::fs;
use std::path::Path;

use figscan_core::{
    BBox, DocumentProvider, InMemoryDocument, PageContent, ScanError, TableGrid, Word,
};
use pdfplumber::{Pdf, TableSettings, WordOptions};

use crate::shared::CliError;

/// A PDF opened with pdfplumber.
///
/// Words use pdfplumber's default grouping tolerances; tables use the default
/// lattice detection. Each table's grid and box come from the same detection
/// pass, so they stay aligned.
pub struct PdfDocument {
    pdf: Pdf,
    word_options: WordOptions,
    table_settings: TableSettings,
}

impl PdfDocument {
    pub fn open(path: &Path) -> Result<Self, ScanError> {
        let pdf = Pdf::open_file(path, None)
            .map_err(|e| ScanError::DocumentRead(format!("failed to open PDF: {e}")))?;
        tracing::debug!(path = %path.display(), pages = pdf.page_count(), "opened PDF");
        Ok(Self {
            pdf,
            word_options: WordOptions::default(),
            table_settings: TableSettings::default(),
        })
    }
}

impl DocumentProvider for PdfDocument {
    fn page_count(&self) -> usize {
        self.pdf.page_count()
    }

    fn page(&self, index: usize) -> Result<PageContent, ScanError> {
        let page = self
            .pdf
            .page(index)
            .map_err(|e| ScanError::DocumentRead(format!("page {}: {e}", index + 1)))?;

        let mut content = PageContent::new(page.height());
        content.words = page
            .extract_words(&self.word_options)
            .into_iter()
            .map(|w| {
                let b = w.bbox;
                Word::new(w.text, BBox::new(b.x0, b.top, b.x1, b.bottom))
            })
            .collect();

        for (i, table) in page.find_tables(&self.table_settings).into_iter().enumerate() {
            let grid = table_grid(
                table
                    .rows
                    .iter()
                    .map(|row| row.iter().map(|cell| cell.text.clone()).collect::<Vec<_>>()),
                index + 1,
                i + 1,
            );
            let b = table.bbox;
            content = content.with_table(grid, BBox::new(b.x0, b.top, b.x1, b.bottom));
        }

        tracing::debug!(
            page = index + 1,
            words = content.words.len(),
            tables = content.tables.len(),
            "extracted page"
        );
        Ok(content)
    }
}

/// Collect a detected table's rows, warning when detection produced none.
///
/// An empty grid is still kept so grids and boxes stay aligned; the scanner
/// skips it.
fn table_grid(
    rows: impl Iterator<Item = Vec<Option<String>>>,
    page: usize,
    table: usize,
) -> TableGrid {
    let grid: TableGrid = rows.collect();
    if grid.is_empty() {
        tracing::warn!(page, table, "detected table has no rows");
    }
    grid
}

/// Load a JSON array of pre-extracted pages.
pub fn load_page_dump(path: &Path) -> Result<InMemoryDocument, CliError> {
    let bytes = fs::read(path).map_err(|e| {
        CliError::Scan(ScanError::DocumentRead(format!(
            "failed to read {}: {e}",
            path.display()
        )))
    })?;
    let doc: InMemoryDocument = serde_json::from_slice(&bytes)?;
    tracing::debug!(path = %path.display(), pages = doc.page_count(), "loaded page dump");
    Ok(doc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::sync::{Arc, Mutex};

    /// Log sink shared between a test and its subscriber.
    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl CapturedLogs {
        fn text(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    fn with_captured_logs<T>(f: impl FnOnce() -> T) -> (T, String) {
        let logs = CapturedLogs::default();
        let sink = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || sink.clone())
            .with_max_level(tracing::Level::WARN)
            .with_ansi(false)
            .without_time()
            .finish();
        let out = tracing::subscriber::with_default(subscriber, f);
        (out, logs.text())
    }

    #[test]
    fn table_without_rows_is_kept_and_warned_about() {
        let (grid, logs) = with_captured_logs(|| table_grid(std::iter::empty(), 2, 1));
        assert!(grid.is_empty());
        assert!(logs.contains("WARN"));
        assert!(logs.contains("detected table has no rows"));
        assert!(logs.contains("page=2"));
    }

    #[test]
    fn table_with_rows_is_not_warned_about() {
        let rows = vec![vec![Some("Item".to_string()), None]];
        let (grid, logs) = with_captured_logs(|| table_grid(rows.into_iter(), 1, 1));
        assert_eq!(grid, vec![vec![Some("Item".to_string()), None]]);
        assert!(logs.is_empty());
    }

    #[test]
    fn page_dump_loads_tables_and_words() {
        let json = r#"[
            {
                "height": 792.0,
                "words": [{"text": "$5", "bbox": {"x0": 72.0, "top": 600.0, "x1": 90.0, "bottom": 612.0}}],
                "tables": [[["Item", "Amount"], ["Cash", null]]],
                "table_bboxes": [{"x0": 50.0, "top": 300.0, "x1": 550.0, "bottom": 500.0}]
            }
        ]"#;
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(json.as_bytes()).unwrap();

        let doc = load_page_dump(f.path()).unwrap();
        let page = doc.page(0).unwrap();
        assert_eq!(page.words[0].text, "$5");
        assert_eq!(page.tables[0][1][1], None);
        assert_eq!(page.table_bboxes.len(), 1);
    }

    #[test]
    fn malformed_page_dump_is_an_error() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(b"{not json").unwrap();
        assert!(matches!(load_page_dump(f.path()), Err(CliError::PageDump(_))));
    }

    #[test]
    fn invalid_pdf_is_a_read_error() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(b"this is not a pdf").unwrap();
        assert!(matches!(
            PdfDocument::open(f.path()),
            Err(ScanError::DocumentRead(_))
        ));
    }
}
