//! The seam between the scanner and whatever extracts page structure.
//!
//! A [`DocumentProvider`] hands out one [`PageContent`] per page: its height,
//! its words with bounding boxes, and its tables as grids of optional cell
//! strings together with one bounding box per grid.

use crate::error::ScanError;
use crate::geometry::BBox;

/// A word on a page.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Word {
    /// The text content of this word.
    pub text: String,
    /// Bounding box in page coordinates.
    pub bbox: BBox,
}

impl Word {
    pub fn new(text: impl Into<String>, bbox: BBox) -> Self {
        Self {
            text: text.into(),
            bbox,
        }
    }
}

/// A table as rows of cells; `None` marks a cell with no text.
pub type TableGrid = Vec<Vec<Option<String>>>;

/// Everything the scanner needs from one page.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PageContent {
    /// Page height in points.
    pub height: f64,
    /// Words in provider order.
    #[cfg_attr(feature = "serde", serde(default))]
    pub words: Vec<Word>,
    /// Table grids, first row being the header.
    #[cfg_attr(feature = "serde", serde(default))]
    pub tables: Vec<TableGrid>,
    /// Bounding box of each entry of `tables`, in the same order.
    #[cfg_attr(feature = "serde", serde(default))]
    pub table_bboxes: Vec<BBox>,
}

impl PageContent {
    /// An empty page of the given height.
    pub fn new(height: f64) -> Self {
        Self {
            height,
            ..Self::default()
        }
    }

    /// Add a word.
    #[must_use]
    pub fn with_word(mut self, text: impl Into<String>, bbox: BBox) -> Self {
        self.words.push(Word::new(text, bbox));
        self
    }

    /// Add a table grid together with its bounding box.
    #[must_use]
    pub fn with_table(mut self, grid: TableGrid, bbox: BBox) -> Self {
        self.tables.push(grid);
        self.table_bboxes.push(bbox);
        self
    }
}

/// Source of page content for a scan.
pub trait DocumentProvider {
    /// Number of pages in the document.
    fn page_count(&self) -> usize;

    /// Content of the page at 0-based `index`.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError::DocumentRead`] if the page cannot be extracted.
    fn page(&self, index: usize) -> Result<PageContent, ScanError>;
}

/// A document whose pages are already extracted.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct InMemoryDocument {
    pages: Vec<PageContent>,
}

impl InMemoryDocument {
    pub fn new(pages: Vec<PageContent>) -> Self {
        Self { pages }
    }

    pub fn pages(&self) -> &[PageContent] {
        &self.pages
    }
}

impl DocumentProvider for InMemoryDocument {
    fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn page(&self, index: usize) -> Result<PageContent, ScanError> {
        self.pages
            .get(index)
            .cloned()
            .ok_or(ScanError::PageOutOfRange {
                page: index + 1,
                page_count: self.pages.len(),
            })
    }
}

/// Build a table grid from string literals; empty strings become `None`.
pub fn grid(rows: &[&[&str]]) -> TableGrid {
    rows.iter()
        .map(|row| {
            row.iter()
                .map(|cell| (!cell.is_empty()).then(|| (*cell).to_string()))
                .collect()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_keeps_tables_and_boxes_aligned() {
        let page = PageContent::new(792.0)
            .with_word("Revenue", BBox::new(72.0, 50.0, 120.0, 62.0))
            .with_table(grid(&[&["a", "b"]]), BBox::new(0.0, 0.0, 10.0, 10.0))
            .with_table(grid(&[&["c"]]), BBox::new(0.0, 20.0, 10.0, 30.0));
        assert_eq!(page.words.len(), 1);
        assert_eq!(page.tables.len(), page.table_bboxes.len());
        assert_eq!(page.table_bboxes[1].top, 20.0);
    }

    #[test]
    fn grid_maps_empty_cells_to_none() {
        let g = grid(&[&["Item", "", "2023"]]);
        assert_eq!(
            g,
            vec![vec![Some("Item".to_string()), None, Some("2023".to_string())]]
        );
    }

    #[test]
    fn in_memory_page_lookup() {
        let doc = InMemoryDocument::new(vec![PageContent::new(100.0), PageContent::new(200.0)]);
        assert_eq!(doc.page_count(), 2);
        assert_eq!(doc.page(1).unwrap().height, 200.0);
        assert_eq!(
            doc.page(2),
            Err(ScanError::PageOutOfRange {
                page: 3,
                page_count: 2
            })
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn page_dump_deserializes_with_defaults() {
        let json = r#"[{"height": 792.0, "words": [{"text": "5", "bbox": {"x0": 1.0, "top": 2.0, "x1": 3.0, "bottom": 4.0}}]}]"#;
        let doc: InMemoryDocument = serde_json::from_str(json).unwrap();
        assert_eq!(doc.page_count(), 1);
        let page = &doc.pages()[0];
        assert_eq!(page.words[0].text, "5");
        assert!(page.tables.is_empty());
        assert!(page.table_bboxes.is_empty());
    }
}
