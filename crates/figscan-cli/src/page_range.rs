use thiserror::Error;

/// Reasons a `--pages` value is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PageRangeError {
    #[error("invalid page number: '{0}'")]
    InvalidNumber(String),
    #[error("page 0 is invalid (pages start at 1)")]
    ZeroPage,
    #[error("range '{0}' ends before it starts")]
    Reversed(String),
    #[error("page {page} exceeds document page count ({page_count})")]
    Exceeds { page: usize, page_count: usize },
    #[error("page range selects no pages")]
    Empty,
}

/// Parse a page range like "1,3-5" into sorted, de-duplicated 0-based indices.
///
/// Input is 1-based, as users count pages.
pub fn parse_page_range(input: &str, page_count: usize) -> Result<Vec<usize>, PageRangeError> {
    let mut pages = Vec::new();

    for part in input.split(',').map(str::trim).filter(|p| !p.is_empty()) {
        let (start, end) = match part.split_once('-') {
            Some((start, end)) => (page_number(start)?, page_number(end)?),
            None => {
                let page = page_number(part)?;
                (page, page)
            }
        };
        if end < start {
            return Err(PageRangeError::Reversed(part.to_string()));
        }
        if end > page_count {
            return Err(PageRangeError::Exceeds {
                page: end,
                page_count,
            });
        }
        pages.extend((start - 1)..end);
    }

    if pages.is_empty() {
        return Err(PageRangeError::Empty);
    }
    pages.sort_unstable();
    pages.dedup();
    Ok(pages)
}

fn page_number(text: &str) -> Result<usize, PageRangeError> {
    let text = text.trim();
    match text.parse::<usize>() {
        Ok(0) => Err(PageRangeError::ZeroPage),
        Ok(page) => Ok(page),
        Err(_) => Err(PageRangeError::InvalidNumber(text.to_string())),
    }
}
