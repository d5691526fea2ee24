use std::io::{self, IsTerminal, Write};
use std::path::{Path, PathBuf};

use figscan_core::{DocumentProvider, ScanError};
use thiserror::Error;

use crate::cli::InputFormat;
use crate::page_range::{PageRangeError, parse_page_range};
use crate::provider::{PdfDocument, load_page_dump};

/// Errors surfaced to the user by the CLI.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("{0}")]
    PageRange(#[from] PageRangeError),

    #[error("failed to parse page dump: {0}")]
    PageDump(#[from] serde_json::Error),

    #[error(transparent)]
    Scan(#[from] ScanError),
}

impl CliError {
    /// Process exit code: 2 for usage mistakes, 1 for unreadable documents.
    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::PageRange(_) => 2,
            CliError::FileNotFound(_) | CliError::PageDump(_) | CliError::Scan(_) => 1,
        }
    }
}

/// Open `file` as the requested kind of document.
pub fn open_document(
    file: &Path,
    format: InputFormat,
) -> Result<Box<dyn DocumentProvider>, CliError> {
    if !file.exists() {
        return Err(CliError::FileNotFound(file.to_path_buf()));
    }

    let doc: Box<dyn DocumentProvider> = match resolve_input_format(file, format) {
        InputFormat::Json => Box::new(load_page_dump(file)?),
        InputFormat::Pdf | InputFormat::Auto => Box::new(PdfDocument::open(file)?),
    };
    Ok(doc)
}

/// Pick the concrete input format; `Auto` means JSON for `.json` files.
pub fn resolve_input_format(file: &Path, format: InputFormat) -> InputFormat {
    match format {
        InputFormat::Auto => {
            let is_json = file
                .extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
            if is_json {
                InputFormat::Json
            } else {
                InputFormat::Pdf
            }
        }
        explicit => explicit,
    }
}

/// Resolve an optional page range string into 0-based page indices.
pub fn resolve_pages(pages: Option<&str>, page_count: usize) -> Result<Vec<usize>, CliError> {
    match pages {
        Some(range) => Ok(parse_page_range(range, page_count)?),
        None => Ok((0..page_count).collect()),
    }
}

/// Prints "Processing page N/M..." to stderr, but only on a terminal.
pub struct ProgressReporter {
    is_tty: bool,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            is_tty: io::stderr().is_terminal(),
        }
    }

    /// Report progress for the `current`-th page (1-based) of `total`.
    pub fn report(&self, current: usize, total: usize) {
        if self.is_tty {
            eprint!("\rProcessing page {current}/{total}...");
            let _ = io::stderr().flush();
        }
    }

    /// Clear the progress line (if TTY).
    pub fn finish(&self) {
        if self.is_tty {
            eprint!("\r{}\r", " ".repeat(40));
            let _ = io::stderr().flush();
        }
    }
}
