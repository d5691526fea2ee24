//! Rendering of scan progress and results.

use std::path::Path;

use figscan_core::{
    Maximum, Origin, ScanEvent, ScanObserver, format_amount, format_factor,
    plain_decimal,
};

use crate::shared::ProgressReporter;

/// Observer that prints the human-readable progress stream to stdout.
///
/// With `verbose` off only the TTY page indicator is shown.
pub struct ConsoleReporter {
    verbose: bool,
    progress: ProgressReporter,
    pages_started: usize,
}

impl ConsoleReporter {
    pub fn new(verbose: bool) -> Self {
        Self {
            verbose,
            progress: ProgressReporter::new(),
            pages_started: 0,
        }
    }

    pub fn finish(&self) {
        self.progress.finish();
    }
}

impl ScanObserver for ConsoleReporter {
    fn on_event(&mut self, event: &ScanEvent) {
        if let ScanEvent::PageStarted { total, .. } = event {
            self.pages_started += 1;
            self.progress.report(self.pages_started, *total);
            return;
        }
        if !self.verbose {
            return;
        }
        if let Some(line) = describe_event(event) {
            println!("{line}");
        }
    }
}

/// The progress line for `event`; page starts only drive the TTY indicator.
pub fn describe_event(event: &ScanEvent) -> Option<String> {
    let line = match event {
        ScanEvent::PageStarted { .. } => return None,
        ScanEvent::PageScale { page, factor } => format!(
            "  - Page {page}: page-level context multiplier found ({})",
            format_factor(factor)
        ),
        ScanEvent::TableScale {
            page,
            table,
            word,
            factor,
        } => format!(
            "  - Page {page} (Table {table}): table-level context multiplier found near table -> '{word}' ({})",
            format_factor(factor)
        ),
        ScanEvent::NewMaximum {
            page,
            origin: Origin::Table { table },
            literal,
            cell,
            value,
        } => format!(
            "  - Page {page} (Table {table}): new max value found -> {} (from cell: '{}')",
            format_amount(value),
            cell.as_deref().unwrap_or(literal)
        ),
        ScanEvent::NewMaximum {
            page,
            origin: Origin::FreeText,
            literal,
            value,
            ..
        } => format!(
            "  - Page {page} (Non-Table): new max value found -> {} (from text: '{literal}')",
            format_amount(value)
        ),
    };
    Some(line)
}

/// The closing summary block, or the not-found line.
pub fn summary_text(result: Option<&Maximum>) -> String {
    let Some(max) = result else {
        return "No valid numbers were found.".to_string();
    };
    let rule = "=".repeat(40);
    format!(
        "\n{rule}\n         Extraction Complete\n{rule}\n\
         The highest value found in the document is: {}\n\
         This value was found on page: {}\n{rule}",
        format_amount(&max.value),
        max.page
    )
}

/// The machine-readable result object.
pub fn summary_json(file: &Path, pages_scanned: usize, result: Option<&Maximum>) -> serde_json::Value {
    match result {
        Some(max) => serde_json::json!({
            "file": file.display().to_string(),
            "pages_scanned": pages_scanned,
            "found": true,
            "value": plain_decimal(&max.value),
            "value_formatted": format_amount(&max.value),
            "page": max.page,
        }),
        None => serde_json::json!({
            "file": file.display().to_string(),
            "pages_scanned": pages_scanned,
            "found": false,
            "value": null,
            "value_formatted": null,
            "page": null,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figscan_core::BigDecimal;
    use std::str::FromStr;

    fn dec(s: &str) -> BigDecimal {
        BigDecimal::from_str(s).unwrap()
    }

    #[test]
    fn page_scale_line() {
        let line = describe_event(&ScanEvent::PageScale {
            page: 3,
            factor: dec("1000000"),
        })
        .unwrap();
        assert_eq!(line, "  - Page 3: page-level context multiplier found (1,000,000)");
    }

    #[test]
    fn table_scale_line() {
        let line = describe_event(&ScanEvent::TableScale {
            page: 3,
            table: 1,
            word: "millions".into(),
            factor: dec("1000000"),
        })
        .unwrap();
        assert_eq!(
            line,
            "  - Page 3 (Table 1): table-level context multiplier found near table -> 'millions' (1,000,000)"
        );
    }

    #[test]
    fn table_value_line_quotes_cell() {
        let line = describe_event(&ScanEvent::NewMaximum {
            page: 3,
            origin: Origin::Table { table: 1 },
            literal: "1,234.5".into(),
            cell: Some("1,234.5".into()),
            value: dec("1234500000"),
        })
        .unwrap();
        assert_eq!(
            line,
            "  - Page 3 (Table 1): new max value found -> 1,234,500,000.00 (from cell: '1,234.5')"
        );
    }

    #[test]
    fn free_text_value_line_quotes_match() {
        let line = describe_event(&ScanEvent::NewMaximum {
            page: 4,
            origin: Origin::FreeText,
            literal: "$500 million".into(),
            cell: None,
            value: dec("500000000"),
        })
        .unwrap();
        assert_eq!(
            line,
            "  - Page 4 (Non-Table): new max value found -> 500,000,000.00 (from text: '$500 million')"
        );
    }

    #[test]
    fn page_start_has_no_progress_line() {
        assert_eq!(
            describe_event(&ScanEvent::PageStarted { page: 2, total: 5 }),
            None
        );
    }

    #[test]
    fn summary_for_found_value() {
        let max = Maximum {
            value: dec("5000000"),
            page: 1,
        };
        let text = summary_text(Some(&max));
        assert!(text.contains("The highest value found in the document is: 5,000,000.00"));
        assert!(text.contains("This value was found on page: 1"));
        assert!(text.contains("Extraction Complete"));
    }

    #[test]
    fn summary_when_nothing_found() {
        assert_eq!(summary_text(None), "No valid numbers were found.");
    }

    #[test]
    fn json_keeps_exact_value() {
        let max = Maximum {
            value: dec("1234500000.000"),
            page: 3,
        };
        let json = summary_json(Path::new("10-K.pdf"), 5, Some(&max));
        assert_eq!(json["found"], true);
        assert_eq!(json["value"], "1234500000");
        assert_eq!(json["value_formatted"], "1,234,500,000.00");
        assert_eq!(json["page"], 3);
        assert_eq!(json["pages_scanned"], 5);
    }

    #[test]
    fn json_not_found_has_nulls() {
        let json = summary_json(Path::new("empty.pdf"), 0, None);
        assert_eq!(json["found"], false);
        assert!(json["value"].is_null());
        assert!(json["page"].is_null());
    }
}
