use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Find the largest figure in a financial document, honoring scale
/// annotations such as "(in millions)".
#[derive(Debug, Parser)]
#[command(name = "figscan", about, version)]
pub struct Cli {
    /// Path to the document (PDF, or a JSON page dump)
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Page range (e.g. '1,3-5'). Default: all pages
    #[arg(long)]
    pub pages: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// How to read FILE; `auto` picks JSON for `.json` files and PDF otherwise
    #[arg(long, value_enum, default_value_t = InputFormat::Auto)]
    pub input_format: InputFormat,

    /// Print only the final result, without progress lines
    #[arg(short, long)]
    pub quiet: bool,
}

/// Output format for the scan result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Progress lines and a summary block
    Text,
    /// A single JSON object
    Json,
}

/// Input document format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum InputFormat {
    /// Decide from the file extension
    Auto,
    /// PDF document
    Pdf,
    /// JSON array of pre-extracted pages
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cli = Cli::try_parse_from(["figscan", "report.pdf"]).unwrap();
        assert_eq!(cli.file, PathBuf::from("report.pdf"));
        assert_eq!(cli.pages, None);
        assert_eq!(cli.format, OutputFormat::Text);
        assert_eq!(cli.input_format, InputFormat::Auto);
        assert!(!cli.quiet);
    }

    #[test]
    fn all_flags() {
        let cli = Cli::try_parse_from([
            "figscan",
            "dump.txt",
            "--pages",
            "2-4",
            "--format",
            "json",
            "--input-format",
            "json",
            "-q",
        ])
        .unwrap();
        assert_eq!(cli.pages.as_deref(), Some("2-4"));
        assert_eq!(cli.format, OutputFormat::Json);
        assert_eq!(cli.input_format, InputFormat::Json);
        assert!(cli.quiet);
    }

    #[test]
    fn file_is_required() {
        assert!(Cli::try_parse_from(["figscan"]).is_err());
    }

    #[test]
    fn unknown_format_rejected() {
        assert!(Cli::try_parse_from(["figscan", "a.pdf", "--format", "csv"]).is_err());
    }
}
