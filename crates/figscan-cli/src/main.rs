mod cli;
mod page_range;
mod provider;
mod report;
mod shared;

use std::process::ExitCode;

use clap::Parser;
use cli::{Cli, OutputFormat};
use figscan_core::{Maximum, ScanOptions, Scanner};
use report::ConsoleReporter;
use shared::CliError;
use tracing_subscriber::EnvFilter;

/// Exit code for a successful scan that found no number.
const NOT_FOUND: u8 = 3;

fn main() -> ExitCode {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("figscan=warn,figscan_core=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .without_time()
        .init();

    let cli = Cli::parse();

    match run(&cli) {
        Ok(Some(_)) => ExitCode::SUCCESS,
        Ok(None) => ExitCode::from(NOT_FOUND),
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::from(err.exit_code())
        }
    }
}

fn run(cli: &Cli) -> Result<Option<Maximum>, CliError> {
    let doc = shared::open_document(&cli.file, cli.input_format)?;
    let page_count = doc.page_count();
    let pages = shared::resolve_pages(cli.pages.as_deref(), page_count)?;

    let text = cli.format == OutputFormat::Text;
    if text && !cli.quiet {
        println!("Processing '{}' with {page_count} pages...", cli.file.display());
    }

    let scanner = Scanner::new(ScanOptions::default());
    let mut reporter = ConsoleReporter::new(text && !cli.quiet);
    let result = scanner.scan_pages(&*doc, &pages, &mut reporter);
    reporter.finish();
    let result = result?;

    tracing::debug!(pages = pages.len(), found = result.is_some(), "scan complete");

    match cli.format {
        OutputFormat::Text => println!("{}", report::summary_text(result.as_ref())),
        OutputFormat::Json => println!(
            "{}",
            report::summary_json(&cli.file, pages.len(), result.as_ref())
        ),
    }
    Ok(result)
}
