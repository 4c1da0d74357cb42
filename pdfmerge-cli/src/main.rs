//! pdfmerge - Concatenate the pages of several PDF files into one document.
//!
//! Prints exactly one JSON object to stdout and exits 0 on success, 1 on
//! any failure. Progress is logged to stderr.

mod cli;

use clap::Parser;
use clap::error::ErrorKind;
use std::io::IsTerminal;
use std::process;

use crate::cli::{Cli, USAGE};
use pdfmerge::error::MergeError;
use pdfmerge::io::LopdfCodec;
use pdfmerge::merge::{Merger, TracingObserver};
use pdfmerge::output::Report;

fn main() {
    init_logging();

    let report = match Cli::try_parse() {
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.exit()
        }
        parsed => report_for(parsed),
    };

    println!("{}", report.to_json());
    process::exit(report.exit_code());
}

/// Install the stderr log subscriber. Stdout is reserved for the report.
fn init_logging() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_max_level(tracing::Level::INFO)
        .with_target(false)
        .init();
}

/// Turn parsed arguments into a report. Unparseable arguments yield the
/// usage error.
fn report_for(parsed: Result<Cli, clap::Error>) -> Report {
    match parsed {
        Ok(cli) => run(&cli),
        Err(err) => {
            tracing::debug!("argument parsing failed: {err}");
            Report::from_outcome(Err(MergeError::usage(USAGE)))
        }
    }
}

/// Main application logic.
fn run(cli: &Cli) -> Report {
    let request = cli.to_request();
    tracing::info!(
        "Starting PDF merge operation with {} files",
        request.inputs.len()
    );

    let mut merger = Merger::with_observer(LopdfCodec::new(), TracingObserver::new());
    Report::from_outcome(merger.merge(&request))
}
