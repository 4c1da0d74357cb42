//! CLI argument parsing for pdfmerge.
//!
//! The interface is purely positional: the output path first, then the
//! inputs in merge order.

use clap::Parser;
use std::path::PathBuf;

use pdfmerge::config::MergeRequest;

/// Usage line reported when the arguments cannot be parsed.
pub const USAGE: &str = "Usage: pdfmerge <output_file> <input_file1> <input_file2> [input_file3] ...";

/// Concatenate the pages of several PDF files into one document.
///
/// On completion a single JSON object is printed to standard output:
/// the merge report on success, or `{"error": ..., "success": false}` on
/// failure. Progress is logged to standard error.
#[derive(Parser, Debug)]
#[command(name = "pdfmerge")]
#[command(version)]
#[command(about = "Concatenate the pages of several PDF files into one document", long_about = None)]
#[command(author)]
pub struct Cli {
    /// Output PDF file path
    ///
    /// Created or overwritten once every input has been read.
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,

    /// Input PDF files to merge (in order, at least two)
    ///
    /// Paths starting with `-` are taken as inputs, not flags.
    #[arg(value_name = "INPUT", allow_hyphen_values = true)]
    pub inputs: Vec<PathBuf>,
}

impl Cli {
    /// Convert the parsed arguments into a merge request.
    pub fn to_request(&self) -> MergeRequest {
        MergeRequest::new(self.inputs.iter().cloned(), self.output.clone())
    }
}
