// cli.rs — CLI argument parsing via clap derive

use clap::Parser;

use crate::models::LibraryType;

/// utilex — C/C++ utility-function extractor and library scaffolder
///
/// Scans source trees for exportable utility functions, reconciles
/// external-linkage declarations, infers the include set per function, and
/// emits the header/source scaffold for a shared or static library build.
#[derive(Parser, Debug)]
#[command(
    name = "utilex",
    version,
    about = "Extract exportable C/C++ utility functions — header generation, include inference, JSON/CSV export",
    after_help = "\
EXAMPLES:
  utilex                           Scan the current directory
  utilex src/                      Scan a specific directory
  utilex util.cpp                  Scan a single file
  utilex -d                        Per-file function listing
  utilex --show-rejections         Also list filtered-out candidates
  utilex -t c                      Only scan .c/.h files
  utilex -H utility_library.h      Write the generated header
  utilex -S combined.cpp           Write the combined source file
  utilex --library-type static -H api.h
  utilex -m refactored.json        Merge externally refactored records
  utilex -m scored.json --min-score 8
  utilex -e report.json            Export results to JSON

MERGE RECORDS:
  -m/--merge takes a JSON array of function records (the shape an external
  refactoring/review step produces). A merged record replaces the extracted
  function with the same name wholesale; its header_declaration and
  required_headers take precedence downstream.

EXCLUSIONS:
  Template functions and the entry points main/WinMain/DllMain are never
  extracted."
)]
pub struct Args {
    /// Directory or file to scan (default: current directory)
    #[arg(default_value = ".")]
    pub target: String,

    /// Show the per-file function listing
    #[arg(short = 'd', long = "detailed")]
    pub detailed: bool,

    /// List candidates dropped by the exclusion filter and why
    #[arg(long = "show-rejections")]
    pub show_rejections: bool,

    /// Filter by dialect — e.g. -t c cpp
    #[arg(short = 't', long = "type", value_name = "DIALECT", num_args = 1..)]
    pub file_types: Vec<String>,

    /// Write the generated library header to this file
    #[arg(short = 'H', long = "header", value_name = "FILE")]
    pub header_out: Option<String>,

    /// Write the combined library source to this file
    #[arg(short = 'S', long = "source", value_name = "FILE")]
    pub source_out: Option<String>,

    /// Target library type for the LIBRARY_API macro block
    #[arg(long = "library-type", value_enum)]
    pub library_type: Option<LibraryType>,

    /// Merge externally refactored function records (JSON array)
    #[arg(short = 'm', long = "merge", value_name = "FILE")]
    pub merge: Option<String>,

    /// Drop scored records below this reusability score (1-10)
    #[arg(long = "min-score", value_name = "SCORE")]
    pub min_score: Option<u8>,

    /// Export results to file (.json, .jsonl, or .csv)
    #[arg(short = 'e', long = "export", value_name = "FILE")]
    pub export: Option<String>,

    /// Disable parallel file processing
    #[arg(long = "no-parallel")]
    pub no_parallel: bool,
}
