// models/mod.rs — Core data structures for the extractor pipeline

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// One candidate utility function pulled out of a C/C++ source file.
///
/// Immutable once extracted. A record loaded from an external refactoring
/// step may replace it wholesale by `name` — there are no merge semantics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractedFunction {
    pub name: String,
    /// Return type as matched. External records may pack a human-readable
    /// explanation after a `" - "` separator; the header builder strips it.
    pub return_type: String,
    /// Verbatim text between the outer parens; `"void"` when empty.
    pub parameters: String,
    /// External-linkage declaration, `LIBRARY_API <ret> <name>(<params>);`.
    pub header_declaration: String,
    pub original_signature: String,
    /// 1-based line of the first declaration line.
    pub source_line: usize,
    /// Declaration through closing brace, verbatim.
    pub body: String,
    /// Explicit include list supplied by an external step. When non-empty it
    /// takes precedence over heuristic inference for this function.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub required_headers: Vec<String>,
    /// Reusability score (1-10) assigned by an external reviewer, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<u8>,
}

impl ExtractedFunction {
    #[inline]
    pub fn body_line_count(&self) -> usize {
        self.body.lines().count()
    }
}

/// Why a matched candidate was dropped by the exclusion filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectReason {
    /// `template` appeared in the declaration-to-body window; a template
    /// cannot be exported with a fixed external-linkage signature.
    Template,
    /// `main`, `WinMain`, or `DllMain` — process entry points.
    EntryPoint,
}

impl std::fmt::Display for RejectReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RejectReason::Template => write!(f, "template function"),
            RejectReason::EntryPoint => write!(f, "entry point"),
        }
    }
}

/// A candidate that matched but was rejected by policy. Recorded so callers
/// and tests can see why; the accepted-function list is unaffected.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Rejection {
    pub name: String,
    pub line: usize,
    pub reason: RejectReason,
}

/// Extraction output for a single source file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileReport {
    pub path: PathBuf,
    pub lines: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<DateTime<Utc>>,
    pub functions: Vec<ExtractedFunction>,
    pub rejections: Vec<Rejection>,
}

impl FileReport {
    pub fn new(path: PathBuf, lines: usize, last_modified: Option<DateTime<Utc>>) -> Self {
        Self {
            path,
            lines,
            last_modified,
            functions: Vec::new(),
            rejections: Vec::new(),
        }
    }

    #[inline]
    pub fn function_count(&self) -> usize {
        self.functions.len()
    }

    /// File extension without the leading dot, or empty string.
    pub fn extension(&self) -> &str {
        self.path.extension().and_then(|e| e.to_str()).unwrap_or("")
    }
}

/// The full scan result across all discovered source files.
#[derive(Debug)]
pub struct ScanResult {
    pub files: Vec<FileReport>,
}

impl ScanResult {
    pub fn total_lines(&self) -> usize {
        self.files.iter().map(|f| f.lines).sum()
    }

    pub fn total_functions(&self) -> usize {
        self.files.iter().map(|f| f.function_count()).sum()
    }

    pub fn total_rejections(&self) -> usize {
        self.files.iter().map(|f| f.rejections.len()).sum()
    }

    /// All accepted functions in file order. A later function with a name
    /// already seen replaces the earlier one, matching the last-writer-wins
    /// merge rule.
    pub fn selected_functions(&self) -> Vec<&ExtractedFunction> {
        let mut by_name: std::collections::HashMap<&str, usize> = std::collections::HashMap::new();
        let mut out: Vec<&ExtractedFunction> = Vec::new();
        for fi in &self.files {
            for func in &fi.functions {
                match by_name.get(func.name.as_str()) {
                    Some(&idx) => out[idx] = func,
                    None => {
                        by_name.insert(func.name.as_str(), out.len());
                        out.push(func);
                    }
                }
            }
        }
        out
    }
}

/// Target artifact kind; selects the `LIBRARY_API` macro block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum LibraryType {
    #[default]
    Dll,
    Static,
}
