// scan.rs — File discovery, decoding, and parallel extraction

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::time::UNIX_EPOCH;

use anyhow::{Context, Result};
use chrono::{DateTime, TimeZone, Utc};
use rayon::prelude::*;

use crate::cli::Args;
use crate::extract;
use crate::language::{EXCLUDED_DIRS, SOURCE_EXTENSIONS};
use crate::models::{FileReport, ScanResult};

/// Files processed sequentially below this count even when parallelism is on.
const PARALLEL_THRESHOLD: usize = 50;

/// Configuration for one scan run.
#[derive(Clone)]
pub struct ScanConfig {
    pub target: PathBuf,
    pub allowed_extensions: Option<HashSet<String>>,
    pub parallel: bool,
}

impl ScanConfig {
    pub fn from_args(args: &Args) -> Result<Self> {
        let target = Path::new(&args.target)
            .canonicalize()
            .with_context(|| format!("Cannot resolve path: {}", args.target))?;

        let allowed_extensions = if args.file_types.is_empty() {
            None
        } else {
            let mut exts = HashSet::new();
            for dialect in &args.file_types {
                if !crate::language::is_known_dialect(dialect) {
                    eprintln!("[WARN] Unknown dialect filter: {}", dialect);
                }
                exts.extend(crate::language::resolve_extensions(dialect));
            }
            Some(exts)
        };

        Ok(Self {
            target,
            allowed_extensions,
            parallel: !args.no_parallel,
        })
    }
}

/// Run the full scan and return per-file extraction reports.
pub fn run_scan(config: &ScanConfig) -> Result<ScanResult> {
    let mut files = discover_files(&config.target);
    files.sort_unstable();

    let process = |path: &PathBuf| match process_file(path, config) {
        Ok(opt) => opt,
        Err(e) => {
            eprintln!("[WARN] Skipped {}: {}", path.display(), e);
            None
        }
    };

    let mut reports: Vec<FileReport> = if config.parallel && files.len() > PARALLEL_THRESHOLD {
        files.par_iter().filter_map(process).collect()
    } else {
        files.iter().filter_map(process).collect()
    };

    reports.sort_by(|a, b| a.path.cmp(&b.path));
    Ok(ScanResult { files: reports })
}

fn discover_files(target: &Path) -> Vec<PathBuf> {
    if target.is_file() {
        return vec![target.to_path_buf()];
    }

    walkdir::WalkDir::new(target)
        .follow_links(false)
        .into_iter()
        .filter_entry(|e| {
            if e.depth() == 0 {
                return true;
            }
            let name = e.file_name().to_string_lossy();
            if e.file_type().is_dir() {
                !EXCLUDED_DIRS.contains(name.as_ref()) && !name.starts_with('.')
            } else {
                !name.starts_with('.')
            }
        })
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| e.path().to_path_buf())
        .collect()
}

fn process_file(path: &Path, config: &ScanConfig) -> Result<Option<FileReport>> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| format!(".{}", e.to_lowercase()))
        .unwrap_or_default();

    match &config.allowed_extensions {
        Some(allowed) if !allowed.contains(&ext) => return Ok(None),
        None if !SOURCE_EXTENSIONS.contains(ext.as_str()) => return Ok(None),
        _ => {}
    }

    let bytes = std::fs::read(path).with_context(|| format!("Cannot read {}", path.display()))?;
    if is_binary(&bytes) {
        return Ok(None);
    }

    // Uploads arrive in whatever encoding the author used; decode lossily
    // rather than refusing the file.
    let content = String::from_utf8_lossy(&bytes);
    let lines = content.lines().count();

    let mut report = FileReport::new(path.to_path_buf(), lines, fs_last_modified(path));
    let extraction = extract::extract_functions(&content);
    report.functions = extraction.functions;
    report.rejections = extraction.rejections;

    Ok(Some(report))
}

fn is_binary(bytes: &[u8]) -> bool {
    bytes.iter().take(8192).any(|&b| b == 0)
}

fn fs_last_modified(path: &Path) -> Option<DateTime<Utc>> {
    path.metadata()
        .ok()
        .and_then(|m| m.modified().ok())
        .and_then(|t| t.duration_since(UNIX_EPOCH).ok())
        .and_then(|d| Utc.timestamp_opt(d.as_secs() as i64, 0).single())
}
