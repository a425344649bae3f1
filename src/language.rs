// language.rs — C/C++ extension mapping and scan exclusions

use once_cell::sync::Lazy;
use std::collections::{HashMap, HashSet};

/// Dialect name → file extensions (with leading dot). The extractor runs the
/// same C/C++ patterns regardless of the claimed dialect; the filter only
/// narrows which files are scanned.
pub static LANGUAGE_MAP: Lazy<HashMap<&'static str, Vec<&'static str>>> = Lazy::new(|| {
    let mut m = HashMap::new();
    m.insert("c", vec![".c", ".h"]);
    m.insert("cpp", vec![".cpp", ".cc", ".cxx", ".hpp", ".hxx", ".h++"]);
    m
});

static ALIASES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    let mut m = HashMap::new();
    m.insert("c++", "cpp");
    m.insert("cxx", "cpp");
    m.insert("cc", "cpp");
    m
});

/// All extensions the scanner accepts by default.
pub static SOURCE_EXTENSIONS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    LANGUAGE_MAP.values().flatten().copied().collect()
});

/// Resolve a user-provided dialect name or extension to file extensions.
///
/// Accepts a dialect name (`"cpp"`), an alias (`"c++"`), or a raw extension
/// (`".cc"` or `"cc"`).
pub fn resolve_extensions(input: &str) -> Vec<String> {
    let lower = input.to_lowercase();

    if lower.starts_with('.') {
        return vec![lower];
    }

    let canonical = ALIASES.get(lower.as_str()).copied().unwrap_or(lower.as_str());
    if let Some(exts) = LANGUAGE_MAP.get(canonical) {
        return exts.iter().map(|e| e.to_string()).collect();
    }

    vec![format!(".{}", lower)]
}

/// Whether a filter input names a known dialect, alias, or source extension.
pub fn is_known_dialect(input: &str) -> bool {
    let lower = input.to_lowercase();
    let bare = lower.strip_prefix('.').unwrap_or(&lower);
    let dotted = format!(".{}", bare);
    if SOURCE_EXTENSIONS.contains(dotted.as_str()) {
        return true;
    }
    let canonical = ALIASES.get(bare).copied().unwrap_or(bare);
    LANGUAGE_MAP.contains_key(canonical)
}

/// Directories skipped during traversal.
pub static EXCLUDED_DIRS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "node_modules", ".git", "vendor", ".venv", "venv", "__pycache__",
        "dist", "build", "cmake-build-debug", "cmake-build-release",
        "target", "bin", "obj", ".idea", ".vscode", "coverage",
    ]
    .iter()
    .copied()
    .collect()
});
