// includes.rs — Required-header inference for standalone compilation

use std::collections::BTreeSet;

use crate::models::ExtractedFunction;

/// One inference rule: if any needle appears in the body, the header is
/// required. Substring matching by design — this is a best-effort heuristic
/// with known false negatives and positives, not a dependency analyzer.
struct IncludeRule {
    needles: &'static [&'static str],
    header: &'static str,
}

static INCLUDE_RULES: &[IncludeRule] = &[
    IncludeRule {
        needles: &["std::chrono", "system_clock", "time_point"],
        header: "<chrono>",
    },
    IncludeRule {
        needles: &["std::put_time", "std::setw", "std::setfill"],
        header: "<iomanip>",
    },
    IncludeRule {
        needles: &["std::ostringstream", "std::stringstream"],
        header: "<sstream>",
    },
    IncludeRule {
        needles: &["std::pow", "std::sqrt"],
        header: "<cmath>",
    },
    IncludeRule {
        needles: &["localtime_s", "localtime_r"],
        header: "<ctime>",
    },
    IncludeRule {
        needles: &["std::string"],
        header: "<string>",
    },
    IncludeRule {
        needles: &["std::optional"],
        header: "<optional>",
    },
    IncludeRule {
        needles: &["std::filesystem", "filesystem::path"],
        header: "<filesystem>",
    },
    IncludeRule {
        needles: &["std::ifstream", "std::ofstream", "std::fstream"],
        header: "<fstream>",
    },
    IncludeRule {
        needles: &["std::runtime_error", "std::exception"],
        header: "<stdexcept>",
    },
];

/// Always included regardless of what the body uses.
pub const DEFAULT_INCLUDES: &[&str] = &["<iostream>"];

/// Infer the include set for one function body from the rule table, plus the
/// default baseline.
pub fn infer_includes(body: &str) -> BTreeSet<String> {
    let mut headers: BTreeSet<String> = DEFAULT_INCLUDES.iter().map(|h| h.to_string()).collect();
    for rule in INCLUDE_RULES {
        if rule.needles.iter().any(|n| body.contains(n)) {
            headers.insert(rule.header.to_string());
        }
    }
    headers
}

/// Include set for a function record. An externally supplied non-empty list
/// takes precedence and skips the heuristic entirely.
pub fn required_includes(func: &ExtractedFunction) -> BTreeSet<String> {
    if !func.required_headers.is_empty() {
        return func.required_headers.iter().cloned().collect();
    }
    infer_includes(&func.body)
}

/// Sorted union of the include sets of all selected functions, plus the
/// default baseline.
pub fn union_includes(funcs: &[&ExtractedFunction]) -> BTreeSet<String> {
    let mut all: BTreeSet<String> = DEFAULT_INCLUDES.iter().map(|h| h.to_string()).collect();
    for func in funcs {
        all.extend(required_includes(func));
    }
    all
}
