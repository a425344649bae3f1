// extract/filter.rs — Policy rejection of matched candidates

use crate::models::RejectReason;

/// Process entry points are never exported as library functions.
pub const ENTRY_POINTS: &[&str] = &["main", "WinMain", "DllMain"];

/// How far past the last declaration line the template check looks.
const TEMPLATE_LOOKAHEAD: usize = 10;

/// Apply the exclusion policy to a matched declaration, in order:
///
/// 1. the word `template` (case-insensitive) anywhere in the window from the
///    declaration line through [`TEMPLATE_LOOKAHEAD`] lines past the last
///    declaration line — templates cannot be exported with a fixed
///    external-linkage signature;
/// 2. an entry-point name (`main`, `WinMain`, `DllMain`).
///
/// Returns the reason to reject, or `None` when the candidate is accepted.
pub fn check(lines: &[&str], decl_start: usize, decl_end: usize, name: &str) -> Option<RejectReason> {
    let window_end = (decl_end + TEMPLATE_LOOKAHEAD).min(lines.len());
    let window = lines[decl_start..window_end].join("\n").to_lowercase();
    if window.contains("template") {
        return Some(RejectReason::Template);
    }

    if ENTRY_POINTS.contains(&name) {
        return Some(RejectReason::EntryPoint);
    }

    None
}
