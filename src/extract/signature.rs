// extract/signature.rs — Multi-line declaration matching for C/C++ sources

use once_cell::sync::Lazy;
use regex::Regex;

/// Maximum number of lines a declaration may span before we give up.
pub const DECLARATION_WINDOW: usize = 5;

// C++-flavored declaration: optional qualifiers, namespaced return types,
// pointer/reference/template-bracket characters, trailing const/override.
static RE_CPP_FN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^\s*(?:inline\s+|static\s+|virtual\s+|explicit\s+)*(?P<ret>[a-zA-Z_:][a-zA-Z0-9_:<>,\s*&\[\]]*)\s+(?P<name>[a-zA-Z_][a-zA-Z0-9_]*)\s*\((?P<params>[^)]*)\)\s*(?:const\s*)?(?:override\s*)?$",
    )
    .expect("C++ fn regex")
});

// Plain C declaration: `type name(params)`.
static RE_C_FN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^\s*(?P<ret>[a-zA-Z_][a-zA-Z0-9_*\s]*)\s+(?P<name>[a-zA-Z_][a-zA-Z0-9_]*)\s*\((?P<params>[^)]*)\)\s*$",
    )
    .expect("C fn regex")
});

/// A declaration matched out of the lookahead window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub return_type: String,
    pub name: String,
    /// Verbatim text between the outer parens, trimmed; may be empty.
    pub parameters: String,
    /// Index of the last line the declaration occupies.
    pub last_line: usize,
}

/// Try to match a function declaration starting at `start`.
///
/// Accumulates up to [`DECLARATION_WINDOW`] consecutive lines (skipping blank
/// and `//` lines) until one contains `{` or the window is exhausted, joins
/// them, truncates at the first `{`, and applies the C++ pattern then the C
/// pattern. Returns `None` when neither matches; the caller advances one
/// line and retries.
pub fn match_declaration(lines: &[&str], start: usize) -> Option<Declaration> {
    let mut collected: Vec<&str> = Vec::new();
    let mut last_line = start;

    for (i, raw) in lines
        .iter()
        .enumerate()
        .skip(start)
        .take(DECLARATION_WINDOW)
    {
        let line = raw.trim();
        if line.is_empty() || line.starts_with("//") {
            continue;
        }
        collected.push(line);
        last_line = i;
        if line.contains('{') {
            break;
        }
    }

    if collected.is_empty() {
        return None;
    }

    let mut joined = collected.join(" ");
    if let Some(pos) = joined.find('{') {
        joined.truncate(pos);
    }
    let joined = joined.trim();

    for re in [&*RE_CPP_FN, &*RE_C_FN] {
        if let Some(cap) = re.captures(joined) {
            return Some(Declaration {
                return_type: cap["ret"].trim().to_string(),
                name: cap["name"].trim().to_string(),
                parameters: cap["params"].trim().to_string(),
                last_line,
            });
        }
    }

    None
}
