// extract/mod.rs — Extraction pipeline: scan, match, filter, capture

pub mod body;
pub mod filter;
pub mod signature;

use crate::models::{ExtractedFunction, Rejection};

/// Output of one extraction pass over a source text.
#[derive(Debug, Default)]
pub struct Extraction {
    pub functions: Vec<ExtractedFunction>,
    pub rejections: Vec<Rejection>,
}

/// Walk the source line by line, matching declarations, filtering by policy,
/// and capturing accepted bodies.
///
/// Best-effort by design: a line that does not resemble a declaration is
/// skipped silently and the scan advances by one. The pass never fails —
/// worst case it returns an empty list. Policy rejections are recorded so
/// callers can see what was dropped and why.
pub fn extract_functions(content: &str) -> Extraction {
    let lines: Vec<&str> = content.lines().collect();
    let mut out = Extraction::default();

    let mut i = 0;
    while i < lines.len() {
        let line = lines[i].trim();

        // Comments and preprocessor directives cannot open a declaration.
        if line.is_empty()
            || line.starts_with("//")
            || line.starts_with('#')
            || line.starts_with("/*")
        {
            i += 1;
            continue;
        }

        let decl = match signature::match_declaration(&lines, i) {
            Some(d) => d,
            None => {
                i += 1;
                continue;
            }
        };

        if let Some(reason) = filter::check(&lines, i, decl.last_line, &decl.name) {
            out.rejections.push(Rejection {
                name: decl.name,
                line: i + 1,
                reason,
            });
            i = decl.last_line + 1;
            continue;
        }

        let (body_text, end) = body::extract_body(&lines, decl.last_line);

        let parameters = if decl.parameters.is_empty() {
            "void".to_string()
        } else {
            decl.parameters.clone()
        };
        let original_signature =
            format!("{} {}({})", decl.return_type, decl.name, decl.parameters);
        let header_declaration = format!(
            "LIBRARY_API {} {}({});",
            decl.return_type, decl.name, decl.parameters
        );

        out.functions.push(ExtractedFunction {
            name: decl.name,
            return_type: decl.return_type,
            parameters,
            header_declaration,
            original_signature,
            source_line: i + 1,
            body: body_text,
            required_headers: Vec::new(),
            score: None,
        });

        i = end + 1;
    }

    out
}
