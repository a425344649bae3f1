// header.rs — External-linkage declaration reconciliation and file generation

use crate::includes;
use crate::models::{ExtractedFunction, LibraryType};

/// Produce the single external-linkage declaration line for a function.
///
/// Precedence, highest first:
/// 1. a non-blank `header_declaration` already on the record is returned
///    verbatim, with no validation against the structured fields — records
///    arriving from an external reviewing step are trusted as-is;
/// 2. the first body line containing `name(` (and not a `//` comment),
///    stripped at `{` and prefixed with `LIBRARY_API` unless already present;
/// 3. synthesis from the structured fields, keeping only the text before any
///    `" - "` separator in the return type (external records pack a
///    human-readable explanation after it).
pub fn build_declaration(func: &ExtractedFunction) -> String {
    if !func.header_declaration.trim().is_empty() {
        return func.header_declaration.clone();
    }

    let needle = format!("{}(", func.name);
    let signature_line = func
        .body
        .lines()
        .map(str::trim)
        .find(|l| l.contains(&needle) && !l.starts_with("//"));

    if let Some(line) = signature_line {
        let line = match line.find('{') {
            Some(pos) => line[..pos].trim(),
            None => line,
        };
        if line.starts_with("LIBRARY_API") {
            return format!("{};", line);
        }
        return format!("LIBRARY_API {};", line);
    }

    let return_type = func
        .return_type
        .split(" - ")
        .next()
        .unwrap_or(&func.return_type)
        .trim();
    let parameters = if func.parameters.trim().is_empty() {
        "void"
    } else {
        func.parameters.as_str()
    };
    format!("LIBRARY_API {} {}({});", return_type, func.name, parameters)
}

/// Generate the full library header: include guard, `extern "C"` block, the
/// `LIBRARY_API` macro for the target library type, and one declaration per
/// function.
pub fn generate_header(funcs: &[&ExtractedFunction], library_type: LibraryType) -> String {
    let mut out = String::from(
        "#ifndef UTILITY_LIBRARY_H\n\
         #define UTILITY_LIBRARY_H\n\
         \n\
         #ifdef __cplusplus\n\
         extern \"C\" {\n\
         #endif\n\
         \n",
    );

    match library_type {
        LibraryType::Dll => out.push_str(
            "#ifdef BUILDING_DLL\n\
             #define LIBRARY_API __declspec(dllexport)\n\
             #else\n\
             #define LIBRARY_API __declspec(dllimport)\n\
             #endif\n\
             \n",
        ),
        LibraryType::Static => out.push_str("#define LIBRARY_API\n\n"),
    }

    for func in funcs {
        out.push_str(&format!("// {}\n{}\n\n", func.name, build_declaration(func)));
    }

    out.push_str(
        "#ifdef __cplusplus\n\
         }\n\
         #endif\n\
         \n\
         #endif // UTILITY_LIBRARY_H\n",
    );

    out
}

/// Generate the combined translation unit: the sorted union of required
/// includes, the export macro for the build side, then each function body
/// verbatim. Compiling the result is the caller's concern.
pub fn generate_source(funcs: &[&ExtractedFunction]) -> String {
    let mut out = String::new();

    for header in includes::union_includes(funcs) {
        out.push_str(&format!("#include {}\n", header));
    }

    out.push_str(
        "\n\
         #ifdef _WIN32\n\
         #define LIBRARY_API __declspec(dllexport)\n\
         #else\n\
         #define LIBRARY_API __attribute__((visibility(\"default\")))\n\
         #endif\n\
         \n",
    );

    for func in funcs {
        out.push_str(&func.body);
        out.push_str("\n\n");
    }

    out
}
