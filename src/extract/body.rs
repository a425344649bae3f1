// extract/body.rs — Brace-depth body capture

/// Capture a function body by counting brace depth from `start`.
///
/// The body ends on the line where the depth returns to zero after having
/// been opened at least once. Braces inside string/char literals or comments
/// are not special-cased — a literal `"{"` corrupts the count. That is a
/// known limitation carried over from the tool this scanner replaces; do not
/// "fix" it here without revisiting the downstream trust assumptions.
///
/// If braces never balance the capture runs to end of file and returns
/// truncated text rather than failing.
///
/// Returns the verbatim text from `start` through the closing line,
/// inclusive, and the index of that closing line.
pub fn extract_body(lines: &[&str], start: usize) -> (String, usize) {
    let mut depth: i32 = 0;
    let mut started = false;
    let mut end = lines.len().saturating_sub(1);
    let mut body: Vec<&str> = Vec::new();

    'outer: for (i, line) in lines.iter().enumerate().skip(start) {
        body.push(line);
        for ch in line.chars() {
            match ch {
                '{' => {
                    depth += 1;
                    started = true;
                }
                '}' => {
                    depth -= 1;
                }
                _ => {}
            }
        }
        if started && depth == 0 {
            end = i;
            break 'outer;
        }
    }

    (body.join("\n"), end)
}
