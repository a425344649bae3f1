// tests/extraction.rs — End-to-end extraction behavior through the binary

mod common;
use common::{make_fixture, run_in};

const ADD_CPP: &str = "int add(int a, int b) {\n  return a + b;\n}\n";

#[test]
fn test_basic_scan_exits_zero() {
    let fixture = make_fixture(&[("util.cpp", ADD_CPP)]);
    let out = run_in(fixture.path(), &[]);
    assert!(out.status.success(), "utilex exited non-zero: {:?}", out.status);
}

#[test]
fn test_extracted_function_listed() {
    let fixture = make_fixture(&[("util.cpp", ADD_CPP)]);
    let out = run_in(fixture.path(), &["-d"]);
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("add"), "Function name missing:\n{}", stdout);
    assert!(
        stdout.contains("int add(int a, int b)"),
        "Original signature missing:\n{}",
        stdout
    );
}

#[test]
fn test_entry_point_not_listed() {
    let fixture = make_fixture(&[(
        "main.cpp",
        "int main(int argc, char** argv) {\n  return 0;\n}\n\nint helper(int x) {\n  return x;\n}\n",
    )]);
    let out = run_in(fixture.path(), &["-d"]);
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("helper"));
    assert!(
        !stdout.contains("int main("),
        "Entry point should not be listed:\n{}",
        stdout
    );
}

#[test]
fn test_template_function_not_listed() {
    let fixture = make_fixture(&[(
        "tmpl.cpp",
        "template<typename T> T identity(T x) { return x; }\n",
    )]);
    let out = run_in(fixture.path(), &["-d"]);
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("0 "), "Expected zero functions:\n{}", stdout);
    assert!(!stdout.contains("identity  "));
}

#[test]
fn test_show_rejections_names_the_reason() {
    // The two candidates live in separate files: the template lookahead
    // window spans 10 lines past a declaration, so an entry point that close
    // to a template token would itself be tagged as a template.
    let fixture = make_fixture(&[
        ("entry.cpp", "int main() {\n  return 0;\n}\n"),
        ("tmpl.cpp", "template<typename T>\nT pick(T x) {\n  return x;\n}\n"),
    ]);
    let out = run_in(fixture.path(), &["--show-rejections"]);
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("entry point"), "Missing entry-point reason:\n{}", stdout);
    assert!(
        stdout.contains("template function"),
        "Missing template reason:\n{}",
        stdout
    );
}

#[test]
fn test_entry_point_near_template_takes_template_reason() {
    // Within one file the template check runs first over its whole window;
    // an entry point 10 lines or closer to a template token is reported as a
    // template, exactly as the window rule specifies.
    let fixture = make_fixture(&[(
        "mixed.cpp",
        "int main() {\n  return 0;\n}\n\ntemplate<typename T>\nT pick(T x) {\n  return x;\n}\n",
    )]);
    let out = run_in(fixture.path(), &["--show-rejections"]);
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(
        !stdout.contains("entry point"),
        "main inside the template window must not carry the entry-point reason:\n{}",
        stdout
    );
    assert!(stdout.contains("template function"), "Missing template reason:\n{}", stdout);
}

#[test]
fn test_non_source_files_ignored() {
    let fixture = make_fixture(&[
        ("util.cpp", ADD_CPP),
        ("script.py", "def add(a, b):\n    return a + b\n"),
        ("notes.md", "# notes\n"),
    ]);
    let out = run_in(fixture.path(), &[]);
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("1 files scanned"), "Expected one file:\n{}", stdout);
}

#[test]
fn test_dialect_filter_c_only() {
    let fixture = make_fixture(&[
        ("a.c", "int a_fn(int x) {\n  return x;\n}\n"),
        ("b.cpp", "int b_fn(int x) {\n  return x;\n}\n"),
    ]);
    let out = run_in(fixture.path(), &["-t", "c", "-d"]);
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("a_fn"));
    assert!(!stdout.contains("b_fn"), "cpp file should be filtered:\n{}", stdout);
}

#[test]
fn test_single_file_target() {
    let fixture = make_fixture(&[("only.cpp", ADD_CPP)]);
    let out = run_in(&fixture.path().join("only.cpp"), &["-d"]);
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("add"));
}
