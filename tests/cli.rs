// tests/cli.rs — Argument surface and error paths

mod common;
use common::{make_fixture, run_in, run_utilex};

#[test]
fn test_help_shows_examples() {
    let out = run_utilex(&["--help"]);
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("EXAMPLES:"));
    assert!(stdout.contains("--merge"));
    assert!(stdout.contains("--library-type"));
}

#[test]
fn test_version_flag() {
    let out = run_utilex(&["--version"]);
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("utilex"));
}

#[test]
fn test_nonexistent_target_fails() {
    let out = run_utilex(&["/definitely/not/a/real/path"]);
    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("[ERROR]"));
}

#[test]
fn test_unknown_dialect_warns_but_succeeds() {
    let fixture = make_fixture(&[("util.cpp", "int f() {\n  return 0;\n}\n")]);
    let out = run_in(fixture.path(), &["-t", "fortran"]);
    assert!(out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("[WARN]"));
}

#[test]
fn test_bare_extension_filter_does_not_warn() {
    let fixture = make_fixture(&[("types.hpp", "int f() {\n  return 0;\n}\n")]);
    let out = run_in(fixture.path(), &["-t", "hpp"]);
    assert!(out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(
        !stderr.contains("[WARN]"),
        "hpp is a known extension, no warning expected:\n{}",
        stderr
    );
}

#[test]
fn test_invalid_library_type_rejected() {
    let fixture = make_fixture(&[("util.cpp", "int f() {\n  return 0;\n}\n")]);
    let out = run_in(fixture.path(), &["--library-type", "framework"]);
    assert!(!out.status.success());
}
