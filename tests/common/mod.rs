// tests/common/mod.rs — Fixture tree and binary-invocation helpers

// Each integration test binary compiles this module separately and most
// use only a subset of the helpers.
#![allow(dead_code)]

use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

/// Build a scratch source tree from (relative path, content) pairs.
pub fn make_fixture(files: &[(&str, &str)]) -> TempDir {
    let dir = TempDir::new().expect("TempDir::new");
    for (name, content) in files {
        let path = dir.path().join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content).unwrap();
    }
    dir
}

/// Run the binary with a fixture path (directory or file) as the scan
/// target, followed by any extra arguments.
pub fn run_in(target: &Path, args: &[&str]) -> Output {
    let target = target.to_str().expect("fixture path is valid UTF-8");
    let mut full: Vec<&str> = vec![target];
    full.extend_from_slice(args);
    run_utilex(&full)
}

/// Run the binary with raw arguments.
pub fn run_utilex(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_utilex"))
        .args(args)
        .output()
        .expect("failed to execute utilex binary")
}
