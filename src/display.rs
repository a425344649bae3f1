// display.rs — Colored terminal reports

use colored::*;
use std::path::Path;

use crate::models::{FileReport, ScanResult};

fn fmt_num(n: usize) -> String {
    // Thousands-separator formatting
    let s = n.to_string();
    let mut result = String::new();
    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(ch);
    }
    result.chars().rev().collect()
}

fn rel_path(fi: &FileReport, root: &Path) -> String {
    fi.path
        .strip_prefix(root)
        .unwrap_or(&fi.path)
        .display()
        .to_string()
}

/// Print the scan summary and, optionally, per-file listings.
pub fn display_results(result: &ScanResult, root: &Path, detailed: bool, show_rejections: bool) {
    println!();
    println!("{}", "Utility Function Extraction".bold());
    println!("{}", "─".repeat(50));

    for fi in &result.files {
        if fi.functions.is_empty() && (!show_rejections || fi.rejections.is_empty()) {
            continue;
        }

        println!(
            "{}  {}",
            rel_path(fi, root).green(),
            format!(
                "{} function{}",
                fi.function_count(),
                if fi.function_count() == 1 { "" } else { "s" }
            )
            .dimmed()
        );

        if detailed {
            for func in &fi.functions {
                let score = match func.score {
                    Some(s) => format!("  score {}", s).magenta().to_string(),
                    None => String::new(),
                };
                println!(
                    "  {} {}  {}{}",
                    format!("L{:<5}", func.source_line).dimmed(),
                    func.name.cyan(),
                    func.original_signature.dimmed(),
                    score
                );
            }
        }

        if show_rejections {
            for rej in &fi.rejections {
                println!(
                    "  {} {}  {}",
                    format!("L{:<5}", rej.line).dimmed(),
                    rej.name.yellow(),
                    format!("rejected: {}", rej.reason).yellow()
                );
            }
        }
    }

    println!("{}", "─".repeat(50));
    println!(
        "{} files scanned, {} lines",
        fmt_num(result.files.len()).bold(),
        fmt_num(result.total_lines())
    );
    println!(
        "{} exportable function{} extracted, {} rejected",
        fmt_num(result.total_functions()).bold().green(),
        if result.total_functions() == 1 { "" } else { "s" },
        fmt_num(result.total_rejections()).yellow()
    );
    println!();
}
