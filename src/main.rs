// utilex — C/C++ utility-function extractor and library scaffolder
//
// Scans source trees with a bounded-lookahead signature matcher and a
// brace-depth body capture, filters out templates and entry points,
// reconciles LIBRARY_API header declarations, infers required includes, and
// emits the header/source scaffold for a shared or static library build.
// Compilation of the scaffold and any LLM-side refactoring happen outside
// this tool; externally produced records are merged back in via --merge.

mod cli;
mod config;
mod display;
mod export;
mod extract;
mod header;
mod includes;
mod language;
mod models;
mod scan;
mod store;

use clap::Parser;
use colored::Colorize;
use std::process;

use models::LibraryType;
use store::UtilityStore;

fn main() {
    let args = cli::Args::parse();

    if let Err(e) = run(&args) {
        eprintln!("{} {}", "[ERROR]".red().bold(), e);
        process::exit(1);
    }
}

fn run(args: &cli::Args) -> anyhow::Result<()> {
    let global = config::GlobalConfig::load();

    let scan_config = scan::ScanConfig::from_args(args)?;
    let mut result = scan::run_scan(&scan_config)?;

    if let Some(ref merge_path) = args.merge {
        let merge_store = store::MemoryStore::load_json(std::path::Path::new(merge_path))?;
        if !merge_store.is_empty() {
            store::apply_store(&mut result, &merge_store);
        }
    }

    // The score gate defaults to 7 once any record carries a score; unscored
    // runs are not gated unless a cutoff is configured explicitly.
    let any_scored = result
        .files
        .iter()
        .flat_map(|f| &f.functions)
        .any(|f| f.score.is_some());
    let min_score = args
        .min_score
        .or(global.min_score)
        .or(if any_scored { Some(7) } else { None });
    if let Some(cutoff) = min_score {
        store::apply_score_gate(&mut result, cutoff);
    }

    let show_rejections = args.show_rejections || global.show_rejections.unwrap_or(false);
    display::display_results(&result, &scan_config.target, args.detailed, show_rejections);

    let library_type = args.library_type.unwrap_or_else(|| {
        match global.library_type.as_deref() {
            Some("static") => LibraryType::Static,
            _ => LibraryType::Dll,
        }
    });

    if args.header_out.is_some() || args.source_out.is_some() {
        let selected = result.selected_functions();

        if let Some(ref path) = args.header_out {
            let content = header::generate_header(&selected, library_type);
            std::fs::write(path, content)
                .map_err(|e| anyhow::anyhow!("Cannot write header {}: {}", path, e))?;
            eprintln!("[SUCCESS] Wrote header → {}", path);
        }

        if let Some(ref path) = args.source_out {
            let content = header::generate_source(&selected);
            std::fs::write(path, content)
                .map_err(|e| anyhow::anyhow!("Cannot write source {}: {}", path, e))?;
            eprintln!("[SUCCESS] Wrote source → {}", path);
        }
    }

    if let Some(ref output_file) = args.export {
        export::export(&result, output_file)?;
    }

    Ok(())
}
