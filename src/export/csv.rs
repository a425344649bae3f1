// export/csv.rs — CSV export, one row per extracted function

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use anyhow::{Context, Result};

use crate::header;
use crate::models::ScanResult;

pub fn export_csv(result: &ScanResult, path: &Path) -> Result<()> {
    let f = File::create(path).with_context(|| format!("Cannot create {}", path.display()))?;
    let mut wtr = csv::Writer::from_writer(BufWriter::new(f));

    wtr.write_record([
        "Path",
        "Function",
        "Return Type",
        "Parameters",
        "Line",
        "Body Lines",
        "Score",
        "Header Declaration",
    ])?;

    for fi in &result.files {
        let path = fi.path.display().to_string();
        for func in &fi.functions {
            let line = func.source_line.to_string();
            let body_lines = func.body_line_count().to_string();
            let score = func.score.map(|s| s.to_string()).unwrap_or_default();
            let declaration = header::build_declaration(func);
            wtr.write_record([
                path.as_str(),
                func.name.as_str(),
                func.return_type.as_str(),
                func.parameters.as_str(),
                line.as_str(),
                body_lines.as_str(),
                score.as_str(),
                declaration.as_str(),
            ])?;
        }
    }

    wtr.flush()?;
    eprintln!("[SUCCESS] Exported CSV → {}", path.display());
    Ok(())
}
