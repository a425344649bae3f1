// export/json.rs — JSON and JSONL export

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use chrono::Utc;
use serde_json::json;

use crate::header;
use crate::includes;
use crate::models::{FileReport, ScanResult};

pub fn export_json(result: &ScanResult, path: &Path) -> Result<()> {
    let data = json!({
        "metadata": {
            "total_files": result.files.len(),
            "total_lines": result.total_lines(),
            "total_functions": result.total_functions(),
            "total_rejections": result.total_rejections(),
            "timestamp": Utc::now().to_rfc3339(),
        },
        "files": result.files.iter().map(file_to_value).collect::<Vec<_>>(),
    });

    let f = File::create(path).with_context(|| format!("Cannot create {}", path.display()))?;
    serde_json::to_writer_pretty(BufWriter::new(f), &data)
        .with_context(|| "Failed to serialize JSON")?;

    eprintln!("[SUCCESS] Exported JSON → {}", path.display());
    Ok(())
}

pub fn export_jsonl(result: &ScanResult, path: &Path) -> Result<()> {
    let f = File::create(path).with_context(|| format!("Cannot create {}", path.display()))?;
    let mut writer = BufWriter::new(f);

    for fi in &result.files {
        let line = serde_json::to_string(&file_to_value(fi))
            .with_context(|| "Failed to serialize JSONL record")?;
        writeln!(writer, "{}", line)?;
    }

    eprintln!("[SUCCESS] Exported JSONL → {}", path.display());
    Ok(())
}

pub fn file_to_value(fi: &FileReport) -> serde_json::Value {
    json!({
        "path": fi.path.to_string_lossy(),
        "lines": fi.lines,
        "extension": fi.extension(),
        "last_modified": fi.last_modified.map(|d| d.to_rfc3339()),
        "functions": fi.functions.iter().map(|f| {
            json!({
                "name": f.name,
                "return_type": f.return_type,
                "parameters": f.parameters,
                "original_signature": f.original_signature,
                "header_declaration": header::build_declaration(f),
                "source_line": f.source_line,
                "body_lines": f.body_line_count(),
                "required_headers": includes::required_includes(f).into_iter().collect::<Vec<_>>(),
                "score": f.score,
                "body": f.body,
            })
        }).collect::<Vec<_>>(),
        "rejections": fi.rejections,
    })
}
