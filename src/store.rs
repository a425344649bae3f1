// store.rs — Session-scoped record store for externally refactored functions

use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};

use crate::models::{ExtractedFunction, FileReport, ScanResult};

/// Key-value store from function name to its latest record. Injected into
/// the generation pipeline instead of living on shared global state; one
/// instance per scan/request, nothing persists across runs.
pub trait UtilityStore {
    /// Insert or replace a record. Last writer for a name wins, wholesale —
    /// there are no merge semantics.
    fn put(&mut self, func: ExtractedFunction);

    fn get(&self, name: &str) -> Option<&ExtractedFunction>;

    /// Names in insertion order.
    fn names(&self) -> Vec<String>;

    fn is_empty(&self) -> bool {
        self.names().is_empty()
    }
}

/// In-memory implementation backing a single run.
#[derive(Debug, Default)]
pub struct MemoryStore {
    map: HashMap<String, ExtractedFunction>,
    order: Vec<String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a JSON array of function records, e.g. the output of an external
    /// refactoring/review step.
    pub fn load_json(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Cannot read merge file {}", path.display()))?;
        let records: Vec<ExtractedFunction> = serde_json::from_str(&content)
            .with_context(|| format!("Invalid merge records in {}", path.display()))?;
        let mut store = Self::new();
        for record in records {
            store.put(record);
        }
        Ok(store)
    }
}

impl UtilityStore for MemoryStore {
    fn put(&mut self, func: ExtractedFunction) {
        if !self.map.contains_key(&func.name) {
            self.order.push(func.name.clone());
        }
        self.map.insert(func.name.clone(), func);
    }

    fn get(&self, name: &str) -> Option<&ExtractedFunction> {
        self.map.get(name)
    }

    fn names(&self) -> Vec<String> {
        self.order.clone()
    }
}

/// Apply stored records to a scan result. An extracted function whose name
/// exists in the store is replaced wholesale; stored records that matched
/// nothing are appended under a synthetic `<merged>` report so they still
/// flow into generation and export.
pub fn apply_store(result: &mut ScanResult, store: &dyn UtilityStore) {
    let mut matched: std::collections::HashSet<String> = std::collections::HashSet::new();

    for fi in &mut result.files {
        for func in &mut fi.functions {
            if let Some(replacement) = store.get(&func.name) {
                *func = replacement.clone();
                matched.insert(func.name.clone());
            }
        }
    }

    let leftovers: Vec<ExtractedFunction> = store
        .names()
        .into_iter()
        .filter(|n| !matched.contains(n))
        .filter_map(|n| store.get(&n).cloned())
        .collect();

    if !leftovers.is_empty() {
        let mut report = FileReport::new("<merged>".into(), 0, None);
        report.functions = leftovers;
        result.files.push(report);
    }
}

/// Drop functions scoring below the threshold. Unscored records pass — the
/// gate only applies where an external reviewer assigned a score.
pub fn apply_score_gate(result: &mut ScanResult, min_score: u8) {
    for fi in &mut result.files {
        fi.functions
            .retain(|f| f.score.map_or(true, |s| s >= min_score));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, body: &str) -> ExtractedFunction {
        ExtractedFunction {
            name: name.into(),
            return_type: "int".into(),
            parameters: "void".into(),
            header_declaration: String::new(),
            original_signature: format!("int {}()", name),
            source_line: 1,
            body: body.into(),
            required_headers: Vec::new(),
            score: None,
        }
    }

    fn result_with(funcs: Vec<ExtractedFunction>) -> ScanResult {
        let mut report = FileReport::new("util.cpp".into(), 10, None);
        report.functions = funcs;
        ScanResult {
            files: vec![report],
        }
    }

    #[test]
    fn test_last_writer_wins() {
        let mut store = MemoryStore::new();
        store.put(record("add", "v1"));
        store.put(record("add", "v2"));
        assert_eq!(store.get("add").unwrap().body, "v2");
        assert_eq!(store.names(), vec!["add".to_string()]);
    }

    #[test]
    fn test_apply_store_replaces_wholesale() {
        let mut result = result_with(vec![record("add", "original")]);
        let mut store = MemoryStore::new();
        let mut refactored = record("add", "refactored");
        refactored.required_headers = vec!["<vector>".into()];
        store.put(refactored);

        apply_store(&mut result, &store);
        let f = &result.files[0].functions[0];
        assert_eq!(f.body, "refactored");
        assert_eq!(f.required_headers, vec!["<vector>".to_string()]);
    }

    #[test]
    fn test_unmatched_records_appended() {
        let mut result = result_with(vec![record("add", "original")]);
        let mut store = MemoryStore::new();
        store.put(record("brand_new", "fresh"));

        apply_store(&mut result, &store);
        assert_eq!(result.files.len(), 2);
        assert_eq!(result.files[1].functions[0].name, "brand_new");
    }

    #[test]
    fn test_score_gate() {
        let mut low = record("low", "x");
        low.score = Some(4);
        let mut high = record("high", "y");
        high.score = Some(9);
        let unscored = record("unscored", "z");
        let mut result = result_with(vec![low, high, unscored]);

        apply_score_gate(&mut result, 7);
        let names: Vec<_> = result.files[0]
            .functions
            .iter()
            .map(|f| f.name.as_str())
            .collect();
        assert_eq!(names, vec!["high", "unscored"]);
    }
}
