use std::path::Path;

use fxhash::FxHashMap;

use super::schema::{FieldWindow, ReportSchema};

/// Extraction result for one run under one configuration: every schema
/// variable, independently nullable.
pub type ReportRecord = FxHashMap<&'static str, Option<f64>>;

/// An all-None record sized to the schema
pub fn all_none(schema: ReportSchema) -> ReportRecord {
    schema.iter().map(|(name, _)| (*name, None)).collect()
}

/// Extract every schema variable from a fixed-width report file.
///
/// An absent or unreadable file yields an all-None record sized to the schema;
/// callers treat that as degraded data, never as fatal. Within a readable file
/// each variable parses independently: an out-of-range line index or a window
/// that does not parse as a number nulls that variable only, leaving the rest
/// of the extraction untouched.
pub fn extract(report_path: &Path, schema: ReportSchema) -> ReportRecord {
    let contents = match std::fs::read_to_string(report_path) {
        Ok(text) => text,
        Err(_) => return all_none(schema),
    };
    let lines: Vec<&str> = contents.lines().collect();

    let mut record = ReportRecord::default();
    for (name, window) in schema {
        record.insert(*name, read_window(&lines, window));
    }
    record
}

/// Read one declared window, clamped to the actual line length.
fn read_window(lines: &[&str], window: &FieldWindow) -> Option<f64> {
    let line = lines.get(window.line)?;
    let end = window.end.min(line.len());
    if window.start >= end {
        return None;
    }
    line.get(window.start..end)?.trim().parse::<f64>().ok()
}
