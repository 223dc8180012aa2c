use crate::domain::{EnumerationMode, TermError, TermReport, TermResult};
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

/// Text report: header, then one block per group separated by blank lines.
pub fn render_text_report(report: &TermReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Number of electrons = {}", report.electron_count);
    let _ = writeln!(
        out,
        "Config. = {} = {}",
        report.configuration, report.expanded
    );
    let _ = writeln!(out, "Parity: {}", report.parity);
    if let EnumerationMode::SingleJ(j) = report.mode {
        let _ = writeln!(out, "J = {} = {:.1}", j, j.as_f64());
    }
    out.push('\n');

    for group in &report.groups {
        for record in &group.records {
            let _ = writeln!(out, "{record}");
        }
        out.push('\n');
    }
    out
}

pub fn render_json_report(report: &TermReport) -> TermResult<String> {
    serde_json::to_string_pretty(report)
        .map_err(|error| TermError::Io(format!("failed to serialize term report: {error}")))
}

pub fn normalize_text_artifact(content: &str) -> String {
    let mut normalized = content.replace("\r\n", "\n").replace('\r', "\n");
    if !normalized.is_empty() && !normalized.ends_with('\n') {
        normalized.push('\n');
    }
    normalized
}

pub fn write_text_artifact(path: &Path, content: &str) -> TermResult<()> {
    fs::write(path, normalize_text_artifact(content)).map_err(|source| {
        TermError::Io(format!(
            "failed to write report '{}': {}",
            path.display(),
            source
        ))
    })
}
