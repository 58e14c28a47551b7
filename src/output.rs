//! Output rendering for verification reports.
//!
//! Supports `human` (default) and `json` outputs. Human mode writes one
//! violation message per line to stdout, keeping it line-delimited for
//! automation; the summary goes to stderr. The JSON form includes
//! per-violation fields and a top-level summary.

use crate::config::OutputMode;
use crate::models::VerifyReport;
use crate::utils;
use owo_colors::OwoColorize;
use serde_json::json;
use serde_json::Value as JsonVal;
use std::path::Path;

/// Message printed when no violations were found.
pub const SUCCESS_MESSAGE: &str = "Exercise verification passed";

/// Print a verification report in the requested format.
pub fn print_verify(report: &VerifyReport, root: &Path, output: OutputMode) {
    match output {
        OutputMode::Json => match serde_json::to_string_pretty(&compose_verify_json(report, root)) {
            Ok(s) => println!("{}", s),
            Err(e) => eprintln!("{} {}", utils::error_prefix(), e),
        },
        OutputMode::Human => {
            if report.is_ok() {
                println!("{}", SUCCESS_MESSAGE);
                return;
            }
            for line in compose_human_lines(report) {
                println!("{}", line);
            }
            let summary = format!(
                "— Summary — errors={} manifests={} documents={}",
                report.summary.errors, report.summary.manifests, report.summary.documents
            );
            if utils::colors_enabled() {
                eprintln!("{}", summary.bold());
            } else {
                eprintln!("{}", summary);
            }
        }
    }
}

/// Human lines (pure) for testing: exactly one uncolored line per violation.
pub fn compose_human_lines(report: &VerifyReport) -> Vec<String> {
    report.messages()
}

/// Compose verification JSON object (pure) for testing/snapshot purposes.
pub fn compose_verify_json(report: &VerifyReport, root: &Path) -> JsonVal {
    let items: Vec<JsonVal> = report
        .violations
        .iter()
        .map(|v| {
            let mut item =
                serde_json::to_value(v).unwrap_or_else(|_| json!({ "kind": v.kind() }));
            if let JsonVal::Object(obj) = &mut item {
                if let Some(m) = v.manifest() {
                    obj.insert("manifest".into(), json!(utils::rel_to_root(m, root)));
                }
                obj.insert("message".into(), json!(v.to_string()));
            }
            item
        })
        .collect();
    json!({
        "ok": report.is_ok(),
        "violations": items,
        "summary": report.summary,
    })
}
