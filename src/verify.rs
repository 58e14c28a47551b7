//! Manifest validation engine.
//!
//! Every manifest found under `docs/exercises` is checked on its own:
//! `docs` (existence, then required headings), then `references`
//! (existence), then `outputs` (fixture existence, then required headings).
//! Entries are visited in declaration order and manifests in discovery
//! order, so the resulting violation list is stable for an unchanged tree.

use crate::discovery::{base_path, discover_manifests};
use crate::headings::extract_headings;
use crate::models::manifest::{DocSpec, Manifest};
use crate::models::{Entry, Summary, VerifyReport, Violation};
use std::fs;
use std::path::Path;

/// Verify all manifests under `root` and return rendered messages.
///
/// An empty list means the tree is consistent.
pub fn verify(root: &Path) -> Vec<String> {
    run_verify(root).messages()
}

/// Verify all manifests under `root`, returning typed violations and counts.
///
/// A missing `docs/exercises` directory yields exactly one violation and no
/// manifest is scanned.
pub fn run_verify(root: &Path) -> VerifyReport {
    let base = base_path(root);
    if !base.exists() {
        return VerifyReport {
            violations: vec![Violation::MissingBase {
                root: root.to_path_buf(),
            }],
            summary: Summary {
                errors: 1,
                manifests: 0,
                documents: 0,
            },
        };
    }

    let manifests = discover_manifests(&base);
    let mut violations: Vec<Violation> = Vec::new();
    let mut documents: usize = 0;
    for manifest_path in &manifests {
        verify_manifest(root, manifest_path, &mut violations, &mut documents);
    }

    VerifyReport {
        summary: Summary {
            errors: violations.len(),
            manifests: manifests.len(),
            documents,
        },
        violations,
    }
}

/// Check a single manifest, appending its violations in section order.
fn verify_manifest(
    root: &Path,
    manifest_path: &Path,
    violations: &mut Vec<Violation>,
    documents: &mut usize,
) {
    let mut manifest = match load_manifest(manifest_path) {
        Ok(m) => m,
        Err(v) => {
            violations.push(v);
            return;
        }
    };

    for doc in manifest.doc_specs() {
        let DocSpec {
            path,
            required_sections,
        } = doc;
        let doc_path = root.join(&path);
        if !doc_path.exists() {
            violations.push(Violation::MissingDoc {
                manifest: manifest_path.to_path_buf(),
                path,
            });
            continue;
        }
        *documents += 1;
        check_headings(
            manifest_path,
            &doc_path,
            &path,
            Entry::Doc,
            &required_sections,
            violations,
        );
    }

    for reference in &manifest.references {
        if !root.join(reference).exists() {
            violations.push(Violation::MissingReference {
                manifest: manifest_path.to_path_buf(),
                path: reference.clone(),
            });
        }
    }

    for output in &manifest.outputs {
        let Some(fixture) = output.fixture_path() else {
            continue;
        };
        let fixture_path = root.join(fixture);
        if !fixture_path.exists() {
            violations.push(Violation::MissingFixture {
                manifest: manifest_path.to_path_buf(),
                path: fixture.to_string(),
            });
            continue;
        }
        *documents += 1;
        check_headings(
            manifest_path,
            &fixture_path,
            fixture,
            Entry::Fixture,
            &output.required_sections,
            violations,
        );
    }
}

/// Read and parse a manifest; syntax and shape errors both carry the line.
fn load_manifest(path: &Path) -> Result<Manifest, Violation> {
    let data = fs::read_to_string(path).map_err(|e| Violation::UnreadableManifest {
        manifest: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    serde_json::from_str::<Manifest>(&data).map_err(|e| {
        let full = e.to_string();
        let location = format!(" at line {} column {}", e.line(), e.column());
        let reason = full.strip_suffix(&location).unwrap_or(&full).to_string();
        Violation::InvalidManifest {
            manifest: path.to_path_buf(),
            reason,
            line: e.line(),
            column: e.column(),
        }
    })
}

/// Report each required section absent from the document's headings.
///
/// The document is only read when at least one section is required.
fn check_headings(
    manifest_path: &Path,
    doc_path: &Path,
    declared: &str,
    entry: Entry,
    required: &[String],
    violations: &mut Vec<Violation>,
) {
    if required.is_empty() {
        return;
    }
    let text = match fs::read_to_string(doc_path) {
        Ok(s) => s,
        Err(e) => {
            violations.push(Violation::UnreadableDocument {
                manifest: manifest_path.to_path_buf(),
                path: declared.to_string(),
                entry,
                reason: e.to_string(),
            });
            return;
        }
    };
    let headings = extract_headings(&text);
    for section in required {
        if !headings.iter().any(|h| h == section) {
            violations.push(Violation::MissingHeading {
                manifest: manifest_path.to_path_buf(),
                heading: section.clone(),
                path: declared.to_string(),
                entry,
            });
        }
    }
}
