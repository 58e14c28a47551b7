//! Shared data models for manifests, violations, and verification reports.

pub mod manifest;

use serde::{Serialize, Serializer};
use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
/// Which manifest section a checked document came from.
pub enum Entry {
    Doc,
    Fixture,
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Entry::Doc => f.write_str("doc"),
            Entry::Fixture => f.write_str("fixture"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
/// A single verification failure. `Display` renders the line printed by
/// the CLI and returned by `verify::verify`.
pub enum Violation {
    #[error("{}: missing docs/exercises", root.display())]
    MissingBase {
        #[serde(serialize_with = "lossy_path")]
        root: PathBuf,
    },
    #[error("{}: invalid JSON ({reason} at line {line})", manifest.display())]
    InvalidManifest {
        #[serde(serialize_with = "lossy_path")]
        manifest: PathBuf,
        reason: String,
        line: usize,
        column: usize,
    },
    #[error("{}: unreadable manifest ({reason})", manifest.display())]
    UnreadableManifest {
        #[serde(serialize_with = "lossy_path")]
        manifest: PathBuf,
        reason: String,
    },
    #[error("{}: missing doc {path}", manifest.display())]
    MissingDoc {
        #[serde(serialize_with = "lossy_path")]
        manifest: PathBuf,
        path: String,
    },
    #[error("{}: missing reference {path}", manifest.display())]
    MissingReference {
        #[serde(serialize_with = "lossy_path")]
        manifest: PathBuf,
        path: String,
    },
    #[error("{}: missing fixture {path}", manifest.display())]
    MissingFixture {
        #[serde(serialize_with = "lossy_path")]
        manifest: PathBuf,
        path: String,
    },
    #[error("{}: missing heading '{heading}' in {path}", manifest.display())]
    MissingHeading {
        #[serde(serialize_with = "lossy_path")]
        manifest: PathBuf,
        heading: String,
        path: String,
        entry: Entry,
    },
    #[error("{}: unreadable {entry} {path} ({reason})", manifest.display())]
    UnreadableDocument {
        #[serde(serialize_with = "lossy_path")]
        manifest: PathBuf,
        path: String,
        entry: Entry,
        reason: String,
    },
}

/// Paths serialize as (lossy) strings so non-UTF-8 names never fail.
fn lossy_path<S: Serializer>(path: &Path, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(&path.to_string_lossy())
}

impl Violation {
    /// Stable kind tag, matching the serialized `kind` field.
    pub fn kind(&self) -> &'static str {
        match self {
            Violation::MissingBase { .. } => "missing-base",
            Violation::InvalidManifest { .. } => "invalid-manifest",
            Violation::UnreadableManifest { .. } => "unreadable-manifest",
            Violation::MissingDoc { .. } => "missing-doc",
            Violation::MissingReference { .. } => "missing-reference",
            Violation::MissingFixture { .. } => "missing-fixture",
            Violation::MissingHeading { .. } => "missing-heading",
            Violation::UnreadableDocument { .. } => "unreadable-document",
        }
    }

    /// Manifest the violation belongs to; `None` for the missing base path.
    pub fn manifest(&self) -> Option<&PathBuf> {
        match self {
            Violation::MissingBase { .. } => None,
            Violation::InvalidManifest { manifest, .. }
            | Violation::UnreadableManifest { manifest, .. }
            | Violation::MissingDoc { manifest, .. }
            | Violation::MissingReference { manifest, .. }
            | Violation::MissingFixture { manifest, .. }
            | Violation::MissingHeading { manifest, .. }
            | Violation::UnreadableDocument { manifest, .. } => Some(manifest),
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
/// Aggregated counts used by printers.
pub struct Summary {
    pub errors: usize,
    pub manifests: usize,
    pub documents: usize,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
/// Verification results container. An empty `violations` list means success.
pub struct VerifyReport {
    pub violations: Vec<Violation>,
    pub summary: Summary,
}

impl VerifyReport {
    pub fn is_ok(&self) -> bool {
        self.violations.is_empty()
    }

    /// Rendered messages in report order.
    pub fn messages(&self) -> Vec<String> {
        self.violations.iter().map(ToString::to_string).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_carry_manifest_and_detail() {
        let manifest = PathBuf::from("root/docs/exercises/a.manifest.json");
        let v = Violation::MissingHeading {
            manifest: manifest.clone(),
            heading: "Background".into(),
            path: "docs/exercises/a.md".into(),
            entry: Entry::Doc,
        };
        assert_eq!(
            v.to_string(),
            "root/docs/exercises/a.manifest.json: missing heading 'Background' in docs/exercises/a.md"
        );
        let v = Violation::InvalidManifest {
            manifest,
            reason: "EOF while parsing an object".into(),
            line: 3,
            column: 0,
        };
        assert!(v.to_string().contains("at line 3"));
    }

    #[test]
    fn test_violation_json_is_tagged_by_kind() {
        let v = Violation::UnreadableDocument {
            manifest: PathBuf::from("m.manifest.json"),
            path: "out.md".into(),
            entry: Entry::Fixture,
            reason: "stream did not contain valid UTF-8".into(),
        };
        let out = serde_json::to_value(&v).unwrap();
        assert_eq!(out["kind"], "unreadable-document");
        assert_eq!(out["entry"], "fixture");
        assert_eq!(out["kind"], v.kind());
        assert_eq!(
            v.to_string(),
            "m.manifest.json: unreadable fixture out.md (stream did not contain valid UTF-8)"
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_non_utf8_manifest_path_still_serializes() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let v = Violation::MissingReference {
            manifest: PathBuf::from(OsStr::from_bytes(b"docs/exercises/\xff.manifest.json")),
            path: "gone.txt".into(),
        };
        let out = serde_json::to_value(&v).unwrap();
        assert_eq!(out["kind"], "missing-reference");
        assert_eq!(out["path"], "gone.txt");
        assert!(out["manifest"].as_str().unwrap().starts_with("docs/exercises/"));
    }
}
