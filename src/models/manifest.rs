//! Manifest schema: documents, references, and output fixtures that one
//! exercise declares under `docs/exercises/**/*.manifest.json`.

use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
/// Top-level manifest. Missing collections default to empty; unknown keys
/// are ignored.
pub struct Manifest {
    #[serde(default)]
    pub docs: Vec<DocRef>,
    #[serde(default)]
    pub references: Vec<String>,
    #[serde(default)]
    pub outputs: Vec<OutputSpec>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
/// A `docs` entry as written: either a bare path or a full record.
pub enum DocRef {
    Path(String),
    Spec(DocSpec),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Canonical `docs` entry used by the validation engine.
pub struct DocSpec {
    pub path: String,
    #[serde(default)]
    pub required_sections: Vec<String>,
}

impl From<DocRef> for DocSpec {
    fn from(r: DocRef) -> Self {
        match r {
            DocRef::Path(path) => DocSpec {
                path,
                required_sections: Vec::new(),
            },
            DocRef::Spec(spec) => spec,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
/// An `outputs` entry. A null, absent, or empty `fixture` is skipped.
pub struct OutputSpec {
    #[serde(default)]
    pub fixture: Option<String>,
    #[serde(default)]
    pub required_sections: Vec<String>,
}

impl OutputSpec {
    /// Fixture path when one is declared and non-empty.
    pub fn fixture_path(&self) -> Option<&str> {
        self.fixture.as_deref().filter(|f| !f.is_empty())
    }
}

impl Manifest {
    /// Normalize `docs` entries into canonical records.
    pub fn doc_specs(&mut self) -> Vec<DocSpec> {
        std::mem::take(&mut self.docs)
            .into_iter()
            .map(DocSpec::from)
            .collect()
    }
}
