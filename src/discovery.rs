//! Manifest discovery beneath `<root>/docs/exercises`.
//!
//! Only this subtree is scanned; manifests elsewhere in the repository are
//! never considered. Symlinked directories are not descended into, so a
//! link cannot pull in outside manifests or loop back into the tree.

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// File name suffix that marks a manifest.
pub const MANIFEST_SUFFIX: &str = ".manifest.json";

/// Documentation base path for a repository root.
pub fn base_path(root: &Path) -> PathBuf {
    root.join("docs").join("exercises")
}

/// Recursively collect manifest files under `base`, sorted by path.
///
/// Entries that cannot be read while walking are skipped. Directories whose
/// name happens to end in the manifest suffix are ignored; a symlink to a
/// manifest file is kept.
pub fn discover_manifests(base: &Path) -> Vec<PathBuf> {
    let mut found: Vec<PathBuf> = WalkDir::new(base)
        .follow_links(false)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_name().to_string_lossy().ends_with(MANIFEST_SUFFIX))
        .filter(|e| e.file_type().is_file() || (e.path_is_symlink() && e.path().is_file()))
        .map(|e| e.into_path())
        .collect();
    found.sort();
    found
}
