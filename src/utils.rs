//! Supporting helpers: stderr prefixes and path display.

use owo_colors::OwoColorize;
use std::path::Path;

/// Colors are on unless `NO_COLOR` is set.
pub fn colors_enabled() -> bool {
    std::env::var_os("NO_COLOR").is_none()
}

fn prefix(label: &str, paint: fn(&str) -> String) -> String {
    if colors_enabled() {
        paint(label)
    } else {
        label.to_string()
    }
}

pub fn error_prefix() -> String {
    prefix("error:", |s| s.red().bold().to_string())
}

pub fn note_prefix() -> String {
    prefix("note:", |s| s.cyan().bold().to_string())
}

pub fn info_prefix() -> String {
    prefix("info:", |s| s.blue().bold().to_string())
}

/// Display `path` relative to `root` when possible, using `/` separators.
pub fn rel_to_root(path: &Path, root: &Path) -> String {
    let rel = pathdiff::diff_paths(path, root).unwrap_or_else(|| path.to_path_buf());
    rel.to_string_lossy().replace('\\', "/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rel_to_root_strips_root() {
        let root = Path::new("/repo");
        let p = Path::new("/repo/docs/exercises/a.manifest.json");
        assert_eq!(rel_to_root(p, root), "docs/exercises/a.manifest.json");
    }

    #[test]
    fn test_rel_to_root_relative_inputs() {
        let root = Path::new(".");
        let p = Path::new("./docs/exercises/a.manifest.json");
        assert_eq!(rel_to_root(p, root), "docs/exercises/a.manifest.json");
    }
}
