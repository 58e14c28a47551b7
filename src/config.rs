//! Configuration discovery and effective settings resolution.
//!
//! Exverify reads `exverify.toml|yaml|yml` from the verification root and
//! merges it with CLI flags to produce an `Effective` config.
//! Defaults:
//! - `root`: current directory
//! - `output`: `human`
//!
//! Overrides precedence: CLI > config file > defaults.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Config file names probed at the root, in order.
pub const CONFIG_FILES: [&str; 3] = ["exverify.toml", "exverify.yaml", "exverify.yml"];

#[derive(Debug, Default, Deserialize, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
/// How results are printed.
pub enum OutputMode {
    #[default]
    Human,
    Json,
}

#[derive(Debug, Default, Deserialize, Clone)]
/// Root configuration loaded from `exverify.toml|yaml`.
pub struct ExverifyConfig {
    pub output: Option<OutputMode>,
}

#[derive(Debug, Clone)]
/// Fully-resolved configuration used by the binary after applying precedence.
pub struct Effective {
    pub root: PathBuf,
    pub output: OutputMode,
    /// Config file that contributed settings, if any.
    pub config_path: Option<PathBuf>,
}

#[derive(Debug, Error)]
/// Setup failures that stop the run before any verification happens.
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid config {}: {source}", path.display())]
    Toml {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("invalid config {}: {source}", path.display())]
    Yaml {
        path: PathBuf,
        source: serde_yaml::Error,
    },
}

/// Locate the first config file present under `root`.
pub fn find_config(root: &Path) -> Option<PathBuf> {
    CONFIG_FILES
        .iter()
        .map(|name| root.join(name))
        .find(|p| p.is_file())
}

/// Load `ExverifyConfig` from `exverify.toml` or `exverify.yaml|yml` if present.
pub fn load_config(root: &Path) -> Result<Option<(PathBuf, ExverifyConfig)>, ConfigError> {
    let Some(path) = find_config(root) else {
        return Ok(None);
    };
    let s = fs::read_to_string(&path).map_err(|source| ConfigError::Read {
        path: path.clone(),
        source,
    })?;
    let cfg = if path.extension().is_some_and(|e| e == "toml") {
        toml::from_str::<ExverifyConfig>(&s).map_err(|source| ConfigError::Toml {
            path: path.clone(),
            source,
        })?
    } else {
        serde_yaml::from_str::<ExverifyConfig>(&s).map_err(|source| ConfigError::Yaml {
            path: path.clone(),
            source,
        })?
    };
    Ok(Some((path, cfg)))
}

/// Resolve `Effective` by merging CLI flags, discovered config, and defaults.
pub fn resolve_effective(
    cli_root: Option<&Path>,
    cli_output: Option<OutputMode>,
) -> Result<Effective, ConfigError> {
    let root = cli_root
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."));
    let (config_path, cfg) = match load_config(&root)? {
        Some((p, c)) => (Some(p), c),
        None => (None, ExverifyConfig::default()),
    };
    let output = cli_output.or(cfg.output).unwrap_or_default();
    Ok(Effective {
        root,
        output,
        config_path,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn test_defaults_without_config() {
        let dir = tempdir().unwrap();
        let eff = resolve_effective(Some(dir.path()), None).unwrap();
        assert_eq!(eff.output, OutputMode::Human);
        assert!(eff.config_path.is_none());
        assert_eq!(eff.root, dir.path());
    }

    #[test]
    fn test_load_toml_and_cli_precedence() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        let mut f = fs::File::create(root.join("exverify.toml")).unwrap();
        writeln!(f, "{}", r#"output = "json""#).unwrap();

        let eff = resolve_effective(Some(root), None).unwrap();
        assert_eq!(eff.output, OutputMode::Json);
        assert_eq!(eff.config_path, Some(root.join("exverify.toml")));

        // CLI overrides config
        let eff = resolve_effective(Some(root), Some(OutputMode::Human)).unwrap();
        assert_eq!(eff.output, OutputMode::Human);
    }

    #[test]
    fn test_load_yaml() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::write(root.join("exverify.yml"), "output: json\n").unwrap();

        let eff = resolve_effective(Some(root), None).unwrap();
        assert_eq!(eff.output, OutputMode::Json);
    }

    #[test]
    fn test_toml_wins_over_yaml() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::write(root.join("exverify.toml"), "output = \"human\"\n").unwrap();
        fs::write(root.join("exverify.yaml"), "output: json\n").unwrap();

        let eff = resolve_effective(Some(root), None).unwrap();
        assert_eq!(eff.output, OutputMode::Human);
    }

    #[test]
    fn test_invalid_config_is_an_error() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::write(root.join("exverify.toml"), "output = \"xml\"\n").unwrap();

        let err = resolve_effective(Some(root), None).unwrap_err();
        assert!(matches!(err, ConfigError::Toml { .. }));
        assert!(err.to_string().contains("exverify.toml"));
    }
}
