//! CLI argument parsing via `clap`.

use crate::config::OutputMode;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "exverify",
    version,
    about = "Verify exercise docs against their manifests",
    long_about = "Exverify scans docs/exercises for *.manifest.json files and checks that every referenced doc, reference, and output fixture exists and carries its required headings.\n\nConfiguration precedence: CLI > exverify.toml > defaults.",
    after_help = "Examples:\n  exverify\n  exverify --root path/to/repo\n  exverify --root . --output json"
)]
/// Top-level CLI options.
pub struct Cli {
    #[arg(long, help = "Repository root (default: current dir)")]
    pub root: Option<PathBuf>,
    #[arg(long, value_enum, help = "Output mode: human|json (default: human)")]
    pub output: Option<OutputMode>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_defaults() {
        let cli = Cli::try_parse_from(["exverify"]).unwrap();
        assert!(cli.root.is_none());
        assert!(cli.output.is_none());
    }

    #[test]
    fn test_parse_root_and_output() {
        let cli = Cli::try_parse_from(["exverify", "--root", "repo", "--output", "json"]).unwrap();
        assert_eq!(cli.root, Some(PathBuf::from("repo")));
        assert_eq!(cli.output, Some(OutputMode::Json));
    }

    #[test]
    fn test_rejects_unknown_output() {
        assert!(Cli::try_parse_from(["exverify", "--output", "xml"]).is_err());
    }
}
