//! Exverify CLI binary entry point.
//! Resolves configuration, runs verification, and prints results.
//!
//! Exit codes: 0 when every manifest checks out, 1 on any violation,
//! 2 when the run cannot start (bad config).

use clap::Parser;
use exverify::cli::Cli;
use exverify::config::{self, OutputMode};
use exverify::{discovery, output, utils, verify};

fn main() {
    let cli = Cli::parse();
    let eff = match config::resolve_effective(cli.root.as_deref(), cli.output) {
        Ok(eff) => eff,
        Err(e) => {
            eprintln!("{} {}", utils::error_prefix(), e);
            std::process::exit(2);
        }
    };

    let human = eff.output == OutputMode::Human;
    // Friendly note if no config file was found
    if human && eff.config_path.is_none() {
        eprintln!(
            "{} No exverify.toml found; using defaults.",
            utils::note_prefix()
        );
    }

    let report = verify::run_verify(&eff.root);
    if human && report.summary.manifests > 0 {
        eprintln!(
            "{} Scanned {} manifest(s) under {}",
            utils::info_prefix(),
            report.summary.manifests,
            discovery::base_path(&eff.root).display()
        );
    }
    output::print_verify(&report, &eff.root, eff.output);
    if !report.is_ok() {
        std::process::exit(1);
    }
}
