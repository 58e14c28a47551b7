//! Exverify core library.
//!
//! This crate checks exercise documentation against JSON manifests found
//! under `docs/exercises`: referenced files must exist and documents must
//! carry the headings their manifest requires.
//!
//! High-level modules:
//! - `cli`: CLI argument parsing (binary uses this).
//! - `config`: Config file discovery and effective settings resolution.
//! - `discovery`: Manifest lookup beneath the documentation base path.
//! - `headings`: Heading title extraction from Markdown-style text.
//! - `verify`: Per-manifest validation producing ordered violations.
//! - `models`: Manifest schema plus violation and report types.
//! - `output`: Human/JSON printers for verification reports.
//! - `utils`: Supporting helpers.
pub mod cli;
pub mod config;
pub mod discovery;
pub mod headings;
pub mod models;
pub mod output;
pub mod utils;
pub mod verify;

pub use models::{Violation, VerifyReport};
pub use verify::{run_verify, verify};
