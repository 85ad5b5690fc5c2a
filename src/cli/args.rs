//! CLI argument definitions using clap.
//!
//! Propcheck has a single operation, so the surface is positional: the scan
//! directory plus two flag strings, where the literal `"true"` enables a
//! restriction and any other value leaves it off. The strings are converted
//! to booleans here, at the boundary; the core only ever sees [`bool`]s.

use std::convert::Infallible;
use std::path::PathBuf;

use clap::Parser;

fn parse_flag(value: &str) -> Result<bool, Infallible> {
    Ok(value == "true")
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    /// Directory containing the .properties bundles to scan
    pub scan_dir: PathBuf,

    /// Restrict checked files to reference locales ("true" enables)
    #[arg(action = clap::ArgAction::Set, value_parser = parse_flag, default_value = "false")]
    pub reference_files_only: bool,

    /// Restrict per-key value lookups to reference locales ("true" enables)
    #[arg(action = clap::ArgAction::Set, value_parser = parse_flag, default_value = "false")]
    pub reference_values_only: bool,

    /// Primary reference-locale prefix (overrides config file)
    #[arg(long)]
    pub primary_prefix: Option<String>,

    /// Secondary reference-locale prefix (overrides config file)
    #[arg(long)]
    pub secondary_prefix: Option<String>,
}
