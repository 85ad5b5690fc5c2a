use anyhow::Result;

use super::args::Arguments;
use super::exit_status::ExitStatus;
use super::report;
use crate::config::load_config;
use crate::core::scan::{ScanOptions, scan};

/// Run one scan from parsed arguments and map the outcome to an exit status.
///
/// The directory-existence check happens before any enumeration: an absent
/// scan directory is a configuration error, not an I/O error mid-scan.
pub fn run(args: Arguments) -> Result<ExitStatus> {
    let mut config = load_config(&args.scan_dir)?.config;
    if let Some(prefix) = args.primary_prefix {
        config.primary_prefix = prefix;
    }
    if let Some(prefix) = args.secondary_prefix {
        config.secondary_prefix = prefix;
    }
    config.validate()?;

    report::print_banner();

    if !args.scan_dir.is_dir() {
        report::print_missing_dir(&args.scan_dir);
        return Ok(ExitStatus::Failure);
    }

    let options = ScanOptions {
        reference_files_only: args.reference_files_only,
        reference_values_only: args.reference_values_only,
    };

    let result = scan(&args.scan_dir, &options, &config)?;
    report::print(&result);

    Ok(if result.has_omissions() {
        ExitStatus::Failure
    } else {
        ExitStatus::Success
    })
}
