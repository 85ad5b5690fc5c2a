//! Report formatting and printing utilities.
//!
//! Separate from the scan logic to allow propcheck to be used as a library.
//! Printing is observational only: it renders a [`ScanReport`] and never
//! feeds back into the computed result.

use std::io::{self, Write};
use std::path::Path;

use colored::Colorize;

use crate::issues::{FileReport, ScanReport};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

pub fn print_banner() {
    println!("{}", "Starting propcheck".bold());
}

pub fn print_missing_dir(dir: &Path) {
    eprintln!(
        "{}",
        format!("Scan directory {} does not exist", dir.display()).red()
    );
}

/// Print a scan report to stdout.
///
/// Output order follows the scan: the enumeration lines first, then one
/// block per checked file with its missing keys, context entries, and
/// per-file summary count.
pub fn print(report: &ScanReport) {
    print_to(report, &mut io::stdout().lock());
}

/// Print a scan report to a custom writer.
///
/// Useful for testing or redirecting output.
pub fn print_to<W: Write>(report: &ScanReport, writer: &mut W) {
    let _ = writeln!(
        writer,
        "Looking for .{} files in {}",
        report.extension, report.scan_dir
    );
    let _ = writeln!(
        writer,
        "Found {} .{} files",
        report.files.len(),
        report.extension
    );
    for file in &report.files {
        let _ = writeln!(
            writer,
            "Found {} translations in {}",
            file.key_count, file.name
        );
    }

    for file_report in &report.reports {
        print_file_report(file_report, writer);
    }
}

fn print_file_report<W: Write>(report: &FileReport, writer: &mut W) {
    let _ = writeln!(writer);
    let _ = writeln!(
        writer,
        "{}",
        format!("Checking {} for missing properties", report.path).underline()
    );

    for missing in &report.missing {
        let _ = writeln!(
            writer,
            "{}",
            format!(
                "Property \"{}\" does not exist in {}",
                missing.key, report.path
            )
            .red()
        );
        for context in &missing.contexts {
            let _ = writeln!(
                writer,
                "{}",
                format!(
                    "Property \"{}\" has following value in {}: {}",
                    missing.key, context.file, context.value
                )
                .red()
            );
        }
        let _ = writeln!(writer);
    }

    let count = report.missing.len();
    if count > 0 {
        let _ = writeln!(
            writer,
            "{} Found {} missing properties",
            FAILURE_MARK.red(),
            count
        );
    } else {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            "Found 0 missing properties, well done!".green()
        );
    }
}

// ============================================================
// Tests
// ============================================================
