//! Scan orchestration: enumerate bundles, build the universe, check each file.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use walkdir::WalkDir;

use crate::config::Config;
use crate::core::locale::is_reference_locale;
use crate::core::{KeyUniverse, PropertiesFile};
use crate::issues::{FileSummary, ScanReport};
use crate::parsers::properties::parse_properties_file;
use crate::rules::missing::check_missing_keys;

/// Scan restrictions, resolved from the CLI flag strings at the boundary.
///
/// The two flags are independent: a full scan may still restrict value
/// lookups to reference locales, and vice versa.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScanOptions {
    /// Check only reference-locale files for omissions.
    pub reference_files_only: bool,
    /// Consult only reference-locale files for context values.
    pub reference_values_only: bool,
}

/// Scan a directory of `.properties` bundles for missing keys.
///
/// Every enumerated file is parsed exactly once and contributes to the key
/// universe; the `reference_files_only` restriction narrows only which files
/// are checked, never which keys exist. The result depends only on file
/// contents and enumeration order.
pub fn scan(dir: &Path, options: &ScanOptions, config: &Config) -> Result<ScanReport> {
    let files = enumerate_bundles(dir, &config.extension)?
        .iter()
        .map(|path| parse_properties_file(path))
        .collect::<Result<Vec<PropertiesFile>>>()?;

    let universe = KeyUniverse::from_files(&files);

    let reports = files
        .iter()
        .filter(|file| !options.reference_files_only || is_reference_locale(&file.name, config))
        .map(|file| {
            check_missing_keys(
                file,
                &universe,
                &files,
                options.reference_values_only,
                config,
            )
        })
        .collect();

    Ok(ScanReport {
        scan_dir: dir.display().to_string(),
        extension: config.extension.clone(),
        files: files
            .iter()
            .map(|file| FileSummary {
                name: file.name.clone(),
                key_count: file.len(),
            })
            .collect(),
        reports,
    })
}

/// Regular files directly inside `dir` whose extension matches
/// case-insensitively, sorted by file name for deterministic enumeration.
fn enumerate_bundles(dir: &Path, extension: &str) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();

    for entry in WalkDir::new(dir).max_depth(1).sort_by_file_name() {
        let entry = entry
            .with_context(|| format!("Failed to read scan directory: {}", dir.display()))?;
        if !entry.file_type().is_file() {
            continue;
        }
        let matches = entry
            .path()
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case(extension));
        if matches {
            paths.push(entry.into_path());
        }
    }

    Ok(paths)
}

// ============================================================
// Tests
// ============================================================
