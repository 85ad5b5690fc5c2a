//! Missing-key resolution.
//!
//! Determines which universe keys a file omits, and for each omission looks
//! up the values the other files assign to that key.

use crate::config::Config;
use crate::core::locale::is_reference_locale;
use crate::core::{KeyUniverse, PropertiesFile};
use crate::issues::{FileReport, MissingKey, ValueContext};

/// Check one file against the key universe.
///
/// A key appears in the report iff it is in the universe and absent from the
/// file's own key set. Files are already parsed; every lookup is a map probe.
///
/// # Arguments
/// * `target` - The file being checked
/// * `universe` - Union of all keys across the scanned set
/// * `all_files` - The full scanned set, in enumeration order
/// * `reference_values_only` - Consult only reference-locale files for values
pub fn check_missing_keys(
    target: &PropertiesFile,
    universe: &KeyUniverse,
    all_files: &[PropertiesFile],
    reference_values_only: bool,
    config: &Config,
) -> FileReport {
    let missing = universe
        .iter()
        .filter(|key| !target.contains_key(key.as_str()))
        .map(|key| MissingKey {
            key: key.clone(),
            contexts: collect_contexts(key, all_files, reference_values_only, config),
        })
        .collect();

    FileReport {
        name: target.name.clone(),
        path: target.path.clone(),
        missing,
    }
}

/// Values assigned to `key` across the file set, in enumeration order.
///
/// The target file is never filtered out explicitly: it cannot contribute a
/// context entry for a key it does not define.
fn collect_contexts(
    key: &str,
    all_files: &[PropertiesFile],
    reference_values_only: bool,
    config: &Config,
) -> Vec<ValueContext> {
    all_files
        .iter()
        .filter(|file| !reference_values_only || is_reference_locale(&file.name, config))
        .filter_map(|file| {
            file.get(key).map(|value| ValueContext {
                file: file.name.clone(),
                value: value.to_string(),
            })
        })
        .collect()
}
