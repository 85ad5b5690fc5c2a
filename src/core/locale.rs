//! Reference-locale classification.

use crate::config::Config;

/// Whether a bundle belongs to the reference-locale subset.
///
/// Classification is by base filename prefix so it behaves the same
/// regardless of the host path-separator convention. The same predicate
/// restricts which files are checked and which files are consulted for
/// context values; the two restrictions are toggled independently.
pub fn is_reference_locale(file_name: &str, config: &Config) -> bool {
    file_name.starts_with(&config.primary_prefix)
        || file_name.starts_with(&config.secondary_prefix)
}
