//! The key universe: the union of every distinct key across the scanned files.

use std::collections::HashSet;

use crate::core::bundle::PropertiesFile;

/// Ordered set of all distinct keys observed across a set of files.
///
/// Membership is order-independent; a key's position is where it was first
/// seen, in file enumeration order. The universe is the union of all files,
/// not the intersection: no single file is authoritative.
#[derive(Debug, Default, Clone)]
pub struct KeyUniverse {
    keys: Vec<String>,
    seen: HashSet<String>,
}

impl KeyUniverse {
    /// Build the universe as a fold over the files in enumeration order.
    pub fn from_files(files: &[PropertiesFile]) -> Self {
        files.iter().fold(Self::default(), |mut universe, file| {
            for key in file.keys() {
                universe.insert(key);
            }
            universe
        })
    }

    fn insert(&mut self, key: &str) {
        if self.seen.insert(key.to_string()) {
            self.keys.push(key.to_string());
        }
    }

    /// Check if a key is in the universe.
    pub fn contains(&self, key: &str) -> bool {
        self.seen.contains(key)
    }

    /// Keys in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = &String> {
        self.keys.iter()
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}
