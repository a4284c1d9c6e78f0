//! Key-set comparison between code and language files.

use std::collections::HashSet;

/// Differences between the keys used in code and the keys defined in one
/// language file. Recomputed per file, never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyDiff {
    /// Keys used in code but not defined in the file, sorted.
    pub missing: Vec<String>,
    /// Keys defined in the file but never used in code (orphans), sorted.
    pub extra: Vec<String>,
}

impl KeyDiff {
    pub fn compute(used: &HashSet<String>, defined: &HashSet<String>) -> Self {
        let mut missing: Vec<String> = used.difference(defined).cloned().collect();
        let mut extra: Vec<String> = defined.difference(used).cloned().collect();
        missing.sort();
        extra.sort();
        Self { missing, extra }
    }

    pub fn is_clean(&self) -> bool {
        self.missing.is_empty() && self.extra.is_empty()
    }
}
