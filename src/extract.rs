//! Translation-key extraction from source files.
//!
//! Scans a directory tree for calls of the form `.tr("key")` / `.tr( 'key' )`
//! and collects the quoted keys. The match is purely textual: it spans
//! newlines, accepts any receiver before `.tr(`, and cannot see keys built at
//! runtime from variables or concatenation.

use std::{collections::HashSet, fs, path::Path, sync::LazyLock};

use glob::Pattern;
use regex::Regex;
use walkdir::WalkDir;

static TR_CALL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"\.tr\s*\(\s*["']([^"']+)["']\s*\)"#).unwrap());

/// Result of extracting used keys from a source tree.
#[derive(Debug, Default)]
pub struct ExtractResult {
    /// Every key referenced at least once, duplicates collapsed.
    pub keys: HashSet<String>,
    pub files_scanned: usize,
    /// Per-file problems that were skipped (unreadable files, walk errors).
    pub warnings: Vec<String>,
}

/// Collect every translation key referenced under `root`.
///
/// Files are filtered by the `extensions` allow-list; paths matching any of
/// the `ignores` globs are skipped. An unreadable file is recorded as a
/// warning and extraction continues with the remaining files.
pub fn extract_used_keys(root: &Path, extensions: &[String], ignores: &[String]) -> ExtractResult {
    // Invalid patterns are rejected by Config::validate before we get here.
    let ignore_patterns: Vec<Pattern> =
        ignores.iter().filter_map(|p| Pattern::new(p).ok()).collect();

    let mut result = ExtractResult::default();

    for entry in WalkDir::new(root) {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                let path = e
                    .path()
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|| root.display().to_string());
                result.warnings.push(format!("Error reading {}: {}", path, e));
                continue;
            }
        };
        let path = entry.path();

        if ignore_patterns
            .iter()
            .any(|p| p.matches(&path.to_string_lossy()))
        {
            continue;
        }

        if !entry.file_type().is_file() || !is_source_file(path, extensions) {
            continue;
        }

        match fs::read_to_string(path) {
            Ok(content) => {
                result.files_scanned += 1;
                result
                    .keys
                    .extend(keys_in_source(&content).map(str::to_owned));
            }
            Err(e) => {
                result
                    .warnings
                    .push(format!("Error reading {}: {}", path.display(), e));
            }
        }
    }

    result
}

/// Iterate the keys referenced by `.tr(...)` calls in one file's text.
pub fn keys_in_source(content: &str) -> impl Iterator<Item = &str> + '_ {
    TR_CALL
        .captures_iter(content)
        .filter_map(|c| c.get(1))
        .map(|m| m.as_str())
}

fn is_source_file(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| extensions.iter().any(|allowed| allowed == ext))
}
