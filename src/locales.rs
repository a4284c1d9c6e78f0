//! JSON language file discovery and parsing.
//!
//! A language file is a single flat JSON object mapping translation keys to
//! localized values. Only key presence matters here; values are never
//! inspected.

use std::{
    collections::HashSet,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use serde_json::Value;

use crate::config::CONFIG_FILE_NAME;

/// List the language files directly inside `dir`, sorted by file name.
///
/// Only direct entries ending in `.json` are considered; subdirectories are
/// not descended into. A missing or non-directory path is a fatal error.
pub fn list_locale_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.exists() {
        bail!(
            "Language directory '{}' does not exist.\n\
             Hint: check the 'langRoot' setting in {}.",
            dir.display(),
            CONFIG_FILE_NAME
        );
    }

    if !dir.is_dir() {
        bail!("'{}' is not a directory.", dir.display());
    }

    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();

        if path.is_file() && path.extension().and_then(|e| e.to_str()) == Some("json") {
            files.push(path);
        }
    }

    // File-name order keeps the report stable across runs.
    files.sort_by_key(|p| p.file_name().map(|n| n.to_os_string()));
    Ok(files)
}

/// Parse one language file and return its top-level key set.
pub fn load_locale_keys(path: &Path) -> Result<HashSet<String>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read language file: {:?}", path))?;

    let json: Value = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse language file: {:?}", path))?;

    let Some(object) = json.as_object() else {
        bail!("Expected a top-level JSON object in {:?}", path);
    };

    Ok(object.keys().cloned().collect())
}
