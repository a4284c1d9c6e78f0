//! Trlint - translation key checker for `.tr()` lookups
//!
//! Trlint is a CLI tool and library for cross-checking translation keys in a
//! source tree against JSON language files. It extracts every key passed to a
//! `.tr("...")` call and reports, per language file, the keys that are used in
//! code but undefined (missing) and the keys that are defined but never used
//! (orphans).
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (argument parsing, commands)
//! - `config`: Configuration file loading and parsing
//! - `diff`: Key-set comparison between code and language files
//! - `extract`: Translation-key extraction from source files
//! - `locales`: JSON language file discovery and parsing
//! - `report`: Human-readable report formatting

pub mod cli;
pub mod config;
pub mod diff;
pub mod extract;
pub mod locales;
pub mod report;
