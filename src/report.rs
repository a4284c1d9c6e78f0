//! Report formatting and printing utilities.
//!
//! All printing goes through `Write`-generic `*_to` functions so output can
//! be captured in tests; the check command passes a locked stdout handle.

use std::io::Write;
use std::path::Path;

use colored::Colorize;

use crate::diff::KeyDiff;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Warning mark for consistent output formatting.
pub const WARNING_MARK: &str = "\u{26a0}"; // ⚠

/// Print a per-file problem that was skipped during extraction.
pub fn print_read_warning_to<W: Write>(message: &str, writer: &mut W) {
    let _ = writeln!(writer, "{}", message);
}

/// Print the header line with the number of extracted keys.
pub fn print_header_to<W: Write>(key_count: usize, source_root: &Path, writer: &mut W) {
    let _ = writeln!(
        writer,
        "Found {} unique translation {} in {}",
        key_count,
        if key_count == 1 { "key" } else { "keys" },
        source_root.display()
    );
}

/// Print the scanned-file count (verbose mode only).
pub fn print_scan_detail_to<W: Write>(files_scanned: usize, writer: &mut W) {
    let _ = writeln!(
        writer,
        "Scanned {} source {}",
        files_scanned,
        if files_scanned == 1 { "file" } else { "files" }
    );
}

/// Print the checking header for one language file.
pub fn print_checking_to<W: Write>(file_name: &str, writer: &mut W) {
    let _ = writeln!(writer, "\nChecking: {}", file_name);
}

/// Print the missing/orphan findings for one language file.
pub fn print_diff_to<W: Write>(file_name: &str, diff: &KeyDiff, writer: &mut W) {
    if diff.missing.is_empty() {
        let _ = writeln!(
            writer,
            "  {} {}",
            SUCCESS_MARK.green(),
            "no missing keys".green()
        );
    } else {
        let _ = writeln!(
            writer,
            "  {} {} (used in code but not in {}):",
            FAILURE_MARK.red(),
            "missing keys".bold().red(),
            file_name
        );
        for key in &diff.missing {
            let _ = writeln!(writer, "    - {}", key);
        }
    }

    if diff.extra.is_empty() {
        let _ = writeln!(
            writer,
            "  {} {}",
            SUCCESS_MARK.green(),
            "no orphan keys".green()
        );
    } else {
        let _ = writeln!(
            writer,
            "  {} {} (defined in {} but never used):",
            WARNING_MARK.yellow(),
            "orphan keys".bold().yellow(),
            file_name
        );
        for key in &diff.extra {
            let _ = writeln!(writer, "    - {}", key);
        }
    }
}

/// Print the error line for a language file that could not be checked.
pub fn print_file_error_to<W: Write>(file_name: &str, err: &anyhow::Error, writer: &mut W) {
    let _ = writeln!(
        writer,
        "  {} {}",
        FAILURE_MARK.red(),
        format!("Error checking {}: {:#}", file_name, err).red()
    );
}

/// Print the end-of-run summary when any problems were found.
pub fn print_summary_to<W: Write>(missing_total: usize, orphan_total: usize, writer: &mut W) {
    let total = missing_total + orphan_total;
    if total == 0 {
        return;
    }

    let _ = writeln!(
        writer,
        "\n{} {} problems ({} {}, {} {})",
        FAILURE_MARK.red(),
        total,
        missing_total,
        if missing_total == 1 {
            "missing key"
        } else {
            "missing keys"
        }
        .red(),
        orphan_total,
        if orphan_total == 1 { "orphan" } else { "orphans" }.yellow()
    );
}
