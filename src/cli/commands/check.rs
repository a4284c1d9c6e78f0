//! The `check` command: extract the used-key set once, then diff every
//! language file against it.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Result, bail};

use super::super::args::CheckCommand;
use super::super::exit_status::ExitStatus;
use crate::config::{CONFIG_FILE_NAME, Config, load_config};
use crate::diff::KeyDiff;
use crate::extract::extract_used_keys;
use crate::locales::{list_locale_files, load_locale_keys};
use crate::report;

pub fn check(cmd: CheckCommand) -> Result<ExitStatus> {
    let args = &cmd.args;
    let config = load_config(Path::new("."))?.config;

    let source_root = resolve_root(&args.source_root, &config.source_root);
    let lang_root = resolve_root(&args.lang_root, &config.lang_root);

    if !source_root.is_dir() {
        bail!(
            "Source directory '{}' does not exist.\n\
             Hint: check the 'sourceRoot' setting in {} or pass --source-root.",
            source_root.display(),
            CONFIG_FILE_NAME
        );
    }

    let lang_files = list_locale_files(&lang_root)?;

    let mut out = io::stdout().lock();
    run_check(&config, &source_root, &lang_files, args.verbose, &mut out)
}

fn resolve_root(flag: &Option<PathBuf>, configured: &str) -> PathBuf {
    flag.clone().unwrap_or_else(|| PathBuf::from(configured))
}

fn run_check<W: Write>(
    config: &Config,
    source_root: &Path,
    lang_files: &[PathBuf],
    verbose: bool,
    writer: &mut W,
) -> Result<ExitStatus> {
    let extraction = extract_used_keys(source_root, &config.source_extensions, &config.ignores);

    for warning in &extraction.warnings {
        report::print_read_warning_to(warning, writer);
    }
    report::print_header_to(extraction.keys.len(), source_root, writer);
    if verbose {
        report::print_scan_detail_to(extraction.files_scanned, writer);
    }

    let mut missing_total = 0;
    let mut orphan_total = 0;

    for path in lang_files {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        report::print_checking_to(&name, writer);

        match load_locale_keys(path) {
            Ok(defined) => {
                let diff = KeyDiff::compute(&extraction.keys, &defined);
                missing_total += diff.missing.len();
                orphan_total += diff.extra.len();
                report::print_diff_to(&name, &diff, writer);
            }
            Err(err) => {
                report::print_file_error_to(&name, &err, writer);
            }
        }
    }

    report::print_summary_to(missing_total, orphan_total, writer);

    Ok(ExitStatus::Success)
}
