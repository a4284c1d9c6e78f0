//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `check`: Cross-check used translation keys against language files
//!   (also the default when no subcommand is given)
//! - `init`: Initialize a trlint configuration file

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Arguments for the check command.
#[derive(Debug, Clone, Default, Args)]
pub struct CheckArgs {
    /// Source code root directory (overrides config file)
    #[arg(long, env = "TRLINT_SOURCE_ROOT")]
    pub source_root: Option<PathBuf>,

    /// Language files directory (overrides config file)
    #[arg(long, env = "TRLINT_LANG_ROOT")]
    pub lang_root: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Default, Args)]
pub struct CheckCommand {
    #[command(flatten)]
    pub args: CheckArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Cross-check .tr() keys used in source against JSON language files
    Check(CheckCommand),
    /// Initialize a new .trlintrc.json configuration file
    Init,
}
