use anyhow::Result;

mod args;
mod commands;
mod exit_status;

pub use args::{Arguments, CheckCommand, Command};
pub use exit_status::ExitStatus;

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    match args.command {
        Some(Command::Check(cmd)) => commands::check::check(cmd),
        Some(Command::Init) => commands::init::init(),
        // No subcommand runs the default check.
        None => commands::check::check(CheckCommand::default()),
    }
}
