use anyhow::{Result, bail};

use super::{
    args::{Arguments, Command},
    commands::{check::check, init::init},
    exit_status::ExitStatus,
    report,
};

/// Dispatch to the command handler and report its outcome.
///
/// # Returns
/// - `Ok(ExitStatus)` once the command ran to completion
/// - `Err` if the command could not run (invalid config, bad arguments)
pub fn run(Arguments { command }: Arguments, verbose: bool) -> Result<ExitStatus> {
    match command {
        Some(Command::Check(cmd)) => {
            let result = check(cmd)?;
            report::print(&result, verbose);
            Ok(result.exit_status())
        }
        Some(Command::Init) => init(),
        None => bail!("No command provided. Use --help to see available commands."),
    }
}
