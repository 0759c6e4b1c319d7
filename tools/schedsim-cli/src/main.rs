pub mod cli;
pub mod error;
pub mod output;

use std::process::ExitCode;

use clap::Parser;

use crate::cli::{Cli, Command};
use crate::error::CliError;
use schedsim::Report;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Fcfs(args) => run_fcfs(&args.times),
        Command::RoundRobin(args) => run_round_robin(&args.times, args.quantum),
    };

    let result = result.and_then(|report| {
        output::emit(cli.output, &report)?;
        Ok(())
    });

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let code = e.exit_code();
            output::emit_error(cli.output, code, &e.to_string());
            ExitCode::from(code)
        }
    }
}

fn run_fcfs(times: &[u64]) -> Result<Report, CliError> {
    let mut tasks = schedsim::initialize(times);
    schedsim::run_fcfs(&mut tasks)?;
    Ok(Report::new(&tasks))
}

fn run_round_robin(times: &[u64], quantum: u64) -> Result<Report, CliError> {
    let mut tasks = schedsim::initialize(times);
    schedsim::run_round_robin(&mut tasks, quantum)?;
    Ok(Report::new(&tasks))
}
