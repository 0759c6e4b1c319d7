use clap::{Parser, Subcommand};

use crate::output::OutputFormat;

/// Simulate CPU scheduling over a set of execution times and report
/// per-task wait and turnaround statistics.
#[derive(Parser, Debug)]
#[command(name = "schedsim", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Output format for all subcommands.
    #[arg(long, value_enum, default_value = "human", global = true)]
    pub output: OutputFormat,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run First-Come-First-Served over the given execution times.
    Fcfs(FcfsArgs),

    /// Run round-robin with a fixed time quantum.
    RoundRobin(RoundRobinArgs),
}

#[derive(clap::Args, Debug)]
pub struct FcfsArgs {
    /// Execution time of each task, in arrival order.
    #[arg(required = true, value_name = "TIME")]
    pub times: Vec<u64>,
}

#[derive(clap::Args, Debug)]
pub struct RoundRobinArgs {
    /// Time quantum granted per turn (must be at least 1).
    #[arg(short, long, value_name = "UNITS")]
    pub quantum: u64,

    /// Execution time of each task, in arrival order.
    #[arg(required = true, value_name = "TIME")]
    pub times: Vec<u64>,
}
