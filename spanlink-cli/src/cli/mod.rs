//! Command-line interface orchestration for spanlink.
//!
//! Offers a single `cost` command that reads a network description from
//! standard input (or a file), runs the cost computation, and prints the
//! minimum total connection cost.

mod commands;
mod input;

pub use commands::{
    Cli, CliError, Command, CostCommand, CostSummary, cost_from_reader, render_summary, run_cli,
};
pub use input::{CostRequest, InputError, parse_request};
