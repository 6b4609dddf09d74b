//! Command implementations and argument parsing for the spanlink CLI.

use std::fs::File;
use std::io::{self, BufReader, Read, Write};
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

use spanlink_core::{CostError, connection_cost};

use super::input::{CostRequest, InputError, parse_request};

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "spanlink",
    about = "Compute the minimum connection cost for a K-cluster network."
)]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Compute the minimum total connection cost for a network description.
    Cost(CostCommand),
}

/// Options accepted by the `cost` command.
#[derive(Debug, Args, Clone, Default)]
pub struct CostCommand {
    /// Read the network description from a file instead of standard input.
    #[arg(long)]
    pub input: Option<PathBuf>,
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// File I/O failed while opening an input source.
    #[error("failed to open `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// The network description could not be parsed.
    #[error(transparent)]
    Input(#[from] InputError),
    /// The cost computation failed.
    #[error(transparent)]
    Cost(#[from] CostError),
}

impl CliError {
    /// Returns the stable error code of the underlying failure, when the
    /// failure originated in the core library.
    #[must_use]
    pub fn core_code(&self) -> Option<&'static str> {
        match self {
            Self::Cost(err) => Some(err.code().as_str()),
            Self::Input(InputError::Graph(err)) => Some(err.code().as_str()),
            _ => None,
        }
    }
}

/// Summarises the outcome of a `cost` invocation.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct CostSummary {
    /// Minimum total connection cost.
    pub cost: u64,
    /// Number of computers in the network.
    pub vertex_count: usize,
    /// Number of candidate links actually read.
    pub link_count: usize,
    /// Target cluster count the network was reduced to.
    pub target: usize,
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when parsing or execution fails.
#[instrument(name = "cli.run", err, skip(cli), fields(command = field::Empty))]
pub fn run_cli(cli: Cli) -> Result<CostSummary, CliError> {
    match cli.command {
        Command::Cost(cost) => {
            Span::current().record("command", field::display("cost"));
            run_cost(&cost)
        }
    }
}

#[instrument(name = "cli.cost", err, skip(command), fields(source = field::Empty))]
pub(super) fn run_cost(command: &CostCommand) -> Result<CostSummary, CliError> {
    let span = Span::current();
    let request = match command.input.as_deref() {
        Some(path) => {
            span.record("source", field::display(path.display()));
            parse_request(open_input(path)?)?
        }
        None => {
            span.record("source", field::display("<stdin>"));
            parse_request(io::stdin().lock())?
        }
    };
    execute_request(&request)
}

fn execute_request(request: &CostRequest) -> Result<CostSummary, CliError> {
    let cost = connection_cost(&request.graph, request.target)?;
    let summary = CostSummary {
        cost,
        vertex_count: request.graph.vertex_count(),
        link_count: request.graph.edge_count(),
        target: request.target,
    };
    info!(
        cost = summary.cost,
        vertices = summary.vertex_count,
        links = summary.link_count,
        target = summary.target,
        "cost computation completed"
    );
    Ok(summary)
}

#[instrument(name = "cli.open_input", err, fields(path = field::Empty))]
pub(super) fn open_input(path: &Path) -> Result<BufReader<File>, CliError> {
    Span::current().record("path", field::display(path.display()));
    let file = File::open(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(BufReader::new(file))
}

/// Parses a network description from `reader` and computes its cost
/// without touching the process environment. Used by tests and doctests.
///
/// # Errors
/// Returns [`CliError`] when parsing or the computation fails.
///
/// # Examples
/// ```
/// use std::io::Cursor;
/// use spanlink_cli::cli::cost_from_reader;
///
/// let summary = cost_from_reader(Cursor::new("4 3 1\n0 1 1\n1 2 2\n2 3 3\n"))?;
/// assert_eq!(summary.cost, 6);
/// # Ok::<(), spanlink_cli::cli::CliError>(())
/// ```
pub fn cost_from_reader(reader: impl Read) -> Result<CostSummary, CliError> {
    let request = parse_request(reader)?;
    execute_request(&request)
}

/// Renders `summary` to `writer`: the numeric cost followed by a newline.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
pub fn render_summary(summary: &CostSummary, mut writer: impl Write) -> io::Result<()> {
    writeln!(writer, "{}", summary.cost)
}
