//! Input parsing for the spanlink CLI.
//!
//! The input is whitespace-separated unsigned integers: a header
//! `N M K` (vertex count, declared link count, target cluster count)
//! followed by up to `M` link records `A B W`. Input ending at a record
//! boundary before `M` records simply yields a shorter link list; a
//! record that starts but does not finish, or any non-numeric token, is
//! fatal. The asymmetry is inherited from the wire format and kept as is.

use std::io::{self, Read};

use thiserror::Error;

use spanlink_core::{Graph, GraphError};

/// Errors raised while parsing a network description.
#[derive(Debug, Error)]
pub enum InputError {
    /// Reading from the underlying stream failed.
    #[error("failed to read input: {source}")]
    Read {
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// The `N M K` header was missing or incomplete.
    #[error("input must start with vertex count, link count, and target cluster count")]
    MissingHeader,
    /// A token could not be parsed as an unsigned integer.
    #[error("token `{token}` is not an unsigned integer")]
    InvalidToken {
        /// The offending token, truncated for display.
        token: String,
    },
    /// The target cluster count falls outside `1..=N`.
    #[error("target cluster count {target} must be between 1 and {vertex_count}")]
    InvalidTarget {
        /// Requested cluster count.
        target: u64,
        /// Declared vertex count.
        vertex_count: u64,
    },
    /// A link record started but ended before its three fields.
    #[error("link record {index} is incomplete")]
    IncompleteRecord {
        /// Zero-based index of the truncated record.
        index: usize,
    },
    /// The record was well-formed but out of range for the network.
    #[error(transparent)]
    Graph(#[from] GraphError),
}

/// A parsed network plus the target cluster count to reduce it to.
#[derive(Debug)]
pub struct CostRequest {
    /// The constructed network.
    pub graph: Graph,
    /// Target cluster count, already validated against `1..=N`.
    pub target: usize,
}

/// Parses a network description from `reader`.
///
/// # Errors
/// Returns [`InputError`] when the header is incomplete, the target is out
/// of range, a record is malformed, or a record field is out of range for
/// the declared network.
pub fn parse_request(mut reader: impl Read) -> Result<CostRequest, InputError> {
    let mut text = String::new();
    reader
        .read_to_string(&mut text)
        .map_err(|source| InputError::Read { source })?;
    let mut tokens = text.split_ascii_whitespace();

    let vertex_count = header_field(tokens.next())?;
    let link_count = header_field(tokens.next())?;
    let target = header_field(tokens.next())?;

    if target == 0 || target > vertex_count {
        return Err(InputError::InvalidTarget {
            target,
            vertex_count,
        });
    }

    let declared = usize::try_from(link_count).unwrap_or(usize::MAX);
    let mut graph = Graph::with_edge_capacity(vertex_count, declared)?;
    for index in 0..declared {
        // End of input at a record boundary is not an error.
        let Some(first) = tokens.next() else { break };
        let a = parse_token(first)?;
        let b = record_field(tokens.next(), index)?;
        let weight = record_field(tokens.next(), index)?;
        graph.push_edge(a, b, weight)?;
    }

    Ok(CostRequest {
        graph,
        target: usize::try_from(target).unwrap_or(usize::MAX),
    })
}

fn header_field(token: Option<&str>) -> Result<u64, InputError> {
    token.map_or(Err(InputError::MissingHeader), parse_token)
}

fn record_field(token: Option<&str>, index: usize) -> Result<u64, InputError> {
    token.map_or(Err(InputError::IncompleteRecord { index }), parse_token)
}

fn parse_token(token: &str) -> Result<u64, InputError> {
    token.parse().map_err(|_| InputError::InvalidToken {
        token: token.chars().take(32).collect(),
    })
}
