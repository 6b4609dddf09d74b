//! Error types for the spanlink core library.
//!
//! Construction failures and cost-computation failures are deliberately
//! separate enums: a [`GraphError`] means the caller never had a valid
//! network to begin with, while a [`CostError`] is a legitimate outcome of
//! running the computation (for example a disconnected network that cannot
//! be reduced to the requested cluster count). Each variant carries a
//! stable machine-readable code for logging surfaces.

use thiserror::Error;

/// Error raised while constructing a [`crate::Graph`].
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum GraphError {
    /// The vertex count does not fit the 16-bit index representation.
    #[error("vertex count {got} exceeds the supported maximum {max}")]
    VertexCountTooLarge {
        /// Vertex count requested by the caller.
        got: u64,
        /// Largest representable vertex count.
        max: u64,
    },
    /// An edge referenced a vertex index outside `0..vertex_count`.
    #[error("edge endpoint {endpoint} is out of range for {vertex_count} vertices")]
    EndpointOutOfRange {
        /// The offending endpoint index.
        endpoint: u64,
        /// Number of vertices in the graph under construction.
        vertex_count: usize,
    },
    /// An edge weight does not fit the 16-bit weight representation.
    #[error("edge weight {weight} exceeds the supported maximum {max}")]
    WeightTooLarge {
        /// The offending weight.
        weight: u64,
        /// Largest representable weight.
        max: u64,
    },
    /// The edge storage could not be reserved.
    #[error("failed to reserve storage for {edges} edges")]
    Allocation {
        /// Declared edge count that could not be accommodated.
        edges: usize,
    },
}

impl GraphError {
    /// Returns a stable, machine-readable error code for the variant.
    #[must_use]
    pub const fn code(&self) -> GraphErrorCode {
        match self {
            Self::VertexCountTooLarge { .. } => GraphErrorCode::VertexCountTooLarge,
            Self::EndpointOutOfRange { .. } => GraphErrorCode::EndpointOutOfRange,
            Self::WeightTooLarge { .. } => GraphErrorCode::WeightTooLarge,
            Self::Allocation { .. } => GraphErrorCode::Allocation,
        }
    }
}

/// Machine-readable error codes for [`GraphError`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum GraphErrorCode {
    /// The vertex count does not fit the index representation.
    VertexCountTooLarge,
    /// An edge referenced a vertex index outside the graph.
    EndpointOutOfRange,
    /// An edge weight does not fit the weight representation.
    WeightTooLarge,
    /// The edge storage could not be reserved.
    Allocation,
}

impl GraphErrorCode {
    /// Returns the symbolic identifier for logging surfaces.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::VertexCountTooLarge => "GRAPH_VERTEX_COUNT_TOO_LARGE",
            Self::EndpointOutOfRange => "GRAPH_ENDPOINT_OUT_OF_RANGE",
            Self::WeightTooLarge => "GRAPH_WEIGHT_TOO_LARGE",
            Self::Allocation => "GRAPH_ALLOCATION",
        }
    }
}

/// Error raised while computing the connection cost.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum CostError {
    /// The target cluster count can never be reached from the initial
    /// partition (zero, or more clusters than there are vertices).
    #[error("target cluster count {target} is unreachable from {clusters} initial clusters")]
    TargetUnreachable {
        /// Requested cluster count.
        target: usize,
        /// Cluster count at the start of the computation.
        clusters: usize,
    },
    /// The candidate links ran out before the cluster count dropped to the
    /// target. Expected for disconnected networks, not a logic error.
    #[error("candidate links exhausted with {clusters} clusters remaining (target {target})")]
    EdgesExhausted {
        /// Requested cluster count.
        target: usize,
        /// Cluster count when the scan ran out of edges.
        clusters: usize,
    },
    /// A working structure for the computation could not be allocated.
    #[error("failed to allocate {resource}")]
    Allocation {
        /// Name of the structure that could not be obtained.
        resource: &'static str,
    },
}

impl CostError {
    /// Returns a stable, machine-readable error code for the variant.
    #[must_use]
    pub const fn code(&self) -> CostErrorCode {
        match self {
            Self::TargetUnreachable { .. } => CostErrorCode::TargetUnreachable,
            Self::EdgesExhausted { .. } => CostErrorCode::EdgesExhausted,
            Self::Allocation { .. } => CostErrorCode::Allocation,
        }
    }
}

/// Machine-readable error codes for [`CostError`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum CostErrorCode {
    /// The target cluster count can never be reached.
    TargetUnreachable,
    /// The candidate links ran out before reaching the target.
    EdgesExhausted,
    /// A working structure could not be allocated.
    Allocation,
}

impl CostErrorCode {
    /// Returns the symbolic identifier for logging surfaces.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::TargetUnreachable => "COST_TARGET_UNREACHABLE",
            Self::EdgesExhausted => "COST_EDGES_EXHAUSTED",
            Self::Allocation => "COST_ALLOCATION",
        }
    }
}

/// Convenient alias for results returned by the cost computation.
pub type Result<T> = core::result::Result<T, CostError>;
