//! Minimum connection cost via an early-stopping Kruskal scan.
//!
//! Candidate links are ordered by ascending weight and scanned once. A
//! link whose endpoints already share a cluster is skipped; any other link
//! merges two clusters and its weight joins the running total. The scan
//! returns the moment the cluster count drops to the target, so links
//! beyond that point are never examined.

#[cfg(test)]
mod property;

use tracing::{debug, field, instrument};

use crate::{
    error::CostError,
    graph::{Edge, Graph},
    partition::ClusterTable,
};

/// Computes the minimum total cost of reducing `graph` to exactly `target`
/// clusters.
///
/// The graph itself is not mutated; the scan works on its own
/// weight-ordered copy of the links, so repeat calls with the same inputs
/// return the same cost.
///
/// # Errors
///
/// Returns an error when:
/// - `target` is zero or exceeds the vertex count (the initial partition
///   can never grow), or
/// - the links run out before the cluster count reaches `target`, or
/// - a working structure cannot be allocated.
///
/// # Examples
/// ```
/// use spanlink_core::{Graph, connection_cost};
///
/// let mut graph = Graph::with_edge_capacity(4, 3)?;
/// graph.push_edge(0, 1, 1)?;
/// graph.push_edge(1, 2, 2)?;
/// graph.push_edge(2, 3, 3)?;
/// assert_eq!(connection_cost(&graph, 2)?, 3);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[instrument(
    name = "cost.connection",
    err,
    skip(graph),
    fields(vertices = graph.vertex_count(), links = graph.edge_count(), target, merges = field::Empty),
)]
pub fn connection_cost(graph: &Graph, target: usize) -> Result<u64, CostError> {
    let vertex_count = graph.vertex_count();
    let mut remaining = vertex_count;
    if target == 0 || remaining < target {
        return Err(CostError::TargetUnreachable {
            target,
            clusters: remaining,
        });
    }
    if remaining == target {
        return Ok(0);
    }

    let edges = sorted_edges(graph)?;
    let mut clusters = ClusterTable::try_new(vertex_count)?;
    let mut cost = 0u64;

    for edge in &edges {
        let left = clusters.find(edge.a());
        let right = clusters.find(edge.b());
        if left == right {
            // same cluster already; the link would only close a cycle
            continue;
        }
        clusters.merge(left, right);
        cost += u64::from(edge.weight());
        remaining -= 1;
        if remaining == target {
            let merges = vertex_count - remaining;
            tracing::Span::current().record("merges", field::display(merges));
            debug!(cost, merges, "target cluster count reached");
            return Ok(cost);
        }
    }

    Err(CostError::EdgesExhausted {
        target,
        clusters: remaining,
    })
}

/// Copies the candidate links into a weight-ordered scratch buffer.
///
/// Equal weights keep no particular order; the accumulated cost is
/// independent of the tie-break.
fn sorted_edges(graph: &Graph) -> Result<Vec<Edge>, CostError> {
    let mut edges = Vec::new();
    edges
        .try_reserve_exact(graph.edge_count())
        .map_err(|_| CostError::Allocation {
            resource: "link order buffer",
        })?;
    edges.extend_from_slice(graph.edges());
    edges.sort_unstable_by_key(|edge| edge.weight());
    Ok(edges)
}
