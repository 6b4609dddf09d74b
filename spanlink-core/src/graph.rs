//! Weighted undirected network of computers and candidate links.
//!
//! Vertices are implicit indices `0..vertex_count`; only the edges carry
//! data. Endpoints and weights are bounded to 16 bits, matching the wire
//! format of the input records, and every bound is enforced at
//! construction time so the cost computation never needs to re-validate.

use crate::error::GraphError;

/// Largest representable vertex count and edge weight.
const LIMIT: u64 = u16::MAX as u64;

/// A candidate link between two computers with its connection cost.
///
/// Self-loops are representable; the Kruskal scan skips them naturally
/// because both endpoints always resolve to the same cluster.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Edge {
    a: u16,
    b: u16,
    weight: u16,
}

impl Edge {
    /// Returns the first endpoint index.
    #[must_use]
    #[rustfmt::skip]
    pub const fn a(self) -> u16 { self.a }

    /// Returns the second endpoint index.
    #[must_use]
    #[rustfmt::skip]
    pub const fn b(self) -> u16 { self.b }

    /// Returns the connection cost of the link.
    #[must_use]
    #[rustfmt::skip]
    pub const fn weight(self) -> u16 { self.weight }
}

/// A network of `vertex_count` computers and its candidate links.
///
/// # Examples
/// ```
/// use spanlink_core::Graph;
///
/// let mut graph = Graph::with_edge_capacity(3, 2)?;
/// graph.push_edge(0, 1, 4)?;
/// graph.push_edge(1, 2, 7)?;
/// assert_eq!(graph.edge_count(), 2);
/// # Ok::<(), spanlink_core::GraphError>(())
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Graph {
    vertex_count: usize,
    edges: Vec<Edge>,
}

impl Graph {
    /// Creates an edgeless network with `vertex_count` computers.
    ///
    /// # Errors
    /// Returns [`GraphError::VertexCountTooLarge`] when the count does not
    /// fit the 16-bit index representation.
    pub fn new(vertex_count: u64) -> Result<Self, GraphError> {
        Self::with_edge_capacity(vertex_count, 0)
    }

    /// Creates an edgeless network with storage reserved for the declared
    /// edge count. The declared count is a capacity hint only; the final
    /// graph may hold fewer edges.
    ///
    /// # Errors
    /// Returns [`GraphError::VertexCountTooLarge`] when the vertex count is
    /// out of range and [`GraphError::Allocation`] when the edge storage
    /// cannot be reserved.
    pub fn with_edge_capacity(vertex_count: u64, edge_count: usize) -> Result<Self, GraphError> {
        if vertex_count > LIMIT {
            return Err(GraphError::VertexCountTooLarge {
                got: vertex_count,
                max: LIMIT,
            });
        }
        let mut edges = Vec::new();
        edges
            .try_reserve_exact(edge_count)
            .map_err(|_| GraphError::Allocation { edges: edge_count })?;
        Ok(Self {
            vertex_count: usize::try_from(vertex_count).unwrap_or(usize::MAX),
            edges,
        })
    }

    /// Appends a candidate link from a raw input record.
    ///
    /// # Errors
    /// Returns [`GraphError::EndpointOutOfRange`] when either endpoint is
    /// not a valid vertex index and [`GraphError::WeightTooLarge`] when the
    /// weight does not fit 16 bits.
    pub fn push_edge(&mut self, a: u64, b: u64, weight: u64) -> Result<(), GraphError> {
        let a = self.check_endpoint(a)?;
        let b = self.check_endpoint(b)?;
        let weight = u16::try_from(weight).map_err(|_| GraphError::WeightTooLarge {
            weight,
            max: LIMIT,
        })?;
        self.edges.push(Edge { a, b, weight });
        Ok(())
    }

    fn check_endpoint(&self, endpoint: u64) -> Result<u16, GraphError> {
        u16::try_from(endpoint)
            .ok()
            .filter(|&index| usize::from(index) < self.vertex_count)
            .ok_or(GraphError::EndpointOutOfRange {
                endpoint,
                vertex_count: self.vertex_count,
            })
    }

    /// Returns the number of computers in the network.
    #[must_use]
    #[rustfmt::skip]
    pub const fn vertex_count(&self) -> usize { self.vertex_count }

    /// Returns the number of candidate links.
    #[must_use]
    #[rustfmt::skip]
    pub fn edge_count(&self) -> usize { self.edges.len() }

    /// Returns the candidate links in insertion order.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[Edge] { &self.edges }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[test]
    fn rejects_vertex_count_over_limit() {
        let err = Graph::new(u64::from(u16::MAX) + 1).expect_err("count must be rejected");
        assert!(matches!(
            err,
            GraphError::VertexCountTooLarge { got, max } if got == 65_536 && max == 65_535
        ));
    }

    #[test]
    fn accepts_vertex_count_at_limit() {
        let graph = Graph::new(u64::from(u16::MAX)).expect("limit count must be accepted");
        assert_eq!(graph.vertex_count(), 65_535);
        assert_eq!(graph.edge_count(), 0);
    }

    #[rstest]
    #[case(3, 0, 1)]
    #[case(3, 1, 0)]
    #[case(1, 0, 0)]
    fn accepts_in_range_edges(#[case] vertices: u64, #[case] a: u64, #[case] b: u64) {
        let mut graph = Graph::new(vertices).expect("vertex count is valid");
        graph.push_edge(a, b, 9).expect("edge is in range");
        assert_eq!(graph.edges()[0].weight(), 9);
    }

    #[rstest]
    #[case(3, 3)]
    #[case(3, u64::from(u16::MAX) + 7)]
    fn rejects_out_of_range_endpoint(#[case] vertices: u64, #[case] endpoint: u64) {
        let mut graph = Graph::new(vertices).expect("vertex count is valid");
        let err = graph
            .push_edge(0, endpoint, 1)
            .expect_err("endpoint must be rejected");
        assert!(matches!(err, GraphError::EndpointOutOfRange { .. }));
    }

    #[test]
    fn rejects_oversized_weight() {
        let mut graph = Graph::new(2).expect("vertex count is valid");
        let err = graph
            .push_edge(0, 1, u64::from(u16::MAX) + 1)
            .expect_err("weight must be rejected");
        assert!(matches!(err, GraphError::WeightTooLarge { weight: 65_536, .. }));
    }

    #[test]
    fn zero_vertex_graph_rejects_every_endpoint() {
        let mut graph = Graph::new(0).expect("empty network is constructible");
        let err = graph.push_edge(0, 0, 0).expect_err("no endpoint is valid");
        assert!(matches!(err, GraphError::EndpointOutOfRange { .. }));
    }
}
