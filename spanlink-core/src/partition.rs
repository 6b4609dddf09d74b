//! Dense disjoint-set structure tracking cluster membership.
//!
//! The partition is stored as a row-major N×N boolean incidence table plus
//! a per-vertex cluster label. A cluster identifier is the index of its
//! canonical representative vertex, and merging always folds the
//! higher-numbered cluster into the lower-numbered one so identifiers stay
//! canonical. Lookup is O(1) and each merge scans one full membership row,
//! trading the O(log N) bound of a parent-pointer union-find for direct
//! correctness reasoning over the table.

use crate::error::CostError;

pub(crate) struct ClusterTable {
    vertex_count: usize,
    /// Cluster identifier of each vertex.
    cluster_of: Vec<u16>,
    /// Row-major incidence: `membership[c * vertex_count + v]` holds when
    /// vertex `v` belongs to cluster `c`.
    membership: Vec<bool>,
}

impl ClusterTable {
    /// Builds the initial partition of `vertex_count` singleton clusters.
    ///
    /// # Errors
    /// Returns [`CostError::Allocation`] when either the label map or the
    /// incidence table cannot be reserved; whatever was already reserved is
    /// dropped on the way out.
    pub(crate) fn try_new(vertex_count: usize) -> Result<Self, CostError> {
        let mut cluster_of = Vec::new();
        cluster_of
            .try_reserve_exact(vertex_count)
            .map_err(|_| CostError::Allocation {
                resource: "vertex cluster map",
            })?;

        let cells = vertex_count
            .checked_mul(vertex_count)
            .ok_or(CostError::Allocation {
                resource: "cluster membership table",
            })?;
        let mut membership = Vec::new();
        membership
            .try_reserve_exact(cells)
            .map_err(|_| CostError::Allocation {
                resource: "cluster membership table",
            })?;
        membership.resize(cells, false);

        for vertex in 0..vertex_count {
            // vertex_count <= u16::MAX is enforced at graph construction
            cluster_of.push(vertex as u16);
            membership[vertex * vertex_count + vertex] = true;
        }

        Ok(Self {
            vertex_count,
            cluster_of,
            membership,
        })
    }

    /// Returns the cluster identifier of `vertex`.
    pub(crate) fn find(&self, vertex: u16) -> u16 {
        self.cluster_of[usize::from(vertex)]
    }

    /// Folds the higher-numbered of two distinct clusters into the
    /// lower-numbered one, relabelling every absorbed vertex.
    pub(crate) fn merge(&mut self, a: u16, b: u16) {
        debug_assert_ne!(a, b, "merge requires two distinct clusters");
        let (low, high) = if a < b { (a, b) } else { (b, a) };

        let low_base = usize::from(low) * self.vertex_count;
        let high_base = usize::from(high) * self.vertex_count;
        for vertex in 0..self.vertex_count {
            if self.membership[high_base + vertex] {
                self.membership[low_base + vertex] = true;
                self.membership[high_base + vertex] = false;
                self.cluster_of[vertex] = low;
            }
        }
    }

    /// Panics when a vertex is missing from its labelled cluster row or
    /// appears in more than one row. Test-only consistency probe.
    #[cfg(test)]
    pub(crate) fn assert_consistent(&self) {
        for vertex in 0..self.vertex_count {
            let cluster = usize::from(self.cluster_of[vertex]);
            assert!(
                self.membership[cluster * self.vertex_count + vertex],
                "vertex {vertex} missing from cluster {cluster}"
            );
            let rows = (0..self.vertex_count)
                .filter(|row| self.membership[row * self.vertex_count + vertex])
                .count();
            assert_eq!(rows, 1, "vertex {vertex} appears in {rows} cluster rows");
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[test]
    fn starts_with_singleton_clusters() {
        let table = ClusterTable::try_new(4).expect("allocation succeeds");
        for vertex in 0..4u16 {
            assert_eq!(table.find(vertex), vertex);
        }
        table.assert_consistent();
    }

    #[test]
    fn merge_folds_into_lower_identifier() {
        let mut table = ClusterTable::try_new(4).expect("allocation succeeds");
        table.merge(2, 1);
        assert_eq!(table.find(1), 1);
        assert_eq!(table.find(2), 1);
        table.assert_consistent();

        table.merge(table.find(3), table.find(1));
        assert_eq!(table.find(3), 1);
        table.assert_consistent();
    }

    #[test]
    fn merge_relabels_every_absorbed_vertex() {
        let mut table = ClusterTable::try_new(5).expect("allocation succeeds");
        table.merge(3, 4);
        table.merge(0, 3);
        for vertex in [0u16, 3, 4] {
            assert_eq!(table.find(vertex), 0);
        }
        for vertex in [1u16, 2] {
            assert_eq!(table.find(vertex), vertex);
        }
        table.assert_consistent();
    }

    #[rstest]
    #[case(0)]
    #[case(1)]
    fn degenerate_sizes_are_consistent(#[case] vertex_count: usize) {
        let table = ClusterTable::try_new(vertex_count).expect("allocation succeeds");
        table.assert_consistent();
    }

    #[test]
    fn find_is_stable_between_merges() {
        let mut table = ClusterTable::try_new(3).expect("allocation succeeds");
        table.merge(0, 2);
        let first = table.find(2);
        assert_eq!(table.find(2), first);
        assert_eq!(table.find(2), first);
    }
}
