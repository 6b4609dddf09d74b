//! Property-based tests for the connection-cost computation.
//!
//! Fixtures are generated from a proptest-supplied seed through
//! [`SmallRng`] so each case is reproducible from its seed alone. The
//! oracle re-runs a textbook parent-pointer Kruskal to cross-check the
//! dense-table implementation.

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::{CostError, Graph, connection_cost};

const MAX_VERTICES: u64 = 20;

struct Fixture {
    graph: Graph,
    vertex_count: usize,
}

fn random_fixture(seed: u64) -> Fixture {
    let mut rng = SmallRng::seed_from_u64(seed);
    let vertex_count = rng.gen_range(1..=MAX_VERTICES);
    let edge_probability = rng.gen_range(0.0..=0.6);

    let mut graph = Graph::new(vertex_count).expect("vertex count is in range");
    for a in 0..vertex_count {
        for b in (a + 1)..vertex_count {
            if rng.gen_bool(edge_probability) {
                let weight = u64::from(rng.gen_range(0..=100u16));
                graph.push_edge(a, b, weight).expect("endpoints are in range");
            }
        }
    }

    Fixture {
        graph,
        vertex_count: vertex_count as usize,
    }
}

/// Straightforward Kruskal over a parent-pointer union-find, used as an
/// independent oracle. Returns the component count and total forest cost.
fn oracle_forest(graph: &Graph) -> (usize, u64) {
    let vertex_count = graph.vertex_count();
    let mut parent: Vec<usize> = (0..vertex_count).collect();

    fn find(parent: &mut [usize], node: usize) -> usize {
        let mut current = node;
        while parent[current] != current {
            let grandparent = parent[parent[current]];
            parent[current] = grandparent;
            current = parent[current];
        }
        current
    }

    let mut edges: Vec<_> = graph.edges().to_vec();
    edges.sort_unstable_by_key(|edge| edge.weight());

    let mut components = vertex_count;
    let mut cost = 0u64;
    for edge in &edges {
        let left = find(&mut parent, usize::from(edge.a()));
        let right = find(&mut parent, usize::from(edge.b()));
        if left != right {
            parent[right] = left;
            components -= 1;
            cost += u64::from(edge.weight());
        }
    }
    (components, cost)
}

proptest! {
    /// Asking for as many clusters as there are vertices never merges.
    #[test]
    fn cost_at_vertex_count_is_zero(seed in any::<u64>()) {
        let fixture = random_fixture(seed);
        prop_assert_eq!(
            connection_cost(&fixture.graph, fixture.vertex_count),
            Ok(0)
        );
    }

    /// Allowing one more merge can only keep or grow the total cost, and a
    /// reachable target stays reachable when the target is relaxed.
    #[test]
    fn cost_is_monotone_in_the_target(seed in any::<u64>()) {
        let fixture = random_fixture(seed);
        for target in 1..fixture.vertex_count {
            let tighter = connection_cost(&fixture.graph, target);
            let looser = connection_cost(&fixture.graph, target + 1);
            if let Ok(cost) = tighter {
                let relaxed = looser.expect("relaxing a reachable target stays reachable");
                prop_assert!(relaxed <= cost);
            }
        }
    }

    /// The scan works on its own ordered copy, so repeat calls agree.
    #[test]
    fn repeat_calls_agree(seed in any::<u64>(), target in 1..=MAX_VERTICES) {
        let fixture = random_fixture(seed);
        let target = target as usize;
        let first = connection_cost(&fixture.graph, target);
        let second = connection_cost(&fixture.graph, target);
        prop_assert_eq!(first, second);
    }

    /// At the natural component count the cost matches a textbook Kruskal
    /// forest, and any tighter target is exhausted.
    #[test]
    fn agrees_with_parent_pointer_oracle(seed in any::<u64>()) {
        let fixture = random_fixture(seed);
        let (components, forest_cost) = oracle_forest(&fixture.graph);

        prop_assert_eq!(
            connection_cost(&fixture.graph, components),
            Ok(forest_cost)
        );
        if components > 1 {
            let err = connection_cost(&fixture.graph, components - 1);
            let is_exhausted = matches!(err, Err(CostError::EdgesExhausted { .. }));
            prop_assert!(is_exhausted);
        }
    }
}
