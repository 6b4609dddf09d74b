//! Spanlink core library.
//!
//! Computes the minimum total connection cost that leaves a weighted
//! undirected network with exactly the requested number of clusters. The
//! computation is a Kruskal scan over weight-ordered candidate links that
//! stops as soon as the cluster count drops to the target, so a full
//! spanning forest is never built when a partial one suffices.
#![cfg_attr(docsrs, feature(doc_cfg))]

mod cost;
mod error;
mod graph;
mod partition;

pub use crate::{
    cost::connection_cost,
    error::{CostError, CostErrorCode, GraphError, GraphErrorCode, Result},
    graph::{Edge, Graph},
};
