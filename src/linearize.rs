use petgraph::algo::toposort;
use petgraph::graph::{DiGraph, NodeIndex};

use crate::instance::EntityId;

/// Verdict of a linearization backend on a directed "earlier-than" relation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Linearization {
    /// A full linear extension, as 1-based node ids earliest first.
    Ordered(Vec<EntityId>),
    /// The relation contains a cycle; no linear extension exists.
    Cyclic,
}

/// A topological-sort procedure over 1-based node ids, injected into the
/// decoder the same way [`SatSolve`](crate::solve::SatSolve) is injected into
/// the pipeline.
pub trait Linearize {
    /// Linearize `node_count` nodes under the given directed edges.
    fn linearize(&self, node_count: usize, edges: &[(EntityId, EntityId)]) -> Linearization;
}

/// The petgraph-backed implementation.
#[derive(Clone, Copy, Debug, Default)]
pub struct Toposort;

impl Linearize for Toposort {
    fn linearize(&self, node_count: usize, edges: &[(EntityId, EntityId)]) -> Linearization {
        let mut graph = DiGraph::<(), ()>::with_capacity(node_count, edges.len());
        for _ in 0..node_count {
            graph.add_node(());
        }
        for &(u, v) in edges {
            graph.add_edge(NodeIndex::new(u - 1), NodeIndex::new(v - 1), ());
        }

        match toposort(&graph, None) {
            Ok(order) => Linearization::Ordered(order.into_iter().map(|ix| ix.index() + 1).collect()),
            Err(_) => Linearization::Cyclic,
        }
    }
}
