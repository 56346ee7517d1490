//! Topological sort (Kahn's algorithm)
//!
//! The sort consumes the graph: every edge is removed as its source is
//! emitted. Use [`Graph::topological_order`] to sort a copy instead.

use tracing::{debug, instrument, trace};

use crate::error::{GraphError, Result};
use crate::graph::{Graph, VertexId, VertexKey};

/// Order all vertex keys so that for every edge `u → v`, `u` comes first.
///
/// The frontier is a LIFO stack; among several ready vertices the pick order
/// is not part of the contract. Fails with `CycleDetected` (and no partial
/// order) if edges remain once the frontier is exhausted.
#[instrument(skip_all, fields(vertices = graph.len(), edges = graph.edge_count()))]
pub fn topological_sort<K: VertexKey, E>(mut graph: Graph<K, E>) -> Result<Vec<K>> {
    // Vertices with no incident edges
    let mut frontier: Vec<VertexId> = graph
        .vertices()
        .filter(|(_, v)| v.is_source())
        .map(|(id, _)| id)
        .collect();
    let mut order: Vec<VertexId> = Vec::with_capacity(graph.len());

    while let Some(n) = frontier.pop() {
        order.push(n);
        let successors: Vec<VertexId> = graph
            .vertex(n)?
            .adjacent()
            .iter()
            .map(|edge| edge.endpoint())
            .collect();

        for m in successors {
            graph.remove_edge_between(n, m);
            let target = graph.vertex(m)?;
            if target.size_incident() == 0 {
                trace!(key = %target.key(), "ready");
                frontier.push(m);
            }
        }
    }

    let cyclic: Vec<String> = graph
        .vertices()
        .filter(|(_, v)| v.size_adjacent() > 0 || v.size_incident() > 0)
        .map(|(_, v)| v.key().to_string())
        .collect();
    if !cyclic.is_empty() {
        debug!(remaining = cyclic.len(), "cycle detected");
        return Err(GraphError::CycleDetected {
            cycle: cyclic.join(", "),
        });
    }

    debug_assert_eq!(order.len(), graph.len());
    order
        .into_iter()
        .map(|id| graph.vertex(id).map(|v| v.key().clone()))
        .collect()
}

impl<K: VertexKey, E: Clone> Graph<K, E> {
    /// Topological order of a copy of this graph; `self` keeps its edges
    pub fn topological_order(&self) -> Result<Vec<K>> {
        topological_sort(self.clone())
    }
}
