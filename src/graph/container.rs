//! Graph - arena owning every vertex, addressed by key or [`VertexId`]

use std::borrow::Borrow;
use std::fmt;

use tracing::{debug, trace, warn};

use super::edge::{Edge, VertexId};
use super::vertex::{Direction, Vertex};
use super::VertexKey;
use crate::error::{GraphError, Result};

/// Directed graph holding all vertices.
///
/// Vertices are added once and live as long as the graph. Edges are stored on
/// both endpoints (adjacent on the source, incident on the target) and refer
/// to each other through [`VertexId`] handles only.
///
/// Lookup by key is linear.
#[derive(Debug, Clone)]
pub struct Graph<K, E = f32> {
    vertices: Vec<Vertex<K, E>>,
}

impl<K, E> Default for Graph<K, E> {
    fn default() -> Self {
        Self {
            vertices: Vec::new(),
        }
    }
}

impl<K: VertexKey, E> Graph<K, E> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(capacity),
        }
    }

    /// Add a vertex keyed `key`.
    ///
    /// Fails with `DuplicateVertex` if the key is taken; the existing vertex
    /// is left untouched.
    pub fn add_vertex(&mut self, key: K) -> Result<VertexId> {
        if self.contains(&key) {
            return Err(GraphError::DuplicateVertex {
                key: key.to_string(),
            });
        }
        let id = VertexId(self.vertices.len());
        debug!(key = %key, id = id.index(), "vertex added");
        self.vertices.push(Vertex::new(key));
        Ok(id)
    }

    /// Check if a vertex with this key exists
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        self.find(key).is_some()
    }

    /// Handle of the vertex keyed `key`
    pub fn vertex_id<Q>(&self, key: &Q) -> Result<VertexId>
    where
        K: Borrow<Q>,
        Q: Eq + fmt::Display + ?Sized,
    {
        self.find(key).ok_or_else(|| GraphError::VertexNotFound {
            key: key.to_string(),
        })
    }

    /// Vertex keyed `key`
    pub fn get_vertex<Q>(&self, key: &Q) -> Result<&Vertex<K, E>>
    where
        K: Borrow<Q>,
        Q: Eq + fmt::Display + ?Sized,
    {
        let id = self.vertex_id(key)?;
        Ok(&self.vertices[id.0])
    }

    /// Vertex behind a handle; `DanglingReference` if the handle is not from this graph
    pub fn vertex(&self, id: VertexId) -> Result<&Vertex<K, E>> {
        self.vertices
            .get(id.0)
            .ok_or(GraphError::DanglingReference {
                index: id.0,
                len: self.vertices.len(),
            })
    }

    /// Vertex at the far end of `edge`
    #[inline]
    pub fn resolve(&self, edge: &Edge<E>) -> Result<&Vertex<K, E>> {
        self.vertex(edge.endpoint())
    }

    /// All vertex keys in insertion order
    pub fn list_vertex_keys(&self) -> Vec<K> {
        self.vertices.iter().map(|v| v.key().clone()).collect()
    }

    /// Keys of all vertices without predecessors
    pub fn source_keys(&self) -> Vec<K> {
        self.vertices
            .iter()
            .filter(|v| v.is_source())
            .map(|v| v.key().clone())
            .collect()
    }

    /// Vertices in insertion order, with their handles
    pub fn vertices(&self) -> impl Iterator<Item = (VertexId, &Vertex<K, E>)> {
        self.vertices
            .iter()
            .enumerate()
            .map(|(index, v)| (VertexId(index), v))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Number of directed edges (each counted once)
    pub fn edge_count(&self) -> usize {
        self.vertices.iter().map(Vertex::size_adjacent).sum()
    }

    /// Remove the first edge `vertex → target`, on both endpoints.
    ///
    /// Returns `Ok(false)` if there is no such edge.
    pub fn remove_adjacent_edge<Q>(&mut self, vertex: &Q, target: &Q) -> Result<bool>
    where
        K: Borrow<Q>,
        Q: Eq + fmt::Display + ?Sized,
    {
        let from = self.vertex_id(vertex)?;
        match self.find(target) {
            Some(to) => Ok(self.remove_edge_between(from, to)),
            None => Ok(false),
        }
    }

    /// Remove the first edge `source → vertex`, on both endpoints.
    ///
    /// Returns `Ok(false)` if there is no such edge.
    pub fn remove_incident_edge<Q>(&mut self, vertex: &Q, source: &Q) -> Result<bool>
    where
        K: Borrow<Q>,
        Q: Eq + fmt::Display + ?Sized,
    {
        let to = self.vertex_id(vertex)?;
        match self.find(source) {
            Some(from) => Ok(self.remove_edge_between(from, to)),
            None => Ok(false),
        }
    }

    /// Remove the first `from → to` edge from both edge lists.
    ///
    /// Both sides are located before either is touched, so an edge is never
    /// left half-removed.
    pub(crate) fn remove_edge_between(&mut self, from: VertexId, to: VertexId) -> bool {
        let (Some(source), Some(target)) = (self.vertices.get(from.0), self.vertices.get(to.0))
        else {
            return false;
        };
        let adjacent = source.position(Direction::Adjacent, to);
        let incident = target.position(Direction::Incident, from);

        match (adjacent, incident) {
            (Some(a), Some(i)) => {
                self.vertices[from.0].take_edge(Direction::Adjacent, a);
                self.vertices[to.0].take_edge(Direction::Incident, i);
                trace!(from = from.index(), to = to.index(), "edge removed");
                true
            }
            (None, None) => false,
            _ => {
                warn!(
                    from = from.index(),
                    to = to.index(),
                    "adjacent/incident lists out of sync, edge left in place"
                );
                false
            }
        }
    }

    fn find<Q>(&self, key: &Q) -> Option<VertexId>
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        self.vertices
            .iter()
            .position(|v| v.key().borrow() == key)
            .map(VertexId)
    }
}

impl<K: VertexKey, E: Clone> Graph<K, E> {
    /// Add the edge `from → to`: adjacent on `from`, incident on `to`.
    ///
    /// Duplicate edges between the same pair are allowed.
    pub fn add_edge(&mut self, from: VertexId, to: VertexId, data: E) -> Result<()> {
        let len = self.vertices.len();
        for id in [from, to] {
            if id.0 >= len {
                return Err(GraphError::DanglingReference { index: id.0, len });
            }
        }
        self.vertices[to.0].push_incident(from, data.clone());
        self.vertices[from.0].push_adjacent(to, data);
        trace!(from = from.index(), to = to.index(), "edge added");
        Ok(())
    }

    /// `from` must come before `successor`
    pub fn add_forward_edge<Q>(&mut self, from: &Q, successor: &Q, data: E) -> Result<()>
    where
        K: Borrow<Q>,
        Q: Eq + fmt::Display + ?Sized,
    {
        let from = self.vertex_id(from)?;
        let to = self.vertex_id(successor)?;
        self.add_edge(from, to, data)
    }

    /// `vertex` depends on `predecessor`, i.e. the edge `predecessor → vertex`
    pub fn add_backward_edge<Q>(&mut self, vertex: &Q, predecessor: &Q, data: E) -> Result<()>
    where
        K: Borrow<Q>,
        Q: Eq + fmt::Display + ?Sized,
    {
        let to = self.vertex_id(vertex)?;
        let from = self.vertex_id(predecessor)?;
        self.add_edge(from, to, data)
    }
}

impl<K: VertexKey, E: Clone + Default> Graph<K, E> {
    /// [`add_forward_edge`](Self::add_forward_edge) with a default payload
    pub fn add_forward_default<Q>(&mut self, from: &Q, successor: &Q) -> Result<()>
    where
        K: Borrow<Q>,
        Q: Eq + fmt::Display + ?Sized,
    {
        self.add_forward_edge(from, successor, E::default())
    }

    /// [`add_backward_edge`](Self::add_backward_edge) with a default payload
    pub fn add_backward_default<Q>(&mut self, vertex: &Q, predecessor: &Q) -> Result<()>
    where
        K: Borrow<Q>,
        Q: Eq + fmt::Display + ?Sized,
    {
        self.add_backward_edge(vertex, predecessor, E::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn abc() -> Graph<String, f32> {
        let mut g = Graph::new();
        for key in ["a", "b", "c"] {
            g.add_vertex(key.to_string()).unwrap();
        }
        g
    }

    fn endpoints(g: &Graph<String, f32>, edges: &[Edge<f32>]) -> Vec<(String, f32)> {
        edges
            .iter()
            .map(|e| (g.resolve(e).unwrap().key().clone(), *e.data()))
            .collect()
    }

    #[test]
    fn test_add_vertex_rejects_duplicate() {
        let mut g = abc();
        let err = g.add_vertex("b".to_string()).unwrap_err();
        assert!(matches!(err, GraphError::DuplicateVertex { ref key } if key == "b"));
        assert_eq!(g.len(), 3);
    }

    #[test]
    fn test_get_vertex_not_found() {
        let g = abc();
        let err = g.get_vertex("zzz").unwrap_err();
        assert_eq!(err.code(), "DG-002");
        assert!(err.to_string().contains("zzz"));
    }

    #[test]
    fn test_forward_edge_mirrors_both_sides() {
        let mut g = abc();
        g.add_forward_edge("a", "b", 2.5).unwrap();

        let a = g.get_vertex("a").unwrap();
        let b = g.get_vertex("b").unwrap();
        assert_eq!(endpoints(&g, a.adjacent()), vec![("b".to_string(), 2.5)]);
        assert_eq!(endpoints(&g, b.incident()), vec![("a".to_string(), 2.5)]);
        assert_eq!(a.size_incident(), 0);
        assert_eq!(b.size_adjacent(), 0);
        assert_eq!(g.edge_count(), 1);
    }

    #[test]
    fn test_backward_edge_is_reverse_phrasing() {
        let mut g = abc();
        // "c depends on a"
        g.add_backward_edge("c", "a", 1.0).unwrap();

        let a = g.get_vertex("a").unwrap();
        assert_eq!(endpoints(&g, a.adjacent()), vec![("c".to_string(), 1.0)]);
        assert_eq!(g.source_keys(), vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn test_remove_edge_removes_counterpart() {
        let mut g = abc();
        g.add_forward_edge("a", "b", 1.0).unwrap();
        g.add_forward_edge("a", "c", 2.0).unwrap();

        assert!(g.remove_incident_edge("b", "a").unwrap());
        assert_eq!(g.get_vertex("b").unwrap().size_incident(), 0);
        assert_eq!(
            endpoints(&g, g.get_vertex("a").unwrap().adjacent()),
            vec![("c".to_string(), 2.0)]
        );

        assert!(g.remove_adjacent_edge("a", "c").unwrap());
        assert_eq!(g.edge_count(), 0);
        assert_eq!(g.get_vertex("c").unwrap().size_incident(), 0);
    }

    #[test]
    fn test_remove_missing_edge_returns_false() {
        let mut g = abc();
        g.add_forward_edge("a", "b", 1.0).unwrap();

        assert!(!g.remove_adjacent_edge("b", "a").unwrap());
        assert!(!g.remove_adjacent_edge("a", "nope").unwrap());
        assert!(g.remove_adjacent_edge("nope", "a").is_err());
        assert_eq!(g.edge_count(), 1);
    }

    #[test]
    fn test_duplicate_edges_removed_in_insertion_order() {
        let mut g = abc();
        g.add_forward_edge("a", "b", 1.0).unwrap();
        g.add_forward_edge("a", "b", 7.0).unwrap();

        assert!(g.remove_adjacent_edge("a", "b").unwrap());
        assert_eq!(
            endpoints(&g, g.get_vertex("b").unwrap().incident()),
            vec![("a".to_string(), 7.0)]
        );
        assert_eq!(
            endpoints(&g, g.get_vertex("a").unwrap().adjacent()),
            vec![("b".to_string(), 7.0)]
        );
    }

    #[test]
    fn test_self_loop_round_trip() {
        let mut g = abc();
        g.add_forward_edge("a", "a", 0.0).unwrap();
        let a = g.get_vertex("a").unwrap();
        assert_eq!((a.size_adjacent(), a.size_incident()), (1, 1));

        assert!(g.remove_adjacent_edge("a", "a").unwrap());
        let a = g.get_vertex("a").unwrap();
        assert_eq!((a.size_adjacent(), a.size_incident()), (0, 0));
    }

    #[test]
    fn test_foreign_handle_is_dangling() {
        let mut big = abc();
        big.add_vertex("d".to_string()).unwrap();
        let foreign = big.vertex_id("d").unwrap();

        let mut small = abc();
        let a = small.vertex_id("a").unwrap();
        assert!(matches!(
            small.vertex(foreign),
            Err(GraphError::DanglingReference { index: 3, len: 3 })
        ));
        assert!(small.add_edge(a, foreign, 1.0).is_err());
        assert_eq!(small.edge_count(), 0);
    }

    #[test]
    fn test_list_vertex_keys_in_insertion_order() {
        let g = abc();
        assert_eq!(g.list_vertex_keys(), vec!["a", "b", "c"]);
        let ids: Vec<usize> = g.vertices().map(|(id, _)| id.index()).collect();
        assert_eq!(ids, vec![0, 1, 2]);
    }

    #[test]
    fn test_default_payload_helpers() {
        let mut g: Graph<u32, f32> = Graph::new();
        g.add_vertex(1).unwrap();
        g.add_vertex(2).unwrap();
        g.add_forward_default(&1, &2).unwrap();
        g.add_backward_default(&1, &2).unwrap();

        let one = g.get_vertex(&1).unwrap();
        assert_eq!(*one.adjacent()[0].data(), 0.0);
        assert_eq!(one.size_incident(), 1);
    }
}
