//! Vertex - a keyed node with mirrored adjacent/incident edge lists

use smallvec::SmallVec;

use super::edge::{Edge, VertexId};

/// Stack-allocated edges: most vertices have 0-4 neighbours per side
pub(crate) type EdgeVec<E> = SmallVec<[Edge<E>; 4]>;

/// Which edge list a traversal follows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    /// Outgoing edges, towards successors
    #[default]
    Adjacent,
    /// Incoming edges, towards predecessors
    Incident,
}

/// A graph vertex.
///
/// For every adjacent edge `u → v` stored here there is exactly one incident
/// edge at `v` pointing back to `u` with the same payload. Only the owning
/// [`Graph`](super::Graph) mutates the lists, so the mirror always holds.
#[derive(Debug, Clone)]
pub struct Vertex<K, E> {
    key: K,
    adjacent: EdgeVec<E>,
    incident: EdgeVec<E>,
}

impl<K, E> Vertex<K, E> {
    pub(crate) fn new(key: K) -> Self {
        Self {
            key,
            adjacent: EdgeVec::new(),
            incident: EdgeVec::new(),
        }
    }

    #[inline]
    pub fn key(&self) -> &K {
        &self.key
    }

    /// Outgoing edges, in insertion order
    #[inline]
    pub fn adjacent(&self) -> &[Edge<E>] {
        &self.adjacent
    }

    /// Incoming edges, in insertion order
    #[inline]
    pub fn incident(&self) -> &[Edge<E>] {
        &self.incident
    }

    /// Edge list for a traversal direction
    #[inline]
    pub fn edges(&self, direction: Direction) -> &[Edge<E>] {
        match direction {
            Direction::Adjacent => &self.adjacent,
            Direction::Incident => &self.incident,
        }
    }

    /// Out-degree
    #[inline]
    pub fn size_adjacent(&self) -> usize {
        self.adjacent.len()
    }

    /// In-degree
    #[inline]
    pub fn size_incident(&self) -> usize {
        self.incident.len()
    }

    /// True when no edge points at this vertex
    #[inline]
    pub fn is_source(&self) -> bool {
        self.incident.is_empty()
    }

    pub(crate) fn push_adjacent(&mut self, target: VertexId, data: E) {
        self.adjacent.push(Edge::new(target, data));
    }

    pub(crate) fn push_incident(&mut self, source: VertexId, data: E) {
        self.incident.push(Edge::new(source, data));
    }

    /// Position of the first edge in `direction` ending at `endpoint`
    pub(crate) fn position(&self, direction: Direction, endpoint: VertexId) -> Option<usize> {
        self.edges(direction)
            .iter()
            .position(|edge| edge.endpoint() == endpoint)
    }

    pub(crate) fn take_edge(&mut self, direction: Direction, position: usize) -> Edge<E> {
        match direction {
            Direction::Adjacent => self.adjacent.remove(position),
            Direction::Incident => self.incident.remove(position),
        }
    }
}
