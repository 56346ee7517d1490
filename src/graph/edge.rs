//! Edge - directed link to an endpoint vertex, carrying a payload

/// Stable handle of a vertex inside its owning [`Graph`](super::Graph) arena.
///
/// Handles are plain indices: they never keep a vertex alive and can only be
/// resolved through the graph that issued them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexId(pub(crate) usize);

impl VertexId {
    /// Arena index of this handle
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

/// A directed edge as recorded on one of its two vertices.
///
/// On the source vertex the endpoint is the target (adjacent list); on the
/// target vertex the endpoint is the source (incident list).
#[derive(Debug, Clone, PartialEq)]
pub struct Edge<E> {
    endpoint: VertexId,
    data: E,
}

impl<E> Edge<E> {
    pub(crate) fn new(endpoint: VertexId, data: E) -> Self {
        Self { endpoint, data }
    }

    /// Handle of the vertex at the other end of this edge
    #[inline]
    pub fn endpoint(&self) -> VertexId {
        self.endpoint
    }

    /// Payload (a weight etc.)
    #[inline]
    pub fn data(&self) -> &E {
        &self.data
    }
}
