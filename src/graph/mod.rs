//! Graph Module - vertices, edges and the owning container
//!
//! - `edge`: Edge and VertexId handle
//! - `vertex`: Vertex with mirrored adjacent/incident lists
//! - `container`: Graph arena, lookup and edge mutation
//!
//! Vertices never own each other: edges hold a `VertexId` that is only
//! meaningful inside the graph that issued it.

mod container;
mod edge;
mod vertex;

use std::fmt;
use std::hash::Hash;

pub use container::Graph;
pub use edge::{Edge, VertexId};
pub use vertex::{Direction, Vertex};

/// Requirements on a vertex key: unique, sortable, hashable, printable.
pub trait VertexKey: Clone + Eq + Hash + Ord + fmt::Display + fmt::Debug {}

impl<T> VertexKey for T where T: Clone + Eq + Hash + Ord + fmt::Display + fmt::Debug {}
