//! depgraph - directed dependency graph with visitor traversal and
//! topological sort

pub mod config;
pub mod demo;
pub mod error;
pub mod graph;
pub mod topo;
pub mod visit;

pub use config::GraphFile;
pub use error::{FixSuggestion, GraphError, Result};
pub use graph::{Direction, Edge, Graph, Vertex, VertexId, VertexKey};
pub use topo::topological_sort;
pub use visit::{
    DiscoverReachableSetVisitor, Fanout, FindSourceNodesVisitor, PreorderVisitor, PrintVisitor,
    Visitor, VisitorBase, VisitorOptions,
};
