//! Graph file parsing (YAML)
//!
//! ```yaml
//! schema: depgraph/graph@0.1
//! vertices:
//!   - id: coat
//!     depends_on: [trousers, pullover]
//!   - id: trousers
//!   - id: pullover
//! edges:
//!   - source: trousers
//!     target: [shoes, coat]
//!     weight: 2.0
//! ```

use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::error::{GraphError, Result};
use crate::graph::Graph;

pub const SCHEMA_VERSION: &str = "depgraph/graph@0.1";

/// Graph file as written by the user
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GraphFile {
    pub schema: String,
    pub vertices: Vec<VertexDef>,
    #[serde(default)]
    pub edges: Vec<EdgeDef>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VertexDef {
    pub id: String,
    /// Vertices this one depends on (each gets an edge `dep → id`)
    #[serde(default)]
    pub depends_on: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EdgeDef {
    pub source: Endpoints,
    pub target: Endpoints,
    #[serde(default)]
    pub weight: f32,
}

/// Handles string OR array for source/target
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum Endpoints {
    Single(String),
    Multiple(Vec<String>),
}

impl Endpoints {
    pub fn as_vec(&self) -> Vec<&str> {
        match self {
            Endpoints::Single(s) => vec![s.as_str()],
            Endpoints::Multiple(v) => v.iter().map(String::as_str).collect(),
        }
    }
}

impl GraphFile {
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let file: GraphFile = serde_yaml::from_str(yaml)?;
        if file.schema != SCHEMA_VERSION {
            return Err(GraphError::InvalidSchema {
                version: file.schema,
            });
        }
        Ok(file)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading graph file");
        let yaml = std::fs::read_to_string(path)?;
        Self::from_yaml(&yaml)
    }

    /// Build the graph: all vertices first, then `depends_on`, then `edges`
    pub fn build(&self) -> Result<Graph<String, f32>> {
        let mut graph = Graph::with_capacity(self.vertices.len());
        for vertex in &self.vertices {
            graph.add_vertex(vertex.id.clone())?;
        }

        for vertex in &self.vertices {
            for dep in &vertex.depends_on {
                graph.add_backward_edge(vertex.id.as_str(), dep.as_str(), 0.0)?;
            }
        }

        for edge in &self.edges {
            for source in edge.source.as_vec() {
                for target in edge.target.as_vec() {
                    graph.add_forward_edge(source, target, edge.weight)?;
                }
            }
        }

        debug!(
            vertices = graph.len(),
            edges = graph.edge_count(),
            "graph built"
        );
        Ok(graph)
    }
}
