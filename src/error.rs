//! Error types with error codes and fix suggestions
//!
//! Error code ranges:
//! - DG-001-009: Graph structure errors
//! - DG-010-019: Traversal errors
//! - DG-020-029: Ordering errors
//! - DG-030-039: Graph file / IO errors

use thiserror::Error;

pub type Result<T> = std::result::Result<T, GraphError>;

/// Trait for errors that provide fix suggestions
pub trait FixSuggestion {
    fn fix_suggestion(&self) -> Option<&str>;
}

#[derive(Error, Debug)]
pub enum GraphError {
    // ═══════════════════════════════════════════
    // GRAPH STRUCTURE ERRORS (001-009)
    // ═══════════════════════════════════════════
    #[error("[DG-001] Vertex '{key}' already in graph")]
    DuplicateVertex { key: String },

    #[error("[DG-002] No such vertex: '{key}'")]
    VertexNotFound { key: String },

    #[error("[DG-003] Edge endpoint #{index} cannot be resolved (graph has {len} vertices)")]
    DanglingReference { index: usize, len: usize },

    // ═══════════════════════════════════════════
    // TRAVERSAL ERRORS (010-019)
    // ═══════════════════════════════════════════
    #[error("[DG-010] Traversal exceeded {limit} visits")]
    TraversalLimit { limit: usize },

    // ═══════════════════════════════════════════
    // ORDERING ERRORS (020-029)
    // ═══════════════════════════════════════════
    #[error("[DG-020] Graph has dependency cycles among: {cycle}")]
    CycleDetected { cycle: String },

    // ═══════════════════════════════════════════
    // GRAPH FILE / IO ERRORS (030-039)
    // ═══════════════════════════════════════════
    #[error("[DG-030] Invalid schema version: {version}")]
    InvalidSchema { version: String },

    #[error("[DG-031] YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("[DG-032] IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl GraphError {
    /// Get the error code (e.g., "DG-001")
    pub fn code(&self) -> &'static str {
        match self {
            Self::DuplicateVertex { .. } => "DG-001",
            Self::VertexNotFound { .. } => "DG-002",
            Self::DanglingReference { .. } => "DG-003",
            Self::TraversalLimit { .. } => "DG-010",
            Self::CycleDetected { .. } => "DG-020",
            Self::InvalidSchema { .. } => "DG-030",
            Self::Yaml(_) => "DG-031",
            Self::Io(_) => "DG-032",
        }
    }
}

impl FixSuggestion for GraphError {
    fn fix_suggestion(&self) -> Option<&str> {
        match self {
            GraphError::DuplicateVertex { .. } => Some("Use unique vertex ids"),
            GraphError::VertexNotFound { .. } => {
                Some("Declare the vertex before referencing it in an edge")
            }
            GraphError::DanglingReference { .. } => {
                Some("Only resolve edges against the graph that created them")
            }
            GraphError::TraversalLimit { .. } => {
                Some("Enable loop detection or raise max_visits for large graphs")
            }
            GraphError::CycleDetected { .. } => {
                Some("Remove circular dependencies from the graph")
            }
            GraphError::InvalidSchema { .. } => {
                Some("Use 'depgraph/graph@0.1' as the schema version")
            }
            GraphError::Yaml(_) => Some("Check YAML syntax: indentation and quoting"),
            GraphError::Io(_) => Some("Check file path and permissions"),
        }
    }
}
