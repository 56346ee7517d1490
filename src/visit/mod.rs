//! Visitor Module - depth-first traversal with pluggable per-vertex behavior
//!
//! A visitor is attached to a start vertex with [`Graph::accept`]. At every
//! vertex the traversal calls [`Visitor::apply`], which decides how to fan
//! out (`Fanout`). The default follows the visitor's configured direction.
//!
//! Traversal runs on an explicit work-list and yields the same preorder as a
//! recursive depth-first walk: children in edge-list order, adjacent before
//! incident when both are followed.
//!
//! With loop detection disabled nothing stops a walk around a cycle. Either
//! the visitor guards itself (as `DiscoverReachableSetVisitor` does) or the
//! caller sets `max_visits`.

mod visitors;

use std::borrow::Borrow;
use std::fmt;

use rustc_hash::FxHashSet;
use tracing::{debug, trace};

use crate::error::{GraphError, Result};
use crate::graph::{Direction, Graph, Vertex, VertexId, VertexKey};

pub use visitors::{
    DiscoverReachableSetVisitor, FindSourceNodesVisitor, PreorderVisitor, PrintVisitor,
};

/// Traversal configuration carried by every visitor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VisitorOptions {
    /// Edge list followed by the default fan-out
    pub direction: Direction,
    /// Visit each vertex at most once per visitor instance
    pub detect_loops: bool,
    /// Abort with `TraversalLimit` after this many vertex visits
    pub max_visits: Option<usize>,
}

impl VisitorOptions {
    pub fn new(direction: Direction) -> Self {
        Self {
            direction,
            ..Self::default()
        }
    }

    pub fn detect_loops(mut self, detect_loops: bool) -> Self {
        self.detect_loops = detect_loops;
        self
    }

    pub fn max_visits(mut self, limit: usize) -> Self {
        self.max_visits = Some(limit);
        self
    }
}

/// How a traversal continues after visiting a vertex
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fanout {
    /// Do not descend
    Stop,
    /// Descend into every endpoint of one edge list
    Follow(Direction),
    /// Descend through adjacent edges, then through incident edges
    Both,
}

impl Fanout {
    fn directions(self) -> &'static [Direction] {
        match self {
            Fanout::Stop => &[],
            Fanout::Follow(Direction::Adjacent) => &[Direction::Adjacent],
            Fanout::Follow(Direction::Incident) => &[Direction::Incident],
            Fanout::Both => &[Direction::Adjacent, Direction::Incident],
        }
    }
}

/// State shared by all visitors: options and the loop-detection set.
///
/// The visited set lives as long as the visitor, so reusing a visitor for a
/// second `accept` skips everything the first walk already saw.
#[derive(Debug, Clone)]
pub struct VisitorBase<K> {
    options: VisitorOptions,
    visited: FxHashSet<K>,
}

impl<K: VertexKey> VisitorBase<K> {
    pub fn new(options: VisitorOptions) -> Self {
        Self {
            options,
            visited: FxHashSet::default(),
        }
    }

    #[inline]
    pub fn options(&self) -> &VisitorOptions {
        &self.options
    }

    #[inline]
    pub fn direction(&self) -> Direction {
        self.options.direction
    }

    pub fn set_direction(&mut self, direction: Direction) {
        self.options.direction = direction;
    }

    /// Keys seen by loop detection (empty when it is disabled)
    pub fn visited(&self) -> &FxHashSet<K> {
        &self.visited
    }

    /// Record a visit; `false` means loop detection already saw this key
    fn enter(&mut self, key: &K) -> bool {
        if !self.options.detect_loops {
            return true;
        }
        self.visited.insert(key.clone())
    }
}

/// Per-vertex traversal behavior
pub trait Visitor<K: VertexKey, E> {
    fn base(&self) -> &VisitorBase<K>;

    fn base_mut(&mut self) -> &mut VisitorBase<K>;

    /// Called once per visit. The default only fans out.
    fn apply(&mut self, _vertex: &Vertex<K, E>) -> Result<Fanout> {
        Ok(Fanout::Follow(self.base().direction()))
    }
}

impl<K: VertexKey, E> Graph<K, E> {
    /// Run `visitor` starting at the vertex keyed `start`
    pub fn accept<Q, V>(&self, start: &Q, visitor: &mut V) -> Result<()>
    where
        K: Borrow<Q>,
        Q: Eq + fmt::Display + ?Sized,
        V: Visitor<K, E> + ?Sized,
    {
        let id = self.vertex_id(start)?;
        self.accept_id(id, visitor)
    }

    /// Run `visitor` starting at `start`
    pub fn accept_id<V>(&self, start: VertexId, visitor: &mut V) -> Result<()>
    where
        V: Visitor<K, E> + ?Sized,
    {
        let options = *visitor.base().options();
        let start_key = self.vertex(start)?.key();
        debug!(
            start = %start_key,
            direction = ?options.direction,
            detect_loops = options.detect_loops,
            "traversal started"
        );

        let mut stack: Vec<VertexId> = vec![start];
        let mut visits = 0usize;

        while let Some(id) = stack.pop() {
            let vertex = self.vertex(id)?;
            if !visitor.base_mut().enter(vertex.key()) {
                continue;
            }

            visits += 1;
            if let Some(limit) = options.max_visits {
                if visits > limit {
                    return Err(GraphError::TraversalLimit { limit });
                }
            }
            trace!(key = %vertex.key(), "visit");

            let fanout = visitor.apply(vertex)?;
            // Reverse push so the first edge is popped first
            for &direction in fanout.directions().iter().rev() {
                stack.extend(vertex.edges(direction).iter().rev().map(|e| e.endpoint()));
            }
        }

        debug!(visits, "traversal finished");
        Ok(())
    }
}
