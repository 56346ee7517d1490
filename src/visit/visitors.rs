//! Concrete visitors: print, preorder, source discovery, component discovery

use std::collections::BTreeSet;
use std::io::{self, Write};

use super::{Fanout, Visitor, VisitorBase, VisitorOptions};
use crate::error::Result;
use crate::graph::{Direction, Vertex, VertexKey};

// ═══════════════════════════════════════════════════════════════
// PRINT
// ═══════════════════════════════════════════════════════════════

/// Writes each visited key on its own line, then follows its direction.
/// Loop detection is on.
pub struct PrintVisitor<K, W = io::Stdout> {
    base: VisitorBase<K>,
    out: W,
}

impl<K: VertexKey> PrintVisitor<K, io::Stdout> {
    pub fn stdout(direction: Direction) -> Self {
        Self::with_writer(direction, io::stdout())
    }
}

impl<K: VertexKey, W: Write> PrintVisitor<K, W> {
    pub fn with_writer(direction: Direction, out: W) -> Self {
        Self {
            base: VisitorBase::new(VisitorOptions::new(direction).detect_loops(true)),
            out,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<K: VertexKey, E, W: Write> Visitor<K, E> for PrintVisitor<K, W> {
    fn base(&self) -> &VisitorBase<K> {
        &self.base
    }

    fn base_mut(&mut self) -> &mut VisitorBase<K> {
        &mut self.base
    }

    fn apply(&mut self, vertex: &Vertex<K, E>) -> Result<Fanout> {
        writeln!(self.out, "{}", vertex.key())?;
        Ok(Fanout::Follow(self.base.direction()))
    }
}

// ═══════════════════════════════════════════════════════════════
// PREORDER
// ═══════════════════════════════════════════════════════════════

/// Records keys in visiting order using the default fan-out.
/// Loop detection is on.
pub struct PreorderVisitor<K> {
    base: VisitorBase<K>,
    order: Vec<K>,
}

impl<K: VertexKey> PreorderVisitor<K> {
    pub fn new(direction: Direction) -> Self {
        Self {
            base: VisitorBase::new(VisitorOptions::new(direction).detect_loops(true)),
            order: Vec::new(),
        }
    }

    pub fn order(&self) -> &[K] {
        &self.order
    }

    pub fn into_order(self) -> Vec<K> {
        self.order
    }
}

impl<K: VertexKey, E> Visitor<K, E> for PreorderVisitor<K> {
    fn base(&self) -> &VisitorBase<K> {
        &self.base
    }

    fn base_mut(&mut self) -> &mut VisitorBase<K> {
        &mut self.base
    }

    fn apply(&mut self, vertex: &Vertex<K, E>) -> Result<Fanout> {
        self.order.push(vertex.key().clone());
        Ok(Fanout::Follow(self.base.direction()))
    }
}

// ═══════════════════════════════════════════════════════════════
// SOURCE NODES
// ═══════════════════════════════════════════════════════════════

/// Collects every vertex without incident edges in the start vertex's
/// connected component.
///
/// Fans out through adjacent and incident edges with loop detection on, so
/// a single `accept` from any member of the component finds all its sources.
pub struct FindSourceNodesVisitor<K> {
    base: VisitorBase<K>,
    sources: Vec<K>,
}

impl<K: VertexKey> FindSourceNodesVisitor<K> {
    pub fn new() -> Self {
        Self {
            base: VisitorBase::new(VisitorOptions::new(Direction::Adjacent).detect_loops(true)),
            sources: Vec::new(),
        }
    }

    /// Sources in the order they were found
    pub fn sources(&self) -> &[K] {
        &self.sources
    }

    pub fn into_sources(self) -> Vec<K> {
        self.sources
    }
}

impl<K: VertexKey> Default for FindSourceNodesVisitor<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: VertexKey, E> Visitor<K, E> for FindSourceNodesVisitor<K> {
    fn base(&self) -> &VisitorBase<K> {
        &self.base
    }

    fn base_mut(&mut self) -> &mut VisitorBase<K> {
        &mut self.base
    }

    fn apply(&mut self, vertex: &Vertex<K, E>) -> Result<Fanout> {
        if vertex.is_source() {
            self.sources.push(vertex.key().clone());
        }
        Ok(Fanout::Both)
    }
}

// ═══════════════════════════════════════════════════════════════
// REACHABLE SET
// ═══════════════════════════════════════════════════════════════

/// Discovers the connected component of the start vertex, ignoring edge
/// direction.
///
/// Framework loop detection is off; the visitor's own set stops revisits.
pub struct DiscoverReachableSetVisitor<K> {
    base: VisitorBase<K>,
    reachable: BTreeSet<K>,
}

impl<K: VertexKey> DiscoverReachableSetVisitor<K> {
    pub fn new() -> Self {
        Self {
            base: VisitorBase::new(VisitorOptions::new(Direction::Adjacent)),
            reachable: BTreeSet::new(),
        }
    }

    /// Discovered keys, sorted
    pub fn reachable(&self) -> &BTreeSet<K> {
        &self.reachable
    }

    pub fn len(&self) -> usize {
        self.reachable.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reachable.is_empty()
    }

    pub fn into_reachable(self) -> BTreeSet<K> {
        self.reachable
    }
}

impl<K: VertexKey> Default for DiscoverReachableSetVisitor<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: VertexKey, E> Visitor<K, E> for DiscoverReachableSetVisitor<K> {
    fn base(&self) -> &VisitorBase<K> {
        &self.base
    }

    fn base_mut(&mut self) -> &mut VisitorBase<K> {
        &mut self.base
    }

    fn apply(&mut self, vertex: &Vertex<K, E>) -> Result<Fanout> {
        if !self.reachable.insert(vertex.key().clone()) {
            return Ok(Fanout::Stop);
        }
        Ok(Fanout::Both)
    }
}
