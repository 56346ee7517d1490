//! Visitor Integration Tests
//!
//! Tests for the traversal framework on the clothing graph.

use std::collections::BTreeSet;

use depgraph::demo::{clothing_graph, COAT, SHOES, SOCKS, TROUSERS, UNDERPANTS, UNDERSHIRT};
use depgraph::{
    DiscoverReachableSetVisitor, Direction, Fanout, FindSourceNodesVisitor, Graph, PreorderVisitor,
    PrintVisitor, Result, Vertex, Visitor, VisitorBase, VisitorOptions,
};
use pretty_assertions::assert_eq;

// ═══════════════════════════════════════════════════════════════
// INTEGRATION TESTS: Built-in visitors
// ═══════════════════════════════════════════════════════════════

#[test]
fn test_every_component_has_full_size() {
    let graph = clothing_graph().unwrap();

    for key in graph.list_vertex_keys() {
        let mut visitor = DiscoverReachableSetVisitor::new();
        graph.accept(&key, &mut visitor).unwrap();
        assert_eq!(visitor.len(), 7, "component from {key}");
    }
}

#[test]
fn test_two_components() {
    let mut graph: Graph<String, f32> = Graph::new();
    for key in ["a", "b", "c", "d", "e"] {
        graph.add_vertex(key.to_string()).unwrap();
    }
    graph.add_forward_edge("a", "b", 1.0).unwrap();
    graph.add_backward_edge("b", "c", 1.0).unwrap();
    graph.add_forward_edge("d", "e", 1.0).unwrap();

    let mut left = DiscoverReachableSetVisitor::new();
    graph.accept("c", &mut left).unwrap();
    let mut right = DiscoverReachableSetVisitor::new();
    graph.accept("e", &mut right).unwrap();

    let expected: BTreeSet<String> = ["a", "b", "c"].map(String::from).into();
    assert_eq!(left.into_reachable(), expected);
    assert_eq!(right.len(), 2);
}

#[test]
fn test_find_sources_matches_in_degree_zero() {
    let graph = clothing_graph().unwrap();
    let mut visitor = FindSourceNodesVisitor::new();
    for key in graph.list_vertex_keys() {
        graph.accept(&key, &mut visitor).unwrap();
    }

    let found: BTreeSet<String> = visitor.into_sources().into_iter().collect();
    let expected: BTreeSet<String> = graph
        .vertices()
        .filter(|(_, v)| v.size_incident() == 0)
        .map(|(_, v)| v.key().clone())
        .collect();
    assert_eq!(found, expected);
}

#[test]
fn test_find_sources_from_single_inner_vertex() {
    let graph = clothing_graph().unwrap();
    let mut visitor = FindSourceNodesVisitor::new();
    graph.accept(TROUSERS, &mut visitor).unwrap();

    let found: BTreeSet<String> = visitor.into_sources().into_iter().collect();
    let expected: BTreeSet<String> = [UNDERPANTS, SOCKS, UNDERSHIRT].map(String::from).into();
    assert_eq!(found, expected);
}

#[test]
fn test_print_walks_predecessors_of_shoes() {
    let graph = clothing_graph().unwrap();
    let mut visitor = PrintVisitor::with_writer(Direction::Incident, Vec::new());
    graph.accept(SHOES, &mut visitor).unwrap();

    let lines: Vec<String> = String::from_utf8(visitor.into_inner())
        .unwrap()
        .lines()
        .map(String::from)
        .collect();
    assert_eq!(lines, vec![SHOES, SOCKS, TROUSERS, UNDERPANTS]);
}

#[test]
fn test_preorder_from_underpants() {
    let graph = clothing_graph().unwrap();
    let mut visitor = PreorderVisitor::new(Direction::Adjacent);
    graph.accept(UNDERPANTS, &mut visitor).unwrap();
    assert_eq!(
        visitor.into_order(),
        vec![UNDERPANTS, TROUSERS, COAT, SHOES]
    );
}

// ═══════════════════════════════════════════════════════════════
// INTEGRATION TESTS: Custom visitors
// ═══════════════════════════════════════════════════════════════

/// Sums outgoing edge weights, stops below vertices heavier than a threshold
struct WeightVisitor {
    base: VisitorBase<String>,
    threshold: f32,
    total: f32,
}

impl Visitor<String, f32> for WeightVisitor {
    fn base(&self) -> &VisitorBase<String> {
        &self.base
    }

    fn base_mut(&mut self) -> &mut VisitorBase<String> {
        &mut self.base
    }

    fn apply(&mut self, vertex: &Vertex<String, f32>) -> Result<Fanout> {
        let weight: f32 = vertex.adjacent().iter().map(|e| *e.data()).sum();
        self.total += weight;
        if weight > self.threshold {
            return Ok(Fanout::Stop);
        }
        Ok(Fanout::Follow(self.base.direction()))
    }
}

#[test]
fn test_custom_visitor_controls_fanout() {
    let mut graph: Graph<String, f32> = Graph::new();
    for key in ["root", "heavy", "light", "leaf"] {
        graph.add_vertex(key.to_string()).unwrap();
    }
    graph.add_forward_edge("root", "heavy", 1.0).unwrap();
    graph.add_forward_edge("root", "light", 1.0).unwrap();
    graph.add_forward_edge("heavy", "leaf", 10.0).unwrap();
    graph.add_forward_edge("light", "leaf", 0.5).unwrap();
    graph.add_forward_edge("leaf", "root", 0.25).unwrap();

    let mut visitor = WeightVisitor {
        base: VisitorBase::new(VisitorOptions::new(Direction::Adjacent).detect_loops(true)),
        threshold: 5.0,
        total: 0.0,
    };
    graph.accept("root", &mut visitor).unwrap();

    // root 2.0, heavy 10.0 (stops), light 0.5, leaf 0.25
    assert_eq!(visitor.total, 12.75);
    assert_eq!(visitor.base.visited().len(), 4);
}
