//! Built-in example: the order in which to put on clothes

use crate::error::Result;
use crate::graph::Graph;

pub const UNDERPANTS: &str = "underpants";
pub const TROUSERS: &str = "trousers";
pub const COAT: &str = "coat";
pub const SHOES: &str = "shoes";
pub const SOCKS: &str = "socks";
pub const UNDERSHIRT: &str = "undershirt";
pub const PULLOVER: &str = "pullover";

/// Seven garments, six "put on before" edges
pub fn clothing_graph() -> Result<Graph<String, f32>> {
    let mut graph = Graph::with_capacity(7);
    for key in [
        UNDERPANTS, TROUSERS, COAT, SHOES, SOCKS, UNDERSHIRT, PULLOVER,
    ] {
        graph.add_vertex(key.to_string())?;
    }

    graph.add_forward_default(UNDERPANTS, TROUSERS)?;
    graph.add_forward_default(TROUSERS, COAT)?;
    graph.add_forward_default(UNDERSHIRT, PULLOVER)?;
    graph.add_forward_default(PULLOVER, COAT)?;
    graph.add_forward_default(SOCKS, SHOES)?;
    graph.add_forward_default(TROUSERS, SHOES)?;
    Ok(graph)
}
