use anyhow::Result;

use crate::nav::{Node, NodeKind, PoiGraph};

pub fn cmd_nodes(graph: &PoiGraph, kind: Option<NodeKind>) -> Result<()> {
    let lines = describe_nodes(graph, kind);
    for line in &lines {
        println!("{}", line);
    }
    println!("{} nodes", lines.len());
    Ok(())
}

/// One line per node, in insertion order.
pub fn describe_nodes(graph: &PoiGraph, kind: Option<NodeKind>) -> Vec<String> {
    graph
        .get_all_nodes()
        .into_iter()
        .filter(|n| kind.map(|k| n.kind == k).unwrap_or(true))
        .map(describe_node)
        .collect()
}

fn describe_node(n: &Node) -> String {
    let l = &n.location;
    let mut line = format!("{} [{}] ({}, {}, {})", n.id, n.kind.as_str(), l.x, l.y, l.z);
    match (n.kind, n.linked_id.as_deref()) {
        (NodeKind::Translocator, Some(partner)) => line.push_str(&format!(" -> {}", partner)),
        (NodeKind::Translocator, None) => line.push_str(" (unlinked)"),
        _ => {}
    }
    line
}
