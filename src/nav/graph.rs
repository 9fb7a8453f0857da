use indexmap::IndexMap;
use log::{debug, warn};
use std::collections::HashMap;

use super::models::{Location, Node, NodeKind};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    #[error("cannot link: node not found: {0}")]
    NodeNotFound(String),
    #[error("cannot link: {0} is not a translocator")]
    NotATranslocator(String),
    #[error("cannot link: {0} is already linked to {1}")]
    AlreadyLinked(String, String),
    #[error("refusing to replace {0}: it is linked to {1}")]
    LinkedNodeReplaced(String, String),
}

/// Owned store of POIs and translocator pairings.
///
/// Nodes keep insertion order for display. A pairing is always recorded on
/// both sides; removing either end clears the partner's back-reference.
#[derive(Clone, Debug, Default)]
pub struct PoiGraph {
    nodes: IndexMap<String, Node>,
    links: HashMap<String, String>,
}

impl PoiGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces the node at `id`.
    ///
    /// Replacing a linked node drops its link without touching the old
    /// partner, whose `linked_id` keeps pointing at `id`.
    pub fn add_node(
        &mut self,
        id: &str,
        location: Location,
        kind: NodeKind,
        description: Option<&str>,
        color: Option<&str>,
    ) {
        if let Some(partner) = self.links.remove(id) {
            warn!("graph: replacing {} orphans its link to {}", id, partner);
        }
        let node = Node {
            id: id.to_string(),
            location,
            kind,
            description: description.unwrap_or_default().to_string(),
            linked_id: None,
            color: color.map(str::to_string),
        };
        debug!("graph: add {} {} at ({}, {}, {})", kind.as_str(), id, location.x, location.y, location.z);
        self.nodes.insert(id.to_string(), node);
    }

    /// Like [`add_node`](Self::add_node) but fails instead of orphaning a link.
    pub fn try_add_node(
        &mut self,
        id: &str,
        location: Location,
        kind: NodeKind,
        description: Option<&str>,
        color: Option<&str>,
    ) -> Result<(), GraphError> {
        if let Some(partner) = self.links.get(id) {
            return Err(GraphError::LinkedNodeReplaced(id.to_string(), partner.clone()));
        }
        self.add_node(id, location, kind, description, color);
        Ok(())
    }

    /// Pairs two existing translocators. Does not mutate on failure.
    ///
    /// Relinking is not supported: a node already paired with someone else
    /// must be removed first. Repeating an existing pairing is a no-op.
    pub fn link_translocators(&mut self, id_a: &str, id_b: &str) -> Result<(), GraphError> {
        for (id, other) in [(id_a, id_b), (id_b, id_a)] {
            match self.nodes.get(id) {
                None => return Err(GraphError::NodeNotFound(id.to_string())),
                Some(n) if !n.is_translocator() => return Err(GraphError::NotATranslocator(id.to_string())),
                Some(n) => {
                    if let Some(current) = n.linked_id.as_deref().filter(|c| *c != other) {
                        return Err(GraphError::AlreadyLinked(id.to_string(), current.to_string()));
                    }
                }
            }
        }

        if let Some(a) = self.nodes.get_mut(id_a) {
            a.linked_id = Some(id_b.to_string());
        }
        if let Some(b) = self.nodes.get_mut(id_b) {
            b.linked_id = Some(id_a.to_string());
        }
        self.links.insert(id_a.to_string(), id_b.to_string());
        self.links.insert(id_b.to_string(), id_a.to_string());
        debug!("graph: linked {} <-> {}", id_a, id_b);
        Ok(())
    }

    /// Deletes `id` and clears its partner's link. Unknown ids are ignored.
    pub fn remove_node(&mut self, id: &str) {
        let Some(node) = self.nodes.shift_remove(id) else { return };
        self.links.remove(id);
        if let Some(partner_id) = node.linked_id {
            if let Some(partner) = self.nodes.get_mut(&partner_id) {
                if partner.linked_id.as_deref() == Some(id) {
                    partner.linked_id = None;
                    self.links.remove(&partner_id);
                }
            }
        }
        debug!("graph: removed {}", id);
    }

    pub fn get_node(&self, id: &str) -> Option<&Node> {
        self.nodes.get(id)
    }

    /// The translocator paired with `id`, if the pairing is still intact on
    /// both sides. A link left stale by [`add_node`](Self::add_node) yields `None`.
    pub fn partner(&self, id: &str) -> Option<&Node> {
        let node = self.nodes.get(id).filter(|n| n.is_translocator())?;
        let partner = self.nodes.get(node.linked_id.as_deref()?)?;
        (partner.is_translocator() && partner.linked_id.as_deref() == Some(id)).then_some(partner)
    }

    /// All nodes in insertion order.
    pub fn get_all_nodes(&self) -> Vec<&Node> {
        self.nodes.values().collect()
    }

    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    pub fn nodes_of_kind(&self, kind: NodeKind) -> impl Iterator<Item = &Node> {
        self.nodes.values().filter(move |n| n.kind == kind)
    }

    pub fn node_color(&self, id: &str) -> Option<&str> {
        self.nodes.get(id).and_then(|n| n.color.as_deref())
    }

    pub fn contains(&self, id: &str) -> bool {
        self.nodes.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
        self.links.clear();
    }
}
