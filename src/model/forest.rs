//! Arena-backed canonical asset forest.
//!
//! Nodes are addressed by `NodeId` and owned by the `Forest`. A node holds at
//! most one child per `Kind`; the children map is private and only changed
//! through `insert_or_merge`, `insert_if_absent` and `detach_child`, so the
//! invariant cannot be broken from outside this module.
//!
//! Copies are explicit: `deep_copy` allocates fresh ids for a whole subtree,
//! the original and the copy never share nodes afterwards.
use std::collections::BTreeMap;

use super::{Asset, Convention, Kind, Location};

/// Display name of a node whose concrete algorithm is not known yet.
pub const PLACEHOLDER: &str = "UNKNOWN";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(&self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone)]
pub struct NodeData {
    kind: Kind,
    name: String,
    location: Location,
    origin: Option<Convention>,
    children: BTreeMap<Kind, NodeId>,
}

impl NodeData {
    pub fn kind(&self) -> Kind {
        self.kind
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn location(&self) -> &Location {
        &self.location
    }

    pub fn origin(&self) -> Option<Convention> {
        self.origin
    }
}

#[derive(Debug, Clone, Default)]
pub struct Forest {
    nodes: Vec<NodeData>,
    roots: Vec<NodeId>,
}

impl Forest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocates a detached node. It becomes part of the tree once it is
    /// attached under a parent or pushed as a root.
    pub fn add_node(&mut self, kind: Kind, name: impl Into<String>, location: Location) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(NodeData {
            kind,
            name: name.into(),
            location,
            origin: None,
            children: BTreeMap::new(),
        });
        id
    }

    /// Allocates a node and attaches it under `parent` in one step.
    pub fn add_child(
        &mut self,
        parent: NodeId,
        kind: Kind,
        name: impl Into<String>,
        location: Location,
    ) -> NodeId {
        let child = self.add_node(kind, name, location);
        let origin = self.origin(parent);
        self.set_origin(child, origin);
        self.insert_or_merge(parent, child)
    }

    pub fn node(&self, id: NodeId) -> &NodeData {
        &self.nodes[id.0]
    }

    pub fn kind(&self, id: NodeId) -> Kind {
        self.nodes[id.0].kind
    }

    pub fn name(&self, id: NodeId) -> &str {
        &self.nodes[id.0].name
    }

    pub fn set_name(&mut self, id: NodeId, name: impl Into<String>) {
        self.nodes[id.0].name = name.into();
    }

    pub fn is_placeholder(&self, id: NodeId) -> bool {
        self.nodes[id.0].name == PLACEHOLDER
    }

    pub fn location(&self, id: NodeId) -> &Location {
        &self.nodes[id.0].location
    }

    pub fn origin(&self, id: NodeId) -> Option<Convention> {
        self.nodes[id.0].origin
    }

    pub fn set_origin(&mut self, id: NodeId, origin: Option<Convention>) {
        self.nodes[id.0].origin = origin;
    }

    pub fn child(&self, id: NodeId, kind: Kind) -> Option<NodeId> {
        self.nodes[id.0].children.get(&kind).copied()
    }

    pub fn has_child(&self, id: NodeId, kind: Kind) -> bool {
        self.nodes[id.0].children.contains_key(&kind)
    }

    /// Name of the child of `kind`, if there is one.
    pub fn child_name(&self, id: NodeId, kind: Kind) -> Option<&str> {
        self.child(id, kind).map(|c| self.name(c))
    }

    pub fn children(&self, id: NodeId) -> impl Iterator<Item = (Kind, NodeId)> + '_ {
        self.nodes[id.0].children.iter().map(|(k, v)| (*k, *v))
    }

    pub fn child_ids(&self, id: NodeId) -> Vec<NodeId> {
        self.nodes[id.0].children.values().copied().collect()
    }

    pub fn child_count(&self, id: NodeId) -> usize {
        self.nodes[id.0].children.len()
    }

    pub fn is_attached_to(&self, parent: NodeId, child: NodeId) -> bool {
        self.child(parent, self.kind(child)) == Some(child)
    }

    /// Attaches `child` under `parent`.
    ///
    /// If the slot for the child's kind is free the child is inserted. If it is
    /// taken, the incoming child takes the slot and every child of the former
    /// occupant it does not define itself is migrated onto it, recursively, so
    /// nothing the former occupant knew is lost. Returns the id now in the slot.
    pub fn insert_or_merge(&mut self, parent: NodeId, child: NodeId) -> NodeId {
        if parent == child {
            return child;
        }
        let kind = self.kind(child);
        match self.child(parent, kind) {
            Some(existing) if existing == child => child,
            Some(existing) => {
                self.absorb(child, existing);
                self.nodes[parent.0].children.insert(kind, child);
                child
            }
            None => {
                self.nodes[parent.0].children.insert(kind, child);
                child
            }
        }
    }

    /// Attaches `child` only when the slot for its kind is free.
    pub fn insert_if_absent(&mut self, parent: NodeId, child: NodeId) -> bool {
        if parent == child || self.has_child(parent, self.kind(child)) {
            return false;
        }
        self.insert_or_merge(parent, child);
        true
    }

    pub fn detach_child(&mut self, parent: NodeId, kind: Kind) -> Option<NodeId> {
        self.nodes[parent.0].children.remove(&kind)
    }

    /// Moves every child of `from` under `to`, leaving `from` childless.
    pub fn move_children(&mut self, from: NodeId, to: NodeId) {
        if from == to {
            return;
        }
        let moved = std::mem::take(&mut self.nodes[from.0].children);
        for (_, child) in moved {
            self.insert_or_merge(to, child);
        }
    }

    // target keeps its own children, source only fills the gaps
    fn absorb(&mut self, target: NodeId, source: NodeId) {
        if target == source {
            return;
        }
        let source_children: Vec<(Kind, NodeId)> = self.children(source).collect();
        for (kind, source_child) in source_children {
            match self.child(target, kind) {
                None => {
                    self.nodes[target.0].children.insert(kind, source_child);
                }
                Some(target_child) => self.absorb(target_child, source_child),
            }
        }
    }

    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    pub fn push_root(&mut self, id: NodeId) {
        if !self.roots.contains(&id) {
            self.roots.push(id);
        }
    }

    pub fn remove_root(&mut self, id: NodeId) -> bool {
        let before = self.roots.len();
        self.roots.retain(|r| *r != id);
        before != self.roots.len()
    }

    pub fn is_root(&self, id: NodeId) -> bool {
        self.roots.contains(&id)
    }

    /// True while `id` still sits under `parent` (or in the root list).
    /// Walks are snapshots, so rewrites check this before touching a node.
    pub fn is_placed(&self, id: NodeId, parent: Option<NodeId>) -> bool {
        match parent {
            Some(p) => self.is_attached_to(p, id),
            None => self.is_root(id),
        }
    }

    /// Puts `new` where `old` currently sits: in `parent`'s slot, or at the
    /// same position in the root list when `parent` is `None`.
    pub fn replace(&mut self, old: NodeId, new: NodeId, parent: Option<NodeId>) {
        match parent {
            Some(p) => {
                if self.is_attached_to(p, old) {
                    let kind = self.kind(old);
                    self.detach_child(p, kind);
                }
                self.insert_or_merge(p, new);
            }
            None => match self.roots.iter().position(|r| *r == old) {
                Some(pos) => {
                    if self.roots.contains(&new) {
                        self.roots.remove(pos);
                    } else {
                        self.roots[pos] = new;
                    }
                }
                None => self.push_root(new),
            },
        }
    }

    /// Recursively clones the subtree at `id` into freshly allocated nodes.
    pub fn deep_copy(&mut self, id: NodeId) -> NodeId {
        let source = self.nodes[id.0].clone();
        let copy = self.add_node(source.kind, source.name, source.location);
        self.nodes[copy.0].origin = source.origin;
        for (kind, child) in source.children {
            let child_copy = self.deep_copy(child);
            self.nodes[copy.0].children.insert(kind, child_copy);
        }
        copy
    }

    /// Pre-order walk of every reachable node with its parent.
    pub fn walk(&self) -> Vec<(NodeId, Option<NodeId>)> {
        let mut out = Vec::new();
        for root in &self.roots {
            self.walk_from(*root, None, &mut out);
        }
        out
    }

    fn walk_from(
        &self,
        id: NodeId,
        parent: Option<NodeId>,
        out: &mut Vec<(NodeId, Option<NodeId>)>,
    ) {
        out.push((id, parent));
        for child in self.child_ids(id) {
            self.walk_from(child, Some(id), out);
        }
    }

    /// Children before their parents, roots in order.
    pub fn walk_post_order(&self) -> Vec<(NodeId, Option<NodeId>)> {
        let mut out = Vec::new();
        for root in &self.roots {
            self.post_order_from(*root, None, &mut out);
        }
        out
    }

    fn post_order_from(
        &self,
        id: NodeId,
        parent: Option<NodeId>,
        out: &mut Vec<(NodeId, Option<NodeId>)>,
    ) {
        for child in self.child_ids(id) {
            self.post_order_from(child, Some(id), out);
        }
        out.push((id, parent));
    }

    /// Reachable nodes of `kind`, in pre-order.
    pub fn find(&self, kind: Kind) -> Vec<NodeId> {
        self.walk()
            .into_iter()
            .filter(|(id, _)| self.kind(*id) == kind)
            .map(|(id, _)| id)
            .collect()
    }

    /// Number of allocated nodes, reachable or not.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    pub fn asset(&self, id: NodeId) -> Asset {
        let node = &self.nodes[id.0];
        Asset {
            kind: node.kind,
            name: node.name.clone(),
            location: node.location.clone(),
            origin: node.origin,
            children: node.children.values().map(|c| self.asset(*c)).collect(),
        }
    }

    pub fn snapshot(&self) -> Vec<Asset> {
        self.roots.iter().map(|r| self.asset(*r)).collect()
    }
}
