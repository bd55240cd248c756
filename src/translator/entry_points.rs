//! Entry-point promotion.
//!
//! Private and public keys are reported side by side. Any entry-point node
//! found below another entry point is detached and pushed as a root; its
//! former parent keeps copies of the attributes it did not have itself.
use tracing::debug;

use crate::model::{Forest, NodeId};

fn find_nested(forest: &Forest) -> Option<(NodeId, NodeId)> {
    let mut stack: Vec<(NodeId, Option<NodeId>, bool)> =
        forest.roots().iter().rev().map(|r| (*r, None, false)).collect();

    while let Some((id, parent, under_entry)) = stack.pop() {
        let entry = forest.kind(id).is_entry_point();
        if entry && under_entry {
            if let Some(parent) = parent {
                return Some((id, parent));
            }
        }
        let children = forest.child_ids(id);
        for child in children.into_iter().rev() {
            stack.push((child, Some(id), under_entry || entry));
        }
    }
    None
}

fn keep_attributes(forest: &mut Forest, node: NodeId, parent: NodeId) {
    let children: Vec<_> = forest.children(node).collect();
    for (kind, child) in children {
        if kind.is_entry_point() || kind.is_functionality() || forest.has_child(parent, kind) {
            continue;
        }
        let copy = forest.deep_copy(child);
        forest.insert_or_merge(parent, copy);
    }
}

/// Returns how many nodes were promoted.
pub fn promote(forest: &mut Forest) -> usize {
    let mut promoted = 0;
    while let Some((node, parent)) = find_nested(forest) {
        keep_attributes(forest, node, parent);
        forest.detach_child(parent, forest.kind(node));
        forest.push_root(node);
        promoted += 1;
    }
    if promoted > 0 {
        debug!(count = promoted, "promoted entry points");
    }
    promoted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Kind, Location};

    fn loc() -> Location {
        Location::default()
    }

    #[test]
    fn test_public_key_promoted_to_root() {
        let mut forest = Forest::new();
        let private = forest.add_node(Kind::PrivateKey, "RSA", loc());
        let public = forest.add_child(private, Kind::PublicKey, "RSA", loc());
        forest.add_child(public, Kind::KeyLength, "2048", loc());
        forest.add_child(public, Kind::Verify, "VERIFY", loc());
        forest.push_root(private);

        assert_eq!(promote(&mut forest), 1);
        assert_eq!(forest.roots(), &[private, public]);
        assert!(!forest.has_child(private, Kind::PublicKey));
        // copied, not shared, and markers stay with the promoted key
        let length = forest.child(private, Kind::KeyLength).unwrap();
        assert_ne!(Some(length), forest.child(public, Kind::KeyLength));
        assert!(!forest.has_child(private, Kind::Verify));
    }

    #[test]
    fn test_entry_point_under_non_entry_stays() {
        let mut forest = Forest::new();
        let sig = forest.add_node(Kind::Signature, "SHA256withRSA", loc());
        forest.add_child(sig, Kind::PrivateKey, "RSA", loc());
        forest.push_root(sig);

        assert_eq!(promote(&mut forest), 0);
        assert!(forest.has_child(sig, Kind::PrivateKey));
    }

    #[test]
    fn test_deeply_nested_entry_point() {
        let mut forest = Forest::new();
        let private = forest.add_node(Kind::PrivateKey, "EC", loc());
        let curve = forest.add_child(private, Kind::EllipticCurveAlgorithm, "EC", loc());
        let public = forest.add_child(curve, Kind::PublicKey, "EC", loc());
        forest.push_root(private);

        assert_eq!(promote(&mut forest), 1);
        assert!(forest.is_root(public));
        assert!(!forest.has_child(curve, Kind::PublicKey));
    }
}
