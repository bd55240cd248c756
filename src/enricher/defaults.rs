use crate::model::{Forest, Kind, NodeId};

use super::{add_if_absent, DefaultTables, EnrichmentStage};

/// Key lengths an API family documents as its default.
///
/// Pre: the node carries the origin tag of the convention it was detected
/// under. Post: a key, or a cipher standing on its own, of a listed algorithm
/// without a `KeyLength` has one. A cipher owned by a key, or holding one, is
/// sized by that key. Nodes from any other convention are untouched.
pub struct ConventionDefaultsStage {
    tables: &'static DefaultTables,
}

impl ConventionDefaultsStage {
    pub fn new(tables: &'static DefaultTables) -> Self {
        Self { tables }
    }
}

impl EnrichmentStage for ConventionDefaultsStage {
    fn name(&self) -> &'static str {
        "convention-defaults"
    }

    fn enrich(&self, forest: &mut Forest, node: NodeId, parent: Option<NodeId>) -> bool {
        let kind = forest.kind(node);
        let owned_by_key = parent.is_some_and(|p| forest.kind(p).is_key());
        let holds_key = forest.children(node).any(|(child, _)| child.is_key());
        let sized = kind.is_key() || (kind.is_cipher_shaped() && !owned_by_key && !holds_key);
        if !sized || forest.has_child(node, Kind::KeyLength) {
            return false;
        }
        let Some(origin) = forest.origin(node) else {
            return false;
        };
        match self.tables.key_length(origin, forest.name(node)) {
            Some(bits) => add_if_absent(forest, node, Kind::KeyLength, bits.to_string()),
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Convention, Location};

    fn key(origin: Convention, name: &str) -> (Forest, NodeId) {
        let mut forest = Forest::new();
        let key = forest.add_node(Kind::SecretKey, name, Location::default());
        forest.set_origin(key, Some(origin));
        forest.push_root(key);
        (forest, key)
    }

    #[test]
    fn test_default_applies_to_its_convention() {
        let stage = ConventionDefaultsStage::new(DefaultTables::standard());
        let (mut forest, id) = key(Convention::Jca, "DESede");
        assert!(stage.enrich(&mut forest, id, None));
        assert_eq!(forest.child_name(id, Kind::KeyLength), Some("168"));
    }

    #[test]
    fn test_standalone_cipher_gets_default() {
        let stage = ConventionDefaultsStage::new(DefaultTables::standard());
        let mut forest = Forest::new();
        let aes = forest.add_node(Kind::BlockCipher, "AES", Location::default());
        forest.set_origin(aes, Some(Convention::Jca));
        forest.push_root(aes);
        assert!(stage.enrich(&mut forest, aes, None));
        assert_eq!(forest.child_name(aes, Kind::KeyLength), Some("128"));
    }

    #[test]
    fn test_cipher_under_key_is_sized_by_key() {
        let stage = ConventionDefaultsStage::new(DefaultTables::standard());
        let (mut forest, key) = key(Convention::Jca, "AES");
        let aes = forest.add_child(key, Kind::BlockCipher, "AES", Location::default());
        forest.set_origin(aes, Some(Convention::Jca));
        assert!(!stage.enrich(&mut forest, aes, Some(key)));
        assert!(!forest.has_child(aes, Kind::KeyLength));
    }

    #[test]
    fn test_default_does_not_leak() {
        let stage = ConventionDefaultsStage::new(DefaultTables::standard());
        let (mut forest, id) = key(Convention::GoStdlib, "AES");
        assert!(!stage.enrich(&mut forest, id, None));
        assert!(!forest.has_child(id, Kind::KeyLength));
    }

    #[test]
    fn test_explicit_length_kept() {
        let stage = ConventionDefaultsStage::new(DefaultTables::standard());
        let (mut forest, id) = key(Convention::Jca, "AES");
        forest.add_child(id, Kind::KeyLength, "256", Location::default());
        assert!(!stage.enrich(&mut forest, id, None));
        assert_eq!(forest.child_name(id, Kind::KeyLength), Some("256"));
    }
}
