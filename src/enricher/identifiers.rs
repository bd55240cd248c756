use crate::model::{Forest, Kind, NodeId};

use super::{add_if_absent, EnrichmentStage, IdentifierTables};

/// Standard object identifiers by algorithm name.
///
/// AES is composite: base, key-size suffix and mode suffix. The key size is
/// the cipher's own `KeyLength`, or the owning key's. Once the size is known
/// the cipher is displayed with it, as in `AES128`.
pub struct IdentifierStage {
    tables: &'static IdentifierTables,
}

impl IdentifierStage {
    pub fn new(tables: &'static IdentifierTables) -> Self {
        Self { tables }
    }

    fn key_size(forest: &Forest, node: NodeId, parent: Option<NodeId>) -> Option<u32> {
        let owner = parent.filter(|p| forest.kind(*p).is_key());
        forest
            .child_name(node, Kind::KeyLength)
            .or_else(|| owner.and_then(|p| forest.child_name(p, Kind::KeyLength)))
            .and_then(|bits| bits.parse().ok())
    }

    fn identifier(&self, forest: &Forest, node: NodeId, parent: Option<NodeId>) -> Option<String> {
        if forest.kind(node) == Kind::BlockCipher && forest.name(node) == "AES" {
            let key_size = Self::key_size(forest, node, parent);
            let mode = forest.child_name(node, Kind::Mode);
            return Some(self.tables.aes.compose(key_size, mode));
        }
        self.tables.lookup(forest.name(node)).map(str::to_string)
    }

    fn size_qualified_name(forest: &Forest, node: NodeId, parent: Option<NodeId>) -> Option<String> {
        if forest.kind(node) != Kind::BlockCipher || forest.name(node) != "AES" {
            return None;
        }
        Self::key_size(forest, node, parent).map(|bits| format!("AES{bits}"))
    }
}

impl EnrichmentStage for IdentifierStage {
    fn name(&self) -> &'static str {
        "identifiers"
    }

    fn enrich(&self, forest: &mut Forest, node: NodeId, parent: Option<NodeId>) -> bool {
        if !forest.kind(node).is_algorithm()
            || forest.is_placeholder(node)
            || forest.has_child(node, Kind::Oid)
        {
            return false;
        }
        let Some(oid) = self.identifier(forest, node, parent) else {
            return false;
        };
        if let Some(name) = Self::size_qualified_name(forest, node, parent) {
            forest.set_name(node, name);
        }
        add_if_absent(forest, node, Kind::Oid, oid)
    }
}
