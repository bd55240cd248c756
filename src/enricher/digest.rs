use crate::model::{Forest, Kind, NodeId};

use super::tables::size_lookup;
use super::{add_if_absent, EnrichmentStage, IdentifierTables};

/// Identifiers of digest families whose member is picked by output size:
/// `SHA2`, `SHA3` and `SHAKE` with a `DigestSize` child. A `SHA2` node that
/// wraps `SHA-512` is one of the SHA-512/t truncations. Non-standard sizes
/// get no identifier.
pub struct DigestIdentifierStage {
    tables: &'static IdentifierTables,
}

impl DigestIdentifierStage {
    pub fn new(tables: &'static IdentifierTables) -> Self {
        Self { tables }
    }

    fn table(&self, forest: &Forest, node: NodeId) -> Option<&'static [(u32, &'static str)]> {
        match forest.name(node) {
            "SHA2" if forest.child_name(node, Kind::MessageDigest) == Some("SHA-512") => {
                Some(self.tables.sha512_truncated)
            }
            "SHA2" => Some(self.tables.sha2),
            "SHA3" => Some(self.tables.sha3),
            "SHAKE" => Some(self.tables.shake),
            _ => None,
        }
    }
}

impl EnrichmentStage for DigestIdentifierStage {
    fn name(&self) -> &'static str {
        "digest-identifiers"
    }

    fn enrich(&self, forest: &mut Forest, node: NodeId, _parent: Option<NodeId>) -> bool {
        if !matches!(
            forest.kind(node),
            Kind::MessageDigest | Kind::ExtendableOutputFunction
        ) || forest.has_child(node, Kind::Oid)
        {
            return false;
        }
        let Some(table) = self.table(forest, node) else {
            return false;
        };
        let bits = forest
            .child_name(node, Kind::DigestSize)
            .and_then(|b| b.parse::<u32>().ok());
        match bits.and_then(|b| size_lookup(table, b)) {
            Some(oid) => add_if_absent(forest, node, Kind::Oid, oid),
            None => false,
        }
    }
}
