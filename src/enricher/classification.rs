use crate::model::{Forest, Kind, NodeId};

use super::{add_if_absent, EnrichmentStage};

/// Functional tags: `Tag` on MACs, `Digest` on hashes and XOFs.
pub struct ClassificationStage;

impl EnrichmentStage for ClassificationStage {
    fn name(&self) -> &'static str {
        "classification"
    }

    fn enrich(&self, forest: &mut Forest, node: NodeId, _parent: Option<NodeId>) -> bool {
        let marker = match forest.kind(node) {
            Kind::Mac => Kind::Tag,
            Kind::MessageDigest | Kind::ExtendableOutputFunction => Kind::Digest,
            _ => return false,
        };
        add_if_absent(forest, node, marker, marker.as_str().to_uppercase())
    }
}
