use crate::model::{Forest, Kind, NodeId};

use super::tables::digest_output_bits;
use super::{add_if_absent, DefaultTables, EnrichmentStage};

/// PSS parameters that were not stated explicitly.
///
/// Post: a probabilistic signature scheme has a digest (the scheme's
/// baseline hash when absent), a mask generation function wrapping that same
/// digest, and a salt as long as the digest output.
pub struct SignatureDefaultsStage {
    tables: &'static DefaultTables,
}

impl SignatureDefaultsStage {
    pub fn new(tables: &'static DefaultTables) -> Self {
        Self { tables }
    }
}

impl EnrichmentStage for SignatureDefaultsStage {
    fn name(&self) -> &'static str {
        "signature-defaults"
    }

    fn enrich(&self, forest: &mut Forest, node: NodeId, _parent: Option<NodeId>) -> bool {
        if forest.kind(node) != Kind::ProbabilisticSignatureScheme {
            return false;
        }
        let defaults = &self.tables.pss;
        let mut changed = add_if_absent(forest, node, Kind::MessageDigest, defaults.digest);
        let Some(digest) = forest.child(node, Kind::MessageDigest) else {
            return changed;
        };

        if !forest.has_child(node, Kind::MaskGenerationFunction) {
            let location = forest.location(node).clone();
            let mgf = forest.add_child(
                node,
                Kind::MaskGenerationFunction,
                defaults.mask_generation,
                location,
            );
            let wrapped = forest.deep_copy(digest);
            forest.insert_or_merge(mgf, wrapped);
            changed = true;
        }

        if let Some(bits) = digest_output_bits(forest.name(digest)) {
            changed |= add_if_absent(forest, node, Kind::SaltLength, bits.to_string());
        }
        changed
    }
}
