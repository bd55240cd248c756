//! Derives attributes the tree does not state but implies: convention
//! defaults, signature-scheme defaults, standard identifiers and functional
//! classification.
//!
//! Stages run in a fixed order and each visits every node once. A stage only
//! adds children; it never removes one, and a node lacking the context a
//! stage needs is left alone.
mod classification;
mod defaults;
mod digest;
mod identifiers;
mod signature;
pub mod tables;

pub use classification::ClassificationStage;
pub use defaults::ConventionDefaultsStage;
pub use digest::DigestIdentifierStage;
pub use identifiers::IdentifierStage;
pub use signature::SignatureDefaultsStage;
pub use tables::{DefaultTables, IdentifierTables};

use tracing::debug;

use crate::model::{Forest, Kind, Location, NodeId};

pub trait EnrichmentStage: Send + Sync {
    fn name(&self) -> &'static str;
    /// Returns true when the node was changed.
    fn enrich(&self, forest: &mut Forest, node: NodeId, parent: Option<NodeId>) -> bool;
}

/// Adds a `kind` child named `name` unless the node already has one.
pub(crate) fn add_if_absent(
    forest: &mut Forest,
    node: NodeId,
    kind: Kind,
    name: impl Into<String>,
) -> bool {
    if forest.has_child(node, kind) {
        return false;
    }
    let location: Location = forest.location(node).clone();
    forest.add_child(node, kind, name, location);
    true
}

pub struct Enricher {
    stages: Vec<Box<dyn EnrichmentStage>>,
}

impl Enricher {
    pub fn new() -> Self {
        Self::with_tables(IdentifierTables::standard(), DefaultTables::standard())
    }

    /// The standard stage order:
    /// 1. convention defaults (needs origin tags from translation)
    /// 2. signature defaults (adds digests later stages identify)
    /// 3. identifiers
    /// 4. digest identifiers (sized digest families)
    /// 5. classification, last so injected digests are tagged too
    pub fn with_tables(
        identifiers: &'static IdentifierTables,
        defaults: &'static DefaultTables,
    ) -> Self {
        Self {
            stages: vec![
                Box::new(ConventionDefaultsStage::new(defaults)),
                Box::new(SignatureDefaultsStage::new(defaults)),
                Box::new(IdentifierStage::new(identifiers)),
                Box::new(DigestIdentifierStage::new(identifiers)),
                Box::new(ClassificationStage),
            ],
        }
    }

    pub fn from_stages(stages: Vec<Box<dyn EnrichmentStage>>) -> Self {
        Self { stages }
    }

    pub fn enrich(&self, forest: &mut Forest) -> usize {
        let mut total = 0;
        for stage in &self.stages {
            let mut changed = 0;
            for (node, parent) in forest.walk() {
                if forest.is_placed(node, parent) && stage.enrich(forest, node, parent) {
                    changed += 1;
                }
            }
            if changed > 0 {
                debug!(stage = stage.name(), count = changed, "enriched");
            }
            total += changed;
        }
        total
    }

    pub fn stage_names(&self) -> Vec<&'static str> {
        self.stages.iter().map(|s| s.name()).collect()
    }
}

impl Default for Enricher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Convention, PLACEHOLDER};

    #[test]
    fn test_stage_order() {
        assert_eq!(
            Enricher::new().stage_names(),
            vec![
                "convention-defaults",
                "signature-defaults",
                "identifiers",
                "digest-identifiers",
                "classification",
            ]
        );
    }

    #[test]
    fn test_enrich_is_stable() {
        let mut forest = Forest::new();
        let key = forest.add_node(Kind::SecretKey, "AES", Location::default());
        forest.set_origin(key, Some(Convention::Jca));
        forest.add_child(key, Kind::BlockCipher, "AES", Location::default());
        forest.push_root(key);

        let enricher = Enricher::new();
        assert!(enricher.enrich(&mut forest) > 0);
        let first = forest.snapshot();
        assert_eq!(enricher.enrich(&mut forest), 0);
        assert_eq!(forest.snapshot(), first);
    }

    #[test]
    fn test_placeholder_is_not_identified() {
        let mut forest = Forest::new();
        let cipher = forest.add_node(Kind::BlockCipher, PLACEHOLDER, Location::default());
        forest.push_root(cipher);
        assert_eq!(Enricher::new().enrich(&mut forest), 0);
    }
}
