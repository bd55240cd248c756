//! Detection stores to canonical asset forest.
//!
//! Every raw value is interpreted in the context its rule declared; the
//! per-context functions are pure and return a detached node, or `None` for
//! combinations that have no canonical meaning. Assembly then places those
//! nodes following the store tree.
pub mod algorithm;
mod cipher;
pub mod common;
mod digest;
mod entry_points;
mod kdf;
mod key;
mod key_agreement;
mod mac;
pub mod post;
mod signature;

pub use entry_points::promote as promote_entry_points;

use tracing::{debug, trace};

use crate::engine::{DetectedValue, DetectionStore, Slot};
use crate::model::{Convention, Forest, NodeId};
use crate::rules::DetectionContext;

/// Interprets one raw value under `context`.
pub fn translate_value(
    forest: &mut Forest,
    context: DetectionContext,
    value: &DetectedValue,
) -> Option<NodeId> {
    match context {
        DetectionContext::Cipher(kind) => cipher::translate(forest, kind, value),
        DetectionContext::Signature(kind) => signature::translate(forest, kind, value),
        DetectionContext::Mac => mac::translate(forest, value),
        DetectionContext::Digest => digest::translate(forest, value),
        DetectionContext::Key(kind) => key::translate(forest, kind, value),
        DetectionContext::KeyAgreement => key_agreement::translate(forest, value),
        DetectionContext::Kem => key_agreement::translate_kem(forest, value),
        DetectionContext::KeyDerivation => kdf::translate(forest, value),
        DetectionContext::Prng => kdf::translate_prng(forest, value),
        DetectionContext::AlgorithmParameter => match &value.value {
            crate::engine::RawValue::Algorithm(name) => {
                algorithm::build(forest, name, &value.location)
            }
            _ => common::translate(forest, value),
        },
    }
}

fn stamp_origin(forest: &mut Forest, id: NodeId, convention: Convention) {
    if forest.origin(id).is_none() {
        forest.set_origin(id, Some(convention));
    }
    for child in forest.child_ids(id) {
        stamp_origin(forest, child, convention);
    }
}

fn attach(forest: &mut Forest, parent: Option<NodeId>, id: NodeId) -> NodeId {
    match parent {
        Some(parent) => forest.insert_or_merge(parent, id),
        None => {
            forest.push_root(id);
            id
        }
    }
}

#[derive(Debug, Clone)]
pub struct Translator {
    promote_entry_points: bool,
}

impl Translator {
    pub fn new() -> Self {
        Self {
            promote_entry_points: true,
        }
    }

    pub fn with_entry_point_promotion(mut self, enabled: bool) -> Self {
        self.promote_entry_points = enabled;
        self
    }

    pub fn translate(&self, store: &DetectionStore) -> Forest {
        self.translate_all(std::slice::from_ref(store))
    }

    /// Translates every store of one file into a single forest, then runs
    /// the local whole-tree fix-ups and entry-point promotion once.
    pub fn translate_all(&self, stores: &[DetectionStore]) -> Forest {
        let mut forest = Forest::new();
        for store in stores {
            self.assemble(&mut forest, store, None);
        }
        post::apply(&mut forest);
        if self.promote_entry_points {
            promote_entry_points(&mut forest);
        }
        debug!(
            stores = stores.len(),
            roots = forest.roots().len(),
            "translated detections"
        );
        forest
    }

    /// The first method-level node anchors everything else the store found.
    /// Without one, parameter nodes attach to `parent` and the first of them
    /// anchors the nested stores.
    ///
    /// Method values keep declaration order, so a rule producing both an
    /// algorithm and an action must declare the algorithm first; the Go
    /// `GenerateKey` rules rely on this to hang the marker off the key.
    fn assemble(&self, forest: &mut Forest, store: &DetectionStore, parent: Option<NodeId>) {
        let mut method_nodes = Vec::new();
        let mut parameter_nodes = Vec::new();
        for stored in &store.values {
            match translate_value(forest, store.context, &stored.value) {
                Some(id) => {
                    stamp_origin(forest, id, store.convention);
                    match stored.slot {
                        Slot::Method => method_nodes.push(id),
                        Slot::Parameter(_) => parameter_nodes.push(id),
                    }
                }
                None => trace!(
                    rule = %store.rule,
                    context = %store.context,
                    value = %stored.value.value,
                    "value has no canonical form"
                ),
            }
        }

        let anchor = match method_nodes.split_first() {
            Some((first, rest)) => {
                let anchor = attach(forest, parent, *first);
                for id in rest.iter().chain(&parameter_nodes) {
                    forest.insert_or_merge(anchor, *id);
                }
                Some(anchor)
            }
            None => {
                let mut anchor = None;
                for id in parameter_nodes {
                    let placed = attach(forest, parent, id);
                    anchor.get_or_insert(placed);
                }
                anchor.or(parent)
            }
        };

        for children in store.children.values() {
            for child in children {
                self.assemble(forest, child, anchor);
            }
        }
    }
}

impl Default for Translator {
    fn default() -> Self {
        Self::new()
    }
}
