//! Whole-tree fix-ups run once, after every store of a file is assembled.
//!
//! Order matters: nested signatures are collapsed before names are derived,
//! and key pairs share their attributes before promotion splits them.
use tracing::trace;

use crate::model::{Forest, Kind, NodeId};

use super::algorithm::signature_name;

pub fn apply(forest: &mut Forest) {
    collapse_nested_signatures(forest);
    propagate_key_pairs(forest);
    derive_signature_names(forest);
    lift_padding_block_size(forest);
}

fn is_signature(kind: Kind) -> bool {
    matches!(kind, Kind::Signature | Kind::ProbabilisticSignatureScheme)
}

/// A placeholder signature wrapping a named one is replaced by the inner
/// signature, which picks up whatever the wrapper held that it lacks.
pub fn collapse_nested_signatures(forest: &mut Forest) {
    for (id, parent) in forest.walk() {
        if !forest.is_placed(id, parent) || !is_signature(forest.kind(id)) || !forest.is_placeholder(id) {
            continue;
        }
        let inner = forest
            .children(id)
            .find(|(kind, child)| is_signature(*kind) && !forest.is_placeholder(*child))
            .map(|(_, child)| child);
        let Some(inner) = inner else {
            continue;
        };

        forest.detach_child(id, forest.kind(inner));
        for child in forest.child_ids(id) {
            forest.insert_if_absent(inner, child);
        }
        forest.replace(id, inner, parent);
        trace!(signature = forest.name(inner), "collapsed placeholder signature");
    }
}

fn shared_attribute(kind: Kind) -> bool {
    !kind.is_key() && !kind.is_functionality()
}

// copies attributes `to` does not define yet
fn share(forest: &mut Forest, from: NodeId, to: NodeId) {
    let kinds: Vec<(Kind, NodeId)> = forest.children(from).collect();
    for (kind, child) in kinds {
        if shared_attribute(kind) && !forest.has_child(to, kind) {
            let copy = forest.deep_copy(child);
            forest.insert_or_merge(to, copy);
        }
    }
}

/// A private key and its public half, nested or siblings, end up with the
/// same algorithm, curve and key length.
pub fn propagate_key_pairs(forest: &mut Forest) {
    for (id, parent) in forest.walk() {
        if forest.kind(id) != Kind::PrivateKey {
            continue;
        }
        let nested = forest.child(id, Kind::PublicKey);
        let sibling = parent.and_then(|p| forest.child(p, Kind::PublicKey));
        for public in nested.into_iter().chain(sibling) {
            share(forest, id, public);
            share(forest, public, id);
        }
    }
}

fn signature_algorithm(forest: &Forest, id: NodeId) -> Option<String> {
    [
        Kind::PublicKeyEncryption,
        Kind::Algorithm,
        Kind::EllipticCurveAlgorithm,
    ]
    .iter()
    .find_map(|kind| forest.child_name(id, *kind))
    .map(str::to_string)
}

/// `UNKNOWN` or bare (`ECDSA`) signature names become `SHA256withECDSA` once
/// both a digest and an algorithm child are present.
pub fn derive_signature_names(forest: &mut Forest) {
    for (id, _) in forest.walk() {
        let kind = forest.kind(id);
        if !is_signature(kind) {
            continue;
        }
        let Some(digest) = forest.child_name(id, Kind::MessageDigest).map(str::to_string) else {
            continue;
        };
        let Some(algorithm) = signature_algorithm(forest, id) else {
            continue;
        };

        let bare = forest.name(id) == algorithm;
        let name = match kind {
            Kind::Signature if forest.is_placeholder(id) || bare => signature_name(&digest, &algorithm),
            Kind::ProbabilisticSignatureScheme if forest.is_placeholder(id) => {
                format!("{}/PSS", signature_name(&digest, &algorithm))
            }
            _ => continue,
        };
        forest.set_name(id, name);
    }
}

pub fn lift_padding_block_size(forest: &mut Forest) {
    for (id, _) in forest.walk() {
        let kind = forest.kind(id);
        if !(kind.is_cipher_shaped() || kind == Kind::PublicKeyEncryption) {
            continue;
        }
        let Some(padding) = forest.child(id, Kind::Padding) else {
            continue;
        };
        if forest.has_child(padding, Kind::BlockSize) && !forest.has_child(id, Kind::BlockSize) {
            if let Some(size) = forest.detach_child(padding, Kind::BlockSize) {
                forest.insert_or_merge(id, size);
            }
        }
    }
}
