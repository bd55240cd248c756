//! Key contexts: the algorithm a key is for becomes the key's child.
use crate::engine::{DetectedValue, RawValue};
use crate::model::{Forest, Kind, Location, NodeId};
use crate::rules::KeyKind;

use super::{algorithm, common};

pub fn translate(forest: &mut Forest, context: KeyKind, value: &DetectedValue) -> Option<NodeId> {
    match &value.value {
        RawValue::Algorithm(name) => Some(key(forest, context, name, &value.location)),
        _ => common::translate(forest, value),
    }
}

/// Builds the key node. A pair is a private key holding its public half;
/// entry-point promotion separates them later.
fn key(forest: &mut Forest, context: KeyKind, name: &str, location: &Location) -> NodeId {
    let algorithm = algorithm::build(forest, name, location);
    let key_name = match algorithm {
        Some(id) => forest.name(id).to_string(),
        None => name.trim().to_string(),
    };
    let kind = match context {
        KeyKind::Secret => Kind::SecretKey,
        KeyKind::Private | KeyKind::Pair => Kind::PrivateKey,
        KeyKind::Public => Kind::PublicKey,
    };

    let key = forest.add_node(kind, key_name.as_str(), location.clone());
    if let Some(algorithm) = algorithm {
        if let Some(length) = forest.child(algorithm, Kind::KeyLength) {
            let length = forest.deep_copy(length);
            forest.insert_or_merge(key, length);
        }
        forest.insert_or_merge(key, algorithm);
    }

    if context == KeyKind::Pair {
        let public = forest.add_node(Kind::PublicKey, key_name, location.clone());
        for child in forest.child_ids(key) {
            let copy = forest.deep_copy(child);
            forest.insert_or_merge(public, copy);
        }
        forest.insert_or_merge(key, public);
    }
    key
}

#[cfg(test)]
mod tests {
    use super::*;

    fn translate_name(context: KeyKind, name: &str) -> (Forest, NodeId) {
        let mut forest = Forest::new();
        let value = DetectedValue::new(RawValue::Algorithm(name.into()), Location::default());
        let id = translate(&mut forest, context, &value).unwrap();
        (forest, id)
    }

    #[test]
    fn test_secret_key_wraps_cipher() {
        let (forest, id) = translate_name(KeyKind::Secret, "AES_256");
        assert_eq!(forest.kind(id), Kind::SecretKey);
        assert_eq!(forest.name(id), "AES");
        assert_eq!(forest.child_name(id, Kind::KeyLength), Some("256"));
        let cipher = forest.child(id, Kind::BlockCipher).unwrap();
        assert_eq!(forest.child_name(cipher, Kind::KeyLength), Some("256"));
    }

    #[test]
    fn test_key_pair_holds_public_half() {
        let (forest, id) = translate_name(KeyKind::Pair, "EC");
        assert_eq!(forest.kind(id), Kind::PrivateKey);
        let public = forest.child(id, Kind::PublicKey).unwrap();
        let algorithm = forest.child(public, Kind::EllipticCurveAlgorithm).unwrap();
        assert_ne!(Some(algorithm), forest.child(id, Kind::EllipticCurveAlgorithm));
    }

    #[test]
    fn test_unknown_algorithm_still_yields_key() {
        let (forest, id) = translate_name(KeyKind::Secret, "Rijndael-Legacy");
        assert_eq!(forest.name(id), "Rijndael-Legacy");
        assert_eq!(forest.child_count(id), 0);
    }
}
