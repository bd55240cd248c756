//! The default rewrite rules, in the order they run.
use crate::model::{Forest, Kind, NodeId, PLACEHOLDER};
use crate::translator::algorithm::signature_name;

use super::{NodePattern, PatternRule, PredicateRule, ReorganizerRule};

pub fn default_rules() -> Vec<Box<dyn ReorganizerRule>> {
    vec![
        Box::new(merge_unknown(Kind::BlockCipher, Kind::BlockCipher)),
        Box::new(merge_unknown(Kind::AuthenticatedEncryption, Kind::BlockCipher)),
        Box::new(merge_unknown(Kind::Mac, Kind::Mac)),
        Box::new(invert(Kind::DigestSize, Kind::MessageDigest)),
        Box::new(move_under_cipher()),
        Box::new(flatten_markers()),
        Box::new(rename_from_children()),
        Box::new(block_size_under_mode()),
    ]
}

/// A placeholder `outer` wrapping a concrete `inner` is replaced by a copy of
/// the inner node carrying the outer node's other children.
pub fn merge_unknown(outer: Kind, inner: Kind) -> PatternRule {
    PatternRule::new(
        format!("merge-unknown-{}", outer.as_str().replace('_', "-")),
        NodePattern::kind(outer).named(PLACEHOLDER).with_child(inner),
        move |forest, node, parent| {
            let Some(wrapped) = forest.child(node, inner) else {
                return;
            };
            let replacement = forest.deep_copy(wrapped);
            let others: Vec<NodeId> = forest
                .children(node)
                .filter(|(kind, _)| *kind != inner)
                .map(|(_, child)| child)
                .collect();
            for child in others {
                forest.insert_or_merge(replacement, child);
            }
            forest.replace(node, replacement, parent);
        },
    )
}

/// `size ⊃ concept` becomes `concept ⊃ size`, reattached where the size was.
pub fn invert(size: Kind, concept: Kind) -> PatternRule {
    PatternRule::new(
        format!("invert-{}", size.as_str().replace('_', "-")),
        NodePattern::kind(size).with_child(concept),
        move |forest, node, parent| {
            let Some(owner) = forest.detach_child(node, concept) else {
                return;
            };
            forest.replace(node, owner, parent);
            forest.insert_or_merge(owner, node);
        },
    )
}

const CIPHER_OWNERS: &[Kind] = &[
    Kind::Mac,
    Kind::PasswordBasedEncryption,
    Kind::KeyWrap,
    Kind::SecretKey,
];

const CIPHER_ATTRIBUTES: &[Kind] = &[Kind::Mode, Kind::Padding, Kind::BlockSize];

fn cipher_child(forest: &Forest, node: NodeId) -> Option<NodeId> {
    forest
        .children(node)
        .find(|(kind, _)| kind.is_cipher_shaped())
        .map(|(_, child)| child)
}

/// Loose mode, padding and block size next to a cipher belong to the cipher.
/// Attributes the cipher already has are dropped from the parent.
pub fn move_under_cipher() -> PredicateRule {
    PredicateRule::new(
        "move-under-cipher",
        |forest, node, _| {
            CIPHER_OWNERS.contains(&forest.kind(node))
                && cipher_child(forest, node).is_some()
                && CIPHER_ATTRIBUTES.iter().any(|k| forest.has_child(node, *k))
        },
        |forest, node, _| {
            let Some(cipher) = cipher_child(forest, node) else {
                return;
            };
            for kind in CIPHER_ATTRIBUTES {
                if let Some(attribute) = forest.detach_child(node, *kind) {
                    forest.insert_if_absent(cipher, attribute);
                }
            }
        },
    )
}

/// A functionality marker with children: the children belong to the
/// marker's parent.
pub fn flatten_markers() -> PredicateRule {
    PredicateRule::new(
        "flatten-markers",
        |forest, node, parent| {
            parent.is_some() && forest.kind(node).is_functionality() && forest.child_count(node) > 0
        },
        |forest, node, parent| {
            if let Some(parent) = parent {
                forest.move_children(node, parent);
            }
        },
    )
}

fn signature_parts(forest: &Forest, node: NodeId) -> Option<(String, String)> {
    let digest = forest.child_name(node, Kind::MessageDigest)?;
    let algorithm = [
        Kind::PublicKeyEncryption,
        Kind::Algorithm,
        Kind::EllipticCurveAlgorithm,
    ]
    .iter()
    .find_map(|kind| forest.child(node, *kind))
    .filter(|id| !forest.is_placeholder(*id))?;
    Some((digest.to_string(), forest.name(algorithm).to_string()))
}

/// A placeholder signature with a digest and a named algorithm child gets
/// its `DIGESTwithALGO` name on a fresh node holding all the children.
pub fn rename_from_children() -> PredicateRule {
    PredicateRule::new(
        "rename-from-children",
        |forest, node, _| {
            matches!(
                forest.kind(node),
                Kind::Signature | Kind::ProbabilisticSignatureScheme
            ) && forest.is_placeholder(node)
                && signature_parts(forest, node).is_some()
        },
        |forest, node, parent| {
            let Some((digest, algorithm)) = signature_parts(forest, node) else {
                return;
            };
            let kind = forest.kind(node);
            let mut name = signature_name(&digest, &algorithm);
            if kind == Kind::ProbabilisticSignatureScheme {
                name.push_str("/PSS");
            }
            let renamed = forest.add_node(kind, name, forest.location(node).clone());
            forest.set_origin(renamed, forest.origin(node));
            forest.move_children(node, renamed);
            forest.replace(node, renamed, parent);
        },
    )
}

/// Feedback modes whose bit size is the segment size of the mode.
const SEGMENTED_MODES: &[&str] = &["CFB", "OFB"];

fn segmented_mode(forest: &Forest, node: NodeId) -> Option<NodeId> {
    forest
        .child(node, Kind::Mode)
        .filter(|mode| SEGMENTED_MODES.contains(&forest.name(*mode)))
}

/// `CFBBlockCipher(engine, 8)` leaves the segment size on the cipher, while
/// `AES/CFB8` puts it under the mode. The mode form is the normal one.
pub fn block_size_under_mode() -> PredicateRule {
    PredicateRule::new(
        "block-size-under-mode",
        |forest, node, _| {
            forest.kind(node).is_cipher_shaped()
                && forest.has_child(node, Kind::BlockSize)
                && segmented_mode(forest, node)
                    .is_some_and(|mode| !forest.has_child(mode, Kind::BlockSize))
        },
        |forest, node, _| {
            let Some(mode) = segmented_mode(forest, node) else {
                return;
            };
            if let Some(size) = forest.detach_child(node, Kind::BlockSize) {
                forest.insert_if_absent(mode, size);
            }
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Asset, Location};
    use crate::reorganizer::apply_rule;
    use pretty_assertions::assert_eq;

    fn loc() -> Location {
        Location::default()
    }

    fn once(rule: &dyn ReorganizerRule, forest: &mut Forest) -> Vec<Asset> {
        apply_rule(rule, forest);
        forest.snapshot()
    }

    #[test]
    fn test_merge_unknown_keeps_outer_children() {
        let mut forest = Forest::new();
        let aead = forest.add_node(Kind::AuthenticatedEncryption, PLACEHOLDER, loc());
        forest.add_child(aead, Kind::Mode, "GCM", loc());
        forest.add_child(aead, Kind::TagLength, "128", loc());
        let aes = forest.add_child(aead, Kind::BlockCipher, "AES", loc());
        forest.add_child(aes, Kind::KeyLength, "256", loc());
        forest.push_root(aead);

        let rule = merge_unknown(Kind::AuthenticatedEncryption, Kind::BlockCipher);
        let assets = once(&rule, &mut forest);
        assert_eq!(assets.len(), 1);
        let cipher = &assets[0];
        assert_eq!(cipher.kind, Kind::BlockCipher);
        assert_eq!(cipher.name, "AES");
        assert_eq!(cipher.child_name(Kind::Mode), Some("GCM"));
        assert_eq!(cipher.child_name(Kind::TagLength), Some("128"));
        assert_eq!(cipher.child_name(Kind::KeyLength), Some("256"));
        assert_eq!(once(&rule, &mut forest), assets);
    }

    #[test]
    fn test_merge_unknown_under_parent() {
        let mut forest = Forest::new();
        let key = forest.add_node(Kind::SecretKey, "AES", loc());
        let outer = forest.add_child(key, Kind::BlockCipher, PLACEHOLDER, loc());
        forest.add_child(outer, Kind::Padding, "PKCS7", loc());
        forest.add_child(outer, Kind::BlockCipher, "AES", loc());
        forest.push_root(key);

        let assets = once(&merge_unknown(Kind::BlockCipher, Kind::BlockCipher), &mut forest);
        let cipher = assets[0].child(Kind::BlockCipher).unwrap();
        assert_eq!(cipher.name, "AES");
        assert_eq!(cipher.child_name(Kind::Padding), Some("PKCS7"));
        assert!(!cipher.has_child(Kind::BlockCipher));
    }

    #[test]
    fn test_invert_digest_size() {
        let mut forest = Forest::new();
        let mac = forest.add_node(Kind::Mac, "HMAC", loc());
        let size = forest.add_child(mac, Kind::DigestSize, "256", loc());
        forest.add_child(size, Kind::MessageDigest, "SHA3", loc());
        forest.push_root(mac);

        let rule = invert(Kind::DigestSize, Kind::MessageDigest);
        let assets = once(&rule, &mut forest);
        let mac = &assets[0];
        assert!(!mac.has_child(Kind::DigestSize));
        assert_eq!(
            mac.path(&[Kind::MessageDigest, Kind::DigestSize]).unwrap().name,
            "256"
        );
        assert_eq!(once(&rule, &mut forest), assets);
    }

    #[test]
    fn test_move_under_cipher_sibling() {
        let mut forest = Forest::new();
        let mac = forest.add_node(Kind::Mac, "CMAC", loc());
        forest.add_child(mac, Kind::BlockCipher, "AES", loc());
        forest.add_child(mac, Kind::Mode, "CBC", loc());
        forest.add_child(mac, Kind::Padding, "ISO7816-4", loc());
        forest.add_child(mac, Kind::BlockSize, "128", loc());
        forest.add_child(mac, Kind::TagLength, "64", loc());
        forest.push_root(mac);

        let rule = move_under_cipher();
        let assets = once(&rule, &mut forest);
        let kinds: Vec<Kind> = assets[0].children.iter().map(|c| c.kind).collect();
        assert_eq!(kinds, vec![Kind::BlockCipher, Kind::TagLength]);
        let cipher = assets[0].child(Kind::BlockCipher).unwrap();
        assert_eq!(cipher.children.len(), 3);
        assert_eq!(once(&rule, &mut forest), assets);
    }

    #[test]
    fn test_move_under_cipher_does_not_duplicate() {
        let mut forest = Forest::new();
        let pbe = forest.add_node(Kind::PasswordBasedEncryption, "PBEWithSHA256And256BitAES-CBC-BC", loc());
        let aes = forest.add_child(pbe, Kind::BlockCipher, "AES", loc());
        forest.add_child(aes, Kind::Mode, "CBC", loc());
        forest.add_child(pbe, Kind::Mode, "ECB", loc());
        forest.push_root(pbe);

        let assets = once(&move_under_cipher(), &mut forest);
        assert!(!assets[0].has_child(Kind::Mode));
        assert_eq!(
            assets[0].path(&[Kind::BlockCipher, Kind::Mode]).unwrap().name,
            "CBC"
        );
    }

    #[test]
    fn test_flatten_markers() {
        let mut forest = Forest::new();
        let aes = forest.add_node(Kind::BlockCipher, "AES", loc());
        let encrypt = forest.add_child(aes, Kind::Encrypt, "ENCRYPT", loc());
        forest.add_child(encrypt, Kind::SecretKey, "AES", loc());
        forest.push_root(aes);

        let rule = flatten_markers();
        let assets = once(&rule, &mut forest);
        assert!(assets[0].has_child(Kind::SecretKey));
        assert!(assets[0].child(Kind::Encrypt).unwrap().children.is_empty());
        assert_eq!(once(&rule, &mut forest), assets);
    }

    #[test]
    fn test_root_marker_is_left_alone() {
        let mut forest = Forest::new();
        let marker = forest.add_node(Kind::Sign, "SIGN", loc());
        forest.add_child(marker, Kind::Signature, "Ed25519", loc());
        forest.push_root(marker);
        assert_eq!(apply_rule(&flatten_markers(), &mut forest), 0);
    }

    #[test]
    fn test_rename_from_children() {
        let mut forest = Forest::new();
        let sig = forest.add_node(Kind::Signature, PLACEHOLDER, loc());
        forest.add_child(sig, Kind::MessageDigest, "SHA-512", loc());
        forest.add_child(sig, Kind::PublicKeyEncryption, "RSA", loc());
        forest.add_child(sig, Kind::Sign, "SIGN", loc());
        forest.push_root(sig);

        let rule = rename_from_children();
        let assets = once(&rule, &mut forest);
        assert_eq!(assets[0].name, "SHA512withRSA");
        assert_eq!(assets[0].children.len(), 3);
        assert_eq!(once(&rule, &mut forest), assets);
    }

    #[test]
    fn test_rename_requires_named_algorithm() {
        let mut forest = Forest::new();
        let sig = forest.add_node(Kind::Signature, PLACEHOLDER, loc());
        forest.add_child(sig, Kind::MessageDigest, "SHA-256", loc());
        forest.push_root(sig);
        assert_eq!(apply_rule(&rename_from_children(), &mut forest), 0);
    }

    #[test]
    fn test_block_size_moves_under_feedback_mode() {
        let mut forest = Forest::new();
        let aes = forest.add_node(Kind::BlockCipher, "AES", loc());
        forest.add_child(aes, Kind::Mode, "CFB", loc());
        forest.add_child(aes, Kind::BlockSize, "8", loc());
        forest.push_root(aes);

        let rule = block_size_under_mode();
        let assets = once(&rule, &mut forest);
        assert!(!assets[0].has_child(Kind::BlockSize));
        assert_eq!(
            assets[0].path(&[Kind::Mode, Kind::BlockSize]).unwrap().name,
            "8"
        );
        assert_eq!(apply_rule(&rule, &mut forest), 0);
    }

    #[test]
    fn test_block_size_stays_with_other_modes() {
        let mut forest = Forest::new();
        let aes = forest.add_node(Kind::BlockCipher, "AES", loc());
        forest.add_child(aes, Kind::Mode, "CBC", loc());
        forest.add_child(aes, Kind::BlockSize, "128", loc());
        forest.push_root(aes);

        assert_eq!(apply_rule(&block_size_under_mode(), &mut forest), 0);
        assert_eq!(forest.child_name(aes, Kind::BlockSize), Some("128"));
    }
}
