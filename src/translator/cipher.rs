use crate::engine::{DetectedValue, RawValue};
use crate::model::{Forest, Kind, NodeId};
use crate::rules::CipherKind;

use super::{algorithm, common};

fn accepts(kind: Kind) -> bool {
    matches!(
        kind,
        Kind::Cipher
            | Kind::BlockCipher
            | Kind::StreamCipher
            | Kind::AuthenticatedEncryption
            | Kind::PublicKeyEncryption
            | Kind::KeyWrap
            | Kind::PasswordBasedEncryption
    )
}

/// Kind of the placeholder a bare mode or padding is wrapped in, when the
/// cipher itself comes from a nested detection.
fn wrapper_kind(context: CipherKind) -> Option<Kind> {
    match context {
        CipherKind::BlockCipher => Some(Kind::BlockCipher),
        CipherKind::StreamCipher => Some(Kind::StreamCipher),
        CipherKind::Aead => Some(Kind::AuthenticatedEncryption),
        _ => None,
    }
}

pub fn translate(forest: &mut Forest, context: CipherKind, value: &DetectedValue) -> Option<NodeId> {
    let location = &value.location;
    match &value.value {
        RawValue::Algorithm(name) => algorithm::build_if(forest, name, location, accepts),
        RawValue::Mode(_) | RawValue::Padding(_) => {
            let attribute = common::translate(forest, value)?;
            let wrapper = match (&value.value, context) {
                (RawValue::Padding(_), CipherKind::BlockCipher) => Some(Kind::BlockCipher),
                (RawValue::Mode(_), context) => wrapper_kind(context),
                _ => None,
            };
            match wrapper {
                Some(kind) => {
                    let cipher = algorithm::placeholder(forest, kind, location);
                    forest.insert_or_merge(cipher, attribute);
                    Some(cipher)
                }
                None => Some(attribute),
            }
        }
        _ => common::translate(forest, value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Location, PLACEHOLDER};

    fn value(raw: RawValue) -> DetectedValue {
        DetectedValue::new(raw, Location::default())
    }

    #[test]
    fn test_transformation_string() {
        let mut forest = Forest::new();
        let id = translate(
            &mut forest,
            CipherKind::Generic,
            &value(RawValue::Algorithm("AES/GCM/NoPadding".into())),
        )
        .unwrap();
        assert_eq!(forest.kind(id), Kind::BlockCipher);
        assert_eq!(forest.child_name(id, Kind::Mode), Some("GCM"));
    }

    #[test]
    fn test_non_cipher_algorithm_is_dropped() {
        let mut forest = Forest::new();
        let id = translate(
            &mut forest,
            CipherKind::Generic,
            &value(RawValue::Algorithm("SHA-256".into())),
        );
        assert!(id.is_none());
    }

    #[test]
    fn test_mode_in_block_context_is_wrapped() {
        let mut forest = Forest::new();
        let id = translate(
            &mut forest,
            CipherKind::Aead,
            &value(RawValue::Mode("GCM".into())),
        )
        .unwrap();
        assert_eq!(forest.kind(id), Kind::AuthenticatedEncryption);
        assert_eq!(forest.name(id), PLACEHOLDER);
        assert_eq!(forest.child_name(id, Kind::Mode), Some("GCM"));
    }

    #[test]
    fn test_padding_outside_block_context_is_bare() {
        let mut forest = Forest::new();
        let id = translate(
            &mut forest,
            CipherKind::Generic,
            &value(RawValue::Padding("PKCS7".into())),
        )
        .unwrap();
        assert_eq!(forest.kind(id), Kind::Padding);
    }
}
