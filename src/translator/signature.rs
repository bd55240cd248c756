//! Signature and probabilistic signature scheme contexts.
//!
//! An algorithm that is only a signature's building block (`RSA`, `ECDSA`)
//! is wrapped in a placeholder signature; the display name is derived once
//! the digest is known.
use crate::engine::{DetectedValue, RawValue};
use crate::model::{Forest, Kind, NodeId};
use crate::rules::SignatureKind;

use super::{algorithm, common};

fn wrapper_kind(context: SignatureKind) -> Kind {
    match context {
        SignatureKind::Generic => Kind::Signature,
        SignatureKind::Probabilistic => Kind::ProbabilisticSignatureScheme,
    }
}

pub fn translate(
    forest: &mut Forest,
    context: SignatureKind,
    value: &DetectedValue,
) -> Option<NodeId> {
    let location = &value.location;
    let name = match &value.value {
        RawValue::Algorithm(name) => name,
        _ => return common::translate(forest, value),
    };

    let id = algorithm::build(forest, name, location)?;
    match (forest.kind(id), context) {
        (Kind::Signature | Kind::ProbabilisticSignatureScheme, _) => Some(id),
        (Kind::MessageDigest | Kind::MaskGenerationFunction, SignatureKind::Probabilistic) => {
            Some(id)
        }
        (Kind::PublicKeyEncryption | Kind::Algorithm | Kind::EllipticCurveAlgorithm, _) => {
            let signature = algorithm::placeholder(forest, wrapper_kind(context), location);
            forest.insert_or_merge(signature, id);
            Some(signature)
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Location, PLACEHOLDER};

    fn algorithm(name: &str) -> DetectedValue {
        DetectedValue::new(RawValue::Algorithm(name.into()), Location::default())
    }

    #[test]
    fn test_composite_signature_name() {
        let mut forest = Forest::new();
        let id = translate(&mut forest, SignatureKind::Generic, &algorithm("SHA512withRSA")).unwrap();
        assert_eq!(forest.kind(id), Kind::Signature);
        assert_eq!(forest.child_name(id, Kind::PublicKeyEncryption), Some("RSA"));
    }

    #[test]
    fn test_bare_rsa_is_wrapped() {
        let mut forest = Forest::new();
        let id = translate(&mut forest, SignatureKind::Generic, &algorithm("RSA")).unwrap();
        assert_eq!(forest.kind(id), Kind::Signature);
        assert_eq!(forest.name(id), PLACEHOLDER);
        assert!(forest.has_child(id, Kind::PublicKeyEncryption));
    }

    #[test]
    fn test_pss_parameters_accept_digests() {
        let mut forest = Forest::new();
        let id = translate(&mut forest, SignatureKind::Probabilistic, &algorithm("SHA-256")).unwrap();
        assert_eq!(forest.kind(id), Kind::MessageDigest);
        assert!(translate(&mut forest, SignatureKind::Generic, &algorithm("SHA-256")).is_none());
    }
}
