use crate::engine::{DetectedValue, RawValue};
use crate::model::{Forest, Kind, NodeId};

use super::{algorithm, common};

pub fn translate(forest: &mut Forest, value: &DetectedValue) -> Option<NodeId> {
    match &value.value {
        RawValue::Algorithm(name) => algorithm::build_if(forest, name, &value.location, |kind| {
            matches!(
                kind,
                Kind::KeyDerivationFunction
                    | Kind::PasswordBasedKeyDerivationFunction
                    | Kind::PasswordBasedEncryption
            )
        }),
        _ => common::translate(forest, value),
    }
}

/// Random number generators share the shape of a derivation: one named
/// algorithm, optionally backed by a digest.
pub fn translate_prng(forest: &mut Forest, value: &DetectedValue) -> Option<NodeId> {
    match &value.value {
        RawValue::Algorithm(name) => algorithm::build_if(forest, name, &value.location, |kind| {
            kind == Kind::PseudorandomNumberGenerator
        }),
        _ => common::translate(forest, value),
    }
}
