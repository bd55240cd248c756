use crate::engine::{DetectedValue, RawValue};
use crate::model::{Forest, Kind, NodeId};

use super::{algorithm, common};

pub fn translate(forest: &mut Forest, value: &DetectedValue) -> Option<NodeId> {
    match &value.value {
        RawValue::Algorithm(name) => {
            algorithm::build_if(forest, name, &value.location, |kind| kind == Kind::KeyAgreement)
        }
        _ => common::translate(forest, value),
    }
}

/// KEM names carry their parameter set (`ML-KEM-768`).
pub fn translate_kem(forest: &mut Forest, value: &DetectedValue) -> Option<NodeId> {
    match &value.value {
        RawValue::Algorithm(name) => algorithm::build_if(forest, name, &value.location, |kind| {
            kind == Kind::KeyEncapsulationMechanism
        }),
        _ => common::translate(forest, value),
    }
}
