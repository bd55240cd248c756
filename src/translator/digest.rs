use crate::engine::{DetectedValue, RawValue};
use crate::model::{Forest, Kind, NodeId};

use super::{algorithm, common};

pub fn translate(forest: &mut Forest, value: &DetectedValue) -> Option<NodeId> {
    match &value.value {
        RawValue::Algorithm(name) => algorithm::build_if(forest, name, &value.location, |kind| {
            matches!(kind, Kind::MessageDigest | Kind::ExtendableOutputFunction)
        }),
        _ => common::translate(forest, value),
    }
}
