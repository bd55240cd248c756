//! Context-independent raw values: sizes, modes, paddings, curves and the
//! functionality markers produced by operation modes and actions.
use crate::engine::{Action, DetectedValue, OperationMode, RawValue, Size};
use crate::model::{Forest, Kind, Location, NodeId};

use super::algorithm;

pub fn marker_kind_for_action(action: Action) -> Kind {
    match action {
        Action::Encrypt => Kind::Encrypt,
        Action::Decrypt => Kind::Decrypt,
        Action::Sign => Kind::Sign,
        Action::Verify => Kind::Verify,
        Action::Hash => Kind::Digest,
        Action::Tag => Kind::Tag,
        Action::Generate => Kind::KeyGeneration,
        Action::Derive => Kind::KeyDerivation,
        Action::Agree => Kind::KeyAgreementFunction,
        Action::Encapsulate => Kind::Encapsulate,
        Action::Decapsulate => Kind::Decapsulate,
        Action::Wrap => Kind::Wrap,
        Action::Unwrap => Kind::Unwrap,
    }
}

pub fn marker_kind_for_mode(mode: OperationMode) -> Kind {
    match mode {
        OperationMode::Encrypt => Kind::Encrypt,
        OperationMode::Decrypt => Kind::Decrypt,
        OperationMode::Wrap => Kind::Wrap,
        OperationMode::Unwrap => Kind::Unwrap,
    }
}

/// Functionality markers are named after their kind: `ENCRYPT`, `KEY_GENERATION`.
pub fn marker(forest: &mut Forest, kind: Kind, location: &Location) -> NodeId {
    forest.add_node(kind, kind.as_str().to_uppercase(), location.clone())
}

/// Size attributes are always recorded in bits.
pub fn size(forest: &mut Forest, kind: Kind, size: &Size, location: &Location) -> NodeId {
    forest.add_node(kind, size.in_bits().to_string(), location.clone())
}

pub fn translate(forest: &mut Forest, value: &DetectedValue) -> Option<NodeId> {
    let location = &value.location;
    match &value.value {
        RawValue::Algorithm(_) => None,
        RawValue::KeySize(s) => Some(size(forest, Kind::KeyLength, s, location)),
        RawValue::MacSize(s) | RawValue::TagSize(s) => {
            Some(size(forest, Kind::TagLength, s, location))
        }
        RawValue::SaltSize(s) => Some(size(forest, Kind::SaltLength, s, location)),
        RawValue::DigestSize(s) => Some(size(forest, Kind::DigestSize, s, location)),
        RawValue::BlockSize(s) => Some(size(forest, Kind::BlockSize, s, location)),
        RawValue::IterationCount(n) => Some(forest.add_node(
            Kind::IterationCount,
            n.to_string(),
            location.clone(),
        )),
        RawValue::OperationMode(mode) => {
            Some(marker(forest, marker_kind_for_mode(*mode), location))
        }
        RawValue::Action(action) => Some(marker(forest, marker_kind_for_action(*action), location)),
        RawValue::Mode(name) => algorithm::mode(forest, name, location),
        RawValue::Padding(name) => algorithm::padding(forest, name, location),
        RawValue::Curve(name) => Some(algorithm::curve(forest, name, location)),
        RawValue::ParameterIdentifier(id) => Some(forest.add_node(
            Kind::ParameterSetIdentifier,
            id.trim(),
            location.clone(),
        )),
    }
}
