use crate::engine::{Literal, OperationMode, RawValue, Size, SizeUnit};
use crate::utils::unquote_string;

/// Turns a resolved literal argument into a typed raw value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueFactory {
    Algorithm,
    KeySize(SizeUnit),
    OperationMode,
    Mode,
    Padding,
    Curve,
    MacSize(SizeUnit),
    SaltSize(SizeUnit),
    TagSize(SizeUnit),
    DigestSize(SizeUnit),
    BlockSize(SizeUnit),
    IterationCount,
    ParameterIdentifier,
}

impl ValueFactory {
    /// Returns `None` when the literal has the wrong shape for this factory
    /// (a string where a size is expected, a non-positive size, ...).
    pub fn create(&self, literal: &Literal) -> Option<RawValue> {
        match self {
            Self::Algorithm => text(literal).map(RawValue::Algorithm),
            Self::Mode => text(literal).map(RawValue::Mode),
            Self::Padding => text(literal).map(RawValue::Padding),
            Self::Curve => text(literal).map(RawValue::Curve),
            Self::ParameterIdentifier => text(literal).map(RawValue::ParameterIdentifier),
            Self::KeySize(unit) => size(literal, *unit).map(RawValue::KeySize),
            Self::MacSize(unit) => size(literal, *unit).map(RawValue::MacSize),
            Self::SaltSize(unit) => size(literal, *unit).map(RawValue::SaltSize),
            Self::TagSize(unit) => size(literal, *unit).map(RawValue::TagSize),
            Self::DigestSize(unit) => size(literal, *unit).map(RawValue::DigestSize),
            Self::BlockSize(unit) => size(literal, *unit).map(RawValue::BlockSize),
            Self::IterationCount => positive(literal).map(RawValue::IterationCount),
            Self::OperationMode => match literal {
                Literal::Int(v) => OperationMode::from_constant(*v),
                Literal::Str(s) => OperationMode::from_name(&unquote_string(s)),
                Literal::Bool(_) => None,
            }
            .map(RawValue::OperationMode),
        }
    }
}

fn text(literal: &Literal) -> Option<String> {
    let value = unquote_string(literal.as_str()?);
    (!value.is_empty()).then_some(value)
}

fn positive(literal: &Literal) -> Option<u32> {
    literal
        .as_int()
        .filter(|v| *v > 0)
        .and_then(|v| u32::try_from(v).ok())
}

fn size(literal: &Literal, unit: SizeUnit) -> Option<Size> {
    positive(literal).map(|v| Size::new(v, unit))
}
