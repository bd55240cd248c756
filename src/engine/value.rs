//! Raw values extracted by detection rules.
//!
//! These are API-level facts ("the first argument was the string
//! `AES/GCM/NoPadding`", "the key size was 256 bits"). The translator turns
//! them into canonical nodes.
use serde::Serialize;

use crate::model::Location;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SizeUnit {
    Bit,
    Byte,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Size {
    pub value: u32,
    pub unit: SizeUnit,
}

impl Size {
    pub fn new(value: u32, unit: SizeUnit) -> Self {
        Self { value, unit }
    }

    pub fn bits(value: u32) -> Self {
        Self::new(value, SizeUnit::Bit)
    }

    pub fn bytes(value: u32) -> Self {
        Self::new(value, SizeUnit::Byte)
    }

    /// Normalized size in bits.
    pub fn in_bits(&self) -> u32 {
        match self.unit {
            SizeUnit::Bit => self.value,
            SizeUnit::Byte => self.value.saturating_mul(8),
        }
    }
}

/// Operation mode passed to an `init`-style call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OperationMode {
    Encrypt,
    Decrypt,
    Wrap,
    Unwrap,
}

impl OperationMode {
    /// Integer constants used by `javax.crypto.Cipher`.
    pub fn from_constant(value: i64) -> Option<Self> {
        match value {
            1 => Some(Self::Encrypt),
            2 => Some(Self::Decrypt),
            3 => Some(Self::Wrap),
            4 => Some(Self::Unwrap),
            _ => None,
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.rsplit('.').next().unwrap_or(name);
        match name.to_ascii_uppercase().as_str() {
            "ENCRYPT_MODE" | "ENCRYPT" => Some(Self::Encrypt),
            "DECRYPT_MODE" | "DECRYPT" => Some(Self::Decrypt),
            "WRAP_MODE" | "WRAP" => Some(Self::Wrap),
            "UNWRAP_MODE" | "UNWRAP" => Some(Self::Unwrap),
            _ => None,
        }
    }
}

/// Operation implied by the method itself (e.g. `initSign`, `generateKey`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    Encrypt,
    Decrypt,
    Sign,
    Verify,
    Hash,
    Tag,
    Generate,
    Derive,
    Agree,
    Encapsulate,
    Decapsulate,
    Wrap,
    Unwrap,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RawValue {
    Algorithm(String),
    KeySize(Size),
    OperationMode(OperationMode),
    Action(Action),
    Mode(String),
    Padding(String),
    Curve(String),
    MacSize(Size),
    SaltSize(Size),
    TagSize(Size),
    DigestSize(Size),
    BlockSize(Size),
    IterationCount(u32),
    ParameterIdentifier(String),
}

impl RawValue {
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Algorithm(_) => "algorithm",
            Self::KeySize(_) => "key_size",
            Self::OperationMode(_) => "operation_mode",
            Self::Action(_) => "action",
            Self::Mode(_) => "mode",
            Self::Padding(_) => "padding",
            Self::Curve(_) => "curve",
            Self::MacSize(_) => "mac_size",
            Self::SaltSize(_) => "salt_size",
            Self::TagSize(_) => "tag_size",
            Self::DigestSize(_) => "digest_size",
            Self::BlockSize(_) => "block_size",
            Self::IterationCount(_) => "iteration_count",
            Self::ParameterIdentifier(_) => "parameter_identifier",
        }
    }
}

impl std::fmt::Display for RawValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Algorithm(s)
            | Self::Mode(s)
            | Self::Padding(s)
            | Self::Curve(s)
            | Self::ParameterIdentifier(s) => write!(f, "{s}"),
            Self::KeySize(size)
            | Self::MacSize(size)
            | Self::SaltSize(size)
            | Self::TagSize(size)
            | Self::DigestSize(size)
            | Self::BlockSize(size) => write!(f, "{}", size.in_bits()),
            Self::IterationCount(n) => write!(f, "{n}"),
            Self::OperationMode(mode) => write!(f, "{mode:?}"),
            Self::Action(action) => write!(f, "{action:?}"),
        }
    }
}

/// A raw value together with the call site it was read from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetectedValue {
    pub value: RawValue,
    pub location: Location,
}

impl DetectedValue {
    pub fn new(value: RawValue, location: Location) -> Self {
        Self { value, location }
    }
}
