use crate::engine::CONSTRUCTOR;
use crate::utils::extract_last_segment;

use super::ValueFactory;

/// Matches the statically known receiver type of a call.
///
/// Fully qualified names match exactly. A receiver reported without a
/// package (`Cipher`) matches on the simple name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypePattern {
    Any,
    Exact(String),
    OneOf(Vec<String>),
    /// Any receiver whose name ends with the suffix, e.g. `Digest` for the
    /// BouncyCastle digest family.
    Suffix(String),
}

impl TypePattern {
    pub fn exact(name: impl Into<String>) -> Self {
        Self::Exact(name.into())
    }

    pub fn one_of(names: &[&str]) -> Self {
        Self::OneOf(names.iter().map(|n| n.to_string()).collect())
    }

    pub fn matches(&self, receiver_type: &str) -> bool {
        match self {
            Self::Any => true,
            Self::Exact(name) => type_matches(name, receiver_type),
            Self::OneOf(names) => names.iter().any(|n| type_matches(n, receiver_type)),
            Self::Suffix(suffix) => receiver_type.ends_with(suffix.as_str()),
        }
    }
}

fn type_matches(pattern: &str, receiver_type: &str) -> bool {
    if pattern == receiver_type {
        return true;
    }
    let qualified = receiver_type.contains(['.', '/', ':']);
    !qualified && extract_last_segment(pattern) == receiver_type
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MethodPattern {
    Any,
    Named(String),
    OneOf(Vec<String>),
    Constructor,
}

impl MethodPattern {
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }

    pub fn one_of(names: &[&str]) -> Self {
        Self::OneOf(names.iter().map(|n| n.to_string()).collect())
    }

    pub fn matches(&self, method: &str) -> bool {
        match self {
            Self::Any => true,
            Self::Named(name) => name == method,
            Self::OneOf(names) => names.iter().any(|n| n == method),
            Self::Constructor => method == CONSTRUCTOR,
        }
    }
}

/// One positional parameter of a rule.
///
/// A pattern without a factory accepts any argument. With a factory, a
/// literal argument must convert into a raw value, and a call argument must
/// be matched by one of `depending_rules`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParameterPattern {
    pub detect: Option<ValueFactory>,
    pub depending_rules: Vec<String>,
}

impl ParameterPattern {
    pub fn any() -> Self {
        Self::default()
    }

    pub fn detect(factory: ValueFactory) -> Self {
        Self {
            detect: Some(factory),
            depending_rules: Vec::new(),
        }
    }

    pub fn depending_on(mut self, rules: &[&str]) -> Self {
        self.depending_rules
            .extend(rules.iter().map(|r| r.to_string()));
        self
    }

    pub fn is_required(&self) -> bool {
        self.detect.is_some()
    }
}
