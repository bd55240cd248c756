//! Declarative detection rules and the rule graph that wires them together.

pub mod catalog;
mod context;
mod factory;
mod graph;
mod pattern;
mod rule;

pub use context::{CipherKind, DetectionContext, KeyKind, SignatureKind};
pub use factory::ValueFactory;
pub use graph::{RuleId, RuleSet, RuleSetBuilder};
pub use pattern::{MethodPattern, ParameterPattern, TypePattern};
pub use rule::{DetectionRule, DetectionRuleBuilder};
