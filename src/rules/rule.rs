use crate::engine::RawValue;
use crate::model::Convention;

use super::{DetectionContext, MethodPattern, ParameterPattern, TypePattern};

/// Declarative description of one API call shape.
///
/// Dependencies are referenced by rule name and resolved when the rule set
/// is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetectionRule {
    pub name: String,
    pub convention: Convention,
    pub context: DetectionContext,
    pub type_pattern: TypePattern,
    pub method_pattern: MethodPattern,
    pub parameters: Vec<ParameterPattern>,
    /// Skips the arity check and every parameter pattern.
    pub any_arguments: bool,
    /// Values reported whenever the rule matches, independent of arguments.
    pub method_values: Vec<RawValue>,
    /// Rules tried against the calls made on this call's result.
    pub method_dependents: Vec<String>,
    pub entry: bool,
}

impl DetectionRule {
    pub fn builder(
        name: impl Into<String>,
        convention: Convention,
        context: DetectionContext,
    ) -> DetectionRuleBuilder {
        DetectionRuleBuilder::new(name.into(), convention, context)
    }

    /// Two rules with the same signature compete for the same call site.
    pub fn same_signature(&self, other: &DetectionRule) -> bool {
        self.type_pattern == other.type_pattern && self.method_pattern == other.method_pattern
    }

    pub fn dependency_names(&self) -> impl Iterator<Item = &str> {
        self.parameters
            .iter()
            .flat_map(|p| p.depending_rules.iter())
            .chain(self.method_dependents.iter())
            .map(|s| s.as_str())
    }
}

pub struct DetectionRuleBuilder {
    rule: DetectionRule,
}

impl DetectionRuleBuilder {
    fn new(name: String, convention: Convention, context: DetectionContext) -> Self {
        Self {
            rule: DetectionRule {
                name,
                convention,
                context,
                type_pattern: TypePattern::Any,
                method_pattern: MethodPattern::Any,
                parameters: Vec::new(),
                any_arguments: false,
                method_values: Vec::new(),
                method_dependents: Vec::new(),
                entry: false,
            },
        }
    }

    pub fn for_type(mut self, pattern: TypePattern) -> Self {
        self.rule.type_pattern = pattern;
        self
    }

    pub fn for_types(self, names: &[&str]) -> Self {
        self.for_type(TypePattern::one_of(names))
    }

    pub fn method(mut self, pattern: MethodPattern) -> Self {
        self.rule.method_pattern = pattern;
        self
    }

    pub fn named(self, method: &str) -> Self {
        self.method(MethodPattern::named(method))
    }

    pub fn param(mut self, pattern: ParameterPattern) -> Self {
        self.rule.parameters.push(pattern);
        self
    }

    pub fn any_arguments(mut self) -> Self {
        self.rule.any_arguments = true;
        self
    }

    pub fn produces(mut self, value: RawValue) -> Self {
        self.rule.method_values.push(value);
        self
    }

    pub fn then(mut self, rules: &[&str]) -> Self {
        self.rule
            .method_dependents
            .extend(rules.iter().map(|r| r.to_string()));
        self
    }

    pub fn entry(mut self) -> Self {
        self.rule.entry = true;
        self
    }

    pub fn build(self) -> DetectionRule {
        self.rule
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::{CipherKind, ValueFactory};

    #[test]
    fn test_builder_collects_dependencies() {
        let rule = DetectionRule::builder(
            "cipher.init",
            Convention::Jca,
            DetectionContext::Cipher(CipherKind::Generic),
        )
        .for_type(TypePattern::exact("javax.crypto.Cipher"))
        .named("init")
        .param(ParameterPattern::detect(ValueFactory::OperationMode))
        .param(ParameterPattern::any().depending_on(&["key.spec"]))
        .then(&["cipher.final"])
        .build();

        assert!(!rule.entry);
        assert_eq!(rule.parameters.len(), 2);
        let deps: Vec<&str> = rule.dependency_names().collect();
        assert_eq!(deps, vec!["key.spec", "cipher.final"]);
    }

    #[test]
    fn test_same_signature() {
        let context = DetectionContext::Digest;
        let a = DetectionRule::builder("a", Convention::Jca, context)
            .for_type(TypePattern::exact("java.security.MessageDigest"))
            .named("getInstance")
            .build();
        let b = DetectionRule::builder("b", Convention::Jca, context)
            .for_type(TypePattern::exact("java.security.MessageDigest"))
            .named("getInstance")
            .param(ParameterPattern::any())
            .build();
        let c = DetectionRule::builder("c", Convention::Jca, context)
            .named("digest")
            .build();
        assert!(a.same_signature(&b));
        assert!(!a.same_signature(&c));
    }
}
