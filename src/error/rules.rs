use thiserror::Error;

/// Problems found while wiring a rule set together.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RuleGraphError {
    #[error("rule '{rule}' depends on unknown rule '{dependency}'")]
    UnknownDependency { rule: String, dependency: String },

    #[error("duplicate rule name: {name}")]
    DuplicateRule { name: String },

    #[error("dependency cycle: {}", path.join(" -> "))]
    Cycle { path: Vec<String> },
}

impl RuleGraphError {
    pub fn unknown_dependency(rule: impl Into<String>, dependency: impl Into<String>) -> Self {
        Self::UnknownDependency {
            rule: rule.into(),
            dependency: dependency.into(),
        }
    }

    pub fn duplicate_rule(name: impl Into<String>) -> Self {
        Self::DuplicateRule { name: name.into() }
    }
}
