use crate::model::{Forest, Kind, NodeId};

use super::ReorganizerRule;

pub type Transform = Box<dyn Fn(&mut Forest, NodeId, Option<NodeId>) + Send + Sync>;
pub type Predicate = Box<dyn Fn(&Forest, NodeId, Option<NodeId>) -> bool + Send + Sync>;

/// Declarative match: a node kind, optionally a required display name, and
/// child kinds that must all be present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodePattern {
    pub kind: Kind,
    pub name: Option<String>,
    pub children: Vec<Kind>,
}

impl NodePattern {
    pub fn kind(kind: Kind) -> Self {
        Self {
            kind,
            name: None,
            children: Vec::new(),
        }
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_child(mut self, kind: Kind) -> Self {
        self.children.push(kind);
        self
    }

    pub fn matches(&self, forest: &Forest, node: NodeId) -> bool {
        forest.kind(node) == self.kind
            && self.name.as_deref().map_or(true, |n| forest.name(node) == n)
            && self.children.iter().all(|k| forest.has_child(node, *k))
    }
}

pub struct PatternRule {
    name: String,
    pattern: NodePattern,
    transform: Transform,
}

impl PatternRule {
    pub fn new(
        name: impl Into<String>,
        pattern: NodePattern,
        transform: impl Fn(&mut Forest, NodeId, Option<NodeId>) + Send + Sync + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            pattern,
            transform: Box::new(transform),
        }
    }

    pub fn pattern(&self) -> &NodePattern {
        &self.pattern
    }
}

impl ReorganizerRule for PatternRule {
    fn name(&self) -> &str {
        &self.name
    }

    fn matches(&self, forest: &Forest, node: NodeId, _parent: Option<NodeId>) -> bool {
        self.pattern.matches(forest, node)
    }

    fn apply(&self, forest: &mut Forest, node: NodeId, parent: Option<NodeId>) {
        (self.transform)(forest, node, parent)
    }
}

/// Free-form match for rules a `NodePattern` cannot express.
pub struct PredicateRule {
    name: String,
    predicate: Predicate,
    transform: Transform,
}

impl PredicateRule {
    pub fn new(
        name: impl Into<String>,
        predicate: impl Fn(&Forest, NodeId, Option<NodeId>) -> bool + Send + Sync + 'static,
        transform: impl Fn(&mut Forest, NodeId, Option<NodeId>) + Send + Sync + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            predicate: Box::new(predicate),
            transform: Box::new(transform),
        }
    }
}

impl ReorganizerRule for PredicateRule {
    fn name(&self) -> &str {
        &self.name
    }

    fn matches(&self, forest: &Forest, node: NodeId, parent: Option<NodeId>) -> bool {
        (self.predicate)(forest, node, parent)
    }

    fn apply(&self, forest: &mut Forest, node: NodeId, parent: Option<NodeId>) {
        (self.transform)(forest, node, parent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Location, PLACEHOLDER};

    #[test]
    fn test_node_pattern_requires_all_children() {
        let mut forest = Forest::new();
        let mac = forest.add_node(Kind::Mac, PLACEHOLDER, Location::default());
        forest.add_child(mac, Kind::Mac, "HMAC", Location::default());

        let pattern = NodePattern::kind(Kind::Mac)
            .named(PLACEHOLDER)
            .with_child(Kind::Mac);
        assert!(pattern.matches(&forest, mac));
        assert!(!pattern.clone().with_child(Kind::TagLength).matches(&forest, mac));
        assert!(!NodePattern::kind(Kind::Mac).named("CMAC").matches(&forest, mac));
    }
}
