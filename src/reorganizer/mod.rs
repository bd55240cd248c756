//! Rewrites the canonical forest into one normal form per concept.
//!
//! Rules run in list order, each once over the whole forest. Every rule walks
//! the forest post-order so nested matches are normalised before their
//! parents are looked at, and re-running a rule on its own output changes
//! nothing.
mod pattern;
pub mod rules;

pub use pattern::{NodePattern, PatternRule, PredicateRule};

use tracing::{debug, trace};

use crate::model::{Forest, NodeId};

pub trait ReorganizerRule: Send + Sync {
    fn name(&self) -> &str;
    fn matches(&self, forest: &Forest, node: NodeId, parent: Option<NodeId>) -> bool;
    /// Rewrites around `node`. The forest owns the root list, so splicing a
    /// replacement into the roots happens through it.
    fn apply(&self, forest: &mut Forest, node: NodeId, parent: Option<NodeId>);
}

/// Applies one rule over the whole forest; returns the number of rewrites.
pub fn apply_rule(rule: &dyn ReorganizerRule, forest: &mut Forest) -> usize {
    let mut applied = 0;
    for (node, parent) in forest.walk_post_order() {
        if !forest.is_placed(node, parent) || !rule.matches(forest, node, parent) {
            continue;
        }
        trace!(rule = rule.name(), node = forest.name(node), "rewriting");
        rule.apply(forest, node, parent);
        applied += 1;
    }
    applied
}

pub struct Reorganizer {
    rules: Vec<Box<dyn ReorganizerRule>>,
}

impl Reorganizer {
    pub fn new() -> Self {
        Self {
            rules: rules::default_rules(),
        }
    }

    pub fn builder() -> ReorganizerBuilder {
        ReorganizerBuilder::new()
    }

    pub fn reorganize(&self, forest: &mut Forest) -> usize {
        let mut total = 0;
        for rule in &self.rules {
            let applied = apply_rule(rule.as_ref(), forest);
            if applied > 0 {
                debug!(rule = rule.name(), count = applied, "reorganized");
            }
            total += applied;
        }
        total
    }

    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    pub fn rule_names(&self) -> Vec<&str> {
        self.rules.iter().map(|r| r.name()).collect()
    }
}

impl Default for Reorganizer {
    fn default() -> Self {
        Self::new()
    }
}

pub struct ReorganizerBuilder {
    rules: Vec<Box<dyn ReorganizerRule>>,
    include_defaults: bool,
}

impl ReorganizerBuilder {
    pub fn new() -> Self {
        Self {
            rules: Vec::new(),
            include_defaults: true,
        }
    }

    /// Custom rules run after the defaults, unless defaults are disabled.
    pub fn with_rule<R: ReorganizerRule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    pub fn with_rules(mut self, rules: impl IntoIterator<Item = Box<dyn ReorganizerRule>>) -> Self {
        self.rules.extend(rules);
        self
    }

    pub fn without_defaults(mut self) -> Self {
        self.include_defaults = false;
        self
    }

    pub fn build(self) -> Reorganizer {
        let mut rules = if self.include_defaults {
            rules::default_rules()
        } else {
            Vec::new()
        };
        rules.extend(self.rules);
        Reorganizer { rules }
    }
}

impl Default for ReorganizerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
