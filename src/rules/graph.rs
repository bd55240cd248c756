//! Rule graph: named rules wired together by their dependencies.
//!
//! Rules refer to each other by name. Building a `RuleSet` resolves every
//! name to a `RuleId`, rejects duplicates and unknown names, and rejects
//! cycles so detection always terminates.
use serde::Serialize;
use std::collections::HashMap;
use tracing::debug;

use crate::error::RuleGraphError;
use crate::model::Convention;

use super::DetectionRule;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct RuleId(usize);

impl RuleId {
    pub fn index(&self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone)]
pub struct RuleSet {
    rules: Vec<DetectionRule>,
    by_name: HashMap<String, RuleId>,
    /// `[rule][parameter]` -> dependent rules.
    parameter_dependents: Vec<Vec<Vec<RuleId>>>,
    method_dependents: Vec<Vec<RuleId>>,
    entry_rules: Vec<RuleId>,
}

impl RuleSet {
    pub fn builder() -> RuleSetBuilder {
        RuleSetBuilder::new()
    }

    pub fn get(&self, id: RuleId) -> &DetectionRule {
        &self.rules[id.0]
    }

    pub fn find(&self, name: &str) -> Option<RuleId> {
        self.by_name.get(name).copied()
    }

    pub fn entry_rules(&self) -> &[RuleId] {
        &self.entry_rules
    }

    pub fn parameter_dependents(&self, id: RuleId, index: usize) -> &[RuleId] {
        self.parameter_dependents[id.0]
            .get(index)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    pub fn method_dependents(&self, id: RuleId) -> &[RuleId] {
        &self.method_dependents[id.0]
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (RuleId, &DetectionRule)> {
        self.rules.iter().enumerate().map(|(i, r)| (RuleId(i), r))
    }

    fn dependencies(&self, id: RuleId) -> impl Iterator<Item = RuleId> + '_ {
        self.parameter_dependents[id.0]
            .iter()
            .flatten()
            .chain(self.method_dependents[id.0].iter())
            .copied()
    }

    fn check_acyclic(&self) -> Result<(), RuleGraphError> {
        #[derive(Clone, Copy, PartialEq)]
        enum Mark {
            Unvisited,
            InProgress,
            Done,
        }

        fn visit(
            set: &RuleSet,
            id: RuleId,
            marks: &mut [Mark],
            stack: &mut Vec<RuleId>,
        ) -> Result<(), RuleGraphError> {
            match marks[id.0] {
                Mark::Done => return Ok(()),
                Mark::InProgress => {
                    let start = stack.iter().position(|s| *s == id).unwrap_or(0);
                    let mut path: Vec<String> = stack[start..]
                        .iter()
                        .map(|s| set.get(*s).name.clone())
                        .collect();
                    path.push(set.get(id).name.clone());
                    return Err(RuleGraphError::Cycle { path });
                }
                Mark::Unvisited => {}
            }

            marks[id.0] = Mark::InProgress;
            stack.push(id);
            for dep in set.dependencies(id) {
                visit(set, dep, marks, stack)?;
            }
            stack.pop();
            marks[id.0] = Mark::Done;
            Ok(())
        }

        let mut marks = vec![Mark::Unvisited; self.rules.len()];
        let mut stack = Vec::new();
        for index in 0..self.rules.len() {
            visit(self, RuleId(index), &mut marks, &mut stack)?;
        }
        Ok(())
    }
}

#[derive(Default)]
pub struct RuleSetBuilder {
    rules: Vec<DetectionRule>,
}

impl RuleSetBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rule(mut self, rule: DetectionRule) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn with_rules(mut self, rules: impl IntoIterator<Item = DetectionRule>) -> Self {
        self.rules.extend(rules);
        self
    }

    /// Keeps only rules declared under one of `conventions`.
    pub fn retain_conventions(mut self, conventions: &[Convention]) -> Self {
        self.rules.retain(|r| conventions.contains(&r.convention));
        self
    }

    pub fn build(self) -> Result<RuleSet, RuleGraphError> {
        let mut by_name = HashMap::with_capacity(self.rules.len());
        for (index, rule) in self.rules.iter().enumerate() {
            if by_name.insert(rule.name.clone(), RuleId(index)).is_some() {
                return Err(RuleGraphError::duplicate_rule(&rule.name));
            }
        }

        let lookup = |rule: &DetectionRule, names: &[String]| -> Result<Vec<RuleId>, RuleGraphError> {
            names
                .iter()
                .map(|name| {
                    by_name
                        .get(name)
                        .copied()
                        .ok_or_else(|| RuleGraphError::unknown_dependency(&rule.name, name))
                })
                .collect()
        };

        let mut parameter_dependents = Vec::with_capacity(self.rules.len());
        let mut method_dependents = Vec::with_capacity(self.rules.len());
        for rule in &self.rules {
            let params = rule
                .parameters
                .iter()
                .map(|p| lookup(rule, &p.depending_rules))
                .collect::<Result<Vec<_>, _>>()?;
            parameter_dependents.push(params);
            method_dependents.push(lookup(rule, &rule.method_dependents)?);
        }

        let entry_rules = self
            .rules
            .iter()
            .enumerate()
            .filter(|(_, r)| r.entry)
            .map(|(i, _)| RuleId(i))
            .collect();

        let set = RuleSet {
            rules: self.rules,
            by_name,
            parameter_dependents,
            method_dependents,
            entry_rules,
        };
        set.check_acyclic()?;

        debug!(
            rules = set.len(),
            entry_rules = set.entry_rules.len(),
            "built rule set"
        );
        Ok(set)
    }
}
