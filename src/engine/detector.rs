use tracing::{debug, trace};

use crate::rules::{DetectionRule, RuleId, RuleSet};

use super::{
    CallSite, DetectedValue, DetectionStore, Resolution, Resolver, Slot, DEFAULT_MAX_DEPTH,
};

/// Matches call sites against a rule set.
///
/// Entry rules are tried in declaration order at the top level and the first
/// full match wins. Dependent rules are tried against every nested call or
/// follow-up, with a per-site guard so two rules with the same type/method
/// signature do not both claim one site.
pub struct DetectionEngine<'r> {
    rules: &'r RuleSet,
    resolver: Resolver,
    max_depth: usize,
}

impl<'r> DetectionEngine<'r> {
    pub fn new(rules: &'r RuleSet) -> Self {
        Self {
            rules,
            resolver: Resolver::new(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Bounds both symbol tracing and rule nesting.
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.resolver = Resolver::builder().with_max_depth(depth).build();
        self.max_depth = depth;
        self
    }

    pub fn rules(&self) -> &RuleSet {
        self.rules
    }

    pub fn detect(&self, call: &CallSite) -> Option<DetectionStore> {
        let found = self
            .rules
            .entry_rules()
            .iter()
            .find_map(|id| self.match_rule(*id, call, 0));

        match &found {
            Some(store) => debug!(
                rule = %store.rule,
                call = %call.full_name(),
                location = %call.location,
                "detected"
            ),
            None => trace!(call = %call.full_name(), "no rule matched"),
        }
        found
    }

    pub fn detect_all<'c>(&self, calls: impl IntoIterator<Item = &'c CallSite>) -> Vec<DetectionStore> {
        calls.into_iter().filter_map(|c| self.detect(c)).collect()
    }

    fn match_rule(&self, id: RuleId, call: &CallSite, depth: usize) -> Option<DetectionStore> {
        if depth >= self.max_depth {
            return None;
        }

        let rule = self.rules.get(id);
        if !self.shape_matches(rule, call) {
            return None;
        }

        let mut store = DetectionStore::new(
            &rule.name,
            id,
            rule.context,
            rule.convention,
            call.location.clone(),
        );

        if !rule.any_arguments {
            for (index, (pattern, argument)) in
                rule.parameters.iter().zip(&call.arguments).enumerate()
            {
                let slot = Slot::Parameter(index);
                let dependents = self.rules.parameter_dependents(id, index);
                match self.resolver.resolve(argument) {
                    Resolution::Literal(literal) => {
                        if let Some(factory) = &pattern.detect {
                            let value = factory.create(literal)?;
                            store.push_value(slot, DetectedValue::new(value, call.location.clone()));
                        }
                    }
                    Resolution::Call(nested) => {
                        let matched = self.match_dependents(dependents, &[nested], depth);
                        if pattern.is_required() && matched.is_empty() {
                            return None;
                        }
                        store.add_children(slot, matched);
                    }
                    Resolution::Unresolved(source) => {
                        if pattern.is_required() {
                            trace!(
                                rule = %rule.name,
                                parameter = index,
                                %source,
                                "required argument unresolved"
                            );
                            return None;
                        }
                    }
                }
            }
        }

        for value in &rule.method_values {
            store.push_value(
                Slot::Method,
                DetectedValue::new(value.clone(), call.location.clone()),
            );
        }

        let follow_ups: Vec<&CallSite> = call.follow_ups.iter().collect();
        let matched = self.match_dependents(self.rules.method_dependents(id), &follow_ups, depth);
        store.add_children(Slot::Method, matched);

        Some(store)
    }

    fn shape_matches(&self, rule: &DetectionRule, call: &CallSite) -> bool {
        rule.type_pattern.matches(&call.receiver_type)
            && rule.method_pattern.matches(&call.method)
            && (rule.any_arguments || rule.parameters.len() == call.arguments.len())
    }

    fn match_dependents(
        &self,
        rules: &[RuleId],
        sites: &[&CallSite],
        depth: usize,
    ) -> Vec<DetectionStore> {
        let mut out = Vec::new();
        for site in sites {
            let mut claimed: Vec<&DetectionRule> = Vec::new();
            for id in rules {
                let rule = self.rules.get(*id);
                if claimed.iter().any(|c| c.same_signature(rule)) {
                    continue;
                }
                if let Some(store) = self.match_rule(*id, site, depth + 1) {
                    claimed.push(rule);
                    out.push(store);
                }
            }
        }
        out
    }
}
