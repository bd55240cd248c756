use std::collections::BTreeMap;

use crate::model::{Convention, Location};
use crate::rules::{DetectionContext, RuleId};

use super::DetectedValue;

/// Where a value or a nested detection came from: a positional argument or
/// the method itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Slot {
    Parameter(usize),
    Method,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredValue {
    pub slot: Slot,
    pub value: DetectedValue,
}

/// Everything one rule match produced, with nested matches keyed by slot.
///
/// Values are kept in the order the detector recorded them: parameter values
/// by position, then method-level values.
#[derive(Debug, Clone, PartialEq)]
pub struct DetectionStore {
    pub rule: String,
    pub rule_id: RuleId,
    pub context: DetectionContext,
    pub convention: Convention,
    pub location: Location,
    pub values: Vec<StoredValue>,
    pub children: BTreeMap<Slot, Vec<DetectionStore>>,
}

impl DetectionStore {
    pub fn new(
        rule: impl Into<String>,
        rule_id: RuleId,
        context: DetectionContext,
        convention: Convention,
        location: Location,
    ) -> Self {
        Self {
            rule: rule.into(),
            rule_id,
            context,
            convention,
            location,
            values: Vec::new(),
            children: BTreeMap::new(),
        }
    }

    pub fn push_value(&mut self, slot: Slot, value: DetectedValue) {
        self.values.push(StoredValue { slot, value });
    }

    pub fn add_children(&mut self, slot: Slot, stores: Vec<DetectionStore>) {
        if !stores.is_empty() {
            self.children.entry(slot).or_default().extend(stores);
        }
    }

    pub fn values_in(&self, slot: Slot) -> impl Iterator<Item = &DetectedValue> {
        self.values
            .iter()
            .filter(move |v| v.slot == slot)
            .map(|v| &v.value)
    }

    pub fn children_in(&self, slot: Slot) -> &[DetectionStore] {
        self.children.get(&slot).map(|v| v.as_slice()).unwrap_or(&[])
    }

    /// This store and every nested store, depth first.
    pub fn walk(&self) -> Vec<&DetectionStore> {
        let mut out = vec![self];
        for stores in self.children.values() {
            for store in stores {
                out.extend(store.walk());
            }
        }
        out
    }

    /// Every recorded value in the tree, paired with the store holding it.
    pub fn flatten(&self) -> Vec<(&DetectionStore, &DetectedValue)> {
        self.walk()
            .into_iter()
            .flat_map(|store| store.values.iter().map(move |v| (store, &v.value)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::RawValue;
    use crate::rules::RuleSet;

    fn store(rule: &str) -> DetectionStore {
        let id = RuleSet::standard().unwrap().find("jca.cipher.get_instance").unwrap();
        DetectionStore::new(
            rule,
            id,
            DetectionContext::Digest,
            Convention::Jca,
            Location::default(),
        )
    }

    fn value(name: &str) -> DetectedValue {
        DetectedValue::new(RawValue::Algorithm(name.to_string()), Location::default())
    }

    #[test]
    fn test_flatten_walks_nested_stores() {
        let mut root = store("root");
        root.push_value(Slot::Parameter(0), value("AES"));
        let mut nested = store("nested");
        nested.push_value(Slot::Method, value("SHA-256"));
        root.add_children(Slot::Parameter(1), vec![nested]);

        let flat: Vec<String> = root
            .flatten()
            .into_iter()
            .map(|(s, v)| format!("{}:{}", s.rule, v.value))
            .collect();
        assert_eq!(flat, vec!["root:AES", "nested:SHA-256"]);
    }

    #[test]
    fn test_empty_children_not_recorded() {
        let mut root = store("root");
        root.add_children(Slot::Method, vec![]);
        assert!(root.children.is_empty());
        assert!(root.children_in(Slot::Method).is_empty());
    }
}
