//! Built-in rule catalogs, one per API convention.
pub mod bouncycastle;
pub mod go;
pub mod jca;

use crate::error::RuleGraphError;
use crate::model::Convention;

use super::{DetectionRule, RuleSet};

pub fn rules_for(convention: Convention) -> Vec<DetectionRule> {
    match convention {
        Convention::Jca => jca::rules(),
        Convention::BouncyCastle => bouncycastle::rules(),
        Convention::GoStdlib => go::rules(),
    }
}

impl RuleSet {
    /// Every built-in catalog.
    pub fn standard() -> Result<RuleSet, RuleGraphError> {
        Self::for_conventions(&Convention::ALL)
    }

    pub fn for_conventions(conventions: &[Convention]) -> Result<RuleSet, RuleGraphError> {
        let mut builder = RuleSet::builder();
        for convention in conventions {
            builder = builder.with_rules(rules_for(*convention));
        }
        builder.build()
    }
}
