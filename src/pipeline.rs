//! Wires detect, translate, reorganize and enrich for one source file.
//!
//! A pipeline holds only immutable rule data and stage definitions; every
//! `analyze` call builds its own forest, so one pipeline can serve many files
//! and separate files never share mutable state.
use tracing::debug;

use crate::config::PipelineConfig;
use crate::engine::{CallSite, DetectionEngine, DetectionStore};
use crate::enricher::Enricher;
use crate::error::Result;
use crate::model::{Asset, Forest};
use crate::output::Finding;
use crate::reorganizer::Reorganizer;
use crate::rules::RuleSet;
use crate::translator::Translator;

pub struct Pipeline {
    config: PipelineConfig,
    rules: RuleSet,
    translator: Translator,
    reorganizer: Reorganizer,
    enricher: Enricher,
}

impl Pipeline {
    pub fn new(config: PipelineConfig) -> Result<Self> {
        config.validate()?;
        let rules = RuleSet::for_conventions(&config.conventions)?;
        Ok(Self::with_rules(config, rules))
    }

    /// Every built-in catalog, every stage enabled.
    pub fn standard() -> Result<Self> {
        Self::new(PipelineConfig::default())
    }

    pub fn with_rules(config: PipelineConfig, rules: RuleSet) -> Self {
        let translator =
            Translator::new().with_entry_point_promotion(config.promote_entry_points);
        Self {
            config,
            rules,
            translator,
            reorganizer: Reorganizer::new(),
            enricher: Enricher::new(),
        }
    }

    pub fn with_reorganizer(mut self, reorganizer: Reorganizer) -> Self {
        self.reorganizer = reorganizer;
        self
    }

    pub fn with_enricher(mut self, enricher: Enricher) -> Self {
        self.enricher = enricher;
        self
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    pub fn analyze(&self, calls: &[CallSite]) -> Analysis {
        let engine = DetectionEngine::new(&self.rules).with_max_depth(self.config.max_depth);
        let stores = engine.detect_all(calls);

        let mut forest = self.translator.translate_all(&stores);

        if self.config.reorganize {
            let rewrites = self.reorganizer.reorganize(&mut forest);
            debug!(count = rewrites, "reorganizer finished");
        }
        if self.config.enrich {
            let added = self.enricher.enrich(&mut forest);
            debug!(count = added, "enricher finished");
        }

        debug!(
            calls = calls.len(),
            detections = stores.len(),
            roots = forest.roots().len(),
            "analysis complete"
        );
        Analysis { stores, forest }
    }
}

/// Result of one `analyze` call: the raw detections and the final forest.
pub struct Analysis {
    pub stores: Vec<DetectionStore>,
    pub forest: Forest,
}

impl Analysis {
    pub fn assets(&self) -> Vec<Asset> {
        self.forest.snapshot()
    }

    /// Every raw detected value with its location, for issue reporting.
    pub fn findings(&self) -> Vec<Finding> {
        self.stores
            .iter()
            .flat_map(|store| store.flatten())
            .map(|(store, value)| Finding::from_detection(store, value))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.stores.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Expression;
    use crate::model::{Convention, Kind, Location};

    fn get_instance(name: &str) -> CallSite {
        CallSite::new("javax.crypto.Cipher", "getInstance", Location::new("Main.java", 3, 9))
            .with_argument(Expression::string(name))
    }

    #[test]
    fn test_standard_pipeline_builds() {
        let pipeline = Pipeline::standard().unwrap();
        assert!(!pipeline.rules().is_empty());
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let config = PipelineConfig {
            max_depth: 0,
            ..PipelineConfig::default()
        };
        assert!(Pipeline::new(config).is_err());
    }

    #[test]
    fn test_unmatched_calls_yield_empty_analysis() {
        let pipeline = Pipeline::standard().unwrap();
        let calls = vec![CallSite::new("java.lang.String", "valueOf", Location::default())];
        let analysis = pipeline.analyze(&calls);
        assert!(analysis.is_empty());
        assert!(analysis.assets().is_empty());
        assert!(analysis.findings().is_empty());
    }

    #[test]
    fn test_analyze_returns_assets_and_findings() {
        let pipeline = Pipeline::standard().unwrap();
        let analysis = pipeline.analyze(&[get_instance("AES/GCM/NoPadding")]);

        let assets = analysis.assets();
        assert_eq!(assets.len(), 1);
        assert!(!assets[0].find_all(Kind::BlockCipher).is_empty());
        assert!(analysis.findings().iter().all(|f| f.file == "Main.java"));
    }

    #[test]
    fn test_disabled_enrichment_adds_no_identifiers() {
        let config = PipelineConfig {
            enrich: false,
            ..PipelineConfig::default()
        };
        let pipeline = Pipeline::new(config).unwrap();
        let assets = pipeline.analyze(&[get_instance("AES")]).assets();
        assert!(assets.iter().all(|a| a.find_all(Kind::Oid).is_empty()));
    }

    #[test]
    fn test_conventions_limit_catalogs() {
        let config = PipelineConfig {
            conventions: vec![Convention::BouncyCastle],
            ..PipelineConfig::default()
        };
        let pipeline = Pipeline::new(config).unwrap();
        assert!(pipeline.analyze(&[get_instance("AES")]).is_empty());
    }
}
