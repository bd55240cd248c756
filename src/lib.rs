//! Crypto Inventory Core
//!
//! Rule-driven detection of cryptographic API usage over a language-neutral
//! call-site model, normalised into a canonical cryptographic asset forest:
//! detect, translate, reorganize, enrich.
pub mod cli;
pub mod config;
pub mod engine;
pub mod enricher;
pub mod error;
pub mod logging;
pub mod model;
pub mod output;
pub mod pipeline;
pub mod reorganizer;
pub mod rules;
pub mod translator;
pub mod utils;

pub use config::PipelineConfig;
pub use engine::{CallSite, CallSiteFile, DetectionEngine, DetectionStore, Resolver};
pub use enricher::Enricher;
pub use error::{Error, Result};
pub use model::{Asset, Convention, Forest, Kind, Location};
pub use pipeline::{Analysis, Pipeline};
pub use reorganizer::Reorganizer;
pub use rules::RuleSet;
pub use translator::Translator;
