//! Pipeline configuration, loaded from JSON or YAML.
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::engine::DEFAULT_MAX_DEPTH;
use crate::error::ConfigError;
use crate::model::Convention;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Bounds symbol tracing and nested rule matching.
    pub max_depth: usize,
    /// Built-in rule catalogs to load.
    pub conventions: Vec<Convention>,
    pub reorganize: bool,
    pub enrich: bool,
    pub promote_entry_points: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            conventions: Convention::ALL.to_vec(),
            reorganize: true,
            enrich: true,
            promote_entry_points: true,
        }
    }
}

impl PipelineConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| ConfigError::read_error(path, e))?;

        let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        let config: Self = match extension {
            "json" => serde_json::from_str(&content)
                .map_err(|e| ConfigError::parse_error(path, e.to_string()))?,
            "yaml" | "yml" => serde_yaml::from_str(&content)
                .map_err(|e| ConfigError::parse_error(path, e.to_string()))?,
            other => return Err(ConfigError::unsupported_format(other)),
        };

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_depth == 0 {
            return Err(ConfigError::invalid_value(
                "max_depth",
                "must be at least 1",
            ));
        }
        if self.conventions.is_empty() {
            return Err(ConfigError::invalid_value(
                "conventions",
                "at least one convention must be enabled",
            ));
        }
        Ok(())
    }
}
