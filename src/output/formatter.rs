use anyhow::Result;
use serde::Serialize;
use std::fs;
use std::path::Path;

use crate::cli::OutputFormat;
use crate::error::IoError;
use crate::model::Asset;
use crate::pipeline::Analysis;

use super::Finding;

/// The inventory for one analysed call-site dump.
#[derive(Debug, Serialize)]
pub struct FileInventory {
    pub file: String,
    pub assets: Vec<Asset>,
    pub findings: Vec<Finding>,
}

impl FileInventory {
    pub fn from_analysis(file: impl Into<String>, analysis: &Analysis) -> Self {
        Self {
            file: file.into(),
            assets: analysis.assets(),
            findings: analysis.findings(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct InventoryDocument {
    pub files_analyzed: usize,
    pub total_assets: usize,
    pub total_findings: usize,
    pub assets: Vec<Asset>,
    pub findings: Vec<Finding>,
}

pub struct OutputFormatter;

impl OutputFormatter {
    pub fn format(files: Vec<FileInventory>, format: OutputFormat) -> Result<String> {
        let document = Self::build_document(files);

        match format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&document)?),
            OutputFormat::Findings => Ok(serde_json::to_string_pretty(&document.findings)?),
        }
    }

    pub fn write(path: &Path, output: &str) -> Result<(), IoError> {
        fs::write(path, output).map_err(|e| IoError::write_error(path, e))
    }

    pub fn build_document(files: Vec<FileInventory>) -> InventoryDocument {
        let files_analyzed = files.len();
        let mut assets = Vec::new();
        let mut findings = Vec::new();
        for file in files {
            assets.extend(file.assets);
            findings.extend(file.findings);
        }

        InventoryDocument {
            files_analyzed,
            total_assets: assets.len(),
            total_findings: findings.len(),
            assets,
            findings,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{CallSite, Expression};
    use crate::model::Location;
    use crate::pipeline::Pipeline;

    fn inventory(file: &str, algorithm: &str) -> FileInventory {
        let call = CallSite::new("javax.crypto.Cipher", "getInstance", Location::new(file, 1, 1))
            .with_argument(Expression::string(algorithm));
        let analysis = Pipeline::standard().unwrap().analyze(&[call]);
        FileInventory::from_analysis(file, &analysis)
    }

    #[test]
    fn test_document_totals() {
        let document = OutputFormatter::build_document(vec![
            inventory("A.java", "AES/CBC/PKCS5Padding"),
            inventory("B.java", "DES"),
        ]);
        assert_eq!(document.files_analyzed, 2);
        assert_eq!(document.total_assets, document.assets.len());
        assert_eq!(document.total_findings, document.findings.len());
        assert_eq!(document.total_assets, 2);
    }

    #[test]
    fn test_findings_format_is_a_list() {
        let output =
            OutputFormatter::format(vec![inventory("A.java", "AES")], OutputFormat::Findings)
                .unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert!(parsed.is_array());
    }

    #[test]
    fn test_empty_document() {
        let output = OutputFormatter::format(Vec::new(), OutputFormat::Json).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed["files_analyzed"], 0);
        assert_eq!(parsed["total_assets"], 0);
    }

    #[test]
    fn test_write_creates_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("inventory.json");
        OutputFormatter::write(&path, "[]").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "[]");
    }

    #[test]
    fn test_write_reports_target() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("missing").join("inventory.json");
        let err = OutputFormatter::write(&path, "[]").unwrap_err();
        assert!(matches!(err, IoError::WriteError { .. }));
        assert!(err.to_string().contains("inventory.json"));
    }
}
