use anyhow::{Context as AnyhowContext, Result};
use clap::{Parser, ValueEnum};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::error::IoError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Full inventory document: assets plus findings
    Json,
    /// Only the flat list of detected values
    Findings,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Findings => "findings",
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "crypto-inventory")]
#[command(about = "Build a cryptographic asset inventory from call-site dumps", long_about = None)]
pub struct Args {
    /// Call-site dump (.json, .yaml, .yml) or a directory of them
    #[arg(long, value_name = "PATH")]
    pub path: PathBuf,

    /// Pipeline configuration file (JSON or YAML)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Output file path (prints to stdout if not specified)
    #[arg(short = 'O', long, value_name = "FILE")]
    pub output_file: Option<PathBuf>,

    /// Output format (json, findings)
    #[arg(short = 'f', long, default_value = "json")]
    pub format: OutputFormat,

    /// Increase verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    pub fn validate(&self) -> Result<()> {
        validate_path(&self.path)?;
        if let Some(ref config_path) = self.config {
            if !config_path.exists() {
                anyhow::bail!("Config file does not exist: {}", config_path.display());
            }
        }
        Ok(())
    }

    /// The dump files to analyse, sorted so output order is stable.
    pub fn collect_inputs(&self) -> Result<Vec<PathBuf>> {
        collect_inputs(&self.path)
    }
}

pub fn is_call_site_dump(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("json" | "yaml" | "yml")
    )
}

pub fn collect_inputs(path: &Path) -> Result<Vec<PathBuf>> {
    if path.is_file() {
        if !is_call_site_dump(path) {
            anyhow::bail!("Not a call-site dump (expected .json, .yaml or .yml): {}", path.display());
        }
        return Ok(vec![path.to_path_buf()]);
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(path).follow_links(false) {
        let entry = entry.with_context(|| format!("Cannot walk directory: {}", path.display()))?;
        if entry.file_type().is_file() && is_call_site_dump(entry.path()) {
            files.push(entry.into_path());
        }
    }
    files.sort();
    Ok(files)
}

pub fn validate_path(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(IoError::file_not_found(path).into());
    }

    if path.is_file() {
        std::fs::metadata(path).with_context(|| format!("Cannot read file: {}", path.display()))?;
    } else if path.is_dir() {
        std::fs::metadata(path)
            .with_context(|| format!("Cannot read directory: {}", path.display()))?;
    } else {
        return Err(IoError::invalid_path(path).into());
    }

    Ok(())
}
