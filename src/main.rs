use anyhow::{Context as AnyhowContext, Result};
use clap::Parser;
use tracing::{info, warn};

use crypto_inventory_core::cli;
use crypto_inventory_core::config::PipelineConfig;
use crypto_inventory_core::engine::CallSiteFile;
use crypto_inventory_core::logging::{self, Verbosity};
use crypto_inventory_core::output::{FileInventory, OutputFormatter};
use crypto_inventory_core::pipeline::Pipeline;

fn main() -> Result<()> {
    let args = cli::Args::parse();
    logging::init(Verbosity::from_flags(args.verbose, args.quiet))?;
    args.validate().context("Invalid arguments")?;

    let config = match &args.config {
        Some(path) => PipelineConfig::load(path)
            .with_context(|| format!("Failed to load config: {}", path.display()))?,
        None => PipelineConfig::default(),
    };
    let pipeline = Pipeline::new(config).context("Failed to build pipeline")?;

    let inputs = args.collect_inputs()?;
    if inputs.is_empty() {
        warn!(path = %args.path.display(), "no call-site dumps found");
    }

    let mut files = Vec::with_capacity(inputs.len());
    for input in &inputs {
        let dump = CallSiteFile::load(input)
            .with_context(|| format!("Failed to load call sites: {}", input.display()))?;
        let analysis = pipeline.analyze(&dump.calls);
        info!(
            file = %dump.file,
            calls = dump.calls.len(),
            detections = analysis.stores.len(),
            "analyzed"
        );
        files.push(FileInventory::from_analysis(dump.file, &analysis));
    }

    let output = OutputFormatter::format(files, args.format)?;
    match &args.output_file {
        Some(path) => OutputFormatter::write(path, &output)?,
        None => println!("{output}"),
    }

    Ok(())
}
