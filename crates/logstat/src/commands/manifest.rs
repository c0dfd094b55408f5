use std::error::Error;
use std::io::{self, Write};
use std::path::PathBuf;

use clap::Args;
use logstat_extract::{run_manifest, RunManifest};
use tracing::info;

#[derive(Args, Debug)]
pub struct ManifestArgs {
    /// YAML manifest listing `runs` with a `path` and optional `convention`.
    pub manifest: PathBuf,
}

pub fn run(args: &ManifestArgs) -> Result<(), Box<dyn Error>> {
    let manifest = RunManifest::load(&args.manifest)?;
    info!(runs = manifest.runs.len(), "loaded manifest");
    let mut out = io::stdout().lock();
    run_manifest(&manifest, &mut out)?;
    out.flush()?;
    Ok(())
}
