use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use logstat_core::{Convention, ErrorInfo, LogstatError};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::report::report_path;

/// One log to report, with the convention it was written in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestRun {
    /// Log path, relative to the manifest's directory unless absolute.
    pub path: PathBuf,
    /// Convention used by the log.
    #[serde(default = "ManifestRun::default_convention")]
    pub convention: Convention,
}

impl ManifestRun {
    const fn default_convention() -> Convention {
        Convention::SimplePrefix
    }
}

/// Ordered list of logs reported in one invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunManifest {
    /// Runs reported in listed order.
    pub runs: Vec<ManifestRun>,
}

impl RunManifest {
    /// Loads a YAML manifest and resolves run paths against its directory.
    pub fn load(path: &Path) -> Result<Self, LogstatError> {
        let contents = fs::read_to_string(path).map_err(|err| {
            LogstatError::Config(
                ErrorInfo::new("manifest-read", err.to_string())
                    .with_context("path", path.display().to_string()),
            )
        })?;
        let mut manifest = Self::from_yaml(&contents)
            .map_err(|err| err.with_context("path", path.display().to_string()))?;
        if let Some(base) = path.parent() {
            for run in &mut manifest.runs {
                if run.path.is_relative() {
                    run.path = base.join(&run.path);
                }
            }
        }
        Ok(manifest)
    }

    /// Parses a YAML manifest without touching the filesystem.
    pub fn from_yaml(contents: &str) -> Result<Self, LogstatError> {
        let manifest: RunManifest = serde_yaml::from_str(contents).map_err(|err| {
            LogstatError::Config(ErrorInfo::new("manifest-parse", err.to_string()))
        })?;
        if manifest.runs.is_empty() {
            return Err(LogstatError::Config(
                ErrorInfo::new("empty-manifest", "manifest lists no runs")
                    .with_hint("add at least one entry under `runs`"),
            ));
        }
        Ok(manifest)
    }
}

/// Writes the report of every run in order, stopping at the first failure.
pub fn run_manifest<W: Write>(manifest: &RunManifest, out: &mut W) -> Result<(), LogstatError> {
    for (idx, run) in manifest.runs.iter().enumerate() {
        info!(run = idx, path = %run.path.display(), convention = %run.convention, "manifest run");
        report_path(&run.path, run.convention, out)
            .map_err(|err| err.with_context("run", idx.to_string()))?;
    }
    Ok(())
}
