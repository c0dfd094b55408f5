#![deny(missing_docs)]
#![doc = "Core types and errors for the search log statistics extractor."]

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub mod errors;
mod types;

pub use errors::{ErrorInfo, LogstatError};
pub use types::ExtractedSeries;

/// Number of values folded into every printed average.
pub const BATCH_SIZE: usize = 10;

/// Line prefix carrying an iteration count in simple-prefix logs.
pub const ITER_PREFIX: &str = "Iter:";

/// Line prefix carrying a node count in simple-prefix logs.
pub const NODES_PREFIX: &str = "Max O + C:";

/// Marker line preceding the iteration and node lines in marker-offset logs.
pub const COMMON_MARKER: &str = "COMMON";

/// Log convention used to locate the iteration and node lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Convention {
    /// Lines start with [`ITER_PREFIX`] or [`NODES_PREFIX`].
    #[serde(alias = "simple", alias = "file")]
    SimplePrefix,
    /// A [`COMMON_MARKER`] line is followed by the iteration line, then the node line.
    #[serde(alias = "bidir")]
    MarkerOffset,
}

impl Convention {
    /// Canonical textual name of the convention.
    pub fn as_str(&self) -> &'static str {
        match self {
            Convention::SimplePrefix => "simple-prefix",
            Convention::MarkerOffset => "marker-offset",
        }
    }
}

impl fmt::Display for Convention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Convention {
    type Err = LogstatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "simple-prefix" | "simple" | "file" => Ok(Convention::SimplePrefix),
            "marker-offset" | "bidir" => Ok(Convention::MarkerOffset),
            other => Err(LogstatError::Config(
                ErrorInfo::new("unknown-convention", format!("unknown convention `{other}`"))
                    .with_hint("expected simple-prefix or marker-offset"),
            )),
        }
    }
}

/// The two series extracted from every log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeriesKind {
    /// Search iteration counts.
    Iterations,
    /// Maximum open plus closed node counts.
    Nodes,
}

impl SeriesKind {
    /// Both kinds in report order.
    pub const ALL: [SeriesKind; 2] = [SeriesKind::Iterations, SeriesKind::Nodes];

    /// Header line printed before the averages of this series.
    pub fn header(&self) -> &'static str {
        match self {
            SeriesKind::Iterations => "iters",
            SeriesKind::Nodes => "nodes",
        }
    }
}
