use serde::{Deserialize, Serialize};

use crate::SeriesKind;

/// Iteration and node counts extracted from one log, in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedSeries {
    /// Iteration counts.
    pub iterations: Vec<i64>,
    /// Node counts.
    pub nodes: Vec<i64>,
}

impl ExtractedSeries {
    /// Returns the values recorded for the requested series.
    pub fn get(&self, kind: SeriesKind) -> &[i64] {
        match kind {
            SeriesKind::Iterations => &self.iterations,
            SeriesKind::Nodes => &self.nodes,
        }
    }

    /// Appends a value to the requested series.
    pub fn push(&mut self, kind: SeriesKind, value: i64) {
        match kind {
            SeriesKind::Iterations => self.iterations.push(value),
            SeriesKind::Nodes => self.nodes.push(value),
        }
    }

    /// Returns true when neither series holds a value.
    pub fn is_empty(&self) -> bool {
        self.iterations.is_empty() && self.nodes.is_empty()
    }
}
