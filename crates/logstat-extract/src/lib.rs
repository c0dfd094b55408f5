//! Series extraction and batched averaging for search experiment logs.

mod batch;
mod extract;
mod line;
mod manifest;
mod report;

pub use batch::batched_averages;
pub use extract::{extract, extract_text};
pub use line::{parse_suffix, split_lines};
pub use manifest::{run_manifest, ManifestRun, RunManifest};
pub use report::{format_average, parse_bidir, parse_file, render_report, report_path};
