use std::io::{self, Write};
use std::path::Path;

use logstat_core::{Convention, ErrorInfo, ExtractedSeries, LogstatError, SeriesKind, BATCH_SIZE};
use tracing::{info, warn};

use crate::batch::batched_averages;
use crate::extract::extract;

/// Formats an average the way the report has always printed it.
///
/// Integral values keep a `.0` suffix, and magnitudes of at least `1e16` or
/// below `1e-4` switch to exponent form with a signed two digit exponent
/// (`1e+16`, `2.5e-05`).
pub fn format_average(value: f64) -> String {
    let magnitude = value.abs();
    if value != 0.0 && !(1e-4..1e16).contains(&magnitude) {
        let formatted = format!("{value:e}");
        let Some((mantissa, exponent)) = formatted.split_once('e') else {
            return formatted;
        };
        let (sign, digits) = match exponent.strip_prefix('-') {
            Some(digits) => ('-', digits),
            None => ('+', exponent),
        };
        return format!("{mantissa}e{sign}{digits:0>2}");
    }
    if value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        format!("{value}")
    }
}

/// Writes the `iters` and `nodes` sections of a report to `out`.
pub fn render_report<W: Write>(series: &ExtractedSeries, out: &mut W) -> io::Result<()> {
    for kind in SeriesKind::ALL {
        writeln!(out, "{}", kind.header())?;
        for average in batched_averages(series.get(kind), BATCH_SIZE) {
            writeln!(out, "{}", format_average(average))?;
        }
    }
    Ok(())
}

/// Extracts the log at `path` under `convention` and writes its report to `out`.
pub fn report_path<W: Write>(
    path: &Path,
    convention: Convention,
    out: &mut W,
) -> Result<(), LogstatError> {
    let series = extract(path, convention)?;
    if series.is_empty() {
        warn!(path = %path.display(), %convention, "no matching lines, reporting zero averages");
    }
    info!(
        path = %path.display(),
        %convention,
        iterations = series.iterations.len(),
        nodes = series.nodes.len(),
        "writing report"
    );
    render_report(&series, out).map_err(|err| {
        LogstatError::Io(
            ErrorInfo::new("write", err.to_string())
                .with_context("path", path.display().to_string()),
        )
    })
}

/// Reports a log whose counts sit on `Iter:` and `Max O + C:` lines.
pub fn parse_file<W: Write>(path: &Path, out: &mut W) -> Result<(), LogstatError> {
    report_path(path, Convention::SimplePrefix, out)
}

/// Reports a log whose counts follow each `COMMON` marker line.
pub fn parse_bidir<W: Write>(path: &Path, out: &mut W) -> Result<(), LogstatError> {
    report_path(path, Convention::MarkerOffset, out)
}
