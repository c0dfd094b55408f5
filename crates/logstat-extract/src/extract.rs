use std::fs;
use std::io;
use std::path::Path;

use logstat_core::{
    Convention, ErrorInfo, ExtractedSeries, LogstatError, SeriesKind, COMMON_MARKER, ITER_PREFIX,
    NODES_PREFIX,
};
use tracing::debug;

use crate::line::{parse_suffix, split_lines};

/// Reads the whole log at `path` and extracts both series under `convention`.
pub fn extract(path: &Path, convention: Convention) -> Result<ExtractedSeries, LogstatError> {
    let text = fs::read_to_string(path).map_err(|err| {
        let code = match err.kind() {
            io::ErrorKind::NotFound => "not-found",
            _ => "read",
        };
        LogstatError::Io(
            ErrorInfo::new(code, err.to_string()).with_context("path", path.display().to_string()),
        )
    })?;
    debug!(path = %path.display(), bytes = text.len(), %convention, "read log");
    extract_text(&text, convention)
        .map_err(|err| err.with_context("path", path.display().to_string()))
}

/// Extracts both series from log content under `convention`.
pub fn extract_text(text: &str, convention: Convention) -> Result<ExtractedSeries, LogstatError> {
    let lines = split_lines(text);
    let series = match convention {
        Convention::SimplePrefix => extract_simple_prefix(&lines)?,
        Convention::MarkerOffset => extract_marker_offset(&lines)?,
    };
    debug!(
        %convention,
        lines = lines.len(),
        iterations = series.iterations.len(),
        nodes = series.nodes.len(),
        "extracted series"
    );
    Ok(series)
}

fn extract_simple_prefix(lines: &[&str]) -> Result<ExtractedSeries, LogstatError> {
    let mut series = ExtractedSeries::default();
    for (idx, line) in lines.iter().enumerate() {
        if line.starts_with(ITER_PREFIX) {
            series.push(SeriesKind::Iterations, parse_line(line, idx)?);
        }
        if line.starts_with(NODES_PREFIX) {
            series.push(SeriesKind::Nodes, parse_line(line, idx)?);
        }
    }
    Ok(series)
}

fn extract_marker_offset(lines: &[&str]) -> Result<ExtractedSeries, LogstatError> {
    let markers: Vec<usize> = lines
        .iter()
        .enumerate()
        .filter(|(_, line)| line.starts_with(COMMON_MARKER))
        .map(|(idx, _)| idx)
        .collect();

    let mut series = ExtractedSeries::default();
    for marker in markers {
        if marker + 2 >= lines.len() {
            return Err(LogstatError::Bounds(
                ErrorInfo::new(
                    "marker-out-of-bounds",
                    "marker is not followed by an iteration line and a node line",
                )
                .with_context("line", (marker + 1).to_string())
                .with_context("line_count", lines.len().to_string()),
            ));
        }
        series.push(SeriesKind::Iterations, parse_line(lines[marker + 1], marker + 1)?);
        series.push(SeriesKind::Nodes, parse_line(lines[marker + 2], marker + 2)?);
    }
    Ok(series)
}

fn parse_line(line: &str, idx: usize) -> Result<i64, LogstatError> {
    parse_suffix(line).map_err(|err| err.with_context("line", (idx + 1).to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SIMPLE: &str = "Search finished\nIter: 12\nO node count: 4\n\
        Max O + C: 30\nIter: 8\nMax O + C:  25\n";

    #[test]
    fn simple_prefix_collects_in_file_order() {
        let series = extract_text(SIMPLE, Convention::SimplePrefix).unwrap();
        assert_eq!(series.iterations, vec![12, 8]);
        assert_eq!(series.nodes, vec![30, 25]);
    }

    #[test]
    fn simple_prefix_ignores_indented_and_unprefixed_lines() {
        let text = " Iter: 5\nIter count: 6\nmax O + C: 7\nIter:9";
        let series = extract_text(text, Convention::SimplePrefix).unwrap();
        assert_eq!(series.iterations, vec![9]);
        assert!(series.nodes.is_empty());
    }

    #[test]
    fn simple_prefix_bad_integer_reports_line() {
        let err = extract_text("Iter: 1\nIter: many\n", Convention::SimplePrefix).unwrap_err();
        assert_eq!(err.code(), "invalid-integer");
        assert_eq!(err.info().context.get("line").map(String::as_str), Some("2"));
    }

    #[test]
    fn marker_offset_reads_following_lines() {
        let text = "Start\nIter count: 3\n\
            COMMON\nIter count: 10\nO + C max node count: 44\n\
            COMMON\nIter count: 11\nO + C max node count: 45\n";
        let series = extract_text(text, Convention::MarkerOffset).unwrap();
        assert_eq!(series.iterations, vec![10, 11]);
        assert_eq!(series.nodes, vec![44, 45]);
    }

    #[test]
    fn marker_offset_ignores_prefix_lines() {
        let series = extract_text("Iter: 3\nMax O + C: 4", Convention::MarkerOffset).unwrap();
        assert!(series.is_empty());
    }

    #[test]
    fn marker_on_last_two_lines_is_bounds_error() {
        for text in ["COMMON\na: 1", "a: 0\nCOMMON", "COMMON\n"] {
            let err = extract_text(text, Convention::MarkerOffset).unwrap_err();
            assert!(matches!(err, LogstatError::Bounds(_)), "{text:?}");
        }
    }

    #[test]
    fn bare_carriage_returns_separate_lines() {
        let series =
            extract_text("Iter: 5\rMax O + C: 50\rIter: 7\r", Convention::SimplePrefix).unwrap();
        assert_eq!(series.iterations, vec![5, 7]);
        assert_eq!(series.nodes, vec![50]);
    }

    #[test]
    fn crlf_marker_log_keeps_bounds_and_clean_context() {
        let series =
            extract_text("COMMON\r\nIter: 3\r\nMax: 9\r\n", Convention::MarkerOffset).unwrap();
        assert_eq!(series.iterations, vec![3]);
        assert_eq!(series.nodes, vec![9]);

        for text in ["a: 0\r\nCOMMON\r\nIter: 1", "COMMON\r\n", "x: 1\r\nCOMMON"] {
            let err = extract_text(text, Convention::MarkerOffset).unwrap_err();
            assert!(matches!(err, LogstatError::Bounds(_)), "{text:?}");
        }

        let err =
            extract_text("COMMON\r\nIter: x\r\nMax: 9", Convention::MarkerOffset).unwrap_err();
        assert_eq!(err.info().context.get("text").map(String::as_str), Some("Iter: x"));
    }

    #[test]
    fn trailing_empty_line_is_parsed_as_node_line() {
        let err = extract_text("COMMON\nIter count: 1\n", Convention::MarkerOffset).unwrap_err();
        assert_eq!(err.code(), "missing-colon");
        assert_eq!(err.info().context.get("line").map(String::as_str), Some("3"));
    }
}
