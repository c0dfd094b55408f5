use logstat_core::{ErrorInfo, LogstatError};

/// Splits file content into log lines, treating `\r\n`, `\r` and `\n` alike.
///
/// A trailing line break yields a final empty line, which matters for marker
/// bounds in marker-offset logs.
pub fn split_lines(text: &str) -> Vec<&str> {
    let bytes = text.as_bytes();
    let mut lines = Vec::new();
    let mut start = 0;
    let mut idx = 0;
    while idx < bytes.len() {
        match bytes[idx] {
            b'\n' => {
                lines.push(&text[start..idx]);
                start = idx + 1;
            }
            b'\r' => {
                lines.push(&text[start..idx]);
                if bytes.get(idx + 1) == Some(&b'\n') {
                    idx += 1;
                }
                start = idx + 1;
            }
            _ => {}
        }
        idx += 1;
    }
    lines.push(&text[start..]);
    lines
}

/// Parses the integer following the first colon of `line`.
///
/// Whitespace around the integer is ignored and an optional sign is accepted.
pub fn parse_suffix(line: &str) -> Result<i64, LogstatError> {
    let Some(colon) = line.find(':') else {
        return Err(LogstatError::Format(
            ErrorInfo::new("missing-colon", "expected a colon before the count")
                .with_context("text", line)
                .with_hint("expected `<label>: <integer>`"),
        ));
    };
    let suffix = line[colon + 1..].trim();
    suffix.parse::<i64>().map_err(|err| {
        LogstatError::Format(
            ErrorInfo::new("invalid-integer", err.to_string())
                .with_context("text", line)
                .with_context("suffix", suffix),
        )
    })
}
