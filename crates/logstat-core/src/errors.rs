//! Structured error types shared across logstat crates.

use std::collections::BTreeMap;
use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Code, message and context describing one extraction failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorInfo {
    /// Kebab-case code such as `missing-colon` or `marker-out-of-bounds`.
    pub code: String,
    /// Diagnostic message.
    pub message: String,
    /// Where the failure happened: `path`, 1-based `line`, offending `text`, manifest `run`.
    #[serde(default)]
    pub context: BTreeMap<String, String>,
    /// Expected line or manifest shape, when one applies.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl ErrorInfo {
    /// Payload with no context and no hint.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            context: BTreeMap::new(),
            hint: None,
        }
    }

    /// Records `key=value`, replacing an earlier value for the same key.
    pub fn with_context(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.context.insert(key.into(), value.into());
        self
    }

    /// Describes the input shape the caller should have supplied.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

impl Display for ErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (code: {})", self.message, self.code)?;
        if !self.context.is_empty() {
            let pairs: Vec<String> = self
                .context
                .iter()
                .map(|(key, value)| format!("{key}={value}"))
                .collect();
            write!(f, " | context: [{}]", pairs.join(", "))?;
        }
        match &self.hint {
            Some(hint) => write!(f, " | hint: {hint}"),
            None => Ok(()),
        }
    }
}

/// Canonical error type for log extraction and reporting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[serde(tag = "family", content = "detail")]
pub enum LogstatError {
    /// The input file is missing or unreadable.
    #[error("io error: {0}")]
    Io(ErrorInfo),
    /// A matching line lacks a colon or carries a non-integer suffix.
    #[error("format error: {0}")]
    Format(ErrorInfo),
    /// A `COMMON` marker sits too close to the end of the file.
    #[error("bounds error: {0}")]
    Bounds(ErrorInfo),
    /// Manifest or convention selection problems.
    #[error("config error: {0}")]
    Config(ErrorInfo),
}

impl LogstatError {
    /// Returns a reference to the payload describing the error.
    pub fn info(&self) -> &ErrorInfo {
        match self {
            LogstatError::Io(info)
            | LogstatError::Format(info)
            | LogstatError::Bounds(info)
            | LogstatError::Config(info) => info,
        }
    }

    /// Adds a context entry to the payload, keeping the error family.
    pub fn with_context(self, key: impl Into<String>, value: impl Into<String>) -> Self {
        match self {
            LogstatError::Io(info) => LogstatError::Io(info.with_context(key, value)),
            LogstatError::Format(info) => LogstatError::Format(info.with_context(key, value)),
            LogstatError::Bounds(info) => LogstatError::Bounds(info.with_context(key, value)),
            LogstatError::Config(info) => LogstatError::Config(info.with_context(key, value)),
        }
    }

    /// Returns the stable machine readable code of the payload.
    pub fn code(&self) -> &str {
        &self.info().code
    }
}
