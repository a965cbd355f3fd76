//! Error types shared by every markcut crate.
//!
//! The variants map onto the four failure classes of a cut run: malformed
//! timestamp text, unreadable input, a boundary list that does not pair up
//! into valid intervals, and an external tool that could not be run or
//! reported failure.

use std::fmt;
use std::path::PathBuf;

/// Common error type for markcut.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Timestamp text that is not `HH:MM:SS` with integer components.
    #[error("{}", format_message(input, *row, message))]
    Format {
        input: String,
        row: Option<usize>,
        message: String,
    },

    /// The timestamp table (or media input) could not be opened or read.
    #[error("cannot read {}: {message}", path.display())]
    Input { path: PathBuf, message: String },

    /// The boundaries do not pair up into a valid list of intervals.
    #[error("invalid cut list: {0}")]
    Shape(String),

    /// An external tool could not be run or exited unsuccessfully.
    #[error("{tool} failed: {message}")]
    ExternalTool { tool: String, message: String },

    /// A required external tool is not installed.
    #[error("{tool} not found; is it installed and in PATH?")]
    ToolNotFound { tool: String },

    /// An I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

fn format_message(input: &str, row: Option<usize>, message: &str) -> String {
    match row {
        Some(row) => format!("row {row}: invalid timestamp {input:?}: {message}"),
        None => format!("invalid timestamp {input:?}: {message}"),
    }
}

/// Coarse classification of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Format,
    Input,
    Shape,
    ExternalTool,
    Io,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Format => write!(f, "format error"),
            Self::Input => write!(f, "input error"),
            Self::Shape => write!(f, "shape error"),
            Self::ExternalTool => write!(f, "external tool error"),
            Self::Io => write!(f, "io error"),
        }
    }
}

impl Error {
    /// Create a new Format error for a timestamp that has no known source row.
    pub fn format<S: Into<String>, M: Into<String>>(input: S, message: M) -> Self {
        Self::Format {
            input: input.into(),
            row: None,
            message: message.into(),
        }
    }

    /// Create a new Input error.
    pub fn input<P: Into<PathBuf>, M: Into<String>>(path: P, message: M) -> Self {
        Self::Input {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a new Shape error.
    pub fn shape<S: Into<String>>(msg: S) -> Self {
        Self::Shape(msg.into())
    }

    /// Create a new ExternalTool error.
    pub fn external_tool<T: Into<String>, M: Into<String>>(tool: T, message: M) -> Self {
        Self::ExternalTool {
            tool: tool.into(),
            message: message.into(),
        }
    }

    /// Create a new ToolNotFound error.
    pub fn tool_not_found<S: Into<String>>(tool: S) -> Self {
        Self::ToolNotFound { tool: tool.into() }
    }

    /// Attach a 1-based source row to a Format error. Other variants are
    /// returned unchanged.
    pub fn at_row(self, row: usize) -> Self {
        match self {
            Self::Format { input, message, .. } => Self::Format {
                input,
                row: Some(row),
                message,
            },
            other => other,
        }
    }

    /// Which failure class this error belongs to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Format { .. } => ErrorKind::Format,
            Self::Input { .. } => ErrorKind::Input,
            Self::Shape(_) => ErrorKind::Shape,
            Self::ExternalTool { .. } | Self::ToolNotFound { .. } => ErrorKind::ExternalTool,
            Self::Io(_) => ErrorKind::Io,
        }
    }
}

/// Result type alias using the common Error type.
pub type Result<T> = std::result::Result<T, Error>;
