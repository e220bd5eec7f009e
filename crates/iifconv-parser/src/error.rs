//! Error types for reading and writing IIF files.

use iifconv_core::SectionType;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// A structural error in IIF content, with the line it occurred on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// The kind of error.
    pub kind: ParseErrorKind,
    /// 1-based line number.
    pub line: usize,
    /// Optional context message.
    pub context: Option<String>,
}

impl ParseError {
    /// Create a new parse error.
    #[must_use]
    pub const fn new(kind: ParseErrorKind, line: usize) -> Self {
        Self {
            kind,
            line,
            context: None,
        }
    }

    /// Add context to this error.
    #[must_use]
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    /// Get a numeric code for the error kind.
    #[must_use]
    pub const fn kind_code(&self) -> u32 {
        match &self.kind {
            ParseErrorKind::NoOpenSection => 1,
            ParseErrorKind::TooManyValues { .. } => 2,
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}", self.line, self.kind)?;
        if let Some(ctx) = &self.context {
            write!(f, " ({ctx})")?;
        }
        Ok(())
    }
}

impl std::error::Error for ParseError {}

/// Kinds of parse errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// A data line appeared while no section was open.
    NoOpenSection,
    /// A data line carried more values than its section header declared.
    TooManyValues {
        /// The open section.
        section: SectionType,
        /// Field names declared by the header (tag excluded).
        declared: usize,
        /// Values on the data line (tag included).
        found: usize,
    },
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoOpenSection => write!(f, "data line outside of any section"),
            Self::TooManyValues {
                section,
                declared,
                found,
            } => write!(
                f,
                "{section} header declares {declared} fields but the line has {} values",
                found.saturating_sub(1)
            ),
        }
    }
}

/// Errors from reading an IIF file.
#[derive(Debug, Error)]
pub enum ReadError {
    /// IO error reading the file.
    #[error("failed to read file {path}: {source}")]
    Io {
        /// The path that failed to read.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// The file content is malformed.
    #[error("invalid IIF file {path}: {error}")]
    Parse {
        /// The file being read.
        path: PathBuf,
        /// The structural error.
        error: ParseError,
        /// Diagnostics collected before the error.
        warnings: Vec<String>,
    },
}

impl ReadError {
    /// Non-fatal diagnostics collected before the failure.
    #[must_use]
    pub fn warnings(&self) -> &[String] {
        match self {
            Self::Io { .. } => &[],
            Self::Parse { warnings, .. } => warnings,
        }
    }
}

/// Errors from writing an IIF file.
#[derive(Debug, Error)]
pub enum WriteError {
    /// IO error writing the file.
    #[error("failed to write file {path}: {source}")]
    Io {
        /// The path that failed to write.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },
}
