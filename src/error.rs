//! Error types for the embedding pipeline
//!
//! Every error is terminal: the CLI prints it and exits with
//! [`EXIT_FAILURE_CODE`].

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Process exit code for any fatal error
pub const EXIT_FAILURE_CODE: i32 = 100;

/// Broad classification of an [`EmbedError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Bad command-line input
    Usage,
    /// Malformed glob pattern
    Glob,
    /// Filesystem or output failure
    Io,
    /// Nothing matched
    NoFiles,
}

/// Errors raised while reading a stream into byte literals
#[derive(Debug, Error)]
pub enum EncodeError {
    /// Reading the source failed
    #[error("read error")]
    Read(#[source] io::Error),

    /// Writing the rendered literals failed
    #[error("write error")]
    Write(#[source] io::Error),
}

/// Errors that abort a generation run
#[derive(Debug, Error)]
pub enum EmbedError {
    /// No glob patterns were given
    #[error("no globs specified")]
    NoPatterns,

    /// A `--package` or `--var` value cannot be used as a Rust identifier
    #[error("invalid {kind} name {name:?}: {reason}")]
    InvalidIdentifier {
        /// Which option carried the name
        kind: &'static str,
        /// The rejected name
        name: String,
        /// Why it was rejected
        reason: &'static str,
    },

    /// A glob pattern has invalid syntax
    #[error("invalid glob pattern {pattern:?}")]
    InvalidPattern {
        /// The pattern as given
        pattern: String,
        /// Parser error from the glob crate
        source: glob::PatternError,
    },

    /// Patterns matched no files at all
    #[error("no files found")]
    NoFiles,

    /// A matched file could not be opened
    #[error("failed to read {}", path.display())]
    Open {
        /// The matched path
        path: PathBuf,
        /// Underlying error
        source: io::Error,
    },

    /// A matched file could not be encoded
    #[error("failed to process {}", path.display())]
    Encode {
        /// The matched path
        path: PathBuf,
        /// Underlying error
        source: EncodeError,
    },

    /// The destination file could not be created
    #[error("failed to open {} for write", path.display())]
    CreateOutput {
        /// Destination path
        path: PathBuf,
        /// Underlying error
        source: io::Error,
    },

    /// Writing the generated source failed
    #[error("failed to write output")]
    Write(#[source] io::Error),
}

impl EmbedError {
    /// Classify the error
    #[must_use]
    pub const fn category(&self) -> ErrorCategory {
        match self {
            Self::NoPatterns | Self::InvalidIdentifier { .. } => ErrorCategory::Usage,
            Self::InvalidPattern { .. } => ErrorCategory::Glob,
            Self::NoFiles => ErrorCategory::NoFiles,
            Self::Open { .. } | Self::Encode { .. } | Self::CreateOutput { .. } | Self::Write(_) => {
                ErrorCategory::Io
            },
        }
    }
}
