use std::{io, path::PathBuf};

use ppcheck_transformer::TransformerError;
use thiserror::Error;

/// Everything that can stop a check. Only [`CheckError::Assertion`] means the output was wrong,
/// the rest mean the check could not be carried out.
#[derive(Debug, Error)]
pub enum CheckError {
    #[error(transparent)]
    Transformer(#[from] TransformerError),
    #[error("failed to read {}: {source}", .path.display())]
    Io { path: PathBuf, source: io::Error },
    #[error("{}:{line}: malformed directive `{text}`", .path.display())]
    MalformedDirective { path: PathBuf, line: usize, text: String },
    #[error("failed to write to an output channel: {0}")]
    Channel(#[source] io::Error),
    #[error(transparent)]
    Assertion(#[from] AssertionFailure),
}

impl CheckError {
    pub fn is_assertion(&self) -> bool {
        matches!(self, CheckError::Assertion(_))
    }
    pub fn as_assertion(&self) -> Option<&AssertionFailure> {
        match self {
            CheckError::Assertion(failure) => Some(failure),
            _ => None,
        }
    }
}

/// A directive that did not hold, `line` is 1-based within the check file
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}")]
pub struct AssertionFailure {
    pub line: usize,
    pub kind: FailureKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FailureKind {
    #[error("{payload} found but not expected in output")]
    FoundButNotExpected { payload: String },
    #[error("{payload} found {found} times, but expected {expected} times")]
    CountMismatch { payload: String, expected: usize, found: usize },
    #[error("{payload} not found but expected")]
    NotFoundButExpected { payload: String },
}

impl FailureKind {
    pub fn payload(&self) -> &str {
        match self {
            FailureKind::FoundButNotExpected { payload } | FailureKind::CountMismatch { payload, .. } | FailureKind::NotFoundButExpected { payload } => payload,
        }
    }
}
