//! Error types for Proofscope

use std::fmt;
use thiserror::Error;

/// Message carried by every context conflict.
pub const CONFLICT_MESSAGE: &str = "it seems you're running multiple provers concurrently within \
     the same thread, which is not supported and would lead to bugs";

#[derive(Error, Debug)]
pub enum Error {
    #[error("{}: {kind}", CONFLICT_MESSAGE)]
    Conflict { kind: ConflictKind },

    #[error("io error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("json error: {0}")]
    JsonError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

/// What tripped the single-owner check.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConflictKind {
    /// The accessor ran with no context installed.
    NoContext,
    /// An accessor read pushed the counter past the expectation.
    Overread { expected: usize, actual: usize },
    /// An asynchronous scope finished with a different count than expected.
    CountMismatch {
        expected: Option<usize>,
        actual: usize,
    },
    /// An asynchronous scope finished to find the slot already emptied by an
    /// overlapping scope. `actual` is the count on its own context.
    Displaced { actual: usize },
}

impl fmt::Display for ConflictKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConflictKind::NoContext => write!(f, "no context is installed"),
            ConflictKind::Overread { expected, actual } => {
                write!(f, "context read {} times, expected at most {}", actual, expected)
            }
            ConflictKind::CountMismatch {
                expected: Some(expected),
                actual,
            } => write!(f, "scope ended after {} reads, expected {}", actual, expected),
            ConflictKind::CountMismatch {
                expected: None,
                actual,
            } => write!(f, "scope ended after {} reads, expected none", actual),
            ConflictKind::Displaced { actual } => write!(
                f,
                "scope ended after {} reads with its context already removed",
                actual
            ),
        }
    }
}

impl Error {
    pub fn conflict(kind: ConflictKind) -> Self {
        Self::Conflict { kind }
    }

    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::Conflict { .. })
    }

    pub fn conflict_kind(&self) -> Option<ConflictKind> {
        match self {
            Self::Conflict { kind } => Some(*kind),
            _ => None,
        }
    }
}
