//! Error types for kith operations.
//!
//! ## Error Philosophy
//!
//! "No path exists between these two people" is a normal negative answer, not
//! a failure, so it is deliberately absent from this taxonomy;
//! [`Kith::find_path`](crate::Kith::find_path) reports it as `Ok(None)`.
//! Everything here is either the user's fault (unknown name, malformed input
//! file) or ours (a predecessor chain that does not terminate).

use thiserror::Error;

/// Result type for kith operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for kith operations.
#[derive(Debug, Error)]
pub enum Error {
    /// File system operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A referenced node name is not present in the graph
    #[error("no such person in the graph: {0:?}")]
    NotFound(String),

    /// The input file violates the adjacency-matrix format
    #[error("malformed input at line {line}: {reason}")]
    MalformedInput {
        /// 1-based line number in the input file
        line: usize,
        /// Human-readable description of the violation
        reason: String,
    },

    /// A recorded predecessor chain is corrupt (engine or data invariant bug)
    #[error("internal consistency error: {0}")]
    InternalConsistency(String),
}

impl Error {
    /// Create a malformed-input error for a given line.
    #[must_use]
    pub fn malformed(line: usize, reason: impl Into<String>) -> Self {
        Self::MalformedInput {
            line,
            reason: reason.into(),
        }
    }

    /// Returns `true` if this is an input problem the user can fix.
    #[must_use]
    pub fn is_input_error(&self) -> bool {
        matches!(self, Self::NotFound(_) | Self::MalformedInput { .. })
    }
}
