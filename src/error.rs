//! Error types surfaced by marshaling and the DP engine.
//!
//! Every failure is detected before the first row is filled, with the single
//! exception of [`KnapsackError::Cancelled`], which is only raised between
//! rows when a caller-owned cancel flag is set.

use thiserror::Error;

/// Failure of a knapsack solve.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KnapsackError {
    /// Input sequences or capacity violate a precondition.
    #[error("invalid argument `{argument}`: {reason}")]
    InvalidArgument {
        /// Name of the offending argument (`values`, `weights`, `capacity`).
        argument: &'static str,
        /// Human-readable description, including the element index if any.
        reason: String,
    },

    /// The `(rows × columns)` table cannot be allocated.
    #[error("cannot allocate a {rows}x{columns} DP table (limit {limit} cells)")]
    ResourceExhausted {
        /// Number of table rows requested (item count + 1).
        rows: usize,
        /// Number of table columns requested (capacity + 1).
        columns: usize,
        /// Configured cell limit in force when the request was rejected.
        limit: usize,
    },

    /// The run was stopped through its cancel flag.
    #[error("solve cancelled after {completed_rows} rows")]
    Cancelled {
        /// Item rows fully computed before the flag was observed.
        completed_rows: usize,
    },
}

impl KnapsackError {
    pub(crate) fn invalid(argument: &'static str, reason: impl Into<String>) -> Self {
        KnapsackError::InvalidArgument {
            argument,
            reason: reason.into(),
        }
    }

    /// True for [`KnapsackError::InvalidArgument`].
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, KnapsackError::InvalidArgument { .. })
    }

    /// True for [`KnapsackError::ResourceExhausted`].
    pub fn is_resource_exhausted(&self) -> bool {
        matches!(self, KnapsackError::ResourceExhausted { .. })
    }
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, KnapsackError>;
