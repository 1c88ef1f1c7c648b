//! Error types for instance handling and solver configuration.

use std::fmt;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, PMedianError>;

/// Errors raised while loading an instance or configuring a solve.
///
/// Numeric drift during local search is not an error: it is corrected in
/// place and reported through
/// [`LocalSearchOutcome::drift_corrections`](crate::local_search::LocalSearchOutcome).
#[derive(Debug)]
pub enum PMedianError {
    /// The number of medians is not in `1..=n`.
    InvalidMedianCount {
        /// Requested number of medians.
        p: i64,
        /// Number of nodes in the instance.
        n: usize,
    },
    /// The restricted candidate list must hold at least one candidate.
    InvalidRclSize,
    /// A generator or solver parameter is out of range.
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// What is wrong with it.
        message: String,
    },
    /// A solution handed to local search is not a usable median set.
    InvalidSolution {
        /// What is wrong with it.
        reason: String,
    },
    /// The instance text does not follow the `n`, `p`, matrix layout.
    MalformedInstance {
        /// 1-based line number where the problem was found.
        line: usize,
        /// Description of the problem.
        message: String,
    },
    /// Reading or writing an instance file failed.
    Io(std::io::Error),
}

impl PMedianError {
    /// Returns `true` for errors caused by solver parameters rather than data.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            PMedianError::InvalidMedianCount { .. }
                | PMedianError::InvalidRclSize
                | PMedianError::InvalidParameter { .. }
                | PMedianError::InvalidSolution { .. }
        )
    }

    pub(crate) fn malformed(line: usize, message: impl Into<String>) -> Self {
        PMedianError::MalformedInstance {
            line,
            message: message.into(),
        }
    }

    pub(crate) fn invalid_solution(reason: impl Into<String>) -> Self {
        PMedianError::InvalidSolution {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for PMedianError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PMedianError::InvalidMedianCount { p, n } => {
                write!(f, "p must be between 1 and {n}, got {p}")
            }
            PMedianError::InvalidRclSize => {
                write!(f, "restricted candidate list size must be at least 1")
            }
            PMedianError::InvalidParameter { name, message } => {
                write!(f, "invalid {name}: {message}")
            }
            PMedianError::InvalidSolution { reason } => write!(f, "invalid solution: {reason}"),
            PMedianError::MalformedInstance { line, message } => {
                write!(f, "malformed instance at line {line}: {message}")
            }
            PMedianError::Io(e) => write!(f, "i/o error: {e}"),
        }
    }
}

impl std::error::Error for PMedianError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PMedianError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for PMedianError {
    fn from(e: std::io::Error) -> Self {
        PMedianError::Io(e)
    }
}

/// Checks `0 < p <= n`.
pub(crate) fn check_median_count(p: usize, n: usize) -> Result<()> {
    if p == 0 || p > n {
        return Err(PMedianError::InvalidMedianCount { p: p as i64, n });
    }
    Ok(())
}
