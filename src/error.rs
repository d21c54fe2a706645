//! Error taxonomy for the quiz core.

use std::fmt;

/// Errors signalled by the quiz engine and the pagination windower.
///
/// Every variant is synchronous and recoverable by the caller. The core
/// never logs; whoever invoked the operation decides what the user sees.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizError {
    /// Malformed question data or out-of-range pagination parameters.
    InvalidInput(String),
    /// Operation invoked before load, or after completion where disallowed.
    NotReady,
    /// Navigation target outside the valid question range.
    OutOfRange { index: usize, total: usize },
}

impl fmt::Display for QuizError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuizError::InvalidInput(reason) => write!(f, "invalid input: {}", reason),
            QuizError::NotReady => write!(f, "quiz is not ready for this operation"),
            QuizError::OutOfRange { index, total } => {
                write!(f, "question index {} out of range ({} questions)", index, total)
            }
        }
    }
}

impl std::error::Error for QuizError {}
