use thiserror::Error;

/// Errors raised by positional operations whose index falls outside the
/// documented domain. Ordered operations never fail on a missing element;
/// they report absence through their return value instead.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TreeError {
    #[error("index {index} out of range for tree of size {size}")]
    OutOfRange { index: usize, size: usize },
    #[error("invalid range {from}..{to} for tree of size {size}")]
    InvalidRange { from: usize, to: usize, size: usize },
}
