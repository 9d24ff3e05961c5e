//! Error types for the minimization pipeline.
//!
//! The core algorithms never fail on well-formed input: everything that can go wrong
//! happens at the boundary, while turning user-supplied text and options into terms.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A token that is not an integer at all.
    #[error("invalid term '{token}': expected a non-negative integer")]
    InvalidToken { token: String },

    /// A syntactically valid but negative integer.
    #[error("invalid term {value}: terms must be non-negative")]
    NegativeTerm { value: i128 },

    /// An explicit width that cannot represent the largest term.
    #[error("width {width} is too small: term set requires {required} variables")]
    WidthTooSmall { width: usize, required: usize },

    /// More variables than a term value can hold.
    #[error("width {width} exceeds the maximum of 64 variables")]
    WidthTooLarge { width: usize },

    /// A pattern string containing characters outside `{0, 1, -}`.
    #[error("invalid pattern '{pattern}': expected only '0', '1' or '-'")]
    InvalidPattern { pattern: String },
}

pub type Result<T> = std::result::Result<T, Error>;
