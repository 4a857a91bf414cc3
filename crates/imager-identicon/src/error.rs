//! Error types for identicon derivation.

/// Error returned when an identicon cannot be derived or described.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum IdenticonError {
    /// The input string was empty.
    #[error("identicon input must not be empty")]
    EmptyInput,
    /// The requested output size was not positive.
    #[error("invalid output size: {0}")]
    InvalidSize(u32),
}
