//! Error types for ProbKit

use thiserror::Error;

/// ProbKit error type
///
/// The four calculation kinds (`Validation`, `Domain`, `Format`, `Lookup`)
/// classify failures for callers; the dispatcher propagates them unchanged.
/// `Io` and `Json` exist for the front ends and never originate inside the
/// computation layer.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// An input probability lies outside [0, 1], or a required request
    /// parameter is missing. Checked at the boundary, before dispatch.
    #[error("validation error: {0}")]
    Validation(String),

    /// Mathematically undefined operation: conditioning on P(A) = 0, a zero
    /// Bayes denominator, sigma <= 0, lambda <= 0, k outside [0, n], ...
    #[error("domain error: {0}")]
    Domain(String),

    /// An Expected-Value outcome name failed to parse as a number.
    #[error("format error: {0}")]
    Format(String),

    /// A referenced event name is absent from the supplied variable map.
    #[error("lookup error: {0}")]
    Lookup(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_carries_kind() {
        let err = Error::Domain("cannot condition on a zero-probability event".to_string());
        assert!(err.to_string().starts_with("domain error:"));

        let err = Error::Lookup("event `A` not found".to_string());
        assert!(err.to_string().starts_with("lookup error:"));
    }
}
