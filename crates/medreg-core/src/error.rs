//! # Error Types
//!
//! The core crate's error surface is small: it can only fail when parsing
//! enum labels or dates that arrive from the outside world. All errors use
//! `thiserror` for derive-based `Display` and `Error` implementations.

use thiserror::Error;

/// Top-level error type for the core crate.
#[derive(Error, Debug)]
pub enum MedregError {
    /// An enum label did not match any known variant.
    #[error("unknown {kind} label: {value:?}")]
    UnknownLabel {
        /// Which enumeration was being parsed.
        kind: &'static str,
        /// The offending input.
        value: String,
    },
}

impl MedregError {
    /// Construct an [`MedregError::UnknownLabel`] for the given enum kind.
    pub(crate) fn unknown(kind: &'static str, value: &str) -> Self {
        Self::UnknownLabel {
            kind,
            value: value.to_string(),
        }
    }
}
