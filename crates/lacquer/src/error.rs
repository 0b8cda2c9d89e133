//! Error types for color parsing.
//!
//! This module provides [`ColorError`], the only error type in the crate.
//! Hex parsing is the single fallible operation; every other color and theme
//! operation is total over its input domain (out-of-range values clamp, and
//! degenerate HSL inputs resolve to gray rather than failing).

use thiserror::Error;

/// Error type for color construction from external input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// The hex string is not `#RRGGBB` or `#RRGGBBAA` (leading `#` optional).
    #[error("invalid hex color `{input}`: expected #RRGGBB or #RRGGBBAA")]
    InvalidFormat {
        /// The rejected input, verbatim.
        input: String,
    },
}
