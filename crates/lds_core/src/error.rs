//! Construction-time configuration errors.

use thiserror::Error;

/// Configuration errors raised while building a generator.
///
/// Every variant is a construction-time failure: generators validate their
/// base lists up front and are infallible afterwards, so `pop` and `reseed`
/// never return errors.
///
/// # Examples
/// ```
/// use lds_core::{LdsError, VdCorput};
///
/// let err = VdCorput::new(1).unwrap_err();
/// assert_eq!(err, LdsError::BaseTooSmall { base: 1 });
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LdsError {
    /// A radix base below 2 cannot produce digits.
    #[error("radix base must be at least 2, got {base}")]
    BaseTooSmall {
        /// The offending base
        base: u32,
    },

    /// The base list does not cover every recursion level of the requested
    /// generator.
    #[error("base list too short: got {got}, need at least {need}")]
    BaseListTooShort {
        /// Number of bases supplied
        got: usize,
        /// Minimum number of bases required
        need: usize,
    },
}
