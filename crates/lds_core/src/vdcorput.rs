//! Van der Corput radical-inverse sequence.

use crate::error::LdsError;

/// Radical inverse of `k` in the given base.
///
/// Writes `k` in `base` as digits d0 (least significant) .. dk and returns
/// `Σ d_i · base^-(i+1)`, a value in `[0, 1)`.
///
/// # Examples
/// ```
/// use lds_core::vdc;
///
/// assert_eq!(vdc(1, 2), 0.5);
/// assert_eq!(vdc(2, 2), 0.25);
/// assert_eq!(vdc(3, 2), 0.75);
/// ```
pub fn vdc(mut k: u64, base: u32) -> f64 {
    let b = u64::from(base);
    let mut res = 0.0;
    let mut denom = 1.0;
    while k != 0 {
        denom *= base as f64;
        let remainder = k % b;
        k /= b;
        res += remainder as f64 / denom;
    }
    res
}

/// Van der Corput sequence generator.
///
/// The canonical 1-D low-discrepancy sequence for an integer base: the k-th
/// draw is the radical inverse of k. The counter starts at 0 and is
/// incremented before each draw, so a fresh base-2 generator yields
/// 0.5, 0.25, 0.75, 0.125, ...
///
/// Determinism: identical `(base, counter)` state always reproduces
/// identical output. [`VdCorput::reseed`] is an absolute counter reset, not
/// an advance.
#[derive(Debug, Clone)]
pub struct VdCorput {
    count: u64,
    base: u32,
}

impl VdCorput {
    /// Create a generator for the given radix base.
    ///
    /// # Errors
    ///
    /// Returns [`LdsError::BaseTooSmall`] for bases below 2.
    pub fn new(base: u32) -> Result<Self, LdsError> {
        if base < 2 {
            return Err(LdsError::BaseTooSmall { base });
        }
        Ok(Self { count: 0, base })
    }

    /// Advance the counter and return the next value in `[0, 1)`.
    pub fn pop(&mut self) -> f64 {
        self.count += 1;
        vdc(self.count, self.base)
    }

    /// Reset the counter to an absolute position.
    ///
    /// The next `pop` returns the radical inverse of `seed + 1`.
    pub fn reseed(&mut self, seed: u64) {
        self.count = seed;
    }

    /// The configured radix base.
    #[inline]
    pub fn base(&self) -> u32 {
        self.base
    }

    /// Current counter position.
    #[inline]
    pub fn count(&self) -> u64 {
        self.count
    }
}
