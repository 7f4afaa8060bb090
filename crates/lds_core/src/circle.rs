//! Unit-circle generator.

use crate::error::LdsError;
use crate::vdcorput::VdCorput;

use std::f64::consts::TAU;

/// Low-discrepancy points on the unit circle.
///
/// Each draw maps one Van der Corput value to an angle `θ = 2π·v` and
/// returns `[cos θ, sin θ]`, which lies on the unit circle to floating
/// tolerance.
#[derive(Debug, Clone)]
pub struct Circle {
    vdc: VdCorput,
}

impl Circle {
    /// Create a circle generator from one radix base.
    ///
    /// # Errors
    ///
    /// Returns [`LdsError::BaseTooSmall`] for bases below 2.
    pub fn new(base: u32) -> Result<Self, LdsError> {
        Ok(Self {
            vdc: VdCorput::new(base)?,
        })
    }

    /// Next point on the unit circle as `[cos θ, sin θ]`.
    pub fn pop(&mut self) -> [f64; 2] {
        let theta = TAU * self.vdc.pop();
        let (sin_theta, cos_theta) = theta.sin_cos();
        [cos_theta, sin_theta]
    }

    /// Reset the underlying counter to `seed`.
    pub fn reseed(&mut self, seed: u64) {
        self.vdc.reseed(seed);
    }
}
