//! Unit 2-sphere generator.

use crate::circle::Circle;
use crate::error::LdsError;
use crate::vdcorput::VdCorput;

/// Low-discrepancy points on the unit 2-sphere in R^3.
///
/// The polar marginal of the uniform distribution on the 2-sphere admits a
/// direct analytic inverse: `cos φ` is uniform on `[-1, 1]`, so one Van der
/// Corput draw maps to `cos φ = 2·v − 1` with no table lookup. The
/// azimuthal part is delegated to a nested [`Circle`].
#[derive(Debug, Clone)]
pub struct Sphere {
    vdc: VdCorput,
    circle: Circle,
}

impl Sphere {
    /// Create a 2-sphere generator from two radix bases: one for the polar
    /// draw, one for the nested circle.
    ///
    /// # Errors
    ///
    /// Returns [`LdsError::BaseTooSmall`] if either base is below 2.
    pub fn new(polar_base: u32, circle_base: u32) -> Result<Self, LdsError> {
        Ok(Self {
            vdc: VdCorput::new(polar_base)?,
            circle: Circle::new(circle_base)?,
        })
    }

    /// Next point on the unit 2-sphere.
    pub fn pop(&mut self) -> [f64; 3] {
        let cos_phi = 2.0 * self.vdc.pop() - 1.0;
        // clamp against round-off before the square root
        let sin_phi = (1.0 - cos_phi * cos_phi).max(0.0).sqrt();
        let [c0, c1] = self.circle.pop();
        [sin_phi * c0, sin_phi * c1, cos_phi]
    }

    /// Reset this level and the nested circle to the same counter.
    pub fn reseed(&mut self, seed: u64) {
        self.vdc.reseed(seed);
        self.circle.reseed(seed);
    }
}
