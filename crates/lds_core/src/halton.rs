//! n-dimensional Halton sequence.

use crate::error::LdsError;
use crate::vdcorput::VdCorput;

/// Halton sequence in n dimensions: one Van der Corput generator per
/// coordinate, each with its own radix base. Bases should be pairwise
/// coprime (conventionally the first n primes) for good uniformity, but
/// this is not enforced.
#[derive(Debug, Clone)]
pub struct HaltonN {
    vdcs: Vec<VdCorput>,
}

impl HaltonN {
    /// Create an n-dimensional Halton generator, one base per coordinate.
    ///
    /// # Errors
    ///
    /// Returns [`LdsError::BaseListTooShort`] for an empty base list and
    /// [`LdsError::BaseTooSmall`] if any base is below 2.
    pub fn new(bases: &[u32]) -> Result<Self, LdsError> {
        if bases.is_empty() {
            return Err(LdsError::BaseListTooShort { got: 0, need: 1 });
        }
        let vdcs = bases
            .iter()
            .map(|&b| VdCorput::new(b))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { vdcs })
    }

    /// Number of coordinates per point.
    #[inline]
    pub fn dimension(&self) -> usize {
        self.vdcs.len()
    }

    /// Next point in the unit hypercube `[0, 1)^n`.
    pub fn pop(&mut self) -> Vec<f64> {
        self.vdcs.iter_mut().map(VdCorput::pop).collect()
    }

    /// Reset every coordinate's counter to `seed`.
    pub fn reseed(&mut self, seed: u64) {
        for vdc in &mut self.vdcs {
            vdc.reseed(seed);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_first_point() {
        let mut gen = HaltonN::new(&[2, 3, 5, 7]).unwrap();
        let p = gen.pop();
        assert_eq!(p.len(), 4);
        assert_abs_diff_eq!(p[0], 0.5);
        assert_abs_diff_eq!(p[1], 1.0 / 3.0);
        assert_abs_diff_eq!(p[2], 0.2);
        assert_abs_diff_eq!(p[3], 1.0 / 7.0);
    }

    #[test]
    fn test_empty_base_list() {
        assert_eq!(
            HaltonN::new(&[]).unwrap_err(),
            LdsError::BaseListTooShort { got: 0, need: 1 }
        );
    }

    #[test]
    fn test_invalid_base_rejected() {
        assert_eq!(
            HaltonN::new(&[2, 1, 5]).unwrap_err(),
            LdsError::BaseTooSmall { base: 1 }
        );
    }

    #[test]
    fn test_reseed_resets_all_coordinates() {
        let mut gen = HaltonN::new(&[2, 3]).unwrap();
        let first = gen.pop();
        for _ in 0..7 {
            gen.pop();
        }
        gen.reseed(0);
        assert_eq!(gen.pop(), first);
    }
}
