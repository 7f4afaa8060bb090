//! Recursive generators on n-dimensional cylindrical manifolds.

use lds_core::{Circle, LdsError, VdCorput};

use crate::traits::LowDiscrepancySequence;

/// Child of a [`CylindN`] level: the circle base case or a further
/// recursive level.
#[derive(Debug)]
pub enum CylindVariant {
    /// The unit-circle base case (one base).
    Base(Circle),
    /// A further recursive level (two or more bases).
    Recursive(Box<CylindN>),
}

impl CylindVariant {
    /// Build a cylinder generator of the dimension implied by the base
    /// list: one base yields the [`Circle`] base case, two or more yield a
    /// recursive [`CylindN`].
    pub fn new(bases: &[u32]) -> Result<Self, LdsError> {
        match bases.len() {
            0 => Err(LdsError::BaseListTooShort { got: 0, need: 1 }),
            1 => Ok(Self::Base(Circle::new(bases[0])?)),
            _ => Ok(Self::Recursive(Box::new(CylindN::new(bases)?))),
        }
    }

    /// Next point as a coordinate vector.
    pub fn pop(&mut self) -> Vec<f64> {
        match self {
            Self::Base(circle) => circle.pop().to_vec(),
            Self::Recursive(cyl) => cyl.pop(),
        }
    }

    /// Reset the whole tree to the same counter.
    pub fn reseed(&mut self, seed: u64) {
        match self {
            Self::Base(circle) => circle.reseed(seed),
            Self::Recursive(cyl) => cyl.reseed(seed),
        }
    }

    /// Number of coordinates per point.
    pub fn dimension(&self) -> usize {
        match self {
            Self::Base(_) => 2,
            Self::Recursive(cyl) => cyl.dimension(),
        }
    }
}

/// Recursive generator on an n-dimensional cylindrical product manifold.
///
/// The cylindrical marginal is exactly uniform on `[-1, 1]`, so unlike the
/// sphere generators no integral table is needed: each level maps its Van
/// der Corput draw directly to `cos φ = 2·v − 1`, scales the child point by
/// `sin φ` and appends `cos φ`, bottoming out at a [`Circle`]. A level
/// built from m bases emits points with m+1 coordinates.
#[derive(Debug)]
pub struct CylindN {
    vdc: VdCorput,
    child: CylindVariant,
}

impl CylindN {
    /// Build a recursive cylinder generator, one base per level, outermost
    /// first; the last base seeds the circle.
    ///
    /// # Errors
    ///
    /// [`LdsError::BaseListTooShort`] for fewer than two bases,
    /// [`LdsError::BaseTooSmall`] for any base below 2.
    pub fn new(bases: &[u32]) -> Result<Self, LdsError> {
        let m = bases.len();
        if m < 2 {
            return Err(LdsError::BaseListTooShort { got: m, need: 2 });
        }
        let child = if m == 2 {
            CylindVariant::Base(Circle::new(bases[1])?)
        } else {
            CylindVariant::Recursive(Box::new(CylindN::new(&bases[1..])?))
        };
        Ok(Self {
            vdc: VdCorput::new(bases[0])?,
            child,
        })
    }

    /// Next point, length `dimension()`.
    pub fn pop(&mut self) -> Vec<f64> {
        let cos_phi = 2.0 * self.vdc.pop() - 1.0; // map to [-1, 1]
        let sin_phi = (1.0 - cos_phi * cos_phi).max(0.0).sqrt();
        let mut point = self.child.pop();
        for coord in &mut point {
            *coord *= sin_phi;
        }
        point.push(cos_phi);
        point
    }

    /// Reset this level and, recursively, the whole child tree.
    pub fn reseed(&mut self, seed: u64) {
        self.vdc.reseed(seed);
        self.child.reseed(seed);
    }

    /// Number of coordinates per point (base list length + 1).
    #[inline]
    pub fn dimension(&self) -> usize {
        self.child.dimension() + 1
    }
}

impl LowDiscrepancySequence for CylindN {
    fn dimension(&self) -> usize {
        CylindN::dimension(self)
    }

    fn pop_point(&mut self) -> Vec<f64> {
        self.pop()
    }

    fn reseed(&mut self, seed: u64) {
        CylindN::reseed(self, seed);
    }
}

impl LowDiscrepancySequence for CylindVariant {
    fn dimension(&self) -> usize {
        CylindVariant::dimension(self)
    }

    fn pop_point(&mut self) -> Vec<f64> {
        self.pop()
    }

    fn reseed(&mut self, seed: u64) {
        CylindVariant::reseed(self, seed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn norm(p: &[f64]) -> f64 {
        p.iter().map(|x| x * x).sum::<f64>().sqrt()
    }

    #[test]
    fn test_first_point() {
        let mut gen = CylindN::new(&[2, 3, 5, 7]).unwrap();
        let p = gen.pop();
        assert_eq!(p.len(), 5);
        assert_abs_diff_eq!(p[1], 0.5896942325, epsilon = 1e-9);
        assert_abs_diff_eq!(norm(&p), 1.0, epsilon = 1e-9);
    }

    #[test]
    fn test_minimum_dimension_dispatches_to_circle() {
        let gen = CylindN::new(&[2, 3]).unwrap();
        assert!(matches!(gen.child, CylindVariant::Base(_)));
        assert_eq!(gen.dimension(), 3);

        let variant = CylindVariant::new(&[5]).unwrap();
        assert!(matches!(variant, CylindVariant::Base(_)));
    }

    #[test]
    fn test_base_list_too_short() {
        assert_eq!(
            CylindN::new(&[2]).unwrap_err(),
            LdsError::BaseListTooShort { got: 1, need: 2 }
        );
        assert_eq!(
            CylindVariant::new(&[]).unwrap_err(),
            LdsError::BaseListTooShort { got: 0, need: 1 }
        );
    }

    #[test]
    fn test_ring_sub_blocks_unit_within_slice() {
        // the innermost two coordinates, rescaled by the accumulated sine
        // factors, must sit on the unit circle; equivalently the whole
        // point has unit norm and so does every suffix-normalised slice
        let mut gen = CylindN::new(&[2, 3, 5, 7]).unwrap();
        for _ in 0..200 {
            let p = gen.pop();
            assert_abs_diff_eq!(norm(&p), 1.0, epsilon = 1e-9);
            // strip the appended coordinate and renormalise: the remainder
            // is a scaled copy of the child point, itself unit-norm
            let child_scaled = &p[..p.len() - 1];
            let scale = norm(child_scaled);
            if scale > 1e-12 {
                let child_norm: f64 =
                    child_scaled.iter().map(|x| (x / scale) * (x / scale)).sum();
                assert_abs_diff_eq!(child_norm, 1.0, epsilon = 1e-9);
            }
        }
    }

    #[test]
    fn test_reseed_matches_advanced_fresh_generator() {
        let mut gen = CylindN::new(&[2, 3, 5]).unwrap();
        for _ in 0..20 {
            gen.pop();
        }
        gen.reseed(7);
        let replay: Vec<Vec<f64>> = (0..5).map(|_| gen.pop()).collect();

        let mut fresh = CylindN::new(&[2, 3, 5]).unwrap();
        for _ in 0..7 {
            fresh.pop();
        }
        let advanced: Vec<Vec<f64>> = (0..5).map(|_| fresh.pop()).collect();
        assert_eq!(replay, advanced);
    }
}
