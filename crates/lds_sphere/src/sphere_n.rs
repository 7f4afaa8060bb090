//! Recursive generators on the unit n-sphere.

use std::sync::Arc;

use lds_core::{LdsError, Sphere, VdCorput};

use crate::interp::interp;
use crate::tables::TpCache;
use crate::traits::LowDiscrepancySequence;

/// Base-case generator on the unit 3-sphere in R^4.
///
/// Consumes three radix bases: one for its own polar draw and two for the
/// nested 2-sphere. The polar marginal density `sin² θ` is inverted through
/// the `tp(2)` table, whose value range is exactly `[0, π/2]`, so the
/// affine remap of the Van der Corput draw lands inside the table by
/// construction.
#[derive(Debug)]
pub struct Sphere3 {
    vdc: VdCorput,
    sphere2: Sphere,
    cache: Arc<TpCache>,
}

impl Sphere3 {
    /// Build a 3-sphere generator with a private table cache.
    ///
    /// # Errors
    ///
    /// [`LdsError::BaseListTooShort`] for fewer than three bases,
    /// [`LdsError::BaseTooSmall`] for any base below 2.
    pub fn new(bases: &[u32]) -> Result<Self, LdsError> {
        Self::with_cache(bases, Arc::new(TpCache::new()))
    }

    /// Build a 3-sphere generator reading tables from a shared cache.
    pub fn with_cache(bases: &[u32], cache: Arc<TpCache>) -> Result<Self, LdsError> {
        if bases.len() < 3 {
            return Err(LdsError::BaseListTooShort {
                got: bases.len(),
                need: 3,
            });
        }
        Ok(Self {
            vdc: VdCorput::new(bases[0])?,
            sphere2: Sphere::new(bases[1], bases[2])?,
            cache,
        })
    }

    /// Next point on the unit 3-sphere.
    pub fn pop(&mut self) -> [f64; 4] {
        let vd = self.vdc.pop();
        let tp = self.cache.get_tp(2);
        let ti = tp[0] + (tp[tp.len() - 1] - tp[0]) * vd;
        let xi = interp(&tp[..], self.cache.angles(), ti);
        let (sin_xi, cos_xi) = xi.sin_cos();
        let [s0, s1, s2] = self.sphere2.pop();
        [sin_xi * s0, sin_xi * s1, sin_xi * s2, cos_xi]
    }

    /// Reset this level and the nested 2-sphere to the same counter.
    pub fn reseed(&mut self, seed: u64) {
        self.vdc.reseed(seed);
        self.sphere2.reseed(seed);
    }
}

/// Child of a [`SphereN`] level: either the 3-sphere base case or a further
/// recursive level. A closed sum type dispatched by `match` keeps the
/// recursion depth explicit and bounded by the base list length.
#[derive(Debug)]
pub enum SphereVariant {
    /// The 3-sphere base case (three bases).
    Base(Sphere3),
    /// A further recursive level (four or more bases).
    Recursive(Box<SphereN>),
}

impl SphereVariant {
    /// Build a sphere generator of the dimension implied by the base list:
    /// three bases yield the [`Sphere3`] base case, four or more yield a
    /// recursive [`SphereN`]. A private table cache is created and shared
    /// down the whole tree.
    pub fn new(bases: &[u32]) -> Result<Self, LdsError> {
        Self::with_cache(bases, Arc::new(TpCache::new()))
    }

    /// As [`SphereVariant::new`] but reading tables from a shared cache, so
    /// several trees can reuse the same materialised tables.
    pub fn with_cache(bases: &[u32], cache: Arc<TpCache>) -> Result<Self, LdsError> {
        match bases.len() {
            0..=2 => Err(LdsError::BaseListTooShort {
                got: bases.len(),
                need: 3,
            }),
            3 => Ok(Self::Base(Sphere3::with_cache(bases, cache)?)),
            _ => Ok(Self::Recursive(Box::new(SphereN::with_cache(
                bases, cache,
            )?))),
        }
    }

    /// Next point as a coordinate vector.
    pub fn pop(&mut self) -> Vec<f64> {
        match self {
            Self::Base(s3) => s3.pop().to_vec(),
            Self::Recursive(sn) => sn.pop(),
        }
    }

    /// Reset the whole tree to the same counter.
    pub fn reseed(&mut self, seed: u64) {
        match self {
            Self::Base(s3) => s3.reseed(seed),
            Self::Recursive(sn) => sn.reseed(seed),
        }
    }

    /// Number of coordinates per point.
    pub fn dimension(&self) -> usize {
        match self {
            Self::Base(_) => 4,
            Self::Recursive(sn) => sn.dimension(),
        }
    }
}

/// Recursive generator on the unit n-sphere, n ≥ 4.
///
/// A level built from m bases owns one Van der Corput generator and one
/// child generator over the remaining m−1 bases, bottoming out at
/// [`Sphere3`] when exactly four bases are left. Each call draws a scalar,
/// remaps it affinely into the value range of the `tp(m−1)` table, inverts
/// the table by interpolation to get the split angle `xi`, scales the
/// child point by `sin xi` and appends `cos xi`. The output has m+1
/// coordinates and unit Euclidean norm to floating tolerance.
#[derive(Debug)]
pub struct SphereN {
    vdc: VdCorput,
    n: u32,
    child: SphereVariant,
    cache: Arc<TpCache>,
}

impl SphereN {
    /// Build a recursive sphere generator with a private table cache.
    ///
    /// # Errors
    ///
    /// [`LdsError::BaseListTooShort`] for fewer than four bases,
    /// [`LdsError::BaseTooSmall`] for any base below 2.
    pub fn new(bases: &[u32]) -> Result<Self, LdsError> {
        Self::with_cache(bases, Arc::new(TpCache::new()))
    }

    /// Build a recursive sphere generator reading tables from a shared
    /// cache. Every level of the tree shares the one cache.
    pub fn with_cache(bases: &[u32], cache: Arc<TpCache>) -> Result<Self, LdsError> {
        let m = bases.len();
        if m < 4 {
            return Err(LdsError::BaseListTooShort { got: m, need: 4 });
        }
        let child = if m == 4 {
            SphereVariant::Base(Sphere3::with_cache(&bases[1..], Arc::clone(&cache))?)
        } else {
            SphereVariant::Recursive(Box::new(SphereN::with_cache(
                &bases[1..],
                Arc::clone(&cache),
            )?))
        };
        Ok(Self {
            vdc: VdCorput::new(bases[0])?,
            n: (m - 1) as u32,
            child,
            cache,
        })
    }

    /// Next point on the unit n-sphere, length `dimension()`.
    pub fn pop(&mut self) -> Vec<f64> {
        let vd = self.vdc.pop();
        let tp = self.cache.get_tp(self.n);
        // affine remap into the table's value range
        let ti = tp[0] + (tp[tp.len() - 1] - tp[0]) * vd;
        let xi = interp(&tp[..], self.cache.angles(), ti);
        let (sin_xi, cos_xi) = xi.sin_cos();
        let mut point = self.child.pop();
        for coord in &mut point {
            *coord *= sin_xi;
        }
        point.push(cos_xi);
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
        self.n as usize + 2
    }
}

impl LowDiscrepancySequence for Sphere3 {
    fn dimension(&self) -> usize {
        4
    }

    fn pop_point(&mut self) -> Vec<f64> {
        self.pop().to_vec()
    }

    fn reseed(&mut self, seed: u64) {
        Sphere3::reseed(self, seed);
    }
}

impl LowDiscrepancySequence for SphereN {
    fn dimension(&self) -> usize {
        SphereN::dimension(self)
    }

    fn pop_point(&mut self) -> Vec<f64> {
        self.pop()
    }

    fn reseed(&mut self, seed: u64) {
        SphereN::reseed(self, seed);
    }
}

impl LowDiscrepancySequence for SphereVariant {
    fn dimension(&self) -> usize {
        SphereVariant::dimension(self)
    }

    fn pop_point(&mut self) -> Vec<f64> {
        self.pop()
    }

    fn reseed(&mut self, seed: u64) {
        SphereVariant::reseed(self, seed);
    }
}
