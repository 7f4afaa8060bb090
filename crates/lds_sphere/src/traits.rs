//! Generator capability trait.

/// Capability shared by every composite generator: produce the next point
/// as an ordered coordinate sequence and reseed the whole tree.
///
/// Dispatch *inside* a generator tree stays on the closed sum types
/// ([`crate::SphereVariant`], [`crate::CylindVariant`]); this trait exists
/// for consumers that drive a generator through a uniform surface, such as
/// dispersion measurement or the demo CLI.
pub trait LowDiscrepancySequence {
    /// Number of coordinates in each generated point.
    fn dimension(&self) -> usize;

    /// Advance the sequence and return the next point.
    fn pop_point(&mut self) -> Vec<f64>;

    /// Reset every counter in the tree to the absolute position `seed`.
    ///
    /// After reseeding, the generator reproduces the same points as a
    /// freshly constructed instance advanced `seed` draws. Note that all
    /// nested levels share the one counter value: reseeding guarantees
    /// reproducibility, it does not decorrelate sibling dimensions.
    fn reseed(&mut self, seed: u64);
}

impl LowDiscrepancySequence for lds_core::HaltonN {
    fn dimension(&self) -> usize {
        lds_core::HaltonN::dimension(self)
    }

    fn pop_point(&mut self) -> Vec<f64> {
        self.pop()
    }

    fn reseed(&mut self, seed: u64) {
        lds_core::HaltonN::reseed(self, seed);
    }
}
