//! `lds sphere` - points on the unit n-sphere.

use anyhow::{Context, Result};
use lds_sphere::SphereVariant;
use tracing::info;

use super::{emit, generate};

pub fn run(bases: &[u32], count: usize, seed: Option<u64>, format: &str) -> Result<()> {
    let mut gen = SphereVariant::new(bases)
        .with_context(|| format!("invalid sphere configuration for bases {bases:?}"))?;
    info!(
        dimension = gen.dimension(),
        count, "generating sphere points"
    );
    let batch = generate(&mut gen, bases, count, seed);
    emit(&batch, format)
}
