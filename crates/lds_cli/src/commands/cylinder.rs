//! `lds cylinder` - points on an n-dimensional cylindrical manifold.

use anyhow::{Context, Result};
use lds_sphere::CylindVariant;
use tracing::info;

use super::{emit, generate};

pub fn run(bases: &[u32], count: usize, seed: Option<u64>, format: &str) -> Result<()> {
    let mut gen = CylindVariant::new(bases)
        .with_context(|| format!("invalid cylinder configuration for bases {bases:?}"))?;
    info!(
        dimension = gen.dimension(),
        count, "generating cylinder points"
    );
    let batch = generate(&mut gen, bases, count, seed);
    emit(&batch, format)
}
