//! `lds halton` - points in the unit hypercube.

use anyhow::{Context, Result};
use lds_core::HaltonN;
use tracing::info;

use super::{emit, generate};

pub fn run(bases: &[u32], count: usize, seed: Option<u64>, format: &str) -> Result<()> {
    let mut gen = HaltonN::new(bases)
        .with_context(|| format!("invalid Halton configuration for bases {bases:?}"))?;
    info!(dimension = bases.len(), count, "generating Halton points");
    let batch = generate(&mut gen, bases, count, seed);
    emit(&batch, format)
}
