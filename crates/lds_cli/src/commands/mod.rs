//! CLI command implementations
//!
//! Each submodule implements a specific CLI command; shared batch
//! generation and output formatting live here.

pub mod check;
pub mod cylinder;
pub mod halton;
pub mod sphere;

use anyhow::Result;
use lds_sphere::LowDiscrepancySequence;
use serde::Serialize;

/// A generated batch of points, in draw order, with the configuration that
/// produced it. This is also the JSON output document.
#[derive(Serialize)]
pub struct PointBatch {
    /// Radix bases, outermost level first
    pub bases: Vec<u32>,
    /// Coordinates per point
    pub dimension: usize,
    /// Points in generation order
    pub points: Vec<Vec<f64>>,
}

/// Drive a generator for `count` draws, optionally reseeding first.
pub fn generate(
    gen: &mut dyn LowDiscrepancySequence,
    bases: &[u32],
    count: usize,
    seed: Option<u64>,
) -> PointBatch {
    if let Some(s) = seed {
        gen.reseed(s);
    }
    PointBatch {
        bases: bases.to_vec(),
        dimension: gen.dimension(),
        points: (0..count).map(|_| gen.pop_point()).collect(),
    }
}

/// Print a batch in the requested format.
pub fn emit(batch: &PointBatch, format: &str) -> Result<()> {
    match format {
        "json" => println!("{}", serde_json::to_string_pretty(batch)?),
        "table" => {
            for point in &batch.points {
                let row: Vec<String> = point.iter().map(|c| format!("{c:>12.8}")).collect();
                println!("{}", row.join(" "));
            }
        }
        other => anyhow::bail!("unknown output format: {other} (expected table or json)"),
    }
    Ok(())
}
