//! `lds check` - build self-test against known first-draw values.

use anyhow::{ensure, Result};
use lds_sphere::{CylindN, Sphere3, SphereN};

struct Scenario {
    name: &'static str,
    bases: &'static [u32],
    expected: f64,
    actual: f64,
}

/// Replays the first draw of each generator family and compares
/// coordinate [1] against its known value.
pub fn run() -> Result<()> {
    println!("lds_core {}", lds_core::VERSION);
    println!();

    let scenarios = [
        Scenario {
            name: "sphere3",
            bases: &[2, 3, 5],
            expected: 0.896665,
            actual: Sphere3::new(&[2, 3, 5])?.pop()[1],
        },
        Scenario {
            name: "sphere_n",
            bases: &[2, 3, 5, 7, 11],
            expected: 0.320904,
            actual: SphereN::new(&[2, 3, 5, 7, 11])?.pop()[1],
        },
        Scenario {
            name: "cylind_n",
            bases: &[2, 3, 5, 7],
            expected: 0.5896942325,
            actual: CylindN::new(&[2, 3, 5, 7])?.pop()[1],
        },
    ];

    let mut all_ok = true;
    for s in &scenarios {
        let ok = (s.actual - s.expected).abs() < 1e-5;
        all_ok &= ok;
        println!(
            "{:<10} bases {:<18} coordinate[1] = {:>12.8} (expected {:>12.8}) {}",
            s.name,
            format!("{:?}", s.bases),
            s.actual,
            s.expected,
            if ok { "ok" } else { "MISMATCH" },
        );
    }

    ensure!(all_ok, "self-test failed: generated values diverged");
    println!();
    println!("All checks passed.");
    Ok(())
}
