//! Cross-module properties: normalisation, reseeding, cache sharing.

use std::sync::Arc;

use approx::assert_abs_diff_eq;
use lds_sphere::{CylindN, LowDiscrepancySequence, SphereVariant, TpCache};
use proptest::prelude::*;

const PRIMES: [u32; 8] = [2, 3, 5, 7, 11, 13, 17, 19];

fn norm(p: &[f64]) -> f64 {
    p.iter().map(|x| x * x).sum::<f64>().sqrt()
}

#[test]
fn sphere_variant_reseed_reproduces_full_tree() {
    let mut gen = SphereVariant::new(&[2, 3, 5, 7, 11]).unwrap();
    let reference: Vec<Vec<f64>> = (0..8).map(|_| gen.pop_point()).collect();

    // drive the generator somewhere else, then reseed back to the origin
    for _ in 0..13 {
        gen.pop_point();
    }
    gen.reseed(0);
    let replay: Vec<Vec<f64>> = (0..8).map(|_| gen.pop_point()).collect();
    assert_eq!(reference, replay);
}

#[test]
fn trees_sharing_a_cache_stay_independent() {
    // two trees over one cache: interleaved draws from one must not
    // perturb the other's sequence
    let cache = Arc::new(TpCache::new());
    let mut solo = SphereVariant::with_cache(&[2, 3, 5, 7], Arc::clone(&cache)).unwrap();
    let expected: Vec<Vec<f64>> = (0..6).map(|_| solo.pop_point()).collect();

    let mut a = SphereVariant::with_cache(&[2, 3, 5, 7], Arc::clone(&cache)).unwrap();
    let mut b = SphereVariant::with_cache(&[2, 3, 5, 7], Arc::clone(&cache)).unwrap();
    for (i, e) in expected.iter().enumerate() {
        assert_eq!(&a.pop_point(), e, "tree a diverged at draw {i}");
        b.pop_point();
    }
}

#[test]
fn trait_object_surface_matches_inherent_api() {
    let mut inherent = CylindN::new(&[2, 3, 5]).unwrap();
    let mut boxed: Box<dyn LowDiscrepancySequence> =
        Box::new(CylindN::new(&[2, 3, 5]).unwrap());
    assert_eq!(boxed.dimension(), 4);
    for _ in 0..10 {
        assert_eq!(inherent.pop(), boxed.pop_point());
    }
}

proptest! {
    #[test]
    fn sphere_points_have_unit_norm(extra_levels in 0usize..5, draws in 1usize..64) {
        let bases = &PRIMES[..3 + extra_levels];
        let mut gen = SphereVariant::new(bases).unwrap();
        prop_assert_eq!(gen.dimension(), bases.len() + 1);
        for _ in 0..draws {
            let p = gen.pop_point();
            prop_assert!((norm(&p) - 1.0).abs() < 1e-6);
        }
    }

    #[test]
    fn cylinder_points_have_unit_norm(extra_levels in 0usize..6, draws in 1usize..64) {
        let bases = &PRIMES[..2 + extra_levels];
        let mut gen = CylindN::new(bases).unwrap();
        for _ in 0..draws {
            let p = gen.pop_point();
            prop_assert_eq!(p.len(), bases.len() + 1);
            prop_assert!((norm(&p) - 1.0).abs() < 1e-6);
        }
    }

    #[test]
    fn reseed_equals_fresh_generator_advanced(seed in 0u64..200, draws in 1usize..16) {
        let mut reseeded = SphereVariant::new(&[2, 3, 5, 7]).unwrap();
        reseeded.reseed(seed);

        let mut advanced = SphereVariant::new(&[2, 3, 5, 7]).unwrap();
        for _ in 0..seed {
            advanced.pop_point();
        }

        for _ in 0..draws {
            let r = reseeded.pop_point();
            let a = advanced.pop_point();
            for (x, y) in r.iter().zip(a.iter()) {
                assert_abs_diff_eq!(x, y);
            }
        }
    }
}
