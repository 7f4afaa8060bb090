//! Cached antiderivative tables for inverting sine-power densities.

use std::collections::HashMap;
use std::f64::consts::PI;
use std::sync::{Arc, Mutex};

use tracing::debug;

/// Fixed resolution of the angle grid over `[0, π]`.
pub const N_POINTS: usize = 300;

/// Lazily populated cache of the tables `tp(n)[i] = ∫ sin^n` sampled on a
/// uniform angle grid over `[0, π]`.
///
/// The tables satisfy the two-term recurrence
///
/// ```text
/// tp(n)[i] = ((n−1)·tp(n−2)[i] + neg_cosine[i]·sine[i]^(n−1)) / n
/// ```
///
/// with base cases `tp(0) = X` (the grid itself) and `tp(1) = −cos(X)`.
/// Even and odd keys form independent recursion chains and live in two
/// separate stores, so a key is materialised after at most a short walk
/// down its own parity chain.
///
/// Entries are immutable once built and shared as `Arc<[f64]>` views:
/// `get_tp` is idempotent and every generator level holding the same cache
/// reads the same table. Population is guarded by a mutex per store; the
/// computation itself is pure, so the lock only prevents duplicate work and
/// lost inserts, never corruption.
///
/// Per-table invariants: the angle grid is strictly increasing and each
/// value table is monotonically non-decreasing, which is what makes the
/// inverse lookup by interpolation well defined.
#[derive(Debug)]
pub struct TpCache {
    x: Arc<[f64]>,
    neg_cosine: Vec<f64>,
    sine: Vec<f64>,
    even: Mutex<HashMap<u32, Arc<[f64]>>>,
    odd: Mutex<HashMap<u32, Arc<[f64]>>>,
}

impl TpCache {
    /// Build the grid and the two base tables. No sine-power table beyond
    /// `tp(0)`/`tp(1)` is computed until first requested.
    pub fn new() -> Self {
        let x: Arc<[f64]> = (0..N_POINTS)
            .map(|i| i as f64 * PI / (N_POINTS - 1) as f64)
            .collect::<Vec<_>>()
            .into();
        let neg_cosine: Vec<f64> = x.iter().map(|&v| -v.cos()).collect();
        let sine: Vec<f64> = x.iter().map(|&v| v.sin()).collect();

        let neg_cosine_arc: Arc<[f64]> = neg_cosine.clone().into();
        let even = Mutex::new(HashMap::from([(0, Arc::clone(&x))]));
        let odd = Mutex::new(HashMap::from([(1, neg_cosine_arc)]));

        Self {
            x,
            neg_cosine,
            sine,
            even,
            odd,
        }
    }

    /// The uniform angle grid over `[0, π]`.
    #[inline]
    pub fn angles(&self) -> &[f64] {
        &self.x
    }

    /// Read-only view of the table for dimension key `n`, materialising it
    /// (and any missing ancestors on the same parity chain) on first
    /// request.
    pub fn get_tp(&self, n: u32) -> Arc<[f64]> {
        let store = if n % 2 == 0 { &self.even } else { &self.odd };
        let mut cache = store.lock().expect("tp cache mutex poisoned");
        if let Some(tp) = cache.get(&n) {
            return Arc::clone(tp);
        }

        // Walk down to the lowest uncached key on this parity chain, then
        // build upward. Keys 0 and 1 are seeded at construction, so the
        // walk always terminates above them.
        let mut k = n;
        while !cache.contains_key(&(k - 2)) {
            k -= 2;
        }
        while k <= n {
            let prev = Arc::clone(&cache[&(k - 2)]);
            let n1 = f64::from(k) - 1.0;
            let table: Arc<[f64]> = (0..N_POINTS)
                .map(|i| (n1 * prev[i] + self.neg_cosine[i] * self.sine[i].powf(n1)) / f64::from(k))
                .collect::<Vec<_>>()
                .into();
            debug!(n = k, "materialised sine-power integral table");
            cache.insert(k, table);
            k += 2;
        }
        Arc::clone(&cache[&n])
    }
}

impl Default for TpCache {
    fn default() -> Self {
        Self::new()
    }
}
