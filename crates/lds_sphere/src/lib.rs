//! # lds_sphere: Recursive Sphere and Cylinder Generators
//!
//! Deterministic low-discrepancy point sequences on n-dimensional spheres
//! and cylindrical product manifolds, built by recursive dimension lifting:
//! a generator of dimension n draws one scalar from its own Van der Corput
//! sequence, converts it into an angular split coefficient, requests one
//! point from its nested (n−1)-dimensional generator, scales that point and
//! appends one new coordinate.
//!
//! The sphere generators invert the polar marginal density `sin^(n−1) θ`
//! through cached antiderivative tables ([`TpCache`]) and monotone
//! piecewise-linear interpolation; the cylindrical marginal is uniform on
//! `[-1, 1]` and needs no table.
//!
//! ## Layering
//!
//! This crate depends only on `lds_core` (the 1-D sequences and closed-form
//! base generators). Consumers such as dispersion measurement or demo CLIs
//! sit above it and only rely on the [`LowDiscrepancySequence`] surface:
//! correctly normalised points in a stable, reproducible order.
//!
//! ## Usage
//!
//! ```
//! use lds_sphere::{LowDiscrepancySequence, SphereVariant};
//!
//! let mut gen = SphereVariant::new(&[2, 3, 5, 7, 11]).unwrap();
//! let point = gen.pop_point();
//! assert_eq!(point.len(), 6);
//! let norm: f64 = point.iter().map(|x| x * x).sum::<f64>().sqrt();
//! assert!((norm - 1.0).abs() < 1e-6);
//! ```

pub mod cylind_n;
pub mod interp;
pub mod sphere_n;
pub mod tables;
pub mod traits;

pub use cylind_n::{CylindN, CylindVariant};
pub use interp::interp;
pub use sphere_n::{Sphere3, SphereN, SphereVariant};
pub use tables::{TpCache, N_POINTS};
pub use traits::LowDiscrepancySequence;

pub use lds_core::LdsError;
