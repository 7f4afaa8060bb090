//! # lds_core: Low-Discrepancy Sequence Foundation
//!
//! Deterministic 1-D radix sequences and the closed-form angular generators
//! built from them. This is the bottom layer of the workspace: it has no
//! dependency on the recursive sphere engine and provides the building
//! blocks every higher-dimensional generator composes.
//!
//! ## Contents
//!
//! - [`vdc`] / [`VdCorput`]: the Van der Corput radical-inverse sequence for
//!   an integer base, the atomic source of all quasi-random scalars.
//! - [`Circle`]: unit-circle points via a direct trigonometric map.
//! - [`Sphere`]: unit 2-sphere points via the analytic inverse of the polar
//!   marginal (no table lookup required in three dimensions).
//! - [`HaltonN`]: the n-dimensional Halton sequence, one radix base per
//!   coordinate.
//! - [`LdsError`]: construction-time configuration errors.
//!
//! All generators are deterministic: the output is a pure function of the
//! configured bases and the internal counter, and `reseed` resets that
//! counter to an absolute position.
//!
//! ## Usage
//!
//! ```
//! use lds_core::Circle;
//!
//! let mut circle = Circle::new(2).unwrap();
//! let [x, y] = circle.pop();
//! assert!((x * x + y * y - 1.0).abs() < 1e-12);
//! ```

pub mod circle;
pub mod error;
pub mod halton;
pub mod sphere;
pub mod vdcorput;

pub use circle::Circle;
pub use error::LdsError;
pub use halton::HaltonN;
pub use sphere::Sphere;
pub use vdcorput::{vdc, VdCorput};

/// Crate version string, exposed for the CLI `check` command.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
