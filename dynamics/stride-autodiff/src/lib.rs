//! Dual-number scalars and generic 3-D math for dynamics evaluation.
//!
//! Rigid-body formulas in this workspace are written once, generically over
//! the [`Real`] scalar capability, and instantiated at two numeric types:
//!
//! - [`f64`] — the fast path, used for forward simulation
//! - [`Jet`] — a forward-mode dual number carrying partial derivatives, used
//!   when an optimizer needs gradients of the dynamics through the exact
//!   same code path
//!
//! Both instantiations run the identical algorithm; at a non-differentiated
//! operating point they produce numerically equal results.
//!
//! # Example
//!
//! ```
//! use stride_autodiff::{Jet, Real};
//!
//! fn height<T: Real>(angle: T, length: T) -> T {
//!     length * angle.sin()
//! }
//!
//! // Plain evaluation
//! let h = height(0.5_f64, 2.0);
//!
//! // Dual evaluation: seed `angle` as the differentiation variable
//! let angle = Jet::<1>::variable(0.5, 0);
//! let hd = height(angle, Jet::constant(2.0));
//!
//! assert_eq!(hd.value, h);
//! assert!((hd.partials[0] - 2.0 * 0.5_f64.cos()).abs() < 1e-12);
//! ```

#![deny(clippy::unwrap_used, clippy::expect_used)]
#![warn(missing_docs)]

mod jet;
mod math3d;
mod real;

pub use jet::Jet;
pub use math3d::{Mat3, Vec3};
pub use real::Real;
