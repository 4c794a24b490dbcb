//! quadrature — adaptive Gauss–Kronrod integration machinery.
//!
//! Purpose
//! -------
//! Provide a self-contained scalar quadrature primitive: a G7–K15 panel rule
//! in [`gauss_kronrod`] driven by a globally adaptive bisection loop in
//! [`adaptive`], with validated tolerances and a dedicated error type in
//! [`errors`]. The response stack loops this primitive over channel-energy
//! grids; nothing in this subtree knows about detectors.
//!
//! Key behaviors
//! -------------
//! - Evaluate definite integrals of smooth `f64 → f64` kernels to a target
//!   accuracy of `max(abs_tol, rel_tol · |estimate|)`.
//! - Surface non-convergence ([`QuadError::BudgetExhausted`]) and integrand
//!   degeneracies ([`QuadError::NonFiniteEvaluation`]) as structured errors
//!   rather than silently truncated values.
//! - Keep refinement and summation order fixed so results are bit-for-bit
//!   reproducible across calls.
//!
//! Invariants & assumptions
//! ------------------------
//! - Bounds are finite; integrands are expected to be finite over the
//!   closed interval.
//! - [`QuadTolerances`] is validated at construction, so integration paths
//!   assume well-formed settings.
//! - The subtree performs no I/O and no logging; it is pure computation.
//!
//! Conventions
//! -----------
//! - Errors use [`QuadError`] and the [`QuadResult`] alias; domain stacks
//!   normalize them into their own error surface (see
//!   `response::errors::RMFError`).
//! - Node/weight constants live as literals in [`gauss_kronrod`] and are
//!   the standard QUADPACK `dqk15` values.
//!
//! Downstream usage
//! ----------------
//! - Typical use:
//!
//!   ```rust
//!   use rust_rmf::quadrature::{integrate, QuadTolerances};
//!
//!   let tols = QuadTolerances::default();
//!   let value = integrate(|x| (-x).exp(), 0.0, 1.0, &tols)?;
//!   # Ok::<(), rust_rmf::quadrature::QuadError>(())
//!   ```
//!
//! Testing notes
//! -------------
//! - Unit tests in [`gauss_kronrod`] cover panel exactness and integrand
//!   failure surfacing; tests in [`adaptive`] cover convergence against
//!   closed forms, tolerance validation, and budget exhaustion.

pub mod adaptive;
pub mod errors;
pub mod gauss_kronrod;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::adaptive::{QuadTolerances, integrate};
pub use self::errors::{QuadError, QuadResult};
pub use self::gauss_kronrod::{PanelEstimate, kronrod_panel};

// ---- Optional convenience prelude for downstream crates -------------------

pub mod prelude {
    pub use super::adaptive::{QuadTolerances, integrate};
    pub use super::errors::{QuadError, QuadResult};
}
