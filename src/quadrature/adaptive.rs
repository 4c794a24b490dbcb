//! quadrature::adaptive — globally adaptive Gauss–Kronrod integration.
//!
//! Purpose
//! -------
//! Drive the G7–K15 panel rule of
//! [`gauss_kronrod`](crate::quadrature::gauss_kronrod) to a target accuracy
//! by repeatedly bisecting the panel with the largest error proxy, under an
//! explicit subdivision budget. This is the scalar integration primitive the
//! response models loop over their channel-energy grids.
//!
//! Key behaviors
//! -------------
//! - Validate tolerances once, in [`QuadTolerances::new`], so the hot path
//!   can assume well-formed settings.
//! - Refine the worst panel first (globally adaptive), accumulating the
//!   total estimate and total error proxy over all live panels.
//! - Stop when the summed error proxy meets
//!   `max(abs_tol, rel_tol · |estimate|)`.
//! - Surface budget exhaustion as [`QuadError::BudgetExhausted`] instead of
//!   returning a partially converged value.
//!
//! Invariants & assumptions
//! ------------------------
//! - The integrand is expected to be finite over the closed interval; any
//!   NaN/±inf evaluation aborts the integral with
//!   [`QuadError::NonFiniteEvaluation`].
//! - Panel refinement order and summation order are fixed, so repeated calls
//!   with identical inputs produce bit-for-bit identical results.
//! - The subdivision budget bounds the number of live panels; each
//!   refinement step replaces one panel with two.
//!
//! Conventions
//! -----------
//! - `integrate(f, a, b, …)` with `a == b` returns exactly 0.0 without
//!   evaluating the integrand.
//! - Reversed bounds integrate with the usual sign convention, inherited
//!   from the panel rule's `(b − a)` scaling.
//!
//! Downstream usage
//! ----------------
//! - `response::model` integrates each depth-regime kernel per channel
//!   energy through [`integrate`], sharing one [`QuadTolerances`] across a
//!   whole evaluation.
//!
//! Testing notes
//! -------------
//! - Unit tests check convergence against closed-form integrals, the
//!   degenerate-interval shortcut, tolerance validation branches, and that
//!   a starved budget surfaces `BudgetExhausted` rather than a value.
use crate::quadrature::{
    errors::{QuadError, QuadResult},
    gauss_kronrod::kronrod_panel,
};

/// Default relative tolerance, comparable to stock adaptive-quadrature
/// defaults.
pub const DEFAULT_REL_TOL: f64 = 1e-8;

/// Default absolute error floor, near machine-epsilon scale for O(1)
/// integrands.
pub const DEFAULT_ABS_TOL: f64 = 1e-12;

/// Default subdivision budget.
pub const DEFAULT_MAX_SUBDIVISIONS: usize = 128;

/// Validated accuracy settings for [`integrate`].
///
/// Parameters
/// ----------
/// - `rel_tol`: relative error target; the driver stops once the summed
///   error proxy drops below `rel_tol · |estimate|` (or the absolute floor,
///   whichever is larger). Must be finite and > 0.
/// - `abs_tol`: absolute error floor guarding against a vanishing estimate
///   turning the relative target into 0. Must be finite and > 0.
/// - `max_subdivisions`: upper bound on live panels; must be ≥ 1.
///
/// Invariants
/// ----------
/// - All fields validated at construction; evaluation paths never re-check.
///
/// Notes
/// -----
/// - `Default` uses [`DEFAULT_REL_TOL`], [`DEFAULT_ABS_TOL`], and
///   [`DEFAULT_MAX_SUBDIVISIONS`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadTolerances {
    pub rel_tol: f64,
    pub abs_tol: f64,
    pub max_subdivisions: usize,
}

impl QuadTolerances {
    /// Construct validated tolerances.
    ///
    /// Returns
    /// -------
    /// `QuadResult<QuadTolerances>`
    ///   - `Ok` when both tolerances are finite and strictly positive and
    ///     the budget is at least 1.
    ///   - `Err(QuadError::InvalidTolerance)` naming the offending field,
    ///     or `Err(QuadError::ZeroBudget)` for a zero budget.
    pub fn new(rel_tol: f64, abs_tol: f64, max_subdivisions: usize) -> QuadResult<Self> {
        if !rel_tol.is_finite() || rel_tol <= 0.0 {
            return Err(QuadError::InvalidTolerance { name: "rel_tol", value: rel_tol });
        }
        if !abs_tol.is_finite() || abs_tol <= 0.0 {
            return Err(QuadError::InvalidTolerance { name: "abs_tol", value: abs_tol });
        }
        if max_subdivisions == 0 {
            return Err(QuadError::ZeroBudget);
        }
        Ok(QuadTolerances { rel_tol, abs_tol, max_subdivisions })
    }
}

impl Default for QuadTolerances {
    fn default() -> Self {
        QuadTolerances {
            rel_tol: DEFAULT_REL_TOL,
            abs_tol: DEFAULT_ABS_TOL,
            max_subdivisions: DEFAULT_MAX_SUBDIVISIONS,
        }
    }
}

/// One live panel in the adaptive refinement queue.
#[derive(Debug, Clone, Copy)]
struct Segment {
    lo: f64,
    hi: f64,
    integral: f64,
    error: f64,
}

/// Integrate `f` over `[a, b]` to the accuracy targets in `tols`.
///
/// Parameters
/// ----------
/// - `f`: integrand; must be finite over the interval.
/// - `a`, `b`: finite integration bounds. `a == b` short-circuits to 0.0.
/// - `tols`: validated accuracy settings; see [`QuadTolerances`].
///
/// Returns
/// -------
/// `QuadResult<f64>`
///   - `Ok(value)` once the summed panel-error proxy meets
///     `max(abs_tol, rel_tol · |value|)`.
///   - `Err(QuadError::NonFiniteBound)` for NaN/±inf bounds.
///   - `Err(QuadError::NonFiniteEvaluation)` if `f` degenerates at any
///     abscissa.
///   - `Err(QuadError::BudgetExhausted)` when `max_subdivisions` panels do
///     not reach the target; the partial estimate is **not** returned.
///
/// Errors
/// ------
/// - Propagated exactly as listed above; no failure is recovered
///   internally and no default value is ever substituted.
///
/// Panics
/// ------
/// - Never panics; the refinement queue always holds at least one panel
///   after seeding.
///
/// Notes
/// -----
/// - Globally adaptive: each step bisects the panel with the largest error
///   proxy, which concentrates evaluations where the integrand is least
///   polynomial (e.g. a narrow Gaussian ridge inside a wide interval).
/// - Evaluation and summation order are deterministic, so identical inputs
///   reproduce identical bits.
pub fn integrate<F>(f: F, a: f64, b: f64, tols: &QuadTolerances) -> QuadResult<f64>
where
    F: Fn(f64) -> f64,
{
    if !a.is_finite() {
        return Err(QuadError::NonFiniteBound { value: a });
    }
    if !b.is_finite() {
        return Err(QuadError::NonFiniteBound { value: b });
    }
    if a == b {
        return Ok(0.0);
    }

    let seed = kronrod_panel(&f, a, b)?;
    let mut segments =
        vec![Segment { lo: a, hi: b, integral: seed.integral, error: seed.error }];

    loop {
        let mut total_integral = 0.0;
        let mut total_error = 0.0;
        let mut worst = 0;
        for (i, seg) in segments.iter().enumerate() {
            total_integral += seg.integral;
            total_error += seg.error;
            if seg.error > segments[worst].error {
                worst = i;
            }
        }

        let target = tols.abs_tol.max(tols.rel_tol * total_integral.abs());
        if total_error <= target {
            return Ok(total_integral);
        }
        if segments.len() >= tols.max_subdivisions {
            return Err(QuadError::BudgetExhausted {
                subdivisions: segments.len(),
                error_estimate: total_error,
            });
        }

        let Segment { lo, hi, .. } = segments[worst];
        let mid = 0.5 * (lo + hi);
        let left = kronrod_panel(&f, lo, mid)?;
        let right = kronrod_panel(&f, mid, hi)?;
        segments[worst] =
            Segment { lo, hi: mid, integral: left.integral, error: left.error };
        segments.push(Segment { lo: mid, hi, integral: right.integral, error: right.error });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Convergence of `integrate` against closed-form references.
    // - The degenerate-interval and reversed-bound conventions.
    // - Tolerance validation branches of `QuadTolerances::new`.
    // - Budget exhaustion surfacing as an error, never a value.
    //
    // They intentionally DO NOT cover:
    // - The panel rule internals (tested in `gauss_kronrod`).
    // - Response-model kernels; those are exercised in `response::model`.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Verify convergence on a smooth monomial with a closed-form answer.
    //
    // Given
    // -----
    // - f(x) = x² over [0, 1], exact integral 1/3.
    // - Default tolerances.
    //
    // Expect
    // ------
    // - The result matches 1/3 within 1e-10.
    fn integrate_monomial_matches_closed_form() {
        // Arrange
        let tols = QuadTolerances::default();

        // Act
        let value = integrate(|x| x * x, 0.0, 1.0, &tols).expect("smooth integrand converges");

        // Assert
        assert!((value - 1.0 / 3.0).abs() < 1e-10, "expected 1/3, got {value}");
    }

    #[test]
    // Purpose
    // -------
    // Verify convergence on a decaying exponential, the attenuation factor
    // of the depth kernels.
    //
    // Given
    // -----
    // - f(x) = exp(−x) over [0, 1], exact integral 1 − e⁻¹.
    //
    // Expect
    // ------
    // - The result matches the closed form within 1e-10.
    fn integrate_exponential_matches_closed_form() {
        // Arrange
        let tols = QuadTolerances::default();
        let exact = 1.0 - (-1.0_f64).exp();

        // Act
        let value = integrate(|x| (-x).exp(), 0.0, 1.0, &tols).expect("smooth integrand converges");

        // Assert
        assert!((value - exact).abs() < 1e-10, "expected {exact}, got {value}");
    }

    #[test]
    // Purpose
    // -------
    // Verify that a localized Gaussian ridge inside a wide interval is
    // resolved by adaptive refinement and integrates to its full mass.
    //
    // Given
    // -----
    // - A Gaussian with σ = 5 centred at 50 over [0, 300]; both tails are
    //   ≥ 10σ inside the bounds, so the interval holds the full mass
    //   σ·√(2π) to far below the tolerance target.
    //
    // Expect
    // ------
    // - The result matches σ·√(2π) within 1e-8 relative.
    fn integrate_gaussian_ridge_recovers_mass() {
        // Arrange
        let tols = QuadTolerances::default();
        let sigma = 5.0_f64;
        let center = 50.0_f64;
        let exact = sigma * (2.0 * std::f64::consts::PI).sqrt();

        // Act
        let value = integrate(
            |x| (-(x - center) * (x - center) / (2.0 * sigma * sigma)).exp(),
            0.0,
            300.0,
            &tols,
        )
        .expect("Gaussian ridge should converge under refinement");

        // Assert
        assert!(
            ((value - exact) / exact).abs() < 1e-8,
            "expected mass {exact}, got {value}"
        );
    }

    #[test]
    // Purpose
    // -------
    // Check the degenerate-interval shortcut and the reversed-bound sign
    // convention.
    //
    // Given
    // -----
    // - f(x) = x over [2, 2] and over [1, 0].
    //
    // Expect
    // ------
    // - [2, 2] integrates to exactly 0.0.
    // - [1, 0] integrates to −1/2.
    fn integrate_degenerate_and_reversed_bounds() {
        // Arrange
        let tols = QuadTolerances::default();

        // Act
        let empty = integrate(|x| x, 2.0, 2.0, &tols).expect("degenerate interval is trivial");
        let reversed = integrate(|x| x, 1.0, 0.0, &tols).expect("reversed bounds are allowed");

        // Assert
        assert_eq!(empty, 0.0);
        assert!((reversed + 0.5).abs() < 1e-10, "expected -1/2, got {reversed}");
    }

    #[test]
    // Purpose
    // -------
    // Exercise every validation branch of `QuadTolerances::new`.
    //
    // Given
    // -----
    // - Non-positive / non-finite tolerances and a zero budget.
    //
    // Expect
    // ------
    // - Each invalid setting returns the matching `QuadError` variant.
    fn quad_tolerances_new_rejects_invalid_settings() {
        // Act & Assert: bad rel_tol
        match QuadTolerances::new(0.0, 1e-12, 64) {
            Err(QuadError::InvalidTolerance { name, .. }) => assert_eq!(name, "rel_tol"),
            other => panic!("expected InvalidTolerance for rel_tol, got {:?}", other),
        }

        // Act & Assert: bad abs_tol
        match QuadTolerances::new(1e-8, f64::NAN, 64) {
            Err(QuadError::InvalidTolerance { name, .. }) => assert_eq!(name, "abs_tol"),
            other => panic!("expected InvalidTolerance for abs_tol, got {:?}", other),
        }

        // Act & Assert: zero budget
        match QuadTolerances::new(1e-8, 1e-12, 0) {
            Err(QuadError::ZeroBudget) => (),
            other => panic!("expected ZeroBudget, got {:?}", other),
        }

        // Act & Assert: valid settings succeed
        assert!(QuadTolerances::new(1e-8, 1e-12, 64).is_ok());
    }

    #[test]
    // Purpose
    // -------
    // Ensure a starved budget surfaces `BudgetExhausted` instead of a
    // silently truncated estimate.
    //
    // Given
    // -----
    // - f(x) = √x over [0, 1], whose derivative singularity at 0 keeps the
    //   seed panel's error proxy well above the target.
    // - A budget of a single panel, so no refinement is possible.
    //
    // Expect
    // ------
    // - `integrate` returns `Err(BudgetExhausted { subdivisions: 1, .. })`.
    fn integrate_starved_budget_returns_budget_exhausted() {
        // Arrange
        let tols = QuadTolerances::new(1e-12, 1e-15, 1).expect("settings are valid");

        // Act
        let result = integrate(|x| x.sqrt(), 0.0, 1.0, &tols);

        // Assert
        match result {
            Err(QuadError::BudgetExhausted { subdivisions, .. }) => {
                assert_eq!(subdivisions, 1, "budget of one panel should exhaust immediately");
            }
            other => panic!("expected BudgetExhausted, got {:?}", other),
        }
    }

    #[test]
    // Purpose
    // -------
    // Verify that non-finite bounds are rejected before any integrand
    // evaluation.
    //
    // Given
    // -----
    // - An upper bound of +inf.
    //
    // Expect
    // ------
    // - `integrate` returns `Err(NonFiniteBound)`.
    fn integrate_non_finite_bound_returns_error() {
        // Arrange
        let tols = QuadTolerances::default();

        // Act
        let result = integrate(|x| x, 0.0, f64::INFINITY, &tols);

        // Assert
        match result {
            Err(QuadError::NonFiniteBound { value }) => assert!(value.is_infinite()),
            other => panic!("expected NonFiniteBound, got {:?}", other),
        }
    }
}
