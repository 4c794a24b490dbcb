//! Errors for the adaptive quadrature stack (tolerance validation, integrand
//! failures, and subdivision-budget exhaustion).
//!
//! This module defines [`QuadError`] and the [`QuadResult`] alias used by the
//! Gauss–Kronrod panel rule and the adaptive driver. The error surface keeps
//! a strict separation between *setup* problems (bad tolerances, non-finite
//! bounds) and *runtime* problems (non-finite integrand values, budget
//! exhaustion), so callers can distinguish caller bugs from genuine
//! non-convergence.
//!
//! ## Conventions
//! - A budget-exhausted integral is **never** returned as a value; the last
//!   error estimate travels inside [`QuadError::BudgetExhausted`] instead.
//! - Integrand failures carry the offending abscissa so the caller can see
//!   *where* the kernel degenerated, not just that it did.

#[cfg(feature = "python-bindings")]
use pyo3::{PyErr, exceptions::PyValueError};

/// Result alias for quadrature operations that may produce [`QuadError`].
pub type QuadResult<T> = Result<T, QuadError>;

/// Unified error type for the quadrature stack.
///
/// Covers tolerance/bound validation and runtime integration failures.
/// Implements `Display`/`Error` and converts to a Python `ValueError` at
/// PyO3 boundaries when the `python-bindings` feature is enabled.
#[derive(Debug, Clone, PartialEq)]
pub enum QuadError {
    // ---- Setup validation ----
    /// A tolerance field is non-finite or non-positive.
    InvalidTolerance { name: &'static str, value: f64 },

    /// The subdivision budget is zero.
    ZeroBudget,

    /// An integration bound is NaN/±inf.
    NonFiniteBound { value: f64 },

    // ---- Runtime integration failures ----
    /// The integrand evaluated to NaN/±inf at an abscissa.
    NonFiniteEvaluation { x: f64, value: f64 },

    /// The subdivision budget was exhausted before the error target was met.
    BudgetExhausted { subdivisions: usize, error_estimate: f64 },
}

impl std::error::Error for QuadError {}

impl std::fmt::Display for QuadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QuadError::InvalidTolerance { name, value } => {
                write!(f, "Quadrature tolerance `{name}` must be finite and > 0; got: {value}")
            }
            QuadError::ZeroBudget => {
                write!(f, "Quadrature subdivision budget must be at least 1.")
            }
            QuadError::NonFiniteBound { value } => {
                write!(f, "Integration bound must be finite; got: {value}")
            }
            QuadError::NonFiniteEvaluation { x, value } => {
                write!(f, "Integrand evaluated to a non-finite value at x = {x}: {value}")
            }
            QuadError::BudgetExhausted { subdivisions, error_estimate } => {
                write!(
                    f,
                    "Adaptive quadrature did not converge within {subdivisions} subdivisions; \
                     last error estimate: {error_estimate}"
                )
            }
        }
    }
}

/// Convert a [`QuadError`] into a Python `ValueError` with the error message.
#[cfg(feature = "python-bindings")]
impl From<QuadError> for PyErr {
    fn from(err: QuadError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - `Display` formatting for QuadError variants.
    // - Embedding of payloads (tolerance name, abscissa, budget) into
    //   error messages.
    //
    // They intentionally DO NOT cover:
    // - The `From<QuadError> for PyErr` conversion, which requires linking
    //   against the Python C API and is exercised by Python-level tests.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Verify that `QuadError::InvalidTolerance` embeds both the field name
    // and the offending value in its `Display` representation.
    //
    // Given
    // -----
    // - An `InvalidTolerance` for `rel_tol` with value -1.0.
    //
    // Expect
    // ------
    // - The message contains both "rel_tol" and "-1".
    fn quad_error_invalid_tolerance_includes_name_and_payload() {
        // Arrange
        let err = QuadError::InvalidTolerance { name: "rel_tol", value: -1.0 };

        // Act
        let msg = err.to_string();

        // Assert
        assert!(msg.contains("rel_tol"), "message should name the field.\nGot: {msg}");
        assert!(msg.contains("-1"), "message should include the offending value.\nGot: {msg}");
    }

    #[test]
    // Purpose
    // -------
    // Verify that `QuadError::BudgetExhausted` reports the subdivision
    // count and the last error estimate.
    //
    // Given
    // -----
    // - A `BudgetExhausted` with 128 subdivisions and error estimate 0.5.
    //
    // Expect
    // ------
    // - The message contains "128" and "0.5".
    fn quad_error_budget_exhausted_includes_subdivisions_and_estimate() {
        // Arrange
        let err = QuadError::BudgetExhausted { subdivisions: 128, error_estimate: 0.5 };

        // Act
        let msg = err.to_string();

        // Assert
        assert!(msg.contains("128"), "message should include the budget.\nGot: {msg}");
        assert!(msg.contains("0.5"), "message should include the estimate.\nGot: {msg}");
    }

    #[test]
    // Purpose
    // -------
    // Ensure `QuadError::NonFiniteEvaluation` reports the abscissa at
    // which the integrand degenerated.
    //
    // Given
    // -----
    // - A `NonFiniteEvaluation` at x = 0.25 with value NaN.
    //
    // Expect
    // ------
    // - The message contains "0.25".
    fn quad_error_non_finite_evaluation_includes_abscissa() {
        // Arrange
        let err = QuadError::NonFiniteEvaluation { x: 0.25, value: f64::NAN };

        // Act
        let msg = err.to_string();

        // Assert
        assert!(msg.contains("0.25"), "message should include the abscissa.\nGot: {msg}");
    }
}
