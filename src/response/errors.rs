//! Errors for the RMF response stack (grid validation, physical-parameter
//! preconditions, and depth-integration failures).
//!
//! This module defines [`RMFError`] and the [`RMFResult`] alias used across
//! the response models and their Python-facing wrappers. Quadrature failures
//! from the generic integration subtree are normalized into this surface via
//! `From<QuadError>`, so response callers see a single error type.
//!
//! ## Conventions
//! - Channel energies are keV, depths μm; indices are 0-based.
//! - Precondition violations (zero normalization, degenerate sigma, a
//!   vanishing regime denominator) fail fast at parameter construction —
//!   before any quadrature runs.
//! - A non-convergent depth integral is reported with its subdivision count
//!   and last error estimate; no partially converged response is returned.
use crate::quadrature::errors::QuadError;

#[cfg(feature = "python-bindings")]
use pyo3::{PyErr, exceptions::PyValueError};

/// Result alias for response-model operations that may produce [`RMFError`].
pub type RMFResult<T> = Result<T, RMFError>;

/// Unified error type for RMF response evaluation.
///
/// Covers channel-grid validation, physical-parameter preconditions, and
/// numerical failures of the depth integration. Implements
/// `Display`/`Error` and converts to a Python `ValueError` at PyO3
/// boundaries.
#[derive(Debug, Clone, PartialEq)]
pub enum RMFError {
    // ---- Channel-grid validation ----
    /// The channel-energy grid is empty.
    EmptyEnergyGrid,

    /// A channel energy is NaN/±inf.
    NonFiniteEnergy { index: usize, value: f64 },

    // ---- Physical-parameter preconditions ----
    /// A named physical scalar is NaN/±inf.
    NonFiniteParam { name: &'static str, value: f64 },

    /// Resolution sigma must be finite and > 0.
    InvalidSigma { value: f64 },

    /// Normalization constant must be finite and non-zero.
    InvalidNorm { value: f64 },

    /// Characteristic length l must be finite and > 0.
    InvalidScaleLength { value: f64 },

    /// Time constant tau must be finite and non-zero.
    InvalidTimeConstant { value: f64 },

    /// Regime-constant denominator l + Bt·tau must be non-zero.
    DegenerateDenominator { value: f64 },

    /// A secondary-peak sigma must be finite and > 0.
    InvalidPeakSigma { value: f64 },

    /// A secondary-peak weight must be finite.
    InvalidPeakWeight { value: f64 },

    // ---- Depth integration ----
    /// The adaptive depth integral exhausted its subdivision budget.
    NonConvergentIntegral { subdivisions: usize, error_estimate: f64 },

    /// A depth kernel evaluated to NaN/±inf at a depth abscissa.
    NonFiniteKernel { x: f64, value: f64 },

    /// Quadrature setup was rejected; carries a human-readable status.
    QuadratureConfig { status: String },
}

impl std::error::Error for RMFError {}

impl std::fmt::Display for RMFError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            // ---- Channel-grid validation ----
            RMFError::EmptyEnergyGrid => {
                write!(f, "Channel-energy grid is empty.")
            }
            RMFError::NonFiniteEnergy { index, value } => {
                write!(f, "Channel energy at index {index} is non-finite: {value}")
            }
            // ---- Physical-parameter preconditions ----
            RMFError::NonFiniteParam { name, value } => {
                write!(f, "Parameter `{name}` must be finite; got: {value}")
            }
            RMFError::InvalidSigma { value } => {
                write!(f, "Resolution sigma must be finite and > 0; got: {value}")
            }
            RMFError::InvalidNorm { value } => {
                write!(f, "Normalization constant must be finite and non-zero; got: {value}")
            }
            RMFError::InvalidScaleLength { value } => {
                write!(f, "Characteristic length l must be finite and > 0; got: {value}")
            }
            RMFError::InvalidTimeConstant { value } => {
                write!(f, "Time constant tau must be finite and non-zero; got: {value}")
            }
            RMFError::DegenerateDenominator { value } => {
                write!(
                    f,
                    "Charge-collection denominator l + Bt*tau must be non-zero; got: {value}"
                )
            }
            RMFError::InvalidPeakSigma { value } => {
                write!(f, "Peak sigma must be finite and > 0; got: {value}")
            }
            RMFError::InvalidPeakWeight { value } => {
                write!(f, "Peak weight must be finite; got: {value}")
            }
            // ---- Depth integration ----
            RMFError::NonConvergentIntegral { subdivisions, error_estimate } => {
                write!(
                    f,
                    "Depth integration did not converge within {subdivisions} subdivisions; \
                     last error estimate: {error_estimate}"
                )
            }
            RMFError::NonFiniteKernel { x, value } => {
                write!(f, "Depth kernel evaluated to a non-finite value at x = {x} um: {value}")
            }
            RMFError::QuadratureConfig { status } => {
                write!(f, "Quadrature configuration rejected: {status}")
            }
        }
    }
}

/// Normalize quadrature failures into the response error surface.
///
/// Budget exhaustion and integrand degeneracies keep their payloads; setup
/// errors are carried as a human-readable status string.
impl From<QuadError> for RMFError {
    fn from(err: QuadError) -> RMFError {
        match err {
            QuadError::BudgetExhausted { subdivisions, error_estimate } => {
                RMFError::NonConvergentIntegral { subdivisions, error_estimate }
            }
            QuadError::NonFiniteEvaluation { x, value } => RMFError::NonFiniteKernel { x, value },
            other => RMFError::QuadratureConfig { status: other.to_string() },
        }
    }
}

/// Convert an [`RMFError`] into a Python `ValueError` with the error message.
///
/// This is used at the Rust↔Python boundary to surface domain errors cleanly.
#[cfg(feature = "python-bindings")]
impl From<RMFError> for PyErr {
    fn from(err: RMFError) -> PyErr {
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
    // - `Display` payload embedding for representative RMFError variants.
    // - The `From<QuadError>` normalization mapping.
    //
    // They intentionally DO NOT cover:
    // - The `From<RMFError> for PyErr` conversion (Python-level tests).
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Verify that grid and parameter errors embed their payloads in the
    // `Display` message.
    //
    // Given
    // -----
    // - A `NonFiniteEnergy` at index 3 and an `InvalidNorm` with value 0.
    //
    // Expect
    // ------
    // - Each message contains the corresponding payload.
    fn rmf_error_display_embeds_payloads() {
        // Arrange
        let energy_err = RMFError::NonFiniteEnergy { index: 3, value: f64::NAN };
        let norm_err = RMFError::InvalidNorm { value: 0.0 };

        // Act
        let energy_msg = energy_err.to_string();
        let norm_msg = norm_err.to_string();

        // Assert
        assert!(energy_msg.contains('3'), "message should include the index.\nGot: {energy_msg}");
        assert!(norm_msg.contains('0'), "message should include the value.\nGot: {norm_msg}");
    }

    #[test]
    // Purpose
    // -------
    // Verify the `From<QuadError>` normalization: budget exhaustion and
    // integrand failures keep their payloads; setup errors collapse into
    // `QuadratureConfig`.
    //
    // Given
    // -----
    // - One `QuadError` of each category.
    //
    // Expect
    // ------
    // - `BudgetExhausted` → `NonConvergentIntegral` with equal payloads.
    // - `NonFiniteEvaluation` → `NonFiniteKernel` with equal payloads.
    // - `ZeroBudget` → `QuadratureConfig` with a non-empty status.
    fn rmf_error_from_quad_error_normalizes_variants() {
        // Act
        let exhausted: RMFError =
            QuadError::BudgetExhausted { subdivisions: 64, error_estimate: 0.1 }.into();
        let non_finite: RMFError = QuadError::NonFiniteEvaluation { x: 1.5, value: f64::NAN }.into();
        let setup: RMFError = QuadError::ZeroBudget.into();

        // Assert
        assert_eq!(
            exhausted,
            RMFError::NonConvergentIntegral { subdivisions: 64, error_estimate: 0.1 }
        );
        match non_finite {
            RMFError::NonFiniteKernel { x, .. } => assert_eq!(x, 1.5),
            other => panic!("expected NonFiniteKernel, got {:?}", other),
        }
        match setup {
            RMFError::QuadratureConfig { status } => assert!(!status.is_empty()),
            other => panic!("expected QuadratureConfig, got {:?}", other),
        }
    }
}
