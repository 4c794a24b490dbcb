//! response::validation — shared input guards for response evaluation.
//!
//! Purpose
//! -------
//! Centralize the scalar and grid preconditions of the RMF response models.
//! Every division performed by the model (by `sig`, `norm`, `l`, `tau`, and
//! the regime denominator `l + Bt·tau`) has a matching guard here, so the
//! evaluation paths can assume well-formed inputs and quadrature never sees
//! a degenerate kernel.
//!
//! Key behaviors
//! -------------
//! - Validate channel-energy grids (non-empty, all-finite) before any
//!   depth integration starts.
//! - Validate named physical scalars for finiteness, and the specific
//!   positivity / non-zero constraints each one needs.
//! - Map invalid inputs into structured [`RMFError`] values; never panic on
//!   user-facing input.
//!
//! Invariants & assumptions
//! ------------------------
//! - `sig > 0` and peak sigmas > 0, so Gaussian denominators never vanish.
//! - `norm ≠ 0`, so the final rescale is defined.
//! - `l > 0` (it divides the rise-regime depth ratio) and `tau ≠ 0` (it
//!   divides the decay-regime exponent).
//! - `l + Bt·tau ≠ 0`, the shared denominator of both regime constants.
//! - `f0` and `Bt` are opaque calibration scalars: finiteness is required,
//!   but no range constraint is imposed on either.
//!
//! Conventions
//! -----------
//! - This module is purely about *validation*; it performs no I/O and does
//!   not allocate beyond error construction.
//! - Guards return the validated value so constructors can chain them.
//!
//! Downstream usage
//! ----------------
//! - Called by the constructors in `response::params` and by
//!   `response::model::continuum_response` (grid check); evaluation code
//!   never re-validates.
//!
//! Testing notes
//! -------------
//! - Unit tests cover every error branch and a success path per guard.

use crate::response::errors::{RMFError, RMFResult};
use ndarray::ArrayView1;

/// Validate a channel-energy grid: non-empty and all-finite.
///
/// Parameters
/// ----------
/// - `energies`: channel energies (keV) at which a response is evaluated.
///
/// Returns
/// -------
/// `RMFResult<()>`
///   - `Ok(())` when the grid is non-empty and every element is finite.
///   - `Err(RMFError::EmptyEnergyGrid)` for an empty grid.
///   - `Err(RMFError::NonFiniteEnergy)` with the first offending index and
///     value otherwise.
pub fn validate_energy_grid(energies: ArrayView1<f64>) -> RMFResult<()> {
    if energies.is_empty() {
        return Err(RMFError::EmptyEnergyGrid);
    }
    for (index, &value) in energies.iter().enumerate() {
        if !value.is_finite() {
            return Err(RMFError::NonFiniteEnergy { index, value });
        }
    }
    Ok(())
}

/// Validate that a named physical scalar is finite.
///
/// Returns the value for chaining, or `RMFError::NonFiniteParam` carrying
/// the parameter name and offending value.
pub fn validate_finite_param(name: &'static str, value: f64) -> RMFResult<f64> {
    if !value.is_finite() {
        return Err(RMFError::NonFiniteParam { name, value });
    }
    Ok(value)
}

/// Validate the energy-resolution sigma: finite and strictly positive.
///
/// A degenerate sigma would put a zero in every Gaussian denominator of the
/// depth kernels, so this is treated as a precondition violation rather
/// than a recoverable runtime state.
pub fn validate_resolution_sigma(value: f64) -> RMFResult<f64> {
    if !value.is_finite() || value <= 0.0 {
        return Err(RMFError::InvalidSigma { value });
    }
    Ok(value)
}

/// Validate the normalization constant: finite and non-zero.
pub fn validate_norm(value: f64) -> RMFResult<f64> {
    if !value.is_finite() || value == 0.0 {
        return Err(RMFError::InvalidNorm { value });
    }
    Ok(value)
}

/// Validate the characteristic length l (μm): finite and strictly positive.
///
/// `l` both bounds the rise regime and divides the depth ratio `x / l`
/// inside its kernel.
pub fn validate_scale_length(value: f64) -> RMFResult<f64> {
    if !value.is_finite() || value <= 0.0 {
        return Err(RMFError::InvalidScaleLength { value });
    }
    Ok(value)
}

/// Validate the time constant tau: finite and non-zero.
///
/// `tau` divides the decay-regime exponent `(x − l) / tau`.
pub fn validate_time_constant(value: f64) -> RMFResult<f64> {
    if !value.is_finite() || value == 0.0 {
        return Err(RMFError::InvalidTimeConstant { value });
    }
    Ok(value)
}

/// Validate the shared regime-constant denominator `l + Bt·tau`.
///
/// Parameters
/// ----------
/// - `l`, `bt`, `tau`: already individually validated scalars.
///
/// Returns
/// -------
/// `RMFResult<f64>`
///   - `Ok(l + bt·tau)` when the denominator is finite and non-zero.
///   - `Err(RMFError::DegenerateDenominator)` otherwise; this failure must
///     propagate rather than be masked as an infinite regime constant.
pub fn validate_collection_denominator(l: f64, bt: f64, tau: f64) -> RMFResult<f64> {
    let denominator = l + bt * tau;
    if !denominator.is_finite() || denominator == 0.0 {
        return Err(RMFError::DegenerateDenominator { value: denominator });
    }
    Ok(denominator)
}

/// Validate a secondary-peak sigma: finite and strictly positive.
pub fn validate_peak_sigma(value: f64) -> RMFResult<f64> {
    if !value.is_finite() || value <= 0.0 {
        return Err(RMFError::InvalidPeakSigma { value });
    }
    Ok(value)
}

/// Validate a secondary-peak weight: finite (zero and negative weights are
/// legal calibration outcomes).
pub fn validate_peak_weight(value: f64) -> RMFResult<f64> {
    if !value.is_finite() {
        return Err(RMFError::InvalidPeakWeight { value });
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Success paths for each guard.
    // - Every error branch: empty / non-finite grids, non-finite scalars,
    //   degenerate sigma / norm / l / tau, and a vanishing denominator.
    //
    // They intentionally DO NOT cover:
    // - Constructor-level composition of these guards (tested in `params`).
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Verify that a finite, non-empty grid passes and the two failure
    // modes are reported with their payloads.
    //
    // Given
    // -----
    // - A valid 3-element grid, an empty grid, and a grid with a NaN at
    //   index 1.
    //
    // Expect
    // ------
    // - Ok(()), `EmptyEnergyGrid`, and `NonFiniteEnergy { index: 1, .. }`
    //   respectively.
    fn validate_energy_grid_covers_all_branches() {
        // Arrange
        let valid = array![1.0_f64, 2.0, 3.0];
        let empty = ndarray::Array1::<f64>::zeros(0);
        let tainted = array![1.0_f64, f64::NAN, 3.0];

        // Act & Assert
        assert!(validate_energy_grid(valid.view()).is_ok());
        assert_eq!(validate_energy_grid(empty.view()), Err(RMFError::EmptyEnergyGrid));
        match validate_energy_grid(tainted.view()) {
            Err(RMFError::NonFiniteEnergy { index, .. }) => assert_eq!(index, 1),
            other => panic!("expected NonFiniteEnergy at index 1, got {:?}", other),
        }
    }

    #[test]
    // Purpose
    // -------
    // Verify that `validate_finite_param` passes finite values through and
    // names the parameter on failure.
    //
    // Given
    // -----
    // - A finite `mu` and an infinite `mu`.
    //
    // Expect
    // ------
    // - The finite value is returned unchanged; the infinite value yields
    //   `NonFiniteParam { name: "mu", .. }`.
    fn validate_finite_param_names_offender() {
        // Act & Assert
        assert_eq!(validate_finite_param("mu", 0.002), Ok(0.002));
        match validate_finite_param("mu", f64::INFINITY) {
            Err(RMFError::NonFiniteParam { name, .. }) => assert_eq!(name, "mu"),
            other => panic!("expected NonFiniteParam for mu, got {:?}", other),
        }
    }

    #[test]
    // Purpose
    // -------
    // Exercise the strictly-positive guards (`sig`, `l`, peak sigma) on
    // zero, negative, and NaN inputs.
    //
    // Given
    // -----
    // - Degenerate values 0.0, -1.0, and NaN.
    //
    // Expect
    // ------
    // - Each guard rejects all three and accepts a positive value.
    fn strictly_positive_guards_reject_degenerate_values() {
        // Act & Assert: resolution sigma
        assert!(validate_resolution_sigma(0.12).is_ok());
        for bad in [0.0, -1.0, f64::NAN] {
            assert!(matches!(
                validate_resolution_sigma(bad),
                Err(RMFError::InvalidSigma { .. })
            ));
        }

        // Act & Assert: scale length
        assert!(validate_scale_length(50.0).is_ok());
        for bad in [0.0, -1.0, f64::NAN] {
            assert!(matches!(
                validate_scale_length(bad),
                Err(RMFError::InvalidScaleLength { .. })
            ));
        }

        // Act & Assert: peak sigma
        assert!(validate_peak_sigma(0.12).is_ok());
        for bad in [0.0, -1.0, f64::NAN] {
            assert!(matches!(validate_peak_sigma(bad), Err(RMFError::InvalidPeakSigma { .. })));
        }
    }

    #[test]
    // Purpose
    // -------
    // Exercise the non-zero guards (`norm`, `tau`) and confirm negative
    // values are accepted (sign is a calibration outcome, not an error).
    //
    // Given
    // -----
    // - Zero, NaN, and negative values for each guard.
    //
    // Expect
    // ------
    // - Zero and NaN are rejected; negative values pass.
    fn non_zero_guards_allow_negative_but_reject_zero() {
        // Act & Assert: norm
        assert!(validate_norm(1.0).is_ok());
        assert!(validate_norm(-2.0).is_ok());
        assert!(matches!(validate_norm(0.0), Err(RMFError::InvalidNorm { .. })));
        assert!(matches!(validate_norm(f64::NAN), Err(RMFError::InvalidNorm { .. })));

        // Act & Assert: tau
        assert!(validate_time_constant(20.0).is_ok());
        assert!(validate_time_constant(-5.0).is_ok());
        assert!(matches!(validate_time_constant(0.0), Err(RMFError::InvalidTimeConstant { .. })));
    }

    #[test]
    // Purpose
    // -------
    // Verify the shared denominator guard on a cancelling combination.
    //
    // Given
    // -----
    // - l = 10, Bt = -0.5, tau = 20, so l + Bt·tau = 0 exactly.
    //
    // Expect
    // ------
    // - `DegenerateDenominator { value: 0.0 }`; a non-cancelling
    //   combination passes and returns the denominator.
    fn validate_collection_denominator_rejects_cancellation() {
        // Act & Assert: cancelling combination
        match validate_collection_denominator(10.0, -0.5, 20.0) {
            Err(RMFError::DegenerateDenominator { value }) => assert_eq!(value, 0.0),
            other => panic!("expected DegenerateDenominator, got {:?}", other),
        }

        // Act & Assert: ordinary combination
        assert_eq!(validate_collection_denominator(50.0, 0.5, 20.0), Ok(60.0));
    }

    #[test]
    // Purpose
    // -------
    // Verify that peak weights require finiteness only: zero and negative
    // weights are legal.
    //
    // Given
    // -----
    // - Weights 0.0, -0.05, and NaN.
    //
    // Expect
    // ------
    // - 0.0 and -0.05 pass; NaN yields `InvalidPeakWeight`.
    fn validate_peak_weight_requires_finiteness_only() {
        // Act & Assert
        assert_eq!(validate_peak_weight(0.0), Ok(0.0));
        assert_eq!(validate_peak_weight(-0.05), Ok(-0.05));
        assert!(matches!(
            validate_peak_weight(f64::NAN),
            Err(RMFError::InvalidPeakWeight { .. })
        ));
    }
}
