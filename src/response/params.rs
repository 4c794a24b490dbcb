//! Physical-parameter containers for the RMF response models.
//!
//! This module provides the validated value types consumed by
//! `response::model`: the shared continuum parameters, the per-peak
//! `(sigma, weight)` shape, and the two variant-specific bundles
//! [`Set2Params`] / [`Set3Params`].
//!
//! ## Invariants validated by constructors
//! - every scalar finite
//! - `sig > 0`, `l > 0`
//! - `norm ≠ 0`, `tau ≠ 0`
//! - `l + Bt·tau ≠ 0` (shared regime-constant denominator)
//! - peak sigmas > 0; peak weights finite (sign unconstrained)
//!
//! `f0` and `Bt` carry no range constraints beyond finiteness: the model
//! treats them as opaque calibration scalars.
//!
//! All types here are plain value containers — no mutation, no lifecycle
//! beyond a single evaluation, cheap to clone.
use crate::response::{
    errors::RMFResult,
    validation::{
        validate_collection_denominator, validate_finite_param, validate_norm,
        validate_peak_sigma, validate_peak_weight, validate_resolution_sigma,
        validate_scale_length, validate_time_constant,
    },
};

/// Continuum (depth-integration) parameters shared by both model variants.
///
/// Fields
/// ------
/// - `l`: characteristic length of the rise regime (μm); > 0.
/// - `bt`: beta exponent of the rise shape; opaque calibration scalar.
/// - `sig`: energy-resolution sigma (keV); > 0.
/// - `tau`: decay time constant of the second regime (μm); non-zero.
/// - `norm`: final normalization constant; non-zero.
/// - `f0`: collection efficiency at zero depth; opaque calibration scalar.
/// - `mu`: linear attenuation coefficient (1/μm).
/// - `e_in`: incident photon energy (keV).
///
/// Invariants are validated once in [`ContinuumParams::new`]; evaluation
/// code assumes them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContinuumParams {
    pub l: f64,
    pub bt: f64,
    pub sig: f64,
    pub tau: f64,
    pub norm: f64,
    pub f0: f64,
    pub mu: f64,
    pub e_in: f64,
}

impl ContinuumParams {
    /// Construct validated continuum parameters.
    ///
    /// Parameters
    /// ----------
    /// - `l`, `bt`, `sig`, `tau`, `norm`, `f0`, `mu`, `e_in`: the named
    ///   physical scalars documented on the struct.
    ///
    /// Returns
    /// -------
    /// `RMFResult<ContinuumParams>`
    ///   - `Ok` when every invariant in the module docs holds.
    ///   - `Err(RMFError)` identifying the first violated precondition;
    ///     nothing is silently clamped or defaulted.
    ///
    /// Errors
    /// ------
    /// - `RMFError::InvalidScaleLength`, `InvalidSigma`,
    ///   `InvalidTimeConstant`, `InvalidNorm`, `NonFiniteParam`, and
    ///   `DegenerateDenominator`, per the matching guard in
    ///   `response::validation`.
    ///
    /// Notes
    /// -----
    /// - The denominator check runs last so the individual scalars are
    ///   already known finite when it is evaluated.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        l: f64, bt: f64, sig: f64, tau: f64, norm: f64, f0: f64, mu: f64, e_in: f64,
    ) -> RMFResult<Self> {
        let l = validate_scale_length(l)?;
        let bt = validate_finite_param("Bt", bt)?;
        let sig = validate_resolution_sigma(sig)?;
        let tau = validate_time_constant(tau)?;
        let norm = validate_norm(norm)?;
        let f0 = validate_finite_param("f0", f0)?;
        let mu = validate_finite_param("mu", mu)?;
        let e_in = validate_finite_param("Ein", e_in)?;
        validate_collection_denominator(l, bt, tau)?;
        Ok(ContinuumParams { l, bt, sig, tau, norm, f0, mu, e_in })
    }
}

/// Shape of one secondary Gaussian peak: `(sigma, weight)`.
///
/// The peak *center* is not stored here; centers are fixed instrument
/// constants (escape / fluorescence / noise lines) owned by
/// `response::peaks`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PeakShape {
    /// Peak sigma (keV); > 0.
    pub sigma: f64,
    /// Peak weight (amplitude); finite, sign unconstrained.
    pub weight: f64,
}

impl PeakShape {
    /// Construct a validated peak shape.
    ///
    /// Returns
    /// -------
    /// `RMFResult<PeakShape>`
    ///   - `Ok` for finite `sigma > 0` and finite `weight`.
    ///   - `Err(RMFError::InvalidPeakSigma)` / `Err(RMFError::InvalidPeakWeight)`
    ///     otherwise.
    pub fn new(sigma: f64, weight: f64) -> RMFResult<Self> {
        let sigma = validate_peak_sigma(sigma)?;
        let weight = validate_peak_weight(weight)?;
        Ok(PeakShape { sigma, weight })
    }
}

/// Parameters for the set-2 response variant: continuum plus escape peak.
///
/// Ten scalars total: the eight continuum scalars and the escape-peak
/// `(sigma, weight)` pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Set2Params {
    pub continuum: ContinuumParams,
    pub escape: PeakShape,
}

impl Set2Params {
    /// Bundle already-validated components into a set-2 parameter set.
    pub fn new(continuum: ContinuumParams, escape: PeakShape) -> Self {
        Set2Params { continuum, escape }
    }
}

/// Parameters for the set-3 response variant: continuum plus escape,
/// fluorescence, and two electronic-noise peaks.
///
/// Sixteen scalars total: the eight continuum scalars and four
/// `(sigma, weight)` pairs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Set3Params {
    pub continuum: ContinuumParams,
    pub escape: PeakShape,
    pub fluorescence: PeakShape,
    pub noise_low: PeakShape,
    pub noise_high: PeakShape,
}

impl Set3Params {
    /// Bundle already-validated components into a set-3 parameter set.
    pub fn new(
        continuum: ContinuumParams, escape: PeakShape, fluorescence: PeakShape,
        noise_low: PeakShape, noise_high: PeakShape,
    ) -> Self {
        Set3Params { continuum, escape, fluorescence, noise_low, noise_high }
    }
}
