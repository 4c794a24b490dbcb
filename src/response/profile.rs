//! Charge-collection profile: regime constants and depth kernels.
//!
//! The detector's charge-collection efficiency is modeled in two depth
//! regimes that meet at the characteristic length `l`:
//! - rise regime, depth `x ∈ [0, l]`: efficiency climbs from `f0` as
//!   `f0 + Al·(x/l)^Bt`;
//! - decay regime, depth `x ∈ [l, 300]`: efficiency approaches 1 as
//!   `1 − Gm·exp(−(x−l)/tau)`.
//!
//! `Al` and `Gm` are derived once per evaluation from the continuum
//! parameters. The two kernels below are the integrands handed to the
//! adaptive quadrature: attenuation `exp(−mu·x)` times a unit-weight
//! Gaussian in channel energy whose center tracks the depth-dependent
//! efficiency.
//!
//! Both kernels are named pure functions taking every scalar explicitly;
//! there is no captured mutable state.
use crate::response::params::ContinuumParams;

/// Depth (μm) at which the incident photon is treated as fully absorbed.
///
/// Upper bound of the decay regime. Fixed instrument constant, not a
/// tunable parameter.
pub const DEPTH_FULL_ABSORPTION_UM: f64 = 300.0;

/// Derived constants parameterizing the two charge-collection regimes.
///
/// - `al`: amplitude of the rise-regime power law.
/// - `gm`: amplitude of the decay-regime exponential deficit.
///
/// # Invariants
/// - `al + gm == 1 − f0` exactly in real arithmetic, which makes the
///   efficiency continuous at `x = l`.
/// - Finite whenever the parameters passed validation (the shared
///   denominator `l + Bt·tau` is non-zero by construction).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegimeConstants {
    pub al: f64,
    pub gm: f64,
}

impl RegimeConstants {
    /// Derive `(Al, Gm)` from validated continuum parameters.
    ///
    /// # Formulas
    /// - `Al = l·(1 − f0) / (l + Bt·tau)`
    /// - `Gm = Bt·tau·(1 − f0) / (l + Bt·tau)`
    ///
    /// The denominator is guaranteed non-zero by
    /// [`ContinuumParams::new`](crate::response::params::ContinuumParams::new),
    /// so the derivation itself is total.
    pub fn derive(params: &ContinuumParams) -> Self {
        let denominator = params.l + params.bt * params.tau;
        let deficit = 1.0 - params.f0;
        RegimeConstants {
            al: params.l * deficit / denominator,
            gm: params.bt * params.tau * deficit / denominator,
        }
    }
}

/// Collection efficiency in the rise regime at depth `x ∈ [0, l]`.
///
/// `f0 + Al·(x/l)^Bt`; equals `f0` at the surface and `f0 + Al` at `x = l`.
#[inline]
pub fn rise_efficiency(x: f64, params: &ContinuumParams, al: f64) -> f64 {
    params.f0 + al * (x / params.l).powf(params.bt)
}

/// Collection efficiency in the decay regime at depth `x ∈ [l, 300]`.
///
/// `1 − Gm·exp(−(x−l)/tau)`; equals `1 − Gm` at `x = l` and approaches 1
/// with depth.
#[inline]
pub fn decay_efficiency(x: f64, params: &ContinuumParams, gm: f64) -> f64 {
    1.0 - gm * (-(x - params.l) / params.tau).exp()
}

/// Rise-regime depth kernel at channel energy `e`.
///
/// `exp(−mu·x) · exp(−(e − Ein·η(x))² / (2·sig²))` with
/// `η = `[`rise_efficiency`]. Integrated over `[0, l]` by the response
/// models.
#[inline]
pub fn rise_kernel(x: f64, e: f64, params: &ContinuumParams, al: f64) -> f64 {
    let deviation = e - params.e_in * rise_efficiency(x, params, al);
    (-params.mu * x).exp()
        * (-(deviation * deviation) / (2.0 * params.sig * params.sig)).exp()
}

/// Decay-regime depth kernel at channel energy `e`.
///
/// `exp(−mu·x) · exp(−(e − Ein·η(x))² / (2·sig²))` with
/// `η = `[`decay_efficiency`]. Integrated over `[l, 300]` by the response
/// models.
#[inline]
pub fn decay_kernel(x: f64, e: f64, params: &ContinuumParams, gm: f64) -> f64 {
    let deviation = e - params.e_in * decay_efficiency(x, params, gm);
    (-params.mu * x).exp()
        * (-(deviation * deviation) / (2.0 * params.sig * params.sig)).exp()
}
