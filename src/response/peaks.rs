//! Secondary-peak Gaussian primitive and fixed line energies.
//!
//! The response models add a small set of Gaussian features on top of the
//! depth-integrated continuum: an escape peak, a fluorescence peak, and two
//! electronic-noise lines. The line energies are instrument calibration
//! constants and are kept as exact literals; only the `(sigma, weight)`
//! shapes vary per evaluation.
use ndarray::{Array1, ArrayView1};

/// Offset (keV) of the escape line below the incident energy:
/// escape center = `Ein − 1.7475`.
pub const ESCAPE_LINE_OFFSET_KEV: f64 = 1.7475;

/// Energy (keV) of the detector-material fluorescence line.
pub const FLUORESCENCE_LINE_KEV: f64 = 1.7475;

/// Energy (keV) of the lower electronic-noise line.
pub const NOISE_LINE_LOW_KEV: f64 = 0.17;

/// Energy (keV) of the upper electronic-noise line.
pub const NOISE_LINE_HIGH_KEV: f64 = 0.39;

/// Evaluate a weighted Gaussian peak over a channel-energy grid.
///
/// Parameters
/// ----------
/// - `energies`: channel energies (keV); the output has the same length
///   and ordering.
/// - `center`: peak center (keV).
/// - `sigma`: peak sigma (keV). **Precondition**: `sigma > 0`. Enforced
///   upstream by [`PeakShape`](crate::response::params::PeakShape); a
///   degenerate sigma here is a caller programming error and propagates
///   NaN/±inf rather than being caught.
/// - `weight`: peak amplitude; `weight · exp(−(e − center)² / (2·sigma²))`
///   per element.
///
/// Returns
/// -------
/// `Array1<f64>`
///   Elementwise peak values; no side effects, no allocation beyond the
///   output array.
pub fn gaussian_peak(
    energies: ArrayView1<f64>, center: f64, sigma: f64, weight: f64,
) -> Array1<f64> {
    let two_sigma_sq = 2.0 * sigma * sigma;
    energies.mapv(|e| {
        let deviation = e - center;
        weight * (-(deviation * deviation) / two_sigma_sq).exp()
    })
}
