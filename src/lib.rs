//! rust_rmf — X-ray detector response (RMF) models with Python bindings.
//!
//! Purpose
//! -------
//! Serve as the crate root for Rust callers and as the PyO3 bridge that
//! exposes the redistribution-response models to Python via the `_rust_rmf`
//! extension module. Given an incident monochromatic photon energy and a
//! channel-energy grid, the models predict the detector's measured-energy
//! distribution: a depth-integrated continuum (incomplete charge collection
//! under attenuation) plus fixed secondary peaks (escape, fluorescence,
//! electronic noise).
//!
//! Key behaviors
//! -------------
//! - Re-export the core Rust modules ([`quadrature`] and [`response`]) as
//!   the public crate surface.
//! - Define `#[pyclass]` wrappers and the `#[pymodule]` initializer for the
//!   `_rust_rmf` Python extension when the `python-bindings` feature is
//!   enabled.
//! - Register the `response` submodule under `rust_rmf` in `sys.modules`
//!   so dot-notation imports work as expected.
//!
//! Invariants & assumptions
//! ------------------------
//! - All heavy numerical work is implemented in the inner Rust modules;
//!   this file performs only FFI glue, input conversion, and error mapping.
//! - When `python-bindings` is enabled, the Python-visible classes mirror
//!   the invariants and signatures of their Rust counterparts
//!   ([`response::Set2Params`], [`response::Set3Params`]).
//! - Parameter validation runs at wrapper construction, so `evaluate` calls
//!   can only fail on grid or quadrature problems.
//!
//! Conventions
//! -----------
//! - Python-exposed classes live under `_rust_rmf.response` and are
//!   typically wrapped by thin pure-Python facades in a top-level
//!   `rust_rmf` package.
//! - Energies are keV, depths μm; conventions follow the documentation of
//!   the underlying Rust modules.
//! - Errors from core Rust code are propagated as rich error types
//!   internally and converted to `ValueError` at the PyO3 boundary.
//!
//! Downstream usage
//! ----------------
//! - Native Rust code should depend directly on the inner modules and can
//!   ignore the PyO3 items guarded by the `python-bindings` feature.
//! - An external driver looping over incident energies can stack the
//!   per-call output rows into a full response matrix for downstream
//!   instrument-calibration formats; that orchestration lives outside this
//!   crate.
//!
//! Testing notes
//! -------------
//! - Core numerical behavior is covered by unit tests in the inner modules
//!   and by the integration suite under `tests/`.
//! - Smoke tests for the PyO3 bindings verify construction and evaluation
//!   round-trips from Python.

pub mod quadrature;
pub mod response;
pub mod utils;

#[cfg(feature = "python-bindings")]
use numpy::{IntoPyArray, PyArray1};

#[cfg(feature = "python-bindings")]
use pyo3::{prelude::*, types::PyAny};

#[cfg(feature = "python-bindings")]
use crate::{
    quadrature::QuadTolerances,
    response::{ContinuumParams, PeakShape, Set2Params, Set3Params},
    utils::extract_f64_array,
};

/// Set2Model — Python-facing wrapper for the set-2 response variant.
///
/// Purpose
/// -------
/// Hold a validated set-2 parameter bundle (continuum plus escape peak) and
/// forward evaluation to [`Set2Params::evaluate`].
///
/// Parameters
/// ----------
/// Constructed from Python via
/// `Set2Model(l, bt, sig, tau, norm, f0, mu, sig_esc, wt_esc, e_in)`:
/// the eight continuum scalars followed by the escape-peak
/// `(sigma, weight)` pair.
///
/// Invariants
/// ----------
/// - Construction fails with `ValueError` if any precondition is violated
///   (`sig > 0`, `norm ≠ 0`, `l > 0`, `tau ≠ 0`, finite scalars, a
///   non-degenerate regime denominator, `sig_esc > 0`).
///
/// Notes
/// -----
/// - Rust callers should use [`Set2Params`] directly; this wrapper exists
///   solely for the PyO3 binding. Evaluation uses the default quadrature
///   tolerances.
#[cfg(feature = "python-bindings")]
#[pyclass(module = "rust_rmf.response")]
pub struct Set2Model {
    inner: Set2Params,
}

#[cfg(feature = "python-bindings")]
#[pymethods]
impl Set2Model {
    #[new]
    #[allow(clippy::too_many_arguments)]
    fn new(
        l: f64, bt: f64, sig: f64, tau: f64, norm: f64, f0: f64, mu: f64, sig_esc: f64,
        wt_esc: f64, e_in: f64,
    ) -> PyResult<Self> {
        let continuum = ContinuumParams::new(l, bt, sig, tau, norm, f0, mu, e_in)?;
        let escape = PeakShape::new(sig_esc, wt_esc)?;
        Ok(Set2Model { inner: Set2Params::new(continuum, escape) })
    }

    /// Evaluate the response over a channel-energy grid (keV).
    ///
    /// Accepts a 1-D `numpy.ndarray`, `pandas.Series`, or float sequence
    /// and returns a NumPy array of the same length.
    fn evaluate<'py>(
        &self, py: Python<'py>, energies: &Bound<'py, PyAny>,
    ) -> PyResult<Bound<'py, PyArray1<f64>>> {
        let grid = extract_f64_array(py, energies)?;
        let response = self.inner.evaluate(grid.as_array(), &QuadTolerances::default())?;
        Ok(response.into_pyarray(py))
    }

    #[getter]
    fn e_in(&self) -> f64 {
        self.inner.continuum.e_in
    }

    #[getter]
    fn norm(&self) -> f64 {
        self.inner.continuum.norm
    }
}

/// Set3Model — Python-facing wrapper for the set-3 response variant.
///
/// Purpose
/// -------
/// Hold a validated set-3 parameter bundle (continuum plus escape,
/// fluorescence, and two noise peaks) and forward evaluation to
/// [`Set3Params::evaluate`].
///
/// Parameters
/// ----------
/// Constructed from Python via
/// `Set3Model(l, bt, sig, tau, norm, f0, mu, sig_esc, wt_esc, e_in,
/// sig_fl, wt_fl, sig_noise1, wt_noise1, sig_noise2, wt_noise2)`:
/// the eight continuum scalars followed by the four `(sigma, weight)`
/// pairs for the escape, fluorescence, and noise peaks.
///
/// Invariants
/// ----------
/// - Construction fails with `ValueError` on any precondition violation;
///   see [`Set2Model`] plus positivity of every peak sigma.
///
/// Notes
/// -----
/// - Rust callers should use [`Set3Params`] directly; this wrapper exists
///   solely for the PyO3 binding. Evaluation uses the default quadrature
///   tolerances.
#[cfg(feature = "python-bindings")]
#[pyclass(module = "rust_rmf.response")]
pub struct Set3Model {
    inner: Set3Params,
}

#[cfg(feature = "python-bindings")]
#[pymethods]
impl Set3Model {
    #[new]
    #[allow(clippy::too_many_arguments)]
    fn new(
        l: f64, bt: f64, sig: f64, tau: f64, norm: f64, f0: f64, mu: f64, sig_esc: f64,
        wt_esc: f64, e_in: f64, sig_fl: f64, wt_fl: f64, sig_noise1: f64, wt_noise1: f64,
        sig_noise2: f64, wt_noise2: f64,
    ) -> PyResult<Self> {
        let continuum = ContinuumParams::new(l, bt, sig, tau, norm, f0, mu, e_in)?;
        let escape = PeakShape::new(sig_esc, wt_esc)?;
        let fluorescence = PeakShape::new(sig_fl, wt_fl)?;
        let noise_low = PeakShape::new(sig_noise1, wt_noise1)?;
        let noise_high = PeakShape::new(sig_noise2, wt_noise2)?;
        Ok(Set3Model {
            inner: Set3Params::new(continuum, escape, fluorescence, noise_low, noise_high),
        })
    }

    /// Evaluate the response over a channel-energy grid (keV).
    ///
    /// Accepts a 1-D `numpy.ndarray`, `pandas.Series`, or float sequence
    /// and returns a NumPy array of the same length.
    fn evaluate<'py>(
        &self, py: Python<'py>, energies: &Bound<'py, PyAny>,
    ) -> PyResult<Bound<'py, PyArray1<f64>>> {
        let grid = extract_f64_array(py, energies)?;
        let response = self.inner.evaluate(grid.as_array(), &QuadTolerances::default())?;
        Ok(response.into_pyarray(py))
    }

    #[getter]
    fn e_in(&self) -> f64 {
        self.inner.continuum.e_in
    }

    #[getter]
    fn norm(&self) -> f64 {
        self.inner.continuum.norm
    }
}

/// _rust_rmf — PyO3 module initializer for the Python extension.
///
/// Purpose
/// -------
/// Define the `_rust_rmf` Python module and register its `response`
/// submodule used by the public `rust_rmf` package.
///
/// Key behaviors
/// -------------
/// - Create the `response` submodule and attach the model classes.
/// - Register the submodule in `sys.modules` so it is importable via the
///   dotted path `rust_rmf.response`.
///
/// Errors
/// ------
/// - `PyErr` if creating the submodule or manipulating `sys.modules`
///   fails.
#[cfg(feature = "python-bindings")]
#[pymodule]
fn _rust_rmf<'py>(_py: Python<'py>, m: &Bound<'py, PyModule>) -> PyResult<()> {
    let response_mod = PyModule::new(_py, "response")?;
    response(_py, m, &response_mod)?;

    // Manually add the submodule into sys.modules to allow for dot notation.
    _py.import("sys")?
        .getattr("modules")?
        .set_item("rust_rmf.response", response_mod)?;
    Ok(())
}

#[cfg(feature = "python-bindings")]
fn response<'py>(
    _py: Python, rust_rmf: &Bound<'py, PyModule>, m: &Bound<'py, PyModule>,
) -> PyResult<()> {
    m.add_class::<Set2Model>()?;
    m.add_class::<Set3Model>()?;
    rust_rmf.add_submodule(m)?;
    Ok(())
}
