//! utils — PyO3 input-extraction helpers for the Python bindings.
//!
//! Purpose
//! -------
//! Convert Python-side array-likes into the contiguous `f64` views the
//! response models consume, without copying when the input is already a
//! well-behaved NumPy array. Everything here is glue; no numerical work
//! happens in this module.
//!
//! Key behaviors
//! -------------
//! - Accept a 1-D `numpy.ndarray` of float64 directly.
//! - Accept a `pandas.Series` (or anything exposing `to_numpy`) by asking
//!   the object to materialize itself first.
//! - Fall back to extracting a plain sequence of floats into a fresh NumPy
//!   array, so lists and tuples also work.
//!
//! Invariants & assumptions
//! ------------------------
//! - A successful extraction yields a C-contiguous, read-only 1-D view;
//!   finiteness and emptiness checks remain the response stack's job.
//! - At most one allocation occurs, and only on the sequence fallback path.
//!
//! Testing notes
//! -------------
//! - Exercised by Python-level tests of the `_rust_rmf` extension; there is
//!   nothing to unit-test without a live interpreter.

#[cfg(feature = "python-bindings")]
use pyo3::{prelude::*, types::PyAny};

#[cfg(feature = "python-bindings")]
use numpy::{
    IntoPyArray,    // Vec → PyArray
    PyArrayMethods, // .readonly()
    PyReadonlyArray1,
};

/// Extract a contiguous 1-D `f64` array from a NumPy array, pandas Series,
/// or plain float sequence.
///
/// Tries, in order: a direct `PyReadonlyArray1<f64>` extraction, the
/// object's `to_numpy(copy=False)`, and finally a `Vec<f64>` copy. The
/// first contiguous result wins.
///
/// # Errors
/// - `PyTypeError` when the object is none of the accepted shapes.
#[cfg(feature = "python-bindings")]
#[inline]
pub fn extract_f64_array<'py>(
    py: Python<'py>, raw_energies: &Bound<'py, PyAny>,
) -> PyResult<PyReadonlyArray1<'py, f64>> {
    if let Ok(arr_ro) = raw_energies.extract::<PyReadonlyArray1<f64>>() {
        if arr_ro.as_slice().is_ok() {
            return Ok(arr_ro);
        }
    }

    if let Ok(obj) = raw_energies.call_method("to_numpy", (false,), None) {
        if let Ok(series_ro) = obj.extract::<PyReadonlyArray1<f64>>() {
            if series_ro.as_slice().is_ok() {
                return Ok(series_ro);
            }
        }
    }

    let vec: Vec<f64> = raw_energies.extract().map_err(|_| {
        pyo3::exceptions::PyTypeError::new_err(
            "expected a 1-D numpy.ndarray, pandas.Series, or sequence of float64",
        )
    })?;
    Ok(vec.into_pyarray(py).readonly())
}
