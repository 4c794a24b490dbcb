//! response — X-ray RMF response stack: parameters, kernels, and models.
//!
//! Purpose
//! -------
//! Provide the detector-response layer of the crate: validated physical
//! parameters, the two-regime charge-collection profile, the secondary-peak
//! Gaussian primitive, and the set-2 / set-3 response assemblers that
//! combine them into a redistribution response for one incident photon
//! energy. This is the surface most consumers (including the Python
//! bindings) should depend on.
//!
//! Key behaviors
//! -------------
//! - Collect parameter containers and their constructor-time validation in
//!   [`params`] and [`validation`]: continuum scalars, per-peak shapes, and
//!   the variant bundles [`Set2Params`] / [`Set3Params`].
//! - Define the charge-collection regimes in [`profile`]: the derived
//!   constants `(Al, Gm)`, the fixed 300 μm absorption depth, and the two
//!   named depth kernels handed to the quadrature.
//! - Keep the Gaussian peak primitive and the fixed line energies (escape,
//!   fluorescence, noise) in [`peaks`].
//! - Assemble responses in [`model`]: one shared depth-integration path
//!   ([`continuum_response`](model::continuum_response)) plus per-variant
//!   peak sums, rescaled by `1 / norm`.
//! - Centralize the error surface in [`errors`] (`RMFError` / `RMFResult`),
//!   including normalization of quadrature failures.
//!
//! Invariants & assumptions
//! ------------------------
//! - All entities are stateless value computations: nothing persists
//!   beyond one call and no shared mutable state exists between calls, so
//!   separate evaluations are trivially independent (parallelize across
//!   calls externally if needed; the stack imposes no concurrency
//!   discipline of its own).
//! - Parameters are validated at construction; evaluation paths assume the
//!   documented invariants and never re-check scalars.
//! - Channel grids are finite and non-empty; outputs always match the grid
//!   length and ordering.
//! - The subtree performs no I/O and no logging.
//!
//! Conventions
//! -----------
//! - Energies are keV, depths μm, attenuation 1/μm; indices are 0-based.
//! - Fixed instrument constants (300 μm depth bound, the 1.7475 keV
//!   escape/fluorescence line, the 0.17 / 0.39 keV noise lines) are exact
//!   literals in [`profile`] and [`peaks`], never derived.
//! - Failures are structured [`RMFError`] values; panics indicate
//!   programming errors, not invalid user input.
//!
//! Downstream usage
//! ----------------
//! - Typical Rust flow:
//!   1. Build a [`ContinuumParams`] and the variant's [`PeakShape`]s.
//!   2. Bundle them into [`Set2Params`] or [`Set3Params`].
//!   3. Call `evaluate(energies, &QuadTolerances::default())` per incident
//!      energy; an external driver may stack the rows into a full response
//!      matrix.
//! - Python bindings wrap the same entry points and rely on
//!   `From<RMFError> for PyErr` to raise `ValueError`.
//!
//! Testing notes
//! -------------
//! - Unit tests in [`validation`] cover every guard branch; [`params`]
//!   covers constructor composition; [`profile`] covers the Al/Gm identity
//!   and boundary continuity; [`peaks`] covers symmetry, weight scaling,
//!   and the σ → 0 concentration limit; [`model`] covers shape,
//!   non-negativity, additivity, normalization scaling, and the set-3 →
//!   set-2 reduction. The end-to-end scenario lives in
//!   `tests/integration_response_pipeline.rs`.

pub mod errors;
pub mod model;
pub mod params;
pub mod peaks;
pub mod profile;
pub mod validation;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::errors::{RMFError, RMFResult};
pub use self::model::continuum_response;
pub use self::params::{ContinuumParams, PeakShape, Set2Params, Set3Params};
pub use self::peaks::{
    ESCAPE_LINE_OFFSET_KEV, FLUORESCENCE_LINE_KEV, NOISE_LINE_HIGH_KEV, NOISE_LINE_LOW_KEV,
    gaussian_peak,
};
pub use self::profile::{DEPTH_FULL_ABSORPTION_UM, RegimeConstants};

// ---- Optional convenience prelude for downstream crates -------------------
//
// Downstream crates can write
//
//     use rust_rmf::response::prelude::*;
//
// to import the main response-model surface in a single line.

pub mod prelude {
    pub use super::errors::{RMFError, RMFResult};
    pub use super::model::continuum_response;
    pub use super::params::{ContinuumParams, PeakShape, Set2Params, Set3Params};
}
