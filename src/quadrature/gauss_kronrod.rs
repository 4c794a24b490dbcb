//! Gauss–Kronrod 7–15 panel rule.
//!
//! A single fixed-node panel: the 15-point Kronrod extension of the 7-point
//! Gauss–Legendre rule, with `|K15 − G7|` as the per-panel error proxy. The
//! adaptive driver in [`adaptive`](crate::quadrature::adaptive) bisects
//! panels until the summed proxy meets its tolerance target.
//!
//! Node and weight constants are the standard QUADPACK `dqk15` values,
//! carried at full `f64` precision. The panel evaluates the integrand at 15
//! abscissae; the embedded Gauss estimate reuses 7 of them, so the error
//! proxy costs no extra evaluations.
use crate::quadrature::errors::{QuadError, QuadResult};

/// Kronrod abscissae on [-1, 1], positive half (index 7 is the midpoint).
const XGK: [f64; 8] = [
    0.991_455_371_120_812_6,
    0.949_107_912_342_758_5,
    0.864_864_423_359_769_1,
    0.741_531_185_599_394_4,
    0.586_087_235_467_691_1,
    0.405_845_151_377_397_17,
    0.207_784_955_007_898_47,
    0.0,
];

/// Kronrod weights paired with [`XGK`].
const WGK: [f64; 8] = [
    0.022_935_322_010_529_225,
    0.063_092_092_629_978_55,
    0.104_790_010_322_250_18,
    0.140_653_259_715_525_92,
    0.169_004_726_639_267_9,
    0.190_350_578_064_785_41,
    0.204_432_940_075_298_89,
    0.209_482_141_084_727_83,
];

/// Gauss weights for the embedded 7-point rule; `WG[k]` pairs with
/// `XGK[2k + 1]` and `WG[3]` with the midpoint.
const WG: [f64; 4] = [
    0.129_484_966_168_869_69,
    0.279_705_391_489_276_67,
    0.381_830_050_505_118_94,
    0.417_959_183_673_469_39,
];

/// Estimate produced by a single Gauss–Kronrod panel.
///
/// - `integral`: the 15-point Kronrod estimate over the panel.
/// - `error`: the `|K15 − G7|` proxy used to rank panels for refinement.
///
/// Invariant: `error ≥ 0` and both fields are finite whenever the panel
/// evaluation succeeds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelEstimate {
    pub integral: f64,
    pub error: f64,
}

/// Evaluate one G7–K15 panel of `f` over `[a, b]`.
///
/// Parameters
/// ----------
/// - `f`: integrand; must produce finite values at every panel abscissa.
/// - `a`, `b`: panel bounds. Finite bounds are the caller's responsibility;
///   the adaptive driver validates them once per integral.
///
/// Returns
/// -------
/// `QuadResult<PanelEstimate>`
///   - `Ok(PanelEstimate)` with the Kronrod estimate and error proxy.
///   - `Err(QuadError::NonFiniteEvaluation)` if `f` returns NaN/±inf at any
///     abscissa, carrying the offending `x`.
///
/// Notes
/// -----
/// - The rule is symmetric: each positive abscissa is mirrored about the
///   panel midpoint, so 15 evaluations cover both estimates.
/// - Exact for polynomials up to degree 13 (Gauss) / 22 (Kronrod), which
///   makes smooth exponential-Gaussian products converge in few panels.
pub fn kronrod_panel<F>(f: &F, a: f64, b: f64) -> QuadResult<PanelEstimate>
where
    F: Fn(f64) -> f64,
{
    let half = 0.5 * (b - a);
    let mid = 0.5 * (a + b);

    let eval = |x: f64| -> QuadResult<f64> {
        let value = f(x);
        if !value.is_finite() {
            return Err(QuadError::NonFiniteEvaluation { x, value });
        }
        Ok(value)
    };

    let f_mid = eval(mid)?;
    let mut kronrod = WGK[7] * f_mid;
    let mut gauss = WG[3] * f_mid;

    for (i, &node) in XGK.iter().take(7).enumerate() {
        let offset = half * node;
        let pair = eval(mid - offset)? + eval(mid + offset)?;
        kronrod += WGK[i] * pair;
        if i % 2 == 1 {
            gauss += WG[i / 2] * pair;
        }
    }

    let integral = kronrod * half;
    let error = ((kronrod - gauss) * half).abs();
    Ok(PanelEstimate { integral, error })
}
