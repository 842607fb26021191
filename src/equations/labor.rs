//! Unemployment gap AR(2)

use crate::inputs::LaborCoefficients;

/// `gap_t = φ1·gap_{t-1} + φ2·gap_{t-2}`
pub fn unemployment_gap(coefficients: &LaborCoefficients, gap_lag1: f64, gap_lag2: f64) -> f64 {
    coefficients.gap_lag1 * gap_lag1 + coefficients.gap_lag2 * gap_lag2
}

/// Reported unemployment: the natural rate plus the projected gap
pub fn unemployment_rate(natural: f64, gap: f64) -> f64 {
    natural + gap
}
