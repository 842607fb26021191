//! Real GDP through Okun's law

use super::identities;
use crate::inputs::LaborCoefficients;

/// Annualized growth of potential output between two quarters
pub fn potential_growth(potential: f64, potential_prev: f64) -> f64 {
    identities::annualized_log_change(potential, potential_prev)
}

/// Annualized real GDP growth: potential growth less the Okun response to the
/// quarterly change in the unemployment gap (annualized by the factor 4)
pub fn okun_growth(coefficients: &LaborCoefficients, potential_growth: f64, gap_change: f64) -> f64 {
    potential_growth - 4.0 * coefficients.okun * gap_change
}

/// Output gap in percent of potential
pub fn output_gap(real_gdp: f64, potential_gdp: f64) -> f64 {
    identities::log_gap(real_gdp, potential_gdp)
}
