//! Disposable personal income

use super::identities;
use crate::inputs::IncomeCoefficients;

/// Nominal DPI grows with nominal GDP, plus a countercyclical adjustment
/// proportional to the quarterly change in the unemployment gap
pub fn nominal_dpi(
    coefficients: &IncomeCoefficients,
    dpi_prev: f64,
    nominal_gdp: f64,
    nominal_gdp_prev: f64,
    gap_change: f64,
) -> f64 {
    let gdp_factor = nominal_gdp / nominal_gdp_prev;
    dpi_prev * gdp_factor * (coefficients.unemployment_gap_sensitivity * gap_change).exp()
}

/// Real DPI in jump-off prices
pub fn real_dpi(nominal_dpi: f64, pce_price_index: f64) -> f64 {
    identities::deflate(nominal_dpi, pce_price_index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_dpi_tracks_gdp_without_slack_change() {
        let coefficients = IncomeCoefficients::default();
        let dpi = nominal_dpi(&coefficients, 20_000.0, 27_270.0, 27_000.0, 0.0);
        assert_relative_eq!(dpi, 20_200.0, epsilon = 1e-9);
    }

    #[test]
    fn test_rising_unemployment_supports_income_share() {
        let coefficients = IncomeCoefficients::default();
        let calm = nominal_dpi(&coefficients, 20_000.0, 27_000.0, 27_000.0, 0.0);
        let stressed = nominal_dpi(&coefficients, 20_000.0, 27_000.0, 27_000.0, 1.0);
        assert!(stressed > calm);
    }

    #[test]
    fn test_real_dpi_at_base_prices() {
        assert_relative_eq!(real_dpi(21_000.0, 100.0), 21_000.0);
        assert_relative_eq!(real_dpi(21_000.0, 105.0), 20_000.0, epsilon = 1e-9);
    }
}
