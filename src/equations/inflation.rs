//! Core inflation Phillips curve and headline wedges

use crate::inputs::InflationCoefficients;

/// Weighted sum of lagged values; `lagged[0]` is one quarter back
pub fn distributed_lag(weights: &[f64], lagged: &[f64]) -> f64 {
    weights.iter().zip(lagged).map(|(w, x)| w * x).sum()
}

/// Core PCE inflation from its own lags, expectations and labor market slack
pub fn core_inflation(
    coefficients: &InflationCoefficients,
    lagged_core: &[f64],
    expectations: f64,
    unemployment_gap: f64,
    shock: f64,
) -> f64 {
    distributed_lag(&coefficients.core_lags, lagged_core)
        + coefficients.expectations * expectations
        + coefficients.unemployment_gap * unemployment_gap
        + shock
}

/// AR(1) wedge between two inflation measures
pub fn wedge(persistence: f64, prev: f64, shock: f64) -> f64 {
    persistence * prev + shock
}

pub fn headline_inflation(core: f64, headline_wedge: f64) -> f64 {
    core + headline_wedge
}

pub fn cpi_inflation(coefficients: &InflationCoefficients, headline: f64, cpi_wedge: f64) -> f64 {
    coefficients.cpi_intercept + headline + cpi_wedge
}

pub fn deflator_inflation(headline: f64, gdp_wedge: f64) -> f64 {
    headline + gdp_wedge
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_distributed_lag_ignores_extra_history() {
        assert_relative_eq!(distributed_lag(&[0.5, 0.25], &[2.0, 4.0, 100.0]), 2.0);
    }

    #[test]
    fn test_core_inflation_default_calibration() {
        let coefficients = InflationCoefficients::default();
        let core = core_inflation(&coefficients, &[2.7, 2.8], 2.0, -0.2, 0.0);
        let expected = 0.36 * 2.7 + 0.23 * 2.8 + 0.41 * 2.0 + 0.08 * -0.2;
        assert_relative_eq!(core, expected, epsilon = 1e-12);
    }

    #[test]
    fn test_steady_state_converges_to_expectations() {
        // Weights sum to one, so with a closed gap inflation settles at expectations
        let coefficients = InflationCoefficients::default();
        let mut path = vec![4.0, 4.0];
        for _ in 0..200 {
            let n = path.len();
            let lagged = [path[n - 1], path[n - 2]];
            path.push(core_inflation(&coefficients, &lagged, 2.0, 0.0, 0.0));
        }
        assert_relative_eq!(*path.last().unwrap(), 2.0, epsilon = 1e-6);
    }

    #[test]
    fn test_headline_measures() {
        let coefficients = InflationCoefficients::default();
        let headline = headline_inflation(2.5, 0.2);
        assert_relative_eq!(headline, 2.7);
        assert_relative_eq!(cpi_inflation(&coefficients, headline, 0.1), 0.48 + 2.7 + 0.1);
        assert_relative_eq!(deflator_inflation(headline, -0.3), 2.4);
        assert_relative_eq!(wedge(0.36, 1.0, 0.0), 0.36);
    }
}
