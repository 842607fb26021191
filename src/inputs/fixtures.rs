//! Shared scenario fixture for unit tests

use super::coefficients::Coefficients;
use super::config::{GuidedInputs, MarketInputs, ModelInputs, Path, Shocks};

/// A calm baseline: unemployment just under its natural rate, GDP at
/// potential, inflation a little above target and no guides.
pub(crate) fn baseline_inputs(horizon: usize) -> ModelInputs {
    let potential_gdp = (0..horizon)
        .map(|t| 20_000.0 * (2.0 * t as f64 / 400.0).exp())
        .collect();

    ModelInputs {
        horizon: horizon as i64,
        start_quarter: None,
        unemployment: vec![3.7, 3.8],
        natural_unemployment: vec![4.0; horizon],
        potential_gdp,
        real_gdp_initial: 20_000.0,
        real_gdp_growth_initial: 2.0,
        nominal_gdp_initial: 27_000.0,
        nominal_dpi_initial: 21_000.0,
        core_inflation: vec![2.8, 2.7],
        inflation_expectations: vec![2.0; horizon],
        inflation_target: vec![2.0; horizon],
        natural_rate: vec![0.5; horizon],
        policy_rate_initial: 4.3,
        term_premium_5y_initial: 0.5,
        term_premium_10y_initial: 0.8,
        term_premium_5y_intercept: Path::Constant(0.6),
        term_premium_10y_intercept: Path::Constant(1.0),
        headline_wedge_initial: 0.1,
        cpi_wedge_initial: 0.05,
        gdp_wedge_initial: -0.1,
        shocks: Shocks::default(),
        markets: MarketInputs {
            bbb_spread: GuidedInputs::new(1.4),
            mortgage_rate: GuidedInputs::new(6.6),
            prime_rate: GuidedInputs::new(7.3),
            house_price_ratio: GuidedInputs::new(100.0),
            equity_prices: GuidedInputs::new(5_000.0),
            cre_prices: GuidedInputs::new(300.0),
            vix: GuidedInputs::new(16.0),
        },
        coefficients: Coefficients::default(),
    }
}
