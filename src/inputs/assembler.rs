//! Validate a raw configuration into full-horizon series
//!
//! Nothing here extends or truncates a caller's series: a path that does not
//! cover exactly the quarters it has to cover is a configuration error.

use chrono::NaiveDate;
use log::debug;

use super::coefficients::{Anchor, Coefficients};
use super::config::{Market, ModelInputs, Path};
use crate::error::ConfigError;

/// Lag order of the unemployment gap process
pub const UNEMPLOYMENT_LAGS: usize = 2;

/// Guide, jump-off value and shocks of one market variable, checked against the horizon
#[derive(Debug, Clone, PartialEq)]
pub struct GuidedSeries {
    pub(crate) guide: Vec<f64>,
    pub(crate) initial: f64,
    pub(crate) shocks: Vec<f64>,
}

impl GuidedSeries {
    pub fn guide(&self) -> &[f64] {
        &self.guide
    }
}

/// Full-horizon shock paths (zero where none were supplied)
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ShockPaths {
    pub(crate) core_inflation: Vec<f64>,
    pub(crate) headline_wedge: Vec<f64>,
    pub(crate) cpi_wedge: Vec<f64>,
    pub(crate) gdp_wedge: Vec<f64>,
    pub(crate) term_premium_5y: Vec<f64>,
    pub(crate) term_premium_10y: Vec<f64>,
}

/// Read-only input bundle for one projection run.
///
/// Only [`assemble`] builds one, so every series is known to cover the
/// horizon and every value to be finite.
#[derive(Debug, Clone, PartialEq)]
pub struct AssembledInputs {
    pub(crate) horizon: usize,
    pub(crate) start_quarter: Option<NaiveDate>,

    pub(crate) unemployment_observed: Vec<f64>,
    pub(crate) core_inflation_observed: Vec<f64>,

    pub(crate) natural_unemployment: Vec<f64>,
    pub(crate) potential_gdp: Vec<f64>,
    pub(crate) inflation_expectations: Vec<f64>,
    pub(crate) inflation_target: Vec<f64>,
    pub(crate) natural_rate: Vec<f64>,
    pub(crate) term_premium_5y_intercept: Vec<f64>,
    pub(crate) term_premium_10y_intercept: Vec<f64>,

    pub(crate) real_gdp_initial: f64,
    pub(crate) real_gdp_growth_initial: f64,
    pub(crate) nominal_gdp_initial: f64,
    pub(crate) nominal_dpi_initial: f64,
    pub(crate) policy_rate_initial: f64,
    pub(crate) term_premium_5y_initial: f64,
    pub(crate) term_premium_10y_initial: f64,
    pub(crate) headline_wedge_initial: f64,
    pub(crate) cpi_wedge_initial: f64,
    pub(crate) gdp_wedge_initial: f64,

    pub(crate) shocks: ShockPaths,
    pub(crate) markets: Vec<GuidedSeries>,
    pub(crate) coefficients: Coefficients,
}

impl AssembledInputs {
    pub fn horizon(&self) -> usize {
        self.horizon
    }

    pub fn start_quarter(&self) -> Option<NaiveDate> {
        self.start_quarter
    }

    pub fn coefficients(&self) -> &Coefficients {
        &self.coefficients
    }

    pub fn market(&self, market: Market) -> &GuidedSeries {
        &self.markets[market.index()]
    }
}

/// Validate `inputs` and normalize every path to the projection horizon
pub fn assemble(inputs: &ModelInputs) -> Result<AssembledInputs, ConfigError> {
    if inputs.horizon <= 0 {
        return Err(ConfigError::NonPositiveHorizon(inputs.horizon));
    }
    let horizon = usize::try_from(inputs.horizon)
        .map_err(|_| ConfigError::NonPositiveHorizon(inputs.horizon))?;

    let coefficients = inputs.coefficients.clone();
    check_coefficients(&coefficients)?;

    let core_lag_order = coefficients.inflation.core_lags.len().max(2);
    let unemployment_observed =
        observations("unemployment", &inputs.unemployment, UNEMPLOYMENT_LAGS, horizon)?;
    let core_inflation_observed =
        observations("core_inflation", &inputs.core_inflation, core_lag_order, horizon)?;

    let shocks = &inputs.shocks;
    let shocks = ShockPaths {
        core_inflation: optional_series("core_inflation_shocks", shocks.core_inflation.as_deref(), horizon)?,
        headline_wedge: optional_series("headline_wedge_shocks", shocks.headline_wedge.as_deref(), horizon)?,
        cpi_wedge: optional_series("cpi_wedge_shocks", shocks.cpi_wedge.as_deref(), horizon)?,
        gdp_wedge: optional_series("gdp_wedge_shocks", shocks.gdp_wedge.as_deref(), horizon)?,
        term_premium_5y: optional_series("term_premium_5y_shocks", shocks.term_premium_5y.as_deref(), horizon)?,
        term_premium_10y: optional_series("term_premium_10y_shocks", shocks.term_premium_10y.as_deref(), horizon)?,
    };

    let markets = Market::ALL
        .into_iter()
        .map(|market| {
            let raw = inputs.markets.get(market);
            let name = market.name();
            if raw.guide.len() > horizon {
                return Err(ConfigError::GuideTooLong { name, len: raw.guide.len(), horizon });
            }
            check_finite(name, &raw.guide)?;
            let labels = market_labels(market);
            Ok(GuidedSeries {
                guide: raw.guide.clone(),
                initial: scalar(labels.initial, raw.initial)?,
                shocks: optional_series(labels.shocks, raw.shocks.as_deref(), horizon)?,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let assembled = AssembledInputs {
        horizon,
        start_quarter: inputs.start_quarter,
        unemployment_observed,
        core_inflation_observed,
        natural_unemployment: full_series("natural_unemployment", &inputs.natural_unemployment, horizon)?,
        potential_gdp: full_series("potential_gdp", &inputs.potential_gdp, horizon)?,
        inflation_expectations: full_series("inflation_expectations", &inputs.inflation_expectations, horizon)?,
        inflation_target: full_series("inflation_target", &inputs.inflation_target, horizon)?,
        natural_rate: full_series("natural_rate", &inputs.natural_rate, horizon)?,
        term_premium_5y_intercept: path("term_premium_5y_intercept", &inputs.term_premium_5y_intercept, horizon)?,
        term_premium_10y_intercept: path("term_premium_10y_intercept", &inputs.term_premium_10y_intercept, horizon)?,
        real_gdp_initial: scalar("real_gdp_initial", inputs.real_gdp_initial)?,
        real_gdp_growth_initial: scalar("real_gdp_growth_initial", inputs.real_gdp_growth_initial)?,
        nominal_gdp_initial: scalar("nominal_gdp_initial", inputs.nominal_gdp_initial)?,
        nominal_dpi_initial: scalar("nominal_dpi_initial", inputs.nominal_dpi_initial)?,
        policy_rate_initial: scalar("policy_rate_initial", inputs.policy_rate_initial)?,
        term_premium_5y_initial: scalar("term_premium_5y_initial", inputs.term_premium_5y_initial)?,
        term_premium_10y_initial: scalar("term_premium_10y_initial", inputs.term_premium_10y_initial)?,
        headline_wedge_initial: scalar("headline_wedge_initial", inputs.headline_wedge_initial)?,
        cpi_wedge_initial: scalar("cpi_wedge_initial", inputs.cpi_wedge_initial)?,
        gdp_wedge_initial: scalar("gdp_wedge_initial", inputs.gdp_wedge_initial)?,
        shocks,
        markets,
        coefficients,
    };

    debug!(
        "Assembled inputs: horizon={}, {} observed unemployment quarters, {} observed core inflation quarters",
        horizon,
        assembled.unemployment_observed.len(),
        assembled.core_inflation_observed.len()
    );

    Ok(assembled)
}

fn check_coefficients(coefficients: &Coefficients) -> Result<(), ConfigError> {
    let labor = &coefficients.labor;
    let inflation = &coefficients.inflation;
    let policy = &coefficients.policy;
    let terms = &coefficients.term_structure;

    if inflation.core_lags.is_empty() {
        return Err(ConfigError::MissingCoefficient("inflation.core_lags"));
    }
    if policy.core_average_quarters == 0 {
        return Err(ConfigError::MissingCoefficient("policy.core_average_quarters"));
    }
    if terms.window_5y == 0 {
        return Err(ConfigError::MissingCoefficient("term_structure.window_5y"));
    }
    if terms.window_10y == 0 {
        return Err(ConfigError::MissingCoefficient("term_structure.window_10y"));
    }

    check_finite("inflation.core_lags", &inflation.core_lags)?;
    let scalars = [
        ("labor.gap_lag1", labor.gap_lag1),
        ("labor.gap_lag2", labor.gap_lag2),
        ("labor.okun", labor.okun),
        ("inflation.expectations", inflation.expectations),
        ("inflation.unemployment_gap", inflation.unemployment_gap),
        ("inflation.headline_wedge_persistence", inflation.headline_wedge_persistence),
        ("inflation.cpi_wedge_persistence", inflation.cpi_wedge_persistence),
        ("inflation.gdp_wedge_persistence", inflation.gdp_wedge_persistence),
        ("inflation.cpi_intercept", inflation.cpi_intercept),
        ("income.unemployment_gap_sensitivity", coefficients.income.unemployment_gap_sensitivity),
        ("policy.inertia", policy.inertia),
        ("policy.rule_weight", policy.rule_weight),
        ("policy.inflation_gap", policy.inflation_gap),
        ("policy.output_gap", policy.output_gap),
        ("policy.unemployment_drag", policy.unemployment_drag),
        ("term_structure.premium_5y_persistence", terms.premium_5y_persistence),
        ("term_structure.premium_10y_persistence", terms.premium_10y_persistence),
    ];
    for (name, value) in scalars {
        scalar(name, value)?;
    }

    for market in Market::ALL {
        let reversion = coefficients.markets.get(market);
        let labels = market_labels(market);
        scalar(labels.persistence, reversion.persistence)?;
        let anchor_value = match reversion.anchor {
            Anchor::Level { long_run } => long_run,
            Anchor::Spread { long_run, .. } => long_run,
            Anchor::Trend { growth } => growth,
        };
        scalar(labels.anchor, anchor_value)?;
    }

    Ok(())
}

/// Names under which a market's inputs are reported in errors
struct MarketLabels {
    initial: &'static str,
    shocks: &'static str,
    persistence: &'static str,
    anchor: &'static str,
}

fn market_labels(market: Market) -> MarketLabels {
    macro_rules! labels {
        ($name:literal) => {
            MarketLabels {
                initial: concat!($name, ".initial"),
                shocks: concat!($name, "_shocks"),
                persistence: concat!("markets.", $name, ".persistence"),
                anchor: concat!("markets.", $name, ".anchor"),
            }
        };
    }

    match market {
        Market::BbbSpread => labels!("bbb_spread"),
        Market::MortgageRate => labels!("mortgage_rate"),
        Market::PrimeRate => labels!("prime_rate"),
        Market::HousePriceRatio => labels!("house_price_ratio"),
        Market::EquityPrices => labels!("equity_prices"),
        Market::CrePrices => labels!("cre_prices"),
        Market::Vix => labels!("vix"),
    }
}

fn scalar(name: &'static str, value: f64) -> Result<f64, ConfigError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ConfigError::NonFinite { name, index: 0, value })
    }
}

fn check_finite(name: &'static str, values: &[f64]) -> Result<(), ConfigError> {
    match values.iter().position(|v| !v.is_finite()) {
        Some(index) => Err(ConfigError::NonFinite { name, index, value: values[index] }),
        None => Ok(()),
    }
}

fn full_series(name: &'static str, values: &[f64], horizon: usize) -> Result<Vec<f64>, ConfigError> {
    if values.len() != horizon {
        return Err(ConfigError::SeriesLength { name, expected: horizon, actual: values.len() });
    }
    check_finite(name, values)?;
    Ok(values.to_vec())
}

fn optional_series(name: &'static str, values: Option<&[f64]>, horizon: usize) -> Result<Vec<f64>, ConfigError> {
    match values {
        Some(values) => full_series(name, values, horizon),
        None => Ok(vec![0.0; horizon]),
    }
}

fn path(name: &'static str, path: &Path, horizon: usize) -> Result<Vec<f64>, ConfigError> {
    match path {
        Path::Constant(value) => Ok(vec![scalar(name, *value)?; horizon]),
        Path::Series(values) => full_series(name, values, horizon),
    }
}

/// Observed leading quarters.
///
/// At least `lags` observations must be supplied; only those falling inside
/// the horizon are kept.
fn observations(
    name: &'static str,
    values: &[f64],
    lags: usize,
    horizon: usize,
) -> Result<Vec<f64>, ConfigError> {
    if values.len() < lags {
        return Err(ConfigError::InsufficientHistory { name, required: lags, actual: values.len() });
    }
    check_finite(name, values)?;
    Ok(values[..values.len().min(horizon)].to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inputs::fixtures::baseline_inputs;

    #[test]
    fn test_assembles_baseline() {
        let inputs = baseline_inputs(12);
        let assembled = assemble(&inputs).expect("baseline should assemble");

        assert_eq!(assembled.horizon(), 12);
        assert_eq!(assembled.term_premium_10y_intercept.len(), 12);
        assert_eq!(assembled.shocks.core_inflation, vec![0.0; 12]);
        assert_eq!(assembled.markets.len(), Market::ALL.len());
    }

    #[test]
    fn test_rejects_non_positive_horizon() {
        let mut inputs = baseline_inputs(4);
        inputs.horizon = 0;
        assert_eq!(assemble(&inputs), Err(ConfigError::NonPositiveHorizon(0)));

        inputs.horizon = -3;
        assert_eq!(assemble(&inputs), Err(ConfigError::NonPositiveHorizon(-3)));
    }

    #[test]
    fn test_short_exogenous_series_is_not_extended() {
        let mut inputs = baseline_inputs(8);
        inputs.natural_rate.truncate(6);

        assert_eq!(
            assemble(&inputs),
            Err(ConfigError::SeriesLength { name: "natural_rate", expected: 8, actual: 6 })
        );
    }

    #[test]
    fn test_insufficient_unemployment_history() {
        let mut inputs = baseline_inputs(8);
        inputs.unemployment = vec![3.7];

        assert_eq!(
            assemble(&inputs),
            Err(ConfigError::InsufficientHistory { name: "unemployment", required: 2, actual: 1 })
        );
    }

    #[test]
    fn test_seeds_beyond_horizon_are_dropped() {
        let mut inputs = baseline_inputs(1);
        inputs.core_inflation = vec![2.8, 2.7, 2.6];

        let assembled = assemble(&inputs).expect("horizon 1 should assemble");
        assert_eq!(assembled.unemployment_observed, vec![3.7]);
        assert_eq!(assembled.core_inflation_observed, vec![2.8]);

        let mut inputs = baseline_inputs(1);
        inputs.core_inflation = vec![2.8, f64::NAN];
        assert!(matches!(
            assemble(&inputs),
            Err(ConfigError::NonFinite { name: "core_inflation", index: 1, .. })
        ));
    }

    #[test]
    fn test_core_history_follows_lag_weights() {
        let mut inputs = baseline_inputs(8);
        inputs.coefficients.inflation.core_lags = vec![0.3, 0.2, 0.1];

        assert_eq!(
            assemble(&inputs),
            Err(ConfigError::InsufficientHistory { name: "core_inflation", required: 3, actual: 2 })
        );
    }

    #[test]
    fn test_guide_longer_than_horizon() {
        let mut inputs = baseline_inputs(3);
        inputs.markets.vix.guide = vec![30.0, 35.0, 32.0, 28.0];

        assert_eq!(
            assemble(&inputs),
            Err(ConfigError::GuideTooLong { name: "vix", len: 4, horizon: 3 })
        );
    }

    #[test]
    fn test_guide_may_cover_whole_horizon() {
        let mut inputs = baseline_inputs(3);
        inputs.markets.vix.guide = vec![30.0, 35.0, 32.0];
        assert!(assemble(&inputs).is_ok());
    }

    #[test]
    fn test_empty_lag_weights_are_missing() {
        let mut inputs = baseline_inputs(8);
        inputs.coefficients.inflation.core_lags.clear();

        assert_eq!(
            assemble(&inputs),
            Err(ConfigError::MissingCoefficient("inflation.core_lags"))
        );
    }

    #[test]
    fn test_non_finite_inputs() {
        let mut inputs = baseline_inputs(4);
        inputs.potential_gdp[2] = f64::NAN;
        assert!(matches!(
            assemble(&inputs),
            Err(ConfigError::NonFinite { name: "potential_gdp", index: 2, .. })
        ));

        let mut inputs = baseline_inputs(4);
        inputs.coefficients.labor.okun = f64::INFINITY;
        assert!(matches!(
            assemble(&inputs),
            Err(ConfigError::NonFinite { name: "labor.okun", .. })
        ));
    }

    #[test]
    fn test_constant_intercept_is_broadcast() {
        let mut inputs = baseline_inputs(5);
        inputs.term_premium_5y_intercept = Path::Constant(0.4);
        inputs.term_premium_10y_intercept = Path::Series(vec![1.0, 1.1, 1.2, 1.3, 1.4]);

        let assembled = assemble(&inputs).unwrap();
        assert_eq!(assembled.term_premium_5y_intercept, vec![0.4; 5]);
        assert_eq!(assembled.term_premium_10y_intercept, vec![1.0, 1.1, 1.2, 1.3, 1.4]);
    }

    #[test]
    fn test_market_errors_name_the_failing_input() {
        let mut inputs = baseline_inputs(5);
        inputs.markets.bbb_spread.shocks = Some(vec![0.5; 4]);
        assert_eq!(
            assemble(&inputs),
            Err(ConfigError::SeriesLength { name: "bbb_spread_shocks", expected: 5, actual: 4 })
        );

        let mut inputs = baseline_inputs(5);
        inputs.markets.vix.initial = f64::NAN;
        assert!(matches!(
            assemble(&inputs),
            Err(ConfigError::NonFinite { name: "vix.initial", .. })
        ));

        let mut inputs = baseline_inputs(5);
        inputs.coefficients.markets.bbb_spread.persistence = f64::INFINITY;
        assert!(matches!(
            assemble(&inputs),
            Err(ConfigError::NonFinite { name: "markets.bbb_spread.persistence", .. })
        ));

        let mut inputs = baseline_inputs(5);
        inputs.coefficients.markets.equity_prices.anchor = Anchor::Trend { growth: f64::NAN };
        assert!(matches!(
            assemble(&inputs),
            Err(ConfigError::NonFinite { name: "markets.equity_prices.anchor", .. })
        ));
    }

    #[test]
    fn test_shock_length_mismatch() {
        let mut inputs = baseline_inputs(5);
        inputs.shocks.cpi_wedge = Some(vec![0.1, 0.2]);

        assert_eq!(
            assemble(&inputs),
            Err(ConfigError::SeriesLength { name: "cpi_wedge_shocks", expected: 5, actual: 2 })
        );
    }
}
