//! Equation coefficients
//!
//! Defaults carry the published calibration. Every value can be overridden
//! from the scenario configuration; fields left out of a JSON document keep
//! their default.

use serde::{Deserialize, Serialize};

use super::config::Market;

/// Unemployment AR(2) and Okun's law
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaborCoefficients {
    /// Weight on the unemployment gap one quarter back
    #[serde(default = "default_gap_lag1")]
    pub gap_lag1: f64,

    /// Weight on the unemployment gap two quarters back
    #[serde(default = "default_gap_lag2")]
    pub gap_lag2: f64,

    /// Okun coefficient: annualized output growth lost per point of
    /// quarterly increase in the unemployment gap, divided by four
    #[serde(default = "default_okun")]
    pub okun: f64,
}

fn default_gap_lag1() -> f64 { 1.65 }
fn default_gap_lag2() -> f64 { -0.68 }
fn default_okun() -> f64 { 1.4 }

impl Default for LaborCoefficients {
    fn default() -> Self {
        Self {
            gap_lag1: 1.65,
            gap_lag2: -0.68,
            okun: 1.4,
        }
    }
}

/// Core inflation Phillips curve and the headline/CPI/deflator wedges
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InflationCoefficients {
    /// Distributed-lag weights on past core inflation, most recent first
    #[serde(default = "default_core_lags")]
    pub core_lags: Vec<f64>,

    #[serde(default = "default_expectations")]
    pub expectations: f64,

    #[serde(default = "default_unemployment_gap")]
    pub unemployment_gap: f64,

    #[serde(default = "default_headline_wedge")]
    pub headline_wedge_persistence: f64,

    #[serde(default = "default_cpi_wedge")]
    pub cpi_wedge_persistence: f64,

    #[serde(default = "default_gdp_wedge")]
    pub gdp_wedge_persistence: f64,

    /// Average CPI-over-PCE inflation gap
    #[serde(default = "default_cpi_intercept")]
    pub cpi_intercept: f64,
}

fn default_core_lags() -> Vec<f64> { vec![0.36, 0.23] }
fn default_expectations() -> f64 { 0.41 }
fn default_unemployment_gap() -> f64 { 0.08 }
fn default_headline_wedge() -> f64 { 0.36 }
fn default_cpi_wedge() -> f64 { 0.11 }
fn default_gdp_wedge() -> f64 { 0.45 }
fn default_cpi_intercept() -> f64 { 0.48 }

impl Default for InflationCoefficients {
    fn default() -> Self {
        Self {
            core_lags: default_core_lags(),
            expectations: 0.41,
            unemployment_gap: 0.08,
            headline_wedge_persistence: 0.36,
            cpi_wedge_persistence: 0.11,
            gdp_wedge_persistence: 0.45,
            cpi_intercept: 0.48,
        }
    }
}

/// Disposable income sensitivity to labor market slack
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncomeCoefficients {
    /// Log-point change in the DPI/GDP ratio per point change in the unemployment gap
    #[serde(default = "default_dpi_sensitivity")]
    pub unemployment_gap_sensitivity: f64,
}

fn default_dpi_sensitivity() -> f64 { 0.0058 }

impl Default for IncomeCoefficients {
    fn default() -> Self {
        Self {
            unemployment_gap_sensitivity: 0.0058,
        }
    }
}

/// Inertial policy rule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PolicyRuleCoefficients {
    /// Weight on last quarter's policy rate
    pub inertia: f64,
    /// Weight on the rule-implied rate
    pub rule_weight: f64,
    /// Response to core inflation above target
    pub inflation_gap: f64,
    /// Response to a negative output gap
    pub output_gap: f64,
    /// Cut per point of rising unemployment above the natural rate
    pub unemployment_drag: f64,
    /// Quarters in the trailing core inflation average
    pub core_average_quarters: usize,
}

impl Default for PolicyRuleCoefficients {
    fn default() -> Self {
        Self {
            inertia: 0.85,
            rule_weight: 0.15,
            inflation_gap: 0.5,
            output_gap: 0.15,
            unemployment_drag: 0.85,
            core_average_quarters: 4,
        }
    }
}

/// Expectations windows and term premium persistence
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TermStructureCoefficients {
    /// Quarters of expected short rates in the 5-year yield
    pub window_5y: usize,
    /// Quarters of expected short rates in the 10-year yield
    pub window_10y: usize,
    pub premium_5y_persistence: f64,
    pub premium_10y_persistence: f64,
}

impl Default for TermStructureCoefficients {
    fn default() -> Self {
        Self {
            window_5y: 20,
            window_10y: 40,
            premium_5y_persistence: 0.74,
            premium_10y_persistence: 0.81,
        }
    }
}

/// Rate a spread-anchored market variable is quoted over
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReferenceRate {
    PolicyRate,
    TreasuryYield10y,
}

/// What a guided variable reverts toward once its guide runs out
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Anchor {
    /// Mean reversion of the level toward `long_run`
    Level { long_run: f64 },
    /// Mean reversion of the spread over `reference` toward `long_run`
    Spread { reference: ReferenceRate, long_run: f64 },
    /// Reversion of the log gap to a trend growing at `growth` percent a year
    /// from the jump-off level
    Trend { growth: f64 },
}

/// Post-guide dynamics of one market variable
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Reversion {
    pub persistence: f64,
    pub anchor: Anchor,
}

impl Reversion {
    pub fn level(persistence: f64, long_run: f64) -> Self {
        Self { persistence, anchor: Anchor::Level { long_run } }
    }

    pub fn spread(persistence: f64, reference: ReferenceRate, long_run: f64) -> Self {
        Self { persistence, anchor: Anchor::Spread { reference, long_run } }
    }

    pub fn trend(persistence: f64, growth: f64) -> Self {
        Self { persistence, anchor: Anchor::Trend { growth } }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarketCoefficients {
    pub bbb_spread: Reversion,
    pub mortgage_rate: Reversion,
    pub prime_rate: Reversion,
    pub house_price_ratio: Reversion,
    pub equity_prices: Reversion,
    pub cre_prices: Reversion,
    pub vix: Reversion,
}

impl Default for MarketCoefficients {
    fn default() -> Self {
        Self {
            bbb_spread: Reversion::level(0.87, 1.66),
            mortgage_rate: Reversion::spread(0.8, ReferenceRate::TreasuryYield10y, 1.7),
            // Prime moves one for one with the policy rate
            prime_rate: Reversion::spread(0.0, ReferenceRate::PolicyRate, 3.0),
            house_price_ratio: Reversion::trend(0.9, 0.0),
            equity_prices: Reversion::trend(0.85, 5.0),
            cre_prices: Reversion::trend(0.9, 2.0),
            vix: Reversion::level(0.7, 20.0),
        }
    }
}

impl MarketCoefficients {
    pub fn get(&self, market: Market) -> &Reversion {
        match market {
            Market::BbbSpread => &self.bbb_spread,
            Market::MortgageRate => &self.mortgage_rate,
            Market::PrimeRate => &self.prime_rate,
            Market::HousePriceRatio => &self.house_price_ratio,
            Market::EquityPrices => &self.equity_prices,
            Market::CrePrices => &self.cre_prices,
            Market::Vix => &self.vix,
        }
    }
}

/// All equation coefficients of the model
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Coefficients {
    pub labor: LaborCoefficients,
    pub inflation: InflationCoefficients,
    pub income: IncomeCoefficients,
    pub policy: PolicyRuleCoefficients,
    pub term_structure: TermStructureCoefficients,
    pub markets: MarketCoefficients,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_override_keeps_defaults() {
        let json = r#"{
            "labor": { "gap_lag1": 1.0, "gap_lag2": 0.0 },
            "policy": { "inertia": 0.9 }
        }"#;
        let coefficients: Coefficients = serde_json::from_str(json).unwrap();

        assert_eq!(coefficients.labor.gap_lag1, 1.0);
        assert_eq!(coefficients.labor.gap_lag2, 0.0);
        assert_eq!(coefficients.labor.okun, 1.4);
        assert_eq!(coefficients.policy.inertia, 0.9);
        assert_eq!(coefficients.policy.rule_weight, 0.15);
        assert_eq!(coefficients.inflation.core_lags, vec![0.36, 0.23]);
        assert_eq!(coefficients.term_structure.window_10y, 40);
    }

    #[test]
    fn test_anchor_tagging() {
        let json = r#"{ "persistence": 0.5, "anchor": { "kind": "spread", "reference": "policy_rate", "long_run": 2.5 } }"#;
        let reversion: Reversion = serde_json::from_str(json).unwrap();
        assert_eq!(reversion, Reversion::spread(0.5, ReferenceRate::PolicyRate, 2.5));
    }

    #[test]
    fn test_default_market_anchors() {
        let markets = MarketCoefficients::default();
        assert_eq!(markets.get(Market::BbbSpread), &Reversion::level(0.87, 1.66));
        assert!(matches!(
            markets.get(Market::MortgageRate).anchor,
            Anchor::Spread { reference: ReferenceRate::TreasuryYield10y, .. }
        ));
        assert!(matches!(markets.get(Market::EquityPrices).anchor, Anchor::Trend { .. }));
    }
}
