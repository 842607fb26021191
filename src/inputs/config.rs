//! Raw scenario configuration as supplied by callers
//!
//! Values here are unvalidated. [`super::assemble`] checks them and turns
//! them into the fixed-length bundle the projection engine consumes.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::coefficients::Coefficients;

/// Either one value for every quarter or an explicit per-quarter path
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Path {
    Constant(f64),
    Series(Vec<f64>),
}

impl Default for Path {
    fn default() -> Self {
        Path::Constant(0.0)
    }
}

impl From<f64> for Path {
    fn from(value: f64) -> Self {
        Path::Constant(value)
    }
}

impl From<Vec<f64>> for Path {
    fn from(values: Vec<f64>) -> Self {
        Path::Series(values)
    }
}

/// Optional shock paths for the stochastic terms of the equations.
/// An absent path means zero shocks in every quarter.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Shocks {
    #[serde(default)]
    pub core_inflation: Option<Vec<f64>>,
    #[serde(default)]
    pub headline_wedge: Option<Vec<f64>>,
    #[serde(default)]
    pub cpi_wedge: Option<Vec<f64>>,
    #[serde(default)]
    pub gdp_wedge: Option<Vec<f64>>,
    #[serde(default)]
    pub term_premium_5y: Option<Vec<f64>>,
    #[serde(default)]
    pub term_premium_10y: Option<Vec<f64>>,
}

/// Market variables that follow an external guide before model dynamics take over
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Market {
    BbbSpread,
    MortgageRate,
    PrimeRate,
    HousePriceRatio,
    EquityPrices,
    CrePrices,
    Vix,
}

impl Market {
    pub const ALL: [Market; 7] = [
        Market::BbbSpread,
        Market::MortgageRate,
        Market::PrimeRate,
        Market::HousePriceRatio,
        Market::EquityPrices,
        Market::CrePrices,
        Market::Vix,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Market::BbbSpread => "bbb_spread",
            Market::MortgageRate => "mortgage_rate",
            Market::PrimeRate => "prime_rate",
            Market::HousePriceRatio => "house_price_ratio",
            Market::EquityPrices => "equity_prices",
            Market::CrePrices => "cre_prices",
            Market::Vix => "vix",
        }
    }

    pub fn from_name(name: &str) -> Option<Market> {
        Market::ALL.into_iter().find(|m| m.name() == name)
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

/// Guide and jump-off data for one guided market variable
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GuidedInputs {
    /// Externally supplied values for the first quarters (may be empty)
    #[serde(default)]
    pub guide: Vec<f64>,

    /// Level of the variable in the jump-off quarter
    pub initial: f64,

    #[serde(default)]
    pub shocks: Option<Vec<f64>>,
}

impl GuidedInputs {
    pub fn new(initial: f64) -> Self {
        Self {
            guide: Vec::new(),
            initial,
            shocks: None,
        }
    }

    pub fn with_guide(mut self, guide: Vec<f64>) -> Self {
        self.guide = guide;
        self
    }
}

/// Guided market inputs, one entry per [`Market`]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MarketInputs {
    pub bbb_spread: GuidedInputs,
    pub mortgage_rate: GuidedInputs,
    pub prime_rate: GuidedInputs,
    pub house_price_ratio: GuidedInputs,
    pub equity_prices: GuidedInputs,
    pub cre_prices: GuidedInputs,
    pub vix: GuidedInputs,
}

impl MarketInputs {
    pub fn get(&self, market: Market) -> &GuidedInputs {
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

    pub fn get_mut(&mut self, market: Market) -> &mut GuidedInputs {
        match market {
            Market::BbbSpread => &mut self.bbb_spread,
            Market::MortgageRate => &mut self.mortgage_rate,
            Market::PrimeRate => &mut self.prime_rate,
            Market::HousePriceRatio => &mut self.house_price_ratio,
            Market::EquityPrices => &mut self.equity_prices,
            Market::CrePrices => &mut self.cre_prices,
            Market::Vix => &mut self.vix,
        }
    }
}

/// Complete configuration of one projection run.
///
/// Rates and inflation measures are annualized percentages. Observed
/// `unemployment` and `core_inflation` values occupy the first quarters of
/// the projection; every other per-quarter series must cover the full
/// horizon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelInputs {
    /// Number of quarters to project (validated to be positive)
    pub horizon: i64,

    /// First day of the first projected quarter, used to label output rows
    #[serde(default)]
    pub start_quarter: Option<NaiveDate>,

    /// Observed unemployment rates for the leading quarters (AR(2) seed)
    pub unemployment: Vec<f64>,
    pub natural_unemployment: Vec<f64>,

    /// Potential real GDP level
    pub potential_gdp: Vec<f64>,
    pub real_gdp_initial: f64,
    /// Annualized real GDP growth in the first quarter
    pub real_gdp_growth_initial: f64,
    pub nominal_gdp_initial: f64,
    pub nominal_dpi_initial: f64,

    /// Observed core PCE inflation for the leading quarters
    pub core_inflation: Vec<f64>,
    pub inflation_expectations: Vec<f64>,
    pub inflation_target: Vec<f64>,

    /// Natural real rate of interest (r*)
    pub natural_rate: Vec<f64>,
    /// Policy rate in the jump-off quarter
    pub policy_rate_initial: f64,

    pub term_premium_5y_initial: f64,
    pub term_premium_10y_initial: f64,
    pub term_premium_5y_intercept: Path,
    pub term_premium_10y_intercept: Path,

    #[serde(default)]
    pub headline_wedge_initial: f64,
    #[serde(default)]
    pub cpi_wedge_initial: f64,
    #[serde(default)]
    pub gdp_wedge_initial: f64,

    #[serde(default)]
    pub shocks: Shocks,

    pub markets: MarketInputs,

    #[serde(default)]
    pub coefficients: Coefficients,
}
