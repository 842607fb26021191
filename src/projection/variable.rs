//! Tracked model variables and their evaluation order

use serde::{Deserialize, Serialize};

use crate::inputs::Market;

/// Every variable reported in a trajectory, in column order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Variable {
    // Labor market
    NaturalUnemployment,
    UnemploymentRate,
    UnemploymentGap,
    // Output
    PotentialGdp,
    RealGdpGrowth,
    RealGdp,
    OutputGap,
    // Inflation
    CorePceInflation,
    HeadlinePceWedge,
    HeadlinePceInflation,
    CpiWedge,
    CpiInflation,
    GdpDeflatorWedge,
    GdpDeflatorInflation,
    PcePriceIndex,
    CpiIndex,
    GdpDeflator,
    NominalGdp,
    NominalGdpGrowth,
    // Income
    NominalDpi,
    RealDpi,
    // Policy
    PolicyRate,
    ThreeMonthTbill,
    // Term structure
    ExpectedShortRate5y,
    ExpectedShortRate10y,
    TermPremium5y,
    TermPremium10y,
    Yield5y,
    Yield10y,
    // Guided markets
    BbbSpread,
    BbbYield,
    MortgageRate,
    PrimeRate,
    HousePriceRatio,
    EquityPrices,
    CrePrices,
    Vix,
}

/// Real-side block through the policy rate.
///
/// Nothing here reads a financial variable, so the whole policy path is
/// known before the financial sweep starts.
pub const MACRO_ORDER: [Variable; 23] = [
    Variable::NaturalUnemployment,
    Variable::UnemploymentRate,
    Variable::UnemploymentGap,
    Variable::PotentialGdp,
    Variable::RealGdpGrowth,
    Variable::RealGdp,
    Variable::OutputGap,
    Variable::CorePceInflation,
    Variable::HeadlinePceWedge,
    Variable::HeadlinePceInflation,
    Variable::CpiWedge,
    Variable::CpiInflation,
    Variable::GdpDeflatorWedge,
    Variable::GdpDeflatorInflation,
    Variable::PcePriceIndex,
    Variable::CpiIndex,
    Variable::GdpDeflator,
    Variable::NominalGdp,
    Variable::NominalGdpGrowth,
    Variable::NominalDpi,
    Variable::RealDpi,
    Variable::PolicyRate,
    Variable::ThreeMonthTbill,
];

/// Term structure, spreads and asset prices
pub const FINANCIAL_ORDER: [Variable; 14] = [
    Variable::ExpectedShortRate5y,
    Variable::ExpectedShortRate10y,
    Variable::TermPremium5y,
    Variable::TermPremium10y,
    Variable::Yield5y,
    Variable::Yield10y,
    Variable::BbbSpread,
    Variable::BbbYield,
    Variable::MortgageRate,
    Variable::PrimeRate,
    Variable::HousePriceRatio,
    Variable::EquityPrices,
    Variable::CrePrices,
    Variable::Vix,
];

impl Variable {
    pub const COUNT: usize = 37;

    pub const ALL: [Variable; Variable::COUNT] = [
        Variable::NaturalUnemployment,
        Variable::UnemploymentRate,
        Variable::UnemploymentGap,
        Variable::PotentialGdp,
        Variable::RealGdpGrowth,
        Variable::RealGdp,
        Variable::OutputGap,
        Variable::CorePceInflation,
        Variable::HeadlinePceWedge,
        Variable::HeadlinePceInflation,
        Variable::CpiWedge,
        Variable::CpiInflation,
        Variable::GdpDeflatorWedge,
        Variable::GdpDeflatorInflation,
        Variable::PcePriceIndex,
        Variable::CpiIndex,
        Variable::GdpDeflator,
        Variable::NominalGdp,
        Variable::NominalGdpGrowth,
        Variable::NominalDpi,
        Variable::RealDpi,
        Variable::PolicyRate,
        Variable::ThreeMonthTbill,
        Variable::ExpectedShortRate5y,
        Variable::ExpectedShortRate10y,
        Variable::TermPremium5y,
        Variable::TermPremium10y,
        Variable::Yield5y,
        Variable::Yield10y,
        Variable::BbbSpread,
        Variable::BbbYield,
        Variable::MortgageRate,
        Variable::PrimeRate,
        Variable::HousePriceRatio,
        Variable::EquityPrices,
        Variable::CrePrices,
        Variable::Vix,
    ];

    /// Column name used in reports
    pub fn name(self) -> &'static str {
        match self {
            Variable::NaturalUnemployment => "natural_unemployment",
            Variable::UnemploymentRate => "unemployment_rate",
            Variable::UnemploymentGap => "unemployment_gap",
            Variable::PotentialGdp => "potential_gdp",
            Variable::RealGdpGrowth => "real_gdp_growth",
            Variable::RealGdp => "real_gdp",
            Variable::OutputGap => "output_gap",
            Variable::CorePceInflation => "core_pce_inflation",
            Variable::HeadlinePceWedge => "headline_pce_wedge",
            Variable::HeadlinePceInflation => "headline_pce_inflation",
            Variable::CpiWedge => "cpi_wedge",
            Variable::CpiInflation => "cpi_inflation",
            Variable::GdpDeflatorWedge => "gdp_deflator_wedge",
            Variable::GdpDeflatorInflation => "gdp_deflator_inflation",
            Variable::PcePriceIndex => "pce_price_index",
            Variable::CpiIndex => "cpi_index",
            Variable::GdpDeflator => "gdp_deflator",
            Variable::NominalGdp => "nominal_gdp",
            Variable::NominalGdpGrowth => "nominal_gdp_growth",
            Variable::NominalDpi => "nominal_dpi",
            Variable::RealDpi => "real_dpi",
            Variable::PolicyRate => "policy_rate",
            Variable::ThreeMonthTbill => "three_month_tbill",
            Variable::ExpectedShortRate5y => "expected_short_rate_5y",
            Variable::ExpectedShortRate10y => "expected_short_rate_10y",
            Variable::TermPremium5y => "term_premium_5y",
            Variable::TermPremium10y => "term_premium_10y",
            Variable::Yield5y => "yield_5y",
            Variable::Yield10y => "yield_10y",
            Variable::BbbSpread => "bbb_spread",
            Variable::BbbYield => "bbb_yield",
            Variable::MortgageRate => "mortgage_rate",
            Variable::PrimeRate => "prime_rate",
            Variable::HousePriceRatio => "house_price_ratio",
            Variable::EquityPrices => "equity_prices",
            Variable::CrePrices => "cre_prices",
            Variable::Vix => "vix",
        }
    }

    pub fn from_name(name: &str) -> Option<Variable> {
        Variable::ALL.into_iter().find(|v| v.name() == name)
    }

    /// The guided market this variable follows, if any
    pub fn market(self) -> Option<Market> {
        match self {
            Variable::BbbSpread => Some(Market::BbbSpread),
            Variable::MortgageRate => Some(Market::MortgageRate),
            Variable::PrimeRate => Some(Market::PrimeRate),
            Variable::HousePriceRatio => Some(Market::HousePriceRatio),
            Variable::EquityPrices => Some(Market::EquityPrices),
            Variable::CrePrices => Some(Market::CrePrices),
            Variable::Vix => Some(Market::Vix),
            _ => None,
        }
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl From<Market> for Variable {
    fn from(market: Market) -> Self {
        match market {
            Market::BbbSpread => Variable::BbbSpread,
            Market::MortgageRate => Variable::MortgageRate,
            Market::PrimeRate => Variable::PrimeRate,
            Market::HousePriceRatio => Variable::HousePriceRatio,
            Market::EquityPrices => Variable::EquityPrices,
            Market::CrePrices => Variable::CrePrices,
            Market::Vix => Variable::Vix,
        }
    }
}
