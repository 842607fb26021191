//! Scenario configuration, coefficients and input assembly

pub mod config;
pub mod coefficients;
pub mod assembler;
pub mod loader;

#[cfg(test)]
pub(crate) mod fixtures;

pub use config::{GuidedInputs, Market, MarketInputs, ModelInputs, Path, Shocks};
pub use coefficients::{
    Anchor, Coefficients, IncomeCoefficients, InflationCoefficients, LaborCoefficients,
    MarketCoefficients, PolicyRuleCoefficients, ReferenceRate, Reversion,
    TermStructureCoefficients,
};
pub use assembler::{assemble, AssembledInputs, GuidedSeries};
pub use loader::{inputs_from_reader, load_guides, load_inputs};
