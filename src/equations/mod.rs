//! Equation library
//!
//! Each submodule holds the pure equations of one block of the model. This
//! module wires them to the projection state: [`evaluate`] computes one
//! variable for one quarter from already-computed quarters, the exogenous
//! paths and the coefficients.

pub mod identities;
pub mod labor;
pub mod output;
pub mod inflation;
pub mod income;
pub mod policy;
pub mod term_structure;
pub mod markets;

pub use policy::EFFECTIVE_LOWER_BOUND;

use crate::inputs::{Anchor, AssembledInputs, Market, ReferenceRate};
use crate::projection::{ProjectionState, Variable};

/// Value of `variable` in quarter `t`.
///
/// Reads only quarters before `t`, variables earlier in the evaluation order
/// for quarter `t`, and (for expected short rates) the completed policy path.
pub fn evaluate(variable: Variable, state: &ProjectionState, t: usize, inputs: &AssembledInputs) -> f64 {
    use Variable::*;

    let c = &inputs.coefficients;
    let now = |v: Variable| state.current(v, t);
    let prev = |v: Variable| state.lag(v, t, 1);

    match variable {
        NaturalUnemployment => inputs.natural_unemployment[t],
        UnemploymentRate => match inputs.unemployment_observed.get(t) {
            Some(&observed) => observed,
            None => {
                let gap = labor::unemployment_gap(
                    &c.labor,
                    prev(UnemploymentGap),
                    state.lag(UnemploymentGap, t, 2),
                );
                labor::unemployment_rate(now(NaturalUnemployment), gap)
            }
        },
        UnemploymentGap => identities::gap(now(UnemploymentRate), now(NaturalUnemployment)),

        PotentialGdp => inputs.potential_gdp[t],
        RealGdpGrowth => {
            if t == 0 {
                inputs.real_gdp_growth_initial
            } else {
                let potential = output::potential_growth(now(PotentialGdp), prev(PotentialGdp));
                output::okun_growth(&c.labor, potential, gap_change(state, t))
            }
        }
        RealGdp => {
            if t == 0 {
                inputs.real_gdp_initial
            } else {
                identities::compound(prev(RealGdp), now(RealGdpGrowth))
            }
        }
        OutputGap => output::output_gap(now(RealGdp), now(PotentialGdp)),

        CorePceInflation => match inputs.core_inflation_observed.get(t) {
            Some(&observed) => observed,
            None => {
                let lagged: Vec<f64> = (1..=c.inflation.core_lags.len())
                    .map(|lag| state.lag(CorePceInflation, t, lag))
                    .collect();
                inflation::core_inflation(
                    &c.inflation,
                    &lagged,
                    inputs.inflation_expectations[t],
                    now(UnemploymentGap),
                    inputs.shocks.core_inflation[t],
                )
            }
        },
        HeadlinePceWedge => {
            if t == 0 {
                inputs.headline_wedge_initial
            } else {
                inflation::wedge(
                    c.inflation.headline_wedge_persistence,
                    prev(HeadlinePceWedge),
                    inputs.shocks.headline_wedge[t],
                )
            }
        }
        HeadlinePceInflation => inflation::headline_inflation(now(CorePceInflation), now(HeadlinePceWedge)),
        CpiWedge => {
            if t == 0 {
                inputs.cpi_wedge_initial
            } else {
                inflation::wedge(c.inflation.cpi_wedge_persistence, prev(CpiWedge), inputs.shocks.cpi_wedge[t])
            }
        }
        CpiInflation => inflation::cpi_inflation(&c.inflation, now(HeadlinePceInflation), now(CpiWedge)),
        GdpDeflatorWedge => {
            if t == 0 {
                inputs.gdp_wedge_initial
            } else {
                inflation::wedge(c.inflation.gdp_wedge_persistence, prev(GdpDeflatorWedge), inputs.shocks.gdp_wedge[t])
            }
        }
        GdpDeflatorInflation => inflation::deflator_inflation(now(HeadlinePceInflation), now(GdpDeflatorWedge)),

        PcePriceIndex => price_level(state, t, PcePriceIndex, HeadlinePceInflation, identities::PRICE_INDEX_BASE),
        CpiIndex => price_level(state, t, CpiIndex, CpiInflation, identities::PRICE_INDEX_BASE),
        GdpDeflator => {
            let base = identities::implicit_price_index(inputs.nominal_gdp_initial, inputs.real_gdp_initial);
            price_level(state, t, GdpDeflator, GdpDeflatorInflation, base)
        }
        NominalGdp => identities::nominal_from_real(now(RealGdp), now(GdpDeflator)),
        // Log growth rates add: nominal = real + deflator
        NominalGdpGrowth => now(RealGdpGrowth) + now(GdpDeflatorInflation),

        NominalDpi => {
            if t == 0 {
                inputs.nominal_dpi_initial
            } else {
                income::nominal_dpi(
                    &c.income,
                    prev(NominalDpi),
                    now(NominalGdp),
                    prev(NominalGdp),
                    gap_change(state, t),
                )
            }
        }
        RealDpi => income::real_dpi(now(NominalDpi), now(PcePriceIndex)),

        PolicyRate => policy_rate(state, t, inputs),
        ThreeMonthTbill => now(PolicyRate),

        ExpectedShortRate5y => term_structure::expected_short_rate(
            state.series(PolicyRate).values(),
            t,
            c.term_structure.window_5y,
        ),
        ExpectedShortRate10y => term_structure::expected_short_rate(
            state.series(PolicyRate).values(),
            t,
            c.term_structure.window_10y,
        ),
        TermPremium5y => term_structure::term_premium(
            inputs.term_premium_5y_intercept[t],
            c.term_structure.premium_5y_persistence,
            prev(TermPremium5y),
            inputs.shocks.term_premium_5y[t],
        ),
        TermPremium10y => term_structure::term_premium(
            inputs.term_premium_10y_intercept[t],
            c.term_structure.premium_10y_persistence,
            prev(TermPremium10y),
            inputs.shocks.term_premium_10y[t],
        ),
        Yield5y => term_structure::treasury_yield(now(ExpectedShortRate5y), now(TermPremium5y)),
        Yield10y => term_structure::treasury_yield(now(ExpectedShortRate10y), now(TermPremium10y)),

        BbbYield => now(BbbSpread) + now(Yield10y),

        BbbSpread => guided(Market::BbbSpread, state, t, inputs),
        MortgageRate => guided(Market::MortgageRate, state, t, inputs),
        PrimeRate => guided(Market::PrimeRate, state, t, inputs),
        HousePriceRatio => guided(Market::HousePriceRatio, state, t, inputs),
        EquityPrices => guided(Market::EquityPrices, state, t, inputs),
        CrePrices => guided(Market::CrePrices, state, t, inputs),
        Vix => guided(Market::Vix, state, t, inputs),
    }
}

fn reference_variable(reference: ReferenceRate) -> Variable {
    match reference {
        ReferenceRate::PolicyRate => Variable::PolicyRate,
        ReferenceRate::TreasuryYield10y => Variable::Yield10y,
    }
}

/// Quarterly change in the unemployment gap
fn gap_change(state: &ProjectionState, t: usize) -> f64 {
    state.current(Variable::UnemploymentGap, t) - state.lag(Variable::UnemploymentGap, t, 1)
}

/// Price index starting at `base` and compounding its inflation rate
fn price_level(state: &ProjectionState, t: usize, level: Variable, rate: Variable, base: f64) -> f64 {
    if t == 0 {
        base
    } else {
        identities::compound(state.lag(level, t, 1), state.current(rate, t))
    }
}

fn policy_rate(state: &ProjectionState, t: usize, inputs: &AssembledInputs) -> f64 {
    let coefficients = &inputs.coefficients.policy;
    let core = state.series(Variable::CorePceInflation).values();
    let unemployment = state.current(Variable::UnemploymentRate, t);
    let two_back = t
        .checked_sub(2)
        .map(|quarter| state.current(Variable::UnemploymentRate, quarter));

    let rule = policy::RuleInputs {
        prev_rate: state.lag(Variable::PolicyRate, t, 1),
        natural_rate: inputs.natural_rate[t],
        core_average: policy::trailing_average(core, t, coefficients.core_average_quarters),
        inflation_target: inputs.inflation_target[t],
        output_gap: state.current(Variable::OutputGap, t),
        unemployment_rise: policy::unemployment_drag(
            unemployment,
            state.current(Variable::NaturalUnemployment, t),
            two_back,
        ),
    };
    policy::policy_rate(coefficients, &rule)
}

fn guided(market: Market, state: &ProjectionState, t: usize, inputs: &AssembledInputs) -> f64 {
    let series = inputs.market(market);
    if let Some(value) = markets::guide_value(&series.guide, t) {
        return value;
    }

    let variable = Variable::from(market);
    let reversion = inputs.coefficients.markets.get(market);
    let prev = state.lag(variable, t, 1);
    let shock = series.shocks[t];

    match reversion.anchor {
        Anchor::Level { long_run } => markets::revert_level(long_run, reversion.persistence, prev, shock),
        Anchor::Spread { reference, long_run } => {
            let reference = reference_variable(reference);
            let reference_now = state.current(reference, t);
            // The 10-year yield has no jump-off value; measure the opening
            // spread against its first projected quarter instead
            let reference_prev = state
                .value(reference, t as isize - 1)
                .unwrap_or(reference_now);
            markets::revert_spread(reference_now, long_run, reversion.persistence, prev - reference_prev, shock)
        }
        Anchor::Trend { growth } => markets::revert_to_trend(
            markets::trend_level(series.initial, growth, t + 1),
            markets::trend_level(series.initial, growth, t),
            reversion.persistence,
            prev,
            shock,
        ),
    }
}
