//! Per-variable accumulators for a projection in progress

use super::variable::Variable;
use crate::inputs::{AssembledInputs, Market};

/// Values of one variable, one per projected quarter.
///
/// `history` holds jump-off values that precede quarter 0; offsets below zero
/// read from it, `-1` being the most recent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VariableSeries {
    history: Vec<f64>,
    values: Vec<f64>,
}

impl VariableSeries {
    pub fn with_capacity(horizon: usize) -> Self {
        Self {
            history: Vec::new(),
            values: Vec::with_capacity(horizon),
        }
    }

    pub fn with_history(history: Vec<f64>, horizon: usize) -> Self {
        Self {
            history,
            values: Vec::with_capacity(horizon),
        }
    }

    pub fn push(&mut self, value: f64) {
        self.values.push(value);
    }

    /// Number of projected quarters so far (history excluded)
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Value at a quarter offset; negative offsets reach into the history
    pub fn at(&self, offset: isize) -> Option<f64> {
        if offset >= 0 {
            self.values.get(offset as usize).copied()
        } else {
            let back = offset.unsigned_abs();
            self.history
                .len()
                .checked_sub(back)
                .and_then(|idx| self.history.get(idx).copied())
        }
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub(crate) fn into_values(self) -> Vec<f64> {
        self.values
    }
}

/// All series of a run, indexed by [`Variable`]
#[derive(Debug, Clone)]
pub struct ProjectionState {
    series: Vec<VariableSeries>,
}

impl ProjectionState {
    /// Fresh state with jump-off history for the variables whose equations
    /// look one quarter behind quarter 0
    pub fn new(inputs: &AssembledInputs) -> Self {
        let horizon = inputs.horizon;
        let mut series: Vec<VariableSeries> = Variable::ALL
            .iter()
            .map(|_| VariableSeries::with_capacity(horizon))
            .collect();

        let mut seed = |variable: Variable, value: f64| {
            series[variable.index()] = VariableSeries::with_history(vec![value], horizon);
        };
        seed(Variable::PolicyRate, inputs.policy_rate_initial);
        seed(Variable::TermPremium5y, inputs.term_premium_5y_initial);
        seed(Variable::TermPremium10y, inputs.term_premium_10y_initial);
        for market in Market::ALL {
            seed(Variable::from(market), inputs.market(market).initial);
        }

        Self { series }
    }

    pub fn series(&self, variable: Variable) -> &VariableSeries {
        &self.series[variable.index()]
    }

    /// Value of `variable` in `quarter`, reaching into history when negative
    pub fn value(&self, variable: Variable, quarter: isize) -> Option<f64> {
        self.series(variable).at(quarter)
    }

    /// Value of `variable` `lag` quarters before `quarter`.
    ///
    /// A lag with no stored value reads as NaN, which the engine reports as
    /// a numeric failure for the variable being evaluated.
    pub fn lag(&self, variable: Variable, quarter: usize, lag: usize) -> f64 {
        self.value(variable, quarter as isize - lag as isize)
            .unwrap_or(f64::NAN)
    }

    /// Value already computed for `quarter`
    pub fn current(&self, variable: Variable, quarter: usize) -> f64 {
        self.lag(variable, quarter, 0)
    }

    pub(crate) fn push(&mut self, variable: Variable, value: f64) {
        self.series[variable.index()].push(value);
    }

    pub(crate) fn into_series(self) -> Vec<VariableSeries> {
        self.series
    }
}
