//! Quarter-by-quarter projection engine

use log::{debug, info};

use super::state::ProjectionState;
use super::trajectory::Trajectory;
use super::variable::{Variable, FINANCIAL_ORDER, MACRO_ORDER};
use crate::equations;
use crate::error::{ModelError, Result};
use crate::inputs::{assemble, AssembledInputs, ModelInputs};

/// Forward pass over the horizon for one block of variables
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sweep {
    /// Labor market, output, inflation, income and the policy rate
    Macro,
    /// Term structure, spreads and asset prices
    Financial,
}

impl Sweep {
    pub const ALL: [Sweep; 2] = [Sweep::Macro, Sweep::Financial];

    /// Evaluation order within a quarter
    pub fn order(self) -> &'static [Variable] {
        match self {
            Sweep::Macro => &MACRO_ORDER,
            Sweep::Financial => &FINANCIAL_ORDER,
        }
    }
}

/// Runs the model over one assembled scenario.
///
/// Each sweep walks quarters `0..horizon` strictly forward and evaluates its
/// variables in dependency order. The financial sweep starts only once the
/// macro sweep has produced the complete policy path, which the expected
/// short rates average over.
pub struct ProjectionEngine {
    inputs: AssembledInputs,
}

impl ProjectionEngine {
    pub fn new(inputs: AssembledInputs) -> Self {
        Self { inputs }
    }

    /// Validate a raw configuration and build an engine for it
    pub fn from_config(config: &ModelInputs) -> Result<Self> {
        Ok(Self::new(assemble(config)?))
    }

    pub fn inputs(&self) -> &AssembledInputs {
        &self.inputs
    }

    /// Project every variable over the full horizon.
    ///
    /// Fails on the first non-finite value; no partial trajectory is returned.
    pub fn project(&self) -> Result<Trajectory> {
        let horizon = self.inputs.horizon();
        info!("Projecting {} quarters", horizon);

        let mut state = ProjectionState::new(&self.inputs);
        for sweep in Sweep::ALL {
            for quarter in 0..horizon {
                self.step(&mut state, sweep, quarter)?;
            }
            debug!("{:?} sweep complete", sweep);
        }

        let trajectory = Trajectory::from_state(state, self.inputs.start_quarter());
        info!("Projection complete: {} rows x {} columns", trajectory.len(), trajectory.columns().len());
        Ok(trajectory)
    }

    fn step(&self, state: &mut ProjectionState, sweep: Sweep, quarter: usize) -> Result<()> {
        for &variable in sweep.order() {
            debug_assert_eq!(state.series(variable).len(), quarter);
            let value = equations::evaluate(variable, state, quarter, &self.inputs);
            if !value.is_finite() {
                return Err(ModelError::Numeric { quarter, variable, value });
            }
            state.push(variable, value);
        }
        Ok(())
    }
}
