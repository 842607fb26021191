//! Projection engine: per-variable state, the quarterly stepper and its output table

mod variable;
mod state;
mod engine;
mod trajectory;

pub use variable::{Variable, FINANCIAL_ORDER, MACRO_ORDER};
pub use state::{ProjectionState, VariableSeries};
pub use engine::{ProjectionEngine, Sweep};
pub use trajectory::{Trajectory, TrajectoryRow};
