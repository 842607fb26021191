//! Quarterly macroeconomic projection engine
//!
//! Projects a stress-testing macro model over a finite horizon: an AR(2)
//! unemployment gap, Okun's law output, a distributed-lag Phillips curve,
//! disposable income, an inertial policy rule floored at the effective lower
//! bound, expectations-plus-term-premium Treasury yields, and guided credit
//! spreads and asset prices.
//!
//! # Module Organisation
//!
//! - `inputs`: scenario configuration, coefficients, validation and loaders
//! - `equations`: the pure equations, one submodule per block
//! - `projection`: per-variable state, the quarterly stepper and the output table
//! - `scenario`: single and parallel batch runs
//!
//! A run is a pure function of its [`ModelInputs`]:
//!
//! ```no_run
//! let inputs = macro_projection::inputs::load_inputs("scenarios/severely_adverse.json")?;
//! let trajectory = macro_projection::simulate(&inputs)?;
//! trajectory.write_csv(std::io::stdout())?;
//! # Ok::<(), macro_projection::ModelError>(())
//! ```

pub mod error;
pub mod inputs;
pub mod equations;
pub mod projection;
pub mod scenario;

pub use error::{ConfigError, ModelError, Result};
pub use inputs::{Coefficients, ModelInputs};
pub use projection::{ProjectionEngine, Trajectory, Variable};
pub use scenario::{run_scenarios, simulate, Scenario, ScenarioResult};
