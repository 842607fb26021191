//! Batch runs over independent scenarios
//!
//! Every scenario gets its own engine; nothing is shared between runs, so
//! they are fanned out across the rayon thread pool.

use log::{info, warn};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::inputs::ModelInputs;
use crate::projection::{ProjectionEngine, Trajectory};

/// A named scenario configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub name: String,
    pub inputs: ModelInputs,
}

/// Outcome of one scenario in a batch
#[derive(Debug)]
pub struct ScenarioResult {
    pub name: String,
    pub trajectory: Result<Trajectory>,
}

/// Project a single configuration
pub fn simulate(inputs: &ModelInputs) -> Result<Trajectory> {
    ProjectionEngine::from_config(inputs)?.project()
}

/// Project every scenario in parallel; results keep the input order
pub fn run_scenarios(scenarios: &[Scenario]) -> Vec<ScenarioResult> {
    info!("Running {} scenarios", scenarios.len());

    let results: Vec<ScenarioResult> = scenarios
        .par_iter()
        .map(|scenario| ScenarioResult {
            name: scenario.name.clone(),
            trajectory: simulate(&scenario.inputs),
        })
        .collect();

    for result in &results {
        if let Err(err) = &result.trajectory {
            warn!("Scenario '{}' failed: {}", result.name, err);
        }
    }

    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ModelError;
    use crate::inputs::fixtures::baseline_inputs;
    use crate::projection::Variable;

    #[test]
    fn test_parallel_matches_sequential() {
        let scenarios: Vec<Scenario> = (0..6)
            .map(|i| {
                let mut inputs = baseline_inputs(20);
                inputs.markets.bbb_spread.guide = vec![2.0 + i as f64; 3];
                Scenario { name: format!("scenario_{i}"), inputs }
            })
            .collect();

        let results = run_scenarios(&scenarios);
        assert_eq!(results.len(), scenarios.len());

        for (scenario, result) in scenarios.iter().zip(&results) {
            assert_eq!(result.name, scenario.name);
            let parallel = result.trajectory.as_ref().unwrap();
            let sequential = simulate(&scenario.inputs).unwrap();
            assert_eq!(parallel, &sequential);
        }
    }

    #[test]
    fn test_failed_scenario_does_not_affect_others() {
        let mut broken = baseline_inputs(8);
        broken.horizon = 0;
        let scenarios = vec![
            Scenario { name: "baseline".into(), inputs: baseline_inputs(8) },
            Scenario { name: "broken".into(), inputs: broken },
        ];

        let results = run_scenarios(&scenarios);
        let baseline = results[0].trajectory.as_ref().unwrap();
        assert_eq!(baseline.column(Variable::PolicyRate).len(), 8);
        assert!(matches!(results[1].trajectory, Err(ModelError::Config(_))));
    }
}
