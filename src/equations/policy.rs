//! Inertial policy rate rule with an effective lower bound

use crate::inputs::PolicyRuleCoefficients;

/// Floor on the policy rate, in percent
pub const EFFECTIVE_LOWER_BOUND: f64 = 0.125;

/// State the rule responds to in one quarter
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RuleInputs {
    pub prev_rate: f64,
    pub natural_rate: f64,
    /// Trailing average of core inflation
    pub core_average: f64,
    pub inflation_target: f64,
    pub output_gap: f64,
    /// Rise in unemployment that triggers extra easing (see [`unemployment_drag`])
    pub unemployment_rise: f64,
}

/// Mean of `values[..=end]` over at most the last `window` entries
pub fn trailing_average(values: &[f64], end: usize, window: usize) -> f64 {
    let start = (end + 1).saturating_sub(window);
    let segment = &values[start..=end];
    segment.iter().sum::<f64>() / segment.len() as f64
}

/// Two-quarter rise in unemployment, counted only while unemployment sits
/// above its natural rate and is still climbing
pub fn unemployment_drag(unemployment: f64, natural: f64, unemployment_two_back: Option<f64>) -> f64 {
    match unemployment_two_back {
        Some(two_back) if unemployment > natural && unemployment - two_back > 0.0 => {
            unemployment - two_back
        }
        _ => 0.0,
    }
}

/// Unconstrained rule output
pub fn rule_rate(coefficients: &PolicyRuleCoefficients, inputs: &RuleInputs) -> f64 {
    let rule_base = inputs.natural_rate
        + inputs.core_average
        + coefficients.inflation_gap * (inputs.core_average - inputs.inflation_target);
    let slack = inputs.output_gap.min(0.0);

    coefficients.inertia * inputs.prev_rate
        + coefficients.rule_weight * rule_base
        + coefficients.output_gap * slack
        - coefficients.unemployment_drag * inputs.unemployment_rise
}

/// Apply the effective lower bound
pub fn clamp_to_lower_bound(rate: f64) -> f64 {
    rate.max(EFFECTIVE_LOWER_BOUND)
}

/// Reported policy rate: the rule output floored at the lower bound
pub fn policy_rate(coefficients: &PolicyRuleCoefficients, inputs: &RuleInputs) -> f64 {
    clamp_to_lower_bound(rule_rate(coefficients, inputs))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn neutral_inputs() -> RuleInputs {
        RuleInputs {
            prev_rate: 2.5,
            natural_rate: 0.5,
            core_average: 2.0,
            inflation_target: 2.0,
            output_gap: 0.0,
            unemployment_rise: 0.0,
        }
    }

    #[test]
    fn test_negative_rule_output_is_clamped() {
        assert_eq!(clamp_to_lower_bound(-0.5), 0.125);
        assert_eq!(clamp_to_lower_bound(0.125), 0.125);
        assert_eq!(clamp_to_lower_bound(1.0), 1.0);
    }

    #[test]
    fn test_rule_at_neutral_is_steady() {
        // r* + π = 2.5 and the previous rate is already there
        let coefficients = PolicyRuleCoefficients::default();
        assert_relative_eq!(rule_rate(&coefficients, &neutral_inputs()), 2.5, epsilon = 1e-12);
    }

    #[test]
    fn test_positive_output_gap_is_ignored() {
        let coefficients = PolicyRuleCoefficients::default();
        let booming = RuleInputs { output_gap: 3.0, ..neutral_inputs() };
        let slumping = RuleInputs { output_gap: -3.0, ..neutral_inputs() };

        assert_relative_eq!(
            rule_rate(&coefficients, &booming),
            rule_rate(&coefficients, &neutral_inputs())
        );
        assert_relative_eq!(rule_rate(&coefficients, &slumping), 2.5 - 0.45, epsilon = 1e-12);
    }

    #[test]
    fn test_deep_recession_hits_lower_bound() {
        let coefficients = PolicyRuleCoefficients::default();
        let inputs = RuleInputs {
            prev_rate: 0.5,
            output_gap: -6.0,
            unemployment_rise: 1.5,
            ..neutral_inputs()
        };
        let raw = rule_rate(&coefficients, &inputs);
        assert!(raw < EFFECTIVE_LOWER_BOUND);
        assert_eq!(policy_rate(&coefficients, &inputs), EFFECTIVE_LOWER_BOUND);
    }

    #[test]
    fn test_unemployment_drag_conditions() {
        assert_relative_eq!(unemployment_drag(5.0, 4.0, Some(4.5)), 0.5);
        // Below the natural rate
        assert_eq!(unemployment_drag(3.9, 4.0, Some(3.5)), 0.0);
        // Falling
        assert_eq!(unemployment_drag(5.0, 4.0, Some(5.5)), 0.0);
        // Not enough history
        assert_eq!(unemployment_drag(5.0, 4.0, None), 0.0);
    }

    #[test]
    fn test_trailing_average_partial_window() {
        let core = [4.0, 2.0, 3.0, 1.0, 5.0];
        assert_relative_eq!(trailing_average(&core, 0, 4), 4.0);
        assert_relative_eq!(trailing_average(&core, 1, 4), 3.0);
        assert_relative_eq!(trailing_average(&core, 4, 4), 2.75);
    }
}
