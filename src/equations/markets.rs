//! Guided spread and asset-price variables
//!
//! Inside the guide window a variable takes the guide value as is. After it,
//! the reversion selected by the variable's [`Anchor`](crate::inputs::Anchor)
//! takes over from the last guided (or jump-off) value.

use super::identities;

/// Guide value for quarter `t`, if the guide still covers it
pub fn guide_value(guide: &[f64], t: usize) -> Option<f64> {
    guide.get(t).copied()
}

/// `x_t = L + ρ·(x_{t-1} − L) + shock`
pub fn revert_level(long_run: f64, persistence: f64, prev: f64, shock: f64) -> f64 {
    long_run + persistence * (prev - long_run) + shock
}

/// Reference rate plus a spread that reverts toward `long_run`
pub fn revert_spread(
    reference: f64,
    long_run: f64,
    persistence: f64,
    prev_spread: f64,
    shock: f64,
) -> f64 {
    reference + revert_level(long_run, persistence, prev_spread, shock)
}

/// Trend level `quarters` after the jump-off, growing at `growth` percent a year
pub fn trend_level(base: f64, growth: f64, quarters: usize) -> f64 {
    base * (growth * quarters as f64 / 400.0).exp()
}

/// Level whose percent log gap to trend reverts toward zero
pub fn revert_to_trend(
    trend: f64,
    trend_prev: f64,
    persistence: f64,
    prev: f64,
    shock: f64,
) -> f64 {
    let gap = persistence * identities::log_gap(prev, trend_prev) + shock;
    trend * (gap / 100.0).exp()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_guide_window() {
        let guide = [3.0, 4.5];
        assert_eq!(guide_value(&guide, 0), Some(3.0));
        assert_eq!(guide_value(&guide, 1), Some(4.5));
        assert_eq!(guide_value(&guide, 2), None);
    }

    #[test]
    fn test_level_reversion_from_stress() {
        // BBB spread halfway back from 5.0 toward 1.66 at ρ = 0.5
        assert_relative_eq!(revert_level(1.66, 0.5, 5.0, 0.0), 3.33, epsilon = 1e-12);
    }

    #[test]
    fn test_spread_reversion() {
        let mortgage = revert_spread(4.0, 1.7, 0.8, 2.7, 0.0);
        assert_relative_eq!(mortgage, 4.0 + 1.7 + 0.8, epsilon = 1e-12);
        // Zero persistence pins the spread at its long-run value
        assert_relative_eq!(revert_spread(2.0, 3.0, 0.0, 5.0, 0.0), 5.0);
    }

    #[test]
    fn test_trend_reversion_closes_gap() {
        let base = 5_000.0;
        let mut level = 3_000.0;
        for q in 1..=80 {
            let trend_prev = trend_level(base, 5.0, q - 1);
            let trend = trend_level(base, 5.0, q);
            level = revert_to_trend(trend, trend_prev, 0.85, level, 0.0);
        }
        assert_relative_eq!(level, trend_level(base, 5.0, 80), max_relative = 1e-4);
    }

    #[test]
    fn test_on_trend_stays_on_trend() {
        let trend_prev = trend_level(300.0, 2.0, 3);
        let trend = trend_level(300.0, 2.0, 4);
        assert_relative_eq!(revert_to_trend(trend, trend_prev, 0.9, trend_prev, 0.0), trend, epsilon = 1e-9);
    }
}
