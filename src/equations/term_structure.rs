//! Expected short rates, term premiums and Treasury yields

/// Average of `path` over `window` quarters starting at `start`.
///
/// Quarters past the end of `path` take its last value, i.e. the short rate
/// is held flat beyond the projection horizon.
pub fn expected_short_rate(path: &[f64], start: usize, window: usize) -> f64 {
    let Some(&last) = path.last() else {
        return f64::NAN;
    };
    if window == 0 {
        return f64::NAN;
    }

    let end = path.len().min(start.saturating_add(window));
    let observed = path.get(start..end).unwrap_or(&[]);
    let held = window - observed.len();
    (observed.iter().sum::<f64>() + held as f64 * last) / window as f64
}

/// AR(1) reversion of a term premium toward its intercept
pub fn term_premium(intercept: f64, persistence: f64, prev: f64, shock: f64) -> f64 {
    intercept + persistence * (prev - intercept) + shock
}

/// Yield = expected short rate over the bond's life + term premium
pub fn treasury_yield(expected_short_rate: f64, term_premium: f64) -> f64 {
    expected_short_rate + term_premium
}
