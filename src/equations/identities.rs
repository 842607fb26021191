//! Accounting identities and rate/level transformations
//!
//! Quarterly rates are annualized log differences in percent, so a level
//! and its rate convert exactly in both directions.

/// Index value of every price level in quarter 0
pub const PRICE_INDEX_BASE: f64 = 100.0;

/// Annualized percent change between two quarterly levels: `400·ln(level/prev)`
pub fn annualized_log_change(level: f64, prev: f64) -> f64 {
    400.0 * (level / prev).ln()
}

/// Level reached from `prev` after one quarter at an annualized percent rate
pub fn compound(prev: f64, annualized_rate: f64) -> f64 {
    prev * (annualized_rate / 400.0).exp()
}

/// Difference between a level and its natural/trend counterpart
pub fn gap(level: f64, natural: f64) -> f64 {
    level - natural
}

/// Percent log deviation of a level from its trend: `100·ln(level/trend)`
pub fn log_gap(level: f64, trend: f64) -> f64 {
    100.0 * (level / trend).ln()
}

/// Nominal value of a real quantity at a given price index
pub fn nominal_from_real(real: f64, price_index: f64) -> f64 {
    real * price_index / PRICE_INDEX_BASE
}

/// Real value of a nominal quantity at a given price index
pub fn deflate(nominal: f64, price_index: f64) -> f64 {
    nominal / price_index * PRICE_INDEX_BASE
}

/// Price index implied by a nominal and real level
pub fn implicit_price_index(nominal: f64, real: f64) -> f64 {
    PRICE_INDEX_BASE * nominal / real
}
