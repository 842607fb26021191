//! Error types for configuration assembly and projection runs

use thiserror::Error;

use crate::projection::Variable;

/// Result alias used across the crate
pub type Result<T> = std::result::Result<T, ModelError>;

/// Malformed or incomplete configuration, detected before any quarter is projected
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("horizon must be positive, got {0}")]
    NonPositiveHorizon(i64),

    /// A series does not cover the quarters it must cover
    #[error("series length mismatch for {name}: expected {expected}, got {actual}")]
    SeriesLength {
        name: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Fewer observations than the lag order of the equation they seed
    #[error("insufficient history for {name}: need at least {required} observations, got {actual}")]
    InsufficientHistory {
        name: &'static str,
        required: usize,
        actual: usize,
    },

    #[error("guide for {name} covers {len} quarters but the horizon is {horizon}")]
    GuideTooLong {
        name: &'static str,
        len: usize,
        horizon: usize,
    },

    #[error("missing coefficient: {0}")]
    MissingCoefficient(&'static str),

    #[error("non-finite value {value} in {name} at index {index}")]
    NonFinite {
        name: &'static str,
        index: usize,
        value: f64,
    },
}

/// Top-level error for the crate
#[derive(Error, Debug)]
pub enum ModelError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// An equation produced NaN or an infinity
    #[error("non-finite {} in quarter {quarter}: {value}", .variable.name())]
    Numeric {
        quarter: usize,
        variable: Variable,
        value: f64,
    },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// Loader-level problem that is not a configuration error proper
    #[error("parse error: {0}")]
    Parse(String),
}

impl ModelError {
    /// The configuration error behind this failure, if any
    pub fn as_config(&self) -> Option<&ConfigError> {
        match self {
            ModelError::Config(err) => Some(err),
            _ => None,
        }
    }
}
