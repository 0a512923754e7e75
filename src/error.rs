//! Error type shared by the wind model, its turbulence delegates and the
//! configuration layer.

use thiserror::Error;

/// Errors raised while building or querying a wind model.
///
/// This enum is marked `#[non_exhaustive]` and may grow new variants.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum WindError {
    #[error("at least one wind observation is required")]
    EmptyObservations,

    #[error("two wind observations share altitude {altitude}")]
    DuplicateAltitude { altitude: f64 },

    #[error("wind observation {index} has a non-finite altitude, speed or direction")]
    NonFiniteObservation { index: usize },

    #[error("wind observation {index} has negative speed {speed}")]
    NegativeSpeed { index: usize, speed: f64 },

    #[error("query time must be finite and non-negative, got {0}")]
    InvalidTime(f64),

    #[error("turbulence config sets both standard_deviation and intensity")]
    ConflictingTurbulence,

    #[error("invalid wind configuration: {0}")]
    Config(#[from] serde_json::Error),
}
