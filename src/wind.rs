use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::{DEG_TO_RAD, RAD_TO_DEG};
use crate::error::WindError;

/// A single altitude-indexed wind reading.
///
/// Altitude may be in any length unit as long as every observation and every
/// query uses the same one. Direction is in radians.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WindObservation {
    pub altitude: f64,
    pub speed: f64,
    pub direction: f64,
}

impl WindObservation {
    pub fn new(altitude: f64, speed: f64, direction: f64) -> Self {
        Self {
            altitude,
            speed,
            direction,
        }
    }

    /// Create an observation with the direction given in degrees
    pub fn from_degrees(altitude: f64, speed: f64, direction_deg: f64) -> Self {
        Self::new(altitude, speed, direction_deg * DEG_TO_RAD)
    }

    pub fn direction_deg(&self) -> f64 {
        self.direction * RAD_TO_DEG
    }
}

impl fmt::Display for WindObservation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} alt {}deg {} speed",
            self.altitude.round(),
            self.direction_deg().round(),
            self.speed.round()
        )
    }
}

/// Wind observations sorted by ascending altitude.
///
/// Always holds at least one observation and no two observations share an
/// altitude.
#[derive(Debug, Clone, PartialEq)]
pub struct ObservationSeries {
    layers: Vec<WindObservation>,
}

impl ObservationSeries {
    /// Build a series from observations in any order
    ///
    /// The slice is copied; later changes to the caller's container have no
    /// effect on the series.
    pub fn new(observations: &[WindObservation]) -> Result<Self, WindError> {
        if observations.is_empty() {
            return Err(WindError::EmptyObservations);
        }

        for (index, obs) in observations.iter().enumerate() {
            if !(obs.altitude.is_finite() && obs.speed.is_finite() && obs.direction.is_finite()) {
                return Err(WindError::NonFiniteObservation { index });
            }
            if obs.speed < 0.0 {
                return Err(WindError::NegativeSpeed {
                    index,
                    speed: obs.speed,
                });
            }
        }

        let mut layers = observations.to_vec();
        layers.sort_by(|a, b| a.altitude.total_cmp(&b.altitude));

        if let Some(pair) = layers.windows(2).find(|w| w[0].altitude == w[1].altitude) {
            return Err(WindError::DuplicateAltitude {
                altitude: pair[0].altitude,
            });
        }

        Ok(Self { layers })
    }

    /// Lowest observation
    pub fn first(&self) -> &WindObservation {
        &self.layers[0]
    }

    /// Highest observation
    pub fn last(&self) -> &WindObservation {
        &self.layers[self.layers.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    /// Always false; kept for API symmetry with `len`
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, WindObservation> {
        self.layers.iter()
    }

    pub fn as_slice(&self) -> &[WindObservation] {
        &self.layers
    }
}

impl<'a> IntoIterator for &'a ObservationSeries {
    type Item = &'a WindObservation;
    type IntoIter = std::slice::Iter<'a, WindObservation>;

    fn into_iter(self) -> Self::IntoIter {
        self.layers.iter()
    }
}
