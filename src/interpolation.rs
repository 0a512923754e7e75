//! Altitude interpolation between wind layers.
//!
//! Speeds are blended linearly. Directions are blended as unit vectors
//! (circular mean) so that layers either side of the +/-180° line average
//! through 180° instead of swinging round through 0°.

use nalgebra::Vector3;
use std::fmt;

use crate::wind::{ObservationSeries, WindObservation};

/// Deterministic wind at one altitude, before turbulence
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeanWind {
    pub speed: f64,
    /// Radians
    pub direction: f64,
}

impl MeanWind {
    pub fn new(speed: f64, direction: f64) -> Self {
        Self { speed, direction }
    }

    /// Velocity vector for this wind at the given scalar speed
    ///
    /// x = speed·sin(direction), y = speed·cos(direction), z = 0.
    pub fn vector_with_speed(&self, speed: f64) -> Vector3<f64> {
        Vector3::new(
            speed * self.direction.sin(),
            speed * self.direction.cos(),
            0.0,
        )
    }

    pub fn to_vector(&self) -> Vector3<f64> {
        self.vector_with_speed(self.speed)
    }

    /// Mean wind from a bracket at the given altitude
    pub fn from_bracket(bracket: &Bracket<'_>, altitude: f64) -> Self {
        match *bracket {
            Bracket::Below(m) | Bracket::Above(m) => m.into(),
            Bracket::Between { lower, upper } => {
                let a = bracket_fraction(lower, upper, altitude);
                Self {
                    speed: lerp(lower.speed, upper.speed, a),
                    direction: circular_lerp(lower.direction, upper.direction, a),
                }
            }
        }
    }
}

impl From<&WindObservation> for MeanWind {
    fn from(m: &WindObservation) -> Self {
        Self::new(m.speed, m.direction)
    }
}

/// Observations surrounding a query altitude
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Bracket<'a> {
    /// At or below the lowest layer
    Below(&'a WindObservation),
    /// Strictly above `lower` and at or below `upper`
    Between {
        lower: &'a WindObservation,
        upper: &'a WindObservation,
    },
    /// Above the highest layer
    Above(&'a WindObservation),
}

impl<'a> Bracket<'a> {
    /// Find the layers around `altitude`
    ///
    /// Scans upward for the first layer at or above the altitude; the layer
    /// before it, if any, is the lower side of the bracket.
    pub fn locate(series: &'a ObservationSeries, altitude: f64) -> Self {
        let mut prev: Option<&'a WindObservation> = None;
        for m in series {
            if m.altitude >= altitude {
                return match prev {
                    Some(lower) => Bracket::Between { lower, upper: m },
                    None => Bracket::Below(m),
                };
            }
            prev = Some(m);
        }
        Bracket::Above(series.last())
    }

    pub fn lower(&self) -> Option<&'a WindObservation> {
        match *self {
            Bracket::Below(_) => None,
            Bracket::Between { lower, .. } => Some(lower),
            Bracket::Above(m) => Some(m),
        }
    }

    pub fn upper(&self) -> Option<&'a WindObservation> {
        match *self {
            Bracket::Below(m) => Some(m),
            Bracket::Between { upper, .. } => Some(upper),
            Bracket::Above(_) => None,
        }
    }
}

impl fmt::Display for Bracket<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let side = |m: Option<&WindObservation>| match m {
            Some(m) => m.to_string(),
            None => "(none)".to_string(),
        };
        write!(f, "{} and {}", side(self.lower()), side(self.upper()))
    }
}

/// Fractional position of `altitude` between two layers
///
/// Layers in a series never share an altitude, so the span is non-zero.
fn bracket_fraction(lower: &WindObservation, upper: &WindObservation, altitude: f64) -> f64 {
    let span = upper.altitude - lower.altitude;
    debug_assert!(span > 0.0, "bracket layers must have distinct altitudes");
    (altitude - lower.altitude) / span
}

pub fn lerp(v1: f64, v2: f64, w: f64) -> f64 {
    v1 + (v2 - v1) * w
}

/// Blend two angles (radians) by weight `w` along the short arc
///
/// Result is in (-π, π].
pub fn circular_lerp(d1: f64, d2: f64, w: f64) -> f64 {
    let sin_sum = (1.0 - w) * d1.sin() + w * d2.sin();
    let cos_sum = (1.0 - w) * d1.cos() + w * d2.cos();
    sin_sum.atan2(cos_sum)
}
