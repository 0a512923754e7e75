//! Altitude-layered wind model.
//!
//! Wind observations at discrete altitudes are interpolated into a
//! continuous profile. Between two layers the speed is blended linearly and
//! the direction along the shorter arc; outside the observed range the
//! nearest layer is held flat. The resulting mean wind is handed to a
//! [`TurbulenceModel`] which adds gusts and returns the velocity vector.

use nalgebra::Vector3;
use tracing::debug;

use crate::constants::DEFAULT_TURBULENCE_SEED;
use crate::error::WindError;
use crate::interpolation::{Bracket, MeanWind};
use crate::turbulence::{PinkNoiseTurbulence, TurbulenceModel};
use crate::wind::{ObservationSeries, WindObservation};

/// Wind model interpolated between altitude layers.
///
/// Queries take `&mut self` because the turbulence delegate advances its
/// noise state. Clone the model to query from several threads; each clone
/// carries its own delegate.
#[derive(Debug, Clone)]
pub struct LayeredWindModel<T = PinkNoiseTurbulence> {
    layers: ObservationSeries,
    turbulence: T,
}

impl LayeredWindModel<PinkNoiseTurbulence> {
    /// Create a model with pink noise turbulence (no gusts until a standard
    /// deviation or intensity is set)
    pub fn new(observations: &[WindObservation]) -> Result<Self, WindError> {
        Self::with_turbulence(observations, PinkNoiseTurbulence::new(DEFAULT_TURBULENCE_SEED))
    }
}

impl<T: TurbulenceModel> LayeredWindModel<T> {
    /// Create a model with the given turbulence delegate
    ///
    /// Observations may be in any order. They are copied and sorted by
    /// altitude.
    ///
    /// # Errors
    ///
    /// Fails if `observations` is empty, two observations share an altitude,
    /// or an observation has a non-finite value or negative speed.
    pub fn with_turbulence(observations: &[WindObservation], turbulence: T) -> Result<Self, WindError> {
        let layers = ObservationSeries::new(observations)?;
        Ok(LayeredWindModel { layers, turbulence })
    }

    pub fn set_standard_deviation(&mut self, standard_deviation: f64) {
        self.turbulence.set_standard_deviation(standard_deviation);
    }

    pub fn set_turbulence_intensity(&mut self, intensity: f64) {
        self.turbulence.set_turbulence_intensity(intensity);
    }

    /// Wind velocity at `time` and `altitude`, gusts included
    ///
    /// # Errors
    ///
    /// Returns [`WindError::InvalidTime`] if `time` is negative or not finite.
    pub fn wind_velocity(&mut self, time: f64, altitude: f64) -> Result<Vector3<f64>, WindError> {
        let bracket = Bracket::locate(&self.layers, altitude);
        let mean = MeanWind::from_bracket(&bracket, altitude);
        let velocity = self.turbulence.wind_velocity(time, altitude, mean)?;

        debug!(
            altitude,
            layers = %bracket,
            velocity = ?velocity,
            "interpolated wind between layers"
        );
        Ok(velocity)
    }
}

impl<T> LayeredWindModel<T> {
    /// Mean wind at `altitude` without turbulence
    pub fn mean_wind_at(&self, altitude: f64) -> MeanWind {
        MeanWind::from_bracket(&self.bracket(altitude), altitude)
    }

    pub fn bracket(&self, altitude: f64) -> Bracket<'_> {
        Bracket::locate(&self.layers, altitude)
    }

    /// Mean wind of the lowest layer
    pub fn baseline(&self) -> MeanWind {
        self.layers.first().into()
    }

    pub fn observations(&self) -> &ObservationSeries {
        &self.layers
    }

    pub fn turbulence(&self) -> &T {
        &self.turbulence
    }

    pub fn turbulence_mut(&mut self) -> &mut T {
        &mut self.turbulence
    }
}
