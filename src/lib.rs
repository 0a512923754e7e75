//! # Layered Wind
//!
//! Altitude-layered wind model for flight simulation. Wind observations at a
//! handful of altitudes are interpolated into a continuous profile, and a
//! turbulence model layers gusts on top.
//!
//! ```
//! use layered_wind::{LayeredWindModel, WindObservation};
//!
//! let mut wind = LayeredWindModel::new(&[
//!     WindObservation::from_degrees(0.0, 4.0, 90.0),
//!     WindObservation::from_degrees(1000.0, 12.0, 110.0),
//! ])?;
//! wind.set_turbulence_intensity(0.1);
//!
//! let velocity = wind.wind_velocity(1.5, 400.0)?;
//! assert_eq!(velocity.z, 0.0);
//! # Ok::<(), layered_wind::WindError>(())
//! ```

// Re-export the main types
pub use config::{LayerConfig, LayeredWindConfig, TurbulenceConfig};
pub use error::WindError;
pub use interpolation::{Bracket, MeanWind};
pub use layered::LayeredWindModel;
pub use pink_noise::PinkNoise;
pub use turbulence::{Gustiness, PinkNoiseTurbulence, SteadyWind, TurbulenceModel};
pub use wind::{ObservationSeries, WindObservation};

// Module declarations
pub mod config;
pub mod constants;
mod error;
pub mod interpolation;
mod layered;
mod pink_noise;
pub mod turbulence;
mod wind;
