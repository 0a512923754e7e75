//! Serialisable description of a layered wind model.
//!
//! ```json
//! {
//!   "layers": [
//!     { "altitude": 0.0,    "speed": 4.0,  "direction_deg": 90.0 },
//!     { "altitude": 1000.0, "speed": 12.0, "direction_deg": 110.0 }
//!   ],
//!   "turbulence": { "seed": 10, "intensity": 0.1 }
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_TURBULENCE_SEED;
use crate::error::WindError;
use crate::layered::LayeredWindModel;
use crate::turbulence::{PinkNoiseTurbulence, TurbulenceModel};
use crate::wind::WindObservation;

/// One wind layer, direction in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayerConfig {
    pub altitude: f64,
    pub speed: f64,
    pub direction_deg: f64,
}

impl From<LayerConfig> for WindObservation {
    fn from(layer: LayerConfig) -> Self {
        WindObservation::from_degrees(layer.altitude, layer.speed, layer.direction_deg)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TurbulenceConfig {
    #[serde(default = "default_seed")]
    pub seed: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub standard_deviation: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intensity: Option<f64>,
}

fn default_seed() -> u64 {
    DEFAULT_TURBULENCE_SEED
}

impl Default for TurbulenceConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_TURBULENCE_SEED,
            standard_deviation: None,
            intensity: None,
        }
    }
}

impl TurbulenceConfig {
    /// Build the pink noise delegate described by this config
    pub fn build(&self) -> Result<PinkNoiseTurbulence, WindError> {
        let mut turbulence = PinkNoiseTurbulence::new(self.seed);
        match (self.standard_deviation, self.intensity) {
            (Some(_), Some(_)) => return Err(WindError::ConflictingTurbulence),
            (Some(sigma), None) => turbulence.set_standard_deviation(sigma),
            (None, Some(intensity)) => turbulence.set_turbulence_intensity(intensity),
            (None, None) => {}
        }
        Ok(turbulence)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LayeredWindConfig {
    pub layers: Vec<LayerConfig>,
    #[serde(default)]
    pub turbulence: TurbulenceConfig,
}

impl LayeredWindConfig {
    pub fn from_json(json: &str) -> Result<Self, WindError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, WindError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn observations(&self) -> Vec<WindObservation> {
        self.layers.iter().copied().map(WindObservation::from).collect()
    }

    /// Validate the config and build a model
    pub fn build(&self) -> Result<LayeredWindModel, WindError> {
        let turbulence = self.turbulence.build()?;
        LayeredWindModel::with_turbulence(&self.observations(), turbulence)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::turbulence::Gustiness;

    const PROFILE: &str = r#"{
        "layers": [
            { "altitude": 1000.0, "speed": 12.0, "direction_deg": 110.0 },
            { "altitude": 0.0, "speed": 4.0, "direction_deg": 90.0 }
        ],
        "turbulence": { "seed": 7, "intensity": 0.1 }
    }"#;

    #[test]
    fn test_parse_and_build() {
        let config = LayeredWindConfig::from_json(PROFILE).unwrap();
        assert_eq!(config.layers.len(), 2);
        assert_eq!(config.turbulence.seed, 7);

        let model = config.build().unwrap();
        assert_eq!(model.observations().first().altitude, 0.0);
        assert_eq!(model.turbulence().seed(), 7);
        assert_eq!(model.turbulence().gustiness(), Gustiness::Intensity(0.1));
        assert!((model.baseline().direction - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
    }

    #[test]
    fn test_turbulence_defaults() {
        let config = LayeredWindConfig::from_json(
            r#"{ "layers": [ { "altitude": 0.0, "speed": 1.0, "direction_deg": 0.0 } ] }"#,
        )
        .unwrap();
        assert_eq!(config.turbulence, TurbulenceConfig::default());

        let model = config.build().unwrap();
        assert_eq!(model.turbulence().seed(), DEFAULT_TURBULENCE_SEED);
        assert_eq!(model.turbulence().gustiness(), Gustiness::StandardDeviation(0.0));
    }

    #[test]
    fn test_conflicting_turbulence() {
        let config = LayeredWindConfig::from_json(
            r#"{
                "layers": [ { "altitude": 0.0, "speed": 1.0, "direction_deg": 0.0 } ],
                "turbulence": { "standard_deviation": 1.0, "intensity": 0.1 }
            }"#,
        )
        .unwrap();
        assert!(matches!(config.build(), Err(WindError::ConflictingTurbulence)));
    }

    #[test]
    fn test_bad_json() {
        assert!(matches!(
            LayeredWindConfig::from_json("{ \"layers\": 3 }"),
            Err(WindError::Config(_))
        ));
        assert!(matches!(
            LayeredWindConfig::from_json(r#"{ "layers": [], "wind": 1 }"#),
            Err(WindError::Config(_))
        ));
    }

    #[test]
    fn test_empty_layers_fail_at_build() {
        let config = LayeredWindConfig::from_json(r#"{ "layers": [] }"#).unwrap();
        assert!(matches!(config.build(), Err(WindError::EmptyObservations)));
    }

    #[test]
    fn test_json_round_trip() {
        let config = LayeredWindConfig::from_json(PROFILE).unwrap();
        let again = LayeredWindConfig::from_json(&config.to_json().unwrap()).unwrap();
        assert_eq!(config, again);
    }
}
