/// Wind Profile Example
///
/// Builds a layered wind model from a JSON profile and prints the mean wind
/// and a gusting sample at a range of altitudes, then follows a simple
/// vertical ascent through the profile.

use layered_wind::{LayeredWindConfig, WindError};

const PROFILE: &str = r#"{
    "layers": [
        { "altitude": 0.0,    "speed": 3.0,  "direction_deg": 45.0 },
        { "altitude": 300.0,  "speed": 6.5,  "direction_deg": 80.0 },
        { "altitude": 1500.0, "speed": 14.0, "direction_deg": 170.0 },
        { "altitude": 3000.0, "speed": 22.0, "direction_deg": -160.0 }
    ],
    "turbulence": { "seed": 10, "intensity": 0.15 }
}"#;

fn main() -> Result<(), WindError> {
    println!("=== Layered Wind Profile ===\n");

    let config = LayeredWindConfig::from_json(PROFILE)?;
    let mut wind = config.build()?;

    println!("Observed layers:");
    for layer in wind.observations() {
        println!("  {layer}");
    }
    println!();

    println!(" Altitude (m) | Mean (m/s) | Dir (deg) | Gust x (m/s) | Gust y (m/s)");
    println!("--------------|------------|-----------|--------------|-------------");
    for altitude in (0..=3500).step_by(250) {
        let altitude = altitude as f64;
        let mean = wind.mean_wind_at(altitude);
        let gust = wind.wind_velocity(0.0, altitude)?;
        println!(
            " {:12.0} | {:10.2} | {:9.1} | {:12.2} | {:12.2}",
            altitude,
            mean.speed,
            mean.direction.to_degrees(),
            gust.x,
            gust.y
        );
    }
    println!();

    // Constant 120 m/s climb sampled once a second
    println!("Ascent at 120 m/s:");
    println!("  Time (s) | Altitude (m) | Speed (m/s)");
    println!("  ---------|--------------|------------");
    let climb_rate = 120.0;
    for step in 0..=30 {
        let t = step as f64;
        let altitude = climb_rate * t;
        let v = wind.wind_velocity(t, altitude)?;
        if step % 3 == 0 {
            println!("  {:8.1} | {:12.0} | {:11.2}", t, altitude, v.norm());
        }
    }

    Ok(())
}
