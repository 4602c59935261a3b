//! Heat, fall and fuel rules.
//!
//! Pure arithmetic over config values. Applying the results to a body
//! (and clamping hull at zero) is the body's job, see
//! [`crate::body::Vitals`].

use crate::config::{FallConfig, FuelConfig, HeatConfig};
use crate::intent::Intent;
use crate::physics::normalized_depth;

/// Ambient temperature at pixel Y, °C.
///
/// Linear from `base_temperature` at the surface to `max_temperature` at
/// `max_y`, flat beyond either end.
#[must_use]
pub fn temperature(y: f32, ground_level: f32, max_y: f32, heat: &HeatConfig) -> f32 {
    let depth = normalized_depth(y, ground_level, max_y);
    heat.base_temperature + depth * (heat.max_temperature - heat.base_temperature)
}

/// Hull damage per second at a temperature, zero within tolerance.
///
/// `base_dps * (excess / divisor) ^ exponent`
#[must_use]
pub fn heat_damage_rate(temperature: f32, resistance: f32, heat: &HeatConfig) -> f32 {
    let excess = temperature - resistance;
    if excess <= 0.0 {
        return 0.0;
    }
    heat.base_dps * (excess / heat.divisor).powf(heat.exponent)
}

/// Hull damage for landing at `impact_speed` px/s (positive = downward).
#[must_use]
pub fn fall_damage(impact_speed: f32, fall: &FallConfig) -> f32 {
    if impact_speed <= fall.threshold {
        return 0.0;
    }
    (impact_speed - fall.threshold) / fall.divisor
}

/// Litres burned over `dt`.
#[must_use]
pub fn fuel_drain(intent: Intent, fuel: &FuelConfig, dt: f32) -> f32 {
    let rate = if intent.has_movement() { fuel.moving_rate } else { fuel.idle_rate };
    rate * dt
}

#[cfg(test)]
mod tests {
    use super::*;

    const GROUND: f32 = 640.0;
    const MAX_Y: f32 = 64_000.0;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-3
    }

    #[test]
    fn test_temperature_curve() {
        let heat = HeatConfig::default();
        assert_eq!(temperature(GROUND, GROUND, MAX_Y, &heat), 15.0);
        assert_eq!(temperature(0.0, GROUND, MAX_Y, &heat), 15.0);
        assert!(approx(temperature(MAX_Y, GROUND, MAX_Y, &heat), 350.0));
        assert!(approx(temperature(32_320.0, GROUND, MAX_Y, &heat), 182.5));
        assert!(approx(temperature(200_000.0, GROUND, MAX_Y, &heat), 350.0), "clamped past max depth");
    }

    #[test]
    fn test_heat_damage_rate() {
        let heat = HeatConfig::default();
        assert_eq!(heat_damage_rate(40.0, 50.0, &heat), 0.0);
        assert_eq!(heat_damage_rate(50.0, 50.0, &heat), 0.0);
        // Excess 10 -> 0.5 * 1^1.5
        assert!(approx(heat_damage_rate(60.0, 50.0, &heat), 0.5));
        // Excess 40 -> 0.5 * 4^1.5 = 4
        assert!(approx(heat_damage_rate(90.0, 50.0, &heat), 4.0));
    }

    #[test]
    fn test_fall_damage() {
        let fall = FallConfig::default();
        assert_eq!(fall_damage(-300.0, &fall), 0.0);
        assert_eq!(fall_damage(500.0, &fall), 0.0);
        assert_eq!(fall_damage(520.0, &fall), 1.0);
        assert_eq!(fall_damage(600.0, &fall), 5.0);
        assert_eq!(fall_damage(700.0, &fall), 10.0);
    }

    #[test]
    fn test_fuel_drain() {
        let fuel = FuelConfig::default();
        assert!(approx(fuel_drain(Intent::NONE, &fuel, 12.0), 1.0));
        assert!(approx(fuel_drain(Intent::right(), &fuel, 3.0), 1.0));
        assert!(approx(fuel_drain(Intent::dig(), &fuel, 3.0), 1.0));
    }
}
