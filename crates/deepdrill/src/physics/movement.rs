//! Velocity rules: horizontal drive, fly thrust, gravity.
//!
//! All functions are pure. Screen Y grows downward, so flying up means a
//! negative Y velocity.

use deepdrill_shared::Vec2;

use crate::config::{MinerConfig, PhysicsConfig};
use crate::intent::Intent;

/// Drive characteristics of a body.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Drive {
    /// Horizontal speed cap, px/s.
    pub max_speed: f32,
    /// Horizontal acceleration, px/s².
    pub acceleration: f32,
    /// Upward thrust, px/s².
    pub fly_acceleration: f32,
    /// Upward speed cap, px/s (positive).
    pub max_ascent_speed: f32,
}

impl From<&MinerConfig> for Drive {
    fn from(config: &MinerConfig) -> Self {
        Self {
            max_speed: config.max_speed,
            acceleration: config.acceleration,
            fly_acceleration: config.fly_acceleration,
            max_ascent_speed: config.max_ascent_speed,
        }
    }
}

impl Default for Drive {
    fn default() -> Self {
        Self::from(&MinerConfig::default())
    }
}

/// Accelerates toward `direction` (-1, 0, 1) or damps toward rest.
///
/// Damping never reverses the direction of travel.
#[must_use]
pub fn apply_horizontal(vx: f32, direction: i8, drive: &Drive, damping: f32, dt: f32) -> f32 {
    match direction {
        1 => (vx + drive.acceleration * dt).min(drive.max_speed),
        -1 => (vx - drive.acceleration * dt).max(-drive.max_speed),
        _ if vx > 0.0 => (vx - damping * dt).max(0.0),
        _ if vx < 0.0 => (vx + damping * dt).min(0.0),
        _ => vx,
    }
}

/// Thrusts upward while `up` is held, otherwise bleeds off upward speed.
///
/// Downward speed is left to gravity.
#[must_use]
pub fn apply_fly(vy: f32, up: bool, drive: &Drive, damping: f32, dt: f32) -> f32 {
    if up {
        (vy - drive.fly_acceleration * dt).max(-drive.max_ascent_speed)
    } else if vy < 0.0 {
        (vy + damping * dt).min(0.0)
    } else {
        vy
    }
}

/// Constant downward acceleration.
#[inline]
#[must_use]
pub fn apply_gravity(vy: f32, gravity: f32, dt: f32) -> f32 {
    vy + gravity * dt
}

/// Horizontal rule, fly rule, then gravity.
#[must_use]
pub fn apply_movement(velocity: Vec2, intent: Intent, drive: &Drive, physics: &PhysicsConfig, dt: f32) -> Vec2 {
    let vx = apply_horizontal(velocity.x, intent.horizontal(), drive, physics.move_damping, dt);
    let vy = apply_fly(velocity.y, intent.up, drive, physics.fly_damping, dt);
    Vec2::new(vx, apply_gravity(vy, physics.gravity, dt))
}
