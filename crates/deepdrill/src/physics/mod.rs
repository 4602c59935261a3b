//! # Physics
//!
//! Movement rules, the collision resolver and environmental hazards.
//!
//! [`advance`] runs one step of free motion for anything implementing
//! [`Kinematic`].

pub mod collision;
pub mod hazards;
pub mod movement;

pub use collision::{clamp_to_world, collect_contacts, integrate, resolve_x, resolve_y, CollisionResult};
pub use hazards::{fall_damage, fuel_drain, heat_damage_rate, temperature};
pub use movement::{apply_fly, apply_gravity, apply_horizontal, apply_movement, Drive};

use deepdrill_procedural::WorldGrid;

use crate::body::Kinematic;
use crate::config::PhysicsConfig;
use crate::intent::Intent;

/// Depth below the surface as a fraction of the full depth, in `[0, 1]`.
#[must_use]
pub fn normalized_depth(y: f32, ground_level: f32, max_y: f32) -> f32 {
    let depth = y - ground_level;
    let span = max_y - ground_level;
    if depth <= 0.0 || span <= 0.0 {
        return 0.0;
    }
    (depth / span).min(1.0)
}

/// Result of one step of free motion.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Motion {
    /// Grounded after the step.
    pub on_ground: bool,
    /// Was airborne, is now grounded.
    pub landed: bool,
    /// Vertical speed going into collision resolution (positive = down).
    pub impact_speed: f32,
    /// Collided horizontally.
    pub hit_x: bool,
    /// Collided vertically.
    pub hit_y: bool,
}

/// Moves a body through one step (velocity rules, then X and Y
/// resolution, then the world clamp) and writes the result back.
pub fn advance<B: Kinematic + ?Sized>(
    body: &mut B,
    grid: &mut WorldGrid,
    intent: Intent,
    physics: &PhysicsConfig,
    dt: f32,
) -> Motion {
    let was_grounded = body.on_ground();
    let velocity = apply_movement(body.velocity(), intent, &body.drive(), physics, dt);
    // Landing damage reads this, not the zeroed post-contact value.
    let impact_speed = velocity.y;

    let result = integrate(grid, body.aabb(), velocity, dt, physics.collision_epsilon);
    let (aabb, velocity) = clamp_to_world(result.aabb, result.velocity, grid.dimensions().width);

    body.set_aabb(aabb);
    body.set_velocity(velocity);
    body.set_on_ground(result.on_ground);

    Motion {
        on_ground: result.on_ground,
        landed: !was_grounded && result.on_ground,
        impact_speed,
        hit_x: result.hit_x,
        hit_y: result.hit_y,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalized_depth() {
        assert_eq!(normalized_depth(100.0, 640.0, 64_000.0), 0.0);
        assert_eq!(normalized_depth(640.0, 640.0, 64_000.0), 0.0);
        assert_eq!(normalized_depth(64_000.0, 640.0, 64_000.0), 1.0);
        assert_eq!(normalized_depth(90_000.0, 640.0, 64_000.0), 1.0);
        assert!((normalized_depth(32_320.0, 640.0, 64_000.0) - 0.5).abs() < 1e-6);
        assert_eq!(normalized_depth(700.0, 640.0, 640.0), 0.0, "degenerate span");
    }
}
