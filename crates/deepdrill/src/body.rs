//! # Bodies
//!
//! Capability traits the simulation drives, and the default [`Miner`]
//! body that implements all of them.
//!
//! - [`Kinematic`]: box, velocity, ground flag, drive. Enough for the
//!   collision resolver.
//! - [`Excavator`]: can run a dig and stow ore.
//! - [`Vitals`]: hull, heat tolerance, fuel.
//!
//! Any other movable entity only needs [`Kinematic`] to reuse
//! [`crate::physics::advance`].

use deepdrill_procedural::OreKind;
use deepdrill_shared::{Aabb, Vec2};

use crate::cargo::CargoHold;
use crate::config::MinerConfig;
use crate::physics::Drive;

// =============================================================================
// CAPABILITIES
// =============================================================================

/// A box that moves and collides.
pub trait Kinematic {
    /// Current bounding box.
    fn aabb(&self) -> Aabb;
    /// Replaces the bounding box.
    fn set_aabb(&mut self, aabb: Aabb);
    /// Current velocity, px/s.
    fn velocity(&self) -> Vec2;
    /// Replaces the velocity.
    fn set_velocity(&mut self, velocity: Vec2);
    /// Resting on solid terrain.
    fn on_ground(&self) -> bool;
    /// Sets the ground flag.
    fn set_on_ground(&mut self, on_ground: bool);
    /// Speed and thrust limits.
    fn drive(&self) -> Drive;

    /// Top-left corner.
    fn position(&self) -> Vec2 {
        self.aabb().min()
    }

    /// Moves the box without resizing it.
    fn set_position(&mut self, position: Vec2) {
        let aabb = self.aabb().with_position(position);
        self.set_aabb(aabb);
    }
}

/// A body that can dig.
pub trait Excavator: Kinematic {
    /// A dig animation is running.
    fn is_excavating(&self) -> bool;
    /// Sets the dig flag.
    fn set_excavating(&mut self, excavating: bool);
    /// Stores one unit of ore. `false` when there is no room.
    fn stow_ore(&mut self, kind: OreKind) -> bool;
}

/// Hull, heat tolerance and fuel.
pub trait Vitals {
    /// Remaining hull points.
    fn hull(&self) -> f32;
    /// Replaces the hull points.
    fn set_hull(&mut self, hull: f32);
    /// Temperature tolerated without damage, °C.
    fn heat_resistance(&self) -> f32;
    /// Litres in the tank.
    fn fuel(&self) -> f32;
    /// Replaces the fuel level.
    fn set_fuel(&mut self, fuel: f32);

    /// Removes hull points, never below zero. Returns the amount removed.
    fn take_damage(&mut self, amount: f32) -> f32 {
        let hull = self.hull();
        let dealt = amount.max(0.0).min(hull.max(0.0));
        self.set_hull(hull - dealt);
        dealt
    }

    /// Burns fuel, never below zero. Returns the amount burned.
    fn burn_fuel(&mut self, amount: f32) -> f32 {
        let fuel = self.fuel();
        let burned = amount.max(0.0).min(fuel.max(0.0));
        self.set_fuel(fuel - burned);
        burned
    }

    /// Hull is gone.
    fn is_destroyed(&self) -> bool {
        self.hull() <= 0.0
    }
}

// =============================================================================
// MINER
// =============================================================================

/// The default drilling body.
#[derive(Clone, Debug, PartialEq)]
pub struct Miner {
    aabb: Aabb,
    velocity: Vec2,
    on_ground: bool,
    excavating: bool,
    drive: Drive,
    /// Remaining hull points.
    pub hull: f32,
    /// Hull points when fully repaired.
    pub max_hull: f32,
    /// Temperature tolerated without damage, °C.
    pub heat_resistance: f32,
    /// Litres in the tank.
    pub fuel: f32,
    /// Tank size, litres.
    pub fuel_capacity: f32,
    /// Carried ore.
    pub cargo: CargoHold,
}

impl Miner {
    /// Creates a miner at rest with its top-left corner at `position`.
    #[must_use]
    pub fn new(position: Vec2, config: &MinerConfig) -> Self {
        Self {
            aabb: Aabb::new(position.x, position.y, config.width, config.height),
            velocity: Vec2::ZERO,
            on_ground: false,
            excavating: false,
            drive: Drive::from(config),
            hull: config.hull,
            max_hull: config.hull,
            heat_resistance: config.heat_resistance,
            fuel: config.fuel_capacity,
            fuel_capacity: config.fuel_capacity,
            cargo: CargoHold::new(config.cargo_capacity),
        }
    }

    /// Replaces speed and thrust limits (engine upgrades).
    pub fn set_drive(&mut self, drive: Drive) {
        self.drive = drive;
    }
}

impl Kinematic for Miner {
    fn aabb(&self) -> Aabb {
        self.aabb
    }

    fn set_aabb(&mut self, aabb: Aabb) {
        self.aabb = aabb;
    }

    fn velocity(&self) -> Vec2 {
        self.velocity
    }

    fn set_velocity(&mut self, velocity: Vec2) {
        self.velocity = velocity;
    }

    fn on_ground(&self) -> bool {
        self.on_ground
    }

    fn set_on_ground(&mut self, on_ground: bool) {
        self.on_ground = on_ground;
    }

    fn drive(&self) -> Drive {
        self.drive
    }
}

impl Excavator for Miner {
    fn is_excavating(&self) -> bool {
        self.excavating
    }

    fn set_excavating(&mut self, excavating: bool) {
        self.excavating = excavating;
    }

    fn stow_ore(&mut self, kind: OreKind) -> bool {
        self.cargo.try_add(kind)
    }
}

impl Vitals for Miner {
    fn hull(&self) -> f32 {
        self.hull
    }

    fn set_hull(&mut self, hull: f32) {
        self.hull = hull;
    }

    fn heat_resistance(&self) -> f32 {
        self.heat_resistance
    }

    fn fuel(&self) -> f32 {
        self.fuel
    }

    fn set_fuel(&mut self, fuel: f32) {
        self.fuel = fuel;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn miner() -> Miner {
        Miner::new(Vec2::new(100.0, 200.0), &MinerConfig::default())
    }

    #[test]
    fn test_new_miner() {
        let miner = miner();
        assert_eq!(miner.aabb(), Aabb::new(100.0, 200.0, 54.0, 54.0));
        assert_eq!(miner.velocity(), Vec2::ZERO);
        assert_eq!(miner.hull(), 10.0);
        assert_eq!(miner.fuel(), 10.0);
        assert_eq!(miner.cargo.capacity(), 10);
        assert!(!miner.is_excavating());
    }

    #[test]
    fn test_damage_clamps_at_zero() {
        let mut miner = miner();
        assert_eq!(miner.take_damage(4.0), 4.0);
        assert_eq!(miner.hull(), 6.0);
        assert_eq!(miner.take_damage(10.0), 6.0);
        assert_eq!(miner.hull(), 0.0);
        assert!(miner.is_destroyed());
        assert_eq!(miner.take_damage(1.0), 0.0);
        assert_eq!(miner.take_damage(-5.0), 0.0, "negative damage never heals");
    }

    #[test]
    fn test_fuel_clamps_at_zero() {
        let mut miner = miner();
        assert_eq!(miner.burn_fuel(2.5), 2.5);
        assert_eq!(miner.burn_fuel(100.0), 7.5);
        assert_eq!(miner.fuel(), 0.0);
    }

    #[test]
    fn test_set_position_keeps_size() {
        let mut miner = miner();
        miner.set_position(Vec2::new(7.0, 8.0));
        assert_eq!(miner.aabb(), Aabb::new(7.0, 8.0, 54.0, 54.0));
        assert_eq!(miner.position(), Vec2::new(7.0, 8.0));
    }

    #[test]
    fn test_stow_respects_cargo() {
        let mut miner = Miner::new(Vec2::ZERO, &MinerConfig { cargo_capacity: 1, ..MinerConfig::default() });
        assert!(miner.stow_ore(OreKind::Gold));
        assert!(!miner.stow_ore(OreKind::Gold));
        assert_eq!(miner.cargo.total(), 1);
    }
}
