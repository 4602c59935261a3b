//! # Simulation Configuration
//!
//! Every tunable number of the simulation, loadable from TOML.
//!
//! ## Format
//!
//! ```toml
//! [world]
//! seed = 42
//! width = 7680.0
//!
//! [physics]
//! gravity = 800.0
//!
//! [miner]
//! cargo_capacity = 20
//! ```
//!
//! Every section and every field is optional; missing values take the
//! defaults below, so an empty document is a complete configuration.
//! Unknown keys are rejected to catch typos.

use std::path::Path;

use deepdrill_procedural::{GenerationParams, WorldDimensions, WorldSeed};
use serde::{Deserialize, Serialize};

use crate::error::{SimError, SimResult};

// =============================================================================
// SECTIONS
// =============================================================================

/// `[world]`: extents and seed.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WorldConfig {
    /// World seed.
    pub seed: u64,
    /// Width in pixels.
    pub width: f32,
    /// Height in pixels.
    pub height: f32,
    /// Pixel Y of the surface.
    pub ground_level: f32,
    /// Tile edge in pixels.
    pub tile_size: f32,
}

impl Default for WorldConfig {
    fn default() -> Self {
        let dims = WorldDimensions::default();
        Self {
            seed: WorldSeed::default().value(),
            width: dims.width,
            height: dims.height,
            ground_level: dims.ground_level,
            tile_size: dims.tile_size,
        }
    }
}

impl WorldConfig {
    /// Grid dimensions.
    #[must_use]
    pub const fn dimensions(&self) -> WorldDimensions {
        WorldDimensions {
            width: self.width,
            height: self.height,
            ground_level: self.ground_level,
            tile_size: self.tile_size,
        }
    }

    /// World seed.
    #[must_use]
    pub const fn seed(&self) -> WorldSeed {
        WorldSeed::new(self.seed)
    }
}

/// `[physics]`: accelerations in px/s².
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PhysicsConfig {
    /// Constant downward acceleration.
    pub gravity: f32,
    /// Horizontal deceleration with no input.
    pub move_damping: f32,
    /// Vertical deceleration of upward motion with no fly input.
    pub fly_damping: f32,
    /// Pixel Y treated as maximum depth for heat and dig time.
    pub max_underground_y: f32,
    /// Trimmed from far box edges when enumerating touched tiles.
    pub collision_epsilon: f32,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity: 800.0,
            move_damping: 1_000.0,
            fly_damping: 300.0,
            max_underground_y: 64_000.0,
            collision_epsilon: 0.001,
        }
    }
}

/// `[heat]`: depth temperature curve and damage.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HeatConfig {
    /// Temperature at the surface, °C.
    pub base_temperature: f32,
    /// Temperature at maximum depth, °C.
    pub max_temperature: f32,
    /// Damage per second at an excess of one `divisor`.
    pub base_dps: f32,
    /// Excess temperature scale.
    pub divisor: f32,
    /// Growth exponent of damage over excess.
    pub exponent: f32,
}

impl Default for HeatConfig {
    fn default() -> Self {
        Self {
            base_temperature: 15.0,
            max_temperature: 350.0,
            base_dps: 0.5,
            divisor: 10.0,
            exponent: 1.5,
        }
    }
}

/// `[fall]`: landing damage.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FallConfig {
    /// Impact speed (px/s) absorbed without damage.
    pub threshold: f32,
    /// Speed over threshold per point of damage.
    pub divisor: f32,
}

impl Default for FallConfig {
    fn default() -> Self {
        Self {
            threshold: 500.0,
            divisor: 20.0,
        }
    }
}

/// `[excavation]`: dig durations in seconds.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExcavationConfig {
    /// Duration at the surface.
    pub min_duration: f32,
    /// Duration at maximum depth.
    pub max_duration: f32,
}

impl Default for ExcavationConfig {
    fn default() -> Self {
        Self {
            min_duration: 0.8,
            max_duration: 30.0,
        }
    }
}

/// `[fuel]`: drain in litres per second.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FuelConfig {
    /// Drain while any intent is active.
    pub moving_rate: f32,
    /// Drain with no intent.
    pub idle_rate: f32,
}

impl Default for FuelConfig {
    fn default() -> Self {
        Self {
            moving_rate: 10.0 / 30.0,
            idle_rate: 10.0 / 120.0,
        }
    }
}

/// `[miner]`: the default body's hull and drive.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MinerConfig {
    /// Body width, px.
    pub width: f32,
    /// Body height, px.
    pub height: f32,
    /// Horizontal speed cap, px/s.
    pub max_speed: f32,
    /// Horizontal acceleration, px/s².
    pub acceleration: f32,
    /// Upward thrust, px/s².
    pub fly_acceleration: f32,
    /// Upward speed cap, px/s (positive number; applied as negative Y).
    pub max_ascent_speed: f32,
    /// Hull points.
    pub hull: f32,
    /// Temperature tolerated without damage, °C.
    pub heat_resistance: f32,
    /// Ore units the cargo hold takes.
    pub cargo_capacity: u32,
    /// Tank size, litres.
    pub fuel_capacity: f32,
}

impl Default for MinerConfig {
    fn default() -> Self {
        Self {
            width: 54.0,
            height: 54.0,
            max_speed: 450.0,
            acceleration: 2_500.0,
            fly_acceleration: 2_500.0,
            max_ascent_speed: 600.0,
            hull: 10.0,
            heat_resistance: 50.0,
            cargo_capacity: 10,
            fuel_capacity: 10.0,
        }
    }
}

// =============================================================================
// SIM CONFIG
// =============================================================================

/// Complete simulation configuration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimConfig {
    /// World extents and seed.
    pub world: WorldConfig,
    /// Terrain statistics.
    pub generation: GenerationParams,
    /// Accelerations and depth reference.
    pub physics: PhysicsConfig,
    /// Depth heat.
    pub heat: HeatConfig,
    /// Landing damage.
    pub fall: FallConfig,
    /// Dig durations.
    pub excavation: ExcavationConfig,
    /// Fuel drain.
    pub fuel: FuelConfig,
    /// Default body.
    pub miner: MinerConfig,
}

impl SimConfig {
    /// Parses and validates a TOML document.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Parse`] for malformed TOML and a validation
    /// error for values out of range.
    pub fn from_toml_str(source: &str) -> SimResult<Self> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Io`] if the file cannot be read, otherwise as
    /// [`SimConfig::from_toml_str`].
    pub fn load(path: impl AsRef<Path>) -> SimResult<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| SimError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let config = Self::from_toml_str(&source)?;
        tracing::info!("Loaded simulation config from {}", path.display());
        Ok(config)
    }

    /// Checks that every value is physically meaningful.
    ///
    /// # Errors
    ///
    /// Returns the first violation found.
    pub fn validate(&self) -> SimResult<()> {
        self.world.dimensions().validate()?;
        self.generation.validate()?;

        non_negative("physics.gravity", self.physics.gravity)?;
        non_negative("physics.move_damping", self.physics.move_damping)?;
        non_negative("physics.fly_damping", self.physics.fly_damping)?;
        non_negative("physics.collision_epsilon", self.physics.collision_epsilon)?;
        if self.physics.collision_epsilon >= self.world.tile_size {
            return Err(SimError::InvalidConfig(format!(
                "physics.collision_epsilon ({}) must be smaller than a tile ({})",
                self.physics.collision_epsilon, self.world.tile_size
            )));
        }
        if self.physics.max_underground_y <= self.world.ground_level {
            return Err(SimError::InvalidConfig(format!(
                "physics.max_underground_y ({}) must lie below the ground level ({})",
                self.physics.max_underground_y, self.world.ground_level
            )));
        }

        if self.heat.max_temperature < self.heat.base_temperature {
            return Err(SimError::InvalidConfig(format!(
                "heat.max_temperature ({}) is below heat.base_temperature ({})",
                self.heat.max_temperature, self.heat.base_temperature
            )));
        }
        non_negative("heat.base_dps", self.heat.base_dps)?;
        positive("heat.divisor", self.heat.divisor)?;
        positive("heat.exponent", self.heat.exponent)?;

        non_negative("fall.threshold", self.fall.threshold)?;
        positive("fall.divisor", self.fall.divisor)?;

        positive("excavation.min_duration", self.excavation.min_duration)?;
        if self.excavation.max_duration < self.excavation.min_duration {
            return Err(SimError::InvalidConfig(format!(
                "excavation.max_duration ({}) is shorter than excavation.min_duration ({})",
                self.excavation.max_duration, self.excavation.min_duration
            )));
        }

        non_negative("fuel.moving_rate", self.fuel.moving_rate)?;
        non_negative("fuel.idle_rate", self.fuel.idle_rate)?;

        positive("miner.width", self.miner.width)?;
        positive("miner.height", self.miner.height)?;
        if self.miner.width > self.world.width {
            return Err(SimError::InvalidConfig(format!(
                "miner.width ({}) exceeds the world width ({})",
                self.miner.width, self.world.width
            )));
        }
        positive("miner.max_speed", self.miner.max_speed)?;
        non_negative("miner.acceleration", self.miner.acceleration)?;
        non_negative("miner.fly_acceleration", self.miner.fly_acceleration)?;
        non_negative("miner.max_ascent_speed", self.miner.max_ascent_speed)?;
        positive("miner.hull", self.miner.hull)?;
        non_negative("miner.fuel_capacity", self.miner.fuel_capacity)?;

        Ok(())
    }
}

fn positive(name: &str, value: f32) -> SimResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(SimError::InvalidConfig(format!("{name} must be positive, got {value}")))
    }
}

fn non_negative(name: &str, value: f32) -> SimResult<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(SimError::InvalidConfig(format!("{name} must be non-negative, got {value}")))
    }
}
