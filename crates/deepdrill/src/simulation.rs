//! # Simulation
//!
//! The per-step entry point: one world, one excavation controller, any
//! body that can move, dig and take damage.
//!
//! ## Step order
//!
//! ```text
//! 1. load the 3x3 chunks around the body
//! 2. excavation update           (may own the whole step)
//! 3. free motion + fall damage   (skipped while excavating)
//! 4. heat damage                 (always)
//! 5. fuel drain                  (always)
//! ```

use deepdrill_procedural::WorldGrid;
use deepdrill_shared::Vec2;

use crate::body::{Excavator, Miner, Vitals};
use crate::config::SimConfig;
use crate::error::SimResult;
use crate::excavation::{ExcavationController, ExcavationEvent};
use crate::intent::Intent;
use crate::physics::{self, fall_damage, fuel_drain, heat_damage_rate, temperature};

/// What happened to the body during one step.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct StepReport {
    /// Resting on terrain after the step.
    pub grounded: bool,
    /// Touched down this step.
    pub landed: bool,
    /// Hull lost to the landing.
    pub fall_damage: f32,
    /// Hull lost to heat.
    pub heat_damage: f32,
    /// Ambient temperature at the body, °C.
    pub temperature: f32,
    /// Litres burned.
    pub fuel_used: f32,
    /// Dig started or finished.
    pub excavation: Option<ExcavationEvent>,
}

/// Owns the world and drives bodies through it.
#[derive(Debug)]
pub struct Simulation {
    grid: WorldGrid,
    excavation: ExcavationController,
    config: SimConfig,
}

impl Simulation {
    /// Validates `config` and builds its world.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn new(config: SimConfig) -> SimResult<Self> {
        config.validate()?;
        let grid = WorldGrid::try_new(config.world.dimensions(), config.world.seed(), config.generation)?;
        let excavation = ExcavationController::new(config.excavation, config.physics.max_underground_y);

        Ok(Self {
            grid,
            excavation,
            config,
        })
    }

    /// Parses a TOML configuration and builds its world.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is malformed or invalid.
    pub fn from_toml_str(source: &str) -> SimResult<Self> {
        Self::new(SimConfig::from_toml_str(source)?)
    }

    /// Top-left corner for a body resting on the surface at the world's
    /// horizontal centre.
    #[must_use]
    pub fn spawn_point(&self) -> Vec2 {
        let miner = &self.config.miner;
        let dims = self.grid.dimensions();
        Vec2::new((dims.width - miner.width) / 2.0, dims.ground_level - miner.height)
    }

    /// A fresh miner at the spawn point.
    #[must_use]
    pub fn spawn_miner(&self) -> Miner {
        Miner::new(self.spawn_point(), &self.config.miner)
    }

    /// Advances `body` by `dt` seconds.
    pub fn step<B: Excavator + Vitals + ?Sized>(&mut self, body: &mut B, intent: Intent, dt: f32) -> StepReport {
        let centre = body.aabb().center();
        self.grid.update_chunks_around_player(centre.x, centre.y);

        let mut report = StepReport::default();

        let outcome = self.excavation.update(body, &mut self.grid, intent, dt);
        report.excavation = outcome.event;

        if !outcome.consumed {
            let motion = physics::advance(body, &mut self.grid, intent, &self.config.physics, dt);
            report.landed = motion.landed;

            if motion.landed {
                let damage = fall_damage(motion.impact_speed, &self.config.fall);
                if damage > 0.0 {
                    report.fall_damage = body.take_damage(damage);
                    tracing::debug!(
                        "Hard landing at {:.0} px/s: {:.2} damage, hull {:.2}",
                        motion.impact_speed,
                        report.fall_damage,
                        body.hull()
                    );
                }
            }
        }
        report.grounded = body.on_ground();

        let heat = &self.config.heat;
        let dims = self.grid.dimensions();
        report.temperature = temperature(body.aabb().y, dims.ground_level, self.config.physics.max_underground_y, heat);
        let rate = heat_damage_rate(report.temperature, body.heat_resistance(), heat);
        if rate > 0.0 {
            report.heat_damage = body.take_damage(rate * dt);
        }

        report.fuel_used = body.burn_fuel(fuel_drain(intent, &self.config.fuel, dt));

        report
    }

    /// The world.
    #[inline]
    #[must_use]
    pub const fn grid(&self) -> &WorldGrid {
        &self.grid
    }

    /// The world, for external edits (blasts, scenario setup).
    #[inline]
    pub fn grid_mut(&mut self) -> &mut WorldGrid {
        &mut self.grid
    }

    /// The excavation controller.
    #[inline]
    #[must_use]
    pub const fn excavation(&self) -> &ExcavationController {
        &self.excavation
    }

    /// The active configuration.
    #[inline]
    #[must_use]
    pub const fn config(&self) -> &SimConfig {
        &self.config
    }
}
