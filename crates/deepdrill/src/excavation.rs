//! # Excavation Controller
//!
//! Timed dig state machine.
//!
//! ## States
//!
//! - **Idle**: no dig running. A grounded body with a dig intent (down) or
//!   a horizontal intent (left/right) facing an excavable tile starts one.
//! - **Animating**: the body slides from where it stood to the tile's
//!   aligned position over `duration` seconds. When time runs out the tile
//!   is removed, ore is stowed if there is room, and the state returns to
//!   Idle.
//!
//! ## Rules
//!
//! - Down is checked first. With a dig intent, horizontal intents are not
//!   looked at in the same step.
//! - While animating, every intent is ignored and velocity stays zero.
//! - A started dig always runs to completion.
//!
//! ## Duration
//!
//! ```text
//! base     = lerp(min_duration, max_duration, depth fraction of the tile)
//! duration = base * hardness    (ore)
//! duration = base               (ground)
//! ```

use deepdrill_procedural::{Material, OreKind, TileCoord, WorldGrid};
use deepdrill_shared::Vec2;

use crate::body::Excavator;
use crate::config::ExcavationConfig;
use crate::intent::Intent;
use crate::physics::normalized_depth;

/// Which neighbour is being dug.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    /// Tile under the body's centre.
    Down,
    /// Tile past the left edge.
    Left,
    /// Tile past the right edge.
    Right,
}

/// An in-flight dig.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Animation {
    /// Dig direction.
    pub direction: Direction,
    /// Body position when the dig started.
    pub start: Vec2,
    /// Body position when the dig ends.
    pub target: Vec2,
    /// Tile being removed.
    pub tile: TileCoord,
    /// What the tile is made of.
    pub material: Material,
    /// Seconds since start.
    pub elapsed: f32,
    /// Seconds to finish.
    pub duration: f32,
}

impl Animation {
    /// Completion fraction in `[0, 1]`.
    #[must_use]
    pub fn progress(&self) -> f32 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        (self.elapsed / self.duration).min(1.0)
    }
}

/// Controller state.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum ExcavationState {
    /// Nothing running.
    #[default]
    Idle,
    /// A dig is in progress.
    Animating(Animation),
}

/// Something noteworthy that happened during an update.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ExcavationEvent {
    /// A dig began this step.
    Started {
        /// Dig direction.
        direction: Direction,
        /// Target tile.
        tile: TileCoord,
        /// Seconds it will take.
        duration: f32,
    },
    /// A dig finished this step.
    Completed {
        /// Removed tile.
        tile: TileCoord,
        /// Ore the tile held, if any.
        ore: Option<OreKind>,
        /// Ore was lost because the cargo hold was full.
        discarded: bool,
    },
}

/// What an update did.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ExcavationOutcome {
    /// The controller owned the body this step; skip free motion.
    pub consumed: bool,
    /// Start or completion, if either happened.
    pub event: Option<ExcavationEvent>,
}

/// Runs at most one dig at a time.
#[derive(Clone, Debug)]
pub struct ExcavationController {
    state: ExcavationState,
    config: ExcavationConfig,
    /// Pixel Y of maximum depth.
    max_underground_y: f32,
}

impl ExcavationController {
    /// Creates an idle controller.
    #[must_use]
    pub fn new(config: ExcavationConfig, max_underground_y: f32) -> Self {
        Self {
            state: ExcavationState::Idle,
            config,
            max_underground_y,
        }
    }

    /// Current state.
    #[inline]
    #[must_use]
    pub const fn state(&self) -> &ExcavationState {
        &self.state
    }

    /// A dig is in progress.
    #[inline]
    #[must_use]
    pub const fn is_animating(&self) -> bool {
        matches!(self.state, ExcavationState::Animating(_))
    }

    /// Seconds to dig ground whose top edge sits at pixel `tile_y`.
    #[must_use]
    pub fn base_duration(&self, tile_y: f32, ground_level: f32) -> f32 {
        let depth = normalized_depth(tile_y, ground_level, self.max_underground_y);
        self.config.min_duration + depth * (self.config.max_duration - self.config.min_duration)
    }

    /// Seconds to dig a tile of `material` whose top edge sits at `tile_y`.
    #[must_use]
    pub fn duration_for(&self, tile_y: f32, ground_level: f32, material: Material) -> f32 {
        let base = self.base_duration(tile_y, ground_level);
        match material {
            Material::Ore(kind) => base * kind.hardness(),
            _ => base,
        }
    }

    /// Advances the state machine by one step.
    pub fn update<B: Excavator + ?Sized>(
        &mut self,
        body: &mut B,
        grid: &mut WorldGrid,
        intent: Intent,
        dt: f32,
    ) -> ExcavationOutcome {
        if let ExcavationState::Animating(animation) = &mut self.state {
            animation.elapsed += dt;
            let progress = animation.progress();
            body.set_position(animation.start.lerp(animation.target, progress));
            body.set_velocity(Vec2::ZERO);

            let event = if progress >= 1.0 {
                let finished = *animation;
                Some(self.finish(body, grid, &finished))
            } else {
                None
            };
            return ExcavationOutcome { consumed: true, event };
        }

        if !body.on_ground() {
            return ExcavationOutcome::default();
        }

        let started = if intent.dig {
            self.try_start(body, grid, Direction::Down)
        } else {
            match intent.horizontal() {
                -1 => self.try_start(body, grid, Direction::Left),
                1 => self.try_start(body, grid, Direction::Right),
                _ => None,
            }
        };

        ExcavationOutcome {
            consumed: started.is_some(),
            event: started,
        }
    }

    fn try_start<B: Excavator + ?Sized>(
        &mut self,
        body: &mut B,
        grid: &mut WorldGrid,
        direction: Direction,
    ) -> Option<ExcavationEvent> {
        let aabb = body.aabb();
        let centre = aabb.center();
        let probe = match direction {
            Direction::Down => Vec2::new(centre.x, aabb.bottom()),
            Direction::Left => Vec2::new(aabb.x - 1.0, centre.y),
            Direction::Right => Vec2::new(aabb.right() + 1.0, centre.y),
        };

        let tile_coord = grid.pixel_to_grid(probe.x, probe.y);
        let tile = grid.get_tile_at_grid(tile_coord.x, tile_coord.y)?;
        if !tile.is_excavable() {
            return None;
        }

        let ts = grid.tile_size();
        let tile_box = grid.tile_aabb(tile_coord.x, tile_coord.y);
        let aligned_x = tile_box.center().x - aabb.width / 2.0;
        let target = match direction {
            Direction::Down => Vec2::new(aligned_x, tile_box.y + ts - aabb.height),
            Direction::Left | Direction::Right => Vec2::new(aligned_x, aabb.y),
        };
        let duration = self.duration_for(tile_box.y, grid.ground_level(), tile.material);

        self.state = ExcavationState::Animating(Animation {
            direction,
            start: aabb.min(),
            target,
            tile: tile_coord,
            material: tile.material,
            elapsed: 0.0,
            duration,
        });
        body.set_excavating(true);
        body.set_velocity(Vec2::ZERO);

        tracing::debug!(
            "Excavation started: {:?} at ({}, {}), {:.2}s",
            direction,
            tile_coord.x,
            tile_coord.y,
            duration
        );

        Some(ExcavationEvent::Started {
            direction,
            tile: tile_coord,
            duration,
        })
    }

    fn finish<B: Excavator + ?Sized>(
        &mut self,
        body: &mut B,
        grid: &mut WorldGrid,
        animation: &Animation,
    ) -> ExcavationEvent {
        let ore = grid
            .drill_tile_at_grid(animation.tile.x, animation.tile.y)
            .and_then(|tile| tile.material.ore());

        let discarded = match ore {
            Some(kind) if !body.stow_ore(kind) => {
                tracing::warn!(
                    "Cargo full: discarded {} from ({}, {})",
                    kind,
                    animation.tile.x,
                    animation.tile.y
                );
                true
            }
            _ => false,
        };

        tracing::info!(
            "Excavation completed at ({}, {}): {}",
            animation.tile.x,
            animation.tile.y,
            ore.map_or("ground", OreKind::name)
        );

        self.state = ExcavationState::Idle;
        body.set_position(animation.target);
        body.set_excavating(false);
        body.set_velocity(Vec2::ZERO);

        ExcavationEvent::Completed {
            tile: animation.tile,
            ore,
            discarded,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::body::{Kinematic, Miner};
    use crate::config::{MinerConfig, PhysicsConfig};
    use deepdrill_procedural::{Tile, WorldDimensions, WorldSeed};
    use deepdrill_shared::Aabb;

    const GROUND: f32 = 640.0;

    fn controller() -> ExcavationController {
        ExcavationController::new(ExcavationConfig::default(), PhysicsConfig::default().max_underground_y)
    }

    fn grid() -> WorldGrid {
        WorldGrid::new(WorldDimensions::default(), WorldSeed::new(42))
    }

    /// Miner resting on the surface over column `col`, offset a little to
    /// the right so alignment is visible.
    fn grounded_miner(col: i32) -> Miner {
        let mut miner = Miner::new(Vec2::new(col as f32 * 64.0 + 3.0, GROUND - 54.0), &MinerConfig::default());
        miner.set_on_ground(true);
        miner
    }

    #[test]
    fn test_duration_monotonic_in_depth() {
        let ctrl = controller();
        let mut previous = 0.0;
        for row in 10..1_000 {
            let d = ctrl.duration_for(row as f32 * 64.0, GROUND, Material::Ground);
            assert!(d > previous, "row {row}: {d} <= {previous}");
            previous = d;
        }
        assert_eq!(ctrl.base_duration(GROUND, GROUND), 0.8);
        assert_eq!(ctrl.base_duration(64_000.0, GROUND), 30.0);
        assert_eq!(ctrl.base_duration(128_000.0, GROUND), 30.0, "clamped past max depth");
    }

    #[test]
    fn test_duration_hardness() {
        let ctrl = controller();
        let d = ctrl.duration_for(GROUND, GROUND, Material::Ore(OreKind::Platinum));
        assert!((d - 2.4).abs() < 1e-5);

        let depth = 5_000.0;
        let ground = ctrl.duration_for(depth, GROUND, Material::Ground);
        for kind in OreKind::ALL {
            let ore = ctrl.duration_for(depth, GROUND, Material::Ore(kind));
            assert!((ore - ground * kind.hardness()).abs() < 1e-4);
        }
    }

    #[test]
    fn test_dig_down_full_cycle() {
        let mut grid = grid();
        let mut ctrl = controller();
        let mut miner = grounded_miner(20);

        let outcome = ctrl.update(&mut miner, &mut grid, Intent::dig(), 0.016);
        assert!(outcome.consumed);
        let Some(ExcavationEvent::Started { direction, tile, duration }) = outcome.event else {
            panic!("expected a start, got {:?}", outcome.event);
        };
        assert_eq!(direction, Direction::Down);
        assert_eq!(tile, TileCoord::new(20, 10));
        assert_eq!(duration, 0.8);
        assert!(miner.is_excavating());
        assert!(ctrl.is_animating());

        // Halfway: position is the midpoint between start and target.
        let outcome = ctrl.update(&mut miner, &mut grid, Intent::NONE, 0.4);
        assert!(outcome.consumed);
        assert!(outcome.event.is_none());
        let target = Vec2::new(20.0 * 64.0 + 5.0, 704.0 - 54.0);
        let start = Vec2::new(20.0 * 64.0 + 3.0, GROUND - 54.0);
        let mid = start.lerp(target, 0.5);
        assert!((miner.position() - mid).length() < 1e-3);
        assert_eq!(miner.velocity(), Vec2::ZERO);

        let outcome = ctrl.update(&mut miner, &mut grid, Intent::NONE, 0.5);
        assert!(outcome.consumed);
        assert_eq!(
            outcome.event,
            Some(ExcavationEvent::Completed { tile: TileCoord::new(20, 10), ore: None, discarded: false })
        );
        assert_eq!(miner.position(), target);
        assert!(!miner.is_excavating());
        assert!(!ctrl.is_animating());
        assert_eq!(grid.get_tile_at_grid(20, 10), None);
    }

    #[test]
    fn test_completes_in_one_call_with_large_dt() {
        let mut grid = grid();
        let mut ctrl = controller();
        let mut miner = grounded_miner(5);

        ctrl.update(&mut miner, &mut grid, Intent::dig(), 0.016);
        let outcome = ctrl.update(&mut miner, &mut grid, Intent::NONE, 100.0);
        assert!(matches!(outcome.event, Some(ExcavationEvent::Completed { .. })));
        assert_eq!(grid.get_tile_at_grid(5, 10), None);
    }

    #[test]
    fn test_intents_ignored_while_animating() {
        let mut grid = grid();
        let mut ctrl = controller();
        let mut miner = grounded_miner(30);

        ctrl.update(&mut miner, &mut grid, Intent::dig(), 0.016);
        let before = *ctrl.state();
        ctrl.update(&mut miner, &mut grid, Intent::left(), 0.1);

        let (ExcavationState::Animating(a), ExcavationState::Animating(b)) = (before, *ctrl.state()) else {
            panic!("controller should still be animating");
        };
        assert_eq!(a.direction, b.direction);
        assert_eq!(a.tile, b.tile);
        assert!((b.elapsed - 0.1).abs() < 1e-6);
    }

    #[test]
    fn test_airborne_body_cannot_start() {
        let mut grid = grid();
        let mut ctrl = controller();
        let mut miner = grounded_miner(10);
        miner.set_on_ground(false);

        let outcome = ctrl.update(&mut miner, &mut grid, Intent::dig(), 0.016);
        assert_eq!(outcome, ExcavationOutcome::default());
        assert!(!miner.is_excavating());
    }

    #[test]
    fn test_air_below_does_not_start_or_fall_through_to_sideways() {
        let mut grid = grid();
        let mut ctrl = controller();
        let mut miner = grounded_miner(10);
        // Column under the centre is air (centre x = 10*64 + 30).
        grid.set_tile_at_grid(10, 10, Material::Empty);

        let outcome = ctrl.update(&mut miner, &mut grid, Intent { dig: true, right: true, ..Intent::NONE }, 0.016);
        assert!(!outcome.consumed);
        assert!(outcome.event.is_none());
    }

    #[test]
    fn test_dig_sideways() {
        let mut grid = grid();
        let mut ctrl = controller();
        // Body one row down, in a pocket at column 12 with a wall at 13.
        grid.set_tile_at_grid(12, 11, Material::Empty);
        grid.set_tile_at_grid(13, 11, Material::Ore(OreKind::Iron));
        grid.set_tile_at_grid(12, 12, Material::Ground);
        let mut miner = Miner::new(Vec2::new(12.0 * 64.0 + 10.0, 768.0 - 54.0), &MinerConfig::default());
        miner.set_on_ground(true);

        let outcome = ctrl.update(&mut miner, &mut grid, Intent::right(), 0.016);
        let Some(ExcavationEvent::Started { direction, tile, duration }) = outcome.event else {
            panic!("expected a start, got {:?}", outcome.event);
        };
        assert_eq!(direction, Direction::Right);
        assert_eq!(tile, TileCoord::new(13, 11));
        let expected = ctrl.duration_for(704.0, GROUND, Material::Ore(OreKind::Iron));
        assert!((duration - expected).abs() < 1e-6);

        let outcome = ctrl.update(&mut miner, &mut grid, Intent::NONE, duration + 0.01);
        assert_eq!(
            outcome.event,
            Some(ExcavationEvent::Completed { tile: TileCoord::new(13, 11), ore: Some(OreKind::Iron), discarded: false })
        );
        assert_eq!(miner.cargo.count(OreKind::Iron), 1);
        assert_eq!(miner.aabb(), Aabb::new(13.0 * 64.0 + 5.0, 768.0 - 54.0, 54.0, 54.0));
    }

    #[test]
    fn test_full_cargo_discards_ore() {
        let mut grid = grid();
        let mut ctrl = controller();
        let mut miner = grounded_miner(40);
        miner.cargo.set_capacity(1);
        assert!(miner.cargo.try_add(OreKind::Copper));
        grid.set_tile_at_grid(40, 10, Material::Ore(OreKind::Gold));

        ctrl.update(&mut miner, &mut grid, Intent::dig(), 0.016);
        let outcome = ctrl.update(&mut miner, &mut grid, Intent::NONE, 60.0);

        assert_eq!(
            outcome.event,
            Some(ExcavationEvent::Completed { tile: TileCoord::new(40, 10), ore: Some(OreKind::Gold), discarded: true })
        );
        assert_eq!(miner.cargo.total(), 1);
        assert_eq!(miner.cargo.count(OreKind::Gold), 0);
        assert_eq!(grid.get_tile_at_grid(40, 10), None, "tile is removed regardless");
    }

    #[test]
    fn test_tile_removed_externally_mid_dig() {
        let mut grid = grid();
        let mut ctrl = controller();
        let mut miner = grounded_miner(50);

        ctrl.update(&mut miner, &mut grid, Intent::dig(), 0.016);
        assert_eq!(grid.dig_tile_at_grid(50, 10), Some(Tile::GROUND));

        let outcome = ctrl.update(&mut miner, &mut grid, Intent::NONE, 10.0);
        assert_eq!(
            outcome.event,
            Some(ExcavationEvent::Completed { tile: TileCoord::new(50, 10), ore: None, discarded: false })
        );
        assert!(!miner.is_excavating());
    }
}
