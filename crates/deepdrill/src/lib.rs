//! # DEEPDRILL
//!
//! Side-view mining simulation: a body digs its way through an effectively
//! infinite terrain grid while falls and heat wear down its hull.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────────┐
//! │                        Simulation::step                          │
//! ├──────────────────────────────────────────────────────────────────┤
//! │                                                                  │
//! │  Intent ──> ┌──────────────────────┐  consumed? ──yes──┐        │
//! │             │ ExcavationController │                   │        │
//! │             │  Idle | Animating    │                   │        │
//! │             └──────────┬───────────┘                   │        │
//! │                        │ no                            │        │
//! │                        v                               │        │
//! │             ┌──────────────────────┐                   │        │
//! │             │ movement + gravity   │                   │        │
//! │             │ X pass, Y pass       │                   │        │
//! │             │ world clamp, landing │                   │        │
//! │             └──────────┬───────────┘                   │        │
//! │                        v                               v        │
//! │             ┌──────────────────────────────────────────────┐    │
//! │             │ heat damage, fuel drain                      │    │
//! │             └──────────────────────────────────────────────┘    │
//! │                                                                  │
//! │  WorldGrid (deepdrill_procedural): lazy chunks, sparse tiles     │
//! └──────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - `body`: capability traits and the default `Miner`
//! - `physics`: movement rules, collision resolver, hazards
//! - `excavation`: the dig state machine
//! - `blast`: area removal for explosives
//! - `simulation`: the step entry point
//! - `config`: TOML configuration
//!
//! ## Example
//!
//! ```rust,ignore
//! use deepdrill::{Intent, SimConfig, Simulation};
//!
//! let mut sim = Simulation::new(SimConfig::default())?;
//! let mut miner = sim.spawn_miner();
//!
//! let report = sim.step(&mut miner, Intent::dig(), 1.0 / 60.0);
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod blast;
pub mod body;
pub mod cargo;
pub mod config;
pub mod error;
pub mod excavation;
pub mod intent;
pub mod physics;
pub mod simulation;

pub use blast::{blast, LARGE_BLAST_RADIUS, SMALL_BLAST_RADIUS};
pub use body::{Excavator, Kinematic, Miner, Vitals};
pub use cargo::CargoHold;
pub use config::{
    ExcavationConfig, FallConfig, FuelConfig, HeatConfig, MinerConfig, PhysicsConfig, SimConfig,
    WorldConfig,
};
pub use error::{SimError, SimResult};
pub use excavation::{
    Animation, Direction, ExcavationController, ExcavationEvent, ExcavationOutcome, ExcavationState,
};
pub use intent::Intent;
pub use physics::{Drive, Motion};
pub use simulation::{Simulation, StepReport};

// Re-export the terrain crates
pub use deepdrill_procedural as procedural;
pub use deepdrill_shared as shared;
