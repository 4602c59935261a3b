//! # DEEPDRILL Procedural Generation
//!
//! Deterministic terrain for an effectively infinite, depth-increasing
//! mining world.
//!
//! ## Design Principles
//!
//! 1. **Deterministic**: Same seed always produces the same world
//! 2. **Order independent**: Every tile draws from its own freshly seeded RNG
//! 3. **Chunked**: Tiles are materialized lazily, one 16x16 chunk at a time
//! 4. **Sparse**: Only solid tiles are stored; absence means air
//!
//! ## Core Components
//!
//! - `OreKind` / `Material`: the tile catalog
//! - `TerrainGenerator`: `(seed, tile) -> Material`
//! - `WorldGrid`: exclusive owner of all mutable terrain state
//!
//! ## Example
//!
//! ```rust,ignore
//! use deepdrill_procedural::{WorldDimensions, WorldGrid, WorldSeed};
//!
//! let mut grid = WorldGrid::new(WorldDimensions::default(), WorldSeed::new(42));
//!
//! // Body near the surface
//! grid.update_chunks_around_player(3840.0, 600.0);
//!
//! // The ground row is always solid
//! assert!(grid.is_tile_solid(3840.0, 650.0));
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod catalog;
pub mod chunk;
pub mod error;
pub mod generator;
pub mod grid;
pub mod seed;

pub use catalog::{Material, OreKind, OreProfile, Tile, ORE_KIND_COUNT};
pub use chunk::{ChunkCoord, TileCoord, CHUNK_SIZE};
pub use error::{GenerationError, GenerationResult};
pub use generator::{GenerationParams, TerrainGenerator};
pub use grid::{WorldDimensions, WorldGrid};
pub use seed::WorldSeed;
