//! # World Grid
//!
//! Sparse, chunked store of every solid tile in the world.
//!
//! The grid is the exclusive owner of mutable terrain state. Tiles come
//! into existence when their chunk is first touched (lazy generation) and
//! leave when they are dug out. Air is never stored: a missing entry IS
//! an empty tile.
//!
//! ## Coordinates
//!
//! ```text
//! pixel (px, py) --floor(/ tile_size)--> grid (x, y) --div_euclid(16)--> chunk
//! ```
//!
//! A grid cell is inside the world when its top-left pixel lies in
//! `[0, width) x [0, height)`. Everything outside behaves as air: lookups
//! return `None`, digs are refused, nothing is ever generated there.

use std::collections::{HashMap, HashSet};

use deepdrill_shared::Aabb;
use serde::{Deserialize, Serialize};

use crate::catalog::{Material, Tile};
use crate::chunk::{ChunkCoord, TileCoord};
use crate::error::{GenerationError, GenerationResult};
use crate::generator::{GenerationParams, TerrainGenerator};
use crate::seed::WorldSeed;

// =============================================================================
// DIMENSIONS
// =============================================================================

/// Pixel extents of the world.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldDimensions {
    /// World width in pixels.
    pub width: f32,
    /// World height in pixels (how deep the world goes).
    pub height: f32,
    /// Pixel Y of the surface.
    pub ground_level: f32,
    /// Edge length of one square tile in pixels.
    pub tile_size: f32,
}

impl Default for WorldDimensions {
    fn default() -> Self {
        Self {
            width: 7_680.0,
            height: 64_000.0,
            ground_level: 640.0,
            tile_size: 64.0,
        }
    }
}

impl WorldDimensions {
    /// Tile row of the surface.
    #[inline]
    #[must_use]
    pub fn ground_row(&self) -> i32 {
        (self.ground_level / self.tile_size).floor() as i32
    }

    /// Checks every extent is usable.
    ///
    /// # Errors
    ///
    /// Returns an error for a non-positive or non-finite extent, or a
    /// ground level outside `[0, height)`.
    pub fn validate(&self) -> GenerationResult<()> {
        for (name, value) in [
            ("width", self.width),
            ("height", self.height),
            ("tile_size", self.tile_size),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(GenerationError::InvalidDimension { name, value });
            }
        }
        if !self.ground_level.is_finite() || self.ground_level < 0.0 || self.ground_level >= self.height {
            return Err(GenerationError::GroundOutsideWorld {
                ground_level: self.ground_level,
                height: self.height,
            });
        }
        Ok(())
    }
}

// =============================================================================
// WORLD GRID
// =============================================================================

/// Chunked sparse tile store with lazy generation.
///
/// Lookups generate terrain, so they take `&mut self`: one owner drives
/// the grid, one step at a time.
#[derive(Debug)]
pub struct WorldGrid {
    dimensions: WorldDimensions,
    generator: TerrainGenerator,
    /// Solid tiles only.
    tiles: HashMap<TileCoord, Tile>,
    loaded_chunks: HashSet<ChunkCoord>,
}

impl WorldGrid {
    /// Creates an empty grid with default generation statistics.
    ///
    /// Dimensions are taken as given; use [`WorldGrid::try_new`] to
    /// validate them.
    #[must_use]
    pub fn new(dimensions: WorldDimensions, seed: WorldSeed) -> Self {
        let generator = TerrainGenerator::with_defaults(seed, dimensions.ground_row());
        Self::with_generator(dimensions, generator)
    }

    /// Creates an empty grid after validating dimensions and statistics.
    ///
    /// # Errors
    ///
    /// Returns an error if either the dimensions or the generation
    /// parameters are invalid.
    pub fn try_new(
        dimensions: WorldDimensions,
        seed: WorldSeed,
        params: GenerationParams,
    ) -> GenerationResult<Self> {
        dimensions.validate()?;
        let generator = TerrainGenerator::new(seed, dimensions.ground_row(), params)?;
        Ok(Self::with_generator(dimensions, generator))
    }

    fn with_generator(dimensions: WorldDimensions, generator: TerrainGenerator) -> Self {
        tracing::info!(
            "World grid created: seed={}, {}x{} px, ground row {}, tile {} px",
            generator.seed().value(),
            dimensions.width,
            dimensions.height,
            generator.ground_row(),
            dimensions.tile_size
        );

        Self {
            dimensions,
            generator,
            tiles: HashMap::new(),
            loaded_chunks: HashSet::new(),
        }
    }

    // =========================================================================
    // Chunk loading
    // =========================================================================

    /// Materializes a chunk if it has not been loaded yet.
    ///
    /// Returns `true` if this call generated the chunk. Repeat calls are
    /// no-ops and return `false`.
    pub fn ensure_chunk_loaded(&mut self, chunk: ChunkCoord) -> bool {
        if !self.loaded_chunks.insert(chunk) {
            return false;
        }

        let mut inserted = 0usize;
        for coord in chunk.tiles() {
            if !self.is_grid_in_bounds(coord.x, coord.y) {
                continue;
            }
            if let Some(tile) = Tile::from_material(self.generator.generate(coord)) {
                self.tiles.insert(coord, tile);
                inserted += 1;
            }
        }

        tracing::debug!("Chunk ({}, {}) loaded: {} solid tiles", chunk.x, chunk.y, inserted);
        true
    }

    /// Loads the 3x3 block of chunks centred on the chunk holding a pixel.
    ///
    /// Returns how many chunks were newly generated.
    pub fn update_chunks_around_player(&mut self, pixel_x: f32, pixel_y: f32) -> usize {
        let centre = self.pixel_to_grid(pixel_x, pixel_y).chunk();
        centre
            .neighbourhood()
            .filter(|chunk| self.ensure_chunk_loaded(*chunk))
            .count()
    }

    /// Whether a chunk has been materialized.
    #[inline]
    #[must_use]
    pub fn is_chunk_loaded(&self, chunk: ChunkCoord) -> bool {
        self.loaded_chunks.contains(&chunk)
    }

    /// Number of materialized chunks.
    #[inline]
    #[must_use]
    pub fn loaded_chunk_count(&self) -> usize {
        self.loaded_chunks.len()
    }

    // =========================================================================
    // Lookup
    // =========================================================================

    /// Tile at a pixel position, loading its chunk if needed.
    pub fn get_tile_at(&mut self, pixel_x: f32, pixel_y: f32) -> Option<Tile> {
        let coord = self.pixel_to_grid(pixel_x, pixel_y);
        self.get_tile_at_grid(coord.x, coord.y)
    }

    /// Tile at a grid cell, loading its chunk if needed.
    ///
    /// `None` means air, including every cell outside the world.
    pub fn get_tile_at_grid(&mut self, x: i32, y: i32) -> Option<Tile> {
        if !self.is_grid_in_bounds(x, y) {
            return None;
        }
        let coord = TileCoord::new(x, y);
        self.ensure_chunk_loaded(coord.chunk());
        self.tiles.get(&coord).copied()
    }

    /// Whether the tile at a pixel position blocks movement.
    pub fn is_tile_solid(&mut self, pixel_x: f32, pixel_y: f32) -> bool {
        self.get_tile_at(pixel_x, pixel_y).is_some_and(Tile::is_solid)
    }

    /// Whether a pixel lies inside the world, edges included.
    #[inline]
    #[must_use]
    pub fn is_in_bounds(&self, pixel_x: f32, pixel_y: f32) -> bool {
        (0.0..=self.dimensions.width).contains(&pixel_x) && (0.0..=self.dimensions.height).contains(&pixel_y)
    }

    /// Whether a grid cell lies inside the world.
    #[inline]
    #[must_use]
    pub fn is_grid_in_bounds(&self, x: i32, y: i32) -> bool {
        let ts = self.dimensions.tile_size;
        x >= 0 && y >= 0 && (x as f32) * ts < self.dimensions.width && (y as f32) * ts < self.dimensions.height
    }

    // =========================================================================
    // Mutation
    // =========================================================================

    /// Removes an excavable tile and returns it.
    ///
    /// `None` when the cell is air, out of bounds or not excavable; the grid
    /// is left untouched in that case.
    pub fn dig_tile_at_grid(&mut self, x: i32, y: i32) -> Option<Tile> {
        if !self.is_grid_in_bounds(x, y) {
            return None;
        }
        let coord = TileCoord::new(x, y);
        // Load first, or the chunk would regenerate the tile later.
        self.ensure_chunk_loaded(coord.chunk());

        match self.tiles.get(&coord) {
            Some(tile) if tile.is_excavable() => self.tiles.remove(&coord),
            _ => None,
        }
    }

    /// Same as [`WorldGrid::dig_tile_at_grid`].
    #[inline]
    pub fn drill_tile_at_grid(&mut self, x: i32, y: i32) -> Option<Tile> {
        self.dig_tile_at_grid(x, y)
    }

    /// Removes the excavable tile at a pixel position.
    pub fn dig_tile_at(&mut self, pixel_x: f32, pixel_y: f32) -> Option<Tile> {
        let coord = self.pixel_to_grid(pixel_x, pixel_y);
        self.dig_tile_at_grid(coord.x, coord.y)
    }

    /// Overwrites a cell, returning what was there.
    ///
    /// `Material::Empty` removes the entry. Cells outside the world are
    /// ignored.
    pub fn set_tile_at_grid(&mut self, x: i32, y: i32, material: Material) -> Option<Tile> {
        if !self.is_grid_in_bounds(x, y) {
            return None;
        }
        let coord = TileCoord::new(x, y);
        self.ensure_chunk_loaded(coord.chunk());

        match Tile::from_material(material) {
            Some(tile) => self.tiles.insert(coord, tile),
            None => self.tiles.remove(&coord),
        }
    }

    // =========================================================================
    // Views
    // =========================================================================

    /// Every stored tile, in no particular order.
    pub fn tiles(&self) -> impl Iterator<Item = (TileCoord, Tile)> + '_ {
        self.tiles.iter().map(|(coord, tile)| (*coord, *tile))
    }

    /// Number of stored (solid) tiles.
    #[inline]
    #[must_use]
    pub fn tile_count(&self) -> usize {
        self.tiles.len()
    }

    /// Grid cell containing a pixel (floor division).
    #[inline]
    #[must_use]
    pub fn pixel_to_grid(&self, pixel_x: f32, pixel_y: f32) -> TileCoord {
        let ts = self.dimensions.tile_size;
        TileCoord::new((pixel_x / ts).floor() as i32, (pixel_y / ts).floor() as i32)
    }

    /// Pixel box of a grid cell.
    #[inline]
    #[must_use]
    pub fn tile_aabb(&self, x: i32, y: i32) -> Aabb {
        Aabb::from_tile(x, y, self.dimensions.tile_size)
    }

    /// World extents.
    #[inline]
    #[must_use]
    pub const fn dimensions(&self) -> &WorldDimensions {
        &self.dimensions
    }

    /// World seed.
    #[inline]
    #[must_use]
    pub const fn seed(&self) -> WorldSeed {
        self.generator.seed()
    }

    /// Tile edge length in pixels.
    #[inline]
    #[must_use]
    pub const fn tile_size(&self) -> f32 {
        self.dimensions.tile_size
    }

    /// Pixel Y of the surface.
    #[inline]
    #[must_use]
    pub const fn ground_level(&self) -> f32 {
        self.dimensions.ground_level
    }

    /// Tile row of the surface.
    #[inline]
    #[must_use]
    pub const fn ground_row(&self) -> i32 {
        self.generator.ground_row()
    }

    /// The terrain generator backing this grid.
    #[inline]
    #[must_use]
    pub const fn generator(&self) -> &TerrainGenerator {
        &self.generator
    }
}
