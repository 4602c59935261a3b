//! # Terrain Generator
//!
//! Pure function from `(seed, tile)` to a material.
//!
//! ## Algorithm
//!
//! ```text
//! row <  ground row  -> Empty (sky)
//! row == ground row  -> Ground (the surface is always solid)
//! row >  ground row  -> draw r in [0,1) from the tile's own RNG
//!     r < empty                -> Empty
//!     r < empty + ground       -> Ground
//!     otherwise (ore roll)     -> Gaussian-weighted ore for this row,
//!                                 Ground if no ore has weight here
//! ```
//!
//! The two thresholds are cumulative: with 0.20 / 0.65 the split is
//! 20% empty, 65% ground, 15% ore rolls.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::catalog::{Material, OreKind, OreProfile, ORE_KIND_COUNT};
use crate::chunk::TileCoord;
use crate::error::{GenerationError, GenerationResult};
use crate::seed::WorldSeed;

/// Tunable terrain statistics.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationParams {
    /// Share of underground tiles that are air pockets.
    pub empty_rate: f32,
    /// Share of underground tiles that are plain ground.
    pub ground_rate: f32,
    /// Ore weights below this are treated as zero.
    pub negligible_weight: f32,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            empty_rate: 0.20,
            ground_rate: 0.65,
            negligible_weight: 0.01,
        }
    }
}

impl GenerationParams {
    /// Checks that the rates form a valid partition of `[0, 1)`.
    ///
    /// # Errors
    ///
    /// Returns an error if a rate is outside `[0, 1]` or the two rates sum
    /// past 1.
    pub fn validate(&self) -> GenerationResult<()> {
        for (name, value) in [
            ("empty_rate", self.empty_rate),
            ("ground_rate", self.ground_rate),
            ("negligible_weight", self.negligible_weight),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(GenerationError::RateOutOfRange { name, value });
            }
        }
        if self.empty_rate + self.ground_rate > 1.0 {
            return Err(GenerationError::RatesExceedOne {
                empty: self.empty_rate,
                ground: self.ground_rate,
            });
        }
        Ok(())
    }
}

/// Gaussian weight of an ore profile at a tile row.
#[must_use]
pub fn gaussian_weight(profile: &OreProfile, row: f32) -> f32 {
    let distance = f64::from(row - profile.peak_depth);
    let sigma = f64::from(profile.sigma);
    let exponent = -(distance * distance) / (2.0 * sigma * sigma);
    profile.max_weight * exponent.exp() as f32
}

/// Deterministic tile generator.
///
/// Holds no mutable state: any tile can be generated at any time, in any
/// order, any number of times, with the same result.
#[derive(Clone, Debug)]
pub struct TerrainGenerator {
    /// World seed.
    seed: WorldSeed,
    /// Tile row of the surface.
    ground_row: i32,
    /// Terrain statistics.
    params: GenerationParams,
}

impl TerrainGenerator {
    /// Creates a generator.
    ///
    /// # Errors
    ///
    /// Returns an error if `params` fail validation.
    pub fn new(seed: WorldSeed, ground_row: i32, params: GenerationParams) -> GenerationResult<Self> {
        params.validate()?;
        Ok(Self { seed, ground_row, params })
    }

    /// Generator with default statistics.
    #[must_use]
    pub fn with_defaults(seed: WorldSeed, ground_row: i32) -> Self {
        Self {
            seed,
            ground_row,
            params: GenerationParams::default(),
        }
    }

    /// The world seed.
    #[inline]
    #[must_use]
    pub const fn seed(&self) -> WorldSeed {
        self.seed
    }

    /// The surface row.
    #[inline]
    #[must_use]
    pub const fn ground_row(&self) -> i32 {
        self.ground_row
    }

    /// Generates the material at a tile.
    #[must_use]
    pub fn generate(&self, tile: TileCoord) -> Material {
        if tile.y < self.ground_row {
            return Material::Empty;
        }
        if tile.y == self.ground_row {
            return Material::Ground;
        }

        let mut rng = self.seed.tile_rng(tile);

        let roll: f32 = rng.gen();
        if roll < self.params.empty_rate {
            return Material::Empty;
        }
        if roll < self.params.empty_rate + self.params.ground_rate {
            return Material::Ground;
        }

        let weights = self.ore_weights(tile.y);
        let total: f32 = weights.iter().sum();
        if total < self.params.negligible_weight {
            return Material::Ground;
        }

        let mut remainder = rng.gen::<f32>() * total;
        for kind in OreKind::ALL {
            let weight = weights[kind.index()];
            if weight == 0.0 {
                continue;
            }
            remainder -= weight;
            if remainder <= 0.0 {
                return Material::Ore(kind);
            }
        }

        // Float rounding left a sliver past the last weight.
        Material::Ground
    }

    /// Spawn weight of every ore kind at a row, in `OreKind::ALL` order.
    ///
    /// Weights below the negligible threshold are reported as zero.
    #[must_use]
    pub fn ore_weights(&self, row: i32) -> [f32; ORE_KIND_COUNT] {
        let mut weights = [0.0; ORE_KIND_COUNT];
        for kind in OreKind::ALL {
            let weight = gaussian_weight(&kind.profile(), row as f32);
            if weight >= self.params.negligible_weight {
                weights[kind.index()] = weight;
            }
        }
        weights
    }
}
