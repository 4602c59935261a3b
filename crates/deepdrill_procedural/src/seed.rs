//! # World Seed and Tile Hashing
//!
//! Every underground tile gets its own RNG, seeded from a hash of the world
//! seed and the tile's chunk/local coordinates. There is no shared stream,
//! so the answer for a tile never depends on which tiles were asked first.
//!
//! ## Hash
//!
//! 64-bit FNV-1a over five little-endian `i64` words, in this exact order:
//!
//! ```text
//! world_seed, chunk_x, chunk_y, local_x, local_y
//! ```

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::chunk::TileCoord;

/// FNV-1a 64-bit offset basis.
const FNV_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;

/// FNV-1a 64-bit prime.
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// World seed for deterministic generation.
///
/// All procedural generation derives from this seed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct WorldSeed(u64);

impl WorldSeed {
    /// Creates a new world seed.
    #[inline]
    #[must_use]
    pub const fn new(seed: u64) -> Self {
        Self(seed)
    }

    /// Returns the raw seed value.
    #[inline]
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }

    /// Hashes this seed with a tile position.
    ///
    /// The tile is decomposed into chunk and local coordinates with floor
    /// semantics, so `-1` is local `15` of chunk `-1`, not local `-1` of
    /// chunk `0`.
    #[must_use]
    pub fn tile_hash(self, tile: TileCoord) -> u64 {
        let chunk = tile.chunk();
        let (local_x, local_y) = tile.local();

        let mut hash = FNV_OFFSET_BASIS;
        for word in [
            self.0 as i64,
            i64::from(chunk.x),
            i64::from(chunk.y),
            i64::from(local_x),
            i64::from(local_y),
        ] {
            for byte in word.to_le_bytes() {
                hash ^= u64::from(byte);
                hash = hash.wrapping_mul(FNV_PRIME);
            }
        }
        hash
    }

    /// Fresh RNG for a single tile.
    #[must_use]
    pub fn tile_rng(self, tile: TileCoord) -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(self.tile_hash(tile))
    }
}

impl Default for WorldSeed {
    fn default() -> Self {
        Self(42)
    }
}
