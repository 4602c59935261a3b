//! # Chunk Coordinates
//!
//! Tiles are grouped into square chunks of `CHUNK_SIZE` x `CHUNK_SIZE`.
//! A chunk is the unit of lazy generation: the first lookup that touches a
//! chunk materializes all of its tiles.
//!
//! All decompositions use floor division (`div_euclid` / `rem_euclid`), so
//! negative tile coordinates land in negative chunks with non-negative
//! local offsets.

/// Chunk width/height in tiles.
pub const CHUNK_SIZE: i32 = 16;

/// Composite key of one tile in the sparse grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TileCoord {
    /// Column.
    pub x: i32,
    /// Row (grows downward).
    pub y: i32,
}

impl TileCoord {
    /// Creates a new tile coordinate.
    #[inline]
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The chunk containing this tile.
    #[inline]
    #[must_use]
    pub const fn chunk(self) -> ChunkCoord {
        ChunkCoord::from_tile(self.x, self.y)
    }

    /// Offset of this tile inside its chunk, each in `0..CHUNK_SIZE`.
    #[inline]
    #[must_use]
    pub const fn local(self) -> (i32, i32) {
        (self.x.rem_euclid(CHUNK_SIZE), self.y.rem_euclid(CHUNK_SIZE))
    }
}

/// Chunk coordinate (identifies a chunk in the world grid).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ChunkCoord {
    /// X coordinate (in chunks, not tiles).
    pub x: i32,
    /// Y coordinate (in chunks, not tiles).
    pub y: i32,
}

impl ChunkCoord {
    /// Creates a new chunk coordinate.
    #[inline]
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Converts tile coordinates to the containing chunk.
    #[inline]
    #[must_use]
    pub const fn from_tile(tile_x: i32, tile_y: i32) -> Self {
        Self {
            x: tile_x.div_euclid(CHUNK_SIZE),
            y: tile_y.div_euclid(CHUNK_SIZE),
        }
    }

    /// Tile coordinate of the chunk's top-left corner.
    #[inline]
    #[must_use]
    pub const fn origin(self) -> TileCoord {
        TileCoord::new(self.x * CHUNK_SIZE, self.y * CHUNK_SIZE)
    }

    /// Every tile in the chunk, row-major.
    pub fn tiles(self) -> impl Iterator<Item = TileCoord> {
        let origin = self.origin();
        (0..CHUNK_SIZE).flat_map(move |local_y| {
            (0..CHUNK_SIZE).map(move |local_x| {
                TileCoord::new(origin.x + local_x, origin.y + local_y)
            })
        })
    }

    /// This chunk and its eight neighbours.
    pub fn neighbourhood(self) -> impl Iterator<Item = ChunkCoord> {
        (-1..=1).flat_map(move |dy| (-1..=1).map(move |dx| ChunkCoord::new(self.x + dx, self.y + dy)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chunk_coord_from_tile() {
        assert_eq!(ChunkCoord::from_tile(0, 0), ChunkCoord::new(0, 0));
        assert_eq!(ChunkCoord::from_tile(15, 15), ChunkCoord::new(0, 0));
        assert_eq!(ChunkCoord::from_tile(16, 16), ChunkCoord::new(1, 1));
        assert_eq!(ChunkCoord::from_tile(-1, -1), ChunkCoord::new(-1, -1));
        assert_eq!(ChunkCoord::from_tile(-16, -16), ChunkCoord::new(-1, -1));
        assert_eq!(ChunkCoord::from_tile(-17, -17), ChunkCoord::new(-2, -2));
    }

    #[test]
    fn test_local_offsets_are_never_negative() {
        assert_eq!(TileCoord::new(-1, -16).local(), (15, 0));
        assert_eq!(TileCoord::new(-17, 33).local(), (15, 1));
        assert_eq!(TileCoord::new(16, 5).local(), (0, 5));
    }

    #[test]
    fn test_chunk_tiles() {
        let tiles: Vec<_> = ChunkCoord::new(-1, 2).tiles().collect();
        assert_eq!(tiles.len(), (CHUNK_SIZE * CHUNK_SIZE) as usize);
        assert_eq!(tiles[0], TileCoord::new(-16, 32));
        assert_eq!(tiles[tiles.len() - 1], TileCoord::new(-1, 47));
        assert!(tiles.iter().all(|t| t.chunk() == ChunkCoord::new(-1, 2)));
    }

    #[test]
    fn test_neighbourhood_is_three_by_three() {
        let around: Vec<_> = ChunkCoord::new(0, 0).neighbourhood().collect();
        assert_eq!(around.len(), 9);
        assert!(around.contains(&ChunkCoord::new(-1, -1)));
        assert!(around.contains(&ChunkCoord::new(1, 1)));
    }
}
