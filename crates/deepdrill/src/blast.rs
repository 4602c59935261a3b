//! Area removal for explosive items.
//!
//! Clears every excavable tile within a circle of tile offsets. Whatever
//! the tiles held is lost.

use deepdrill_procedural::WorldGrid;
use deepdrill_shared::Vec2;

/// Radius of a small charge, in tiles.
pub const SMALL_BLAST_RADIUS: i32 = 2;

/// Radius of a large charge, in tiles.
pub const LARGE_BLAST_RADIUS: i32 = 4;

/// Removes every excavable tile whose offset `(dx, dy)` from the tile at
/// `centre` satisfies `dx² + dy² <= radius²`.
///
/// Returns the number of tiles removed.
pub fn blast(grid: &mut WorldGrid, centre: Vec2, radius: i32) -> usize {
    let origin = grid.pixel_to_grid(centre.x, centre.y);
    if radius < 0 {
        return 0;
    }

    let dimensions = grid.dimensions();
    let columns = (dimensions.width / dimensions.tile_size).ceil() as i64;
    let rows = (dimensions.height / dimensions.tile_size).ceil() as i64;

    // Wide math and the world bounds keep huge radii finite.
    let r = i64::from(radius);
    let radius_sq = r * r;
    let (ox, oy) = (i64::from(origin.x), i64::from(origin.y));

    let mut removed = 0;
    for y in (oy - r).max(0)..=(oy + r).min(rows - 1) {
        for x in (ox - r).max(0)..=(ox + r).min(columns - 1) {
            let (dx, dy) = (x - ox, y - oy);
            if dx * dx + dy * dy > radius_sq {
                continue;
            }
            if grid.dig_tile_at_grid(x as i32, y as i32).is_some() {
                removed += 1;
            }
        }
    }

    tracing::debug!(
        "Blast at ({}, {}) radius {}: {} tiles removed",
        origin.x,
        origin.y,
        radius,
        removed
    );
    removed
}
