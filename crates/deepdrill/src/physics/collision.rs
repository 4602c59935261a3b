//! # Collision Resolver
//!
//! Axis-separated AABB resolution against the world grid.
//!
//! ## Per step
//!
//! ```text
//! x += vx * dt   -> push out of every solid tile on X, zero vx on contact
//! y += vy * dt   -> push out of every solid tile on Y, zero vy on contact
//!                   (contact with a tile below = grounded)
//! ```
//!
//! Resolving X before Y means a body sliding along the floor never snags
//! on the tile edges it is standing on, and a body falling past a wall
//! never gets lifted on top of it.
//!
//! Each pass only runs when the step actually displaces the body on that
//! axis. The X pass ignores tiles the body already overlapped before it
//! moved, so a body sunk slightly into the floor keeps its horizontal
//! motion and is corrected vertically by the Y pass.

use deepdrill_procedural::WorldGrid;
use deepdrill_shared::{Aabb, Vec2};

/// Displacements smaller than this skip the axis pass.
const MIN_DISPLACEMENT: f32 = 0.0001;

/// Height of the strip probed under a resting body.
const GROUND_PROBE: f32 = 1.0;

/// Outcome of integrating one step of motion.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CollisionResult {
    /// Resolved box.
    pub aabb: Aabb,
    /// Velocity after contacts zeroed their components.
    pub velocity: Vec2,
    /// Resting on solid terrain.
    pub on_ground: bool,
    /// Hit something on X.
    pub hit_x: bool,
    /// Hit something on Y.
    pub hit_y: bool,
}

/// Boxes of every solid tile overlapping `aabb`.
pub fn collect_contacts(grid: &mut WorldGrid, aabb: &Aabb, epsilon: f32) -> Vec<Aabb> {
    let tile_size = grid.tile_size();
    aabb.tile_range(tile_size, epsilon)
        .cells()
        .filter(|&(x, y)| grid.get_tile_at_grid(x, y).is_some_and(|tile| tile.is_solid()))
        .map(|(x, y)| Aabb::from_tile(x, y, tile_size))
        .filter(|tile| aabb.intersects(tile))
        .collect()
}

/// Pushes `aabb` out of solid tiles along X.
///
/// `previous` is the box before the X displacement. Tiles it already
/// overlapped are left to the Y pass.
///
/// Returns the corrected box, the velocity (X zeroed on contact) and
/// whether any contact happened.
pub fn resolve_x(
    grid: &mut WorldGrid,
    previous: &Aabb,
    aabb: Aabb,
    velocity: Vec2,
    epsilon: f32,
) -> (Aabb, Vec2, bool) {
    let mut aabb = aabb;
    let mut velocity = velocity;
    let mut hit = false;

    for tile in collect_contacts(grid, &aabb, epsilon) {
        if previous.intersects(&tile) {
            continue;
        }
        // An earlier push may already have cleared this one.
        let penetration = aabb.penetration(&tile);
        if penetration.x == 0.0 {
            continue;
        }
        aabb.x = if penetration.x > 0.0 { tile.x - aabb.width } else { tile.right() };
        velocity.x = 0.0;
        hit = true;
    }

    (aabb, velocity, hit)
}

/// Pushes `aabb` out of solid tiles along Y.
///
/// Returns the corrected box, the velocity (Y zeroed on contact), whether
/// any contact happened and whether the body landed on a tile below.
pub fn resolve_y(grid: &mut WorldGrid, aabb: Aabb, velocity: Vec2, epsilon: f32) -> (Aabb, Vec2, bool, bool) {
    let mut aabb = aabb;
    let mut velocity = velocity;
    let mut hit = false;
    let mut grounded = false;

    for tile in collect_contacts(grid, &aabb, epsilon) {
        let penetration = aabb.penetration(&tile);
        if penetration.y == 0.0 {
            continue;
        }
        if penetration.y > 0.0 {
            // Tile is below.
            aabb.y = tile.y - aabb.height;
            grounded = true;
        } else {
            aabb.y = tile.bottom();
        }
        velocity.y = 0.0;
        hit = true;
    }

    (aabb, velocity, hit, grounded)
}

/// Whether solid terrain lies directly under the body.
pub fn is_supported(grid: &mut WorldGrid, aabb: &Aabb, epsilon: f32) -> bool {
    let feet = Aabb::new(aabb.x, aabb.bottom(), aabb.width, GROUND_PROBE);
    !collect_contacts(grid, &feet, epsilon).is_empty()
}

/// Integrates velocity over `dt` and resolves against the grid, X then Y.
pub fn integrate(grid: &mut WorldGrid, aabb: Aabb, velocity: Vec2, dt: f32, epsilon: f32) -> CollisionResult {
    let mut aabb = aabb;
    let mut velocity = velocity;
    let mut hit_x = false;
    let mut hit_y = false;
    let mut on_ground = false;

    let dx = velocity.x * dt;
    if dx.abs() > MIN_DISPLACEMENT {
        let previous = aabb;
        aabb.x += dx;
        (aabb, velocity, hit_x) = resolve_x(grid, &previous, aabb, velocity, epsilon);
    }

    let dy = velocity.y * dt;
    if dy.abs() > MIN_DISPLACEMENT {
        aabb.y += dy;
        (aabb, velocity, hit_y, on_ground) = resolve_y(grid, aabb, velocity, epsilon);
    }

    // Resting exactly on a tile edge touches nothing; probe the floor.
    if !hit_y && dy.abs() <= MIN_DISPLACEMENT && velocity.y >= 0.0 {
        on_ground = is_supported(grid, &aabb, epsilon);
    }

    CollisionResult {
        aabb,
        velocity,
        on_ground,
        hit_x,
        hit_y,
    }
}

/// Keeps the body inside `[0, world_width - width]` horizontally and
/// below `y = 0`. Clamping zeroes the clamped velocity component.
#[must_use]
pub fn clamp_to_world(aabb: Aabb, velocity: Vec2, world_width: f32) -> (Aabb, Vec2) {
    let mut aabb = aabb;
    let mut velocity = velocity;

    let max_x = (world_width - aabb.width).max(0.0);
    if aabb.x < 0.0 {
        aabb.x = 0.0;
        velocity.x = 0.0;
    } else if aabb.x > max_x {
        aabb.x = max_x;
        velocity.x = 0.0;
    }

    if aabb.y < 0.0 {
        aabb.y = 0.0;
        velocity.y = 0.0;
    }

    (aabb, velocity)
}
