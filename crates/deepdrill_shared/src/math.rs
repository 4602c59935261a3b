//! Vectors and axis-aligned bounding boxes.
//!
//! These are the canonical representations shared by the terrain grid
//! (tile boxes) and the physics step (body boxes).

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

/// 2D Vector - position, velocity, displacement
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Vec2 {
    /// X component
    pub x: f32,
    /// Y component (positive is down)
    pub y: f32,
}

impl Vec2 {
    /// Creates a new Vec2
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Zero vector
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// Length squared (avoids sqrt)
    #[must_use]
    pub fn length_squared(self) -> f32 {
        self.x * self.x + self.y * self.y
    }

    /// Length
    #[must_use]
    pub fn length(self) -> f32 {
        self.length_squared().sqrt()
    }

    /// Linear interpolation from `self` toward `target` by `t`.
    ///
    /// `t` is not clamped; callers clamp progress themselves.
    #[must_use]
    pub fn lerp(self, target: Self, t: f32) -> Self {
        Self::new(
            self.x + (target.x - self.x) * t,
            self.y + (target.y - self.y) * t,
        )
    }
}

impl std::ops::Add for Vec2 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl std::ops::Sub for Vec2 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl std::ops::Mul<f32> for Vec2 {
    type Output = Self;
    fn mul(self, rhs: f32) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

impl std::ops::AddAssign for Vec2 {
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

/// Inclusive range of grid cells covered by a box.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TileRange {
    /// First column.
    pub min_x: i32,
    /// Last column (inclusive).
    pub max_x: i32,
    /// First row.
    pub min_y: i32,
    /// Last row (inclusive).
    pub max_y: i32,
}

impl TileRange {
    /// Iterates every `(column, row)` in the range, row-major.
    pub fn cells(self) -> impl Iterator<Item = (i32, i32)> {
        (self.min_y..=self.max_y)
            .flat_map(move |y| (self.min_x..=self.max_x).map(move |x| (x, y)))
    }
}

/// Axis-Aligned Bounding Box, anchored at the top-left corner.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Aabb {
    /// Left edge.
    pub x: f32,
    /// Top edge.
    pub y: f32,
    /// Width.
    pub width: f32,
    /// Height.
    pub height: f32,
}

impl Aabb {
    /// Creates a new AABB.
    #[inline]
    #[must_use]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    /// Creates the box covering grid cell `(grid_x, grid_y)`.
    #[inline]
    #[must_use]
    pub fn from_tile(grid_x: i32, grid_y: i32, tile_size: f32) -> Self {
        Self::new(
            grid_x as f32 * tile_size,
            grid_y as f32 * tile_size,
            tile_size,
            tile_size,
        )
    }

    /// Top-left corner.
    #[inline]
    #[must_use]
    pub const fn min(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Bottom-right corner.
    #[inline]
    #[must_use]
    pub fn max(&self) -> Vec2 {
        Vec2::new(self.right(), self.bottom())
    }

    /// Right edge.
    #[inline]
    #[must_use]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Bottom edge.
    #[inline]
    #[must_use]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Centre point.
    #[inline]
    #[must_use]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Returns a copy moved to a new top-left corner.
    #[inline]
    #[must_use]
    pub const fn with_position(&self, position: Vec2) -> Self {
        Self::new(position.x, position.y, self.width, self.height)
    }

    /// Moves the AABB by delta.
    #[inline]
    #[must_use]
    pub fn translate(&self, delta: Vec2) -> Self {
        Self::new(self.x + delta.x, self.y + delta.y, self.width, self.height)
    }

    /// Checks if this AABB intersects another. Touching edges do not count.
    #[must_use]
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.x < other.right()
            && self.right() > other.x
            && self.y < other.bottom()
            && self.bottom() > other.y
    }

    /// Returns the overlap extent on each axis. Positive = overlap, negative = gap.
    #[must_use]
    pub fn overlap(&self, other: &Aabb) -> Vec2 {
        Vec2::new(
            self.right().min(other.right()) - self.x.max(other.x),
            self.bottom().min(other.bottom()) - self.y.max(other.y),
        )
    }

    /// Signed penetration of `self` into `other`.
    ///
    /// Each component is the overlap extent, positive when `other` lies
    /// further along that axis (to the right / below) and negative otherwise.
    /// Subtracting a component from the position separates the boxes on
    /// that axis. Both components are zero when the boxes do not intersect.
    #[must_use]
    pub fn penetration(&self, other: &Aabb) -> Vec2 {
        let overlap = self.overlap(other);
        if overlap.x <= 0.0 || overlap.y <= 0.0 {
            return Vec2::ZERO;
        }

        let dx = if self.x < other.x { overlap.x } else { -overlap.x };
        let dy = if self.y < other.y { overlap.y } else { -overlap.y };
        Vec2::new(dx, dy)
    }

    /// Grid cells touched by this box.
    ///
    /// `epsilon` is subtracted from the far edges so a box whose right or
    /// bottom edge sits exactly on a grid line does not claim the next cell.
    #[must_use]
    pub fn tile_range(&self, tile_size: f32, epsilon: f32) -> TileRange {
        TileRange {
            min_x: (self.x / tile_size).floor() as i32,
            max_x: ((self.right() - epsilon) / tile_size).floor() as i32,
            min_y: (self.y / tile_size).floor() as i32,
            max_y: ((self.bottom() - epsilon) / tile_size).floor() as i32,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec2_operations() {
        let a = Vec2::new(1.0, 2.0);
        let b = Vec2::new(4.0, 6.0);

        let sum = a + b;
        assert_eq!(sum, Vec2::new(5.0, 8.0));
        assert_eq!(b - a, Vec2::new(3.0, 4.0));
        assert_eq!((b - a).length(), 5.0);
    }

    #[test]
    fn test_vec2_lerp() {
        let start = Vec2::new(0.0, 100.0);
        let target = Vec2::new(64.0, 164.0);
        assert_eq!(start.lerp(target, 0.0), start);
        assert_eq!(start.lerp(target, 1.0), target);
        assert_eq!(start.lerp(target, 0.5), Vec2::new(32.0, 132.0));
    }

    #[test]
    fn test_aabb_intersection() {
        let a = Aabb::new(0.0, 0.0, 10.0, 10.0);
        let b = Aabb::new(5.0, 5.0, 10.0, 10.0);
        let touching = Aabb::new(10.0, 0.0, 10.0, 10.0);
        let far = Aabb::new(20.0, 20.0, 10.0, 10.0);

        assert!(a.intersects(&b));
        assert!(!a.intersects(&touching), "shared edges are not overlap");
        assert!(!a.intersects(&far));
    }

    #[test]
    fn test_penetration_signs() {
        let tile = Aabb::new(0.0, 64.0, 64.0, 64.0);

        // Body sitting 10px into the top of the tile: push up.
        let above = Aabb::new(5.0, 20.0, 54.0, 54.0);
        let p = above.penetration(&tile);
        assert_eq!(p.y, 10.0);

        // Body poking 4px into the bottom: push down.
        let below = Aabb::new(5.0, 124.0, 54.0, 54.0);
        assert_eq!(below.penetration(&tile).y, -4.0);

        // No overlap at all.
        let apart = Aabb::new(100.0, 0.0, 10.0, 10.0);
        assert_eq!(apart.penetration(&tile), Vec2::ZERO);
    }

    #[test]
    fn test_tile_range() {
        let single = Aabb::new(10.0, 10.0, 32.0, 32.0).tile_range(64.0, 0.001);
        assert_eq!((single.min_x, single.max_x, single.min_y, single.max_y), (0, 0, 0, 0));

        let spanning = Aabb::new(32.0, 32.0, 64.0, 64.0).tile_range(64.0, 0.001);
        assert_eq!((spanning.min_x, spanning.max_x, spanning.min_y, spanning.max_y), (0, 1, 0, 1));

        let exact = Aabb::new(64.0, 64.0, 64.0, 64.0).tile_range(64.0, 0.001);
        assert_eq!((exact.min_x, exact.max_x, exact.min_y, exact.max_y), (1, 1, 1, 1));

        let negative = Aabb::new(-10.0, -10.0, 5.0, 5.0).tile_range(64.0, 0.001);
        assert_eq!((negative.min_x, negative.min_y), (-1, -1));
    }

    #[test]
    fn test_tile_range_cells() {
        let range = TileRange { min_x: 0, max_x: 1, min_y: 3, max_y: 4 };
        let cells: Vec<_> = range.cells().collect();
        assert_eq!(cells, vec![(0, 3), (1, 3), (0, 4), (1, 4)]);
    }

    #[test]
    fn test_aabb_bytemuck() {
        let b = Aabb::new(1.0, 2.0, 3.0, 4.0);
        let bytes: &[u8] = bytemuck::bytes_of(&b);
        assert_eq!(bytes.len(), 16);
    }
}
