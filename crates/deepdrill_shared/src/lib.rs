//! # DEEPDRILL Shared
//!
//! Spatial primitives used by terrain generation and physics.
//!
//! ## Coordinate System
//!
//! Screen space: X grows to the right, Y grows **downward**.
//! A bounding box is anchored at its top-left corner, so "below"
//! means a larger Y value.

#![deny(missing_docs)]
#![deny(unsafe_code)]

pub mod math;

pub use math::{Aabb, TileRange, Vec2};
