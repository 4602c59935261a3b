//! # Generation Error Types
//!
//! Only construction can fail. Lookups on a built grid never error:
//! a missing tile is `None`, a refused dig is `None`.

use thiserror::Error;

/// Errors raised while validating terrain parameters.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GenerationError {
    /// A probability lies outside `[0, 1]`.
    #[error("rate {name} must be within [0, 1], got {value}")]
    RateOutOfRange {
        /// Which rate.
        name: &'static str,
        /// The offending value.
        value: f32,
    },

    /// Empty and ground rates leave negative mass for ore.
    #[error("empty rate {empty} + ground rate {ground} exceeds 1")]
    RatesExceedOne {
        /// Empty rate.
        empty: f32,
        /// Ground rate.
        ground: f32,
    },

    /// A world dimension is zero, negative or not finite.
    #[error("world dimension {name} must be positive and finite, got {value}")]
    InvalidDimension {
        /// Which dimension.
        name: &'static str,
        /// The offending value.
        value: f32,
    },

    /// Ground level sits outside the world.
    #[error("ground level {ground_level} lies outside world height {height}")]
    GroundOutsideWorld {
        /// Ground level in pixels.
        ground_level: f32,
        /// World height in pixels.
        height: f32,
    },
}

/// Result type for generation setup.
pub type GenerationResult<T> = Result<T, GenerationError>;
