//! Per-step control intent, produced by an external input layer.

/// What the body is being asked to do this step.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Intent {
    /// Move / drill left.
    pub left: bool,
    /// Move / drill right.
    pub right: bool,
    /// Fly upward.
    pub up: bool,
    /// Drill down.
    pub dig: bool,
}

impl Intent {
    /// No input.
    pub const NONE: Self = Self {
        left: false,
        right: false,
        up: false,
        dig: false,
    };

    /// Any flag set.
    #[inline]
    #[must_use]
    pub const fn has_movement(self) -> bool {
        self.left || self.right || self.up || self.dig
    }

    /// Horizontal input as -1, 0 or 1. Opposite keys cancel.
    #[inline]
    #[must_use]
    pub const fn horizontal(self) -> i8 {
        match (self.left, self.right) {
            (true, false) => -1,
            (false, true) => 1,
            _ => 0,
        }
    }

    /// Only `left`.
    #[must_use]
    pub const fn left() -> Self {
        Self { left: true, ..Self::NONE }
    }

    /// Only `right`.
    #[must_use]
    pub const fn right() -> Self {
        Self { right: true, ..Self::NONE }
    }

    /// Only `up`.
    #[must_use]
    pub const fn up() -> Self {
        Self { up: true, ..Self::NONE }
    }

    /// Only `dig`.
    #[must_use]
    pub const fn dig() -> Self {
        Self { dig: true, ..Self::NONE }
    }
}
