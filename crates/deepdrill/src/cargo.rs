//! # Cargo Hold
//!
//! Per-kind ore counts with a shared unit capacity. Pre-sized, no
//! allocation.

use deepdrill_procedural::{OreKind, ORE_KIND_COUNT};

/// Ore carried by a body.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CargoHold {
    /// Units per ore kind, indexed by `OreKind::index`.
    counts: [u32; ORE_KIND_COUNT],
    /// Total units the hold takes.
    capacity: u32,
}

impl CargoHold {
    /// Creates an empty hold.
    #[inline]
    #[must_use]
    pub const fn new(capacity: u32) -> Self {
        Self {
            counts: [0; ORE_KIND_COUNT],
            capacity,
        }
    }

    /// Total units the hold takes.
    #[inline]
    #[must_use]
    pub const fn capacity(&self) -> u32 {
        self.capacity
    }

    /// Changes the capacity. Existing cargo is kept even if it now exceeds
    /// the new capacity.
    pub fn set_capacity(&mut self, capacity: u32) {
        self.capacity = capacity;
    }

    /// Units carried of one kind.
    #[inline]
    #[must_use]
    pub const fn count(&self, kind: OreKind) -> u32 {
        self.counts[kind.index()]
    }

    /// Units carried of the kind at a raw index; zero when out of range.
    #[must_use]
    pub fn count_at(&self, index: usize) -> u32 {
        self.counts.get(index).copied().unwrap_or(0)
    }

    /// Units carried across all kinds.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.counts.iter().sum()
    }

    /// No room for another unit.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.total() >= self.capacity
    }

    /// Stores one unit. Returns `false` and changes nothing when full.
    pub fn try_add(&mut self, kind: OreKind) -> bool {
        if self.is_full() {
            return false;
        }
        self.counts[kind.index()] += 1;
        true
    }

    /// Empties the hold, returning what it held.
    pub fn drain(&mut self) -> [u32; ORE_KIND_COUNT] {
        std::mem::take(&mut self.counts)
    }

    /// Sell value of everything carried.
    #[must_use]
    pub fn value(&self) -> u64 {
        OreKind::ALL
            .iter()
            .map(|kind| u64::from(self.count(*kind)) * u64::from(kind.value()))
            .sum()
    }
}
