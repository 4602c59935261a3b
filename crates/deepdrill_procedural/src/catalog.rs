//! # Tile Catalog
//!
//! Static table of everything a tile can be made of.
//!
//! ## Ore Profiles
//!
//! Each ore kind peaks at a preferred tile row and falls off as a Gaussian:
//!
//! ```text
//! weight(row) = max_weight * exp(-(row - peak_depth)^2 / (2 * sigma^2))
//! ```
//!
//! Rows are absolute tile rows (the ground row is usually 10), so a peak
//! above the surface (Copper) simply means the ore is most common right
//! under the ground and thins out with depth.

/// Number of ore kinds in the catalog.
pub const ORE_KIND_COUNT: usize = 6;

/// Ore kinds, declared in their fixed selection order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum OreKind {
    /// Shallow, plentiful.
    Copper = 0,
    /// Common in the upper crust.
    Iron = 1,
    /// Mid depth.
    Gold = 2,
    /// Deep.
    Mythril = 3,
    /// Very deep.
    Platinum = 4,
    /// Rare everywhere, widest spread.
    Diamond = 5,
}

/// Generation and excavation parameters for one ore kind.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OreProfile {
    /// Tile row where the ore is most common.
    pub peak_depth: f32,
    /// Standard deviation of the depth distribution, in rows.
    pub sigma: f32,
    /// Relative weight at the peak row.
    pub max_weight: f32,
    /// Excavation duration multiplier relative to plain ground.
    pub hardness: f32,
}

/// Profiles indexed by `OreKind as usize`.
const ORE_PROFILES: [OreProfile; ORE_KIND_COUNT] = [
    OreProfile { peak_depth: -75.0, sigma: 120.0, max_weight: 8.0, hardness: 1.2 },
    OreProfile { peak_depth: 70.0, sigma: 90.0, max_weight: 5.0, hardness: 1.5 },
    OreProfile { peak_depth: 230.0, sigma: 80.0, max_weight: 3.0, hardness: 2.0 },
    OreProfile { peak_depth: 360.0, sigma: 70.0, max_weight: 2.2, hardness: 2.5 },
    OreProfile { peak_depth: 500.0, sigma: 80.0, max_weight: 1.8, hardness: 3.0 },
    OreProfile { peak_depth: 600.0, sigma: 180.0, max_weight: 0.15, hardness: 4.0 },
];

/// Sell value of one unit, indexed by `OreKind as usize`.
const ORE_VALUES: [u32; ORE_KIND_COUNT] = [25, 75, 300, 1_500, 10_000, 30_000];

impl OreKind {
    /// Every ore kind in selection order. Weighted selection MUST walk this
    /// slice, never a hash map.
    pub const ALL: [OreKind; ORE_KIND_COUNT] = [
        OreKind::Copper,
        OreKind::Iron,
        OreKind::Gold,
        OreKind::Mythril,
        OreKind::Platinum,
        OreKind::Diamond,
    ];

    /// Position of this kind in `ALL` (and in per-kind count arrays).
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Looks up a kind by raw index; `None` when out of range.
    #[inline]
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Generation and hardness parameters.
    #[inline]
    #[must_use]
    pub const fn profile(self) -> OreProfile {
        ORE_PROFILES[self as usize]
    }

    /// Excavation duration multiplier.
    #[inline]
    #[must_use]
    pub const fn hardness(self) -> f32 {
        self.profile().hardness
    }

    /// Sell value of one unit.
    #[inline]
    #[must_use]
    pub const fn value(self) -> u32 {
        ORE_VALUES[self as usize]
    }

    /// Display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            OreKind::Copper => "Copper",
            OreKind::Iron => "Iron",
            OreKind::Gold => "Gold",
            OreKind::Mythril => "Mythril",
            OreKind::Platinum => "Platinum",
            OreKind::Diamond => "Diamond",
        }
    }
}

impl std::fmt::Display for OreKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// What a tile is made of.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Material {
    /// Air. Never stored in the grid.
    #[default]
    Empty,
    /// Plain ground material.
    Ground,
    /// An ore vein.
    Ore(OreKind),
}

impl Material {
    /// Blocks movement.
    #[inline]
    #[must_use]
    pub const fn is_solid(self) -> bool {
        !matches!(self, Material::Empty)
    }

    /// Can be removed by digging, drilling or blasting.
    #[inline]
    #[must_use]
    pub const fn is_excavable(self) -> bool {
        matches!(self, Material::Ground | Material::Ore(_))
    }

    /// The ore kind, if this is an ore.
    #[inline]
    #[must_use]
    pub const fn ore(self) -> Option<OreKind> {
        match self {
            Material::Ore(kind) => Some(kind),
            _ => None,
        }
    }
}

/// A stored tile. Only exists for non-empty materials.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Tile {
    /// The tile's material.
    pub material: Material,
}

impl Tile {
    /// Plain ground tile.
    pub const GROUND: Self = Self { material: Material::Ground };

    /// Wraps a material; `None` for `Empty` so air can never be stored.
    #[inline]
    #[must_use]
    pub const fn from_material(material: Material) -> Option<Self> {
        match material {
            Material::Empty => None,
            _ => Some(Self { material }),
        }
    }

    /// Ore tile of the given kind.
    #[inline]
    #[must_use]
    pub const fn ore(kind: OreKind) -> Self {
        Self { material: Material::Ore(kind) }
    }

    /// Blocks movement.
    #[inline]
    #[must_use]
    pub const fn is_solid(self) -> bool {
        self.material.is_solid()
    }

    /// Can be excavated.
    #[inline]
    #[must_use]
    pub const fn is_excavable(self) -> bool {
        self.material.is_excavable()
    }
}
