//! # Terrain Generation Tests
//!
//! Determinism across grids, surface invariants and the statistical
//! shape of generated terrain.

use deepdrill_procedural::{
    ChunkCoord, Material, OreKind, TerrainGenerator, TileCoord, WorldDimensions, WorldGrid,
    WorldSeed, ORE_KIND_COUNT,
};

fn sample_row(gen: &TerrainGenerator, row: i32, samples: i32) -> (usize, usize, [usize; ORE_KIND_COUNT]) {
    let mut empty = 0;
    let mut ground = 0;
    let mut ores = [0usize; ORE_KIND_COUNT];
    for x in 0..samples {
        match gen.generate(TileCoord::new(x, row)) {
            Material::Empty => empty += 1,
            Material::Ground => ground += 1,
            Material::Ore(kind) => ores[kind.index()] += 1,
        }
    }
    (empty, ground, ores)
}

/// Test: Two grids built from the same seed agree tile for tile, even when
/// their chunks are loaded in opposite orders.
#[test]
fn test_grids_agree_regardless_of_access_order() {
    let seed = WorldSeed::new(42);
    let mut forward = WorldGrid::new(WorldDimensions::default(), seed);
    let mut backward = WorldGrid::new(WorldDimensions::default(), seed);

    let chunks: Vec<_> = (0..8).flat_map(|y| (0..8).map(move |x| ChunkCoord::new(x, y))).collect();
    for chunk in &chunks {
        forward.ensure_chunk_loaded(*chunk);
    }
    for chunk in chunks.iter().rev() {
        backward.ensure_chunk_loaded(*chunk);
    }

    assert_eq!(forward.tile_count(), backward.tile_count());
    for y in 0..128 {
        for x in 0..120 {
            assert_eq!(
                forward.get_tile_at_grid(x, y),
                backward.get_tile_at_grid(x, y),
                "tile ({x}, {y}) differs"
            );
        }
    }
}

/// Test: The surface row is solid ground and everything above it is air.
#[test]
fn test_surface_invariants() {
    for seed in [0, 1, 42, u64::MAX] {
        let mut grid = WorldGrid::new(WorldDimensions::default(), WorldSeed::new(seed));
        let row = grid.ground_row();
        for x in 0..120 {
            assert_eq!(grid.get_tile_at_grid(x, row).map(|t| t.material), Some(Material::Ground));
            for y in 0..row {
                assert_eq!(grid.get_tile_at_grid(x, y), None, "seed {seed}: ({x}, {y}) above ground");
            }
        }
    }
}

/// Test: Underground empty fraction tracks the configured empty rate.
#[test]
fn test_empty_fraction_matches_rate() {
    let gen = TerrainGenerator::with_defaults(WorldSeed::new(42), 10);
    let samples = 20_000;
    let (empty, ground, ores) = sample_row(&gen, 50, samples);
    let ore_total: usize = ores.iter().sum();

    let empty_pct = empty as f64 / f64::from(samples) * 100.0;
    let ground_pct = ground as f64 / f64::from(samples) * 100.0;
    let ore_pct = ore_total as f64 / f64::from(samples) * 100.0;
    println!("Row 50: empty {empty_pct:.1}%, ground {ground_pct:.1}%, ore {ore_pct:.1}%");

    assert!((17.0..=23.0).contains(&empty_pct), "empty fraction off: {empty_pct:.1}%");
    assert!((61.0..=69.0).contains(&ground_pct), "ground fraction off: {ground_pct:.1}%");
    assert!((12.0..=18.0).contains(&ore_pct), "ore fraction off: {ore_pct:.1}%");
}

/// Test: Shallow ore is copper and iron; deep-only kinds never appear.
#[test]
fn test_shallow_ore_mix() {
    let gen = TerrainGenerator::with_defaults(WorldSeed::new(7), 10);
    let (_, _, ores) = sample_row(&gen, 20, 20_000);
    let total: usize = ores.iter().sum();
    let shallow = ores[OreKind::Copper.index()] + ores[OreKind::Iron.index()];

    println!("Row 20 ore counts: {ores:?}");
    assert!(total > 0);
    assert!(shallow * 10 >= total * 9, "copper + iron should dominate: {ores:?}");
    assert_eq!(ores[OreKind::Mythril.index()], 0);
    assert_eq!(ores[OreKind::Platinum.index()], 0);
    assert_eq!(ores[OreKind::Diamond.index()], 0);
}

/// Test: Near the platinum peak, platinum is the most common ore and copper
/// has vanished.
#[test]
fn test_deep_ore_mix() {
    let gen = TerrainGenerator::with_defaults(WorldSeed::new(7), 10);
    let (_, _, ores) = sample_row(&gen, 500, 20_000);

    println!("Row 500 ore counts: {ores:?}");
    let most_common = ores
        .iter()
        .enumerate()
        .max_by_key(|(_, count)| **count)
        .and_then(|(i, _)| OreKind::from_index(i));
    assert_eq!(most_common, Some(OreKind::Platinum));
    assert_eq!(ores[OreKind::Copper.index()], 0);
    assert!(ores[OreKind::Diamond.index()] > 0, "diamond tail should reach row 500");
}

/// Test: Digging in one grid never leaks into another grid with the same seed.
#[test]
fn test_grids_do_not_share_state() {
    let seed = WorldSeed::new(9);
    let mut a = WorldGrid::new(WorldDimensions::default(), seed);
    let mut b = WorldGrid::new(WorldDimensions::default(), seed);

    assert!(a.dig_tile_at_grid(30, 10).is_some());
    assert_eq!(a.get_tile_at_grid(30, 10), None);
    assert!(b.get_tile_at_grid(30, 10).is_some());
}
