//! Deterministic per-hex terrain generation.
//!
//! Each hex rolls independently from a hash of `(seed, row, column)`, so a
//! given seed always produces the same map and the roll for one hex never
//! depends on the order in which the grid is filled.

use hex_core::{HexCell, HexIndex, Terrain};

/// Terrain generator handed to [`hex_core::HexGrid::generate`].
#[derive(Clone, Copy, Debug)]
pub struct TerrainGenerator {
    seed: u64,
    settlement_chance: u32,
}

impl TerrainGenerator {
    /// PCG multiplier constant.
    const MULTIPLIER: u64 = 6364136223846793005;

    /// PCG increment constant.
    const INCREMENT: u64 = 1442695040888963407;

    /// Context values keeping the terrain and settlement rolls independent.
    const TERRAIN_ROLL: u32 = 0;
    const SETTLEMENT_ROLL: u32 = 1;

    pub fn new(seed: u64, settlement_chance: u32) -> Self {
        Self {
            seed,
            settlement_chance: settlement_chance.min(100),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Rolls the cell for `index`. Water never holds a settlement.
    pub fn cell(&self, index: HexIndex) -> HexCell {
        let terrain_roll = self.roll(index, Self::TERRAIN_ROLL);
        let terrain = Terrain::ALL[(terrain_roll % Terrain::ALL.len() as u32) as usize];

        let settlement_roll = self.roll(index, Self::SETTLEMENT_ROLL) % 100;
        let has_settlement = terrain != Terrain::Water && settlement_roll < self.settlement_chance;

        HexCell::new(terrain, has_settlement)
    }

    fn roll(&self, index: HexIndex, context: u32) -> u32 {
        Self::pcg_output(Self::pcg_step(mix_seed(self.seed, index, context)))
    }

    /// Advance the PCG state by one step.
    #[inline]
    fn pcg_step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    /// PCG-XSH-RR output permutation.
    #[inline]
    fn pcg_output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }
}

/// Combines the map seed with a hex index and roll context.
fn mix_seed(seed: u64, index: HexIndex, context: u32) -> u64 {
    let mut hash = seed;
    hash ^= u64::from(index.row).wrapping_mul(0x9e3779b97f4a7c15);
    hash ^= u64::from(index.column).wrapping_mul(0x517cc1b727220a95);
    hash ^= u64::from(context).wrapping_mul(0x85ebca6b);

    // Final avalanche step
    hash ^= hash >> 33;
    hash = hash.wrapping_mul(0xff51afd7ed558ccd);
    hash ^= hash >> 33;

    hash
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_core::HexGrid;

    #[test]
    fn same_seed_builds_the_same_map() {
        let generator = TerrainGenerator::new(7, 10);
        let a = HexGrid::generate(8, 8, |index| generator.cell(index));
        let b = HexGrid::generate(8, 8, |index| generator.cell(index));
        assert_eq!(a, b);
    }

    #[test]
    fn roll_does_not_depend_on_fill_order() {
        let generator = TerrainGenerator::new(99, 50);
        let index = HexIndex::new(3, 4);
        let grid = HexGrid::generate(6, 6, |i| generator.cell(i));
        assert_eq!(grid.get(index), Ok(&generator.cell(index)));
    }

    #[test]
    fn every_terrain_appears_on_a_large_map() {
        let generator = TerrainGenerator::new(1234, 10);
        let grid = HexGrid::generate(20, 20, |index| generator.cell(index));
        for terrain in Terrain::ALL {
            assert!(grid.iter().any(|(_, cell)| cell.terrain() == terrain), "{terrain}");
        }
    }

    #[test]
    fn settlement_chance_bounds_are_respected() {
        let none = TerrainGenerator::new(5, 0);
        let grid = HexGrid::generate(15, 15, |index| none.cell(index));
        assert!(grid.iter().all(|(_, cell)| !cell.has_settlement()));

        let all = TerrainGenerator::new(5, 100);
        let grid = HexGrid::generate(15, 15, |index| all.cell(index));
        assert!(
            grid.iter()
                .all(|(_, cell)| cell.has_settlement() == (cell.terrain() != Terrain::Water))
        );
    }
}
