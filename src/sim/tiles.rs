//! Tile identities and tile set generation

use rand::Rng;
use rand::seq::{IndexedRandom, SliceRandom};
use serde::{Deserialize, Serialize};

use crate::error::{Result, SetupError};

/// One of the distinct tile images, numbered as its asset file (`1.png` is 1)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TileIdentity(pub u8);

impl TileIdentity {
    /// Identities `1..=count`, matching the shipped asset names
    pub fn numbered(count: u8) -> Vec<TileIdentity> {
        (1..=count).map(TileIdentity).collect()
    }
}

impl std::fmt::Display for TileIdentity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Build the shuffled multiset of tiles for a board.
///
/// Picks `ceil(tile_count / repeat_count)` distinct identities (at most
/// `available.len()`), repeats each `repeat_count` times and pads the rest
/// in pairs drawn with replacement. The excess is cut from the last block
/// before shuffling, so with even `tile_count` and `repeat_count` every
/// identity appears an even number of times. An odd `tile_count` leaves one
/// single, unmatchable tile.
pub fn generate_tiles<R: Rng + ?Sized>(
    available: &[TileIdentity],
    tile_count: usize,
    repeat_count: usize,
    rng: &mut R,
) -> Result<Vec<TileIdentity>> {
    if available.is_empty() {
        return Err(SetupError::config("no tile identities available"));
    }
    if tile_count == 0 {
        return Err(SetupError::config("tile_count must be positive"));
    }
    if repeat_count == 0 || repeat_count > tile_count {
        return Err(SetupError::config(format!(
            "repeat_count {repeat_count} must be in 1..={tile_count}"
        )));
    }

    let distinct = tile_count.div_ceil(repeat_count).min(available.len());
    let mut tiles = Vec::with_capacity(distinct * repeat_count + 1);
    for &identity in available.choose_multiple(rng, distinct) {
        tiles.extend(std::iter::repeat_n(identity, repeat_count));
    }

    while tiles.len() + 2 <= tile_count {
        if let Some(&identity) = available.choose(rng) {
            tiles.push(identity);
            tiles.push(identity);
        }
    }
    if tiles.len() < tile_count {
        if let Some(&identity) = available.choose(rng) {
            tiles.push(identity);
        }
    }

    tiles.truncate(tile_count);
    if tile_count % 2 != 0 {
        log::warn!("Odd tile count {}: one tile has no partner", tile_count);
    }
    tiles.shuffle(rng);
    Ok(tiles)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    use super::*;

    fn counts(tiles: &[TileIdentity]) -> HashMap<TileIdentity, usize> {
        let mut counts = HashMap::new();
        for &tile in tiles {
            *counts.entry(tile).or_insert(0) += 1;
        }
        counts
    }

    #[test]
    fn test_reference_difficulties() {
        let available = TileIdentity::numbered(9);
        let mut rng = Pcg32::seed_from_u64(12345);

        for (tile_count, repeat_count) in [(18, 2), (36, 4), (48, 6)] {
            let tiles = generate_tiles(&available, tile_count, repeat_count, &mut rng).unwrap();
            assert_eq!(tiles.len(), tile_count);
            assert!(tiles.iter().all(|t| available.contains(t)));
            assert!(counts(&tiles).values().all(|c| c % 2 == 0));
        }
    }

    #[test]
    fn test_excess_cut_from_one_block() {
        // ceil(18 / 4) = 5 identities x 4 = 20 tiles, two are cut
        let available = TileIdentity::numbered(9);
        let mut rng = Pcg32::seed_from_u64(7);
        let tiles = generate_tiles(&available, 18, 4, &mut rng).unwrap();

        let counts = counts(&tiles);
        assert_eq!(counts.len(), 5);
        assert_eq!(counts.values().filter(|&&c| c == 2).count(), 1);
        assert_eq!(counts.values().filter(|&&c| c == 4).count(), 4);
    }

    #[test]
    fn test_pads_in_pairs_when_identities_run_out() {
        // Two identities x 2 = 4, the remaining 6 tiles come as pairs
        let available = TileIdentity::numbered(2);
        let mut rng = Pcg32::seed_from_u64(99);
        let tiles = generate_tiles(&available, 10, 2, &mut rng).unwrap();

        assert_eq!(tiles.len(), 10);
        assert!(counts(&tiles).values().all(|c| c % 2 == 0));
    }

    #[test]
    fn test_odd_tile_count_leaves_single_tile() {
        let available = TileIdentity::numbered(9);
        let mut rng = Pcg32::seed_from_u64(3);
        let tiles = generate_tiles(&available, 7, 2, &mut rng).unwrap();

        assert_eq!(tiles.len(), 7);
        let odd = counts(&tiles).values().filter(|c| *c % 2 == 1).count();
        assert_eq!(odd, 1);
    }

    #[test]
    fn test_odd_repeat_count_is_not_paired() {
        // Raw generator honours repeat_count even when it breaks pairing
        let available = TileIdentity::numbered(9);
        let mut rng = Pcg32::seed_from_u64(5);
        let tiles = generate_tiles(&available, 6, 3, &mut rng).unwrap();

        let counts = counts(&tiles);
        assert_eq!(counts.len(), 2);
        assert!(counts.values().all(|&c| c == 3));
    }

    #[test]
    fn test_rejects_bad_inputs() {
        let mut rng = Pcg32::seed_from_u64(1);
        let available = TileIdentity::numbered(9);

        assert!(matches!(
            generate_tiles(&[], 4, 2, &mut rng),
            Err(SetupError::Configuration(_))
        ));
        assert!(generate_tiles(&available, 0, 2, &mut rng).is_err());
        assert!(generate_tiles(&available, 4, 0, &mut rng).is_err());
        assert!(generate_tiles(&available, 4, 6, &mut rng).is_err());
    }

    #[test]
    fn test_determinism() {
        let available = TileIdentity::numbered(9);
        let a = generate_tiles(&available, 36, 4, &mut Pcg32::seed_from_u64(42)).unwrap();
        let b = generate_tiles(&available, 36, 4, &mut Pcg32::seed_from_u64(42)).unwrap();
        assert_eq!(a, b);
    }

    proptest! {
        #[test]
        fn prop_even_counts_always_pair_up(
            seed in any::<u64>(),
            identities in 1u8..=12,
            half_tiles in 1usize..=40,
            half_repeat in 1usize..=6,
        ) {
            let tile_count = half_tiles * 2;
            let repeat_count = (half_repeat * 2).min(tile_count);
            let available = TileIdentity::numbered(identities);
            let mut rng = Pcg32::seed_from_u64(seed);

            let tiles = generate_tiles(&available, tile_count, repeat_count, &mut rng).unwrap();
            prop_assert_eq!(tiles.len(), tile_count);
            prop_assert!(counts(&tiles).values().all(|c| c % 2 == 0));
        }

        #[test]
        fn prop_length_is_exact(
            seed in any::<u64>(),
            tile_count in 1usize..=60,
            repeat_count in 1usize..=8,
        ) {
            prop_assume!(repeat_count <= tile_count);
            let available = TileIdentity::numbered(9);
            let mut rng = Pcg32::seed_from_u64(seed);
            let tiles = generate_tiles(&available, tile_count, repeat_count, &mut rng).unwrap();
            prop_assert_eq!(tiles.len(), tile_count);
        }
    }
}
