//! Random tile placement
//!
//! Positions are top-left corners of `tile_size` squares, sampled uniformly so
//! every tile lies fully on screen.

use std::collections::HashSet;

use glam::IVec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SetupError};
use crate::squares_overlap;

/// Sampling budget per requested slot before giving up
pub const MAX_ATTEMPTS_PER_SLOT: usize = 1000;

/// Acceptance rule for sampled positions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum LayoutPolicy {
    /// Only exact coordinate pairs must differ; tiles may overlap visually
    #[default]
    DistinctCoordinates,
    /// Tile squares must be pairwise disjoint
    NonOverlapping,
}

/// Generate `slot_count` positions inside `[0, w - tile] x [0, h - tile]`
pub fn generate_positions<R: Rng + ?Sized>(
    slot_count: usize,
    screen_width: i32,
    screen_height: i32,
    tile_size: i32,
    policy: LayoutPolicy,
    rng: &mut R,
) -> Result<Vec<IVec2>> {
    if slot_count == 0 {
        return Ok(Vec::new());
    }
    if tile_size <= 0 {
        return Err(SetupError::config(format!(
            "tile_size must be positive, got {tile_size}"
        )));
    }

    let max_x = screen_width - tile_size;
    let max_y = screen_height - tile_size;
    let max_attempts = slot_count.saturating_mul(MAX_ATTEMPTS_PER_SLOT);
    let overflow = |attempts| SetupError::LayoutOverflow {
        requested: slot_count,
        attempts,
    };

    if max_x < 0 || max_y < 0 {
        return Err(overflow(0));
    }

    // Fail fast when the request cannot fit at all
    let capacity = match policy {
        LayoutPolicy::DistinctCoordinates => (max_x as u64 + 1) * (max_y as u64 + 1),
        LayoutPolicy::NonOverlapping => {
            (screen_width as u64 * screen_height as u64) / (tile_size as u64 * tile_size as u64)
        }
    };
    if slot_count as u64 > capacity {
        return Err(overflow(0));
    }

    let mut positions: Vec<IVec2> = Vec::with_capacity(slot_count);
    // Only consulted under DistinctCoordinates
    let mut taken: HashSet<IVec2> = HashSet::new();
    let mut attempts = 0;

    while positions.len() < slot_count {
        if attempts >= max_attempts {
            log::warn!(
                "Layout gave up with {}/{} tiles placed ({:?})",
                positions.len(),
                slot_count,
                policy
            );
            return Err(overflow(attempts));
        }
        attempts += 1;

        let candidate = IVec2::new(rng.random_range(0..=max_x), rng.random_range(0..=max_y));
        let accepted = match policy {
            LayoutPolicy::DistinctCoordinates => taken.insert(candidate),
            LayoutPolicy::NonOverlapping => positions
                .iter()
                .all(|&placed| !squares_overlap(placed, candidate, tile_size)),
        };

        if accepted {
            positions.push(candidate);
        }
    }

    log::debug!(
        "Placed {} tiles in {} attempts ({:?})",
        slot_count,
        attempts,
        policy
    );
    Ok(positions)
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    use super::*;
    use crate::consts::*;

    fn assert_in_bounds(positions: &[IVec2], w: i32, h: i32, tile: i32) {
        for pos in positions {
            assert!(pos.x >= 0 && pos.x <= w - tile, "x out of range: {pos}");
            assert!(pos.y >= 0 && pos.y <= h - tile, "y out of range: {pos}");
        }
    }

    #[test]
    fn test_reference_board_sizes() {
        let mut rng = Pcg32::seed_from_u64(12345);
        for count in [18, 36, 48] {
            let positions = generate_positions(
                count,
                SCREEN_WIDTH,
                SCREEN_HEIGHT,
                TILE_SIZE,
                LayoutPolicy::DistinctCoordinates,
                &mut rng,
            )
            .unwrap();
            assert_eq!(positions.len(), count);
            assert_in_bounds(&positions, SCREEN_WIDTH, SCREEN_HEIGHT, TILE_SIZE);

            let unique: HashSet<_> = positions.iter().collect();
            assert_eq!(unique.len(), count);
        }
    }

    #[test]
    fn test_non_overlapping_reference_boards() {
        let mut rng = Pcg32::seed_from_u64(777);
        for count in [18, 36, 48] {
            let positions = generate_positions(
                count,
                SCREEN_WIDTH,
                SCREEN_HEIGHT,
                TILE_SIZE,
                LayoutPolicy::NonOverlapping,
                &mut rng,
            )
            .unwrap();
            assert_eq!(positions.len(), count);
            assert_in_bounds(&positions, SCREEN_WIDTH, SCREEN_HEIGHT, TILE_SIZE);
            for (i, a) in positions.iter().enumerate() {
                for b in &positions[i + 1..] {
                    assert!(!squares_overlap(*a, *b, TILE_SIZE), "{a} overlaps {b}");
                }
            }
        }
    }

    #[test]
    fn test_exhausting_every_coordinate() {
        // 2x2 possible origins on a 3x3 screen with 2px tiles
        let mut rng = Pcg32::seed_from_u64(1);
        let positions =
            generate_positions(4, 3, 3, 2, LayoutPolicy::DistinctCoordinates, &mut rng).unwrap();
        let unique: HashSet<_> = positions.iter().collect();
        assert_eq!(unique.len(), 4);
    }

    #[test]
    fn test_too_many_slots_overflows() {
        let mut rng = Pcg32::seed_from_u64(1);
        let result = generate_positions(5, 3, 3, 2, LayoutPolicy::DistinctCoordinates, &mut rng);
        assert!(matches!(
            result,
            Err(SetupError::LayoutOverflow { requested: 5, .. })
        ));

        // Area allows 4 tiles but only one fits without overlap
        let result = generate_positions(2, 3, 3, 2, LayoutPolicy::NonOverlapping, &mut rng);
        assert!(matches!(
            result,
            Err(SetupError::LayoutOverflow {
                requested: 2,
                attempts: 2000
            })
        ));
    }

    #[test]
    fn test_tile_larger_than_screen() {
        let mut rng = Pcg32::seed_from_u64(1);
        let result = generate_positions(1, 50, 50, 80, LayoutPolicy::DistinctCoordinates, &mut rng);
        assert!(matches!(result, Err(SetupError::LayoutOverflow { .. })));

        // Nothing to place is never an error
        let empty = generate_positions(0, 50, 50, 80, LayoutPolicy::NonOverlapping, &mut rng);
        assert!(empty.unwrap().is_empty());
    }

    #[test]
    fn test_overlap_is_possible_with_distinct_coordinates() {
        // 3x1 origins for 8px tiles on a 10x8 screen: every pair overlaps
        let mut rng = Pcg32::seed_from_u64(9);
        let positions =
            generate_positions(3, 10, 8, 8, LayoutPolicy::DistinctCoordinates, &mut rng).unwrap();
        assert!(squares_overlap(positions[0], positions[1], 8));
    }

    proptest! {
        #[test]
        fn prop_positions_distinct_and_in_bounds(
            seed in any::<u64>(),
            count in 0usize..60,
            non_overlapping in any::<bool>(),
        ) {
            let policy = if non_overlapping {
                LayoutPolicy::NonOverlapping
            } else {
                LayoutPolicy::DistinctCoordinates
            };
            // Small tiles keep the non-overlapping case far from jamming
            let mut rng = Pcg32::seed_from_u64(seed);
            let positions = generate_positions(count, 1000, 800, 40, policy, &mut rng).unwrap();

            prop_assert_eq!(positions.len(), count);
            let unique: HashSet<_> = positions.iter().collect();
            prop_assert_eq!(unique.len(), count);
            for pos in &positions {
                prop_assert!(pos.x >= 0 && pos.x <= 960);
                prop_assert!(pos.y >= 0 && pos.y <= 760);
            }
        }
    }
}
