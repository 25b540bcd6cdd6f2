use std::collections::HashSet;

use crate::{game::grid::Grid, models::Position};

pub struct PathValidator;

impl PathValidator {
    /// Validate that positions form a simple path of adjacent cells on the grid
    pub fn is_valid_path(grid: &Grid, positions: &[Position]) -> bool {
        if positions.is_empty() {
            return false;
        }

        // Check that each position is adjacent to the previous one
        for window in positions.windows(2) {
            if !Self::are_adjacent(&window[0], &window[1]) {
                return false;
            }
        }

        // Check that no position is used twice
        let unique_positions: HashSet<_> = positions.iter().collect();
        if unique_positions.len() != positions.len() {
            return false;
        }

        positions.iter().all(|pos| grid.contains(*pos))
    }

    /// Check if two positions are adjacent (including diagonals)
    fn are_adjacent(pos1: &Position, pos2: &Position) -> bool {
        let dx = pos1.x.abs_diff(pos2.x);
        let dy = pos1.y.abs_diff(pos2.y);

        dx <= 1 && dy <= 1 && (dx + dy > 0)
    }

    /// Extract word from grid positions, skipping any that are out of bounds
    pub fn extract_word(grid: &Grid, positions: &[Position]) -> String {
        positions
            .iter()
            .filter_map(|pos| grid.letter_at(*pos))
            .collect()
    }
}
