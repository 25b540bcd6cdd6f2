use std::sync::Arc;

use tokio::task::JoinSet;

use crate::{
    dictionary::Dictionary,
    error::Result,
    game::{grid::Grid, validator::PathValidator},
    models::{FoundWord, Position, SearchMode},
};

/// Depth-first word search over every start cell of a grid
pub struct WordFinder {
    mode: SearchMode,
}

impl WordFinder {
    pub fn new(mode: SearchMode) -> Self {
        Self { mode }
    }

    /// Find every dictionary word spelled by a simple path of adjacent cells.
    ///
    /// Each word is returned once, with the path that first reached it, and
    /// is marked found in `dictionary`. Results are in lexicographic order.
    pub async fn find_words(
        &self,
        dictionary: Arc<Dictionary>,
        grid: &Grid,
    ) -> Result<Vec<FoundWord>> {
        tracing::info!(
            "Searching {} start cells ({} mode)",
            grid.cell_count(),
            self.mode
        );

        let mut found = match self.mode {
            SearchMode::Sequential => Self::find_sequential(&dictionary, grid),
            SearchMode::Parallel => Self::find_parallel(dictionary, grid).await?,
        };
        found.sort_by(|a, b| a.word.cmp(&b.word));

        tracing::info!("Search finished with {} words found", found.len());
        Ok(found)
    }

    fn find_sequential(dictionary: &Dictionary, grid: &Grid) -> Vec<FoundWord> {
        let mut board = grid.clone();
        let mut found = Vec::new();

        for start in grid.positions() {
            Self::search_from(dictionary, &mut board, start, &mut found);
        }

        found
    }

    async fn find_parallel(dictionary: Arc<Dictionary>, grid: &Grid) -> Result<Vec<FoundWord>> {
        let mut tasks = JoinSet::new();
        let shared = Arc::new(grid.clone());

        for start in grid.positions() {
            let dictionary = dictionary.clone();
            let shared = shared.clone();
            tasks.spawn_blocking(move || {
                // Used-state must not be shared between in-flight paths,
                // so each task copies the board once it starts running
                let mut board = Grid::clone(&shared);
                drop(shared);
                let mut found = Vec::new();
                Self::search_from(&dictionary, &mut board, start, &mut found);
                found
            });
        }

        let mut found = Vec::new();
        while let Some(result) = tasks.join_next().await {
            found.extend(result?);
        }

        Ok(found)
    }

    /// Explore every path beginning at `start`
    pub fn search_from(
        dictionary: &Dictionary,
        grid: &mut Grid,
        start: Position,
        found: &mut Vec<FoundWord>,
    ) {
        let mut letters = String::new();
        let mut path = Vec::new();
        Self::scan(dictionary, grid, start, &mut letters, &mut path, found);
        tracing::trace!("Start cell ({}, {}) explored", start.x, start.y);
    }

    fn scan(
        dictionary: &Dictionary,
        grid: &mut Grid,
        pos: Position,
        letters: &mut String,
        path: &mut Vec<Position>,
        found: &mut Vec<FoundWord>,
    ) {
        let mut grid = grid.occupy(pos);
        let Some(letter) = grid.letter_at(pos) else {
            return;
        };

        let restore_len = letters.len();
        letters.push_str(letter);
        path.push(pos);

        if dictionary.has_prefix(letters) {
            if dictionary.exact_match(letters) == Some(false) && dictionary.mark_found(letters) {
                debug_assert!(PathValidator::is_valid_path(&grid, path));
                debug_assert_eq!(PathValidator::extract_word(&grid, path), *letters);
                found.push(FoundWord {
                    word: letters.clone(),
                    path: path.clone(),
                });
            }

            for next in grid.neighbors(pos) {
                Self::scan(dictionary, &mut grid, next, letters, path, found);
            }
        }

        path.pop();
        letters.truncate(restore_len);
    }
}
