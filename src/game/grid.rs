use std::ops::{Deref, DerefMut};
use std::path::Path;

use tokio::fs;

use crate::{
    error::{Result, SolverError},
    models::{Cell, Position},
};

/// Neighbour offsets as (dx, dy).
/// Order: up, down, left, right, down-right, down-left, up-right, up-left
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (0, -1),
    (0, 1),
    (-1, 0),
    (1, 0),
    (1, 1),
    (-1, 1),
    (1, -1),
    (-1, -1),
];

/// Letter board. Rows may have different lengths.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Grid {
    rows: Vec<Vec<Cell>>,
}

impl Grid {
    pub fn from_rows<R, L>(rows: R) -> Self
    where
        R: IntoIterator,
        R::Item: IntoIterator<Item = L>,
        L: Into<String>,
    {
        Self {
            rows: rows
                .into_iter()
                .map(|row| row.into_iter().map(Cell::new).collect())
                .collect(),
        }
    }

    /// Parse a board: one row per line, letters separated by commas.
    /// Blank lines are skipped and the last row is kept whether or not
    /// the text ends with a newline.
    pub fn parse(content: &str) -> Self {
        Self::from_rows(
            content
                .lines()
                .map(|line| line.trim_end_matches('\r'))
                .filter(|line| !line.trim().is_empty())
                .map(|line| line.split(',').map(str::trim)),
        )
    }

    /// Load a board file
    pub async fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .await
            .map_err(|source| SolverError::ReadBoard {
                path: path.to_path_buf(),
                source,
            })?;

        let grid = Self::parse(&content);
        tracing::info!(
            "Loaded {}-row board with {} cells from {}",
            grid.height(),
            grid.cell_count(),
            path.display()
        );

        Ok(grid)
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Length of row `y`, zero if the row does not exist
    pub fn width(&self, y: usize) -> usize {
        self.rows.get(y).map_or(0, Vec::len)
    }

    pub fn cell_count(&self) -> usize {
        self.rows.iter().map(Vec::len).sum()
    }

    pub fn contains(&self, pos: Position) -> bool {
        pos.x < self.width(pos.y)
    }

    pub fn cell(&self, pos: Position) -> Option<&Cell> {
        self.rows.get(pos.y)?.get(pos.x)
    }

    pub fn letter_at(&self, pos: Position) -> Option<&str> {
        self.cell(pos).map(|cell| cell.letter.as_str())
    }

    pub fn is_used(&self, pos: Position) -> bool {
        self.cell(pos).is_some_and(|cell| cell.used)
    }

    pub fn mark_used(&mut self, pos: Position) {
        self.set_used(pos, true);
    }

    pub fn mark_unused(&mut self, pos: Position) {
        self.set_used(pos, false);
    }

    fn set_used(&mut self, pos: Position, used: bool) {
        if let Some(cell) = self.rows.get_mut(pos.y).and_then(|row| row.get_mut(pos.x)) {
            cell.used = used;
        }
    }

    /// Mark `pos` used until the returned guard is dropped
    pub fn occupy(&mut self, pos: Position) -> Occupied<'_> {
        self.mark_used(pos);
        Occupied { grid: self, pos }
    }

    /// In-bounds, unused cells adjacent to `pos`, in `NEIGHBOR_OFFSETS` order
    pub fn neighbors(&self, pos: Position) -> Vec<Position> {
        NEIGHBOR_OFFSETS
            .iter()
            .filter_map(|&(dx, dy)| pos.offset(dx, dy))
            .filter(|next| self.contains(*next) && !self.is_used(*next))
            .collect()
    }

    /// Every cell position in row-major order
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.rows
            .iter()
            .enumerate()
            .flat_map(|(y, row)| (0..row.len()).map(move |x| Position::new(x, y)))
    }
}

/// A cell held by the path being explored. Releases the cell on drop,
/// and derefs to the grid so the holder can keep walking.
pub struct Occupied<'a> {
    grid: &'a mut Grid,
    pos: Position,
}

impl Deref for Occupied<'_> {
    type Target = Grid;

    fn deref(&self) -> &Grid {
        &*self.grid
    }
}

impl DerefMut for Occupied<'_> {
    fn deref_mut(&mut self) -> &mut Grid {
        &mut *self.grid
    }
}

impl Drop for Occupied<'_> {
    fn drop(&mut self) {
        self.grid.mark_unused(self.pos);
    }
}
