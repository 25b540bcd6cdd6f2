use serde::{de::IntoDeserializer, Deserialize};

/// A cell coordinate: `y` selects the row, `x` the column within that row
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl Position {
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Apply a signed offset, returning `None` if either coordinate would go negative
    pub fn offset(&self, dx: isize, dy: isize) -> Option<Position> {
        Some(Position::new(
            self.x.checked_add_signed(dx)?,
            self.y.checked_add_signed(dy)?,
        ))
    }
}

/// A board cell. Letters are strings since a board token may be
/// more than one character (e.g. "Qu").
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    pub letter: String,
    /// Held by the path currently being explored
    pub used: bool,
}

impl Cell {
    pub fn new(letter: impl Into<String>) -> Self {
        Self {
            letter: letter.into(),
            used: false,
        }
    }
}

/// A dictionary word located on the board, with the path that first spelled it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoundWord {
    pub word: String,
    pub path: Vec<Position>,
}

/// How start cells are explored
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SearchMode {
    /// One start cell after another on a single shared grid
    Sequential,
    /// One blocking task per start cell, each on its own copy of the grid
    #[default]
    Parallel,
}

impl std::str::FromStr for SearchMode {
    type Err = serde::de::value::Error;

    /// Case-insensitive, surrounding whitespace ignored
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SearchMode::deserialize(s.trim().to_ascii_lowercase().into_deserializer())
    }
}

impl std::fmt::Display for SearchMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchMode::Sequential => write!(f, "sequential"),
            SearchMode::Parallel => write!(f, "parallel"),
        }
    }
}
