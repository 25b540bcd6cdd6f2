pub mod board;

pub use board::{Cell, FoundWord, Position, SearchMode};
