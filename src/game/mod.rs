// Word search engine and the pieces it runs on

pub mod grid;
pub mod scorer;
pub mod search;
pub mod validator;

pub use grid::Grid;
pub use scorer::Scorer;
pub use search::WordFinder;
