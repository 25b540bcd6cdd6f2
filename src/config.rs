use std::{env, path::PathBuf};

use crate::{
    error::{Result, SolverError},
    models::SearchMode,
};

#[derive(Debug, Clone)]
pub struct Config {
    pub input: InputConfig,
    pub search: SearchConfig,
}

#[derive(Debug, Clone)]
pub struct InputConfig {
    pub board_path: PathBuf,
    pub word_list_path: PathBuf,
    /// Words shorter than this many letters are left out of the dictionary
    pub min_word_length: usize,
}

#[derive(Debug, Clone)]
pub struct SearchConfig {
    pub mode: SearchMode,
}

/// Variables from `.env` and the process environment
pub fn env_lookup() -> impl Fn(&str) -> Option<String> {
    dotenvy::dotenv().ok();
    |key: &str| env::var(key).ok()
}

impl Config {
    /// Build from an arbitrary variable source, falling back to defaults
    /// for anything unset
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let input = InputConfig {
            board_path: lookup("BOARD_PATH")
                .unwrap_or_else(|| "board.txt".to_string())
                .into(),
            word_list_path: lookup("WORD_LIST_PATH")
                .unwrap_or_else(|| "words.txt".to_string())
                .into(),
            min_word_length: match lookup("MIN_WORD_LENGTH") {
                Some(value) => value
                    .trim()
                    .parse()
                    .map_err(|_| SolverError::InvalidConfig {
                        key: "MIN_WORD_LENGTH",
                        value,
                    })?,
                None => 1,
            },
        };

        let search = SearchConfig {
            mode: match lookup("SEARCH_MODE") {
                Some(value) => value
                    .parse()
                    .map_err(|_| SolverError::InvalidConfig {
                        key: "SEARCH_MODE",
                        value,
                    })?,
                None => SearchMode::default(),
            },
        };

        Ok(Config { input, search })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.input.board_path, PathBuf::from("board.txt"));
        assert_eq!(config.input.word_list_path, PathBuf::from("words.txt"));
        assert_eq!(config.input.min_word_length, 1);
        assert_eq!(config.search.mode, SearchMode::Parallel);
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("BOARD_PATH", "/tmp/b.txt"),
            ("WORD_LIST_PATH", "/tmp/w.txt"),
            ("MIN_WORD_LENGTH", "4"),
            ("SEARCH_MODE", "sequential"),
        ]))
        .unwrap();
        assert_eq!(config.input.board_path, PathBuf::from("/tmp/b.txt"));
        assert_eq!(config.input.word_list_path, PathBuf::from("/tmp/w.txt"));
        assert_eq!(config.input.min_word_length, 4);
        assert_eq!(config.search.mode, SearchMode::Sequential);
    }

    #[test]
    fn test_invalid_values() {
        let result = Config::from_lookup(lookup_from(&[("MIN_WORD_LENGTH", "four")]));
        assert!(matches!(
            result,
            Err(SolverError::InvalidConfig { key: "MIN_WORD_LENGTH", .. })
        ));

        let result = Config::from_lookup(lookup_from(&[("SEARCH_MODE", "fast")]));
        assert!(matches!(
            result,
            Err(SolverError::InvalidConfig { key: "SEARCH_MODE", .. })
        ));
    }
}
