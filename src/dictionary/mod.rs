use std::path::Path;

use dashmap::DashMap;
use tokio::fs;

use crate::error::{Result, SolverError};

/// Valid words plus a found flag per word.
///
/// The word list is immutable after construction and kept sorted so prefix
/// queries are a binary search. Found flags sit in a `DashMap`, so any
/// number of search tasks can query and mark words through a shared
/// reference.
pub struct Dictionary {
    words: Vec<String>,
    found: DashMap<String, bool>,
}

impl Dictionary {
    /// Build from any word source, dropping duplicates and words shorter
    /// than `min_word_length` characters
    pub fn from_words<I, S>(words: I, min_word_length: usize) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut words: Vec<String> = words
            .into_iter()
            .map(Into::into)
            .filter(|word| !word.is_empty() && word.chars().count() >= min_word_length)
            .collect();
        words.sort_unstable();
        words.dedup();

        let found = words.iter().map(|word| (word.clone(), false)).collect();

        Self { words, found }
    }

    /// Parse a word list: one word per line. Blank lines are skipped and the
    /// last word is kept whether or not the text ends with a newline.
    pub fn parse(content: &str, min_word_length: usize) -> Self {
        Self::from_words(
            content.lines().map(|line| line.trim_end_matches('\r')),
            min_word_length,
        )
    }

    /// Load dictionary from a file
    pub async fn load<P: AsRef<Path>>(path: P, min_word_length: usize) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .await
            .map_err(|source| SolverError::ReadWordList {
                path: path.to_path_buf(),
                source,
            })?;

        let dictionary = Self::parse(&content, min_word_length);
        if dictionary.is_empty() {
            tracing::warn!("Word list {} contains no usable words", path.display());
        } else {
            tracing::info!("Loaded {} words into dictionary", dictionary.len());
        }

        Ok(dictionary)
    }

    /// Create an empty dictionary (for testing)
    #[cfg(test)]
    pub fn empty() -> Self {
        Self {
            words: Vec::new(),
            found: DashMap::new(),
        }
    }

    /// True if at least one word starts with `prefix`
    pub fn has_prefix(&self, prefix: &str) -> bool {
        // First word not less than `prefix` is the only candidate
        let idx = self.words.partition_point(|word| word.as_str() < prefix);
        self.words
            .get(idx)
            .is_some_and(|word| word.starts_with(prefix))
    }

    /// `None` if `word` is not in the dictionary, otherwise whether it has
    /// already been found
    pub fn exact_match(&self, word: &str) -> Option<bool> {
        self.found.get(word).map(|found| *found)
    }

    /// Set the found flag for `word`. Returns true only for the call that
    /// flipped it; unknown or already-found words are left alone.
    pub fn mark_found(&self, word: &str) -> bool {
        match self.found.get_mut(word) {
            Some(mut found) if !*found => {
                *found = true;
                true
            }
            _ => false,
        }
    }

    /// Found words in lexicographic order
    pub fn found_words(&self) -> Vec<String> {
        self.words
            .iter()
            .filter(|word| self.exact_match(word) == Some(true))
            .cloned()
            .collect()
    }

    /// Get the number of words in the dictionary
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if dictionary is empty
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;

    fn sample() -> Dictionary {
        Dictionary::from_words(["CAT", "CATS", "DOG", "COT"], 1)
    }

    #[test]
    fn test_empty_dictionary() {
        let dict = Dictionary::empty();
        assert!(dict.is_empty());
        assert_eq!(dict.exact_match("TEST"), None);
        assert!(!dict.has_prefix(""));
        assert!(!dict.has_prefix("T"));
    }

    #[test]
    fn test_has_prefix() {
        let dict = sample();
        assert!(dict.has_prefix(""));
        assert!(dict.has_prefix("C"));
        assert!(dict.has_prefix("CA"));
        assert!(dict.has_prefix("CAT"));
        assert!(dict.has_prefix("CATS"));
        assert!(dict.has_prefix("CO"));
        assert!(!dict.has_prefix("CATSS"));
        assert!(!dict.has_prefix("CB"));
        assert!(!dict.has_prefix("E"));
        assert!(!dict.has_prefix("DOGS"));
    }

    #[test]
    fn test_has_prefix_matches_linear_scan() {
        let dict = sample();
        let words = ["CAT", "CATS", "DOG", "COT"];
        for prefix in ["", "A", "C", "CA", "CAX", "CO", "COT", "D", "DO", "DOX", "Z"] {
            let expected = words.iter().any(|word| word.starts_with(prefix));
            assert_eq!(dict.has_prefix(prefix), expected, "prefix {:?}", prefix);
        }
    }

    #[test]
    fn test_exact_match() {
        let dict = sample();
        assert_eq!(dict.exact_match("CAT"), Some(false));
        assert_eq!(dict.exact_match("CA"), None);
        assert_eq!(dict.exact_match("cat"), None);
    }

    #[test]
    fn test_mark_found_is_idempotent() {
        let dict = sample();
        assert!(dict.mark_found("DOG"));
        assert!(!dict.mark_found("DOG"));
        assert_eq!(dict.exact_match("DOG"), Some(true));
        assert_eq!(dict.found_words(), vec!["DOG".to_string()]);
    }

    #[test]
    fn test_mark_found_unknown_word_is_noop() {
        let dict = sample();
        assert!(!dict.mark_found("BIRD"));
        assert_eq!(dict.exact_match("BIRD"), None);
        assert!(dict.found_words().is_empty());
    }

    #[test]
    fn test_parse_word_list() {
        let dict = Dictionary::parse("CAT\r\nDOG\n\nCAT\nEMU", 1);
        assert_eq!(dict.len(), 3);
        assert!(dict.exact_match("CAT").is_some());
        assert!(dict.exact_match("EMU").is_some());
    }

    #[test]
    fn test_min_word_length() {
        let dict = Dictionary::parse("A\nAT\nATE\nATES\n", 3);
        assert_eq!(dict.len(), 2);
        assert_eq!(dict.exact_match("AT"), None);
        assert!(dict.exact_match("ATE").is_some());
    }

    #[test]
    fn test_concurrent_mark_found_single_winner() {
        let dict = Arc::new(sample());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let dict = dict.clone();
                std::thread::spawn(move || dict.mark_found("CATS"))
            })
            .collect();

        let winners = handles
            .into_iter()
            .map(|handle| handle.join().unwrap())
            .filter(|won| *won)
            .count();
        assert_eq!(winners, 1);
    }

    #[tokio::test]
    async fn test_load_missing_word_list() {
        let result = Dictionary::load("/nonexistent/words.txt", 1).await;
        assert!(matches!(result, Err(SolverError::ReadWordList { .. })));
    }
}
