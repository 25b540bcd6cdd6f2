pub struct Scorer;

impl Scorer {
    /// Flat award for words of `LONG_WORD_LENGTH` letters or more
    pub const LONG_WORD_POINTS: u32 = 11;
    pub const LONG_WORD_LENGTH: usize = 8;

    /// Points for a single word of `length` letters.
    ///
    /// Scoring rules:
    /// - 8 or more letters: 11 points
    /// - 4 to 7 letters: one point for four letters plus one per extra letter
    /// - fewer than 4 letters: nothing
    pub fn word_points(length: usize) -> u32 {
        if length >= Self::LONG_WORD_LENGTH {
            Self::LONG_WORD_POINTS
        } else {
            length.saturating_sub(3) as u32
        }
    }

    /// Points for a word, counting letters as characters
    pub fn score_word(word: &str) -> u32 {
        Self::word_points(word.chars().count())
    }

    pub fn total_points<I, S>(words: I) -> u32
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        words
            .into_iter()
            .map(|word| Self::score_word(word.as_ref()))
            .sum()
    }
}
