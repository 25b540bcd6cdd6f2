use std::path::Path;

use tokio::fs;

use crate::{
    error::{Result, SolverError},
    game::Scorer,
    models::FoundWord,
};

/// Found words ready for output, longest first, with their total score
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub words: Vec<String>,
    pub points: u32,
}

impl Report {
    pub fn new(found: Vec<FoundWord>) -> Self {
        let mut words: Vec<String> = found.into_iter().map(|f| f.word).collect();
        let points = Scorer::total_points(&words);
        sort_by_length(&mut words);

        Self { words, points }
    }

    /// One word per line
    pub fn render(&self) -> String {
        self.words.iter().map(|word| format!("{}\n", word)).collect()
    }

    pub fn summary(&self) -> String {
        format!(
            "Found {} words worth a total of {} points!",
            self.words.len(),
            self.points
        )
    }

    /// Create or truncate `path` and write the rendered list to it
    pub async fn write_to<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        fs::write(path, self.render())
            .await
            .map_err(|source| SolverError::CreateOutput {
                path: path.to_path_buf(),
                source,
            })?;

        tracing::info!("Wrote {} words to {}", self.words.len(), path.display());
        Ok(())
    }
}

/// Stable sort, longest word first
pub fn sort_by_length(words: &mut [String]) {
    words.sort_by_key(|word| std::cmp::Reverse(word.chars().count()));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn found(words: &[&str]) -> Vec<FoundWord> {
        words
            .iter()
            .map(|word| FoundWord {
                word: word.to_string(),
                path: Vec::new(),
            })
            .collect()
    }

    #[test]
    fn test_sort_by_length() {
        let mut words = vec!["AB".to_string(), "ABCD".to_string(), "ABC".to_string()];
        sort_by_length(&mut words);
        assert_eq!(words, vec!["ABCD", "ABC", "AB"]);
    }

    #[test]
    fn test_sort_is_stable() {
        let mut words = vec![
            "TEA".to_string(),
            "STAR".to_string(),
            "ANT".to_string(),
            "RATS".to_string(),
        ];
        sort_by_length(&mut words);
        assert_eq!(words, vec!["STAR", "RATS", "TEA", "ANT"]);
    }

    #[test]
    fn test_report_scores_and_orders() {
        let report = Report::new(found(&["WORD", "ABCDEFGH"]));
        assert_eq!(report.points, 12);
        assert_eq!(report.words, vec!["ABCDEFGH", "WORD"]);
        assert_eq!(report.render(), "ABCDEFGH\nWORD\n");
        assert_eq!(report.summary(), "Found 2 words worth a total of 12 points!");
    }

    #[test]
    fn test_empty_report() {
        let report = Report::new(Vec::new());
        assert_eq!(report.points, 0);
        assert_eq!(report.render(), "");
        assert_eq!(report.summary(), "Found 0 words worth a total of 0 points!");
    }

    #[tokio::test]
    async fn test_write_to_file() {
        let path = std::env::temp_dir().join(format!("report-{}.txt", uuid::Uuid::new_v4()));
        let report = Report::new(found(&["CAT", "CATS"]));

        report.write_to(&path).await.unwrap();
        let written = tokio::fs::read_to_string(&path).await.unwrap();
        tokio::fs::remove_file(&path).await.unwrap();

        assert_eq!(written, "CATS\nCAT\n");
    }

    #[tokio::test]
    async fn test_write_to_missing_directory() {
        let report = Report::new(found(&["CAT"]));
        let result = report.write_to("/nonexistent/dir/out.txt").await;
        assert!(matches!(result, Err(SolverError::CreateOutput { .. })));
    }
}
