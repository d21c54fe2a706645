//! The question source collaborator.
//!
//! The one asynchronous boundary in the application: a fetch that
//! resolves exactly once and feeds [`crate::QuizEngine::load`]. There is
//! no retry policy here; if the fetch fails the caller stays on its
//! loading screen.

use std::fmt;
use std::path::PathBuf;

use futures_util::FutureExt;
use futures_util::future::BoxFuture;

use crate::models::Question;

/// Error fetching or decoding the question list.
#[derive(Debug)]
pub enum LoadError {
    /// Reading from the underlying storage failed.
    Io(std::io::Error),
    /// The data was not a valid question array.
    Parse(serde_json::Error),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Io(e) => write!(f, "failed to read questions: {}", e),
            LoadError::Parse(e) => write!(f, "failed to parse questions: {}", e),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Io(e) => Some(e),
            LoadError::Parse(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for LoadError {
    fn from(err: std::io::Error) -> Self {
        LoadError::Io(err)
    }
}

impl From<serde_json::Error> for LoadError {
    fn from(err: serde_json::Error) -> Self {
        LoadError::Parse(err)
    }
}

/// Supplies the immutable question list once at startup.
pub trait QuestionSource: Send + 'static {
    /// Start the one-shot fetch of the ordered question list.
    fn fetch_questions(&self) -> BoxFuture<'static, Result<Vec<Question>, LoadError>>;
}

/// Reads the question list from a JSON file on disk.
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl QuestionSource for FileSource {
    fn fetch_questions(&self) -> BoxFuture<'static, Result<Vec<Question>, LoadError>> {
        let path = self.path.clone();
        async move {
            let json = tokio::fs::read_to_string(&path).await?;
            parse_questions(&json)
        }
        .boxed()
    }
}

/// Parse a JSON array of `{prompt, options, correctOptionIndex}` records.
pub fn parse_questions(json: &str) -> Result<Vec<Question>, LoadError> {
    Ok(serde_json::from_str(json)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_question_records() {
        let json = r#"[
            {"prompt": "2 + 2?", "options": ["3", "4"], "correctOptionIndex": 1},
            {"prompt": "Sky color?", "options": ["blue", "green", "red"], "correctOptionIndex": 0}
        ]"#;
        let questions = parse_questions(json).unwrap();
        assert_eq!(questions.len(), 2);
        assert_eq!(questions[0].prompt, "2 + 2?");
        assert_eq!(questions[0].options, vec!["3", "4"]);
        assert_eq!(questions[0].correct_option_index, 1);
        assert_eq!(questions[1].options.len(), 3);
    }

    #[test]
    fn rejects_missing_fields() {
        let json = r#"[{"prompt": "incomplete", "options": ["a", "b"]}]"#;
        assert!(matches!(parse_questions(json), Err(LoadError::Parse(_))));
    }

    #[test]
    fn rejects_non_array_payload() {
        assert!(matches!(
            parse_questions(r#"{"prompt": "not a list"}"#),
            Err(LoadError::Parse(_))
        ));
    }

    #[tokio::test]
    async fn file_source_reports_missing_file() {
        let source = FileSource::new("/nonexistent/questions.json");
        let result = source.fetch_questions().await;
        assert!(matches!(result, Err(LoadError::Io(_))));
    }
}
