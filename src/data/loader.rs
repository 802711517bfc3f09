use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::bank::{BankError, QuestionBank};
use crate::models::Question;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("invalid question bank: {0}")]
    Invalid(#[from] BankError),
}

/// Load and validate a question bank from a JSON array of questions.
pub fn load_questions_from_json<P: AsRef<Path>>(path: P) -> Result<QuestionBank, LoadError> {
    let path = path.as_ref();

    let json_content = fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let questions: Vec<Question> =
        serde_json::from_str(&json_content).map_err(|source| LoadError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    let bank = QuestionBank::new(questions)?;
    tracing::info!(path = %path.display(), questions = bank.len(), "loaded question bank");
    Ok(bank)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_temp(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "knowledge-quiz-{}-{}.json",
            name,
            std::process::id()
        ));
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_load_valid_file() {
        let path = write_temp(
            "valid",
            r#"[
                {"prompt": "What is 5 + 7?", "choices": ["10", "11", "12", "13"], "correct_choice": "12"},
                {"prompt": "What is 15 - 6?", "choices": ["8", "9", "10", "11"], "correct_choice": "9"}
            ]"#,
        );
        let bank = load_questions_from_json(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(bank.len(), 2);
        assert_eq!(bank[1].prompt, "What is 15 - 6?");
    }

    #[test]
    fn test_missing_file() {
        let path = std::env::temp_dir().join("knowledge-quiz-does-not-exist.json");
        let err = load_questions_from_json(&path).unwrap_err();
        assert!(matches!(err, LoadError::Read { .. }));
    }

    #[test]
    fn test_malformed_json() {
        let path = write_temp("malformed", "[{\"prompt\": ");
        let err = load_questions_from_json(&path).unwrap_err();
        fs::remove_file(&path).unwrap();

        assert!(matches!(err, LoadError::Parse { .. }));
    }

    #[test]
    fn test_empty_array_is_invalid() {
        let path = write_temp("empty", "[]");
        let err = load_questions_from_json(&path).unwrap_err();
        fs::remove_file(&path).unwrap();

        assert!(matches!(err, LoadError::Invalid(BankError::Empty)));
    }
}
