use serde::{Deserialize, Serialize};

pub const NUM_CHOICES: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub prompt: String,
    pub choices: [String; NUM_CHOICES],
    pub correct_choice: String,
}

impl Question {
    pub fn new(prompt: &str, choices: [&str; NUM_CHOICES], correct_choice: &str) -> Self {
        Self {
            prompt: prompt.to_string(),
            choices: choices.map(str::to_string),
            correct_choice: correct_choice.to_string(),
        }
    }

    /// Whether `candidate`, trimmed, names the correct choice.
    pub fn is_correct(&self, candidate: &str) -> bool {
        eq_ignore_case(&self.correct_choice, candidate.trim())
    }

    /// Indices of the choices matching `text` case-insensitively.
    pub fn matching_choices<'a>(&'a self, text: &'a str) -> impl Iterator<Item = usize> + 'a {
        self.choices
            .iter()
            .enumerate()
            .filter(move |(_, choice)| eq_ignore_case(choice, text))
            .map(|(index, _)| index)
    }
}

/// Compare after full Unicode lowercasing of both sides.
pub fn eq_ignore_case(left: &str, right: &str) -> bool {
    left.chars()
        .flat_map(char::to_lowercase)
        .eq(right.chars().flat_map(char::to_lowercase))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_correct_trims_and_ignores_case() {
        let question = Question::new(
            "What is the capital of France?",
            ["Paris", "Berlin", "Madrid", "Rome"],
            "Paris",
        );
        assert!(question.is_correct("Paris"));
        assert!(question.is_correct("  Paris  "));
        assert!(question.is_correct("paris"));
        assert!(question.is_correct("\tPARIS\n"));
        assert!(!question.is_correct("Rome"));
        assert!(!question.is_correct("Par is"));
        assert!(!question.is_correct(""));
    }

    #[test]
    fn test_case_folding_is_full_lowercase() {
        assert!(eq_ignore_case("ÉCOLE", "école"));
        assert!(eq_ignore_case("Ærø", "æRØ"));
        // U+0130 lowercases to "i\u{307}", so it does not equal a plain "i".
        assert!(eq_ignore_case("İ", "i\u{307}"));
        assert!(!eq_ignore_case("İ", "i"));
        assert!(!eq_ignore_case("Paris", "Pari"));
    }

    #[test]
    fn test_matching_choices() {
        let question = Question::new("?", ["a", "B", "c", "b"], "b");
        let matches: Vec<usize> = question.matching_choices("b").collect();
        assert_eq!(matches, vec![1, 3]);
    }

    #[test]
    fn test_json_shape() {
        let json = r#"{"prompt":"What is 15 - 6?","choices":["8","9","10","11"],"correct_choice":"9"}"#;
        let question: Question = serde_json::from_str(json).unwrap();
        assert_eq!(question.prompt, "What is 15 - 6?");
        assert_eq!(question.choices[1], "9");

        let three_choices = r#"{"prompt":"?","choices":["1","2","3"],"correct_choice":"1"}"#;
        assert!(serde_json::from_str::<Question>(three_choices).is_err());
    }
}
