use std::ops::Index;

use thiserror::Error;

use crate::models::{NUM_CHOICES, Question, eq_ignore_case};

/// Reasons a set of questions cannot form a bank.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BankError {
    #[error("question bank must contain at least one question")]
    Empty,
    #[error("question {index}: choice {choice:?} appears more than once")]
    DuplicateChoice { index: usize, choice: String },
    #[error("question {index}: correct answer {answer:?} is not one of the choices")]
    AnswerNotAChoice { index: usize, answer: String },
}

/// The immutable, validated set of quiz questions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

impl QuestionBank {
    pub fn new(questions: Vec<Question>) -> Result<Self, BankError> {
        if questions.is_empty() {
            return Err(BankError::Empty);
        }

        for (index, question) in questions.iter().enumerate() {
            validate_question(index, question)?;
        }

        Ok(Self { questions })
    }

    /// The bank compiled into the binary.
    pub fn builtin() -> Self {
        Self {
            questions: builtin_questions(),
        }
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }
}

impl Index<usize> for QuestionBank {
    type Output = Question;

    fn index(&self, index: usize) -> &Question {
        &self.questions[index]
    }
}

fn validate_question(index: usize, question: &Question) -> Result<(), BankError> {
    for (position, choice) in question.choices.iter().enumerate() {
        let repeated = question.choices[position + 1..]
            .iter()
            .any(|other| eq_ignore_case(choice, other));
        if repeated {
            return Err(BankError::DuplicateChoice {
                index,
                choice: choice.clone(),
            });
        }
    }

    // Choices are distinct, so at most one can match.
    if question
        .matching_choices(&question.correct_choice)
        .next()
        .is_none()
    {
        return Err(BankError::AnswerNotAChoice {
            index,
            answer: question.correct_choice.clone(),
        });
    }

    Ok(())
}

const BUILTIN: [(&str, [&str; NUM_CHOICES], &str); 19] = [
    (
        "What is the capital of France?",
        ["Paris", "Berlin", "Madrid", "Rome"],
        "Paris",
    ),
    (
        "Who wrote 'To Kill a Mockingbird'?",
        ["Harper Lee", "Mark Twain", "J.K. Rowling", "Ernest Hemingway"],
        "Harper Lee",
    ),
    ("What is 5 + 7?", ["10", "11", "12", "13"], "12"),
    ("What is the square root of 16?", ["3", "4", "5", "6"], "4"),
    (
        "Who painted the Mona Lisa?",
        ["Vincent van Gogh", "Pablo Picasso", "Leonardo da Vinci", "Claude Monet"],
        "Leonardo da Vinci",
    ),
    (
        "What is the largest planet in our solar system?",
        ["Earth", "Mars", "Jupiter", "Saturn"],
        "Jupiter",
    ),
    ("What is 9 * 8?", ["72", "81", "64", "73"], "72"),
    (
        "Who developed the theory of relativity?",
        ["Isaac Newton", "Albert Einstein", "Galileo Galilei", "Nikola Tesla"],
        "Albert Einstein",
    ),
    (
        "What is the chemical symbol for water?",
        ["O2", "H2O", "CO2", "NaCl"],
        "H2O",
    ),
    (
        "Who is known as the father of computers?",
        ["Alan Turing", "John von Neumann", "Charles Babbage", "Ada Lovelace"],
        "Charles Babbage",
    ),
    (
        "What year did the Titanic sink?",
        ["1910", "1912", "1914", "1916"],
        "1912",
    ),
    (
        "The first individual to walk on the moon?",
        ["Buzz Aldrin", "Neil Armstrong", "Yuri Gagarin", "Michael Collins"],
        "Neil Armstrong",
    ),
    (
        "What's the capital of Japan?",
        ["Seoul", "Beijing", "Tokyo", "Bangkok"],
        "Tokyo",
    ),
    ("What is 12 * 12?", ["121", "122", "143", "144"], "144"),
    (
        "What is the freezing point of water in Celsius?",
        ["0", "-1", "-5", "-10"],
        "0",
    ),
    (
        "Who discovered penicillin?",
        ["Marie Curie", "Alexander Fleming", "Louis Pasteur", "Joseph Lister"],
        "Alexander Fleming",
    ),
    (
        "What is the largest ocean on Earth?",
        ["Atlantic", "Indian", "Pacific", "Arctic"],
        "Pacific",
    ),
    (
        "What is the capital of Australia?",
        ["Sydney", "Melbourne", "Canberra", "Perth"],
        "Canberra",
    ),
    ("What is 15 - 6?", ["8", "9", "10", "11"], "9"),
];

fn builtin_questions() -> Vec<Question> {
    BUILTIN
        .iter()
        .map(|(prompt, choices, answer)| Question::new(prompt, *choices, answer))
        .collect()
}
