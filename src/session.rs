//! The quiz model: current question, answer checking and score counters.

use std::sync::Arc;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::data::QuestionBank;
use crate::models::{NUM_CHOICES, Question};

/// One running quiz. Replaced wholesale on reset.
#[derive(Debug)]
pub struct QuizSession {
    bank: Arc<QuestionBank>,
    current: Option<usize>,
    score: u32,
    correct_answers: u32,
    incorrect_answers: u32,
    rng: StdRng,
}

impl QuizSession {
    /// Create a session whose draws are seeded from the operating system.
    pub fn new(bank: Arc<QuestionBank>) -> Self {
        Self::from_rng(bank, StdRng::from_os_rng())
    }

    /// Create a session with a reproducible sequence of draws.
    pub fn with_seed(bank: Arc<QuestionBank>, seed: u64) -> Self {
        Self::from_rng(bank, StdRng::seed_from_u64(seed))
    }

    fn from_rng(bank: Arc<QuestionBank>, rng: StdRng) -> Self {
        Self {
            bank,
            current: None,
            score: 0,
            correct_answers: 0,
            incorrect_answers: 0,
            rng,
        }
    }

    /// Draw a new current question, uniformly and with replacement.
    pub fn next_question(&mut self) {
        self.draw();
    }

    /// The prompt of the current question, drawing one first if needed.
    pub fn current_question(&mut self) -> &str {
        &self.current().prompt
    }

    /// The four choices of the current question in stored order.
    pub fn current_options(&mut self) -> &[String; NUM_CHOICES] {
        &self.current().choices
    }

    /// Check `candidate` against the current question and advance.
    ///
    /// Leading and trailing whitespace is ignored and the comparison is
    /// case-insensitive. The current question is consumed whether or not the
    /// answer was right.
    pub fn verify_solution(&mut self, candidate: &str) -> bool {
        let is_right = self.current().is_correct(candidate);
        if is_right {
            self.score += 1;
            self.correct_answers += 1;
        } else {
            self.incorrect_answers += 1;
        }

        tracing::info!(
            correct = is_right,
            score = self.score,
            correct_answers = self.correct_answers,
            incorrect_answers = self.incorrect_answers,
            "verified answer"
        );

        self.next_question();
        is_right
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn correct_answers(&self) -> u32 {
        self.correct_answers
    }

    pub fn incorrect_answers(&self) -> u32 {
        self.incorrect_answers
    }

    pub fn answered(&self) -> u32 {
        self.correct_answers + self.incorrect_answers
    }

    /// Index of the current question, or `None` before the first draw.
    pub fn current_index(&self) -> Option<usize> {
        self.current
    }

    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    fn current(&mut self) -> &Question {
        let index = match self.current {
            Some(index) => index,
            None => self.draw(),
        };
        &self.bank[index]
    }

    fn draw(&mut self) -> usize {
        let index = self.rng.random_range(0..self.bank.len());
        tracing::debug!(index, "drew question");
        self.current = Some(index);
        index
    }
}
