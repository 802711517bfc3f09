//! Binds player actions and timer ticks to a [`QuizSession`].
//!
//! The renderer never touches the session directly. It polls
//! [`SessionController::view`] once per frame and draws the snapshot.

use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::data::QuestionBank;
use crate::models::NUM_CHOICES;
use crate::session::QuizSession;
use crate::timer::ElapsedTimer;

/// Longest player name the name field accepts, in characters.
pub const NAME_MAX_LENGTH: usize = 24;

/// Message shown after a submit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feedback {
    Correct,
    Incorrect,
    NoSelection,
}

impl Feedback {
    pub fn message(self) -> &'static str {
        match self {
            Feedback::Correct => "Correct!",
            Feedback::Incorrect => "Incorrect. Try again.",
            Feedback::NoSelection => "Please select an answer.",
        }
    }
}

/// What a submit did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Correct,
    Incorrect,
    /// Nothing was selected; the session was left untouched.
    NoSelection,
}

/// Read-only snapshot of everything the screen shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionView {
    pub player_name: String,
    pub question: String,
    pub options: [String; NUM_CHOICES],
    pub selected: Option<usize>,
    pub feedback: Option<Feedback>,
    pub score: u32,
    pub correct_answers: u32,
    pub incorrect_answers: u32,
    pub elapsed: String,
}

pub struct SessionController {
    bank: Arc<QuestionBank>,
    seed: Option<u64>,
    session: QuizSession,
    player_name: String,
    selected: Option<usize>,
    feedback: Option<Feedback>,
    timer: ElapsedTimer,
}

impl SessionController {
    pub fn new(bank: Arc<QuestionBank>) -> Self {
        Self::build(bank, None)
    }

    /// Every session this controller creates draws from `seed`.
    pub fn with_seed(bank: Arc<QuestionBank>, seed: u64) -> Self {
        Self::build(bank, Some(seed))
    }

    fn build(bank: Arc<QuestionBank>, seed: Option<u64>) -> Self {
        let mut session = new_session(&bank, seed);
        session.current_question();

        Self {
            bank,
            seed,
            session,
            player_name: String::new(),
            selected: None,
            feedback: None,
            timer: ElapsedTimer::new(),
        }
    }

    pub fn session(&self) -> &QuizSession {
        &self.session
    }

    pub fn player_name(&self) -> &str {
        &self.player_name
    }

    pub fn set_player_name(&mut self, name: &str) {
        self.player_name = name.chars().take(NAME_MAX_LENGTH).collect();
    }

    pub fn push_name_char(&mut self, c: char) {
        if self.player_name.chars().count() < NAME_MAX_LENGTH {
            self.player_name.push(c);
        }
    }

    pub fn pop_name_char(&mut self) {
        self.player_name.pop();
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn feedback(&self) -> Option<Feedback> {
        self.feedback
    }

    pub fn elapsed_seconds(&self) -> u64 {
        self.timer.seconds()
    }

    /// Select an option by position. Out-of-range positions are ignored.
    pub fn select(&mut self, index: usize) {
        if index < NUM_CHOICES {
            self.selected = Some(index);
        }
    }

    pub fn select_next(&mut self) {
        self.selected = Some(match self.selected {
            Some(index) => (index + 1) % NUM_CHOICES,
            None => 0,
        });
    }

    pub fn select_previous(&mut self) {
        self.selected = Some(match self.selected {
            Some(index) => (index + NUM_CHOICES - 1) % NUM_CHOICES,
            None => NUM_CHOICES - 1,
        });
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Check the selected option against the current question.
    pub fn submit(&mut self) -> SubmitOutcome {
        let Some(index) = self.selected else {
            tracing::warn!("submit without a selected answer");
            self.feedback = Some(Feedback::NoSelection);
            return SubmitOutcome::NoSelection;
        };

        let answer = self.session.current_options()[index].clone();
        let outcome = if self.session.verify_solution(&answer) {
            SubmitOutcome::Correct
        } else {
            SubmitOutcome::Incorrect
        };

        self.feedback = Some(match outcome {
            SubmitOutcome::Correct => Feedback::Correct,
            _ => Feedback::Incorrect,
        });
        self.selected = None;
        outcome
    }

    /// Replace the session with a fresh one and restart the clock.
    pub fn reset(&mut self) {
        let mut session = new_session(&self.bank, self.seed);
        session.current_question();
        self.session = session;
        self.selected = None;
        self.feedback = None;
        self.timer.reset();
        tracing::info!("session reset");
    }

    pub fn tick(&mut self) {
        self.timer.tick();
    }

    /// Tick if a full interval has passed since the last tick or reset.
    pub fn advance_clock(&mut self, now: Instant) -> bool {
        self.timer.advance(now)
    }

    pub fn time_until_tick(&self, now: Instant) -> Duration {
        self.timer.time_until_tick(now)
    }

    pub fn view(&mut self) -> SessionView {
        let question = self.session.current_question().to_string();
        let options = self.session.current_options().clone();

        SessionView {
            player_name: self.player_name.clone(),
            question,
            options,
            selected: self.selected,
            feedback: self.feedback,
            score: self.session.score(),
            correct_answers: self.session.correct_answers(),
            incorrect_answers: self.session.incorrect_answers(),
            elapsed: self.timer.label(),
        }
    }
}

fn new_session(bank: &Arc<QuestionBank>, seed: Option<u64>) -> QuizSession {
    match seed {
        Some(seed) => QuizSession::with_seed(Arc::clone(bank), seed),
        None => QuizSession::new(Arc::clone(bank)),
    }
}
