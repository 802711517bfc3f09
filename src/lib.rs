//! # knowledge-quiz
//!
//! A terminal trivia game: one random question at a time, four options,
//! running score and a session clock.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use knowledge_quiz::{Quiz, QuizError};
//!
//! fn main() -> Result<(), QuizError> {
//!     // Play with the built-in question bank
//!     let quiz = Quiz::builtin();
//!
//!     // Run the quiz in the terminal
//!     quiz.run()?;
//!
//!     Ok(())
//! }
//! ```

mod controller;
mod data;
pub mod logging;
mod models;
mod session;
pub mod terminal;
mod timer;
mod ui;

use std::io;
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use thiserror::Error;

pub use controller::{Feedback, NAME_MAX_LENGTH, SessionController, SessionView, SubmitOutcome};
pub use data::{BankError, LoadError, QuestionBank, load_questions_from_json};
pub use models::{Focus, NUM_CHOICES, Question};
pub use session::QuizSession;
pub use timer::{ElapsedTimer, TICK_RATE, format_elapsed};

/// Error type for quiz operations.
#[derive(Debug, Error)]
pub enum QuizError {
    #[error("Failed to load questions: {0}")]
    Load(#[from] LoadError),
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("Failed to set up logging: {0}")]
    Logging(String),
}

/// A quiz game that can be run in the terminal.
pub struct Quiz {
    controller: SessionController,
    focus: Focus,
}

impl Quiz {
    /// Create a quiz over the given bank.
    pub fn new(bank: QuestionBank) -> Self {
        Self::from_controller(SessionController::new(Arc::new(bank)))
    }

    /// Create a quiz whose question draws are reproducible.
    pub fn with_seed(bank: QuestionBank, seed: u64) -> Self {
        Self::from_controller(SessionController::with_seed(Arc::new(bank), seed))
    }

    /// Create a quiz over the built-in question bank.
    pub fn builtin() -> Self {
        Self::new(QuestionBank::builtin())
    }

    /// Load a quiz from a JSON file.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use knowledge_quiz::Quiz;
    ///
    /// let quiz = Quiz::from_json("questions.json").expect("Failed to load quiz");
    /// ```
    pub fn from_json<P: AsRef<Path>>(path: P) -> Result<Self, QuizError> {
        let bank = load_questions_from_json(path)?;
        Ok(Self::new(bank))
    }

    fn from_controller(controller: SessionController) -> Self {
        Self {
            controller,
            focus: Focus::default(),
        }
    }

    /// Prefill the player name field.
    pub fn with_player_name(mut self, name: &str) -> Self {
        self.controller.set_player_name(name);
        self
    }

    /// Run the quiz in the terminal.
    ///
    /// This takes over the terminal and returns when the player quits.
    pub fn run(mut self) -> Result<(), QuizError> {
        let mut term = terminal::init()?;
        let result = run_event_loop(&mut term, &mut self);
        terminal::restore()?;
        tracing::info!(
            score = self.controller.session().score(),
            answered = self.controller.session().answered(),
            elapsed = self.controller.elapsed_seconds(),
            "quiz finished"
        );
        result
    }

    pub fn controller(&self) -> &SessionController {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut SessionController {
        &mut self.controller
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Apply one key press. Returns true if the quiz should exit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return true;
        }

        match self.focus {
            Focus::Choices => self.handle_choices_input(key.code),
            Focus::Name => {
                self.handle_name_input(key.code);
                false
            }
        }
    }

    fn handle_choices_input(&mut self, key: KeyCode) -> bool {
        let controller = &mut self.controller;
        match key {
            KeyCode::Down | KeyCode::Char('j') => controller.select_next(),
            KeyCode::Up | KeyCode::Char('k') => controller.select_previous(),
            KeyCode::Char(c @ '1'..='4') => controller.select(usize::from(c as u8 - b'1')),
            KeyCode::Char(c @ ('a'..='d' | 'A'..='D')) => {
                controller.select(usize::from(c.to_ascii_lowercase() as u8 - b'a'))
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                controller.submit();
            }
            KeyCode::Char('r') | KeyCode::Char('R') => controller.reset(),
            KeyCode::Tab | KeyCode::Char('n') | KeyCode::Char('N') => self.focus = Focus::Name,
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => return true,
            _ => {}
        }
        false
    }

    fn handle_name_input(&mut self, key: KeyCode) {
        match key {
            KeyCode::Enter | KeyCode::Tab | KeyCode::Esc => self.focus = self.focus.toggle(),
            KeyCode::Backspace => self.controller.pop_name_char(),
            KeyCode::Char(c) if !c.is_control() => self.controller.push_name_char(c),
            _ => {}
        }
    }
}

fn run_event_loop(terminal: &mut terminal::GameTerminal, quiz: &mut Quiz) -> Result<(), QuizError> {
    loop {
        let view = quiz.controller.view();
        terminal.draw(|frame| ui::render(frame, &view, quiz.focus))?;

        let timeout = quiz.controller.time_until_tick(Instant::now());
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press && quiz.handle_key(key) {
                    break;
                }
            }
        }

        quiz.controller.advance_clock(Instant::now());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(quiz: &mut Quiz, code: KeyCode) -> bool {
        quiz.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn quiz() -> Quiz {
        Quiz::with_seed(QuestionBank::builtin(), 5)
    }

    #[test]
    fn test_submit_without_selection_via_keys() {
        let mut quiz = quiz();
        let index = quiz.controller().session().current_index();

        assert!(!press(&mut quiz, KeyCode::Enter));
        assert_eq!(quiz.controller().feedback(), Some(Feedback::NoSelection));
        assert_eq!(quiz.controller().session().current_index(), index);
        assert_eq!(quiz.controller().session().answered(), 0);
    }

    #[test]
    fn test_select_and_submit_via_keys() {
        let mut quiz = quiz();
        press(&mut quiz, KeyCode::Char('3'));
        assert_eq!(quiz.controller().selected(), Some(2));
        press(&mut quiz, KeyCode::Char('b'));
        assert_eq!(quiz.controller().selected(), Some(1));
        press(&mut quiz, KeyCode::Char('j'));
        assert_eq!(quiz.controller().selected(), Some(2));

        press(&mut quiz, KeyCode::Enter);
        assert_eq!(quiz.controller().session().answered(), 1);
        assert_eq!(quiz.controller().selected(), None);
    }

    #[test]
    fn test_reset_key() {
        let mut quiz = quiz();
        press(&mut quiz, KeyCode::Char('a'));
        press(&mut quiz, KeyCode::Enter);
        quiz.controller_mut().tick();

        press(&mut quiz, KeyCode::Char('r'));
        assert_eq!(quiz.controller().session().answered(), 0);
        assert_eq!(quiz.controller().elapsed_seconds(), 0);
        assert_eq!(quiz.controller().feedback(), None);
    }

    #[test]
    fn test_name_focus_captures_text() {
        let mut quiz = quiz();
        press(&mut quiz, KeyCode::Tab);
        assert_eq!(quiz.focus(), Focus::Name);

        for c in "quinn".chars() {
            assert!(!press(&mut quiz, KeyCode::Char(c)));
        }
        press(&mut quiz, KeyCode::Backspace);
        assert_eq!(quiz.controller().player_name(), "quin");
        assert_eq!(quiz.controller().selected(), None);

        press(&mut quiz, KeyCode::Esc);
        assert_eq!(quiz.focus(), Focus::Choices);
    }

    #[test]
    fn test_quit_keys() {
        let mut quiz = quiz();
        assert!(press(&mut quiz, KeyCode::Char('q')));
        assert!(quiz.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)));

        press(&mut quiz, KeyCode::Tab);
        assert!(!press(&mut quiz, KeyCode::Char('q')));
    }

    #[test]
    fn test_with_player_name() {
        let quiz = Quiz::builtin().with_player_name("Ada");
        assert_eq!(quiz.controller().player_name(), "Ada");
    }
}
