mod game;
mod scoreboard;

use ratatui::{prelude::*, widgets::Block};

use crate::controller::SessionView;
use crate::models::Focus;

pub fn render(frame: &mut Frame, view: &SessionView, focus: Focus) {
    let area = frame.area();
    frame.render_widget(Block::default().bg(Color::Reset), area);

    let chunks = Layout::horizontal([Constraint::Fill(1), Constraint::Length(28)])
        .margin(1)
        .split(area);

    game::render(frame, chunks[0], view, focus);
    scoreboard::render(frame, chunks[1], view);
}

#[cfg(test)]
mod tests {
    use ratatui::{Terminal, backend::TestBackend};

    use super::*;
    use crate::controller::Feedback;

    fn view() -> SessionView {
        SessionView {
            player_name: "Ada".to_string(),
            question: "What is the capital of Australia?".to_string(),
            options: ["Sydney", "Melbourne", "Canberra", "Perth"].map(str::to_string),
            selected: Some(2),
            feedback: Some(Feedback::Incorrect),
            score: 3,
            correct_answers: 3,
            incorrect_answers: 2,
            elapsed: "Time: 1:05".to_string(),
        }
    }

    fn screen_text(view: &SessionView, focus: Focus) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal
            .draw(|frame| render(frame, view, focus))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_render_shows_session_state() {
        let text = screen_text(&view(), Focus::Choices);

        assert!(text.contains("What is the capital of Australia?"));
        for option in ["Sydney", "Melbourne", "Canberra", "Perth"] {
            assert!(text.contains(option), "missing option {}", option);
        }
        assert!(text.contains("Incorrect. Try again."));
        assert!(text.contains("Correct Answers: 3"));
        assert!(text.contains("Incorrect Answers: 2"));
        assert!(text.contains("Time: 1:05"));
        assert!(text.contains("Ada"));
    }

    #[test]
    fn test_render_empty_name_shows_placeholder() {
        let mut view = view();
        view.player_name.clear();
        let text = screen_text(&view, Focus::Choices);
        assert!(text.contains("Enter your name..."));
    }
}
