use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph},
};

use crate::controller::SessionView;

pub fn render(frame: &mut Frame, area: Rect, view: &SessionView) {
    let content = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled("Score: ", Style::default().fg(Color::White)),
            Span::styled(
                view.score.to_string(),
                Style::default().fg(Color::Cyan).bold(),
            ),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            format!("Correct Answers: {}", view.correct_answers),
            Style::default().fg(Color::Green),
        )),
        Line::from(Span::styled(
            format!("Incorrect Answers: {}", view.incorrect_answers),
            Style::default().fg(Color::Red),
        )),
        Line::from(""),
        Line::from(Span::styled(
            view.elapsed.as_str(),
            Style::default().fg(Color::Yellow),
        )),
    ];

    let widget = Paragraph::new(content).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::DarkGray)
            .title(" KNOWLEDGE QUIZ ")
            .title_style(Style::default().fg(Color::Cyan).bold())
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(widget, area);
}
