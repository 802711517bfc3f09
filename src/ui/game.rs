use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};

use crate::controller::{Feedback, SessionView};
use crate::models::{Focus, NUM_CHOICES};

const OPTION_LABELS: [char; NUM_CHOICES] = ['A', 'B', 'C', 'D'];
const NAME_PLACEHOLDER: &str = "Enter your name...";

pub fn render(frame: &mut Frame, area: Rect, view: &SessionView, focus: Focus) {
    let chunks = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(5),
        Constraint::Min(6),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .split(area);

    render_name_field(frame, chunks[0], &view.player_name, focus);
    render_question_text(frame, chunks[1], &view.question);
    render_options(frame, chunks[2], &view.options, view.selected, focus);
    render_feedback(frame, chunks[3], view.feedback);
    render_controls(frame, chunks[4], focus);
}

fn render_name_field(frame: &mut Frame, area: Rect, name: &str, focus: Focus) {
    let editing = focus == Focus::Name;
    let border = if editing { Color::Cyan } else { Color::DarkGray };

    let line = if name.is_empty() && !editing {
        Line::from(Span::styled(NAME_PLACEHOLDER, Style::default().fg(Color::DarkGray)))
    } else {
        let cursor = if editing { "_" } else { "" };
        Line::from(vec![
            Span::styled(name, Style::default().fg(Color::Yellow)),
            Span::styled(cursor, Style::default().fg(Color::Yellow)),
        ])
    };

    let widget = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border)
            .title(" Player ")
            .title_style(Style::default().fg(Color::Cyan))
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(widget, area);
}

fn render_question_text(frame: &mut Frame, area: Rect, text: &str) {
    let widget = Paragraph::new(text)
        .wrap(Wrap { trim: true })
        .style(Style::default().fg(Color::White).bold())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray))
                .padding(Padding::horizontal(1)),
        );
    frame.render_widget(widget, area);
}

fn render_options(
    frame: &mut Frame,
    area: Rect,
    options: &[String; NUM_CHOICES],
    selected: Option<usize>,
    focus: Focus,
) {
    let lines: Vec<Line> = options
        .iter()
        .enumerate()
        .map(|(index, option)| {
            let is_selected = selected == Some(index);
            let style = if is_selected {
                Style::default().fg(Color::Cyan).bold()
            } else {
                Style::default().fg(Color::Gray)
            };
            let marker = if is_selected { "(*)" } else { "( )" };

            Line::from(vec![
                Span::styled(format!(" {} ", marker), style),
                Span::styled(format!("{}. ", OPTION_LABELS[index]), style),
                Span::styled(option.as_str(), style),
            ])
        })
        .collect();

    let border = if focus == Focus::Choices {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    let widget = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border)
            .title(" Options ")
            .title_style(Style::default().fg(Color::Cyan))
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(widget, area);
}

fn render_feedback(frame: &mut Frame, area: Rect, feedback: Option<Feedback>) {
    let Some(feedback) = feedback else {
        return;
    };

    let color = match feedback {
        Feedback::Correct => Color::Green,
        Feedback::Incorrect | Feedback::NoSelection => Color::Red,
    };

    let widget = Paragraph::new(feedback.message())
        .alignment(Alignment::Center)
        .style(Style::default().fg(color).bold());
    frame.render_widget(widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect, focus: Focus) {
    let hint = match focus {
        Focus::Choices => "j/k select  ·  enter submit  ·  r reset  ·  tab name  ·  q quit",
        Focus::Name => "type your name  ·  enter/tab/esc back to options",
    };
    let widget = Paragraph::new(hint)
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}
