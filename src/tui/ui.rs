//! Stateless UI rendering for the game screen.

use super::app::{App, FeedbackRow};
use dexdle_core::{Attribute, Verdict};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
};

const COLUMNS: [&str; 6] = ["Name", "Gen", "Type 1", "Type 2", "Height", "Weight"];

/// Renders the whole screen.
pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Length(3), // Status
            Constraint::Length(3), // Input
            Constraint::Length(7), // Suggestions
            Constraint::Min(4),    // Feedback
            Constraint::Length(1), // Help
        ])
        .split(frame.area());

    let title = Paragraph::new("Dexdle - Guess the Pokémon")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let status = Paragraph::new(app.status_message())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[1]);

    draw_input(frame, chunks[2], app);
    draw_suggestions(frame, chunks[3], app);
    draw_feedback(frame, chunks[4], app.rows());

    let help = Paragraph::new("Enter: guess  Tab: complete  ↑/↓: pick  Ctrl-R: new game  Esc: quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[5]);
}

fn draw_input(frame: &mut Frame, area: Rect, app: &App) {
    let style = if app.input_enabled() {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let title = match app.snapshot() {
        Some(s) => format!("Guess ({}/{})", s.attempt_count, s.attempt_limit),
        None => "Guess".to_string(),
    };
    let input = Paragraph::new(app.input())
        .style(style)
        .block(Block::default().title(title).borders(Borders::ALL));
    frame.render_widget(input, area);
}

fn draw_suggestions(frame: &mut Frame, area: Rect, app: &App) {
    let lines: Vec<Line> = app
        .suggestions()
        .iter()
        .enumerate()
        .map(|(i, suggestion)| {
            let style = if app.selected() == Some(i) {
                Style::default().bg(Color::White).fg(Color::Black)
            } else {
                Style::default()
            };
            Line::from(Span::styled(suggestion.name.clone(), style))
        })
        .collect();
    let list = Paragraph::new(lines).block(Block::default().borders(Borders::LEFT | Borders::RIGHT));
    frame.render_widget(list, area);
}

fn draw_feedback(frame: &mut Frame, area: Rect, rows: &[FeedbackRow]) {
    let header = Row::new(COLUMNS.iter().map(|c| Cell::from(*c)))
        .style(Style::default().add_modifier(Modifier::BOLD));

    let body = rows.iter().map(|row| {
        Row::new(
            cell_texts(row)
                .into_iter()
                .zip([
                    Attribute::Name,
                    Attribute::Generation,
                    Attribute::Type1,
                    Attribute::Type2,
                    Attribute::Height,
                    Attribute::Weight,
                ])
                .map(|(text, attribute)| {
                    let verdict = row.verdict.get(attribute);
                    let text = match verdict.arrow() {
                        Some(arrow) => format!("{} {}", text, arrow),
                        None => text,
                    };
                    Cell::from(text).style(verdict_style(verdict))
                }),
        )
    });

    let table = Table::new(body, [Constraint::Percentage(16); 6])
        .header(header)
        .block(Block::default().title("Guesses").borders(Borders::ALL));
    frame.render_widget(table, area);
}

/// Display texts for one feedback row, in column order.
pub fn cell_texts(row: &FeedbackRow) -> [String; 6] {
    let guess = &row.guess;
    [
        guess.name().to_string(),
        guess.generation().numeral().to_string(),
        guess.types().primary().to_string(),
        guess.types().secondary().unwrap_or("___").to_string(),
        guess.height_display(),
        guess.weight_display(),
    ]
}

fn verdict_style(verdict: Verdict) -> Style {
    let bg = match verdict {
        Verdict::Correct => Color::Green,
        Verdict::Partial => Color::Yellow,
        Verdict::Incorrect | Verdict::Higher | Verdict::Lower => Color::Red,
    };
    Style::default().bg(bg).fg(Color::Black)
}
