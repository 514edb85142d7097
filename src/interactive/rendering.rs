//! TUI rendering with ratatui
//!
//! Draws the theme picker, the gallows, and the round state panels.

use super::app::{App, MessageStyle, Screen};
use crate::output::formatters::stage_art;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, ListState, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(12),   // Main content
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    match app.screen {
        Screen::ThemePicker => render_theme_picker(f, app, chunks[1]),
        Screen::Playing | Screen::RoundOver => render_round(f, app, chunks[1]),
    }

    render_status(f, app, chunks[2]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🪢 HANGMAN")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_theme_picker(f: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = app
        .game
        .themes()
        .iter()
        .map(|theme| {
            let count = theme.len();
            ListItem::new(format!("{} ({count} words)", theme.name()))
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .title(" Choose a theme ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▸ ");

    let mut state = ListState::default();
    state.select(Some(app.theme_cursor));
    f.render_stateful_widget(list, area, &mut state);
}

fn render_round(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(24),     // Gallows
            Constraint::Percentage(60), // Word, hint, wrong letters
            Constraint::Percentage(40), // Messages
        ])
        .split(area);

    render_gallows(f, app, chunks[0]);
    render_word_panel(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_gallows(f: &mut Frame, app: &App, area: Rect) {
    let (stage, budget) = app
        .game
        .round()
        .map_or((0, 0), |round| (round.stage(), round.max_wrong()));

    let color = if app.screen == Screen::RoundOver {
        Color::Red
    } else {
        Color::White
    };

    let gallows = Paragraph::new(stage_art(stage))
        .style(Style::default().fg(color))
        .block(
            Block::default()
                .title(format!(" Gallows {stage}/{budget} "))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(gallows, area);
}

fn render_word_panel(f: &mut Frame, app: &App, area: Rect) {
    let content = if let Some(round) = app.game.round() {
        let wrong: Vec<String> = round.wrong_letters().iter().map(char::to_string).collect();

        vec![
            Line::from(""),
            Line::from(Span::styled(
                round.masked_word(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(vec![
                Span::raw("Hint: "),
                Span::styled(round.hint(), Style::default().fg(Color::Cyan)),
            ]),
            Line::from(""),
            Line::from(vec![
                Span::raw("Wrong letters: "),
                Span::styled(wrong.join(" "), Style::default().fg(Color::Red)),
            ]),
            Line::from(format!(
                "Wrong guesses left: {}",
                round.max_wrong() - round.wrong_count()
            )),
        ]
    } else {
        vec![Line::from("No round in progress")]
    };

    let paragraph = Paragraph::new(content)
        .block(
            Block::default()
                .title(" Word ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Percentage(30),
            Constraint::Percentage(40),
        ])
        .split(area);

    let score = app.game.score();
    let score_text = format!(
        "Score: {} | 💎 {}",
        score.total_score(),
        score.diamonds()
    );
    let score_widget = Paragraph::new(score_text).alignment(Alignment::Center);
    f.render_widget(score_widget, chunks[0]);

    let stats_text = format!(
        "Rounds: {} | Won: {}",
        app.stats.rounds_played, app.stats.rounds_won
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let help_text = match app.screen {
        Screen::ThemePicker => "↑/↓: Select | Enter: Start | q: Quit",
        Screen::Playing => "Type a letter to guess | Esc: Abandon round",
        Screen::RoundOver => "n/Enter: New round | q: Quit",
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}
