//! TUI application state and logic

use crate::core::GuessOutcome;
use crate::engine::Game;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Which view the player is on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    ThemePicker,
    Playing,
    RoundOver,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub rounds_played: usize,
    pub rounds_won: usize,
}

/// Application state
pub struct App {
    pub game: Game,
    pub screen: Screen,
    pub theme_cursor: usize,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
}

impl App {
    #[must_use]
    pub fn new(game: Game) -> Self {
        Self {
            game,
            screen: Screen::ThemePicker,
            theme_cursor: 0,
            messages: vec![Message {
                text: "Pick a theme and guess the hidden word letter by letter.".to_string(),
                style: MessageStyle::Info,
            }],
            stats: Statistics::default(),
            should_quit: false,
        }
    }

    pub fn cursor_up(&mut self) {
        if self.theme_cursor > 0 {
            self.theme_cursor -= 1;
        }
    }

    pub fn cursor_down(&mut self) {
        if self.theme_cursor + 1 < self.game.themes().len() {
            self.theme_cursor += 1;
        }
    }

    /// The theme currently highlighted in the picker
    #[must_use]
    pub fn selected_theme(&self) -> Option<&str> {
        self.game
            .themes()
            .names()
            .nth(self.theme_cursor)
    }

    /// Start a round from the highlighted theme
    pub fn start_selected_round(&mut self) {
        let Some(name) = self.selected_theme().map(String::from) else {
            self.add_message("No themes configured!", MessageStyle::Error);
            return;
        };

        match self.game.start_round(&name) {
            Ok(round) => {
                let hint = round.hint().to_string();
                self.screen = Screen::Playing;
                self.messages.clear();
                self.add_message(&format!("Theme: {name}"), MessageStyle::Info);
                self.add_message(&format!("Hint: {hint}"), MessageStyle::Info);
            }
            Err(error) => {
                self.add_message(&error.to_string(), MessageStyle::Error);
            }
        }
    }

    /// Forward one typed letter to the engine
    pub fn handle_guess(&mut self, letter: char) {
        match self.game.guess_char(letter) {
            Ok(GuessOutcome::Hit(letter)) => {
                self.add_message(&format!("'{letter}' is in the word!"), MessageStyle::Success);
            }
            Ok(GuessOutcome::Miss(letter)) => {
                self.add_message(
                    &format!("'{letter}' is not in the word."),
                    MessageStyle::Error,
                );
            }
            Ok(GuessOutcome::Won { score }) => {
                self.stats.rounds_played += 1;
                self.stats.rounds_won += 1;
                self.screen = Screen::RoundOver;
                self.add_message(
                    &format!("🎉 You won! Round score: {score} (+1 💎)"),
                    MessageStyle::Success,
                );
            }
            Ok(GuessOutcome::Lost) => {
                self.stats.rounds_played += 1;
                self.screen = Screen::RoundOver;
                let word = self
                    .game
                    .round()
                    .map_or_else(String::new, |round| round.word().to_string());
                self.add_message(
                    &format!("💀 Out of guesses! The word was {word}."),
                    MessageStyle::Error,
                );
            }
            Err(error) => {
                self.add_message(&error.to_string(), MessageStyle::Error);
            }
        }
    }

    /// Leave the finished round and return to the picker
    pub fn back_to_picker(&mut self) {
        self.screen = Screen::ThemePicker;
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                app.should_quit = true;
            } else {
                match app.screen {
                    Screen::ThemePicker => match key.code {
                        KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
                        KeyCode::Up | KeyCode::Char('k') => app.cursor_up(),
                        KeyCode::Down | KeyCode::Char('j') => app.cursor_down(),
                        KeyCode::Enter => app.start_selected_round(),
                        _ => {}
                    },
                    Screen::Playing => match key.code {
                        KeyCode::Esc => app.back_to_picker(),
                        KeyCode::Char(letter) => app.handle_guess(letter),
                        _ => {}
                    },
                    Screen::RoundOver => match key.code {
                        KeyCode::Char('q') => app.should_quit = true,
                        KeyCode::Char('n') | KeyCode::Enter | KeyCode::Esc => app.back_to_picker(),
                        _ => {}
                    },
                }
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
