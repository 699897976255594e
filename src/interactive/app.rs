//! TUI application state and logic

use crate::engine::{Engine, GameConfig, GameState, Hint, Outcome};
use crate::error::GameError;
use crate::output::describe_error;
use crate::palettes::Swatches;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::debug;

/// Application state
pub struct App {
    pub engine: Engine<StdRng>,
    pub swatches: Swatches,
    pub state: GameState,
    pub selected_slot: usize,
    pub hint: Option<Hint>,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

/// Results for the current session
#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    pub games_lost: usize,
    pub games_given_up: usize,
    /// Wins indexed by attempts used
    pub attempts_distribution: Vec<usize>,
}

impl Statistics {
    fn record(&mut self, state: &GameState) {
        if !state.is_finished() {
            return;
        }
        self.total_games += 1;

        match state.outcome() {
            Outcome::Won => {
                self.games_won += 1;
                let attempts = state.attempts_used();
                if self.attempts_distribution.len() <= attempts {
                    self.attempts_distribution.resize(attempts + 1, 0);
                }
                self.attempts_distribution[attempts] += 1;
            }
            Outcome::Lost => self.games_lost += 1,
            Outcome::GivenUp => self.games_given_up += 1,
            Outcome::InProgress => {}
        }
    }

    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games > 0 {
            self.games_won as f64 / self.total_games as f64 * 100.0
        } else {
            0.0
        }
    }
}

impl App {
    #[must_use]
    pub fn new(mut engine: Engine<StdRng>, config: GameConfig, swatches: Swatches) -> Self {
        let state = engine.new_game(config);

        Self {
            engine,
            swatches,
            state,
            selected_slot: 0,
            hint: None,
            messages: vec![
                Message {
                    text: "New game - good luck!".to_string(),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "Pick colors with the number keys, Enter to submit".to_string(),
                    style: MessageStyle::Info,
                },
            ],
            stats: Statistics::default(),
            should_quit: false,
        }
    }

    /// Put the palette color at `index` into the selected slot and move right
    pub fn place_color(&mut self, index: usize) {
        let Some(color) = self.state.palette().get(index).cloned() else {
            return;
        };

        match self.state.set_slot(self.selected_slot, color) {
            Ok(()) => {
                self.hint = None;
                self.selected_slot = (self.selected_slot + 1) % self.state.slots();
            }
            Err(err) => self.report(&err),
        }
    }

    /// Erase the slot before the cursor and move the cursor there
    pub fn erase(&mut self) {
        let slots = self.state.slots();
        let slot = (self.selected_slot + slots - 1) % slots;

        match self.state.clear_slot(slot) {
            Ok(()) => self.selected_slot = slot,
            Err(err) => self.report(&err),
        }
    }

    pub fn move_left(&mut self) {
        self.selected_slot = self.selected_slot.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.selected_slot = (self.selected_slot + 1).min(self.state.slots() - 1);
    }

    pub fn submit(&mut self) {
        match self.state.submit_guess() {
            Ok(score) => {
                self.hint = None;
                self.selected_slot = 0;

                match self.state.outcome() {
                    Outcome::Won => {
                        let attempts = self.state.attempts_used();
                        let celebration = match attempts {
                            1 => "🎯 First try! Extraordinary! 🌟".to_string(),
                            2 | 3 => format!("🔥 Cracked in {attempts} attempts! 🔥"),
                            _ => format!("🎉 Code broken in {attempts} attempts! 🎉"),
                        };
                        self.finish();
                        self.add_message(&celebration, MessageStyle::Success);
                        self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
                    }
                    Outcome::Lost => {
                        self.finish();
                        self.add_message("Out of attempts - the code is revealed.", MessageStyle::Error);
                        self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
                    }
                    Outcome::InProgress | Outcome::GivenUp => {
                        self.add_message(
                            &format!("{} {}", score.to_pegs(), score),
                            MessageStyle::Info,
                        );
                    }
                }
            }
            Err(err) => self.report(&err),
        }
    }

    pub fn request_hint(&mut self) {
        match self.engine.request_hint(&self.state) {
            Ok(hint) => {
                self.add_message(
                    &format!("Hint: slot {} is {}", hint.slot + 1, hint.color),
                    MessageStyle::Info,
                );
                self.hint = Some(hint);
            }
            Err(err) => self.report(&err),
        }
    }

    pub fn give_up(&mut self) {
        match self.state.give_up().map(|_| ()) {
            Ok(()) => {
                self.finish();
                self.add_message("You gave up - the code is revealed.", MessageStyle::Error);
                self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
            }
            Err(err) => self.report(&err),
        }
    }

    pub fn new_game(&mut self) {
        self.engine.restart(&mut self.state);
        self.selected_slot = 0;
        self.hint = None;
        self.messages.clear();
        self.add_message("New game - good luck!", MessageStyle::Info);
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('n') => self.new_game(),
            KeyCode::Char('h') => self.request_hint(),
            KeyCode::Char('g') => self.give_up(),
            KeyCode::Char(c @ '1'..='9') => {
                // '1' maps to the first palette color
                self.place_color(usize::from(c as u8 - b'1'));
            }
            KeyCode::Backspace | KeyCode::Delete => self.erase(),
            KeyCode::Left => self.move_left(),
            KeyCode::Right => self.move_right(),
            KeyCode::Enter => self.submit(),
            _ => {}
        }
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

    /// Status line for the active row
    #[must_use]
    pub fn attempt_label(&self) -> String {
        format!(
            "Attempt {}/{}",
            (self.state.current_turn() + 1).min(self.state.max_rows()),
            self.state.max_rows()
        )
    }

    fn finish(&mut self) {
        self.hint = None;
        self.stats.record(&self.state);
        debug!(outcome = ?self.state.outcome(), "game finished");
    }

    fn report(&mut self, err: &GameError) {
        let text = match err {
            GameError::GameOver => "The game is over - press 'n' for a new one.".to_string(),
            other => describe_error(other),
        };
        self.add_message(&text, MessageStyle::Error);
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
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Code, Color};

    fn app() -> App {
        App::new(Engine::seeded(21), GameConfig::default(), Swatches::embedded())
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    /// The secret of a fresh app, learned by giving up on an identical one
    fn secret_for_seed(seed: u64) -> Code {
        let mut scout = App::new(Engine::seeded(seed), GameConfig::default(), Swatches::embedded());
        scout.give_up();
        scout.state.revealed_secret().unwrap().clone()
    }

    #[test]
    fn digits_fill_slots_and_advance_cursor() {
        let mut app = app();
        press(&mut app, KeyCode::Char('1'));
        press(&mut app, KeyCode::Char('3'));

        let guess = app.state.current_guess();
        assert_eq!(guess.get(0), Some(&Color::new("rose").unwrap()));
        assert_eq!(guess.get(1), Some(&Color::new("green").unwrap()));
        assert_eq!(app.selected_slot, 2);
    }

    #[test]
    fn cursor_wraps_after_last_slot() {
        let mut app = app();
        for _ in 0..4 {
            press(&mut app, KeyCode::Char('2'));
        }
        assert_eq!(app.selected_slot, 0);
        assert!(app.state.current_guess().is_complete());
    }

    #[test]
    fn digits_beyond_palette_are_ignored() {
        let mut app = app();
        press(&mut app, KeyCode::Char('9'));
        assert_eq!(app.state.current_guess().filled(), 0);
        assert_eq!(app.selected_slot, 0);
    }

    #[test]
    fn backspace_erases_previous_slot() {
        let mut app = app();
        press(&mut app, KeyCode::Char('1'));
        press(&mut app, KeyCode::Char('2'));
        press(&mut app, KeyCode::Backspace);

        assert_eq!(app.selected_slot, 1);
        assert_eq!(app.state.current_guess().filled(), 1);
    }

    #[test]
    fn arrows_clamp_cursor() {
        let mut app = app();
        press(&mut app, KeyCode::Left);
        assert_eq!(app.selected_slot, 0);

        for _ in 0..10 {
            press(&mut app, KeyCode::Right);
        }
        assert_eq!(app.selected_slot, 3);
    }

    #[test]
    fn incomplete_submit_reports_error() {
        let mut app = app();
        press(&mut app, KeyCode::Char('1'));
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.state.attempts_used(), 0);
        let last = app.messages.last().unwrap();
        assert_eq!(last.style, MessageStyle::Error);
        assert_eq!(last.text, "Fill every slot before submitting.");
    }

    #[test]
    fn winning_updates_statistics() {
        let secret = secret_for_seed(21);
        let mut app = app();

        for color in secret.colors() {
            let index = app.state.palette().position(color).unwrap();
            app.place_color(index);
        }
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.state.outcome(), Outcome::Won);
        assert_eq!(app.stats.total_games, 1);
        assert_eq!(app.stats.games_won, 1);
        assert_eq!(app.stats.attempts_distribution[1], 1);
        assert!((app.stats.win_rate() - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn give_up_then_new_game() {
        let mut app = app();
        press(&mut app, KeyCode::Char('g'));

        assert_eq!(app.state.outcome(), Outcome::GivenUp);
        assert_eq!(app.stats.games_given_up, 1);

        // Further give-ups are reported, not counted
        press(&mut app, KeyCode::Char('g'));
        assert_eq!(app.stats.total_games, 1);

        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.state.outcome(), Outcome::InProgress);
        assert_eq!(app.state.attempts_used(), 0);
    }

    #[test]
    fn hint_is_shown_until_next_placement() {
        let mut app = app();
        press(&mut app, KeyCode::Char('h'));
        assert!(app.hint.is_some());

        press(&mut app, KeyCode::Char('1'));
        assert!(app.hint.is_none());
    }

    #[test]
    fn quit_keys() {
        let mut app = app();
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);

        let mut app = self::app();
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
    }

    #[test]
    fn attempt_label_tracks_turn() {
        let mut app = app();
        assert_eq!(app.attempt_label(), "Attempt 1/10");

        for _ in 0..4 {
            press(&mut app, KeyCode::Char('1'));
        }
        press(&mut app, KeyCode::Enter);

        if app.state.is_finished() {
            assert_eq!(app.attempt_label(), "Attempt 1/10");
        } else {
            assert_eq!(app.attempt_label(), "Attempt 2/10");
        }
    }

    #[test]
    fn loss_keeps_label_on_last_row() {
        let config = GameConfig::new(crate::palettes::default_palette(), 1, 2).unwrap();
        let mut scout = App::new(Engine::seeded(4), config.clone(), Swatches::embedded());
        scout.give_up();
        let secret = scout.state.revealed_secret().unwrap().colors()[0].clone();
        let miss = scout
            .state
            .palette()
            .colors()
            .iter()
            .position(|c| *c != secret)
            .unwrap();

        let mut app = App::new(Engine::seeded(4), config, Swatches::embedded());
        for _ in 0..2 {
            app.place_color(miss);
            press(&mut app, KeyCode::Enter);
        }

        assert_eq!(app.state.outcome(), Outcome::Lost);
        assert_eq!(app.state.current_turn(), 2);
        assert_eq!(app.attempt_label(), "Attempt 2/2");
        assert_eq!(app.stats.games_lost, 1);
    }

    #[test]
    fn messages_are_capped() {
        let mut app = app();
        for i in 0..10 {
            app.add_message(&format!("message {i}"), MessageStyle::Info);
        }
        assert_eq!(app.messages.len(), 5);
        assert_eq!(app.messages[0].text, "message 5");
    }
}
