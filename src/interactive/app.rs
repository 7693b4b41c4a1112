//! TUI application state and logic

use crate::core::normalize;
use crate::engine::{JumbleEngine, scramble};
use crate::game::{GameError, GameSession, GuessOutcome};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Longest guess the input box accepts
const MAX_INPUT_LEN: usize = 32;

/// Application state
pub struct App<'a> {
    pub engine: &'a JumbleEngine,
    pub session: GameSession,
    /// Letters as currently shown; reshuffling changes this, never the session
    pub display_letters: String,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    pub input_mode: InputMode,
    /// Fixed word for every new game, if one was given on the command line
    pub word: Option<String>,
    /// Length of random words for new games, if one was given
    pub length: Option<usize>,
    rng: StdRng,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    Guessing,
    Completed,
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
    pub games_played: usize,
    pub games_completed: usize,
    pub words_found: usize,
}

impl<'a> App<'a> {
    /// Create the app and start its first game
    ///
    /// # Errors
    ///
    /// Returns an error if the first game cannot be started (blank word, empty
    /// dictionary, a length below the minimum, or no word of that length).
    pub fn new(
        engine: &'a JumbleEngine,
        mut rng: StdRng,
        word: Option<String>,
        length: Option<usize>,
    ) -> Result<Self, GameError> {
        let session = start_session(engine, &mut rng, word.as_deref(), length)?;

        let mut app = Self {
            engine,
            display_letters: session.scramble().to_string(),
            session,
            input_buffer: String::new(),
            messages: vec![
                Message {
                    text: "Welcome! Find every word hidden in the scrambled letters.".to_string(),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "Type a word and press Enter. Ctrl-S reshuffles the letters.".to_string(),
                    style: MessageStyle::Info,
                },
            ],
            stats: Statistics {
                games_played: 1,
                ..Statistics::default()
            },
            should_quit: false,
            input_mode: InputMode::Guessing,
            word,
            length,
            rng,
        };
        app.end_if_nothing_to_find();
        Ok(app)
    }

    /// Submit the input buffer as a guess
    pub fn handle_guess(&mut self) {
        let guess = normalize(&self.input_buffer);
        self.input_buffer.clear();

        if guess.is_empty() {
            self.add_message("Please type a word first.", MessageStyle::Error);
            return;
        }

        match self.session.guess(&guess) {
            GuessOutcome::AlreadyGuessed => {
                self.add_message(&format!("You already found '{guess}'"), MessageStyle::Error);
            }
            GuessOutcome::Incorrect => {
                self.add_message(&format!("'{guess}' is not a valid word"), MessageStyle::Error);
            }
            GuessOutcome::Correct => {
                self.stats.words_found += 1;
                let note = if guess == self.session.original() {
                    " - the original word!"
                } else {
                    ""
                };
                self.add_message(
                    &format!(
                        "✓ {} ({}/{}){note}",
                        guess.to_uppercase(),
                        self.session.found_count(),
                        self.session.total_count()
                    ),
                    MessageStyle::Success,
                );

                if self.session.is_complete() {
                    self.stats.games_completed += 1;
                    self.input_mode = InputMode::Completed;
                    self.add_message(
                        &format!(
                            "🎉 All words found! The original was {}",
                            self.session.original().to_uppercase()
                        ),
                        MessageStyle::Success,
                    );
                    self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
                }
            }
        }
    }

    /// Replace the session with a fresh game
    pub fn new_game(&mut self) {
        match start_session(self.engine, &mut self.rng, self.word.as_deref(), self.length) {
            Ok(session) => {
                self.display_letters = session.scramble().to_string();
                self.session = session;
                self.stats.games_played += 1;
                self.input_buffer.clear();
                self.messages.clear();
                self.input_mode = InputMode::Guessing;
                self.add_message("New game started!", MessageStyle::Info);
                self.end_if_nothing_to_find();
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    /// A session without valid words is over before the first guess
    fn end_if_nothing_to_find(&mut self) {
        if self.session.total_count() > 0 {
            return;
        }
        self.input_mode = InputMode::Completed;
        let text = format!(
            "No words can be made from {}.",
            self.session.original().to_uppercase()
        );
        self.add_message(&text, MessageStyle::Info);
        self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
    }

    /// Shuffle the displayed letters again
    pub fn reshuffle(&mut self) {
        self.display_letters = scramble(&self.display_letters, &mut self.rng);
    }

    /// Reveal the remaining words and end the current game
    pub fn give_up(&mut self) {
        let remaining: Vec<&str> = self.session.remaining_words().collect();
        let text = format!(
            "Original: {} | Missed: {}",
            self.session.original().to_uppercase(),
            remaining.join(", ")
        );
        self.input_mode = InputMode::Completed;
        self.add_message(&text, MessageStyle::Info);
        self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
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

fn start_session(
    engine: &JumbleEngine,
    rng: &mut StdRng,
    word: Option<&str>,
    length: Option<usize>,
) -> Result<GameSession, GameError> {
    match (word, length) {
        (Some(word), _) => engine.start(Some(word), rng),
        (None, Some(length)) => engine.start_with_length(length, rng),
        (None, None) => engine.start(None, rng),
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

            let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

            match app.input_mode {
                InputMode::Completed => match key.code {
                    KeyCode::Char('c') if ctrl => app.should_quit = true,
                    KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
                    KeyCode::Char('n') => app.new_game(),
                    _ => {}
                },
                InputMode::Guessing => match key.code {
                    KeyCode::Char('c') if ctrl => app.should_quit = true,
                    KeyCode::Char('n') if ctrl => app.new_game(),
                    KeyCode::Char('s') if ctrl => app.reshuffle(),
                    KeyCode::Char('g') if ctrl => app.give_up(),
                    KeyCode::Esc => app.should_quit = true,
                    KeyCode::Char(c) if !ctrl => {
                        if app.input_buffer.chars().count() < MAX_INPUT_LEN && c.is_alphabetic() {
                            app.input_buffer.push(c);
                        }
                    }
                    KeyCode::Backspace => {
                        app.input_buffer.pop();
                    }
                    KeyCode::Enter => app.handle_guess(),
                    _ => {}
                },
            }
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
    use rand::SeedableRng;

    fn engine() -> JumbleEngine {
        JumbleEngine::from_words(["cat", "act", "tac", "at", "ta", "dog"])
    }

    fn app(engine: &JumbleEngine) -> App<'_> {
        App::new(engine, StdRng::seed_from_u64(1), Some("cat".to_string()), None).unwrap()
    }

    fn submit(app: &mut App, word: &str) {
        app.input_buffer = word.to_string();
        app.handle_guess();
    }

    #[test]
    fn starts_in_guessing_mode() {
        let engine = engine();
        let app = app(&engine);
        assert_eq!(app.input_mode, InputMode::Guessing);
        assert_eq!(app.session.original(), "cat");
        assert_eq!(app.display_letters, app.session.scramble());
        assert_eq!(app.stats.games_played, 1);
    }

    #[test]
    fn correct_guess_counts() {
        let engine = engine();
        let mut app = app(&engine);
        submit(&mut app, "ACT");
        assert_eq!(app.stats.words_found, 1);
        assert!(app.session.is_guessed("act"));
        assert!(app.input_buffer.is_empty());
        assert!(matches!(app.messages.last().unwrap().style, MessageStyle::Success));
    }

    #[test]
    fn wrong_and_repeated_guesses_are_errors() {
        let engine = engine();
        let mut app = app(&engine);
        submit(&mut app, "dog");
        assert!(matches!(app.messages.last().unwrap().style, MessageStyle::Error));
        submit(&mut app, "at");
        submit(&mut app, "at");
        assert!(app.messages.last().unwrap().text.contains("already"));
        assert_eq!(app.stats.words_found, 1);
    }

    #[test]
    fn empty_guess_rejected() {
        let engine = engine();
        let mut app = app(&engine);
        submit(&mut app, "   ");
        assert_eq!(app.session.found_count(), 0);
        assert!(matches!(app.messages.last().unwrap().style, MessageStyle::Error));
    }

    #[test]
    fn finding_everything_completes() {
        let engine = engine();
        let mut app = app(&engine);
        for word in ["cat", "act", "tac", "at", "ta"] {
            submit(&mut app, word);
        }
        assert_eq!(app.input_mode, InputMode::Completed);
        assert_eq!(app.stats.games_completed, 1);
    }

    #[test]
    fn new_game_resets() {
        let engine = engine();
        let mut app = app(&engine);
        submit(&mut app, "cat");
        app.new_game();
        assert_eq!(app.session.found_count(), 0);
        assert_eq!(app.stats.games_played, 2);
        assert_eq!(app.input_mode, InputMode::Guessing);
    }

    #[test]
    fn reshuffle_keeps_letters_and_session() {
        let engine = engine();
        let mut app = app(&engine);
        let scramble_before = app.session.scramble().to_string();
        app.reshuffle();
        let mut shown: Vec<char> = app.display_letters.chars().collect();
        let mut original: Vec<char> = "cat".chars().collect();
        shown.sort_unstable();
        original.sort_unstable();
        assert_eq!(shown, original);
        assert_eq!(app.session.scramble(), scramble_before);
    }

    #[test]
    fn give_up_reveals_remaining() {
        let engine = engine();
        let mut app = app(&engine);
        submit(&mut app, "cat");
        app.give_up();
        assert_eq!(app.input_mode, InputMode::Completed);
        let reveal = &app.messages[app.messages.len() - 2].text;
        assert!(reveal.contains("Original: CAT"));
        assert!(reveal.contains("act, at, ta, tac"));
    }

    #[test]
    fn messages_capped_at_five() {
        let engine = engine();
        let mut app = app(&engine);
        for _ in 0..10 {
            submit(&mut app, "dog");
        }
        assert_eq!(app.messages.len(), 5);
    }

    #[test]
    fn game_without_answers_starts_completed() {
        let engine = JumbleEngine::from_words(["a", "cat", "act"]);
        let mut app = App::new(&engine, StdRng::seed_from_u64(3), Some("a".to_string()), None).unwrap();
        assert_eq!(app.session.total_count(), 0);
        assert_eq!(app.input_mode, InputMode::Completed);
        assert!(app.messages.iter().any(|m| m.text.contains("No words can be made")));

        app.new_game();
        assert_eq!(app.input_mode, InputMode::Completed);
        assert_eq!(app.stats.games_completed, 0);
    }

    #[test]
    fn random_games_always_have_answers() {
        let engine = JumbleEngine::from_words(["a", "cat", "act"]);
        let mut app = App::new(&engine, StdRng::seed_from_u64(4), None, None).unwrap();
        for _ in 0..20 {
            assert!(app.session.total_count() > 0);
            assert_eq!(app.input_mode, InputMode::Guessing);
            app.new_game();
        }
    }

    #[test]
    fn guess_input_is_normalized() {
        let engine = engine();
        let mut app = app(&engine);
        submit(&mut app, "  ACT ");
        assert!(app.session.is_guessed("act"));
        assert!(app.messages.last().unwrap().text.contains("ACT"));
    }

    #[test]
    fn missing_length_is_error() {
        let engine = engine();
        let result = App::new(&engine, StdRng::seed_from_u64(2), None, Some(9));
        assert!(matches!(result, Err(GameError::NoWordOfLength(9))));
    }
}
