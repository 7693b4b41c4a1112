//! Line-oriented console mode
//!
//! Plays one game over any reader/writer pair: stdin/stdout from the binary,
//! in-memory buffers from tests.

use crate::core::normalize;
use crate::game::{GameSession, GuessOutcome};
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Found words are listed after every this many correct guesses
const SUMMARY_EVERY: usize = 5;

/// How a console game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleEnd {
    /// Every valid word was found
    Completed,
    /// The player typed `exit` or `quit`
    Quit,
    /// Input ran out
    EndOfInput,
    /// The session had no valid words, so no guess was read
    NoAnswers,
}

/// Summary returned when the console loop finishes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsoleSummary {
    pub end: ConsoleEnd,
    pub found: usize,
    pub total: usize,
    pub found_original: bool,
}

enum ConsoleInput {
    Guess(String),
    Empty,
    Exit,
}

fn parse_input(line: &str) -> ConsoleInput {
    let input = normalize(line);
    match input.as_str() {
        "exit" | "quit" => ConsoleInput::Exit,
        "" => ConsoleInput::Empty,
        _ => ConsoleInput::Guess(input),
    }
}

/// Run the console game loop on `session`
///
/// # Errors
///
/// Returns an error if reading from `reader` or writing to `writer` fails.
pub fn run_console<R: BufRead, W: Write>(
    session: &mut GameSession,
    mut reader: R,
    mut writer: W,
) -> io::Result<ConsoleSummary> {
    writeln!(writer, "\n╔══════════════════════════════════════════════════════════════╗")?;
    writeln!(writer, "║                   Jumble - Console Mode                      ║")?;
    writeln!(writer, "╚══════════════════════════════════════════════════════════════╝\n")?;

    writeln!(
        writer,
        "Scrambled: {}",
        session.scramble_display().to_uppercase().bright_yellow().bold()
    )?;

    if session.total_count() == 0 {
        writeln!(writer, "{}", "No dictionary words can be made from these letters.".yellow())?;
        writeln!(writer, "The original word was: {}", session.original())?;
        return Ok(summarize(session, ConsoleEnd::NoAnswers));
    }

    writeln!(
        writer,
        "Find the {} words made from the scrambled letters. Type 'exit' to quit.\n",
        session.total_count()
    )?;

    let end = loop {
        write!(writer, "Your guess: ")?;
        writer.flush()?;

        let mut line = String::new();
        if reader.read_line(&mut line)? == 0 {
            writeln!(writer)?;
            break ConsoleEnd::EndOfInput;
        }

        let guess = match parse_input(&line) {
            ConsoleInput::Exit => {
                writeln!(writer, "Goodbye!")?;
                break ConsoleEnd::Quit;
            }
            ConsoleInput::Empty => {
                writeln!(writer, "Please type a word or 'exit'.")?;
                continue;
            }
            ConsoleInput::Guess(guess) => guess,
        };

        report_guess(session, &guess, &mut writer)?;

        if session.is_complete() {
            writeln!(writer, "\n{}", "═".repeat(60).bright_cyan())?;
            writeln!(
                writer,
                "{}",
                "🎉 Congratulations! You found all words!".bright_green().bold()
            )?;
            writeln!(writer, "Original word: {}", session.original().bright_white().bold())?;
            writeln!(writer, "{}", "═".repeat(60).bright_cyan())?;
            break ConsoleEnd::Completed;
        }
    };

    if end != ConsoleEnd::Completed {
        writeln!(
            writer,
            "Found {} of {} words. The original word was: {}",
            session.found_count(),
            session.total_count(),
            session.original()
        )?;
    }

    Ok(summarize(session, end))
}

fn summarize(session: &GameSession, end: ConsoleEnd) -> ConsoleSummary {
    ConsoleSummary {
        end,
        found: session.found_count(),
        total: session.total_count(),
        found_original: session.has_found_original(),
    }
}

fn report_guess<W: Write>(session: &mut GameSession, guess: &str, writer: &mut W) -> io::Result<()> {
    match session.guess(guess) {
        GuessOutcome::AlreadyGuessed => {
            writeln!(writer, "You already guessed: {guess}")?;
        }
        GuessOutcome::Correct => {
            writeln!(
                writer,
                "{} Found {} / {}",
                "✅ Correct!".green().bold(),
                session.found_count(),
                session.total_count()
            )?;
            if guess == session.original() {
                writeln!(writer, "{}", "⭐ That's the original word!".bright_yellow())?;
            }
            if session.found_count() % SUMMARY_EVERY == 0 {
                let found: Vec<&str> = session.guessed_words().collect();
                writeln!(writer, "Guessed so far: {}", found.join(", "))?;
            }
        }
        GuessOutcome::Incorrect => {
            writeln!(
                writer,
                "{}",
                "❌ Not valid (or not constructible from letters). Try again.".red()
            )?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn cat_session() -> GameSession {
        GameSession::new("cat", "tca", ["cat", "act", "tac", "at", "ta"])
    }

    fn play(session: &mut GameSession, input: &str) -> (ConsoleSummary, String) {
        let mut out = Vec::new();
        let summary = run_console(session, Cursor::new(input), &mut out).unwrap();
        (summary, String::from_utf8(out).unwrap())
    }

    #[test]
    fn parse_commands() {
        assert!(matches!(parse_input("exit\n"), ConsoleInput::Exit));
        assert!(matches!(parse_input("  QUIT "), ConsoleInput::Exit));
        assert!(matches!(parse_input("\n"), ConsoleInput::Empty));
        assert!(matches!(parse_input(" Cat \n"), ConsoleInput::Guess(ref g) if g == "cat"));
    }

    #[test]
    fn immediate_exit() {
        let mut session = cat_session();
        let (summary, out) = play(&mut session, "exit\n");
        assert_eq!(summary.end, ConsoleEnd::Quit);
        assert_eq!(summary.found, 0);
        assert!(out.contains("Goodbye!"));
        assert!(out.contains("T C A"));
    }

    #[test]
    fn end_of_input_stops() {
        let mut session = cat_session();
        let (summary, _) = play(&mut session, "act\n");
        assert_eq!(summary.end, ConsoleEnd::EndOfInput);
        assert_eq!(summary.found, 1);
    }

    #[test]
    fn blank_line_reprompts() {
        let mut session = cat_session();
        let (summary, out) = play(&mut session, "\n   \nquit\n");
        assert_eq!(summary.end, ConsoleEnd::Quit);
        assert_eq!(out.matches("Please type a word or 'exit'.").count(), 2);
    }

    #[test]
    fn feedback_for_each_outcome() {
        let mut session = cat_session();
        let (summary, out) = play(&mut session, "act\nACT\ndog\nexit\n");
        assert_eq!(summary.found, 1);
        assert!(out.contains("Correct!"));
        assert!(out.contains("You already guessed: act"));
        assert!(out.contains("Not valid"));
    }

    #[test]
    fn original_word_is_announced() {
        let mut session = cat_session();
        let (summary, out) = play(&mut session, "cat\nquit\n");
        assert!(summary.found_original);
        assert!(out.contains("original word!"));
    }

    #[test]
    fn completes_when_all_found() {
        let mut session = cat_session();
        let (summary, out) = play(&mut session, "cat\nact\ntac\nat\nta\nnever read\n");
        assert_eq!(summary.end, ConsoleEnd::Completed);
        assert_eq!(summary.found, 5);
        assert_eq!(summary.total, 5);
        assert!(out.contains("Congratulations"));
        assert!(out.contains("Guessed so far: act, at, cat, ta, tac"));
        assert!(session.is_complete());
    }

    #[test]
    fn empty_game_ends_before_reading() {
        let mut session = GameSession::new("a", "a", Vec::<String>::new());
        let (summary, out) = play(&mut session, "zzz\n");
        assert_eq!(summary.end, ConsoleEnd::NoAnswers);
        assert_eq!(summary.total, 0);
        assert!(!out.contains("Your guess"));
        assert!(!out.contains("Not valid"));
        assert!(!out.contains("Congratulations"));
        assert!(out.contains("The original word was: a"));
    }

    #[test]
    fn exit_reports_original() {
        let mut session = cat_session();
        let (_, out) = play(&mut session, "quit\n");
        assert!(out.contains("The original word was: cat"));
    }
}
