//! Jumble - CLI
//!
//! Word puzzle game with TUI and console modes, plus dictionary query tools.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use jumble::{
    commands::{RankConfig, analyze_word, run_console, run_rank},
    engine::{
        DEFAULT_MIN_LENGTH, DictionaryIndex, EngineConfig, JumbleEngine, scramble,
        subwords_of,
    },
    logging::init_logger,
    output::{
        print_analysis_result, print_random_word, print_rank_statistics, print_scramble,
        print_word_list,
    },
    wordlists::{WORDS, loader::load_from_file},
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io;

#[derive(Parser)]
#[command(
    name = "jumble",
    about = "Jumble word puzzle: unscramble letters and find every hidden word",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'builtin' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "builtin")]
    wordlist: String,

    /// Shortest word that counts as an answer
    #[arg(short = 'm', long, global = true, default_value_t = DEFAULT_MIN_LENGTH)]
    min_length: usize,

    /// Seed for reproducible scrambles and word picks
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Enable debug logging (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play {
        /// Play this word instead of a random one
        #[arg(long)]
        word: Option<String>,

        /// Pick random words of this length
        #[arg(short, long)]
        length: Option<usize>,
    },

    /// Simple console mode (one game over stdin/stdout)
    Simple {
        /// Play this word instead of a random one
        #[arg(long)]
        word: Option<String>,

        /// Pick a random word of this length
        #[arg(short, long)]
        length: Option<usize>,
    },

    /// Scramble a word
    Scramble {
        /// Word to scramble
        word: String,
    },

    /// List dictionary words spellable from a word's letters
    Subwords {
        /// Source word
        word: String,
    },

    /// List dictionary words starting with a prefix
    Prefix {
        /// Prefix to match
        prefix: String,
    },

    /// Search the dictionary by first letter, last letter and length
    Search {
        /// First letter
        #[arg(short, long)]
        start: Option<char>,

        /// Last letter
        #[arg(short, long)]
        end: Option<char>,

        /// Exact length
        #[arg(short, long)]
        length: Option<usize>,
    },

    /// List palindromes in the dictionary
    Palindromes,

    /// Print a random word of a given length
    Random {
        /// Word length
        length: usize,
    },

    /// Analyze a word: scramble, subwords, palindrome check
    Analyze {
        /// Word to analyze
        word: String,
    },

    /// Rank dictionary words by how many answers their puzzle has
    Rank {
        /// Only rank words of this length
        #[arg(short, long)]
        length: Option<usize>,

        /// Number of top words to show
        #[arg(short = 'k', long, default_value = "20")]
        limit: usize,
    },
}

/// Load the dictionary based on the -w flag
///
/// - "builtin": the embedded word list
/// - "<path>": one word per line; blank lines and `#` comments are skipped
fn load_dictionary(wordlist_mode: &str) -> Result<DictionaryIndex> {
    match wordlist_mode {
        "builtin" => Ok(DictionaryIndex::new(WORDS)),
        path => {
            let words = load_from_file(path)
                .with_context(|| format!("failed to load word list from {path}"))?;
            Ok(DictionaryIndex::new(words))
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    let dictionary = load_dictionary(&cli.wordlist)?;
    log::info!("Dictionary loaded: {} words", dictionary.len());
    let engine = JumbleEngine::new(dictionary, EngineConfig::new(cli.min_length));

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play {
        word: None,
        length: None,
    });

    match command {
        Commands::Play { word, length } => run_play_command(&engine, rng, word, length),
        Commands::Simple { word, length } => {
            run_simple_command(&engine, &mut rng, word.as_deref(), length)
        }
        Commands::Scramble { word } => {
            print_scramble(&word, &scramble(&word, &mut rng));
            Ok(())
        }
        Commands::Subwords { word } => {
            let words = subwords_of(engine.dictionary(), &word, cli.min_length);
            print_word_list(&format!("Words in '{word}'"), &words);
            Ok(())
        }
        Commands::Prefix { prefix } => {
            let words = engine.dictionary().words_with_prefix(&prefix);
            print_word_list(&format!("Words starting with '{prefix}'"), &words);
            Ok(())
        }
        Commands::Search { start, end, length } => {
            let words = engine.dictionary().search(start, end, length);
            print_word_list("Search results", &words);
            Ok(())
        }
        Commands::Palindromes => {
            print_word_list("Palindromes", &engine.dictionary().palindromes());
            Ok(())
        }
        Commands::Random { length } => {
            print_random_word(length, engine.dictionary().random_word_of_length(length, &mut rng));
            Ok(())
        }
        Commands::Analyze { word } => {
            let result = analyze_word(&engine, &word, &mut rng)?;
            print_analysis_result(&result);
            Ok(())
        }
        Commands::Rank { length, limit } => {
            let stats = run_rank(&engine, &RankConfig::new(length, limit));
            print_rank_statistics(&stats);
            Ok(())
        }
    }
}

fn run_simple_command(
    engine: &JumbleEngine,
    rng: &mut StdRng,
    word: Option<&str>,
    length: Option<usize>,
) -> Result<()> {
    let mut session = match (word, length) {
        (None, Some(length)) => engine.start_with_length(length, rng)?,
        (word, _) => engine.start(word, rng)?,
    };

    let stdin = io::stdin();
    run_console(&mut session, stdin.lock(), io::stdout())?;
    Ok(())
}

fn run_play_command(
    engine: &JumbleEngine,
    rng: StdRng,
    word: Option<String>,
    length: Option<usize>,
) -> Result<()> {
    use jumble::interactive::{App, run_tui};

    let app = App::new(engine, rng, word, length)?;
    run_tui(app)
}
