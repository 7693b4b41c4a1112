//! Puzzle ranking
//!
//! Sweeps dictionary words and ranks them by how many answers a puzzle built
//! on each would have.

use crate::core::char_len;
use crate::engine::{JumbleEngine, subwords_of};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::time::{Duration, Instant};

/// Configuration for a ranking sweep
pub struct RankConfig {
    /// Only consider source words of this length
    pub length: Option<usize>,
    /// How many top entries to keep
    pub limit: usize,
    /// Draw a progress bar on stderr
    pub show_progress: bool,
}

impl RankConfig {
    #[must_use]
    pub const fn new(length: Option<usize>, limit: usize) -> Self {
        Self {
            length,
            limit,
            show_progress: true,
        }
    }
}

/// Statistics from a ranking sweep
#[derive(Debug)]
pub struct RankStatistics {
    pub total_words: usize,
    /// Best puzzles: (word, answer count), most answers first
    pub ranked: Vec<(String, usize)>,
    pub average_answers: f64,
    pub max_answers: usize,
    pub min_answers: usize,
    pub duration: Duration,
}

/// Rank source words by the number of valid answers they yield
#[must_use]
pub fn run_rank(engine: &JumbleEngine, config: &RankConfig) -> RankStatistics {
    let dictionary = engine.dictionary();
    let min_length = engine.config().min_length;

    let sources: Vec<&str> = dictionary
        .iter()
        .filter(|w| config.length.is_none_or(|len| char_len(w) == len))
        .collect();

    let pb = if config.show_progress {
        let pb = ProgressBar::new(sources.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("█▓▒░"),
        );
        pb
    } else {
        ProgressBar::hidden()
    };
    pb.set_message("resolving subwords");

    let start = Instant::now();

    let mut scored: Vec<(String, usize)> = sources
        .par_iter()
        .map(|&source| {
            let count = subwords_of(dictionary, source, min_length).len();
            pb.inc(1);
            (source.to_string(), count)
        })
        .collect();

    pb.finish_and_clear();
    let duration = start.elapsed();

    let total_words = scored.len();
    let total_answers: usize = scored.iter().map(|(_, n)| n).sum();
    let max_answers = scored.iter().map(|(_, n)| *n).max().unwrap_or(0);
    let min_answers = scored.iter().map(|(_, n)| *n).min().unwrap_or(0);

    scored.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    scored.truncate(config.limit);

    log::debug!("Ranked {total_words} words in {:.2}s", duration.as_secs_f64());

    RankStatistics {
        total_words,
        ranked: scored,
        average_answers: if total_words == 0 {
            0.0
        } else {
            total_answers as f64 / total_words as f64
        },
        max_answers,
        min_answers,
        duration,
    }
}
