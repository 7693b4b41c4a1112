//! Display functions for command results

use super::formatters::{create_progress_bar, word_columns};
use crate::commands::{AnalysisResult, RankStatistics};
use colored::Colorize;

/// Terminal width used for word columns
const COLUMNS_WIDTH: usize = 60;

/// Print a titled list of words in columns
pub fn print_word_list(title: &str, words: &[&str]) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "{} {}",
        title.bright_cyan().bold(),
        format!("({} words)", words.len()).bright_black()
    );
    println!("{}", "─".repeat(60).cyan());

    if words.is_empty() {
        println!("  {}", "(none)".bright_black());
        return;
    }

    for line in word_columns(words, COLUMNS_WIDTH) {
        println!("  {line}");
    }
}

/// Print a word and its scramble
pub fn print_scramble(word: &str, scrambled: &str) {
    println!(
        "{} → {}",
        word.bright_white(),
        scrambled.bright_yellow().bold()
    );
}

/// Print the outcome of a random word request
pub fn print_random_word(length: usize, word: Option<&str>) {
    match word {
        Some(word) => println!("{}", word.bright_yellow().bold()),
        None => println!("{}", format!("No {length}-letter word in the dictionary").red()),
    }
}

/// Print the result of word analysis
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "WORD ANALYSIS:".bright_cyan().bold(),
        result.word.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    let yes_no = |flag: bool| if flag { "yes".green() } else { "no".red() };

    println!("\n   In dictionary:  {}", yes_no(result.in_dictionary));
    println!("   Palindrome:     {}", yes_no(result.is_palindrome));
    println!("   Scrambled:      {}", result.scramble.bright_yellow());
    println!(
        "   Subwords:       {} (length ≥ {})",
        result.subwords.len().to_string().bright_yellow().bold(),
        result.min_length
    );

    let longest = result.longest();
    if !longest.is_empty() {
        println!("   Longest:        {}", longest.join(", ").bright_white());
    }

    let subwords: Vec<&str> = result.subwords.iter().map(String::as_str).collect();
    print_word_list("Subwords", &subwords);
}

/// Print the result of a ranking sweep
pub fn print_rank_statistics(stats: &RankStatistics) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "PUZZLE RANKING".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Sweep:".bright_cyan().bold());
    println!("   Words scanned:    {}", stats.total_words);
    println!(
        "   Average answers:  {}",
        format!("{:.2}", stats.average_answers).bright_yellow().bold()
    );
    println!("   Fewest answers:   {}", stats.min_answers);
    println!("   Most answers:     {}", format!("{}", stats.max_answers).green());
    println!("   Time taken:       {:.2}s", stats.duration.as_secs_f64());

    if stats.ranked.is_empty() {
        return;
    }

    println!("\n🏆 {}", "Richest puzzles:".bright_cyan().bold());
    for (i, (word, count)) in stats.ranked.iter().enumerate() {
        let bar = create_progress_bar(*count as f64, stats.max_answers as f64, 30);
        println!(
            "   {:>3}. {:<12} {} {count:4}",
            i + 1,
            word.bright_white().bold(),
            bar.green()
        );
    }
}
