//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_analysis_result, print_random_word, print_rank_statistics, print_scramble,
    print_word_list,
};
