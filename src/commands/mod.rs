//! Command implementations

pub mod analyze;
pub mod console;
pub mod rank;

pub use analyze::{AnalysisResult, analyze_word};
pub use console::{ConsoleEnd, ConsoleSummary, run_console};
pub use rank::{RankConfig, RankStatistics, run_rank};
