pub mod dates;
pub mod exercises;
pub mod journal_parser;
pub mod scalars;
pub mod segmenter;
pub mod set_grammar;

// Re-export the main parsing function for convenience
pub use journal_parser::parse_workout_log;
pub use segmenter::BlockLayout;
