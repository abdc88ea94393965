// Declare all modules that are part of this library
pub mod config;
pub mod error;
pub mod types {
    pub mod journal_data;
}
pub mod parsing;
pub mod series;

pub use error::{ConfigError, ParseError};
pub use parsing::{parse_workout_log, BlockLayout};
pub use series::{Metric, TimeSeries};
pub use types::journal_data::{Exercise, ExerciseVariation, Session, Set, WorkoutLog};
