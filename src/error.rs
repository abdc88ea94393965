use thiserror::Error;

/// Fatal problems found while parsing a journal. Soft misses (no weight
/// line, a set line without an exercise type) never show up here.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ParseError {
    #[error("Invalid session date '{token}' (expected DD/MM/YY)")]
    InvalidDate { token: String },
    #[error("Duplicate session dates: {}", dates.join(", "))]
    DuplicateDates { dates: Vec<String> },
    #[error(
        "Session blocks and date headers disagree (only in blocks: [{}], only in headers: [{}])",
        only_in_blocks.join(", "),
        only_in_headers.join(", ")
    )]
    DateMismatch {
        only_in_blocks: Vec<String>,
        only_in_headers: Vec<String>,
    },
    #[error("Invalid {field} value in '{text}'")]
    InvalidScalar { field: &'static str, text: String },
    #[error("Malformed variation (expected '(grip, position, movement)') in '{line}'")]
    MalformedVariation { line: String },
    #[error("Missing reps in set line '{line}'")]
    MissingReps { line: String },
    #[error("Rep count too large in set line '{line}'")]
    RepsOutOfRange { line: String },
    #[error("Exercise block mixes exercise types: {}", types.join(", "))]
    InconsistentExerciseTypes { types: Vec<String> },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
    #[error("Invalid layout in {path}: blank-line counts must strictly decrease from session to exercise to set")]
    Layout { path: String },
}
