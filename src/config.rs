use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

use crate::error::ConfigError;
use crate::parsing::BlockLayout;

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    pub journal_path: PathBuf,
    /// Placeholder sessions at the top of the journal left out of series.
    pub series_skip: usize,
    pub layout: BlockLayout,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            journal_path: PathBuf::from("workouts.txt"),
            series_skip: 3,
            layout: BlockLayout::default(),
        }
    }
}

pub fn parse_config(file_path: &str, contents: &str) -> Result<Config, ConfigError> {
    let config = toml::from_str::<Config>(contents)
        .map_err(|source| ConfigError::Parse { path: file_path.to_string(), source })?;
    if config.layout.is_valid() {
        Ok(config)
    } else {
        Err(ConfigError::Layout { path: file_path.to_string() })
    }
}

pub fn load_config_from_file(file_path: &str) -> Result<Config, ConfigError> {
    let contents = fs::read_to_string(file_path)
        .map_err(|source| ConfigError::Read { path: file_path.to_string(), source })?;
    parse_config(file_path, &contents)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        assert_eq!(parse_config("config.toml", "").unwrap(), Config::default());
    }

    #[test]
    fn partial_layout_keeps_other_defaults() {
        let config = parse_config(
            "config.toml",
            "journal_path = \"log.txt\"\n\
             [layout]\nsession_blank_lines = 2\nexercise_blank_lines = 1\nset_blank_lines = 0\n",
        )
        .unwrap();
        assert_eq!(config.journal_path, PathBuf::from("log.txt"));
        assert_eq!(config.series_skip, 3);
        assert_eq!(config.layout.set_blank_lines, 0);
    }

    #[test]
    fn non_decreasing_layout_is_rejected() {
        let err = parse_config("config.toml", "[layout]\nexercise_blank_lines = 3\n").unwrap_err();
        assert!(matches!(err, ConfigError::Layout { .. }));
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let err = load_config_from_file("does/not/exist.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
