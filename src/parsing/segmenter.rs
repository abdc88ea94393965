use serde::Deserialize;

/// Number of blank lines separating each level of the journal.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct BlockLayout {
    pub session_blank_lines: usize,
    pub exercise_blank_lines: usize,
    pub set_blank_lines: usize,
}

impl Default for BlockLayout {
    fn default() -> Self {
        BlockLayout { session_blank_lines: 3, exercise_blank_lines: 2, set_blank_lines: 1 }
    }
}

impl BlockLayout {
    pub fn is_valid(&self) -> bool {
        self.session_blank_lines > self.exercise_blank_lines
            && self.exercise_blank_lines > self.set_blank_lines
    }
}

/// Splits `text` wherever exactly `blank_lines` blank lines separate two
/// pieces of content, i.e. on `blank_lines + 1` consecutive newlines.
/// Pieces are returned untrimmed.
pub fn split_blocks(text: &str, blank_lines: usize) -> Vec<&str> {
    let delimiter = "\n".repeat(blank_lines + 1);
    text.split(delimiter.as_str()).collect()
}
