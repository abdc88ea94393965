use std::collections::BTreeSet;

use tracing::{debug, warn};

use super::segmenter::{split_blocks, BlockLayout};
use super::set_grammar::{parse_set_line, SetLine};
use crate::error::ParseError;
use crate::types::journal_data::Exercise;

/// Parses what is left of a session body once weight and body fat have been
/// taken out. Empty text means the session has no exercises.
pub fn extract_exercises(residual: &str, layout: &BlockLayout) -> Result<Vec<Exercise>, ParseError> {
    if residual.is_empty() {
        return Ok(Vec::new());
    }

    let mut exercises = Vec::new();
    for block in split_blocks(residual, layout.exercise_blank_lines) {
        if let Some(exercise) = parse_exercise_block(block, layout.set_blank_lines)? {
            exercises.push(exercise);
        }
    }
    Ok(exercises)
}

/// Parses one exercise block. Every set line in the block has to name the
/// same exercise type. Returns `None` for a block with no set lines.
pub fn parse_exercise_block(block: &str, set_blank_lines: usize) -> Result<Option<Exercise>, ParseError> {
    let mut types = BTreeSet::new();
    let mut sets = Vec::new();

    for chunk in split_blocks(block, set_blank_lines) {
        for line in chunk.lines().filter(|line| !line.trim().is_empty()) {
            match parse_set_line(line)? {
                SetLine::Parsed { exercise_type, set } => {
                    types.insert(exercise_type);
                    sets.push(set);
                }
                SetLine::Skipped => warn!(line, "exercise type not found, skipping line"),
            }
        }
    }

    if types.len() > 1 {
        return Err(ParseError::InconsistentExerciseTypes { types: types.into_iter().collect() });
    }
    let Some(exercise_type) = types.pop_first() else {
        debug!(block, "no set lines in exercise block");
        return Ok(None);
    };
    Ok(Some(Exercise { exercise_type, sets }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn block_of_matching_sets_becomes_one_exercise() {
        let exercise = parse_exercise_block("- pushup: 10 good, 30 sec\n\n- pushup: 8 good, 30 sec", 1)
            .unwrap()
            .unwrap();
        assert_eq!(exercise.exercise_type, "pushup");
        let reps: Vec<u32> = exercise.sets.iter().map(|s| s.reps).collect();
        assert_eq!(reps, vec![10, 8]);
        assert!(exercise.sets.iter().all(|s| s.form == "good" && s.alt_reps == 0 && s.rest_time == 0));
    }

    #[test]
    fn sets_on_consecutive_lines_are_all_read() {
        let exercise = parse_exercise_block("- row: 10 ok\n- row: 9 ok\n- row: 8 ok", 1).unwrap().unwrap();
        assert_eq!(exercise.sets.len(), 3);
    }

    #[test]
    fn mixed_types_are_rejected() {
        let err = parse_exercise_block("- pushup: 10 good\n\n- squat: 5 ok", 1).unwrap_err();
        assert_eq!(
            err,
            ParseError::InconsistentExerciseTypes { types: vec!["pushup".to_string(), "squat".to_string()] }
        );
    }

    #[test]
    fn notes_are_skipped() {
        let exercise = parse_exercise_block("warm up first\n\n- dip: 12 ok\n\nshoulder felt off", 1)
            .unwrap()
            .unwrap();
        assert_eq!(exercise.exercise_type, "dip");
        assert_eq!(exercise.sets.len(), 1);
        assert_eq!(parse_exercise_block("just notes", 1).unwrap(), None);
    }

    #[test]
    fn exercises_keep_block_order() {
        let residual = "- pushup: 10 good\n\n- pushup: 9 good\n\n\n- squat: 5 ok, 2 min";
        let exercises = extract_exercises(residual, &BlockLayout::default()).unwrap();
        let names: Vec<&str> = exercises.iter().map(|e| e.exercise_type.as_str()).collect();
        assert_eq!(names, vec!["pushup", "squat"]);
        assert_eq!(exercises[1].sets[0].rest_time, 2);
    }

    #[test]
    fn empty_residual_has_no_exercises() {
        assert!(extract_exercises("", &BlockLayout::default()).unwrap().is_empty());
    }
}
