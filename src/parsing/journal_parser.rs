use tracing::debug;

use super::dates::{extract_session_dates, SessionBlock};
use super::exercises::extract_exercises;
use super::scalars::{extract_body_fat, extract_weight};
use super::segmenter::{split_blocks, BlockLayout};
use crate::error::ParseError;
use crate::types::journal_data::{Session, WorkoutLog};

/// Parses a whole journal. Fails on the first fatal problem; no partial
/// log is returned.
pub fn parse_workout_log(journal: &str, layout: &BlockLayout) -> Result<WorkoutLog, ParseError> {
    let blocks: Vec<&str> = split_blocks(journal, layout.session_blank_lines)
        .into_iter()
        .filter(|block| {
            let keep = !block.trim().is_empty();
            if !keep {
                debug!("dropping empty session block");
            }
            keep
        })
        .collect();

    let sessions = extract_session_dates(&blocks, journal)?
        .iter()
        .map(|block| parse_session(block, layout))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(WorkoutLog { sessions })
}

/// Runs weight, body fat and exercise extraction over a dated block, in
/// that order, each stage seeing only what the previous one left.
pub fn parse_session(block: &SessionBlock<'_>, layout: &BlockLayout) -> Result<Session, ParseError> {
    let weight = extract_weight(block.body)?;
    let body_fat = extract_body_fat(&weight.residual)?;
    let exercises = extract_exercises(&body_fat.residual, layout)?;

    debug!(
        date = %block.date,
        weight = ?weight.value,
        body_fat = ?body_fat.value,
        exercises = exercises.len(),
        "parsed session"
    );

    Ok(Session { date: block.date, weight: weight.value, body_fat: body_fat.value, exercises })
}
