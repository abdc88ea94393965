use std::collections::BTreeSet;

use chrono::NaiveDate;
use workout_journal::parsing::dates::list_session_dates;
use workout_journal::{
    parse_workout_log, BlockLayout, ExerciseVariation, Metric, ParseError, Set, TimeSeries, WorkoutLog,
};

const JOURNAL: &str = include_str!("fixtures/workouts.txt");

fn date(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2021, 1, day).unwrap()
}

fn parse(journal: &str) -> Result<WorkoutLog, ParseError> {
    parse_workout_log(journal, &BlockLayout::default())
}

#[test]
fn one_session_per_header() {
    let log = parse(JOURNAL).unwrap();
    let headers: BTreeSet<NaiveDate> = list_session_dates(JOURNAL)
        .into_iter()
        .map(|token| NaiveDate::parse_from_str(token, "%d/%m/%y").unwrap())
        .collect();
    assert_eq!(log.sessions.len(), headers.len());
    assert_eq!(log.dates().into_iter().collect::<BTreeSet<_>>(), headers);
}

#[test]
fn scalar_readings() {
    let log = parse(JOURNAL).unwrap();
    assert_eq!(log.weights(), vec![None, Some(82.0), Some(81.6), None, Some(81.1)]);
    assert_eq!(log.body_fats(), vec![None, Some(15.2), None, Some(14.8), None]);
}

#[test]
fn exercises_and_sets() {
    let log = parse(JOURNAL).unwrap();
    assert_eq!(log.exercise_count(), 4);
    assert_eq!(log.set_count(), 7);

    let upper = &log.sessions[2];
    assert_eq!(upper.date, date(4));
    assert_eq!(upper.exercises[0].exercise_type, "pushup");
    assert_eq!(upper.exercises[0].sets.iter().map(|s| s.reps).collect::<Vec<_>>(), vec![10, 8]);

    let ring_row = &upper.exercises[1];
    assert_eq!(ring_row.exercise_type, "ring row");
    assert_eq!(
        ring_row.sets[0],
        Set {
            variation: Some(ExerciseVariation {
                grip_type: Some("ring".to_string()),
                position_type: Some("incline".to_string()),
                movement_type: Some("eccentric".to_string()),
            }),
            reps: 10,
            alt_reps: 2,
            form: "good".to_string(),
            rest_time: 45,
        }
    );
    assert_eq!((ring_row.sets[1].reps, ring_row.sets[1].alt_reps, ring_row.sets[1].rest_time), (9, 1, 2));

    let lower = &log.sessions[3];
    let squat = &lower.exercises[0];
    assert_eq!(squat.sets[0].variation.as_ref().unwrap().grip_type, None);
    assert_eq!(squat.sets[1].rest_time, 0);
    assert_eq!(lower.exercises[1].exercise_type, "lunge");

    assert!(log.sessions[4].exercises.is_empty());
}

#[test]
fn weight_series_for_plotting() {
    let log = parse(JOURNAL).unwrap();
    let series = TimeSeries::from_log(&log, Metric::Weight).skip_leading(3);
    assert_eq!(series.points.len(), 2);
    assert_eq!(series.present().collect::<Vec<_>>(), vec![(date(8), 81.1)]);
}

#[test]
fn duplicated_header_is_rejected() {
    let journal = JOURNAL.replace("08/01/21", "04/01/21");
    assert_eq!(parse(&journal).unwrap_err(), ParseError::DuplicateDates { dates: vec!["04/01/21".to_string()] });
}

#[test]
fn repeated_header_within_a_session_gap_is_rejected() {
    let journal = "01/03/21: a\n- squat: 5 ok\n\n\n01/03/21: b\n- squat: 4 ok\n";
    assert_eq!(parse(journal).unwrap_err(), ParseError::DuplicateDates { dates: vec!["01/03/21".to_string()] });
}

#[test]
fn mixed_exercise_block_is_rejected() {
    let journal = JOURNAL.replace("- pushup: 8 good", "- squat: 8 good");
    assert_eq!(
        parse(&journal).unwrap_err(),
        ParseError::InconsistentExerciseTypes { types: vec!["pushup".to_string(), "squat".to_string()] }
    );
}

#[test]
fn grammar_violations_are_fatal() {
    let journal = JOURNAL.replace("(ring, incline, eccentric): 10", "(ring, incline): 10");
    assert!(matches!(parse(&journal), Err(ParseError::MalformedVariation { .. })));

    let journal = JOURNAL.replace("- lunge: 12G", "- lunge: G");
    assert_eq!(parse(&journal).unwrap_err(), ParseError::MissingReps { line: "- lunge: G".to_string() });
}

#[test]
fn header_swallowed_by_short_gap_is_a_mismatch() {
    let journal = JOURNAL.replace("12G\n\n\n\n08/01/21", "12G\n\n\n08/01/21");
    assert_eq!(
        parse(&journal).unwrap_err(),
        ParseError::DateMismatch { only_in_blocks: vec![], only_in_headers: vec!["08/01/21".to_string()] }
    );
}
