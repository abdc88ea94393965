//! Grammar for a single set line:
//!
//! ```text
//! - <exercise type> [(<grip>, <position>, <movement>)]: <reps> <form> [[(]<n> OB[)]][, <rest> min]
//! ```
//!
//! The header (text before the first colon) is matched with regular
//! expressions; the detail clause after the colon is a small combinator
//! grammar.

use std::sync::LazyLock;

use nom::{
    branch::alt,
    bytes::complete::{tag, take_till},
    character::complete::{char as pchar, digit1, multispace0},
    combinator::{all_consuming, map_res},
    multi::many0,
    sequence::{delimited, preceded, terminated, tuple},
    IResult,
};
use regex::Regex;

use crate::error::ParseError;
use crate::types::journal_data::{ExerciseVariation, Set};

static EXERCISE_TYPE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*-\s+(?P<exercise_type>[^(:,]+)").expect("static regex must compile")
});
static VARIATION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\((?P<fields>[^()]*)\)").expect("static regex must compile")
});

/// Result of reading one set line. A line with no exercise type is not an
/// error, it is reported back as skipped.
#[derive(Debug, Clone, PartialEq)]
pub enum SetLine {
    Parsed { exercise_type: String, set: Set },
    Skipped,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetDetail {
    pub reps: u32,
    pub form: String,
    pub alt_reps: u32,
    pub rest_time: u32,
}

pub fn parse_set_line(line: &str) -> Result<SetLine, ParseError> {
    let Some(exercise_type) = extract_exercise_type(line) else {
        return Ok(SetLine::Skipped);
    };
    let (header, detail) = line.split_once(':').unwrap_or((line, ""));
    let variation = parse_variation(header, line)?;
    let SetDetail { reps, form, alt_reps, rest_time } = parse_set_detail(detail, line)?;

    Ok(SetLine::Parsed {
        exercise_type: exercise_type.to_string(),
        set: Set { variation, reps, alt_reps, form, rest_time },
    })
}

/// Text between the leading `- ` and the first `(`, `:` or `,`.
pub fn extract_exercise_type(line: &str) -> Option<&str> {
    let caps = EXERCISE_TYPE_RE.captures(line)?;
    let exercise_type = caps.name("exercise_type")?.as_str().trim();
    (!exercise_type.is_empty()).then_some(exercise_type)
}

/// Parses the optional `(grip, position, movement)` group of a header.
/// Blank fields are `None`; anything other than three fields is fatal.
pub fn parse_variation(header: &str, line: &str) -> Result<Option<ExerciseVariation>, ParseError> {
    if !header.contains('(') {
        return Ok(None);
    }
    let malformed = || ParseError::MalformedVariation { line: line.to_string() };

    let caps = VARIATION_RE.captures(header).ok_or_else(malformed)?;
    let fields: Vec<Option<String>> = caps["fields"]
        .split(',')
        .map(|field| {
            let field = field.trim();
            (!field.is_empty()).then(|| field.to_string())
        })
        .collect();

    match <[Option<String>; 3]>::try_from(fields) {
        Ok([grip_type, position_type, movement_type]) => {
            Ok(Some(ExerciseVariation { grip_type, position_type, movement_type }))
        }
        Err(_) => Err(malformed()),
    }
}

/// Parses the clause after the colon. Only `reps` is required.
pub fn parse_set_detail(detail: &str, line: &str) -> Result<SetDetail, ParseError> {
    let (_, (reps, head, segments)) = detail_clause(detail).map_err(|_| {
        if leading_digits(detail).is_ok() {
            ParseError::RepsOutOfRange { line: line.to_string() }
        } else {
            ParseError::MissingReps { line: line.to_string() }
        }
    })?;
    let (form, alt_reps) = split_alt_reps(head);
    let rest_time = segments
        .iter()
        .find_map(|segment| rest_minutes(segment).ok().map(|(_, minutes)| minutes))
        .unwrap_or(0);

    Ok(SetDetail { reps, form: form.to_string(), alt_reps, rest_time })
}

fn leading_digits(input: &str) -> IResult<&str, &str> {
    preceded(multispace0, digit1)(input)
}

fn number(input: &str) -> IResult<&str, u32> {
    map_res(digit1, str::parse::<u32>)(input)
}

// <reps> <head> (, <segment>)*
fn detail_clause(input: &str) -> IResult<&str, (u32, &str, Vec<&str>)> {
    tuple((
        preceded(multispace0, number),
        take_till(|c: char| c == ','),
        many0(preceded(pchar(','), take_till(|c: char| c == ','))),
    ))(input)
}

// <n> OB
fn ob_count(input: &str) -> IResult<&str, u32> {
    terminated(number, preceded(multispace0, tag("OB")))(input)
}

// (<n> OB) or <n> OB
fn alt_reps(input: &str) -> IResult<&str, u32> {
    alt((delimited(pchar('('), delimited(multispace0, ob_count, multispace0), pchar(')')), ob_count))(input)
}

// <n> min
fn rest_minutes(input: &str) -> IResult<&str, u32> {
    terminated(preceded(multispace0, number), preceded(multispace0, tag("min")))(input)
}

/// Splits a trailing `(<n> OB)` or `<n> OB` off the form text. Other
/// parenthesised text stays part of the form.
fn split_alt_reps(head: &str) -> (&str, u32) {
    let head = head.trim_end();
    let start = if head.ends_with(')') {
        head.rfind('(')
    } else {
        head.strip_suffix("OB").map(|body| {
            let body = body.trim_end();
            body.trim_end_matches(|c: char| c.is_ascii_digit()).len()
        })
    };
    if let Some(start) = start {
        let (form, marker) = head.split_at(start);
        let separated = marker.starts_with('(') || form.is_empty() || form.ends_with(char::is_whitespace);
        if separated {
            if let Ok((_, count)) = all_consuming(alt_reps)(marker) {
                return (form.trim(), count);
            }
        }
    }
    (head.trim(), 0)
}
