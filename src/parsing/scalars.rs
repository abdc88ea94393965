use crate::error::ParseError;

const WEIGHT_MARKER: &str = "weight";
const BODY_FAT_MARKER: &str = "body fat";

/// A value pulled out of a session body together with the text that is
/// left for the next extractor.
#[derive(Debug, Clone, PartialEq)]
pub struct Extraction<T> {
    pub value: T,
    pub residual: String,
}

impl<T> Extraction<T> {
    fn untouched(value: T, residual: &str) -> Self {
        Extraction { value, residual: residual.to_string() }
    }
}

/// Reads `weight <number>` from the first line mentioning "weight" and
/// drops that line plus the blank line after it.
pub fn extract_weight(residual: &str) -> Result<Extraction<Option<f64>>, ParseError> {
    let lines: Vec<&str> = residual.split('\n').collect();
    let Some(idx) = lines.iter().position(|line| line.contains(WEIGHT_MARKER)) else {
        return Ok(Extraction::untouched(None, residual));
    };

    let line = lines[idx];
    let weight = line
        .split_whitespace()
        .nth(1)
        .and_then(|token| token.parse::<f64>().ok())
        .ok_or_else(|| ParseError::InvalidScalar { field: "weight", text: line.to_string() })?;

    let mut resume = idx + 1;
    if lines.get(resume).is_some_and(|next| next.trim().is_empty()) {
        resume += 1;
    }
    let kept: Vec<&str> = lines[..idx].iter().chain(&lines[resume.min(lines.len())..]).copied().collect();

    Ok(Extraction { value: Some(weight), residual: kept.join("\n") })
}

/// Reads the body-fat percentage from the first paragraph when that
/// paragraph mentions "body fat"; the paragraph is consumed.
pub fn extract_body_fat(residual: &str) -> Result<Extraction<Option<f64>>, ParseError> {
    let (paragraph, rest) = residual.split_once("\n\n").unwrap_or((residual, ""));
    if !paragraph.contains(BODY_FAT_MARKER) {
        return Ok(Extraction::untouched(None, residual));
    }

    let last_line = paragraph.split('\n').last().unwrap_or_default();
    let body_fat = last_line
        .split_whitespace()
        .last()
        .map(strip_unit)
        .and_then(|token| token.parse::<f64>().ok())
        .ok_or_else(|| ParseError::InvalidScalar { field: "body fat", text: last_line.to_string() })?;

    Ok(Extraction { value: Some(body_fat), residual: rest.to_string() })
}

fn strip_unit(token: &str) -> &str {
    match token.chars().last() {
        Some(c) if !c.is_ascii_digit() => &token[..token.len() - c.len_utf8()],
        _ => token,
    }
}
