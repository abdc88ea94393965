use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;
use tracing::info;

use crate::error::ParseError;

pub const DATE_FORMAT: &str = "%d/%m/%y";
const DATE_TOKEN_LEN: usize = 8;

/// A session block whose date has been validated. `body` is the block
/// text after the header line.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionBlock<'a> {
    pub date: NaiveDate,
    pub body: &'a str,
}

/// The leading `DD/MM/YY` token of a session block.
pub fn block_date_token(block: &str) -> String {
    block.chars().take(DATE_TOKEN_LEN).collect()
}

/// Reference date list: the prefix before the first colon of every journal
/// line containing both a slash and a colon.
pub fn list_session_dates(journal: &str) -> Vec<&str> {
    journal
        .lines()
        .filter(|line| line.contains('/'))
        .filter_map(|line| line.find(':').map(|idx| &line[..idx]))
        .collect()
}

fn duplicated<'a>(tokens: impl Iterator<Item = &'a str>) -> BTreeSet<String> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for token in tokens {
        *counts.entry(token).or_insert(0) += 1;
    }
    counts.into_iter().filter(|&(_, count)| count > 1).map(|(token, _)| token.to_string()).collect()
}

/// Dates each session block and checks the result against the dates found
/// in the header lines of the whole journal. Nothing is returned unless
/// every block has a unique date matching a header.
pub fn extract_session_dates<'a>(
    blocks: &[&'a str],
    journal: &str,
) -> Result<Vec<SessionBlock<'a>>, ParseError> {
    let tokens: Vec<String> = blocks.iter().map(|b| block_date_token(b)).collect();
    let reference = list_session_dates(journal);
    info!("Number of workout sessions in file: {}", reference.len());

    // A repeated header closer than a session gap ends up inside one block,
    // so the header list is checked as well as the block tokens.
    let mut duplicates = duplicated(tokens.iter().map(String::as_str));
    duplicates.extend(duplicated(reference.iter().copied()));
    if !duplicates.is_empty() {
        return Err(ParseError::DuplicateDates { dates: duplicates.into_iter().collect() });
    }

    let from_blocks: BTreeSet<&str> = tokens.iter().map(String::as_str).collect();
    let from_headers: BTreeSet<&str> = reference.into_iter().collect();
    if from_blocks != from_headers {
        return Err(ParseError::DateMismatch {
            only_in_blocks: from_blocks.difference(&from_headers).map(|s| s.to_string()).collect(),
            only_in_headers: from_headers.difference(&from_blocks).map(|s| s.to_string()).collect(),
        });
    }

    blocks
        .iter()
        .zip(tokens)
        .map(|(block, token)| {
            let date = NaiveDate::parse_from_str(&token, DATE_FORMAT)
                .map_err(|_| ParseError::InvalidDate { token })?;
            let body = block.split_once('\n').map_or("", |(_, rest)| rest);
            Ok(SessionBlock { date, body })
        })
        .collect()
}
