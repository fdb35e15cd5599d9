use pest::iterators::Pair;
use pest::Parser;

use crate::day::{DayMarker, DayToken, TokenPolicy};
use crate::error::{Error, Result};

#[derive(Parser)]
#[grammar = "grammar.pest"]
struct CellParser;

/// Parse the content of a month cell into the list of days it refers to, in
/// order of appearance. A blank cell holds no day.
///
/// ```
/// use working_calendar_syntax::{parse, DayMarker, DayToken, TokenPolicy};
///
/// assert_eq!(
///     parse("3,4+,30*", TokenPolicy::default()).unwrap(),
///     [
///         DayToken::new(3, DayMarker::Plain),
///         DayToken::new(4, DayMarker::Moved),
///         DayToken::new(30, DayMarker::Shortened),
///     ],
/// );
///
/// assert!(parse("", TokenPolicy::Strict).unwrap().is_empty());
/// ```
pub fn parse(data: &str, policy: TokenPolicy) -> Result<Vec<DayToken>> {
    if data.trim().is_empty() {
        return Ok(Vec::new());
    }

    match policy {
        TokenPolicy::Strict => {
            let cell_pair = CellParser::parse(Rule::input_strict_cell, data)
                .map_err(Error::from)?
                .next()
                .expect("grammar error: no strict_cell found");

            build_strict_cell(cell_pair)
        }
        TokenPolicy::Permissive => {
            let cell_pair = CellParser::parse(Rule::input_loose_cell, data)
                .map_err(Error::from)?
                .next()
                .expect("grammar error: no loose_cell found");

            build_loose_cell(cell_pair)
        }
    }
}

fn unexpected_token<T>(token: Rule, parent: Rule) -> T {
    unreachable!("Grammar error: found `{token:?}` inside of `{parent:?}`")
}

fn parse_day_number(raw: &str) -> Result<u32> {
    raw.parse().map_err(|_| Error::Overflow {
        value: raw.to_string(),
        expected: format!("a day number up to {}", u32::MAX),
    })
}

// ---
// --- Strict cells
// ---

fn build_strict_cell(pair: Pair<Rule>) -> Result<Vec<DayToken>> {
    assert_eq!(pair.as_rule(), Rule::strict_cell);
    pair.into_inner().map(build_strict_token).collect()
}

fn build_strict_token(pair: Pair<Rule>) -> Result<DayToken> {
    assert_eq!(pair.as_rule(), Rule::strict_token);
    let mut pairs = pair.into_inner();

    let day = build_day_number(pairs.next().expect("grammar error: token without day"))?;
    let marker = pairs.next().map(build_day_marker).unwrap_or_default();
    Ok(DayToken { day, marker })
}

fn build_day_number(pair: Pair<Rule>) -> Result<u32> {
    assert_eq!(pair.as_rule(), Rule::day_number);
    parse_day_number(pair.as_str())
}

fn build_day_marker(pair: Pair<Rule>) -> DayMarker {
    assert_eq!(pair.as_rule(), Rule::day_marker);

    let pair = pair
        .into_inner()
        .next()
        .expect("grammar error: empty day marker");

    match pair.as_rule() {
        Rule::shortened_marker => DayMarker::Shortened,
        Rule::moved_marker => DayMarker::Moved,
        other => unexpected_token(other, Rule::day_marker),
    }
}

// ---
// --- Loose cells
// ---

fn build_loose_cell(pair: Pair<Rule>) -> Result<Vec<DayToken>> {
    assert_eq!(pair.as_rule(), Rule::loose_cell);
    pair.into_inner().map(build_loose_token).collect()
}

fn build_loose_token(pair: Pair<Rule>) -> Result<DayToken> {
    assert_eq!(pair.as_rule(), Rule::loose_token);
    let raw = pair.as_str();

    let marker = {
        if raw.contains('*') {
            DayMarker::Shortened
        } else if raw.contains('+') {
            DayMarker::Moved
        } else {
            DayMarker::Plain
        }
    };

    let stripped: String = raw.chars().filter(|c| !c.is_ascii_punctuation()).collect();
    let digits = stripped.trim();

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Error::InvalidDay(raw.trim().to_string()));
    }

    #[cfg(feature = "log")]
    log_ignored_punctuation(raw);

    Ok(DayToken { day: parse_day_number(digits)?, marker })
}

#[cfg(feature = "log")]
fn log_ignored_punctuation(raw: &str) {
    if raw.chars().any(|c| c.is_ascii_punctuation() && c != '+' && c != '*') {
        log::debug!("Ignored unexpected punctuation in day token `{}`", raw.trim());
    }
}
