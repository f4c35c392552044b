// src/services/clause.rs

//! Clause grammar for notice schedule lines.
//!
//! A schedule line has a fixed shape:
//!
//! ```text
//! 四、劳动节：4月29日至5月3日放假调休，共5天。4月23日（星期日）、5月6日（星期六）上班。
//! ^^^^^^^^^^  ^^^^^^^^^^^^^^^         ^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^
//!   name          span      "放假"               make-up fragment
//! ```
//!
//! Fragments are tokenized into numbers and the date markers `年`, `月`,
//! `日` and `至`; everything else is opaque. Dates are then read off the
//! token stream.

use crate::error::{AppError, Result};
use crate::models::{Clause, DateMention, DaySpan};

const ITEM_SEPARATOR: char = '、';
const NAME_TERMINATOR: char = '：';
const HOLIDAY_MARKER: &str = "放假";
const WORK_MARKER: &str = "上班";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token {
    Number(u32),
    Year,
    Month,
    Day,
    Through,
    Other,
}

fn tokenize(fragment: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut digits = String::new();

    for ch in fragment.chars() {
        if ch.is_ascii_digit() {
            digits.push(ch);
            continue;
        }
        if !digits.is_empty() {
            tokens.push(number_token(&digits));
            digits.clear();
        }
        tokens.push(match ch {
            '年' => Token::Year,
            '月' => Token::Month,
            '日' => Token::Day,
            '至' => Token::Through,
            _ => Token::Other,
        });
    }
    if !digits.is_empty() {
        tokens.push(number_token(&digits));
    }
    tokens
}

fn number_token(digits: &str) -> Token {
    digits.parse().map_or(Token::Other, Token::Number)
}

/// Read a date mention at the head of `tokens`, returning it with the
/// number of tokens consumed.
fn mention_at(tokens: &[Token]) -> Option<(DateMention, usize)> {
    use Token::*;

    match tokens {
        [Number(y), Year, Number(m), Month, Number(d), Day, ..] => Some((
            DateMention {
                year: i32::try_from(*y).ok(),
                month: Some(*m),
                day: *d,
            },
            6,
        )),
        [Number(m), Month, Number(d), Day, ..] => Some((DateMention::month_day(*m, *d), 4)),
        [Number(d), Day, ..] => Some((
            DateMention {
                year: None,
                month: None,
                day: *d,
            },
            2,
        )),
        _ => None,
    }
}

fn mentions(tokens: &[Token]) -> Vec<DateMention> {
    let mut found = Vec::new();
    let mut i = 0;
    while i < tokens.len() {
        match mention_at(&tokens[i..]) {
            Some((mention, used)) => {
                found.push(mention);
                i += used;
            }
            None => i += 1,
        }
    }
    found
}

/// Every `<M>月<D>日` in the fragment, in order of appearance.
fn month_day_mentions(tokens: &[Token]) -> Vec<DateMention> {
    mentions(tokens)
        .into_iter()
        .filter(|m| m.month.is_some())
        .collect()
}

fn parse_name(line: &str) -> Result<String> {
    let (_, after) = line
        .split_once(ITEM_SEPARATOR)
        .ok_or_else(|| AppError::malformed(line, "missing '、' before holiday name"))?;
    let (name, _) = after
        .split_once(NAME_TERMINATOR)
        .ok_or_else(|| AppError::malformed(line, "missing '：' after holiday name"))?;

    let name = name.trim();
    if name.is_empty() {
        return Err(AppError::malformed(line, "empty holiday name"));
    }
    Ok(name.to_string())
}

fn parse_span(line: &str, fragment: &str) -> Result<DaySpan> {
    let tokens = tokenize(fragment);

    match tokens.iter().position(|t| *t == Token::Through) {
        None => month_day_mentions(&tokens)
            .into_iter()
            .next()
            .map(DaySpan::Single)
            .ok_or_else(|| AppError::malformed(line, "missing holiday date")),
        Some(through) => {
            let start = month_day_mentions(&tokens[..through])
                .into_iter()
                .next()
                .ok_or_else(|| AppError::malformed(line, "missing range start date"))?;
            let end = mentions(&tokens[through + 1..])
                .into_iter()
                .next()
                .ok_or_else(|| AppError::malformed(line, "missing range end day"))?;
            Ok(DaySpan::Range { start, end })
        }
    }
}

/// Parse one schedule line into its name, span and make-up days.
pub fn parse_clause(line: &str) -> Result<Clause> {
    let name = parse_name(line)?;

    // The make-up fragment ends at the next "放假".
    let mut fragments = line.splitn(3, HOLIDAY_MARKER);
    let span_fragment = fragments.next().unwrap_or(line);
    let remainder = fragments.next().unwrap_or("");
    let span = parse_span(line, span_fragment)?;

    let make_up = if remainder.contains(WORK_MARKER) {
        month_day_mentions(&tokenize(remainder))
    } else {
        Vec::new()
    };

    Ok(Clause {
        line: line.to_string(),
        name,
        span,
        make_up,
    })
}
