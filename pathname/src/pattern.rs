//! Translation of shell-style match patterns into `glob` crate syntax.
//!
//! The accepted dialect:
//! - `*` matches any run of non-separator characters; `**` is the same as `*`
//! - `?` matches one non-separator character
//! - `[...]` matches one character from a set of characters and `lo-hi`
//!   ranges; `[^...]` matches one character outside the set
//! - `\c` matches `c` literally (not on Windows, where `\` separates paths)
//!
//! A class must hold at least one item, so `[]` and `[]a]` are malformed, and
//! an unescaped `-` or `]` cannot start a range endpoint.
//!
//! The `glob` crate reads `[!...]` as negation, lets `]` open a class and
//! treats `\` literally, so every class is re-emitted as `lo-hi` triples that
//! it parses unambiguously.

use crate::error::{Error, Result};
use crate::lexical::is_separator;

/// Translate `pattern` into `glob` crate syntax.
///
/// Returns `Ok(None)` for a well-formed pattern that can never match, such as
/// one containing `[z-a]`.
///
/// # Errors
///
/// Returns [`Error::InvalidPattern`] if the pattern is malformed.
pub(crate) fn translate(pattern: &str) -> Result<Option<String>> {
    let invalid = |reason: &'static str| Error::InvalidPattern {
        pattern: pattern.to_string(),
        reason,
    };

    let mut translated = String::with_capacity(pattern.len());
    let mut matchable = true;
    let mut chars = pattern.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '*' => {
                while chars.peek() == Some(&'*') {
                    chars.next();
                }
                translated.push('*');
            }
            '?' => translated.push('?'),
            '\\' if escapes_enabled() => {
                let literal = chars.next().ok_or_else(|| invalid("trailing escape"))?;
                push_literal(&mut translated, literal);
            }
            '[' => {
                let class =
                    parse_class(&mut chars).ok_or_else(|| invalid("malformed character class"))?;
                match class.emit() {
                    Some(emitted) => translated.push_str(&emitted),
                    None => matchable = false,
                }
            }
            literal => push_literal(&mut translated, literal),
        }
    }

    Ok(matchable.then_some(translated))
}

fn escapes_enabled() -> bool {
    !cfg!(windows)
}

fn push_literal(out: &mut String, c: char) {
    if matches!(c, '*' | '?' | '[' | ']') {
        out.push('[');
        out.push(c);
        out.push(']');
    } else {
        out.push(c);
    }
}

/// One parsed `[...]` class.
#[derive(Debug, PartialEq, Eq)]
struct CharClass {
    negated: bool,
    ranges: Vec<(char, char)>,
}

/// Parse a class body after its opening `[`, consuming the closing `]`.
///
/// Returns `None` if the class is malformed.
fn parse_class<I>(chars: &mut std::iter::Peekable<I>) -> Option<CharClass>
where
    I: Iterator<Item = char>,
{
    let negated = chars.next_if_eq(&'^').is_some();
    let mut ranges = Vec::new();

    loop {
        if !ranges.is_empty() && chars.next_if_eq(&']').is_some() {
            return Some(CharClass { negated, ranges });
        }
        let lo = class_char(chars)?;
        let hi = if chars.next_if_eq(&'-').is_some() {
            class_char(chars)?
        } else {
            lo
        };
        ranges.push((lo, hi));
    }
}

fn class_char<I>(chars: &mut std::iter::Peekable<I>) -> Option<char>
where
    I: Iterator<Item = char>,
{
    match chars.next()? {
        '-' | ']' => None,
        '\\' if escapes_enabled() => chars.next(),
        c => Some(c),
    }
}

impl CharClass {
    /// Render the class in `glob` crate syntax, or `None` if it matches
    /// nothing.
    fn emit(&self) -> Option<String> {
        let set = merge(&self.ranges);

        // `]` can only sit first in a `glob` class, so a set holding it is
        // written through its complement instead.
        let (ranges, negated) = if set.iter().any(|&(lo, hi)| lo <= ']' && ']' <= hi) {
            (complement(&set), !self.negated)
        } else {
            (set, self.negated)
        };
        // `glob` splits patterns on separators before parsing classes, and a
        // path element never contains one.
        let ranges = without_separators(ranges);

        if negated {
            if ranges.is_empty() {
                return Some("?".to_string());
            }
            Some(format!("[!{}]", triples(&ranges)))
        } else {
            positive_class(ranges)
        }
    }
}

fn positive_class(mut ranges: Vec<(char, char)>) -> Option<String> {
    match ranges.first().copied() {
        None => None,
        // A leading `!` would read as negation.
        Some(('!', '!')) if ranges.len() == 1 => Some("!".to_string()),
        Some(('!', hi)) if ranges.len() == 1 => Some(format!("[\"-{hi}!-!]")),
        Some(('!', _)) => {
            ranges.rotate_left(1);
            Some(format!("[{}]", triples(&ranges)))
        }
        Some(_) => Some(format!("[{}]", triples(&ranges))),
    }
}

fn triples(ranges: &[(char, char)]) -> String {
    ranges
        .iter()
        .map(|&(lo, hi)| format!("{lo}-{hi}"))
        .collect()
}

/// Sort ranges, drop empty ones and merge those that overlap or touch.
fn merge(ranges: &[(char, char)]) -> Vec<(char, char)> {
    let mut sorted: Vec<(char, char)> = ranges
        .iter()
        .copied()
        .filter(|(lo, hi)| lo <= hi)
        .collect();
    sorted.sort_unstable();

    let mut merged: Vec<(char, char)> = Vec::with_capacity(sorted.len());
    for (lo, hi) in sorted {
        match merged.last_mut() {
            Some(last) if next_char(last.1).map_or(true, |after| lo <= after) => {
                last.1 = last.1.max(hi);
            }
            _ => merged.push((lo, hi)),
        }
    }
    merged
}

/// Trim separator endpoints off each range, dropping ranges left empty.
fn without_separators(ranges: Vec<(char, char)>) -> Vec<(char, char)> {
    ranges
        .into_iter()
        .filter_map(|(lo, hi)| {
            let lo = if is_separator(lo) { next_char(lo)? } else { lo };
            let hi = if is_separator(hi) { prev_char(hi)? } else { hi };
            (lo <= hi).then_some((lo, hi))
        })
        .collect()
}

/// Every character not covered by the sorted, merged `ranges`.
fn complement(ranges: &[(char, char)]) -> Vec<(char, char)> {
    let mut gaps = Vec::new();
    let mut start = Some('\0');
    for &(lo, hi) in ranges {
        if let Some(from) = start {
            if from < lo {
                if let Some(to) = prev_char(lo) {
                    gaps.push((from, to));
                }
            }
        }
        start = next_char(hi);
    }
    if let Some(from) = start {
        gaps.push((from, char::MAX));
    }
    gaps
}

fn next_char(c: char) -> Option<char> {
    match c {
        '\u{D7FF}' => Some('\u{E000}'),
        char::MAX => None,
        _ => char::from_u32(u32::from(c) + 1),
    }
}

fn prev_char(c: char) -> Option<char> {
    match c {
        '\u{E000}' => Some('\u{D7FF}'),
        '\0' => None,
        _ => char::from_u32(u32::from(c) - 1),
    }
}
