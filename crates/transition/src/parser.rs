//! Parsing of `transition` strings.
//!
//! ```text
//! transition := clause (',' clause)*
//! clause     := property WS duration WS easing (WS duration)?
//! duration   := number ('ms' | 's')
//! easing     := ident | 'cubic-bezier(' num ',' num ',' num ',' num ')'
//! ```
//!
//! The trailing duration is a start delay. Anything that does not fit is
//! skipped, so a string never fails to parse.

use indexmap::IndexMap;

use crate::easing::EasingDescriptor;

/// Wildcard property matching anything without an entry of its own.
pub const ALL: &str = "all";

#[derive(Debug, Clone, PartialEq)]
pub struct TransitionEntry {
    pub duration_ms: f64,
    pub easing: EasingDescriptor,
    pub delay_ms: f64,
}

/// Property (or [`ALL`]) to transition entry, in order of first appearance.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransitionSpec {
    entries: IndexMap<String, TransitionEntry>,
}

impl TransitionSpec {
    pub fn parse(transition: &str) -> Self {
        let mut entries = IndexMap::new();

        for segment in split_top_level(transition, ',') {
            let tokens = tokenize(segment);
            let mut index = 0;

            while index < tokens.len() {
                match parse_clause(&tokens[index..]) {
                    Some((property, entry, consumed)) => {
                        // last occurrence wins
                        entries.insert(property.to_string(), entry);
                        index += consumed;
                    }
                    None => {
                        tracing::debug!(
                            "ignoring transition token {:?} in {transition:?}",
                            tokens[index]
                        );
                        index += 1;
                    }
                }
            }
        }

        Self { entries }
    }

    /// Exact match only.
    pub fn get(&self, property: &str) -> Option<&TransitionEntry> {
        self.entries.get(property)
    }

    /// The entry that applies to a style key: its own, then its outer
    /// property for dot-paths, then [`ALL`].
    pub fn lookup(&self, key: &str) -> Option<&TransitionEntry> {
        self.entries
            .get(key)
            .or_else(|| {
                key.split_once('.')
                    .and_then(|(outer, _)| self.entries.get(outer))
            })
            .or_else(|| self.entries.get(ALL))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &TransitionEntry)> {
        self.entries
            .iter()
            .map(|(property, entry)| (property.as_str(), entry))
    }
}

pub fn parse_transition(transition: &str) -> TransitionSpec {
    TransitionSpec::parse(transition)
}

/// Parses `"<number>ms"` or `"<number>s"` into milliseconds.
pub fn parse_duration_ms(token: &str) -> Option<f64> {
    let (number, scale) = match token.strip_suffix("ms") {
        Some(number) => (number, 1.0),
        None => (token.strip_suffix('s')?, 1000.0),
    };

    number
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite() && *value >= 0.0)
        .map(|value| value * scale)
}

// returns the property, its entry, and how many tokens were used
fn parse_clause<'a>(tokens: &[&'a str]) -> Option<(&'a str, TransitionEntry, usize)> {
    let [property, duration, easing, rest @ ..] = tokens else {
        return None;
    };

    if !is_property(property) {
        return None;
    }

    let duration_ms = parse_duration_ms(duration)?;

    // a second duration here means the easing is missing
    if parse_duration_ms(easing).is_some() || !is_easing(easing) {
        return None;
    }

    let (delay_ms, consumed) = match rest.first().and_then(|token| parse_duration_ms(token)) {
        Some(delay_ms) => (delay_ms, 4),
        None => (0.0, 3),
    };

    Some((
        *property,
        TransitionEntry {
            duration_ms,
            easing: EasingDescriptor::parse(easing),
            delay_ms,
        },
        consumed,
    ))
}

fn is_property(token: &str) -> bool {
    let mut chars = token.chars();
    chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'))
}

fn is_easing(token: &str) -> bool {
    let name = token.split('(').next().unwrap_or_default();
    is_property(name) && !name.contains('.')
}

// splits on `separator` outside of parentheses
fn split_top_level(input: &str, separator: char) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;

    for (index, c) in input.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            c if c == separator && depth == 0 => {
                parts.push(&input[start..index]);
                start = index + c.len_utf8();
            }
            _ => {}
        }
    }
    parts.push(&input[start..]);

    parts
}

// whitespace separated, parenthesized groups stay attached to their token
fn tokenize(segment: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    let mut depth = 0usize;
    let mut start: Option<usize> = None;

    for (index, c) in segment.char_indices() {
        match c {
            '(' => {
                depth += 1;
                start.get_or_insert(index);
            }
            ')' => {
                depth = depth.saturating_sub(1);
                start.get_or_insert(index);
            }
            c if c.is_whitespace() && depth == 0 => {
                if let Some(begin) = start.take() {
                    tokens.push(&segment[begin..index]);
                }
            }
            _ => {
                start.get_or_insert(index);
            }
        }
    }

    if let Some(begin) = start {
        tokens.push(&segment[begin..]);
    }

    tokens
}

#[cfg(test)]
mod tests;
