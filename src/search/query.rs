//! Query strings: whitespace separated clauses, each optionally prefixed with
//! `+` (required) or `-` (prohibited), scoped with `field:` and ending in `*`
//! for a prefix match.

use crate::{constants::WILDCARD, error::Result, inverted_index::Field, tokenizer::Tokenizer};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presence {
    Optional,
    Required,
    Prohibited,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clause {
    /// Normalized term, or the lowercased prefix when `wildcard` is set.
    pub term: String,
    pub field: Option<Field>,
    pub presence: Presence,
    pub wildcard: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Query {
    pub clauses: Vec<Clause>,
}

impl Query {
    pub fn parse(input: &str, tokenizer: &Tokenizer) -> Result<Self> {
        let mut clauses = Vec::new();

        for raw in input.split_whitespace() {
            let (presence, raw) = if let Some(rest) = raw.strip_prefix('+') {
                (Presence::Required, rest)
            } else if let Some(rest) = raw.strip_prefix('-') {
                (Presence::Prohibited, rest)
            } else {
                (Presence::Optional, raw)
            };

            let (field, raw) = match raw.split_once(':') {
                Some((field, term)) if !field.is_empty() => (Some(field.parse::<Field>()?), term),
                _ => (None, raw),
            };

            let wildcard = raw.ends_with(WILDCARD);
            let words = tokenizer
                .words(raw.trim_end_matches(WILDCARD))
                .collect::<Vec<_>>();
            let last = words.len().saturating_sub(1);

            for (i, word) in words.into_iter().enumerate() {
                let wildcard = wildcard && i == last;
                let term = if wildcard {
                    word.to_lowercase()
                } else {
                    tokenizer.normalize(word)
                };

                clauses.push(Clause {
                    term,
                    field,
                    presence,
                    wildcard,
                });
            }
        }

        Ok(Self { clauses })
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }
}
