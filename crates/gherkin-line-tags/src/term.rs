//! Normalises the individual terms of an OR-clause.
//!
//! A term names one tag, optionally negated and optionally carrying an
//! execution limit: `@fast`, `-@wip`, `~slow`, `@smoke:3`. Normalisation
//! strips the `@` sigil and folds the `~` spellings into the canonical `-`
//! negation so evaluation only ever deals with one form.

use std::collections::HashSet;
use std::fmt;

use crate::error::TagExprError;

/// One normalised term of an OR-clause.
///
/// # Examples
/// ```
/// use gherkin_line_tags::Term;
///
/// let term = Term::parse("~@wip:2", "~@wip:2").unwrap();
/// assert_eq!(term.name(), "wip");
/// assert!(term.is_negated());
/// assert_eq!(term.limit(), Some(2));
/// assert_eq!(term.to_string(), "-wip:2");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Term {
    name: String,
    negated: bool,
    limit: Option<u32>,
}

impl Term {
    /// Parse a raw term taken from `clause`.
    ///
    /// `clause` is only used to describe the failure when the term is empty.
    ///
    /// # Errors
    ///
    /// Returns [`TagExprError::EmptyTerm`] when no tag name remains after
    /// normalisation and [`TagExprError::InvalidLimit`] when the `:` suffix is
    /// not an integer.
    pub fn parse(raw: &str, clause: &str) -> Result<Self, TagExprError> {
        let (negated, body) = normalise(raw);
        let (name, limit) = match body.split_once(':') {
            Some((name, value)) => {
                let limit = value
                    .trim()
                    .parse::<u32>()
                    .map_err(|_| TagExprError::InvalidLimit {
                        term: raw.trim().to_string(),
                        value: value.to_string(),
                    })?;
                (name, Some(limit))
            }
            None => (body, None),
        };
        let name = name.trim();
        if name.is_empty() {
            return Err(TagExprError::EmptyTerm {
                clause: clause.trim().to_string(),
            });
        }
        Ok(Self {
            name: name.to_string(),
            negated,
            limit,
        })
    }

    /// Tag name without sigil, negation, or limit.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether the term selects statements that lack the tag.
    #[must_use]
    pub fn is_negated(&self) -> bool {
        self.negated
    }

    /// Execution limit attached with the `:N` suffix, if any.
    #[must_use]
    pub fn limit(&self) -> Option<u32> {
        self.limit
    }

    pub(crate) fn is_satisfied_by(&self, tags: &HashSet<&str>) -> bool {
        tags.contains(self.name.as_str()) != self.negated
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negated {
            f.write_str("-")?;
        }
        f.write_str(&self.name)?;
        if let Some(limit) = self.limit {
            write!(f, ":{limit}")?;
        }
        Ok(())
    }
}

/// Strip whitespace and the `@` sigil, folding `-@x`, `~@x`, `~x` and `-x`
/// into a negation flag.
fn normalise(raw: &str) -> (bool, &str) {
    let trimmed = raw.trim();
    if let Some(rest) = trimmed.strip_prefix('@') {
        return (false, rest);
    }
    ["-@", "~@", "-", "~"]
        .iter()
        .find_map(|prefix| trimmed.strip_prefix(*prefix))
        .map_or((false, trimmed), |rest| (true, rest))
}
