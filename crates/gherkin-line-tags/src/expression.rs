//! Compiled tag expressions in conjunctive normal form.
//!
//! Every input string is one OR-clause; the clauses are combined with AND:
//!
//! ```text
//! (or_clause1) and (or_clause2) and ...
//! or_clauseN := [not] tag1 or [not] tag2 or ...
//! ```
//!
//! Limits (`@smoke:3`) are collected into a single table while compiling so
//! the selection layer can look them up per tag. Evaluation builds a set from
//! the supplied tags once and short-circuits within each clause.

use std::collections::{BTreeMap, HashSet};
use std::fmt;
use std::str::FromStr;

use crate::error::TagExprError;
use crate::term::Term;

/// A compiled AND-of-ORs tag expression.
///
/// # Examples
/// ```
/// use gherkin_line_tags::TagExpression;
///
/// let expr = TagExpression::compile(["@fast,@smoke", "~@wip"]).unwrap();
/// assert!(expr.matches(["fast"]));
/// assert!(!expr.matches(["smoke", "wip"]));
/// assert_eq!(expr.to_string(), "fast,smoke -wip");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TagExpression {
    clauses: Vec<Vec<Term>>,
    limits: BTreeMap<String, u32>,
}

impl TagExpression {
    /// Compile a list of OR-clauses into an expression.
    ///
    /// Blank clauses are ignored, so compiling an empty list (or a list of
    /// blank strings) yields an expression that matches everything.
    ///
    /// # Errors
    ///
    /// Returns [`TagExprError::ConflictingLimit`] when one tag receives two
    /// different limits across the clauses, and propagates term errors
    /// ([`TagExprError::EmptyTerm`], [`TagExprError::InvalidLimit`]).
    pub fn compile<I, S>(clauses: I) -> Result<Self, TagExprError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut expression = Self::default();
        for clause in clauses {
            expression.push_clause(clause.as_ref())?;
        }
        log::debug!("compiled tag expression `{expression}`");
        Ok(expression)
    }

    fn push_clause(&mut self, clause: &str) -> Result<(), TagExprError> {
        let trimmed = clause.trim();
        if trimmed.is_empty() {
            return Ok(());
        }
        let terms = trimmed
            .split(',')
            .map(|raw| Term::parse(raw, trimmed))
            .collect::<Result<Vec<_>, _>>()?;
        for term in &terms {
            if let Some(limit) = term.limit() {
                self.record_limit(term.name(), limit)?;
            }
        }
        self.clauses.push(terms);
        Ok(())
    }

    fn record_limit(&mut self, tag: &str, limit: u32) -> Result<(), TagExprError> {
        match self.limits.get(tag) {
            Some(&existing) if existing != limit => Err(TagExprError::ConflictingLimit {
                tag: tag.to_string(),
                existing,
                requested: limit,
            }),
            Some(_) => Ok(()),
            None => {
                self.limits.insert(tag.to_string(), limit);
                Ok(())
            }
        }
    }

    /// Evaluate the expression against the tags of a model element.
    ///
    /// Tags are names without the `@` sigil. The order of `tags` is
    /// irrelevant and duplicates are harmless.
    pub fn matches<'a, I>(&self, tags: I) -> bool
    where
        I: IntoIterator<Item = &'a str>,
    {
        if self.clauses.is_empty() {
            return true;
        }
        let set: HashSet<&'a str> = tags.into_iter().collect();
        self.clauses
            .iter()
            .all(|clause| clause.iter().any(|term| term.is_satisfied_by(&set)))
    }

    /// Number of AND-clauses.
    #[must_use]
    pub fn len(&self) -> usize {
        self.clauses.len()
    }

    /// Whether the expression has no clauses and therefore matches anything.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    /// Iterate over the OR-clauses in compilation order.
    pub fn clauses(&self) -> impl Iterator<Item = &[Term]> + '_ {
        self.clauses.iter().map(Vec::as_slice)
    }

    /// Execution limit recorded for `tag`, if any.
    #[must_use]
    pub fn limit(&self, tag: &str) -> Option<u32> {
        self.limits.get(tag.strip_prefix('@').unwrap_or(tag)).copied()
    }

    /// All recorded limits keyed by tag name.
    #[must_use]
    pub fn limits(&self) -> &BTreeMap<String, u32> {
        &self.limits
    }
}

impl fmt::Display for TagExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, clause) in self.clauses.iter().enumerate() {
            if index > 0 {
                f.write_str(" ")?;
            }
            for (position, term) in clause.iter().enumerate() {
                if position > 0 {
                    f.write_str(",")?;
                }
                write!(f, "{term}")?;
            }
        }
        Ok(())
    }
}

/// Parses the rendered form: whitespace separates clauses, except next to a
/// comma, so `@a, @b ~@c` reads as the two clauses `@a,@b` and `~@c`.
impl FromStr for TagExpression {
    type Err = TagExprError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::compile(split_clauses(s))
    }
}

fn split_clauses(text: &str) -> Vec<String> {
    let mut clauses: Vec<String> = Vec::new();
    for word in text.split_whitespace() {
        match clauses.last_mut() {
            Some(clause) if clause.ends_with(',') || word.starts_with(',') => {
                clause.push_str(word);
            }
            _ => clauses.push(word.to_string()),
        }
    }
    clauses
}
