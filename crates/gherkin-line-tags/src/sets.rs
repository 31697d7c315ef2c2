//! Normalises and combines tag sets so selection stays deterministic
//! regardless of declaration order or raw tag formatting.

use std::collections::HashSet;

/// Extend the destination tag set with new values, preserving order and
/// removing duplicates.
///
/// Both `target` and `additions` may contain tags with a leading `@` or
/// repeated entries; the result holds bare tag names only.
pub fn extend_tag_set<I, S>(target: &mut Vec<String>, additions: I)
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    for tag in target.iter_mut() {
        if let Some(bare) = tag.strip_prefix('@') {
            *tag = bare.to_string();
        }
    }

    let mut seen = HashSet::new();
    target.retain(|tag| seen.insert(tag.clone()));

    for tag in additions {
        let trimmed = tag.as_ref().trim();
        let bare = trimmed.strip_prefix('@').unwrap_or(trimmed);
        if bare.is_empty() {
            continue;
        }
        if seen.insert(bare.to_string()) {
            target.push(bare.to_string());
        }
    }
}

/// Merge two tag sets, preserving insertion order and de-duplicating values.
///
/// # Examples
///
/// ```
/// use gherkin_line_tags::merge_tag_sets;
///
/// let feature = ["@fast", "slow"];
/// let scenario = ["fast", "@web"];
/// assert_eq!(merge_tag_sets(feature, scenario), vec!["fast", "slow", "web"]);
/// ```
#[must_use]
pub fn merge_tag_sets<B, A, S, T>(base: B, additions: A) -> Vec<String>
where
    B: IntoIterator<Item = S>,
    S: AsRef<str>,
    A: IntoIterator<Item = T>,
    T: AsRef<str>,
{
    let mut merged = Vec::new();
    extend_tag_set(&mut merged, base);
    extend_tag_set(&mut merged, additions);
    merged
}
