use std::sync::Arc;

use dashmap::DashMap;
use thiserror::Error;

#[derive(Debug, Error)]
#[error("An error occurred while trying to create regex: {0}")]
pub struct InvalidRegexError(#[from] regex::Error);

/// Cache of compiled digit-grouping expressions, keyed by the group lengths
/// they were built from. Formatter instances are cheap and short-lived; the
/// compiled regexes they share are not, so a pattern like `[3, 2, 3, 2, 2]`
/// is compiled once per process no matter how many numbers pass through it.
pub struct RegexCache {
    cache: DashMap<Vec<usize>, Arc<regex::Regex>>,
}

impl RegexCache {
    pub fn new() -> Self {
        Self {
            cache: DashMap::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            cache: DashMap::with_capacity(capacity),
        }
    }

    /// Returns the compiled grouping expression for the given group lengths,
    /// building and caching it on first use.
    pub fn get_grouping(&self, groups: &[usize]) -> Result<Arc<regex::Regex>, InvalidRegexError> {
        if let Some(regex) = self.cache.get(groups) {
            Ok(regex.value().clone())
        } else {
            let entry = self.cache.entry(groups.to_vec()).or_try_insert_with(|| {
                regex::Regex::new(&grouping_expression(groups)).map(Arc::new)
            })?;
            Ok(entry.value().clone())
        }
    }
}

/// Builds the source of a grouping expression: one `(\d{n})` capture group
/// per entry, concatenated in order with no separators.
fn grouping_expression(groups: &[usize]) -> String {
    // "(\d{" and "})" around each length
    const GROUP_OVERHEAD: usize = 6;

    let mut expr = String::with_capacity(groups.len() * (GROUP_OVERHEAD + 2));
    let mut buf = itoa::Buffer::new();
    for &group_len in groups {
        expr.push_str("(\\d{");
        expr.push_str(buf.format(group_len));
        expr.push_str("})");
    }
    expr
}
