//! Suffix table.
//!
//! Maps a top-level label to the second-level labels that form a recognized
//! two-label public suffix beneath it (`uk` -> `co`, `ac`, ...), or to a
//! wildcard meaning any second-level label is recognized (`bd` -> `*`).

mod data;

pub use data::BUILTIN_SUFFIX_LIST;

use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;
use std::sync::Arc;

use once_cell::sync::Lazy;

use crate::error::{Result, UrlError};

/// Wildcard token in a suffix record
pub const WILDCARD: &str = "*";

/// Built-in table, parsed once from the embedded dataset.
static BUILTIN_TABLE: Lazy<Arc<SuffixTable>> = Lazy::new(|| {
    let table = parse_suffix_list(BUILTIN_SUFFIX_LIST)
        .expect("BUILTIN_SUFFIX_LIST: embedded dataset is invalid");
    Arc::new(table)
});

/// Second-level labels recognized under one top-level label
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SuffixRule {
    /// Literal second-level labels
    pub labels: HashSet<String>,
    /// Any second-level label is recognized
    pub wildcard: bool,
}

impl SuffixRule {
    /// Create a rule from literal labels
    pub fn new<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            labels: labels.into_iter().map(Into::into).collect(),
            wildcard: false,
        }
    }

    /// Create a wildcard rule
    pub fn wildcard() -> Self {
        Self {
            labels: HashSet::new(),
            wildcard: true,
        }
    }

    /// Check if `label` forms a recognized suffix together with this rule's top-level label
    pub fn contains(&self, label: &str) -> bool {
        self.wildcard || self.labels.contains(label)
    }

    fn merge(&mut self, other: SuffixRule) {
        self.labels.extend(other.labels);
        self.wildcard |= other.wildcard;
    }
}

/// Immutable mapping from top-level label to [`SuffixRule`].
///
/// Lookups are exact, case-sensitive matches; callers pass lowercased labels.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SuffixTable {
    rules: HashMap<String, SuffixRule>,
}

impl SuffixTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// The table built from the embedded dataset
    pub fn builtin() -> &'static SuffixTable {
        &BUILTIN_TABLE
    }

    /// Shared handle to the built-in table
    pub fn builtin_shared() -> Arc<SuffixTable> {
        Arc::clone(&*BUILTIN_TABLE)
    }

    /// Insert a rule, merging with any existing rule for the same top-level label
    pub fn insert(&mut self, top_level: impl Into<String>, rule: SuffixRule) {
        self.rules.entry(top_level.into()).or_default().merge(rule);
    }

    /// Merge every rule of `other` into this table
    pub fn extend(&mut self, other: SuffixTable) {
        for (top_level, rule) in other.rules {
            self.insert(top_level, rule);
        }
    }

    /// Look up the rule for a top-level label
    pub fn lookup(&self, top_level: &str) -> Option<&SuffixRule> {
        self.rules.get(top_level)
    }

    /// Check if `second_last` followed by `last` is a recognized two-label suffix.
    ///
    /// Without a second-to-last label only a wildcard rule recognizes the suffix.
    pub fn recognizes(&self, last: &str, second_last: Option<&str>) -> bool {
        match self.lookup(last) {
            Some(rule) => rule.wildcard || second_last.is_some_and(|l| rule.labels.contains(l)),
            None => false,
        }
    }

    /// Number of top-level labels in the table
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// Parse a suffix list.
///
/// Records are separated by `|` or line breaks; `#` starts a comment that
/// runs to the end of the line. Each record is `top second second ...`,
/// where a second-level token of `*` marks a wildcard rule.
pub fn parse_suffix_list(text: &str) -> Result<SuffixTable> {
    let mut table = SuffixTable::new();
    let mut record_num = 0;

    for line in text.lines() {
        let line = match line.find('#') {
            Some(comment_pos) => &line[..comment_pos],
            None => line,
        };

        for record in line.split('|') {
            record_num += 1;

            let mut tokens = record.split_whitespace();
            let Some(top_level) = tokens.next() else {
                continue;
            };
            validate_label(top_level, record_num, "top-level")?;
            if top_level == WILDCARD {
                return Err(invalid_record(record_num, "top-level label cannot be a wildcard"));
            }

            let mut rule = SuffixRule::default();
            for token in tokens {
                if token == WILDCARD {
                    rule.wildcard = true;
                } else {
                    validate_label(token, record_num, "second-level")?;
                    rule.labels.insert(token.to_string());
                }
            }

            table.insert(top_level, rule);
        }
    }

    tracing::debug!(
        records = record_num,
        top_level_labels = table.len(),
        "parsed suffix list"
    );

    Ok(table)
}

/// Parse a suffix list from a file.
pub fn parse_suffix_list_from_file(path: impl AsRef<Path>) -> Result<SuffixTable> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;
    tracing::debug!(path = %path.display(), "loading suffix list");
    parse_suffix_list(&text)
}

fn validate_label(label: &str, record: usize, kind: &str) -> Result<()> {
    if label.contains('.') {
        return Err(invalid_record(
            record,
            &format!("{} label '{}' contains '.'", kind, label),
        ));
    }
    if label.bytes().any(|b| b.is_ascii_uppercase()) {
        return Err(invalid_record(
            record,
            &format!("{} label '{}' is not lowercase", kind, label),
        ));
    }
    Ok(())
}

fn invalid_record(record: usize, message: &str) -> UrlError {
    UrlError::InvalidSuffixRecord {
        record,
        message: message.to_string(),
    }
}
