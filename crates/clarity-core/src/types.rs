//! Shared type definitions for the rule pipeline.

use std::fmt;

/// One hide rule: a selector or selector fragment.
///
/// Never empty and never whitespace-only. The content is otherwise opaque.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RuleEntry(String);

impl RuleEntry {
    /// Wrap a selector, rejecting empty or whitespace-only text.
    pub fn new(selector: impl Into<String>) -> Option<Self> {
        let selector = selector.into();
        if selector.trim().is_empty() {
            return None;
        }
        Some(Self(selector))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for RuleEntry {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RuleEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Ordered rule entries. Duplicates are allowed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleSet {
    entries: Vec<RuleEntry>,
}

impl RuleSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a rule set from raw selectors, dropping any that are not valid entries.
    pub fn from_selectors<I, S>(selectors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        selectors.into_iter().filter_map(RuleEntry::new).collect()
    }

    pub fn push(&mut self, entry: RuleEntry) {
        self.entries.push(entry);
    }

    /// Append a raw selector. Returns false if it was not a valid entry.
    pub fn push_selector(&mut self, selector: impl Into<String>) -> bool {
        match RuleEntry::new(selector) {
            Some(entry) => {
                self.entries.push(entry);
                true
            }
            None => false,
        }
    }

    /// Remove every entry equal to `selector`, returning how many were removed.
    pub fn remove(&mut self, selector: &str) -> usize {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.as_str() != selector);
        before - self.entries.len()
    }

    pub fn retain<F>(&mut self, f: F)
    where
        F: FnMut(&RuleEntry) -> bool,
    {
        self.entries.retain(f);
    }

    pub fn contains(&self, selector: &str) -> bool {
        self.entries.iter().any(|entry| entry.as_str() == selector)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RuleEntry> {
        self.entries.iter()
    }

    pub fn as_slice(&self) -> &[RuleEntry] {
        &self.entries
    }

    pub fn into_vec(self) -> Vec<RuleEntry> {
        self.entries
    }
}

impl From<Vec<RuleEntry>> for RuleSet {
    fn from(entries: Vec<RuleEntry>) -> Self {
        Self { entries }
    }
}

impl FromIterator<RuleEntry> for RuleSet {
    fn from_iter<I: IntoIterator<Item = RuleEntry>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl Extend<RuleEntry> for RuleSet {
    fn extend<I: IntoIterator<Item = RuleEntry>>(&mut self, iter: I) {
        self.entries.extend(iter);
    }
}

impl IntoIterator for RuleSet {
    type Item = RuleEntry;
    type IntoIter = std::vec::IntoIter<RuleEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a RuleSet {
    type Item = &'a RuleEntry;
    type IntoIter = std::slice::Iter<'a, RuleEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// The single selector string handed to the render boundary.
///
/// An empty output means there are no rules to apply.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ConsolidatedOutput(String);

impl ConsolidatedOutput {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for ConsolidatedOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
