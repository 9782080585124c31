//! Rule consolidation.

use crate::types::{ConsolidatedOutput, RuleSet};

/// Delimiter placed between selectors in the consolidated output.
pub const DEFAULT_DELIMITER: &str = ", ";

/// Join a rule set with the default `", "` delimiter.
pub fn consolidate(rules: &RuleSet) -> ConsolidatedOutput {
    consolidate_with(rules, DEFAULT_DELIMITER)
}

/// Join a rule set in order. An empty set yields an empty output.
pub fn consolidate_with(rules: &RuleSet, delimiter: &str) -> ConsolidatedOutput {
    let mut out = String::new();
    for (i, entry) in rules.iter().enumerate() {
        if i > 0 {
            out.push_str(delimiter);
        }
        out.push_str(entry.as_str());
    }
    ConsolidatedOutput::new(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::{filter_lines, DEFAULT_COMMENT_MARKER};

    #[test]
    fn test_consolidate_filtered_lines() {
        let lines = ["a.foo", "-- comment", "", "b.bar -- inline comment"];
        let output = consolidate(&filter_lines(lines, DEFAULT_COMMENT_MARKER));
        assert_eq!(output.as_str(), "a.foo, b.bar");
    }

    #[test]
    fn test_empty_set_gives_empty_output() {
        let output = consolidate(&RuleSet::new());
        assert!(output.is_empty());
        assert_eq!(output.as_str(), "");
    }

    #[test]
    fn test_single_entry_has_no_delimiter() {
        let output = consolidate(&RuleSet::from_selectors(["#nag"]));
        assert_eq!(output.as_str(), "#nag");
    }

    #[test]
    fn test_duplicates_are_kept() {
        let output = consolidate(&RuleSet::from_selectors(["a", "a"]));
        assert_eq!(output.as_str(), "a, a");
    }

    #[test]
    fn test_custom_delimiter() {
        let output = consolidate_with(&RuleSet::from_selectors(["a", "b"]), ",\n");
        assert_eq!(output.as_str(), "a,\nb");
    }
}
