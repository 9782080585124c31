//! Comment and blank line stripping for the editable rule list.
//!
//! A comment starts at the first occurrence of the marker and runs to the end
//! of the line. The marker cannot be escaped: a selector that happens to
//! contain `--` is cut at that point.

use crate::types::{RuleEntry, RuleSet};

/// Comment marker used by `definitions.txt`.
pub const DEFAULT_COMMENT_MARKER: &str = "--";

/// Filter raw lines into a rule set, keeping surviving lines in order.
pub fn filter_lines<I, S>(lines: I, marker: &str) -> RuleSet
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    lines
        .into_iter()
        .filter_map(|line| RuleEntry::new(clean_line(line.as_ref(), marker)))
        .collect()
}

/// Filter a whole source document. Accepts both `\n` and `\r\n` line endings.
pub fn filter_text(text: &str, marker: &str) -> RuleSet {
    filter_lines(text.lines(), marker)
}

/// Strip the comment from a line and trim what is left.
pub fn clean_line<'a>(line: &'a str, marker: &str) -> &'a str {
    strip_comment(line, marker).trim()
}

fn strip_comment<'a>(line: &'a str, marker: &str) -> &'a str {
    match line.find(marker) {
        Some(pos) => &line[..pos],
        None => line,
    }
}
