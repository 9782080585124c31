//! Style block for the render boundary.

use crate::types::ConsolidatedOutput;

/// Wrap the selectors in a `<style>` block that hides them.
///
/// Returns `None` for an empty output: there is nothing to emit.
pub fn style_block(output: &ConsolidatedOutput) -> Option<String> {
    if output.is_empty() {
        return None;
    }

    Some(format!(
        "<!-- Clarity -->\n\
         <style type=\"text/css\">\n\
         {} {{\n  display: none !important;\n}}\n\
         </style>\n",
        output.as_str()
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_output_renders_nothing() {
        assert_eq!(style_block(&ConsolidatedOutput::default()), None);
    }

    #[test]
    fn test_style_block_hides_selectors() {
        let block = style_block(&ConsolidatedOutput::new("a.foo, b.bar")).unwrap();
        assert!(block.contains("<style type=\"text/css\">"));
        assert!(block.contains("a.foo, b.bar {\n  display: none !important;\n}"));
        assert!(block.trim_end().ends_with("</style>"));
    }
}
