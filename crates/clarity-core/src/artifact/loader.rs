//! Artifact loader.

use syn::LitStr;

use crate::types::ConsolidatedOutput;

use super::format::{COMMENT_PREFIX, GENERATED_MARKER};

/// Error type for artifact decoding.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ArtifactError {
    #[error("Artifact is not valid UTF-8")]
    InvalidUtf8,
    #[error("Missing '@generated' header")]
    MissingMarker,
    #[error("Expected a single string literal: {0}")]
    InvalidLiteral(String),
    #[error("Unexpected literal suffix '{0}'")]
    UnexpectedSuffix(String),
}

/// Decode raw artifact bytes. See [`decode_artifact`].
pub fn decode_artifact_bytes(bytes: &[u8]) -> Result<ConsolidatedOutput, ArtifactError> {
    let text = std::str::from_utf8(bytes).map_err(|_| ArtifactError::InvalidUtf8)?;
    decode_artifact(text)
}

/// Decode artifact text back into the consolidated output.
///
/// Leading `//` comment lines are skipped; at least one must carry the
/// generated marker. The rest must be exactly one string literal.
pub fn decode_artifact(text: &str) -> Result<ConsolidatedOutput, ArtifactError> {
    let mut rest = text.trim_start_matches('\u{feff}');
    let mut has_marker = false;

    loop {
        rest = rest.trim_start();
        if !rest.starts_with(COMMENT_PREFIX) {
            break;
        }
        let end = rest.find('\n').unwrap_or(rest.len());
        if rest[..end].contains(GENERATED_MARKER) {
            has_marker = true;
        }
        rest = &rest[end..];
    }

    if !has_marker {
        return Err(ArtifactError::MissingMarker);
    }

    parse_literal(rest).map(ConsolidatedOutput::new)
}

/// Parse `text` as exactly one unsuffixed Rust string literal and return its value.
pub fn parse_literal(text: &str) -> Result<String, ArtifactError> {
    let lit = syn::parse_str::<LitStr>(text)
        .map_err(|e| ArtifactError::InvalidLiteral(e.to_string()))?;
    if !lit.suffix().is_empty() {
        return Err(ArtifactError::UnexpectedSuffix(lit.suffix().to_string()));
    }
    Ok(lit.value())
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::artifact::format::{encode_artifact, header_line};

    fn with_header(body: &str) -> String {
        format!("{}\n{}\n", header_line(), body)
    }

    #[test]
    fn test_decode_encoded_artifact() {
        let output = ConsolidatedOutput::new(r#"a.foo, b[title="x\y"], .é"#);
        let decoded = decode_artifact(&encode_artifact(&output)).expect("artifact should decode");
        assert_eq!(decoded, output);
    }

    #[test]
    fn test_decode_empty_literal() {
        assert!(decode_artifact(&with_header("\"\"")).unwrap().is_empty());
    }

    #[test]
    fn test_decode_requires_marker() {
        assert_eq!(
            decode_artifact("// hand written\n\"a\"\n"),
            Err(ArtifactError::MissingMarker)
        );
        assert_eq!(decode_artifact("\"a\""), Err(ArtifactError::MissingMarker));
    }

    #[test]
    fn test_decode_rejects_truncated_literal() {
        let text = format!("{}\n\"a.foo, b.b", header_line());
        assert!(matches!(
            decode_artifact(&text),
            Err(ArtifactError::InvalidLiteral(_))
        ));
    }

    #[test]
    fn test_decode_rejects_trailing_content() {
        assert!(matches!(
            decode_artifact(&with_header("\"a\" \"b\"")),
            Err(ArtifactError::InvalidLiteral(_))
        ));
    }

    #[test]
    fn test_decode_rejects_non_literal() {
        assert!(matches!(
            decode_artifact(&with_header("concat!(\"a\")")),
            Err(ArtifactError::InvalidLiteral(_))
        ));
        assert!(matches!(
            decode_artifact(&with_header("")),
            Err(ArtifactError::InvalidLiteral(_))
        ));
    }

    #[test]
    fn test_decode_rejects_suffix() {
        assert_eq!(
            decode_artifact(&with_header("\"a\"px")),
            Err(ArtifactError::UnexpectedSuffix("px".to_string()))
        );
    }

    #[test]
    fn test_decode_follows_rust_literal_grammar() {
        assert!(parse_literal(r#""\x+1""#).is_err());
        assert!(parse_literal(r#""\q""#).is_err());
        assert!(parse_literal(r#""\x80""#).is_err());
        assert_eq!(parse_literal(r#""\u{1_F600}""#).unwrap(), "😀");
        assert_eq!(
            parse_literal(r#""a\n\t\x41\u{e9}\'\"\\""#).unwrap(),
            "a\n\tAé'\"\\"
        );
    }

    #[test]
    fn test_decode_accepts_raw_string() {
        let decoded = decode_artifact(&with_header(r##"r#"a[title="x"]"#"##)).unwrap();
        assert_eq!(decoded.as_str(), r#"a[title="x"]"#);
        assert_eq!(
            decode_artifact(&with_header(r#"r"a.foo""#)).unwrap().as_str(),
            "a.foo"
        );
    }

    #[test]
    fn test_decode_literal_continuation() {
        assert_eq!(parse_literal("\"a, \\\n    b\"").unwrap(), "a, b");
    }

    #[test]
    fn test_decode_rejects_invalid_utf8() {
        assert_eq!(
            decode_artifact_bytes(&[0x2f, 0x2f, 0xff, 0xfe]),
            Err(ArtifactError::InvalidUtf8)
        );
    }

    proptest! {
        #[test]
        fn prop_encode_decode_preserves_output(text in any::<String>()) {
            let output = ConsolidatedOutput::new(text);
            let decoded = decode_artifact(&encode_artifact(&output));
            prop_assert_eq!(decoded, Ok(output));
        }
    }
}
