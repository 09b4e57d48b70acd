//! Placeholder scanning and expansion

use std::path::PathBuf;

use eyre::Result;
use tracing::debug;

use crate::template::{Resolution, TemplateSource};
use crate::{PLACEHOLDER_CLOSE, PLACEHOLDER_OPEN};

/// A `{{{{reference}}}}` occurrence; `start..end` is its byte span
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholder {
    pub start: usize,
    pub end: usize,
    pub reference: String,
}

/// A placeholder that was left in place because its template is missing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unresolved {
    pub reference: String,
    pub path: PathBuf,
}

/// Result of expanding one document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Expansion {
    pub text: String,
    /// Number of placeholders replaced
    pub resolved: usize,
    pub unresolved: Vec<Unresolved>,
}

/// Find all placeholders, leftmost first, without overlap.
///
/// The reference runs up to the first `}` and must be non-empty; the
/// candidate only counts when the closing marker starts exactly there.
pub fn scan_placeholders(text: &str) -> Vec<Placeholder> {
    let mut found = Vec::new();
    let mut pos = 0;

    while let Some(offset) = text[pos..].find(PLACEHOLDER_OPEN) {
        let start = pos + offset;
        match placeholder_at(text, start) {
            Some(placeholder) => {
                pos = placeholder.end;
                found.push(placeholder);
            }
            // `{` is one byte, so the next char boundary is start + 1
            None => pos = start + 1,
        }
    }

    found
}

fn placeholder_at(text: &str, start: usize) -> Option<Placeholder> {
    let reference_start = start + PLACEHOLDER_OPEN.len();
    let rest = &text[reference_start..];
    let len = rest.find('}')?;
    if len == 0 || !rest[len..].starts_with(PLACEHOLDER_CLOSE) {
        return None;
    }

    Some(Placeholder {
        start,
        end: reference_start + len + PLACEHOLDER_CLOSE.len(),
        reference: rest[..len].to_string(),
    })
}

/// Replace every placeholder with its template contents.
///
/// Inserted contents are not scanned again. Placeholders whose template is
/// missing stay in the output exactly as written.
pub fn expand(text: &str, source: &impl TemplateSource) -> Result<Expansion> {
    let placeholders = scan_placeholders(text);
    debug!(count = placeholders.len(), "expand: scanned placeholders");

    let mut expansion = Expansion {
        text: String::with_capacity(text.len()),
        ..Default::default()
    };
    let mut cursor = 0;

    for placeholder in placeholders {
        expansion.text.push_str(&text[cursor..placeholder.start]);
        match source.resolve(&placeholder.reference)? {
            Resolution::Found(content) => {
                expansion.text.push_str(&content);
                expansion.resolved += 1;
            }
            Resolution::Missing(path) => {
                expansion.text.push_str(&text[placeholder.start..placeholder.end]);
                expansion.unresolved.push(Unresolved {
                    reference: placeholder.reference,
                    path,
                });
            }
        }
        cursor = placeholder.end;
    }
    expansion.text.push_str(&text[cursor..]);

    Ok(expansion)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::template::MapTemplateSource;
    use proptest::prelude::*;

    fn sample_source() -> MapTemplateSource {
        MapTemplateSource::new()
            .with("a.md", "alpha text\n")
            .with("template/b.md", "# beta\n")
            .with("c", "")
    }

    fn arb_document() -> impl Strategy<Value = String> {
        let piece = prop_oneof![
            "[a-z <>/\n]{0,12}",
            Just("{{{{a.md}}}}".to_string()),
            Just("{{{{template/b.md}}}}".to_string()),
            Just("{{{{c}}}}".to_string()),
            Just("{{{{missing}}}}".to_string()),
        ];
        prop::collection::vec(piece, 0..8).prop_map(|pieces| pieces.concat())
    }

    proptest! {
        #[test]
        fn text_without_open_marker_is_unchanged(text in ".*") {
            prop_assume!(!text.contains(PLACEHOLDER_OPEN));
            let out = expand(&text, &sample_source()).unwrap();
            prop_assert_eq!(out.text, text);
        }

        /// With nothing resolvable, expansion never alters the input.
        #[test]
        fn unresolvable_text_is_unchanged(text in "[a-z{}\n]{0,40}") {
            let out = expand(&text, &MapTemplateSource::new()).unwrap();
            prop_assert_eq!(out.text, text);
        }

        #[test]
        fn expansion_is_idempotent(doc in arb_document()) {
            let source = sample_source();
            let once = expand(&doc, &source).unwrap();
            let twice = expand(&once.text, &source).unwrap();
            prop_assert_eq!(twice.text, once.text);
        }

        #[test]
        fn scanned_spans_are_ordered_and_disjoint(text in "[a{}]{0,40}") {
            let found = scan_placeholders(&text);
            for pair in found.windows(2) {
                prop_assert!(pair[0].end <= pair[1].start);
            }
            for p in &found {
                prop_assert!(!p.reference.contains('}'), "reference runs past a closing brace");
                prop_assert_eq!(&text[p.start..p.end], format!("{{{{{{{{{}}}}}}}}}", p.reference));
            }
        }
    }
}
