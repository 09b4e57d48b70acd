//! Special block removal

/// Tag of the block removed from the stripped variant
pub const ARCHITECTURE_TAG: &str = "architecture";

/// Text with its blocks removed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stripped {
    pub text: String,
    /// Number of `<tag>...</tag>` spans removed
    pub removed: usize,
    /// An opening tag without a later closing tag was left in place
    pub unmatched: bool,
}

/// Remove every `<tag>...</tag>` span, tags included.
///
/// Each span ends at the first closing tag after its opening tag. Once an
/// opening tag has no closing tag after it, the rest of the text is kept
/// verbatim.
pub fn strip_blocks(text: &str, tag: &str) -> Stripped {
    let open = format!("<{}>", tag);
    let close = format!("</{}>", tag);

    let mut out = String::with_capacity(text.len());
    let mut removed = 0;
    let mut unmatched = false;
    let mut pos = 0;

    while let Some(offset) = text[pos..].find(&open) {
        let start = pos + offset;
        let body = start + open.len();
        match text[body..].find(&close) {
            Some(len) => {
                out.push_str(&text[pos..start]);
                pos = body + len + close.len();
                removed += 1;
            }
            None => {
                unmatched = true;
                break;
            }
        }
    }
    out.push_str(&text[pos..]);

    Stripped {
        text: out,
        removed,
        unmatched,
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn text_without_open_tag_is_unchanged(text in ".*") {
            prop_assume!(!text.contains("<architecture>"));
            let out = strip_blocks(&text, ARCHITECTURE_TAG);
            prop_assert_eq!(out.removed, 0);
            prop_assert_eq!(out.text, text);
        }

        #[test]
        fn closed_blocks_are_removed(
            parts in prop::collection::vec(("[a-z \n]{0,8}", "[a-z \n<>]{0,8}"), 0..6),
            tail in "[a-z ]{0,8}",
        ) {
            prop_assume!(parts.iter().all(|(_, body)| !body.contains("</architecture>")));
            let mut text = String::new();
            let mut expected = String::new();
            for (keep, body) in &parts {
                text.push_str(keep);
                text.push_str("<architecture>");
                text.push_str(body);
                text.push_str("</architecture>");
                expected.push_str(keep);
            }
            text.push_str(&tail);
            expected.push_str(&tail);

            let out = strip_blocks(&text, ARCHITECTURE_TAG);
            prop_assert_eq!(out.text, expected);
            prop_assert_eq!(out.removed, parts.len());
            prop_assert!(!out.unmatched);
        }
    }
}
