use super::attrs::Attrs;
use super::node::{Inline, InlineStyle};

/// Folds an ordered style list over a leaf, innermost first.
pub(super) fn wrap(styles: Vec<InlineStyle>, mut node: Inline) -> Inline {
    for style in styles {
        node = Inline::Styled {
            style,
            inner: Box::new(node),
        };
    }
    node
}

/// Builds one inline element from a text run with the full style chain.
pub(super) fn styled(attrs: &Attrs, text: &str) -> Inline {
    wrap(attrs.inline_styles(), Inline::Text(text.to_string()))
}

/// Splits a text run on line breaks, styling each segment independently.
///
/// Line-break markers sit between segment positions; empty segments are
/// dropped, so `"!\n"` yields `[styled("!"), LineBreak]`.
pub(super) fn split_styled(attrs: &Attrs, text: &str) -> Vec<Inline> {
    if !text.contains('\n') {
        return vec![styled(attrs, text)];
    }

    let segments: Vec<&str> = text.split('\n').collect();
    let mut out = Vec::new();
    for (i, segment) in segments.iter().enumerate() {
        if !segment.is_empty() {
            out.push(styled(attrs, segment));
        }
        if i + 1 < segments.len() {
            out.push(Inline::LineBreak);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn attrs(value: serde_json::Value) -> Attrs {
        Attrs::from_value(Some(&value))
    }

    #[test]
    fn unstyled_text_stays_a_leaf() {
        assert_eq!(
            styled(&Attrs::default(), "plain"),
            Inline::Text("plain".to_string())
        );
    }

    #[test]
    fn link_wraps_outermost() {
        let node = styled(&attrs(json!({"bold": true, "link": "http://x"})), "hi");
        match node {
            Inline::Styled {
                style: InlineStyle::Link(url),
                inner,
            } => {
                assert_eq!(url, "http://x");
                assert!(matches!(
                    *inner,
                    Inline::Styled {
                        style: InlineStyle::Bold,
                        ..
                    }
                ));
            }
            other => panic!("expected link wrapper, got {other:?}"),
        }
    }

    #[test]
    fn split_interleaves_line_breaks() {
        assert_eq!(
            split_styled(&Attrs::default(), "line1\nline2"),
            vec![
                Inline::Text("line1".to_string()),
                Inline::LineBreak,
                Inline::Text("line2".to_string()),
            ]
        );
    }

    #[test]
    fn split_drops_empty_segments() {
        assert_eq!(
            split_styled(&Attrs::default(), "!\n"),
            vec![Inline::Text("!".to_string()), Inline::LineBreak]
        );
        assert_eq!(
            split_styled(&Attrs::default(), "\n\n"),
            vec![Inline::LineBreak, Inline::LineBreak]
        );
    }

    #[test]
    fn split_styles_each_segment_independently() {
        let nodes = split_styled(&attrs(json!({"italic": true})), "a\nb");
        assert_eq!(nodes.len(), 3);
        for node in [&nodes[0], &nodes[2]] {
            assert!(matches!(
                node,
                Inline::Styled {
                    style: InlineStyle::Italic,
                    ..
                }
            ));
        }
    }
}
