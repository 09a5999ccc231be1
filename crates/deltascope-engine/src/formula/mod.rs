//! Detection and substitution of math formulas in text runs.
//!
//! Supports inline math (`$...$`, no internal newline) and block math
//! (`$$...$$`, may span lines). Block spans are resolved first so the inline
//! matcher never fires inside them, and substituted markup is never
//! re-scanned. Each formula renders independently: one malformed span
//! degrades to an inline error fragment without touching its neighbours.

pub mod typeset;

use std::sync::LazyLock;

use regex::Regex;

pub use typeset::{SimpleTypesetter, Typeset, TypesetError};

static BLOCK_MATH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)\$\$(.*?)\$\$").unwrap());
static INLINE_MATH: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\$([^$\n]+?)\$").unwrap());

/// True if the text contains an inline or block math span.
pub fn contains_formulas(text: &str) -> bool {
    INLINE_MATH.is_match(text) || BLOCK_MATH.is_match(text)
}

/// How a formula was delimited in the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormulaKind {
    Inline,
    Block,
}

/// A formula found in a text run, not yet rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Formula {
    pub kind: FormulaKind,
    /// Trimmed LaTeX source without the `$` delimiters.
    pub source: String,
}

/// Lists the formulas in a text run without rendering them.
///
/// Block spans are reported first, then inline spans; inline delimiters
/// inside a block body are not reported separately.
pub fn extract_formulas(text: &str) -> Vec<Formula> {
    let mut found = Vec::new();
    let mut scan = |kind, segment: &str| {
        let re = match kind {
            FormulaKind::Block => &BLOCK_MATH,
            FormulaKind::Inline => &INLINE_MATH,
        };
        for caps in re.captures_iter(segment) {
            found.push(Formula {
                kind,
                source: caps[1].trim().to_string(),
            });
        }
    };

    scan(FormulaKind::Block, text);
    let mut last = 0;
    for m in BLOCK_MATH.find_iter(text) {
        scan(FormulaKind::Inline, &text[last..m.start()]);
        last = m.end();
    }
    scan(FormulaKind::Inline, &text[last..]);
    found
}

/// Renders the formulas embedded in text runs via a [`Typeset`] backend.
#[derive(Debug, Clone, Default)]
pub struct FormulaProcessor<T: Typeset> {
    typesetter: T,
}

impl<T: Typeset> FormulaProcessor<T> {
    pub fn new(typesetter: T) -> Self {
        Self { typesetter }
    }

    /// Substitutes every math span in `text` with rendered markup.
    ///
    /// Text outside formula delimiters passes through verbatim. A failed
    /// render is replaced in-place by [`error_fragment`]; processing of the
    /// remaining spans continues.
    pub fn process_text(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        let mut last = 0;
        for caps in BLOCK_MATH.captures_iter(text) {
            let whole = caps.get(0).unwrap();
            self.process_inline_into(&mut out, &text[last..whole.start()]);
            out.push_str(&self.render(&caps[1], true));
            last = whole.end();
        }
        self.process_inline_into(&mut out, &text[last..]);
        out
    }

    /// Renders one formula for an embed operation (inline mode).
    ///
    /// If a font size is given the markup is wrapped in a size-scoped span.
    pub fn render_embed(&self, formula: &str, font_size: Option<f64>) -> String {
        let markup = self.render(formula, false);
        match font_size {
            Some(px) => format!("<span style=\"font-size: {px}px\">{markup}</span>"),
            None => markup,
        }
    }

    fn process_inline_into(&self, out: &mut String, segment: &str) {
        let mut last = 0;
        for caps in INLINE_MATH.captures_iter(segment) {
            let whole = caps.get(0).unwrap();
            out.push_str(&segment[last..whole.start()]);
            out.push_str(&self.render(&caps[1], false));
            last = whole.end();
        }
        out.push_str(&segment[last..]);
    }

    fn render(&self, source: &str, display_mode: bool) -> String {
        self.typesetter
            .typeset(source.trim(), display_mode)
            .unwrap_or_else(|e| error_fragment(&e.to_string()))
    }
}

/// A visibly marked inline fragment carrying a formula render failure.
pub fn error_fragment(detail: &str) -> String {
    format!(
        "<span style=\"color: #f00; font-family: monospace;\">Error: {}</span>",
        html_escape::encode_text(detail)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn processor() -> FormulaProcessor<SimpleTypesetter> {
        FormulaProcessor::default()
    }

    #[rstest]
    #[case("no math here", false)]
    #[case("$x^2$", true)]
    #[case("$$x^2$$", true)]
    #[case("price is $5 and $7", true)] // indistinguishable from inline math
    #[case("lonely $ sign", false)]
    #[case("$spans\nlines$", false)]
    #[case("$$spans\nlines$$", true)]
    fn detects_formula_presence(#[case] text: &str, #[case] expected: bool) {
        assert_eq!(contains_formulas(text), expected);
    }

    #[test]
    fn substitutes_inline_math_in_place() {
        let out = processor().process_text("before $x^2$ after");
        assert!(out.starts_with("before "));
        assert!(out.ends_with(" after"));
        assert!(out.contains("math-inline"));
        assert!(!out.contains('$'));
    }

    #[test]
    fn block_math_renders_in_display_mode() {
        let out = processor().process_text("$$\\sum_{i=0}^n i\n= \\frac{n(n+1)}{2}$$");
        assert!(out.contains("math-display"));
    }

    #[test]
    fn block_spans_win_over_inline_matching() {
        // `$$a$$` must not be parsed as inline `$a$` with stray dollars.
        let out = processor().process_text("$$a$$ and $b$");
        assert!(out.contains("math-display"));
        assert!(out.contains("math-inline"));
        assert!(!out.contains('$'));
    }

    #[test]
    fn malformed_formula_degrades_to_error_fragment() {
        let out = processor().process_text("ok $\\frac{1}{2$ still ok");
        assert!(out.starts_with("ok "));
        assert!(out.ends_with(" still ok"));
        assert!(out.contains("Error: unbalanced braces"));
        assert!(out.contains("font-family: monospace"));
    }

    #[test]
    fn one_bad_formula_does_not_abort_the_rest() {
        let out = processor().process_text("$ok$ then ${bad$ then $fine$");
        assert_eq!(out.matches("math-inline").count(), 2);
        assert_eq!(out.matches("Error:").count(), 1);
    }

    #[test]
    fn plain_text_passes_through_unchanged() {
        assert_eq!(processor().process_text("just words"), "just words");
        assert_eq!(processor().process_text(""), "");
    }

    #[test]
    fn render_embed_wraps_with_font_size() {
        let plain = processor().render_embed("x^2", None);
        assert!(!plain.contains("font-size"));

        let sized = processor().render_embed("x^2", Some(24.0));
        assert!(sized.starts_with("<span style=\"font-size: 24px\">"));
        assert!(sized.contains("math-inline"));
    }

    #[test]
    fn extracts_formulas_without_rendering() {
        let found = extract_formulas("a $x$ b $$y\nz$$ c $w$");
        assert_eq!(
            found,
            vec![
                Formula {
                    kind: FormulaKind::Block,
                    source: "y\nz".to_string(),
                },
                Formula {
                    kind: FormulaKind::Inline,
                    source: "x".to_string(),
                },
                Formula {
                    kind: FormulaKind::Inline,
                    source: "w".to_string(),
                },
            ]
        );
    }

    #[test]
    fn extract_ignores_inline_spans_inside_blocks() {
        let found = extract_formulas("$$a $b$ c$$");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].kind, FormulaKind::Block);
    }
}
