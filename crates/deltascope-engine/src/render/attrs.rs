use serde_json::Value;

use super::node::{Alignment, InlineStyle, ListKind};

/// Typed view of an operation's raw attribute map.
///
/// Decoding is lenient at this boundary so the compiler can assume
/// well-typed attributes afterwards: values that don't match the recognized
/// type for their key are treated as absent. A `header` outside 1..=3 is
/// absent; an `align` with an unrecognized value falls back to left.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Attrs {
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    pub strike: bool,
    pub code: bool,
    pub link: Option<String>,
    pub formula: bool,
    pub block: Option<BlockFormat>,
    pub list: Option<ListKind>,
    pub align: Option<Alignment>,
    pub size: Option<f64>,
}

/// Mutually exclusive block wrappers, already reduced by the precedence
/// rule header > blockquote > code-block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockFormat {
    Heading(u8),
    Blockquote,
    CodeBlock,
}

impl Attrs {
    pub fn from_value(value: Option<&Value>) -> Self {
        let Some(map) = value.and_then(Value::as_object) else {
            return Self::default();
        };

        let flag = |key: &str| map.get(key).and_then(Value::as_bool).unwrap_or(false);

        let header = map
            .get("header")
            .and_then(Value::as_u64)
            .filter(|level| (1..=3).contains(level))
            .map(|level| BlockFormat::Heading(level as u8));
        let block = header
            .or_else(|| flag("blockquote").then_some(BlockFormat::Blockquote))
            .or_else(|| flag("code-block").then_some(BlockFormat::CodeBlock));

        let list = map.get("list").and_then(Value::as_str).and_then(|s| match s {
            "bullet" => Some(ListKind::Bullet),
            "ordered" => Some(ListKind::Ordered),
            _ => None,
        });

        let align = map.get("align").and_then(Value::as_str).map(|s| match s {
            "center" => Alignment::Center,
            "right" => Alignment::Right,
            "justify" => Alignment::Justify,
            _ => Alignment::Left,
        });

        Self {
            bold: flag("bold"),
            italic: flag("italic"),
            underline: flag("underline"),
            strike: flag("strike"),
            code: flag("code"),
            link: map
                .get("link")
                .and_then(Value::as_str)
                .map(str::to_string),
            formula: flag("formula"),
            block,
            list,
            align,
            size: map.get("size").and_then(Value::as_f64),
        }
    }

    /// Active inline styles in wrapping order (first applied = innermost).
    pub fn inline_styles(&self) -> Vec<InlineStyle> {
        let mut styles = self.embed_styles();
        if self.code {
            styles.push(InlineStyle::Code);
        }
        if let Some(url) = &self.link {
            styles.push(InlineStyle::Link(url.clone()));
        }
        styles
    }

    /// The subset of inline styles that apply to formula embeds
    /// (code and link do not).
    pub fn embed_styles(&self) -> Vec<InlineStyle> {
        let mut styles = Vec::new();
        if self.bold {
            styles.push(InlineStyle::Bold);
        }
        if self.italic {
            styles.push(InlineStyle::Italic);
        }
        if self.underline {
            styles.push(InlineStyle::Underline);
        }
        if self.strike {
            styles.push(InlineStyle::Strike);
        }
        styles
    }
}
