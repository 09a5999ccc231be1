/// One unit of the compiler's output tree.
///
/// The sequence of render nodes is the engine's whole contract with the
/// presentation layer: frontends walk this tree and emit HTML, terminal
/// cells, or anything else. Nodes carry no byte offsets back into the input;
/// a Delta is compiled fresh on every call.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderNode {
    /// Default flow content: consecutive unformatted-block text runs.
    Paragraph(Vec<Inline>),
    /// A heading, level 1 through 3.
    Heading { level: u8, content: Vec<Inline> },
    Blockquote(Vec<Inline>),
    CodeBlock(Vec<Inline>),
    /// Consecutive same-kind list operations grouped into one node.
    List { kind: ListKind, items: Vec<Inline> },
    /// An embedded image. No inline formatting applies.
    Image { src: String },
    /// An embedded formula: opaque markup, optionally styled.
    FormulaEmbed(Inline),
    /// An alignment container around a single block node.
    Aligned { align: Alignment, inner: Box<RenderNode> },
    /// Sentinel emitted when there is no document at all, as opposed to a
    /// document with an empty operation list (which compiles to `[]`).
    NoContent,
}

/// A leaf or styled wrapper inside a block node's content.
#[derive(Debug, Clone, PartialEq)]
pub enum Inline {
    Text(String),
    /// Rendered formula markup, opaque to further inline styling.
    Formula(String),
    /// Marker between the segments of a text run that contained `\n`.
    LineBreak,
    Styled { style: InlineStyle, inner: Box<Inline> },
}

/// A stackable inline format. Wrapping order is fixed:
/// bold, italic, underline, strike, code, link (link outermost).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InlineStyle {
    Bold,
    Italic,
    Underline,
    Strike,
    Code,
    Link(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    Bullet,
    Ordered,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
    Justify,
}

impl Inline {
    /// The plain text under any styling, for display surfaces that cannot
    /// express the formatting (and for tests).
    pub fn plain_text(&self) -> String {
        match self {
            Inline::Text(s) | Inline::Formula(s) => s.clone(),
            Inline::LineBreak => "\n".to_string(),
            Inline::Styled { inner, .. } => inner.plain_text(),
        }
    }
}
