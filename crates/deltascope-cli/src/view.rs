//! Projects the engine's render tree onto plain text lines for the
//! terminal preview pane.

use deltascope_engine::{Inline, InlineStyle, ListKind, RenderNode};

pub fn render_lines(nodes: &[RenderNode]) -> Vec<String> {
    let mut lines = Vec::new();
    for node in nodes {
        push_node(node, &mut lines);
    }
    lines
}

fn push_node(node: &RenderNode, lines: &mut Vec<String>) {
    match node {
        RenderNode::Paragraph(content) => {
            lines.extend(inline_lines(content));
            lines.push(String::new());
        }
        RenderNode::Heading { level, content } => {
            let prefix = "#".repeat(*level as usize);
            for line in inline_lines(content) {
                lines.push(format!("{prefix} {line}"));
            }
            lines.push(String::new());
        }
        RenderNode::Blockquote(content) => {
            for line in inline_lines(content) {
                lines.push(format!("> {line}"));
            }
            lines.push(String::new());
        }
        RenderNode::CodeBlock(content) => {
            lines.push("```".to_string());
            lines.extend(inline_lines(content));
            lines.push("```".to_string());
            lines.push(String::new());
        }
        RenderNode::List { kind, items } => {
            for (i, item) in items.iter().enumerate() {
                let marker = match kind {
                    ListKind::Bullet => "•".to_string(),
                    ListKind::Ordered => format!("{}.", i + 1),
                };
                lines.push(format!("{marker} {}", inline_text(item)));
            }
            lines.push(String::new());
        }
        RenderNode::Image { src } => {
            lines.push(format!("[image: {src}]"));
            lines.push(String::new());
        }
        RenderNode::FormulaEmbed(content) => {
            lines.push(inline_text(content));
            lines.push(String::new());
        }
        RenderNode::Aligned { inner, .. } => {
            // Terminal cells carry no alignment; render the inner block.
            push_node(inner, lines);
        }
        RenderNode::NoContent => {
            lines.push("No content to display".to_string());
            lines.push("Open a Delta JSON file to see the preview".to_string());
        }
    }
}

fn inline_lines(content: &[Inline]) -> Vec<String> {
    let joined: String = content.iter().map(inline_text).collect();
    joined.split('\n').map(str::to_string).collect()
}

fn inline_text(node: &Inline) -> String {
    match node {
        Inline::Text(s) => s.clone(),
        Inline::Formula(markup) => markup.clone(),
        Inline::LineBreak => "\n".to_string(),
        Inline::Styled { style, inner } => {
            let inner = inline_text(inner);
            match style {
                InlineStyle::Bold => format!("**{inner}**"),
                InlineStyle::Italic => format!("_{inner}_"),
                InlineStyle::Underline => inner,
                InlineStyle::Strike => format!("~~{inner}~~"),
                InlineStyle::Code => format!("`{inner}`"),
                InlineStyle::Link(url) => format!("{inner} ({url})"),
            }
        }
    }
}
