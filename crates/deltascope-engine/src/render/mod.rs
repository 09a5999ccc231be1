//! The Delta-to-render-tree compiler.
//!
//! A single left-to-right pass over a validated document's operations,
//! producing the ordered [`RenderNode`] sequence the presentation layer
//! consumes. The only pass state is the open [`Run`] accumulator; every
//! call is a full fresh recomputation with no caching.

mod attrs;
mod inline;
pub mod node;
mod run;

use serde_json::{Map, Value};

use crate::delta::{Delta, Insert};
use crate::formula::{FormulaProcessor, Typeset};

use attrs::{Attrs, BlockFormat};
pub use node::{Alignment, Inline, InlineStyle, ListKind, RenderNode};
use run::Run;

/// Compiles a document into its render-node sequence.
///
/// `None` stands for "no document loaded" and compiles to the single
/// [`RenderNode::NoContent`] sentinel; a document with an empty `ops` list
/// compiles to an empty sequence. Only `insert` operations are materialized;
/// `delete` and `retain` pass through without output (this is a viewer, not
/// an editor).
pub fn compile<T: Typeset>(
    delta: Option<&Delta>,
    formulas: &FormulaProcessor<T>,
) -> Vec<RenderNode> {
    let Some(delta) = delta else {
        return vec![RenderNode::NoContent];
    };

    let mut out = Vec::new();
    let mut run = Run::default();
    for op in &delta.ops {
        let Some(insert) = &op.insert else {
            continue;
        };
        let attrs = Attrs::from_value(op.attributes.as_ref());
        match insert {
            Insert::Text(text) => compile_text(text, &attrs, formulas, &mut run, &mut out),
            Insert::Embed(embed) => compile_embed(embed, &attrs, formulas, &mut run, &mut out),
        }
    }
    run.flush(&mut out);
    out
}

fn compile_text<T: Typeset>(
    text: &str,
    attrs: &Attrs,
    formulas: &FormulaProcessor<T>,
    run: &mut Run,
    out: &mut Vec<RenderNode>,
) {
    if let Some(kind) = attrs.list {
        // List items take one inline element each and skip block wrapping.
        let item = if attrs.formula {
            Inline::Formula(formulas.process_text(text))
        } else {
            inline::styled(attrs, text)
        };
        run.push_list_item(kind, item, out);
        return;
    }

    // A truthy `formula` attribute makes the whole run opaque markup; the
    // standard inline chain does not apply on top of it.
    let content = if attrs.formula {
        vec![Inline::Formula(formulas.process_text(text))]
    } else {
        inline::split_styled(attrs, text)
    };

    if attrs.block.is_none() && attrs.align.is_none() {
        run.extend_paragraph(content, out);
        return;
    }

    run.flush(out);
    out.push(wrap_block(attrs, content));
}

/// Applies the block wrapper (header > blockquote > code-block > paragraph)
/// and then the optional alignment container.
fn wrap_block(attrs: &Attrs, content: Vec<Inline>) -> RenderNode {
    let node = match attrs.block {
        Some(BlockFormat::Heading(level)) => RenderNode::Heading { level, content },
        Some(BlockFormat::Blockquote) => RenderNode::Blockquote(content),
        Some(BlockFormat::CodeBlock) => RenderNode::CodeBlock(content),
        None => RenderNode::Paragraph(content),
    };
    match attrs.align {
        Some(align) => RenderNode::Aligned {
            align,
            inner: Box::new(node),
        },
        None => node,
    }
}

fn compile_embed<T: Typeset>(
    embed: &Map<String, Value>,
    attrs: &Attrs,
    formulas: &FormulaProcessor<T>,
    run: &mut Run,
    out: &mut Vec<RenderNode>,
) {
    if let Some(src) = embed.get("image").and_then(Value::as_str) {
        run.flush(out);
        out.push(RenderNode::Image {
            src: src.to_string(),
        });
    } else if let Some(source) = embed.get("formula").and_then(Value::as_str) {
        run.flush(out);
        let markup = formulas.render_embed(source, attrs.size);
        let content = inline::wrap(attrs.embed_styles(), Inline::Formula(markup));
        out.push(RenderNode::FormulaEmbed(content));
    }
    // Embeds with no recognized key produce no output.
}
