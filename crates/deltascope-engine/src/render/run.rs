use super::node::{Inline, ListKind, RenderNode};

/// The compiler's single piece of pass state: the currently open
/// accumulation of consecutive related operations.
///
/// Consecutive same-kind list operations collapse into one list node, and
/// consecutive default-paragraph text runs collapse into one paragraph.
/// Anything else closes the open run before emitting its own node.
#[derive(Debug, Default, PartialEq)]
pub(super) enum Run {
    #[default]
    Idle,
    Paragraph(Vec<Inline>),
    List { kind: ListKind, items: Vec<Inline> },
}

impl Run {
    /// Emits the open run as a completed node and resets to idle.
    pub(super) fn flush(&mut self, out: &mut Vec<RenderNode>) {
        match std::mem::take(self) {
            Run::Idle => {}
            Run::Paragraph(content) => out.push(RenderNode::Paragraph(content)),
            Run::List { kind, items } => out.push(RenderNode::List { kind, items }),
        }
    }

    /// Appends one list item, flushing first if the list kind changed or a
    /// different run was open.
    pub(super) fn push_list_item(
        &mut self,
        kind: ListKind,
        item: Inline,
        out: &mut Vec<RenderNode>,
    ) {
        match self {
            Run::List { kind: open, items } if *open == kind => items.push(item),
            _ => {
                self.flush(out);
                *self = Run::List {
                    kind,
                    items: vec![item],
                };
            }
        }
    }

    /// Appends inline content to the open paragraph, starting one if needed.
    pub(super) fn extend_paragraph(&mut self, content: Vec<Inline>, out: &mut Vec<RenderNode>) {
        match self {
            Run::Paragraph(open) => open.extend(content),
            _ => {
                self.flush(out);
                *self = Run::Paragraph(content);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn text(s: &str) -> Inline {
        Inline::Text(s.to_string())
    }

    #[test]
    fn flush_of_idle_emits_nothing() {
        let mut out = Vec::new();
        Run::Idle.flush(&mut out);
        assert!(out.is_empty());
    }

    #[test]
    fn same_kind_items_accumulate() {
        let mut run = Run::default();
        let mut out = Vec::new();
        run.push_list_item(ListKind::Bullet, text("a"), &mut out);
        run.push_list_item(ListKind::Bullet, text("b"), &mut out);
        assert!(out.is_empty());

        run.flush(&mut out);
        assert_eq!(
            out,
            vec![RenderNode::List {
                kind: ListKind::Bullet,
                items: vec![text("a"), text("b")],
            }]
        );
    }

    #[test]
    fn kind_change_flushes_the_open_list() {
        let mut run = Run::default();
        let mut out = Vec::new();
        run.push_list_item(ListKind::Bullet, text("a"), &mut out);
        run.push_list_item(ListKind::Ordered, text("b"), &mut out);
        assert_eq!(out.len(), 1);
        assert!(matches!(
            out[0],
            RenderNode::List {
                kind: ListKind::Bullet,
                ..
            }
        ));
        assert_eq!(
            run,
            Run::List {
                kind: ListKind::Ordered,
                items: vec![text("b")],
            }
        );
    }

    #[test]
    fn paragraph_content_flushes_an_open_list() {
        let mut run = Run::default();
        let mut out = Vec::new();
        run.push_list_item(ListKind::Bullet, text("a"), &mut out);
        run.extend_paragraph(vec![text("c")], &mut out);
        run.flush(&mut out);
        assert_eq!(
            out,
            vec![
                RenderNode::List {
                    kind: ListKind::Bullet,
                    items: vec![text("a")],
                },
                RenderNode::Paragraph(vec![text("c")]),
            ]
        );
    }

    #[test]
    fn consecutive_paragraph_content_merges() {
        let mut run = Run::default();
        let mut out = Vec::new();
        run.extend_paragraph(vec![text("a")], &mut out);
        run.extend_paragraph(vec![text("b"), Inline::LineBreak], &mut out);
        run.flush(&mut out);
        assert_eq!(
            out,
            vec![RenderNode::Paragraph(vec![
                text("a"),
                text("b"),
                Inline::LineBreak,
            ])]
        );
    }
}
