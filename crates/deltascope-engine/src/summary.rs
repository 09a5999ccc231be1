use crate::delta::Delta;

/// Display facts derived from the current document, for status surfaces.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub op_count: usize,
    pub has_content: bool,
}

/// Projects a (possibly absent) document to its status summary.
pub fn summarize(delta: Option<&Delta>) -> Summary {
    match delta {
        Some(delta) => Summary {
            op_count: delta.ops.len(),
            has_content: true,
        },
        None => Summary::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::delta::validate;

    #[test]
    fn absent_document_summarizes_to_zero() {
        assert_eq!(
            summarize(None),
            Summary {
                op_count: 0,
                has_content: false,
            }
        );
    }

    #[test]
    fn empty_document_counts_zero_ops_but_has_content() {
        let delta = validate(r#"{"ops":[]}"#).unwrap();
        assert_eq!(
            summarize(Some(&delta)),
            Summary {
                op_count: 0,
                has_content: true,
            }
        );
    }

    #[test]
    fn op_count_tracks_all_operations() {
        let delta = validate(r#"{"ops":[{"insert":"a"},{"retain":1},{"delete":1}]}"#).unwrap();
        assert_eq!(summarize(Some(&delta)).op_count, 3);
    }
}
