use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A Quill Delta document: an ordered list of operations.
///
/// This is the validated, typed form produced by [`crate::delta::validate`].
/// The viewer only materializes `insert` content; `delete`/`retain` ops are
/// accepted for shape but never rendered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Delta {
    pub ops: Vec<DeltaOp>,
}

/// One entry in a [`Delta`]'s operation list.
///
/// At least one of `insert`/`delete`/`retain` is present in a well-formed
/// operation (the validator enforces this). Attributes are kept as raw JSON
/// here; the compiler decodes them leniently into typed form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeltaOp {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub insert: Option<Insert>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delete: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retain: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attributes: Option<Value>,
}

/// An insert payload: either a text span or an embed descriptor.
///
/// Embeds are single-key objects such as `{"image": "<url>"}` or
/// `{"formula": "<latex>"}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Insert {
    Text(String),
    Embed(Map<String, Value>),
}

impl DeltaOp {
    /// Convenience constructor for a plain text insert.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            insert: Some(Insert::Text(text.into())),
            ..Default::default()
        }
    }
}
