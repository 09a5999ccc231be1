use serde_json::Value;

use super::types::Delta;

/// Why the input could not be accepted as a Delta document.
///
/// All variants are recoverable and user-facing; the message text is shown
/// verbatim in the viewer. Validation is fail-fast: the first offending
/// operation (by index) is reported and checking stops.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("JSON input is empty")]
    EmptyInput,
    #[error("Invalid JSON: {0}")]
    MalformedJson(String),
    #[error(
        "Invalid Delta: missing \"ops\" array. Delta must have an \"ops\" property containing an array of operations"
    )]
    MissingOpsArray,
    #[error("Invalid Delta: {fault} at index {index}")]
    InvalidOperation { index: usize, fault: OpFault },
}

/// The specific shape rule an operation broke.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OpFault {
    #[error("operation is not an object")]
    NotAnObject,
    #[error("operation must have an \"insert\", \"delete\", or \"retain\" property")]
    MissingAction,
    #[error("\"delete\" must be a number")]
    DeleteNotANumber,
    #[error("\"retain\" must be a number")]
    RetainNotANumber,
    #[error("\"insert\" must be a string or object")]
    InsertWrongType,
}

/// Validate raw text as a Delta document.
///
/// Checks, in order: non-empty input, parseable JSON, a top-level `ops`
/// array, then per-operation shape rules (first failure wins). On success
/// the parsed document is returned unchanged; no normalization happens here.
pub fn validate(input: &str) -> Result<Delta, ValidationError> {
    if input.trim().is_empty() {
        return Err(ValidationError::EmptyInput);
    }

    let parsed: Value =
        serde_json::from_str(input).map_err(|e| ValidationError::MalformedJson(e.to_string()))?;

    let ops = parsed
        .get("ops")
        .and_then(Value::as_array)
        .ok_or(ValidationError::MissingOpsArray)?;

    for (index, op) in ops.iter().enumerate() {
        check_op(op).map_err(|fault| ValidationError::InvalidOperation { index, fault })?;
    }

    // Shape checks above guarantee this conversion succeeds.
    serde_json::from_value(parsed).map_err(|e| ValidationError::MalformedJson(e.to_string()))
}

fn check_op(op: &Value) -> Result<(), OpFault> {
    let obj = op.as_object().ok_or(OpFault::NotAnObject)?;

    let insert = obj.get("insert");
    let delete = obj.get("delete");
    let retain = obj.get("retain");

    if insert.is_none() && delete.is_none() && retain.is_none() {
        return Err(OpFault::MissingAction);
    }
    if let Some(v) = delete
        && !v.is_number()
    {
        return Err(OpFault::DeleteNotANumber);
    }
    if let Some(v) = retain
        && !v.is_number()
    {
        return Err(OpFault::RetainNotANumber);
    }
    if let Some(v) = insert
        && !v.is_string()
        && !v.is_object()
    {
        return Err(OpFault::InsertWrongType);
    }
    Ok(())
}

/// Pretty-print JSON text with canonical two-space indentation.
///
/// A formatting aid, not a correctness gate: unparseable input is returned
/// unchanged rather than rejected.
pub fn format_json(input: &str) -> String {
    match serde_json::from_str::<Value>(input) {
        Ok(value) => serde_json::to_string_pretty(&value).unwrap_or_else(|_| input.to_string()),
        Err(_) => input.to_string(),
    }
}
