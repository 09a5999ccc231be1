pub mod samples;
pub mod types;
pub mod validate;

pub use types::{Delta, DeltaOp, Insert};
pub use validate::{OpFault, ValidationError, format_json, validate};
