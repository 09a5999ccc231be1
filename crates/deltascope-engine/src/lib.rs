pub mod delta;
pub mod formula;
pub mod io;
pub mod render;
pub mod summary;

// Re-export key types for easier usage
pub use delta::{Delta, DeltaOp, Insert, ValidationError, validate};
pub use formula::{FormulaProcessor, SimpleTypesetter, Typeset, contains_formulas};
pub use render::{Alignment, Inline, InlineStyle, ListKind, RenderNode, compile};
pub use summary::{Summary, summarize};
