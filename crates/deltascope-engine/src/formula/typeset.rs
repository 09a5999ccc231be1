/// The external formula-to-markup boundary.
///
/// The engine never typesets LaTeX itself; it hands each formula to a
/// `Typeset` implementation and treats the returned markup as opaque.
/// Failures are reported per formula so the caller can degrade a single bad
/// span without losing the surrounding text.
pub trait Typeset {
    fn typeset(&self, source: &str, display_mode: bool) -> Result<String, TypesetError>;
}

/// Why a single formula could not be typeset.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TypesetError {
    #[error("empty formula")]
    EmptyFormula,
    #[error("unbalanced braces in formula")]
    UnbalancedBraces,
    #[error("{0}")]
    Engine(String),
}

/// Built-in fallback typesetter.
///
/// Performs basic well-formedness checks (non-empty source, balanced
/// unescaped braces) and emits the escaped source wrapped in a classed span.
/// A real typesetting engine plugs in behind [`Typeset`] instead.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleTypesetter;

impl Typeset for SimpleTypesetter {
    fn typeset(&self, source: &str, display_mode: bool) -> Result<String, TypesetError> {
        let source = source.trim();
        if source.is_empty() {
            return Err(TypesetError::EmptyFormula);
        }
        if !braces_balanced(source) {
            return Err(TypesetError::UnbalancedBraces);
        }

        let class = if display_mode {
            "math math-display"
        } else {
            "math math-inline"
        };
        Ok(format!(
            "<span class=\"{class}\">{}</span>",
            html_escape::encode_text(source)
        ))
    }
}

/// Checks `{`/`}` nesting, ignoring `\{` and `\}` escapes.
fn braces_balanced(source: &str) -> bool {
    let mut depth: i32 = 0;
    let mut escaped = false;
    for c in source.chars() {
        if escaped {
            escaped = false;
            continue;
        }
        match c {
            '\\' => escaped = true,
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth < 0 {
                    return false;
                }
            }
            _ => {}
        }
    }
    depth == 0
}
