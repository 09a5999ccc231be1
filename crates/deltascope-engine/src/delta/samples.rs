//! Ready-made Delta documents for the empty-start screen and tests.

/// Minimal document: plain text with one bold run.
pub const SIMPLE: &str = r#"{
  "ops": [
    { "insert": "Hello " },
    { "insert": "World", "attributes": { "bold": true } },
    { "insert": "!\n" }
  ]
}"#;

/// A document exercising headers, inline formats, lists and links.
pub const COMPLEX: &str = r#"{
  "ops": [
    { "insert": "Quill Rich Text Editor\n", "attributes": { "header": 1 } },
    { "insert": "\nThis is a " },
    { "insert": "bold", "attributes": { "bold": true } },
    { "insert": " and " },
    { "insert": "italic", "attributes": { "italic": true } },
    { "insert": " text example.\n\nFeatures:\n" },
    { "insert": "Rich text formatting", "attributes": { "list": "bullet" } },
    { "insert": "Lists and headers", "attributes": { "list": "bullet" } },
    { "insert": "Links and images", "attributes": { "list": "bullet" } },
    { "insert": "\n\nVisit " },
    { "insert": "Quill.js", "attributes": { "link": "https://quilljs.com" } },
    { "insert": " for more information.\n" }
  ]
}"#;

/// A document with an embedded image.
pub const WITH_IMAGE: &str = r#"{
  "ops": [
    { "insert": "Document with Image\n", "attributes": { "header": 2 } },
    { "insert": "\nHere is an embedded image:\n" },
    { "insert": { "image": "https://via.placeholder.com/300x200" } },
    { "insert": "\nImage caption goes here.\n" }
  ]
}"#;

/// A document mixing formula embeds and inline math.
pub const WITH_FORMULAS: &str = r#"{
  "ops": [
    { "insert": "Math Examples\n", "attributes": { "header": 2 } },
    { "insert": "Inline math like $x^2 + y^2 = z^2$ flows with text.\n" },
    { "insert": { "formula": "e^{i\\pi} + 1 = 0" }, "attributes": { "size": 24 } },
    { "insert": "\nDisplay math:\n$$\\int_0^1 x\\,dx = \\tfrac{1}{2}$$\n" }
  ]
}"#;
