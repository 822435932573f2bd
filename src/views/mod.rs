//! HTML pages. Every user-provided string goes through `html_escape`.

mod forms;
mod quiz;

pub use forms::{create_quiz_page, signup_page};
pub use quiz::{quiz_page, results_page};

use axum::response::Html;

const LAYOUT: &str = r#"<!doctype html>
<html lang="en">
<head>
  <meta charset="utf-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1" />
  <title>__TITLE__</title>
  <style>
    body { font-family: system-ui, sans-serif; margin: 2rem; max-width: 48rem; }
    h1 { margin: 0 0 1rem 0; }
    label { display: block; margin: .5rem 0; }
    fieldset { margin: 1rem 0; border: 1px solid #ddd; border-radius: 6px; }
    .correct { color: #1a7f37; }
    .incorrect { color: #cf222e; }
  </style>
</head>
<body>
__BODY__
</body>
</html>
"#;

/// Wrap a body fragment in the shared page layout.
fn layout(title: &str, body: &str) -> Html<String> {
    Html(
        LAYOUT
            .replace("__TITLE__", &html_escape(title))
            .replace("__BODY__", body),
    )
}

/// Minimal HTML escaping for text and attribute values.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
