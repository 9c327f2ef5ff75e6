//! Server-rendered HTML pages.
//!
//! Pages are fixed templates with escaped interpolation; there is no
//! template engine.

use dreamjournal_db::models::DreamEntry;

const LAYOUT: &str = r#"<!doctype html>
<html lang="en">
<head>
  <meta charset="utf-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1" />
  <title>__TITLE__</title>
  <style>
    body { font-family: system-ui, sans-serif; margin: 2rem auto; max-width: 48rem; padding: 0 1rem; }
    nav { margin-bottom: 1.5rem; }
    form { display: grid; gap: .75rem; margin-bottom: 2rem; }
    textarea { min-height: 8rem; }
    .entry { border-bottom: 1px solid #ddd; padding: 1rem 0; }
    .entry h3 { margin: 0 0 .5rem 0; color: #555; font-size: .95rem; }
    .interpretation { background: #f6f8fa; padding: .75rem; border-radius: 6px; white-space: pre-wrap; }
    .empty { color: #777; }
  </style>
</head>
<body>
__BODY__
</body>
</html>
"#;

const SUBMIT_FORM: &str = r#"  <form method="post" action="/">
    <label for="dream_text">Describe your dream</label>
    <textarea id="dream_text" name="dream_text" required></textarea>
    <label for="emotions">Emotions felt during the dream</label>
    <input id="emotions" name="emotions" />
    <label for="symbols">Key symbols or themes</label>
    <input id="symbols" name="symbols" />
    <button type="submit">Interpret my dream</button>
  </form>
"#;

const EMPTY_JOURNAL: &str = "  <p class=\"empty\">No dreams recorded yet.</p>\n";

/// Journal home: submission form plus entries in the order given.
pub fn render_index(entries: &[DreamEntry]) -> String {
    let mut body = String::new();
    body.push_str("  <h1>Dream Journal</h1>\n");
    body.push_str("  <nav><a href=\"/history\">View history</a></nav>\n");
    body.push_str(SUBMIT_FORM);
    body.push_str("  <h2>Your dreams</h2>\n");
    push_entries(&mut body, entries);
    page("Dream Journal", &body)
}

/// Read-only history page with entries in the order given.
pub fn render_history(entries: &[DreamEntry]) -> String {
    let mut body = String::new();
    body.push_str("  <h1>Dream History</h1>\n");
    body.push_str("  <nav><a href=\"/\">Back to journal</a></nav>\n");
    push_entries(&mut body, entries);
    page("Dream History", &body)
}

/// Escape text for use in element content and quoted attributes.
pub fn html_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

fn page(title: &str, body: &str) -> String {
    LAYOUT
        .replace("__TITLE__", &html_escape(title))
        .replace("__BODY__", body)
}

fn push_entries(body: &mut String, entries: &[DreamEntry]) {
    if entries.is_empty() {
        body.push_str(EMPTY_JOURNAL);
        return;
    }
    for entry in entries {
        body.push_str("  <article class=\"entry\">\n");
        body.push_str(&format!("    <h3>{}</h3>\n", html_escape(&entry.date)));
        push_field(body, "Dream", &entry.dream_text);
        push_field(body, "Emotions", &entry.emotions);
        push_field(body, "Symbols", &entry.symbols);
        body.push_str(&format!(
            "    <div class=\"interpretation\">{}</div>\n",
            html_escape(&entry.ai_interpretation)
        ));
        body.push_str("  </article>\n");
    }
}

fn push_field(body: &mut String, label: &str, value: &str) {
    body.push_str(&format!(
        "    <p><strong>{label}:</strong> {}</p>\n",
        html_escape(value)
    ));
}
