//! Flattening of CMS rich-text blocks into display lines.
//!
//! Contact info is stored as a list of paragraph blocks. Each block is rendered
//! from its first child: a `text` leaf becomes a line of text, an `a` element
//! becomes a link labelled by its own first text child. Other blocks are skipped.

use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Line {
    Text { text: String },
    Link { text: String, url: String },
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Line::Text { text } => f.write_str(text),
            Line::Link { text, url } => write!(f, "{} <{}>", text, url),
        }
    }
}

fn str_field<'a>(node: &'a Value, key: &str) -> Option<&'a str> {
    node.get(key).and_then(Value::as_str)
}

fn first_child(node: &Value) -> Option<&Value> {
    node.get("children").and_then(Value::as_array)?.first()
}

fn line_for_block(block: &Value) -> Option<Line> {
    let leaf = first_child(block)?;
    match str_field(leaf, "type") {
        Some("text") => Some(Line::Text {
            text: str_field(leaf, "text").unwrap_or_default().to_string(),
        }),
        Some("a") => {
            let label = first_child(leaf)
                .and_then(|child| str_field(child, "text"))
                .unwrap_or_default();
            Some(Line::Link {
                text: label.to_string(),
                url: str_field(leaf, "url").unwrap_or_default().to_string(),
            })
        }
        _ => None,
    }
}

/// Display lines for a list of rich-text blocks.
pub fn plain_lines(blocks: &[Value]) -> Vec<Line> {
    blocks.iter().filter_map(line_for_block).collect()
}
