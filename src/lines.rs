//! Pretty-printing with line tracking.
//!
//! The diff engine reports which lines of a pretty-printed rendering each
//! change touches, so a display layer can highlight them without re-parsing
//! the text. Rather than rendering first and scanning the result for
//! brackets, the serializer here records the spans as it writes: the line
//! range of every top-level array element and of every top-level object key.

use crate::tree::{format_number, Value};
use indexmap::IndexMap;
use serde::Serialize;

/// Inclusive range of 0-based line numbers in a pretty-printed rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LineRange {
    pub start: usize,
    pub end: usize,
}

/// Line spans recorded while rendering a value.
///
/// `array_items` is populated when the root is an array (one span per
/// element); `keys` when the root is an object (one span per top-level key,
/// covering the key line through the end of its value).
#[derive(Debug, Clone, Default)]
pub struct LineMap {
    pub array_items: Vec<LineRange>,
    pub keys: IndexMap<String, LineRange>,
}

/// Renders a value with the given indent width and records top-level spans.
pub fn render_with_line_map(value: &Value, indent: usize) -> (String, LineMap) {
    let mut renderer = Renderer {
        out: String::new(),
        line: 0,
        indent,
    };
    let mut map = LineMap::default();

    match value {
        Value::Array(items) => renderer.write_array(items, 0, Some(&mut map.array_items)),
        Value::Object(fields) => renderer.write_object(fields, 0, Some(&mut map.keys)),
        leaf => renderer.write_value(leaf, 0),
    }

    (renderer.out, map)
}

struct Renderer {
    out: String,
    line: usize,
    indent: usize,
}

impl Renderer {
    fn push(&mut self, s: &str) {
        self.out.push_str(s);
    }

    fn newline(&mut self) {
        self.out.push('\n');
        self.line += 1;
    }

    fn push_indent(&mut self, depth: usize) {
        for _ in 0..depth * self.indent {
            self.out.push(' ');
        }
    }

    fn write_value(&mut self, value: &Value, depth: usize) {
        match value {
            Value::Null => self.push("null"),
            Value::Bool(b) => self.push(if *b { "true" } else { "false" }),
            Value::Number(n) => {
                let token = format_number(*n);
                self.push(&token);
            }
            Value::String(s) => {
                let token = serde_json::Value::String(s.clone()).to_string();
                self.push(&token);
            }
            Value::Array(items) => self.write_array(items, depth, None),
            Value::Object(fields) => self.write_object(fields, depth, None),
        }
    }

    fn write_array(&mut self, items: &[Value], depth: usize, mut spans: Option<&mut Vec<LineRange>>) {
        if items.is_empty() {
            self.push("[]");
            return;
        }

        self.push("[");
        self.newline();
        for (i, item) in items.iter().enumerate() {
            self.push_indent(depth + 1);
            let start = self.line;
            self.write_value(item, depth + 1);
            if let Some(spans) = spans.as_deref_mut() {
                spans.push(LineRange {
                    start,
                    end: self.line,
                });
            }
            if i + 1 < items.len() {
                self.push(",");
            }
            self.newline();
        }
        self.push_indent(depth);
        self.push("]");
    }

    fn write_object(
        &mut self,
        fields: &IndexMap<String, Value>,
        depth: usize,
        mut spans: Option<&mut IndexMap<String, LineRange>>,
    ) {
        if fields.is_empty() {
            self.push("{}");
            return;
        }

        self.push("{");
        self.newline();
        for (i, (key, value)) in fields.iter().enumerate() {
            self.push_indent(depth + 1);
            let start = self.line;
            let key_token = serde_json::Value::String(key.clone()).to_string();
            self.push(&key_token);
            self.push(": ");
            self.write_value(value, depth + 1);
            if let Some(spans) = spans.as_deref_mut() {
                spans.insert(
                    key.clone(),
                    LineRange {
                        start,
                        end: self.line,
                    },
                );
            }
            if i + 1 < fields.len() {
                self.push(",");
            }
            self.newline();
        }
        self.push_indent(depth);
        self.push("}");
    }
}
