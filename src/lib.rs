//! JSONCMP - Semantic JSON comparison.
//!
//! This library compares two JSON documents structurally rather than
//! line-by-line. For arrays of objects it figures out which elements
//! correspond across the two sides, without requiring explicit id fields,
//! and classifies each as unchanged, modified, added, or removed, with a
//! field-level diff for matched pairs. It also ships a tolerant parser that
//! accepts Python literal syntax (`repr()` dumps, `True`/`None`, tuples,
//! `datetime` constructors) by rewriting the input into valid JSON.
//!
//! # Example
//!
//! ```
//! use jsoncmp::{diff_strings, parse_flexible, diff_values, DiffOptions};
//!
//! // Strict JSON in, structured diff out.
//! let report = diff_strings(
//!     r#"[{"id": 1, "name": "Alice"}]"#,
//!     r#"[{"id": 1, "name": "Alicia"}]"#,
//!     &DiffOptions::default(),
//! ).unwrap();
//! assert_eq!(report.summary.modified, 1);
//!
//! // Python repr in, JSON value out; compose with the engine as needed.
//! let left = parse_flexible("{'id': 1, 'active': True}").unwrap();
//! let right = parse_flexible("{'id': 1, 'active': False}").unwrap();
//! let report = diff_values(&left, &right, &DiffOptions::default()).unwrap();
//! assert_eq!(report.summary.modified, 1);
//! ```
//!
//! Inputs the engine has no specialization for (scalars, arrays of
//! primitives, mismatched shapes) yield `None`; callers fall back to a
//! plain text diff.

pub mod diff;
pub mod error;
pub mod flex;
pub mod lines;
pub mod output;
pub mod parser;
pub mod similarity;
pub mod tree;

// Re-export commonly used types for convenience
pub use diff::{
    compute_field_diff, diff_strings, diff_values, ChangeEntry, ChangeType, DiffDetail,
    DiffOptions, DiffReport, FieldDiff, LineChange, ModifiedField, Summary,
};
pub use error::{JsoncmpError, OutputError, ParseError};
pub use flex::parse_flexible;
pub use lines::{render_with_line_map, LineMap, LineRange};
pub use output::{format_report, summary_message, OutputFormat, OutputOptions};
pub use parser::{parse_file, parse_json, parse_stdin};
pub use similarity::{object_similarity, MATCH_THRESHOLD};
pub use tree::Value;
