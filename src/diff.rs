//! Semantic diff engine.
//!
//! Compares two JSON values structurally instead of line-by-line. The
//! engine specializes in two shapes: arrays of objects, where elements are
//! matched across the sides by similarity and classified as added, removed,
//! modified, or unchanged; and plain objects, where the diff is field-level.
//! Anything else is declined with `None` so the caller can fall back to a
//! plain text diff; that sentinel is normal control flow, not an error.
//!
//! # Examples
//!
//! ```
//! use jsoncmp::{diff_strings, DiffOptions};
//!
//! let left = r#"[{"id": 1, "name": "Alice"}]"#;
//! let right = r#"[{"id": 1, "name": "Alice"}, {"id": 2, "name": "Bob"}]"#;
//! let report = diff_strings(left, right, &DiffOptions::default()).unwrap();
//! assert_eq!(report.summary.added, 1);
//! assert_eq!(report.summary.unchanged, 1);
//! ```

use crate::lines::{render_with_line_map, LineMap, LineRange};
use crate::parser::parse_json;
use crate::similarity::{object_similarity, MATCH_THRESHOLD};
use crate::tree::Value;
use indexmap::IndexMap;
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::debug;

/// The classification of an element or field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeType {
    /// Present on both sides with the same value
    Unchanged,
    /// Present in the right side only
    Added,
    /// Present in the left side only
    Removed,
    /// Present on both sides with different values
    Modified,
}

/// Old and new value of a field that changed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModifiedField {
    pub left: Value,
    pub right: Value,
}

/// Field-level classification of two objects.
///
/// The four key sets partition the union of both objects' keys: every key
/// appears in exactly one of them.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FieldDiff {
    /// Keys in right but not left
    pub added: IndexMap<String, Value>,
    /// Keys in left but not right
    pub removed: IndexMap<String, Value>,
    /// Keys in both with different values
    pub modified: IndexMap<String, ModifiedField>,
    /// Keys in both with the same value
    pub unchanged: IndexMap<String, Value>,
}

impl FieldDiff {
    /// True when any field was added, removed, or modified.
    pub fn has_changes(&self) -> bool {
        !self.added.is_empty() || !self.removed.is_empty() || !self.modified.is_empty()
    }
}

/// One element-level verdict for an array-of-objects diff.
///
/// Exactly one of `left_index`/`right_index` is `None` for added and
/// removed entries; both are set for modified and unchanged ones.
#[derive(Debug, Clone, Serialize)]
pub struct ChangeEntry {
    #[serde(rename = "type")]
    pub kind: ChangeType,
    pub left_index: Option<usize>,
    pub right_index: Option<usize>,
    /// Similarity score of the matched pair; `None` for added/removed
    pub similarity: Option<f64>,
    /// Field diff of a modified pair; `None` otherwise
    pub field_diff: Option<FieldDiff>,
    pub left_lines: Option<LineRange>,
    pub right_lines: Option<LineRange>,
}

/// Counts per classification.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub added: usize,
    pub removed: usize,
    pub modified: usize,
    pub unchanged: usize,
}

impl Summary {
    /// Returns the total number of changes (excluding unchanged).
    pub fn total_changes(&self) -> usize {
        self.added + self.removed + self.modified
    }

    /// Returns true if there are no changes.
    pub fn is_empty(&self) -> bool {
        self.total_changes() == 0
    }
}

/// A change affecting one rendered line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineChange {
    #[serde(rename = "type")]
    pub kind: ChangeType,
    /// The object key responsible, for plain-object diffs
    pub key: Option<String>,
}

/// Shape-specific part of a report.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum DiffDetail {
    ArrayOfObjects { changes: Vec<ChangeEntry> },
    Object { field_diff: FieldDiff },
}

/// The full result of a semantic diff.
///
/// Carries the pretty-printed rendering of both sides together with
/// per-line change maps so a display layer can highlight directly.
#[derive(Debug, Clone, Serialize)]
pub struct DiffReport {
    #[serde(flatten)]
    pub detail: DiffDetail,
    pub summary: Summary,
    pub left_text: String,
    pub right_text: String,
    pub left_line_changes: BTreeMap<usize, LineChange>,
    pub right_line_changes: BTreeMap<usize, LineChange>,
}

/// Configuration for the diff engine.
#[derive(Debug, Clone)]
pub struct DiffOptions {
    /// Minimum similarity for two array elements to be matched
    pub match_threshold: f64,
    /// Indent width of the pretty-printed rendering
    pub indent: usize,
}

impl Default for DiffOptions {
    fn default() -> Self {
        Self {
            match_threshold: MATCH_THRESHOLD,
            indent: 3,
        }
    }
}

/// Computes the semantic diff of two JSON strings.
///
/// Both inputs are parsed strictly; a parse failure on either side yields
/// `None`, the same sentinel as an unsupported shape, because the caller
/// reacts identically to both (fall back to a text diff).
pub fn diff_strings(left: &str, right: &str, options: &DiffOptions) -> Option<DiffReport> {
    let left = match parse_json(left) {
        Ok(value) => value,
        Err(e) => {
            debug!("left input is not strict JSON: {}", e);
            return None;
        }
    };
    let right = match parse_json(right) {
        Ok(value) => value,
        Err(e) => {
            debug!("right input is not strict JSON: {}", e);
            return None;
        }
    };
    diff_values(&left, &right, options)
}

/// Computes the semantic diff of two parsed values.
///
/// Returns `None` unless both sides are arrays of objects or both are
/// plain objects.
pub fn diff_values(left: &Value, right: &Value, options: &DiffOptions) -> Option<DiffReport> {
    if left.is_array_of_objects() && right.is_array_of_objects() {
        let left_items = left.as_array()?;
        let right_items = right.as_array()?;
        return Some(diff_arrays_of_objects(left_items, right_items, options));
    }

    if let (Value::Object(left_fields), Value::Object(right_fields)) = (left, right) {
        return Some(diff_objects(
            left_fields,
            right_fields,
            left,
            right,
            options,
        ));
    }

    debug!(
        "shapes not semantically diffable: {} vs {}",
        left.type_name(),
        right.type_name()
    );
    None
}

/// A candidate pairing of a left and right element.
#[derive(Debug, Clone, Copy)]
struct Match {
    left_index: usize,
    right_index: usize,
    similarity: f64,
}

/// Greedy similarity matching between two arrays of objects.
///
/// Builds the full left-by-right similarity matrix, keeps candidates at or
/// above the threshold, sorts them by similarity descending (stable, so
/// ties keep left-major/right-minor discovery order), then claims pairs
/// whose endpoints are both still free. Greedy, not an optimal assignment.
fn find_best_matches(left: &[Value], right: &[Value], threshold: f64) -> Vec<Match> {
    let mut candidates = Vec::new();

    for (i, left_item) in left.iter().enumerate() {
        for (j, right_item) in right.iter().enumerate() {
            let (Some(left_obj), Some(right_obj)) = (left_item.as_object(), right_item.as_object())
            else {
                continue;
            };
            let similarity = object_similarity(left_obj, right_obj);
            if similarity >= threshold {
                candidates.push(Match {
                    left_index: i,
                    right_index: j,
                    similarity,
                });
            }
        }
    }

    debug!(
        "similarity matrix {}x{}, {} candidates above threshold",
        left.len(),
        right.len(),
        candidates.len()
    );

    candidates.sort_by(|a, b| {
        b.similarity
            .partial_cmp(&a.similarity)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let mut used_left = vec![false; left.len()];
    let mut used_right = vec![false; right.len()];
    let mut matches = Vec::new();

    for candidate in candidates {
        if !used_left[candidate.left_index] && !used_right[candidate.right_index] {
            used_left[candidate.left_index] = true;
            used_right[candidate.right_index] = true;
            matches.push(candidate);
        }
    }

    matches
}

/// Field-level comparison of two objects.
pub fn compute_field_diff(
    left: &IndexMap<String, Value>,
    right: &IndexMap<String, Value>,
) -> FieldDiff {
    let mut diff = FieldDiff::default();

    for (key, left_value) in left {
        match right.get(key) {
            None => {
                diff.removed.insert(key.clone(), left_value.clone());
            }
            Some(right_value) => {
                if left_value.deep_equal(right_value) {
                    diff.unchanged.insert(key.clone(), left_value.clone());
                } else {
                    diff.modified.insert(
                        key.clone(),
                        ModifiedField {
                            left: left_value.clone(),
                            right: right_value.clone(),
                        },
                    );
                }
            }
        }
    }

    for (key, right_value) in right {
        if !left.contains_key(key) {
            diff.added.insert(key.clone(), right_value.clone());
        }
    }

    diff
}

fn mark_lines(
    map: &mut BTreeMap<usize, LineChange>,
    range: Option<LineRange>,
    kind: ChangeType,
    key: Option<&str>,
) {
    if let Some(range) = range {
        for line in range.start..=range.end {
            map.insert(
                line,
                LineChange {
                    kind,
                    key: key.map(str::to_string),
                },
            );
        }
    }
}

fn diff_arrays_of_objects(left: &[Value], right: &[Value], options: &DiffOptions) -> DiffReport {
    let (left_text, left_map) = render_with_line_map(&Value::Array(left.to_vec()), options.indent);
    let (right_text, right_map) =
        render_with_line_map(&Value::Array(right.to_vec()), options.indent);

    let matches = find_best_matches(left, right, options.match_threshold);
    let mut matched_left = vec![false; left.len()];
    let mut matched_right = vec![false; right.len()];

    let mut changes = Vec::new();
    let mut summary = Summary::default();
    let mut left_line_changes = BTreeMap::new();
    let mut right_line_changes = BTreeMap::new();

    let item_range = |map: &LineMap, index: usize| map.array_items.get(index).copied();

    for m in &matches {
        matched_left[m.left_index] = true;
        matched_right[m.right_index] = true;

        let (Some(left_obj), Some(right_obj)) = (
            left[m.left_index].as_object(),
            right[m.right_index].as_object(),
        ) else {
            continue;
        };
        let field_diff = compute_field_diff(left_obj, right_obj);
        let has_changes = field_diff.has_changes();

        let kind = if has_changes {
            summary.modified += 1;
            ChangeType::Modified
        } else {
            summary.unchanged += 1;
            ChangeType::Unchanged
        };

        let left_lines = item_range(&left_map, m.left_index);
        let right_lines = item_range(&right_map, m.right_index);

        if has_changes {
            mark_lines(&mut left_line_changes, left_lines, ChangeType::Modified, None);
            mark_lines(
                &mut right_line_changes,
                right_lines,
                ChangeType::Modified,
                None,
            );
        }

        changes.push(ChangeEntry {
            kind,
            left_index: Some(m.left_index),
            right_index: Some(m.right_index),
            similarity: Some(m.similarity),
            field_diff: has_changes.then_some(field_diff),
            left_lines,
            right_lines,
        });
    }

    for (i, matched) in matched_left.iter().enumerate() {
        if !matched {
            summary.removed += 1;
            let left_lines = item_range(&left_map, i);
            mark_lines(&mut left_line_changes, left_lines, ChangeType::Removed, None);
            changes.push(ChangeEntry {
                kind: ChangeType::Removed,
                left_index: Some(i),
                right_index: None,
                similarity: None,
                field_diff: None,
                left_lines,
                right_lines: None,
            });
        }
    }

    for (i, matched) in matched_right.iter().enumerate() {
        if !matched {
            summary.added += 1;
            let right_lines = item_range(&right_map, i);
            mark_lines(&mut right_line_changes, right_lines, ChangeType::Added, None);
            changes.push(ChangeEntry {
                kind: ChangeType::Added,
                left_index: None,
                right_index: Some(i),
                similarity: None,
                field_diff: None,
                left_lines: None,
                right_lines,
            });
        }
    }

    // Order by position in the new document, falling back to the old
    // position for pure removals.
    changes.sort_by_key(|c| c.right_index.or(c.left_index).unwrap_or(0));

    DiffReport {
        detail: DiffDetail::ArrayOfObjects { changes },
        summary,
        left_text,
        right_text,
        left_line_changes,
        right_line_changes,
    }
}

fn diff_objects(
    left_fields: &IndexMap<String, Value>,
    right_fields: &IndexMap<String, Value>,
    left: &Value,
    right: &Value,
    options: &DiffOptions,
) -> DiffReport {
    let (left_text, left_map) = render_with_line_map(left, options.indent);
    let (right_text, right_map) = render_with_line_map(right, options.indent);

    let field_diff = compute_field_diff(left_fields, right_fields);
    let summary = Summary {
        added: field_diff.added.len(),
        removed: field_diff.removed.len(),
        modified: field_diff.modified.len(),
        unchanged: field_diff.unchanged.len(),
    };

    let mut left_line_changes = BTreeMap::new();
    let mut right_line_changes = BTreeMap::new();

    for key in field_diff.removed.keys() {
        mark_lines(
            &mut left_line_changes,
            left_map.keys.get(key).copied(),
            ChangeType::Removed,
            Some(key),
        );
    }
    for key in field_diff.added.keys() {
        mark_lines(
            &mut right_line_changes,
            right_map.keys.get(key).copied(),
            ChangeType::Added,
            Some(key),
        );
    }
    for key in field_diff.modified.keys() {
        mark_lines(
            &mut left_line_changes,
            left_map.keys.get(key).copied(),
            ChangeType::Modified,
            Some(key),
        );
        mark_lines(
            &mut right_line_changes,
            right_map.keys.get(key).copied(),
            ChangeType::Modified,
            Some(key),
        );
    }

    DiffReport {
        detail: DiffDetail::Object { field_diff },
        summary,
        left_text,
        right_text,
        left_line_changes,
        right_line_changes,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indexmap::indexmap;

    fn obj(pairs: &[(&str, Value)]) -> Value {
        Value::Object(
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.clone()))
                .collect(),
        )
    }

    fn num(n: f64) -> Value {
        Value::Number(n)
    }

    fn s(text: &str) -> Value {
        Value::String(text.to_string())
    }

    #[test]
    fn test_identical_arrays_all_unchanged() {
        let rows = Value::Array(vec![
            obj(&[("id", num(1.0)), ("name", s("Alice"))]),
            obj(&[("id", num(2.0)), ("name", s("Bob"))]),
        ]);
        let report = diff_values(&rows, &rows, &DiffOptions::default()).unwrap();
        assert_eq!(
            report.summary,
            Summary {
                added: 0,
                removed: 0,
                modified: 0,
                unchanged: 2
            }
        );
        assert!(report.summary.is_empty());
        assert!(report.left_line_changes.is_empty());
        assert!(report.right_line_changes.is_empty());
    }

    #[test]
    fn test_added_element() {
        let left = Value::Array(vec![obj(&[("id", num(1.0)), ("name", s("A"))])]);
        let right = Value::Array(vec![
            obj(&[("id", num(1.0)), ("name", s("A"))]),
            obj(&[("id", num(2.0)), ("name", s("B"))]),
        ]);
        let report = diff_values(&left, &right, &DiffOptions::default()).unwrap();
        assert_eq!(
            report.summary,
            Summary {
                added: 1,
                removed: 0,
                modified: 0,
                unchanged: 1
            }
        );

        let DiffDetail::ArrayOfObjects { changes } = &report.detail else {
            panic!("Expected array-of-objects detail");
        };
        assert_eq!(changes.len(), 2);
        assert_eq!(changes[0].kind, ChangeType::Unchanged);
        assert_eq!(changes[0].left_index, Some(0));
        assert_eq!(changes[0].right_index, Some(0));
        assert_eq!(changes[1].kind, ChangeType::Added);
        assert_eq!(changes[1].left_index, None);
        assert_eq!(changes[1].right_index, Some(1));
    }

    #[test]
    fn test_modified_element_carries_field_diff() {
        let left = Value::Array(vec![obj(&[("id", num(1.0)), ("name", s("Alice"))])]);
        let right = Value::Array(vec![obj(&[("id", num(1.0)), ("name", s("Alicia"))])]);
        let report = diff_values(&left, &right, &DiffOptions::default()).unwrap();
        assert_eq!(report.summary.modified, 1);

        let DiffDetail::ArrayOfObjects { changes } = &report.detail else {
            panic!("Expected array-of-objects detail");
        };
        let field_diff = changes[0].field_diff.as_ref().unwrap();
        assert!(field_diff.modified.contains_key("name"));
        assert!(field_diff.unchanged.contains_key("id"));
        assert!(changes[0].similarity.unwrap() > MATCH_THRESHOLD);
    }

    #[test]
    fn test_threshold_boundary_inclusive() {
        // Five unit-weight keys, two agree: similarity is exactly 0.4.
        let left = Value::Array(vec![obj(&[
            ("p", num(1.0)),
            ("q", num(2.0)),
            ("r", num(3.0)),
            ("s", num(4.0)),
            ("t", num(5.0)),
        ])]);
        let right = Value::Array(vec![obj(&[
            ("p", num(1.0)),
            ("q", num(2.0)),
            ("r", num(30.0)),
            ("s", num(40.0)),
            ("t", num(50.0)),
        ])]);
        let report = diff_values(&left, &right, &DiffOptions::default()).unwrap();
        assert_eq!(report.summary.modified, 1);
        assert_eq!(report.summary.added, 0);
        assert_eq!(report.summary.removed, 0);

        let DiffDetail::ArrayOfObjects { changes } = &report.detail else {
            panic!("Expected array-of-objects detail");
        };
        assert_eq!(changes[0].similarity, Some(0.4));
    }

    #[test]
    fn test_below_threshold_splits_into_add_and_remove() {
        // One agreeing key of three: similarity 1/3, below the threshold.
        let left = Value::Array(vec![obj(&[
            ("p", num(1.0)),
            ("q", num(2.0)),
            ("r", num(3.0)),
        ])]);
        let right = Value::Array(vec![obj(&[
            ("p", num(1.0)),
            ("q", num(20.0)),
            ("r", num(30.0)),
        ])]);
        let report = diff_values(&left, &right, &DiffOptions::default()).unwrap();
        assert_eq!(
            report.summary,
            Summary {
                added: 1,
                removed: 1,
                modified: 0,
                unchanged: 0
            }
        );
    }

    #[test]
    fn test_reordered_elements_still_match() {
        let a = obj(&[("id", num(1.0)), ("name", s("Alice"))]);
        let b = obj(&[("id", num(2.0)), ("name", s("Bob"))]);
        let left = Value::Array(vec![a.clone(), b.clone()]);
        let right = Value::Array(vec![b, a]);
        let report = diff_values(&left, &right, &DiffOptions::default()).unwrap();
        assert_eq!(report.summary.unchanged, 2);
        assert!(report.summary.is_empty());
    }

    #[test]
    fn test_changes_sorted_by_right_position() {
        let left = Value::Array(vec![
            obj(&[("id", num(1.0)), ("name", s("gone"))]),
            obj(&[("id", num(2.0)), ("name", s("kept"))]),
        ]);
        let right = Value::Array(vec![
            obj(&[("id", num(2.0)), ("name", s("kept"))]),
            obj(&[("id", num(9.0)), ("name", s("fresh"))]),
        ]);
        let report = diff_values(&left, &right, &DiffOptions::default()).unwrap();

        let DiffDetail::ArrayOfObjects { changes } = &report.detail else {
            panic!("Expected array-of-objects detail");
        };
        let kinds: Vec<ChangeType> = changes.iter().map(|c| c.kind).collect();
        // The matched pair (right 0) and the removal (left 0) tie on
        // position; the stable sort keeps pairs ahead of removals. The
        // addition at right 1 comes last.
        assert_eq!(
            kinds,
            vec![ChangeType::Unchanged, ChangeType::Removed, ChangeType::Added]
        );
    }

    #[test]
    fn test_array_entry_line_ranges() {
        let left = Value::Array(vec![obj(&[("id", num(1.0))])]);
        let right = Value::Array(vec![
            obj(&[("id", num(1.0))]),
            obj(&[("id", num(2.0))]),
        ]);
        let report = diff_values(&left, &right, &DiffOptions::default()).unwrap();

        let DiffDetail::ArrayOfObjects { changes } = &report.detail else {
            panic!("Expected array-of-objects detail");
        };
        // Rendering: line 0 "[", lines 1-3 first object, lines 4-6 second.
        assert_eq!(changes[0].left_lines, Some(LineRange { start: 1, end: 3 }));
        assert_eq!(changes[1].right_lines, Some(LineRange { start: 4, end: 6 }));
        // The added element marks its span in the right-hand line map.
        assert_eq!(report.right_line_changes.get(&4).unwrap().kind, ChangeType::Added);
        assert_eq!(report.right_line_changes.get(&6).unwrap().kind, ChangeType::Added);
        assert!(report.right_line_changes.get(&1).is_none());
    }

    #[test]
    fn test_plain_object_diff() {
        let left = obj(&[("a", num(1.0)), ("b", num(2.0)), ("c", num(3.0))]);
        let right = obj(&[("a", num(1.0)), ("b", num(20.0)), ("d", num(4.0))]);
        let report = diff_values(&left, &right, &DiffOptions::default()).unwrap();
        assert_eq!(
            report.summary,
            Summary {
                added: 1,
                removed: 1,
                modified: 1,
                unchanged: 1
            }
        );

        let DiffDetail::Object { field_diff } = &report.detail else {
            panic!("Expected object detail");
        };
        assert!(field_diff.added.contains_key("d"));
        assert!(field_diff.removed.contains_key("c"));
        assert!(field_diff.modified.contains_key("b"));
        assert!(field_diff.unchanged.contains_key("a"));
    }

    #[test]
    fn test_plain_object_line_changes_use_key_spans() {
        let left = obj(&[("a", num(1.0)), ("b", num(2.0))]);
        let right = obj(&[("a", num(1.0)), ("b", num(3.0))]);
        let report = diff_values(&left, &right, &DiffOptions::default()).unwrap();

        // "b" sits on line 2 of both renderings.
        let change = report.left_line_changes.get(&2).unwrap();
        assert_eq!(change.kind, ChangeType::Modified);
        assert_eq!(change.key.as_deref(), Some("b"));
        assert_eq!(
            report.right_line_changes.get(&2).unwrap().kind,
            ChangeType::Modified
        );
        assert!(report.left_line_changes.get(&1).is_none());
    }

    #[test]
    fn test_field_diff_partition_invariant() {
        let left = indexmap! {
            "a".to_string() => num(1.0),
            "b".to_string() => num(2.0),
            "c".to_string() => num(3.0),
        };
        let right = indexmap! {
            "b".to_string() => num(2.0),
            "c".to_string() => num(30.0),
            "d".to_string() => num(4.0),
        };
        let diff = compute_field_diff(&left, &right);

        let mut all: Vec<&String> = diff
            .added
            .keys()
            .chain(diff.removed.keys())
            .chain(diff.modified.keys())
            .chain(diff.unchanged.keys())
            .collect();
        all.sort();
        let mut union: Vec<&String> = left.keys().chain(right.keys()).collect();
        union.sort();
        union.dedup();
        assert_eq!(all, union);
    }

    #[test]
    fn test_primitive_arrays_fall_back() {
        let left = Value::Array(vec![num(1.0), num(2.0), num(3.0)]);
        let right = Value::Array(vec![num(1.0), num(2.0), num(4.0)]);
        assert!(diff_values(&left, &right, &DiffOptions::default()).is_none());
    }

    #[test]
    fn test_mismatched_shapes_fall_back() {
        let rows = Value::Array(vec![obj(&[("id", num(1.0))])]);
        let object = obj(&[("id", num(1.0))]);
        assert!(diff_values(&rows, &object, &DiffOptions::default()).is_none());
        assert!(diff_values(&num(1.0), &num(2.0), &DiffOptions::default()).is_none());
        assert!(diff_values(&Value::Array(vec![]), &rows, &DiffOptions::default()).is_none());
    }

    #[test]
    fn test_diff_strings_invalid_input_is_none() {
        let options = DiffOptions::default();
        assert!(diff_strings("{not json", r#"{"a": 1}"#, &options).is_none());
        assert!(diff_strings(r#"{"a": 1}"#, "{not json", &options).is_none());
    }

    #[test]
    fn test_diff_strings_object_inputs() {
        let report = diff_strings(
            r#"{"name": "Alice", "age": 30}"#,
            r#"{"name": "Alice", "age": 31}"#,
            &DiffOptions::default(),
        )
        .unwrap();
        assert_eq!(report.summary.modified, 1);
        assert_eq!(report.summary.unchanged, 1);
    }

    #[test]
    fn test_greedy_matching_prefers_highest_similarity() {
        // Left row 0 resembles both right rows, but right 1 is identical;
        // the greedy pass must claim the identical pair first.
        let left = Value::Array(vec![obj(&[("id", num(1.0)), ("name", s("Alpha"))])]);
        let right = Value::Array(vec![
            obj(&[("id", num(1.0)), ("name", s("Alphb"))]),
            obj(&[("id", num(1.0)), ("name", s("Alpha"))]),
        ]);
        let report = diff_values(&left, &right, &DiffOptions::default()).unwrap();

        let DiffDetail::ArrayOfObjects { changes } = &report.detail else {
            panic!("Expected array-of-objects detail");
        };
        let unchanged = changes
            .iter()
            .find(|c| c.kind == ChangeType::Unchanged)
            .unwrap();
        assert_eq!(unchanged.right_index, Some(1));
        assert_eq!(report.summary.added, 1);
    }
}
