//! Object and value similarity scoring.
//!
//! The diff engine matches objects across two arrays by likeness rather than
//! by position or explicit identifiers. Every score is in `[0, 1]`:
//! 1 means identical, 0 means nothing in common. Keys whose names look like
//! identity fields (`id`, `uuid`, `name`, ...) count double, so agreement or
//! disagreement on them dominates the score.

use crate::tree::Value;
use indexmap::IndexMap;

/// Minimum object similarity for two array elements to be considered the
/// same entity. Pairs scoring below this are reported as an add plus a
/// remove instead of a modification.
pub const MATCH_THRESHOLD: f64 = 0.4;

/// Key names that identify an entity rather than describe it.
const IDENTITY_KEYS: [&str; 10] = [
    "id", "_id", "uuid", "guid", "key", "name", "email", "username", "slug", "code",
];

/// Checks whether a key name suggests an identity field.
///
/// Exact names are matched case-insensitively; additionally any key ending
/// in `_id` (case-insensitive) or `Id` (case-sensitive) qualifies.
pub fn is_identity_key(key: &str) -> bool {
    let lower = key.to_ascii_lowercase();
    IDENTITY_KEYS.contains(&lower.as_str()) || lower.ends_with("_id") || key.ends_with("Id")
}

/// Levenshtein edit distance between two strings, by character.
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    // Two-row DP: prev holds distances for the previous character of `a`.
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr: Vec<usize> = vec![0; b.len() + 1];

    for i in 1..=a.len() {
        curr[0] = i;
        for j in 1..=b.len() {
            let cost = usize::from(a[i - 1] != b[j - 1]);
            curr[j] = (prev[j] + 1)
                .min(curr[j - 1] + 1)
                .min(prev[j - 1] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

/// Normalized string similarity: `1 - distance / max(len)`.
pub fn string_similarity(a: &str, b: &str) -> f64 {
    if a == b {
        return 1.0;
    }
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let max_len = a.chars().count().max(b.chars().count());
    1.0 - (levenshtein(a, b) as f64 / max_len as f64)
}

/// Similarity between two arbitrary values.
///
/// Numbers and booleans compare exactly; strings fuzzily; arrays by
/// element-wise comparison over the shared prefix, normalized by the longer
/// length; objects recursively. Any type mismatch (null included) scores 0.
pub fn value_similarity(a: &Value, b: &Value) -> f64 {
    match (a, b) {
        (Value::Null, Value::Null) => 1.0,
        (Value::Bool(x), Value::Bool(y)) => {
            if x == y {
                1.0
            } else {
                0.0
            }
        }
        (Value::Number(x), Value::Number(y)) => {
            if x == y {
                1.0
            } else {
                0.0
            }
        }
        (Value::String(x), Value::String(y)) => string_similarity(x, y),
        (Value::Array(x), Value::Array(y)) => array_similarity(x, y),
        (Value::Object(x), Value::Object(y)) => object_similarity(x, y),
        _ => 0.0,
    }
}

fn array_similarity(a: &[Value], b: &[Value]) -> f64 {
    if a.is_empty() && b.is_empty() {
        return 1.0;
    }
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let min_len = a.len().min(b.len());
    let max_len = a.len().max(b.len());
    let score: f64 = (0..min_len)
        .map(|i| value_similarity(&a[i], &b[i]))
        .sum();

    // Elements beyond the shorter array contribute 0.
    score / max_len as f64
}

/// Similarity between two objects over the union of their keys.
///
/// A key present on only one side contributes nothing to the score but
/// still counts toward the weight total, penalizing divergent shapes.
/// Two empty objects are identical.
pub fn object_similarity(a: &IndexMap<String, Value>, b: &IndexMap<String, Value>) -> f64 {
    if a.is_empty() && b.is_empty() {
        return 1.0;
    }

    let mut score = 0.0;
    let mut weight_total = 0.0;

    for (key, left) in a {
        let weight = if is_identity_key(key) { 2.0 } else { 1.0 };
        weight_total += weight;
        if let Some(right) = b.get(key) {
            score += weight * value_similarity(left, right);
        }
    }
    for key in b.keys() {
        if !a.contains_key(key) {
            weight_total += if is_identity_key(key) { 2.0 } else { 1.0 };
        }
    }

    if weight_total > 0.0 {
        score / weight_total
    } else {
        0.0
    }
}
