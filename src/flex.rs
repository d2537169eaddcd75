//! Tolerant parsing of Python-literal input.
//!
//! Accepts text that is not strict JSON but commonly appears when data is
//! pasted out of Python: `repr()` dumps with single quotes, `True`/`False`/
//! `None`, tuples, sets, `datetime` constructors, `Decimal`, complex
//! numbers, and string prefixes. The input is normalized into valid JSON by
//! an ordered series of textual rewrites and then parsed strictly.
//!
//! The parser is a layered rewrite pipeline, not a grammar: each stage is a
//! pure string-to-string function that handles one construct, and each sees
//! one textual nesting level per pass. The contract is "handle common
//! real-world Python reprs", so deeply nested or adversarial input may fail
//! to normalize and surfaces as a [`ParseError`] rather than a wrong value.
//!
//! # Examples
//!
//! ```
//! use jsoncmp::flex::parse_flexible;
//!
//! let value = parse_flexible("{'active': True, 'tags': (1, 2)}").unwrap();
//! assert_eq!(value.type_name(), "object");
//! ```

use crate::error::ParseError;
use crate::parser::parse_json;
use crate::tree::Value;
use lazy_static::lazy_static;
use regex::{Captures, Regex};
use tracing::debug;

lazy_static! {
    static ref JSON_START_RE: Regex = Regex::new(r#"^[\[{"\d-]"#).unwrap();
    static ref JSON_LITERAL_RE: Regex = Regex::new(r"(?i)^(true|false|null)$").unwrap();
    static ref TRUE_RE: Regex = Regex::new(r"\bTrue\b").unwrap();
    static ref FALSE_RE: Regex = Regex::new(r"\bFalse\b").unwrap();
    static ref NONE_RE: Regex = Regex::new(r"\bNone\b").unwrap();
    static ref COMPLEX_PAIR_RE: Regex =
        Regex::new(r"\(([+-]?\d+\.?\d*)\s*([+-])\s*(\d+\.?\d*)j\)").unwrap();
    static ref COMPLEX_BARE_RE: Regex = Regex::new(r"\b([+-]?\d+\.?\d*)j\b").unwrap();
    static ref DECIMAL_RE: Regex = Regex::new(r#"Decimal\("([^"]+)"\)"#).unwrap();
    static ref STRING_PREFIX_RE: Regex =
        Regex::new(r#"(^|[\s{\[,:])[bruf]"([^"]*)""#).unwrap();
    static ref OBJECT_REPR_RE: Regex = Regex::new(r"<([A-Za-z0-9_]+)\s*(?:#(\d+))?>").unwrap();
    static ref DATETIME_RE: Regex = Regex::new(r"datetime\.datetime\(([^)]+)\)").unwrap();
    static ref DATE_RE: Regex = Regex::new(r"datetime\.date\(([^)]+)\)").unwrap();
    static ref BRACE_GROUP_RE: Regex = Regex::new(r"\{([^{}]*)\}").unwrap();
    static ref PAREN_GROUP_RE: Regex = Regex::new(r"\(([^()]*)\)").unwrap();
    static ref COMPLEX_CONTENT_RE: Regex =
        Regex::new(r"^[+-]?\d*\.?\d*[+-]\d*\.?\d*j$").unwrap();
    static ref IDENT_BEFORE_RE: Regex = Regex::new(r"[A-Za-z_][A-Za-z0-9_]*\s*$").unwrap();
    static ref BARE_KEY_RE: Regex = Regex::new(r"([{,]\s*)([A-Za-z0-9_-]+)\s*:").unwrap();
    static ref TRAILING_COMMA_RE: Regex = Regex::new(r",\s*([}\]])").unwrap();
    static ref COMMA_RUN_RE: Regex = Regex::new(r",\s*,+").unwrap();
    static ref WHITESPACE_RUN_RE: Regex = Regex::new(r"\s+").unwrap();
}

/// Parses text that may be strict JSON or a Python literal dump.
///
/// Strict JSON takes a fast path; anything else goes through the rewrite
/// pipeline. Empty or whitespace-only input parses to `Value::Null`.
///
/// # Errors
///
/// Returns [`ParseError::Unparseable`] carrying the processed text
/// (truncated) and the strict parser's message when no interpretation
/// succeeds. A partial or garbage value is never returned.
pub fn parse_flexible(text: &str) -> Result<Value, ParseError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(Value::Null);
    }

    if JSON_START_RE.is_match(trimmed) || JSON_LITERAL_RE.is_match(trimmed) {
        if let Ok(value) = parse_json(trimmed) {
            return Ok(value);
        }
        debug!("strict parse failed, entering relaxation pipeline");
    }

    let mut s = substitute_constants(trimmed);
    s = convert_single_quotes(&s);
    s = rewrite_complex_numbers(&s);
    s = rewrite_decimals(&s);
    s = strip_string_prefixes(&s);
    s = rewrite_object_reprs(&s);
    s = rewrite_datetimes(&s);
    s = rewrite_sets(&s);
    s = rewrite_tuples(&s);
    s = quote_bare_keys(&s);
    s = cleanup_punctuation(&s);

    match parse_json(&s) {
        Ok(value) => Ok(value),
        Err(first_err) => {
            let repaired = balance_brackets(&s);
            parse_json(&repaired).map_err(|_| {
                debug!("relaxation pipeline failed: {}", first_err);
                ParseError::unparseable(first_err.to_string(), truncate(&s, 200))
            })
        }
    }
}

/// Replaces the Python constants `True`, `False`, and `None` as whole words.
fn substitute_constants(input: &str) -> String {
    let s = TRUE_RE.replace_all(input, "true");
    let s = FALSE_RE.replace_all(&s, "false");
    NONE_RE.replace_all(&s, "null").into_owned()
}

/// Rewrites single-quoted string literals to double-quoted ones.
///
/// A single left-to-right scan with quote-state tracking: single quotes
/// inside double-quoted strings stay literal, `\'` becomes a plain `'`
/// (JSON has no such escape), and embedded `"` is escaped.
fn convert_single_quotes(input: &str) -> String {
    let chars: Vec<char> = input.chars().collect();
    let mut out = String::with_capacity(input.len());
    let mut i = 0;

    while i < chars.len() {
        match chars[i] {
            '"' => {
                // Already double-quoted: copy verbatim through the closing quote.
                out.push('"');
                i += 1;
                while i < chars.len() {
                    let c = chars[i];
                    out.push(c);
                    i += 1;
                    if c == '\\' && i < chars.len() {
                        out.push(chars[i]);
                        i += 1;
                    } else if c == '"' {
                        break;
                    }
                }
            }
            '\'' => {
                out.push('"');
                i += 1;
                while i < chars.len() {
                    match chars[i] {
                        '\\' if i + 1 < chars.len() => {
                            match chars[i + 1] {
                                '\'' => out.push('\''),
                                '"' => out.push_str("\\\""),
                                c => {
                                    out.push('\\');
                                    out.push(c);
                                }
                            }
                            i += 2;
                        }
                        '\'' => {
                            out.push('"');
                            i += 1;
                            break;
                        }
                        '"' => {
                            out.push_str("\\\"");
                            i += 1;
                        }
                        c => {
                            out.push(c);
                            i += 1;
                        }
                    }
                }
            }
            c => {
                out.push(c);
                i += 1;
            }
        }
    }

    out
}

/// Rewrites complex-number literals into `{"real": .., "imag": ".."}`.
///
/// The imaginary part stays a string so the sign survives unambiguously.
fn rewrite_complex_numbers(input: &str) -> String {
    let s = COMPLEX_PAIR_RE.replace_all(input, r#"{"real": ${1}, "imag": "${2}${3}"}"#);
    COMPLEX_BARE_RE
        .replace_all(&s, r#"{"real": 0, "imag": "${1}"}"#)
        .into_owned()
}

/// Rewrites `Decimal("123.45")` to the bare string `"123.45"`.
fn rewrite_decimals(input: &str) -> String {
    DECIMAL_RE.replace_all(input, r#""${1}""#).into_owned()
}

/// Drops the `b`/`r`/`u`/`f` prefix from Python string literals.
///
/// The prefix letter must sit in value position (after a delimiter or at
/// the start of input) so that object keys named `b` or `f` stay intact.
fn strip_string_prefixes(input: &str) -> String {
    STRING_PREFIX_RE
        .replace_all(input, r#"${1}"${2}""#)
        .into_owned()
}

/// Rewrites object reprs like `<User #655715>` into a structured object.
fn rewrite_object_reprs(input: &str) -> String {
    OBJECT_REPR_RE
        .replace_all(input, r#"{"type": "${1}", "id": "${2}"}"#)
        .into_owned()
}

/// Rewrites `datetime.datetime(...)` and `datetime.date(...)` constructor
/// calls into ISO-8601-like strings.
///
/// Missing trailing components default to zero; month through second are
/// zero-padded to two digits and the microsecond to six.
fn rewrite_datetimes(input: &str) -> String {
    let s = DATETIME_RE.replace_all(input, |caps: &Captures| {
        let args: Vec<&str> = caps[1].split(',').map(str::trim).collect();
        if args.len() < 3 {
            return caps[0].to_string();
        }
        let part = |i: usize| args.get(i).copied().unwrap_or("0");
        format!(
            "\"{}-{:0>2}-{:0>2}T{:0>2}:{:0>2}:{:0>2}.{:0>6}\"",
            args[0],
            args[1],
            args[2],
            part(3),
            part(4),
            part(5),
            part(6)
        )
    });
    DATE_RE
        .replace_all(&s, |caps: &Captures| {
            let args: Vec<&str> = caps[1].split(',').map(str::trim).collect();
            if args.len() < 3 {
                return caps[0].to_string();
            }
            format!("\"{}-{:0>2}-{:0>2}\"", args[0], args[1], args[2])
        })
        .into_owned()
}

/// Rewrites Python set literals to arrays, leaving dicts alone.
///
/// A brace group is a dict when it contains a colon outside quoted
/// substrings; otherwise its comma-separated elements become an array.
/// Only innermost groups are examined per pass.
fn rewrite_sets(input: &str) -> String {
    BRACE_GROUP_RE
        .replace_all(input, |caps: &Captures| {
            let content = caps[1].trim().to_string();
            if content.is_empty() {
                return "{}".to_string();
            }
            if contains_colon_outside_quotes(&content) {
                return caps[0].to_string();
            }
            let elements: Vec<&str> = content
                .split(',')
                .map(str::trim)
                .filter(|el| !el.is_empty())
                .collect();
            format!("[{}]", elements.join(", "))
        })
        .into_owned()
}

/// Rewrites tuples to arrays.
///
/// Groups that were already consumed by the complex-number rule and groups
/// immediately preceded by an identifier (a function call, most likely)
/// are left alone.
fn rewrite_tuples(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut last_end = 0;

    for caps in PAREN_GROUP_RE.captures_iter(input) {
        let Some(m) = caps.get(0) else { continue };
        out.push_str(&input[last_end..m.start()]);
        last_end = m.end();

        let content = caps[1].trim().to_string();
        if content.is_empty() {
            out.push_str("[]");
            continue;
        }
        if m.as_str().contains("datetime")
            || COMPLEX_CONTENT_RE.is_match(&content)
            || IDENT_BEFORE_RE.is_match(&input[..m.start()])
        {
            out.push_str(m.as_str());
            continue;
        }
        if content.contains(',') || !contains_colon_outside_quotes(&content) {
            let elements: Vec<&str> = content
                .split(',')
                .map(str::trim)
                .filter(|el| !el.is_empty())
                .collect();
            out.push_str(&format!("[{}]", elements.join(", ")));
        } else {
            out.push_str(m.as_str());
        }
    }

    out.push_str(&input[last_end..]);
    out
}

/// Wraps unquoted identifier-like object keys in double quotes.
fn quote_bare_keys(input: &str) -> String {
    BARE_KEY_RE
        .replace_all(input, |caps: &Captures| {
            let key = &caps[2];
            if key.chars().all(|c| c.is_ascii_digit()) {
                return caps[0].to_string();
            }
            format!("{}\"{}\":", &caps[1], key)
        })
        .into_owned()
}

/// Removes trailing commas, collapses comma runs and whitespace runs.
fn cleanup_punctuation(input: &str) -> String {
    let s = TRAILING_COMMA_RE.replace_all(input, "${1}");
    let s = COMMA_RUN_RE.replace_all(&s, ",");
    WHITESPACE_RUN_RE.replace_all(&s, " ").into_owned()
}

/// Appends closers for any brackets still open at end of input.
///
/// Quoted substrings are skipped so brackets inside strings do not count.
fn balance_brackets(input: &str) -> String {
    let mut stack: Vec<char> = Vec::new();
    let mut in_string = false;
    let mut escaped = false;

    for c in input.chars() {
        if in_string {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                in_string = false;
            }
            continue;
        }
        match c {
            '"' => in_string = true,
            '{' => stack.push('}'),
            '[' => stack.push(']'),
            '}' | ']' => {
                if stack.last() == Some(&c) {
                    stack.pop();
                }
            }
            _ => {}
        }
    }

    let mut out = input.to_string();
    while let Some(closer) = stack.pop() {
        out.push(closer);
    }
    out
}

fn contains_colon_outside_quotes(content: &str) -> bool {
    let mut in_quotes = false;
    let mut quote_char = ' ';
    let mut prev = ' ';

    for c in content.chars() {
        if !in_quotes && (c == '"' || c == '\'') {
            in_quotes = true;
            quote_char = c;
        } else if in_quotes && c == quote_char && prev != '\\' {
            in_quotes = false;
        } else if !in_quotes && c == ':' {
            return true;
        }
        prev = c;
    }

    false
}

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let mut out: String = s.chars().take(max_chars).collect();
        out.push_str("...");
        out
    }
}
