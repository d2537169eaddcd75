//! Strict JSON parsing for strings, files, and stdin.
//!
//! This module is the non-tolerant half of the input layer: it parses
//! well-formed JSON into the [`Value`](crate::tree::Value) tree. Inputs that
//! may contain Python literal syntax go through [`crate::flex`] instead;
//! composing the two (try strict, fall back to flexible) is the caller's
//! responsibility.
//!
//! # Examples
//!
//! ```
//! use jsoncmp::parser::parse_json;
//!
//! let value = parse_json(r#"{"name": "Alice", "age": 30}"#).unwrap();
//! assert_eq!(value.type_name(), "object");
//! ```

use crate::error::ParseError;
use crate::tree::Value;
use std::fs;
use std::io::Read;
use std::path::Path;

/// Parses a JSON string into a Value.
///
/// # Errors
///
/// Returns the underlying `serde_json::Error` when the input is not valid
/// JSON.
pub fn parse_json(content: &str) -> Result<Value, serde_json::Error> {
    let value: serde_json::Value = serde_json::from_str(content)?;
    Ok(Value::from(value))
}

/// Parses a JSON file into a Value.
///
/// # Errors
///
/// This function will return an error if:
/// - The file does not exist (`ParseError::FileNotFound`)
/// - The file cannot be read (`ParseError::ReadError`)
/// - The file contains invalid JSON (`ParseError::JsonError`)
pub fn parse_file(path: &Path) -> Result<Value, ParseError> {
    if !path.exists() {
        return Err(ParseError::file_not_found(
            path.to_string_lossy().to_string(),
        ));
    }

    let content = fs::read_to_string(path)
        .map_err(|e| ParseError::read_error(path.to_string_lossy().to_string(), e))?;

    parse_json(&content)
        .map_err(|e| ParseError::json_error(path.to_string_lossy().to_string(), e))
}

/// Reads stdin to end and parses it as JSON.
///
/// # Errors
///
/// Returns `ParseError::ReadError` when stdin cannot be read and
/// `ParseError::JsonError` when the content is not valid JSON.
pub fn parse_stdin() -> Result<Value, ParseError> {
    let mut content = String::new();
    std::io::stdin()
        .read_to_string(&mut content)
        .map_err(|e| ParseError::read_error("<stdin>", e))?;
    parse_json(&content).map_err(|e| ParseError::json_error("<stdin>", e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_json_primitives() {
        assert_eq!(parse_json("null").unwrap(), Value::Null);
        assert_eq!(parse_json("true").unwrap(), Value::Bool(true));
        assert_eq!(parse_json("false").unwrap(), Value::Bool(false));
        assert_eq!(parse_json("42").unwrap(), Value::Number(42.0));
        assert_eq!(parse_json("3.15").unwrap(), Value::Number(3.15));
        assert_eq!(
            parse_json(r#""hello""#).unwrap(),
            Value::String("hello".to_string())
        );
    }

    #[test]
    fn test_parse_json_array() {
        let node = parse_json("[1, 2, 3]").unwrap();
        match node {
            Value::Array(arr) => {
                assert_eq!(arr.len(), 3);
                assert_eq!(arr[0], Value::Number(1.0));
                assert_eq!(arr[2], Value::Number(3.0));
            }
            _ => panic!("Expected array"),
        }
    }

    #[test]
    fn test_parse_json_object_keeps_order() {
        let node = parse_json(r#"{"zeta": 1, "alpha": 2}"#).unwrap();
        let keys: Vec<&String> = node.as_object().unwrap().keys().collect();
        assert_eq!(keys, vec!["zeta", "alpha"]);
    }

    #[test]
    fn test_parse_json_nested() {
        let node = parse_json(r#"{"user": {"name": "Bob", "scores": [10, 20]}}"#).unwrap();
        let user = node.as_object().unwrap().get("user").unwrap();
        let scores = user.as_object().unwrap().get("scores").unwrap();
        assert_eq!(scores.as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_parse_json_invalid() {
        assert!(parse_json("{invalid json}").is_err());
        assert!(parse_json("[1, 2,]").is_err());
        assert!(parse_json("{'single': 'quotes'}").is_err());
    }

    #[test]
    fn test_parse_file_json() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, r#"{{"key": "value"}}"#).unwrap();
        let path = file.path().with_extension("json");
        fs::copy(file.path(), &path).unwrap();

        let node = parse_file(&path).unwrap();
        assert_eq!(
            node.as_object().unwrap().get("key").unwrap(),
            &Value::String("value".to_string())
        );

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_parse_file_not_found() {
        let result = parse_file(Path::new("/nonexistent/file.json"));
        match result.unwrap_err() {
            ParseError::FileNotFound { .. } => {}
            other => panic!("Expected FileNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_file_invalid_json() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "not json at all").unwrap();
        let path = file.path().with_extension("json");
        fs::copy(file.path(), &path).unwrap();

        match parse_file(&path).unwrap_err() {
            ParseError::JsonError { .. } => {}
            other => panic!("Expected JsonError, got {:?}", other),
        }

        fs::remove_file(&path).unwrap();
    }
}
