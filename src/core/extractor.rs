// src/core/extractor.rs
//! Recovers a JSON object from raw model output
//!
//! Models often wrap their answer in Markdown fences or surround it with
//! prose. Recovery is limited to fence stripping and slicing the outermost
//! `{...}` span; malformed JSON inside that span is not repaired.

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ExtractError {
    #[error("response was empty")]
    Empty,

    #[error("no JSON object found in response")]
    NoJsonObject,

    #[error("response is not valid JSON: {0}")]
    Parse(String),

    #[error("JSON does not match the expected schema: {0}")]
    Schema(String),
}

/// Strip a leading ```json / ``` marker and a trailing ``` marker
fn strip_fences(text: &str) -> &str {
    let Some(rest) = text
        .strip_prefix("```json")
        .or_else(|| text.strip_prefix("```"))
    else {
        return text;
    };

    rest.trim_end()
        .strip_suffix("```")
        .unwrap_or(rest)
        .trim()
}

fn parse_object(text: &str) -> Result<Map<String, Value>, ExtractError> {
    match serde_json::from_str::<Value>(text) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(other) => Err(ExtractError::Parse(format!(
            "expected an object, found {}",
            json_kind(&other)
        ))),
        Err(e) => Err(ExtractError::Parse(e.to_string())),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Recover the JSON object contained in `raw`
pub fn extract_json(raw: &str) -> Result<Map<String, Value>, ExtractError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ExtractError::Empty);
    }

    let text = strip_fences(trimmed);
    if let Ok(map) = parse_object(text) {
        return Ok(map);
    }

    let (Some(start), Some(end)) = (text.find('{'), text.rfind('}')) else {
        return Err(ExtractError::NoJsonObject);
    };
    if end < start {
        return Err(ExtractError::NoJsonObject);
    }

    parse_object(&text[start..=end])
}

/// Recover the JSON object in `raw` and deserialize it into `T`
pub fn extract_typed<T: DeserializeOwned>(raw: &str) -> Result<T, ExtractError> {
    let map = extract_json(raw)?;
    serde_json::from_value(Value::Object(map)).map_err(|e| ExtractError::Schema(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => unreachable!("test fixture must be an object"),
        }
    }

    #[test]
    fn test_fenced_json() {
        assert_eq!(
            extract_json("```json\n{\"a\":1}\n```"),
            Ok(object(json!({"a": 1})))
        );
        assert_eq!(
            extract_json("```\n{\"a\":1}\n```"),
            Ok(object(json!({"a": 1})))
        );
    }

    #[test]
    fn test_json_surrounded_by_noise() {
        assert_eq!(
            extract_json("noise {\"a\":1} trailing"),
            Ok(object(json!({"a": 1})))
        );
        assert_eq!(
            extract_json("Sure! Here it is:\n```json\n{\"a\": {\"b\": [1, 2]}}\n```\nGood luck."),
            Ok(object(json!({"a": {"b": [1, 2]}})))
        );
    }

    #[test]
    fn test_not_json() {
        assert_eq!(extract_json("not json at all"), Err(ExtractError::NoJsonObject));
        assert_eq!(extract_json("   \n "), Err(ExtractError::Empty));
        assert_eq!(extract_json("} backwards {"), Err(ExtractError::NoJsonObject));
    }

    #[test]
    fn test_no_lenient_repair() {
        assert!(matches!(
            extract_json("{\"a\": 1,}"),
            Err(ExtractError::Parse(_))
        ));
        assert!(matches!(
            extract_json("{a: 1}"),
            Err(ExtractError::Parse(_))
        ));
    }

    #[test]
    fn test_top_level_must_be_object() {
        assert_eq!(extract_json("[1, 2, 3]"), Err(ExtractError::NoJsonObject));
        assert_eq!(
            extract_json("[{\"a\": 1}]"),
            Ok(object(json!({"a": 1})))
        );
    }

    #[test]
    fn test_unterminated_fence_still_parses() {
        assert_eq!(
            extract_json("```json\n{\"a\": true}"),
            Ok(object(json!({"a": true})))
        );
    }

    #[test]
    fn test_extract_typed_schema_mismatch() {
        #[derive(Debug, serde::Deserialize)]
        struct Needs {
            #[allow(dead_code)]
            value: u32,
        }

        assert!(extract_typed::<Needs>("{\"value\": 3}").is_ok());
        assert!(matches!(
            extract_typed::<Needs>("{\"other\": 3}"),
            Err(ExtractError::Schema(_))
        ));
    }
}
