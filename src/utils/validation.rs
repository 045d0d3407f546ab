use crate::utils::error::{ConfigError, Result};
use serde_json::{Map, Value};
use url::Url;

pub fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Builds the path of a list element, e.g. `urls[2]`.
pub fn index_path(field_name: &str, idx: usize) -> String {
    format!("{}[{}]", field_name, idx)
}

fn type_error(field_name: &str, expected: &'static str, value: &Value) -> ConfigError {
    ConfigError::Type {
        field: field_name.to_string(),
        expected,
        actual_type: type_name(value),
        actual_value: value.clone(),
    }
}

pub fn validate_object<'a>(field_name: &str, value: &'a Value) -> Result<&'a Map<String, Value>> {
    value
        .as_object()
        .ok_or_else(|| type_error(field_name, "object", value))
}

pub fn validate_string<'a>(field_name: &str, value: &'a Value) -> Result<&'a str> {
    value
        .as_str()
        .ok_or_else(|| type_error(field_name, "string", value))
}

pub fn validate_array<'a>(field_name: &str, value: &'a Value) -> Result<&'a [Value]> {
    value
        .as_array()
        .map(Vec::as_slice)
        .ok_or_else(|| type_error(field_name, "array", value))
}

/// Looks up a required key of the mapping `data`.
///
/// On absence the whole mapping is reported as the offending value.
pub fn validate_required_field<'a>(
    field_name: &str,
    data: &'a Value,
    key: &'static str,
) -> Result<&'a Value> {
    validate_object(field_name, data)?
        .get(key)
        .ok_or_else(|| ConfigError::Schema {
            field: field_name.to_string(),
            key,
            actual_value: data.clone(),
        })
}

/// Returns the trimmed string, rejecting whitespace-only input.
pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ConfigError::Value {
            field: field_name.to_string(),
            actual_value: Value::String(value.to_string()),
        });
    }
    Ok(trimmed.to_string())
}

/// Rejects a list that ended up empty after filtering; `original` is reported.
pub fn validate_non_empty_list<T>(field_name: &str, items: Vec<T>, original: &Value) -> Result<Vec<T>> {
    if items.is_empty() {
        return Err(ConfigError::Value {
            field: field_name.to_string(),
            actual_value: original.clone(),
        });
    }
    Ok(items)
}

/// Type-checks every element of an array as a string, returning the raw slices.
pub fn validate_string_items<'a>(field_name: &str, items: &'a [Value]) -> Result<Vec<&'a str>> {
    items
        .iter()
        .enumerate()
        .map(|(idx, item)| validate_string(&index_path(field_name, idx), item))
        .collect()
}

/// Accepts absolute `http` and `https` URLs only.
pub fn validate_url(field_name: &str, url_str: &str) -> Result<Url> {
    let invalid = || ConfigError::Value {
        field: field_name.to_string(),
        actual_value: Value::String(url_str.to_string()),
    };

    let url = Url::parse(url_str).map_err(|_| invalid())?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        _ => Err(invalid()),
    }
}

/// Parses every element of a nested collection with `parse`.
///
/// A non-object element fails with a type error at its index. A child
/// validation failure is wrapped so the outer error names the index and the
/// raw element, keeping the child error as its source.
pub fn validate_items<T, F>(field_name: &str, items: &[Value], parse: F) -> Result<Vec<T>>
where
    F: Fn(&Value) -> Result<T>,
{
    items
        .iter()
        .enumerate()
        .map(|(idx, item)| {
            let path = index_path(field_name, idx);
            validate_object(&path, item)?;
            parse(item).map_err(|e| ConfigError::Nested {
                field: path,
                actual_value: item.clone(),
                source: Box::new(e),
            })
        })
        .collect()
}
