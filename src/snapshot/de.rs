//! Lenient string fields for hand-written snapshot files.

use serde::Deserialize;
use serde::de;
use serde_json::Value;

/// Deserialize a snapshot field as the string the user meant.
///
/// - null (`~`, `null`) is no override: `""`
/// - numbers and booleans keep their literal text
/// - a sequence of strings is folded back into bracket form, so
///   `[LOCAL_SOURCE_CACHE, LOCAL_CUSTOM_CACHE]` written unquoted in YAML
///   reads as `"[LOCAL_SOURCE_CACHE,LOCAL_CUSTOM_CACHE]"`
pub(super) fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(String::new()),
        Value::String(value) => Ok(value),
        Value::Number(value) => Ok(value.to_string()),
        Value::Bool(value) => Ok(value.to_string()),
        Value::Array(items) => {
            let mut tokens = Vec::with_capacity(items.len());
            for item in items {
                match item {
                    Value::String(token) => tokens.push(token),
                    _ => {
                        return Err(de::Error::custom(
                            "list values must be strings; quote the whole value, e.g. \"[A,B]\"",
                        ));
                    }
                }
            }
            Ok(format!("[{}]", tokens.join(",")))
        }
        Value::Object(_) => Err(de::Error::custom(
            "expected a string, number, boolean or list of strings",
        )),
    }
}
