//! Query parameter sanitization for record operations.
//!
//! SuiteTalk query strings mix machine-generated values (paging, flags)
//! with the free-form `q` search expression. The sanitizer turns a loose
//! JSON map into wire-ready pairs: scalars are percent-encoded, `q` is
//! passed through untouched so its operators survive, and anything that
//! cannot appear in a query string is dropped.

use serde_json::{Map, Value};

/// Converts a JSON parameter map into wire-ready query pairs.
///
/// Rules, per entry:
/// - the `q` key: a string value passes through unescaped, `null` drops
///   the entry, other scalars pass through in plain string form, and
///   arrays or objects drop the entry;
/// - booleans become `"true"` / `"false"`;
/// - `null` keeps the entry with an empty value;
/// - numbers and strings are percent-encoded (RFC 3986 unreserved set);
/// - arrays and objects drop the entry.
///
/// Keys are always percent-encoded. Entries are emitted in the map's
/// iteration order. The output is final wire form: the transport appends
/// these pairs to the URL without further encoding.
///
/// # Example
///
/// ```rust
/// use netsuite_suitetalk::resources::sanitize_query_params;
/// use serde_json::json;
///
/// let params = json!({
///     "q": "email IS bob@example.com",
///     "limit": 50,
///     "expandSubResources": true,
/// });
/// let pairs = sanitize_query_params(params.as_object().unwrap());
///
/// assert_eq!(
///     pairs,
///     vec![
///         ("expandSubResources".to_string(), "true".to_string()),
///         ("limit".to_string(), "50".to_string()),
///         ("q".to_string(), "email IS bob@example.com".to_string()),
///     ]
/// );
/// ```
#[must_use]
pub fn sanitize_query_params(params: &Map<String, Value>) -> Vec<(String, String)> {
    let mut pairs = Vec::new();

    for (key, value) in params {
        if key == "q" {
            // The search expression is forwarded raw; escaping it would
            // corrupt its operators.
            match value {
                Value::String(s) => pairs.push((encode(key), s.clone())),
                Value::Bool(b) => pairs.push((encode(key), b.to_string())),
                Value::Number(n) => pairs.push((encode(key), n.to_string())),
                Value::Null | Value::Array(_) | Value::Object(_) => {}
            }
            continue;
        }

        match value {
            Value::Bool(b) => pairs.push((encode(key), b.to_string())),
            Value::Null => pairs.push((encode(key), String::new())),
            Value::String(s) => pairs.push((encode(key), encode(s))),
            Value::Number(n) => pairs.push((encode(key), encode(&n.to_string()))),
            Value::Array(_) | Value::Object(_) => {}
        }
    }

    pairs
}

fn encode(input: &str) -> String {
    urlencoding::encode(input).into_owned()
}
