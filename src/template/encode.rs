//! # Encoding Pipeline
//!
//! Converts runtime data into the device code page before it reaches the
//! template. Only strings are converted; the bytes produced by commands never
//! pass through here, so escape sequences cannot be re-encoded.

use serde_json::{Map, Value};

use super::fragment;
use crate::error::Result;
use crate::protocol::codepage::CodePage;

/// Encode a Unicode string into a byte-carrying string for `code_page`.
pub fn encode_str(code_page: CodePage, s: &str) -> Result<String> {
    code_page.encode(s).map(|bytes| fragment::from_bytes(&bytes))
}

/// Encode every string inside `value`.
///
/// Arrays keep their order and length, objects keep all their keys (keys
/// themselves are not encoded), and numbers, booleans and null pass through.
///
/// ## Example
///
/// ```
/// use etp::protocol::codepage::CodePage;
/// use etp::template::encode::encode_value;
/// use serde_json::json;
///
/// let encoded = encode_value(CodePage::Pc852, &json!({"name": "č", "qty": 2}))?;
/// assert_eq!(encoded, json!({"name": "\u{e09f}", "qty": 2}));
/// # Ok::<(), etp::EtpError>(())
/// ```
pub fn encode_value(code_page: CodePage, value: &Value) -> Result<Value> {
    let encoded = match value {
        Value::String(s) => Value::String(encode_str(code_page, s)?),
        Value::Array(items) => Value::Array(
            items
                .iter()
                .map(|item| encode_value(code_page, item))
                .collect::<Result<Vec<_>>>()?,
        ),
        Value::Object(map) => Value::Object(
            map.iter()
                .map(|(key, item)| Ok((key.clone(), encode_value(code_page, item)?)))
                .collect::<Result<Map<String, Value>>>()?,
        ),
        other => other.clone(),
    };
    Ok(encoded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EtpError;
    use serde_json::json;

    #[test]
    fn test_scalars_pass_through() {
        for value in [json!(null), json!(true), json!(42), json!(-1.5)] {
            assert_eq!(encode_value(CodePage::Pc852, &value).unwrap(), value);
        }
    }

    #[test]
    fn test_nested_structures() {
        let data = json!({
            "shop": "Žabka",
            "items": [{"name": "rohlík", "price": 3}, "čaj"],
            "nested": {"deep": ["ř"]}
        });
        let encoded = encode_value(CodePage::Pc852, &data).unwrap();
        assert_eq!(
            encoded,
            json!({
                "shop": "\u{e0a6}abka",
                "items": [{"name": "rohl\u{e0a1}k", "price": 3}, "\u{e09f}aj"],
                "nested": {"deep": ["\u{e0fd}"]}
            })
        );
    }

    #[test]
    fn test_keys_preserved() {
        let data = json!({"názov": "x", "b": "y"});
        let encoded = encode_value(CodePage::Pc852, &data).unwrap();
        let keys: Vec<_> = encoded.as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys.len(), 2);
        assert!(keys.contains(&"názov".to_string()));
    }

    #[test]
    fn test_unmappable_char_fails() {
        let data = json!({"items": ["ok", "★"]});
        let err = encode_value(CodePage::Pc852, &data).unwrap_err();
        assert!(matches!(err, EtpError::Encoding { ch: '★', .. }));
    }
}
