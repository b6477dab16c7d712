use serde_json::Value;

mod star;

pub use star::*;

// GitHub sends a lot more than this, and senders aren't trusted to get the types right: payloads
// are kept as raw JSON values and only looked at where needed.

/// Whether `value` counts as present: `null`, `false`, `0` and `""` don't.
pub(crate) fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// The string stored under `key`, if `value` is an object holding one.
pub(crate) fn string_field(value: &Value, key: &str) -> Option<String> {
    value.get(key).and_then(Value::as_str).map(str::to_owned)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn presence() {
        assert!(is_present(&json!({})));
        assert!(is_present(&json!("widgets")));
        assert!(is_present(&json!(1)));
        assert!(!is_present(&json!(null)));
        assert!(!is_present(&json!("")));
        assert!(!is_present(&json!(0)));
        assert!(!is_present(&json!(false)));
    }

    #[test]
    fn string_fields() {
        assert_eq!(
            string_field(&json!({ "name": "widgets" }), "name").as_deref(),
            Some("widgets")
        );
        assert_eq!(string_field(&json!({ "name": 3 }), "name"), None);
        assert_eq!(string_field(&json!("widgets"), "name"), None);
    }
}
