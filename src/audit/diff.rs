//! Diff generation for audit logging
//!
//! Summarises which top-level fields changed between two snapshots of a
//! record, e.g. `amount: 100000 -> 150000, allocation: 10 -> 15`.

use serde::Serialize;
use serde_json::Value;

/// Longest string value shown verbatim in a diff
const MAX_STRING_LEN: usize = 40;

/// Diff two serializable records field by field
pub fn diff_records<T: Serialize>(before: &T, after: &T) -> Option<String> {
    let before = serde_json::to_value(before).ok()?;
    let after = serde_json::to_value(after).ok()?;
    generate_diff(&before, &after)
}

/// Generate a human-readable diff between two JSON values
///
/// Only top-level object fields are compared. Returns `None` when nothing
/// changed.
pub fn generate_diff(before: &Value, after: &Value) -> Option<String> {
    let changes = match (before, after) {
        (Value::Object(before_obj), Value::Object(after_obj)) => {
            let mut changes = Vec::new();

            for (key, before_val) in before_obj {
                match after_obj.get(key) {
                    Some(after_val) if after_val != before_val => changes.push(format!(
                        "{}: {} -> {}",
                        key,
                        format_value(before_val),
                        format_value(after_val)
                    )),
                    Some(_) => {}
                    None => changes.push(format!("{}: {} -> (removed)", key, format_value(before_val))),
                }
            }

            for (key, after_val) in after_obj {
                if !before_obj.contains_key(key) {
                    changes.push(format!("{}: (added) -> {}", key, format_value(after_val)));
                }
            }

            changes
        }
        _ if before != after => vec![format!("{} -> {}", format_value(before), format_value(after))],
        _ => Vec::new(),
    };

    if changes.is_empty() {
        None
    } else {
        Some(changes.join(", "))
    }
}

fn format_value(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) if s.chars().count() > MAX_STRING_LEN => {
            let head: String = s.chars().take(MAX_STRING_LEN - 3).collect();
            format!("\"{}...\"", head)
        }
        Value::String(s) => format!("\"{}\"", s),
        Value::Array(arr) => format!("[{} items]", arr.len()),
        Value::Object(obj) => format!("{{{} fields}}", obj.len()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EmergencyFund, Money};
    use serde_json::json;

    #[test]
    fn test_simple_field_change() {
        let before = json!({"target": 1000, "allocation": 10});
        let after = json!({"target": 1500, "allocation": 10});

        let diff = generate_diff(&before, &after).unwrap();
        assert_eq!(diff, "target: 1000 -> 1500");
    }

    #[test]
    fn test_field_added_and_removed() {
        let before = json!({"name": "Test", "old": "value"});
        let after = json!({"name": "Test", "saved": 100});

        let diff = generate_diff(&before, &after).unwrap();
        assert!(diff.contains("old: \"value\" -> (removed)"));
        assert!(diff.contains("saved: (added) -> 100"));
    }

    #[test]
    fn test_no_changes() {
        let value = json!({"amount": 100});
        assert!(generate_diff(&value, &value).is_none());
    }

    #[test]
    fn test_diff_records() {
        let before = EmergencyFund::default();
        let after = EmergencyFund {
            target: Money::from_units(5000),
            ..EmergencyFund::default()
        };

        let diff = diff_records(&before, &after).unwrap();
        assert_eq!(diff, "target: 0 -> 500000");
    }

    #[test]
    fn test_long_string_truncation() {
        let before = json!({"name": "é".repeat(100)});
        let after = json!({"name": "short"});

        let diff = generate_diff(&before, &after).unwrap();
        assert!(diff.contains("...\""));
    }
}
