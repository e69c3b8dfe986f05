// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Text forms of numbers and attribute values

use serde_json::Value;

/// Fixed-point with exactly three fractional digits
#[inline]
pub fn fixed3(v: f64) -> String {
    format!("{:.3}", v)
}

/// `x y z` as written in `gml:pos` and envelope corners
pub fn position(p: [f64; 3]) -> String {
    format!("{:.3} {:.3} {:.3}", p[0], p[1], p[2])
}

/// Natural textual form of an attribute value.
///
/// Strings are verbatim, every number is fixed-point with three decimals,
/// booleans are `true`/`false`, null is empty, and arrays/objects fall back
/// to compact JSON.
pub fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.as_f64().map(fixed3).unwrap_or_else(|| n.to_string()),
        Value::Bool(b) => b.to_string(),
        Value::Null => String::new(),
        Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_fixed3() {
        assert_eq!(fixed3(1.0), "1.000");
        assert_eq!(fixed3(84710.1234), "84710.123");
        assert_eq!(fixed3(0.0006), "0.001");
        assert_eq!(fixed3(-2.5), "-2.500");
    }

    #[test]
    fn test_position() {
        assert_eq!(position([1.0, 2.25, 3.0]), "1.000 2.250 3.000");
    }

    #[test]
    fn test_value_text() {
        assert_eq!(value_text(&json!("Delft")), "Delft");
        assert_eq!(value_text(&json!(12)), "12.000");
        assert_eq!(value_text(&json!(3.14159)), "3.142");
        assert_eq!(value_text(&json!(true)), "true");
        assert_eq!(value_text(&Value::Null), "");
        assert_eq!(value_text(&json!([1, 2])), "[1,2]");
    }
}
