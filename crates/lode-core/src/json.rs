//! JSON rendering of evaluated literals.
//!
//! `serde_json` is built with `preserve_order`, so object keys come out in
//! source declaration order. Integral numbers render without a fractional
//! part, matching `JSON.stringify`.

use serde_json::{Map, Number, Value};

use crate::errors::JsonError;
use crate::eval::LiteralValue;

const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// Convert an evaluated literal into a `serde_json` value.
pub fn to_json(value: &LiteralValue) -> Result<Value, JsonError> {
    match value {
        LiteralValue::Null => Ok(Value::Null),
        LiteralValue::Bool(b) => Ok(Value::Bool(*b)),
        LiteralValue::Number(n) => number_to_json(*n),
        LiteralValue::String(s) => Ok(Value::String(s.clone())),
        LiteralValue::Array(items) => items
            .iter()
            .map(to_json)
            .collect::<Result<Vec<_>, _>>()
            .map(Value::Array),
        LiteralValue::Object(entries) => {
            let mut map = Map::with_capacity(entries.len());
            for (key, entry) in entries {
                map.insert(key.clone(), to_json(entry)?);
            }
            Ok(Value::Object(map))
        }
    }
}

/// Render the value as a single compact line.
pub fn render(value: &LiteralValue) -> Result<String, JsonError> {
    let json = to_json(value)?;
    serde_json::to_string(&json).map_err(|e| JsonError::Render {
        message: e.to_string(),
    })
}

fn number_to_json(n: f64) -> Result<Value, JsonError> {
    if !n.is_finite() {
        return Err(JsonError::NonFinite { value: n });
    }
    if n.fract() == 0.0 && n.abs() <= MAX_SAFE_INTEGER {
        return Ok(Value::Number(Number::from(n as i64)));
    }
    Number::from_f64(n)
        .map(Value::Number)
        .ok_or(JsonError::NonFinite { value: n })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integral_numbers_have_no_fraction() {
        assert_eq!(render(&LiteralValue::Number(1.0)).unwrap(), "1");
        assert_eq!(render(&LiteralValue::Number(-0.0)).unwrap(), "0");
        assert_eq!(render(&LiteralValue::Number(2.5)).unwrap(), "2.5");
    }

    #[test]
    fn non_finite_numbers_are_rejected() {
        let err = render(&LiteralValue::Number(f64::INFINITY)).unwrap_err();
        assert!(matches!(err, JsonError::NonFinite { .. }));
        let err = render(&LiteralValue::Number(f64::NAN)).unwrap_err();
        assert!(matches!(err, JsonError::NonFinite { .. }));
    }

    #[test]
    fn object_key_order_is_preserved() {
        let value = LiteralValue::Object(vec![
            ("z".to_string(), LiteralValue::Number(1.0)),
            ("a".to_string(), LiteralValue::Number(2.0)),
        ]);
        assert_eq!(render(&value).unwrap(), r#"{"z":1,"a":2}"#);
    }
}
