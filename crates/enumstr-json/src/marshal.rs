//! Byte-level JSON encoding of enumerated values.
//!
//! Every value travels as one JSON string holding its canonical name.
//! Anything else on the wire (numbers, objects, `null`) is rejected before
//! the table is consulted.

use crate::error::{JsonError, Result};
use enumstr_core::{Enum, EnumDefault};
use serde_json::Value;
use tracing::debug;

/// Encode `value` as a JSON string literal.
pub fn marshal_json<E>(table: &E, value: &E::Value) -> Result<Vec<u8>>
where
    E: Enum + ?Sized,
{
    let text = table.format(value)?;
    Ok(serde_json::to_vec(text)?)
}

/// Decode a JSON string literal into a value of the table.
pub fn unmarshal_json<E>(table: &E, bytes: &[u8]) -> Result<E::Value>
where
    E: Enum + ?Sized,
{
    let text = decode_str(bytes)?;
    Ok(table.parse(&text)?)
}

/// Decode into `out`, leaving it untouched on error.
pub fn unmarshal_json_into<E>(table: &E, bytes: &[u8], out: &mut E::Value) -> Result<()>
where
    E: Enum + ?Sized,
{
    *out = unmarshal_json(table, bytes)?;
    Ok(())
}

/// Encode `value`, or the table's default when `value` is unknown.
pub fn marshal_json_default<E>(table: &E, value: &E::Value) -> Result<Vec<u8>>
where
    E: EnumDefault + ?Sized,
{
    Ok(serde_json::to_vec(table.format(value))?)
}

/// Decode a JSON string literal; unknown strings yield the default.
///
/// Still fails for malformed JSON and for JSON that is not a string.
pub fn unmarshal_json_default<E>(table: &E, bytes: &[u8]) -> Result<E::Value>
where
    E: EnumDefault + ?Sized,
{
    let text = decode_str(bytes)?;
    Ok(table.parse(&text))
}

pub fn unmarshal_json_default_into<E>(table: &E, bytes: &[u8], out: &mut E::Value) -> Result<()>
where
    E: EnumDefault + ?Sized,
{
    *out = unmarshal_json_default(table, bytes)?;
    Ok(())
}

fn decode_str(bytes: &[u8]) -> Result<String> {
    match serde_json::from_slice::<Value>(bytes)? {
        Value::String(text) => Ok(text),
        other => {
            let found = kind(&other);
            debug!(found, "enumerated JSON value is not a string");
            Err(JsonError::NotAString { found })
        }
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use enumstr_core::{EnumError, IndexEnum, IndexEnumDefault};

    fn fruit() -> IndexEnum {
        IndexEnum::new(["naners", "apps", "tots"])
    }

    fn mode() -> IndexEnumDefault {
        IndexEnumDefault::new(0, ["invalid", "go", "stop", "potato"])
    }

    #[test]
    fn test_marshal_json() {
        assert_eq!(marshal_json(&fruit(), &2).unwrap(), br#""tots""#);
    }

    #[test]
    fn test_marshal_json_unknown() {
        let err = marshal_json(&fruit(), &100).unwrap_err();
        assert!(matches!(err, JsonError::Enum(EnumError::UnknownValue)));
        assert!(err.is_unknown());
    }

    #[test]
    fn test_marshal_json_escapes() {
        let table: IndexEnum = IndexEnum::new(["say \"hi\""]);
        assert_eq!(marshal_json(&table, &0).unwrap(), br#""say \"hi\"""#);
    }

    #[test]
    fn test_unmarshal_json() {
        assert_eq!(unmarshal_json(&fruit(), br#""apps""#).unwrap(), 1);
    }

    #[test]
    fn test_unmarshal_json_unknown_string() {
        let err = unmarshal_json(&fruit(), br#""blah""#).unwrap_err();
        assert!(err.is_unknown());
        assert_eq!(err.to_string(), r#"unknown string: "blah""#);
    }

    #[test]
    fn test_unmarshal_json_not_a_string() {
        let err = unmarshal_json(&fruit(), b"123").unwrap_err();
        assert!(matches!(err, JsonError::NotAString { found: "number" }));
        assert!(!err.is_unknown());

        let err = unmarshal_json(&fruit(), b"null").unwrap_err();
        assert!(matches!(err, JsonError::NotAString { found: "null" }));
    }

    #[test]
    fn test_unmarshal_json_malformed() {
        let err = unmarshal_json(&fruit(), br#""tots"#).unwrap_err();
        assert!(matches!(err, JsonError::Malformed(_)));
    }

    #[test]
    fn test_unmarshal_json_into_leaves_output_on_error() {
        let mut out = 2usize;
        assert!(unmarshal_json_into(&fruit(), br#""nope""#, &mut out).is_err());
        assert_eq!(out, 2);

        unmarshal_json_into(&fruit(), br#""naners""#, &mut out).unwrap();
        assert_eq!(out, 0);
    }

    #[test]
    fn test_marshal_json_default() {
        assert_eq!(marshal_json_default(&mode(), &3).unwrap(), br#""potato""#);
        assert_eq!(marshal_json_default(&mode(), &0).unwrap(), br#""invalid""#);
        assert_eq!(marshal_json_default(&mode(), &77).unwrap(), br#""invalid""#);
    }

    #[test]
    fn test_unmarshal_json_default() {
        assert_eq!(unmarshal_json_default(&mode(), br#""potato""#).unwrap(), 3);
        assert_eq!(unmarshal_json_default(&mode(), br#""blast off""#).unwrap(), 0);
        assert!(matches!(
            unmarshal_json_default(&mode(), b"123").unwrap_err(),
            JsonError::NotAString { .. }
        ));
    }

    #[test]
    fn test_unmarshal_json_default_into() {
        let mut out = 1usize;
        unmarshal_json_default_into(&mode(), br#""stop""#, &mut out).unwrap();
        assert_eq!(out, 2);
        unmarshal_json_default_into(&mode(), br#""???""#, &mut out).unwrap();
        assert_eq!(out, 0);
    }
}
