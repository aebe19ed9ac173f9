//! serde adapters for implementing `Serialize` / `Deserialize` against a
//! table.
//!
//! A consumer type forwards its impls here, which also makes it usable as
//! a field of any derived struct:
//!
//! ```rust
//! use enumstr_core::IndexEnum;
//! use serde::{Deserialize, Deserializer, Serialize, Serializer};
//!
//! #[derive(Clone, Copy, Debug, PartialEq)]
//! struct Level(u8);
//!
//! impl enumstr_core::EnumIndex for Level {
//!     fn to_index(self) -> Option<usize> {
//!         Some(self.0 as usize)
//!     }
//!     fn from_index(index: usize) -> Option<Self> {
//!         u8::try_from(index).ok().map(Level)
//!     }
//! }
//!
//! fn levels() -> IndexEnum<Level> {
//!     IndexEnum::new(["low", "high"])
//! }
//!
//! impl Serialize for Level {
//!     fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
//!         enumstr_json::serialize(&levels(), self, serializer)
//!     }
//! }
//!
//! impl<'de> Deserialize<'de> for Level {
//!     fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
//!         enumstr_json::deserialize(&levels(), deserializer)
//!     }
//! }
//!
//! assert_eq!(serde_json::to_string(&Level(1)).unwrap(), r#""high""#);
//! assert_eq!(serde_json::from_str::<Level>(r#""low""#).unwrap(), Level(0));
//! ```

use enumstr_core::{Enum, EnumDefault};
use serde::de::{Error as _, Unexpected};
use serde::ser::Error as _;
use serde::{Deserialize, Deserializer, Serializer};

const EXPECTED: &str = "a known enumerated string";

/// Serialize `value` as its canonical string; unknown values are errors.
pub fn serialize<E, S>(table: &E, value: &E::Value, serializer: S) -> Result<S::Ok, S::Error>
where
    E: Enum + ?Sized,
    S: Serializer,
{
    let text = table.format(value).map_err(S::Error::custom)?;
    serializer.serialize_str(text)
}

/// Deserialize a canonical string; unknown strings are errors.
pub fn deserialize<'de, E, D>(table: &E, deserializer: D) -> Result<E::Value, D::Error>
where
    E: Enum + ?Sized,
    D: Deserializer<'de>,
{
    let text = String::deserialize(deserializer)?;
    table
        .parse(&text)
        .map_err(|_| D::Error::invalid_value(Unexpected::Str(&text), &EXPECTED))
}

pub fn serialize_default<E, S>(table: &E, value: &E::Value, serializer: S) -> Result<S::Ok, S::Error>
where
    E: EnumDefault + ?Sized,
    S: Serializer,
{
    serializer.serialize_str(table.format(value))
}

/// Deserialize a canonical string; unknown strings become the default.
/// Non-string input is still an error.
pub fn deserialize_default<'de, E, D>(table: &E, deserializer: D) -> Result<E::Value, D::Error>
where
    E: EnumDefault + ?Sized,
    D: Deserializer<'de>,
{
    let text = String::deserialize(deserializer)?;
    Ok(table.parse(&text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use enumstr_core::{MapEnum, MapEnumDefault};
    use serde_json::json;

    fn colors() -> MapEnum<u32> {
        MapEnum::new([(0xff0000, "red"), (0x00ff00, "green")])
    }

    #[test]
    fn test_serialize_to_value() {
        let value = serialize(&colors(), &0xff0000, serde_json::value::Serializer).unwrap();
        assert_eq!(value, json!("red"));
    }

    #[test]
    fn test_serialize_unknown_fails() {
        let err = serialize(&colors(), &1, serde_json::value::Serializer).unwrap_err();
        assert_eq!(err.to_string(), "unknown value");
    }

    #[test]
    fn test_deserialize_from_value() {
        assert_eq!(deserialize(&colors(), json!("green")).unwrap(), 0x00ff00);
    }

    #[test]
    fn test_deserialize_unknown_fails() {
        let err = deserialize(&colors(), json!("blue")).unwrap_err();
        assert!(err.to_string().contains("blue"));
    }

    #[test]
    fn test_deserialize_number_fails() {
        assert!(deserialize(&colors(), json!(123)).is_err());
    }

    #[test]
    fn test_default_adapters() {
        let table = MapEnumDefault::new(0, [(0u32, "black"), (0xffffff, "white")]);
        let value = serialize_default(&table, &7, serde_json::value::Serializer).unwrap();
        assert_eq!(value, json!("black"));
        assert_eq!(deserialize_default(&table, json!("white")).unwrap(), 0xffffff);
        assert_eq!(deserialize_default(&table, json!("grey")).unwrap(), 0);
        assert!(deserialize_default(&table, json!(false)).is_err());
    }
}
