//! Integration tests for JSON encoding of enumerated values.
//!
//! These tests verify:
//! - Associative tables over record values encode to exactly their string
//! - Unknown values fail to encode; unknown strings fail to decode
//! - Default-backed types decode unknown strings to the default
//! - Non-string JSON is rejected in every mode
//! - Consumer types work as fields of derived structs

use enumstr_core::{Enum, EnumDefault, EnumIndex, IndexEnum, MapEnum, MapEnumDefault};
use enumstr_json::{
    marshal_json, marshal_json_default, unmarshal_json, unmarshal_json_default, JsonError,
};
use once_cell::sync::Lazy;
use proptest::prelude::*;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// REST operations keyed by a three-field record.
mod rest {
    use super::*;

    #[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Rest {
        pub host: &'static str,
        pub method: &'static str,
        pub resource: &'static str,
    }

    pub const PUPPY_CREATE: Rest = Rest {
        host: "http://example.com",
        method: "POST",
        resource: "/puppy",
    };
    pub const PUPPY_DELETE: Rest = Rest {
        host: "http://example.com",
        method: "DELETE",
        resource: "/puppy/:id",
    };
    pub const PUPPY_SHOW: Rest = Rest {
        host: "http://example.com",
        method: "GET",
        resource: "/puppy/:id",
    };
    pub const PUPPY_UPDATE: Rest = Rest {
        host: "http://example.com",
        method: "PUT",
        resource: "/puppy/:id",
    };

    impl Rest {
        pub fn table() -> &'static MapEnum<Rest> {
            static TABLE: Lazy<MapEnum<Rest>> = Lazy::new(|| {
                MapEnum::new([
                    (PUPPY_CREATE, "Puppy CREATE"),
                    (PUPPY_DELETE, "Puppy DELETE"),
                    (PUPPY_SHOW, "Puppy SHOW"),
                    (PUPPY_UPDATE, "Puppy UPDATE"),
                ])
            });
            &TABLE
        }

        pub fn to_json(&self) -> enumstr_json::Result<Vec<u8>> {
            marshal_json(Rest::table(), self)
        }

        pub fn from_json(bytes: &[u8]) -> enumstr_json::Result<Rest> {
            unmarshal_json(Rest::table(), bytes)
        }
    }
}

/// MIME types with an "invalid" default.
mod mime {
    use super::*;

    #[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Mime {
        pub name: &'static str,
        pub ext: &'static str,
    }

    pub const INVALID: Mime = Mime {
        name: "invalid/mime",
        ext: "",
    };
    pub const JSON: Mime = Mime {
        name: "application/json",
        ext: ".json",
    };
    pub const CSV: Mime = Mime {
        name: "text/csv",
        ext: ".csv",
    };
    pub const XML: Mime = Mime {
        name: "text/xml",
        ext: ".xml",
    };

    impl Mime {
        pub fn table() -> &'static MapEnumDefault<Mime> {
            static TABLE: Lazy<MapEnumDefault<Mime>> = Lazy::new(|| {
                MapEnumDefault::new(
                    INVALID,
                    [
                        (INVALID, "INVALID"),
                        (JSON, "JSON"),
                        (CSV, "CSV"),
                        (XML, "XML"),
                    ],
                )
            });
            &TABLE
        }
    }

    impl Serialize for Mime {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            enumstr_json::serialize_default(Mime::table(), self, serializer)
        }
    }

    impl<'de> Deserialize<'de> for Mime {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            enumstr_json::deserialize_default(Mime::table(), deserializer)
        }
    }
}

/// Strict sequential table used as a struct field.
mod fruit {
    use super::*;

    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub enum Fruit {
        Banana,
        Apple,
        Potato,
    }

    impl EnumIndex for Fruit {
        fn to_index(self) -> Option<usize> {
            Some(self as usize)
        }

        fn from_index(index: usize) -> Option<Self> {
            [Fruit::Banana, Fruit::Apple, Fruit::Potato].get(index).copied()
        }
    }

    impl Fruit {
        pub fn table() -> &'static IndexEnum<Fruit> {
            static TABLE: Lazy<IndexEnum<Fruit>> =
                Lazy::new(|| IndexEnum::new(["naners", "apps", "tots"]));
            &TABLE
        }
    }

    impl Serialize for Fruit {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            enumstr_json::serialize(Fruit::table(), self, serializer)
        }
    }

    impl<'de> Deserialize<'de> for Fruit {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            enumstr_json::deserialize(Fruit::table(), deserializer)
        }
    }
}

use fruit::Fruit;
use mime::Mime;
use rest::Rest;

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct Basket {
    owner: String,
    fruit: Vec<Fruit>,
    label: Mime,
}

// ============================================================================
// Associative tables over records
// ============================================================================

#[test]
fn test_rest_marshal_mapped_record() {
    assert_eq!(
        rest::PUPPY_UPDATE.to_json().unwrap(),
        br#""Puppy UPDATE""#.to_vec()
    );
}

#[test]
fn test_rest_marshal_zero_record_fails() {
    let err = Rest::default().to_json().unwrap_err();
    assert!(err.is_unknown());
}

#[test]
fn test_rest_unmarshal() {
    assert_eq!(
        Rest::from_json(br#""Puppy SHOW""#).unwrap(),
        rest::PUPPY_SHOW
    );
    assert!(Rest::from_json(br#""blah""#).unwrap_err().is_unknown());
}

#[test]
fn test_rest_parse_and_format() {
    assert_eq!(
        Rest::table().parse("Puppy DELETE"),
        Ok(rest::PUPPY_DELETE)
    );
    assert!(Rest::table().parse("hong kong FOOEY").is_err());
    assert_eq!(
        enumstr_core::format_or(Rest::table(), &Rest::default(), "REST(???)"),
        "REST(???)"
    );
    assert_eq!(Rest::table().format(&rest::PUPPY_CREATE), Ok("Puppy CREATE"));
}

// ============================================================================
// Associative tables with a default
// ============================================================================

#[test]
fn test_mime_format_and_parse() {
    assert_eq!(Mime::table().format(&mime::JSON), "JSON");
    assert_eq!(Mime::table().format(&Mime::default()), "INVALID");
    assert_eq!(Mime::table().parse("JSON"), mime::JSON);
    assert_eq!(Mime::table().parse("BLAH"), mime::INVALID);
}

#[test]
fn test_mime_marshal() {
    assert_eq!(serde_json::to_string(&mime::XML).unwrap(), r#""XML""#);
    assert_eq!(serde_json::to_string(&Mime::default()).unwrap(), r#""INVALID""#);
    assert_eq!(
        marshal_json_default(Mime::table(), &Mime::default()).unwrap(),
        br#""INVALID""#.to_vec()
    );
}

#[test]
fn test_mime_unmarshal_unknown_resolves_to_default() {
    assert_eq!(serde_json::from_str::<Mime>(r#""CSV""#).unwrap(), mime::CSV);
    assert_eq!(
        serde_json::from_str::<Mime>(r#""blah""#).unwrap(),
        mime::INVALID
    );
    assert_eq!(
        unmarshal_json_default(Mime::table(), br#""blah""#).unwrap(),
        mime::INVALID
    );
}

#[test]
fn test_mime_unmarshal_number_fails() {
    assert!(serde_json::from_str::<Mime>("123").is_err());
    assert!(matches!(
        unmarshal_json_default(Mime::table(), b"123").unwrap_err(),
        JsonError::NotAString { found: "number" }
    ));
}

// ============================================================================
// Derived structs
// ============================================================================

#[test]
fn test_basket_round_trip() {
    let basket = Basket {
        owner: "larry".into(),
        fruit: vec![Fruit::Apple, Fruit::Potato],
        label: mime::CSV,
    };
    let text = serde_json::to_string(&basket).unwrap();
    assert_eq!(
        text,
        r#"{"owner":"larry","fruit":["apps","tots"],"label":"CSV"}"#
    );
    assert_eq!(serde_json::from_str::<Basket>(&text).unwrap(), basket);
}

#[test]
fn test_basket_rejects_unknown_fruit() {
    let err = serde_json::from_str::<Basket>(
        r#"{"owner":"moe","fruit":["pants"],"label":"XML"}"#,
    )
    .unwrap_err();
    assert!(err.to_string().contains("pants"));
}

#[test]
fn test_basket_rejects_numeric_fruit() {
    assert!(serde_json::from_str::<Basket>(
        r#"{"owner":"moe","fruit":[123],"label":"XML"}"#
    )
    .is_err());
}

#[test]
fn test_basket_defaults_unknown_label() {
    let basket: Basket =
        serde_json::from_str(r#"{"owner":"curly","fruit":[],"label":"TOML"}"#).unwrap();
    assert_eq!(basket.label, mime::INVALID);
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn default_decode_never_fails_for_strings(text in ".*") {
        let bytes = serde_json::to_vec(&text).unwrap();
        let decoded = unmarshal_json_default(Mime::table(), &bytes).unwrap();
        if Mime::table().base().contains_str(&text) {
            prop_assert_eq!(Mime::table().format(&decoded), text.as_str());
        } else {
            prop_assert_eq!(decoded, mime::INVALID);
        }
    }

    #[test]
    fn strict_decode_of_numbers_is_never_unknown(n in any::<i64>()) {
        let err = unmarshal_json(Fruit::table(), n.to_string().as_bytes()).unwrap_err();
        prop_assert!(!err.is_unknown());
        let is_not_a_string = matches!(err, JsonError::NotAString { found: "number" });
        prop_assert!(is_not_a_string);
    }
}
