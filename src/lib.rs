//! enumstr - canonical string mappings for enumerated constants
//!
//! Declare the strings of a closed set of constants once, then get
//! formatting, parsing and JSON from the same table.
//!
//! # Quick Start
//!
//! ```rust
//! use enumstr::prelude::*;
//!
//! let fruit: IndexEnum = IndexEnum::new(["naners", "apps", "tots"]);
//! assert_eq!(fruit.format(&2), Ok("tots"));
//! assert_eq!(fruit.parse("apps"), Ok(1));
//! assert_eq!(enumstr::marshal_json(&fruit, &0).unwrap(), br#""naners""#);
//!
//! let mode: IndexEnumDefault = IndexEnumDefault::new(0, ["invalid", "go", "stop"]);
//! assert_eq!(mode.parse("poppycock"), 0);
//! ```
//!
//! # Architecture
//!
//! - [`enumstr_core`] - the `Enum` / `EnumDefault` traits, the map and
//!   index tables, default wrappers, builders and text helpers
//! - [`enumstr_json`] - JSON marshaling and serde adapters

pub use enumstr_core::{
    builder, enumeration, error, format_default, format_or, index, map, text, BuildError, Enum,
    EnumDefault, EnumError, EnumIndex, IndexEnum, IndexEnumBuilder, IndexEnumDefault, MapEnum,
    MapEnumBuilder, MapEnumDefault,
};
pub use enumstr_json::{
    deserialize, deserialize_default, marshal_json, marshal_json_default, serialize,
    serialize_default, unmarshal_json, unmarshal_json_default, unmarshal_json_default_into,
    unmarshal_json_into, JsonError,
};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use enumstr_core::{
        format_default, format_or, Enum, EnumDefault, EnumIndex, IndexEnum, IndexEnumBuilder,
        IndexEnumDefault, MapEnum, MapEnumBuilder, MapEnumDefault,
    };
}
