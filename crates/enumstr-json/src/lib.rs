//! # enumstr-json
//!
//! JSON for enumstr tables. Every enumerated value is encoded as a single
//! JSON string holding its canonical name.
//!
//! This crate provides:
//! - [`marshal_json`] / [`unmarshal_json`] and their `_default` variants:
//!   byte-level encode and decode over [`Enum`](enumstr_core::Enum) and
//!   [`EnumDefault`](enumstr_core::EnumDefault)
//! - [`serialize`] / [`deserialize`] and their `_default` variants: serde
//!   adapters for writing `Serialize` / `Deserialize` impls
//!
//! Decoding rejects non-string JSON outright. An unrecognized string is an
//! error for an `Enum` table and resolves to the default for an
//! `EnumDefault` table.

pub mod adapter;
pub mod error;
pub mod marshal;

pub use adapter::{deserialize, deserialize_default, serialize, serialize_default};
pub use error::{JsonError, Result};
pub use marshal::{
    marshal_json, marshal_json_default, unmarshal_json, unmarshal_json_default,
    unmarshal_json_default_into, unmarshal_json_into,
};
