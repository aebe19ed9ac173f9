// File: `crates/enumstr-core/src/lib.rs`
//! # enumstr-core
//!
//! Canonical string tables for enumerated constants.
//!
//! This crate provides:
//! - [`Enum`] / [`EnumDefault`]: the strict and the total lookup contracts
//! - [`MapEnum`]: explicit value -> string tables for any hashable value
//! - [`IndexEnum`]: string lists indexed by small non-negative integers
//! - [`MapEnumDefault`] / [`IndexEnumDefault`]: wrappers that never fail
//! - Builders for declaring tables entry by entry
//!
//! Tables are validated once, when they are built. A string used for two
//! values, or a default that is not in the table, is a bug in the
//! declaration and the plain constructors panic on it.
//!
//! ## Example
//!
//! ```rust
//! use enumstr_core::{format_or, Enum, EnumDefault, IndexEnum, IndexEnumDefault};
//!
//! let fruit: IndexEnum = IndexEnum::new(["naners", "apps", "tots"]);
//! assert_eq!(fruit.format(&2), Ok("tots"));
//! assert_eq!(fruit.parse("tots"), Ok(2));
//! assert_eq!(format_or(&fruit, &5, "wut?"), "wut?");
//!
//! let mode: IndexEnumDefault = IndexEnumDefault::new(0, ["invalid", "go", "stop", "potato"]);
//! assert_eq!(mode.format(&1000), "invalid");
//! assert_eq!(mode.parse("poppycock"), 0);
//! ```

pub mod builder;
pub mod enumeration;
pub mod error;
pub mod index;
pub mod map;
pub mod text;

pub use builder::{IndexEnumBuilder, MapEnumBuilder};
pub use enumeration::{Enum, EnumDefault};
pub use error::{BuildError, EnumError};
pub use index::{EnumIndex, IndexEnum, IndexEnumDefault};
pub use map::{MapEnum, MapEnumDefault};
pub use text::{format_default, format_or};
