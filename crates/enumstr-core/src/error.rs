//! Error types for enum tables.
//!
//! Two tiers:
//! - [`BuildError`]: the table declaration itself is wrong (duplicate
//!   strings, a default outside the domain). The fatal constructors panic
//!   with it; the `try_*` constructors hand it back.
//! - [`EnumError`]: a single `format`/`parse` call could not be answered.

use thiserror::Error;

/// Errors raised while constructing a table.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BuildError {
    #[error("duplicate strings: [{}]", .0.join(", "))]
    DuplicateStrings(Vec<String>),

    #[error("default value is not a member of the enumeration")]
    UnknownDefault,

    #[error("no default value configured")]
    MissingDefault,

    #[error("index {index} is not representable as {type_name}")]
    IndexOverflow {
        index: usize,
        type_name: &'static str,
    },

    #[error("value of type {type_name} is not an index")]
    NotAnIndex { type_name: &'static str },

    #[error("slot {index} assigned more than once")]
    SlotReassigned { index: usize },

    #[error("slot {index} has no string")]
    EmptySlot { index: usize },
}

/// Errors returned by [`Enum::format`](crate::Enum::format) and
/// [`Enum::parse`](crate::Enum::parse).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EnumError {
    #[error("unknown value")]
    UnknownValue,

    #[error("unknown string: {0:?}")]
    UnknownString(String),

    #[error("expected an index but received {found}")]
    NotAnIndex { found: &'static str },
}

impl EnumError {
    /// True for the lookup misses (`UnknownValue`, `UnknownString`).
    pub fn is_unknown(&self) -> bool {
        matches!(self, EnumError::UnknownValue | EnumError::UnknownString(_))
    }
}

/// Panic with a build error. Every fatal constructor funnels through here
/// so the failure is logged before the process unwinds.
#[track_caller]
pub(crate) fn fatal(err: BuildError) -> ! {
    tracing::error!(error = %err, "invalid enum table");
    panic!("invalid enum table: {err}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_strings_message_lists_every_string() {
        let err = BuildError::DuplicateStrings(vec!["abc".into(), "def".into()]);
        assert_eq!(err.to_string(), "duplicate strings: [abc, def]");
    }

    #[test]
    fn test_is_unknown() {
        assert!(EnumError::UnknownValue.is_unknown());
        assert!(EnumError::UnknownString("x".into()).is_unknown());
        assert!(!EnumError::NotAnIndex { found: "i32" }.is_unknown());
    }

    #[test]
    #[should_panic(expected = "invalid enum table: no default value configured")]
    fn test_fatal_panics_with_message() {
        fatal(BuildError::MissingDefault);
    }
}
