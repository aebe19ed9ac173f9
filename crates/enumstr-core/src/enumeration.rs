//! The two capability traits every table implements.
//!
//! [`Enum`] is the strict contract: both directions can miss.
//! [`EnumDefault`] is the total contract: a miss resolves to a configured
//! default, so `format` and `parse` always return something.

use crate::error::EnumError;
use std::collections::{BTreeSet, HashSet};

/// A bidirectional mapping between values and their canonical strings.
pub trait Enum {
    /// The enumerated type.
    type Value;

    /// The canonical string for `value`.
    fn format(&self, value: &Self::Value) -> Result<&str, EnumError>;

    /// The value whose canonical string is `text`.
    fn parse(&self, text: &str) -> Result<Self::Value, EnumError>;

    /// Whether `value` is in the domain
    fn contains(&self, value: &Self::Value) -> bool {
        self.format(value).is_ok()
    }
}

/// A bidirectional mapping with a designated default member.
pub trait EnumDefault {
    type Value;

    /// The canonical string for `value`, or the default's string.
    fn format(&self, value: &Self::Value) -> &str;

    /// The value whose canonical string is `text`, or the default value.
    fn parse(&self, text: &str) -> Self::Value;
}

/// Every string that occurs more than once, sorted, each reported once.
pub(crate) fn duplicate_strings<'a>(strings: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut dups = BTreeSet::new();
    for s in strings {
        if !seen.insert(s) {
            dups.insert(s);
        }
    }
    dups.into_iter().map(str::to_owned).collect()
}
