//! Sequential tables - values are positions in a list of strings
//!
//! An [`IndexEnum`] is the cheap option for the common case of constants
//! numbered from zero: the table is just a `Vec<String>` and the value at
//! position `i` is the one whose [`EnumIndex::to_index`] is `i`.
//!
//! Works well only for contiguous values starting at or near zero. Sparse
//! or offset numberings are not rejected by [`IndexEnum::new`]; they leave
//! slots that no declared constant reaches.

use crate::enumeration::{duplicate_strings, Enum, EnumDefault};
use crate::error::{fatal, BuildError, EnumError};
use std::any::type_name;
use std::marker::PhantomData;
use tracing::{debug, trace};

/// Conversion between a value and its position in an [`IndexEnum`].
///
/// Implemented for all primitive integers. Consumer enums implement it by
/// hand, usually with `self as usize` one way and a `match` the other.
pub trait EnumIndex: Copy {
    /// `None` if the value has no position (e.g. a negative integer).
    fn to_index(self) -> Option<usize>;

    /// `None` if no value of this type sits at `index`.
    fn from_index(index: usize) -> Option<Self>;
}

macro_rules! impl_enum_index {
    ($($ty:ty),* $(,)?) => {
        $(
            impl EnumIndex for $ty {
                fn to_index(self) -> Option<usize> {
                    usize::try_from(self).ok()
                }

                fn from_index(index: usize) -> Option<Self> {
                    <$ty>::try_from(index).ok()
                }
            }
        )*
    };
}

impl_enum_index!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

/// An [`Enum`] backed by an ordered list of strings.
#[derive(Clone, Debug)]
pub struct IndexEnum<T: EnumIndex = usize> {
    strings: Vec<String>,
    _value: PhantomData<fn() -> T>,
}

impl<T: EnumIndex> IndexEnum<T> {
    /// Build a table where `strings[i]` names the value at index `i`.
    ///
    /// Fails if any string repeats (all repeated strings are reported) or
    /// if some position has no value of type `T`.
    pub fn try_new<S, I>(strings: I) -> Result<Self, BuildError>
    where
        S: Into<String>,
        I: IntoIterator<Item = S>,
    {
        let strings: Vec<String> = strings.into_iter().map(Into::into).collect();

        let dups = duplicate_strings(strings.iter().map(String::as_str));
        if !dups.is_empty() {
            return Err(BuildError::DuplicateStrings(dups));
        }

        for index in 0..strings.len() {
            let reachable = T::from_index(index)
                .and_then(T::to_index)
                .is_some_and(|back| back == index);
            if !reachable {
                return Err(BuildError::IndexOverflow {
                    index,
                    type_name: type_name::<T>(),
                });
            }
        }

        debug!(
            entries = strings.len(),
            value_type = type_name::<T>(),
            "built index enum"
        );

        Ok(Self {
            strings,
            _value: PhantomData,
        })
    }

    /// Like [`try_new`](Self::try_new) but panics on an invalid table.
    #[track_caller]
    pub fn new<S, I>(strings: I) -> Self
    where
        S: Into<String>,
        I: IntoIterator<Item = S>,
    {
        Self::try_new(strings).unwrap_or_else(|err| fatal(err))
    }

    /// Wrap this table with `default`, which must index an existing slot.
    pub fn try_with_default(self, default: T) -> Result<IndexEnumDefault<T>, BuildError> {
        let default_str = match self.format(&default) {
            Ok(s) => s.to_owned(),
            Err(_) => return Err(BuildError::UnknownDefault),
        };
        Ok(IndexEnumDefault {
            base: self,
            default,
            default_str,
        })
    }

    #[track_caller]
    pub fn with_default(self, default: T) -> IndexEnumDefault<T> {
        self.try_with_default(default).unwrap_or_else(|err| fatal(err))
    }

    pub fn len(&self) -> usize {
        self.strings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }

    /// The string at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.strings.get(index).map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.strings
    }

    /// All `(value, string)` pairs in index order.
    pub fn iter(&self) -> impl Iterator<Item = (T, &str)> {
        self.strings
            .iter()
            .enumerate()
            .filter_map(|(index, s)| T::from_index(index).map(|value| (value, s.as_str())))
    }
}

impl<T: EnumIndex> Enum for IndexEnum<T> {
    type Value = T;

    fn format(&self, value: &T) -> Result<&str, EnumError> {
        let index = value.to_index().ok_or(EnumError::NotAnIndex {
            found: type_name::<T>(),
        })?;
        self.get(index).ok_or(EnumError::UnknownValue)
    }

    /// Linear scan; tables are expected to be small.
    fn parse(&self, text: &str) -> Result<T, EnumError> {
        self.strings
            .iter()
            .position(|s| s == text)
            .and_then(T::from_index)
            .ok_or_else(|| EnumError::UnknownString(text.to_owned()))
    }
}

/// An [`IndexEnum`] that answers every lookup, falling back to a default.
#[derive(Clone, Debug)]
pub struct IndexEnumDefault<T: EnumIndex = usize> {
    base: IndexEnum<T>,
    default: T,
    default_str: String,
}

impl<T: EnumIndex> IndexEnumDefault<T> {
    pub fn try_new<S, I>(default: T, strings: I) -> Result<Self, BuildError>
    where
        S: Into<String>,
        I: IntoIterator<Item = S>,
    {
        IndexEnum::try_new(strings)?.try_with_default(default)
    }

    #[track_caller]
    pub fn new<S, I>(default: T, strings: I) -> Self
    where
        S: Into<String>,
        I: IntoIterator<Item = S>,
    {
        Self::try_new(default, strings).unwrap_or_else(|err| fatal(err))
    }

    pub fn default_value(&self) -> T {
        self.default
    }

    pub fn default_str(&self) -> &str {
        &self.default_str
    }

    pub fn base(&self) -> &IndexEnum<T> {
        &self.base
    }
}

impl<T: EnumIndex> EnumDefault for IndexEnumDefault<T> {
    type Value = T;

    fn format(&self, value: &T) -> &str {
        match self.base.format(value) {
            Ok(s) => s,
            Err(err) => {
                trace!(error = %err, default = %self.default_str, "formatting default");
                &self.default_str
            }
        }
    }

    fn parse(&self, text: &str) -> T {
        match self.base.parse(text) {
            Ok(value) => value,
            Err(_) => {
                trace!(text, default = %self.default_str, "string not in table, using default");
                self.default
            }
        }
    }
}
