//! Associative tables - any hashable value type
//!
//! A [`MapEnum`] holds an explicit value -> string table. The inverse
//! string -> value table is built once at construction so `parse` is a
//! single hash lookup. Values are not limited to small integers: records,
//! tuples and strings all work as long as they are `Eq + Hash + Clone`.

use crate::enumeration::{duplicate_strings, Enum, EnumDefault};
use crate::error::{fatal, BuildError, EnumError};
use std::collections::HashMap;
use std::hash::Hash;
use tracing::{debug, trace};

/// An [`Enum`] backed by a hash map and its inverse.
#[derive(Clone, Debug)]
pub struct MapEnum<T: Eq + Hash + Clone> {
    forward: HashMap<T, String>,
    reverse: HashMap<String, T>,
}

impl<T: Eq + Hash + Clone> MapEnum<T> {
    /// Build a table from `(value, string)` pairs.
    ///
    /// Pairs are collected by value, so a value given twice keeps its last
    /// string. Two distinct values sharing a string is an error.
    pub fn try_new<S, I>(pairs: I) -> Result<Self, BuildError>
    where
        S: Into<String>,
        I: IntoIterator<Item = (T, S)>,
    {
        let forward: HashMap<T, String> = pairs
            .into_iter()
            .map(|(value, s)| (value, s.into()))
            .collect();

        let dups = duplicate_strings(forward.values().map(String::as_str));
        if !dups.is_empty() {
            return Err(BuildError::DuplicateStrings(dups));
        }

        let reverse = forward
            .iter()
            .map(|(value, s)| (s.clone(), value.clone()))
            .collect();

        debug!(
            entries = forward.len(),
            value_type = std::any::type_name::<T>(),
            "built map enum"
        );

        Ok(Self { forward, reverse })
    }

    /// Like [`try_new`](Self::try_new) but panics on an invalid table.
    #[track_caller]
    pub fn new<S, I>(pairs: I) -> Self
    where
        S: Into<String>,
        I: IntoIterator<Item = (T, S)>,
    {
        Self::try_new(pairs).unwrap_or_else(|err| fatal(err))
    }

    /// Wrap this table with `default`, which must already be a member.
    pub fn try_with_default(self, default: T) -> Result<MapEnumDefault<T>, BuildError> {
        let default_str = match self.forward.get(&default) {
            Some(s) => s.clone(),
            None => return Err(BuildError::UnknownDefault),
        };
        Ok(MapEnumDefault {
            base: self,
            default,
            default_str,
        })
    }

    #[track_caller]
    pub fn with_default(self, default: T) -> MapEnumDefault<T> {
        self.try_with_default(default).unwrap_or_else(|err| fatal(err))
    }

    pub fn len(&self) -> usize {
        self.forward.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forward.is_empty()
    }

    pub fn contains_value(&self, value: &T) -> bool {
        self.forward.contains_key(value)
    }

    pub fn contains_str(&self, text: &str) -> bool {
        self.reverse.contains_key(text)
    }

    /// All `(value, string)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&T, &str)> {
        self.forward.iter().map(|(value, s)| (value, s.as_str()))
    }
}

impl<T: Eq + Hash + Clone> Enum for MapEnum<T> {
    type Value = T;

    fn format(&self, value: &T) -> Result<&str, EnumError> {
        self.forward
            .get(value)
            .map(String::as_str)
            .ok_or(EnumError::UnknownValue)
    }

    fn parse(&self, text: &str) -> Result<T, EnumError> {
        self.reverse
            .get(text)
            .cloned()
            .ok_or_else(|| EnumError::UnknownString(text.to_owned()))
    }
}

/// A [`MapEnum`] that answers every lookup, falling back to a default.
#[derive(Clone, Debug)]
pub struct MapEnumDefault<T: Eq + Hash + Clone> {
    base: MapEnum<T>,
    default: T,
    /// Resolved once; membership of `default` is checked at construction.
    default_str: String,
}

impl<T: Eq + Hash + Clone> MapEnumDefault<T> {
    pub fn try_new<S, I>(default: T, pairs: I) -> Result<Self, BuildError>
    where
        S: Into<String>,
        I: IntoIterator<Item = (T, S)>,
    {
        MapEnum::try_new(pairs)?.try_with_default(default)
    }

    /// Build the base table and wrap it; panics if the table is invalid or
    /// `default` is not one of its values.
    #[track_caller]
    pub fn new<S, I>(default: T, pairs: I) -> Self
    where
        S: Into<String>,
        I: IntoIterator<Item = (T, S)>,
    {
        Self::try_new(default, pairs).unwrap_or_else(|err| fatal(err))
    }

    pub fn default_value(&self) -> &T {
        &self.default
    }

    pub fn default_str(&self) -> &str {
        &self.default_str
    }

    /// The strict table underneath.
    pub fn base(&self) -> &MapEnum<T> {
        &self.base
    }
}

impl<T: Eq + Hash + Clone> EnumDefault for MapEnumDefault<T> {
    type Value = T;

    fn format(&self, value: &T) -> &str {
        match self.base.format(value) {
            Ok(s) => s,
            Err(_) => {
                trace!(default = %self.default_str, "value not in table, formatting default");
                &self.default_str
            }
        }
    }

    fn parse(&self, text: &str) -> T {
        match self.base.parse(text) {
            Ok(value) => value,
            Err(_) => {
                trace!(text, default = %self.default_str, "string not in table, using default");
                self.default.clone()
            }
        }
    }
}
