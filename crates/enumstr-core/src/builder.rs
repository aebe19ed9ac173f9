//! Builders for declaring tables entry by entry.
//!
//! A builder is the configuration object a type uses to declare its
//! canonical strings once, typically inside a `Lazy` owned by the type:
//!
//! ```rust
//! use enumstr_core::{Enum, IndexEnum, IndexEnumBuilder};
//!
//! let fruit: IndexEnum<u8> = IndexEnumBuilder::new()
//!     .slot(2, "tots")
//!     .slot(0, "naners")
//!     .slot(1, "apps")
//!     .build();
//!
//! assert_eq!(fruit.format(&2), Ok("tots"));
//! ```

use crate::error::{fatal, BuildError};
use crate::index::{EnumIndex, IndexEnum, IndexEnumDefault};
use crate::map::{MapEnum, MapEnumDefault};
use std::any::type_name;
use std::collections::BTreeMap;
use std::hash::Hash;

/// Builder for [`MapEnum`] and [`MapEnumDefault`].
#[derive(Clone, Debug)]
pub struct MapEnumBuilder<T: Eq + Hash + Clone> {
    entries: Vec<(T, String)>,
    default: Option<T>,
}

impl<T: Eq + Hash + Clone> MapEnumBuilder<T> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            default: None,
        }
    }

    pub fn entry(mut self, value: T, text: impl Into<String>) -> Self {
        self.entries.push((value, text.into()));
        self
    }

    pub fn entries<S, I>(mut self, pairs: I) -> Self
    where
        S: Into<String>,
        I: IntoIterator<Item = (T, S)>,
    {
        self.entries
            .extend(pairs.into_iter().map(|(value, s)| (value, s.into())));
        self
    }

    /// The value `build_default` falls back to.
    pub fn default_value(mut self, value: T) -> Self {
        self.default = Some(value);
        self
    }

    pub fn try_build(self) -> Result<MapEnum<T>, BuildError> {
        MapEnum::try_new(self.entries)
    }

    #[track_caller]
    pub fn build(self) -> MapEnum<T> {
        self.try_build().unwrap_or_else(|err| fatal(err))
    }

    pub fn try_build_default(self) -> Result<MapEnumDefault<T>, BuildError> {
        let default = self.default.ok_or(BuildError::MissingDefault)?;
        MapEnumDefault::try_new(default, self.entries)
    }

    #[track_caller]
    pub fn build_default(self) -> MapEnumDefault<T> {
        self.try_build_default().unwrap_or_else(|err| fatal(err))
    }
}

impl<T: Eq + Hash + Clone> Default for MapEnumBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for [`IndexEnum`] and [`IndexEnumDefault`].
///
/// Strings are placed either at a value's own index with
/// [`slot`](Self::slot) or appended with [`push`](Self::push). Unlike
/// [`IndexEnum::new`], the builder refuses to leave holes.
#[derive(Clone, Debug)]
pub struct IndexEnumBuilder<T: EnumIndex = usize> {
    /// Strings keyed by index; holes are found at build time.
    slots: BTreeMap<usize, String>,
    default: Option<T>,
    /// First error hit while filling slots; reported by the build methods.
    error: Option<BuildError>,
}

impl<T: EnumIndex> IndexEnumBuilder<T> {
    pub fn new() -> Self {
        Self {
            slots: BTreeMap::new(),
            default: None,
            error: None,
        }
    }

    /// Put `text` at the index of `value`.
    pub fn slot(mut self, value: T, text: impl Into<String>) -> Self {
        if self.error.is_some() {
            return self;
        }
        let index = match value.to_index() {
            Some(index) => index,
            None => {
                self.error = Some(BuildError::NotAnIndex {
                    type_name: type_name::<T>(),
                });
                return self;
            }
        };
        if self.slots.contains_key(&index) {
            self.error = Some(BuildError::SlotReassigned { index });
        } else {
            self.slots.insert(index, text.into());
        }
        self
    }

    /// Put `text` in the slot after the highest one assigned so far.
    pub fn push(mut self, text: impl Into<String>) -> Self {
        if self.error.is_some() {
            return self;
        }
        let next = match self.slots.keys().next_back() {
            Some(&last) => last.checked_add(1),
            None => Some(0),
        };
        match next {
            Some(index) => {
                self.slots.insert(index, text.into());
            }
            None => {
                self.error = Some(BuildError::IndexOverflow {
                    index: usize::MAX,
                    type_name: type_name::<usize>(),
                });
            }
        }
        self
    }

    pub fn default_value(mut self, value: T) -> Self {
        self.default = Some(value);
        self
    }

    fn into_strings(self) -> Result<(Vec<String>, Option<T>), BuildError> {
        if let Some(err) = self.error {
            return Err(err);
        }
        let mut strings = Vec::with_capacity(self.slots.len());
        for (expected, (index, s)) in self.slots.into_iter().enumerate() {
            if index != expected {
                return Err(BuildError::EmptySlot { index: expected });
            }
            strings.push(s);
        }
        Ok((strings, self.default))
    }

    pub fn try_build(self) -> Result<IndexEnum<T>, BuildError> {
        let (strings, _) = self.into_strings()?;
        IndexEnum::try_new(strings)
    }

    #[track_caller]
    pub fn build(self) -> IndexEnum<T> {
        self.try_build().unwrap_or_else(|err| fatal(err))
    }

    pub fn try_build_default(self) -> Result<IndexEnumDefault<T>, BuildError> {
        let (strings, default) = self.into_strings()?;
        let default = default.ok_or(BuildError::MissingDefault)?;
        IndexEnumDefault::try_new(default, strings)
    }

    #[track_caller]
    pub fn build_default(self) -> IndexEnumDefault<T> {
        self.try_build_default().unwrap_or_else(|err| fatal(err))
    }
}

impl<T: EnumIndex> Default for IndexEnumBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}
