//! Text helpers for writing `Display` and `FromStr` impls over a table.

use crate::enumeration::{Enum, EnumDefault};

/// The canonical string for `value`, or `fallback` if the table has none.
///
/// ```rust
/// use enumstr_core::{format_or, IndexEnum};
///
/// let fruit: IndexEnum = IndexEnum::new(["naners", "apps", "tots"]);
/// assert_eq!(format_or(&fruit, &0, "wut?"), "naners");
/// assert_eq!(format_or(&fruit, &5, "wut?"), "wut?");
/// ```
pub fn format_or<'a, E>(table: &'a E, value: &E::Value, fallback: &'a str) -> &'a str
where
    E: Enum + ?Sized,
{
    table.format(value).unwrap_or(fallback)
}

/// The canonical string for `value` from a table with a default.
pub fn format_default<'a, E>(table: &'a E, value: &E::Value) -> &'a str
where
    E: EnumDefault + ?Sized,
{
    table.format(value)
}
