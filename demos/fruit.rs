//! Fruit: a strict index table owned by a plain enum.
//!
//! Shows `Display`, `FromStr` and serde impls built from one table.

use enumstr::prelude::*;
use once_cell::sync::Lazy;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Fruit {
    Banana,
    Apple,
    Potato,
}

impl EnumIndex for Fruit {
    fn to_index(self) -> Option<usize> {
        Some(self as usize)
    }

    fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Fruit::Banana),
            1 => Some(Fruit::Apple),
            2 => Some(Fruit::Potato),
            _ => None,
        }
    }
}

impl Fruit {
    fn table() -> &'static IndexEnum<Fruit> {
        static TABLE: Lazy<IndexEnum<Fruit>> = Lazy::new(|| {
            IndexEnumBuilder::new()
                .slot(Fruit::Banana, "naners")
                .slot(Fruit::Apple, "apps")
                .slot(Fruit::Potato, "tots")
                .build()
        });
        &TABLE
    }
}

impl fmt::Display for Fruit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(format_or(Fruit::table(), self, "wut?"))
    }
}

impl FromStr for Fruit {
    type Err = enumstr::EnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Fruit::table().parse(s)
    }
}

impl Serialize for Fruit {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        enumstr::serialize(Fruit::table(), self, serializer)
    }
}

impl<'de> Deserialize<'de> for Fruit {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        enumstr::deserialize(Fruit::table(), deserializer)
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct Lunch {
    who: String,
    fruit: Fruit,
}

fn main() {
    println!("\n=== Fruit (IndexEnum) ===");

    for fruit in [Fruit::Banana, Fruit::Apple, Fruit::Potato] {
        println!("{:?} -> {}", fruit, fruit);
    }

    match "tots".parse::<Fruit>() {
        Ok(fruit) => println!("\"tots\" parses to {:?}", fruit),
        Err(err) => println!("\"tots\" failed: {}", err),
    }
    match "pants".parse::<Fruit>() {
        Ok(fruit) => println!("\"pants\" parses to {:?}", fruit),
        Err(err) => println!("\"pants\" failed: {}", err),
    }

    let lunch = Lunch {
        who: "moe".into(),
        fruit: Fruit::Apple,
    };
    match serde_json::to_string(&lunch) {
        Ok(json) => println!("lunch as JSON: {}", json),
        Err(err) => println!("encode failed: {}", err),
    }

    match serde_json::from_str::<Lunch>(r#"{"who":"larry","fruit":123}"#) {
        Ok(lunch) => println!("decoded {:?}", lunch),
        Err(err) => println!("numeric fruit rejected: {}", err),
    }
}
