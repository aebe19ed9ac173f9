//! Mode: an index table with a default, over a `u32` newtype.
//!
//! Every lookup succeeds; anything unknown becomes `INVALID`.

use enumstr::prelude::*;
use once_cell::sync::Lazy;
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Mode(u32);

const INVALID: Mode = Mode(0);
const GO: Mode = Mode(1);
const STOP: Mode = Mode(2);
const POTATO: Mode = Mode(3);

impl EnumIndex for Mode {
    fn to_index(self) -> Option<usize> {
        self.0.to_index()
    }

    fn from_index(index: usize) -> Option<Self> {
        u32::from_index(index).map(Mode)
    }
}

impl Mode {
    fn table() -> &'static IndexEnumDefault<Mode> {
        static TABLE: Lazy<IndexEnumDefault<Mode>> = Lazy::new(|| {
            IndexEnumBuilder::new()
                .slot(INVALID, "invalid")
                .slot(GO, "go")
                .slot(STOP, "stop")
                .slot(POTATO, "potato")
                .default_value(INVALID)
                .build_default()
        });
        &TABLE
    }

    fn parse(s: &str) -> Mode {
        Mode::table().parse(s)
    }

    fn to_json(self) -> Result<Vec<u8>, enumstr::JsonError> {
        enumstr::marshal_json_default(Mode::table(), &self)
    }

    fn from_json(bytes: &[u8]) -> Result<Mode, enumstr::JsonError> {
        enumstr::unmarshal_json_default(Mode::table(), bytes)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(format_default(Mode::table(), self))
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    println!("\n=== Mode (IndexEnumDefault) ===");

    for mode in [INVALID, GO, STOP, POTATO, Mode(1000)] {
        println!("{:?} -> {}", mode, mode);
    }

    for text in ["stop", "poppycock"] {
        println!("{:?} parses to {:?}", text, Mode::parse(text));
    }

    for bytes in [&br#""potato""#[..], &br#""blast off""#[..], &b"123"[..]] {
        let shown = String::from_utf8_lossy(bytes);
        match Mode::from_json(bytes) {
            Ok(mode) => println!("JSON {} decodes to {}", shown, mode),
            Err(err) => println!("JSON {} rejected: {}", shown, err),
        }
    }

    if let Ok(bytes) = Mode(42).to_json() {
        println!("Mode(42) encodes as {}", String::from_utf8_lossy(&bytes));
    }
}
