//! MIME types: a map table with a default, used inside a derived struct.

use enumstr::prelude::*;
use once_cell::sync::Lazy;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
struct Mime {
    name: &'static str,
    ext: &'static str,
}

const INVALID: Mime = Mime {
    name: "invalid/mime",
    ext: "",
};
const JSON: Mime = Mime {
    name: "application/json",
    ext: ".json",
};
const CSV: Mime = Mime {
    name: "text/csv",
    ext: ".csv",
};
const XML: Mime = Mime {
    name: "text/xml",
    ext: ".xml",
};

impl Mime {
    fn table() -> &'static MapEnumDefault<Mime> {
        static TABLE: Lazy<MapEnumDefault<Mime>> = Lazy::new(|| {
            MapEnumDefault::new(
                INVALID,
                [
                    (INVALID, "INVALID"),
                    (JSON, "JSON"),
                    (CSV, "CSV"),
                    (XML, "XML"),
                ],
            )
        });
        &TABLE
    }
}

impl Serialize for Mime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        enumstr::serialize_default(Mime::table(), self, serializer)
    }
}

impl<'de> Deserialize<'de> for Mime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        enumstr::deserialize_default(Mime::table(), deserializer)
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct Upload {
    file: String,
    mime: Mime,
}

fn main() {
    println!("\n=== MIME types (MapEnumDefault) ===");

    for mime in [JSON, CSV, XML, Mime::default()] {
        println!("{:>18} -> {}", mime.name, Mime::table().format(&mime));
    }

    let upload = Upload {
        file: "report.csv".into(),
        mime: CSV,
    };
    match serde_json::to_string(&upload) {
        Ok(json) => println!("upload as JSON: {}", json),
        Err(err) => println!("encode failed: {}", err),
    }

    for json in [
        r#"{"file":"a.xml","mime":"XML"}"#,
        r#"{"file":"b.toml","mime":"TOML"}"#,
        r#"{"file":"c.bin","mime":7}"#,
    ] {
        match serde_json::from_str::<Upload>(json) {
            Ok(upload) => println!("{} -> {} ({})", json, upload.mime.name, upload.mime.ext),
            Err(err) => println!("{} rejected: {}", json, err),
        }
    }
}
