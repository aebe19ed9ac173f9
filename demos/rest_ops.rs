//! REST operations: a strict map table keyed by a three-field record.

use enumstr::prelude::*;
use once_cell::sync::Lazy;

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
struct Rest {
    host: &'static str,
    method: &'static str,
    resource: &'static str,
}

const PUPPY_CREATE: Rest = Rest {
    host: "http://example.com",
    method: "POST",
    resource: "/puppy",
};
const PUPPY_DELETE: Rest = Rest {
    host: "http://example.com",
    method: "DELETE",
    resource: "/puppy/:id",
};
const PUPPY_SHOW: Rest = Rest {
    host: "http://example.com",
    method: "GET",
    resource: "/puppy/:id",
};
const PUPPY_UPDATE: Rest = Rest {
    host: "http://example.com",
    method: "PUT",
    resource: "/puppy/:id",
};

impl Rest {
    fn table() -> &'static MapEnum<Rest> {
        static TABLE: Lazy<MapEnum<Rest>> = Lazy::new(|| {
            MapEnumBuilder::new()
                .entry(PUPPY_CREATE, "Puppy CREATE")
                .entry(PUPPY_DELETE, "Puppy DELETE")
                .entry(PUPPY_SHOW, "Puppy SHOW")
                .entry(PUPPY_UPDATE, "Puppy UPDATE")
                .build()
        });
        &TABLE
    }

    fn name(&self) -> &'static str {
        format_or(Rest::table(), self, "REST(???)")
    }
}

fn main() {
    println!("\n=== REST operations (MapEnum) ===");

    for op in [PUPPY_CREATE, PUPPY_UPDATE, Rest::default()] {
        println!("{} {} -> {}", op.method, op.resource, op.name());
    }

    for text in ["Puppy DELETE", "hong kong FOOEY"] {
        match Rest::table().parse(text) {
            Ok(op) => println!("{:?} is {} {}", text, op.method, op.resource),
            Err(err) => println!("{:?} rejected: {}", text, err),
        }
    }

    for op in [PUPPY_SHOW, Rest::default()] {
        match enumstr::marshal_json(Rest::table(), &op) {
            Ok(bytes) => println!("JSON: {}", String::from_utf8_lossy(&bytes)),
            Err(err) => println!("cannot encode {:?}: {}", op, err),
        }
    }

    let mut op = Rest::default();
    match enumstr::unmarshal_json_into(Rest::table(), br#""Puppy SHOW""#, &mut op) {
        Ok(()) => println!("decoded into {:?}", op),
        Err(err) => println!("decode failed: {}", err),
    }
}
