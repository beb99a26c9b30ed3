//! # ordjson
//!
//! Recursive-descent JSON parser and serializer over [`Value`], a tagged
//! value tree whose objects keep their keys in lexicographic order.
//!
//! Parsing defaults to strict validation; the tolerant behavior of the
//! original design (best-effort partial results for truncated or sloppily
//! delimited input) is available by opting into lenient mode. Serialized
//! output uses a fixed non-standard layout: elements joined by `", "` and
//! object entries as `"key": value` in lexicographic key order.
//!
//! ## Quick start
//!
//! ```rust
//! use ordjson::{parse, serialize, Kind};
//!
//! let value = parse(r#"{"scores": [95, 87, 92], "name": "Alice"}"#).unwrap();
//! assert_eq!(value.kind(), Kind::Object);
//!
//! let obj = value.as_object().unwrap();
//! assert_eq!(obj["name"].as_str(), Some("Alice"));
//!
//! // Keys serialize in lexicographic order, whatever order they arrived in.
//! assert_eq!(serialize(&value), r#"{"name": "Alice", "scores": [95, 87, 92]}"#);
//! ```
//!
//! ## Modules
//!
//! - [`parser`] — JSON text → [`Value`] tree (strict or lenient)
//! - [`serializer`] — [`Value`] tree → JSON text
//! - [`value`] — the tagged value tree, kind discriminant, and accessors
//! - [`error`] — parse failure types
//! - [`interop`] — conversions to and from `serde_json::Value`

pub mod error;
pub mod interop;
pub mod parser;
pub mod serializer;
pub mod value;

pub use error::JsonError;
pub use parser::{parse, parse_at, parse_at_with, parse_with, ParseMode, ParseOptions};
pub use serializer::serialize;
pub use value::{Kind, Value};
