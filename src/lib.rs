//! dynobj: slash-path access with typed defaults over loosely-typed documents
//!
//! This library lets a caller fetch a value at an arbitrary nested path of a
//! parsed JSON or YAML document and coerce it to a string, integer or boolean,
//! falling back to a default when the path is missing or the value does not
//! fit. No schema is required.
//!
//! # Quick Start
//!
//! ```rust
//! use dynobj::{DynObj, Result};
//!
//! fn main() -> Result<()> {
//!     let obj = DynObj::from_json_str(r#"{
//!         "server": { "port": 8080, "debug": "yes" },
//!         "hosts": ["a.example", "b.example"]
//!     }"#)?;
//!
//!     assert_eq!(obj.get_int("server/port"), 8080);
//!     assert!(obj.get_bool("server/debug"));
//!     assert_eq!(obj.get_string("/hosts/1"), "b.example");
//!     assert_eq!(obj.get_int_or("server/timeout", 30), 30);
//!     Ok(())
//! }
//! ```
//!
//! ## Inspecting Failures
//!
//! The typed getters never fail. [`DynObj::query_path`] reports why a lookup
//! did not resolve:
//!
//! ```rust
//! use dynobj::{DynObj, DynObjError};
//! use serde_json::{json, Value};
//!
//! let obj = DynObj::new(json!({ "list": [1, 2] }));
//! let (value, err) = obj.query_path("list/first", &Value::Null);
//! assert!(value.is_null());
//! assert!(matches!(err, Some(DynObjError::MalformedIndex { .. })));
//! ```
//!
//! ## Reading Files
//!
//! ```rust,no_run
//! use dynobj::{DocumentReader, Result};
//!
//! fn main() -> Result<()> {
//!     let obj = DocumentReader::new().read_file("config.yaml")?;
//!     let name = obj.get_string_or("service/name", "unnamed");
//!     println!("{name}");
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! - [`core`](crate::core): paths, traversal ([`resolve`], [`Query`]) and coercion ([`FromValue`])
//! - [`io`]: document construction from strings, readers and files
//! - [`error`]: the error type shared by both

// Public API exports
pub use crate::error::{DynObjError, Result};

// Core types
pub use crate::core::{
    parse_int_literal, parse_uint_literal, render_string, resolve, DynObj, DynQuery, FromValue,
    Path, Query, ValueKind,
};

// IO types
pub use crate::io::{convenience, DocumentFormat, DocumentReader, ReaderConfig};

pub mod core;
pub mod error;
pub mod io;
