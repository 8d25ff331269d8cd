//! Core types and domain logic: paths, traversal and coercion

pub mod object;
pub mod path;
pub mod query;
pub mod value;

pub use object::DynObj;
pub use path::Path;
pub use query::{resolve, DynQuery, Query};
pub use value::{parse_int_literal, parse_uint_literal, render_string, FromValue, ValueKind};
