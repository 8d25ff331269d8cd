//! Typed access to a queried document
//!
//! [`DynObj`] is the two-tier surface over a [`Query`]:
//!
//! - [`DynObj::query_path`] reports why a lookup failed.
//! - The typed getters (`get_string`, `get_int`, `get_bool`, `get_any` and
//!   their `_or` forms) never fail. A missing node, a malformed index and a
//!   value that cannot be coerced all produce the caller's default.

use crate::core::path::Path;
use crate::core::query::{DynQuery, Query};
use crate::core::value::{FromValue, ValueKind};
use crate::error::{DynObjError, Result};
use log::debug;
use serde_json::Value;
use std::io::Read;

/// A document with slash-path accessors
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DynObj<Q = DynQuery> {
    query: Q,
}

impl DynObj<DynQuery> {
    /// Wrap an existing tree
    pub fn new(object: Value) -> Self {
        Self::with_query(DynQuery::new(object))
    }

    /// Parse a JSON document from a string
    pub fn from_json_str(json: &str) -> Result<Self> {
        DynQuery::from_json_str(json).map(Self::with_query)
    }

    /// Parse a JSON document from bytes
    pub fn from_json_slice(json: &[u8]) -> Result<Self> {
        DynQuery::from_json_slice(json).map(Self::with_query)
    }

    /// Parse a JSON document from a reader
    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self> {
        DynQuery::from_json_reader(reader).map(Self::with_query)
    }

    /// Parse a YAML document from a string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        DynQuery::from_yaml_str(yaml).map(Self::with_query)
    }

    /// Parse a YAML document from bytes
    pub fn from_yaml_slice(yaml: &[u8]) -> Result<Self> {
        DynQuery::from_yaml_slice(yaml).map(Self::with_query)
    }

    /// Get the root of the document
    pub fn root(&self) -> &Value {
        self.query.root()
    }
}

impl<Q: Query> DynObj<Q> {
    /// Wrap any query source
    pub fn with_query(query: Q) -> Self {
        Self { query }
    }

    /// Get the underlying query source
    pub fn query(&self) -> &Q {
        &self.query
    }

    /// Resolve `path`, handing back `default` together with the error on failure
    ///
    /// On failure the returned reference is `default` itself, not a copy.
    pub fn query_path<'a>(
        &'a self,
        path: &str,
        default: &'a Value,
    ) -> (&'a Value, Option<DynObjError>) {
        match self.query.query(&Path::parse(path)) {
            Ok(value) => (value, None),
            Err(e) => (default, Some(e)),
        }
    }

    /// Resolve `path` and coerce the node into `T`, or return `default`
    pub fn get<T: FromValue>(&self, path: &str, default: T) -> T {
        let value = match self.query.query(&Path::parse(path)) {
            Ok(value) => value,
            Err(e) => {
                debug!("Using default for {:?}: {}", path, e);
                return default;
            }
        };

        T::from_value(value).unwrap_or_else(|| {
            debug!(
                "Using default for {:?}: cannot coerce {} node to {}",
                path,
                ValueKind::of(value),
                std::any::type_name::<T>()
            );
            default
        })
    }

    /// Get the raw node at `path`, or `default`
    pub fn get_any_or<'a>(&'a self, path: &str, default: &'a Value) -> &'a Value {
        self.query_path(path, default).0
    }

    /// Get the raw node at `path`
    pub fn get_any(&self, path: &str) -> Option<&Value> {
        self.query.query(&Path::parse(path)).ok()
    }

    /// Get the node at `path` rendered as a string, or `default`
    pub fn get_string_or(&self, path: &str, default: impl Into<String>) -> String {
        self.get(path, default.into())
    }

    /// Get the node at `path` rendered as a string, or `""`
    pub fn get_string(&self, path: &str) -> String {
        self.get_string_or(path, String::new())
    }

    /// Get the node at `path` as an integer, or `default`
    pub fn get_int_or(&self, path: &str, default: i64) -> i64 {
        self.get(path, default)
    }

    /// Get the node at `path` as an integer, or `0`
    pub fn get_int(&self, path: &str) -> i64 {
        self.get_int_or(path, 0)
    }

    /// Get the node at `path` as a boolean, or `default`
    pub fn get_bool_or(&self, path: &str, default: bool) -> bool {
        self.get(path, default)
    }

    /// Get the node at `path` as a boolean, or `false`
    pub fn get_bool(&self, path: &str) -> bool {
        self.get_bool_or(path, false)
    }
}

impl From<Value> for DynObj<DynQuery> {
    fn from(object: Value) -> Self {
        Self::new(object)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const MAP_DATA: &str = r#"{
        "key-int": 10,
        "key-float": 3.9,
        "key-str": "string",
        "key-arr": [
            1, "two",
            { "nested_key": "nested" }
        ],
        "key-map": {
            "subkey_true": true,
            "subkey_false": false,
            "subkey_yes": "yes",
            "subkey_no": "no"
        }
    }"#;

    fn sample() -> DynObj {
        DynObj::from_json_str(MAP_DATA).unwrap()
    }

    #[test]
    fn test_query_path_success() {
        let obj = sample();
        let default = json!("fallback");
        let (value, err) = obj.query_path("/key-arr/1", &default);
        assert!(err.is_none());
        assert_eq!(value, &json!("two"));
    }

    #[test]
    fn test_query_path_returns_default_identity() {
        let obj = sample();
        let default = json!({"fallback": true});
        let (value, err) = obj.query_path("/key-map/missing", &default);
        assert!(std::ptr::eq(value, &default));
        assert!(err.unwrap().is_not_found());

        let (value, err) = obj.query_path("/key-arr/first", &default);
        assert!(std::ptr::eq(value, &default));
        assert!(matches!(err, Some(DynObjError::MalformedIndex { .. })));
    }

    #[test]
    fn test_get_string() {
        let obj = sample();
        assert_eq!(obj.get_string_or("/non-existed", "defaultValue"), "defaultValue");
        assert_eq!(obj.get_string_or("/key-str", "defaultValue"), "string");
        assert_eq!(obj.get_string("/non-existed"), "");
        assert_eq!(obj.get_string("/key-arr/2/nested_key"), "nested");
        assert_eq!(obj.get_string("key-int"), "10");
        assert_eq!(obj.get_string("key-map/subkey_true"), "true");
        assert_eq!(obj.get_string("key-arr/2"), r#"{"nested_key":"nested"}"#);
    }

    #[test]
    fn test_get_int() {
        let obj = sample();
        assert_eq!(obj.get_int_or("key-str", 100), 100);
        assert_eq!(obj.get_int_or("key-int", 100), 10);
        assert_eq!(obj.get_int("/key-arr/0"), 1);
        assert_eq!(obj.get_int("/key-arr/2"), 0);
        assert_eq!(obj.get_int_or("/key-arr/2", 7), 7);
        assert_eq!(obj.get_int("key-float"), 3);
        assert_eq!(obj.get_int_or("key-map/subkey_true", 5), 5);
        assert_eq!(obj.get_int_or("key-arr/x", 5), 5);
    }

    #[test]
    fn test_get_bool() {
        let obj = sample();
        assert!(obj.get_bool_or("key-str", true));
        assert!(!obj.get_bool_or("key-str", false));
        assert!(obj.get_bool_or("key-map/subkey_yes", false));
        assert!(obj.get_bool("/key-arr/0"));
        assert!(!obj.get_bool("/key-arr/2"));
        assert!(obj.get_bool("key-map/subkey_true"));
        assert!(!obj.get_bool("key-map/subkey_false"));
        assert!(!obj.get_bool_or("key-map/subkey_no", true));
        assert!(obj.get_bool_or("key-map", true));
    }

    #[test]
    fn test_get_any() {
        let obj = sample();
        assert_eq!(obj.get_any("/key-arr/1"), Some(&json!("two")));
        assert_eq!(obj.get_any("/missing"), None);
        assert_eq!(obj.get_any("/"), Some(obj.root()));

        let default = json!(42);
        assert!(std::ptr::eq(obj.get_any_or("/missing", &default), &default));
        assert_eq!(obj.get_any_or("key-int", &default), &json!(10));
    }

    #[test]
    fn test_generic_get() {
        let obj = sample();
        let n: i64 = obj.get("key-arr/0", -1);
        assert_eq!(n, 1);
        let s: String = obj.get("key-float", String::new());
        assert_eq!(s, "3.9");
    }

    struct Fixed(Value);

    impl Query for Fixed {
        fn query<'a>(&'a self, path: &Path) -> Result<&'a Value> {
            if path.is_empty() {
                Ok(&self.0)
            } else {
                Err(DynObjError::not_found(path, 0))
            }
        }
    }

    #[test]
    fn test_custom_query_source() {
        let obj = DynObj::with_query(Fixed(json!("yes")));
        assert!(obj.get_bool("/"));
        assert!(!obj.get_bool("/anything"));
        assert_eq!(obj.get_string_or("", "d"), "yes");
    }

    #[test]
    fn test_bare_value_as_query_source() {
        let obj = DynObj::with_query(json!({"a": [0, 0x10]}));
        assert_eq!(obj.get_int("a/1"), 16);
    }
}
