//! Path resolution over a value tree
//!
//! [`resolve`] walks a tree one segment at a time. Map nodes are indexed by
//! key, sequence nodes by a non-negative integer literal, and scalars have
//! no children. The walk never copies or mutates the tree.

use crate::core::path::Path;
use crate::core::value::{parse_uint_literal, ValueKind};
use crate::error::{DynObjError, Result};
use log::{debug, trace};
use serde_json::Value;
use std::io::Read;

/// A source of values addressable by path
pub trait Query {
    /// Locate the node at `path`
    fn query<'a>(&'a self, path: &Path) -> Result<&'a Value>;
}

/// Resolve `path` starting at `root`
///
/// Fails with [`DynObjError::NotFound`] when a key is missing, an index is
/// out of range or a scalar is indexed into, and with
/// [`DynObjError::MalformedIndex`] when a segment applied to a sequence is
/// not an index.
pub fn resolve<'a>(root: &'a Value, path: &Path) -> Result<&'a Value> {
    let mut cursor = root;

    for (depth, segment) in path.iter().enumerate() {
        cursor = match cursor {
            Value::Object(map) => map.get(segment),
            Value::Array(seq) => {
                let index = parse_uint_literal(segment).map_err(|e| {
                    debug!("Segment {:?} at depth {} is not an index: {}", segment, depth, e);
                    DynObjError::malformed_index(segment.as_str(), e)
                })?;
                usize::try_from(index).ok().and_then(|i| seq.get(i))
            }
            Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_) => None,
        }
        .ok_or_else(|| {
            let kind = ValueKind::of(cursor);
            if kind.is_container() {
                debug!("Path {} not found at depth {}: no such child in {}", path, depth, kind);
            } else {
                debug!("Path {} not found at depth {}: {} node has no children", path, depth, kind);
            }
            DynObjError::not_found(path, depth)
        })?;

        trace!("Resolved segment {:?} to a {} node", segment, ValueKind::of(cursor));
    }

    Ok(cursor)
}

impl Query for Value {
    fn query<'a>(&'a self, path: &Path) -> Result<&'a Value> {
        resolve(self, path)
    }
}

/// A query over an owned, parsed document
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DynQuery {
    object: Value,
}

impl DynQuery {
    /// Wrap an existing tree
    pub fn new(object: Value) -> Self {
        Self { object }
    }

    /// Parse a JSON document from a string
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(Self::new(serde_json::from_str(json)?))
    }

    /// Parse a JSON document from bytes
    pub fn from_json_slice(json: &[u8]) -> Result<Self> {
        Ok(Self::new(serde_json::from_slice(json)?))
    }

    /// Parse a JSON document from a reader
    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self> {
        Ok(Self::new(serde_json::from_reader(reader)?))
    }

    /// Parse a YAML document from a string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        Ok(Self::new(serde_yaml::from_str(yaml)?))
    }

    /// Parse a YAML document from bytes
    pub fn from_yaml_slice(yaml: &[u8]) -> Result<Self> {
        Ok(Self::new(serde_yaml::from_slice(yaml)?))
    }

    /// Get the root of the document
    pub fn root(&self) -> &Value {
        &self.object
    }

    /// Take the root of the document out of the query
    pub fn into_inner(self) -> Value {
        self.object
    }
}

impl Query for DynQuery {
    fn query<'a>(&'a self, path: &Path) -> Result<&'a Value> {
        resolve(&self.object, path)
    }
}

impl From<Value> for DynQuery {
    fn from(object: Value) -> Self {
        Self::new(object)
    }
}
