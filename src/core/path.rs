//! Slash-delimited paths into a value tree
//!
//! A path is the ordered list of non-empty segments of a `/`-separated
//! string. Leading, trailing and repeated slashes carry no meaning, so
//! `"a/b/c"` and `"/a///b/c/"` name the same node. The empty path names
//! the root.
//!
//! Paths serialize as their slash-joined string, so they can sit in
//! configuration structs next to other settings.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A parsed path for accessing nested values
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Path {
    segments: Vec<String>,
}

impl Path {
    /// Create a new empty path (the root)
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a path from a slash-delimited string
    pub fn parse(input: &str) -> Self {
        input.split('/').filter(|s| !s.is_empty()).collect()
    }

    /// Create a path from already split segments, dropping empty ones
    pub fn from_segments<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        segments.into_iter().map(Into::into).collect()
    }

    /// Get the segments of this path
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Get the number of segments
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Check if the path denotes the root
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Get the segment at `depth`
    pub fn get(&self, depth: usize) -> Option<&str> {
        self.segments.get(depth).map(String::as_str)
    }

    /// Get the first `len` segments as a new path
    pub fn prefix(&self, len: usize) -> Self {
        Self {
            segments: self.segments.iter().take(len).cloned().collect(),
        }
    }

    /// Create a new path by appending a segment
    pub fn child(&self, segment: impl Into<String>) -> Self {
        let mut segments = self.segments.clone();
        segments.push(segment.into());
        Self::from_segments(segments)
    }

    /// Iterate over the segments in order
    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.segments.iter()
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.segments.join("/"))
    }
}

impl<S: Into<String>> FromIterator<S> for Path {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            segments: iter
                .into_iter()
                .map(Into::into)
                .filter(|s: &String| !s.is_empty())
                .collect(),
        }
    }
}

impl From<&str> for Path {
    fn from(s: &str) -> Self {
        Self::parse(s)
    }
}

impl From<String> for Path {
    fn from(s: String) -> Self {
        Self::parse(&s)
    }
}

impl From<Path> for String {
    fn from(path: Path) -> Self {
        path.to_string()
    }
}

impl From<Vec<String>> for Path {
    fn from(segments: Vec<String>) -> Self {
        Self::from_segments(segments)
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_path() {
        let path = Path::parse("a/b/c");
        assert_eq!(path.segments(), &["a", "b", "c"]);
        assert_eq!(path.to_string(), "a/b/c");
    }

    #[test]
    fn test_duplicate_slashes_ignored() {
        assert_eq!(Path::parse("/a///b/c"), Path::parse("a/b/c"));
        assert_eq!(Path::parse("a/b/c/"), Path::parse("a/b/c"));
    }

    #[test]
    fn test_empty_path_is_root() {
        for raw in ["", "/", "///"] {
            let path = Path::parse(raw);
            assert!(path.is_empty(), "{raw:?} should parse to the root");
            assert_eq!(path.len(), 0);
        }
    }

    #[test]
    fn test_segments_are_not_trimmed() {
        let path = Path::parse("/ a /b.c/");
        assert_eq!(path.segments(), &[" a ", "b.c"]);
    }

    #[test]
    fn test_from_segments_drops_empty() {
        let path = Path::from_segments(["a", "", "b"]);
        assert_eq!(path.segments(), &["a", "b"]);
    }

    #[test]
    fn test_serde_as_string() {
        let path: Path = serde_json::from_str(r#""//a/b/""#).unwrap();
        assert_eq!(path.segments(), &["a", "b"]);
        assert_eq!(serde_json::to_string(&path).unwrap(), r#""a/b""#);
    }

    #[test]
    fn test_prefix_and_child() {
        let path = Path::parse("a/b/c");
        assert_eq!(path.prefix(2).segments(), &["a", "b"]);
        assert_eq!(path.prefix(10), path);
        assert_eq!(path.child("d").to_string(), "a/b/c/d");
        assert_eq!(path.get(1), Some("b"));
        assert_eq!(path.get(3), None);
    }
}
