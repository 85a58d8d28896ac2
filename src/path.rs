//! Structural paths and compiled path specifications.
//!
//! A [`Path`] records where a value sits in the document tree: the root
//! anchor, then one entry per traversal step — a named property, a map key,
//! or the distinguished splat entry for sequence elements. The renderer
//! maintains the path as it descends and hands it to the converter table
//! before every nested value is rendered.
//!
//! A [`PathSpec`] is the user-facing pattern over paths. The grammar:
//!
//! - `title` / `window.title` — property segments separated by `.`
//! - `[key]` — keyed access; `[3]` is a numeric key, `["a b"]` a quoted
//!   string key, `[*]` matches any key or sequence element
//! - `*` — matches any property name
//! - a leading `^` anchors the pattern at the document root; without it the
//!   pattern matches wherever a path ends in those segments
//! - the empty spec (or `^` alone) denotes the root itself
//!
//! Specs are compiled once when a converter table is built; a syntax error
//! is a configuration error raised there, never at render time.
//!
//! ## Examples
//!
//! ```rust
//! use luon::{Path, PathSpec};
//!
//! let spec = PathSpec::parse("window[*].title").unwrap();
//!
//! let mut path = Path::root();
//! path.push_property("window");
//! path.push_key(luon::LuaValue::from("main"));
//! path.push_property("title");
//! assert!(spec.matches(&path));
//! ```

use crate::{Error, LuaValue, Number, Result};
use std::fmt;

/// One step in a structural path.
#[derive(Clone, Debug, PartialEq)]
pub enum PathEntry {
    /// The document root anchor.
    Root,
    /// A named object member.
    Property(String),
    /// A map key, or the splat entry for sequence elements.
    Key(LuaValue),
}

impl PathEntry {
    /// The distinguished splat entry appended for sequence elements.
    ///
    /// Sequence positions are not meaningful match targets, so every element
    /// of a sequence shares this entry; the `[*]` spec segment matches it.
    #[must_use]
    pub fn element() -> Self {
        PathEntry::Key(LuaValue::String("*".to_string()))
    }
}

impl fmt::Display for PathEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathEntry::Root => write!(f, "^"),
            PathEntry::Property(name) => write!(f, ".{}", name),
            PathEntry::Key(LuaValue::String(s)) => write!(f, "[{}]", s),
            PathEntry::Key(other) => write!(f, "[{}]", other),
        }
    }
}

/// The location of a value, from the document root down.
///
/// Entries are appended root-first as traversal descends. Matching against
/// compiled specs compares most-specific-first, so the path is read in
/// reverse there.
#[derive(Clone, Debug, PartialEq)]
pub struct Path {
    entries: Vec<PathEntry>,
}

impl Path {
    /// Creates a path holding only the root anchor.
    #[must_use]
    pub fn root() -> Self {
        Path {
            entries: vec![PathEntry::Root],
        }
    }

    /// Appends an arbitrary entry.
    pub fn push(&mut self, entry: PathEntry) {
        self.entries.push(entry);
    }

    /// Appends a named-property step.
    pub fn push_property(&mut self, name: impl Into<String>) {
        self.entries.push(PathEntry::Property(name.into()));
    }

    /// Appends a map-key step.
    pub fn push_key(&mut self, key: LuaValue) {
        self.entries.push(PathEntry::Key(key));
    }

    /// Appends the splat step for a sequence element.
    pub fn push_element(&mut self) {
        self.entries.push(PathEntry::element());
    }

    /// Removes the most recently appended entry.
    pub fn pop(&mut self) -> Option<PathEntry> {
        self.entries.pop()
    }

    /// The entries of this path, root-first.
    #[must_use]
    pub fn entries(&self) -> &[PathEntry] {
        &self.entries
    }

    /// Number of entries, counting the root anchor.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// `true` only for a path with no entries at all; [`Path::root`] is not
    /// empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in &self.entries {
            write!(f, "{}", entry)?;
        }
        Ok(())
    }
}

/// One compiled segment of a [`PathSpec`].
#[derive(Clone, Debug, PartialEq)]
enum SpecEntry {
    Root,
    Property(String),
    AnyProperty,
    Key(LuaValue),
    AnyKey,
}

impl SpecEntry {
    fn matches(&self, actual: &PathEntry) -> bool {
        match (self, actual) {
            (SpecEntry::Root, PathEntry::Root) => true,
            (SpecEntry::Property(p), PathEntry::Property(q)) => p == q,
            (SpecEntry::AnyProperty, PathEntry::Property(_)) => true,
            (SpecEntry::Key(k), PathEntry::Key(a)) => k == a,
            (SpecEntry::AnyKey, PathEntry::Key(_)) => true,
            _ => false,
        }
    }
}

/// A compiled pattern over paths, used to select a converter by structural
/// location.
///
/// Compiled once via [`PathSpec::parse`]; the entries are stored reversed
/// (most specific first) so matching walks the tail of a path.
#[derive(Clone, Debug, PartialEq)]
pub struct PathSpec {
    raw: String,
    rev: Vec<SpecEntry>,
}

impl PathSpec {
    /// Compiles a spec string.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPathSpec`] for syntax the grammar does not
    /// allow: empty segments, unterminated `[`, or characters that are not
    /// valid in a property name.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use luon::PathSpec;
    ///
    /// assert!(PathSpec::parse("a.b").is_ok());
    /// assert!(PathSpec::parse("^items[*].name").is_ok());
    /// assert!(PathSpec::parse("a..b").is_err());
    /// assert!(PathSpec::parse("a[unclosed").is_err());
    /// ```
    pub fn parse(spec: &str) -> Result<Self> {
        let mut entries = Vec::new();
        let mut rest = spec;

        if let Some(r) = rest.strip_prefix('^') {
            entries.push(SpecEntry::Root);
            rest = r;
        }

        if rest.is_empty() && entries.is_empty() {
            // The empty spec denotes the root anchor.
            entries.push(SpecEntry::Root);
        }

        let mut first = true;
        while !rest.is_empty() {
            if let Some(r) = rest.strip_prefix('[') {
                let end = key_segment_end(spec, r)?;
                entries.push(parse_key_segment(spec, &r[..end])?);
                rest = &r[end + 1..];
            } else {
                let r = if first {
                    rest
                } else {
                    rest.strip_prefix('.').ok_or_else(|| {
                        Error::invalid_path_spec(spec, "expected '.' or '[' between segments")
                    })?
                };
                let end = r.find(['.', '[']).unwrap_or(r.len());
                entries.push(parse_property_segment(spec, &r[..end])?);
                rest = &r[end..];
            }
            first = false;
        }

        entries.reverse();
        Ok(PathSpec {
            raw: spec.to_string(),
            rev: entries,
        })
    }

    /// The original spec string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Returns `true` if this spec matches the given path.
    ///
    /// The reversed spec entries are compared against the tail of the path,
    /// entry by entry, wildcards matching their kind. An unanchored spec
    /// floats; an anchored spec carries the root entry and therefore only
    /// matches the exact location from the document root.
    #[must_use]
    pub fn matches(&self, path: &Path) -> bool {
        let entries = path.entries();
        if self.rev.len() > entries.len() {
            return false;
        }
        self.rev
            .iter()
            .zip(entries.iter().rev())
            .all(|(spec, actual)| spec.matches(actual))
    }
}

impl fmt::Display for PathSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

fn parse_property_segment(spec: &str, name: &str) -> Result<SpecEntry> {
    if name.is_empty() {
        return Err(Error::invalid_path_spec(spec, "empty segment"));
    }
    if name == "*" {
        return Ok(SpecEntry::AnyProperty);
    }
    if !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Err(Error::invalid_path_spec(
            spec,
            "property segments may only contain alphanumerics and '_'",
        ));
    }
    Ok(SpecEntry::Property(name.to_string()))
}

/// Finds the index of the `]` closing a key segment, skipping over a quoted
/// span so quoted keys may contain `]` themselves.
fn key_segment_end(spec: &str, r: &str) -> Result<usize> {
    let quote = match r.as_bytes().first() {
        Some(b'"') => Some('"'),
        Some(b'\'') => Some('\''),
        _ => None,
    };
    match quote {
        Some(q) => {
            let close = r[1..]
                .find(q)
                .ok_or_else(|| Error::invalid_path_spec(spec, "unterminated quoted key"))?
                + 1;
            match r[close + 1..].chars().next() {
                Some(']') => Ok(close + 1),
                _ => Err(Error::invalid_path_spec(
                    spec,
                    "expected ']' after quoted key",
                )),
            }
        }
        None => r
            .find(']')
            .ok_or_else(|| Error::invalid_path_spec(spec, "unterminated '['")),
    }
}

fn parse_key_segment(spec: &str, inner: &str) -> Result<SpecEntry> {
    if inner.is_empty() {
        return Err(Error::invalid_path_spec(spec, "empty key segment"));
    }
    if inner == "*" {
        return Ok(SpecEntry::AnyKey);
    }
    if inner.len() >= 2 {
        let bytes = inner.as_bytes();
        if (bytes[0] == b'"' && bytes[inner.len() - 1] == b'"')
            || (bytes[0] == b'\'' && bytes[inner.len() - 1] == b'\'')
        {
            return Ok(SpecEntry::Key(LuaValue::String(
                inner[1..inner.len() - 1].to_string(),
            )));
        }
    }
    if let Ok(n) = inner.parse::<i64>() {
        return Ok(SpecEntry::Key(LuaValue::Number(Number::Integer(n))));
    }
    Ok(SpecEntry::Key(LuaValue::String(inner.to_string())))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path_of(entries: &[PathEntry]) -> Path {
        let mut path = Path::root();
        for entry in entries {
            path.push(entry.clone());
        }
        path
    }

    #[test]
    fn test_parse_properties() {
        let spec = PathSpec::parse("a.b").unwrap();
        assert_eq!(
            spec.rev,
            vec![
                SpecEntry::Property("b".to_string()),
                SpecEntry::Property("a".to_string()),
            ]
        );
    }

    #[test]
    fn test_parse_anchored() {
        let spec = PathSpec::parse("^a").unwrap();
        assert_eq!(
            spec.rev,
            vec![SpecEntry::Property("a".to_string()), SpecEntry::Root]
        );
    }

    #[test]
    fn test_parse_root_specs() {
        assert_eq!(PathSpec::parse("").unwrap().rev, vec![SpecEntry::Root]);
        assert_eq!(PathSpec::parse("^").unwrap().rev, vec![SpecEntry::Root]);
    }

    #[test]
    fn test_parse_keys() {
        let spec = PathSpec::parse("items[3]").unwrap();
        assert_eq!(
            spec.rev,
            vec![
                SpecEntry::Key(LuaValue::Number(Number::Integer(3))),
                SpecEntry::Property("items".to_string()),
            ]
        );

        let spec = PathSpec::parse("[\"a b\"]").unwrap();
        assert_eq!(
            spec.rev,
            vec![SpecEntry::Key(LuaValue::String("a b".to_string()))]
        );

        let spec = PathSpec::parse("items[*]").unwrap();
        assert_eq!(
            spec.rev,
            vec![SpecEntry::AnyKey, SpecEntry::Property("items".to_string())]
        );
    }

    #[test]
    fn test_parse_quoted_key_with_bracket() {
        let spec = PathSpec::parse("[\"a]b\"]").unwrap();
        assert_eq!(
            spec.rev,
            vec![SpecEntry::Key(LuaValue::String("a]b".to_string()))]
        );

        let spec = PathSpec::parse("items['x]y'].name").unwrap();
        assert_eq!(
            spec.rev,
            vec![
                SpecEntry::Property("name".to_string()),
                SpecEntry::Key(LuaValue::String("x]y".to_string())),
                SpecEntry::Property("items".to_string()),
            ]
        );
    }

    #[test]
    fn test_parse_errors() {
        assert!(PathSpec::parse("a..b").is_err());
        assert!(PathSpec::parse("a[").is_err());
        assert!(PathSpec::parse("a[]").is_err());
        assert!(PathSpec::parse("a b").is_err());
        assert!(PathSpec::parse(".a").is_err());

        let err = PathSpec::parse("[\"open]").unwrap_err();
        assert!(err.to_string().contains("unterminated quoted key"));

        let err = PathSpec::parse("[\"a\"x]").unwrap_err();
        assert!(err.to_string().contains("after quoted key"));
    }

    #[test]
    fn test_unanchored_match_floats() {
        let spec = PathSpec::parse("a.b").unwrap();

        let exact = path_of(&[
            PathEntry::Property("a".to_string()),
            PathEntry::Property("b".to_string()),
        ]);
        assert!(spec.matches(&exact));

        let deeper = path_of(&[
            PathEntry::Property("x".to_string()),
            PathEntry::Property("a".to_string()),
            PathEntry::Property("b".to_string()),
        ]);
        assert!(spec.matches(&deeper));

        let other = path_of(&[PathEntry::Property("b".to_string())]);
        assert!(!spec.matches(&other));
    }

    #[test]
    fn test_anchored_match_is_exact() {
        let spec = PathSpec::parse("^a.b").unwrap();

        let exact = path_of(&[
            PathEntry::Property("a".to_string()),
            PathEntry::Property("b".to_string()),
        ]);
        assert!(spec.matches(&exact));

        let deeper = path_of(&[
            PathEntry::Property("x".to_string()),
            PathEntry::Property("a".to_string()),
            PathEntry::Property("b".to_string()),
        ]);
        assert!(!spec.matches(&deeper));
    }

    #[test]
    fn test_root_spec_matches_root_only() {
        let spec = PathSpec::parse("").unwrap();
        assert!(spec.matches(&Path::root()));

        let child = path_of(&[PathEntry::Property("a".to_string())]);
        assert!(!spec.matches(&child));
    }

    #[test]
    fn test_wildcards() {
        let spec = PathSpec::parse("*.title").unwrap();
        let path = path_of(&[
            PathEntry::Property("window".to_string()),
            PathEntry::Property("title".to_string()),
        ]);
        assert!(spec.matches(&path));

        // Property wildcard does not match key entries.
        let keyed = path_of(&[
            PathEntry::Key(LuaValue::from("window")),
            PathEntry::Property("title".to_string()),
        ]);
        assert!(!spec.matches(&keyed));

        let spec = PathSpec::parse("items[*]").unwrap();
        let mut path = Path::root();
        path.push_property("items");
        path.push_element();
        assert!(spec.matches(&path));
    }

    #[test]
    fn test_key_spec_against_splat() {
        // A concrete key spec must not match the sequence splat entry.
        let spec = PathSpec::parse("items[first]").unwrap();
        let mut path = Path::root();
        path.push_property("items");
        path.push_element();
        assert!(!spec.matches(&path));
    }

    #[test]
    fn test_push_pop() {
        let mut path = Path::root();
        path.push_property("a");
        path.push_key(LuaValue::from(1));
        assert_eq!(path.len(), 3);
        path.pop();
        assert_eq!(path.len(), 2);
        assert_eq!(path.to_string(), "^.a");
    }
}
