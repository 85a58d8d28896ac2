//! Value converters and their resolution.
//!
//! A converter is a function `&LuaValue -> LuaValue` that rewrites a value
//! before it is rendered. Converters are selected by structural location
//! (a [`PathSpec`]), by structural kind ([`ValueKind`]), or by declared
//! object class, with strict precedence:
//!
//! 1. **Path rules**, scanned in declaration order — first match wins.
//! 2. **Exact type**: the object's declared class, or the value's kind.
//! 3. **Class ancestry walk**: for typed objects only, the precomputed
//!    ancestor chain is scanned from the immediate parent upward; the
//!    generic object kind acts as the root of every chain.
//!
//! Path rules pin an exact structural location and therefore dominate the
//! type rules, which are structural defaults. Primitive kinds never walk a
//! hierarchy: a converter for [`ValueKind::Number`] matches numbers and
//! nothing else.
//!
//! The table is compiled once by [`ConvertersBuilder::build`] and immutable
//! afterwards; bad path specs fail there, never at render time.
//!
//! ## Examples
//!
//! ```rust
//! use luon::{lua, Converters, LuaValue, Renderer, RenderOptions, ValueKind};
//!
//! let converters = Converters::builder()
//!     // Pin one location...
//!     .path("window.title", |_| LuaValue::from("fixed"))
//!     // ...and default every other string to uppercase.
//!     .kind(ValueKind::String, |v| match v.as_str() {
//!         Some(s) => LuaValue::from(s.to_uppercase()),
//!         None => v.clone(),
//!     })
//!     .build()
//!     .unwrap();
//!
//! let renderer = Renderer::with_converters(RenderOptions::new(), converters);
//! let value = lua!({ "window": { "title": "ignored", "footer": "small" } });
//! let out = renderer.render_document(&value).unwrap();
//! assert_eq!(out, "window = {\n  title = \"fixed\";\n  footer = \"SMALL\";\n}\n");
//! ```

use crate::{LuaValue, Path, PathSpec, Result, ValueKind};
use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// A transformation applied to a value before it is rendered.
///
/// Converters are shared (`Arc`) and `Send + Sync`, so a built table can be
/// used from concurrent render calls.
pub type ConverterFn = Arc<dyn Fn(&LuaValue) -> LuaValue + Send + Sync>;

/// An immutable, compiled converter table.
///
/// Built once via [`Converters::builder`]; rendering never mutates it.
#[derive(Clone, Default)]
pub struct Converters {
    path_rules: Vec<(PathSpec, ConverterFn)>,
    kind_rules: HashMap<ValueKind, ConverterFn>,
    class_rules: HashMap<String, ConverterFn>,
    /// Precomputed ancestor chains, immediate parent first.
    chains: HashMap<String, Vec<String>>,
}

impl Converters {
    /// Starts building a converter table.
    #[must_use]
    pub fn builder() -> ConvertersBuilder {
        ConvertersBuilder::default()
    }

    /// An empty table: every value passes through unchanged.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns `true` if no rules are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.path_rules.is_empty() && self.kind_rules.is_empty() && self.class_rules.is_empty()
    }

    /// Converts a value at the given path, returning the (possibly
    /// unchanged) value.
    ///
    /// Without a path — ad-hoc contexts such as a key rendered outside
    /// document structure — no conversion is attempted. The chosen function
    /// is applied to the original value exactly once; its result is not
    /// re-converted.
    #[must_use]
    pub fn convert<'v>(&self, value: &'v LuaValue, path: Option<&Path>) -> Cow<'v, LuaValue> {
        let Some(path) = path else {
            return Cow::Borrowed(value);
        };
        match self.resolve(value, path) {
            Some(f) => Cow::Owned(f(value)),
            None => Cow::Borrowed(value),
        }
    }

    fn resolve(&self, value: &LuaValue, path: &Path) -> Option<&ConverterFn> {
        for (spec, f) in &self.path_rules {
            if spec.matches(path) {
                return Some(f);
            }
        }

        if let LuaValue::Object(obj) = value {
            if let Some(class) = &obj.class {
                if let Some(f) = self.class_rules.get(class) {
                    return Some(f);
                }
                // The ancestry walk is skipped entirely when no class rule
                // exists, so scalar-heavy trees never pay for it.
                if !self.class_rules.is_empty() {
                    if let Some(chain) = self.chains.get(class) {
                        for ancestor in chain {
                            if let Some(f) = self.class_rules.get(ancestor) {
                                return Some(f);
                            }
                        }
                    }
                }
                // The generic object kind is the root of every ancestry.
                return self.kind_rules.get(&ValueKind::Object);
            }
        }

        self.kind_rules.get(&value.kind())
    }
}

impl fmt::Debug for Converters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Converters")
            .field("path_rules", &self.path_rules.len())
            .field("kind_rules", &self.kind_rules.len())
            .field("class_rules", &self.class_rules.len())
            .finish()
    }
}

/// Builder for [`Converters`].
///
/// Path rules keep their declaration order; for kind and class rules a
/// later registration for the same key replaces the earlier one.
#[derive(Default)]
pub struct ConvertersBuilder {
    path_rules: Vec<(String, ConverterFn)>,
    kind_rules: Vec<(ValueKind, ConverterFn)>,
    class_rules: Vec<(String, ConverterFn)>,
    parents: Vec<(String, String)>,
}

impl ConvertersBuilder {
    /// Registers a converter for a structural location.
    ///
    /// The spec string is compiled by [`build`](Self::build); declaration
    /// order is significant — the first matching path rule wins.
    #[must_use]
    pub fn path<F>(mut self, spec: impl Into<String>, f: F) -> Self
    where
        F: Fn(&LuaValue) -> LuaValue + Send + Sync + 'static,
    {
        self.path_rules.push((spec.into(), Arc::new(f)));
        self
    }

    /// Registers a converter for a structural kind.
    #[must_use]
    pub fn kind<F>(mut self, kind: ValueKind, f: F) -> Self
    where
        F: Fn(&LuaValue) -> LuaValue + Send + Sync + 'static,
    {
        self.kind_rules.push((kind, Arc::new(f)));
        self
    }

    /// Registers a converter for a declared object class.
    #[must_use]
    pub fn class<F>(mut self, class: impl Into<String>, f: F) -> Self
    where
        F: Fn(&LuaValue) -> LuaValue + Send + Sync + 'static,
    {
        self.class_rules.push((class.into(), Arc::new(f)));
        self
    }

    /// Declares `parent` as the immediate ancestor of `class`.
    ///
    /// Ancestry only affects typed objects: a converter registered for an
    /// ancestor class applies to every descendant that has no more specific
    /// rule.
    #[must_use]
    pub fn ancestor(mut self, class: impl Into<String>, parent: impl Into<String>) -> Self {
        self.parents.push((class.into(), parent.into()));
        self
    }

    /// Compiles the table.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPathSpec`](crate::Error::InvalidPathSpec) if
    /// any path string fails to parse, or a custom error if the declared
    /// ancestry contains a cycle.
    pub fn build(self) -> Result<Converters> {
        let mut path_rules = Vec::with_capacity(self.path_rules.len());
        for (raw, f) in self.path_rules {
            path_rules.push((PathSpec::parse(&raw)?, f));
        }

        let kind_rules: HashMap<_, _> = self.kind_rules.into_iter().collect();
        let class_rules: HashMap<_, _> = self.class_rules.into_iter().collect();

        let parent_of: HashMap<String, String> = self.parents.into_iter().collect();
        let mut chains = HashMap::with_capacity(parent_of.len());
        for class in parent_of.keys() {
            let mut chain = Vec::new();
            let mut current = class.as_str();
            while let Some(parent) = parent_of.get(current) {
                if parent == class || chain.contains(parent) {
                    return Err(crate::Error::custom(format!(
                        "class ancestry cycle involving `{}`",
                        class
                    )));
                }
                chain.push(parent.clone());
                current = parent;
            }
            chains.insert(class.clone(), chain);
        }

        Ok(Converters {
            path_rules,
            kind_rules,
            class_rules,
            chains,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LuaObject;

    fn at(entries: &[&str]) -> Path {
        let mut path = Path::root();
        for name in entries {
            path.push_property(*name);
        }
        path
    }

    #[test]
    fn test_no_path_no_conversion() {
        let converters = Converters::builder()
            .kind(ValueKind::Number, |_| LuaValue::from("hit"))
            .build()
            .unwrap();

        let value = LuaValue::from(1);
        assert_eq!(converters.convert(&value, None).as_ref(), &value);
    }

    #[test]
    fn test_path_beats_kind() {
        let converters = Converters::builder()
            .path("a.b", |_| LuaValue::from("path"))
            .kind(ValueKind::Number, |_| LuaValue::from("kind"))
            .build()
            .unwrap();

        let value = LuaValue::from(1);
        let converted = converters.convert(&value, Some(&at(&["a", "b"])));
        assert_eq!(converted.as_ref(), &LuaValue::from("path"));

        let converted = converters.convert(&value, Some(&at(&["a", "c"])));
        assert_eq!(converted.as_ref(), &LuaValue::from("kind"));
    }

    #[test]
    fn test_declaration_order_wins() {
        let converters = Converters::builder()
            .path("*.b", |_| LuaValue::from("first"))
            .path("a.b", |_| LuaValue::from("second"))
            .build()
            .unwrap();

        let converted = converters.convert(&LuaValue::Nil, Some(&at(&["a", "b"])));
        assert_eq!(converted.as_ref(), &LuaValue::from("first"));
    }

    #[test]
    fn test_class_ancestry_walk() {
        let converters = Converters::builder()
            .class("Region", |_| LuaValue::from("region"))
            .ancestor("Button", "Frame")
            .ancestor("Frame", "Region")
            .build()
            .unwrap();

        let value = LuaValue::Object(LuaObject::of_class("Button"));
        let converted = converters.convert(&value, Some(&at(&["x"])));
        assert_eq!(converted.as_ref(), &LuaValue::from("region"));
    }

    #[test]
    fn test_typed_object_falls_back_to_object_kind() {
        let converters = Converters::builder()
            .kind(ValueKind::Object, |_| LuaValue::from("object"))
            .build()
            .unwrap();

        let value = LuaValue::Object(LuaObject::of_class("Button"));
        let converted = converters.convert(&value, Some(&at(&["x"])));
        assert_eq!(converted.as_ref(), &LuaValue::from("object"));
    }

    #[test]
    fn test_build_rejects_bad_spec() {
        let err = Converters::builder()
            .path("a..b", |v| v.clone())
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("a..b"));
    }

    #[test]
    fn test_build_rejects_ancestry_cycle() {
        let err = Converters::builder()
            .ancestor("A", "B")
            .ancestor("B", "A")
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("cycle"));
    }
}
