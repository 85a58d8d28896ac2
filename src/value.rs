//! Dynamic value representation for Lua rendering.
//!
//! This module provides the [`LuaValue`] enum, the in-memory value tree the
//! renderer serializes, together with [`Number`], [`LuaObject`] and
//! [`Decoration`].
//!
//! ## Core Types
//!
//! - [`LuaValue`]: any renderable value (nil, bool, number, string,
//!   sequence, map, object, raw source, decoration)
//! - [`Number`]: numeric values including the special values Infinity,
//!   -Infinity and NaN, which render as Lua arithmetic expressions
//! - [`LuaObject`]: the hybrid shape with both named members and positional
//!   elements, optionally carrying a declared class name for type-based
//!   converters
//!
//! ## Usage Patterns
//!
//! ### Creating Values
//!
//! ```rust
//! use luon::{LuaValue, Number};
//!
//! // From primitives
//! let nil = LuaValue::Nil;
//! let boolean = LuaValue::from(true);
//! let number = LuaValue::from(42);
//! let text = LuaValue::from("hello");
//!
//! // Using the lua! macro
//! use luon::lua;
//! let obj = lua!({
//!     "name": "Alice",
//!     "age": 30
//! });
//! ```
//!
//! ### Type Checking
//!
//! ```rust
//! use luon::LuaValue;
//!
//! let value = LuaValue::from(42);
//! assert!(value.is_number());
//! assert!(!value.is_string());
//! ```
//!
//! ### Extracting Values
//!
//! ```rust
//! use luon::LuaValue;
//! use std::convert::TryFrom;
//!
//! let value = LuaValue::from(42);
//! let num: i64 = i64::try_from(value).unwrap();
//! assert_eq!(num, 42);
//! ```

use crate::LuaMap;
use serde::{Serialize, Serializer};
use std::fmt;

/// A dynamically-typed representation of any renderable Lua value.
///
/// The variant set is closed: every shape the renderer can meet is one of
/// these, and collection dispatch is exhaustive. Sequences and maps carry a
/// `formatted` tag — plain (`formatted: false`) collections always render
/// inline, formatted ones obey the multiline threshold.
///
/// # Examples
///
/// ```rust
/// use luon::{LuaValue, Number};
///
/// let nil = LuaValue::Nil;
/// let num = LuaValue::Number(Number::Integer(42));
/// let text = LuaValue::String("hello".to_string());
///
/// assert!(nil.is_nil());
/// assert!(num.is_number());
/// assert!(text.is_string());
/// ```
#[derive(Clone, Debug, PartialEq, Default)]
pub enum LuaValue {
    #[default]
    Nil,
    Bool(bool),
    Number(Number),
    String(String),
    /// An ordered sequence. Plain sequences (`formatted: false`) always
    /// render inline regardless of length.
    Seq {
        items: Vec<LuaValue>,
        formatted: bool,
    },
    /// An insertion-ordered map whose keys may be any value.
    Map {
        entries: Vec<(LuaValue, LuaValue)>,
        formatted: bool,
    },
    /// Named members plus positional elements, both present simultaneously.
    Object(LuaObject),
    /// Verbatim Lua source, emitted unchanged and never recursed into.
    Raw(String),
    /// A wrapped value with text spliced before and after its rendering.
    Decorated(Box<Decoration>),
}

/// The hybrid object shape: insertion-ordered named members plus an ordered
/// sequence of positional elements.
///
/// `class` is the declared type name used by class-registered converters;
/// untyped objects leave it `None`.
///
/// # Examples
///
/// ```rust
/// use luon::{LuaObject, LuaValue};
///
/// let mut obj = LuaObject::new();
/// obj.insert("name", LuaValue::from("border"));
/// obj.push(LuaValue::from(1));
/// obj.push(LuaValue::from(2));
///
/// assert_eq!(obj.props.len(), 1);
/// assert_eq!(obj.elems.len(), 2);
/// ```
#[derive(Clone, Debug, PartialEq, Default)]
pub struct LuaObject {
    /// Declared class name, matched by class-registered converters.
    pub class: Option<String>,
    /// Named members, in insertion order.
    pub props: LuaMap,
    /// Positional elements, in order.
    pub elems: Vec<LuaValue>,
}

impl LuaObject {
    /// Creates an empty, untyped object.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty object with the given declared class name.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use luon::LuaObject;
    ///
    /// let obj = LuaObject::of_class("Frame");
    /// assert_eq!(obj.class.as_deref(), Some("Frame"));
    /// ```
    #[must_use]
    pub fn of_class(class: impl Into<String>) -> Self {
        LuaObject {
            class: Some(class.into()),
            ..Self::default()
        }
    }

    /// Inserts a named member, returning the previous value for that name.
    pub fn insert(&mut self, name: impl Into<String>, value: LuaValue) -> Option<LuaValue> {
        self.props.insert(name.into(), value)
    }

    /// Appends a positional element.
    pub fn push(&mut self, value: LuaValue) {
        self.elems.push(value);
    }

    /// Returns `true` if the object has neither named members nor positional
    /// elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.props.is_empty() && self.elems.is_empty()
    }
}

/// The text spliced around a wrapped value's rendering.
#[derive(Clone, Debug, PartialEq)]
pub struct Decoration {
    pub before: String,
    pub value: LuaValue,
    pub after: String,
}

/// A numeric value that can be an integer, a float, or a special value.
///
/// Lua has no literal syntax for the special values, so they render as
/// arithmetic expressions: NaN as `0/0`, Infinity as `1/0` and -Infinity as
/// `-1/0`. A `Float` payload that happens to be NaN or infinite renders the
/// same way as the dedicated variants.
///
/// # Examples
///
/// ```rust
/// use luon::Number;
///
/// let integer = Number::Integer(42);
/// let float = Number::Float(3.5);
/// let infinity = Number::Infinity;
///
/// assert!(integer.is_integer());
/// assert_eq!(integer.as_i64(), Some(42));
/// assert_eq!(float.as_f64(), 3.5);
/// assert!(infinity.is_special());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum Number {
    Integer(i64),
    Float(f64),
    Infinity,
    NegativeInfinity,
    NaN,
}

impl Number {
    /// Returns `true` if this is an integer value.
    #[inline]
    #[must_use]
    pub const fn is_integer(&self) -> bool {
        matches!(self, Number::Integer(_))
    }

    /// Returns `true` if this is a floating-point value.
    #[inline]
    #[must_use]
    pub const fn is_float(&self) -> bool {
        matches!(self, Number::Float(_))
    }

    /// Returns `true` if this is a special value (Infinity, -Infinity, or
    /// NaN), counting `Float` payloads that are not finite.
    #[inline]
    #[must_use]
    pub fn is_special(&self) -> bool {
        match self {
            Number::Infinity | Number::NegativeInfinity | Number::NaN => true,
            Number::Float(f) => !f.is_finite(),
            Number::Integer(_) => false,
        }
    }

    /// Returns `true` if this number is NaN.
    ///
    /// NaN values are rejected as table keys.
    #[inline]
    #[must_use]
    pub fn is_nan(&self) -> bool {
        match self {
            Number::NaN => true,
            Number::Float(f) => f.is_nan(),
            _ => false,
        }
    }

    /// Converts this number to an `i64` if possible.
    ///
    /// Returns `Some(i64)` for integers and for floats with no fractional
    /// part that fit in i64 range. Returns `None` otherwise.
    #[inline]
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Number::Integer(i) => Some(*i),
            Number::Float(f) => {
                if f.fract() == 0.0 && *f >= i64::MIN as f64 && *f <= i64::MAX as f64 {
                    Some(*f as i64)
                } else {
                    None
                }
            }
            _ => None,
        }
    }

    /// Converts this number to an `f64`. Always succeeds.
    #[inline]
    #[must_use]
    pub fn as_f64(&self) -> f64 {
        match self {
            Number::Integer(i) => *i as f64,
            Number::Float(f) => *f,
            Number::Infinity => f64::INFINITY,
            Number::NegativeInfinity => f64::NEG_INFINITY,
            Number::NaN => f64::NAN,
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Integer(i) => write!(f, "{}", i),
            Number::Float(fl) => write!(f, "{}", fl),
            Number::Infinity => write!(f, "Infinity"),
            Number::NegativeInfinity => write!(f, "-Infinity"),
            Number::NaN => write!(f, "NaN"),
        }
    }
}

impl From<i8> for Number {
    fn from(value: i8) -> Self {
        Number::Integer(value as i64)
    }
}

impl From<i16> for Number {
    fn from(value: i16) -> Self {
        Number::Integer(value as i64)
    }
}

impl From<i32> for Number {
    fn from(value: i32) -> Self {
        Number::Integer(value as i64)
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Number::Integer(value)
    }
}

impl From<u8> for Number {
    fn from(value: u8) -> Self {
        Number::Integer(value as i64)
    }
}

impl From<u16> for Number {
    fn from(value: u16) -> Self {
        Number::Integer(value as i64)
    }
}

impl From<u32> for Number {
    fn from(value: u32) -> Self {
        Number::Integer(value as i64)
    }
}

impl From<f32> for Number {
    fn from(value: f32) -> Self {
        Number::Float(value as f64)
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Number::Float(value)
    }
}

/// The structural kind of a value, used as the key for kind-registered
/// converters.
///
/// Kinds are deliberately flat: there is no kind hierarchy, so a converter
/// registered for [`ValueKind::Number`] matches every number and nothing
/// else. Only declared object classes participate in the ancestry walk.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Nil,
    Bool,
    Number,
    String,
    Seq,
    Map,
    Object,
    Raw,
    Decorated,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueKind::Nil => "nil",
            ValueKind::Bool => "bool",
            ValueKind::Number => "number",
            ValueKind::String => "string",
            ValueKind::Seq => "seq",
            ValueKind::Map => "map",
            ValueKind::Object => "object",
            ValueKind::Raw => "raw",
            ValueKind::Decorated => "decorated",
        };
        f.write_str(name)
    }
}

impl LuaValue {
    /// Creates a formatted sequence, which obeys the multiline threshold.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use luon::LuaValue;
    ///
    /// let seq = LuaValue::seq(vec![LuaValue::from(1), LuaValue::from(2)]);
    /// assert!(seq.is_seq());
    /// ```
    #[must_use]
    pub fn seq(items: Vec<LuaValue>) -> Self {
        LuaValue::Seq {
            items,
            formatted: true,
        }
    }

    /// Creates a plain sequence, which always renders inline.
    #[must_use]
    pub fn plain_seq(items: Vec<LuaValue>) -> Self {
        LuaValue::Seq {
            items,
            formatted: false,
        }
    }

    /// Creates a formatted map from key-value pairs, preserving their order.
    #[must_use]
    pub fn map(entries: Vec<(LuaValue, LuaValue)>) -> Self {
        LuaValue::Map {
            entries,
            formatted: true,
        }
    }

    /// Creates a plain map, which always renders inline.
    #[must_use]
    pub fn plain_map(entries: Vec<(LuaValue, LuaValue)>) -> Self {
        LuaValue::Map {
            entries,
            formatted: false,
        }
    }

    /// Creates a raw value: verbatim Lua source emitted unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use luon::{render_value, LuaValue};
    ///
    /// let v = LuaValue::raw("os.time()");
    /// assert_eq!(render_value(&v).unwrap(), "os.time()");
    /// ```
    #[must_use]
    pub fn raw(text: impl Into<String>) -> Self {
        LuaValue::Raw(text.into())
    }

    /// Wraps a value with text spliced before and after its rendering.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use luon::{render_value, LuaValue};
    ///
    /// let v = LuaValue::decorated("f(", LuaValue::from(1), ")");
    /// assert_eq!(render_value(&v).unwrap(), "f(1)");
    /// ```
    #[must_use]
    pub fn decorated(before: impl Into<String>, value: LuaValue, after: impl Into<String>) -> Self {
        LuaValue::Decorated(Box::new(Decoration {
            before: before.into(),
            value,
            after: after.into(),
        }))
    }

    /// Returns the structural kind of this value.
    #[inline]
    #[must_use]
    pub const fn kind(&self) -> ValueKind {
        match self {
            LuaValue::Nil => ValueKind::Nil,
            LuaValue::Bool(_) => ValueKind::Bool,
            LuaValue::Number(_) => ValueKind::Number,
            LuaValue::String(_) => ValueKind::String,
            LuaValue::Seq { .. } => ValueKind::Seq,
            LuaValue::Map { .. } => ValueKind::Map,
            LuaValue::Object(_) => ValueKind::Object,
            LuaValue::Raw(_) => ValueKind::Raw,
            LuaValue::Decorated(_) => ValueKind::Decorated,
        }
    }

    /// Returns `true` if the value is nil.
    #[inline]
    #[must_use]
    pub const fn is_nil(&self) -> bool {
        matches!(self, LuaValue::Nil)
    }

    /// Returns `true` if the value is a boolean.
    #[inline]
    #[must_use]
    pub const fn is_bool(&self) -> bool {
        matches!(self, LuaValue::Bool(_))
    }

    /// Returns `true` if the value is a number.
    #[inline]
    #[must_use]
    pub const fn is_number(&self) -> bool {
        matches!(self, LuaValue::Number(_))
    }

    /// Returns `true` if the value is a string.
    #[inline]
    #[must_use]
    pub const fn is_string(&self) -> bool {
        matches!(self, LuaValue::String(_))
    }

    /// Returns `true` if the value is a sequence.
    #[inline]
    #[must_use]
    pub const fn is_seq(&self) -> bool {
        matches!(self, LuaValue::Seq { .. })
    }

    /// Returns `true` if the value is a map.
    #[inline]
    #[must_use]
    pub const fn is_map(&self) -> bool {
        matches!(self, LuaValue::Map { .. })
    }

    /// Returns `true` if the value is an object.
    #[inline]
    #[must_use]
    pub const fn is_object(&self) -> bool {
        matches!(self, LuaValue::Object(_))
    }

    /// Returns `true` if the value is raw Lua source.
    #[inline]
    #[must_use]
    pub const fn is_raw(&self) -> bool {
        matches!(self, LuaValue::Raw(_))
    }

    /// If the value is a boolean, returns it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            LuaValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// If the value is a string, returns a reference to it. Otherwise
    /// returns `None`.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            LuaValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// If the value is an i64 integer or a whole-number float, returns it.
    /// Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            LuaValue::Number(n) => n.as_i64(),
            _ => None,
        }
    }

    /// If the value is a sequence, returns its items. Otherwise returns
    /// `None`.
    #[inline]
    #[must_use]
    pub fn as_seq(&self) -> Option<&[LuaValue]> {
        match self {
            LuaValue::Seq { items, .. } => Some(items),
            _ => None,
        }
    }

    /// If the value is an object, returns a reference to it. Otherwise
    /// returns `None`.
    #[inline]
    #[must_use]
    pub fn as_object(&self) -> Option<&LuaObject> {
        match self {
            LuaValue::Object(obj) => Some(obj),
            _ => None,
        }
    }

    /// The class name of a typed object; `None` for untyped objects and
    /// every other value.
    #[inline]
    #[must_use]
    pub fn class(&self) -> Option<&str> {
        match self {
            LuaValue::Object(obj) => obj.class.as_deref(),
            _ => None,
        }
    }
}

impl fmt::Display for LuaValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LuaValue::Nil => write!(f, "nil"),
            LuaValue::Bool(b) => write!(f, "{}", b),
            LuaValue::Number(n) => write!(f, "{}", n),
            LuaValue::String(s) => write!(f, "{:?}", s),
            LuaValue::Seq { items, .. } => write!(f, "seq[{}]", items.len()),
            LuaValue::Map { entries, .. } => write!(f, "map[{}]", entries.len()),
            LuaValue::Object(obj) => match &obj.class {
                Some(class) => write!(f, "object<{}>", class),
                None => write!(f, "object"),
            },
            LuaValue::Raw(text) => write!(f, "raw({})", text),
            LuaValue::Decorated(d) => write!(f, "decorated({})", d.value),
        }
    }
}

impl Serialize for LuaValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            LuaValue::Nil => serializer.serialize_unit(),
            LuaValue::Bool(b) => serializer.serialize_bool(*b),
            LuaValue::Number(Number::Integer(i)) => serializer.serialize_i64(*i),
            LuaValue::Number(Number::Float(f)) => serializer.serialize_f64(*f),
            LuaValue::Number(Number::Infinity) => serializer.serialize_f64(f64::INFINITY),
            LuaValue::Number(Number::NegativeInfinity) => {
                serializer.serialize_f64(f64::NEG_INFINITY)
            }
            LuaValue::Number(Number::NaN) => serializer.serialize_f64(f64::NAN),
            LuaValue::String(s) => serializer.serialize_str(s),
            LuaValue::Seq { items, .. } => {
                use serde::ser::SerializeSeq;
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            LuaValue::Map { entries, .. } => {
                use serde::ser::SerializeMap;
                let mut map = serializer.serialize_map(Some(entries.len()))?;
                for (k, v) in entries {
                    map.serialize_entry(k, v)?;
                }
                map.end()
            }
            LuaValue::Object(obj) => {
                use serde::ser::SerializeMap;
                let mut map = serializer.serialize_map(Some(obj.props.len() + obj.elems.len()))?;
                for (k, v) in obj.props.iter() {
                    map.serialize_entry(k, v)?;
                }
                // Positional elements take 1-based numeric keys.
                for (i, v) in obj.elems.iter().enumerate() {
                    map.serialize_entry(&(i as i64 + 1), v)?;
                }
                map.end()
            }
            LuaValue::Raw(text) => serializer.serialize_str(text),
            LuaValue::Decorated(d) => d.value.serialize(serializer),
        }
    }
}

impl TryFrom<LuaValue> for i64 {
    type Error = crate::Error;

    fn try_from(value: LuaValue) -> crate::Result<Self> {
        match value {
            LuaValue::Number(Number::Integer(i)) => Ok(i),
            LuaValue::Number(Number::Float(f)) => {
                if f.fract() == 0.0 && f >= i64::MIN as f64 && f <= i64::MAX as f64 {
                    Ok(f as i64)
                } else {
                    Err(crate::Error::custom(format!(
                        "cannot convert float {} to i64",
                        f
                    )))
                }
            }
            _ => Err(crate::Error::custom(format!(
                "expected integer, found {}",
                value
            ))),
        }
    }
}

impl TryFrom<LuaValue> for f64 {
    type Error = crate::Error;

    fn try_from(value: LuaValue) -> crate::Result<Self> {
        match value {
            LuaValue::Number(n) => Ok(n.as_f64()),
            _ => Err(crate::Error::custom(format!(
                "expected number, found {}",
                value
            ))),
        }
    }
}

impl TryFrom<LuaValue> for bool {
    type Error = crate::Error;

    fn try_from(value: LuaValue) -> crate::Result<Self> {
        match value {
            LuaValue::Bool(b) => Ok(b),
            _ => Err(crate::Error::custom(format!(
                "expected bool, found {}",
                value
            ))),
        }
    }
}

impl TryFrom<LuaValue> for String {
    type Error = crate::Error;

    fn try_from(value: LuaValue) -> crate::Result<Self> {
        match value {
            LuaValue::String(s) => Ok(s),
            _ => Err(crate::Error::custom(format!(
                "expected string, found {}",
                value
            ))),
        }
    }
}

impl From<bool> for LuaValue {
    fn from(value: bool) -> Self {
        LuaValue::Bool(value)
    }
}

impl From<i8> for LuaValue {
    fn from(value: i8) -> Self {
        LuaValue::Number(Number::Integer(value as i64))
    }
}

impl From<i16> for LuaValue {
    fn from(value: i16) -> Self {
        LuaValue::Number(Number::Integer(value as i64))
    }
}

impl From<i32> for LuaValue {
    fn from(value: i32) -> Self {
        LuaValue::Number(Number::Integer(value as i64))
    }
}

impl From<i64> for LuaValue {
    fn from(value: i64) -> Self {
        LuaValue::Number(Number::Integer(value))
    }
}

impl From<u8> for LuaValue {
    fn from(value: u8) -> Self {
        LuaValue::Number(Number::Integer(value as i64))
    }
}

impl From<u16> for LuaValue {
    fn from(value: u16) -> Self {
        LuaValue::Number(Number::Integer(value as i64))
    }
}

impl From<u32> for LuaValue {
    fn from(value: u32) -> Self {
        LuaValue::Number(Number::Integer(value as i64))
    }
}

impl From<f32> for LuaValue {
    fn from(value: f32) -> Self {
        LuaValue::Number(Number::Float(value as f64))
    }
}

impl From<f64> for LuaValue {
    fn from(value: f64) -> Self {
        LuaValue::Number(Number::Float(value))
    }
}

impl From<String> for LuaValue {
    fn from(value: String) -> Self {
        LuaValue::String(value)
    }
}

impl From<&str> for LuaValue {
    fn from(value: &str) -> Self {
        LuaValue::String(value.to_string())
    }
}

impl From<Vec<LuaValue>> for LuaValue {
    fn from(value: Vec<LuaValue>) -> Self {
        LuaValue::seq(value)
    }
}

impl From<LuaObject> for LuaValue {
    fn from(value: LuaObject) -> Self {
        LuaValue::Object(value)
    }
}

impl From<LuaMap> for LuaValue {
    fn from(value: LuaMap) -> Self {
        LuaValue::Object(LuaObject {
            class: None,
            props: value,
            elems: Vec::new(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::convert::TryFrom;

    #[test]
    fn test_tryfrom_i64() {
        let value = LuaValue::Number(Number::Integer(42));
        let result: i64 = TryFrom::try_from(value).unwrap();
        assert_eq!(result, 42);

        let value = LuaValue::Number(Number::Float(42.0));
        let result: i64 = TryFrom::try_from(value).unwrap();
        assert_eq!(result, 42);

        let value = LuaValue::String("test".to_string());
        assert!(i64::try_from(value).is_err());
    }

    #[test]
    fn test_tryfrom_f64() {
        let value = LuaValue::Number(Number::Float(3.5));
        let result: f64 = TryFrom::try_from(value).unwrap();
        assert_eq!(result, 3.5);

        let value = LuaValue::Number(Number::Infinity);
        let result: f64 = TryFrom::try_from(value).unwrap();
        assert_eq!(result, f64::INFINITY);
    }

    #[test]
    fn test_from_primitives() {
        assert_eq!(LuaValue::from(true), LuaValue::Bool(true));
        assert_eq!(
            LuaValue::from(42i64),
            LuaValue::Number(Number::Integer(42))
        );
        assert_eq!(
            LuaValue::from(3.5f64),
            LuaValue::Number(Number::Float(3.5))
        );
        assert_eq!(
            LuaValue::from("test"),
            LuaValue::String("test".to_string())
        );
    }

    #[test]
    fn test_number_special_values() {
        assert!(Number::NaN.is_nan());
        assert!(Number::Float(f64::NAN).is_nan());
        assert!(!Number::Float(1.5).is_nan());
        assert!(Number::Infinity.is_special());
        assert!(Number::Float(f64::NEG_INFINITY).is_special());
        assert!(!Number::Integer(0).is_special());
    }

    #[test]
    fn test_kind() {
        assert_eq!(LuaValue::Nil.kind(), ValueKind::Nil);
        assert_eq!(LuaValue::seq(vec![]).kind(), ValueKind::Seq);
        assert_eq!(LuaValue::map(vec![]).kind(), ValueKind::Map);
        assert_eq!(
            LuaValue::Object(LuaObject::new()).kind(),
            ValueKind::Object
        );
        assert_eq!(LuaValue::raw("x").kind(), ValueKind::Raw);
    }

    #[test]
    fn test_object_helpers() {
        let mut obj = LuaObject::of_class("Frame");
        assert!(obj.is_empty());
        obj.insert("width", LuaValue::from(100));
        obj.push(LuaValue::from("child"));
        assert!(!obj.is_empty());
        assert_eq!(obj.props.get("width").and_then(|v| v.as_i64()), Some(100));
        assert_eq!(obj.elems.len(), 1);
    }
}
