//! Building [`LuaValue`] trees from serde data structures.
//!
//! [`to_value`] runs any `Serialize` type through [`LuaValueSerializer`] and
//! produces the value tree the renderer consumes. Structs keep their type
//! name as the object class, so class-based converters and ancestry chains
//! apply to serde-built trees exactly as they do to hand-built ones.
//!
//! ```rust
//! use luon::{to_value, render_value};
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct Point { x: i32, y: i32 }
//!
//! let value = to_value(&Point { x: 3, y: 4 }).unwrap();
//! assert_eq!(value.class(), Some("Point"));
//! assert_eq!(render_value(&value).unwrap(), "{\n  x = 3;\n  y = 4;\n}");
//! ```

use crate::{Error, LuaObject, LuaValue, Number, Result};
use serde::{ser, Serialize};

/// Converts any serializable value into a [`LuaValue`] tree.
///
/// Sequences and maps come out formatted, so they participate in multiline
/// layout; structs become typed objects named after the struct.
///
/// # Errors
///
/// Fails on data shapes Lua tables cannot express: newtype, tuple and
/// struct enum variants.
pub fn to_value<T: Serialize + ?Sized>(value: &T) -> Result<LuaValue> {
    value.serialize(LuaValueSerializer)
}

/// Serializer producing [`LuaValue`] trees instead of text.
pub struct LuaValueSerializer;

pub struct SerializeVec {
    vec: Vec<LuaValue>,
}

pub struct SerializeEntries {
    entries: Vec<(LuaValue, LuaValue)>,
    current_key: Option<LuaValue>,
}

pub struct SerializeObject {
    object: LuaObject,
}

impl ser::Serializer for LuaValueSerializer {
    type Ok = LuaValue;
    type Error = Error;

    type SerializeSeq = SerializeVec;
    type SerializeTuple = SerializeVec;
    type SerializeTupleStruct = SerializeVec;
    type SerializeTupleVariant = SerializeVec;
    type SerializeMap = SerializeEntries;
    type SerializeStruct = SerializeObject;
    type SerializeStructVariant = SerializeObject;

    fn serialize_bool(self, v: bool) -> Result<LuaValue> {
        Ok(LuaValue::Bool(v))
    }

    fn serialize_i8(self, v: i8) -> Result<LuaValue> {
        Ok(LuaValue::Number(Number::Integer(v as i64)))
    }

    fn serialize_i16(self, v: i16) -> Result<LuaValue> {
        Ok(LuaValue::Number(Number::Integer(v as i64)))
    }

    fn serialize_i32(self, v: i32) -> Result<LuaValue> {
        Ok(LuaValue::Number(Number::Integer(v as i64)))
    }

    fn serialize_i64(self, v: i64) -> Result<LuaValue> {
        Ok(LuaValue::Number(Number::Integer(v)))
    }

    fn serialize_u8(self, v: u8) -> Result<LuaValue> {
        Ok(LuaValue::Number(Number::Integer(v as i64)))
    }

    fn serialize_u16(self, v: u16) -> Result<LuaValue> {
        Ok(LuaValue::Number(Number::Integer(v as i64)))
    }

    fn serialize_u32(self, v: u32) -> Result<LuaValue> {
        Ok(LuaValue::Number(Number::Integer(v as i64)))
    }

    fn serialize_u64(self, v: u64) -> Result<LuaValue> {
        if v <= i64::MAX as u64 {
            Ok(LuaValue::Number(Number::Integer(v as i64)))
        } else {
            Ok(LuaValue::Number(Number::Float(v as f64)))
        }
    }

    fn serialize_f32(self, v: f32) -> Result<LuaValue> {
        self.serialize_f64(v as f64)
    }

    fn serialize_f64(self, v: f64) -> Result<LuaValue> {
        let number = if v.is_nan() {
            Number::NaN
        } else if v == f64::INFINITY {
            Number::Infinity
        } else if v == f64::NEG_INFINITY {
            Number::NegativeInfinity
        } else {
            Number::Float(v)
        };
        Ok(LuaValue::Number(number))
    }

    fn serialize_char(self, v: char) -> Result<LuaValue> {
        Ok(LuaValue::String(v.to_string()))
    }

    fn serialize_str(self, v: &str) -> Result<LuaValue> {
        Ok(LuaValue::String(v.to_string()))
    }

    fn serialize_bytes(self, v: &[u8]) -> Result<LuaValue> {
        let items = v
            .iter()
            .map(|&b| LuaValue::Number(Number::Integer(b as i64)))
            .collect();
        Ok(LuaValue::seq(items))
    }

    fn serialize_none(self) -> Result<LuaValue> {
        Ok(LuaValue::Nil)
    }

    fn serialize_some<T>(self, value: &T) -> Result<LuaValue>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<LuaValue> {
        Ok(LuaValue::Nil)
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<LuaValue> {
        Ok(LuaValue::Nil)
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<LuaValue> {
        Ok(LuaValue::String(variant.to_string()))
    }

    fn serialize_newtype_struct<T>(self, _name: &'static str, value: &T) -> Result<LuaValue>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T>(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _value: &T,
    ) -> Result<LuaValue>
    where
        T: ?Sized + Serialize,
    {
        Err(Error::unsupported_type("newtype variants"))
    }

    fn serialize_seq(self, _len: Option<usize>) -> Result<SerializeVec> {
        Ok(SerializeVec::new())
    }

    fn serialize_tuple(self, _len: usize) -> Result<SerializeVec> {
        Ok(SerializeVec::new())
    }

    fn serialize_tuple_struct(self, _name: &'static str, _len: usize) -> Result<SerializeVec> {
        Ok(SerializeVec::new())
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<SerializeVec> {
        Err(Error::unsupported_type("tuple variants"))
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<SerializeEntries> {
        Ok(SerializeEntries::new())
    }

    fn serialize_struct(self, name: &'static str, _len: usize) -> Result<SerializeObject> {
        Ok(SerializeObject::of_class(name))
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<SerializeObject> {
        Err(Error::unsupported_type("struct variants"))
    }
}

impl SerializeVec {
    fn new() -> Self {
        SerializeVec { vec: Vec::new() }
    }
}

impl SerializeEntries {
    fn new() -> Self {
        SerializeEntries {
            entries: Vec::new(),
            current_key: None,
        }
    }
}

impl SerializeObject {
    fn of_class(name: &'static str) -> Self {
        SerializeObject {
            object: LuaObject::of_class(name),
        }
    }
}

impl ser::SerializeSeq for SerializeVec {
    type Ok = LuaValue;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.vec.push(to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<LuaValue> {
        Ok(LuaValue::seq(self.vec))
    }
}

impl ser::SerializeTuple for SerializeVec {
    type Ok = LuaValue;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.vec.push(to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<LuaValue> {
        Ok(LuaValue::seq(self.vec))
    }
}

impl ser::SerializeTupleStruct for SerializeVec {
    type Ok = LuaValue;
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.vec.push(to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<LuaValue> {
        Ok(LuaValue::seq(self.vec))
    }
}

impl ser::SerializeTupleVariant for SerializeVec {
    type Ok = LuaValue;
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.vec.push(to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<LuaValue> {
        Ok(LuaValue::seq(self.vec))
    }
}

impl ser::SerializeMap for SerializeEntries {
    type Ok = LuaValue;
    type Error = Error;

    fn serialize_key<T>(&mut self, key: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        // Lua table keys may be any non-nil value; nil is rejected later
        // by the renderer so that hand-built trees fail the same way.
        self.current_key = Some(to_value(key)?);
        Ok(())
    }

    fn serialize_value<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        let key = self
            .current_key
            .take()
            .ok_or_else(|| Error::custom("serialize_value called without serialize_key"))?;
        self.entries.push((key, to_value(value)?));
        Ok(())
    }

    fn end(self) -> Result<LuaValue> {
        Ok(LuaValue::map(self.entries))
    }
}

impl ser::SerializeStruct for SerializeObject {
    type Ok = LuaValue;
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.object.insert(key, to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<LuaValue> {
        Ok(LuaValue::Object(self.object))
    }
}

impl ser::SerializeStructVariant for SerializeObject {
    type Ok = LuaValue;
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.object.insert(key, to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<LuaValue> {
        Ok(LuaValue::Object(self.object))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ValueKind;
    use std::collections::BTreeMap;

    #[derive(Serialize)]
    struct Window {
        title: String,
        width: u32,
    }

    #[test]
    fn test_struct_becomes_typed_object() {
        let value = to_value(&Window {
            title: "demo".to_string(),
            width: 120,
        })
        .unwrap();
        assert_eq!(value.class(), Some("Window"));
        assert_eq!(value.kind(), ValueKind::Object);
    }

    #[test]
    fn test_primitives() {
        assert_eq!(to_value(&true).unwrap(), LuaValue::Bool(true));
        assert_eq!(to_value(&-7i32).unwrap(), LuaValue::from(-7));
        assert_eq!(to_value(&"hi").unwrap(), LuaValue::from("hi"));
        assert_eq!(to_value(&Option::<i32>::None).unwrap(), LuaValue::Nil);
    }

    #[test]
    fn test_float_specials() {
        assert_eq!(
            to_value(&f64::INFINITY).unwrap(),
            LuaValue::Number(Number::Infinity)
        );
        assert_eq!(
            to_value(&f64::NEG_INFINITY).unwrap(),
            LuaValue::Number(Number::NegativeInfinity)
        );
        assert_eq!(to_value(&f64::NAN).unwrap(), LuaValue::Number(Number::NaN));
    }

    #[test]
    fn test_u64_above_i64_range_becomes_float() {
        let value = to_value(&u64::MAX).unwrap();
        assert!(matches!(value, LuaValue::Number(Number::Float(_))));
    }

    #[test]
    fn test_seq_and_map_are_formatted() {
        let seq = to_value(&vec![1, 2, 3]).unwrap();
        assert!(matches!(seq, LuaValue::Seq { formatted: true, .. }));

        let mut map = BTreeMap::new();
        map.insert("k", 1);
        let map = to_value(&map).unwrap();
        assert!(matches!(map, LuaValue::Map { formatted: true, .. }));
    }

    #[test]
    fn test_unit_variant_is_name() {
        #[derive(Serialize)]
        enum Mode {
            Fast,
        }
        assert_eq!(to_value(&Mode::Fast).unwrap(), LuaValue::from("Fast"));
    }

    #[test]
    fn test_unsupported_variants() {
        #[derive(Serialize)]
        enum Shape {
            Circle(f64),
        }
        let err = to_value(&Shape::Circle(1.0)).unwrap_err();
        assert!(err.to_string().contains("newtype variants"));
    }
}
