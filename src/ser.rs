//! Serde serialization into array literals.
//!
//! This module provides the [`Serializer`] that writes any sequence-shaped
//! `Serialize` value (vectors, slices, tuples, newtypes around them) as an
//! array literal.
//!
//! ## Element mapping
//!
//! | Rust value | Literal element |
//! |------------|-----------------|
//! | `&str`, `String`, `char`, unit enum variant | quoted, `\` and `"` escaped |
//! | integers | bare decimal digits |
//! | floats | bare, precision from [`ArrayOptions`] |
//! | `bool` | bare `t` / `f` |
//! | `None`, `()` | bare `NULL` |
//!
//! Nested sequences, maps, structs and bytes have no flat literal form and are
//! rejected.
//!
//! ```rust
//! use serde_pgarray::{Serializer, ArrayOptions};
//! use serde::Serialize;
//!
//! let mut serializer = Serializer::new(ArrayOptions::new());
//! vec![Some("a,b"), None].serialize(&mut serializer).unwrap();
//! assert_eq!(serializer.into_inner(), r#"{"a,b",NULL}"#);
//! ```

use crate::array::write_quoted;
use crate::token::NULL_ELEMENT;
use crate::typed::write_float;
use crate::{ArrayOptions, Error, Result};
use serde::ser::Impossible;
use serde::{ser, Serialize};
use std::fmt::Write;

/// The array literal serializer.
///
/// Created via [`Serializer::new`]; the literal is taken out with
/// [`Serializer::into_inner`].
pub struct Serializer {
    output: String,
    options: ArrayOptions,
    // 0 outside the array, 1 while writing elements
    depth: usize,
}

impl Serializer {
    /// Creates an empty serializer that formats floats per `options`.
    pub fn new(options: ArrayOptions) -> Self {
        Serializer {
            output: String::with_capacity(64),
            options,
            depth: 0,
        }
    }

    /// Consumes the serializer and returns the literal written so far.
    pub fn into_inner(self) -> String {
        self.output
    }

    fn element(&mut self, what: &str) -> Result<&mut String> {
        if self.depth == 0 {
            return Err(Error::unsupported_type(&format!(
                "{} outside of a sequence; array literals need a sequence at the top level",
                what
            )));
        }
        Ok(&mut self.output)
    }

    fn begin_array(&mut self) -> Result<()> {
        if self.depth > 0 {
            return Err(Error::unsupported_nesting(
                "nested sequences cannot be written as a flat array literal",
            ));
        }
        self.depth = 1;
        self.output.push('{');
        Ok(())
    }

    fn end_array(&mut self) {
        self.output.push('}');
        self.depth = 0;
    }

    fn write_display<T: std::fmt::Display>(&mut self, what: &str, v: T) -> Result<()> {
        let out = self.element(what)?;
        write!(out, "{}", v).map_err(Error::custom)
    }
}

impl<'a> ser::Serializer for &'a mut Serializer {
    type Ok = ();
    type Error = Error;

    type SerializeSeq = SeqSerializer<'a>;
    type SerializeTuple = SeqSerializer<'a>;
    type SerializeTupleStruct = SeqSerializer<'a>;
    type SerializeTupleVariant = Impossible<(), Error>;
    type SerializeMap = Impossible<(), Error>;
    type SerializeStruct = Impossible<(), Error>;
    type SerializeStructVariant = Impossible<(), Error>;

    fn serialize_bool(self, v: bool) -> Result<Self::Ok> {
        self.element("bool")?.push(if v { 't' } else { 'f' });
        Ok(())
    }

    fn serialize_i8(self, v: i8) -> Result<Self::Ok> {
        self.serialize_i64(i64::from(v))
    }

    fn serialize_i16(self, v: i16) -> Result<Self::Ok> {
        self.serialize_i64(i64::from(v))
    }

    fn serialize_i32(self, v: i32) -> Result<Self::Ok> {
        self.serialize_i64(i64::from(v))
    }

    fn serialize_i64(self, v: i64) -> Result<Self::Ok> {
        self.write_display("integer", v)
    }

    fn serialize_i128(self, v: i128) -> Result<Self::Ok> {
        self.write_display("integer", v)
    }

    fn serialize_u8(self, v: u8) -> Result<Self::Ok> {
        self.serialize_u64(u64::from(v))
    }

    fn serialize_u16(self, v: u16) -> Result<Self::Ok> {
        self.serialize_u64(u64::from(v))
    }

    fn serialize_u32(self, v: u32) -> Result<Self::Ok> {
        self.serialize_u64(u64::from(v))
    }

    fn serialize_u64(self, v: u64) -> Result<Self::Ok> {
        self.write_display("integer", v)
    }

    fn serialize_u128(self, v: u128) -> Result<Self::Ok> {
        self.write_display("integer", v)
    }

    fn serialize_f32(self, v: f32) -> Result<Self::Ok> {
        self.serialize_f64(f64::from(v))
    }

    fn serialize_f64(self, v: f64) -> Result<Self::Ok> {
        self.element("float")?;
        write_float(&mut self.output, v, &self.options);
        Ok(())
    }

    fn serialize_char(self, v: char) -> Result<Self::Ok> {
        let mut buf = [0u8; 4];
        self.serialize_str(v.encode_utf8(&mut buf))
    }

    fn serialize_str(self, v: &str) -> Result<Self::Ok> {
        write_quoted(self.element("string")?, v);
        Ok(())
    }

    fn serialize_bytes(self, _v: &[u8]) -> Result<Self::Ok> {
        Err(Error::unsupported_type("byte arrays have no array literal form"))
    }

    fn serialize_none(self) -> Result<Self::Ok> {
        self.serialize_unit()
    }

    fn serialize_some<T>(self, value: &T) -> Result<Self::Ok>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<Self::Ok> {
        self.element("null")?.push_str(NULL_ELEMENT);
        Ok(())
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<Self::Ok> {
        self.serialize_unit()
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<Self::Ok> {
        self.serialize_str(variant)
    }

    fn serialize_newtype_struct<T>(self, _name: &'static str, value: &T) -> Result<Self::Ok>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T>(
        self,
        name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        _value: &T,
    ) -> Result<Self::Ok>
    where
        T: ?Sized + Serialize,
    {
        Err(Error::unsupported_type(&format!("enum variant {}::{}", name, variant)))
    }

    fn serialize_seq(self, len: Option<usize>) -> Result<Self::SerializeSeq> {
        self.begin_array()?;
        if let Some(len) = len {
            self.output.reserve(len * 4);
        }
        Ok(SeqSerializer {
            ser: self,
            first: true,
        })
    }

    fn serialize_tuple(self, len: usize) -> Result<Self::SerializeTuple> {
        self.serialize_seq(Some(len))
    }

    fn serialize_tuple_struct(
        self,
        _name: &'static str,
        len: usize,
    ) -> Result<Self::SerializeTupleStruct> {
        self.serialize_seq(Some(len))
    }

    fn serialize_tuple_variant(
        self,
        name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleVariant> {
        Err(Error::unsupported_type(&format!("enum variant {}::{}", name, variant)))
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<Self::SerializeMap> {
        Err(Error::unsupported_type("maps have no array literal form"))
    }

    fn serialize_struct(self, name: &'static str, _len: usize) -> Result<Self::SerializeStruct> {
        Err(Error::unsupported_type(&format!("struct {}", name)))
    }

    fn serialize_struct_variant(
        self,
        name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStructVariant> {
        Err(Error::unsupported_type(&format!("enum variant {}::{}", name, variant)))
    }
}

/// Writes the elements of a sequence, tuple or tuple struct between braces.
pub struct SeqSerializer<'a> {
    ser: &'a mut Serializer,
    first: bool,
}

impl<'a> SeqSerializer<'a> {
    fn push<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        if !self.first {
            self.ser.output.push(',');
        }
        self.first = false;
        value.serialize(&mut *self.ser)
    }
}

impl<'a> ser::SerializeSeq for SeqSerializer<'a> {
    type Ok = ();
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.push(value)
    }

    fn end(self) -> Result<Self::Ok> {
        self.ser.end_array();
        Ok(())
    }
}

impl<'a> ser::SerializeTuple for SeqSerializer<'a> {
    type Ok = ();
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.push(value)
    }

    fn end(self) -> Result<Self::Ok> {
        self.ser.end_array();
        Ok(())
    }
}

impl<'a> ser::SerializeTupleStruct for SeqSerializer<'a> {
    type Ok = ();
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.push(value)
    }

    fn end(self) -> Result<Self::Ok> {
        self.ser.end_array();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;

    fn write<T: Serialize + ?Sized>(value: &T) -> Result<String> {
        let mut serializer = Serializer::new(ArrayOptions::new());
        value.serialize(&mut serializer)?;
        Ok(serializer.into_inner())
    }

    #[derive(Serialize)]
    enum Mood {
        Happy,
        Sad,
    }

    #[derive(Serialize)]
    struct Tags(Vec<&'static str>);

    #[test]
    fn test_scalars_as_elements() {
        assert_eq!(write(&vec![1u8, 2, 3]).unwrap(), "{1,2,3}");
        assert_eq!(write(&[-1i64, i64::MAX]).unwrap(), "{-1,9223372036854775807}");
        assert_eq!(write(&vec![true, false]).unwrap(), "{t,f}");
        assert_eq!(write(&vec![0.5f64, 2.0]).unwrap(), "{0.50,2.00}");
        assert_eq!(write(&vec!['x', '"']).unwrap(), r#"{"x","\""}"#);
        assert_eq!(write(&vec![Mood::Happy, Mood::Sad]).unwrap(), r#"{"Happy","Sad"}"#);
    }

    #[test]
    fn test_strings_always_quoted() {
        assert_eq!(write(&vec!["a", "b\\c"]).unwrap(), r#"{"a","b\\c"}"#);
        assert_eq!(write(&Vec::<String>::new()).unwrap(), "{}");
        assert_eq!(write(&Tags(vec!["x"])).unwrap(), r#"{"x"}"#);
    }

    #[test]
    fn test_nulls() {
        assert_eq!(write(&vec![Some(1), None, Some(3)]).unwrap(), "{1,NULL,3}");
        assert_eq!(write(&vec![(), ()]).unwrap(), "{NULL,NULL}");
    }

    #[test]
    fn test_tuples() {
        assert_eq!(write(&(1, "two", 3.0)).unwrap(), r#"{1,"two",3.00}"#);
    }

    #[test]
    fn test_lossless_floats() {
        let mut serializer = Serializer::new(ArrayOptions::lossless());
        vec![0.1f64, 1e21].serialize(&mut serializer).unwrap();
        assert_eq!(serializer.into_inner(), "{0.1,1000000000000000000000}");
    }

    #[test]
    fn test_rejections() {
        assert!(matches!(write(&5), Err(Error::UnsupportedType(_))));
        assert!(matches!(write("abc"), Err(Error::UnsupportedType(_))));
        assert!(matches!(
            write(&vec![vec![1], vec![2]]),
            Err(Error::UnsupportedNesting(_))
        ));
        let mut map = std::collections::BTreeMap::new();
        map.insert("k", 1);
        assert!(matches!(write(&vec![map]), Err(Error::UnsupportedType(_))));
    }
}
