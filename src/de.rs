//! Serde deserialization from array literals.
//!
//! This module provides the [`Deserializer`] that reads an array literal into
//! any sequence-shaped `Deserialize` type.
//!
//! ## Overview
//!
//! - **Single pass**: elements are decoded lazily by [`Tokens`] as the
//!   visitor asks for them
//! - **Typed elements**: numbers and booleans are parsed from the element text,
//!   quoted or not
//! - **NULL**: a bare `NULL` (any case) becomes `None` or `()`; a quoted
//!   `"NULL"` stays a string
//!
//! ```rust
//! use serde_pgarray::from_str;
//!
//! let names: Vec<String> = from_str(r#"{mary,"had a \"lamb\""}"#).unwrap();
//! assert_eq!(names, vec!["mary", "had a \"lamb\""]);
//!
//! let scores: Vec<Option<i32>> = from_str("{1,NULL,3}").unwrap();
//! assert_eq!(scores, vec![Some(1), None, Some(3)]);
//! ```

use crate::token::{Token, Tokens};
use crate::typed::parse_bool;
use crate::{Error, Result};
use serde::de::{self, IntoDeserializer};
use serde::forward_to_deserialize_any;
use std::str::FromStr;

/// The array literal deserializer.
///
/// Created via [`Deserializer::from_str`].
pub struct Deserializer<'de> {
    input: &'de str,
}

impl<'de> Deserializer<'de> {
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(input: &'de str) -> Self {
        Deserializer { input }
    }
}

impl<'de> de::Deserializer<'de> for &mut Deserializer<'de> {
    type Error = Error;

    fn deserialize_any<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        self.deserialize_seq(visitor)
    }

    fn deserialize_option<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        visitor.visit_some(self)
    }

    fn deserialize_newtype_struct<V>(self, _name: &'static str, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        visitor.visit_newtype_struct(self)
    }

    fn deserialize_seq<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        let mut seq = TokenSeq {
            tokens: Tokens::from_literal(self.input),
            index: 0,
        };
        let value = visitor.visit_seq(&mut seq)?;
        seq.end()?;
        Ok(value)
    }

    fn deserialize_tuple<V>(self, _len: usize, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        self.deserialize_seq(visitor)
    }

    fn deserialize_tuple_struct<V>(
        self,
        _name: &'static str,
        _len: usize,
        visitor: V,
    ) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        self.deserialize_seq(visitor)
    }

    forward_to_deserialize_any! {
        bool i8 i16 i32 i64 i128 u8 u16 u32 u64 u128 f32 f64 char str string
        bytes byte_buf unit unit_struct map struct enum identifier ignored_any
    }
}

struct TokenSeq<'de> {
    tokens: Tokens<'de>,
    index: usize,
}

impl<'de> TokenSeq<'de> {
    /// Checks that a fixed-length visitor left no elements behind. A syntax
    /// error among the leftovers is reported as is.
    fn end(mut self) -> Result<()> {
        let mut extra = 0;
        for token in &mut self.tokens {
            token?;
            extra += 1;
        }
        if extra == 0 {
            Ok(())
        } else {
            log::trace!("array literal has {} unconsumed elements", extra);
            Err(de::Error::invalid_length(
                self.index + extra,
                &"fewer elements in array",
            ))
        }
    }
}

impl<'de> de::SeqAccess<'de> for TokenSeq<'de> {
    type Error = Error;

    fn next_element_seed<T>(&mut self, seed: T) -> Result<Option<T::Value>>
    where
        T: de::DeserializeSeed<'de>,
    {
        let Some(token) = self.tokens.next() else {
            return Ok(None);
        };
        let element = ElementDeserializer {
            token: token?,
            index: self.index,
        };
        self.index += 1;
        seed.deserialize(element).map(Some)
    }
}

/// Deserializes one decoded element.
struct ElementDeserializer<'de> {
    token: Token<'de>,
    index: usize,
}

impl<'de> ElementDeserializer<'de> {
    fn invalid(&self, expected: &str) -> Error {
        log::trace!(
            "array element {} ({:?}) is not a {}",
            self.index,
            self.token.as_str(),
            expected
        );
        Error::element(self.index, self.token.as_str(), expected)
    }

    fn parse<T: FromStr>(&self, expected: &str) -> Result<T> {
        self.token
            .as_str()
            .parse()
            .map_err(|_| self.invalid(expected))
    }
}

macro_rules! deserialize_parsed {
    ($($method:ident => $visit:ident, $expected:literal;)*) => {
        $(
            fn $method<V>(self, visitor: V) -> Result<V::Value>
            where
                V: de::Visitor<'de>,
            {
                visitor.$visit(self.parse($expected)?)
            }
        )*
    };
}

impl<'de> de::Deserializer<'de> for ElementDeserializer<'de> {
    type Error = Error;

    fn deserialize_any<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        if self.token.is_null() {
            return visitor.visit_unit();
        }
        match self.token {
            Token::Quoted(s) => visitor.visit_string(s),
            Token::Bare(s) => {
                if let Ok(n) = s.parse::<i64>() {
                    visitor.visit_i64(n)
                } else if let Some(b) = parse_bool(s) {
                    visitor.visit_bool(b)
                } else if let Ok(f) = s.parse::<f64>() {
                    visitor.visit_f64(f)
                } else {
                    visitor.visit_borrowed_str(s)
                }
            }
        }
    }

    fn deserialize_bool<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match parse_bool(self.token.as_str()) {
            Some(b) => visitor.visit_bool(b),
            None => Err(self.invalid("boolean")),
        }
    }

    deserialize_parsed! {
        deserialize_i8 => visit_i8, "8-bit integer";
        deserialize_i16 => visit_i16, "16-bit integer";
        deserialize_i32 => visit_i32, "32-bit integer";
        deserialize_i64 => visit_i64, "64-bit integer";
        deserialize_i128 => visit_i128, "128-bit integer";
        deserialize_u8 => visit_u8, "8-bit unsigned integer";
        deserialize_u16 => visit_u16, "16-bit unsigned integer";
        deserialize_u32 => visit_u32, "32-bit unsigned integer";
        deserialize_u64 => visit_u64, "64-bit unsigned integer";
        deserialize_u128 => visit_u128, "128-bit unsigned integer";
        deserialize_f32 => visit_f32, "floating point number";
        deserialize_f64 => visit_f64, "floating point number";
    }

    fn deserialize_char<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        let mut chars = self.token.as_str().chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => visitor.visit_char(c),
            _ => Err(self.invalid("single character")),
        }
    }

    fn deserialize_str<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self.token {
            Token::Quoted(s) => visitor.visit_string(s),
            Token::Bare(s) => visitor.visit_borrowed_str(s),
        }
    }

    fn deserialize_string<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        self.deserialize_str(visitor)
    }

    fn deserialize_bytes<V>(self, _visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        Err(Error::unsupported_type("byte arrays have no array literal form"))
    }

    fn deserialize_byte_buf<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        self.deserialize_bytes(visitor)
    }

    fn deserialize_option<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        if self.token.is_null() {
            visitor.visit_none()
        } else {
            visitor.visit_some(self)
        }
    }

    fn deserialize_unit<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        if self.token.is_null() {
            visitor.visit_unit()
        } else {
            Err(self.invalid("NULL"))
        }
    }

    fn deserialize_unit_struct<V>(self, _name: &'static str, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        self.deserialize_unit(visitor)
    }

    fn deserialize_newtype_struct<V>(self, _name: &'static str, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        visitor.visit_newtype_struct(self)
    }

    fn deserialize_seq<V>(self, _visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        Err(Error::unsupported_nesting(&format!(
            "element {} cannot be read as a nested array",
            self.index
        )))
    }

    fn deserialize_tuple<V>(self, _len: usize, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        self.deserialize_seq(visitor)
    }

    fn deserialize_tuple_struct<V>(
        self,
        _name: &'static str,
        _len: usize,
        visitor: V,
    ) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        self.deserialize_seq(visitor)
    }

    fn deserialize_map<V>(self, _visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        Err(Error::unsupported_type("maps have no array literal form"))
    }

    fn deserialize_struct<V>(
        self,
        name: &'static str,
        _fields: &'static [&'static str],
        _visitor: V,
    ) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        Err(Error::unsupported_type(&format!("struct {}", name)))
    }

    fn deserialize_enum<V>(
        self,
        _name: &'static str,
        _variants: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        visitor.visit_enum(self.token.into_string().into_deserializer())
    }

    fn deserialize_identifier<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        self.deserialize_str(visitor)
    }

    fn deserialize_ignored_any<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        visitor.visit_unit()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    fn read<'a, T: Deserialize<'a>>(s: &'a str) -> Result<T> {
        let mut deserializer = Deserializer::from_str(s);
        T::deserialize(&mut deserializer)
    }

    #[derive(Deserialize, Debug, PartialEq)]
    enum Mood {
        Happy,
        Sad,
    }

    #[derive(Deserialize, Debug, PartialEq)]
    struct Ids(Vec<u32>);

    #[test]
    fn test_strings() {
        let v: Vec<String> = read(r#"{a,"b,c","\\"}"#).unwrap();
        assert_eq!(v, vec!["a", "b,c", "\\"]);
        let v: Vec<String> = read("{}").unwrap();
        assert!(v.is_empty());
    }

    #[test]
    fn test_borrowed_bare_elements() {
        let v: Vec<&str> = read("{mary,had}").unwrap();
        assert_eq!(v, vec!["mary", "had"]);
        // quoted elements are unescaped into owned strings
        assert!(read::<Vec<&str>>(r#"{"mary"}"#).is_err());
    }

    #[test]
    fn test_numbers_quoted_or_bare() {
        let v: Vec<i32> = read(r#"{1,"2",-3}"#).unwrap();
        assert_eq!(v, vec![1, 2, -3]);
        let v: Vec<f64> = read("{1.5,NaN,-Infinity}").unwrap();
        assert_eq!(v[0], 1.5);
        assert!(v[1].is_nan());
        assert_eq!(v[2], f64::NEG_INFINITY);
    }

    #[test]
    fn test_element_errors_name_index() {
        let err = read::<Vec<u8>>("{1,2,300}").unwrap_err();
        assert_eq!(err, Error::element(2, "300", "8-bit unsigned integer"));
        let err = read::<Vec<bool>>("{t,maybe}").unwrap_err();
        assert_eq!(err.element_index(), Some(1));
    }

    #[test]
    fn test_nulls() {
        let v: Vec<Option<String>> = read(r#"{NULL,"NULL",null,x}"#).unwrap();
        assert_eq!(
            v,
            vec![None, Some("NULL".to_string()), None, Some("x".to_string())]
        );
        assert!(read::<Vec<()>>("{NULL,1}").is_err());
    }

    #[test]
    fn test_enums_and_newtypes() {
        let v: Vec<Mood> = read(r#"{Happy,"Sad"}"#).unwrap();
        assert_eq!(v, vec![Mood::Happy, Mood::Sad]);
        let ids: Ids = read("{4,5}").unwrap();
        assert_eq!(ids, Ids(vec![4, 5]));
        let t: (i32, String, bool) = read(r#"{1,"x",f}"#).unwrap();
        assert_eq!(t, (1, "x".to_string(), false));
    }

    #[test]
    fn test_fixed_length_targets_consume_everything() {
        let pair: [i64; 2] = read("{1,2}").unwrap();
        assert_eq!(pair, [1, 2]);

        let err = read::<(i32,)>("{1,2,3}").unwrap_err();
        assert!(matches!(err, Error::Custom(_)), "{err:?}");

        // a syntax error after the last element read is still reported
        let err = read::<(i32,)>(r#"{1,"unterminated}"#).unwrap_err();
        assert!(err.is_syntax(), "{err:?}");
        let err = read::<[i64; 2]>(r#"{1,2,x,"}"#).unwrap_err();
        assert!(err.is_syntax(), "{err:?}");
    }

    #[test]
    fn test_char() {
        let v: Vec<char> = read(r#"{a,"é"}"#).unwrap();
        assert_eq!(v, vec!['a', 'é']);
        assert!(read::<Vec<char>>("{ab}").unwrap_err().is_element());
    }

    #[test]
    fn test_syntax_error_surfaces() {
        let err = read::<Vec<String>>("{mary,}").unwrap_err();
        assert!(err.is_syntax());
    }

    #[test]
    fn test_nested_rejected() {
        let err = read::<Vec<Vec<i32>>>("{{1},{2}}").unwrap_err();
        assert!(matches!(err, Error::UnsupportedNesting(_)));
    }
}
