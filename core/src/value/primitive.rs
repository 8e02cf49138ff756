//! Declaration and implementation of a DICOM primitive value.
//!
//! See [`PrimitiveValue`](./enum.PrimitiveValue.html).

use crate::header::Tag;
use crate::value::C;
use itertools::Itertools;
use num_traits::NumCast;
use safe_transmute::to_bytes::transmute_to_bytes;
use smallvec::SmallVec;
use snafu::{Backtrace, ResultExt, Snafu};
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

/// Triggered when a value reading attempt fails.
#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum InvalidValueReadError {
    /// The value cannot be parsed to an integer.
    #[snafu(display("Failed to read text as an integer"))]
    ParseInteger {
        /// the underlying error
        source: std::num::ParseIntError,
        /// the backtrace
        backtrace: Backtrace,
    },
    /// The value cannot be parsed to a floating point number.
    #[snafu(display("Failed to read text as a floating point number"))]
    ParseFloat {
        /// the underlying error
        source: std::num::ParseFloatError,
        /// the backtrace
        backtrace: Backtrace,
    },
    /// The number cannot be represented in the requested narrower type.
    #[snafu(display("Cannot convert number `{}` to the requested type", value))]
    NarrowConvert {
        /// the number as text
        value: String,
        /// the backtrace
        backtrace: Backtrace,
    },
}

/// An error type for a failed attempt at converting a value
/// into another representation.
#[derive(Debug)]
pub struct ConvertValueError {
    /// The name of the value type requested
    pub requested: &'static str,
    /// The type of the original value
    pub original: ValueType,
    /// The reason why the conversion was unsuccessful,
    /// or none if the conversion is simply not possible
    pub cause: Option<Box<InvalidValueReadError>>,
}

impl fmt::Display for ConvertValueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "could not convert {:?} to a {}: ",
            self.original, self.requested
        )?;
        if let Some(cause) = &self.cause {
            write!(f, "{}", cause)?;
        } else {
            write!(f, "conversion not possible")?;
        }
        Ok(())
    }
}

impl std::error::Error for ConvertValueError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.cause.as_ref().map(|e| e as _)
    }
}

/// An enum representing a primitive value from a DICOM element.
/// The result of decoding an element's data
/// in one of the supported binary representations.
///
/// Multiple elements of the same type are allowed in all variants,
/// so the value's multiplicity is part of the representation.
/// A string variant is used for all text-like value representations,
/// with number parsing deferred to the conversion methods.
#[derive(Debug, PartialEq, Clone)]
pub enum PrimitiveValue {
    /// No data. Unlike the other variants,
    /// this does not contain a container of values.
    Empty,

    /// A sequence of strings.
    /// Used for most textual representations
    /// which admit multiple values separated by a backslash.
    Strs(C<String>),

    /// A single string,
    /// used for long text representations
    /// which do not admit a backslash separator.
    Str(String),

    /// A sequence of attribute tags.
    Tags(C<Tag>),

    /// The value is a sequence of unsigned 8-bit integers,
    /// also used for raw binary data.
    U8(C<u8>),

    /// A sequence of signed 16-bit integers.
    I16(C<i16>),

    /// A sequence of unsigned 16-bit integers.
    U16(C<u16>),

    /// A sequence of signed 32-bit integers.
    I32(C<i32>),

    /// A sequence of unsigned 32-bit integers.
    U32(C<u32>),

    /// A sequence of signed 64-bit integers.
    I64(C<i64>),

    /// A sequence of unsigned 64-bit integers.
    U64(C<u64>),

    /// A sequence of 32-bit floating point numbers.
    F32(C<f32>),

    /// A sequence of 64-bit floating point numbers.
    F64(C<f64>),
}

/// A utility macro for implementing the conversion from a core type into a
/// DICOM primitive value with a single element.
macro_rules! impl_from_for_primitive {
    ($typ: ty, $variant: ident) => {
        impl From<$typ> for PrimitiveValue {
            fn from(value: $typ) -> Self {
                PrimitiveValue::$variant(C::from_elem(value, 1))
            }
        }
    };
}

impl_from_for_primitive!(u8, U8);
impl_from_for_primitive!(u16, U16);
impl_from_for_primitive!(i16, I16);
impl_from_for_primitive!(u32, U32);
impl_from_for_primitive!(i32, I32);
impl_from_for_primitive!(u64, U64);
impl_from_for_primitive!(i64, I64);
impl_from_for_primitive!(f32, F32);
impl_from_for_primitive!(f64, F64);
impl_from_for_primitive!(Tag, Tags);

impl From<String> for PrimitiveValue {
    fn from(value: String) -> Self {
        PrimitiveValue::Str(value)
    }
}

impl From<&str> for PrimitiveValue {
    fn from(value: &str) -> Self {
        PrimitiveValue::Str(value.to_owned())
    }
}

impl From<Vec<u8>> for PrimitiveValue {
    fn from(value: Vec<u8>) -> Self {
        PrimitiveValue::U8(SmallVec::from_vec(value))
    }
}

impl PrimitiveValue {
    /// Obtain the number of individual values.
    pub fn multiplicity(&self) -> u32 {
        use self::PrimitiveValue::*;
        match self {
            Empty => 0,
            Str(_) => 1,
            Strs(c) => c.len() as u32,
            Tags(c) => c.len() as u32,
            U8(c) => c.len() as u32,
            I16(c) => c.len() as u32,
            U16(c) => c.len() as u32,
            I32(c) => c.len() as u32,
            U32(c) => c.len() as u32,
            I64(c) => c.len() as u32,
            U64(c) => c.len() as u32,
            F32(c) => c.len() as u32,
            F64(c) => c.len() as u32,
        }
    }

    /// Gets the value type of this value.
    pub fn value_type(&self) -> ValueType {
        match self {
            PrimitiveValue::Empty => ValueType::Empty,
            PrimitiveValue::Strs(_) => ValueType::Strs,
            PrimitiveValue::Str(_) => ValueType::Str,
            PrimitiveValue::Tags(_) => ValueType::Tags,
            PrimitiveValue::U8(_) => ValueType::U8,
            PrimitiveValue::I16(_) => ValueType::I16,
            PrimitiveValue::U16(_) => ValueType::U16,
            PrimitiveValue::I32(_) => ValueType::I32,
            PrimitiveValue::U32(_) => ValueType::U32,
            PrimitiveValue::I64(_) => ValueType::I64,
            PrimitiveValue::U64(_) => ValueType::U64,
            PrimitiveValue::F32(_) => ValueType::F32,
            PrimitiveValue::F64(_) => ValueType::F64,
        }
    }

    /// Get a single string value. If it contains multiple strings,
    /// only the first one is returned.
    pub fn string(&self) -> Option<&str> {
        match self {
            PrimitiveValue::Str(v) => Some(v),
            PrimitiveValue::Strs(v) => v.first().map(String::as_str),
            _ => None,
        }
    }

    /// Get a sequence of string values,
    /// if the value is held as text.
    pub fn strings(&self) -> Option<Vec<&str>> {
        match self {
            PrimitiveValue::Str(v) => Some(vec![v.as_str()]),
            PrimitiveValue::Strs(v) => Some(v.iter().map(String::as_str).collect()),
            _ => None,
        }
    }

    /// Convert the value to a single string,
    /// with multiple values joined by a backslash (`\`).
    ///
    /// Numbers are rendered in decimal,
    /// tags in their standard parenthesized form.
    /// Returns a borrowed string when the value
    /// is already a single piece of text.
    pub fn to_str(&self) -> Cow<str> {
        match self {
            PrimitiveValue::Empty => Cow::from(""),
            PrimitiveValue::Str(v) => Cow::from(v.as_str()),
            PrimitiveValue::Strs(v) if v.len() == 1 => Cow::from(v[0].as_str()),
            PrimitiveValue::Strs(v) => Cow::from(v.iter().join("\\")),
            PrimitiveValue::Tags(v) => Cow::from(v.iter().join("\\")),
            PrimitiveValue::U8(v) => Cow::from(v.iter().join("\\")),
            PrimitiveValue::I16(v) => Cow::from(v.iter().join("\\")),
            PrimitiveValue::U16(v) => Cow::from(v.iter().join("\\")),
            PrimitiveValue::I32(v) => Cow::from(v.iter().join("\\")),
            PrimitiveValue::U32(v) => Cow::from(v.iter().join("\\")),
            PrimitiveValue::I64(v) => Cow::from(v.iter().join("\\")),
            PrimitiveValue::U64(v) => Cow::from(v.iter().join("\\")),
            PrimitiveValue::F32(v) => Cow::from(v.iter().join("\\")),
            PrimitiveValue::F64(v) => Cow::from(v.iter().join("\\")),
        }
    }

    /// Convert the value to a sequence of bytes in the native byte order.
    ///
    /// Text values are encoded to their raw bytes
    /// with multiple values joined by a backslash.
    pub fn to_bytes(&self) -> Cow<[u8]> {
        match self {
            PrimitiveValue::Empty => Cow::from(&[][..]),
            PrimitiveValue::U8(v) => Cow::from(&v[..]),
            PrimitiveValue::I16(v) => Cow::Borrowed(transmute_to_bytes(v)),
            PrimitiveValue::U16(v) => Cow::Borrowed(transmute_to_bytes(v)),
            PrimitiveValue::I32(v) => Cow::Borrowed(transmute_to_bytes(v)),
            PrimitiveValue::U32(v) => Cow::Borrowed(transmute_to_bytes(v)),
            PrimitiveValue::I64(v) => Cow::Borrowed(transmute_to_bytes(v)),
            PrimitiveValue::U64(v) => Cow::Borrowed(transmute_to_bytes(v)),
            PrimitiveValue::F32(v) => Cow::Borrowed(transmute_to_bytes(v)),
            PrimitiveValue::F64(v) => Cow::Borrowed(transmute_to_bytes(v)),
            PrimitiveValue::Tags(v) => {
                let mut bytes = Vec::with_capacity(v.len() * 4);
                for tag in v {
                    bytes.extend_from_slice(&tag.group().to_ne_bytes());
                    bytes.extend_from_slice(&tag.element().to_ne_bytes());
                }
                Cow::from(bytes)
            }
            PrimitiveValue::Str(v) => Cow::from(v.as_bytes()),
            PrimitiveValue::Strs(v) if v.len() == 1 => Cow::from(v[0].as_bytes()),
            PrimitiveValue::Strs(v) => {
                Cow::from(v.iter().map(String::as_bytes).collect::<Vec<_>>().join(&b'\\'))
            }
        }
    }

    /// Retrieve and convert the first value to an integer.
    ///
    /// Numbers are cast to the requested type,
    /// strings are trimmed and parsed.
    pub fn to_int<T>(&self) -> Result<T, ConvertValueError>
    where
        T: NumCast + FromStr<Err = std::num::ParseIntError>,
    {
        match self {
            PrimitiveValue::Str(s) => s
                .trim()
                .parse()
                .context(ParseIntegerSnafu)
                .map_err(|e| self.conversion_failure("integer", e)),
            PrimitiveValue::Strs(s) if !s.is_empty() => s[0]
                .trim()
                .parse()
                .context(ParseIntegerSnafu)
                .map_err(|e| self.conversion_failure("integer", e)),
            PrimitiveValue::U8(v) if !v.is_empty() => self.cast_first("integer", v[0]),
            PrimitiveValue::I16(v) if !v.is_empty() => self.cast_first("integer", v[0]),
            PrimitiveValue::U16(v) if !v.is_empty() => self.cast_first("integer", v[0]),
            PrimitiveValue::I32(v) if !v.is_empty() => self.cast_first("integer", v[0]),
            PrimitiveValue::U32(v) if !v.is_empty() => self.cast_first("integer", v[0]),
            PrimitiveValue::I64(v) if !v.is_empty() => self.cast_first("integer", v[0]),
            PrimitiveValue::U64(v) if !v.is_empty() => self.cast_first("integer", v[0]),
            PrimitiveValue::F32(v) if !v.is_empty() => self.cast_first("integer", v[0]),
            PrimitiveValue::F64(v) if !v.is_empty() => self.cast_first("integer", v[0]),
            _ => Err(self.impossible_conversion("integer")),
        }
    }

    /// Retrieve and convert all values to integers.
    ///
    /// An empty value yields an empty vector.
    pub fn to_multi_int<T>(&self) -> Result<Vec<T>, ConvertValueError>
    where
        T: NumCast + FromStr<Err = std::num::ParseIntError>,
    {
        match self {
            PrimitiveValue::Empty => Ok(Vec::new()),
            PrimitiveValue::Str(s) => {
                let v = s
                    .trim()
                    .parse()
                    .context(ParseIntegerSnafu)
                    .map_err(|e| self.conversion_failure("integer", e))?;
                Ok(vec![v])
            }
            PrimitiveValue::Strs(s) => s
                .iter()
                .map(|s| {
                    s.trim()
                        .parse()
                        .context(ParseIntegerSnafu)
                        .map_err(|e| self.conversion_failure("integer", e))
                })
                .collect(),
            PrimitiveValue::U8(v) => self.cast_all("integer", v),
            PrimitiveValue::I16(v) => self.cast_all("integer", v),
            PrimitiveValue::U16(v) => self.cast_all("integer", v),
            PrimitiveValue::I32(v) => self.cast_all("integer", v),
            PrimitiveValue::U32(v) => self.cast_all("integer", v),
            PrimitiveValue::I64(v) => self.cast_all("integer", v),
            PrimitiveValue::U64(v) => self.cast_all("integer", v),
            PrimitiveValue::F32(v) => self.cast_all("integer", v),
            PrimitiveValue::F64(v) => self.cast_all("integer", v),
            PrimitiveValue::Tags(_) => Err(self.impossible_conversion("integer")),
        }
    }

    /// Retrieve and convert the first value
    /// to a single-precision floating point number.
    pub fn to_float32(&self) -> Result<f32, ConvertValueError> {
        match self {
            PrimitiveValue::Str(s) => s
                .trim()
                .parse()
                .context(ParseFloatSnafu)
                .map_err(|e| self.conversion_failure("float32", e)),
            PrimitiveValue::Strs(s) if !s.is_empty() => s[0]
                .trim()
                .parse()
                .context(ParseFloatSnafu)
                .map_err(|e| self.conversion_failure("float32", e)),
            PrimitiveValue::U8(v) if !v.is_empty() => self.cast_first("float32", v[0]),
            PrimitiveValue::I16(v) if !v.is_empty() => self.cast_first("float32", v[0]),
            PrimitiveValue::U16(v) if !v.is_empty() => self.cast_first("float32", v[0]),
            PrimitiveValue::I32(v) if !v.is_empty() => self.cast_first("float32", v[0]),
            PrimitiveValue::U32(v) if !v.is_empty() => self.cast_first("float32", v[0]),
            PrimitiveValue::I64(v) if !v.is_empty() => self.cast_first("float32", v[0]),
            PrimitiveValue::U64(v) if !v.is_empty() => self.cast_first("float32", v[0]),
            PrimitiveValue::F32(v) if !v.is_empty() => Ok(v[0]),
            PrimitiveValue::F64(v) if !v.is_empty() => self.cast_first("float32", v[0]),
            _ => Err(self.impossible_conversion("float32")),
        }
    }

    /// Retrieve and convert the first value
    /// to a double-precision floating point number.
    pub fn to_float64(&self) -> Result<f64, ConvertValueError> {
        match self {
            PrimitiveValue::Str(s) => s
                .trim()
                .parse()
                .context(ParseFloatSnafu)
                .map_err(|e| self.conversion_failure("float64", e)),
            PrimitiveValue::Strs(s) if !s.is_empty() => s[0]
                .trim()
                .parse()
                .context(ParseFloatSnafu)
                .map_err(|e| self.conversion_failure("float64", e)),
            PrimitiveValue::U8(v) if !v.is_empty() => self.cast_first("float64", v[0]),
            PrimitiveValue::I16(v) if !v.is_empty() => self.cast_first("float64", v[0]),
            PrimitiveValue::U16(v) if !v.is_empty() => self.cast_first("float64", v[0]),
            PrimitiveValue::I32(v) if !v.is_empty() => self.cast_first("float64", v[0]),
            PrimitiveValue::U32(v) if !v.is_empty() => self.cast_first("float64", v[0]),
            PrimitiveValue::I64(v) if !v.is_empty() => self.cast_first("float64", v[0]),
            PrimitiveValue::U64(v) if !v.is_empty() => self.cast_first("float64", v[0]),
            PrimitiveValue::F32(v) if !v.is_empty() => self.cast_first("float64", v[0]),
            PrimitiveValue::F64(v) if !v.is_empty() => Ok(v[0]),
            _ => Err(self.impossible_conversion("float64")),
        }
    }

    /// Retrieve and convert all values
    /// to single-precision floating point numbers.
    ///
    /// An empty value yields an empty vector.
    pub fn to_multi_float32(&self) -> Result<Vec<f32>, ConvertValueError> {
        match self {
            PrimitiveValue::Empty => Ok(Vec::new()),
            PrimitiveValue::Str(s) => {
                let v = s
                    .trim()
                    .parse()
                    .context(ParseFloatSnafu)
                    .map_err(|e| self.conversion_failure("float32", e))?;
                Ok(vec![v])
            }
            PrimitiveValue::Strs(s) => s
                .iter()
                .map(|s| {
                    s.trim()
                        .parse()
                        .context(ParseFloatSnafu)
                        .map_err(|e| self.conversion_failure("float32", e))
                })
                .collect(),
            PrimitiveValue::U8(v) => self.cast_all("float32", v),
            PrimitiveValue::I16(v) => self.cast_all("float32", v),
            PrimitiveValue::U16(v) => self.cast_all("float32", v),
            PrimitiveValue::I32(v) => self.cast_all("float32", v),
            PrimitiveValue::U32(v) => self.cast_all("float32", v),
            PrimitiveValue::I64(v) => self.cast_all("float32", v),
            PrimitiveValue::U64(v) => self.cast_all("float32", v),
            PrimitiveValue::F32(v) => Ok(v.to_vec()),
            PrimitiveValue::F64(v) => self.cast_all("float32", v),
            PrimitiveValue::Tags(_) => Err(self.impossible_conversion("float32")),
        }
    }

    /// Retrieve and convert all values
    /// to double-precision floating point numbers.
    ///
    /// An empty value yields an empty vector.
    pub fn to_multi_float64(&self) -> Result<Vec<f64>, ConvertValueError> {
        match self {
            PrimitiveValue::Empty => Ok(Vec::new()),
            PrimitiveValue::Str(s) => {
                let v = s
                    .trim()
                    .parse()
                    .context(ParseFloatSnafu)
                    .map_err(|e| self.conversion_failure("float64", e))?;
                Ok(vec![v])
            }
            PrimitiveValue::Strs(s) => s
                .iter()
                .map(|s| {
                    s.trim()
                        .parse()
                        .context(ParseFloatSnafu)
                        .map_err(|e| self.conversion_failure("float64", e))
                })
                .collect(),
            PrimitiveValue::U8(v) => self.cast_all("float64", v),
            PrimitiveValue::I16(v) => self.cast_all("float64", v),
            PrimitiveValue::U16(v) => self.cast_all("float64", v),
            PrimitiveValue::I32(v) => self.cast_all("float64", v),
            PrimitiveValue::U32(v) => self.cast_all("float64", v),
            PrimitiveValue::I64(v) => self.cast_all("float64", v),
            PrimitiveValue::U64(v) => self.cast_all("float64", v),
            PrimitiveValue::F32(v) => self.cast_all("float64", v),
            PrimitiveValue::F64(v) => Ok(v.to_vec()),
            PrimitiveValue::Tags(_) => Err(self.impossible_conversion("float64")),
        }
    }

    fn cast_first<T, F>(&self, requested: &'static str, value: F) -> Result<T, ConvertValueError>
    where
        T: NumCast,
        F: NumCast + Copy + fmt::Display,
    {
        T::from(value).ok_or_else(|| {
            self.conversion_failure(
                requested,
                NarrowConvertSnafu {
                    value: value.to_string(),
                }
                .build(),
            )
        })
    }

    fn cast_all<T, F>(&self, requested: &'static str, values: &[F]) -> Result<Vec<T>, ConvertValueError>
    where
        T: NumCast,
        F: NumCast + Copy + fmt::Display,
    {
        values
            .iter()
            .map(|v| self.cast_first(requested, *v))
            .collect()
    }

    fn conversion_failure(
        &self,
        requested: &'static str,
        cause: InvalidValueReadError,
    ) -> ConvertValueError {
        ConvertValueError {
            requested,
            original: self.value_type(),
            cause: Some(Box::new(cause)),
        }
    }

    fn impossible_conversion(&self, requested: &'static str) -> ConvertValueError {
        ConvertValueError {
            requested,
            original: self.value_type(),
            cause: None,
        }
    }
}

impl fmt::Display for PrimitiveValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_str())
    }
}

/// An enum representing an abstraction of a DICOM element's data value type.
/// This should be the equivalent of `PrimitiveValue` without the content,
/// plus the sequence case.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum ValueType {
    /// No data. Used for any value of length 0.
    Empty,

    /// A sequence of strings.
    Strs,

    /// A single string.
    Str,

    /// A sequence of attribute tags.
    Tags,

    /// A sequence of unsigned 8-bit integers.
    U8,

    /// A sequence of signed 16-bit integers.
    I16,

    /// A sequence of unsigned 16-bit integers.
    U16,

    /// A sequence of signed 32-bit integers.
    I32,

    /// A sequence of unsigned 32-bit integers.
    U32,

    /// A sequence of signed 64-bit integers.
    I64,

    /// A sequence of unsigned 64-bit integers.
    U64,

    /// A sequence of 32-bit floating point numbers.
    F32,

    /// A sequence of 64-bit floating point numbers.
    F64,

    /// A sequence of items, each item being a nested data set.
    DataSetSequence,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dcm_value;

    #[test]
    fn primitive_value_to_str() {
        assert_eq!(dcm_value!().to_str(), "");
        assert_eq!(PrimitiveValue::from("Doe^John").to_str(), "Doe^John");
        assert_eq!(
            dcm_value!(Strs, ["DERIVED".to_string(), "PRIMARY".to_string()]).to_str(),
            "DERIVED\\PRIMARY"
        );
        assert_eq!(dcm_value!(U16, [10, 11, 9]).to_str(), "10\\11\\9");
        assert_eq!(
            dcm_value!(Tags, [Tag(0x0010, 0x0010), Tag(0x0010, 0x0020)]).to_str(),
            "(0010,0010)\\(0010,0020)"
        );
    }

    #[test]
    fn primitive_value_to_bytes() {
        let v = dcm_value!(U8, [1, 2, 5]);
        assert_eq!(v.to_bytes(), &[1, 2, 5][..]);
        assert!(matches!(v.to_bytes(), Cow::Borrowed(_)));

        let v = dcm_value!(U16, [0x0102]);
        if cfg!(target_endian = "little") {
            assert_eq!(v.to_bytes(), &[0x02, 0x01][..]);
        } else {
            assert_eq!(v.to_bytes(), &[0x01, 0x02][..]);
        }

        let v = dcm_value!(Strs, ["MR".to_string(), "XA".to_string()]);
        assert_eq!(v.to_bytes(), &b"MR\\XA"[..]);
    }

    #[test]
    fn primitive_value_to_int() {
        assert_eq!(dcm_value!(U16, [256, 2]).to_int::<u32>().unwrap(), 256);
        assert_eq!(dcm_value!(I32, [-12]).to_int::<i64>().unwrap(), -12);
        assert_eq!(PrimitiveValue::from(" 42 ").to_int::<u8>().unwrap(), 42);
        assert_eq!(
            dcm_value!(Strs, ["3".to_string(), "4".to_string()])
                .to_multi_int::<u16>()
                .unwrap(),
            vec![3, 4]
        );

        // narrowing out of range fails with a cause
        let e = dcm_value!(U16, [1000]).to_int::<u8>().unwrap_err();
        assert_eq!(e.original, ValueType::U16);
        assert!(e.cause.is_some());

        // no data, no integer
        assert!(dcm_value!().to_int::<u16>().is_err());
        assert_eq!(dcm_value!().to_multi_int::<u16>().unwrap(), vec![]);

        // garbage text fails with a parser cause
        let e = PrimitiveValue::from("twelve").to_int::<u16>().unwrap_err();
        assert!(e.cause.is_some());
    }

    #[test]
    fn primitive_value_to_float() {
        assert_eq!(PrimitiveValue::from("1.25").to_float64().unwrap(), 1.25);
        assert_eq!(dcm_value!(F64, [0.5]).to_float32().unwrap(), 0.5);
        assert_eq!(dcm_value!(U16, [3]).to_float64().unwrap(), 3.0);
        assert!(dcm_value!(Tags, [Tag(0x0008, 0x0008)]).to_float64().is_err());

        // multi-valued decimal strings, as found in DS payloads
        assert_eq!(
            dcm_value!(Strs, ["0.5".to_string(), "0.75".to_string()])
                .to_multi_float64()
                .unwrap(),
            vec![0.5, 0.75]
        );
        assert_eq!(dcm_value!().to_multi_float32().unwrap(), Vec::<f32>::new());
    }

    #[test]
    fn primitive_value_from_scalars() {
        assert_eq!(PrimitiveValue::from(5_u16), dcm_value!(U16, [5]));
        assert_eq!(
            PrimitiveValue::from("SECONDARY"),
            PrimitiveValue::Str("SECONDARY".to_string())
        );
        assert_eq!(
            PrimitiveValue::from(vec![0x01_u8, 0x02]),
            dcm_value!(U8, [0x01, 0x02])
        );
    }
}
