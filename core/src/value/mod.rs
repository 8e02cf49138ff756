//! This module includes a high level abstraction over a data element's value:
//! either a primitive value or a sequence of nested data sets.
//! The type parameter of [`Value`] establishes the data set type
//! used in the sequence case,
//! making the recursion explicit and strictly ownership-directed.
mod primitive;

pub use primitive::{ConvertValueError, InvalidValueReadError, PrimitiveValue, ValueType};

use num_traits::NumCast;
use smallvec::SmallVec;
use std::borrow::Cow;
use std::str::FromStr;

/// The type of the container used for multi-valued data.
/// It usually has the backing of a small vector.
pub type C<T> = SmallVec<[T; 2]>;

/// Construct a primitive data value.
///
/// The first argument is the name of a [`PrimitiveValue`] variant,
/// followed by either a bracketed list of values
/// or a single expression for the multi-value container.
///
/// # Example
///
/// ```
/// # use dcmset_core::dcm_value;
/// # use dcmset_core::value::PrimitiveValue;
/// let pixel_spacing = dcm_value!(Strs, ["0.5".to_string(), "0.5".to_string()]);
/// let rows = dcm_value!(U16, [512]);
/// assert_eq!(rows.multiplicity(), 1);
/// ```
#[macro_export]
macro_rules! dcm_value {
    () => {
        $crate::value::PrimitiveValue::Empty
    };
    ($typ:ident, [ $($elem:expr),* $(,)? ]) => {
        $crate::value::PrimitiveValue::$typ($crate::smallvec::smallvec![$($elem,)*])
    };
    ($typ:ident, $elem:expr) => {
        $crate::value::PrimitiveValue::$typ($crate::value::C::from_elem($elem, 1))
    };
}

/// Representation of a full data element value:
/// either a primitive value
/// or a sequence of items,
/// each item being a nested data set of type `I`.
#[derive(Debug, PartialEq, Clone)]
pub enum Value<I = crate::header::EmptyObject> {
    /// Primitive value.
    Primitive(PrimitiveValue),
    /// A sequence of items, each item being a nested data set.
    Sequence(C<I>),
}

impl<I> Value<I> {
    /// Obtain the value's type.
    pub fn value_type(&self) -> ValueType {
        match self {
            Value::Primitive(v) => v.value_type(),
            Value::Sequence(_) => ValueType::DataSetSequence,
        }
    }

    /// Obtain the number of individual values.
    /// In the sequence case, this is the number of items.
    pub fn multiplicity(&self) -> u32 {
        match self {
            Value::Primitive(v) => v.multiplicity(),
            Value::Sequence(items) => items.len() as u32,
        }
    }

    /// Gets a reference to the primitive value.
    pub fn primitive(&self) -> Option<&PrimitiveValue> {
        match self {
            Value::Primitive(v) => Some(v),
            _ => None,
        }
    }

    /// Gets a mutable reference to the primitive value.
    pub fn primitive_mut(&mut self) -> Option<&mut PrimitiveValue> {
        match self {
            Value::Primitive(v) => Some(v),
            _ => None,
        }
    }

    /// Gets a reference to the items of a sequence.
    ///
    /// Returns `None` if the value is primitive.
    pub fn items(&self) -> Option<&[I]> {
        match self {
            Value::Sequence(items) => Some(items),
            _ => None,
        }
    }

    /// Gets a mutable reference to the items of a sequence.
    ///
    /// Returns `None` if the value is primitive.
    pub fn items_mut(&mut self) -> Option<&mut C<I>> {
        match self {
            Value::Sequence(items) => Some(items),
            _ => None,
        }
    }

    /// Move the items out of a sequence value.
    ///
    /// Returns `None` if the value is primitive.
    pub fn into_items(self) -> Option<C<I>> {
        match self {
            Value::Sequence(items) => Some(items),
            _ => None,
        }
    }

    /// Get a single string value. If it contains multiple strings,
    /// only the first one is returned.
    pub fn string(&self) -> Option<&str> {
        self.primitive().and_then(PrimitiveValue::string)
    }

    /// Get the string values of the value,
    /// if it is held as text.
    pub fn strings(&self) -> Option<Vec<&str>> {
        self.primitive().and_then(PrimitiveValue::strings)
    }

    /// Convert the value to a single string,
    /// with multiple values joined by a backslash.
    ///
    /// Returns an error if the value is a sequence of nested data sets.
    pub fn to_str(&self) -> Result<Cow<str>, ConvertValueError> {
        match self {
            Value::Primitive(v) => Ok(v.to_str()),
            Value::Sequence(_) => Err(self.sequence_conversion_error("str")),
        }
    }

    /// Convert the value to a vector of raw bytes in native byte order.
    ///
    /// Returns an error if the value is a sequence of nested data sets.
    pub fn to_bytes(&self) -> Result<Cow<[u8]>, ConvertValueError> {
        match self {
            Value::Primitive(v) => Ok(v.to_bytes()),
            Value::Sequence(_) => Err(self.sequence_conversion_error("bytes")),
        }
    }

    /// Retrieve and convert the first value to an integer.
    pub fn to_int<T>(&self) -> Result<T, ConvertValueError>
    where
        T: NumCast + FromStr<Err = std::num::ParseIntError>,
    {
        match self {
            Value::Primitive(v) => v.to_int(),
            Value::Sequence(_) => Err(self.sequence_conversion_error("integer")),
        }
    }

    /// Retrieve and convert all values to integers.
    pub fn to_multi_int<T>(&self) -> Result<Vec<T>, ConvertValueError>
    where
        T: NumCast + FromStr<Err = std::num::ParseIntError>,
    {
        match self {
            Value::Primitive(v) => v.to_multi_int(),
            Value::Sequence(_) => Err(self.sequence_conversion_error("integer")),
        }
    }

    /// Retrieve and convert the first value
    /// to a single-precision floating point number.
    pub fn to_float32(&self) -> Result<f32, ConvertValueError> {
        match self {
            Value::Primitive(v) => v.to_float32(),
            Value::Sequence(_) => Err(self.sequence_conversion_error("float32")),
        }
    }

    /// Retrieve and convert the first value
    /// to a double-precision floating point number.
    pub fn to_float64(&self) -> Result<f64, ConvertValueError> {
        match self {
            Value::Primitive(v) => v.to_float64(),
            Value::Sequence(_) => Err(self.sequence_conversion_error("float64")),
        }
    }

    /// Retrieve and convert all values
    /// to single-precision floating point numbers.
    pub fn to_multi_float32(&self) -> Result<Vec<f32>, ConvertValueError> {
        match self {
            Value::Primitive(v) => v.to_multi_float32(),
            Value::Sequence(_) => Err(self.sequence_conversion_error("float32")),
        }
    }

    /// Retrieve and convert all values
    /// to double-precision floating point numbers.
    pub fn to_multi_float64(&self) -> Result<Vec<f64>, ConvertValueError> {
        match self {
            Value::Primitive(v) => v.to_multi_float64(),
            Value::Sequence(_) => Err(self.sequence_conversion_error("float64")),
        }
    }

    fn sequence_conversion_error(&self, requested: &'static str) -> ConvertValueError {
        ConvertValueError {
            requested,
            original: ValueType::DataSetSequence,
            cause: None,
        }
    }
}

impl<I> From<PrimitiveValue> for Value<I> {
    fn from(v: PrimitiveValue) -> Self {
        Value::Primitive(v)
    }
}

impl<I> From<&str> for Value<I> {
    fn from(v: &str) -> Self {
        Value::Primitive(v.into())
    }
}

impl<I> From<String> for Value<I> {
    fn from(v: String) -> Self {
        Value::Primitive(v.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dcm_value;
    use std::iter::FromIterator;

    #[test]
    fn shape_of_values() {
        let v: Value = dcm_value!(U16, [256, 512]).into();
        assert_eq!(v.value_type(), ValueType::U16);
        assert_eq!(v.multiplicity(), 2);
        assert!(v.items().is_none());

        let v: Value<u8> = Value::Sequence(C::from_iter(vec![1u8, 2, 3]));
        assert_eq!(v.value_type(), ValueType::DataSetSequence);
        assert_eq!(v.multiplicity(), 3);
        assert_eq!(v.items(), Some(&[1u8, 2, 3][..]));
    }

    #[test]
    fn sequences_do_not_convert() {
        let v: Value<u8> = Value::Sequence(C::new());
        let e = v.to_str().unwrap_err();
        assert_eq!(e.original, ValueType::DataSetSequence);
        assert!(v.to_int::<u32>().is_err());
        assert!(v.to_bytes().is_err());
    }

    #[test]
    fn value_from_text() {
        let v: Value = "CT".into();
        assert_eq!(v.string(), Some("CT"));
        assert_eq!(v.to_str().unwrap(), "CT");
    }
}
