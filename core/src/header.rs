//! This module contains the concept of an element header,
//! and the definitions for the attribute tag
//! and value representation.
//! The decoded [data element](DataElement) type also lives here.
use crate::value::{ConvertValueError, PrimitiveValue, Value};
use num_traits::NumCast;
use snafu::{Backtrace, ResultExt, Snafu};
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

/// An alias for a 16-bit unsigned group number.
pub type GroupNumber = u16;
/// An alias for a 16-bit unsigned element number.
pub type ElementNumber = u16;

/// The data type for a data element tag.
///
/// Tags are composed by a (group, element) pair of 16-bit unsigned
/// integers. Aside from writing a tag directly, one may also use
/// conversions from tuples and arrays.
///
/// # Example
///
/// ```
/// # use dcmset_core::Tag;
/// let patient_name = Tag(0x0010, 0x0010);
/// assert_eq!(patient_name, Tag::from((0x0010, 0x0010)));
/// assert_eq!(patient_name.group(), 0x0010);
/// ```
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy)]
pub struct Tag(pub GroupNumber, pub ElementNumber);

impl Tag {
    /// Getter for the tag's group value.
    #[inline]
    pub fn group(self) -> GroupNumber {
        self.0
    }

    /// Getter for the tag's element value.
    #[inline]
    pub fn element(self) -> ElementNumber {
        self.1
    }

    /// Check whether this tag is reserved for vendor-specific data.
    /// Private tags have an odd group number.
    #[inline]
    pub fn is_private(self) -> bool {
        self.0 & 1 == 1
    }

    /// Check whether this tag designates a private creator element,
    /// the element which names the owner of a private reservation block
    /// (element number between 0x0010 and 0x00FF in an odd group).
    #[inline]
    pub fn is_private_creator(self) -> bool {
        self.is_private() && (0x0010..=0x00FF).contains(&self.1)
    }

    /// Obtain the reservation block number of this tag,
    /// which is the high byte of the element number.
    /// Only meaningful for private data element tags.
    #[inline]
    pub fn private_block(self) -> u8 {
        (self.1 >> 8) as u8
    }

    /// Obtain the tag of the private creator element
    /// which reserves this tag's block (PS3.5 §7.8.1):
    /// same group, element number equal to the reservation block number.
    /// Only meaningful for private data element tags.
    #[inline]
    pub fn private_creator_tag(self) -> Tag {
        Tag(self.0, self.1 >> 8)
    }
}

impl fmt::Debug for Tag {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Tag(0x{:04X}, 0x{:04X})", self.0, self.1)
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({:04X},{:04X})", self.0, self.1)
    }
}

impl From<(u16, u16)> for Tag {
    #[inline]
    fn from((g, e): (u16, u16)) -> Tag {
        Tag(g, e)
    }
}

impl From<[u16; 2]> for Tag {
    #[inline]
    fn from(n: [u16; 2]) -> Tag {
        Tag(n[0], n[1])
    }
}

impl PartialEq<(u16, u16)> for Tag {
    fn eq(&self, other: &(u16, u16)) -> bool {
        self.0 == other.0 && self.1 == other.1
    }
}

impl PartialEq<[u16; 2]> for Tag {
    fn eq(&self, other: &[u16; 2]) -> bool {
        self.0 == other[0] && self.1 == other[1]
    }
}

/// An error which may occur when parsing a tag from its text form.
#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum ParseTagError {
    /// Not one of the accepted forms
    /// `(GGGG,EEEE)`, `GGGG,EEEE` or `GGGGEEEE`
    #[snafu(display("unexpected tag form, expected `(GGGG,EEEE)`, `GGGG,EEEE` or `GGGGEEEE`"))]
    UnexpectedForm {
        /// backtrace of the error
        backtrace: Backtrace,
    },
    /// The group number part is not valid hexadecimal
    #[snafu(display("invalid group number part: {}", source))]
    ParseGroup {
        /// the number parsing error
        source: std::num::ParseIntError,
        /// backtrace of the error
        backtrace: Backtrace,
    },
    /// The element number part is not valid hexadecimal
    #[snafu(display("invalid element number part: {}", source))]
    ParseElement {
        /// the number parsing error
        source: std::num::ParseIntError,
        /// backtrace of the error
        backtrace: Backtrace,
    },
}

impl FromStr for Tag {
    type Err = ParseTagError;

    /// Parse a tag from one of its text forms:
    /// `(GGGG,EEEE)`, `GGGG,EEEE` or `GGGGEEEE`,
    /// where the numbers are in hexadecimal.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let s = s
            .strip_prefix('(')
            .and_then(|rest| rest.strip_suffix(')'))
            .unwrap_or(s);
        if let Some((group, element)) = s.split_once(',') {
            let group = u16::from_str_radix(group.trim(), 16).context(ParseGroupSnafu)?;
            let element = u16::from_str_radix(element.trim(), 16).context(ParseElementSnafu)?;
            Ok(Tag(group, element))
        } else if s.len() == 8 && s.is_char_boundary(4) {
            let group = u16::from_str_radix(&s[..4], 16).context(ParseGroupSnafu)?;
            let element = u16::from_str_radix(&s[4..], 16).context(ParseElementSnafu)?;
            Ok(Tag(group, element))
        } else {
            UnexpectedFormSnafu.fail()
        }
    }
}

/// An enum type for a value representation,
/// the declared type code of an element's payload.
#[derive(Debug, PartialEq, Eq, Ord, PartialOrd, Hash, Clone, Copy)]
pub enum VR {
    /// Application Entity
    AE,
    /// Age String
    AS,
    /// Attribute Tag
    AT,
    /// Code String
    CS,
    /// Date
    DA,
    /// Decimal String
    DS,
    /// Date Time
    DT,
    /// Floating Point Single
    FL,
    /// Floating Point Double
    FD,
    /// Integer String
    IS,
    /// Long String
    LO,
    /// Long Text
    LT,
    /// Other Byte
    OB,
    /// Other Double
    OD,
    /// Other Float
    OF,
    /// Other Long
    OL,
    /// Other Very Long
    OV,
    /// Other Word
    OW,
    /// Person Name
    PN,
    /// Short String
    SH,
    /// Signed Long
    SL,
    /// Sequence of Items
    SQ,
    /// Signed Short
    SS,
    /// Short Text
    ST,
    /// Signed Very Long
    SV,
    /// Time
    TM,
    /// Unlimited Characters
    UC,
    /// Unique Identifier (UID)
    UI,
    /// Unsigned Long
    UL,
    /// Unknown
    UN,
    /// Universal Resource Identifier or Universal Resource Locator (URI/URL)
    UR,
    /// Unsigned Short
    US,
    /// Unlimited Text
    UT,
    /// Unsigned Very Long
    UV,
}

impl VR {
    /// Obtain the two-letter code of this value representation.
    pub fn code(self) -> &'static str {
        use VR::*;
        match self {
            AE => "AE",
            AS => "AS",
            AT => "AT",
            CS => "CS",
            DA => "DA",
            DS => "DS",
            DT => "DT",
            FL => "FL",
            FD => "FD",
            IS => "IS",
            LO => "LO",
            LT => "LT",
            OB => "OB",
            OD => "OD",
            OF => "OF",
            OL => "OL",
            OV => "OV",
            OW => "OW",
            PN => "PN",
            SH => "SH",
            SL => "SL",
            SQ => "SQ",
            SS => "SS",
            ST => "ST",
            SV => "SV",
            TM => "TM",
            UC => "UC",
            UI => "UI",
            UL => "UL",
            UN => "UN",
            UR => "UR",
            US => "US",
            UT => "UT",
            UV => "UV",
        }
    }
}

impl fmt::Display for VR {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A trait for types which can be seen as an element header:
/// a tag plus a declared value representation.
pub trait Header {
    /// Retrieve the element's tag as a `(group, element)` pair.
    fn tag(&self) -> Tag;

    /// Retrieve the element's declared value representation.
    fn vr(&self) -> VR;
}

/// A data type for a data element header:
/// the parts of an element that are known
/// without touching its value.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub struct DataElementHeader {
    /// the attribute tag
    pub tag: Tag,
    /// the declared value representation
    pub vr: VR,
}

impl DataElementHeader {
    /// Create a new data element header.
    #[inline]
    pub fn new<T: Into<Tag>>(tag: T, vr: VR) -> DataElementHeader {
        DataElementHeader {
            tag: tag.into(),
            vr,
        }
    }
}

impl Header for DataElementHeader {
    fn tag(&self) -> Tag {
        self.tag
    }

    fn vr(&self) -> VR {
        self.vr
    }
}

impl From<Tag> for DataElementHeader {
    /// Assume the unknown value representation.
    fn from(tag: Tag) -> Self {
        DataElementHeader { tag, vr: VR::UN }
    }
}

/// A data type that is never instantiated.
/// Used as the nested item type of elements
/// which cannot hold nested data sets.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum EmptyObject {}

/// A data type that represents and owns a decoded data element.
///
/// The type parameter `I` is the type of a nested data set,
/// used when the element's value is a sequence.
/// When the element belongs to a private reservation block
/// whose creator is known,
/// the creator's name is recorded alongside the value.
#[derive(Debug, PartialEq, Clone)]
pub struct DataElement<I = EmptyObject> {
    header: DataElementHeader,
    private_creator: Option<String>,
    value: Value<I>,
}

impl<I> Header for DataElement<I> {
    #[inline]
    fn tag(&self) -> Tag {
        self.header.tag
    }

    #[inline]
    fn vr(&self) -> VR {
        self.header.vr
    }
}

impl<I> DataElement<I> {
    /// Create an empty data element.
    pub fn empty(tag: Tag, vr: VR) -> Self {
        DataElement {
            header: DataElementHeader::new(tag, vr),
            private_creator: None,
            value: PrimitiveValue::Empty.into(),
        }
    }

    /// Create a new data element from the given parts.
    pub fn new<T>(tag: Tag, vr: VR, value: T) -> Self
    where
        T: Into<Value<I>>,
    {
        DataElement {
            header: DataElementHeader::new(tag, vr),
            private_creator: None,
            value: value.into(),
        }
    }

    /// Attach a private creator name to this element,
    /// consuming and returning it back.
    pub fn with_private_creator<T>(mut self, creator: T) -> Self
    where
        T: Into<String>,
    {
        self.private_creator = Some(creator.into());
        self
    }

    /// Retrieve the element header.
    #[inline]
    pub fn header(&self) -> DataElementHeader {
        self.header
    }

    /// Retrieve the name of the private block creator
    /// which this element is attributed to, if known.
    #[inline]
    pub fn private_creator(&self) -> Option<&str> {
        self.private_creator.as_deref()
    }

    /// Record the name of the private block creator
    /// which this element is attributed to.
    pub fn set_private_creator<T>(&mut self, creator: T)
    where
        T: Into<String>,
    {
        self.private_creator = Some(creator.into());
    }

    /// Retrieve the element's value.
    #[inline]
    pub fn value(&self) -> &Value<I> {
        &self.value
    }

    /// Obtain a mutable reference to the element's value.
    #[inline]
    pub fn value_mut(&mut self) -> &mut Value<I> {
        &mut self.value
    }

    /// Move the value out, discarding the rest of the element.
    #[inline]
    pub fn into_value(self) -> Value<I> {
        self.value
    }

    /// Apply a function over the element's value.
    pub fn update_value(&mut self, f: impl FnOnce(&mut Value<I>)) {
        f(&mut self.value);
    }

    /// Obtain the number of individual values in this element.
    pub fn multiplicity(&self) -> u32 {
        self.value.multiplicity()
    }

    /// Retrieve the items of this element if it is a sequence.
    pub fn items(&self) -> Option<&[I]> {
        self.value.items()
    }

    /// Retrieve the element's value as a single string,
    /// with multiple values joined by a backslash.
    ///
    /// Returns an error if the value is a sequence of nested data sets.
    pub fn to_str(&self) -> Result<Cow<str>, ConvertValueError> {
        self.value.to_str()
    }

    /// Retrieve the element's value as raw bytes in native byte order.
    ///
    /// Returns an error if the value is a sequence of nested data sets.
    pub fn to_bytes(&self) -> Result<Cow<[u8]>, ConvertValueError> {
        self.value.to_bytes()
    }

    /// Retrieve and convert the element's first value to an integer.
    pub fn to_int<T>(&self) -> Result<T, ConvertValueError>
    where
        T: NumCast + FromStr<Err = std::num::ParseIntError>,
    {
        self.value.to_int()
    }

    /// Retrieve and convert the element's first value
    /// to a single-precision floating point number.
    pub fn to_float32(&self) -> Result<f32, ConvertValueError> {
        self.value.to_float32()
    }

    /// Retrieve and convert the element's first value
    /// to a double-precision floating point number.
    pub fn to_float64(&self) -> Result<f64, ConvertValueError> {
        self.value.to_float64()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dcm_value;

    #[test]
    fn tag_from_u16_pair() {
        let t = Tag::from((0x0010u16, 0x0020u16));
        assert_eq!(0x0010u16, t.group());
        assert_eq!(0x0020u16, t.element());
        let t = Tag::from([0x0040u16, 0x0008u16]);
        assert_eq!(0x0040u16, t.group());
        assert_eq!(0x0008u16, t.element());
    }

    #[test]
    fn tag_displays_and_debugs() {
        assert_eq!(Tag(0x0008, 0x0005).to_string(), "(0008,0005)");
        assert_eq!(format!("{:?}", Tag(0x7FE0, 0x0010)), "Tag(0x7FE0, 0x0010)");
    }

    #[test]
    fn tag_total_order() {
        assert!(Tag(0x0008, 0x0018) < Tag(0x0008, 0x0060));
        assert!(Tag(0x0008, 0xFFFF) < Tag(0x0010, 0x0000));
        assert_eq!(Tag(0x0010, 0x0010), (0x0010u16, 0x0010u16));
        assert_eq!(Tag(0x0010, 0x0010), [0x0010u16, 0x0010u16]);
    }

    #[test]
    fn tag_parses_from_text_forms() {
        assert_eq!("(0010,0010)".parse::<Tag>().unwrap(), Tag(0x0010, 0x0010));
        assert_eq!("0008,0060".parse::<Tag>().unwrap(), Tag(0x0008, 0x0060));
        assert_eq!("7FE00010".parse::<Tag>().unwrap(), Tag(0x7FE0, 0x0010));
        assert!(matches!(
            "patient".parse::<Tag>(),
            Err(ParseTagError::UnexpectedForm { .. })
        ));
        assert!(matches!(
            "(00GG,0010)".parse::<Tag>(),
            Err(ParseTagError::ParseGroup { .. })
        ));
    }

    #[test]
    fn private_tag_properties() {
        let private = Tag(0x0009, 0x1001);
        assert!(private.is_private());
        assert!(!private.is_private_creator());
        assert_eq!(private.private_block(), 0x10);
        assert_eq!(private.private_creator_tag(), Tag(0x0009, 0x0010));

        let creator = Tag(0x0009, 0x0010);
        assert!(creator.is_private_creator());

        let public = Tag(0x0008, 0x0060);
        assert!(!public.is_private());
    }

    #[test]
    fn element_basic_accessors() {
        let elem: DataElement = DataElement::new(
            Tag(0x0010, 0x0010),
            VR::PN,
            dcm_value!(Strs, ["Doe^John".to_string()]),
        );
        assert_eq!(elem.tag(), Tag(0x0010, 0x0010));
        assert_eq!(elem.vr(), VR::PN);
        assert_eq!(elem.to_str().unwrap(), "Doe^John");
        assert_eq!(elem.private_creator(), None);
    }

    #[test]
    fn element_private_creator_round_trip() {
        let mut elem: DataElement = DataElement::empty(Tag(0x0009, 0x1001), VR::LO);
        assert_eq!(elem.private_creator(), None);
        elem.set_private_creator("ACME");
        assert_eq!(elem.private_creator(), Some("ACME"));

        let elem: DataElement =
            DataElement::new(Tag(0x0009, 0x1002), VR::US, PrimitiveValue::from(5u16))
                .with_private_creator("ACME");
        assert_eq!(elem.private_creator(), Some("ACME"));
    }

    #[test]
    fn element_numeric_conversion() {
        let elem: DataElement =
            DataElement::new(Tag(0x0028, 0x0010), VR::US, dcm_value!(U16, [512]));
        assert_eq!(elem.to_int::<u16>().unwrap(), 512);
        assert_eq!(elem.to_int::<u32>().unwrap(), 512);
        assert_eq!(elem.to_float64().unwrap(), 512.0);
    }
}
