//! Decoding of raw element payloads into primitive values.
//!
//! A [`RawDataElement`] carries an element's payload
//! exactly as stored in its source,
//! along with the byte order needed to interpret it.
//! [`decode_value`] turns such a payload into a
//! [`PrimitiveValue`](dcmset_core::value::PrimitiveValue)
//! according to the element's value representation.

use byteordered::{ByteOrdered, Endianness};
use dcmset_core::header::{DataElementHeader, Header, Tag, VR};
use dcmset_core::value::{PrimitiveValue, C};
use smallvec::smallvec;
use snafu::{ensure, Backtrace, ResultExt, Snafu};

use crate::text::{DecodeTextError, SpecificCharacterSet, TextCodec};

/// An error which may occur when decoding an element's payload.
#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum DecodeValueError {
    /// Sequence payloads are built from nested data sets
    /// and cannot be decoded as a primitive value.
    #[snafu(display("sequence payloads do not decode into a primitive value"))]
    SequencePayload {
        /// The generated backtrace
        backtrace: Backtrace,
    },
    /// The payload was left in its source and has not been fetched yet.
    #[snafu(display("payload of element {} was deferred and has not been fetched", tag))]
    DeferredPayload {
        /// The tag of the offending element
        tag: Tag,
        /// The generated backtrace
        backtrace: Backtrace,
    },
    /// The payload length is not a multiple of the value size.
    #[snafu(display("invalid payload length {} for elements of {}", length, vr))]
    InvalidLength {
        /// The value representation of the payload
        vr: VR,
        /// The length of the payload in bytes
        length: usize,
        /// The generated backtrace
        backtrace: Backtrace,
    },
    /// Text payload decoding failed.
    #[snafu(display("could not decode text payload"))]
    DecodeText {
        /// The text codec error
        #[snafu(backtrace)]
        source: DecodeTextError,
    },
    /// Binary number reading failed.
    #[snafu(display("could not read binary numbers from payload"))]
    ReadNumber {
        /// The underlying I/O error
        source: std::io::Error,
        /// The generated backtrace
        backtrace: Backtrace,
    },
}

type Result<T, E = DecodeValueError> = std::result::Result<T, E>;

/// The location of an element's payload in its source:
/// the byte offset of the first payload byte
/// and the payload length in bytes.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct SourceMarker {
    /// Byte offset from the start of the source
    pub position: u64,
    /// Payload length in bytes
    pub length: u32,
}

/// A data element in its stored form:
/// a header plus the undecoded payload bytes,
/// kept with the byte order of the source.
///
/// The payload may be absent when its reading was deferred,
/// in which case a [`SourceMarker`] records
/// where the bytes can be fetched from.
#[derive(Debug, Clone, PartialEq)]
pub struct RawDataElement {
    header: DataElementHeader,
    data: Option<Vec<u8>>,
    marker: Option<SourceMarker>,
    endianness: Endianness,
}

impl Header for RawDataElement {
    fn tag(&self) -> Tag {
        self.header.tag
    }

    fn vr(&self) -> VR {
        self.header.vr
    }
}

impl RawDataElement {
    /// Create a raw data element with its payload in memory.
    pub fn new<T>(tag: T, vr: VR, data: Vec<u8>, endianness: Endianness) -> Self
    where
        T: Into<Tag>,
    {
        RawDataElement {
            header: DataElementHeader::new(tag, vr),
            data: Some(data),
            marker: None,
            endianness,
        }
    }

    /// Create a raw data element whose payload
    /// stays in the source until it is requested.
    pub fn new_deferred<T>(tag: T, vr: VR, marker: SourceMarker, endianness: Endianness) -> Self
    where
        T: Into<Tag>,
    {
        RawDataElement {
            header: DataElementHeader::new(tag, vr),
            data: None,
            marker: Some(marker),
            endianness,
        }
    }

    /// Retrieve the element header.
    #[inline]
    pub fn header(&self) -> DataElementHeader {
        self.header
    }

    /// Whether the payload is still in the source.
    #[inline]
    pub fn is_deferred(&self) -> bool {
        self.data.is_none()
    }

    /// Retrieve the payload bytes, if they are in memory.
    #[inline]
    pub fn data(&self) -> Option<&[u8]> {
        self.data.as_deref()
    }

    /// Record the payload bytes,
    /// turning a deferred element into an in-memory one.
    pub fn set_data(&mut self, data: Vec<u8>) {
        self.data = Some(data);
    }

    /// Retrieve the location of the payload in its source, if recorded.
    #[inline]
    pub fn marker(&self) -> Option<SourceMarker> {
        self.marker
    }

    /// Retrieve the byte order of the payload.
    #[inline]
    pub fn endianness(&self) -> Endianness {
        self.endianness
    }

    /// The length of the payload in bytes,
    /// whether in memory or still in the source.
    pub fn length(&self) -> u32 {
        match (&self.data, self.marker) {
            (Some(data), _) => data.len() as u32,
            (None, Some(marker)) => marker.length,
            (None, None) => 0,
        }
    }
}

/// Decode a raw data element's payload into a primitive value,
/// using the given character sets for text payloads.
///
/// The payload must be in memory:
/// deferred elements must be fetched from their source first.
pub fn decode_raw(
    raw: &RawDataElement,
    charsets: &[SpecificCharacterSet],
) -> Result<PrimitiveValue> {
    match raw.data() {
        Some(data) => decode_value(raw.vr(), data, raw.endianness(), charsets),
        None => DeferredPayloadSnafu { tag: raw.tag() }.fail(),
    }
}

/// Decode a binary payload into a primitive value
/// according to the given value representation and byte order.
///
/// Text payloads are decoded with the first character set of `charsets`
/// (code extension techniques are not supported),
/// split on the backslash delimiter where the representation allows
/// multiple values, and stripped of trailing space and null padding.
/// An empty payload always decodes to
/// [`PrimitiveValue::Empty`](dcmset_core::value::PrimitiveValue::Empty).
pub fn decode_value(
    vr: VR,
    data: &[u8],
    endianness: Endianness,
    charsets: &[SpecificCharacterSet],
) -> Result<PrimitiveValue> {
    if data.is_empty() {
        return Ok(PrimitiveValue::Empty);
    }
    match vr {
        VR::AE
        | VR::AS
        | VR::CS
        | VR::DA
        | VR::DS
        | VR::DT
        | VR::IS
        | VR::LO
        | VR::PN
        | VR::SH
        | VR::TM
        | VR::UC
        | VR::UI => {
            let charset = charsets.first().copied().unwrap_or_default();
            let text = charset.decode(data).context(DecodeTextSnafu)?;
            let parts: C<String> = text
                .split('\\')
                .map(|v| {
                    v.trim_end_matches(|c| c == ' ' || c == '\u{0}')
                        .to_string()
                })
                .collect();
            Ok(PrimitiveValue::Strs(parts))
        }
        VR::ST | VR::LT | VR::UT | VR::UR => {
            let charset = charsets.first().copied().unwrap_or_default();
            let text = charset.decode(data).context(DecodeTextSnafu)?;
            Ok(PrimitiveValue::Str(
                text.trim_end_matches(|c| c == ' ' || c == '\u{0}')
                    .to_string(),
            ))
        }
        VR::OB | VR::UN => Ok(PrimitiveValue::U8(C::from_slice(data))),
        VR::AT => {
            ensure!(
                data.len() % 4 == 0,
                InvalidLengthSnafu {
                    vr,
                    length: data.len()
                }
            );
            let mut src = ByteOrdered::runtime(data, endianness);
            let mut tags = C::with_capacity(data.len() / 4);
            for _ in 0..data.len() / 4 {
                let group = src.read_u16().context(ReadNumberSnafu)?;
                let element = src.read_u16().context(ReadNumberSnafu)?;
                tags.push(Tag(group, element));
            }
            Ok(PrimitiveValue::Tags(tags))
        }
        VR::US | VR::OW => {
            ensure!(
                data.len() % 2 == 0,
                InvalidLengthSnafu {
                    vr,
                    length: data.len()
                }
            );
            let mut values = smallvec![0_u16; data.len() / 2];
            ByteOrdered::runtime(data, endianness)
                .read_u16_into(&mut values)
                .context(ReadNumberSnafu)?;
            Ok(PrimitiveValue::U16(values))
        }
        VR::SS => {
            ensure!(
                data.len() % 2 == 0,
                InvalidLengthSnafu {
                    vr,
                    length: data.len()
                }
            );
            let mut values = smallvec![0_i16; data.len() / 2];
            ByteOrdered::runtime(data, endianness)
                .read_i16_into(&mut values)
                .context(ReadNumberSnafu)?;
            Ok(PrimitiveValue::I16(values))
        }
        VR::UL | VR::OL => {
            ensure!(
                data.len() % 4 == 0,
                InvalidLengthSnafu {
                    vr,
                    length: data.len()
                }
            );
            let mut values = smallvec![0_u32; data.len() / 4];
            ByteOrdered::runtime(data, endianness)
                .read_u32_into(&mut values)
                .context(ReadNumberSnafu)?;
            Ok(PrimitiveValue::U32(values))
        }
        VR::SL => {
            ensure!(
                data.len() % 4 == 0,
                InvalidLengthSnafu {
                    vr,
                    length: data.len()
                }
            );
            let mut values = smallvec![0_i32; data.len() / 4];
            ByteOrdered::runtime(data, endianness)
                .read_i32_into(&mut values)
                .context(ReadNumberSnafu)?;
            Ok(PrimitiveValue::I32(values))
        }
        VR::UV | VR::OV => {
            ensure!(
                data.len() % 8 == 0,
                InvalidLengthSnafu {
                    vr,
                    length: data.len()
                }
            );
            let mut values = smallvec![0_u64; data.len() / 8];
            ByteOrdered::runtime(data, endianness)
                .read_u64_into(&mut values)
                .context(ReadNumberSnafu)?;
            Ok(PrimitiveValue::U64(values))
        }
        VR::SV => {
            ensure!(
                data.len() % 8 == 0,
                InvalidLengthSnafu {
                    vr,
                    length: data.len()
                }
            );
            let mut values = smallvec![0_i64; data.len() / 8];
            ByteOrdered::runtime(data, endianness)
                .read_i64_into(&mut values)
                .context(ReadNumberSnafu)?;
            Ok(PrimitiveValue::I64(values))
        }
        VR::FL | VR::OF => {
            ensure!(
                data.len() % 4 == 0,
                InvalidLengthSnafu {
                    vr,
                    length: data.len()
                }
            );
            let mut values = smallvec![0_f32; data.len() / 4];
            ByteOrdered::runtime(data, endianness)
                .read_f32_into(&mut values)
                .context(ReadNumberSnafu)?;
            Ok(PrimitiveValue::F32(values))
        }
        VR::FD | VR::OD => {
            ensure!(
                data.len() % 8 == 0,
                InvalidLengthSnafu {
                    vr,
                    length: data.len()
                }
            );
            let mut values = smallvec![0_f64; data.len() / 8];
            ByteOrdered::runtime(data, endianness)
                .read_f64_into(&mut values)
                .context(ReadNumberSnafu)?;
            Ok(PrimitiveValue::F64(values))
        }
        VR::SQ => SequencePayloadSnafu.fail(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dcmset_core::dcm_value;

    const DEFAULT: &[SpecificCharacterSet] = &[SpecificCharacterSet::Default];

    #[test]
    fn decode_empty_payload() {
        let v = decode_value(VR::PN, b"", Endianness::Little, DEFAULT).unwrap();
        assert_eq!(v, PrimitiveValue::Empty);
    }

    #[test]
    fn decode_multi_valued_text() {
        let v = decode_value(VR::CS, b"DERIVED\\PRIMARY ", Endianness::Little, DEFAULT).unwrap();
        assert_eq!(
            v,
            dcm_value!(Strs, ["DERIVED".to_string(), "PRIMARY".to_string()])
        );

        // UID values are padded with a trailing null byte
        let v = decode_value(VR::UI, b"1.2.840.10008.1.2.1\0", Endianness::Little, DEFAULT)
            .unwrap();
        assert_eq!(v, dcm_value!(Strs, ["1.2.840.10008.1.2.1".to_string()]));
    }

    #[test]
    fn decode_single_valued_text() {
        // inner backslashes and spaces are kept in text representations
        let v = decode_value(VR::ST, b"line one \\ line two  ", Endianness::Little, DEFAULT)
            .unwrap();
        assert_eq!(v, PrimitiveValue::Str("line one \\ line two".to_string()));
    }

    #[test]
    fn decode_text_with_character_set() {
        let charsets = [SpecificCharacterSet::IsoIr100];
        let v = decode_value(VR::PN, b"Sim\xF5es^Jo\xE3o", Endianness::Little, &charsets).unwrap();
        assert_eq!(v, dcm_value!(Strs, ["Simões^João".to_string()]));
    }

    #[test]
    fn decode_binary_numbers() {
        let v = decode_value(VR::US, &[0x00, 0x01, 0x10, 0x00], Endianness::Little, DEFAULT)
            .unwrap();
        assert_eq!(v, dcm_value!(U16, [0x0100, 0x0010]));

        let v = decode_value(VR::US, &[0x00, 0x01, 0x10, 0x00], Endianness::Big, DEFAULT).unwrap();
        assert_eq!(v, dcm_value!(U16, [0x0001, 0x1000]));

        let v = decode_value(
            VR::FD,
            &0.5_f64.to_le_bytes(),
            Endianness::Little,
            DEFAULT,
        )
        .unwrap();
        assert_eq!(v, dcm_value!(F64, [0.5]));

        let e = decode_value(VR::US, &[0x00, 0x01, 0x10], Endianness::Little, DEFAULT).unwrap_err();
        assert!(matches!(
            e,
            DecodeValueError::InvalidLength {
                vr: VR::US,
                length: 3,
                ..
            }
        ));
    }

    #[test]
    fn decode_attribute_tags() {
        let v = decode_value(
            VR::AT,
            &[0x08, 0x00, 0x05, 0x00, 0x10, 0x00, 0x10, 0x00],
            Endianness::Little,
            DEFAULT,
        )
        .unwrap();
        assert_eq!(
            v,
            dcm_value!(Tags, [Tag(0x0008, 0x0005), Tag(0x0010, 0x0010)])
        );
    }

    #[test]
    fn sequences_are_rejected() {
        let e = decode_value(VR::SQ, &[0xFF], Endianness::Little, DEFAULT).unwrap_err();
        assert!(matches!(e, DecodeValueError::SequencePayload { .. }));
    }

    #[test]
    fn raw_element_decoding() {
        let raw = RawDataElement::new(
            Tag(0x0028, 0x0010),
            VR::US,
            vec![0x00, 0x02],
            Endianness::Little,
        );
        assert!(!raw.is_deferred());
        assert_eq!(raw.length(), 2);
        assert_eq!(decode_raw(&raw, DEFAULT).unwrap(), dcm_value!(U16, [512]));

        let mut raw = RawDataElement::new_deferred(
            Tag(0x7FE0, 0x0010),
            VR::OW,
            SourceMarker {
                position: 0x0140,
                length: 4,
            },
            Endianness::Little,
        );
        assert!(raw.is_deferred());
        assert_eq!(raw.length(), 4);
        let e = decode_raw(&raw, DEFAULT).unwrap_err();
        assert!(matches!(
            e,
            DecodeValueError::DeferredPayload {
                tag: Tag(0x7FE0, 0x0010),
                ..
            }
        ));

        raw.set_data(vec![0x01, 0x00, 0x02, 0x00]);
        assert!(!raw.is_deferred());
        assert_eq!(decode_raw(&raw, DEFAULT).unwrap(), dcm_value!(U16, [1, 2]));
    }
}
