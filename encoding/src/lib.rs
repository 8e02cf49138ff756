//! This crate contains the encoding layer for DICOM data sets:
//! the representation of a not yet decoded data element,
//! the decoding of binary payloads into primitive values
//! according to the element's value representation,
//! and text codecs for the supported specific character sets.
#![recursion_limit = "80"]
#![deny(trivial_numeric_casts, unsafe_code, unstable_features)]
#![warn(
    missing_debug_implementations,
    missing_docs,
    unused_qualifications,
    unused_import_braces
)]

pub mod decode;
pub mod text;

pub use byteordered::Endianness;
pub use decode::{decode_raw, decode_value, DecodeValueError, RawDataElement, SourceMarker};
pub use text::{
    resolve_encodings, DecodeTextError, EncodeTextError, SpecificCharacterSet, TextCodec,
};
