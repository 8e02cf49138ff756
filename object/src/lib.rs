//! This crate contains a high-level abstraction for reading and manipulating
//! DICOM data sets.
//! At this level, a data set is a collection of typed elements
//! indexed by their attribute tag,
//! where sequence elements hold fully structured nested data sets
//! and binary payloads may stay in the original source
//! until their value is requested.
//!
//! The crate does not define a byte-level file grammar.
//! Readers hand their elements over in raw form
//! (see [`RawDataElement`](dcmset_encoding::decode::RawDataElement))
//! and writers plug in through the [`WriteRecord`] trait,
//! so that data sets remain agnostic to the encoding in use.
//!
//! # Examples
//!
//! Data sets can be built from scratch
//! and queried by tag or by standard attribute name:
//!
//! ```
//! # use dcmset_core::{dcm_value, DataElement, VR};
//! # use dcmset_dictionary_std::tags;
//! use dcmset_object::DataSet;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut obj = DataSet::new_empty();
//! obj.put(DataElement::new(tags::PATIENT_NAME, VR::PN, "Doe^John"));
//! obj.put(DataElement::new(tags::ROWS, VR::US, dcm_value!(U16, [512])));
//!
//! let patient_name = obj.element(tags::PATIENT_NAME)?.to_str()?;
//! assert_eq!(patient_name, "Doe^John");
//!
//! let rows: u16 = obj.element_by_name("Rows")?.to_int()?;
//! assert_eq!(rows, 512);
//! # Ok(())
//! # }
//! ```
//!
//! By-name assignment resolves the tag and value representation
//! through the data set's dictionary:
//!
//! ```
//! # use dcmset_dictionary_std::tags;
//! use dcmset_object::DataSet;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut obj = DataSet::new_empty();
//! obj.set_value_by_name("Modality", "MR")?;
//! assert_eq!(obj.element(tags::MODALITY)?.to_str()?, "MR");
//! # Ok(())
//! # }
//! ```
//!
//! A [`FileDataSet`] wraps a data set
//! with the provenance and encoding details of the file it came from,
//! enabling deferred payload fetching through a [`FileSource`].
#![allow(clippy::derive_partial_eq_without_eq)]

use dcmset_core::Tag;
use snafu::{Backtrace, Snafu};

pub mod dataset;
mod dump;
pub mod file;
pub mod io;
pub mod pixeldata;
pub mod walk;

pub use crate::dataset::{DataSet, DataSetElement, StoredElement};
pub use crate::file::{FileDataSet, RecordSource};
pub use crate::io::{FetchError, FetchPayload, FileSource, SourceLoader, WriteRecord};
pub use crate::pixeldata::PixelDataSource;
pub use crate::walk::FlattenIter;
pub use dcmset_dictionary_std::StandardDataDictionary;

/// An error which may occur when looking up a data set element by tag.
#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum AccessError {
    /// No such data element
    #[snafu(display("no such data element {}", tag))]
    NoSuchDataElementTag {
        /// the requested tag
        tag: Tag,
        /// backtrace
        backtrace: Backtrace,
    },
    /// Could not fetch the element's payload from its source
    #[snafu(display("could not fetch payload of element {}", tag))]
    FetchPayload {
        /// the affected tag
        tag: Tag,
        /// the fetching error
        #[snafu(backtrace)]
        source: crate::io::FetchError,
    },
    /// Could not decode the element's payload
    #[snafu(display("could not decode value of element {}", tag))]
    DecodeValue {
        /// the affected tag
        tag: Tag,
        /// the decoding error
        #[snafu(backtrace)]
        source: dcmset_encoding::decode::DecodeValueError,
    },
}

impl AccessError {
    /// Convert this error into the equivalent by-name access error,
    /// attaching the attribute name which started the look-up.
    pub fn into_access_by_name(self, alias: impl Into<String>) -> AccessByNameError {
        match self {
            AccessError::NoSuchDataElementTag { tag, backtrace } => {
                AccessByNameError::NoSuchDataElementAlias {
                    tag,
                    alias: alias.into(),
                    backtrace,
                }
            }
            e => AccessByNameError::ElementAccess { source: e },
        }
    }
}

/// An error which may occur when looking up a data set element
/// by its standard attribute name.
#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum AccessByNameError {
    /// No such data element with the given name
    #[snafu(display("no such data element {} (with tag {})", alias, tag))]
    NoSuchDataElementAlias {
        /// the tag resolved from the name
        tag: Tag,
        /// the requested attribute name
        alias: String,
        /// backtrace
        backtrace: Backtrace,
    },
    /// The data dictionary does not know the given attribute name
    #[snafu(display("unknown attribute named `{}`", name))]
    NoSuchAttributeName {
        /// the requested attribute name
        name: String,
        /// backtrace
        backtrace: Backtrace,
    },
    /// The name designates a repeating attribute range,
    /// which cannot be addressed as a single element
    #[snafu(display("attribute `{}` designates a tag range, not a single element", name))]
    RepeaterName {
        /// the requested attribute name
        name: String,
        /// backtrace
        backtrace: Backtrace,
    },
    /// The element could not be accessed after name resolution
    #[snafu(display("could not access element by name"))]
    ElementAccess {
        /// the underlying access error
        #[snafu(backtrace)]
        source: AccessError,
    },
}

/// An error raised by the checked insertion operation
/// when the inserted element's tag does not match the given key.
#[derive(Debug, Snafu)]
#[snafu(display("element tag {} does not match insertion key {}", actual, key))]
pub struct TagMismatchError {
    /// the tag given as insertion key
    pub key: Tag,
    /// the tag carried by the element
    pub actual: Tag,
    backtrace: Backtrace,
}
