//! This crate implements a standard DICOM dictionary and constants.
//!
//! - [`data_element`] contains the run-time attribute registry,
//!   which is used by default in most other abstractions available.
//!   When not using private tags, this dictionary should suffice.
//!   It is provided as a singleton behind the unit type
//!   [`StandardDataDictionary`], initialized upon first use.
//! - [`tags`] maps attribute aliases to DICOM tags at compile time,
//!   without incurring a look-up cost.
//! - [`uids`] declares normative DICOM unique identifiers.
//!
//! The records in the registry are collected from [DICOM PS3.6],
//! covering the attributes of the patient, study, series,
//! image and file meta modules,
//! the common code and reference sequences,
//! the repeating overlay groups,
//! and the pixel data attributes.
//!
//! [DICOM PS3.6]: https://dicom.nema.org/medical/dicom/current/output/chtml/part06/ps3.6.html
#![deny(trivial_numeric_casts, unsafe_code, unstable_features)]
#![warn(missing_docs, unused_qualifications, unused_import_braces)]

pub mod data_element;
pub mod tags;
pub mod uids;

pub use data_element::{StandardDataDictionary, StandardDataDictionaryRegistry};
