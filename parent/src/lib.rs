//! # DICOM-set library
//!
//! This crate serves as a parent for the library crates
//! in the DICOM-set project,
//! aggregating the key modules
//! that you are likely to require
//! when working with DICOM data sets.
//! These modules are also available as crates
//! which can be fetched independently,
//! in complement or as an alternative to using the `dcmset` crate.
//! For instance, the module `object`
//! lives in the crate named `dcmset-object`.
//!
//! ## Overview
//!
//! - For an idiomatic API to building, querying
//!   and manipulating DICOM data sets,
//!   see the [`object`] module.
//!   It also provides the file record abstraction
//!   ([`FileDataSet`](object::FileDataSet))
//!   and the seams through which readers and writers
//!   cooperate with data sets.
//! - The [`core`] module contains most of the data types
//!   that the other crates rely on,
//!   including types for DICOM tags ([`Tag`](dcmset_core::Tag)),
//!   value representations ([`VR`](dcmset_core::VR)),
//!   and in-memory representations
//!   of [DICOM values](dcmset_core::DicomValue),
//!   contained in [data elements](dcmset_core::DataElement).
//!   For convenience, the [`dcm_value!`] macro
//!   has been re-exported here as well.
//! - The standard attribute dictionary
//!   is in [`dictionary_std`],
//!   which not only provides a run-time queryable registry
//!   of standard attributes,
//!   it also provides constants for known tags
//!   in the [`tags`][dictionary_std::tags] module.
//! - The [`encoding`] module holds
//!   the raw data element representation
//!   and the decoding of binary payloads into primitive values,
//!   for use when feeding data sets from a byte-level reader.
pub use dcmset_core as core;
pub use dcmset_dictionary_std as dictionary_std;
pub use dcmset_encoding as encoding;
pub use dcmset_object as object;

// re-export the dcm_value macro
pub use dcmset_core::dcm_value;
