//! File record abstraction:
//! a data set annotated with where it came from
//! and how it was encoded,
//! so that it can be interpreted faithfully and rewritten later.
use crate::dataset::{DataSet, StoredElement};
use crate::io::{FetchError, FileSource, SourceLoader, WriteRecord};
use byteordered::Endianness;
use chrono::{DateTime, Utc};
use dcmset_dictionary_std::{tags, StandardDataDictionary};
use std::ops::{Deref, DerefMut};
use std::path::PathBuf;

/// The identity of the source from which a record was obtained.
#[derive(Debug, Clone, PartialEq)]
pub enum RecordSource {
    /// A file on the local file system.
    File(PathBuf),
    /// A non-seekable or anonymous byte stream.
    Stream,
}

/// A main data set paired with its file meta group,
/// preamble and source encoding details.
///
/// The record dereferences to its main [`DataSet`],
/// so all element operations apply directly.
/// For records read from a file,
/// the file's modification time is kept
/// and a [`FileSource`] is attached to the data set,
/// enabling deferred payloads to be fetched on demand.
#[derive(Debug, Clone, PartialEq)]
pub struct FileDataSet<D = StandardDataDictionary> {
    dataset: DataSet<D>,
    meta: Option<DataSet<D>>,
    preamble: Option<Vec<u8>>,
    explicit_vr: bool,
    byte_order: Endianness,
    source: RecordSource,
    timestamp: Option<DateTime<Utc>>,
}

impl<D> FileDataSet<D> {
    /// Create a record over the given data set with no file attached.
    ///
    /// The source is reported as a stream, no timestamp is recorded,
    /// and the encoding details default to
    /// explicit value representations in little endian order.
    pub fn new(dataset: DataSet<D>) -> Self {
        FileDataSet {
            dataset,
            meta: None,
            preamble: None,
            explicit_vr: true,
            byte_order: Endianness::Little,
            source: RecordSource::Stream,
            timestamp: None,
        }
    }

    /// Create a record over a data set read from the given file,
    /// recording the file's modification time
    /// and attaching a loader
    /// through which deferred payloads can be fetched.
    pub fn with_file_source(
        path: impl Into<PathBuf>,
        mut dataset: DataSet<D>,
    ) -> Result<Self, FetchError> {
        let path = path.into();
        let source = FileSource::new(&path)?;
        let timestamp = source.recorded();
        dataset.set_source_loader(SourceLoader::new(source));
        Ok(FileDataSet {
            dataset,
            meta: None,
            preamble: None,
            explicit_vr: true,
            byte_order: Endianness::Little,
            source: RecordSource::File(path),
            timestamp: Some(timestamp),
        })
    }

    /// Attach the file meta group data set to this record.
    pub fn with_meta(mut self, meta: DataSet<D>) -> Self {
        self.meta = Some(meta);
        self
    }

    /// Attach the preamble found before the magic code of the file.
    pub fn with_preamble(mut self, preamble: Vec<u8>) -> Self {
        self.preamble = Some(preamble);
        self
    }

    /// Declare whether the source was encoded
    /// with explicit value representations.
    pub fn with_explicit_vr(mut self, explicit_vr: bool) -> Self {
        self.explicit_vr = explicit_vr;
        self
    }

    /// Declare the byte order the source was encoded in.
    pub fn with_byte_order(mut self, byte_order: Endianness) -> Self {
        self.byte_order = byte_order;
        self
    }

    /// The file meta group data set, if present.
    pub fn meta(&self) -> Option<&DataSet<D>> {
        self.meta.as_ref()
    }

    /// The file meta group data set, if present, with mutable access.
    pub fn meta_mut(&mut self) -> Option<&mut DataSet<D>> {
        self.meta.as_mut()
    }

    /// The preamble found before the magic code, if any.
    pub fn preamble(&self) -> Option<&[u8]> {
        self.preamble.as_deref()
    }

    /// Whether the source was encoded
    /// with explicit value representations.
    pub fn explicit_vr(&self) -> bool {
        self.explicit_vr
    }

    /// Record whether the source was encoded
    /// with explicit value representations.
    pub fn set_explicit_vr(&mut self, explicit_vr: bool) {
        self.explicit_vr = explicit_vr;
    }

    /// The byte order the source was encoded in.
    pub fn byte_order(&self) -> Endianness {
        self.byte_order
    }

    /// Record the byte order the source was encoded in.
    pub fn set_byte_order(&mut self, byte_order: Endianness) {
        self.byte_order = byte_order;
    }

    /// The identity of the source this record was obtained from.
    pub fn source(&self) -> &RecordSource {
        &self.source
    }

    /// The source file's modification time
    /// as recorded when the record was read.
    /// Stream-borne records have no timestamp.
    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        self.timestamp
    }

    /// Discard the record details
    /// and return the main data set alone.
    pub fn into_inner(self) -> DataSet<D> {
        self.dataset
    }

    /// The transfer syntax UID declared in the file meta group,
    /// stripped of trailing padding.
    ///
    /// Returns `None` if there is no meta group
    /// or the declaration is missing or not yet decoded.
    pub fn transfer_syntax(&self) -> Option<String> {
        let meta = self.meta.as_ref()?;
        match meta.get(tags::TRANSFER_SYNTAX_UID) {
            Some(StoredElement::Decoded(e)) => e
                .value()
                .string()
                .map(|uid| uid.trim_end_matches('\0').trim_end().to_string()),
            _ => None,
        }
    }

    /// Hand this record over to a writer.
    pub fn write_with<W>(
        &self,
        writer: &mut W,
        preserve_original_encoding: bool,
    ) -> Result<(), W::Error>
    where
        W: WriteRecord<D>,
    {
        writer.write(self, preserve_original_encoding)
    }
}

impl<D> Deref for FileDataSet<D> {
    type Target = DataSet<D>;

    fn deref(&self) -> &Self::Target {
        &self.dataset
    }
}

impl<D> DerefMut for FileDataSet<D> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.dataset
    }
}

impl<D> From<DataSet<D>> for FileDataSet<D> {
    fn from(dataset: DataSet<D>) -> Self {
        FileDataSet::new(dataset)
    }
}
