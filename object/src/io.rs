//! The boundary between data sets and their storage:
//! fetching deferred payloads from a source
//! and handing complete records over to a writer.
//!
//! The byte-level file grammar is out of this crate's scope.
//! Readers produce raw elements
//! (see [`RawDataElement`](dcmset_encoding::decode::RawDataElement)),
//! and anything able to serve payload bytes by source marker
//! can back a data set by implementing [`FetchPayload`].
use crate::file::FileDataSet;
use chrono::{DateTime, Utc};
use dcmset_core::header::{Header, Tag};
use dcmset_encoding::decode::RawDataElement;
use snafu::{ensure, Backtrace, OptionExt, ResultExt, Snafu};
use std::fmt;
use std::fs::File;
use std::io::{Read, Seek, SeekFrom};
use std::path::{Path, PathBuf};
use std::rc::Rc;

/// An error which may occur
/// when fetching a deferred payload from its source.
#[derive(Debug, Snafu)]
#[non_exhaustive]
#[snafu(visibility(pub(crate)))]
pub enum FetchError {
    /// No source is attached to the data set
    #[snafu(display("no source attached for deferred payload"))]
    NoSource {
        /// backtrace
        backtrace: Backtrace,
    },
    /// The element carries no marker locating its payload
    #[snafu(display("element {} has no source marker", tag))]
    NoMarker {
        /// the affected tag
        tag: Tag,
        /// backtrace
        backtrace: Backtrace,
    },
    /// Could not stat the source file
    #[snafu(display("could not stat source file {}", path.display()))]
    Stat {
        /// the source file path
        path: PathBuf,
        /// the I/O error
        source: std::io::Error,
        /// backtrace
        backtrace: Backtrace,
    },
    /// Could not open the source file
    #[snafu(display("could not open source file {}", path.display()))]
    Open {
        /// the source file path
        path: PathBuf,
        /// the I/O error
        source: std::io::Error,
        /// backtrace
        backtrace: Backtrace,
    },
    /// Could not seek to the payload's position
    #[snafu(display("could not seek source file {}", path.display()))]
    Seek {
        /// the source file path
        path: PathBuf,
        /// the I/O error
        source: std::io::Error,
        /// backtrace
        backtrace: Backtrace,
    },
    /// Could not read the payload bytes
    #[snafu(display("could not read source file {}", path.display()))]
    Read {
        /// the source file path
        path: PathBuf,
        /// the I/O error
        source: std::io::Error,
        /// backtrace
        backtrace: Backtrace,
    },
    /// The source file changed since the record was read from it
    #[snafu(display(
        "source file {} was modified at {}, expected {}",
        path.display(),
        actual,
        recorded
    ))]
    StaleSource {
        /// the source file path
        path: PathBuf,
        /// the modification time recorded when the record was read
        recorded: DateTime<Utc>,
        /// the modification time found now
        actual: DateTime<Utc>,
        /// backtrace
        backtrace: Backtrace,
    },
}

/// An interface for fetching a deferred element's payload bytes
/// from wherever the data set was originally read from.
pub trait FetchPayload {
    /// Fetch the payload bytes designated by the given element's
    /// source marker.
    fn fetch(&self, element: &RawDataElement) -> Result<Vec<u8>, FetchError>;
}

/// A payload source backed by a file on the local file system.
///
/// The file's modification time is recorded when the source is created
/// and checked again on every fetch,
/// so that payloads are never taken from a file
/// which changed after the record was read.
#[derive(Debug, Clone, PartialEq)]
pub struct FileSource {
    path: PathBuf,
    recorded: DateTime<Utc>,
}

impl FileSource {
    /// Create a file source over the given path,
    /// recording the file's current modification time.
    pub fn new(path: impl Into<PathBuf>) -> Result<Self, FetchError> {
        let path = path.into();
        let recorded = modification_time(&path)?;
        Ok(FileSource { path, recorded })
    }

    /// Recreate a file source from a modification time
    /// captured earlier,
    /// such as the timestamp of a file record.
    pub fn with_recorded(path: impl Into<PathBuf>, recorded: DateTime<Utc>) -> Self {
        FileSource {
            path: path.into(),
            recorded,
        }
    }

    /// The path to the source file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The source file's modification time as recorded at creation.
    pub fn recorded(&self) -> DateTime<Utc> {
        self.recorded
    }
}

fn modification_time(path: &Path) -> Result<DateTime<Utc>, FetchError> {
    let metadata = std::fs::metadata(path).context(StatSnafu { path })?;
    let modified = metadata.modified().context(StatSnafu { path })?;
    Ok(DateTime::from(modified))
}

impl FetchPayload for FileSource {
    fn fetch(&self, element: &RawDataElement) -> Result<Vec<u8>, FetchError> {
        let marker = element
            .marker()
            .context(NoMarkerSnafu { tag: element.tag() })?;

        // the file must not have changed since the record was taken
        let actual = modification_time(&self.path)?;
        ensure!(
            actual == self.recorded,
            StaleSourceSnafu {
                path: &self.path,
                recorded: self.recorded,
                actual,
            }
        );

        let mut file = File::open(&self.path).context(OpenSnafu { path: &self.path })?;
        file.seek(SeekFrom::Start(marker.position))
            .context(SeekSnafu { path: &self.path })?;
        let mut data = vec![0; marker.length as usize];
        file.read_exact(&mut data)
            .context(ReadSnafu { path: &self.path })?;
        Ok(data)
    }
}

/// A cheaply cloneable shared handle to a payload source,
/// as attached to data sets
/// via [`set_source_loader`](crate::DataSet::set_source_loader).
#[derive(Clone)]
pub struct SourceLoader {
    inner: Rc<dyn FetchPayload>,
}

impl SourceLoader {
    /// Wrap a payload source into a shared handle.
    pub fn new(source: impl FetchPayload + 'static) -> Self {
        SourceLoader {
            inner: Rc::new(source),
        }
    }

    /// Fetch the payload bytes for the given deferred element.
    pub fn fetch(&self, element: &RawDataElement) -> Result<Vec<u8>, FetchError> {
        self.inner.fetch(element)
    }
}

impl fmt::Debug for SourceLoader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SourceLoader").finish_non_exhaustive()
    }
}

/// An interface for writers capable of serializing a whole file record.
///
/// Implementations bring their own encoding logic and error type;
/// the record only describes what must be written,
/// including the original encoding details
/// for writers which choose to honor them.
pub trait WriteRecord<D> {
    /// The error type reported by this writer.
    type Error;

    /// Write the given record.
    ///
    /// With `preserve_original_encoding` enabled,
    /// the writer should keep the record's original
    /// explicitness and byte order
    /// rather than choosing its own.
    fn write(
        &mut self,
        record: &FileDataSet<D>,
        preserve_original_encoding: bool,
    ) -> Result<(), Self::Error>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use byteordered::Endianness;
    use chrono::Duration;
    use dcmset_core::header::VR;
    use dcmset_dictionary_std::tags;
    use dcmset_encoding::decode::SourceMarker;
    use std::io::Write;

    fn deferred_pixel_data(position: u64, length: u32) -> RawDataElement {
        RawDataElement::new_deferred(
            tags::PIXEL_DATA,
            VR::OB,
            SourceMarker { position, length },
            Endianness::Little,
        )
    }

    #[test]
    fn file_source_fetches_marked_range() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"DICMxxxxPAYLOADyyyy").unwrap();
        file.flush().unwrap();

        let source = FileSource::new(file.path()).unwrap();
        let data = source.fetch(&deferred_pixel_data(8, 7)).unwrap();
        assert_eq!(data, b"PAYLOAD");
    }

    #[test]
    fn file_source_requires_a_marker() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"0123456789").unwrap();
        file.flush().unwrap();

        let source = FileSource::new(file.path()).unwrap();
        let in_memory = RawDataElement::new(
            tags::PIXEL_DATA,
            VR::OB,
            vec![0, 1],
            Endianness::Little,
        );
        let e = source.fetch(&in_memory).unwrap_err();
        assert!(matches!(e, FetchError::NoMarker { .. }));
    }

    #[test]
    fn stale_sources_are_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"0123456789").unwrap();
        file.flush().unwrap();

        let recorded = FileSource::new(file.path()).unwrap().recorded();
        let source = FileSource::with_recorded(file.path(), recorded - Duration::seconds(30));
        let e = source.fetch(&deferred_pixel_data(0, 4)).unwrap_err();
        assert!(matches!(e, FetchError::StaleSource { .. }));
    }

    #[test]
    fn loader_shares_the_source() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"abcdef").unwrap();
        file.flush().unwrap();

        let loader = SourceLoader::new(FileSource::new(file.path()).unwrap());
        let other = loader.clone();
        assert_eq!(other.fetch(&deferred_pixel_data(2, 3)).unwrap(), b"cde");
    }
}
