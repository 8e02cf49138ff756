//! The boundary to pixel data consumers.
//!
//! Decoding and interpreting image samples is outside this crate;
//! [`PixelDataSource`] exposes the attributes which such consumers need
//! and the payload bytes without interpretation.
use crate::{AccessError, FileDataSet};
use dcmset_core::header::Tag;
use dcmset_core::value::ConvertValueError;
use dcmset_dictionary_std::{tags, uids};
use snafu::{Backtrace, ResultExt, Snafu};
use std::borrow::Cow;

/// An error which may occur when querying pixel data attributes.
#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum PixelDataError {
    /// Could not access a pixel data attribute
    #[snafu(display("could not access pixel data attribute"))]
    AccessAttribute {
        /// the underlying element access error
        #[snafu(backtrace)]
        source: AccessError,
    },
    /// The attribute's value does not convert to the expected type
    #[snafu(display("could not read pixel data attribute {}", name))]
    ReadAttribute {
        /// the affected attribute name
        name: &'static str,
        /// the conversion error
        source: ConvertValueError,
        /// backtrace
        backtrace: Backtrace,
    },
}

/// An interface for types which can serve pixel data
/// and the attributes describing its shape,
/// without interpreting the samples themselves.
///
/// Attributes which describe the image matrix are mandatory,
/// whereas plane layout and frame count
/// assume their default values when absent.
pub trait PixelDataSource {
    /// Number of rows in the image matrix.
    fn rows(&mut self) -> Result<u16, PixelDataError>;

    /// Number of columns in the image matrix.
    fn columns(&mut self) -> Result<u16, PixelDataError>;

    /// Number of bits allocated per sample.
    fn bits_allocated(&mut self) -> Result<u16, PixelDataError>;

    /// Sample representation:
    /// 0 for unsigned, 1 for two's complement integers.
    fn pixel_representation(&mut self) -> Result<u16, PixelDataError>;

    /// Number of samples (color planes) per pixel.
    fn samples_per_pixel(&mut self) -> Result<u16, PixelDataError>;

    /// Plane layout: 0 for interleaved samples, 1 for separate planes.
    /// Assumes 0 when the attribute is absent.
    fn planar_configuration(&mut self) -> Result<u16, PixelDataError>;

    /// Number of frames in the pixel data.
    /// Assumes 1 when the attribute is absent.
    fn number_of_frames(&mut self) -> Result<u32, PixelDataError>;

    /// Whether the pixel data is stored in its native,
    /// uncompressed form.
    fn is_uncompressed(&self) -> bool;

    /// The pixel data payload bytes, without interpretation.
    ///
    /// The bytes always reflect the element's current value,
    /// fetching and decoding it first if necessary.
    fn raw_pixel_data(&mut self) -> Result<Cow<[u8]>, PixelDataError>;
}

impl<D> FileDataSet<D> {
    fn required_u16(&mut self, tag: Tag, name: &'static str) -> Result<u16, PixelDataError> {
        let elem = self.element(tag).context(AccessAttributeSnafu)?;
        elem.to_int().context(ReadAttributeSnafu { name })
    }

    fn assumed_u16(
        &mut self,
        tag: Tag,
        name: &'static str,
        default: u16,
    ) -> Result<u16, PixelDataError> {
        match self.element_opt(tag).context(AccessAttributeSnafu)? {
            Some(elem) => elem.to_int().context(ReadAttributeSnafu { name }),
            None => Ok(default),
        }
    }
}

impl<D> PixelDataSource for FileDataSet<D> {
    fn rows(&mut self) -> Result<u16, PixelDataError> {
        self.required_u16(tags::ROWS, "Rows")
    }

    fn columns(&mut self) -> Result<u16, PixelDataError> {
        self.required_u16(tags::COLUMNS, "Columns")
    }

    fn bits_allocated(&mut self) -> Result<u16, PixelDataError> {
        self.required_u16(tags::BITS_ALLOCATED, "BitsAllocated")
    }

    fn pixel_representation(&mut self) -> Result<u16, PixelDataError> {
        self.required_u16(tags::PIXEL_REPRESENTATION, "PixelRepresentation")
    }

    fn samples_per_pixel(&mut self) -> Result<u16, PixelDataError> {
        self.required_u16(tags::SAMPLES_PER_PIXEL, "SamplesPerPixel")
    }

    fn planar_configuration(&mut self) -> Result<u16, PixelDataError> {
        self.assumed_u16(tags::PLANAR_CONFIGURATION, "PlanarConfiguration", 0)
    }

    fn number_of_frames(&mut self) -> Result<u32, PixelDataError> {
        match self
            .element_opt(tags::NUMBER_OF_FRAMES)
            .context(AccessAttributeSnafu)?
        {
            Some(elem) => elem.to_int().context(ReadAttributeSnafu {
                name: "NumberOfFrames",
            }),
            None => Ok(1),
        }
    }

    // native form is assumed for records
    // without a transfer syntax declaration
    fn is_uncompressed(&self) -> bool {
        self.transfer_syntax()
            .map(|uid| uids::is_uncompressed(&uid))
            .unwrap_or(true)
    }

    fn raw_pixel_data(&mut self) -> Result<Cow<[u8]>, PixelDataError> {
        // the integer form is preferred,
        // falling back to the floating point attributes
        let tag = [
            tags::PIXEL_DATA,
            tags::FLOAT_PIXEL_DATA,
            tags::DOUBLE_FLOAT_PIXEL_DATA,
        ]
        .iter()
        .copied()
        .find(|tag| self.contains(*tag))
        .unwrap_or(tags::PIXEL_DATA);
        let elem = self.element(tag).context(AccessAttributeSnafu)?;
        elem.to_bytes().context(ReadAttributeSnafu { name: "PixelData" })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DataSet;
    use dcmset_core::header::VR;
    use dcmset_core::{dcm_value, DataElement};

    fn image_record() -> FileDataSet {
        let mut obj = DataSet::new_empty();
        obj.put(DataElement::new(tags::ROWS, VR::US, dcm_value!(U16, [2])));
        obj.put(DataElement::new(tags::COLUMNS, VR::US, dcm_value!(U16, [3])));
        obj.put(DataElement::new(tags::BITS_ALLOCATED, VR::US, dcm_value!(U16, [8])));
        obj.put(DataElement::new(
            tags::PIXEL_REPRESENTATION,
            VR::US,
            dcm_value!(U16, [0]),
        ));
        obj.put(DataElement::new(
            tags::SAMPLES_PER_PIXEL,
            VR::US,
            dcm_value!(U16, [1]),
        ));
        obj.put(DataElement::new(
            tags::PIXEL_DATA,
            VR::OB,
            dcm_value!(U8, [0, 1, 2, 3, 4, 5]),
        ));
        FileDataSet::new(obj)
    }

    #[test]
    fn image_shape_attributes() {
        let mut record = image_record();
        assert_eq!(record.rows().unwrap(), 2);
        assert_eq!(record.columns().unwrap(), 3);
        assert_eq!(record.bits_allocated().unwrap(), 8);
        assert_eq!(record.pixel_representation().unwrap(), 0);
        assert_eq!(record.samples_per_pixel().unwrap(), 1);
        // absent attributes assume their default values
        assert_eq!(record.planar_configuration().unwrap(), 0);
        assert_eq!(record.number_of_frames().unwrap(), 1);
    }

    #[test]
    fn missing_required_attributes_are_errors() {
        let mut record = FileDataSet::new(DataSet::new_empty());
        let e = record.rows().unwrap_err();
        assert!(matches!(
            e,
            PixelDataError::AccessAttribute {
                source: AccessError::NoSuchDataElementTag { .. },
                ..
            }
        ));
    }

    #[test]
    fn number_of_frames_reads_integer_strings() {
        let mut record = image_record();
        record.put(DataElement::new(tags::NUMBER_OF_FRAMES, VR::IS, "3"));
        assert_eq!(record.number_of_frames().unwrap(), 3);
    }

    #[test]
    fn raw_pixel_data_reflects_the_current_value() {
        let mut record = image_record();
        assert_eq!(&*record.raw_pixel_data().unwrap(), &[0u8, 1, 2, 3, 4, 5][..]);

        record.put(DataElement::new(
            tags::PIXEL_DATA,
            VR::OB,
            dcm_value!(U8, [9, 9]),
        ));
        assert_eq!(&*record.raw_pixel_data().unwrap(), &[9u8, 9][..]);
    }

    #[test]
    fn records_without_meta_count_as_uncompressed() {
        let record = image_record();
        assert!(record.is_uncompressed());
    }

    #[test]
    fn compression_is_determined_by_the_transfer_syntax() {
        let mut meta = DataSet::new_empty();
        meta.put(DataElement::new(
            tags::TRANSFER_SYNTAX_UID,
            VR::UI,
            uids::JPEG_BASELINE8_BIT,
        ));
        let record = image_record().with_meta(meta);
        assert!(!record.is_uncompressed());

        let mut meta = DataSet::new_empty();
        meta.put(DataElement::new(
            tags::TRANSFER_SYNTAX_UID,
            VR::UI,
            uids::EXPLICIT_VR_LITTLE_ENDIAN,
        ));
        let record = image_record().with_meta(meta);
        assert!(record.is_uncompressed());
    }
}
