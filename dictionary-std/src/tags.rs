//! Data element tag constants and the standard attribute registry.
//!
//! This module provides a constant for each attribute keyword,
//! so that well known tags can be named
//! without incurring a dictionary look-up.
//! The [registry](ENTRIES) at the end of the module
//! backs the run-time [standard dictionary](crate::StandardDataDictionary).

use dcmset_core::dictionary::DataDictionaryEntryRef;
use dcmset_core::dictionary::TagRange::*;
use dcmset_core::dictionary::VirtualVr::*;
use dcmset_core::header::{Tag, VR};

/// CommandGroupLength, (0000,0000), UL
pub const COMMAND_GROUP_LENGTH: Tag = Tag(0x0000, 0x0000);
/// FileMetaInformationGroupLength, (0002,0000), UL
pub const FILE_META_INFORMATION_GROUP_LENGTH: Tag = Tag(0x0002, 0x0000);
/// FileMetaInformationVersion, (0002,0001), OB
pub const FILE_META_INFORMATION_VERSION: Tag = Tag(0x0002, 0x0001);
/// MediaStorageSOPClassUID, (0002,0002), UI
pub const MEDIA_STORAGE_SOP_CLASS_UID: Tag = Tag(0x0002, 0x0002);
/// MediaStorageSOPInstanceUID, (0002,0003), UI
pub const MEDIA_STORAGE_SOP_INSTANCE_UID: Tag = Tag(0x0002, 0x0003);
/// TransferSyntaxUID, (0002,0010), UI
pub const TRANSFER_SYNTAX_UID: Tag = Tag(0x0002, 0x0010);
/// ImplementationClassUID, (0002,0012), UI
pub const IMPLEMENTATION_CLASS_UID: Tag = Tag(0x0002, 0x0012);
/// ImplementationVersionName, (0002,0013), SH
pub const IMPLEMENTATION_VERSION_NAME: Tag = Tag(0x0002, 0x0013);
/// SourceApplicationEntityTitle, (0002,0016), AE
pub const SOURCE_APPLICATION_ENTITY_TITLE: Tag = Tag(0x0002, 0x0016);
/// SpecificCharacterSet, (0008,0005), CS
pub const SPECIFIC_CHARACTER_SET: Tag = Tag(0x0008, 0x0005);
/// ImageType, (0008,0008), CS
pub const IMAGE_TYPE: Tag = Tag(0x0008, 0x0008);
/// SOPClassUID, (0008,0016), UI
pub const SOP_CLASS_UID: Tag = Tag(0x0008, 0x0016);
/// SOPInstanceUID, (0008,0018), UI
pub const SOP_INSTANCE_UID: Tag = Tag(0x0008, 0x0018);
/// StudyDate, (0008,0020), DA
pub const STUDY_DATE: Tag = Tag(0x0008, 0x0020);
/// SeriesDate, (0008,0021), DA
pub const SERIES_DATE: Tag = Tag(0x0008, 0x0021);
/// AcquisitionDate, (0008,0022), DA
pub const ACQUISITION_DATE: Tag = Tag(0x0008, 0x0022);
/// ContentDate, (0008,0023), DA
pub const CONTENT_DATE: Tag = Tag(0x0008, 0x0023);
/// StudyTime, (0008,0030), TM
pub const STUDY_TIME: Tag = Tag(0x0008, 0x0030);
/// SeriesTime, (0008,0031), TM
pub const SERIES_TIME: Tag = Tag(0x0008, 0x0031);
/// AcquisitionTime, (0008,0032), TM
pub const ACQUISITION_TIME: Tag = Tag(0x0008, 0x0032);
/// ContentTime, (0008,0033), TM
pub const CONTENT_TIME: Tag = Tag(0x0008, 0x0033);
/// AccessionNumber, (0008,0050), SH
pub const ACCESSION_NUMBER: Tag = Tag(0x0008, 0x0050);
/// Modality, (0008,0060), CS
pub const MODALITY: Tag = Tag(0x0008, 0x0060);
/// ConversionType, (0008,0064), CS
pub const CONVERSION_TYPE: Tag = Tag(0x0008, 0x0064);
/// Manufacturer, (0008,0070), LO
pub const MANUFACTURER: Tag = Tag(0x0008, 0x0070);
/// InstitutionName, (0008,0080), LO
pub const INSTITUTION_NAME: Tag = Tag(0x0008, 0x0080);
/// ReferringPhysicianName, (0008,0090), PN
pub const REFERRING_PHYSICIAN_NAME: Tag = Tag(0x0008, 0x0090);
/// CodeValue, (0008,0100), SH
pub const CODE_VALUE: Tag = Tag(0x0008, 0x0100);
/// CodingSchemeDesignator, (0008,0102), SH
pub const CODING_SCHEME_DESIGNATOR: Tag = Tag(0x0008, 0x0102);
/// CodeMeaning, (0008,0104), LO
pub const CODE_MEANING: Tag = Tag(0x0008, 0x0104);
/// StudyDescription, (0008,1030), LO
pub const STUDY_DESCRIPTION: Tag = Tag(0x0008, 0x1030);
/// SeriesDescription, (0008,103E), LO
pub const SERIES_DESCRIPTION: Tag = Tag(0x0008, 0x103E);
/// PerformingPhysicianName, (0008,1050), PN
pub const PERFORMING_PHYSICIAN_NAME: Tag = Tag(0x0008, 0x1050);
/// OperatorsName, (0008,1070), PN
pub const OPERATORS_NAME: Tag = Tag(0x0008, 0x1070);
/// ManufacturerModelName, (0008,1090), LO
pub const MANUFACTURER_MODEL_NAME: Tag = Tag(0x0008, 0x1090);
/// ReferencedStudySequence, (0008,1110), SQ
pub const REFERENCED_STUDY_SEQUENCE: Tag = Tag(0x0008, 0x1110);
/// ReferencedSeriesSequence, (0008,1115), SQ
pub const REFERENCED_SERIES_SEQUENCE: Tag = Tag(0x0008, 0x1115);
/// ReferencedImageSequence, (0008,1140), SQ
pub const REFERENCED_IMAGE_SEQUENCE: Tag = Tag(0x0008, 0x1140);
/// ReferencedSOPClassUID, (0008,1150), UI
pub const REFERENCED_SOP_CLASS_UID: Tag = Tag(0x0008, 0x1150);
/// ReferencedSOPInstanceUID, (0008,1155), UI
pub const REFERENCED_SOP_INSTANCE_UID: Tag = Tag(0x0008, 0x1155);
/// AnatomicRegionSequence, (0008,2218), SQ
pub const ANATOMIC_REGION_SEQUENCE: Tag = Tag(0x0008, 0x2218);
/// PatientName, (0010,0010), PN
pub const PATIENT_NAME: Tag = Tag(0x0010, 0x0010);
/// PatientID, (0010,0020), LO
pub const PATIENT_ID: Tag = Tag(0x0010, 0x0020);
/// IssuerOfPatientID, (0010,0021), LO
pub const ISSUER_OF_PATIENT_ID: Tag = Tag(0x0010, 0x0021);
/// PatientBirthDate, (0010,0030), DA
pub const PATIENT_BIRTH_DATE: Tag = Tag(0x0010, 0x0030);
/// PatientBirthTime, (0010,0032), TM
pub const PATIENT_BIRTH_TIME: Tag = Tag(0x0010, 0x0032);
/// PatientSex, (0010,0040), CS
pub const PATIENT_SEX: Tag = Tag(0x0010, 0x0040);
/// PatientAge, (0010,1010), AS
pub const PATIENT_AGE: Tag = Tag(0x0010, 0x1010);
/// PatientSize, (0010,1020), DS
pub const PATIENT_SIZE: Tag = Tag(0x0010, 0x1020);
/// PatientWeight, (0010,1030), DS
pub const PATIENT_WEIGHT: Tag = Tag(0x0010, 0x1030);
/// PatientComments, (0010,4000), LT
pub const PATIENT_COMMENTS: Tag = Tag(0x0010, 0x4000);
/// BodyPartExamined, (0018,0015), CS
pub const BODY_PART_EXAMINED: Tag = Tag(0x0018, 0x0015);
/// SliceThickness, (0018,0050), DS
pub const SLICE_THICKNESS: Tag = Tag(0x0018, 0x0050);
/// KVP, (0018,0060), DS
pub const KVP: Tag = Tag(0x0018, 0x0060);
/// SoftwareVersions, (0018,1020), LO
pub const SOFTWARE_VERSIONS: Tag = Tag(0x0018, 0x1020);
/// ProtocolName, (0018,1030), LO
pub const PROTOCOL_NAME: Tag = Tag(0x0018, 0x1030);
/// PatientPosition, (0018,5100), CS
pub const PATIENT_POSITION: Tag = Tag(0x0018, 0x5100);
/// StudyInstanceUID, (0020,000D), UI
pub const STUDY_INSTANCE_UID: Tag = Tag(0x0020, 0x000D);
/// SeriesInstanceUID, (0020,000E), UI
pub const SERIES_INSTANCE_UID: Tag = Tag(0x0020, 0x000E);
/// StudyID, (0020,0010), SH
pub const STUDY_ID: Tag = Tag(0x0020, 0x0010);
/// SeriesNumber, (0020,0011), IS
pub const SERIES_NUMBER: Tag = Tag(0x0020, 0x0011);
/// AcquisitionNumber, (0020,0012), IS
pub const ACQUISITION_NUMBER: Tag = Tag(0x0020, 0x0012);
/// InstanceNumber, (0020,0013), IS
pub const INSTANCE_NUMBER: Tag = Tag(0x0020, 0x0013);
/// PatientOrientation, (0020,0020), CS
pub const PATIENT_ORIENTATION: Tag = Tag(0x0020, 0x0020);
/// ImagePositionPatient, (0020,0032), DS
pub const IMAGE_POSITION_PATIENT: Tag = Tag(0x0020, 0x0032);
/// ImageOrientationPatient, (0020,0037), DS
pub const IMAGE_ORIENTATION_PATIENT: Tag = Tag(0x0020, 0x0037);
/// FrameOfReferenceUID, (0020,0052), UI
pub const FRAME_OF_REFERENCE_UID: Tag = Tag(0x0020, 0x0052);
/// SliceLocation, (0020,1041), DS
pub const SLICE_LOCATION: Tag = Tag(0x0020, 0x1041);
/// ImageComments, (0020,4000), LT
pub const IMAGE_COMMENTS: Tag = Tag(0x0020, 0x4000);
/// SamplesPerPixel, (0028,0002), US
pub const SAMPLES_PER_PIXEL: Tag = Tag(0x0028, 0x0002);
/// PhotometricInterpretation, (0028,0004), CS
pub const PHOTOMETRIC_INTERPRETATION: Tag = Tag(0x0028, 0x0004);
/// PlanarConfiguration, (0028,0006), US
pub const PLANAR_CONFIGURATION: Tag = Tag(0x0028, 0x0006);
/// NumberOfFrames, (0028,0008), IS
pub const NUMBER_OF_FRAMES: Tag = Tag(0x0028, 0x0008);
/// Rows, (0028,0010), US
pub const ROWS: Tag = Tag(0x0028, 0x0010);
/// Columns, (0028,0011), US
pub const COLUMNS: Tag = Tag(0x0028, 0x0011);
/// PixelSpacing, (0028,0030), DS
pub const PIXEL_SPACING: Tag = Tag(0x0028, 0x0030);
/// BitsAllocated, (0028,0100), US
pub const BITS_ALLOCATED: Tag = Tag(0x0028, 0x0100);
/// BitsStored, (0028,0101), US
pub const BITS_STORED: Tag = Tag(0x0028, 0x0101);
/// HighBit, (0028,0102), US
pub const HIGH_BIT: Tag = Tag(0x0028, 0x0102);
/// PixelRepresentation, (0028,0103), US
pub const PIXEL_REPRESENTATION: Tag = Tag(0x0028, 0x0103);
/// SmallestImagePixelValue, (0028,0106), US or SS
pub const SMALLEST_IMAGE_PIXEL_VALUE: Tag = Tag(0x0028, 0x0106);
/// LargestImagePixelValue, (0028,0107), US or SS
pub const LARGEST_IMAGE_PIXEL_VALUE: Tag = Tag(0x0028, 0x0107);
/// WindowCenter, (0028,1050), DS
pub const WINDOW_CENTER: Tag = Tag(0x0028, 0x1050);
/// WindowWidth, (0028,1051), DS
pub const WINDOW_WIDTH: Tag = Tag(0x0028, 0x1051);
/// RescaleIntercept, (0028,1052), DS
pub const RESCALE_INTERCEPT: Tag = Tag(0x0028, 0x1052);
/// RescaleSlope, (0028,1053), DS
pub const RESCALE_SLOPE: Tag = Tag(0x0028, 0x1053);
/// PerformedProcedureStepDescription, (0040,0254), LO
pub const PERFORMED_PROCEDURE_STEP_DESCRIPTION: Tag = Tag(0x0040, 0x0254);
/// RequestAttributesSequence, (0040,0275), SQ
pub const REQUEST_ATTRIBUTES_SEQUENCE: Tag = Tag(0x0040, 0x0275);
/// ConceptCodeSequence, (0040,A168), SQ
pub const CONCEPT_CODE_SEQUENCE: Tag = Tag(0x0040, 0xA168);
/// ContentSequence, (0040,A730), SQ
pub const CONTENT_SEQUENCE: Tag = Tag(0x0040, 0xA730);
/// SharedFunctionalGroupsSequence, (5200,9229), SQ
pub const SHARED_FUNCTIONAL_GROUPS_SEQUENCE: Tag = Tag(0x5200, 0x9229);
/// PerFrameFunctionalGroupsSequence, (5200,9230), SQ
pub const PER_FRAME_FUNCTIONAL_GROUPS_SEQUENCE: Tag = Tag(0x5200, 0x9230);
/// OverlayRows, (6000,0010), US
pub const OVERLAY_ROWS: Tag = Tag(0x6000, 0x0010);
/// OverlayColumns, (6000,0011), US
pub const OVERLAY_COLUMNS: Tag = Tag(0x6000, 0x0011);
/// OverlayType, (6000,0040), CS
pub const OVERLAY_TYPE: Tag = Tag(0x6000, 0x0040);
/// OverlayOrigin, (6000,0050), SS
pub const OVERLAY_ORIGIN: Tag = Tag(0x6000, 0x0050);
/// OverlayBitsAllocated, (6000,0100), US
pub const OVERLAY_BITS_ALLOCATED: Tag = Tag(0x6000, 0x0100);
/// OverlayBitPosition, (6000,0102), US
pub const OVERLAY_BIT_POSITION: Tag = Tag(0x6000, 0x0102);
/// OverlayData, (6000,3000), OB or OW
pub const OVERLAY_DATA: Tag = Tag(0x6000, 0x3000);
/// FloatPixelData, (7FE0,0008), OF
pub const FLOAT_PIXEL_DATA: Tag = Tag(0x7FE0, 0x0008);
/// DoubleFloatPixelData, (7FE0,0009), OD
pub const DOUBLE_FLOAT_PIXEL_DATA: Tag = Tag(0x7FE0, 0x0009);
/// PixelData, (7FE0,0010), OB or OW
pub const PIXEL_DATA: Tag = Tag(0x7FE0, 0x0010);

type E<'a> = DataDictionaryEntryRef<'a>;

/// The attribute registry backing the standard dictionary.
pub const ENTRIES: &[E<'static>] = &[
    E { tag: Single(COMMAND_GROUP_LENGTH), alias: "CommandGroupLength", vr: Exact(VR::UL) },
    E { tag: Single(FILE_META_INFORMATION_GROUP_LENGTH), alias: "FileMetaInformationGroupLength", vr: Exact(VR::UL) },
    E { tag: Single(FILE_META_INFORMATION_VERSION), alias: "FileMetaInformationVersion", vr: Exact(VR::OB) },
    E { tag: Single(MEDIA_STORAGE_SOP_CLASS_UID), alias: "MediaStorageSOPClassUID", vr: Exact(VR::UI) },
    E { tag: Single(MEDIA_STORAGE_SOP_INSTANCE_UID), alias: "MediaStorageSOPInstanceUID", vr: Exact(VR::UI) },
    E { tag: Single(TRANSFER_SYNTAX_UID), alias: "TransferSyntaxUID", vr: Exact(VR::UI) },
    E { tag: Single(IMPLEMENTATION_CLASS_UID), alias: "ImplementationClassUID", vr: Exact(VR::UI) },
    E { tag: Single(IMPLEMENTATION_VERSION_NAME), alias: "ImplementationVersionName", vr: Exact(VR::SH) },
    E { tag: Single(SOURCE_APPLICATION_ENTITY_TITLE), alias: "SourceApplicationEntityTitle", vr: Exact(VR::AE) },
    E { tag: Single(SPECIFIC_CHARACTER_SET), alias: "SpecificCharacterSet", vr: Exact(VR::CS) },
    E { tag: Single(IMAGE_TYPE), alias: "ImageType", vr: Exact(VR::CS) },
    E { tag: Single(SOP_CLASS_UID), alias: "SOPClassUID", vr: Exact(VR::UI) },
    E { tag: Single(SOP_INSTANCE_UID), alias: "SOPInstanceUID", vr: Exact(VR::UI) },
    E { tag: Single(STUDY_DATE), alias: "StudyDate", vr: Exact(VR::DA) },
    E { tag: Single(SERIES_DATE), alias: "SeriesDate", vr: Exact(VR::DA) },
    E { tag: Single(ACQUISITION_DATE), alias: "AcquisitionDate", vr: Exact(VR::DA) },
    E { tag: Single(CONTENT_DATE), alias: "ContentDate", vr: Exact(VR::DA) },
    E { tag: Single(STUDY_TIME), alias: "StudyTime", vr: Exact(VR::TM) },
    E { tag: Single(SERIES_TIME), alias: "SeriesTime", vr: Exact(VR::TM) },
    E { tag: Single(ACQUISITION_TIME), alias: "AcquisitionTime", vr: Exact(VR::TM) },
    E { tag: Single(CONTENT_TIME), alias: "ContentTime", vr: Exact(VR::TM) },
    E { tag: Single(ACCESSION_NUMBER), alias: "AccessionNumber", vr: Exact(VR::SH) },
    E { tag: Single(MODALITY), alias: "Modality", vr: Exact(VR::CS) },
    E { tag: Single(CONVERSION_TYPE), alias: "ConversionType", vr: Exact(VR::CS) },
    E { tag: Single(MANUFACTURER), alias: "Manufacturer", vr: Exact(VR::LO) },
    E { tag: Single(INSTITUTION_NAME), alias: "InstitutionName", vr: Exact(VR::LO) },
    E { tag: Single(REFERRING_PHYSICIAN_NAME), alias: "ReferringPhysicianName", vr: Exact(VR::PN) },
    E { tag: Single(CODE_VALUE), alias: "CodeValue", vr: Exact(VR::SH) },
    E { tag: Single(CODING_SCHEME_DESIGNATOR), alias: "CodingSchemeDesignator", vr: Exact(VR::SH) },
    E { tag: Single(CODE_MEANING), alias: "CodeMeaning", vr: Exact(VR::LO) },
    E { tag: Single(STUDY_DESCRIPTION), alias: "StudyDescription", vr: Exact(VR::LO) },
    E { tag: Single(SERIES_DESCRIPTION), alias: "SeriesDescription", vr: Exact(VR::LO) },
    E { tag: Single(PERFORMING_PHYSICIAN_NAME), alias: "PerformingPhysicianName", vr: Exact(VR::PN) },
    E { tag: Single(OPERATORS_NAME), alias: "OperatorsName", vr: Exact(VR::PN) },
    E { tag: Single(MANUFACTURER_MODEL_NAME), alias: "ManufacturerModelName", vr: Exact(VR::LO) },
    E { tag: Single(REFERENCED_STUDY_SEQUENCE), alias: "ReferencedStudySequence", vr: Exact(VR::SQ) },
    E { tag: Single(REFERENCED_SERIES_SEQUENCE), alias: "ReferencedSeriesSequence", vr: Exact(VR::SQ) },
    E { tag: Single(REFERENCED_IMAGE_SEQUENCE), alias: "ReferencedImageSequence", vr: Exact(VR::SQ) },
    E { tag: Single(REFERENCED_SOP_CLASS_UID), alias: "ReferencedSOPClassUID", vr: Exact(VR::UI) },
    E { tag: Single(REFERENCED_SOP_INSTANCE_UID), alias: "ReferencedSOPInstanceUID", vr: Exact(VR::UI) },
    E { tag: Single(ANATOMIC_REGION_SEQUENCE), alias: "AnatomicRegionSequence", vr: Exact(VR::SQ) },
    E { tag: Single(PATIENT_NAME), alias: "PatientName", vr: Exact(VR::PN) },
    E { tag: Single(PATIENT_ID), alias: "PatientID", vr: Exact(VR::LO) },
    E { tag: Single(ISSUER_OF_PATIENT_ID), alias: "IssuerOfPatientID", vr: Exact(VR::LO) },
    E { tag: Single(PATIENT_BIRTH_DATE), alias: "PatientBirthDate", vr: Exact(VR::DA) },
    E { tag: Single(PATIENT_BIRTH_TIME), alias: "PatientBirthTime", vr: Exact(VR::TM) },
    E { tag: Single(PATIENT_SEX), alias: "PatientSex", vr: Exact(VR::CS) },
    E { tag: Single(PATIENT_AGE), alias: "PatientAge", vr: Exact(VR::AS) },
    E { tag: Single(PATIENT_SIZE), alias: "PatientSize", vr: Exact(VR::DS) },
    E { tag: Single(PATIENT_WEIGHT), alias: "PatientWeight", vr: Exact(VR::DS) },
    E { tag: Single(PATIENT_COMMENTS), alias: "PatientComments", vr: Exact(VR::LT) },
    E { tag: Single(BODY_PART_EXAMINED), alias: "BodyPartExamined", vr: Exact(VR::CS) },
    E { tag: Single(SLICE_THICKNESS), alias: "SliceThickness", vr: Exact(VR::DS) },
    E { tag: Single(KVP), alias: "KVP", vr: Exact(VR::DS) },
    E { tag: Single(SOFTWARE_VERSIONS), alias: "SoftwareVersions", vr: Exact(VR::LO) },
    E { tag: Single(PROTOCOL_NAME), alias: "ProtocolName", vr: Exact(VR::LO) },
    E { tag: Single(PATIENT_POSITION), alias: "PatientPosition", vr: Exact(VR::CS) },
    E { tag: Single(STUDY_INSTANCE_UID), alias: "StudyInstanceUID", vr: Exact(VR::UI) },
    E { tag: Single(SERIES_INSTANCE_UID), alias: "SeriesInstanceUID", vr: Exact(VR::UI) },
    E { tag: Single(STUDY_ID), alias: "StudyID", vr: Exact(VR::SH) },
    E { tag: Single(SERIES_NUMBER), alias: "SeriesNumber", vr: Exact(VR::IS) },
    E { tag: Single(ACQUISITION_NUMBER), alias: "AcquisitionNumber", vr: Exact(VR::IS) },
    E { tag: Single(INSTANCE_NUMBER), alias: "InstanceNumber", vr: Exact(VR::IS) },
    E { tag: Single(PATIENT_ORIENTATION), alias: "PatientOrientation", vr: Exact(VR::CS) },
    E { tag: Single(IMAGE_POSITION_PATIENT), alias: "ImagePositionPatient", vr: Exact(VR::DS) },
    E { tag: Single(IMAGE_ORIENTATION_PATIENT), alias: "ImageOrientationPatient", vr: Exact(VR::DS) },
    E { tag: Single(FRAME_OF_REFERENCE_UID), alias: "FrameOfReferenceUID", vr: Exact(VR::UI) },
    E { tag: Single(SLICE_LOCATION), alias: "SliceLocation", vr: Exact(VR::DS) },
    E { tag: Single(IMAGE_COMMENTS), alias: "ImageComments", vr: Exact(VR::LT) },
    E { tag: Single(SAMPLES_PER_PIXEL), alias: "SamplesPerPixel", vr: Exact(VR::US) },
    E { tag: Single(PHOTOMETRIC_INTERPRETATION), alias: "PhotometricInterpretation", vr: Exact(VR::CS) },
    E { tag: Single(PLANAR_CONFIGURATION), alias: "PlanarConfiguration", vr: Exact(VR::US) },
    E { tag: Single(NUMBER_OF_FRAMES), alias: "NumberOfFrames", vr: Exact(VR::IS) },
    E { tag: Single(ROWS), alias: "Rows", vr: Exact(VR::US) },
    E { tag: Single(COLUMNS), alias: "Columns", vr: Exact(VR::US) },
    E { tag: Single(PIXEL_SPACING), alias: "PixelSpacing", vr: Exact(VR::DS) },
    E { tag: Single(BITS_ALLOCATED), alias: "BitsAllocated", vr: Exact(VR::US) },
    E { tag: Single(BITS_STORED), alias: "BitsStored", vr: Exact(VR::US) },
    E { tag: Single(HIGH_BIT), alias: "HighBit", vr: Exact(VR::US) },
    E { tag: Single(PIXEL_REPRESENTATION), alias: "PixelRepresentation", vr: Exact(VR::US) },
    E { tag: Single(SMALLEST_IMAGE_PIXEL_VALUE), alias: "SmallestImagePixelValue", vr: Xs },
    E { tag: Single(LARGEST_IMAGE_PIXEL_VALUE), alias: "LargestImagePixelValue", vr: Xs },
    E { tag: Single(WINDOW_CENTER), alias: "WindowCenter", vr: Exact(VR::DS) },
    E { tag: Single(WINDOW_WIDTH), alias: "WindowWidth", vr: Exact(VR::DS) },
    E { tag: Single(RESCALE_INTERCEPT), alias: "RescaleIntercept", vr: Exact(VR::DS) },
    E { tag: Single(RESCALE_SLOPE), alias: "RescaleSlope", vr: Exact(VR::DS) },
    E { tag: Single(PERFORMED_PROCEDURE_STEP_DESCRIPTION), alias: "PerformedProcedureStepDescription", vr: Exact(VR::LO) },
    E { tag: Single(REQUEST_ATTRIBUTES_SEQUENCE), alias: "RequestAttributesSequence", vr: Exact(VR::SQ) },
    E { tag: Single(CONCEPT_CODE_SEQUENCE), alias: "ConceptCodeSequence", vr: Exact(VR::SQ) },
    E { tag: Single(CONTENT_SEQUENCE), alias: "ContentSequence", vr: Exact(VR::SQ) },
    E { tag: Single(SHARED_FUNCTIONAL_GROUPS_SEQUENCE), alias: "SharedFunctionalGroupsSequence", vr: Exact(VR::SQ) },
    E { tag: Single(PER_FRAME_FUNCTIONAL_GROUPS_SEQUENCE), alias: "PerFrameFunctionalGroupsSequence", vr: Exact(VR::SQ) },
    E { tag: Group100(OVERLAY_ROWS), alias: "OverlayRows", vr: Exact(VR::US) },
    E { tag: Group100(OVERLAY_COLUMNS), alias: "OverlayColumns", vr: Exact(VR::US) },
    E { tag: Group100(OVERLAY_TYPE), alias: "OverlayType", vr: Exact(VR::CS) },
    E { tag: Group100(OVERLAY_ORIGIN), alias: "OverlayOrigin", vr: Exact(VR::SS) },
    E { tag: Group100(OVERLAY_BITS_ALLOCATED), alias: "OverlayBitsAllocated", vr: Exact(VR::US) },
    E { tag: Group100(OVERLAY_BIT_POSITION), alias: "OverlayBitPosition", vr: Exact(VR::US) },
    E { tag: Group100(OVERLAY_DATA), alias: "OverlayData", vr: Ox },
    E { tag: Single(FLOAT_PIXEL_DATA), alias: "FloatPixelData", vr: Exact(VR::OF) },
    E { tag: Single(DOUBLE_FLOAT_PIXEL_DATA), alias: "DoubleFloatPixelData", vr: Exact(VR::OD) },
    E { tag: Single(PIXEL_DATA), alias: "PixelData", vr: Px },
];
