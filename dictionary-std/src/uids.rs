//! UID declarations
//!
//! This module covers the transfer syntax UIDs
//! relevant to record encoding
//! and a small selection of storage SOP classes.

/// SOP Class: Verification SOP Class
pub const VERIFICATION: &str = "1.2.840.10008.1.1";
/// Transfer Syntax: Implicit VR Little Endian: Default Transfer Syntax for DICOM
pub const IMPLICIT_VR_LITTLE_ENDIAN: &str = "1.2.840.10008.1.2";
/// Transfer Syntax: Explicit VR Little Endian
pub const EXPLICIT_VR_LITTLE_ENDIAN: &str = "1.2.840.10008.1.2.1";
/// Transfer Syntax: Deflated Explicit VR Little Endian
pub const DEFLATED_EXPLICIT_VR_LITTLE_ENDIAN: &str = "1.2.840.10008.1.2.1.99";
/// Transfer Syntax: Explicit VR Big Endian (Retired)
pub const EXPLICIT_VR_BIG_ENDIAN: &str = "1.2.840.10008.1.2.2";
/// Transfer Syntax: JPEG Baseline (Process 1)
pub const JPEG_BASELINE8_BIT: &str = "1.2.840.10008.1.2.4.50";
/// Transfer Syntax: JPEG 2000 Image Compression
pub const JPEG2000: &str = "1.2.840.10008.1.2.4.91";
/// Transfer Syntax: RLE Lossless
pub const RLE_LOSSLESS: &str = "1.2.840.10008.1.2.5";
/// SOP Class: CT Image Storage
pub const CT_IMAGE_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.2";
/// SOP Class: MR Image Storage
pub const MR_IMAGE_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.4";
/// SOP Class: Secondary Capture Image Storage
pub const SECONDARY_CAPTURE_IMAGE_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.7";

/// Whether the given transfer syntax UID
/// describes uncompressed (native) pixel data.
pub fn is_uncompressed(transfer_syntax_uid: &str) -> bool {
    matches!(
        transfer_syntax_uid.trim_end_matches('\0'),
        IMPLICIT_VR_LITTLE_ENDIAN
            | EXPLICIT_VR_LITTLE_ENDIAN
            | DEFLATED_EXPLICIT_VR_LITTLE_ENDIAN
            | EXPLICIT_VR_BIG_ENDIAN
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uncompressed_transfer_syntaxes() {
        assert!(is_uncompressed(IMPLICIT_VR_LITTLE_ENDIAN));
        assert!(is_uncompressed(EXPLICIT_VR_LITTLE_ENDIAN));
        // UI values may carry a NUL pad on the wire
        assert!(is_uncompressed("1.2.840.10008.1.2.1\0"));
        assert!(!is_uncompressed(JPEG_BASELINE8_BIT));
        assert!(!is_uncompressed(RLE_LOSSLESS));
        assert!(!is_uncompressed(""));
    }
}

