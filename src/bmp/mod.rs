//! Uncompressed 24-bit BMP codec.
//!
//! Layout: 14-byte file header, 40-byte `BITMAPINFOHEADER`, then pixel rows
//! stored bottom-to-top in BGR byte order, each row zero-padded to a 4-byte
//! boundary. All multi-byte header fields are little-endian.

mod decode;
mod encode;

use std::fs;
use std::path::Path;

use log::debug;

use crate::buffer::Image;
use crate::error::ConvertError;

pub(crate) const BMP_SIG: [u8; 2] = *b"BM";

/// File header (14) plus info header (40); pixel data starts here.
pub(crate) const PIXEL_DATA_OFFSET: u32 = 54;

/// Encoded row length in bytes: `width * 3` rounded up to a multiple of 4.
///
/// Derived from width alone, never from header size fields, so encode and
/// decode always agree.
pub(crate) fn stride_for_width(width: u32) -> Option<usize> {
    (width as usize)
        .checked_mul(3)
        .and_then(|r| r.checked_add(3))
        .map(|r| r & !3)
}

/// Decode BMP bytes into an image.
pub fn decode(data: &[u8]) -> Result<Image, ConvertError> {
    decode::decode_bmp(data)
}

/// Encode an image as BMP bytes.
pub fn encode(image: &Image) -> Result<Vec<u8>, ConvertError> {
    encode::encode_bmp(image)
}

/// Read and decode a BMP file.
pub fn load(path: &Path) -> Result<Image, ConvertError> {
    let data = fs::read(path)?;
    debug!("bmp: read {} bytes from {}", data.len(), path.display());
    decode(&data)
}

/// Encode and write a BMP file.
///
/// A write failure may leave a partial file on disk; no cleanup is attempted.
pub fn save(path: &Path, image: &Image) -> Result<(), ConvertError> {
    let data = encode(image)?;
    fs::write(path, &data)?;
    debug!("bmp: wrote {} bytes to {}", data.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::stride_for_width;

    #[test]
    fn stride_rounds_up_to_multiple_of_four() {
        assert_eq!(stride_for_width(1), Some(4));
        assert_eq!(stride_for_width(2), Some(8));
        assert_eq!(stride_for_width(3), Some(12));
        assert_eq!(stride_for_width(4), Some(12));
        assert_eq!(stride_for_width(5), Some(16));
        assert_eq!(stride_for_width(100), Some(300));
    }
}
