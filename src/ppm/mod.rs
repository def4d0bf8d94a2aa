//! Binary PPM (P6) codec.
//!
//! Layout: `P6 <width> <height>\n255\n` followed by raw RGB triples,
//! row-major and top-to-bottom, with no row padding.

mod decode;
mod encode;

use std::fs;
use std::path::Path;

use log::debug;

use crate::buffer::Image;
use crate::error::ConvertError;

pub(crate) const PPM_SIG: &str = "P6";
pub(crate) const PPM_MAX: u32 = 255;

/// Decode PPM bytes into an image.
pub fn decode(data: &[u8]) -> Result<Image, ConvertError> {
    decode::decode_ppm(data)
}

/// Encode an image as PPM bytes.
pub fn encode(image: &Image) -> Result<Vec<u8>, ConvertError> {
    encode::encode_ppm(image)
}

/// Read and decode a PPM file.
pub fn load(path: &Path) -> Result<Image, ConvertError> {
    let data = fs::read(path)?;
    debug!("ppm: read {} bytes from {}", data.len(), path.display());
    decode(&data)
}

/// Encode and write a PPM file.
///
/// A write failure may leave a partial file on disk; no cleanup is attempted.
pub fn save(path: &Path, image: &Image) -> Result<(), ConvertError> {
    let data = encode(image)?;
    fs::write(path, &data)?;
    debug!("ppm: wrote {} bytes to {}", data.len(), path.display());
    Ok(())
}
