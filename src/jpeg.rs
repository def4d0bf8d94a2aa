//! JPEG codec, delegated to the [`image`] crate.
//!
//! Only the load/save contract matters here: loading yields an 8-bit RGB
//! buffer, saving consumes one. Compression internals belong to the library.

use std::path::Path;

use log::debug;

use crate::buffer::{Image, Pixel};
use crate::error::ConvertError;

/// Read and decode a JPEG file.
pub fn load(path: &Path) -> Result<Image, ConvertError> {
    let decoded = image::ImageReader::open(path)?
        .decode()
        .map_err(|e| ConvertError::Jpeg(e.to_string()))?
        .into_rgb8();
    let (width, height) = decoded.dimensions();
    debug!("jpeg: decoded {width}x{height} from {}", path.display());

    let mut out = Image::new(width, height)?;
    let raw = decoded.as_raw();
    for y in 0..height {
        let start = y as usize * width as usize * 3;
        for (px, rgb) in out.row_mut(y).iter_mut().zip(raw[start..].chunks_exact(3)) {
            *px = Pixel {
                r: rgb[0],
                g: rgb[1],
                b: rgb[2],
            };
        }
    }
    Ok(out)
}

/// Encode and write a JPEG file.
pub fn save(path: &Path, img: &Image) -> Result<(), ConvertError> {
    image::save_buffer_with_format(
        path,
        img.as_bytes(),
        img.width(),
        img.height(),
        image::ExtendedColorType::Rgb8,
        image::ImageFormat::Jpeg,
    )
    .map_err(|e| ConvertError::Jpeg(e.to_string()))?;
    debug!(
        "jpeg: wrote {}x{} to {}",
        img.width(),
        img.height(),
        path.display()
    );
    Ok(())
}
