//! PPM encoder: P6 text header, raw RGB pixel data.

use super::{PPM_MAX, PPM_SIG};
use crate::buffer::Image;
use crate::error::ConvertError;

pub(crate) fn encode_ppm(image: &Image) -> Result<Vec<u8>, ConvertError> {
    let header = format!(
        "{PPM_SIG} {} {}\n{PPM_MAX}\n",
        image.width(),
        image.height()
    );

    let pixel_bytes = image.as_bytes();
    let mut out = Vec::with_capacity(header.len() + pixel_bytes.len());
    out.extend_from_slice(header.as_bytes());
    // Rows are already top-to-bottom interleaved RGB, exactly the file order.
    out.extend_from_slice(pixel_bytes);

    Ok(out)
}
