//! BMP encoder: uncompressed 24-bit, bottom-up rows.

use super::{stride_for_width, BMP_SIG, PIXEL_DATA_OFFSET};
use crate::buffer::Image;
use crate::error::ConvertError;

pub(crate) fn encode_bmp(image: &Image) -> Result<Vec<u8>, ConvertError> {
    let width = image.width();
    let height = image.height();

    let row_stride =
        stride_for_width(width).ok_or(ConvertError::DimensionsTooLarge { width, height })?;
    let pixel_data_size = row_stride
        .checked_mul(height as usize)
        .ok_or(ConvertError::DimensionsTooLarge { width, height })?;
    let file_size = pixel_data_size
        .checked_add(PIXEL_DATA_OFFSET as usize)
        .ok_or(ConvertError::DimensionsTooLarge { width, height })?;

    let mut out = Vec::with_capacity(file_size);
    write_bmp_header(&mut out, file_size, pixel_data_size, width, height);

    let pad_bytes = row_stride - width as usize * 3;
    for y in (0..height).rev() {
        for px in image.row(y) {
            out.push(px.b);
            out.push(px.g);
            out.push(px.r);
        }
        out.extend(std::iter::repeat(0u8).take(pad_bytes));
    }

    Ok(out)
}

/// Write the two headers field by field, little-endian. The in-memory
/// layout of a packed struct is never relied on.
fn write_bmp_header(
    out: &mut Vec<u8>,
    file_size: usize,
    pixel_data_size: usize,
    width: u32,
    height: u32,
) {
    // File header (14 bytes)
    out.extend_from_slice(&BMP_SIG);
    out.extend_from_slice(&(file_size as u32).to_le_bytes());
    out.extend_from_slice(&[0u8; 4]); // reserved
    out.extend_from_slice(&PIXEL_DATA_OFFSET.to_le_bytes());

    // Info header (BITMAPINFOHEADER, 40 bytes)
    out.extend_from_slice(&40u32.to_le_bytes());
    out.extend_from_slice(&(width as i32).to_le_bytes());
    out.extend_from_slice(&(height as i32).to_le_bytes()); // positive = bottom-up
    out.extend_from_slice(&1u16.to_le_bytes()); // planes
    out.extend_from_slice(&24u16.to_le_bytes()); // bits per pixel
    out.extend_from_slice(&0u32.to_le_bytes()); // compression: none
    out.extend_from_slice(&(pixel_data_size as u32).to_le_bytes());
    out.extend_from_slice(&11811i32.to_le_bytes()); // h resolution (~300 DPI)
    out.extend_from_slice(&11811i32.to_le_bytes()); // v resolution
    out.extend_from_slice(&0i32.to_le_bytes()); // colors used
    out.extend_from_slice(&0x1000000i32.to_le_bytes()); // all colors significant
}
