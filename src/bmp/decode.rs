//! BMP decoder: uncompressed 24-bit, bottom-up rows.

use super::{stride_for_width, BMP_SIG};
use crate::buffer::{Image, Pixel};
use crate::error::ConvertError;

// ── Cursor for reading from &[u8] ───────────────────────────────────

struct Cursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    fn read_fixed_bytes<const N: usize>(&mut self) -> Result<[u8; N], ConvertError> {
        if self.pos + N > self.data.len() {
            return Err(ConvertError::UnexpectedEof);
        }
        let mut buf = [0u8; N];
        buf.copy_from_slice(&self.data[self.pos..self.pos + N]);
        self.pos += N;
        Ok(buf)
    }

    fn get_u16_le(&mut self) -> Result<u16, ConvertError> {
        Ok(u16::from_le_bytes(self.read_fixed_bytes()?))
    }

    fn get_u32_le(&mut self) -> Result<u32, ConvertError> {
        Ok(u32::from_le_bytes(self.read_fixed_bytes()?))
    }

    fn get_i32_le(&mut self) -> Result<i32, ConvertError> {
        Ok(i32::from_le_bytes(self.read_fixed_bytes()?))
    }

    fn bytes(&mut self, n: usize) -> Result<&'a [u8], ConvertError> {
        let end = self.pos.checked_add(n).ok_or(ConvertError::UnexpectedEof)?;
        if end > self.data.len() {
            return Err(ConvertError::UnexpectedEof);
        }
        let slice = &self.data[self.pos..end];
        self.pos = end;
        Ok(slice)
    }
}

pub(crate) fn decode_bmp(data: &[u8]) -> Result<Image, ConvertError> {
    let mut cur = Cursor::new(data);

    // File header: signature, file size, reserved, pixel data offset.
    let sig: [u8; 2] = cur.read_fixed_bytes()?;
    if sig != BMP_SIG {
        return Err(ConvertError::BadMagic);
    }
    let _file_size = cur.get_u32_le()?;
    let _reserved = cur.get_u32_le()?;
    let _data_offset = cur.get_u32_le()?;

    // Info header. Only width and height matter for the uncompressed
    // 24-bit layout; the declared file size, bit depth, and data size
    // fields are not validated.
    let _header_size = cur.get_u32_le()?;
    let width = cur.get_i32_le()?;
    let height = cur.get_i32_le()?;
    let _planes = cur.get_u16_le()?;
    let _bits_per_pixel = cur.get_u16_le()?;
    let _compression = cur.get_u32_le()?;
    let _data_size = cur.get_u32_le()?;
    let _resolution: [u8; 8] = cur.read_fixed_bytes()?;
    let _palette: [u8; 8] = cur.read_fixed_bytes()?;

    if width <= 0 || height <= 0 {
        return Err(ConvertError::InvalidHeader(format!(
            "bad dimensions {width}x{height}"
        )));
    }
    let width = width as u32;
    let height = height as u32;

    // Stride is recomputed from width; the header's data size is not trusted.
    let stride =
        stride_for_width(width).ok_or(ConvertError::DimensionsTooLarge { width, height })?;
    let total = stride
        .checked_mul(height as usize)
        .ok_or(ConvertError::DimensionsTooLarge { width, height })?;
    // Reject short files before allocating width*height pixels.
    if data.len() - cur.pos < total {
        return Err(ConvertError::UnexpectedEof);
    }

    let mut image = Image::new(width, height)?;
    for y in 0..height {
        let row_bytes = cur.bytes(stride)?;
        let line = image.row_mut(height - 1 - y);
        for (px, bgr) in line.iter_mut().zip(row_bytes.chunks_exact(3)) {
            *px = Pixel {
                r: bgr[2],
                g: bgr[1],
                b: bgr[0],
            };
        }
    }

    Ok(image)
}
