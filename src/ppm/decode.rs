//! PPM decoder: P6 text header, raw RGB pixel data.

use super::{PPM_MAX, PPM_SIG};
use crate::buffer::{Image, Pixel};
use crate::error::ConvertError;

// ── Header tokenizer ────────────────────────────────────────────────

/// Whitespace-skipping tokenizer over the text header.
struct Tokens<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Tokens<'a> {
    fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    fn token(&mut self) -> Result<&'a [u8], ConvertError> {
        while self.pos < self.data.len() && self.data[self.pos].is_ascii_whitespace() {
            self.pos += 1;
        }
        let start = self.pos;
        while self.pos < self.data.len() && !self.data[self.pos].is_ascii_whitespace() {
            self.pos += 1;
        }
        if self.pos == start {
            return Err(ConvertError::UnexpectedEof);
        }
        Ok(&self.data[start..self.pos])
    }

    fn number(&mut self) -> Result<u32, ConvertError> {
        let tok = self.token()?;
        core::str::from_utf8(tok)
            .ok()
            .and_then(|s| s.parse().ok())
            .ok_or_else(|| {
                ConvertError::InvalidHeader(format!(
                    "expected integer, got {:?}",
                    String::from_utf8_lossy(tok)
                ))
            })
    }
}

pub(crate) fn decode_ppm(data: &[u8]) -> Result<Image, ConvertError> {
    let mut toks = Tokens::new(data);

    if toks.token()? != PPM_SIG.as_bytes() {
        return Err(ConvertError::BadMagic);
    }
    let width = toks.number()?;
    let height = toks.number()?;
    let maxval = toks.number()?;
    if maxval != PPM_MAX {
        return Err(ConvertError::InvalidHeader(format!(
            "unsupported maxval {maxval}, only {PPM_MAX} is handled"
        )));
    }

    // Exactly one byte separates the header from the pixel data, and it must
    // be a newline. No comment syntax is supported.
    match data.get(toks.pos) {
        Some(b'\n') => {}
        _ => {
            return Err(ConvertError::InvalidHeader(
                "header not terminated by a single newline".into(),
            ));
        }
    }
    let mut pixel_data = &data[toks.pos + 1..];

    if width == 0 || height == 0 {
        return Err(ConvertError::EmptyImage);
    }
    let row_bytes = (width as usize)
        .checked_mul(3)
        .ok_or(ConvertError::DimensionsTooLarge { width, height })?;
    let total = row_bytes
        .checked_mul(height as usize)
        .ok_or(ConvertError::DimensionsTooLarge { width, height })?;
    // Reject short files before allocating width*height pixels.
    if pixel_data.len() < total {
        return Err(ConvertError::UnexpectedEof);
    }

    let mut image = Image::new(width, height)?;
    for y in 0..height {
        let (row, rest) = pixel_data.split_at(row_bytes);
        for (px, rgb) in image.row_mut(y).iter_mut().zip(row.chunks_exact(3)) {
            *px = Pixel {
                r: rgb[0],
                g: rgb[1],
                b: rgb[2],
            };
        }
        pixel_data = rest;
    }

    Ok(image)
}
