use rgb::ComponentBytes as _;

use crate::error::ConvertError;

/// A single 8-bit RGB pixel. Channel values pass through codecs unclamped.
pub type Pixel = rgb::RGB8;

/// An owned row-major grid of RGB pixels.
///
/// A buffer is either fully valid or does not exist: [`Image::new`] rejects
/// zero dimensions and overflowing sizes, so every `Image` value satisfies
/// `width > 0`, `height > 0`, and `pixels.len() == width * height`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Image {
    width: u32,
    height: u32,
    pixels: Vec<Pixel>,
}

impl Image {
    /// Allocate a black-filled `width` x `height` buffer.
    ///
    /// Returns [`ConvertError::EmptyImage`] when either dimension is zero and
    /// [`ConvertError::DimensionsTooLarge`] when the pixel count would not
    /// fit in memory arithmetic.
    pub fn new(width: u32, height: u32) -> Result<Self, ConvertError> {
        if width == 0 || height == 0 {
            return Err(ConvertError::EmptyImage);
        }
        let len = (width as usize)
            .checked_mul(height as usize)
            .filter(|n| n.checked_mul(3).is_some())
            .ok_or(ConvertError::DimensionsTooLarge { width, height })?;
        Ok(Self {
            width,
            height,
            pixels: vec![Pixel::default(); len],
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Row `y` (0 = top), exactly `width` pixels.
    ///
    /// # Panics
    /// Panics if `y >= height`.
    pub fn row(&self, y: u32) -> &[Pixel] {
        let w = self.width as usize;
        let start = y as usize * w;
        &self.pixels[start..start + w]
    }

    /// Mutable access to row `y` (0 = top).
    ///
    /// # Panics
    /// Panics if `y >= height`.
    pub fn row_mut(&mut self, y: u32) -> &mut [Pixel] {
        let w = self.width as usize;
        let start = y as usize * w;
        &mut self.pixels[start..start + w]
    }

    /// All pixels, row-major, top-to-bottom.
    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }

    /// Pixel data as raw interleaved RGB bytes.
    pub fn as_bytes(&self) -> &[u8] {
        self.pixels.as_bytes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_zero_dimensions() {
        assert!(matches!(Image::new(0, 5), Err(ConvertError::EmptyImage)));
        assert!(matches!(Image::new(5, 0), Err(ConvertError::EmptyImage)));
        assert!(matches!(Image::new(0, 0), Err(ConvertError::EmptyImage)));
    }

    #[test]
    fn rows_are_width_sized_and_black() {
        let img = Image::new(3, 2).unwrap();
        assert_eq!(img.row(0).len(), 3);
        assert_eq!(img.row(1), &[Pixel::default(); 3]);
        assert_eq!(img.as_bytes().len(), 18);
    }

    #[test]
    fn row_mut_writes_through() {
        let mut img = Image::new(2, 2).unwrap();
        img.row_mut(1)[0] = Pixel { r: 1, g: 2, b: 3 };
        assert_eq!(img.pixels()[2], Pixel { r: 1, g: 2, b: 3 });
    }
}
