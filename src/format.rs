use std::path::Path;

use crate::buffer::Image;
use crate::error::ConvertError;
use crate::{bmp, jpeg, ppm};

/// The closed set of formats the converter dispatches on.
///
/// Every variant exposes the same load/save capability, so callers only ever
/// branch on whether [`ImageFormat::from_path`] recognized the extension.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ImageFormat {
    Bmp,
    Ppm,
    Jpeg,
}

impl ImageFormat {
    /// Resolve a format from the path's extension.
    ///
    /// Matching is case-sensitive; `None` means the extension (or its
    /// absence) is not recognized.
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()? {
            "bmp" => Some(Self::Bmp),
            "ppm" => Some(Self::Ppm),
            "jpg" | "jpeg" => Some(Self::Jpeg),
            _ => None,
        }
    }

    /// Read and decode an image file in this format.
    pub fn load(self, path: &Path) -> Result<Image, ConvertError> {
        match self {
            Self::Bmp => bmp::load(path),
            Self::Ppm => ppm::load(path),
            Self::Jpeg => jpeg::load(path),
        }
    }

    /// Encode and write an image file in this format.
    pub fn save(self, path: &Path, image: &Image) -> Result<(), ConvertError> {
        match self {
            Self::Bmp => bmp::save(path, image),
            Self::Ppm => ppm::save(path, image),
            Self::Jpeg => jpeg::save(path, image),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_known_extensions() {
        assert_eq!(
            ImageFormat::from_path(Path::new("a.bmp")),
            Some(ImageFormat::Bmp)
        );
        assert_eq!(
            ImageFormat::from_path(Path::new("a.ppm")),
            Some(ImageFormat::Ppm)
        );
        assert_eq!(
            ImageFormat::from_path(Path::new("a.jpg")),
            Some(ImageFormat::Jpeg)
        );
        assert_eq!(
            ImageFormat::from_path(Path::new("a.jpeg")),
            Some(ImageFormat::Jpeg)
        );
    }

    #[test]
    fn rejects_unknown_extensions() {
        assert_eq!(ImageFormat::from_path(Path::new("a.gif")), None);
        assert_eq!(ImageFormat::from_path(Path::new("a")), None);
        assert_eq!(ImageFormat::from_path(Path::new("bmp")), None);
    }

    #[test]
    fn extension_match_is_case_sensitive() {
        assert_eq!(ImageFormat::from_path(Path::new("a.BMP")), None);
        assert_eq!(ImageFormat::from_path(Path::new("a.Ppm")), None);
    }

    #[test]
    fn only_the_final_extension_counts() {
        assert_eq!(
            ImageFormat::from_path(Path::new("archive.bmp.ppm")),
            Some(ImageFormat::Ppm)
        );
    }
}
