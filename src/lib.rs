//! # imgconv
//!
//! BMP and PPM image codecs plus an extension-dispatched converter.
//!
//! The two core codecs are implemented here byte-for-byte:
//!
//! - **BMP** — uncompressed 24-bit Windows bitmap (14-byte file header,
//!   40-byte `BITMAPINFOHEADER`, rows stored bottom-up with 4-byte stride
//!   padding, BGR byte order).
//! - **PPM** — binary P6 (`P6 <w> <h>\n255\n` header followed by raw RGB).
//!
//! JPEG is delegated to the [`image`] crate; only its load/save contract is
//! relied on.
//!
//! ## Non-Goals
//!
//! - Color management, alpha, bit depths other than 8-bit RGB
//! - Compressed or paletted BMP variants
//! - Any image manipulation beyond straight load/save
//!
//! ## Usage
//!
//! ```no_run
//! use imgconv::ImageFormat;
//!
//! let input = std::path::Path::new("in.bmp");
//! let output = std::path::Path::new("out.ppm");
//!
//! let src = ImageFormat::from_path(input).expect("unknown input format");
//! let dst = ImageFormat::from_path(output).expect("unknown output format");
//!
//! let image = src.load(input)?;
//! dst.save(output, &image)?;
//! # Ok::<(), imgconv::ConvertError>(())
//! ```

#![forbid(unsafe_code)]

mod buffer;
mod error;
mod format;

pub mod bmp;
pub mod jpeg;
pub mod ppm;

// Re-exports
pub use buffer::{Image, Pixel};
pub use error::ConvertError;
pub use format::ImageFormat;
