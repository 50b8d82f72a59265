//! Visual artifacts derived from color data
//!
//! - [`render_color_bar`]: palette shares as horizontal segments
//! - [`render_blended_color`]: flat swatch of the blended color

mod bar;
mod swatch;

pub use bar::{render_color_bar, render_color_bar_sized};
pub use swatch::{render_blended_color, render_blended_color_sized};

use crate::{AnalysisError, Result};
use image::RgbImage;
use std::io::Cursor;

/// Encode an artifact as PNG bytes
pub fn encode_png(img: &RgbImage) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    img.write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .map_err(|e| AnalysisError::render("Failed to encode PNG", e))?;
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    #[test]
    fn test_encode_png_signature() {
        let img = RgbImage::from_pixel(3, 2, Rgb([1, 2, 3]));
        let bytes = encode_png(&img).unwrap();
        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");

        let decoded = crate::image_loader::decode_bytes(&bytes).unwrap();
        assert_eq!(decoded, img);
    }
}
