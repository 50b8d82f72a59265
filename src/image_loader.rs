//! Unified image loading into 8-bit RGB buffers
//!
//! Flags arrive either as raw bytes from the network or as files on disk.
//! Both paths end in an [`RgbImage`]; any alpha channel is dropped, not
//! composited.
//!
//! ## Supported Formats
//!
//! PNG, JPEG, GIF (first frame only), WebP and BMP, via the `image` crate.

use crate::error::{AnalysisError, Result};
use image::{ImageReader, RgbImage};
use std::io::Cursor;
use std::path::Path;

/// Supported image formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    /// PNG image
    Png,
    /// JPEG image
    Jpeg,
    /// GIF image (first frame only)
    Gif,
    /// WebP image
    WebP,
    /// BMP image
    Bmp,
}

impl ImageFormat {
    /// Detect format from file extension
    pub fn from_extension(path: &Path) -> Option<ImageFormat> {
        let ext = path.extension()?.to_str()?.to_lowercase();
        match ext.as_str() {
            "png" => Some(ImageFormat::Png),
            "jpg" | "jpeg" => Some(ImageFormat::Jpeg),
            "gif" => Some(ImageFormat::Gif),
            "webp" => Some(ImageFormat::WebP),
            "bmp" => Some(ImageFormat::Bmp),
            _ => None,
        }
    }
}

impl From<ImageFormat> for image::ImageFormat {
    fn from(format: ImageFormat) -> Self {
        match format {
            ImageFormat::Png => image::ImageFormat::Png,
            ImageFormat::Jpeg => image::ImageFormat::Jpeg,
            ImageFormat::Gif => image::ImageFormat::Gif,
            ImageFormat::WebP => image::ImageFormat::WebP,
            ImageFormat::Bmp => image::ImageFormat::Bmp,
        }
    }
}

/// Load an image from disk and convert it to RGB
///
/// # Errors
///
/// Returns `AnalysisError::ImageLoadError` if the file cannot be opened or
/// decoded, and `AnalysisError::InvalidParameter` for unknown extensions.
///
/// # Example
///
/// ```rust,no_run
/// use flag_colors::image_loader::load_image;
/// use std::path::Path;
///
/// let img = load_image(Path::new("fr.png"))?;
/// println!("Loaded image: {}x{}", img.width(), img.height());
/// # Ok::<(), flag_colors::AnalysisError>(())
/// ```
pub fn load_image(path: &Path) -> Result<RgbImage> {
    let format = ImageFormat::from_extension(path)
        .ok_or_else(|| AnalysisError::invalid("image path", path.display()))?;

    let mut reader = ImageReader::open(path).map_err(|e| {
        AnalysisError::image_load(format!("Failed to open image file: {}", path.display()), e)
    })?;
    reader.set_format(format.into());

    let img = reader.decode().map_err(|e| {
        AnalysisError::image_load(format!("Failed to decode image: {}", path.display()), e)
    })?;

    Ok(img.to_rgb8())
}

/// Decode an in-memory image, sniffing the format from its magic bytes
pub fn decode_bytes(bytes: &[u8]) -> Result<RgbImage> {
    if bytes.is_empty() {
        return Err(AnalysisError::ImageLoadError {
            message: "Image data is empty".into(),
            source: None,
        });
    }

    let reader = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| AnalysisError::image_load("Failed to read image header", e))?;

    let img = reader
        .decode()
        .map_err(|e| AnalysisError::image_load("Failed to decode image data", e))?;

    Ok(img.to_rgb8())
}

/// Get list of all supported file extensions
pub fn supported_extensions() -> &'static [&'static str] {
    &["png", "jpg", "jpeg", "gif", "webp", "bmp"]
}

/// Check if a file extension is supported
pub fn is_supported_extension(ext: &str) -> bool {
    let ext_lower = ext.to_lowercase();
    supported_extensions().contains(&ext_lower.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbaImage};

    fn encode_png(img: &RgbaImage) -> Vec<u8> {
        let mut buf = Vec::new();
        img.write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
            .unwrap();
        buf
    }

    #[test]
    fn test_format_detection() {
        assert_eq!(
            ImageFormat::from_extension(Path::new("fr.png")),
            Some(ImageFormat::Png)
        );
        assert_eq!(
            ImageFormat::from_extension(Path::new("fr.JPEG")),
            Some(ImageFormat::Jpeg)
        );
        assert_eq!(
            ImageFormat::from_extension(Path::new("fr.webp")),
            Some(ImageFormat::WebP)
        );
        assert_eq!(ImageFormat::from_extension(Path::new("fr.xyz")), None);
        assert_eq!(ImageFormat::from_extension(Path::new("fr")), None);
    }

    #[test]
    fn test_supported_extensions() {
        assert!(is_supported_extension("png"));
        assert!(is_supported_extension("PNG"));
        assert!(is_supported_extension("jpg"));
        assert!(!is_supported_extension("heic"));
        assert!(!is_supported_extension("doc"));
    }

    #[test]
    fn test_decode_bytes_drops_alpha() {
        let mut rgba = RgbaImage::new(2, 1);
        rgba.put_pixel(0, 0, image::Rgba([255, 0, 0, 255]));
        rgba.put_pixel(1, 0, image::Rgba([0, 0, 255, 0]));

        let rgb = decode_bytes(&encode_png(&rgba)).unwrap();
        assert_eq!(rgb.dimensions(), (2, 1));
        assert_eq!(*rgb.get_pixel(0, 0), Rgb([255, 0, 0]));
        assert_eq!(*rgb.get_pixel(1, 0), Rgb([0, 0, 255]));
    }

    #[test]
    fn test_decode_bytes_rejects_garbage() {
        assert!(matches!(
            decode_bytes(b"<html>not found</html>"),
            Err(AnalysisError::ImageLoadError { .. })
        ));
        assert!(decode_bytes(&[]).is_err());
    }

    #[test]
    fn test_load_image_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("flag.png");
        let img = RgbImage::from_pixel(4, 3, Rgb([0, 85, 164]));
        img.save(&path).unwrap();

        let loaded = load_image(&path).unwrap();
        assert_eq!(loaded, img);
    }

    #[test]
    fn test_load_image_missing_file() {
        let err = load_image(Path::new("definitely_missing.png")).unwrap_err();
        assert!(matches!(err, AnalysisError::ImageLoadError { .. }));
    }
}
