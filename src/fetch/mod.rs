//! Flag image retrieval
//!
//! A [`FlagSource`] turns a resolved [`Country`] into an RGB image. The
//! network source talks to a flag CDN; the file source reads the same
//! `<code>.png` layout from disk.

mod cdn;
mod file;

pub use cdn::FlagCdnSource;
pub use file::FileFlagSource;

use crate::country::{self, Country};
use crate::Result;
use image::RgbImage;
use tracing::info;

/// Provider of flag images
pub trait FlagSource {
    fn fetch(&self, country: &Country) -> Result<RgbImage>;
}

impl<S: FlagSource + ?Sized> FlagSource for &S {
    fn fetch(&self, country: &Country) -> Result<RgbImage> {
        (**self).fetch(country)
    }
}

impl<S: FlagSource + ?Sized> FlagSource for Box<S> {
    fn fetch(&self, country: &Country) -> Result<RgbImage> {
        (**self).fetch(country)
    }
}

/// Resolve a country name and fetch its flag
///
/// # Errors
///
/// `CountryNotFound` for unknown names; otherwise whatever the source
/// reports (transport, HTTP status, decoding).
pub fn get_flag_image<S: FlagSource>(
    source: &S,
    country_name: &str,
) -> Result<(&'static Country, RgbImage)> {
    let country = country::search_fuzzy(country_name)?;
    let image = source.fetch(country)?;
    info!(
        country = country.name,
        width = image.width(),
        height = image.height(),
        "fetched flag"
    );
    Ok((country, image))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AnalysisError;
    use image::Rgb;
    use std::cell::RefCell;

    struct RecordingSource {
        requested: RefCell<Vec<String>>,
    }

    impl FlagSource for RecordingSource {
        fn fetch(&self, country: &Country) -> Result<RgbImage> {
            self.requested.borrow_mut().push(country.flag_code());
            Ok(RgbImage::from_pixel(4, 2, Rgb([188, 0, 45])))
        }
    }

    #[test]
    fn test_get_flag_image_resolves_name() {
        let source = RecordingSource {
            requested: RefCell::new(Vec::new()),
        };
        let (country, image) = get_flag_image(&source, "japan").unwrap();

        assert_eq!(country.alpha_2, "JP");
        assert_eq!(image.dimensions(), (4, 2));
        assert_eq!(*source.requested.borrow(), vec!["jp".to_string()]);
    }

    #[test]
    fn test_unknown_country_skips_fetch() {
        let source = RecordingSource {
            requested: RefCell::new(Vec::new()),
        };
        assert!(matches!(
            get_flag_image(&source, "Narnia"),
            Err(AnalysisError::CountryNotFound { .. })
        ));
        assert!(source.requested.borrow().is_empty());
    }
}
