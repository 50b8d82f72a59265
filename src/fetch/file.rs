use super::FlagSource;
use crate::country::Country;
use crate::image_loader::{load_image, supported_extensions};
use crate::{AnalysisError, Result};
use image::RgbImage;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Reads flags from a directory of `<code>.<ext>` files
pub struct FileFlagSource {
    dir: PathBuf,
}

impl FileFlagSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// First existing `<code>.<ext>` in extension priority order
    fn flag_path(&self, country: &Country) -> Option<PathBuf> {
        let code = country.flag_code();
        supported_extensions()
            .iter()
            .map(|ext| self.dir.join(format!("{}.{}", code, ext)))
            .find(|p| p.is_file())
    }
}

impl FlagSource for FileFlagSource {
    fn fetch(&self, country: &Country) -> Result<RgbImage> {
        let path = self.flag_path(country).ok_or_else(|| AnalysisError::FlagFetchError {
            message: format!(
                "No flag for {} in {}",
                country.flag_code(),
                self.dir.display()
            ),
            source: None,
        })?;
        debug!(path = %path.display(), "loading flag from disk");
        load_image(&path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::country::search_fuzzy;
    use image::Rgb;

    #[test]
    fn test_reads_flag_by_code() {
        let dir = tempfile::tempdir().unwrap();
        let flag = RgbImage::from_pixel(6, 4, Rgb([0, 56, 168]));
        flag.save(dir.path().join("fr.png")).unwrap();

        let source = FileFlagSource::new(dir.path());
        let loaded = source.fetch(search_fuzzy("France").unwrap()).unwrap();
        assert_eq!(loaded, flag);
    }

    #[test]
    fn test_missing_flag() {
        let dir = tempfile::tempdir().unwrap();
        let source = FileFlagSource::new(dir.path());
        assert!(matches!(
            source.fetch(search_fuzzy("Japan").unwrap()),
            Err(AnalysisError::FlagFetchError { .. })
        ));
    }
}
