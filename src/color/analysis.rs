//! Dominant color extraction
//!
//! A flag is resampled to a fixed grid, its pixels are clustered with
//! k-means in sRGB space, and each cluster becomes a [`DominantColor`]
//! weighted by the share of pixels assigned to it.
//!
//! The result is deterministic for a given image and seed.

use crate::color::ColorConverter;
use crate::config::AnalysisConfig;
use crate::{AnalysisError, Result};
use image::{imageops, RgbImage};
use kmeans_colors::{get_kmeans, Kmeans};
use palette::Srgb;
use serde::Serialize;
use std::collections::HashSet;
use tracing::debug;

/// One cluster of the palette
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DominantColor {
    /// Cluster center, 8-bit
    pub rgb: [u8; 3],
    /// Cluster center as `#RRGGBB`
    pub hex: String,
    /// Cluster center, floating-point sRGB
    #[serde(skip)]
    pub srgb: Srgb,
    /// Share of pixels in this cluster (0.0-1.0)
    pub proportion: f64,
}

/// Dominant colors sorted by descending proportion
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ColorPalette {
    colors: Vec<DominantColor>,
}

impl ColorPalette {
    /// Build a palette from parallel center/proportion lists, sorting it
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the lists differ in length or are empty.
    pub fn new(centers: &[Srgb], proportions: &[f64]) -> Result<Self> {
        if centers.len() != proportions.len() {
            return Err(AnalysisError::invalid(
                "proportions",
                format!("{} values for {} colors", proportions.len(), centers.len()),
            ));
        }
        if centers.is_empty() {
            return Err(AnalysisError::invalid("colors", "empty palette"));
        }

        let converter = ColorConverter::new();
        let mut colors: Vec<DominantColor> = centers
            .iter()
            .zip(proportions)
            .map(|(&srgb, &proportion)| {
                let rgb = converter.srgb_to_rgb(srgb);
                DominantColor {
                    rgb,
                    hex: converter.rgb_to_hex(rgb),
                    srgb,
                    proportion,
                }
            })
            .collect();

        // stable: equal shares keep cluster order
        colors.sort_by(|a, b| b.proportion.total_cmp(&a.proportion));

        Ok(Self { colors })
    }

    pub fn colors(&self) -> &[DominantColor] {
        &self.colors
    }

    pub fn centers(&self) -> Vec<Srgb> {
        self.colors.iter().map(|c| c.srgb).collect()
    }

    pub fn proportions(&self) -> Vec<f64> {
        self.colors.iter().map(|c| c.proportion).collect()
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Color with the largest share
    pub fn dominant(&self) -> Option<&DominantColor> {
        self.colors.first()
    }
}

/// k-means color analyzer
#[derive(Debug, Clone)]
pub struct ColorAnalyzer {
    config: AnalysisConfig,
}

impl Default for ColorAnalyzer {
    fn default() -> Self {
        Self::new(crate::PipelineConfig::default().analysis)
    }
}

impl ColorAnalyzer {
    pub fn new(config: AnalysisConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Extract the dominant colors of an image
    ///
    /// # Errors
    ///
    /// Returns `AnalysisError` if:
    /// - the cluster count or resize target is invalid
    /// - the image is empty
    /// - clustering yields no populated cluster
    pub fn analyze(&self, image: &RgbImage) -> Result<ColorPalette> {
        self.validate()?;
        if image.width() == 0 || image.height() == 0 {
            return Err(AnalysisError::invalid(
                "image",
                format!("{}x{}", image.width(), image.height()),
            ));
        }

        let resized = self.resize(image);
        let pixels = self.extract_pixels(&resized);
        let k = self.effective_clusters(&pixels);

        let kmeans = self.cluster(&pixels, k)?;
        let palette = populated_clusters(&kmeans)?;
        debug!(
            clusters = palette.len(),
            score = kmeans.score,
            "clustered {} pixels",
            pixels.len()
        );
        Ok(palette)
    }

    fn validate(&self) -> Result<()> {
        self.config.validate()
    }

    /// Resample to exactly the configured grid, ignoring aspect ratio
    fn resize(&self, image: &RgbImage) -> RgbImage {
        let (w, h) = (self.config.resize_width, self.config.resize_height);
        if image.dimensions() == (w, h) {
            return image.clone();
        }
        imageops::resize(image, w, h, self.config.filter.into())
    }

    fn extract_pixels(&self, image: &RgbImage) -> Vec<Srgb> {
        image
            .pixels()
            .map(|p| Srgb::new(p[0], p[1], p[2]).into_format())
            .collect()
    }

    /// Never ask for more clusters than there are distinct colors
    fn effective_clusters(&self, pixels: &[Srgb]) -> usize {
        let mut distinct: HashSet<[u32; 3]> = HashSet::new();
        for p in pixels {
            distinct.insert([p.red.to_bits(), p.green.to_bits(), p.blue.to_bits()]);
            if distinct.len() >= self.config.n_colors {
                return self.config.n_colors;
            }
        }
        debug!(
            requested = self.config.n_colors,
            distinct = distinct.len(),
            "fewer distinct colors than clusters"
        );
        distinct.len()
    }

    /// Run k-means `runs` times with consecutive seeds and keep the best
    fn cluster(&self, pixels: &[Srgb], k: usize) -> Result<Kmeans<Srgb>> {
        let c = &self.config;
        let mut best: Option<Kmeans<Srgb>> = None;

        for run in 0..c.runs {
            let seed = c.seed.wrapping_add(run as u64);
            let result = get_kmeans(k, c.max_iterations, c.convergence, false, pixels, seed);
            debug!(run, seed, score = result.score, "k-means run finished");

            let better = best.as_ref().map_or(true, |b| result.score < b.score);
            if better {
                best = Some(result);
            }
        }

        best.ok_or_else(|| AnalysisError::ClusteringError {
            reason: "no k-means run completed".into(),
        })
    }
}

/// Palette of the clusters that received at least one pixel
///
/// Each share is `count / total` over all assigned pixels, so the shares of
/// the kept clusters still sum to 1.
fn populated_clusters(kmeans: &Kmeans<Srgb>) -> Result<ColorPalette> {
    let mut counts = vec![0usize; kmeans.centroids.len()];
    for &index in &kmeans.indices {
        if let Some(count) = counts.get_mut(index as usize) {
            *count += 1;
        }
    }
    let total: usize = counts.iter().sum();

    let (centers, shares): (Vec<Srgb>, Vec<f64>) = kmeans
        .centroids
        .iter()
        .zip(&counts)
        .filter(|(_, &count)| count > 0)
        .map(|(&center, &count)| (center, count as f64 / total as f64))
        .unzip();

    if centers.is_empty() {
        return Err(AnalysisError::ClusteringError {
            reason: "no cluster received any pixel".into(),
        });
    }

    ColorPalette::new(&centers, &shares)
}

/// Cluster an image's colors with the default seed and iteration limits
///
/// Equivalent to building a [`ColorAnalyzer`] with `n_colors` clusters and a
/// `resize_to` grid.
pub fn analyze_flag_color(
    image: &RgbImage,
    n_colors: usize,
    resize_to: (u32, u32),
) -> Result<ColorPalette> {
    let mut config = crate::PipelineConfig::default().analysis;
    config.n_colors = n_colors;
    config.resize_width = resize_to.0;
    config.resize_height = resize_to.1;
    ColorAnalyzer::new(config).analyze(image)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ResizeFilter;
    use image::Rgb;

    const BLUE: [u8; 3] = [0, 85, 164];
    const WHITE: [u8; 3] = [255, 255, 255];
    const RED: [u8; 3] = [239, 65, 53];

    fn tricolor(width: u32, height: u32) -> RgbImage {
        RgbImage::from_fn(width, height, |x, _| {
            let band = x * 3 / width;
            Rgb(match band {
                0 => BLUE,
                1 => WHITE,
                _ => RED,
            })
        })
    }

    fn nearest_analyzer(n_colors: usize) -> ColorAnalyzer {
        let mut config = crate::PipelineConfig::default().analysis;
        config.n_colors = n_colors;
        config.filter = ResizeFilter::Nearest;
        ColorAnalyzer::new(config)
    }

    #[test]
    fn test_tricolor_exact_colors() {
        let palette = nearest_analyzer(3).analyze(&tricolor(30, 20)).unwrap();

        assert_eq!(palette.len(), 3);
        let mut found: Vec<[u8; 3]> = palette.colors().iter().map(|c| c.rgb).collect();
        found.sort();
        let mut expected = vec![BLUE, WHITE, RED];
        expected.sort();
        assert_eq!(found, expected);

        for color in palette.colors() {
            assert!((color.proportion - 1.0 / 3.0).abs() < 0.02);
        }
    }

    #[test]
    fn test_proportions_sum_to_one_and_sorted() {
        let img = RgbImage::from_fn(40, 40, |x, y| {
            Rgb([(x * 6) as u8, (y * 6) as u8, ((x + y) * 3) as u8])
        });
        let palette = analyze_flag_color(&img, 5, (100, 100)).unwrap();

        let sum: f64 = palette.proportions().iter().sum();
        assert!((sum - 1.0).abs() < 1e-4);
        let props = palette.proportions();
        assert!(props.windows(2).all(|w| w[0] >= w[1]));
        assert!(props.iter().all(|&p| p > 0.0));
    }

    #[test]
    fn test_fewer_colors_than_clusters() {
        let img = RgbImage::from_fn(60, 40, |_, y| {
            Rgb(if y < 30 { WHITE } else { RED })
        });
        let palette = nearest_analyzer(5).analyze(&img).unwrap();

        assert_eq!(palette.len(), 2);
        let dominant = palette.dominant().unwrap();
        assert_eq!(dominant.rgb, WHITE);
        assert!((dominant.proportion - 0.75).abs() < 0.02);
    }

    #[test]
    fn test_deterministic() {
        let img = RgbImage::from_fn(50, 30, |x, y| Rgb([(x * 5) as u8, (y * 8) as u8, 90]));
        let analyzer = ColorAnalyzer::default();
        assert_eq!(analyzer.analyze(&img).unwrap(), analyzer.analyze(&img).unwrap());
    }

    #[test]
    fn test_single_color_image() {
        let img = RgbImage::from_pixel(10, 10, Rgb(BLUE));
        let palette = ColorAnalyzer::default().analyze(&img).unwrap();
        assert_eq!(palette.len(), 1);
        assert_eq!(palette.colors()[0].rgb, BLUE);
        assert!((palette.colors()[0].proportion - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_invalid_parameters() {
        let img = tricolor(30, 20);
        assert!(matches!(
            analyze_flag_color(&img, 0, (100, 100)),
            Err(AnalysisError::InvalidParameter { .. })
        ));
        assert!(analyze_flag_color(&img, 256, (100, 100)).is_err());
        assert!(analyze_flag_color(&img, 5, (0, 100)).is_err());
        assert!(analyze_flag_color(&img, 5, (2, 2)).is_err());
        assert!(analyze_flag_color(&RgbImage::new(0, 0), 5, (100, 100)).is_err());
    }

    #[test]
    fn test_analyzer_applies_config_checks() {
        let mut config = crate::PipelineConfig::default().analysis;
        config.max_iterations = 0;
        assert!(matches!(
            ColorAnalyzer::new(config).analyze(&tricolor(30, 20)),
            Err(AnalysisError::InvalidParameter { .. })
        ));
    }

    #[test]
    fn test_palette_sorting_is_stable() {
        let centers = [
            Srgb::new(1.0, 0.0, 0.0),
            Srgb::new(0.0, 1.0, 0.0),
            Srgb::new(0.0, 0.0, 1.0),
        ];
        let palette = ColorPalette::new(&centers, &[0.25, 0.5, 0.25]).unwrap();
        let order: Vec<[u8; 3]> = palette.colors().iter().map(|c| c.rgb).collect();
        assert_eq!(order, vec![[0, 255, 0], [255, 0, 0], [0, 0, 255]]);
        assert_eq!(palette.colors()[0].hex, "#00FF00");
    }

    #[test]
    fn test_empty_clusters_are_dropped() {
        let kmeans = Kmeans {
            score: 0.0,
            centroids: vec![
                Srgb::new(1.0, 1.0, 1.0),
                Srgb::new(0.5, 0.5, 0.5),
                Srgb::new(1.0, 0.0, 0.0),
            ],
            indices: vec![0, 0, 0, 2],
        };
        let palette = populated_clusters(&kmeans).unwrap();

        assert_eq!(palette.len(), 2);
        assert_eq!(palette.proportions(), vec![0.75, 0.25]);
        assert!(palette.colors().iter().all(|c| c.rgb != [127, 127, 127]));
        let sum: f64 = palette.proportions().iter().sum();
        assert!((sum - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_all_clusters_empty() {
        let kmeans = Kmeans {
            score: 0.0,
            centroids: vec![Srgb::new(0.0, 0.0, 0.0)],
            indices: Vec::new(),
        };
        assert!(matches!(
            populated_clusters(&kmeans),
            Err(AnalysisError::ClusteringError { .. })
        ));
    }

    #[test]
    fn test_shares_are_exact_pixel_fractions() {
        // 2100 of 10000 pixels; an f32 share would floor to 62 bar columns
        let img = RgbImage::from_fn(100, 100, |x, y| {
            Rgb(if y * 100 + x < 2100 { RED } else { WHITE })
        });
        let palette = nearest_analyzer(2).analyze(&img).unwrap();

        assert_eq!(palette.proportions(), vec![0.79, 0.21]);
        let bar = crate::render::render_color_bar(&palette);
        assert_eq!(*bar.get_pixel(236, 0), Rgb(WHITE));
        assert_eq!(*bar.get_pixel(237, 0), Rgb(RED));
        assert_eq!(*bar.get_pixel(299, 0), Rgb(RED));
    }

    #[test]
    fn test_palette_length_mismatch() {
        let centers = [Srgb::new(1.0, 0.0, 0.0)];
        assert!(ColorPalette::new(&centers, &[0.5, 0.5]).is_err());
        assert!(ColorPalette::new(&[], &[]).is_err());
    }
}
