//! Weighted color blending
//!
//! The representative color of a flag is the proportion-weighted average of
//! its cluster centers, computed per channel in sRGB and truncated to 8 bits.

use crate::color::{ColorConverter, ColorPalette};
use crate::{AnalysisError, Result};
use palette::{Lab, Lch, Srgb};
use serde::{Deserialize, Serialize};

/// Blended color with display and perceptual representations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorResult {
    /// 8-bit RGB, as drawn in the swatch
    pub rgb: [u8; 3],
    /// Floating-point sRGB before quantization
    pub srgb: Srgb,
    /// Hexadecimal color representation
    pub hex: String,
    /// CIE Lab coordinates (D65)
    pub lab: Lab,
    /// CIE LCh coordinates (cylindrical Lab representation)
    pub lch: Lch,
}

impl ColorResult {
    pub fn from_srgb(srgb: Srgb) -> Self {
        let converter = ColorConverter::new();
        let rgb = converter.srgb_to_rgb(srgb);
        let lab = converter.srgb_to_lab(srgb);
        Self {
            rgb,
            srgb,
            hex: converter.rgb_to_hex(rgb),
            lab,
            lch: converter.lab_to_lch(lab),
        }
    }
}

/// Dot product of the proportion vector with the color matrix
///
/// Proportions are used as given; they are not renormalized.
///
/// # Errors
///
/// Returns `InvalidParameter` when the inputs are empty or differ in length.
pub fn blend_colors(colors: &[Srgb], proportions: &[f64]) -> Result<ColorResult> {
    if colors.is_empty() {
        return Err(AnalysisError::invalid("colors", "empty palette"));
    }
    if colors.len() != proportions.len() {
        return Err(AnalysisError::invalid(
            "proportions",
            format!("{} values for {} colors", proportions.len(), colors.len()),
        ));
    }

    let (red, green, blue) = colors.iter().zip(proportions).fold(
        (0.0f64, 0.0f64, 0.0f64),
        |(r, g, b), (c, &w)| {
            (
                r + w * f64::from(c.red),
                g + w * f64::from(c.green),
                b + w * f64::from(c.blue),
            )
        },
    );

    Ok(ColorResult::from_srgb(Srgb::new(
        red as f32,
        green as f32,
        blue as f32,
    )))
}

/// Blend a whole palette
pub fn blend_palette(palette: &ColorPalette) -> Result<ColorResult> {
    blend_colors(&palette.centers(), &palette.proportions())
}
