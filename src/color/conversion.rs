//! Color representation conversions
//!
//! Centroids come out of clustering as floating-point sRGB. Everything that
//! leaves the crate (images, hex strings, the JSON report) needs 8-bit or
//! perceptual forms:
//! - sRGB (0..1) ↔ 8-bit RGB
//! - sRGB → hexadecimal `#RRGGBB`
//! - sRGB → CIE Lab / LCh (D65) for reporting
//! - ΔE76 distance between Lab colors

use palette::{FromColor, Lab, Lch, Srgb};

/// Stateless converter between the color forms used in the pipeline
#[derive(Debug, Clone, Copy, Default)]
pub struct ColorConverter;

impl ColorConverter {
    pub fn new() -> Self {
        Self
    }

    /// Convert 8-bit RGB to floating-point sRGB
    pub fn rgb_to_srgb(&self, rgb: [u8; 3]) -> Srgb {
        Srgb::new(rgb[0], rgb[1], rgb[2]).into_format()
    }

    /// Convert sRGB to 8-bit RGB by truncation, clamping out-of-range channels
    ///
    /// A channel that sits within float noise below an integer level (such as
    /// 0.99999994) still maps to that level.
    pub fn srgb_to_rgb(&self, srgb: Srgb) -> [u8; 3] {
        [
            quantize(srgb.red),
            quantize(srgb.green),
            quantize(srgb.blue),
        ]
    }

    /// Convert sRGB to Lab (D65)
    pub fn srgb_to_lab(&self, srgb: Srgb) -> Lab {
        Lab::from_color(srgb)
    }

    /// Convert Lab to LCh (cylindrical representation)
    pub fn lab_to_lch(&self, lab: Lab) -> Lch {
        Lch::from_color(lab)
    }

    /// Format 8-bit RGB as `#RRGGBB`
    pub fn rgb_to_hex(&self, rgb: [u8; 3]) -> String {
        format!("#{:02X}{:02X}{:02X}", rgb[0], rgb[1], rgb[2])
    }

    /// Format sRGB as `#RRGGBB`
    pub fn srgb_to_hex(&self, srgb: Srgb) -> String {
        self.rgb_to_hex(self.srgb_to_rgb(srgb))
    }

    /// Euclidean distance in Lab (ΔE76)
    pub fn delta_e(&self, lab1: Lab, lab2: Lab) -> f32 {
        let dl = lab1.l - lab2.l;
        let da = lab1.a - lab2.a;
        let db = lab1.b - lab2.b;
        (dl * dl + da * da + db * db).sqrt()
    }
}

const QUANTIZE_EPSILON: f32 = 1e-3;

fn quantize(channel: f32) -> u8 {
    let level = (channel.clamp(0.0, 1.0) * 255.0 + QUANTIZE_EPSILON).floor();
    level.min(255.0) as u8
}
