//! Color analysis, blending and conversion
//!
//! This module clusters flag pixels into dominant colors, blends them into
//! a single representative color and converts between color forms.

pub mod analysis;
pub mod blend;
pub mod conversion;

pub use analysis::{analyze_flag_color, ColorAnalyzer, ColorPalette, DominantColor};
pub use blend::{blend_colors, blend_palette, ColorResult};
pub use conversion::ColorConverter;
