use crate::color::ColorResult;
use crate::constants::render::{SWATCH_HEIGHT, SWATCH_WIDTH};
use image::{Rgb, RgbImage};

/// Blended color swatch at the default 300x100 size
pub fn render_blended_color(blended: &ColorResult) -> RgbImage {
    render_blended_color_sized(blended, SWATCH_WIDTH, SWATCH_HEIGHT)
}

pub fn render_blended_color_sized(blended: &ColorResult, width: u32, height: u32) -> RgbImage {
    RgbImage::from_pixel(width, height, Rgb(blended.rgb))
}
