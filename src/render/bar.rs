use crate::color::ColorPalette;
use crate::constants::render::{BAR_HEIGHT, BAR_WIDTH};
use image::{Rgb, RgbImage};

/// Proportional color bar at the default 300x50 size
pub fn render_color_bar(palette: &ColorPalette) -> RgbImage {
    render_color_bar_sized(palette, BAR_WIDTH, BAR_HEIGHT)
}

/// Proportional color bar
///
/// Segments run left to right in palette order, each `floor(share * width)`
/// columns wide. Columns lost to truncation on the right stay black.
pub fn render_color_bar_sized(palette: &ColorPalette, width: u32, height: u32) -> RgbImage {
    let mut bar = RgbImage::new(width, height);

    let mut start = 0u32;
    for color in palette.colors() {
        let span = (color.proportion.max(0.0) * f64::from(width)) as u32;
        let end = start.saturating_add(span).min(width);
        for x in start..end {
            for y in 0..height {
                bar.put_pixel(x, y, Rgb(color.rgb));
            }
        }
        start = end;
    }

    bar
}

#[cfg(test)]
mod tests {
    use super::*;
    use palette::Srgb;

    fn palette(shares: &[f64]) -> ColorPalette {
        let centers = [
            Srgb::new(1.0, 0.0, 0.0),
            Srgb::new(0.0, 1.0, 0.0),
            Srgb::new(0.0, 0.0, 1.0),
        ];
        ColorPalette::new(&centers[..shares.len()], shares).unwrap()
    }

    #[test]
    fn test_default_dimensions() {
        let bar = render_color_bar(&palette(&[1.0]));
        assert_eq!(bar.dimensions(), (300, 50));
        assert!(bar.pixels().all(|p| *p == Rgb([255, 0, 0])));
    }

    #[test]
    fn test_segments_follow_shares() {
        let bar = render_color_bar(&palette(&[0.5, 0.3, 0.2]));

        // 150 red, 90 green, 60 blue
        assert_eq!(*bar.get_pixel(0, 0), Rgb([255, 0, 0]));
        assert_eq!(*bar.get_pixel(149, 49), Rgb([255, 0, 0]));
        assert_eq!(*bar.get_pixel(150, 0), Rgb([0, 255, 0]));
        assert_eq!(*bar.get_pixel(239, 0), Rgb([0, 255, 0]));
        assert_eq!(*bar.get_pixel(240, 0), Rgb([0, 0, 255]));
        assert_eq!(*bar.get_pixel(299, 25), Rgb([0, 0, 255]));
    }

    #[test]
    fn test_segment_width_from_exact_share() {
        // 2100 of 10000 pixels: floor(0.21 * 300) = 63
        let bar = render_color_bar(&palette(&[7900.0 / 10000.0, 2100.0 / 10000.0]));
        assert_eq!(*bar.get_pixel(236, 0), Rgb([255, 0, 0]));
        assert_eq!(*bar.get_pixel(237, 0), Rgb([0, 255, 0]));
        assert_eq!(*bar.get_pixel(299, 0), Rgb([0, 255, 0]));
    }

    #[test]
    fn test_truncation_leaves_black_tail() {
        let third = 1.0 / 3.0;
        let bar = render_color_bar_sized(&palette(&[third, third, third]), 10, 2);

        // floor(10/3) = 3 columns each, one column left over
        assert_eq!(*bar.get_pixel(2, 0), Rgb([255, 0, 0]));
        assert_eq!(*bar.get_pixel(3, 0), Rgb([0, 255, 0]));
        assert_eq!(*bar.get_pixel(8, 1), Rgb([0, 0, 255]));
        assert_eq!(*bar.get_pixel(9, 0), Rgb([0, 0, 0]));
    }

    #[test]
    fn test_overfull_shares_are_clipped() {
        let bar = render_color_bar_sized(&palette(&[0.8, 0.8]), 10, 1);
        assert_eq!(*bar.get_pixel(7, 0), Rgb([255, 0, 0]));
        assert_eq!(*bar.get_pixel(8, 0), Rgb([0, 255, 0]));
        assert_eq!(*bar.get_pixel(9, 0), Rgb([0, 255, 0]));
    }
}
