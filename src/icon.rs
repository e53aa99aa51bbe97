use image::imageops::{self, FilterType};
use image::{DynamicImage, RgbImage, RgbaImage};

use crate::compose::{flatten_on_white, paste_centered};
use crate::constants::adaptive::{CANVAS_SIZE, SAFE_AREA_SIZE};
use crate::constants::color::{TRANSPARENT, WHITE_RGB};
use crate::targets::{AdaptiveLayer, ColorMode};

/// Resize the logo to exactly `size x size` and apply the color policy.
///
/// The logo is stretched, not fitted: launcher logos are expected to be square.
pub fn render_icon(logo: &RgbaImage, size: u32, color_mode: ColorMode, filter: FilterType) -> DynamicImage {
    let resized = imageops::resize(logo, size, size, filter);

    match color_mode {
        ColorMode::PreserveAlpha => DynamicImage::ImageRgba8(resized),
        ColorMode::FlattenOnWhite => DynamicImage::ImageRgb8(flatten_on_white(&resized)),
    }
}

pub fn render_adaptive_layer(logo: &RgbaImage, layer: AdaptiveLayer, filter: FilterType) -> DynamicImage {
    match layer {
        AdaptiveLayer::Foreground => {
            let mut canvas = RgbaImage::from_pixel(CANVAS_SIZE, CANVAS_SIZE, TRANSPARENT);
            let inner = imageops::resize(logo, SAFE_AREA_SIZE, SAFE_AREA_SIZE, filter);
            paste_centered(&mut canvas, &inner);
            DynamicImage::ImageRgba8(canvas)
        }
        AdaptiveLayer::Background => {
            DynamicImage::ImageRgb8(RgbImage::from_pixel(CANVAS_SIZE, CANVAS_SIZE, WHITE_RGB))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GenericImageView, Rgba};

    /// Opaque red disc on a transparent square
    fn disc_logo(size: u32) -> RgbaImage {
        let center = size as f32 / 2.0;
        RgbaImage::from_fn(size, size, |x, y| {
            let dx = x as f32 + 0.5 - center;
            let dy = y as f32 + 0.5 - center;
            if (dx * dx + dy * dy).sqrt() < center * 0.8 {
                Rgba([220, 30, 30, 255])
            } else {
                Rgba([0, 0, 0, 0])
            }
        })
    }

    #[test]
    fn test_preserve_alpha_keeps_transparency() {
        let icon = render_icon(&disc_logo(256), 48, ColorMode::PreserveAlpha, FilterType::Lanczos3);
        assert_eq!(icon.dimensions(), (48, 48));
        assert_eq!(icon.color(), image::ColorType::Rgba8);
        assert_eq!(icon.get_pixel(0, 0).0[3], 0);
        assert_eq!(icon.get_pixel(24, 24).0[3], 255);
    }

    #[test]
    fn test_flatten_has_no_alpha_and_white_corners() {
        let icon = render_icon(&disc_logo(256), 87, ColorMode::FlattenOnWhite, FilterType::Lanczos3);
        assert_eq!(icon.dimensions(), (87, 87));
        assert_eq!(icon.color(), image::ColorType::Rgb8);
        assert!(icon.to_rgba8().pixels().all(|p| p.0[3] == 255));

        let corner = icon.to_rgb8().get_pixel(0, 0).0;
        assert_eq!(corner, [255, 255, 255]);
    }

    #[test]
    fn test_non_square_logo_is_stretched_to_square() {
        let logo = RgbaImage::from_pixel(300, 100, Rgba([0, 0, 255, 255]));
        let icon = render_icon(&logo, 60, ColorMode::PreserveAlpha, FilterType::CatmullRom);
        assert_eq!(icon.dimensions(), (60, 60));
        assert!(icon.to_rgba8().pixels().all(|p| p.0[3] == 255));
    }

    #[test]
    fn test_adaptive_background_is_uniform_white() {
        let layer = render_adaptive_layer(&disc_logo(64), AdaptiveLayer::Background, FilterType::Lanczos3);
        assert_eq!(layer.dimensions(), (432, 432));
        assert!(layer.to_rgb8().pixels().all(|p| p.0 == [255, 255, 255]));
    }

    #[test]
    fn test_adaptive_foreground_is_transparent_outside_safe_area() {
        let logo = RgbaImage::from_pixel(512, 512, Rgba([10, 200, 10, 255]));
        let layer = render_adaptive_layer(&logo, AdaptiveLayer::Foreground, FilterType::Lanczos3);
        let rgba = layer.to_rgba8();
        assert_eq!(rgba.dimensions(), (432, 432));

        for (x, y, pixel) in rgba.enumerate_pixels() {
            let inside = (72..360).contains(&x) && (72..360).contains(&y);
            if inside {
                assert_eq!(pixel.0[3], 255, "({}, {})", x, y);
            } else {
                assert_eq!(pixel.0[3], 0, "({}, {})", x, y);
            }
        }
    }
}
