// Canvas geometry and compositing shared by the icon and splash renderers

use image::{imageops, DynamicImage, RgbImage, RgbaImage};

use crate::constants::color::WHITE_RGBA;

/// Top-left offset that centers `inner` inside `canvas` along one axis.
///
/// Floor division: an odd difference leaves the extra pixel on the far side.
/// Negative when `inner` is larger than `canvas`.
pub fn center_offset(canvas: u32, inner: u32) -> i64 {
    (canvas as i64 - inner as i64).div_euclid(2)
}

/// Dimensions of `(width, height)` scaled down to fit inside a `bound x bound`
/// box while keeping the aspect ratio. Images that already fit are left alone.
/// An empty box yields `(0, 0)`.
pub fn contain_fit(width: u32, height: u32, bound: u32) -> (u32, u32) {
    if bound == 0 {
        return (0, 0);
    }
    if width <= bound && height <= bound {
        return (width, height);
    }

    let scaled = |long: u32, short: u32| -> u32 {
        let value = (short as f64 * bound as f64 / long as f64).round() as u32;
        value.clamp(1, bound)
    };

    if width >= height {
        (bound, scaled(width, height))
    } else {
        (scaled(height, width), bound)
    }
}

/// Composite `image` over an opaque white canvas of the same size, using its
/// alpha as the blend mask, and drop the alpha channel.
pub fn flatten_on_white(image: &RgbaImage) -> RgbImage {
    let (width, height) = image.dimensions();
    let mut canvas = RgbaImage::from_pixel(width, height, WHITE_RGBA);
    imageops::overlay(&mut canvas, image, 0, 0);
    DynamicImage::ImageRgba8(canvas).into_rgb8()
}

/// Paste `logo` centered on `canvas`, blending with the logo's alpha.
pub fn paste_centered(canvas: &mut RgbaImage, logo: &RgbaImage) {
    let x = center_offset(canvas.width(), logo.width());
    let y = center_offset(canvas.height(), logo.height());
    imageops::overlay(canvas, logo, x, y);
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn test_center_offset() {
        assert_eq!(center_offset(432, 288), 72);
        assert_eq!(center_offset(320, 120), 100);
        // Odd difference rounds toward the top-left
        assert_eq!(center_offset(11, 4), 3);
        assert_eq!(center_offset(100, 100), 0);
        // Floor, not truncation, when the inner image overflows
        assert_eq!(center_offset(10, 13), -2);
    }

    #[test]
    fn test_contain_fit_square() {
        assert_eq!(contain_fit(1024, 1024, 120), (120, 120));
    }

    #[test]
    fn test_contain_fit_keeps_aspect_ratio() {
        assert_eq!(contain_fit(1000, 500, 400), (400, 200));
        assert_eq!(contain_fit(500, 1000, 400), (200, 400));
        assert_eq!(contain_fit(1000, 333, 120), (120, 40));
    }

    #[test]
    fn test_contain_fit_never_enlarges() {
        assert_eq!(contain_fit(64, 32, 540), (64, 32));
        assert_eq!(contain_fit(540, 100, 540), (540, 100));
    }

    #[test]
    fn test_contain_fit_extreme_aspect_keeps_one_pixel() {
        assert_eq!(contain_fit(5000, 2, 100), (100, 1));
    }

    #[test]
    fn test_contain_fit_empty_box() {
        assert_eq!(contain_fit(10, 10, 0), (0, 0));
        assert_eq!(contain_fit(0, 0, 0), (0, 0));
    }

    #[test]
    fn test_flatten_on_white() {
        let mut image = RgbaImage::from_pixel(2, 1, Rgba([0, 0, 0, 0]));
        image.put_pixel(1, 0, Rgba([0, 0, 255, 255]));

        let flat = flatten_on_white(&image);
        assert_eq!(flat.get_pixel(0, 0).0, [255, 255, 255]);
        assert_eq!(flat.get_pixel(1, 0).0, [0, 0, 255]);
    }

    #[test]
    fn test_flatten_half_transparent_blends_toward_white() {
        let image = RgbaImage::from_pixel(1, 1, Rgba([0, 0, 0, 128]));
        let flat = flatten_on_white(&image);
        let [r, g, b] = flat.get_pixel(0, 0).0;
        assert!((120..=135).contains(&r), "r = {}", r);
        assert_eq!(r, g);
        assert_eq!(g, b);
    }

    #[test]
    fn test_paste_centered() {
        let mut canvas = RgbaImage::from_pixel(5, 4, Rgba([0, 0, 0, 0]));
        let logo = RgbaImage::from_pixel(2, 2, Rgba([255, 0, 0, 255]));
        paste_centered(&mut canvas, &logo);

        // x offset (5 - 2) // 2 = 1, y offset (4 - 2) // 2 = 1
        assert_eq!(canvas.get_pixel(1, 1).0, [255, 0, 0, 255]);
        assert_eq!(canvas.get_pixel(2, 2).0, [255, 0, 0, 255]);
        assert_eq!(canvas.get_pixel(0, 0).0[3], 0);
        assert_eq!(canvas.get_pixel(3, 1).0[3], 0);
    }
}
