use image::imageops::{self, FilterType};
use image::{DynamicImage, RgbImage, RgbaImage};
use std::borrow::Cow;

use crate::compose::{contain_fit, paste_centered};
use crate::constants::color::WHITE_RGBA;

/// Render a `width x height` splash screen: the logo contain-fit into a
/// `logo_size` box and centered on opaque white. A zero `logo_size` leaves the
/// canvas blank.
pub fn render_splash(
    logo: &RgbaImage,
    width: u32,
    height: u32,
    logo_size: u32,
    filter: FilterType,
) -> RgbImage {
    let mut canvas = RgbaImage::from_pixel(width, height, WHITE_RGBA);

    let (logo_width, logo_height) = contain_fit(logo.width(), logo.height(), logo_size);
    if logo_width == 0 || logo_height == 0 {
        return DynamicImage::ImageRgba8(canvas).into_rgb8();
    }

    let fitted = if (logo_width, logo_height) == logo.dimensions() {
        Cow::Borrowed(logo)
    } else {
        Cow::Owned(imageops::resize(logo, logo_width, logo_height, filter))
    };
    paste_centered(&mut canvas, &fitted);

    DynamicImage::ImageRgba8(canvas).into_rgb8()
}
