use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::{self, CompressionType, PngEncoder};
use image::{DynamicImage, ImageEncoder, ImageResult, RgbImage};
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

use crate::error::AssetError;

/// Encode as PNG, keeping whatever color type `image` carries.
pub fn encode_png(image: &DynamicImage, compression: CompressionType) -> ImageResult<Vec<u8>> {
    let mut bytes = Vec::new();
    let encoder = PngEncoder::new_with_quality(&mut bytes, compression, png::FilterType::Adaptive);
    encoder.write_image(
        image.as_bytes(),
        image.width(),
        image.height(),
        image.color().into(),
    )?;
    Ok(bytes)
}

pub fn encode_jpeg(image: &RgbImage, quality: u8) -> ImageResult<Vec<u8>> {
    let mut bytes = Vec::new();
    let encoder = JpegEncoder::new_with_quality(&mut bytes, quality);
    encoder.write_image(
        image.as_raw(),
        image.width(),
        image.height(),
        image::ExtendedColorType::Rgb8,
    )?;
    Ok(bytes)
}

/// Write `bytes` to `path` all-or-nothing.
///
/// The data goes to a temp file in the destination directory which is then
/// renamed over `path`, so a failed write never leaves a truncated asset behind.
pub fn write_atomic(path: &Path, bytes: &[u8]) -> Result<(), AssetError> {
    let dir = path.parent().ok_or_else(|| {
        AssetError::write(
            path,
            std::io::Error::new(std::io::ErrorKind::InvalidInput, "path has no parent directory"),
        )
    })?;

    fs::create_dir_all(dir).map_err(|e| AssetError::write(path, e))?;

    let mut tmp = NamedTempFile::new_in(dir).map_err(|e| AssetError::write(path, e))?;
    tmp.write_all(bytes).map_err(|e| AssetError::write(path, e))?;
    tmp.as_file().sync_all().map_err(|e| AssetError::write(path, e))?;

    // Temp files are created 0600
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        tmp.as_file()
            .set_permissions(fs::Permissions::from_mode(0o644))
            .map_err(|e| AssetError::write(path, e))?;
    }

    tmp.persist(path).map_err(|e| AssetError::write(path, e.error))?;

    log::debug!("Wrote {} bytes to {}", bytes.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, Rgba, RgbaImage};

    #[test]
    fn test_png_round_trip_is_lossless() {
        let mut image = RgbaImage::new(3, 2);
        for (x, y, pixel) in image.enumerate_pixels_mut() {
            *pixel = Rgba([x as u8 * 80, y as u8 * 120, 7, 100 + x as u8]);
        }
        let image = DynamicImage::ImageRgba8(image);

        let bytes = encode_png(&image, CompressionType::Best).unwrap();
        let decoded = image::load_from_memory(&bytes).unwrap();
        assert_eq!(decoded.to_rgba8(), image.to_rgba8());
    }

    #[test]
    fn test_png_keeps_rgb_color_type() {
        let image = DynamicImage::ImageRgb8(RgbImage::from_pixel(4, 4, Rgb([1, 2, 3])));
        let bytes = encode_png(&image, CompressionType::Fast).unwrap();
        let decoded = image::load_from_memory(&bytes).unwrap();
        assert_eq!(decoded.color(), image::ColorType::Rgb8);
    }

    #[test]
    fn test_jpeg_is_decodable() {
        let image = RgbImage::from_pixel(16, 9, Rgb([255, 255, 255]));
        let bytes = encode_jpeg(&image, 85).unwrap();
        assert_eq!(image::guess_format(&bytes).unwrap(), image::ImageFormat::Jpeg);
        let decoded = image::load_from_memory(&bytes).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (16, 9));
    }

    #[test]
    fn test_write_atomic_creates_parents_and_replaces() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a").join("b").join("out.bin");

        write_atomic(&path, b"first").unwrap();
        write_atomic(&path, b"second").unwrap();
        assert_eq!(fs::read(&path).unwrap(), b"second");

        // Only the target remains, no temp files
        let entries: Vec<_> = fs::read_dir(path.parent().unwrap()).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn test_write_atomic_failure_leaves_nothing() {
        let dir = tempfile::tempdir().unwrap();
        // A directory occupies the destination name
        let path = dir.path().join("out.png");
        fs::create_dir(&path).unwrap();

        let err = write_atomic(&path, b"data").unwrap_err();
        assert!(matches!(err, AssetError::Write { .. }));
        assert!(path.is_dir());
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    }
}
