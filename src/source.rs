use image::{DynamicImage, GenericImageView, ImageError, ImageReader, RgbaImage};
use std::path::{Path, PathBuf};

use crate::error::AssetError;

/// The decoded source logo, normalized to RGBA8.
///
/// Every renderer composites with the alpha channel as paste mask, so the
/// conversion happens once here instead of per target.
#[derive(Debug, Clone)]
pub struct SourceImage {
    path: PathBuf,
    pixels: RgbaImage,
}

impl SourceImage {
    pub fn load(path: &Path) -> Result<Self, AssetError> {
        if !path.exists() {
            return Err(AssetError::MissingSourceAsset(path.to_path_buf()));
        }

        let decode_err = |source: ImageError| AssetError::Decode {
            path: path.to_path_buf(),
            source,
        };

        // Sniff the content rather than trusting the extension
        let decoded = ImageReader::open(path)
            .map_err(|e| decode_err(ImageError::IoError(e)))?
            .with_guessed_format()
            .map_err(|e| decode_err(ImageError::IoError(e)))?
            .decode()
            .map_err(decode_err)?;

        let (width, height) = decoded.dimensions();
        log::info!(
            "✅ Using logo: {} ({}x{}, {:?})",
            path.display(),
            width,
            height,
            decoded.color()
        );

        Ok(Self::from_image(path, decoded))
    }

    pub fn from_image(path: impl Into<PathBuf>, image: DynamicImage) -> Self {
        SourceImage {
            path: path.into(),
            pixels: image.into_rgba8(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.pixels.dimensions()
    }
}
