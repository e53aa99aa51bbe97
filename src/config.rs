use anyhow::{Context, Result, bail};
use image::codecs::png::CompressionType;
use image::imageops::FilterType;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::constants::encoding::DEFAULT_JPEG_QUALITY;

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub icons: IconConfig,
    #[serde(default)]
    pub splash: SplashConfig,
}

/// Resampling filters allowed for asset generation. Nearest-neighbour is not
/// selectable.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ResampleFilter {
    Lanczos3,
    CatmullRom,
    Gaussian,
    Triangle,
}

impl ResampleFilter {
    pub fn filter_type(self) -> FilterType {
        match self {
            ResampleFilter::Lanczos3 => FilterType::Lanczos3,
            ResampleFilter::CatmullRom => FilterType::CatmullRom,
            ResampleFilter::Gaussian => FilterType::Gaussian,
            ResampleFilter::Triangle => FilterType::Triangle,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PngCompression {
    Best,
    Default,
    Fast,
}

impl PngCompression {
    pub fn compression_type(self) -> CompressionType {
        match self {
            PngCompression::Best => CompressionType::Best,
            PngCompression::Default => CompressionType::Default,
            PngCompression::Fast => CompressionType::Fast,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct IconConfig {
    #[serde(default = "default_filter")]
    pub resample_filter: ResampleFilter,
    #[serde(default = "default_png_compression")]
    pub png_compression: PngCompression,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct SplashConfig {
    #[serde(default = "default_filter")]
    pub resample_filter: ResampleFilter,
    #[serde(default = "default_jpeg_quality")]
    pub jpeg_quality: u8,
}

fn default_filter() -> ResampleFilter {
    ResampleFilter::Lanczos3
}

fn default_png_compression() -> PngCompression {
    PngCompression::Best
}

fn default_jpeg_quality() -> u8 {
    DEFAULT_JPEG_QUALITY
}

impl Default for IconConfig {
    fn default() -> Self {
        IconConfig {
            resample_filter: default_filter(),
            png_compression: default_png_compression(),
        }
    }
}

impl Default for SplashConfig {
    fn default() -> Self {
        SplashConfig {
            resample_filter: default_filter(),
            jpeg_quality: default_jpeg_quality(),
        }
    }
}

impl Config {
    /// Load the config at `path`, falling back to defaults when the file is absent.
    ///
    /// Nothing is written here: a run with a missing logo must leave the
    /// project untouched.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!("No config at {}, using defaults", path.display());
            return Ok(Config::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config = Self::from_yaml(&contents)
            .with_context(|| format!("Failed to load config file {}", path.display()))?;

        Ok(config)
    }

    pub fn from_yaml(contents: &str) -> Result<Self> {
        // An empty file deserializes to `null`, treat it as all defaults
        if contents.trim().is_empty() {
            return Ok(Config::default());
        }

        let config: Config = serde_yaml::from_str(contents)
            .context("Failed to parse config file")?;
        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.splash.jpeg_quality == 0 {
            bail!("splash.jpeg_quality must be greater than 0");
        }
        if self.splash.jpeg_quality > 100 {
            bail!("splash.jpeg_quality must be <= 100");
        }

        Ok(())
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)
                .context("Failed to create config directory")?;
        }

        let yaml = serde_yaml::to_string(self)
            .context("Failed to serialize config")?;

        fs::write(path, yaml)
            .context("Failed to write config file")?;

        Ok(())
    }
}
