// Static tables describing every generated or copied asset.
// Table order is processing order. Output paths are derived from the entry
// and the ProjectLayout; nothing here is configurable at runtime.

use std::fmt;
use std::path::PathBuf;

use crate::constants::{adaptive, layout};
use crate::error::AssetError;
use crate::layout::ProjectLayout;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Android,
    Ios,
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Platform::Android => f.pad("Android"),
            Platform::Ios => f.pad("iOS"),
        }
    }
}

/// How the alpha channel of a resized icon is treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    /// Keep transparency, encode RGBA.
    PreserveAlpha,
    /// Composite over opaque white and encode RGB.
    /// App Store icons must not carry an alpha channel.
    FlattenOnWhite,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconTarget {
    /// Density folder on Android, asset catalog slot on iOS
    pub name: &'static str,
    /// File written inside the target's directory
    pub file: &'static str,
    pub platform: Platform,
    pub size: u32,
    pub color_mode: ColorMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplashTarget {
    pub name: &'static str,
    pub platform: Platform,
    pub width: u32,
    pub height: u32,
    /// Bounding box for the logo, both axes.
    pub logo_size: u32,
}

/// A prebuilt bootsplash logo copied into one drawable density folder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BootsplashLogo {
    pub name: &'static str,
    /// File name under `assets/bootsplash`
    pub source: &'static str,
}

/// The two layers of an Android adaptive icon. Both are
/// `CANVAS_SIZE x CANVAS_SIZE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdaptiveLayer {
    /// Logo scaled to the safe area, centered on a transparent canvas.
    Foreground,
    /// Flat opaque white.
    Background,
}

const fn android_icon(name: &'static str, file: &'static str, size: u32) -> IconTarget {
    IconTarget {
        name,
        file,
        platform: Platform::Android,
        size,
        color_mode: ColorMode::PreserveAlpha,
    }
}

const fn ios_icon(name: &'static str, size: u32) -> IconTarget {
    IconTarget {
        name,
        file: name,
        platform: Platform::Ios,
        size,
        color_mode: ColorMode::FlattenOnWhite,
    }
}

const fn splash(
    name: &'static str,
    platform: Platform,
    width: u32,
    height: u32,
    logo_size: u32,
) -> SplashTarget {
    SplashTarget {
        name,
        platform,
        width,
        height,
        logo_size,
    }
}

const fn bootsplash(name: &'static str, source: &'static str) -> BootsplashLogo {
    BootsplashLogo { name, source }
}

/// Square and round launcher icons per mipmap density
pub const ANDROID_ICONS: &[IconTarget] = &[
    android_icon("mipmap-mdpi", layout::ANDROID_ICON_FILE, 48),
    android_icon("mipmap-mdpi", layout::ANDROID_ROUND_ICON_FILE, 48),
    android_icon("mipmap-hdpi", layout::ANDROID_ICON_FILE, 72),
    android_icon("mipmap-hdpi", layout::ANDROID_ROUND_ICON_FILE, 72),
    android_icon("mipmap-xhdpi", layout::ANDROID_ICON_FILE, 96),
    android_icon("mipmap-xhdpi", layout::ANDROID_ROUND_ICON_FILE, 96),
    android_icon("mipmap-xxhdpi", layout::ANDROID_ICON_FILE, 144),
    android_icon("mipmap-xxhdpi", layout::ANDROID_ROUND_ICON_FILE, 144),
    android_icon("mipmap-xxxhdpi", layout::ANDROID_ICON_FILE, 192),
    android_icon("mipmap-xxxhdpi", layout::ANDROID_ROUND_ICON_FILE, 192),
];

/// Every slot of the AppIcon asset catalog
pub const IOS_ICONS: &[IconTarget] = &[
    ios_icon("Icon-20-ipad.png", 20),
    ios_icon("Icon-20@2x-ipad.png", 40),
    ios_icon("Icon-20@2x.png", 40),
    ios_icon("Icon-20@3x.png", 60),
    ios_icon("Icon-29-ipad.png", 29),
    ios_icon("Icon-29@2x-ipad.png", 58),
    ios_icon("Icon-29@2x.png", 58),
    ios_icon("Icon-29@3x.png", 87),
    ios_icon("Icon-40-ipad.png", 40),
    ios_icon("Icon-40@2x-ipad.png", 80),
    ios_icon("Icon-40@2x.png", 80),
    ios_icon("Icon-40@3x.png", 120),
    ios_icon("Icon-60@2x.png", 120),
    ios_icon("Icon-60@3x.png", 180),
    ios_icon("Icon-76-ipad.png", 76),
    ios_icon("Icon-76@2x-ipad.png", 152),
    ios_icon("Icon-83.5@2x.png", 167),
    ios_icon("Icon-1024.png", 1024),
];

pub const ADAPTIVE_LAYERS: &[AdaptiveLayer] = &[AdaptiveLayer::Foreground, AdaptiveLayer::Background];

pub const ANDROID_SPLASH: &[SplashTarget] = &[
    splash("drawable-mdpi", Platform::Android, 320, 480, 120),
    splash("drawable-hdpi", Platform::Android, 480, 800, 180),
    splash("drawable-xhdpi", Platform::Android, 720, 1280, 270),
    splash("drawable-xxhdpi", Platform::Android, 1080, 1920, 400),
    splash("drawable-xxxhdpi", Platform::Android, 1440, 2560, 540),
];

pub const IOS_SPLASH: &[SplashTarget] = &[
    splash("splash@1x", Platform::Ios, 320, 568, 120),
    splash("splash@2x", Platform::Ios, 640, 1136, 240),
    splash("splash@3x", Platform::Ios, 1242, 2208, 460),
    splash("splash_ipad@1x", Platform::Ios, 768, 1024, 280),
    splash("splash_ipad@2x", Platform::Ios, 1536, 2048, 560),
];

pub const BOOTSPLASH_LOGOS: &[BootsplashLogo] = &[
    bootsplash("drawable-mdpi", "logo.png"),
    bootsplash("drawable-hdpi", "logo@1,5x.png"),
    bootsplash("drawable-xhdpi", "logo@2x.png"),
    bootsplash("drawable-xxhdpi", "logo@3x.png"),
    bootsplash("drawable-xxxhdpi", "logo@4x.png"),
];

/// All icon targets, Android first, in table order.
pub fn icon_targets() -> Vec<IconTarget> {
    ANDROID_ICONS.iter().chain(IOS_ICONS).copied().collect()
}

/// All splash targets, Android first, in table order.
pub fn splash_targets() -> Vec<SplashTarget> {
    ANDROID_SPLASH.iter().chain(IOS_SPLASH).copied().collect()
}

fn require_positive(name: &str, what: &str, value: u32) -> Result<(), AssetError> {
    if value == 0 {
        return Err(AssetError::InvalidTarget {
            name: name.to_string(),
            reason: format!("{} must be positive", what),
        });
    }
    Ok(())
}

impl IconTarget {
    /// Identifier used in progress output and failure reports.
    pub fn label(&self) -> String {
        match self.platform {
            Platform::Android => format!("{}/{}", self.name, self.file),
            Platform::Ios => self.name.to_string(),
        }
    }

    pub fn validate(&self) -> Result<(), AssetError> {
        require_positive(self.name, "size", self.size)
    }

    pub fn output_path(&self, project: &ProjectLayout) -> PathBuf {
        match self.platform {
            Platform::Android => project.android_res_dir().join(self.name).join(self.file),
            Platform::Ios => project.ios_iconset_dir().join(self.file),
        }
    }
}

impl SplashTarget {
    pub fn validate(&self) -> Result<(), AssetError> {
        require_positive(self.name, "width", self.width)?;
        require_positive(self.name, "height", self.height)?;
        require_positive(self.name, "logo size", self.logo_size)
    }

    pub fn output_path(&self, project: &ProjectLayout) -> PathBuf {
        match self.platform {
            Platform::Android => project
                .android_splash_dir()
                .join(self.name)
                .join(layout::ANDROID_SPLASH_FILE),
            Platform::Ios => project.ios_splash_dir().join(format!("{}.jpg", self.name)),
        }
    }

    /// Where `sync-splash` installs this screen. Only Android splash screens
    /// live inside the native project.
    pub fn installed_path(&self, project: &ProjectLayout) -> Option<PathBuf> {
        match self.platform {
            Platform::Android => Some(
                project
                    .android_res_dir()
                    .join(self.name)
                    .join(layout::ANDROID_SPLASH_FILE),
            ),
            Platform::Ios => None,
        }
    }
}

impl BootsplashLogo {
    pub fn source_path(&self, project: &ProjectLayout) -> PathBuf {
        project.bootsplash_dir().join(self.source)
    }

    pub fn installed_path(&self, project: &ProjectLayout) -> PathBuf {
        project
            .android_res_dir()
            .join(self.name)
            .join(layout::ANDROID_BOOTSPLASH_FILE)
    }
}

impl AdaptiveLayer {
    pub fn name(&self) -> &'static str {
        match self {
            AdaptiveLayer::Foreground => adaptive::FOREGROUND_FILE,
            AdaptiveLayer::Background => adaptive::BACKGROUND_FILE,
        }
    }

    pub fn output_path(&self, project: &ProjectLayout) -> PathBuf {
        match self {
            AdaptiveLayer::Foreground => project.adaptive_foreground(),
            AdaptiveLayer::Background => project.adaptive_background(),
        }
    }
}
