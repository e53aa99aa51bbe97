// Fixed values shared by the renderers, the layout and the configuration defaults

pub mod adaptive {
    /// Canvas size of both adaptive icon layers (108dp at xxxhdpi)
    pub const CANVAS_SIZE: u32 = 432;

    /// Logo size inside the foreground layer
    /// 288 / 432 = 2/3 of the canvas, inside the 72dp safe zone
    pub const SAFE_AREA_SIZE: u32 = 288;

    pub const FOREGROUND_FILE: &str = "ic_launcher_foreground.png";
    pub const BACKGROUND_FILE: &str = "ic_launcher_background.png";
}

pub mod color {
    use image::{Rgb, Rgba};

    pub const WHITE_RGB: Rgb<u8> = Rgb([255, 255, 255]);
    pub const WHITE_RGBA: Rgba<u8> = Rgba([255, 255, 255, 255]);
    pub const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);
}

pub mod encoding {
    /// JPEG quality used for splash screens unless the config overrides it
    pub const DEFAULT_JPEG_QUALITY: u8 = 85;
}

pub mod layout {
    pub const SOURCE_LOGO: &str = "assets/app-logo.png";
    pub const CONFIG_FILE: &str = "mobile-assets.yaml";
    pub const ANDROID_RES_DIR: &str = "android/app/src/main/res";
    pub const IOS_ICONSET_DIR: &str = "ios/PdfSignPOC/Images.xcassets/AppIcon.appiconset";
    pub const SPLASH_DIR: &str = "assets/splash_screens";
    /// Prebuilt per-density logos for react-native-bootsplash
    pub const BOOTSPLASH_DIR: &str = "assets/bootsplash";

    pub const ANDROID_ICON_FILE: &str = "ic_launcher.png";
    /// Referenced by `android:roundIcon` in the manifest
    pub const ANDROID_ROUND_ICON_FILE: &str = "ic_launcher_round.png";
    pub const ANDROID_SPLASH_FILE: &str = "splash.jpg";
    pub const ANDROID_BOOTSPLASH_FILE: &str = "bootsplash_logo.png";
}
