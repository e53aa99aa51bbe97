use std::path::{Path, PathBuf};

use crate::constants::{adaptive, layout};

/// Well-known locations inside a React Native project, all relative to its root.
#[derive(Debug, Clone)]
pub struct ProjectLayout {
    root: PathBuf,
}

impl ProjectLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        ProjectLayout { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn source_logo(&self) -> PathBuf {
        self.root.join(layout::SOURCE_LOGO)
    }

    pub fn config_file(&self) -> PathBuf {
        self.root.join(layout::CONFIG_FILE)
    }

    pub fn android_res_dir(&self) -> PathBuf {
        self.root.join(layout::ANDROID_RES_DIR)
    }

    pub fn ios_iconset_dir(&self) -> PathBuf {
        self.root.join(layout::IOS_ICONSET_DIR)
    }

    pub fn android_splash_dir(&self) -> PathBuf {
        self.root.join(layout::SPLASH_DIR).join("android")
    }

    pub fn ios_splash_dir(&self) -> PathBuf {
        self.root.join(layout::SPLASH_DIR).join("ios")
    }

    pub fn bootsplash_dir(&self) -> PathBuf {
        self.root.join(layout::BOOTSPLASH_DIR)
    }

    pub fn adaptive_foreground(&self) -> PathBuf {
        self.android_res_dir()
            .join("drawable")
            .join(adaptive::FOREGROUND_FILE)
    }

    pub fn adaptive_background(&self) -> PathBuf {
        self.android_res_dir()
            .join("drawable")
            .join(adaptive::BACKGROUND_FILE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_are_rooted() {
        let layout = ProjectLayout::new("/work/app");
        assert_eq!(layout.source_logo(), PathBuf::from("/work/app/assets/app-logo.png"));
        assert_eq!(
            layout.adaptive_foreground(),
            PathBuf::from("/work/app/android/app/src/main/res/drawable/ic_launcher_foreground.png")
        );
        assert_eq!(
            layout.ios_splash_dir(),
            PathBuf::from("/work/app/assets/splash_screens/ios")
        );
        assert_eq!(layout.bootsplash_dir(), PathBuf::from("/work/app/assets/bootsplash"));
    }
}
