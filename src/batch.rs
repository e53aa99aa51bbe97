// Drives the target tables through the renderers and the copy steps.
// Every item yields its own Result; failures are logged and collected in a
// RunSummary and never stop the remaining items. Only a missing or
// undecodable source logo fails a whole mode.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::error::AssetError;
use crate::icon::{render_adaptive_layer, render_icon};
use crate::layout::ProjectLayout;
use crate::output::{encode_jpeg, encode_png, write_atomic};
use crate::source::SourceImage;
use crate::splash::render_splash;
use crate::targets::{self, AdaptiveLayer, BootsplashLogo, IconTarget, SplashTarget};

#[derive(Debug)]
pub struct ItemFailure {
    pub name: String,
    pub error: AssetError,
}

/// Attempted/succeeded counters for one or more modes.
#[derive(Debug, Default)]
pub struct RunSummary {
    pub attempted: usize,
    pub succeeded: usize,
    pub failures: Vec<ItemFailure>,
}

impl RunSummary {
    pub fn record(&mut self, name: &str, outcome: Result<PathBuf, AssetError>) {
        self.attempted += 1;
        match outcome {
            Ok(path) => {
                self.succeeded += 1;
                log::info!("  ✅ {} -> {}", name, path.display());
            }
            Err(error) => {
                log::error!("  ❌ {}: {}", name, error);
                self.failures.push(ItemFailure {
                    name: name.to_string(),
                    error,
                });
            }
        }
    }

    pub fn failed(&self) -> usize {
        self.attempted - self.succeeded
    }

    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn merge(&mut self, other: RunSummary) {
        self.attempted += other.attempted;
        self.succeeded += other.succeeded;
        self.failures.extend(other.failures);
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.succeeded, self.attempted)
    }
}

/// The generation step to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Icons,
    Splash,
    /// Copy generated Android splash screens into the native res folders.
    SyncSplash,
    /// Copy the prebuilt bootsplash logos into the native res folders.
    SyncBootsplash,
}

/// Run `item` for every entry of `items` in order, isolating failures.
fn drive<T>(
    items: &[T],
    name: impl Fn(&T) -> String,
    mut item: impl FnMut(&T) -> Result<PathBuf, AssetError>,
) -> RunSummary {
    let mut summary = RunSummary::default();
    for entry in items {
        let label = name(entry);
        summary.record(&label, item(entry));
    }
    summary
}

/// Renders targets from one loaded logo into one project.
pub struct Generator<'a> {
    source: &'a SourceImage,
    project: &'a ProjectLayout,
    config: &'a Config,
}

impl<'a> Generator<'a> {
    pub fn new(source: &'a SourceImage, project: &'a ProjectLayout, config: &'a Config) -> Self {
        Generator {
            source,
            project,
            config,
        }
    }

    pub fn icon(&self, target: &IconTarget) -> Result<PathBuf, AssetError> {
        target.validate()?;
        log::info!(
            "Generating {} {} ({}x{})...",
            target.platform,
            target.label(),
            target.size,
            target.size
        );

        let icon = render_icon(
            self.source.pixels(),
            target.size,
            target.color_mode,
            self.config.icons.resample_filter.filter_type(),
        );
        let bytes = encode_png(&icon, self.config.icons.png_compression.compression_type())
            .map_err(|source| AssetError::Encode {
                name: target.label(),
                source,
            })?;

        let path = target.output_path(self.project);
        write_atomic(&path, &bytes)?;
        Ok(path)
    }

    pub fn adaptive_layer(&self, layer: AdaptiveLayer) -> Result<PathBuf, AssetError> {
        log::info!("Generating adaptive {}...", layer.name());

        let image = render_adaptive_layer(
            self.source.pixels(),
            layer,
            self.config.icons.resample_filter.filter_type(),
        );
        let bytes = encode_png(&image, self.config.icons.png_compression.compression_type())
            .map_err(|source| AssetError::Encode {
                name: layer.name().to_string(),
                source,
            })?;

        let path = layer.output_path(self.project);
        write_atomic(&path, &bytes)?;
        Ok(path)
    }

    pub fn splash(&self, target: &SplashTarget) -> Result<PathBuf, AssetError> {
        target.validate()?;
        log::info!(
            "Generating {} {} ({}x{})...",
            target.platform,
            target.name,
            target.width,
            target.height
        );

        let splash = render_splash(
            self.source.pixels(),
            target.width,
            target.height,
            target.logo_size,
            self.config.splash.resample_filter.filter_type(),
        );
        let bytes = encode_jpeg(&splash, self.config.splash.jpeg_quality).map_err(|source| {
            AssetError::Encode {
                name: target.name.to_string(),
                source,
            }
        })?;

        let path = target.output_path(self.project);
        write_atomic(&path, &bytes)?;
        Ok(path)
    }

    /// Every icon in `icons`, then both adaptive layers.
    pub fn generate_icons(&self, icons: &[IconTarget]) -> RunSummary {
        let mut summary = drive(icons, |t| t.label(), |t| self.icon(t));
        summary.merge(drive(
            targets::ADAPTIVE_LAYERS,
            |layer| layer.name().to_string(),
            |layer| self.adaptive_layer(*layer),
        ));
        summary
    }

    pub fn generate_splash_screens(&self, screens: &[SplashTarget]) -> RunSummary {
        drive(screens, |t| t.name.to_string(), |t| self.splash(t))
    }
}

fn copy_file(from: &Path, to: &Path) -> Result<PathBuf, AssetError> {
    log::info!("Copying {} -> {}", from.display(), to.display());

    let bytes = fs::read(from).map_err(|source| AssetError::Read {
        path: from.to_path_buf(),
        source,
    })?;
    write_atomic(to, &bytes)?;
    Ok(to.to_path_buf())
}

/// Copy each generated Android splash screen into `res/<density>/splash.jpg`.
///
/// Targets without an installed location are skipped without being counted.
pub fn sync_splash_screens(project: &ProjectLayout, screens: &[SplashTarget]) -> RunSummary {
    let installable: Vec<(SplashTarget, PathBuf)> = screens
        .iter()
        .filter_map(|t| t.installed_path(project).map(|dest| (*t, dest)))
        .collect();

    drive(
        &installable,
        |(t, _)| t.name.to_string(),
        |(t, dest)| copy_file(&t.output_path(project), dest),
    )
}

/// Copy each `assets/bootsplash` logo into `res/<density>/bootsplash_logo.png`.
pub fn sync_bootsplash_logos(project: &ProjectLayout, logos: &[BootsplashLogo]) -> RunSummary {
    drive(
        logos,
        |logo| logo.name.to_string(),
        |logo| copy_file(&logo.source_path(project), &logo.installed_path(project)),
    )
}

/// Run one mode against the project's built-in tables.
///
/// Fails only when the source logo cannot be loaded; per-target failures are
/// reported in the summary.
pub fn run(mode: Mode, project: &ProjectLayout, config: &Config) -> Result<RunSummary, AssetError> {
    match mode {
        Mode::Icons => {
            let source = SourceImage::load(&project.source_logo())?;
            let generator = Generator::new(&source, project, config);
            Ok(generator.generate_icons(&targets::icon_targets()))
        }
        Mode::Splash => {
            let source = SourceImage::load(&project.source_logo())?;
            let generator = Generator::new(&source, project, config);
            Ok(generator.generate_splash_screens(&targets::splash_targets()))
        }
        Mode::SyncSplash => Ok(sync_splash_screens(project, targets::ANDROID_SPLASH)),
        Mode::SyncBootsplash => Ok(sync_bootsplash_logos(project, targets::BOOTSPLASH_LOGOS)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_drive_isolates_failures() {
        let items = [1, 2, 3, 4];
        let summary = drive(
            &items,
            |n| format!("item-{}", n),
            |n| {
                if *n == 3 {
                    Err(AssetError::write(
                        "item-3",
                        io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
                    ))
                } else {
                    Ok(PathBuf::from(format!("out/{}", n)))
                }
            },
        );

        assert_eq!(summary.attempted, 4);
        assert_eq!(summary.succeeded, 3);
        assert_eq!(summary.failed(), 1);
        assert_eq!(summary.failures[0].name, "item-3");
        assert!(!summary.is_complete());
    }

    #[test]
    fn test_drive_visits_in_table_order() {
        let items = ["c", "a", "b"];
        let mut visited = Vec::new();
        drive(
            &items,
            |s| s.to_string(),
            |s| {
                visited.push(*s);
                Ok(PathBuf::from(*s))
            },
        );
        assert_eq!(visited, ["c", "a", "b"]);
    }

    #[test]
    fn test_copy_file_missing_source_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join("out").join("copy.png");

        let err = copy_file(&dir.path().join("absent.png"), &dest).unwrap_err();
        assert!(matches!(err, AssetError::Read { .. }));
        assert!(!err.is_fatal());
        assert!(!dest.exists());
    }

    #[test]
    fn test_merge_and_display() {
        let mut a = RunSummary {
            attempted: 3,
            succeeded: 3,
            failures: Vec::new(),
        };
        let mut b = RunSummary::default();
        b.record(
            "broken",
            Err(AssetError::InvalidTarget {
                name: "broken".to_string(),
                reason: "size must be positive".to_string(),
            }),
        );
        a.merge(b);

        assert_eq!(a.attempted, 4);
        assert_eq!(a.succeeded, 3);
        assert_eq!(a.to_string(), "3/4");
    }
}
