use std::path::PathBuf;

/// Errors produced while loading the source logo or rendering a single target.
///
/// Only `MissingSourceAsset` and `Decode` on the source logo abort a run; every
/// other variant is recorded against the failing target and the batch moves on.
#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    #[error("source asset not found: {}", .0.display())]
    MissingSourceAsset(PathBuf),

    #[error("failed to decode {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("failed to encode {name}: {source}")]
    Encode {
        name: String,
        #[source]
        source: image::ImageError,
    },

    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid target {name}: {reason}")]
    InvalidTarget { name: String, reason: String },
}

impl AssetError {
    /// Whether the error invalidates the whole run rather than a single target.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::MissingSourceAsset(_) | Self::Decode { .. })
    }

    pub(crate) fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Write {
            path: path.into(),
            source,
        }
    }
}
