//! Error types for image I/O.

use std::error::Error;
use std::fmt;
use std::path::PathBuf;

/// Errors arising from loading or saving an image.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ImageError {
    /// The codec could not read or decode the file.
    Load {
        /// The file that failed to load.
        path: PathBuf,
        /// What the codec reported.
        reason: String,
    },
    /// The codec could not encode or write the file.
    Save {
        /// The file that failed to save.
        path: PathBuf,
        /// What the codec reported.
        reason: String,
    },
    /// A pixel buffer's length does not match its dimensions.
    Malformed {
        /// `width * height * CHANNELS`.
        expected: usize,
        /// Actual byte count.
        actual: usize,
    },
}

impl ImageError {
    /// The file involved, if any.
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            Self::Load { path, .. } | Self::Save { path, .. } => Some(path),
            Self::Malformed { .. } => None,
        }
    }
}

impl fmt::Display for ImageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Load { path, reason } => {
                write!(f, "couldn't load image '{}': {reason}", path.display())
            }
            Self::Save { path, reason } => {
                write!(f, "couldn't save image '{}': {reason}", path.display())
            }
            Self::Malformed { expected, actual } => {
                write!(
                    f,
                    "malformed pixel buffer: expected {expected} bytes, got {actual}"
                )
            }
        }
    }
}

impl Error for ImageError {}
