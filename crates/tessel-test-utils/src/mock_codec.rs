//! In-memory [`ImageCodec`] for tests.

use std::cell::RefCell;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use tessel_image::{ImageCodec, ImageError, RawPixels};

/// Stores "files" in a map keyed by path.
///
/// Decoding a path that was never inserted fails with
/// [`ImageError::Load`]. Every encode is recorded with its flip flag.
/// Paths registered with [`fail_saves_to`](MockCodec::fail_saves_to) make
/// encode fail with [`ImageError::Save`].
#[derive(Default)]
pub struct MockCodec {
    files: RefCell<HashMap<PathBuf, RawPixels>>,
    writes: RefCell<Vec<(PathBuf, bool)>>,
    failing: RefCell<Vec<PathBuf>>,
}

impl MockCodec {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate a file.
    pub fn insert(&self, path: impl Into<PathBuf>, pixels: RawPixels) {
        self.files.borrow_mut().insert(path.into(), pixels);
    }

    /// The stored file at `path`, as last encoded.
    pub fn file(&self, path: impl AsRef<Path>) -> Option<RawPixels> {
        self.files.borrow().get(path.as_ref()).cloned()
    }

    /// Every encode so far: `(path, flip_vertically)`.
    pub fn writes(&self) -> Vec<(PathBuf, bool)> {
        self.writes.borrow().clone()
    }

    /// Make encodes to `path` fail.
    pub fn fail_saves_to(&self, path: impl Into<PathBuf>) {
        self.failing.borrow_mut().push(path.into());
    }
}

impl ImageCodec for MockCodec {
    fn decode(&self, path: &Path, flip_vertically: bool) -> Result<RawPixels, ImageError> {
        let mut pixels = self.file(path).ok_or_else(|| ImageError::Load {
            path: path.to_path_buf(),
            reason: "no such file".into(),
        })?;
        if flip_vertically {
            pixels.flip_vertical();
        }
        Ok(pixels)
    }

    fn encode(
        &self,
        path: &Path,
        pixels: &RawPixels,
        flip_vertically: bool,
    ) -> Result<(), ImageError> {
        if self.failing.borrow().iter().any(|p| p == path) {
            return Err(ImageError::Save {
                path: path.to_path_buf(),
                reason: "write refused".into(),
            });
        }
        pixels.validate()?;
        let mut stored = pixels.clone();
        if flip_vertically {
            stored.flip_vertical();
        }
        self.files.borrow_mut().insert(path.to_path_buf(), stored);
        self.writes
            .borrow_mut()
            .push((path.to_path_buf(), flip_vertically));
        Ok(())
    }
}
