use std::fmt;
use std::path::{Path, PathBuf};

use tempfile::TempPath;

/// Video file produced for a single request. The file is deleted when this
/// value is dropped, whichever way the request ends.
pub struct TemporaryVideo(TempPath);

impl TemporaryVideo {
    pub fn new(path: TempPath) -> Self {
        Self(path)
    }

    /// Takes ownership of an existing file at `path`.
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        Self(TempPath::from_path(path))
    }

    pub fn path(&self) -> &Path {
        &self.0
    }
}

impl fmt::Debug for TemporaryVideo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("TemporaryVideo").field(&self.path()).finish()
    }
}

impl PartialEq for TemporaryVideo {
    fn eq(&self, other: &Self) -> bool {
        self.path() == other.path()
    }
}

impl Eq for TemporaryVideo {}
