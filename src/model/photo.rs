use std::fmt;
use std::path::{Path, PathBuf};

const FILE_SCHEME: &str = "file://";

/// Opaque identifier of one displayable image.
///
/// Two refs are equal when their locators are equal; nothing about the image
/// itself is inspected.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhotoRef(String);

impl PhotoRef {
    pub fn new(locator: impl Into<String>) -> Self {
        Self(locator.into())
    }

    pub fn from_path(path: &Path) -> Self {
        Self(path.to_string_lossy().into_owned())
    }

    pub fn locator(&self) -> &str {
        &self.0
    }

    /// Filesystem path handed to the image renderer.
    pub fn path(&self) -> PathBuf {
        PathBuf::from(self.0.strip_prefix(FILE_SCHEME).unwrap_or(&self.0))
    }

    /// Last path segment, or the whole locator when there is none.
    pub fn display_name(&self) -> String {
        self.path()
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.0.clone())
    }
}

impl fmt::Display for PhotoRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.locator())
    }
}

impl From<PathBuf> for PhotoRef {
    fn from(path: PathBuf) -> Self {
        Self::from_path(&path)
    }
}
