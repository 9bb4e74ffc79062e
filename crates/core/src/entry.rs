//! File entries flowing through the transform.

use std::{
    fmt,
    io::Read,
    path::{Path, PathBuf},
};

use crate::error::{Error, Result};

/// Contents of an entry.
pub enum Contents {
    /// No contents, e.g. a directory. Passed through untouched.
    Null,
    /// Contents only available as a stream. Not supported by the transform.
    Stream(Box<dyn Read + Send>),
    /// Contents fully loaded in memory.
    Buffer(Vec<u8>),
}

impl fmt::Debug for Contents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Contents::Null => f.write_str("Null"),
            Contents::Stream(_) => f.write_str("Stream(..)"),
            Contents::Buffer(data) => write!(f, "Buffer({} bytes)", data.len()),
        }
    }
}

/// A file with its contents and every path it has had.
///
/// The first history element is the name the entry was created with; it
/// never changes, whatever renames happen afterwards.
#[derive(Debug)]
pub struct FontEntry {
    history: Vec<PathBuf>,
    contents: Contents,
}

impl FontEntry {
    pub fn new(path: impl Into<PathBuf>, contents: Contents) -> Self {
        Self { history: vec![path.into()], contents }
    }

    pub fn buffer(path: impl Into<PathBuf>, data: impl Into<Vec<u8>>) -> Self {
        Self::new(path, Contents::Buffer(data.into()))
    }

    pub fn null(path: impl Into<PathBuf>) -> Self {
        Self::new(path, Contents::Null)
    }

    /// Current path.
    pub fn path(&self) -> &Path {
        // history is never empty
        self.history.last().map(PathBuf::as_path).unwrap_or_else(|| Path::new(""))
    }

    /// Path the entry was first seen with.
    pub fn original_path(&self) -> &Path {
        self.history.first().map(PathBuf::as_path).unwrap_or_else(|| Path::new(""))
    }

    pub fn history(&self) -> &[PathBuf] {
        &self.history
    }

    /// Rename the entry, recording the new path in its history.
    pub fn set_path(&mut self, path: impl Into<PathBuf>) {
        let path = path.into();
        if path != self.path() {
            self.history.push(path);
        }
    }

    pub fn contents(&self) -> &Contents {
        &self.contents
    }

    pub fn set_contents(&mut self, contents: Contents) {
        self.contents = contents;
    }

    pub fn into_contents(self) -> Contents {
        self.contents
    }

    pub fn is_null(&self) -> bool {
        matches!(self.contents, Contents::Null)
    }

    pub fn is_stream(&self) -> bool {
        matches!(self.contents, Contents::Stream(_))
    }

    /// Current file name without its extension.
    pub fn base_name(&self) -> Result<&str> {
        self.path()
            .file_stem()
            .map_or(Some(""), |stem| stem.to_str())
            .ok_or_else(|| Error::InvalidFileName(self.path().to_path_buf()))
    }

    /// Current extension without the leading dot, empty if there is none.
    pub fn extension(&self) -> Result<&str> {
        self.path()
            .extension()
            .map_or(Some(""), |ext| ext.to_str())
            .ok_or_else(|| Error::InvalidFileName(self.path().to_path_buf()))
    }

    /// Original file name including its extension.
    pub fn original_file_name(&self) -> Result<&str> {
        let original = self.original_path();
        original
            .file_name()
            .map_or(Some(""), |name| name.to_str())
            .ok_or_else(|| Error::InvalidFileName(original.to_path_buf()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_history_tracks_renames() {
        let mut entry = FontEntry::buffer("fonts/Roboto-Bold.ttf", vec![0u8; 4]);
        entry.set_path("build/Roboto-Bold.woff2");
        entry.set_path("build/Roboto-Bold.woff2");
        assert_eq!(entry.history().len(), 2);
        assert_eq!(entry.path(), Path::new("build/Roboto-Bold.woff2"));
        assert_eq!(entry.original_path(), Path::new("fonts/Roboto-Bold.ttf"));
        assert_eq!(entry.original_file_name().unwrap(), "Roboto-Bold.ttf");
    }

    #[test]
    fn test_name_parts() {
        let entry = FontEntry::null("fonts/Roboto-Bold.woff2");
        assert_eq!(entry.base_name().unwrap(), "Roboto-Bold");
        assert_eq!(entry.extension().unwrap(), "woff2");
    }

    #[test]
    fn test_name_parts_multiple_dots() {
        let entry = FontEntry::null("Roboto.v2-Bold.ttf");
        assert_eq!(entry.base_name().unwrap(), "Roboto.v2-Bold");
        assert_eq!(entry.extension().unwrap(), "ttf");
    }

    #[test]
    fn test_name_parts_without_extension() {
        let entry = FontEntry::null("fonts/Roboto");
        assert_eq!(entry.base_name().unwrap(), "Roboto");
        assert_eq!(entry.extension().unwrap(), "");
    }

    #[test]
    fn test_content_modes() {
        assert!(FontEntry::null("a.ttf").is_null());
        let entry = FontEntry::buffer("a.ttf", Vec::new());
        assert!(!entry.is_null() && !entry.is_stream());
        assert!(FontEntry::new("a.ttf", Contents::Stream(Box::new(std::io::empty()))).is_stream());
    }
}
