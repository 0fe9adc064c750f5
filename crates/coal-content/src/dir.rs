//! Directory-backed content store.

use std::path::{Path, PathBuf};

use coal_types::error::{CoalError, Result};

use crate::{ContentKey, ContentProvider, MemoryContent};

/// Reads resources from an on-disk tree laid out like the shipped
/// `Dependencies/` directory (`Graphics/boot.txt`, `Tools/SysList/...`).
///
/// Resources missing on disk are served from the fallback store, if any.
/// A file that exists but cannot be read as UTF-8 text is a content error.
#[derive(Debug, Clone)]
pub struct DirContent {
    root: PathBuf,
    fallback: Option<MemoryContent>,
}

impl DirContent {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            fallback: None,
        }
    }

    /// Serve keys missing on disk from `fallback`.
    pub fn with_fallback(mut self, fallback: MemoryContent) -> Self {
        self.fallback = Some(fallback);
        self
    }

    /// Root directory of the tree.
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl ContentProvider for DirContent {
    fn load(&self, key: ContentKey) -> Result<String> {
        let path = self.root.join(key.path());
        match std::fs::read_to_string(&path) {
            Ok(text) => Ok(text),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => match &self.fallback {
                Some(fallback) => {
                    log::debug!("{} not on disk, using built-in text", path.display());
                    fallback.load(key)
                },
                None => Err(CoalError::Content(format!(
                    "no such resource: {key} ({})",
                    path.display()
                ))),
            },
            Err(e) => Err(CoalError::Content(format!(
                "{key} ({}): {e}",
                path.display()
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write(root: &Path, rel: &str, text: &str) {
        let path = root.join(rel);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, text).unwrap();
    }

    #[test]
    fn reads_dependencies_layout() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "Tools/SysList/device02.txt", "/home/hal\n");
        let store = DirContent::new(dir.path());
        assert_eq!(
            store.load(ContentKey::DeviceListing(2)).unwrap(),
            "/home/hal\n"
        );
    }

    #[test]
    fn text_is_verbatim() {
        let dir = tempfile::tempdir().unwrap();
        let art = "  /\\_/\\\n ( o.o )\n\n  > ^ <  \n";
        write(dir.path(), "Graphics/boot.txt", art);
        let store = DirContent::new(dir.path());
        assert_eq!(store.load(ContentKey::BootBanner).unwrap(), art);
    }

    #[test]
    fn missing_without_fallback_is_content_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = DirContent::new(dir.path());
        let err = store.load(ContentKey::NmapBanner).unwrap_err();
        assert!(matches!(err, CoalError::Content(_)));
        assert!(format!("{err}").contains("graphics/nmap"));
    }

    #[test]
    fn unreadable_file_is_content_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Help/root.txt");
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, b"caf\xe9\n").unwrap();
        let mut fallback = MemoryContent::new();
        fallback.insert(ContentKey::RootHelp, "built-in help");
        let store = DirContent::new(dir.path()).with_fallback(fallback);
        let err = store.load(ContentKey::RootHelp).unwrap_err();
        assert!(matches!(err, CoalError::Content(_)), "{err:?}");
        assert!(!err.is_io());
        assert!(format!("{err}").contains("help/root"));
    }

    #[test]
    fn missing_uses_fallback() {
        let dir = tempfile::tempdir().unwrap();
        let mut fallback = MemoryContent::new();
        fallback.insert(ContentKey::RootHelp, "built-in help");
        let store = DirContent::new(dir.path()).with_fallback(fallback);
        assert_eq!(store.load(ContentKey::RootHelp).unwrap(), "built-in help");
    }

    #[test]
    fn disk_wins_over_fallback() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "Help/root.txt", "from disk");
        let mut fallback = MemoryContent::new();
        fallback.insert(ContentKey::RootHelp, "built-in help");
        let store = DirContent::new(dir.path()).with_fallback(fallback);
        assert_eq!(store.load(ContentKey::RootHelp).unwrap(), "from disk");
        assert_eq!(store.root(), dir.path());
    }
}
