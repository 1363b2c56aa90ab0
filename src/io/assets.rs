use std::path::{Path, PathBuf};

/// Result of looking up an optional image on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Asset {
    Found(PathBuf),
    Missing(PathBuf),
}

impl Asset {
    /// Check whether `path` points at an existing file.
    pub fn locate(path: &Path) -> Self {
        if path.is_file() {
            Asset::Found(path.to_path_buf())
        } else {
            log::info!("Optional asset not found: {}", path.display());
            Asset::Missing(path.to_path_buf())
        }
    }

    /// `file://` URI for egui's image loaders, when present.
    pub fn uri(&self) -> Option<String> {
        match self {
            Asset::Found(path) => {
                let abs = std::fs::canonicalize(path).unwrap_or_else(|_| path.clone());
                Some(format!("file://{}", abs.display()))
            }
            Asset::Missing(_) => None,
        }
    }

    pub fn path(&self) -> &Path {
        match self {
            Asset::Found(p) | Asset::Missing(p) => p,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_asset() {
        let dir = tempfile::tempdir().unwrap();
        let asset = Asset::locate(&dir.path().join("logo.png"));
        assert!(matches!(asset, Asset::Missing(_)));
        assert_eq!(asset.uri(), None);
    }

    #[test]
    fn test_found_asset() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logo.png");
        std::fs::write(&path, b"png").unwrap();
        let asset = Asset::locate(&path);
        assert_eq!(asset.path(), path.as_path());
        let uri = asset.uri().unwrap();
        assert!(uri.starts_with("file://"));
        assert!(uri.ends_with("logo.png"));
    }

    #[test]
    fn test_directory_is_not_an_asset() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(Asset::locate(dir.path()), Asset::Missing(_)));
    }
}
