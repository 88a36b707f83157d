use crate::core::Storage;
use crate::utils::error::{Result, SkylineError};
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: PathBuf,
}

impl LocalStorage {
    /// Relative paths resolve against `base_path`; absolute paths are used as is.
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }
}

impl Default for LocalStorage {
    fn default() -> Self {
        Self::new(".")
    }
}

impl Storage for LocalStorage {
    async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        let full_path = Path::new(&self.base_path).join(path);
        fs::read(&full_path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => SkylineError::InputNotFound {
                path: path.to_string(),
            },
            _ => SkylineError::IoError(e),
        })
    }

    async fn write_new_file(&self, path: &str, data: &[u8]) -> Result<()> {
        let full_path = Path::new(&self.base_path).join(path);

        let mut file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&full_path)
            .map_err(|e| match e.kind() {
                ErrorKind::AlreadyExists => SkylineError::OutputExists {
                    path: path.to_string(),
                },
                _ => SkylineError::IoError(e),
            })?;

        file.write_all(data)?;
        file.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_write_then_read() {
        let dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(dir.path());

        storage.write_new_file("out.txt", b"(1,3)(5,0)").await.unwrap();

        assert_eq!(storage.read_file("out.txt").await.unwrap(), b"(1,3)(5,0)");
    }

    #[tokio::test]
    async fn test_existing_file_is_not_overwritten() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("out.txt"), b"keep me").unwrap();
        let storage = LocalStorage::new(dir.path());

        let err = storage.write_new_file("out.txt", b"new").await.unwrap_err();

        assert!(matches!(err, SkylineError::OutputExists { .. }));
        assert_eq!(std::fs::read(dir.path().join("out.txt")).unwrap(), b"keep me");
    }

    #[tokio::test]
    async fn test_missing_input() {
        let dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(dir.path());

        let err = storage.read_file("missing.txt").await.unwrap_err();

        assert!(matches!(err, SkylineError::InputNotFound { path } if path == "missing.txt"));
    }
}
