use crate::core::Storage;
use crate::utils::error::{CatalogError, Result};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: PathBuf,
    atomic_writes: bool,
}

impl LocalStorage {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
            atomic_writes: true,
        }
    }

    /// Storage rooted at the working directory; absolute paths pass through.
    pub fn current_dir() -> Self {
        Self::new(".")
    }

    pub fn with_atomic_writes(mut self, atomic_writes: bool) -> Self {
        self.atomic_writes = atomic_writes;
        self
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Writes through a temp file in the target directory and renames it
    /// over `full_path`, so readers never observe a half-written file.
    ///
    /// The temp file starts out owner-only; it takes the permissions of the
    /// file it replaces, or 0644 on Unix when the target is new.
    fn write_atomic(full_path: &Path, data: &[u8]) -> Result<()> {
        let dir = match full_path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut temp = NamedTempFile::new_in(dir).map_err(|e| CatalogError::from_io(dir, e))?;
        if let Some(permissions) = Self::target_permissions(full_path) {
            temp.as_file()
                .set_permissions(permissions)
                .map_err(|e| CatalogError::from_io(temp.path(), e))?;
        }
        temp.write_all(data)
            .and_then(|()| temp.as_file().sync_all())
            .map_err(|e| CatalogError::from_io(temp.path(), e))?;
        temp.persist(full_path)
            .map_err(|e| CatalogError::from_io(full_path, e.error))?;
        Ok(())
    }

    fn target_permissions(full_path: &Path) -> Option<fs::Permissions> {
        if let Ok(metadata) = fs::metadata(full_path) {
            return Some(metadata.permissions());
        }

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            Some(fs::Permissions::from_mode(NEW_FILE_MODE))
        }

        #[cfg(not(unix))]
        {
            None
        }
    }
}

#[cfg(unix)]
const NEW_FILE_MODE: u32 = 0o644;

impl Storage for LocalStorage {
    fn read_file(&self, path: &Path) -> Result<Vec<u8>> {
        let full_path = self.resolve(path);
        tracing::debug!("Reading {}", full_path.display());
        fs::read(&full_path).map_err(|e| CatalogError::from_io(full_path, e))
    }

    fn write_file(&self, path: &Path, data: &[u8]) -> Result<()> {
        let full_path = self.resolve(path);

        if let Some(parent) = full_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| CatalogError::from_io(parent, e))?;
            }
        }

        tracing::debug!(
            "Writing {} bytes to {} (atomic: {})",
            data.len(),
            full_path.display(),
            self.atomic_writes
        );

        if self.atomic_writes {
            Self::write_atomic(&full_path, data)
        } else {
            fs::write(&full_path, data).map_err(|e| CatalogError::from_io(full_path, e))
        }
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        self.base_path.join(path)
    }
}
