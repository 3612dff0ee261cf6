use crate::utils::error::Result;
use std::path::{Path, PathBuf};

/// Byte-level access to wherever catalogue files live.
pub trait Storage {
    fn read_file(&self, path: &Path) -> Result<Vec<u8>>;
    fn write_file(&self, path: &Path, data: &[u8]) -> Result<()>;
    /// Where `path` actually ends up, for logs and error messages.
    fn resolve(&self, path: &Path) -> PathBuf;
}

pub trait ConfigProvider {
    fn data_dir(&self) -> &str;
    fn file_name(&self) -> &str;
    fn atomic_writes(&self) -> bool;
}
