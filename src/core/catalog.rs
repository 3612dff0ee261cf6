use crate::config::cli::LocalStorage;
use crate::core::sample::sample_shop_data;
use crate::core::{ConfigProvider, Result, ShopData, Storage};
use crate::utils::error::CatalogError;
use std::path::Path;

/// Reads and writes [`ShopData`] documents through a [`Storage`] backend.
pub struct ShopCatalog<S: Storage> {
    storage: S,
}

impl<S: Storage> ShopCatalog<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Serializes `data` as indented JSON and writes it to `file_name`,
    /// replacing any existing file.
    pub fn export(&self, file_name: impl AsRef<Path>, data: &ShopData) -> Result<()> {
        let file_name = file_name.as_ref();
        let json = data.to_json_pretty()?;
        self.storage.write_file(file_name, json.as_bytes())?;

        tracing::info!(
            "Exported {} shops ({} items) to {}",
            data.len(),
            data.item_count(),
            self.storage.resolve(file_name).display()
        );
        Ok(())
    }

    /// Reads `file_name` back into a [`ShopData`]. Duplicate catalogue
    /// entries collapse into one.
    pub fn import(&self, file_name: impl AsRef<Path>) -> Result<ShopData> {
        let file_name = file_name.as_ref();
        let bytes = self.storage.read_file(file_name)?;

        let data: ShopData =
            serde_json::from_slice(&bytes).map_err(|source| CatalogError::ParseError {
                path: self.storage.resolve(file_name),
                source,
            })?;

        tracing::info!(
            "Imported {} shops ({} items) from {}",
            data.len(),
            data.item_count(),
            self.storage.resolve(file_name).display()
        );
        Ok(data)
    }

    pub fn export_sample(&self, file_name: impl AsRef<Path>) -> Result<()> {
        self.export(file_name, &sample_shop_data()?)
    }

    /// Writes the sample data, reads it back and checks both sides agree.
    pub fn round_trip(&self, file_name: impl AsRef<Path>) -> Result<ShopData> {
        let file_name = file_name.as_ref();
        let expected = sample_shop_data()?;

        tracing::debug!("Writing sample data...");
        self.export(file_name, &expected)?;

        tracing::debug!("Reading sample data back...");
        let loaded = self.import(file_name)?;

        if loaded != expected {
            return Err(CatalogError::RoundTripMismatchError {
                path: self.storage.resolve(file_name),
            });
        }

        tracing::debug!("Round trip verified");
        Ok(loaded)
    }
}

impl ShopCatalog<LocalStorage> {
    /// Catalogue over local files in the configured data directory.
    pub fn from_config<C: ConfigProvider>(config: &C) -> Self {
        Self::new(LocalStorage::new(config.data_dir()).with_atomic_writes(config.atomic_writes()))
    }
}

/// Writes the built-in two-shop sample to `path`.
pub fn export_sample(path: impl AsRef<Path>) -> Result<()> {
    ShopCatalog::new(LocalStorage::current_dir()).export_sample(path)
}

/// Reads a [`ShopData`] document from `path`.
pub fn import_sample(path: impl AsRef<Path>) -> Result<ShopData> {
    read_shop_data(path)
}

pub fn write_shop_data(path: impl AsRef<Path>, data: &ShopData) -> Result<()> {
    ShopCatalog::new(LocalStorage::current_dir()).export(path, data)
}

pub fn read_shop_data(path: impl AsRef<Path>) -> Result<ShopData> {
    ShopCatalog::new(LocalStorage::current_dir()).import(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CatalogConfig;
    use crate::core::{Item, Shop};
    use tempfile::TempDir;

    #[test]
    fn test_export_writes_indented_json() {
        let temp_dir = TempDir::new().unwrap();
        let catalog = ShopCatalog::new(LocalStorage::new(temp_dir.path()));

        catalog.export_sample("ShopData.json").unwrap();

        let text = std::fs::read_to_string(temp_dir.path().join("ShopData.json")).unwrap();
        assert!(text.starts_with("{\n  \"Shops\": ["));
        assert!(text.contains("\"Location\": \"Oldstreet\""));
    }

    #[test]
    fn test_from_config_uses_data_dir() {
        let temp_dir = TempDir::new().unwrap();
        let config = CatalogConfig {
            data_dir: temp_dir.path().to_str().unwrap().to_string(),
            ..CatalogConfig::default()
        };
        let catalog = ShopCatalog::from_config(&config);

        assert_eq!(catalog.storage().base_path(), temp_dir.path());
        catalog.export_sample(&config.file_name).unwrap();
        assert!(temp_dir.path().join("ShopData.json").exists());
    }

    #[test]
    fn test_round_trip_returns_sample() {
        let temp_dir = TempDir::new().unwrap();
        let catalog = ShopCatalog::new(LocalStorage::new(temp_dir.path()));

        let data = catalog.round_trip("ShopData.json").unwrap();
        assert_eq!(data, sample_shop_data().unwrap());
    }

    #[test]
    fn test_import_not_json_is_parse_error() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("bad.json"), "not json").unwrap();
        let catalog = ShopCatalog::new(LocalStorage::new(temp_dir.path()));

        let err = catalog.import("bad.json").unwrap_err();
        match err {
            CatalogError::ParseError { path, .. } => {
                assert_eq!(path, temp_dir.path().join("bad.json"))
            }
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_export_overwrites_existing_file() {
        let temp_dir = TempDir::new().unwrap();
        let catalog = ShopCatalog::new(LocalStorage::new(temp_dir.path()));
        catalog.export_sample("ShopData.json").unwrap();

        let mut small = ShopData::new();
        small.add_shop(Shop::new("Kiosk", "Station").with_item(Item::new("Tea", 1.2).unwrap()));
        catalog.export("ShopData.json", &small).unwrap();

        assert_eq!(catalog.import("ShopData.json").unwrap(), small);
    }
}
