pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, Command};

pub use config::{cli::LocalStorage, CatalogConfig};
pub use crate::core::catalog::{export_sample, import_sample, read_shop_data, write_shop_data, ShopCatalog};
pub use crate::core::sample::sample_shop_data;
pub use domain::model::{Item, Shop, ShopData};
pub use utils::error::{CatalogError, Result};
