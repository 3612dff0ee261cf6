pub mod catalog;
pub mod sample;

pub use crate::domain::model::{Item, Shop, ShopData};
pub use crate::domain::ports::{ConfigProvider, Storage};
pub use crate::utils::error::Result;
