use crate::utils::error::{CatalogError, Result};
use std::path::{Component, Path};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(CatalogError::InvalidItemError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_price(field_name: &str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(CatalogError::InvalidItemError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Price must be a finite number".to_string(),
        });
    }

    if value < 0.0 {
        return Err(CatalogError::InvalidItemError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Price cannot be negative".to_string(),
        });
    }

    Ok(())
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(CatalogError::config(format!("{}: Path cannot be empty", field_name)));
    }

    if path.contains('\0') {
        return Err(CatalogError::config(format!(
            "{}: Path contains null bytes",
            field_name
        )));
    }

    Ok(())
}

/// A data file name must name a file, not a directory such as `.` or `foo/`.
pub fn validate_file_name(field_name: &str, file_name: &str) -> Result<()> {
    validate_path(field_name, file_name)?;

    match Path::new(file_name).components().next_back() {
        Some(Component::Normal(_)) if !file_name.ends_with('/') => Ok(()),
        _ => Err(CatalogError::config(format!(
            "{}: '{}' does not name a file",
            field_name, file_name
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("name", "Bread").is_ok());
        assert!(validate_non_empty_string("name", "").is_err());
        assert!(validate_non_empty_string("name", "   ").is_err());
    }

    #[test]
    fn test_validate_price() {
        assert!(validate_price("price", 0.0).is_ok());
        assert!(validate_price("price", 0.67).is_ok());
        assert!(validate_price("price", -0.01).is_err());
        assert!(validate_price("price", f64::NAN).is_err());
        assert!(validate_price("price", f64::INFINITY).is_err());
    }

    #[test]
    fn test_validate_file_name() {
        assert!(validate_file_name("file_name", "ShopData.json").is_ok());
        assert!(validate_file_name("file_name", "nested/ShopData.json").is_ok());
        assert!(validate_file_name("file_name", "").is_err());
        assert!(validate_file_name("file_name", ".").is_err());
        assert!(validate_file_name("file_name", "data/").is_err());
        assert!(validate_file_name("file_name", "..").is_err());
    }
}
