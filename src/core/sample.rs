use crate::core::{Item, Result, Shop, ShopData};

/// The fixed two-shop dataset written by `export_sample`.
pub fn sample_shop_data() -> Result<ShopData> {
    let lidl = Shop::new("Lidl", "Oldstreet")
        .with_item(Item::new("Bread", 0.67)?)
        .with_item(Item::new("Milk", 0.74)?);

    let aldi = Shop::new("Aldi", "Bakerstreet")
        .with_item(Item::new("Cheese", 1.42)?)
        .with_item(Item::new("Egg", 0.41)?);

    let mut data = ShopData::new();
    data.add_shop(lidl);
    data.add_shop(aldi);
    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_shape() {
        let data = sample_shop_data().unwrap();

        assert_eq!(data.len(), 2);
        assert_eq!(data.shops[0].name, "Lidl");
        assert_eq!(data.shops[0].location, "Oldstreet");
        assert_eq!(data.shops[1].name, "Aldi");
        assert_eq!(data.shops[1].location, "Bakerstreet");
        assert_eq!(data.item_count(), 4);
        assert_eq!(data.shops[1].price_of("Cheese"), Some(1.42));
    }
}
