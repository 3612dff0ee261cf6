use crate::utils::error::{CatalogError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_price};
use serde::{Deserialize, Serialize, Serializer};
use std::collections::HashSet;
use std::hash::{Hash, Hasher};

/// A product a shop sells at a fixed price.
///
/// Items have value semantics: two items with the same name and price are
/// the same item, which is what lets a [`Shop`] keep its catalogue as a set.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", try_from = "RawItem")]
pub struct Item {
    name: String,
    price: f64,
}

#[derive(Deserialize)]
#[serde(rename_all = "PascalCase")]
struct RawItem {
    name: String,
    price: f64,
}

impl Item {
    /// Creates an item, rejecting blank names and negative or non-finite
    /// prices.
    pub fn new(name: impl Into<String>, price: f64) -> Result<Self> {
        let name = name.into();
        validate_non_empty_string("name", &name)?;
        validate_price("price", price)?;

        // -0.0 and 0.0 must hash the same
        Ok(Self {
            name,
            price: price + 0.0,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> f64 {
        self.price
    }
}

impl TryFrom<RawItem> for Item {
    type Error = CatalogError;

    fn try_from(raw: RawItem) -> Result<Self> {
        Item::new(raw.name, raw.price)
    }
}

impl PartialEq for Item {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.price.to_bits() == other.price.to_bits()
    }
}

impl Eq for Item {}

impl Hash for Item {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.price.to_bits().hash(state);
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Shop {
    pub name: String,
    pub location: String,
    #[serde(serialize_with = "serialize_catalogue")]
    pub catalogue: HashSet<Item>,
}

/// Writes the catalogue as a JSON array sorted by name then price, so the
/// same data always produces the same file.
fn serialize_catalogue<S>(catalogue: &HashSet<Item>, serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let mut items: Vec<&Item> = catalogue.iter().collect();
    items.sort_by(|a, b| a.name.cmp(&b.name).then(a.price.total_cmp(&b.price)));
    serializer.collect_seq(items)
}

impl Shop {
    pub fn new(name: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            location: location.into(),
            catalogue: HashSet::new(),
        }
    }

    /// Adds an item to the catalogue. Returns `false` if an equal item was
    /// already present.
    pub fn add_item(&mut self, item: Item) -> bool {
        self.catalogue.insert(item)
    }

    pub fn with_item(mut self, item: Item) -> Self {
        self.add_item(item);
        self
    }

    /// Sorted, de-duplicated names of everything this shop sells.
    pub fn available_products(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.catalogue.iter().map(Item::name).collect();
        names.sort_unstable();
        names.dedup();
        names
    }

    pub fn offers(&self, product: &str) -> bool {
        self.catalogue.iter().any(|item| item.name == product)
    }

    /// Lowest price this shop asks for `product`.
    pub fn price_of(&self, product: &str) -> Option<f64> {
        self.catalogue
            .iter()
            .filter(|item| item.name == product)
            .map(Item::price)
            .reduce(f64::min)
    }
}

/// Every shop known to the system, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ShopData {
    pub shops: Vec<Shop>,
}

impl ShopData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_shop(&mut self, shop: Shop) {
        self.shops.push(shop);
    }

    pub fn len(&self) -> usize {
        self.shops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shops.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Shop> {
        self.shops.iter()
    }

    /// Total number of catalogue entries across all shops.
    pub fn item_count(&self) -> usize {
        self.shops.iter().map(|shop| shop.catalogue.len()).sum()
    }

    /// First shop with the given name. Shop names are not required to be
    /// unique.
    pub fn find_shop(&self, name: &str) -> Option<&Shop> {
        self.shops.iter().find(|shop| shop.name == name)
    }

    pub fn shops_offering<'a>(&'a self, product: &'a str) -> impl Iterator<Item = &'a Shop> + 'a {
        self.shops.iter().filter(move |shop| shop.offers(product))
    }

    /// Names from a shopping list that no shop sells, in list order.
    pub fn unavailable_items<'a, I>(&self, shopping_list: I) -> Vec<&'a str>
    where
        I: IntoIterator<Item = &'a str>,
    {
        shopping_list
            .into_iter()
            .filter(|product| self.shops_offering(product).next().is_none())
            .collect()
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl<'a> IntoIterator for &'a ShopData {
    type Item = &'a Shop;
    type IntoIter = std::slice::Iter<'a, Shop>;

    fn into_iter(self) -> Self::IntoIter {
        self.shops.iter()
    }
}
