//! A read-only catalog entry as served by the product API.
//!
//! The cart keeps its own copy of a `ProductRef` taken at the time of the add, so later
//! catalog changes (price, stock) do not reach lines already in the cart.
//!
//! Wire names follow the mock API (`productName`, `image`, `thumbnail`).
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Products.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub u64);

impl From<u64> for ProductId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Image URLs for a product.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductImages {
    #[serde(rename = "image", default)]
    pub primary: String,
    #[serde(default)]
    pub thumbnail: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRef {
    pub id: ProductId,
    #[serde(rename = "productName")]
    pub name: String,
    /// Read from JSON numbers or strings; written as a string so stored carts keep full precision.
    pub price: Decimal,
    pub stock: u32,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub manufacturer: String,
    #[serde(flatten)]
    pub images: ProductImages,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
}

impl ProductRef {
    /// Creates a product with empty category, manufacturer and images.
    ///
    /// # Arguments
    /// * `id` - Catalog identifier
    /// * `name` - Display name
    /// * `price` - Unit price
    /// * `stock` - Units available
    pub fn new(id: impl Into<ProductId>, name: impl Into<String>, price: Decimal, stock: u32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            stock,
            category: String::new(),
            manufacturer: String::new(),
            images: ProductImages::default(),
            description: None,
            sku: None,
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_manufacturer(mut self, manufacturer: impl Into<String>) -> Self {
        self.manufacturer = manufacturer.into();
        self
    }

    pub fn is_in_stock(&self) -> bool {
        self.stock > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn deserializes_mock_api_product() {
        let json = r#"{
            "id": 7,
            "productName": "Trail Runner",
            "price": 89.5,
            "stock": 12,
            "category": "Shoes",
            "manufacturer": "Acme",
            "image": "https://img/7.png",
            "thumbnail": "https://img/7-thumb.png",
            "sku": "TR-7",
            "rating": 4.5
        }"#;

        let product: ProductRef = serde_json::from_str(json).unwrap();
        assert_eq!(product.id, ProductId(7));
        assert_eq!(product.name, "Trail Runner");
        assert_eq!(product.price, dec!(89.50));
        assert_eq!(product.stock, 12);
        assert_eq!(product.images.primary, "https://img/7.png");
        assert_eq!(product.images.thumbnail, "https://img/7-thumb.png");
        assert_eq!(product.sku.as_deref(), Some("TR-7"));
        assert_eq!(product.description, None);
    }

    #[test]
    fn missing_optional_fields_default_to_empty() {
        let json = r#"{"id": 1, "productName": "Mug", "price": 5, "stock": 0}"#;
        let product: ProductRef = serde_json::from_str(json).unwrap();
        assert_eq!(product.category, "");
        assert_eq!(product.images, ProductImages::default());
        assert!(!product.is_in_stock());
    }

    #[test]
    fn price_is_written_as_an_exact_string() {
        let product = ProductRef::new(3, "Scale", dec!(0.1234567890123456789), 2);

        let json = serde_json::to_value(&product).unwrap();
        assert_eq!(json["price"], "0.1234567890123456789");

        let back: ProductRef = serde_json::from_value(json).unwrap();
        assert_eq!(back.price, dec!(0.1234567890123456789));
        assert_eq!(back, product);
    }
}
