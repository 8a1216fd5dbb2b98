//! Catalog entry types

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A single catalog entry.
///
/// `id` is assigned by the store and never taken from request bodies. All
/// other fields default when absent, so sparse create/update bodies are
/// accepted as-is. Specifications use a `BTreeMap` so the persisted JSON is
/// byte-stable across saves of the same collection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Product {
    pub id: u64,
    pub name: String,
    pub image_url: String,
    pub description: String,
    pub price: f64,
    pub rating: f64,
    pub specifications: BTreeMap<String, String>,
    pub category: String,
}

/// A partial update for a [`Product`].
///
/// Only the fields listed here are patchable; `id` is not. Unknown keys and
/// wrong-typed values fail deserialization, which the API reports as a 400.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub image_url: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub rating: Option<f64>,
    pub specifications: Option<BTreeMap<String, String>>,
    pub category: Option<String>,
}

impl ProductPatch {
    /// Overwrite the fields present in the patch, leaving the rest alone.
    pub fn apply_to(self, product: &mut Product) {
        if let Some(name) = self.name {
            product.name = name;
        }
        if let Some(image_url) = self.image_url {
            product.image_url = image_url;
        }
        if let Some(description) = self.description {
            product.description = description;
        }
        if let Some(price) = self.price {
            product.price = price;
        }
        if let Some(rating) = self.rating {
            product.rating = rating;
        }
        if let Some(specifications) = self.specifications {
            product.specifications = specifications;
        }
        if let Some(category) = self.category {
            product.category = category;
        }
    }
}

/// The reference catalog written by `catalogd init`.
pub fn seed_products() -> Vec<Product> {
    vec![
        Product {
            id: 1,
            name: "Laptop".to_string(),
            image_url: "/images/laptop.png".to_string(),
            description: "High-performance laptop".to_string(),
            price: 1200.00,
            rating: 4.5,
            specifications: BTreeMap::from([
                ("RAM".to_string(), "16GB".to_string()),
                ("Storage".to_string(), "512GB SSD".to_string()),
            ]),
            category: "Electronics".to_string(),
        },
        Product {
            id: 2,
            name: "Smartphone".to_string(),
            image_url: "/images/smartphone.png".to_string(),
            description: "Latest model smartphone".to_string(),
            price: 800.00,
            rating: 4.8,
            specifications: BTreeMap::from([
                ("Camera".to_string(), "108MP".to_string()),
                ("Battery".to_string(), "5000mAh".to_string()),
            ]),
            category: "Electronics".to_string(),
        },
        Product {
            id: 3,
            name: "Headphones".to_string(),
            image_url: "/images/headphones.png".to_string(),
            description: "Noise-cancelling headphones".to_string(),
            price: 150.00,
            rating: 4.2,
            specifications: BTreeMap::from([
                ("Connectivity".to_string(), "Bluetooth 5.0".to_string()),
                ("Driver size".to_string(), "40mm".to_string()),
            ]),
            category: "Accessories".to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sparse_body_defaults_missing_fields() {
        let product: Product =
            serde_json::from_str(r#"{"name":"New Product","category":"Electronics"}"#).unwrap();
        assert_eq!(product.id, 0);
        assert_eq!(product.name, "New Product");
        assert_eq!(product.price, 0.0);
        assert!(product.specifications.is_empty());
    }

    #[test]
    fn test_patch_applies_only_present_fields() {
        let mut product = seed_products().remove(0);
        let patch: ProductPatch =
            serde_json::from_str(r#"{"price":1250.0,"category":"Premium Electronics"}"#).unwrap();

        patch.apply_to(&mut product);

        assert_eq!(product.price, 1250.0);
        assert_eq!(product.category, "Premium Electronics");
        assert_eq!(product.name, "Laptop");
        assert_eq!(product.rating, 4.5);
    }

    #[test]
    fn test_patch_rejects_unknown_fields() {
        let result = serde_json::from_str::<ProductPatch>(r#"{"warranty":"2 years"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_patch_rejects_id() {
        let result = serde_json::from_str::<ProductPatch>(r#"{"id":9}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_patch_rejects_mistyped_values() {
        assert!(serde_json::from_str::<ProductPatch>(r#"{"price":"cheap"}"#).is_err());
        assert!(serde_json::from_str::<ProductPatch>(r#"{"specifications":"fast"}"#).is_err());
    }

    #[test]
    fn test_empty_patch_is_a_no_op() {
        let mut product = seed_products().remove(1);
        let original = product.clone();
        let patch: ProductPatch = serde_json::from_str("{}").unwrap();

        patch.apply_to(&mut product);

        assert_eq!(product, original);
    }

    #[test]
    fn test_seed_catalog_shape() {
        let seed = seed_products();
        assert_eq!(seed.len(), 3);
        assert_eq!(
            seed.iter().map(|p| p.id).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
        assert_eq!(seed[0].name, "Laptop");
        assert_eq!(seed[2].category, "Accessories");
    }

    #[test]
    fn test_product_json_field_names() {
        let json = serde_json::to_value(&seed_products()[0]).unwrap();
        assert!(json.get("image_url").is_some());
        assert!(json.get("specifications").is_some());
        assert_eq!(json["category"], "Electronics");
    }
}
