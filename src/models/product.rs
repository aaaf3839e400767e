use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// A product document as stored in the catalog collection.
///
/// Every field except the id is optional: records missing fields degrade to
/// empty values rather than failing deserialization. Fields this pipeline
/// does not use (images, timestamps) are ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    #[serde(rename = "_id")]
    pub id: ObjectId,

    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub category: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    /// Available clothing sizes (XS, S, M, ...).
    #[serde(default)]
    pub sizes: Vec<String>,

    /// Available shoe sizes (UK 5, UK 6, ...).
    #[serde(default, rename = "shoeSizes")]
    pub shoe_sizes: Vec<String>,

    #[serde(default)]
    pub price: Option<f64>,

    #[serde(default, rename = "isFeatured")]
    pub is_featured: bool,
}

impl Product {
    /// Stringified store-assigned identifier, used as the vector id.
    pub fn id_string(&self) -> String {
        self.id.to_hex()
    }

    /// Display label for progress output: the name when present, the id
    /// otherwise.
    pub fn label(&self) -> String {
        match self.name.as_deref() {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => self.id_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_document() {
        let doc = mongodb::bson::doc! {
            "_id": ObjectId::new(),
            "name": "Shoe",
            "category": "Footwear",
            "description": "Nice",
            "sizes": ["S", "M"],
            "shoeSizes": ["UK 5"],
            "price": 49.99,
            "isFeatured": true,
            "image": "ignored.jpg",
        };
        let product: Product = mongodb::bson::from_document(doc).unwrap();
        assert_eq!(product.name.as_deref(), Some("Shoe"));
        assert_eq!(product.shoe_sizes, vec!["UK 5"]);
        assert_eq!(product.price, Some(49.99));
        assert!(product.is_featured);
    }

    #[test]
    fn test_deserialize_minimal_document() {
        let doc = mongodb::bson::doc! { "_id": ObjectId::new() };
        let product: Product = mongodb::bson::from_document(doc).unwrap();
        assert!(product.name.is_none());
        assert!(product.sizes.is_empty());
        assert!(product.shoe_sizes.is_empty());
        assert!(product.price.is_none());
        assert!(!product.is_featured);
    }

    #[test]
    fn test_label_falls_back_to_id() {
        let doc = mongodb::bson::doc! { "_id": ObjectId::new(), "name": "" };
        let product: Product = mongodb::bson::from_document(doc).unwrap();
        assert_eq!(product.label(), product.id_string());
        assert_eq!(product.label().len(), 24);
    }
}
