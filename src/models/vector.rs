use serde::{Deserialize, Serialize};

use super::product::Product;

/// Metadata stored alongside each vector in the index.
///
/// Absent product fields are coerced (empty string, 0.0) so the index never
/// sees null metadata values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VectorMetadata {
    #[serde(rename = "productId")]
    pub product_id: String,
    pub name: String,
    pub category: String,
    pub price: f64,
}

/// One entry of an upsert batch: id, embedding values, metadata.
/// Serializes to the vector index's wire shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VectorRecord {
    pub id: String,
    pub values: Vec<f32>,
    pub metadata: VectorMetadata,
}

impl VectorRecord {
    pub fn from_product(product: &Product, values: Vec<f32>) -> Self {
        let id = product.id_string();
        Self {
            metadata: VectorMetadata {
                product_id: id.clone(),
                name: product.name.clone().unwrap_or_default(),
                category: product.category.clone().unwrap_or_default(),
                price: product.price.unwrap_or(0.0),
            },
            id,
            values,
        }
    }
}
