//! Builds the descriptive text that gets embedded for each product.

use crate::models::Product;

/// Fixed marketing phrase appended to featured products.
const FEATURED_PHRASE: &str = "Featured product. Premium quality.";

/// Build the embedding input text for a product.
///
/// Deterministic and infallible: parts appear in a fixed order, absent or
/// empty fields are simply omitted, and a product with no usable fields
/// yields an empty string.
pub fn build_product_text(product: &Product) -> String {
    let mut parts: Vec<String> = Vec::new();

    for field in [&product.name, &product.category, &product.description] {
        if let Some(value) = field
            && !value.is_empty()
        {
            parts.push(value.clone());
        }
    }

    if !product.sizes.is_empty() {
        parts.push(format!("Available sizes: {}", product.sizes.join(", ")));
    }

    if !product.shoe_sizes.is_empty() {
        parts.push(format!(
            "Available shoe sizes: {}",
            product.shoe_sizes.join(", ")
        ));
    }

    if let Some(price) = product.price
        && price != 0.0
    {
        parts.push(format!("Price: ${}", price));
    }

    if product.is_featured {
        parts.push(FEATURED_PHRASE.to_string());
    }

    parts.join(" ").trim().to_string()
}

#[cfg(test)]
mod tests {
    use mongodb::bson::oid::ObjectId;

    use super::*;

    fn product(doc: mongodb::bson::Document) -> Product {
        let mut doc = doc;
        doc.insert("_id", ObjectId::new());
        mongodb::bson::from_document(doc).unwrap()
    }

    #[test]
    fn test_full_product_text() {
        let product = product(mongodb::bson::doc! {
            "name": "Shoe",
            "category": "Footwear",
            "description": "Nice",
            "sizes": ["S", "M"],
            "shoeSizes": [],
            "price": 49.99,
            "isFeatured": true,
        });
        assert_eq!(
            build_product_text(&product),
            "Shoe Footwear Nice Available sizes: S, M Price: $49.99 Featured product. Premium quality."
        );
    }

    #[test]
    fn test_empty_product_yields_empty_string() {
        let product = product(mongodb::bson::doc! {});
        assert_eq!(build_product_text(&product), "");
    }

    #[test]
    fn test_deterministic() {
        let product = product(mongodb::bson::doc! {
            "name": "Belt",
            "category": "Accessories",
            "price": 19.5,
        });
        let first = build_product_text(&product);
        let second = build_product_text(&product);
        assert_eq!(first, second);
        assert_eq!(first, "Belt Accessories Price: $19.5");
    }

    #[test]
    fn test_zero_price_omitted() {
        let product = product(mongodb::bson::doc! {
            "name": "Sample",
            "price": 0.0,
        });
        assert_eq!(build_product_text(&product), "Sample");
    }

    #[test]
    fn test_shoe_sizes_included() {
        let product = product(mongodb::bson::doc! {
            "name": "Runner",
            "shoeSizes": ["UK 5", "UK 6"],
        });
        assert_eq!(
            build_product_text(&product),
            "Runner Available shoe sizes: UK 5, UK 6"
        );
    }

    #[test]
    fn test_whole_number_price_rendering() {
        let product = product(mongodb::bson::doc! {
            "name": "Cap",
            "price": 50.0,
        });
        assert_eq!(build_product_text(&product), "Cap Price: $50");
    }
}
