// Wire types for the backend product API
use crate::catalog::CategoryId;
use serde::{Deserialize, Serialize};

pub type ProductId = i64;

/// How a price is quoted: per item or per gram.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PriceUnit {
    #[serde(rename = "ea")]
    Each,
    #[serde(rename = "g")]
    Gram,
}

impl PriceUnit {
    pub fn label(self) -> &'static str {
        match self {
            PriceUnit::Each => "ea",
            PriceUnit::Gram => "per g",
        }
    }
}

/// Full product record, as returned by `GET /products/{id}`.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub product_id: ProductId,
    pub name: String,
    pub price: f64,
    pub price_unit_type: PriceUnit,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub images: Vec<String>,
    pub quantity: i64,
    #[serde(default)]
    pub categories: Vec<CategoryId>,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub review_count: i64,
}

/// Listing entry, as returned by `GET /products`.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductSummary {
    pub product_id: ProductId,
    pub name: String,
    pub price: f64,
    pub price_unit_type: PriceUnit,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub review_count: i64,
}

/// Create/update payload for the admin console.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDraft {
    pub name: String,
    pub price: f64,
    pub price_unit_type: PriceUnit,
    pub description: String,
    pub quantity: i64,
    pub categories: Vec<CategoryId>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortKey {
    Relevance,
    PriceLow,
    PriceHigh,
}

impl SortKey {
    pub const ALL: [SortKey; 3] = [SortKey::Relevance, SortKey::PriceLow, SortKey::PriceHigh];

    /// Wire value in the listing query string.
    pub fn as_query(self) -> &'static str {
        match self {
            SortKey::Relevance => "relevance",
            SortKey::PriceLow => "priceLow",
            SortKey::PriceHigh => "priceHigh",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortKey::Relevance => "Relevance",
            SortKey::PriceLow => "Low Price",
            SortKey::PriceHigh => "High Price",
        }
    }
}

/// Everything that scopes one product listing request. Also used as the
/// identity key for listing state: a response only applies if its query
/// still matches the page's current one.
#[derive(Clone, Debug, PartialEq)]
pub struct ProductQuery {
    pub category: Option<CategoryId>,
    pub search: Option<String>,
    pub sort: SortKey,
    pub page: u32,
    pub page_size: u32,
}

impl ProductQuery {
    pub fn for_category(category: Option<CategoryId>, page_size: u32) -> Self {
        Self {
            category,
            search: None,
            sort: SortKey::Relevance,
            page: 1,
            page_size,
        }
    }
}

/// Error payload the backend uses for application-level failures.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody {
    pub error_message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_product_summary() {
        let json = r#"{"productId": 7, "name": "Bananas 1kg", "price": 3.5,
            "priceUnitType": "ea", "image": "/img/b.png", "rating": 4.5, "reviewCount": 12}"#;
        let summary: ProductSummary = serde_json::from_str(json).unwrap();
        assert_eq!(summary.product_id, 7);
        assert_eq!(summary.price_unit_type, PriceUnit::Each);
        assert_eq!(summary.review_count, 12);
    }

    #[test]
    fn decodes_product_with_missing_optionals() {
        let json = r#"{"productId": 1, "name": "Loose Apples", "price": 0.8,
            "priceUnitType": "g", "quantity": 240}"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.price_unit_type, PriceUnit::Gram);
        assert!(product.images.is_empty());
        assert!(product.categories.is_empty());
        assert_eq!(product.rating, 0.0);
    }

    #[test]
    fn draft_serializes_camel_case() {
        let draft = ProductDraft {
            name: "Sourdough".into(),
            price: 5.0,
            price_unit_type: PriceUnit::Each,
            description: String::new(),
            quantity: 20,
            categories: vec![6, 7],
        };
        let json = serde_json::to_value(&draft).unwrap();
        assert_eq!(json["priceUnitType"], "ea");
        assert_eq!(json["categories"][1], 7);
    }

    #[test]
    fn decodes_error_body() {
        let body: ErrorBody = serde_json::from_str(r#"{"errorMessage": "out of stock"}"#).unwrap();
        assert_eq!(body.error_message, "out of stock");
    }
}
