mod client;
mod models;

pub use client::{ApiClient, ApiError};
pub use models::{
    PriceUnit, Product, ProductDraft, ProductId, ProductQuery, ProductSummary, SortKey,
};
