// Blocking HTTP wrapper around the backend product API. Runs on the IO
// worker thread, never on the UI thread.
use super::models::{ErrorBody, Product, ProductDraft, ProductId, ProductQuery, ProductSummary};
use crate::catalog::CategoryNode;
use reqwest::blocking::{Client, Response};
use reqwest::StatusCode;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    /// The backend answered with its `{"errorMessage": ...}` shape.
    #[error("{0}")]
    Backend(String),
    #[error("unexpected response status {0}")]
    Status(StatusCode),
    #[error("invalid response body: {0}")]
    Decode(#[from] serde_json::Error),
}

pub struct ApiClient {
    base_url: String,
    http: Client,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Self {
        let http = Client::builder()
            .timeout(Duration::from_secs(15))
            .build()
            .unwrap_or_else(|_| Client::new());
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// `GET /products/categories` - the whole taxonomy in one shot.
    pub fn category_tree(&self) -> Result<Vec<CategoryNode>, ApiError> {
        let response = self.http.get(self.url("/products/categories")).send()?;
        decode(response)
    }

    /// `GET /products` scoped by the listing query.
    pub fn products(&self, query: &ProductQuery) -> Result<Vec<ProductSummary>, ApiError> {
        let mut params: Vec<(&str, String)> = Vec::new();
        if let Some(category) = query.category {
            params.push(("categoryId", category.to_string()));
        }
        params.push(("sort", query.sort.as_query().to_string()));
        if let Some(search) = &query.search {
            params.push(("search", search.clone()));
        }
        params.push(("page", query.page.to_string()));
        params.push(("pageSize", query.page_size.to_string()));

        let response = self.http.get(self.url("/products")).query(&params).send()?;
        decode(response)
    }

    pub fn product(&self, id: ProductId) -> Result<Product, ApiError> {
        let response = self.http.get(self.url(&format!("/products/{id}"))).send()?;
        decode(response)
    }

    pub fn create_product(&self, draft: &ProductDraft) -> Result<ProductId, ApiError> {
        let response = self.http.post(self.url("/products")).json(draft).send()?;
        let created: CreatedProduct = decode(response)?;
        Ok(created.product_id)
    }

    pub fn update_product(&self, id: ProductId, draft: &ProductDraft) -> Result<ProductId, ApiError> {
        let response = self
            .http
            .patch(self.url(&format!("/products/{id}")))
            .json(draft)
            .send()?;
        let updated: CreatedProduct = decode(response)?;
        Ok(updated.product_id)
    }

    pub fn delete_product(&self, id: ProductId) -> Result<ProductId, ApiError> {
        let response = self.http.delete(self.url(&format!("/products/{id}"))).send()?;
        let deleted: CreatedProduct = decode(response)?;
        Ok(deleted.product_id)
    }
}

#[derive(serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreatedProduct {
    product_id: ProductId,
}

/// Decode a success body, or turn a failure response into the most
/// specific error available (backend message when it sent one).
fn decode<T: serde::de::DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let status = response.status();
    let body = response.text()?;
    if status.is_success() {
        return Ok(serde_json::from_str(&body)?);
    }
    match serde_json::from_str::<ErrorBody>(&body) {
        Ok(error) => Err(ApiError::Backend(error.error_message)),
        Err(_) => Err(ApiError::Status(status)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_trailing_slash_is_normalized() {
        let client = ApiClient::new("http://localhost:7192/api/v1/");
        assert_eq!(
            client.url("/products/categories"),
            "http://localhost:7192/api/v1/products/categories"
        );
    }
}
