//! Category Endpoints

use goalboard_core::models::{Category, CreateCategoryRequest};
use goalboard_core::{schema, ApiError};

use super::ApiClient;

impl ApiClient {
    pub async fn list_categories(&self) -> Result<Vec<Category>, ApiError> {
        self.get_json("/api/categories").await
    }

    pub async fn create_category(&self, name: &str) -> Result<(), ApiError> {
        let request = CreateCategoryRequest { name: name.to_string() };
        let (status, body) = self.post_json("/api/categories/create", &request).await?;
        schema::decode_mutation(status, &body)
    }

    /// Goals in the category become uncategorized server-side.
    pub async fn delete_category(&self, id: u32) -> Result<(), ApiError> {
        self.post_empty(&format!("/api/categories/delete/{}", id)).await
    }
}
