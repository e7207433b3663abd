use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::{Product, ProductFields};
use super::value_objects::ProductFilter;

#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn find(&self, filter: &ProductFilter) -> Result<Vec<Product>, RepositoryError>;
    async fn get_by_id(&self, id: i64) -> Result<Product, RepositoryError>;
    /// Inserts a new row; the store assigns the id and starts `likes` at 0.
    async fn create(&self, fields: &ProductFields) -> Result<Product, RepositoryError>;
    async fn update(&self, id: i64, fields: &ProductFields) -> Result<Product, RepositoryError>;
    async fn increment_likes(&self, id: i64) -> Result<Product, RepositoryError>;
    /// Returns whether a row was removed.
    async fn delete(&self, id: i64) -> Result<bool, RepositoryError>;
}
