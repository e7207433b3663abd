use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::value_objects::ProductStatus;

pub struct UpdateProductParams {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub rating: f64,
    pub img_url: String,
    pub category: String,
    pub status: ProductStatus,
}

#[async_trait]
pub trait UpdateProductUseCase: Send + Sync {
    async fn execute(&self, params: UpdateProductParams) -> Result<Product, ProductError>;
}
