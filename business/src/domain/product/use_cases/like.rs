use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;

pub struct LikeProductParams {
    pub id: i64,
}

#[async_trait]
pub trait LikeProductUseCase: Send + Sync {
    async fn execute(&self, params: LikeProductParams) -> Result<Product, ProductError>;
}
