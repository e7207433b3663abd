use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::like::{LikeProductParams, LikeProductUseCase};

pub struct LikeProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl LikeProductUseCase for LikeProductUseCaseImpl {
    async fn execute(&self, params: LikeProductParams) -> Result<Product, ProductError> {
        self.logger
            .info(&format!("Liking product: {}", params.id));

        let product = self
            .repository
            .increment_likes(params.id)
            .await
            .map_err(|e| ProductError::from_lookup(params.id, e))?;

        self.logger.info(&format!(
            "Product {} now has {} likes",
            product.id, product.likes
        ));
        Ok(product)
    }
}
