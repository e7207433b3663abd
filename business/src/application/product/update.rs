use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::{Product, ProductFields};
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};

pub struct UpdateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateProductUseCase for UpdateProductUseCaseImpl {
    async fn execute(&self, params: UpdateProductParams) -> Result<Product, ProductError> {
        self.logger
            .info(&format!("Updating product: {}", params.id));

        let fields = ProductFields {
            name: params.name,
            description: params.description,
            price: params.price,
            rating: params.rating,
            img_url: params.img_url,
            category: params.category,
            status: params.status,
        };

        if let Err(e) = fields.validate() {
            self.logger
                .warn(&format!("Rejected update of product {}: {}", params.id, e));
            return Err(e);
        }

        // likes is left untouched; only the like action moves it
        let updated_product = self
            .repository
            .update(params.id, &fields)
            .await
            .map_err(|e| ProductError::from_lookup(params.id, e))?;

        self.logger
            .info(&format!("Product updated: {}", updated_product.id));
        Ok(updated_product)
    }
}
