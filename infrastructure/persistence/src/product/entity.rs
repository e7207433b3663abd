use sqlx::FromRow;

use business::domain::errors::RepositoryError;
use business::domain::product::model::{Product, ProductFields};
use business::domain::product::value_objects::ProductStatus;

pub const PRODUCT_COLUMNS: &str =
    "id, name, description, price, rating, img_url, category, status, likes";

#[derive(Debug, FromRow)]
pub struct ProductEntity {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub rating: f64,
    pub img_url: String,
    pub category: String,
    pub status: String,
    pub likes: i32,
}

impl ProductEntity {
    pub fn into_domain(self) -> Result<Product, RepositoryError> {
        let status = self.status.parse::<ProductStatus>().map_err(|e| {
            tracing::error!(product_id = self.id, "{}", e);
            RepositoryError::CorruptedRow
        })?;

        Ok(Product::from_repository(
            self.id,
            ProductFields {
                name: self.name,
                description: self.description,
                price: self.price,
                rating: self.rating,
                img_url: self.img_url,
                category: self.category,
                status,
            },
            self.likes,
        ))
    }
}
