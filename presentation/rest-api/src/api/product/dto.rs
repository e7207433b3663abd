use poem_openapi::{Enum, Object};
use serde::{Deserialize, Serialize};

use business::domain::product::model::Product;
use business::domain::product::value_objects::ProductStatus;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Enum)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProductStatusDto {
    #[oai(rename = "ACTIVE")]
    Active,
    #[oai(rename = "INACTIVE")]
    Inactive,
    #[oai(rename = "DISCONTINUED")]
    Discontinued,
}

impl From<ProductStatus> for ProductStatusDto {
    fn from(status: ProductStatus) -> Self {
        match status {
            ProductStatus::Active => ProductStatusDto::Active,
            ProductStatus::Inactive => ProductStatusDto::Inactive,
            ProductStatus::Discontinued => ProductStatusDto::Discontinued,
        }
    }
}

impl From<ProductStatusDto> for ProductStatus {
    fn from(dto: ProductStatusDto) -> Self {
        match dto {
            ProductStatusDto::Active => ProductStatus::Active,
            ProductStatusDto::Inactive => ProductStatus::Inactive,
            ProductStatusDto::Discontinued => ProductStatus::Discontinued,
        }
    }
}

/// Body of `POST /api/products`. `id` and `likes` are assigned by the server;
/// if a client sends them they are ignored.
#[derive(Debug, Clone, Object)]
pub struct CreateProductRequest {
    /// Product name (cannot be empty)
    pub name: String,
    /// Free-text description
    pub description: String,
    /// Unit price, non-negative
    pub price: f64,
    /// Average customer rating
    pub rating: f64,
    /// Image URL
    pub img_url: String,
    /// Category (at most 120 characters)
    pub category: String,
    /// Lifecycle status
    pub status: ProductStatusDto,
}

/// Body of `PUT /api/products/{id}`. Replaces every mutable field; `likes`
/// is not affected.
#[derive(Debug, Clone, Object)]
pub struct UpdateProductRequest {
    /// Product name (cannot be empty)
    pub name: String,
    /// Free-text description
    pub description: String,
    /// Unit price, non-negative
    pub price: f64,
    /// Average customer rating
    pub rating: f64,
    /// Image URL
    pub img_url: String,
    /// Category (at most 120 characters)
    pub category: String,
    /// Lifecycle status
    pub status: ProductStatusDto,
}

#[derive(Debug, Clone, Object)]
pub struct ProductResponse {
    /// Server-assigned identifier
    pub id: i64,
    pub name: String,
    pub img_url: String,
    pub description: String,
    pub price: f64,
    pub rating: f64,
    pub category: String,
    pub status: ProductStatusDto,
    /// Number of times the product was liked
    pub likes: i32,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            img_url: product.img_url,
            description: product.description,
            price: product.price,
            rating: product.rating,
            category: product.category,
            status: product.status.into(),
            likes: product.likes,
        }
    }
}
