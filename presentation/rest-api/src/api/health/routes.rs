use chrono::Utc;
use poem_openapi::{Object, OpenApi, payload::Json};
use serde::{Deserialize, Serialize};

use crate::api::product::routes::PRODUCTS_PATH;
use crate::api::tags::ApiTags;

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct HealthCheckResponse {
    /// Service status, always "OK" while the process serves requests
    pub status: String,
    /// Current server timestamp
    pub timestamp: String,
    /// Service version
    pub version: String,
}

/// Service description returned by the root path
#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct IndexResponse {
    pub name: String,
    pub version: String,
    /// Path of the product collection
    pub paths: String,
}

/// Liveness and discovery endpoints.
pub struct Api;

impl Api {
    pub fn new() -> Self {
        Self
    }
}

#[OpenApi]
impl Api {
    /// Health check endpoint
    ///
    /// Returns the current status of the service. Has no side effects and
    /// does not touch the database.
    #[oai(path = "/health", method = "get", tag = "ApiTags::Health")]
    async fn health_check(&self) -> Json<HealthCheckResponse> {
        Json(HealthCheckResponse {
            status: "OK".to_string(),
            timestamp: Utc::now().to_rfc3339(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        })
    }

    /// Service index
    #[oai(path = "/", method = "get", tag = "ApiTags::Health")]
    async fn index(&self) -> Json<IndexResponse> {
        Json(IndexResponse {
            name: "Product Catalog REST API Service".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            paths: PRODUCTS_PATH.to_string(),
        })
    }
}
