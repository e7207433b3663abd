use std::sync::Arc;

use poem::{Body, Request};
use poem_openapi::param::{Path, Query};
use poem_openapi::types::ParseFromJSON;
use poem_openapi::{OpenApi, payload::Json};

use business::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};
use business::domain::product::use_cases::delete::{DeleteProductParams, DeleteProductUseCase};
use business::domain::product::use_cases::get_all::{GetAllProductsParams, GetAllProductsUseCase};
use business::domain::product::use_cases::get_by_id::{
    GetProductByIdParams, GetProductByIdUseCase,
};
use business::domain::product::use_cases::like::{LikeProductParams, LikeProductUseCase};
use business::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};
use business::domain::product::value_objects::ProductFilter;

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::product::dto::{CreateProductRequest, ProductResponse, UpdateProductRequest};
use crate::api::tags::ApiTags;

pub const PRODUCTS_PATH: &str = "/api/products";

pub struct ProductApi {
    create_use_case: Arc<dyn CreateProductUseCase>,
    get_all_use_case: Arc<dyn GetAllProductsUseCase>,
    get_by_id_use_case: Arc<dyn GetProductByIdUseCase>,
    update_use_case: Arc<dyn UpdateProductUseCase>,
    delete_use_case: Arc<dyn DeleteProductUseCase>,
    like_use_case: Arc<dyn LikeProductUseCase>,
}

impl ProductApi {
    pub fn new(
        create_use_case: Arc<dyn CreateProductUseCase>,
        get_all_use_case: Arc<dyn GetAllProductsUseCase>,
        get_by_id_use_case: Arc<dyn GetProductByIdUseCase>,
        update_use_case: Arc<dyn UpdateProductUseCase>,
        delete_use_case: Arc<dyn DeleteProductUseCase>,
        like_use_case: Arc<dyn LikeProductUseCase>,
    ) -> Self {
        Self {
            create_use_case,
            get_all_use_case,
            get_by_id_use_case,
            update_use_case,
            delete_use_case,
            like_use_case,
        }
    }
}

fn is_json_content_type(content_type: &str) -> bool {
    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    essence == "application/json" || essence.ends_with("+json")
}

/// Reads the PUT body by hand so that the id lookup can run before any
/// content negotiation.
async fn parse_update_body(
    req: &Request,
    body: Body,
) -> Result<UpdateProductRequest, UpdateProductResponse> {
    match req.content_type() {
        Some(content_type) if is_json_content_type(content_type) => {}
        other => {
            return Err(UpdateProductResponse::UnsupportedMediaType(Json(
                ErrorResponse::new(
                    "UnsupportedMediaType",
                    format!(
                        "Content-Type must be application/json, got: {}",
                        other.unwrap_or("none")
                    ),
                ),
            )));
        }
    }

    let bad_request = |message: String| {
        UpdateProductResponse::BadRequest(Json(ErrorResponse::new("ValidationError", message)))
    };

    let bytes = body
        .into_bytes()
        .await
        .map_err(|e| bad_request(e.to_string()))?;
    let value: serde_json::Value =
        serde_json::from_slice(&bytes).map_err(|e| bad_request(format!("Invalid JSON: {e}")))?;

    UpdateProductRequest::parse_from_json(Some(value)).map_err(|e| bad_request(e.into_message()))
}

/// Product catalog API
///
/// Endpoints for creating, listing, reading, updating, deleting and liking
/// products.
#[OpenApi]
impl ProductApi {
    /// Create a new product
    ///
    /// The server assigns the id and starts the like counter at zero. The
    /// `Location` header points at the new resource.
    #[oai(path = "/api/products", method = "post", tag = "ApiTags::Products")]
    async fn create_product(&self, body: Json<CreateProductRequest>) -> CreateProductResponse {
        let params = CreateProductParams {
            name: body.0.name,
            description: body.0.description,
            price: body.0.price,
            rating: body.0.rating,
            img_url: body.0.img_url,
            category: body.0.category,
            status: body.0.status.into(),
        };

        match self.create_use_case.execute(params).await {
            Ok(product) => {
                let location = format!("{}/{}", PRODUCTS_PATH, product.id);
                CreateProductResponse::Created(Json(product.into()), location)
            }
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => CreateProductResponse::BadRequest(json),
                    _ => CreateProductResponse::InternalError(json),
                }
            }
        }
    }

    /// List products
    ///
    /// Returns every product, or only those whose fields exactly equal the
    /// given query parameters. Several parameters are combined with AND.
    #[oai(path = "/api/products", method = "get", tag = "ApiTags::Products")]
    async fn get_all_products(
        &self,
        name: Query<Option<String>>,
        category: Query<Option<String>>,
        price: Query<Option<f64>>,
        rating: Query<Option<f64>>,
    ) -> GetAllProductsResponse {
        let filter = ProductFilter {
            name: name.0,
            category: category.0,
            price: price.0,
            rating: rating.0,
        };

        match self
            .get_all_use_case
            .execute(GetAllProductsParams { filter })
            .await
        {
            Ok(products) => {
                let responses: Vec<ProductResponse> =
                    products.into_iter().map(|p| p.into()).collect();
                GetAllProductsResponse::Ok(Json(responses))
            }
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetAllProductsResponse::InternalError(json)
            }
        }
    }

    /// Get a product by ID
    #[oai(path = "/api/products/:id", method = "get", tag = "ApiTags::Products")]
    async fn get_product_by_id(&self, id: Path<i64>) -> GetProductByIdResponse {
        match self
            .get_by_id_use_case
            .execute(GetProductByIdParams { id: id.0 })
            .await
        {
            Ok(product) => GetProductByIdResponse::Ok(Json(product.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetProductByIdResponse::NotFound(json),
                    _ => GetProductByIdResponse::InternalError(json),
                }
            }
        }
    }

    /// Update a product
    ///
    /// Replaces all mutable fields of an existing product. The like counter
    /// is kept. Unknown ids answer 404 before the body is looked at.
    #[oai(path = "/api/products/:id", method = "put", tag = "ApiTags::Products")]
    async fn update_product(
        &self,
        id: Path<i64>,
        req: &Request,
        body: Body,
    ) -> UpdateProductResponse {
        if let Err(err) = self
            .get_by_id_use_case
            .execute(GetProductByIdParams { id: id.0 })
            .await
        {
            let (status, json) = err.into_error_response();
            return match status.as_u16() {
                404 => UpdateProductResponse::NotFound(json),
                _ => UpdateProductResponse::InternalError(json),
            };
        }

        let request = match parse_update_body(req, body).await {
            Ok(request) => request,
            Err(response) => return response,
        };

        let params = UpdateProductParams {
            id: id.0,
            name: request.name,
            description: request.description,
            price: request.price,
            rating: request.rating,
            img_url: request.img_url,
            category: request.category,
            status: request.status.into(),
        };

        match self.update_use_case.execute(params).await {
            Ok(product) => UpdateProductResponse::Ok(Json(product.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => UpdateProductResponse::BadRequest(json),
                    404 => UpdateProductResponse::NotFound(json),
                    _ => UpdateProductResponse::InternalError(json),
                }
            }
        }
    }

    /// Delete a product
    ///
    /// Always answers 204, whether or not the product existed.
    #[oai(path = "/api/products/:id", method = "delete", tag = "ApiTags::Products")]
    async fn delete_product(&self, id: Path<i64>) -> DeleteProductResponse {
        match self
            .delete_use_case
            .execute(DeleteProductParams { id: id.0 })
            .await
        {
            Ok(()) => DeleteProductResponse::NoContent,
            Err(err) => {
                let (_status, json) = err.into_error_response();
                DeleteProductResponse::InternalError(json)
            }
        }
    }

    /// Like a product
    ///
    /// Increments the like counter by one and returns the updated product.
    #[oai(path = "/api/products/:id/like", method = "post", tag = "ApiTags::Products")]
    async fn like_product(&self, id: Path<i64>) -> LikeProductResponse {
        match self
            .like_use_case
            .execute(LikeProductParams { id: id.0 })
            .await
        {
            Ok(product) => LikeProductResponse::Ok(Json(product.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => LikeProductResponse::NotFound(json),
                    _ => LikeProductResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum CreateProductResponse {
    #[oai(status = 201)]
    Created(
        Json<ProductResponse>,
        #[oai(header = "Location")]
        String,
    ),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetAllProductsResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<ProductResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetProductByIdResponse {
    #[oai(status = 200)]
    Ok(Json<ProductResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum UpdateProductResponse {
    #[oai(status = 200)]
    Ok(Json<ProductResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 415)]
    UnsupportedMediaType(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum DeleteProductResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum LikeProductResponse {
    #[oai(status = 200)]
    Ok(Json<ProductResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
