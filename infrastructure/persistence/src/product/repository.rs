use async_trait::async_trait;
use sqlx::PgPool;

use business::domain::errors::RepositoryError;
use business::domain::product::model::{Product, ProductFields};
use business::domain::product::repository::ProductRepository;
use business::domain::product::value_objects::ProductFilter;

use super::entity::{PRODUCT_COLUMNS, ProductEntity};

pub struct ProductRepositoryPostgres {
    pool: PgPool,
}

impl ProductRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn database_error(error: sqlx::Error) -> RepositoryError {
    tracing::error!(error = %error, "products query failed");
    RepositoryError::DatabaseError
}

#[async_trait]
impl ProductRepository for ProductRepositoryPostgres {
    async fn find(&self, filter: &ProductFilter) -> Result<Vec<Product>, RepositoryError> {
        // Unset criteria bind NULL and drop out of the predicate.
        let sql = format!(
            "SELECT {PRODUCT_COLUMNS} FROM products
            WHERE ($1::TEXT IS NULL OR name = $1)
              AND ($2::TEXT IS NULL OR category = $2)
              AND ($3::FLOAT8 IS NULL OR price = $3)
              AND ($4::FLOAT8 IS NULL OR rating = $4)
            ORDER BY id"
        );

        let entities = sqlx::query_as::<_, ProductEntity>(&sql)
            .bind(filter.name.as_deref())
            .bind(filter.category.as_deref())
            .bind(filter.price)
            .bind(filter.rating)
            .fetch_all(&self.pool)
            .await
            .map_err(database_error)?;

        entities.into_iter().map(|e| e.into_domain()).collect()
    }

    async fn get_by_id(&self, id: i64) -> Result<Product, RepositoryError> {
        let sql = format!("SELECT {PRODUCT_COLUMNS} FROM products WHERE id = $1");

        let entity = sqlx::query_as::<_, ProductEntity>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(database_error)?
            .ok_or(RepositoryError::NotFound)?;

        entity.into_domain()
    }

    async fn create(&self, fields: &ProductFields) -> Result<Product, RepositoryError> {
        let sql = format!(
            "INSERT INTO products (name, description, price, rating, img_url, category, status)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING {PRODUCT_COLUMNS}"
        );

        let entity = sqlx::query_as::<_, ProductEntity>(&sql)
            .bind(&fields.name)
            .bind(&fields.description)
            .bind(fields.price)
            .bind(fields.rating)
            .bind(&fields.img_url)
            .bind(&fields.category)
            .bind(fields.status.to_string())
            .fetch_one(&self.pool)
            .await
            .map_err(database_error)?;

        entity.into_domain()
    }

    async fn update(&self, id: i64, fields: &ProductFields) -> Result<Product, RepositoryError> {
        let sql = format!(
            "UPDATE products SET
                name = $2,
                description = $3,
                price = $4,
                rating = $5,
                img_url = $6,
                category = $7,
                status = $8
            WHERE id = $1
            RETURNING {PRODUCT_COLUMNS}"
        );

        let entity = sqlx::query_as::<_, ProductEntity>(&sql)
            .bind(id)
            .bind(&fields.name)
            .bind(&fields.description)
            .bind(fields.price)
            .bind(fields.rating)
            .bind(&fields.img_url)
            .bind(&fields.category)
            .bind(fields.status.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(database_error)?
            .ok_or(RepositoryError::NotFound)?;

        entity.into_domain()
    }

    async fn increment_likes(&self, id: i64) -> Result<Product, RepositoryError> {
        let sql = format!(
            "UPDATE products SET likes = likes + 1 WHERE id = $1 RETURNING {PRODUCT_COLUMNS}"
        );

        let entity = sqlx::query_as::<_, ProductEntity>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(database_error)?
            .ok_or(RepositoryError::NotFound)?;

        entity.into_domain()
    }

    async fn delete(&self, id: i64) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(database_error)?;

        Ok(result.rows_affected() > 0)
    }
}
