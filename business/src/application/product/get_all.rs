use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::get_all::{GetAllProductsParams, GetAllProductsUseCase};

pub struct GetAllProductsUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetAllProductsUseCase for GetAllProductsUseCaseImpl {
    async fn execute(&self, params: GetAllProductsParams) -> Result<Vec<Product>, ProductError> {
        if params.filter.is_empty() {
            self.logger.info("Fetching all products");
        } else {
            self.logger
                .info(&format!("Fetching products matching {:?}", params.filter));
        }

        let products = self.repository.find(&params.filter).await?;

        self.logger
            .info(&format!("Found {} products", products.len()));
        Ok(products)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::product::model::ProductFields;
    use crate::domain::product::value_objects::{ProductFilter, ProductStatus};
    use mockall::mock;

    mock! {
        pub ProductRepo {}

        #[async_trait]
        impl ProductRepository for ProductRepo {
            async fn find(&self, filter: &ProductFilter) -> Result<Vec<Product>, RepositoryError>;
            async fn get_by_id(&self, id: i64) -> Result<Product, RepositoryError>;
            async fn create(&self, fields: &ProductFields) -> Result<Product, RepositoryError>;
            async fn update(&self, id: i64, fields: &ProductFields) -> Result<Product, RepositoryError>;
            async fn increment_likes(&self, id: i64) -> Result<Product, RepositoryError>;
            async fn delete(&self, id: i64) -> Result<bool, RepositoryError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn product(id: i64, category: &str) -> Product {
        Product::from_repository(
            id,
            ProductFields {
                name: "Notebook".to_string(),
                description: "A5 dotted".to_string(),
                price: 12.5,
                rating: 4.0,
                img_url: "https://example.com/notebook.png".to_string(),
                category: category.to_string(),
                status: ProductStatus::Active,
            },
            0,
        )
    }

    #[tokio::test]
    async fn should_return_all_products_when_no_filter() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_find()
            .withf(|filter| filter.is_empty())
            .returning(|_| Ok(vec![product(1, "stationery"), product(2, "office")]));

        let use_case = GetAllProductsUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let products = use_case
            .execute(GetAllProductsParams {
                filter: ProductFilter::default(),
            })
            .await
            .unwrap();

        assert_eq!(products.len(), 2);
    }

    #[tokio::test]
    async fn should_pass_filter_to_repository() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_find()
            .withf(|filter| filter.category.as_deref() == Some("office") && filter.name.is_none())
            .times(1)
            .returning(|_| Ok(vec![product(2, "office")]));

        let use_case = GetAllProductsUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let products = use_case
            .execute(GetAllProductsParams {
                filter: ProductFilter {
                    category: Some("office".to_string()),
                    ..Default::default()
                },
            })
            .await
            .unwrap();

        assert_eq!(products.len(), 1);
        assert_eq!(products[0].category, "office");
    }

    #[tokio::test]
    async fn should_return_empty_list_when_store_is_empty() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_find().returning(|_| Ok(vec![]));

        let use_case = GetAllProductsUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let products = use_case
            .execute(GetAllProductsParams {
                filter: ProductFilter::default(),
            })
            .await
            .unwrap();

        assert!(products.is_empty());
    }
}
