use crate::domain::errors::RepositoryError;

/// Product errors. Validation and lookup messages are returned verbatim
/// to API clients.
#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    #[error("Invalid product: name must not be empty")]
    NameEmpty,
    #[error("Invalid product: category must be at most {0} characters")]
    CategoryTooLong(usize),
    #[error("Invalid product: price must be a non-negative number")]
    InvalidPrice,
    #[error("Invalid product: rating must be a finite number")]
    InvalidRating,
    #[error("Product with id '{0}' was not found.")]
    NotFound(i64),
    #[error("repository.persistence")]
    Repository(#[from] RepositoryError),
}

impl ProductError {
    /// Maps a repository lookup failure for `id`, turning `NotFound` into
    /// the product-level variant that carries the id.
    pub fn from_lookup(id: i64, error: RepositoryError) -> Self {
        match error {
            RepositoryError::NotFound => ProductError::NotFound(id),
            other => ProductError::Repository(other),
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            ProductError::NameEmpty
                | ProductError::CategoryTooLong(_)
                | ProductError::InvalidPrice
                | ProductError::InvalidRating
        )
    }
}
