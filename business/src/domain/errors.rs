/// Errors raised by repository adapters.
/// Display strings are code-style identifiers, not user-facing text.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("repository.not_found")]
    NotFound,
    #[error("repository.database_error")]
    DatabaseError,
    #[error("repository.corrupted_row")]
    CorruptedRow,
}
