use formgen_core::error::CoreError;

/// Errors from store operations that validate their input before writing.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The input was rejected before touching the database.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The database rejected or failed the write.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}
