use thiserror::Error;

/// Errors raised while loading a catalog or a category table.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CatalogError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("duplicate project id: {0}")]
    DuplicateId(String),
    #[error("project {id:?} has an empty {field}")]
    EmptyField { id: String, field: &'static str },
    #[error("duplicate category token: {0}")]
    DuplicateCategory(String),
    #[error("category token must not be empty")]
    EmptyCategory,
}

pub type Result<T> = std::result::Result<T, CatalogError>;
