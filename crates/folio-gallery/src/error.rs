use thiserror::Error;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum GalleryError {
    #[error("default category {0:?} is not in the category table")]
    UnknownDefaultCategory(String),
    #[error("category table is empty")]
    NoCategories,
}

pub type Result<T> = std::result::Result<T, GalleryError>;
