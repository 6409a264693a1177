use thiserror::Error;

#[derive(Error, Debug)]
pub enum CartError {
    #[error("Category not found: {0}")]
    MissingCategory(String),

    #[error("Item not found: {name} (category: {category})")]
    MissingItem { name: String, category: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Cart file is not valid JSON: {0}")]
    CorruptStore(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CartError>;
