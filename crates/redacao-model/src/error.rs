use thiserror::Error;

/// Errors raised while binding a dataset to the expected column layout.
#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("column `{0}` not found in dataset")]
    MissingColumn(String),
    #[error("duplicate column `{0}` in dataset")]
    DuplicateColumn(String),
}

pub type Result<T> = std::result::Result<T, SchemaError>;
