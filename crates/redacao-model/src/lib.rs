//! Data model for the ENEM essay result analysis pipeline.
//!
//! This crate holds the passive value types shared by ingest, the
//! filter/aggregation engines, and the report layer: the in-memory
//! [`Table`], the resolved [`DatasetSchema`], the immutable category
//! registries, and the [`FilterSelection`] value object.

pub mod error;
pub mod registry;
pub mod schema;
pub mod selection;
pub mod table;

pub use error::{Result, SchemaError};
pub use registry::{CategoryKind, EssayStatus, SchoolAdminType, label_of};
pub use schema::{
    DEFAULT_ADMIN_TYPE_COLUMN, DEFAULT_MUNICIPALITY_COLUMN, DEFAULT_STATUS_COLUMN, DatasetSchema,
    Dimension, SchemaConfig,
};
pub use selection::FilterSelection;
pub use table::{Table, parse_code};
