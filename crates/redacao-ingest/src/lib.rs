//! Loading and exporting delimited essay result files.
//!
//! Detection stays out of the analysis core: this crate turns a file
//! on disk into a normalized [`redacao_model::Table`] and back,
//! handling the delimiter (comma/semicolon) and encoding
//! (UTF-8/Latin-1) variation across INEP microdata extracts.

pub mod csv_table;
pub mod error;
pub mod export;

pub use csv_table::{IngestOptions, LoadedCsv, read_csv_table};
pub use error::{IngestError, Result};
pub use export::{csv_bytes, write_csv_table};
