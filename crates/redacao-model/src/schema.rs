use serde::{Deserialize, Serialize};

use crate::error::{Result, SchemaError};
use crate::table::Table;

/// Default column names per the INEP microdata dictionary.
pub const DEFAULT_MUNICIPALITY_COLUMN: &str = "NO_MUNICIPIO_PROVA";
pub const DEFAULT_STATUS_COLUMN: &str = "TP_STATUS_REDACAO";
pub const DEFAULT_ADMIN_TYPE_COLUMN: &str = "TP_DEPENDENCIA_ADM_ESC";

/// The three categorical dimensions a dataset can be filtered and
/// aggregated on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Dimension {
    Municipality,
    Status,
    AdminType,
}

impl Dimension {
    pub fn as_str(&self) -> &'static str {
        match self {
            Dimension::Municipality => "municipality",
            Dimension::Status => "status",
            Dimension::AdminType => "admin-type",
        }
    }
}

impl std::fmt::Display for Dimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Column names used to locate the dimension columns in a dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaConfig {
    pub municipality: String,
    pub status: String,
    pub admin_type: String,
}

impl Default for SchemaConfig {
    fn default() -> Self {
        Self {
            municipality: DEFAULT_MUNICIPALITY_COLUMN.to_string(),
            status: DEFAULT_STATUS_COLUMN.to_string(),
            admin_type: DEFAULT_ADMIN_TYPE_COLUMN.to_string(),
        }
    }
}

/// Dimension columns resolved to indices in one concrete `Table`.
///
/// Resolution fails fast when a configured column is absent, so the
/// filter and aggregation engines can assume valid indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DatasetSchema {
    pub municipality: usize,
    pub status: usize,
    pub admin_type: usize,
}

impl DatasetSchema {
    pub fn resolve(table: &Table, config: &SchemaConfig) -> Result<Self> {
        Ok(Self {
            municipality: resolve_column(table, &config.municipality)?,
            status: resolve_column(table, &config.status)?,
            admin_type: resolve_column(table, &config.admin_type)?,
        })
    }

    pub fn column(&self, dimension: Dimension) -> usize {
        match dimension {
            Dimension::Municipality => self.municipality,
            Dimension::Status => self.status,
            Dimension::AdminType => self.admin_type,
        }
    }
}

fn resolve_column(table: &Table, name: &str) -> Result<usize> {
    table
        .column_index(name)
        .ok_or_else(|| SchemaError::MissingColumn(name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_table() -> Table {
        Table::new(vec![
            "NU_INSCRICAO".to_string(),
            DEFAULT_MUNICIPALITY_COLUMN.to_string(),
            DEFAULT_STATUS_COLUMN.to_string(),
            DEFAULT_ADMIN_TYPE_COLUMN.to_string(),
        ])
        .unwrap()
    }

    #[test]
    fn resolves_default_columns() {
        let schema = DatasetSchema::resolve(&sample_table(), &SchemaConfig::default()).unwrap();
        assert_eq!(schema.municipality, 1);
        assert_eq!(schema.status, 2);
        assert_eq!(schema.admin_type, 3);
    }

    #[test]
    fn missing_column_fails_fast() {
        let table = Table::new(vec!["NU_INSCRICAO".to_string()]).unwrap();
        let error = DatasetSchema::resolve(&table, &SchemaConfig::default()).unwrap_err();
        assert!(matches!(error, SchemaError::MissingColumn(_)));
    }
}
