use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::schema::DatasetSchema;
use crate::table::{Table, parse_code};

/// Allowed values per filter dimension.
///
/// An empty set excludes every row in that dimension; it is not a
/// wildcard. This mirrors an empty multiselect in the dashboards the
/// pipeline feeds, where deselecting everything shows zero matches.
/// Use [`FilterSelection::all_observed`] for the "everything selected"
/// initial state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSelection {
    pub municipalities: BTreeSet<String>,
    pub statuses: BTreeSet<i64>,
    pub admin_types: BTreeSet<i64>,
}

impl FilterSelection {
    /// Selection covering every value observed in `table`, the state a
    /// freshly loaded dashboard starts from.
    pub fn all_observed(table: &Table, schema: &DatasetSchema) -> Self {
        let mut selection = Self::default();
        for row in &table.rows {
            if let Some(name) = row.get(schema.municipality) {
                let name = name.trim();
                if !name.is_empty() && !selection.municipalities.contains(name) {
                    selection.municipalities.insert(name.to_string());
                }
            }
            if let Some(code) = row.get(schema.status).and_then(|cell| parse_code(cell)) {
                selection.statuses.insert(code);
            }
            if let Some(code) = row.get(schema.admin_type).and_then(|cell| parse_code(cell)) {
                selection.admin_types.insert(code);
            }
        }
        selection
    }

    pub fn with_municipalities<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.municipalities = names.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_statuses(mut self, codes: impl IntoIterator<Item = i64>) -> Self {
        self.statuses = codes.into_iter().collect();
        self
    }

    pub fn with_admin_types(mut self, codes: impl IntoIterator<Item = i64>) -> Self {
        self.admin_types = codes.into_iter().collect();
        self
    }
}
