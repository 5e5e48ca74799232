use redacao_model::{DatasetSchema, FilterSelection, Table, parse_code};

/// Apply `selection` to `table`, keeping a row only when all three
/// dimension values are present and selected.
///
/// The result is a new table with the original column layout and row
/// order. Rows with a missing (or, for the coded dimensions,
/// non-integer) value match nothing. An empty selection set in any
/// dimension therefore yields an empty result rather than an error.
pub fn filter(table: &Table, schema: &DatasetSchema, selection: &FilterSelection) -> Table {
    let rows = table
        .rows
        .iter()
        .filter(|row| row_matches(row, schema, selection))
        .cloned()
        .collect();
    let filtered = Table {
        headers: table.headers.clone(),
        rows,
    };
    tracing::debug!(
        input_rows = table.row_count(),
        output_rows = filtered.row_count(),
        "applied filter selection"
    );
    filtered
}

fn row_matches(row: &[String], schema: &DatasetSchema, selection: &FilterSelection) -> bool {
    let municipality = row.get(schema.municipality).map_or("", String::as_str).trim();
    if municipality.is_empty() || !selection.municipalities.contains(municipality) {
        return false;
    }
    let Some(status) = row.get(schema.status).and_then(|cell| parse_code(cell)) else {
        return false;
    };
    if !selection.statuses.contains(&status) {
        return false;
    }
    let Some(admin) = row.get(schema.admin_type).and_then(|cell| parse_code(cell)) else {
        return false;
    };
    selection.admin_types.contains(&admin)
}

#[cfg(test)]
mod tests {
    use super::*;
    use redacao_model::SchemaConfig;

    fn sample() -> (Table, DatasetSchema) {
        let mut table = Table::new(vec![
            "NU_INSCRICAO".to_string(),
            "NO_MUNICIPIO_PROVA".to_string(),
            "TP_STATUS_REDACAO".to_string(),
            "TP_DEPENDENCIA_ADM_ESC".to_string(),
        ])
        .unwrap();
        for (id, city, status, admin) in [
            ("1001", "Vitória", "1", "2"),
            ("1002", "Serra", "4", "2"),
            ("1003", "Vitória", "6", "4"),
            ("1004", "", "1", "2"),
            ("1005", "Serra", "", "2"),
        ] {
            table.push_row(vec![
                id.to_string(),
                city.to_string(),
                status.to_string(),
                admin.to_string(),
            ]);
        }
        let schema = DatasetSchema::resolve(&table, &SchemaConfig::default()).unwrap();
        (table, schema)
    }

    #[test]
    fn keeps_only_rows_matching_all_dimensions() {
        let (table, schema) = sample();
        let selection = FilterSelection::default()
            .with_municipalities(["Vitória", "Serra"])
            .with_statuses([1, 4])
            .with_admin_types([2]);
        let filtered = filter(&table, &schema, &selection);
        assert_eq!(filtered.row_count(), 2);
        assert_eq!(filtered.cell(0, 0), "1001");
        assert_eq!(filtered.cell(1, 0), "1002");
    }

    #[test]
    fn missing_dimension_values_match_nothing() {
        let (table, schema) = sample();
        let selection = FilterSelection::all_observed(&table, &schema);
        let filtered = filter(&table, &schema, &selection);
        // 1004 has no municipality, 1005 has no status.
        assert_eq!(filtered.row_count(), 3);
    }

    #[test]
    fn empty_set_excludes_everything() {
        let (table, schema) = sample();
        let selection =
            FilterSelection::all_observed(&table, &schema).with_statuses(std::iter::empty());
        let filtered = filter(&table, &schema, &selection);
        assert!(filtered.is_empty());
        assert_eq!(filtered.headers, table.headers);
    }

    #[test]
    fn unobserved_selection_values_are_ignored() {
        let (table, schema) = sample();
        let selection = FilterSelection::all_observed(&table, &schema)
            .with_municipalities(["Vitória", "Cariacica"]);
        let filtered = filter(&table, &schema, &selection);
        assert_eq!(filtered.row_count(), 2);
    }
}
