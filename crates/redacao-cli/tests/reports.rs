//! Machine-readable report output stays stable for downstream consumers.

use redacao_cli::commands::{freq_report, summary_report};
use redacao_model::{DatasetSchema, Dimension, SchemaConfig, Table};

fn sample() -> (Table, DatasetSchema) {
    let mut table = Table::new(vec![
        "NO_MUNICIPIO_PROVA".to_string(),
        "TP_STATUS_REDACAO".to_string(),
        "TP_DEPENDENCIA_ADM_ESC".to_string(),
    ])
    .unwrap();
    let rows = [
        ("A", "1", "1"),
        ("A", "1", "2"),
        ("A", "1", "1"),
        ("B", "1", "2"),
        ("B", "1", "1"),
        ("B", "1", "2"),
        ("A", "4", "1"),
        ("A", "4", "2"),
        ("B", "4", "1"),
        ("B", "4", "2"),
    ];
    for (city, status, admin) in rows {
        table.push_row(vec![city.to_string(), status.to_string(), admin.to_string()]);
    }
    let schema = DatasetSchema::resolve(&table, &SchemaConfig::default()).unwrap();
    (table, schema)
}

#[test]
fn status_frequency_json_is_stable() {
    let (table, schema) = sample();
    let report = freq_report(&table, &schema, Dimension::Status);
    let json = serde_json::to_string_pretty(&report).unwrap();
    insta::assert_snapshot!("status_frequency_json", json);
}

#[test]
fn summary_json_is_stable() {
    let (table, schema) = sample();
    let report = summary_report(&table, &schema);
    let json = serde_json::to_string_pretty(&report).unwrap();
    insta::assert_snapshot!("summary_json", json);
}
