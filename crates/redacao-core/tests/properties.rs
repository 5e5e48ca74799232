//! Algebraic laws of the filter and aggregation engines.

use proptest::prelude::*;

use redacao_core::{count_by, count_by_pair, filter, summarize};
use redacao_model::{DatasetSchema, FilterSelection, SchemaConfig, Table};

static CITIES: [&str; 5] = ["Vitória", "Serra", "Vila Velha", "Cariacica", ""];
static STATUSES: [&str; 6] = ["1", "2", "4", "6", "9", ""];
static ADMINS: [&str; 5] = ["1", "2", "3", "4", ""];
static STATUS_CODES: [i64; 5] = [1, 2, 4, 6, 9];

fn build_table(rows: Vec<(String, String, String)>) -> (Table, DatasetSchema) {
    let mut table = Table::new(vec![
        "NO_MUNICIPIO_PROVA".to_string(),
        "TP_STATUS_REDACAO".to_string(),
        "TP_DEPENDENCIA_ADM_ESC".to_string(),
    ])
    .expect("unique headers");
    for (city, status, admin) in rows {
        table.push_row(vec![city, status, admin]);
    }
    let schema = DatasetSchema::resolve(&table, &SchemaConfig::default()).expect("schema");
    (table, schema)
}

fn arb_rows() -> impl Strategy<Value = Vec<(String, String, String)>> {
    prop::collection::vec(
        (
            prop::sample::select(&CITIES[..]).prop_map(String::from),
            prop::sample::select(&STATUSES[..]).prop_map(String::from),
            prop::sample::select(&ADMINS[..]).prop_map(String::from),
        ),
        0..40,
    )
}

fn arb_selection() -> impl Strategy<Value = FilterSelection> {
    (
        prop::collection::btree_set(
            prop::sample::select(&CITIES[..4]).prop_map(String::from),
            0..=4,
        ),
        prop::collection::btree_set(prop::sample::select(&STATUS_CODES[..]), 0..=5),
        prop::collection::btree_set(1i64..=4, 0..=4),
    )
        .prop_map(|(municipalities, statuses, admin_types)| FilterSelection {
            municipalities,
            statuses,
            admin_types,
        })
}

proptest! {
    #[test]
    fn filtering_is_idempotent(rows in arb_rows(), selection in arb_selection()) {
        let (table, schema) = build_table(rows);
        let once = filter(&table, &schema, &selection);
        let twice = filter(&once, &schema, &selection);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn shrinking_a_selection_never_adds_rows(
        rows in arb_rows(),
        big in arb_selection(),
        other in arb_selection(),
    ) {
        let (table, schema) = build_table(rows);
        let small = FilterSelection {
            municipalities: big
                .municipalities
                .intersection(&other.municipalities)
                .cloned()
                .collect(),
            statuses: big.statuses.intersection(&other.statuses).copied().collect(),
            admin_types: big
                .admin_types
                .intersection(&other.admin_types)
                .copied()
                .collect(),
        };
        let big_rows = filter(&table, &schema, &big).row_count();
        let small_rows = filter(&table, &schema, &small).row_count();
        prop_assert!(small_rows <= big_rows);
    }

    #[test]
    fn emptying_any_dimension_empties_the_result(
        rows in arb_rows(),
        selection in arb_selection(),
        dimension in 0usize..3,
    ) {
        let (table, schema) = build_table(rows);
        let mut emptied = selection;
        match dimension {
            0 => emptied.municipalities.clear(),
            1 => emptied.statuses.clear(),
            _ => emptied.admin_types.clear(),
        }
        prop_assert!(filter(&table, &schema, &emptied).is_empty());
    }

    #[test]
    fn grid_is_complete_over_declared_domains(
        rows in arb_rows(),
        domain_a in prop::collection::btree_set(
            prop::sample::select(&CITIES[..4]).prop_map(String::from), 0..=4),
        domain_b in prop::collection::btree_set("[1-9]", 0..=5),
    ) {
        let (table, schema) = build_table(rows);
        let domain_a: Vec<String> = domain_a.into_iter().collect();
        let domain_b: Vec<String> = domain_b.into_iter().collect();
        let grid = count_by_pair(&table, schema.municipality, schema.status, &domain_a, &domain_b);
        prop_assert_eq!(grid.cell_count(), domain_a.len() * domain_b.len());
        for a in &domain_a {
            for b in &domain_b {
                prop_assert!(grid.get(a, b).is_some());
            }
        }
    }

    #[test]
    fn summary_total_conserves_rows_without_missing_values(
        rows in prop::collection::vec(
            (
                prop::sample::select(&CITIES[..4]).prop_map(String::from),
                prop::sample::select(&STATUSES[..]).prop_map(String::from),
                prop::sample::select(&ADMINS[..]).prop_map(String::from),
            ),
            0..40,
        ),
    ) {
        // Municipality is never missing here, so counting that
        // dimension must conserve the row count.
        let (table, schema) = build_table(rows);
        let summary = summarize(&count_by(&table, schema.municipality));
        prop_assert_eq!(summary.total, table.row_count() as u64);
    }
}
