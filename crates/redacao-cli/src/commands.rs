//! Command implementations: load, filter, aggregate, print.

use anyhow::{Context, Result, anyhow};
use serde::Serialize;

use redacao_core::{Summary, count_by, count_by_pair, filter, summarize};
use redacao_ingest::{IngestOptions, LoadedCsv, read_csv_table, write_csv_table};
use redacao_model::{
    CategoryKind, DatasetSchema, Dimension, FilterSelection, SchemaConfig, Table,
};
use redacao_report::{
    display_value, render_admin_types, render_frequency, render_grid, render_status_codes,
    render_summary,
};

use crate::cli::{DatasetArgs, ExportArgs, FreqArgs, GridArgs, SummaryArgs};

/// One loaded-and-filtered dataset, the unit every subcommand works on.
pub struct Session {
    pub loaded: LoadedCsv,
    pub schema: DatasetSchema,
    pub selection: FilterSelection,
    pub filtered: Table,
}

pub fn open_session(args: &DatasetArgs) -> Result<Session> {
    let delimiter = args
        .delimiter
        .map(|ch| {
            u8::try_from(ch).map_err(|_| anyhow!("delimiter must be a single-byte character"))
        })
        .transpose()?;
    let loaded = read_csv_table(&args.csv_file, &IngestOptions { delimiter })
        .with_context(|| format!("load {}", args.csv_file.display()))?;

    let config = SchemaConfig {
        municipality: args.municipality_column.clone(),
        status: args.status_column.clone(),
        admin_type: args.admin_type_column.clone(),
    };
    let schema = DatasetSchema::resolve(&loaded.table, &config)?;
    let selection = selection_from_args(&loaded.table, &schema, args);
    let filtered = filter(&loaded.table, &schema, &selection);
    tracing::info!(
        total_rows = loaded.table.row_count(),
        filtered_rows = filtered.row_count(),
        "dataset loaded and filtered"
    );
    Ok(Session {
        loaded,
        schema,
        selection,
        filtered,
    })
}

/// Absent filter flags select every observed value, like a freshly
/// loaded dashboard with all multiselect options checked.
pub fn selection_from_args(
    table: &Table,
    schema: &DatasetSchema,
    args: &DatasetArgs,
) -> FilterSelection {
    let mut selection = FilterSelection::all_observed(table, schema);
    if !args.municipalities.is_empty() {
        selection.municipalities = args
            .municipalities
            .iter()
            .map(|name| name.trim().to_string())
            .collect();
    }
    if !args.statuses.is_empty() {
        selection.statuses = args.statuses.iter().copied().collect();
    }
    if !args.admin_types.is_empty() {
        selection.admin_types = args.admin_types.iter().copied().collect();
    }
    selection
}

pub fn dimension_kind(dimension: Dimension) -> Option<CategoryKind> {
    match dimension {
        Dimension::Municipality => None,
        Dimension::Status => Some(CategoryKind::Status),
        Dimension::AdminType => Some(CategoryKind::AdminType),
    }
}

pub fn dimension_title(dimension: Dimension) -> &'static str {
    match dimension {
        Dimension::Municipality => "Municipality",
        Dimension::Status => "Status",
        Dimension::AdminType => "Admin type",
    }
}

/// Grid domains come from the selection, not from the data, so a
/// selected-but-unobserved category still gets its zero row.
pub fn domain_of(selection: &FilterSelection, dimension: Dimension) -> Vec<String> {
    match dimension {
        Dimension::Municipality => selection.municipalities.iter().cloned().collect(),
        Dimension::Status => selection
            .statuses
            .iter()
            .map(|code| code.to_string())
            .collect(),
        Dimension::AdminType => selection
            .admin_types
            .iter()
            .map(|code| code.to_string())
            .collect(),
    }
}

#[derive(Debug, Serialize)]
pub struct CategoryEntry {
    pub value: String,
    pub label: String,
    pub count: u64,
}

#[derive(Debug, Serialize)]
pub struct FreqReport {
    pub dimension: String,
    pub total: u64,
    pub entries: Vec<CategoryEntry>,
}

pub fn freq_report(filtered: &Table, schema: &DatasetSchema, dimension: Dimension) -> FreqReport {
    let kind = dimension_kind(dimension);
    let frequency = count_by(filtered, schema.column(dimension));
    FreqReport {
        dimension: dimension.as_str().to_string(),
        total: frequency.total(),
        entries: frequency
            .entries()
            .iter()
            .map(|(value, count)| CategoryEntry {
                value: value.clone(),
                label: display_value(kind, value),
                count: *count,
            })
            .collect(),
    }
}

#[derive(Debug, Serialize)]
pub struct DimensionSummary {
    pub dimension: String,
    pub most_frequent: Option<CategoryEntry>,
    pub least_frequent: Option<CategoryEntry>,
}

#[derive(Debug, Serialize)]
pub struct SummaryReport {
    pub rows: u64,
    pub dimensions: Vec<DimensionSummary>,
}

pub fn summary_report(filtered: &Table, schema: &DatasetSchema) -> SummaryReport {
    let dimensions = [Dimension::Municipality, Dimension::Status, Dimension::AdminType]
        .into_iter()
        .map(|dimension| {
            let kind = dimension_kind(dimension);
            let summary = summarize(&count_by(filtered, schema.column(dimension)));
            let entry = |category: &redacao_core::CategoryCount| CategoryEntry {
                value: category.value.clone(),
                label: display_value(kind, &category.value),
                count: category.count,
            };
            DimensionSummary {
                dimension: dimension.as_str().to_string(),
                most_frequent: summary.most_frequent.as_ref().map(entry),
                least_frequent: summary.least_frequent.as_ref().map(entry),
            }
        })
        .collect();
    SummaryReport {
        rows: filtered.row_count() as u64,
        dimensions,
    }
}

pub fn run_summary(args: &SummaryArgs) -> Result<()> {
    let session = open_session(&args.dataset)?;
    if args.json {
        let report = summary_report(&session.filtered, &session.schema);
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }
    println!("Rows after filtering: {}", session.filtered.row_count());
    for dimension in [Dimension::Municipality, Dimension::Status, Dimension::AdminType] {
        let summary: Summary =
            summarize(&count_by(&session.filtered, session.schema.column(dimension)));
        let table = render_summary(
            &summary,
            dimension_title(dimension),
            dimension_kind(dimension),
        );
        println!("{table}");
    }
    Ok(())
}

pub fn run_freq(args: &FreqArgs) -> Result<()> {
    let session = open_session(&args.dataset)?;
    let dimension = args.dimension.to_dimension();
    if args.json {
        let report = freq_report(&session.filtered, &session.schema, dimension);
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }
    let frequency = count_by(&session.filtered, session.schema.column(dimension));
    let table = render_frequency(
        &frequency,
        dimension_title(dimension),
        dimension_kind(dimension),
    );
    println!("{table}");
    Ok(())
}

pub fn run_grid(args: &GridArgs) -> Result<()> {
    let session = open_session(&args.dataset)?;
    let dim_a = args.dim_a.to_dimension();
    let dim_b = args.dim_b.to_dimension();
    let domain_a = domain_of(&session.selection, dim_a);
    let domain_b = domain_of(&session.selection, dim_b);
    let grid = count_by_pair(
        &session.filtered,
        session.schema.column(dim_a),
        session.schema.column(dim_b),
        &domain_a,
        &domain_b,
    );
    if args.json {
        println!("{}", serde_json::to_string_pretty(&grid)?);
        return Ok(());
    }
    let table = render_grid(
        &grid,
        dimension_title(dim_a),
        dimension_kind(dim_a),
        dimension_kind(dim_b),
    );
    println!("{table}");
    Ok(())
}

pub fn run_export(args: &ExportArgs) -> Result<()> {
    let session = open_session(&args.dataset)?;
    write_csv_table(&session.filtered, &args.output, session.loaded.delimiter)
        .with_context(|| format!("write {}", args.output.display()))?;
    println!(
        "Wrote {} rows to {}",
        session.filtered.row_count(),
        args.output.display()
    );
    Ok(())
}

pub fn run_codes() -> Result<()> {
    println!("{}", render_status_codes());
    println!("{}", render_admin_types());
    Ok(())
}
