use std::collections::BTreeMap;
use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use redacao_model::Table;

/// One-dimensional frequency table, ordered by descending count.
///
/// Ties keep ascending value order: counting goes through a
/// `BTreeMap` and the descending sort is stable, so equal counts stay
/// in key order. "Most frequent" and "least frequent" are therefore
/// deterministic regardless of input row order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrequencyTable {
    entries: Vec<(String, u64)>,
}

impl FrequencyTable {
    pub fn entries(&self) -> &[(String, u64)] {
        &self.entries
    }

    pub fn get(&self, value: &str) -> u64 {
        self.entries
            .iter()
            .find(|(entry, _)| entry == value)
            .map_or(0, |(_, count)| *count)
    }

    pub fn total(&self) -> u64 {
        self.entries.iter().map(|(_, count)| count).sum()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Count occurrences of each value in `column` across `table`.
///
/// Missing cells are dropped, not counted as a category of their own.
/// An empty table yields an empty frequency table.
pub fn count_by(table: &Table, column: usize) -> FrequencyTable {
    let mut counts: BTreeMap<String, u64> = BTreeMap::new();
    for row in &table.rows {
        let value = row.get(column).map_or("", String::as_str).trim();
        if value.is_empty() {
            continue;
        }
        *counts.entry(value.to_string()).or_insert(0) += 1;
    }
    let mut entries: Vec<(String, u64)> = counts.into_iter().collect();
    // Stable: ties keep the BTreeMap's ascending value order.
    entries.sort_by(|a, b| b.1.cmp(&a.1));
    FrequencyTable { entries }
}

/// Distinct non-missing values of `column` in first-occurrence order.
pub fn observed_values(table: &Table, column: usize) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for row in &table.rows {
        let value = row.get(column).map_or("", String::as_str).trim();
        if value.is_empty() || seen.iter().any(|known| known == value) {
            continue;
        }
        seen.push(value.to_string());
    }
    seen
}

/// Two-dimensional frequency grid over declared domains.
///
/// The grid always covers the full Cartesian product of the two
/// domains, zero-filled where no row matches, so chart axes stay
/// complete when a filter empties a category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrequencyGrid {
    row_domain: Vec<String>,
    column_domain: Vec<String>,
    counts: Vec<Vec<u64>>,
}

impl FrequencyGrid {
    pub fn row_domain(&self) -> &[String] {
        &self.row_domain
    }

    pub fn column_domain(&self) -> &[String] {
        &self.column_domain
    }

    pub fn get(&self, row_value: &str, column_value: &str) -> Option<u64> {
        let row = self.row_domain.iter().position(|value| value == row_value)?;
        let column = self
            .column_domain
            .iter()
            .position(|value| value == column_value)?;
        Some(self.counts[row][column])
    }

    /// Counts for one row of the grid, aligned with `column_domain`.
    pub fn row(&self, row_value: &str) -> Option<&[u64]> {
        let row = self.row_domain.iter().position(|value| value == row_value)?;
        Some(&self.counts[row])
    }

    pub fn cell_count(&self) -> usize {
        self.row_domain.len() * self.column_domain.len()
    }

    pub fn total(&self) -> u64 {
        self.counts.iter().flatten().sum()
    }
}

/// Count rows grouped by the pair `(column_a, column_b)` over the full
/// `domain_a` x `domain_b` grid.
///
/// Values observed in the data but absent from a declared domain are
/// ignored; duplicate domain entries are dropped after the first.
pub fn count_by_pair(
    table: &Table,
    column_a: usize,
    column_b: usize,
    domain_a: &[String],
    domain_b: &[String],
) -> FrequencyGrid {
    let row_domain = dedupe(domain_a);
    let column_domain = dedupe(domain_b);
    let row_index: HashMap<&str, usize> = row_domain
        .iter()
        .enumerate()
        .map(|(idx, value)| (value.as_str(), idx))
        .collect();
    let column_index: HashMap<&str, usize> = column_domain
        .iter()
        .enumerate()
        .map(|(idx, value)| (value.as_str(), idx))
        .collect();

    let mut counts = vec![vec![0u64; column_domain.len()]; row_domain.len()];
    for row in &table.rows {
        let a = row.get(column_a).map_or("", String::as_str).trim();
        let b = row.get(column_b).map_or("", String::as_str).trim();
        let (Some(&row_idx), Some(&column_idx)) = (row_index.get(a), column_index.get(b)) else {
            continue;
        };
        counts[row_idx][column_idx] += 1;
    }
    FrequencyGrid {
        row_domain,
        column_domain,
        counts,
    }
}

fn dedupe(domain: &[String]) -> Vec<String> {
    let mut unique: Vec<String> = Vec::with_capacity(domain.len());
    for value in domain {
        if !unique.iter().any(|known| known == value) {
            unique.push(value.clone());
        }
    }
    unique
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table_with(values: &[(&str, &str)]) -> Table {
        let mut table = Table::new(vec!["CITY".to_string(), "STATUS".to_string()]).unwrap();
        for (city, status) in values {
            table.push_row(vec![(*city).to_string(), (*status).to_string()]);
        }
        table
    }

    #[test]
    fn count_by_sorts_descending_with_stable_ties() {
        let table = table_with(&[("B", "1"), ("A", "1"), ("A", "1"), ("C", "1"), ("B", "1")]);
        let freq = count_by(&table, 0);
        // A and B tie at 2; ascending value order breaks the tie.
        assert_eq!(
            freq.entries(),
            &[
                ("A".to_string(), 2),
                ("B".to_string(), 2),
                ("C".to_string(), 1)
            ]
        );
    }

    #[test]
    fn count_by_drops_missing_values() {
        let table = table_with(&[("A", "1"), ("", "1"), ("A", "")]);
        let freq = count_by(&table, 0);
        assert_eq!(freq.entries(), &[("A".to_string(), 2)]);
        assert_eq!(freq.get("A"), 2);
        assert_eq!(freq.get(""), 0);
    }

    #[test]
    fn count_by_on_empty_table_is_empty() {
        let table = Table::new(vec!["CITY".to_string()]).unwrap();
        assert!(count_by(&table, 0).is_empty());
    }

    #[test]
    fn observed_values_preserve_first_occurrence_order() {
        let table = table_with(&[("B", "1"), ("A", "1"), ("B", "1"), ("", "1")]);
        assert_eq!(observed_values(&table, 0), vec!["B", "A"]);
    }

    #[test]
    fn grid_covers_full_domain_with_zero_fill() {
        let table = table_with(&[("A", "1"), ("A", "4"), ("B", "1")]);
        let domain_a: Vec<String> = ["A", "B", "C"].map(String::from).to_vec();
        let domain_b: Vec<String> = ["1", "4"].map(String::from).to_vec();
        let grid = count_by_pair(&table, 0, 1, &domain_a, &domain_b);
        assert_eq!(grid.cell_count(), 6);
        assert_eq!(grid.get("A", "1"), Some(1));
        assert_eq!(grid.get("A", "4"), Some(1));
        assert_eq!(grid.get("B", "4"), Some(0));
        assert_eq!(grid.get("C", "1"), Some(0));
        assert_eq!(grid.get("C", "4"), Some(0));
        assert_eq!(grid.total(), 3);
    }

    #[test]
    fn grid_ignores_values_outside_declared_domains() {
        let table = table_with(&[("A", "1"), ("Z", "1"), ("A", "9")]);
        let domain_a = vec!["A".to_string()];
        let domain_b = vec!["1".to_string()];
        let grid = count_by_pair(&table, 0, 1, &domain_a, &domain_b);
        assert_eq!(grid.total(), 1);
    }
}
